// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

mod chain;
mod content;
mod data_error;
mod language;
mod scalar;

pub use chain::*;
pub use content::*;
pub use data_error::DataError;
pub use language::*;
pub use scalar::*;
