// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::DataError;
use std::borrow::Cow;
use thiserror::Error;

/// Enumeration of different error types raised by this crate.
#[derive(Debug, Error)]
pub enum MyError {
    /// Language registry, encoding and decoding errors.
    #[error("General data error: {0}")]
    Data(
        #[doc(hidden)]
        #[from]
        DataError,
    ),

    /// DB pool/connection error.
    #[error("DB error: {0}")]
    DB(
        #[doc(hidden)]
        #[from]
        sqlx::Error,
    ),

    /// Unexpected runtime error.
    #[error("{0}")]
    Runtime(#[doc(hidden)] Cow<'static, str>),
}
