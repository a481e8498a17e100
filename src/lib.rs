// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//!
//! This crate models a _translatable string_: a value that may hold a
//! distinct rendering per language, a small registry of the languages it
//! knows about, and a deterministic rule for picking a rendering when the
//! caller's preferred language is not available.
//!
//! It consists of two modules: (a) a data layer that defines the registry of
//! [Language]s, the per-language [Content] container, the fallback [Chain]
//! and the [Scalar] codec used to store them in text columns, and (b) a
//! storage layer that persists those scalars in a SQLite table.
//!
//! # Third-party crates
//!
//! 1. Deserialization and Serialization:
//!     * [serde][1]: for the basic serialization + deserialization capabilities.
//!     * [serde_json][2]: for the JSON format bindings.
//!
//! 2. Case Insensitive Strings:
//!     * [unicase][3]: for matching language codes when case is not important
//!       (using Unicode Case-folding).
//!
//! 3. Storage:
//!     * [sqlx][4]: for the SQLite connection pool and raw column access.
//!     * [dotenvy][5]: for reading the store configuration from the
//!       environment and `.env` files.
//!
//! # Example
//!
//! ```rust
//! # use langs::{Chain, Content, Language, MyError};
//! # fn main() -> Result<(), MyError> {
//! let mut title = Content::new();
//! title.set(Language::ES, "Hola");
//! title.set(Language::EN, "Hello");
//!
//! let chain = Chain::new([Language::EN, Language::ES]);
//! assert_eq!(title.resolve(&chain, "es"), "Hola");
//! assert_eq!(title.resolve(&chain, "pt"), "Hello");
//! assert_eq!(title.to_json()?, r#"{"en":"Hello","es":"Hola"}"#);
//! #   Ok(())
//! # }
//! ```
//!
//! [1]: https://crates.io/crates/serde
//! [2]: https://crates.io/crates/serde_json
//! [3]: https://crates.io/crates/unicase
//! [4]: https://crates.io/crates/sqlx
//! [5]: https://crates.io/crates/dotenvy
//!

mod config;
mod data;
pub mod db;
mod error;

pub use config::*;
pub use data::*;
pub use error::MyError;

/// Log `$err` at level _error_ before returning it.
#[macro_export]
macro_rules! emit_error {
    ( $err: expr ) => {{
        let err = $err;
        tracing::error!("{}", err);
        return Err(err);
    }};
}

/// Generate a message (in the style of `format!` macro), log it at level
/// _error_ and raise a [runtime error][crate::MyError#variant.Runtime].
#[macro_export]
macro_rules! runtime_error {
    ( $( $arg: tt )* ) => {
        {
            let msg = std::fmt::format(core::format_args!($($arg)*));
            tracing::error!("{}", msg);
            return Err($crate::MyError::Runtime(msg.into()));
        }
    }
}
