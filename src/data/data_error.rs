// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use thiserror::Error;

/// Enumeration of different error types raised by methods in the data module.
#[derive(Debug, Error)]
pub enum DataError {
    /// A language code that is not part of the registry.
    #[error("Unknown language: '{0}'")]
    UnknownLanguage(#[doc(hidden)] Cow<'static, str>),

    /// JSON text that does not decode to a string-to-string object.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(
        #[doc(hidden)]
        #[from]
        serde_json::Error,
    ),

    /// A stored scalar representation that is neither absent, text nor bytes.
    #[error("Unsupported scalar type: {0}")]
    UnsupportedScalarType(#[doc(hidden)] Cow<'static, str>),
}
