// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::DataError;
use core::fmt;

/// The raw representation of a single value as handed to, or read back
/// from, a generic column / key-value store.
///
/// Only [Null][ScalarValue::Null], [Text][ScalarValue::Text] and
/// [Bytes][ScalarValue::Bytes] are meaningful to the types of this crate.
/// The other variants exist because a store may return them, and decoding
/// them is reported as an
/// [UnsupportedScalarType][DataError#variant.UnsupportedScalarType] error.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ScalarValue {
    /// Absent value; e.g. SQL `NULL`.
    #[default]
    Null,
    /// UTF-8 text.
    Text(String),
    /// Raw byte sequence.
    Bytes(Vec<u8>),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point number.
    Real(f64),
    /// Boolean.
    Boolean(bool),
}

impl ScalarValue {
    /// Return the name of this representation's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Null => "null",
            ScalarValue::Text(_) => "text",
            ScalarValue::Bytes(_) => "bytes",
            ScalarValue::Integer(_) => "integer",
            ScalarValue::Real(_) => "real",
            ScalarValue::Boolean(_) => "boolean",
        }
    }

    /// Return TRUE if this is the [Null][ScalarValue::Null] variant.
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "NULL"),
            ScalarValue::Text(x) => write!(f, "'{}'", x),
            ScalarValue::Bytes(x) => write!(f, "<{} bytes>", x.len()),
            ScalarValue::Integer(x) => write!(f, "{}", x),
            ScalarValue::Real(x) => write!(f, "{}", x),
            ScalarValue::Boolean(x) => write!(f, "{}", x),
        }
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_owned())
    }
}

impl From<Vec<u8>> for ScalarValue {
    fn from(value: Vec<u8>) -> Self {
        ScalarValue::Bytes(value)
    }
}

impl From<&[u8]> for ScalarValue {
    fn from(value: &[u8]) -> Self {
        ScalarValue::Bytes(value.to_vec())
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Real(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => x.into(),
            None => ScalarValue::Null,
        }
    }
}

/// Trait implemented by types that can be stored in, and restored from, a
/// single column of a generic store.
///
/// This is the only capability the [db][crate::db] layer relies on.
pub trait Scalar {
    /// Encode `self` as a [ScalarValue] suitable for writing to a store.
    ///
    /// Raise [DataError] if the encoding fails.
    fn to_scalar(&self) -> Result<ScalarValue, DataError>;

    /// Decode `value`, as read back from a store, into `self`.
    ///
    /// Raise [DataError] if `value` cannot be decoded.
    fn scan(&mut self, value: ScalarValue) -> Result<(), DataError>;
}
