// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    data::{is_valid, Chain, DataError, Scalar, ScalarValue},
    emit_error,
};
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{btree_map::Iter, BTreeMap};
use tracing::{debug, trace};

/// A translatable string: a dictionary of values keyed by language code.
///
/// A code is present iff its value is non-empty; setting a value to the
/// empty string removes the code. Codes are not checked against the
/// registry unless the instance is built w/ [parse][Content::parse].
///
/// Entries are kept ordered by code. That order is what the structured
/// (JSON) and scalar encodings emit, and what [resolve][Content::resolve]
/// falls back to when neither the requested code nor any of the fallbacks
/// is present.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Content(BTreeMap<String, String>);

/// The empty [Content] singleton.
pub const EMPTY_CONTENT: Content = Content(BTreeMap::new());

impl Content {
    /// Create an empty [Content] instance.
    pub fn new() -> Self {
        Content(BTreeMap::new())
    }

    /// Create a [Content] holding a single `value` for `code`.
    pub fn single(code: impl AsRef<str>, value: impl Into<String>) -> Self {
        let mut result = Content::new();
        result.set(code, value);
        result
    }

    /// Create a [Content] adopting every entry of `values` as is, empty
    /// strings included.
    pub fn from_map<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Content(
            values
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_owned(), v.into()))
                .collect(),
        )
    }

    /// Create a [Content] from `values` after checking that every key is a
    /// registered language code. Entries w/ empty values are dropped.
    ///
    /// Raise [UnknownLanguage][DataError#variant.UnknownLanguage] naming the
    /// first invalid key encountered.
    pub fn parse<I, K, V>(values: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut result = Content::new();
        for (k, v) in values {
            let code = k.as_ref();
            if !is_valid(code) {
                emit_error!(DataError::UnknownLanguage(code.to_owned().into()))
            }
            result.set(code, v);
        }
        Ok(result)
    }

    /// Decode the structured (JSON) encoding of a [Content]. A JSON `null`
    /// decodes to an empty instance.
    ///
    /// Raise [MalformedEncoding][DataError#variant.MalformedEncoding] if
    /// `json` is not an object of string-to-string pairs.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        match serde_json::from_str(json) {
            Ok(x) => Ok(x),
            Err(x) => emit_error!(DataError::MalformedEncoding(x)),
        }
    }

    /// Return the structured (JSON) encoding of this.
    pub fn to_json(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Set the `value` for `code`. An empty `value` removes `code`.
    pub fn set(&mut self, code: impl AsRef<str>, value: impl Into<String>) {
        let code = code.as_ref();
        let value = value.into();
        if value.is_empty() {
            self.0.remove(code);
        } else {
            self.0.insert(code.to_owned(), value);
        }
    }

    /// Return the value for `code` or the empty string if there is none.
    pub fn get(&self, code: impl AsRef<str>) -> &str {
        self.0.get(code.as_ref()).map_or("", String::as_str)
    }

    /// Return TRUE if this holds a value for `code`; FALSE otherwise.
    pub fn contains(&self, code: impl AsRef<str>) -> bool {
        self.0.contains_key(code.as_ref())
    }

    /// Return TRUE if this holds no value in any language.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the number of languages this holds a value for.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Remove the value for `code` if there is one.
    pub fn clear(&mut self, code: impl AsRef<str>) {
        self.0.remove(code.as_ref());
    }

    /// Remove every value, releasing the entries.
    pub fn clear_all(&mut self) {
        self.0 = BTreeMap::new();
    }

    /// Return the "best available" value for `code`:
    ///
    /// 1. the empty string if this is empty, otherwise
    /// 2. the value for `code` if there is one, otherwise
    /// 3. the value for the first code of `chain`, in the caller's order,
    ///    that is present, otherwise
    /// 4. the value of the entry w/ the lowest code.
    ///
    /// Callers must not rely on which entry step 4 picks; it only guarantees
    /// that a non-empty instance never resolves to the empty string. Use
    /// [get][Content::get] when an exact match matters.
    pub fn resolve(&self, chain: &Chain, code: impl AsRef<str>) -> &str {
        let code = code.as_ref();
        if self.is_empty() {
            return "";
        }

        if let Some(x) = self.0.get(code) {
            return x.as_str();
        }

        for fallback in chain.codes() {
            if let Some(x) = self.0.get(fallback) {
                trace!("'{}' resolved w/ fallback '{}'", code, fallback);
                return x.as_str();
            }
        }

        // no match; pick the first entry rather than nothing at all...
        match self.0.iter().next() {
            Some((k, v)) => {
                debug!("'{}' resolved w/ arbitrary '{}'", code, k);
                v.as_str()
            }
            None => "",
        }
    }

    /// Return an iterator over the (code, value) entries ordered by code.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    /// Return an iterator over the codes this holds a value for.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Return an owned copy of the entries of this.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.0.clone()
    }

    /// Merge `other` into this. Values in `other` replace those sharing the
    /// same code here, while empty values in `other` remove that code.
    pub fn extend(&mut self, other: Content) {
        for (k, v) in other.0 {
            self.set(k, v);
        }
    }

    /// Replace the entries of this w/ those decoded from `json` bytes.
    fn replace_from_slice(&mut self, json: &[u8]) -> Result<(), DataError> {
        match serde_json::from_slice::<Content>(json) {
            Ok(x) => {
                *self = x;
                Ok(())
            }
            Err(x) => emit_error!(DataError::MalformedEncoding(x)),
        }
    }
}

impl<'a> IntoIterator for &'a Content {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<BTreeMap<String, String>> for Content {
    fn from(value: BTreeMap<String, String>) -> Self {
        Content(value)
    }
}

impl From<Content> for BTreeMap<String, String> {
    fn from(value: Content) -> Self {
        value.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}

impl Serialize for Content {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(ser)
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(des: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Option::<BTreeMap<String, String>>::deserialize(des)?;
        Ok(Content(map.unwrap_or_default()))
    }
}

impl Scalar for Content {
    /// Return the JSON encoding of this as [Text][ScalarValue::Text].
    fn to_scalar(&self) -> Result<ScalarValue, DataError> {
        Ok(ScalarValue::Text(self.to_json()?))
    }

    /// Decode a JSON object held as text or bytes. The decoded entries
    /// replace those of this rather than merging w/ them. A `NULL` leaves
    /// this untouched.
    fn scan(&mut self, value: ScalarValue) -> Result<(), DataError> {
        match value {
            ScalarValue::Null => Ok(()),
            ScalarValue::Bytes(x) => self.replace_from_slice(&x),
            ScalarValue::Text(x) => self.replace_from_slice(x.as_bytes()),
            x => emit_error!(DataError::UnsupportedScalarType(x.type_name().into())),
        }
    }
}
