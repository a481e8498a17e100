// SPDX-License-Identifier: GPL-3.0-or-later

use crate::data::{DataError, Language};
use core::fmt;
use std::str::FromStr;

/// An ordered list of language codes to consult when a [Content][1] does not
/// hold a value in the requested language.
///
/// A [Chain] is supplied by the caller --different contexts (a Web request,
/// a batch job) may prefer different default languages-- and holds no
/// reference to any [Content][1].
///
/// [1]: crate::Content
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Chain {
    fallbacks: Vec<String>,
}

impl Chain {
    /// Create a [Chain] consulting `codes` in the given order.
    ///
    /// Codes are used verbatim and are not checked against the registry; use
    /// [parse][Chain::parse] for that.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Chain {
            fallbacks: codes.into_iter().map(|x| x.as_ref().to_owned()).collect(),
        }
    }

    /// Parse a comma separated list of language codes; e.g. `"en, es"`.
    /// Blank entries are ignored and every retained code is replaced by the
    /// canonical code of the matching registered [Language].
    ///
    /// Raise [UnknownLanguage][DataError#variant.UnknownLanguage] for the
    /// first entry that is not a registered language.
    pub fn parse(s: &str) -> Result<Self, DataError> {
        let mut fallbacks = vec![];
        for code in s.split(',').map(str::trim).filter(|x| !x.is_empty()) {
            fallbacks.push(Language::parse(code)?.code().to_owned());
        }
        Ok(Chain { fallbacks })
    }

    /// Return the codes of this chain in priority order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.fallbacks.iter().map(String::as_str)
    }

    /// Return the number of codes in this chain.
    pub fn len(&self) -> usize {
        self.fallbacks.len()
    }

    /// Return TRUE if this chain has no codes; FALSE otherwise.
    pub fn is_empty(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

impl FromStr for Chain {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::parse(s)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fallbacks.join(","))
    }
}
