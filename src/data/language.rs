// SPDX-License-Identifier: GPL-3.0-or-later

//! The closed registry of languages known to this crate.

use crate::{
    data::{DataError, Scalar, ScalarValue},
    emit_error,
};
use core::fmt;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::str::{self, FromStr};
use tracing::debug;
use unicase::UniCase;

/// A registered language: its canonical `code`, the name of the language
/// written in that language, and the `group` (base language) it belongs to.
///
/// Regional variants share the `group` of their base language; e.g. both
/// [Language::EN_GB] and [Language::EN_US] belong to the `en` group.
///
/// Instances are only ever produced from the static registry. The
/// [Default] value is the [Language::EMPTY] sentinel which stands for
/// "no language selected".
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Language {
    code: &'static str,
    native_name: &'static str,
    group: &'static str,
}

impl Language {
    /// The "no language selected" sentinel.
    pub const EMPTY: Language = Language::new("", "", "");

    /// Catalan.
    pub const CA: Language = Language::new("ca", "Català", "ca");
    /// German.
    pub const DE: Language = Language::new("de", "Deutsch", "de");
    /// English.
    pub const EN: Language = Language::new("en", "English", "en");
    /// English as spoken in the United Kingdom.
    pub const EN_GB: Language = Language::new("en-GB", "English (United Kingdom)", "en");
    /// English as spoken in the United States.
    pub const EN_US: Language = Language::new("en-US", "English (United States)", "en");
    /// Spanish.
    pub const ES: Language = Language::new("es", "Español", "es");
    /// Spanish as spoken in Mexico.
    pub const ES_MX: Language = Language::new("es-MX", "Español (México)", "es");
    /// Basque.
    pub const EU: Language = Language::new("eu", "Euskera", "eu");
    /// French.
    pub const FR: Language = Language::new("fr", "Français", "fr");
    /// French as spoken in Canada.
    pub const FR_CA: Language = Language::new("fr-CA", "Français (Canada)", "fr");
    /// Italian.
    pub const IT: Language = Language::new("it", "Italiano", "it");
    /// Japanese.
    pub const JA: Language = Language::new("ja", "日本語", "ja");
    /// Portuguese.
    pub const PT: Language = Language::new("pt", "Português", "pt");
    /// Portuguese as spoken in Brazil.
    pub const PT_BR: Language = Language::new("pt-BR", "Português (Brasil)", "pt");
    /// Portuguese as spoken in Portugal.
    pub const PT_PT: Language = Language::new("pt-PT", "Português (Portugal)", "pt");
    /// Russian.
    pub const RU: Language = Language::new("ru", "русский", "ru");

    const fn new(code: &'static str, native_name: &'static str, group: &'static str) -> Self {
        Language {
            code,
            native_name,
            group,
        }
    }

    /// Return every registered language in declaration order.
    pub fn all() -> &'static [Language] {
        LANGUAGES
    }

    /// Find the registered language whose code matches `code` ignoring case.
    ///
    /// Raise [UnknownLanguage][DataError#variant.UnknownLanguage] if there
    /// is no such language.
    pub fn parse(code: &str) -> Result<Self, DataError> {
        match lookup(code) {
            Some(x) => Ok(x),
            None => emit_error!(DataError::UnknownLanguage(code.to_owned().into())),
        }
    }

    /// Best-effort counterpart of [parse][Language::parse]: replace `self`
    /// w/ the registered language matching `code` if there is one, leave it
    /// untouched otherwise.
    ///
    /// Return TRUE if `self` was replaced; FALSE otherwise.
    pub fn try_decode(&mut self, code: &str) -> bool {
        match lookup(code) {
            Some(x) => {
                *self = x;
                true
            }
            None => {
                debug!("Ignoring unknown language '{}'", code);
                false
            }
        }
    }

    /// Return the canonical code of this language; e.g. `en-GB`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Return the name of this language written in that same language.
    pub fn native_name(&self) -> &'static str {
        self.native_name
    }

    /// Return the code of the base language this one belongs to.
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// Return TRUE if this is the [Language::EMPTY] sentinel.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Return every registered language sharing this one's group, incl.
    /// itself.
    pub fn variants(&self) -> Vec<Language> {
        if self.is_empty() {
            return vec![];
        }
        LANGUAGES
            .iter()
            .filter(|x| x.group == self.group)
            .copied()
            .collect()
    }
}

static LANGUAGES: &[Language] = &[
    Language::CA,
    Language::DE,
    Language::EN,
    Language::EN_GB,
    Language::EN_US,
    Language::ES,
    Language::ES_MX,
    Language::EU,
    Language::FR,
    Language::FR_CA,
    Language::IT,
    Language::JA,
    Language::PT,
    Language::PT_BR,
    Language::PT_PT,
    Language::RU,
];

fn lookup(code: &str) -> Option<Language> {
    let wanted = UniCase::new(code);
    LANGUAGES
        .iter()
        .find(|x| UniCase::new(x.code) == wanted)
        .copied()
}

/// Return TRUE if `code` matches, ignoring case, the code of a registered
/// [Language]; FALSE otherwise.
pub fn is_valid(code: &str) -> bool {
    lookup(code).is_some()
}

/// Return the native name of the registered language w/ the given `code`.
///
/// Raise [UnknownLanguage][DataError#variant.UnknownLanguage] if `code` is
/// not registered.
pub fn native_name(code: &str) -> Result<&'static str, DataError> {
    Ok(Language::parse(code)?.native_name)
}

/// Return the group of the registered language w/ the given `code`.
///
/// Raise [UnknownLanguage][DataError#variant.UnknownLanguage] if `code` is
/// not registered.
pub fn group(code: &str) -> Result<&'static str, DataError> {
    Ok(Language::parse(code)?.group)
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.code
    }
}

impl PartialEq<str> for Language {
    fn eq(&self, other: &str) -> bool {
        UniCase::new(self.code) == UniCase::new(other)
    }
}

impl PartialEq<&str> for Language {
    fn eq(&self, other: &&str) -> bool {
        UniCase::new(self.code) == UniCase::new(*other)
    }
}

impl FromStr for Language {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ser.serialize_str(self.code)
    }
}

/// JSON deserialization visitor that resolves a bare code against the
/// registry, yielding the [Language::EMPTY] sentinel for unknown codes.
struct LanguageVisitor;

impl<'de> Visitor<'de> for LanguageVisitor {
    type Value = Language;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a language code string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let mut result = Language::EMPTY;
        result.try_decode(value);
        Ok(result)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(des: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        des.deserialize_str(LanguageVisitor)
    }
}

impl Scalar for Language {
    fn to_scalar(&self) -> Result<ScalarValue, DataError> {
        Ok(ScalarValue::Text(self.code.to_owned()))
    }

    fn scan(&mut self, value: ScalarValue) -> Result<(), DataError> {
        match value {
            ScalarValue::Text(x) => {
                self.try_decode(&x);
            }
            ScalarValue::Bytes(x) => match str::from_utf8(&x) {
                Ok(s) => {
                    self.try_decode(s);
                }
                Err(x) => debug!("Ignoring non UTF-8 language bytes: {}", x),
            },
            x => debug!("Ignoring {} language scalar", x.type_name()),
        }
        Ok(())
    }
}
