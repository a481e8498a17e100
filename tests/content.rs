// SPDX-License-Identifier: GPL-3.0-or-later

mod utils;

use langs::{
    config, group, is_valid, native_name, Chain, Content, DataError, Language, MyError, Scalar,
    ScalarValue,
};
use std::{collections::HashMap, str::FromStr};
use utils::es_en;

#[test]
fn test_every_code_parses() -> Result<(), MyError> {
    for lang in Language::all() {
        let code = lang.code();
        assert!(is_valid(code));

        let parsed = Language::from_str(&code.to_uppercase())?;
        assert!(parsed == code);
        assert_eq!(native_name(code)?, lang.native_name());
        assert_eq!(group(code)?, lang.group());
        assert!(is_valid(lang.group()));
    }

    Ok(())
}

#[test]
fn test_regional_groups() {
    for lang in [Language::EN_GB, Language::EN_US] {
        assert_eq!(lang.group(), Language::EN.code());
    }
    assert_eq!(Language::PT_BR.group(), Language::PT_PT.group());
    assert_ne!(Language::ES.group(), Language::EN.group());
}

#[test]
fn test_set_empty_clears() {
    let mut content = es_en();
    for code in ["es", "en", "pt", "xx"] {
        content.set(code, "");
        assert_eq!(content.get(code), "");
        assert!(content.languages().all(|x| x != code));
    }
    assert!(content.is_empty());
}

#[test]
fn test_round_trip() -> Result<(), MyError> {
    let mut content = Content::new();
    let codes = ["es", "en-GB", "ja", "xx", "pt"];
    for (i, code) in codes.iter().enumerate() {
        content.set(code, format!("value #{}", i));
    }
    content.set("pt", "");

    let json = serde_json::to_string(&content).map_err(DataError::from)?;
    let decoded: Content = serde_json::from_str(&json).map_err(DataError::from)?;
    let mut scanned = Content::new();
    scanned.scan(content.to_scalar()?)?;
    for code in codes {
        assert_eq!(decoded.get(code), content.get(code));
        assert_eq!(scanned.get(code), content.get(code));
    }

    Ok(())
}

#[test]
fn test_empty_encodings() -> Result<(), MyError> {
    let content = Content::new();
    assert_eq!(content.to_json()?, "{}");
    assert_eq!(content.to_scalar()?, ScalarValue::Text("{}".to_owned()));
    assert!(!content.to_scalar()?.is_null());

    Ok(())
}

#[test]
fn test_resolve_priority() {
    let content = es_en();
    let chain = Chain::new([Language::EN, Language::ES]);

    assert_eq!(content.resolve(&chain, "es"), "es-content");
    assert_eq!(content.resolve(&chain, "en"), "en-content");
    assert_eq!(content.resolve(&chain, "pt"), "en-content");
}

#[test]
fn test_resolve_regional() {
    let content = Content::from_map([("es", "es-content"), ("en-GB", "en-content")]);

    // "en" is not an exact key; w/ "es" out of the picture the only other
    // entry is the one picked...
    let chain = Chain::new([Language::EN]);
    assert_eq!(content.resolve(&chain, "en"), "en-content");
    assert_eq!(content.resolve(&chain, "pt"), "en-content");

    let chain = Chain::new([Language::EN, Language::EN_GB]);
    assert_eq!(content.resolve(&chain, "pt"), "en-content");

    let chain = Chain::new([Language::EN, Language::ES]);
    assert_eq!(content.resolve(&chain, "en"), "es-content");
}

#[test]
fn test_resolve_empty() {
    let chains = [
        Chain::default(),
        Chain::new([Language::EN, Language::ES]),
        config().fallback().clone(),
    ];
    for chain in &chains {
        for code in ["en", "es", "xx", ""] {
            assert_eq!(Content::new().resolve(chain, code), "");
        }
    }
}

#[test]
fn test_resolve_never_empty() {
    let content = Content::single("ru", "ru-content");
    for code in ["en", "es", "xx", ""] {
        assert_eq!(content.resolve(config().fallback(), code), "ru-content");
    }
}

#[test]
fn test_parse_unknown() {
    let res = Content::parse(HashMap::from([("xx", "v")]));
    match res {
        Err(DataError::UnknownLanguage(x)) => assert_eq!(x, "xx"),
        x => panic!("Unexpected result: {:?}", x),
    }
}

#[test]
fn test_scan_null() -> Result<(), MyError> {
    let mut fresh = Content::default();
    fresh.scan(ScalarValue::Null)?;
    assert!(fresh.is_empty());

    let mut existing = Content::new();
    existing.scan(ScalarValue::from(None::<String>))?;
    assert!(existing.is_empty());

    Ok(())
}

#[test]
fn test_scan_unsupported() {
    for value in [
        ScalarValue::Integer(1),
        ScalarValue::Real(0.5),
        ScalarValue::Boolean(false),
    ] {
        let expected = value.type_name();
        let res = Content::new().scan(value);
        match res {
            Err(DataError::UnsupportedScalarType(x)) => assert_eq!(x, expected),
            x => panic!("Unexpected result: {:?}", x),
        }
    }
}

#[test]
fn test_descriptor_decode_vs_parse() -> Result<(), MyError> {
    // strict...
    assert!(Language::parse("xx").is_err());

    // ...vs best-effort
    let lang: Language = serde_json::from_str(r#""xx""#).map_err(DataError::from)?;
    assert!(lang.is_empty());

    let mut lang = Language::CA;
    assert!(!lang.try_decode("xx"));
    lang.scan(ScalarValue::from("xx"))?;
    assert_eq!(lang, Language::CA);

    let json = serde_json::to_string(&Language::CA).map_err(DataError::from)?;
    assert_eq!(json, r#""ca""#);

    Ok(())
}
