//! MIME タイプのプロパティテスト

use std::collections::HashSet;

use pbt::{http_token, mime_like_input, parameter_value, quote};
use proptest::prelude::*;
use shiguredo_mimesniff::ascii::{to_lower_ascii, to_lower_ascii_short};
use shiguredo_mimesniff::char_class::{
    CharClass, classify, contains_only, is_http_quoted_string_token, is_http_token,
    is_http_whitespace,
};
use shiguredo_mimesniff::quoted_string::collect_http_quoted_string;
use shiguredo_mimesniff::{MimeType, MimeTypeError, parse_mime_type};

// ========================================
// Strategy 定義
// ========================================

// 重複のないパラメータ名 (小文字)
fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[a-z][a-z0-9-]{0,7}", 1..=5)
        .prop_map(|names| names.into_iter().collect())
}

// ========================================
// 不変条件の検証
// ========================================

fn assert_invariants(mime: &MimeType) -> Result<(), TestCaseError> {
    for part in [mime.media_type(), mime.subtype()] {
        prop_assert!(!part.is_empty());
        prop_assert!(part.bytes().all(is_http_token));
        prop_assert!(!part.bytes().any(|b| b.is_ascii_uppercase()));
    }

    let mut seen = HashSet::new();
    for (name, value) in mime.parameters().iter() {
        prop_assert!(!name.is_empty());
        prop_assert!(name.bytes().all(is_http_token));
        prop_assert!(!name.bytes().any(|b| b.is_ascii_uppercase()));
        prop_assert!(contains_only(
            CharClass::HttpQuotedStringToken,
            value.as_bytes()
        ));
        prop_assert!(seen.insert(name.to_string()), "duplicate name {}", name);
    }
    Ok(())
}

// ========================================
// パースのテスト
// ========================================

// 任意の文字列でパニックしない
proptest! {
    #[test]
    fn mime_type_parse_no_panic(s in ".{0,128}") {
        let _ = parse_mime_type(&s);
    }
}

// 構造文字を多く含む入力でも不変条件を満たす
proptest! {
    #[test]
    fn mime_type_parse_invariants(s in mime_like_input()) {
        if let Some(mime) = parse_mime_type(&s) {
            assert_invariants(&mime)?;
        }
    }
}

// シリアライズ結果は再パースしても変わらない
proptest! {
    #[test]
    fn mime_type_serialize_fixed_point(s in mime_like_input()) {
        if let Some(mime) = parse_mime_type(&s) {
            let first = mime.serialized();
            let reparsed = parse_mime_type(&first);
            prop_assert!(reparsed.is_some(), "failed to reparse {:?}", first);
            let reparsed = reparsed.unwrap();
            prop_assert_eq!(&reparsed.serialized(), &first);
            prop_assert_eq!(reparsed, mime);
        }
    }
}

// パースは決定的
proptest! {
    #[test]
    fn mime_type_parse_deterministic(s in mime_like_input()) {
        prop_assert_eq!(MimeType::parse(&s), MimeType::parse(&s));
    }
}

// タイプ / サブタイプは小文字化される
proptest! {
    #[test]
    fn mime_type_token_lowercase(media_type in http_token(), subtype in http_token()) {
        let mime = parse_mime_type(&format!("{}/{}", media_type, subtype)).unwrap();
        prop_assert_eq!(mime.media_type(), media_type.to_ascii_lowercase());
        prop_assert_eq!(mime.subtype(), subtype.to_ascii_lowercase());
        prop_assert_eq!(mime.essence(), format!("{}/{}", mime.media_type(), mime.subtype()));
    }
}

// 前後の HTTP 空白は無視される
proptest! {
    #[test]
    fn mime_type_trim_whitespace(
        leading in "[ \t\r\n]{0,4}",
        trailing in "[ \t\r\n]{0,4}",
        media_type in http_token(),
        subtype in http_token()
    ) {
        let input = format!("{}{}/{}{}", leading, media_type, subtype, trailing);
        let mime = parse_mime_type(&input).unwrap();
        prop_assert_eq!(mime.subtype(), subtype.to_ascii_lowercase());
    }
}

// サブタイプがない場合は失敗する
proptest! {
    #[test]
    fn mime_type_missing_subtype(media_type in http_token(), trailing in "[ \t]{0,3}") {
        let input = format!("{}/{}", media_type, trailing);
        prop_assert_eq!(MimeType::parse(&input), Err(MimeTypeError::MissingSubtype));
    }
}

// スラッシュがない場合は失敗する
proptest! {
    #[test]
    fn mime_type_no_slash(s in "[a-z;= ]{0,16}") {
        prop_assert_eq!(MimeType::parse(&s), Err(MimeTypeError::NoSlash));
    }
}

// ========================================
// パラメータのテスト
// ========================================

// パラメータは最初に現れた順序で、同名は最初のものが残る
proptest! {
    #[test]
    fn mime_type_parameters_first_wins(
        names in distinct_names(),
        values in proptest::collection::vec("[a-z0-9]{1,4}", 5),
    ) {
        let mut input = String::from("text/plain");
        for (name, value) in names.iter().zip(&values) {
            input.push_str(&format!(";{}={}", name.to_ascii_uppercase(), value));
        }
        // 同じ名前を別の値で繰り返す
        for name in &names {
            input.push_str(&format!(";{}=dup", name));
        }

        let mime = parse_mime_type(&input).unwrap();
        let params: Vec<(&str, &str)> = mime.parameters().iter().collect();
        let expected: Vec<(&str, &str)> = names
            .iter()
            .zip(&values)
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        prop_assert_eq!(params, expected);
    }
}

// quoted-string の値は元の値に戻る
proptest! {
    #[test]
    fn mime_type_quoted_value(name in "[a-z]{1,8}", value in parameter_value()) {
        let input = format!("text/plain;{}={}", name, quote(&value));
        let mime = parse_mime_type(&input).unwrap();
        prop_assert_eq!(mime.parameter(&name), Some(value.as_str()));

        let reparsed = parse_mime_type(&mime.serialized()).unwrap();
        prop_assert_eq!(reparsed.parameter(&name), Some(value.as_str()));
    }
}

// 名前だけのパラメータは無視される
proptest! {
    #[test]
    fn mime_type_parameter_without_value(name in "[a-z]{1,8}") {
        let mime = parse_mime_type(&format!("text/plain;{};charset=utf-8", name)).unwrap();
        prop_assert!(!mime.parameters().contains(&name) || name == "charset");
        prop_assert_eq!(mime.charset(), Some("utf-8"));
    }
}

// ========================================
// 構築のテスト
// ========================================

// new() / with_parameter() で作った値はパース結果と一致する
proptest! {
    #[test]
    fn mime_type_builder_roundtrip(
        media_type in http_token(),
        subtype in http_token(),
        params in proptest::collection::vec((http_token(), parameter_value()), 0..=4)
    ) {
        let mut mime = MimeType::new(&media_type, &subtype).unwrap();
        for (name, value) in &params {
            mime = mime.with_parameter(name, value).unwrap();
        }
        assert_invariants(&mime)?;

        let reparsed = parse_mime_type(&mime.serialized()).unwrap();
        prop_assert_eq!(reparsed, mime);
    }
}

// ========================================
// 文字クラスのテスト
// ========================================

proptest! {
    #[test]
    fn char_class_matches_definition(b in any::<u8>()) {
        let token = b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b);
        let whitespace = matches!(b, b'\t' | b'\n' | b'\r' | b' ');
        let quoted = b == b'\t' || (0x20..=0x7e).contains(&b) || b >= 0x80;

        prop_assert_eq!(is_http_token(b), token);
        prop_assert_eq!(is_http_whitespace(b), whitespace);
        prop_assert_eq!(is_http_quoted_string_token(b), quoted);

        let expected = if whitespace {
            Some(CharClass::HttpWhitespace)
        } else if token {
            Some(CharClass::HttpToken)
        } else if quoted {
            Some(CharClass::HttpQuotedStringToken)
        } else {
            None
        };
        prop_assert_eq!(classify(b), expected);
    }
}

// ========================================
// 小文字化のテスト
// ========================================

// SWAR と 1 バイトずつの結果は常に一致する
proptest! {
    #[test]
    fn to_lower_ascii_equivalence(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut swar = bytes.clone();
        let mut short = bytes.clone();
        let ascii = to_lower_ascii(&mut swar);
        to_lower_ascii_short(&mut short);
        let expected = bytes.to_ascii_lowercase();

        prop_assert_eq!(&swar, &short);
        prop_assert_eq!(&swar, &expected);
        prop_assert_eq!(ascii, bytes.is_ascii());
    }
}

// ========================================
// quoted-string のテスト
// ========================================

proptest! {
    #[test]
    fn quoted_string_no_panic(s in ".{0,32}", prefix in "[a-z]{0,4}") {
        let input = format!("{}\"{}", prefix, s);
        let (value, position) = collect_http_quoted_string(&input, prefix.len());
        prop_assert!(position <= input.len());
        prop_assert!(position > prefix.len());
        prop_assert!(value.len() <= s.len() + 1);
    }
}

proptest! {
    #[test]
    fn quoted_string_roundtrip(value in parameter_value(), rest in "[;a-z= ]{0,8}") {
        let quoted = quote(&value);
        let input = format!("{}{}", quoted, rest);
        let (decoded, position) = collect_http_quoted_string(&input, 0);
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(position, quoted.len());
    }
}

// ========================================
// エラーのテスト
// ========================================

#[test]
fn mime_type_error_is_error_trait() {
    let error: Box<dyn std::error::Error> = Box::new(MimeTypeError::NoSlash);
    assert_eq!(error.to_string(), "missing '/' separator");
}

#[test]
fn mime_type_error_clone_eq() {
    let error = MimeTypeError::InvalidSubtype;
    let cloned = error.clone();
    assert_eq!(error, cloned);
}

// ========================================
// シナリオ
// ========================================

#[test]
fn mime_type_scenarios() {
    let mime = parse_mime_type("text/plain").unwrap();
    assert_eq!(mime.serialized(), "text/plain");

    let mime = parse_mime_type("text/plain;charset=UTF-8").unwrap();
    assert_eq!(mime.serialized(), "text/plain;charset=UTF-8");

    let mime = parse_mime_type("TEXT/HTML; Charset=\"utf-8\"").unwrap();
    assert_eq!(mime.serialized(), "text/html;charset=utf-8");

    assert!(parse_mime_type("text/").is_none());
    assert!(parse_mime_type("/plain").is_none());

    let mime = parse_mime_type("text/plain;a=1;a=2").unwrap();
    assert_eq!(mime.serialized(), "text/plain;a=1");

    let input = "application/x;v=\"has \\\"quote\\\"\"";
    let mime = parse_mime_type(input).unwrap();
    assert_eq!(mime.parameter("v"), Some("has \"quote\""));
    assert_eq!(mime.serialized(), input);
}
