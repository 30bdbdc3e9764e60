//! PBT テスト共通ユーティリティ

use proptest::prelude::*;

// ========================================
// HTTP トークン生成
// ========================================

/// HTTP トークン文字 (大文字を含む)
pub fn http_token_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        prop::sample::select(vec![
            '!', '#', '$', '%', '&', '\'', '*', '+', '-', '.', '^', '_', '`', '|', '~',
        ]),
    ]
}

/// HTTP トークン (1-16 文字)
pub fn http_token() -> impl Strategy<Value = String> {
    proptest::collection::vec(http_token_char(), 1..=16).prop_map(|chars| chars.into_iter().collect())
}

// ========================================
// パラメータ値生成
// ========================================

/// HTTP quoted-string トークン文字 (ASCII 範囲)
pub fn quoted_string_token_char() -> impl Strategy<Value = char> {
    prop_oneof![Just('\t'), prop::char::range(' ', '~')]
}

/// 任意の有効なパラメータ値 (空を含む)
pub fn parameter_value() -> impl Strategy<Value = String> {
    proptest::collection::vec(quoted_string_token_char(), 0..=16)
        .prop_map(|chars| chars.into_iter().collect())
}

/// 値を quoted-string としてエスケープする
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

// ========================================
// MIME タイプ文字列生成
// ========================================

/// MIME タイプらしい文字列 (構造文字を多めに含む)
pub fn mime_like_input() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        4 => http_token(),
        1 => Just("/".to_string()),
        2 => Just(";".to_string()),
        2 => Just("=".to_string()),
        2 => Just("\"".to_string()),
        1 => Just("\\".to_string()),
        1 => Just(" ".to_string()),
        1 => Just("\t".to_string()),
        // 改行、制御文字、非 ASCII
        2 => prop::sample::select(vec!["\r\n", "\u{c}", "\u{7f}", "é", "あ"]).prop_map(String::from),
    ];
    proptest::collection::vec(piece, 0..=24).prop_map(|pieces| pieces.concat())
}
