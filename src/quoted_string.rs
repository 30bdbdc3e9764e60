//! HTTP quoted-string の収集 (Fetch Standard "collect an HTTP quoted string")
//!
//! ## 概要
//!
//! `"` で始まる quoted-string を読み取り、エスケープを解除した値と
//! 読み取り後の位置を返します。閉じ引用符がなくてもエラーにはせず、
//! 入力の終わりまでを値とします。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_mimesniff::quoted_string::collect_http_quoted_string;
//!
//! let input = r#"name="a\"b"; next"#;
//! let (value, position) = collect_http_quoted_string(input, 5);
//! assert_eq!(value, "a\"b");
//! assert_eq!(&input[position..], "; next");
//! ```

/// quoted-string を収集する
///
/// `input[position]` は `"` であること。
/// 戻り値の位置は消費した quoted-string の直後 (閉じていなければ入力の終わり)。
///
/// `\` の直後の 1 文字はそのまま値に入る。非 ASCII の文字がエスケープされた場合も
/// 文字単位で取り込むため、値は常に妥当な UTF-8 になる。
pub fn collect_http_quoted_string(input: &str, position: usize) -> (String, usize) {
    debug_assert_eq!(input.as_bytes().get(position), Some(&b'"'));

    let bytes = input.as_bytes();
    let mut value = String::new();
    let mut position = position + 1;

    loop {
        let Some(offset) = bytes[position..]
            .iter()
            .position(|&b| b == b'"' || b == b'\\')
        else {
            // 閉じ引用符なし
            value.push_str(&input[position..]);
            return (value, input.len());
        };

        let end = position + offset;
        value.push_str(&input[position..end]);
        position = end + 1;

        if bytes[end] == b'"' {
            return (value, position);
        }

        // バックスラッシュ
        match input[position..].chars().next() {
            Some(c) => {
                value.push(c);
                position += c.len_utf8();
            }
            None => {
                value.push('\\');
                return (value, position);
            }
        }
    }
}
