//! MIME タイプのパース (MIME Sniffing Standard "parse a MIME type")
//!
//! 失敗するのはタイプ / サブタイプ部分の不備のみ。
//! パラメータ部分の不備 (`=` がない、値が空、不正な文字、名前の重複、
//! 閉じていない引用符) は、そのパラメータを捨てて続行する。

use crate::ascii::{lowercase_token, to_lower_ascii_short};
use crate::char_class::{
    CharClass, contains_only, is_http_whitespace, scan_token, trim_http_whitespace,
    trim_trailing_http_whitespace,
};
use crate::error::MimeTypeError;
use crate::mime_type::{MimeType, Parameters};
use crate::quoted_string::collect_http_quoted_string;

/// MIME タイプをパースする
///
/// 失敗時は `None` を返す。失敗の理由が必要な場合は [`MimeType::parse`] を使う。
///
/// # 例
///
/// ```rust
/// use shiguredo_mimesniff::parse_mime_type;
///
/// let mime = parse_mime_type("TEXT/HTML; Charset=\"utf-8\"").unwrap();
/// assert_eq!(mime.essence(), "text/html");
/// assert_eq!(mime.serialized(), "text/html;charset=utf-8");
///
/// assert!(parse_mime_type("text/").is_none());
/// ```
pub fn parse_mime_type(input: &str) -> Option<MimeType> {
    parse(input).ok()
}

pub(crate) fn parse(input: &str) -> Result<MimeType, MimeTypeError> {
    let input = trim_http_whitespace(input);

    let slash = input
        .bytes()
        .position(|b| b == b'/')
        .ok_or(MimeTypeError::NoSlash)?;

    let media_type = normalize_token(&input[..slash]).ok_or(MimeTypeError::InvalidType)?;

    let rest = &input[slash + 1..];
    if rest.is_empty() {
        return Err(MimeTypeError::MissingSubtype);
    }

    let semicolon = rest.bytes().position(|b| b == b';').unwrap_or(rest.len());
    let subtype = normalize_token(trim_trailing_http_whitespace(&rest[..semicolon]))
        .ok_or(MimeTypeError::InvalidSubtype)?;

    let mut parameters = Parameters::new();
    parse_parameters(&rest[semicolon..], &mut parameters);

    Ok(MimeType::from_parts(media_type, subtype, parameters))
}

/// 空でない HTTP トークンなら小文字化したコピーを返す
fn normalize_token(segment: &str) -> Option<String> {
    if segment.is_empty() {
        return None;
    }
    let scan = scan_token(segment.as_bytes());
    if !scan.valid {
        return None;
    }
    if scan.has_uppercase {
        Some(lowercase_token(segment))
    } else {
        Some(segment.to_owned())
    }
}

/// パラメータ部分をパースする
///
/// `input` は先頭の `;` を含む (パラメータがなければ空)。
fn parse_parameters(input: &str, parameters: &mut Parameters) {
    let bytes = input.as_bytes();
    let mut position = 0;

    while position < bytes.len() {
        // `;` を飛ばす
        position += 1;

        while position < bytes.len() && is_http_whitespace(bytes[position]) {
            position += 1;
        }

        let Some(offset) = bytes[position..]
            .iter()
            .position(|&b| b == b';' || b == b'=')
        else {
            // `=` のない名前だけが残っている
            break;
        };
        let name = &input[position..position + offset];
        position += offset;

        if bytes[position] == b';' {
            continue;
        }

        // `=` を飛ばす
        position += 1;

        let value = if bytes.get(position) == Some(&b'"') {
            let (value, end) = collect_http_quoted_string(input, position);
            // 閉じ引用符の後ろから次の `;` までは捨てる
            position = find_semicolon(bytes, end);
            value
        } else {
            let end = find_semicolon(bytes, position);
            let value = trim_trailing_http_whitespace(&input[position..end]);
            position = end;
            if value.is_empty() {
                continue;
            }
            value.to_owned()
        };

        if name.is_empty()
            || !scan_token(name.as_bytes()).valid
            || !contains_only(CharClass::HttpQuotedStringToken, value.as_bytes())
        {
            continue;
        }

        let mut name = name.as_bytes().to_vec();
        to_lower_ascii_short(&mut name);
        // トークン検証済みなので ASCII
        let name: String = name.into_iter().map(char::from).collect();

        parameters.insert_if_absent(name, value);
    }
}

fn find_semicolon(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b';')
        .map_or(bytes.len(), |offset| from + offset)
}
