//! 文字クラス判定 (Fetch Standard / MIME Sniffing Standard)
//!
//! ## 概要
//!
//! MIME タイプのパースで使う 3 種類の文字クラスをバイト単位で判定します。
//!
//! - HTTP 空白: TAB, LF, CR, SPACE
//! - HTTP トークン: ASCII 英数字と ``! # $ % & ' * + - . ^ _ ` | ~``
//! - HTTP quoted-string トークン: TAB, 0x20-0x7E, 0x80-0xFF
//!
//! 判定は 256 エントリのテーブルを 1 回引くだけで行います。
//! テーブルには大文字フラグも入っているため、トークン検証と
//! 大文字の有無の検出を同じループで済ませられます。
//!
//! 0x80-0xFF は UTF-8 として正しいかどうかに関係なくバイト単位で受け入れます。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_mimesniff::char_class::{CharClass, classify, contains_only};
//!
//! assert_eq!(classify(b' '), Some(CharClass::HttpWhitespace));
//! assert_eq!(classify(b'a'), Some(CharClass::HttpToken));
//! assert_eq!(classify(b'"'), Some(CharClass::HttpQuotedStringToken));
//! assert_eq!(classify(b'\0'), None);
//!
//! assert!(contains_only(CharClass::HttpToken, b"x-custom+json"));
//! assert!(!contains_only(CharClass::HttpToken, b"a b"));
//! ```

const TOKEN: u8 = 0b0001;
const UPPER: u8 = 0b0010;
const WHITESPACE: u8 = 0b0100;
const QUOTED: u8 = 0b1000;

/// バイト値 -> フラグ
static TABLE: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        let mut flags = 0;
        if b.is_ascii_alphanumeric()
            || matches!(
                b,
                b'!' | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        {
            flags |= TOKEN;
        }
        if b.is_ascii_uppercase() {
            flags |= UPPER;
        }
        if matches!(b, b'\t' | b'\n' | b'\r' | b' ') {
            flags |= WHITESPACE;
        }
        if b == b'\t' || (b >= 0x20 && b <= 0x7e) || b >= 0x80 {
            flags |= QUOTED;
        }
        table[i] = flags;
        i += 1;
    }
    table
}

/// 文字クラス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// HTTP 空白 (TAB, LF, CR, SPACE)
    HttpWhitespace,
    /// HTTP トークン
    HttpToken,
    /// HTTP quoted-string トークン
    HttpQuotedStringToken,
}

impl CharClass {
    fn flag(self) -> u8 {
        match self {
            CharClass::HttpWhitespace => WHITESPACE,
            CharClass::HttpToken => TOKEN,
            CharClass::HttpQuotedStringToken => QUOTED,
        }
    }
}

/// バイトを分類する
///
/// クラスは重なり合うため (トークンはすべて quoted-string トークンでもある)、
/// 空白、トークン、quoted-string トークンの順で最初に当てはまるものを返す。
pub fn classify(b: u8) -> Option<CharClass> {
    let flags = TABLE[b as usize];
    if flags & WHITESPACE != 0 {
        Some(CharClass::HttpWhitespace)
    } else if flags & TOKEN != 0 {
        Some(CharClass::HttpToken)
    } else if flags & QUOTED != 0 {
        Some(CharClass::HttpQuotedStringToken)
    } else {
        None
    }
}

/// バイトが指定クラスに属するかどうか
#[inline]
pub fn is(kind: CharClass, b: u8) -> bool {
    TABLE[b as usize] & kind.flag() != 0
}

/// HTTP 空白かどうか
#[inline]
pub fn is_http_whitespace(b: u8) -> bool {
    TABLE[b as usize] & WHITESPACE != 0
}

/// HTTP トークン文字かどうか
#[inline]
pub fn is_http_token(b: u8) -> bool {
    TABLE[b as usize] & TOKEN != 0
}

/// HTTP quoted-string トークン文字かどうか
#[inline]
pub fn is_http_quoted_string_token(b: u8) -> bool {
    TABLE[b as usize] & QUOTED != 0
}

/// すべてのバイトが指定クラスに属するかどうか
///
/// 空のスパンは true。
pub fn contains_only(kind: CharClass, span: &[u8]) -> bool {
    let flag = kind.flag();
    span.iter().all(|&b| TABLE[b as usize] & flag != 0)
}

/// トークン走査の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenScan {
    /// 全バイトが HTTP トークン文字
    pub valid: bool,
    /// ASCII 大文字を含む
    pub has_uppercase: bool,
}

/// トークン検証と大文字検出を 1 パスで行う
///
/// 不正なバイトを見つけた時点で打ち切るため、その場合の `has_uppercase` は
/// そこまでに見たバイトについての値になる。
pub fn scan_token(span: &[u8]) -> TokenScan {
    let mut seen = 0u8;
    for &b in span {
        let flags = TABLE[b as usize];
        if flags & TOKEN == 0 {
            return TokenScan {
                valid: false,
                has_uppercase: seen & UPPER != 0,
            };
        }
        seen |= flags;
    }
    TokenScan {
        valid: true,
        has_uppercase: seen & UPPER != 0,
    }
}

/// 先頭と末尾の HTTP 空白を取り除く
///
/// `str::trim` は Unicode 空白も落とすため使わない。
pub fn trim_http_whitespace(input: &str) -> &str {
    trim_trailing_http_whitespace(trim_leading_http_whitespace(input))
}

/// 先頭の HTTP 空白を取り除く
pub fn trim_leading_http_whitespace(input: &str) -> &str {
    let start = input
        .bytes()
        .position(|b| !is_http_whitespace(b))
        .unwrap_or(input.len());
    &input[start..]
}

/// 末尾の HTTP 空白を取り除く
pub fn trim_trailing_http_whitespace(input: &str) -> &str {
    let end = input
        .bytes()
        .rposition(|b| !is_http_whitespace(b))
        .map_or(0, |i| i + 1);
    &input[..end]
}
