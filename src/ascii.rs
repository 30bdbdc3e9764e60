//! ASCII 小文字化
//!
//! ## 概要
//!
//! タイプ、サブタイプ、パラメータ名の正規化に使う ASCII 小文字化を提供します。
//! A-Z のみを a-z に変換し、それ以外のバイトは変更しません。
//!
//! - [`to_lower_ascii_short`]: 1 バイトずつ処理する (パラメータ名のような短い入力向け)
//! - [`to_lower_ascii`]: 8 バイト単位の SWAR で処理する (長い入力向け)
//!
//! 両者の出力は常に一致します。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_mimesniff::ascii::{lowercase_token, to_lower_ascii};
//!
//! let mut buf = *b"Application/VND.Example+JSON";
//! assert!(to_lower_ascii(&mut buf));
//! assert_eq!(&buf, b"application/vnd.example+json");
//!
//! assert_eq!(lowercase_token("Charset"), "charset");
//! ```

/// この長さ以下は 1 バイトずつ処理する
const SHORT_LEN: usize = 8;

const fn broadcast(v: u8) -> u64 {
    0x0101_0101_0101_0101u64 * v as u64
}

const HIGH_BITS: u64 = broadcast(0x80);
const ADD_A: u64 = broadcast(128 - b'A');
const ADD_Z: u64 = broadcast(128 - b'Z' - 1);

/// 8 バイトの ASCII ワードを小文字化する
///
/// 各バイトが 0x80 未満であることが前提。この前提ならバイト間の桁上がりは起きない。
#[inline]
fn lower_word(word: u64) -> u64 {
    let in_range = (word.wrapping_add(ADD_A) ^ word.wrapping_add(ADD_Z)) & HIGH_BITS;
    word ^ (in_range >> 2)
}

/// 1 ワード分のバイト列を小文字化し、ASCII だったかを返す
#[inline]
fn lower_chunk(chunk: &mut [u8]) -> bool {
    let mut buf = [0u8; 8];
    buf[..chunk.len()].copy_from_slice(chunk);
    let word = u64::from_le_bytes(buf);
    if word & HIGH_BITS != 0 {
        // 非 ASCII を含むワードは桁上がりで壊れるのでバイト単位に落とす
        to_lower_ascii_short(chunk);
        return false;
    }
    let lowered = lower_word(word).to_le_bytes();
    chunk.copy_from_slice(&lowered[..chunk.len()]);
    true
}

/// ASCII 大文字をその場で小文字化する (SWAR)
///
/// 入力がすべて ASCII だった場合に true を返す。
/// 戻り値は高速化のためのヒントで、非 ASCII を含んでいても A-Z は正しく変換される。
pub fn to_lower_ascii(input: &mut [u8]) -> bool {
    let mut ascii = true;
    let mut chunks = input.chunks_exact_mut(8);
    for chunk in &mut chunks {
        ascii &= lower_chunk(chunk);
    }
    let rest = chunks.into_remainder();
    if !rest.is_empty() {
        ascii &= lower_chunk(rest);
    }
    ascii
}

/// ASCII 大文字をその場で小文字化する (1 バイトずつ)
pub fn to_lower_ascii_short(input: &mut [u8]) {
    for b in input {
        if b.is_ascii_uppercase() {
            *b |= 0x20;
        }
    }
}

/// トークン文字列を小文字化したコピーを返す
///
/// 呼び出し元がトークン文字 (ASCII) のみであることを検証済みである前提。
/// 入力そのものは書き換えない。
pub fn lowercase_token(token: &str) -> String {
    let mut bytes = token.as_bytes().to_vec();
    if bytes.len() <= SHORT_LEN {
        to_lower_ascii_short(&mut bytes);
    } else {
        to_lower_ascii(&mut bytes);
    }
    match String::from_utf8(bytes) {
        Ok(s) => s,
        // ASCII 大文字の置き換えは UTF-8 の妥当性を崩さないため到達しない
        Err(_) => token.to_ascii_lowercase(),
    }
}
