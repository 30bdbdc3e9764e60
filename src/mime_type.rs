//! MIME タイプレコードとシリアライズ (MIME Sniffing Standard)
//!
//! ## 概要
//!
//! パース済みの MIME タイプを表す [`MimeType`] と、その正規形への
//! シリアライズを提供します。
//!
//! - タイプ / サブタイプ / パラメータ名は小文字で保持する
//! - パラメータは最初に現れた順序を保持し、同名のものは最初の 1 つだけを残す
//! - シリアライズ時、値が空または HTTP トークン以外を含む場合は引用符で囲む
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_mimesniff::MimeType;
//!
//! let mime = MimeType::parse("Text/HTML;Charset=UTF-8;charset=Shift_JIS").unwrap();
//! assert_eq!(mime.essence(), "text/html");
//! assert_eq!(mime.charset(), Some("UTF-8"));
//! assert_eq!(mime.to_string(), "text/html;charset=UTF-8");
//!
//! let mime = MimeType::new("multipart", "form-data")
//!     .and_then(|m| m.with_parameter("boundary", "a b"))
//!     .unwrap();
//! assert_eq!(mime.serialized(), "multipart/form-data;boundary=\"a b\"");
//! ```

use core::fmt;
use std::str::FromStr;

use crate::ascii::lowercase_token;
use crate::char_class::{CharClass, contains_only, scan_token};
use crate::error::MimeTypeError;

/// MIME タイプ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    /// タイプ (例: "text")
    media_type: String,
    /// サブタイプ (例: "html")
    subtype: String,
    /// パラメータ
    parameters: Parameters,
}

/// MIME タイプのパラメータ
///
/// 名前は小文字で一意、順序は挿入順。
/// 件数は通常数個なので重複検査は線形探索で行う。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 名前が未登録なら追加する。追加した場合は true
    ///
    /// `name` は小文字化済みであること。
    pub(crate) fn insert_if_absent(&mut self, name: String, value: String) -> bool {
        if self.entries.iter().any(|(n, _)| *n == name) {
            return false;
        }
        self.entries.push((name, value));
        true
    }

    /// パラメータを取得 (名前は大文字小文字を区別しない)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// パラメータが存在するかどうか
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// (name, value) を挿入順に返す
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// すべてのパラメータを取得
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl MimeType {
    /// MIME タイプ文字列をパース
    ///
    /// # 例
    ///
    /// ```rust
    /// use shiguredo_mimesniff::{MimeType, MimeTypeError};
    ///
    /// let mime = MimeType::parse("text/plain;charset=UTF-8").unwrap();
    /// assert_eq!(mime.media_type(), "text");
    /// assert_eq!(mime.subtype(), "plain");
    /// assert_eq!(mime.charset(), Some("UTF-8"));
    ///
    /// assert_eq!(MimeType::parse("/plain"), Err(MimeTypeError::InvalidType));
    /// ```
    pub fn parse(input: &str) -> Result<Self, MimeTypeError> {
        crate::parser::parse(input)
    }

    /// タイプとサブタイプから MimeType を作成
    ///
    /// どちらも空でない HTTP トークンであること。小文字化して保持する。
    pub fn new(media_type: &str, subtype: &str) -> Result<Self, MimeTypeError> {
        let media_type = validated_token(media_type).ok_or(MimeTypeError::InvalidType)?;
        let subtype = validated_token(subtype).ok_or(MimeTypeError::InvalidSubtype)?;
        Ok(Self::from_parts(media_type, subtype, Parameters::new()))
    }

    pub(crate) fn from_parts(media_type: String, subtype: String, parameters: Parameters) -> Self {
        MimeType {
            media_type,
            subtype,
            parameters,
        }
    }

    /// パラメータを追加
    ///
    /// パース時と同じ規則で検証する。同名のパラメータが既にある場合は
    /// 先にあるものを残し、この呼び出しは何もしない。
    pub fn with_parameter(mut self, name: &str, value: &str) -> Result<Self, MimeTypeError> {
        let name = validated_token(name).ok_or(MimeTypeError::InvalidParameterName)?;
        if !contains_only(CharClass::HttpQuotedStringToken, value.as_bytes()) {
            return Err(MimeTypeError::InvalidParameterValue);
        }
        self.parameters.insert_if_absent(name, value.to_owned());
        Ok(self)
    }

    /// タイプを取得 (例: "text")
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// サブタイプを取得 (例: "html")
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// essence を取得 (例: "text/html")
    pub fn essence(&self) -> String {
        format!("{}/{}", self.media_type, self.subtype)
    }

    /// パラメータを取得
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// パラメータの値を取得
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    /// charset パラメータを取得
    pub fn charset(&self) -> Option<&str> {
        self.parameter("charset")
    }

    /// 正規形にシリアライズ
    pub fn serialized(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.media_type, self.subtype)?;
        for (name, value) in &self.parameters {
            write!(f, ";{}=", name)?;
            if needs_quoting(value) {
                write_quoted(f, value)?;
            } else {
                f.write_str(value)?;
            }
        }
        Ok(())
    }
}

impl FromStr for MimeType {
    type Err = MimeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MimeType::parse(s)
    }
}

fn validated_token(token: &str) -> Option<String> {
    if token.is_empty() || !scan_token(token.as_bytes()).valid {
        return None;
    }
    Some(lowercase_token(token))
}

/// 空の値、または HTTP トークン以外を含む値は引用符で囲む
fn needs_quoting(value: &str) -> bool {
    value.is_empty() || !contains_only(CharClass::HttpToken, value.as_bytes())
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    let mut rest = value;
    while let Some(pos) = rest.find(['"', '\\']) {
        f.write_str(&rest[..pos])?;
        f.write_str("\\")?;
        f.write_str(&rest[pos..pos + 1])?;
        rest = &rest[pos + 1..];
    }
    f.write_str(rest)?;
    f.write_str("\"")
}
