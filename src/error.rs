use std::fmt;

/// MIME タイプのパース / 構築エラー
///
/// パラメータ部分の不備はパース中にスキップされるためエラーにならない。
/// `InvalidParameterName` と `InvalidParameterValue` は
/// [`MimeType::with_parameter`](crate::MimeType::with_parameter) のみが返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeTypeError {
    /// `/` がない
    NoSlash,
    /// タイプが空、または HTTP トークン以外の文字を含む
    InvalidType,
    /// `/` の後に何もない
    MissingSubtype,
    /// サブタイプが空、または HTTP トークン以外の文字を含む
    InvalidSubtype,
    /// パラメータ名が空、または HTTP トークン以外の文字を含む
    InvalidParameterName,
    /// パラメータ値が HTTP quoted-string トークン以外の文字を含む
    InvalidParameterValue,
}

impl fmt::Display for MimeTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MimeTypeError::NoSlash => write!(f, "missing '/' separator"),
            MimeTypeError::InvalidType => write!(f, "invalid type"),
            MimeTypeError::MissingSubtype => write!(f, "missing subtype"),
            MimeTypeError::InvalidSubtype => write!(f, "invalid subtype"),
            MimeTypeError::InvalidParameterName => write!(f, "invalid parameter name"),
            MimeTypeError::InvalidParameterValue => write!(f, "invalid parameter value"),
        }
    }
}

impl std::error::Error for MimeTypeError {}
