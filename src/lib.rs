//! # shiguredo_mimesniff
//!
//! 依存なしの MIME タイプパーサー / シリアライザー
//! (WHATWG MIME Sniffing Standard "parse a MIME type" / "serialize a MIME type")
//!
//! ## 特徴
//!
//! - **依存なし**: 標準ライブラリのみ使用
//! - **Sans I/O**: 入力文字列を受け取り、結果を返すだけの純粋な関数
//! - **入力を書き換えない**: 小文字化は常に所有するコピーに対して行う
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_mimesniff::parse_mime_type;
//!
//! let mime = parse_mime_type("Text/HTML; Charset=\"utf-8\"; q=\"a b\"").unwrap();
//! assert_eq!(mime.media_type(), "text");
//! assert_eq!(mime.subtype(), "html");
//! assert_eq!(mime.essence(), "text/html");
//! assert!(mime.parameters().contains("charset"));
//! assert_eq!(mime.serialized(), "text/html;charset=utf-8;q=\"a b\"");
//!
//! // タイプ / サブタイプが不正なら None
//! assert!(parse_mime_type("text/").is_none());
//! assert!(parse_mime_type("/plain").is_none());
//! ```

pub mod ascii;
pub mod char_class;
mod error;
mod group;
mod mime_type;
mod parser;
pub mod quoted_string;

pub use error::MimeTypeError;
pub use mime_type::{MimeType, Parameters};
pub use parser::parse_mime_type;
