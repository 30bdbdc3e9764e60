#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_mimesniff::{MimeType, parse_mime_type};

fuzz_target!(|data: &[u8]| {
    // UTF-8 文字列として解釈できる場合のみテスト
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(mime) = parse_mime_type(s) {
            let _ = mime.essence();
            let _ = mime.charset();
            let _ = mime.is_html();
            let _ = mime.is_javascript();
            let _ = mime.is_json();
            let _ = mime.is_xml();
            let _ = mime.is_scriptable();

            assert!(!mime.media_type().is_empty());
            assert!(!mime.subtype().is_empty());

            // シリアライズ結果は再パースしても変わらない
            let serialized = mime.serialized();
            let reparsed = MimeType::parse(&serialized).expect("serialized output must parse");
            assert_eq!(reparsed.serialized(), serialized);
            assert_eq!(reparsed, mime);
        }
    }
});
