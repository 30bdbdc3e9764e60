#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shiguredo_mimesniff::MimeType;

#[derive(Arbitrary, Debug)]
struct FuzzMimeType {
    media_type: String,
    subtype: String,
    parameters: Vec<(String, String)>,
}

fuzz_target!(|input: FuzzMimeType| {
    // 不正なタイプ / サブタイプは new() が拒否する
    let Ok(mut mime) = MimeType::new(&input.media_type, &input.subtype) else {
        return;
    };
    for (name, value) in &input.parameters {
        if let Ok(next) = mime.clone().with_parameter(name, value) {
            mime = next;
        }
    }

    let serialized = mime.to_string();
    let reparsed = MimeType::parse(&serialized).expect("serialized output must parse");
    assert_eq!(reparsed, mime);
});
