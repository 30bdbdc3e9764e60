#![no_main]

use libfuzzer_sys::fuzz_target;
use shiguredo_mimesniff::ascii::{to_lower_ascii, to_lower_ascii_short};

fuzz_target!(|data: &[u8]| {
    let mut swar = data.to_vec();
    let mut short = data.to_vec();
    let ascii = to_lower_ascii(&mut swar);
    to_lower_ascii_short(&mut short);

    assert_eq!(swar, short);
    assert_eq!(swar, data.to_ascii_lowercase());
    assert_eq!(ascii, data.is_ascii());
});
