#![no_main]
use http_field_lists::decoder::decode_quoted_string;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((consumed, decoded)) = decode_quoted_string(data) {
        assert!(consumed <= data.len());
        assert!(decoded.len() + 2 <= consumed);
    }
});
