#![no_main]
use http_field_lists::header::HeaderBlock;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(Some(block)) = HeaderBlock::parse(data) {
        for h in block.iter() {
            h.value.ext_list().iter().count();
            h.value.token_list().iter().count();
        }
    }
});
