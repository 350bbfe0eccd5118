#![no_main]
use http_field_lists::{ExtList, ParamList, ParamValue, TokenList};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let base = data.as_ptr() as usize;
    let in_bounds = |b: &[u8]| {
        let p = b.as_ptr() as usize;
        b.is_empty() || (p >= base && p + b.len() <= base + data.len())
    };

    for t in TokenList::new(data) {
        assert!(!t.is_empty() && in_bounds(t.as_bytes()));
    }
    for e in ExtList::new(data) {
        assert!(!e.name.is_empty() && in_bounds(e.name.as_bytes()));
        assert!(in_bounds(e.params.as_bytes()));
        for p in e.params {
            assert!(in_bounds(p.name.as_bytes()));
            if let ParamValue::Token(v) = &p.value {
                assert!(in_bounds(v.as_bytes()));
            }
        }
    }
    for p in ParamList::new(data) {
        assert!(in_bounds(p.name.as_bytes()));
        if let ParamValue::Token(v) = &p.value {
            assert!(!v.is_empty() && in_bounds(v.as_bytes()));
        }
    }
});
