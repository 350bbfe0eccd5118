//! Memory kept alive by parsed lists stays proportional to the input.

use http_field_lists::{ExtList, ParamList};
use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicIsize, Ordering},
};

struct Counting;

static LIVE: AtomicIsize = AtomicIsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let p = System.alloc(layout);
        if !p.is_null() {
            LIVE.fetch_add(layout.size() as isize, Ordering::SeqCst);
        }
        p
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE.fetch_sub(layout.size() as isize, Ordering::SeqCst);
    }
}

#[global_allocator]
static ALLOC: Counting = Counting;

// One test per binary keeps the counter free of concurrent allocations.
#[test]
fn quoted_values_retain_linear_memory() {
    let value = ";a=\"\"".repeat(2000) + &";b=\"xy\"".repeat(2000);
    let ext = format!("e{}", value);

    let before = LIVE.load(Ordering::SeqCst);
    let params: Vec<_> = ParamList::from(value.as_str()).iter().collect();
    let exts: Vec<_> = ExtList::from(ext.as_str())
        .iter()
        .flat_map(|e| e.params)
        .collect();
    let growth = LIVE.load(Ordering::SeqCst) - before;

    assert_eq!(params.len(), 4000);
    assert_eq!(exts.len(), 4000);
    assert_eq!(params[3999].value.as_bytes(), b"xy");

    let input = (value.len() + ext.len()) as isize;
    assert!(
        growth < 32 * input,
        "input={} bytes live_growth={} bytes",
        input,
        growth
    );
}
