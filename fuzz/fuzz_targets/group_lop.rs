#![no_main]

use callnum::{lop_group, ELLIPSIS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let callnums: Vec<&str> = text.lines().take(16).collect();
    let lopped = lop_group(&callnums, 4);
    assert_eq!(lopped.len(), callnums.len());
    for (full, value) in callnums.iter().zip(&lopped) {
        assert!(value == full || value.ends_with(ELLIPSIS) || full.starts_with(value.as_str()));
    }
});
