#![no_main]

use callnum::normalize::collapse_whitespace;
use callnum::{lop, reverse_key, shelf_key, CallNumberType};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(callnum) = std::str::from_utf8(data) else {
        return;
    };
    let collapsed = collapse_whitespace(callnum);
    for callnum_type in CallNumberType::ALL {
        for is_serial in [false, true] {
            let lopped = lop(callnum, callnum_type, is_serial);
            assert!(collapsed.starts_with(&lopped));
            assert_eq!(lop(&lopped, callnum_type, is_serial), lopped);
        }
        let key = shelf_key(callnum, callnum_type);
        assert_eq!(key.is_empty(), callnum.trim().is_empty());
        let _ = reverse_key(&key);
    }
});
