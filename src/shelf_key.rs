//! Forward and reverse shelf keys.
//!
//! A shelf key is a lowercase ASCII string whose lexicographic order matches
//! physical shelf order. Every key starts with its scheme's
//! [`prefix`](CallNumberType::prefix) so that schemes never interleave.
//!
//! The reverse key of a forward key sorts in the opposite order, which lets an
//! index that only sorts ascending answer "what is just before this on the
//! shelf".

use std::iter;

use tracing::debug;

use crate::call_number_type::CallNumberType;
use crate::dewey::dewey_shelf_key;
use crate::lc::lc_shelf_key;
use crate::normalize::normalize_suffix;

/// Lowest character a forward key can contain.
const REVERSE_LOW: u8 = b' ';
/// Highest character a forward key can contain.
const REVERSE_HIGH: u8 = b'}';
/// Sorts after every mapped character.
const REVERSE_TERMINATOR: char = '~';

/// Forward shelf key of `callnum` under `callnum_type`.
///
/// Empty input yields an empty key. LC and Dewey numbers the scheme-specific
/// algorithm cannot key fall back to the Other scheme and its prefix.
///
/// # Examples
///
/// ```
/// use callnum::{shelf_key, CallNumberType};
///
/// assert_eq!(shelf_key("PN2007 .S3", CallNumberType::Lc), "lc pn  2007.000000 s3");
/// assert_eq!(shelf_key("M1522 BOX 1", CallNumberType::Other), "other m001522 box 000001");
/// assert_eq!(shelf_key("111.11 .A5", CallNumberType::Lc), "other 000111 000011 a000005");
/// ```
#[must_use]
pub fn shelf_key(callnum: &str, callnum_type: CallNumberType) -> String {
    shelf_key_with_type(callnum, callnum_type).0
}

/// Forward shelf key plus the type whose prefix it carries.
#[must_use]
pub fn shelf_key_with_type(callnum: &str, callnum_type: CallNumberType) -> (String, CallNumberType) {
    let callnum = callnum.trim();
    if callnum.is_empty() {
        return (String::new(), callnum_type);
    }

    let specific = match callnum_type {
        CallNumberType::Lc => lc_shelf_key(callnum),
        CallNumberType::Dewey => dewey_shelf_key(callnum),
        CallNumberType::Sudoc | CallNumberType::Other | CallNumberType::Thesis => {
            return (prefixed(callnum_type, &other_key(callnum)), callnum_type);
        },
    };

    match specific {
        Some(key) if !is_degenerate(&key, callnum) => (prefixed(callnum_type, &key), callnum_type),
        _ => {
            debug!(%callnum_type, callnum, "shelf key fell back to other scheme");
            let other = CallNumberType::Other;
            (prefixed(other, &other_key(callnum)), other)
        },
    }
}

/// Reverse shelf key of `callnum` under `callnum_type`.
#[must_use]
pub fn reverse_shelf_key(callnum: &str, callnum_type: CallNumberType) -> String {
    reverse_key(&shelf_key(callnum, callnum_type))
}

/// Map a forward key to its reverse.
///
/// Each character is replaced by its mirror in the printable range the forward
/// keys use, and a terminator is appended so that a key sorts after every
/// longer key it is a prefix of. Empty input stays empty.
///
/// # Examples
///
/// ```
/// use callnum::reverse_key;
///
/// assert!(reverse_key("abc") > reverse_key("abd"));
/// assert!(reverse_key("ab") > reverse_key("abc"));
/// assert_eq!(reverse_key(""), "");
/// ```
#[must_use]
pub fn reverse_key(forward: &str) -> String {
    if forward.is_empty() {
        return String::new();
    }
    forward
        .chars()
        .map(reverse_char)
        .chain(iter::once(REVERSE_TERMINATOR))
        .collect()
}

fn reverse_char(c: char) -> char {
    match u8::try_from(c) {
        Ok(b) if (REVERSE_LOW..=REVERSE_HIGH).contains(&b) => char::from(REVERSE_LOW + REVERSE_HIGH - b),
        _ => char::from(REVERSE_LOW),
    }
}

fn prefixed(callnum_type: CallNumberType, key: &str) -> String {
    format!("{} {key}", callnum_type.prefix())
}

/// Generic key for schemes without structure of their own.
///
/// A number with no ASCII letters or digits is keyed by its code points, each
/// written as fixed-width hex, so the key stays inside the mirrored range.
fn other_key(callnum: &str) -> String {
    let key = normalize_suffix(callnum);
    if key.is_empty() {
        callnum.chars().map(|c| format!("u{:06x}", u32::from(c))).collect()
    } else {
        key
    }
}

fn is_degenerate(key: &str, callnum: &str) -> bool {
    key.trim().is_empty() || key.eq_ignore_ascii_case(callnum)
}
