//! Volume sort keys.
//!
//! Within one lopped call number, serial volumes sort most recent first while
//! monograph volumes sort in shelf order.

use crate::call_number_type::CallNumberType;
use crate::group::{is_comparable, ELLIPSIS};
use crate::normalize::normalize_suffix;
use crate::shelf_key::{reverse_key, shelf_key};

/// Sort key that orders the volumes of one lopped call number.
///
/// When nothing was lopped the key is the lopped shelf key. Serials append the
/// reverse key of the lopped-off suffix so later volumes come first;
/// monographs use the shelf key of the full call number.
///
/// # Examples
///
/// ```
/// use callnum::{shelf_key, volume_sort_key, CallNumberType};
///
/// let lopped_key = shelf_key("E184.S75 R47", CallNumberType::Lc);
/// let v1 = volume_sort_key("E184.S75 R47 V.1", "E184.S75 R47 ...", &lopped_key, CallNumberType::Lc, true);
/// let v2 = volume_sort_key("E184.S75 R47 V.2", "E184.S75 R47 ...", &lopped_key, CallNumberType::Lc, true);
/// assert!(v2 < v1);
/// ```
#[must_use]
pub fn volume_sort_key(
    full: &str,
    lopped: &str,
    lopped_shelfkey: &str,
    callnum_type: CallNumberType,
    is_serial: bool,
) -> String {
    let lopped_shelfkey = lopped_shelfkey.to_lowercase();
    if full == lopped {
        return lopped_shelfkey;
    }
    if !is_serial {
        return shelf_key(full, callnum_type);
    }

    let suffix = volume_suffix(full, lopped);
    let suffix = suffix.trim_start().trim_start_matches("...");
    let normalized = normalize_suffix(suffix);
    if normalized.is_empty() {
        lopped_shelfkey
    } else {
        format!("{lopped_shelfkey} {}", reverse_key(&normalized))
    }
}

/// The part of `full` that follows its lopped prefix.
///
/// The lopped value is matched the way group lopping compares call numbers:
/// ignoring case, periods and whitespace. A trailing [`ELLIPSIS`] on `lopped`
/// is ignored. If `lopped` is not a prefix of `full`, all of `full` is
/// returned.
///
/// # Examples
///
/// ```
/// use callnum::volume_sort::volume_suffix;
///
/// assert_eq!(volume_suffix("E184.S75 R47 V.1", "E184.S75 R47 ..."), " V.1");
/// assert_eq!(volume_suffix("pn2007.s3 v.2", "PN2007 .S3 ..."), " v.2");
/// ```
#[must_use]
pub fn volume_suffix<'a>(full: &'a str, lopped: &str) -> &'a str {
    let lopped = lopped.strip_suffix(ELLIPSIS).unwrap_or(lopped);
    let mut remaining = full.char_indices().filter(|(_, c)| is_comparable(*c));
    let mut end = 0;
    for wanted in lopped.chars().filter(|c| is_comparable(*c)) {
        match remaining.next() {
            Some((i, c)) if c.eq_ignore_ascii_case(&wanted) => end = i + c.len_utf8(),
            _ => return full,
        }
    }
    &full[end..]
}
