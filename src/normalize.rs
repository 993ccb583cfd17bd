//! Call number text normalization.
//!
//! Raw call numbers arrive with inconsistent spacing (`PN 2007 .S3`,
//! `E184 .S75  R47`) and the occasional diacritic. The functions here produce
//! the canonical forms the lopper and the shelf-key builders work from:
//!
//! - [`collapse_whitespace`] - the stored and lopped form of every call number
//! - [`normalize_lc`] - the compact LC form used for parsing and shelf keys
//! - [`normalize_suffix`] - the sortable form of free-text call number tails

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

/// Digit runs in a normalized suffix are left-padded with zeros to this width.
pub const SUFFIX_DIGIT_WIDTH: usize = 6;

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref SPACE_AROUND_PERIOD_RE: Regex = Regex::new(r" ?\. ?").unwrap();
    static ref LC_CLASS_GAP_RE: Regex = Regex::new(r"^([A-Z]{1,3}) (\d)").unwrap();
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    static ref DIGIT_RUN_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// Trim the string and collapse every run of whitespace to a single space.
///
/// # Examples
///
/// ```
/// use callnum::normalize::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  E184 .S75\t R47 "), "E184 .S75 R47");
/// ```
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned()
}

/// Canonicalize an LC call number.
///
/// Collapses whitespace, removes spaces immediately before and after a period,
/// and closes the gap between the leading class letters and the class digits.
///
/// # Examples
///
/// ```
/// use callnum::normalize::normalize_lc;
///
/// assert_eq!(normalize_lc("PN 2007 .S3  1987"), "PN2007.S3 1987");
/// assert_eq!(normalize_lc("QA76.9 . D3"), "QA76.9.D3");
/// ```
#[must_use]
pub fn normalize_lc(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let compact = SPACE_AROUND_PERIOD_RE.replace_all(&collapsed, ".");
    LC_CLASS_GAP_RE.replace(&compact, "${1}${2}").into_owned()
}

/// Fold to ASCII: decompose, then drop combining marks and anything else
/// outside the ASCII range.
#[must_use]
pub fn ascii_fold(raw: &str) -> String {
    raw.nfd().filter(char::is_ascii).collect()
}

/// Produce the sortable form of a call number tail.
///
/// The result is ASCII, lowercase, has every punctuation/whitespace run
/// replaced by one space, and has every digit run zero-padded to
/// [`SUFFIX_DIGIT_WIDTH`] so that numeric parts compare numerically.
///
/// # Examples
///
/// ```
/// use callnum::normalize::normalize_suffix;
///
/// assert_eq!(normalize_suffix("V.2"), "v 000002");
/// assert!(normalize_suffix("v.2") < normalize_suffix("V. 10"));
/// ```
#[must_use]
pub fn normalize_suffix(raw: &str) -> String {
    let folded = ascii_fold(raw).to_ascii_lowercase();
    let spaced = NON_ALNUM_RE.replace_all(&folded, " ");
    DIGIT_RUN_RE
        .replace_all(spaced.trim(), |caps: &Captures| {
            format!("{:0>width$}", &caps[0], width = SUFFIX_DIGIT_WIDTH)
        })
        .into_owned()
}

/// Trim trailing whitespace and dangling connector punctuation.
#[must_use]
pub fn trim_trailing_punct(callnum: &str) -> &str {
    callnum.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '/' | '(' | ',' | ';'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("A  B\n C"), "A B C");
        assert_eq!(collapse_whitespace("   "), "");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_normalize_lc_period_spacing() {
        assert_eq!(normalize_lc("E184 .S75 R47"), "E184.S75 R47");
        assert_eq!(normalize_lc("E184. S75"), "E184.S75");
        assert_eq!(normalize_lc("PN2007 .S3 V. 2"), "PN2007.S3 V.2");
    }

    #[test]
    fn test_normalize_lc_class_gap() {
        assert_eq!(normalize_lc("QA 76.9 .D3"), "QA76.9.D3");
        assert_eq!(normalize_lc("KJV 4000"), "KJV4000");
        // only a leading letter run is compacted
        assert_eq!(normalize_lc("M1522 BOX 1"), "M1522 BOX 1");
        assert_eq!(normalize_lc("ABCD 12"), "ABCD 12");
    }

    #[test]
    fn test_ascii_fold() {
        assert_eq!(ascii_fold("Müller"), "Muller");
        assert_eq!(ascii_fold("Ångström"), "Angstrom");
        assert_eq!(ascii_fold("漢字"), "");
    }

    #[test]
    fn test_normalize_suffix_padding() {
        assert_eq!(normalize_suffix("v.1 1999"), "v 000001 001999");
        assert_eq!(normalize_suffix(" NO. 12345678 "), "no 12345678");
        assert_eq!(normalize_suffix("..."), "");
    }

    #[test]
    fn test_normalize_suffix_orders_volumes_numerically() {
        let v2 = normalize_suffix("V.2");
        let v10 = normalize_suffix("V.10");
        let v10_pt1 = normalize_suffix("V.10 PT.1");
        assert!(v2 < v10);
        assert!(v10 < v10_pt1);
    }

    #[test]
    fn test_trim_trailing_punct() {
        assert_eq!(trim_trailing_punct("E184 .S75 :"), "E184 .S75");
        assert_eq!(trim_trailing_punct("E184 .S75 ("), "E184 .S75");
        assert_eq!(trim_trailing_punct("E184 .S75 V.1-"), "E184 .S75 V.1-");
    }
}
