//! Group lopping.
//!
//! Items of one record that share a library, a location and a scheme family
//! are lopped together: the longest common prefix of their call numbers
//! becomes every item's lopped value, so that a multi-volume set collapses to
//! one browsable entry. The prefix is cleaned back to a token boundary and
//! rejected when too little of it remains.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::call_number_type::scheme_family;
use crate::lopping::{CONTAINERS, VOLUME_DESIGNATORS, YEAR};

/// Appended to a lopped value that was cut from a longer call number.
pub const ELLIPSIS: &str = " ...";

/// Prefixes too generic to stand for a work on their own.
const PROTECTED_PREFIXES: [&str; 4] = ["mcd", "mdvd", "zdvd", "mfilm"];

/// Connectors dropped from the end of a common prefix.
const CONNECTORS: [char; 4] = ['-', ':', '(', '/'];

lazy_static! {
    static ref YEAR_START_RE: Regex = Regex::new(&format!(r"^(?:{YEAR})(?:\D|$)")).unwrap();
    static ref TRAILING_TOKEN_RE: Regex = Regex::new(&format!(
        r"(?i)(?:^|[\s.:/(,])[.:/(]?(?:{VOLUME_DESIGNATORS}|jan|feb|mar|apr|may|jun|jul|aug|sept?|oct|nov|dec|{CONTAINERS})(?:[.\s]\s*\d+|\.)?\s*$"
    ))
    .unwrap();
}

/// Items sharing a group key are lopped together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupKey {
    /// Library code
    pub library: String,
    /// Display name of the home location
    pub location: String,
    /// Scheme family (`LC`, `DEWEY`, or the declared code)
    pub scheme_family: String,
}

impl GroupKey {
    /// Build a key, collapsing `scheme` to its family.
    #[must_use]
    pub fn new(library: &str, location: &str, scheme: &str) -> Self {
        GroupKey {
            library: library.to_string(),
            location: location.to_string(),
            scheme_family: scheme_family(scheme),
        }
    }
}

/// Decide the lopped value of every call number in one group.
///
/// Groups of fewer than two call numbers, and groups whose cleaned common
/// prefix is a protected literal or no longer than `min_len` characters, keep
/// their full call numbers. Otherwise each item gets the common prefix, with
/// [`ELLIPSIS`] appended when its own call number is longer.
///
/// # Examples
///
/// ```
/// use callnum::lop_group;
///
/// let lopped = lop_group(&["E184.S75 R47 V.1", "E184.S75 R47 V.2"], 4);
/// assert_eq!(lopped, ["E184.S75 R47 ...", "E184.S75 R47 ..."]);
///
/// let lopped = lop_group(&["MCD 17393 DISC 1"], 4);
/// assert_eq!(lopped, ["MCD 17393 DISC 1"]);
/// ```
#[must_use]
pub fn lop_group(callnums: &[&str], min_len: usize) -> Vec<String> {
    let full_values = || -> Vec<String> { callnums.iter().map(|c| (*c).to_string()).collect() };
    if callnums.len() < 2 {
        return full_values();
    }

    let prefix = common_prefix(callnums).unwrap_or_default();
    let lowered = prefix.to_ascii_lowercase();
    if PROTECTED_PREFIXES.contains(&lowered.as_str()) || prefix.chars().count() <= min_len {
        debug!(prefix, items = callnums.len(), "group lop rejected");
        return full_values();
    }

    callnums
        .iter()
        .map(|full| {
            if *full == prefix {
                prefix.to_string()
            } else {
                format!("{prefix}{ELLIPSIS}")
            }
        })
        .collect()
}

/// Common prefix of all call numbers, taken from the first one and cleaned
/// back to a token boundary.
fn common_prefix<'a>(callnums: &[&'a str]) -> Option<&'a str> {
    let comparable: Vec<Vec<(usize, char)>> = callnums.iter().map(|c| comparable_chars(c)).collect();
    let (first, others) = comparable.split_first()?;
    let shared = first
        .iter()
        .enumerate()
        .take_while(|(i, (_, c))| others.iter().all(|other| other.get(*i).is_some_and(|(_, o)| o == c)))
        .count();
    if shared == 0 {
        return None;
    }

    let full = callnums[0];
    let mut prefix = &full[..first[shared - 1].0];

    if let Some(before_year) = trim_partial_year(prefix, full) {
        prefix = before_year;
    } else if prefix.ends_with(char::is_alphanumeric)
        && callnums
            .iter()
            .zip(&comparable)
            .any(|(callnum, chars)| continues_token(callnum, chars[shared - 1].0))
    {
        prefix = prefix.trim_end_matches(char::is_alphanumeric);
    }

    if let Some(token) = TRAILING_TOKEN_RE.find(prefix) {
        prefix = &prefix[..token.start()];
    }

    let prefix = prefix.trim_end();
    let prefix = prefix.strip_suffix(CONNECTORS).unwrap_or(prefix);
    Some(prefix.trim_end_matches(|c: char| c.is_whitespace() || c == '.'))
}

/// Characters that take part in prefix comparison, each with the byte offset
/// just past it.
fn comparable_chars(callnum: &str) -> Vec<(usize, char)> {
    callnum
        .char_indices()
        .filter(|(_, c)| is_comparable(*c))
        .map(|(i, c)| (i + c.len_utf8(), c.to_ascii_lowercase()))
        .collect()
}

pub(crate) fn is_comparable(c: char) -> bool {
    c != '.' && !c.is_whitespace()
}

/// A prefix ending in one to three digits that start a full year in `full`
/// is trimmed back before the year.
fn trim_partial_year<'a>(prefix: &'a str, full: &str) -> Option<&'a str> {
    let digits_start = prefix.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let run = prefix.len() - digits_start;
    if !(1..=3).contains(&run) || !YEAR_START_RE.is_match(&full[digits_start..]) {
        return None;
    }
    Some(&prefix[..digits_start])
}

fn continues_token(callnum: &str, end: usize) -> bool {
    callnum[end..].chars().next().is_some_and(char::is_alphanumeric)
}
