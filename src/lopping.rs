//! Suffix stripping ("lopping").
//!
//! Lopping removes the volume, part, date and container information from the
//! end of a call number so that every piece of a multi-part work shares one
//! representative number: `E184.S75 R47 V.1` and `E184.S75 R47 V.2` both lop
//! to `E184.S75 R47`.
//!
//! Each scheme tries an ordered chain of [`LopStrategy`] patterns and cuts the
//! call number where the first matching pattern begins. A guard rejects any
//! cut that would leave too little of the number to identify the work.
//!
//! | Scheme              | Searched text          | Chain                                  | Minimum |
//! |---------------------|------------------------|----------------------------------------|---------|
//! | LC, Dewey           | text after last cutter | strict, loose, letters, container      | 4       |
//! | LC, Dewey (no tail) | whole number           | container                              | 4       |
//! | Other, Thesis       | whole number           | container, then strict, loose, letters | 5       |
//! | SUDOC               | whole number           | strict, loose, letters                 | 5       |
//!
//! Serials additionally drop a trailing year or month.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::call_number_type::CallNumberType;
use crate::dewey::DeweyCallNumber;
use crate::lc::LcCallNumber;
use crate::normalize::{collapse_whitespace, trim_trailing_punct};

/// Shortest LC or Dewey lop that is accepted.
pub const STRUCTURED_MIN_LEN: usize = 4;

/// Shortest lop accepted for SUDOC, Other and Thesis numbers.
pub const OTHER_MIN_LEN: usize = 5;

/// Other-scheme serials longer than this also lose a trailing date.
const OTHER_SERIAL_DATE_THRESHOLD: usize = 10;

/// Other-scheme prefixes that are never lopped.
const PROTECTED_PREFIXES: [&str; 5] = ["MCD", "MDVD", "ZDVD", "MFILM", "V."];

const LEADING_PUNCT: &str = r"[.:/(]?";
const NEW_SERIES: &str = r"(?:n\.s\.?,? ?)?";
const MONTH_ABBREVIATIONS: &str = "jan|feb|mar|apr|may|jun|jul|aug|sept?|oct|nov|dec";
const MONTH_NAMES: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|\
                           aug(?:ust)?|sept?(?:ember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

/// Words that introduce a volume or part number.
pub(crate) const VOLUME_DESIGNATORS: &str = r"bd|ed|jahrg|new ser|no|n\.s|pts?|ser|t|v|vols?|vyp";

/// Words that introduce an archival container rather than a volume.
pub(crate) const CONTAINERS: &str = "box|carton|disc|flat box|folder|half box|half carton|index|\
                                     large folder|large map folder|map folder|os box|os folder|reel|\
                                     series|sheet|small folder|small map folder|suppl|tube";

/// Four-digit years plausible in item data.
pub(crate) const YEAR: &str = r"1[4-9]\d\d|20\d\d";

/// A named suffix pattern. A match marks where the suffix begins.
#[derive(Debug)]
struct LopStrategy {
    name: &'static str,
    pattern: Regex,
}

impl LopStrategy {
    /// Start of the first match beginning at or after `min_start`.
    fn find(&self, text: &str, min_start: usize) -> Option<usize> {
        let found = self.pattern.find_iter(text).find(|m| m.start() >= min_start)?;
        trace!(strategy = self.name, text, at = found.start(), "lop strategy matched");
        Some(found.start())
    }
}

lazy_static! {
    static ref STRICT_VOLUME: LopStrategy = LopStrategy {
        name: "strict volume",
        pattern: Regex::new(&format!(
            r"(?i){LEADING_PUNCT}\b{NEW_SERIES}(?:{VOLUME_DESIGNATORS}|{MONTH_ABBREVIATIONS})\.? ?\d+(?:[/-]\d+)?(?: \d{{4}}(?:[/-]\d{{4}})?)?(?: ?suppl\.?)?\b"
        ))
        .unwrap(),
    };
    static ref LOOSE_VOLUME: LopStrategy = LopStrategy {
        name: "loose volume",
        pattern: Regex::new(&format!(
            r"(?i){LEADING_PUNCT}\b{NEW_SERIES}(?:{VOLUME_DESIGNATORS}|{MONTH_ABBREVIATIONS})\.? ?\d+.*"
        ))
        .unwrap(),
    };
    static ref LETTER_VOLUME: LopStrategy = LopStrategy {
        name: "letter volume",
        pattern: Regex::new(&format!(
            r"(?i){LEADING_PUNCT}\b{NEW_SERIES}(?:{VOLUME_DESIGNATORS}|{MONTH_ABBREVIATIONS})(?:[/.] ?| )[A-Z](?:[/-][A-Z]+)?\b.*"
        ))
        .unwrap(),
    };
    static ref CONTAINER: LopStrategy = LopStrategy {
        name: "container",
        pattern: Regex::new(&format!(r"(?i){LEADING_PUNCT}\b(?:{CONTAINERS})\b.*")).unwrap(),
    };

    static ref STRUCTURED_CHAIN: [&'static LopStrategy; 4] =
        [&*STRICT_VOLUME, &*LOOSE_VOLUME, &*LETTER_VOLUME, &*CONTAINER];
    static ref VOLUME_CHAIN: [&'static LopStrategy; 3] = [&*STRICT_VOLUME, &*LOOSE_VOLUME, &*LETTER_VOLUME];
    static ref CONTAINER_CHAIN: [&'static LopStrategy; 1] = [&*CONTAINER];

    static ref TRAILING_YEAR_RE: Regex =
        Regex::new(&format!(r"(?i)(?:^|[\s.:/(,])[.:/(]?(?:{YEAR})(?:\D.*)?$")).unwrap();
    static ref LOOSE_MONTH_RE: Regex =
        Regex::new(&format!(r"(?i)(?:^|[\s.:/(,])[.:/(]?(?:{MONTH_NAMES})\b.*$")).unwrap();
    static ref TRAILING_MONTH_RE: Regex =
        Regex::new(&format!(r"(?i)(?:^|[\s.:/(,])[.:/(]?(?:{MONTH_NAMES})\.?,?\s*$")).unwrap();
}

/// Strip the volume, part, date or container suffix from a call number.
///
/// Whitespace is collapsed first; the result is always a prefix of the
/// collapsed call number. Cuts repeat until nothing more comes off, so lopping
/// a lopped number leaves it unchanged.
///
/// # Examples
///
/// ```
/// use callnum::{lop, CallNumberType};
///
/// assert_eq!(lop("E184.S75 R47 V.1", CallNumberType::Lc, false), "E184.S75 R47");
/// assert_eq!(lop("PN2007 .S3 1987", CallNumberType::Lc, true), "PN2007 .S3");
/// assert_eq!(lop("PN2007 .S3 1987", CallNumberType::Lc, false), "PN2007 .S3 1987");
/// assert_eq!(lop("M1522 BOX 1", CallNumberType::Other, false), "M1522");
/// assert_eq!(lop("MCD 17393 DISC 1", CallNumberType::Other, true), "MCD 17393 DISC 1");
/// ```
#[must_use]
pub fn lop(callnum: &str, callnum_type: CallNumberType, is_serial: bool) -> String {
    let mut current = collapse_whitespace(callnum);
    loop {
        let next = lop_once(&current, callnum_type, is_serial);
        if next.len() >= current.len() {
            return current;
        }
        current = next.to_string();
    }
}

fn lop_once(callnum: &str, callnum_type: CallNumberType, is_serial: bool) -> &str {
    if callnum.is_empty() {
        return callnum;
    }
    match callnum_type {
        CallNumberType::Lc | CallNumberType::Dewey => {
            let monograph = lop_structured(callnum, callnum_type);
            if is_serial {
                let region = structured_tail_start(monograph, callnum_type);
                lop_dates(monograph, region, STRUCTURED_MIN_LEN)
            } else {
                monograph
            }
        },
        CallNumberType::Sudoc | CallNumberType::Other | CallNumberType::Thesis => {
            if is_protected(callnum) {
                return callnum;
            }
            let monograph = lop_unstructured(callnum, callnum_type);
            if is_serial && monograph.chars().count() > OTHER_SERIAL_DATE_THRESHOLD {
                lop_dates(monograph, 0, OTHER_MIN_LEN)
            } else {
                monograph
            }
        },
    }
}

/// LC and Dewey: search the text after the last cutter, or the whole number
/// for a container when there is no such text.
fn lop_structured(callnum: &str, callnum_type: CallNumberType) -> &str {
    let candidate = match cutter_suffix(callnum, callnum_type) {
        Some((offset, suffix)) => {
            first_cut(&*STRUCTURED_CHAIN, suffix, 0).map(|at| strip_trailing_month(&callnum[..offset + at]))
        },
        None => first_cut(&*CONTAINER_CHAIN, callnum, 1).map(|at| &callnum[..at]),
    };
    candidate
        .and_then(|c| accept(callnum, c, STRUCTURED_MIN_LEN))
        .unwrap_or_else(|| trim_trailing_punct(callnum))
}

/// SUDOC, Other and Thesis: search the whole number.
fn lop_unstructured(callnum: &str, callnum_type: CallNumberType) -> &str {
    if callnum_type != CallNumberType::Sudoc {
        let container = first_cut(&*CONTAINER_CHAIN, callnum, 1)
            .and_then(|at| accept(callnum, &callnum[..at], OTHER_MIN_LEN));
        if let Some(lopped) = container {
            return lopped;
        }
    }
    first_cut(&*VOLUME_CHAIN, callnum, 1)
        .and_then(|at| accept(callnum, &callnum[..at], OTHER_MIN_LEN))
        .unwrap_or_else(|| trim_trailing_punct(callnum))
}

/// Drop a trailing year or month at or after `region_start`, keeping the
/// shorter result that still meets `min_len`.
fn lop_dates(callnum: &str, region_start: usize, min_len: usize) -> &str {
    let region = &callnum[region_start..];
    [&*TRAILING_YEAR_RE, &*LOOSE_MONTH_RE]
        .into_iter()
        .filter_map(|re| re.find(region))
        .map(|found| trim_trailing_punct(&callnum[..region_start + found.start()]))
        .filter(|candidate| candidate.chars().count() >= min_len)
        .min_by_key(|candidate| candidate.len())
        .unwrap_or(callnum)
}

/// Where the first strategy in `chain` cuts `text`. Whole-number searches pass
/// a `min_start` of 1 so a leading word such as `ED` or `T` is not taken for
/// a suffix.
fn first_cut(chain: &[&LopStrategy], text: &str, min_start: usize) -> Option<usize> {
    chain.iter().find_map(|strategy| strategy.find(text, min_start))
}

fn accept<'a>(callnum: &str, candidate: &'a str, min_len: usize) -> Option<&'a str> {
    let candidate = trim_trailing_punct(candidate);
    if candidate.chars().count() < min_len {
        debug!(callnum, candidate, min_len, "lop rejected as too short");
        None
    } else {
        Some(candidate)
    }
}

fn strip_trailing_month(text: &str) -> &str {
    let text = trim_trailing_punct(text);
    TRAILING_MONTH_RE.find(text).map_or(text, |found| &text[..found.start()])
}

fn cutter_suffix(callnum: &str, callnum_type: CallNumberType) -> Option<(usize, &str)> {
    match callnum_type {
        CallNumberType::Lc => LcCallNumber::parse(callnum)?.cutter_suffix(),
        CallNumberType::Dewey => DeweyCallNumber::parse(callnum)?.cutter_suffix(),
        CallNumberType::Sudoc | CallNumberType::Other | CallNumberType::Thesis => None,
    }
}

/// Where dates may begin in an LC or Dewey number: after the last cutter, or
/// after the class. Unparseable numbers are searched in full.
fn structured_tail_start(callnum: &str, callnum_type: CallNumberType) -> usize {
    match callnum_type {
        CallNumberType::Lc => LcCallNumber::parse(callnum).map_or(0, |lc| lc.tail_start()),
        CallNumberType::Dewey => DeweyCallNumber::parse(callnum).map_or(0, |dewey| dewey.tail_start()),
        CallNumberType::Sudoc | CallNumberType::Other | CallNumberType::Thesis => 0,
    }
}

fn is_protected(callnum: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| {
        callnum
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
