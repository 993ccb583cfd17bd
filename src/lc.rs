//! Library of Congress call number structure.
//!
//! An LC call number is a class (one to three letters, a whole number of up to
//! four digits, an optional decimal), an optional class suffix such as a date,
//! up to three cutters, and a free-text tail that usually holds volume or date
//! information:
//!
//! ```text
//! E184.S75 R47 V.1
//! ^^^^ ^^^ ^^^ ^^^
//! class cutters tail
//! ```
//!
//! [`LcCallNumber::parse`] tolerates the spacing variations found in item data
//! (`PN 2007 .S3`, `E184.S75R47`) and keeps byte offsets into the string it was
//! given, so callers can cut the original text at structural boundaries.

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::{normalize_lc, normalize_suffix};

/// Cutters beyond this many are treated as part of the tail.
const MAX_CUTTERS: usize = 3;

/// Initial class letters that no LC class uses.
const INVALID_CLASS_INITIALS: [char; 5] = ['I', 'O', 'W', 'X', 'Y'];

lazy_static! {
    static ref CLASS_RE: Regex = Regex::new(r"^([A-Z]{1,3})\s*([0-9]{1,4})(?:\.([0-9]+))?").unwrap();
    static ref CLASS_END_RE: Regex = Regex::new(r"^(?:$|\s|\.?[A-Z])").unwrap();
    static ref FIRST_CUTTER_RE: Regex = Regex::new(r"(?:^|[\s.])\s*\.?\s*([A-Z][0-9]+)").unwrap();
    static ref NEXT_CUTTER_RE: Regex = Regex::new(r"^\s*\.?\s*([A-Z][0-9]+)").unwrap();
}

/// A structurally parsed LC call number borrowing from its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcCallNumber<'a> {
    raw: &'a str,
    letters: &'a str,
    digits: &'a str,
    decimal: Option<&'a str>,
    class_end: usize,
    class_suffix: &'a str,
    cutters: Vec<&'a str>,
    tail_start: usize,
}

impl<'a> LcCallNumber<'a> {
    /// Parse an LC call number.
    ///
    /// Returns `None` when the text does not start with a plausible LC class:
    /// the first class letter may not be I, O, W, X or Y, and the class must be
    /// followed by the end of the string, whitespace, a period or a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use callnum::lc::LcCallNumber;
    ///
    /// let lc = LcCallNumber::parse("E184.S75 R47 V.1").unwrap();
    /// assert_eq!(lc.letters(), "E");
    /// assert_eq!(lc.cutters(), ["S75", "R47"]);
    /// assert_eq!(lc.cutter_suffix(), Some((12, " V.1")));
    ///
    /// assert!(LcCallNumber::parse("111.11 .A5").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        // ASCII uppercasing keeps byte offsets identical to `raw`
        let upper = raw.to_ascii_uppercase();
        let class = CLASS_RE.captures(&upper)?;
        let letters = class.get(1)?;
        let digits = class.get(2)?;
        if letters.as_str().starts_with(INVALID_CLASS_INITIALS) {
            return None;
        }
        let class_end = class.get(0)?.end();
        if !CLASS_END_RE.is_match(&upper[class_end..]) {
            return None;
        }

        let mut cutters = Vec::new();
        let mut class_suffix_end = raw.len();
        let mut tail_start = raw.len();

        if let Some(first) = FIRST_CUTTER_RE.captures(&upper[class_end..]) {
            let whole = first.get(0)?;
            let cutter = first.get(1)?;
            class_suffix_end = class_end + whole.start();
            cutters.push(&raw[class_end + cutter.start()..class_end + cutter.end()]);
            tail_start = class_end + cutter.end();

            while cutters.len() < MAX_CUTTERS {
                let Some(next) = NEXT_CUTTER_RE.captures(&upper[tail_start..]) else {
                    break;
                };
                let cutter = next.get(1)?;
                cutters.push(&raw[tail_start + cutter.start()..tail_start + cutter.end()]);
                tail_start += cutter.end();
            }
        }

        Some(LcCallNumber {
            raw,
            letters: &raw[letters.range()],
            digits: &raw[digits.range()],
            decimal: class.get(3).map(|m| &raw[m.range()]),
            class_end,
            class_suffix: &raw[class_end..class_suffix_end],
            cutters,
            tail_start,
        })
    }

    /// The class letters, e.g. `PN`.
    #[must_use]
    pub fn letters(&self) -> &'a str {
        self.letters
    }

    /// The whole-number part of the class, e.g. `2007`.
    #[must_use]
    pub fn digits(&self) -> &'a str {
        self.digits
    }

    /// The class decimal without its period, e.g. `9` for `QA76.9`.
    #[must_use]
    pub fn decimal(&self) -> Option<&'a str> {
        self.decimal
    }

    /// Text between the class and the first cutter (or the rest of the call
    /// number when there is no cutter).
    #[must_use]
    pub fn class_suffix(&self) -> &'a str {
        self.class_suffix
    }

    /// The cutters in order of appearance, without leading periods.
    #[must_use]
    pub fn cutters(&self) -> &[&'a str] {
        &self.cutters
    }

    /// Byte offset and text following the last cutter.
    ///
    /// `None` when there are no cutters or nothing but whitespace follows the
    /// last one.
    #[must_use]
    pub fn cutter_suffix(&self) -> Option<(usize, &'a str)> {
        if self.cutters.is_empty() {
            return None;
        }
        let tail = &self.raw[self.tail_start..];
        if tail.trim().is_empty() {
            None
        } else {
            Some((self.tail_start, tail))
        }
    }

    /// Byte offset where volume and date information may begin: after the
    /// last cutter, or after the class when there are no cutters.
    #[must_use]
    pub fn tail_start(&self) -> usize {
        if self.cutters.is_empty() {
            self.class_end
        } else {
            self.tail_start
        }
    }

    /// Forward shelf key (without a scheme prefix).
    ///
    /// Class letters are padded to three places, class digits to four, and the
    /// class decimal to six, so that class order is lexicographic. Cutters are
    /// compared as decimal fractions, which plain lowercase text already does.
    #[must_use]
    pub fn shelf_key(&self) -> String {
        let mut parts = vec![format!(
            "{:<3} {:0>4}.{:0<6}",
            self.letters.to_ascii_lowercase(),
            self.digits,
            self.decimal.unwrap_or("")
        )];
        let class_suffix = normalize_suffix(self.class_suffix);
        if !class_suffix.is_empty() {
            parts.push(class_suffix);
        }
        parts.extend(self.cutters.iter().map(|c| c.to_ascii_lowercase()));
        if !self.cutters.is_empty() {
            let tail = normalize_suffix(&self.raw[self.tail_start..]);
            if !tail.is_empty() {
                parts.push(tail);
            }
        }
        parts.join(" ")
    }
}

/// Whether the call number has valid LC structure.
#[must_use]
pub fn is_valid_lc(callnum: &str) -> bool {
    LcCallNumber::parse(&normalize_lc(callnum)).is_some()
}

/// Forward LC shelf key of a raw call number, or `None` if it is not LC.
#[must_use]
pub fn lc_shelf_key(callnum: &str) -> Option<String> {
    let normalized = normalize_lc(callnum);
    LcCallNumber::parse(&normalized).map(|lc| lc.shelf_key())
}
