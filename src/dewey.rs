//! Dewey Decimal call number structure.
//!
//! A Dewey call number is a one to three digit class with an optional decimal,
//! usually followed by a single cutter (with an optional work mark) and a
//! free-text tail: `666.27 .F22b V.3`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::{collapse_whitespace, normalize_suffix};

lazy_static! {
    static ref CLASS_RE: Regex = Regex::new(r"^([0-9]{1,3})(?:\.([0-9]+))?").unwrap();
    static ref CLASS_END_RE: Regex = Regex::new(r"^(?:$|\s|\.?[A-Z])").unwrap();
    static ref CUTTER_RE: Regex = Regex::new(r"(?:^|[\s.])\s*\.?\s*([A-Z][0-9]+[A-Z]*)").unwrap();
}

/// A structurally parsed Dewey call number borrowing from its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeweyCallNumber<'a> {
    raw: &'a str,
    digits: &'a str,
    decimal: Option<&'a str>,
    class_end: usize,
    class_suffix: &'a str,
    cutter: Option<&'a str>,
    tail_start: usize,
}

impl<'a> DeweyCallNumber<'a> {
    /// Parse a Dewey call number, or `None` if it does not start with a Dewey
    /// class followed by the end of the string, whitespace, a period or a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use callnum::dewey::DeweyCallNumber;
    ///
    /// let dewey = DeweyCallNumber::parse("666.27 .F22 V.3").unwrap();
    /// assert_eq!(dewey.cutter(), Some("F22"));
    /// assert_eq!(dewey.cutter_suffix(), Some((11, " V.3")));
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let upper = raw.to_ascii_uppercase();
        let class = CLASS_RE.captures(&upper)?;
        let class_end = class.get(0)?.end();
        if !CLASS_END_RE.is_match(&upper[class_end..]) {
            return None;
        }

        let (class_suffix_end, cutter, tail_start) = match CUTTER_RE.captures(&upper[class_end..]) {
            Some(caps) => {
                let whole = caps.get(0)?;
                let cutter = caps.get(1)?;
                (
                    class_end + whole.start(),
                    Some(&raw[class_end + cutter.start()..class_end + cutter.end()]),
                    class_end + cutter.end(),
                )
            },
            None => (raw.len(), None, raw.len()),
        };

        Some(DeweyCallNumber {
            raw,
            digits: &raw[class.get(1)?.range()],
            decimal: class.get(2).map(|m| &raw[m.range()]),
            class_end,
            class_suffix: &raw[class_end..class_suffix_end],
            cutter,
            tail_start,
        })
    }

    /// Whole-number part of the class.
    #[must_use]
    pub fn digits(&self) -> &'a str {
        self.digits
    }

    /// Class decimal without its period.
    #[must_use]
    pub fn decimal(&self) -> Option<&'a str> {
        self.decimal
    }

    /// The cutter, including any work mark letters.
    #[must_use]
    pub fn cutter(&self) -> Option<&'a str> {
        self.cutter
    }

    /// Byte offset and text following the cutter, if any non-blank text does.
    #[must_use]
    pub fn cutter_suffix(&self) -> Option<(usize, &'a str)> {
        self.cutter?;
        let tail = &self.raw[self.tail_start..];
        if tail.trim().is_empty() {
            None
        } else {
            Some((self.tail_start, tail))
        }
    }

    /// Byte offset where volume and date information may begin.
    #[must_use]
    pub fn tail_start(&self) -> usize {
        if self.cutter.is_some() {
            self.tail_start
        } else {
            self.class_end
        }
    }

    /// Forward shelf key (without a scheme prefix): class padded to three
    /// digits, decimal padded to eight.
    #[must_use]
    pub fn shelf_key(&self) -> String {
        let mut parts = vec![format!(
            "{:0>3}.{:0<8}",
            self.digits,
            self.decimal.unwrap_or("")
        )];
        let class_suffix = normalize_suffix(self.class_suffix);
        if !class_suffix.is_empty() {
            parts.push(class_suffix);
        }
        if let Some(cutter) = self.cutter {
            parts.push(cutter.to_ascii_lowercase());
            let tail = normalize_suffix(&self.raw[self.tail_start..]);
            if !tail.is_empty() {
                parts.push(tail);
            }
        }
        parts.join(" ")
    }
}

/// Whether the call number has valid Dewey structure.
#[must_use]
pub fn is_valid_dewey(callnum: &str) -> bool {
    DeweyCallNumber::parse(&collapse_whitespace(callnum)).is_some()
}

/// Forward Dewey shelf key of a raw call number, or `None` if it is not Dewey.
#[must_use]
pub fn dewey_shelf_key(callnum: &str) -> Option<String> {
    let collapsed = collapse_whitespace(callnum);
    DeweyCallNumber::parse(&collapsed).map(|dewey| dewey.shelf_key())
}
