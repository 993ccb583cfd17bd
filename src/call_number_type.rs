//! Call number schemes and scheme classification.
//!
//! The scheme recorded on an item is advisory. [`CallNumberType::classify`]
//! maps a declared scheme code onto a [`CallNumberType`] and then checks the
//! call number against that scheme's structure, reclassifying numbers that do
//! not fit.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dewey::is_valid_dewey;
use crate::lc::is_valid_lc;

/// The call number scheme that decides how a number is lopped and keyed.
///
/// Variants are declared in order of shelf-browse preference, which is also
/// their `Ord` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CallNumberType {
    /// Library of Congress Classification
    Lc,
    /// Dewey Decimal Classification
    Dewey,
    /// Superintendent of Documents (government documents)
    Sudoc,
    /// Alphanumeric or locally assigned numbers
    Other,
    /// Locally numbered theses
    Thesis,
}

impl CallNumberType {
    /// All types, in preference order.
    pub const ALL: [CallNumberType; 5] = [
        CallNumberType::Lc,
        CallNumberType::Dewey,
        CallNumberType::Sudoc,
        CallNumberType::Other,
        CallNumberType::Thesis,
    ];

    /// Short code that namespaces shelf keys so schemes never interleave.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Lc => "lc",
            Self::Dewey => "dewey",
            Self::Sudoc => "sudoc",
            Self::Other => "other",
            Self::Thesis => "thesis",
        }
    }

    /// Look a type up by its shelf-key prefix.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.prefix() == prefix)
    }

    /// Top-level label for the call number facet.
    #[must_use]
    pub const fn facet_label(&self) -> &'static str {
        match self {
            Self::Lc => "LC Classification",
            Self::Dewey => "Dewey Classification",
            Self::Sudoc => "Government Document",
            Self::Other => "Other",
            Self::Thesis => "Thesis",
        }
    }

    /// Whether `callnum` has the structure this scheme requires.
    ///
    /// Only LC and Dewey impose a structure; every other scheme accepts any
    /// non-blank number.
    #[must_use]
    pub fn is_struct_valid(&self, callnum: &str) -> bool {
        match self {
            Self::Lc => is_valid_lc(callnum),
            Self::Dewey => is_valid_dewey(callnum),
            Self::Sudoc | Self::Other | Self::Thesis => !callnum.trim().is_empty(),
        }
    }

    /// The scheme a declared scheme code names, without looking at the number.
    ///
    /// Codes starting with `LC` (e.g. `LCPER`) are LC, codes starting with
    /// `DEWEY` are Dewey, and anything unrecognized is [`CallNumberType::Other`].
    #[must_use]
    pub fn declared(scheme: &str) -> Self {
        let code = scheme.trim().to_ascii_uppercase();
        if code.starts_with("LC") {
            Self::Lc
        } else if code.starts_with("DEWEY") {
            Self::Dewey
        } else if code == "SUDOC" {
            Self::Sudoc
        } else if code == "THESIS" {
            Self::Thesis
        } else {
            Self::Other
        }
    }

    /// Decide the operative type of `callnum` given its declared scheme code.
    ///
    /// # Examples
    ///
    /// ```
    /// use callnum::CallNumberType;
    ///
    /// assert_eq!(CallNumberType::classify("LC", "PN2007 .S3"), CallNumberType::Lc);
    /// assert_eq!(CallNumberType::classify("LC", "111.11 .A5"), CallNumberType::Dewey);
    /// assert_eq!(CallNumberType::classify("DEWEY", "MCD 17393"), CallNumberType::Other);
    /// assert_eq!(CallNumberType::classify("ALPHANUM", "M1522 BOX 1"), CallNumberType::Other);
    /// ```
    #[must_use]
    pub fn classify(scheme: &str, callnum: &str) -> Self {
        Self::declared(scheme).reclassify(callnum)
    }

    /// Keep this type if `callnum` fits it. An invalid LC number becomes Dewey
    /// when it parses as Dewey; everything else that fails becomes
    /// [`CallNumberType::Other`].
    #[must_use]
    pub fn reclassify(self, callnum: &str) -> Self {
        let fallback = match self {
            Self::Lc if !is_valid_lc(callnum) => {
                if is_valid_dewey(callnum) {
                    Self::Dewey
                } else {
                    Self::Other
                }
            },
            Self::Dewey if !is_valid_dewey(callnum) => Self::Other,
            _ => return self,
        };
        debug!(declared = %self, operative = %fallback, callnum, "reclassified call number");
        fallback
    }
}

impl fmt::Display for CallNumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lc => write!(f, "LC"),
            Self::Dewey => write!(f, "DEWEY"),
            Self::Sudoc => write!(f, "SUDOC"),
            Self::Other => write!(f, "OTHER"),
            Self::Thesis => write!(f, "THESIS"),
        }
    }
}

/// Collapse a declared scheme code to the family used for item grouping, so
/// that e.g. `LC` and `LCPER` items lop together.
///
/// # Examples
///
/// ```
/// use callnum::call_number_type::scheme_family;
///
/// assert_eq!(scheme_family("LCPER"), "LC");
/// assert_eq!(scheme_family("deweyper"), "DEWEY");
/// assert_eq!(scheme_family("ALPHANUM"), "ALPHANUM");
/// ```
#[must_use]
pub fn scheme_family(scheme: &str) -> String {
    let code = scheme.trim().to_ascii_uppercase();
    if code.starts_with("LC") {
        "LC".to_string()
    } else if code.starts_with("DEWEY") {
        "DEWEY".to_string()
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_codes() {
        assert_eq!(CallNumberType::declared("LC"), CallNumberType::Lc);
        assert_eq!(CallNumberType::declared("LCPER"), CallNumberType::Lc);
        assert_eq!(CallNumberType::declared("DEWEYPER"), CallNumberType::Dewey);
        assert_eq!(CallNumberType::declared("SUDOC"), CallNumberType::Sudoc);
        assert_eq!(CallNumberType::declared("THESIS"), CallNumberType::Thesis);
        assert_eq!(CallNumberType::declared("ALPHANUM"), CallNumberType::Other);
        assert_eq!(CallNumberType::declared(""), CallNumberType::Other);
    }

    #[test]
    fn test_classify_valid() {
        assert_eq!(CallNumberType::classify("LC", "E184.S75 R47 V.1"), CallNumberType::Lc);
        assert_eq!(CallNumberType::classify("DEWEY", "666.27 .F22"), CallNumberType::Dewey);
        assert_eq!(CallNumberType::classify("SUDOC", "Y 4.G 74/7:N 45/2"), CallNumberType::Sudoc);
    }

    #[test]
    fn test_classify_reclassifies_invalid() {
        assert_eq!(CallNumberType::classify("LC", "111.11 .A5"), CallNumberType::Dewey);
        assert_eq!(CallNumberType::classify("LC", "INTERNET RESOURCE"), CallNumberType::Other);
        assert_eq!(CallNumberType::classify("DEWEY", "3781 2009 R"), CallNumberType::Other);
    }

    #[test]
    fn test_invalid_dewey_falls_back_to_other_not_lc() {
        assert!(is_valid_lc("PN2007 .S3"));
        assert_eq!(CallNumberType::classify("DEWEY", "PN2007 .S3"), CallNumberType::Other);
        assert_eq!(CallNumberType::classify("DEWEYPER", "QA76.9 .D3"), CallNumberType::Other);
    }

    #[test]
    fn test_sudoc_is_not_reclassified() {
        // SUDOC numbers often parse as LC; the declared scheme wins
        assert_eq!(CallNumberType::classify("SUDOC", "I 19.79:EC 7"), CallNumberType::Sudoc);
    }

    #[test]
    fn test_prefix_round_trip() {
        for t in CallNumberType::ALL {
            assert_eq!(CallNumberType::from_prefix(t.prefix()), Some(t));
        }
        assert_eq!(CallNumberType::from_prefix("nope"), None);
    }

    #[test]
    fn test_preference_order() {
        assert!(CallNumberType::Lc < CallNumberType::Dewey);
        assert!(CallNumberType::Dewey < CallNumberType::Sudoc);
        assert!(CallNumberType::Other < CallNumberType::Thesis);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(CallNumberType::Lc.to_string(), "LC");
        assert_eq!(serde_json::to_string(&CallNumberType::Dewey).unwrap(), "\"DEWEY\"");
        let parsed: CallNumberType = serde_json::from_str("\"SUDOC\"").unwrap();
        assert_eq!(parsed, CallNumberType::Sudoc);
    }

    #[test]
    fn test_struct_valid() {
        assert!(CallNumberType::Lc.is_struct_valid("QA76.9 .D3"));
        assert!(!CallNumberType::Lc.is_struct_valid("111.11 .A5"));
        assert!(CallNumberType::Other.is_struct_valid("anything"));
        assert!(!CallNumberType::Other.is_struct_valid("  "));
    }
}
