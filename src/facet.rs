//! Call number facets.
//!
//! Items are faceted hierarchically by scheme and top-level class:
//! `["LC Classification", "P - Language & Literature"]`,
//! `["Dewey Classification", "800s - Literature"]`, or
//! `["Government Document"]`.

use crate::call_number_type::CallNumberType;
use crate::dewey::DeweyCallNumber;
use crate::item::Item;
use crate::lc::LcCallNumber;
use crate::normalize::{collapse_whitespace, normalize_lc};

const LC_CLASSES: [(char, &str); 21] = [
    ('A', "A - General Works"),
    ('B', "B - Philosophy, Psychology, Religion"),
    ('C', "C - Historical Sciences (Archaeology, Genealogy)"),
    ('D', "D - World History"),
    ('E', "E - History of the Americas (General)"),
    ('F', "F - History of the Americas (Local)"),
    ('G', "G - Geography, Anthropology, Recreation"),
    ('H', "H - Social Sciences"),
    ('J', "J - Political Science"),
    ('K', "K - Law"),
    ('L', "L - Education"),
    ('M', "M - Music"),
    ('N', "N - Fine Arts"),
    ('P', "P - Language & Literature"),
    ('Q', "Q - Science"),
    ('R', "R - Medicine"),
    ('S', "S - Agriculture"),
    ('T', "T - Technology"),
    ('U', "U - Military Science"),
    ('V', "V - Naval Science"),
    ('Z', "Z - Bibliography, Library Science, Information Resources"),
];

const DEWEY_HUNDREDS: [&str; 10] = [
    "000s - Computer Science, Information & General Works",
    "100s - Philosophy & Psychology",
    "200s - Religion",
    "300s - Social Sciences",
    "400s - Language",
    "500s - Science",
    "600s - Technology",
    "700s - Arts & Recreation",
    "800s - Literature",
    "900s - History & Geography",
];

/// Top-level LC class label for a call number, if it parses as LC.
///
/// # Examples
///
/// ```
/// use callnum::facet::lc_class_label;
///
/// assert_eq!(lc_class_label("PN2007 .S3"), Some("P - Language & Literature"));
/// assert_eq!(lc_class_label("111.11 .A5"), None);
/// ```
#[must_use]
pub fn lc_class_label(callnum: &str) -> Option<&'static str> {
    let normalized = normalize_lc(callnum);
    let lc = LcCallNumber::parse(&normalized)?;
    let initial = lc.letters().chars().next()?.to_ascii_uppercase();
    LC_CLASSES
        .iter()
        .find(|(letter, _)| *letter == initial)
        .map(|(_, label)| *label)
}

/// Dewey hundreds label for a call number, if it parses as Dewey.
#[must_use]
pub fn dewey_class_label(callnum: &str) -> Option<&'static str> {
    let collapsed = collapse_whitespace(callnum);
    let dewey = DeweyCallNumber::parse(&collapsed)?;
    let class: usize = dewey.digits().parse().ok()?;
    let hundreds = if dewey.digits().len() == 3 { class / 100 } else { 0 };
    DEWEY_HUNDREDS.get(hundreds).copied()
}

/// Hierarchical facet values for an item; empty when the item has no usable
/// call number.
#[must_use]
pub fn callnum_facets(item: &Item) -> Vec<&'static str> {
    if item.has_ignored_callnum() || item.callnum().is_empty() {
        return Vec::new();
    }
    if item.is_gov_doc() || item.callnum_type() == CallNumberType::Sudoc {
        return vec![CallNumberType::Sudoc.facet_label()];
    }
    let class = match item.callnum_type() {
        CallNumberType::Lc => lc_class_label(item.callnum()),
        CallNumberType::Dewey => dewey_class_label(item.callnum()),
        CallNumberType::Sudoc | CallNumberType::Other | CallNumberType::Thesis => return Vec::new(),
    };
    match class {
        Some(class) => vec![item.callnum_type().facet_label(), class],
        None => vec![item.callnum_type().facet_label()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ItemConfig;
    use crate::item::ItemFields;

    fn item(callnum: &str, scheme: &str, home: &str) -> Item {
        Item::new(
            ItemFields {
                callnum: callnum.into(),
                scheme: scheme.into(),
                home_location: home.into(),
                ..Default::default()
            },
            &ItemConfig::default(),
        )
    }

    #[test]
    fn test_lc_labels() {
        assert_eq!(lc_class_label("E184.S75 R47"), Some("E - History of the Americas (General)"));
        assert_eq!(lc_class_label("qa 76.9 .d3"), Some("Q - Science"));
        assert_eq!(lc_class_label("MCD 17393"), None);
    }

    #[test]
    fn test_dewey_labels() {
        assert_eq!(dewey_class_label("813.54 K27b"), Some("800s - Literature"));
        assert_eq!(dewey_class_label("111.11 .A5"), Some("100s - Philosophy & Psychology"));
        assert_eq!(
            dewey_class_label("5 .A1"),
            Some("000s - Computer Science, Information & General Works")
        );
        assert_eq!(dewey_class_label("PN2007"), None);
    }

    #[test]
    fn test_item_facets() {
        assert_eq!(
            callnum_facets(&item("PN2007 .S3", "LC", "STACKS")),
            ["LC Classification", "P - Language & Literature"]
        );
        assert_eq!(
            callnum_facets(&item("111.11 .A5", "LC", "STACKS")),
            ["Dewey Classification", "100s - Philosophy & Psychology"]
        );
        assert_eq!(
            callnum_facets(&item("PN2007 .S3", "LC", "FED-DOCS")),
            ["Government Document"]
        );
        assert_eq!(
            callnum_facets(&item("Y 4.G 74/7", "SUDOC", "STACKS")),
            ["Government Document"]
        );
        assert!(callnum_facets(&item("M1522 BOX 1", "ALPHANUM", "STACKS")).is_empty());
        assert!(callnum_facets(&item("NO CALL NUMBER", "LC", "STACKS")).is_empty());
    }
}
