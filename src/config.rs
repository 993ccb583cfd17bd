//! Item configuration.
//!
//! This module provides the [`ItemConfig`] struct: the location and call
//! number lists that decide how each item is treated, plus the display-name
//! maps used when items are grouped. One value is built at startup and passed
//! by reference to every call that needs it.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CallNumError, Result};

/// Default minimum length of an accepted group lop.
pub const DEFAULT_MIN_GROUP_LOP_LENGTH: usize = 4;

const SKIPPED_LOCATIONS: [&str; 10] = [
    "DISCARD",
    "DISCARD-NS",
    "LOST",
    "LOST-ASSUM",
    "LOST-CLAIM",
    "LOST-PAID",
    "MISSING",
    "MISS-INPRO",
    "WITHDRAWN",
    "SHADOW",
];
const ONLINE_LOCATIONS: [&str; 4] = ["INTERNET", "ONLINE-TXT", "RESV-URL", "E-RESV"];
const GOV_DOC_LOCATIONS: [&str; 7] = [
    "BRIT-DOCS",
    "CALIF-DOCS",
    "FED-DOCS",
    "INTL-DOCS",
    "SSRC-DOCS",
    "SSRC-FICHE",
    "SSRC-NWDOC",
];
const SHELVED_BY_TITLE_LOCATIONS: [&str; 3] = ["SHELBYTITL", "SHELBYSER", "STORBYTITL"];
const IGNORED_CALLNUMS: [&str; 3] = ["NO CALL NUMBER", "INTERNET RESOURCE", "XX"];
const IGNORED_CALLNUM_PREFIXES: [&str; 1] = ["XX"];

/// Configuration for item classification and grouping.
///
/// Location codes are matched exactly. Ignored call numbers and prefixes are
/// matched case-insensitively.
///
/// # Examples
///
/// ```
/// use callnum::ItemConfig;
///
/// let config = ItemConfig::new()
///     .with_skipped_location("BINDERY")
///     .with_location_name("STACKS", "Stacks")
///     .with_min_group_lop_length(5);
///
/// assert!(config.is_skipped_location("BINDERY"));
/// assert!(config.is_skipped_location("WITHDRAWN"));
/// assert_eq!(config.translate_location("STACKS"), "Stacks");
/// assert_eq!(config.translate_location("ART"), "ART");
/// assert!(config.is_ignored_callnum("xx(12345.1)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    /// Locations whose items are not shown at all.
    pub skipped_locations: BTreeSet<String>,
    /// Locations that stand for online access rather than a shelf.
    pub online_locations: BTreeSet<String>,
    /// Government document collections.
    pub gov_doc_locations: BTreeSet<String>,
    /// Locations where items are shelved by title instead of call number.
    pub shelved_by_title_locations: BTreeSet<String>,
    /// Placeholder call numbers that carry no shelf position.
    pub ignored_callnums: BTreeSet<String>,
    /// Prefixes of temporary call numbers.
    pub ignored_callnum_prefixes: BTreeSet<String>,
    /// Library code to display name.
    pub library_names: BTreeMap<String, String>,
    /// Location code to display name.
    pub location_names: BTreeMap<String, String>,
    /// A group lop must leave more than this many characters.
    pub min_group_lop_length: usize,
}

fn owned_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            skipped_locations: owned_set(&SKIPPED_LOCATIONS),
            online_locations: owned_set(&ONLINE_LOCATIONS),
            gov_doc_locations: owned_set(&GOV_DOC_LOCATIONS),
            shelved_by_title_locations: owned_set(&SHELVED_BY_TITLE_LOCATIONS),
            ignored_callnums: owned_set(&IGNORED_CALLNUMS),
            ignored_callnum_prefixes: owned_set(&IGNORED_CALLNUM_PREFIXES),
            library_names: BTreeMap::new(),
            location_names: BTreeMap::new(),
            min_group_lop_length: DEFAULT_MIN_GROUP_LOP_LENGTH,
        }
    }
}

impl ItemConfig {
    /// Creates a configuration with the default lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration. Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or
    /// [`from_json`](Self::from_json) fails.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`CallNumError::InvalidConfig`] if the minimum group lop length
    /// is zero or a location is both skipped and online.
    pub fn validate(&self) -> Result<()> {
        if self.min_group_lop_length == 0 {
            return Err(CallNumError::InvalidConfig(
                "min_group_lop_length must be at least 1".to_string(),
            ));
        }
        if let Some(code) = self.skipped_locations.intersection(&self.online_locations).next() {
            return Err(CallNumError::InvalidConfig(format!(
                "location {code} is both skipped and online"
            )));
        }
        Ok(())
    }

    /// Adds a skipped location.
    #[must_use]
    pub fn with_skipped_location(mut self, code: impl Into<String>) -> Self {
        self.skipped_locations.insert(code.into());
        self
    }

    /// Adds an online location.
    #[must_use]
    pub fn with_online_location(mut self, code: impl Into<String>) -> Self {
        self.online_locations.insert(code.into());
        self
    }

    /// Adds a government document location.
    #[must_use]
    pub fn with_gov_doc_location(mut self, code: impl Into<String>) -> Self {
        self.gov_doc_locations.insert(code.into());
        self
    }

    /// Adds a shelved-by-title location.
    #[must_use]
    pub fn with_shelved_by_title_location(mut self, code: impl Into<String>) -> Self {
        self.shelved_by_title_locations.insert(code.into());
        self
    }

    /// Adds an ignored call number.
    #[must_use]
    pub fn with_ignored_callnum(mut self, callnum: impl Into<String>) -> Self {
        self.ignored_callnums.insert(callnum.into().to_uppercase());
        self
    }

    /// Adds an ignored call number prefix.
    #[must_use]
    pub fn with_ignored_callnum_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ignored_callnum_prefixes.insert(prefix.into().to_uppercase());
        self
    }

    /// Sets the display name of a library.
    #[must_use]
    pub fn with_library_name(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.library_names.insert(code.into(), name.into());
        self
    }

    /// Sets the display name of a location.
    #[must_use]
    pub fn with_location_name(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.location_names.insert(code.into(), name.into());
        self
    }

    /// Sets the minimum group lop length.
    #[must_use]
    pub const fn with_min_group_lop_length(mut self, length: usize) -> Self {
        self.min_group_lop_length = length;
        self
    }

    /// Whether items at `location` are hidden.
    #[must_use]
    pub fn is_skipped_location(&self, location: &str) -> bool {
        self.skipped_locations.contains(location)
    }

    /// Whether `location` stands for online access.
    #[must_use]
    pub fn is_online_location(&self, location: &str) -> bool {
        self.online_locations.contains(location)
    }

    /// Whether `location` holds government documents.
    #[must_use]
    pub fn is_gov_doc_location(&self, location: &str) -> bool {
        self.gov_doc_locations.contains(location)
    }

    /// Whether items at `location` are shelved by title.
    #[must_use]
    pub fn is_shelved_by_title_location(&self, location: &str) -> bool {
        self.shelved_by_title_locations.contains(location)
    }

    /// Whether `callnum` is blank, a placeholder, or a temporary number.
    #[must_use]
    pub fn is_ignored_callnum(&self, callnum: &str) -> bool {
        let callnum = callnum.trim().to_uppercase();
        callnum.is_empty()
            || self.ignored_callnums.iter().any(|ignored| ignored.to_uppercase() == callnum)
            || self
                .ignored_callnum_prefixes
                .iter()
                .any(|prefix| callnum.starts_with(&prefix.to_uppercase()))
    }

    /// Display name of a library, or the code itself.
    #[must_use]
    pub fn translate_library<'a>(&'a self, code: &'a str) -> &'a str {
        self.library_names.get(code).map_or(code, String::as_str)
    }

    /// Display name of a location, or the code itself.
    #[must_use]
    pub fn translate_location<'a>(&'a self, code: &'a str) -> &'a str {
        self.location_names.get(code).map_or(code, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ItemConfig::default();
        assert!(config.is_skipped_location("MISSING"));
        assert!(config.is_online_location("INTERNET"));
        assert!(config.is_gov_doc_location("FED-DOCS"));
        assert!(config.is_shelved_by_title_location("SHELBYTITL"));
        assert!(!config.is_skipped_location("STACKS"));
        assert_eq!(config.min_group_lop_length, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ignored_callnums() {
        let config = ItemConfig::default();
        assert!(config.is_ignored_callnum(""));
        assert!(config.is_ignored_callnum("  "));
        assert!(config.is_ignored_callnum("Internet Resource"));
        assert!(config.is_ignored_callnum("XX(3195846.2579)"));
        assert!(!config.is_ignored_callnum("PN2007 .S3"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ItemConfig::new()
            .with_online_location("WEB")
            .with_gov_doc_location("UN-DOCS")
            .with_shelved_by_title_location("PERIODICAL")
            .with_ignored_callnum("in process")
            .with_ignored_callnum_prefix("tmp")
            .with_library_name("GREEN", "Green Library")
            .with_min_group_lop_length(6);

        assert!(config.is_online_location("WEB"));
        assert!(config.is_gov_doc_location("UN-DOCS"));
        assert!(config.is_shelved_by_title_location("PERIODICAL"));
        assert!(config.is_ignored_callnum("IN PROCESS"));
        assert!(config.is_ignored_callnum("TMP 123"));
        assert_eq!(config.translate_library("GREEN"), "Green Library");
        assert_eq!(config.translate_library("ARS"), "ARS");
        assert_eq!(config.min_group_lop_length, 6);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ItemConfig::from_json(
            r#"{"location_names": {"STACKS": "Stacks"}, "min_group_lop_length": 5}"#,
        )
        .unwrap();
        assert_eq!(config.translate_location("STACKS"), "Stacks");
        assert_eq!(config.min_group_lop_length, 5);
        assert!(config.is_skipped_location("LOST"));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            ItemConfig::from_json("{not json"),
            Err(CallNumError::Json(_))
        ));
        assert!(matches!(
            ItemConfig::from_json(r#"{"min_group_lop_length": 0}"#),
            Err(CallNumError::InvalidConfig(_))
        ));
        assert!(matches!(
            ItemConfig::from_json(r#"{"online_locations": ["LOST"]}"#),
            Err(CallNumError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"{"skipped_locations": ["BINDERY"]}"#).unwrap();

        let config = ItemConfig::from_path(&path).unwrap();
        assert!(config.is_skipped_location("BINDERY"));
        assert!(!config.is_skipped_location("LOST"));

        assert!(matches!(
            ItemConfig::from_path(dir.path().join("missing.json")),
            Err(CallNumError::Io(_))
        ));
    }
}
