//! Items and their derived flags.
//!
//! An [`Item`] is one physical piece of a record. Its raw attributes come from
//! the record's item-holdings field ([`ItemFields`]); the flags that decide
//! whether and how it is shelved are computed once, at construction, from an
//! [`ItemConfig`].

use serde::{Deserialize, Serialize};

use crate::call_number_type::CallNumberType;
use crate::config::ItemConfig;
use crate::group::GroupKey;
use crate::lopping::lop;
use crate::normalize::collapse_whitespace;

/// Raw attributes of an item, as extracted from the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    /// Barcode
    pub barcode: String,
    /// Library code
    pub library: String,
    /// Home location code
    pub home_location: String,
    /// Current location code
    pub current_location: String,
    /// Call number as recorded
    pub callnum: String,
    /// Declared scheme code (`LC`, `DEWEYPER`, `SUDOC`, `ALPHANUM`, ...)
    pub scheme: String,
}

impl ItemFields {
    /// Build fields from item-holdings subfields.
    ///
    /// Codes: `a` call number, `w` scheme, `i` barcode, `m` library, `k`
    /// current location, `l` home location. Other codes are ignored; a
    /// repeated code keeps its first value.
    ///
    /// # Examples
    ///
    /// ```
    /// use callnum::ItemFields;
    ///
    /// let fields = ItemFields::from_subfields([
    ///     ('a', "PN2007 .S3 1987"),
    ///     ('w', "LC"),
    ///     ('i', "36105001234567"),
    ///     ('m', "GREEN"),
    ///     ('l', "STACKS"),
    /// ]);
    /// assert_eq!(fields.callnum, "PN2007 .S3 1987");
    /// assert_eq!(fields.home_location, "STACKS");
    /// assert_eq!(fields.current_location, "");
    /// ```
    #[must_use]
    pub fn from_subfields<I, S>(subfields: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: AsRef<str>,
    {
        let mut fields = ItemFields::default();
        for (code, value) in subfields {
            let target = match code {
                'a' => &mut fields.callnum,
                'w' => &mut fields.scheme,
                'i' => &mut fields.barcode,
                'm' => &mut fields.library,
                'k' => &mut fields.current_location,
                'l' => &mut fields.home_location,
                _ => continue,
            };
            if target.is_empty() {
                *target = value.as_ref().trim().to_string();
            }
        }
        fields
    }
}

/// An item with its classification and configuration-derived flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Item {
    fields: ItemFields,
    callnum: String,
    callnum_type: CallNumberType,
    group_key: GroupKey,
    skipped: bool,
    gov_doc: bool,
    online: bool,
    shelved_by_title: bool,
    ignored_callnum: bool,
}

impl Item {
    /// Classify an item and compute its flags.
    ///
    /// A location flag is set when either the home or the current location
    /// carries it.
    ///
    /// # Examples
    ///
    /// ```
    /// use callnum::{CallNumberType, Item, ItemConfig, ItemFields};
    ///
    /// let config = ItemConfig::default();
    /// let item = Item::new(
    ///     ItemFields {
    ///         callnum: "111.11  .A5".into(),
    ///         scheme: "LC".into(),
    ///         home_location: "STACKS".into(),
    ///         ..Default::default()
    ///     },
    ///     &config,
    /// );
    /// assert_eq!(item.callnum(), "111.11 .A5");
    /// assert_eq!(item.callnum_type(), CallNumberType::Dewey);
    /// assert!(item.is_browsable());
    /// ```
    #[must_use]
    pub fn new(fields: ItemFields, config: &ItemConfig) -> Self {
        let callnum = collapse_whitespace(&fields.callnum);
        let callnum_type = CallNumberType::classify(&fields.scheme, &callnum);
        let at = |check: fn(&ItemConfig, &str) -> bool| {
            check(config, &fields.home_location) || check(config, &fields.current_location)
        };
        let skipped = at(ItemConfig::is_skipped_location);
        let gov_doc = at(ItemConfig::is_gov_doc_location);
        let online = at(ItemConfig::is_online_location);
        let shelved_by_title = at(ItemConfig::is_shelved_by_title_location);
        let ignored_callnum = config.is_ignored_callnum(&callnum);
        let group_key = GroupKey::new(
            &fields.library,
            config.translate_location(&fields.home_location),
            &fields.scheme,
        );

        Item {
            fields,
            callnum,
            callnum_type,
            group_key,
            skipped,
            gov_doc,
            online,
            shelved_by_title,
            ignored_callnum,
        }
    }

    /// The raw attributes.
    #[must_use]
    pub fn fields(&self) -> &ItemFields {
        &self.fields
    }

    /// Barcode.
    #[must_use]
    pub fn barcode(&self) -> &str {
        &self.fields.barcode
    }

    /// Library code.
    #[must_use]
    pub fn library(&self) -> &str {
        &self.fields.library
    }

    /// Home location code.
    #[must_use]
    pub fn home_location(&self) -> &str {
        &self.fields.home_location
    }

    /// Current location code.
    #[must_use]
    pub fn current_location(&self) -> &str {
        &self.fields.current_location
    }

    /// Call number with whitespace collapsed.
    #[must_use]
    pub fn callnum(&self) -> &str {
        &self.callnum
    }

    /// Operative scheme after reclassification.
    #[must_use]
    pub fn callnum_type(&self) -> CallNumberType {
        self.callnum_type
    }

    /// Key of the lopping group this item belongs to.
    #[must_use]
    pub fn group_key(&self) -> &GroupKey {
        &self.group_key
    }

    /// Whether the item is hidden.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Whether the item is in a government document collection.
    #[must_use]
    pub fn is_gov_doc(&self) -> bool {
        self.gov_doc
    }

    /// Whether the item stands for online access.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Whether the item is shelved by title.
    #[must_use]
    pub fn is_shelved_by_title(&self) -> bool {
        self.shelved_by_title
    }

    /// Whether the call number is blank, a placeholder, or temporary.
    #[must_use]
    pub fn has_ignored_callnum(&self) -> bool {
        self.ignored_callnum
    }

    /// Whether the item takes part in group lopping and gets shelf keys.
    #[must_use]
    pub fn is_browsable(&self) -> bool {
        !(self.skipped
            || self.ignored_callnum
            || self.online
            || self.shelved_by_title
            || self.callnum.is_empty())
    }

    /// This item's own lop, before group lopping.
    #[must_use]
    pub fn lopped_callnum(&self, is_serial: bool) -> String {
        lop(&self.callnum, self.callnum_type, is_serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(callnum: &str, scheme: &str, home: &str, current: &str) -> Item {
        Item::new(
            ItemFields {
                barcode: "123".into(),
                library: "GREEN".into(),
                home_location: home.into(),
                current_location: current.into(),
                callnum: callnum.into(),
                scheme: scheme.into(),
            },
            &ItemConfig::default(),
        )
    }

    #[test]
    fn test_from_subfields_first_value_wins() {
        let fields = ItemFields::from_subfields(vec![
            ('a', String::from(" E184.S75 R47 V.1 ")),
            ('a', String::from("ignored")),
            ('k', String::from("CHECKEDOUT")),
            ('z', String::from("public note")),
        ]);
        assert_eq!(fields.callnum, "E184.S75 R47 V.1");
        assert_eq!(fields.current_location, "CHECKEDOUT");
        assert_eq!(fields.scheme, "");
    }

    #[test]
    fn test_flags_from_locations() {
        assert!(item("PN2007 .S3", "LC", "STACKS", "MISSING").is_skipped());
        assert!(item("PN2007 .S3", "LC", "WITHDRAWN", "").is_skipped());
        assert!(item("I 19.79:EC 7", "SUDOC", "FED-DOCS", "").is_gov_doc());
        assert!(item("INTERNET RESOURCE", "ALPHANUM", "INTERNET", "").is_online());
        assert!(item("PN2007 .S3", "LC", "SHELBYTITL", "").is_shelved_by_title());
    }

    #[test]
    fn test_browsable() {
        assert!(item("PN2007 .S3", "LC", "STACKS", "").is_browsable());
        assert!(!item("PN2007 .S3", "LC", "STACKS", "LOST").is_browsable());
        assert!(!item("NO CALL NUMBER", "OTHER", "STACKS", "").is_browsable());
        assert!(!item("", "LC", "STACKS", "").is_browsable());
        assert!(!item("PN2007 .S3", "LC", "SHELBYSER", "").is_browsable());
    }

    #[test]
    fn test_classification_and_lop() {
        let item = item("PN2007  .S3 1987", "LCPER", "STACKS", "");
        assert_eq!(item.callnum(), "PN2007 .S3 1987");
        assert_eq!(item.callnum_type(), CallNumberType::Lc);
        assert_eq!(item.group_key().scheme_family, "LC");
        assert_eq!(item.lopped_callnum(true), "PN2007 .S3");
        assert_eq!(item.lopped_callnum(false), "PN2007 .S3 1987");
    }

    #[test]
    fn test_group_key_translates_location() {
        let config = ItemConfig::default().with_location_name("STACKS", "Stacks");
        let item = Item::new(
            ItemFields {
                library: "GREEN".into(),
                home_location: "STACKS".into(),
                callnum: "QA76.9 .D3".into(),
                scheme: "LC".into(),
                ..Default::default()
            },
            &config,
        );
        assert_eq!(item.group_key(), &GroupKey::new("GREEN", "Stacks", "LC"));
    }
}
