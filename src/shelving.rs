//! Per-record shelving.
//!
//! [`shelve_items`] runs the whole engine over one record's items: it groups
//! browsable items, lops each group, and derives the keys every item needs
//! for display, sorting and shelf browse.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::call_number_type::CallNumberType;
use crate::config::ItemConfig;
use crate::group::{lop_group, GroupKey, ELLIPSIS};
use crate::item::Item;
use crate::shelf_key::{reverse_key, shelf_key_with_type};
use crate::volume_sort::volume_sort_key;

/// Display value of the lopped call number for items shelved by title.
pub const SHELVED_BY_TITLE: &str = "Shelved by title";

/// Everything derived for one item.
///
/// Key fields are empty for items that have no shelf position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemShelving {
    /// Barcode
    pub barcode: String,
    /// Library code
    pub library: String,
    /// Home location code
    pub home_location: String,
    /// Current location code
    pub current_location: String,
    /// Scheme the shelf key was built with
    pub callnum_type: CallNumberType,
    /// Call number with whitespace collapsed
    pub full_callnum: String,
    /// Lopped call number, possibly ending in an ellipsis
    pub lopped_callnum: String,
    /// Forward shelf key of the lopped call number
    pub shelfkey: String,
    /// Reverse shelf key of the lopped call number
    pub reverse_shelfkey: String,
    /// Key ordering the volumes that share a lopped call number
    pub volume_sort: String,
}

impl ItemShelving {
    fn unkeyed(item: &Item, full_callnum: String, lopped_callnum: String) -> Self {
        ItemShelving {
            barcode: item.barcode().to_string(),
            library: item.library().to_string(),
            home_location: item.home_location().to_string(),
            current_location: item.current_location().to_string(),
            callnum_type: item.callnum_type(),
            full_callnum,
            lopped_callnum,
            shelfkey: String::new(),
            reverse_shelfkey: String::new(),
            volume_sort: String::new(),
        }
    }

    /// Whether the item has a shelf position.
    #[must_use]
    pub fn has_shelfkey(&self) -> bool {
        !self.shelfkey.is_empty()
    }
}

/// Derive shelving for every item of one record.
///
/// Skipped items are dropped. Items with an ignored call number get empty
/// derived fields; online items keep their call number without keys; items
/// shelved by title show [`SHELVED_BY_TITLE`]. All other items are lopped in
/// groups sharing library, location and scheme family, and keyed on the
/// ellipsis-free lopped value.
///
/// # Examples
///
/// ```
/// use callnum::{shelve_items, Item, ItemConfig, ItemFields};
///
/// let config = ItemConfig::default();
/// let items: Vec<Item> = ["E184.S75 R47 V.1", "E184.S75 R47 V.2"]
///     .iter()
///     .map(|callnum| {
///         let fields = ItemFields {
///             callnum: (*callnum).into(),
///             scheme: "LC".into(),
///             library: "GREEN".into(),
///             home_location: "STACKS".into(),
///             ..Default::default()
///         };
///         Item::new(fields, &config)
///     })
///     .collect();
///
/// let shelving = shelve_items(&items, false, &config);
/// assert_eq!(shelving[0].lopped_callnum, "E184.S75 R47 ...");
/// assert_eq!(shelving[0].shelfkey, shelving[1].shelfkey);
/// assert!(shelving[0].volume_sort < shelving[1].volume_sort);
/// ```
#[must_use]
pub fn shelve_items(items: &[Item], is_serial: bool, config: &ItemConfig) -> Vec<ItemShelving> {
    let lopped = group_lopped(items, config);

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_skipped())
        .map(|(index, item)| {
            if item.has_ignored_callnum() {
                return ItemShelving::unkeyed(item, String::new(), String::new());
            }
            let full = item.callnum().to_string();
            if item.is_shelved_by_title() {
                return ItemShelving::unkeyed(item, full, SHELVED_BY_TITLE.to_string());
            }
            match lopped.get(&index) {
                Some(lopped) => keyed(item, lopped, is_serial),
                None => ItemShelving::unkeyed(item, full.clone(), full),
            }
        })
        .collect()
}

/// Lopped value of every browsable item, by index into `items`.
fn group_lopped(items: &[Item], config: &ItemConfig) -> HashMap<usize, String> {
    let mut groups: IndexMap<&GroupKey, Vec<usize>> = IndexMap::new();
    for (index, item) in items.iter().enumerate().filter(|(_, item)| item.is_browsable()) {
        groups.entry(item.group_key()).or_default().push(index);
    }

    let mut lopped = HashMap::new();
    for members in groups.values() {
        let callnums: Vec<&str> = members.iter().map(|&i| items[i].callnum()).collect();
        let values = lop_group(&callnums, config.min_group_lop_length);
        lopped.extend(members.iter().copied().zip(values));
    }
    lopped
}

fn keyed(item: &Item, lopped: &str, is_serial: bool) -> ItemShelving {
    let bare = lopped.strip_suffix(ELLIPSIS).unwrap_or(lopped);
    let (shelfkey, callnum_type) = shelf_key_with_type(bare, item.callnum_type());
    let volume_sort = volume_sort_key(item.callnum(), lopped, &shelfkey, callnum_type, is_serial);

    ItemShelving {
        callnum_type,
        reverse_shelfkey: reverse_key(&shelfkey),
        shelfkey,
        volume_sort,
        ..ItemShelving::unkeyed(item, item.callnum().to_string(), lopped.to_string())
    }
}

/// Barcode of the item that represents the record in shelf browse.
///
/// Only items with a shelf key qualify. Preference goes to the scheme ranked
/// first (LC, Dewey, SUDOC, Other, Thesis), then to the shelf key shared by
/// the most items, then to the lowest shelf key, then to the lowest barcode.
#[must_use]
pub fn preferred_barcode(shelving: &[ItemShelving]) -> Option<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in shelving.iter().filter(|s| s.has_shelfkey()) {
        *counts.entry(item.shelfkey.as_str()).or_default() += 1;
    }

    shelving
        .iter()
        .filter(|s| s.has_shelfkey())
        .min_by(|a, b| {
            a.callnum_type
                .cmp(&b.callnum_type)
                .then_with(|| counts[b.shelfkey.as_str()].cmp(&counts[a.shelfkey.as_str()]))
                .then_with(|| a.shelfkey.cmp(&b.shelfkey))
                .then_with(|| a.barcode.cmp(&b.barcode))
        })
        .map(|s| s.barcode.as_str())
}
