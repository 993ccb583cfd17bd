//! Common test helpers shared across the integration tests.

use callnum::{shelve_items, Item, ItemConfig, ItemFields};

/// Library every helper item belongs to.
pub const LIBRARY: &str = "GREEN";

/// Builds an item at `location` with the default configuration.
pub fn make_item(barcode: &str, callnum: &str, scheme: &str, location: &str) -> Item {
    Item::new(
        ItemFields {
            barcode: barcode.to_string(),
            library: LIBRARY.to_string(),
            home_location: location.to_string(),
            current_location: String::new(),
            callnum: callnum.to_string(),
            scheme: scheme.to_string(),
        },
        &ItemConfig::default(),
    )
}

/// Builds one item per call number, all at the same location and scheme.
///
/// Barcodes are the item positions, starting at 1.
#[allow(dead_code)]
pub fn items_at(location: &str, scheme: &str, callnums: &[&str]) -> Vec<Item> {
    callnums
        .iter()
        .enumerate()
        .map(|(i, callnum)| make_item(&(i + 1).to_string(), callnum, scheme, location))
        .collect()
}

/// Lopped call numbers the shelving pipeline assigns to `items`.
#[allow(dead_code)]
pub fn lopped_values(items: &[Item], is_serial: bool) -> Vec<String> {
    shelve_items(items, is_serial, &ItemConfig::default())
        .into_iter()
        .map(|s| s.lopped_callnum)
        .collect()
}
