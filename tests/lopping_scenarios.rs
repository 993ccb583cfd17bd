//! End-to-end lopping scenarios through items and the shelving pipeline.

mod common;

use callnum::{lop, shelf_key, shelve_items, CallNumberType, ItemConfig};
use common::{items_at, lopped_values, make_item};

#[test]
fn test_lc_year_only_lopped_for_serials() {
    let item = make_item("1", "PN2007 .S3 1987", "LC", "STACKS");
    assert_eq!(item.lopped_callnum(true), "PN2007 .S3");
    assert_eq!(item.lopped_callnum(false), "PN2007 .S3 1987");
}

#[test]
fn test_container_suffix_regardless_of_serial() {
    let item = make_item("1", "M1522 BOX 1", "ALPHANUM", "ARCHIVE");
    assert_eq!(item.callnum_type(), CallNumberType::Other);
    assert_eq!(item.lopped_callnum(true), "M1522");
    assert_eq!(item.lopped_callnum(false), "M1522");
}

#[test]
fn test_protected_literal_single_item() {
    let items = items_at("MEDIA", "ALPHANUM", &["MCD 17393 DISC 1"]);
    assert_eq!(lopped_values(&items, false), ["MCD 17393 DISC 1"]);
    assert_eq!(lopped_values(&items, true), ["MCD 17393 DISC 1"]);
    assert_eq!(items[0].lopped_callnum(false), "MCD 17393 DISC 1");
}

#[test]
fn test_protected_literal_grouped() {
    // discs of one recording share the number before the container
    let items = items_at("MEDIA", "ALPHANUM", &["MCD 17393 DISC 1", "MCD 17393 DISC 2"]);
    assert_eq!(lopped_values(&items, false), ["MCD 17393 ...", "MCD 17393 ..."]);

    // but different recordings never group down to the bare prefix
    let items = items_at("MEDIA", "ALPHANUM", &["MCD 17393 DISC 1", "MCD 20114 DISC 1"]);
    assert_eq!(lopped_values(&items, false), ["MCD 17393 DISC 1", "MCD 20114 DISC 1"]);
}

#[test]
fn test_multivolume_set_collapses() {
    let items = items_at("STACKS", "LC", &["E184.S75 R47 V.1", "E184.S75 R47 V.2"]);
    assert_eq!(lopped_values(&items, false), ["E184.S75 R47 ...", "E184.S75 R47 ..."]);
}

#[test]
fn test_reclassified_number_gets_dewey_key() {
    let item = make_item("1", "111.11 .A5", "LC", "STACKS");
    assert_eq!(item.callnum_type(), CallNumberType::Dewey);

    let shelving = shelve_items(&[item], false, &ItemConfig::default());
    assert!(shelving[0].shelfkey.starts_with("dewey "));
    assert!(!shelving[0].shelfkey.starts_with("lc "));
}

#[test]
fn test_unparseable_lc_gets_other_key() {
    let item = make_item("1", "3781 2009 R", "LC", "STACKS");
    assert_eq!(item.callnum_type(), CallNumberType::Other);
    assert_eq!(shelf_key(item.callnum(), CallNumberType::Lc), shelf_key(item.callnum(), CallNumberType::Other));
}

#[test]
fn test_serial_dates_in_group() {
    let items = items_at(
        "STACKS",
        "LCPER",
        &["QA76.9 .D3 1999", "QA76.9 .D3 2000", "QA76.9 .D3 2001"],
    );
    let lopped = lopped_values(&items, true);
    assert!(lopped.iter().all(|l| l == "QA76.9 .D3 ..."), "{lopped:?}");
}

#[test]
fn test_group_of_unrelated_numbers_keeps_full_values() {
    let items = items_at("STACKS", "LC", &["PN2007 .S3 V.1", "QA76.9 .D3 V.2"]);
    assert_eq!(lopped_values(&items, false), ["PN2007 .S3 V.1", "QA76.9 .D3 V.2"]);
}

#[test]
fn test_sudoc_volumes() {
    assert_eq!(lop("I 19.79:EC 7/V.2", CallNumberType::Sudoc, false), "I 19.79:EC 7");
    let items = items_at("FED-DOCS", "SUDOC", &["I 19.79:EC 7/V.1", "I 19.79:EC 7/V.2"]);
    assert_eq!(lopped_values(&items, false), ["I 19.79:EC 7 ...", "I 19.79:EC 7 ..."]);
}

#[test]
fn test_archival_boxes_group() {
    let items = items_at("ARCHIVE", "ALPHANUM", &["SC0340 BOX 1", "SC0340 BOX 2", "SC0340 BOX 12"]);
    let lopped = lopped_values(&items, false);
    assert!(lopped.iter().all(|l| l == "SC0340 ..."), "{lopped:?}");
}
