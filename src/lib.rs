#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! ## Modules
//!
//! - [`normalize`] - Whitespace, period and class-letter canonicalization
//! - [`call_number_type`] - Schemes and scheme reclassification
//! - [`lc`] - Library of Congress structure and shelf keys
//! - [`dewey`] - Dewey Decimal structure and shelf keys
//! - [`lopping`] - Volume, date and container suffix stripping
//! - [`shelf_key`] - Scheme-prefixed forward and reverse shelf keys
//! - [`group`] - Longest-common-prefix lopping across an item group
//! - [`volume_sort`] - Ordering the volumes of one lopped call number
//! - [`item`] - Items and their configuration-derived flags
//! - [`shelving`] - Per-record pipeline and preferred item
//! - [`facet`] - Call number facet labels
//! - [`config`] - Location and call number lists
//! - [`error`] - Error types

pub mod call_number_type;
pub mod config;
pub mod dewey;
pub mod error;
pub mod facet;
pub mod group;
pub mod item;
pub mod lc;
pub mod lopping;
pub mod normalize;
pub mod shelf_key;
pub mod shelving;
pub mod volume_sort;

pub use call_number_type::CallNumberType;
pub use config::ItemConfig;
pub use error::{CallNumError, Result};
pub use facet::callnum_facets;
pub use group::{lop_group, GroupKey, ELLIPSIS};
pub use item::{Item, ItemFields};
pub use lopping::lop;
pub use shelf_key::{reverse_key, reverse_shelf_key, shelf_key, shelf_key_with_type};
pub use shelving::{preferred_barcode, shelve_items, ItemShelving, SHELVED_BY_TITLE};
pub use volume_sort::volume_sort_key;
