//! Core catalog derivation modules

pub mod collection;
pub mod filename;
pub mod group;
pub mod item;

// Re-export main types and entry points
pub use collection::create_collection;
pub use filename::SceneCode;
pub use group::group_assets;
pub use item::{create_item, create_item_from_href, derive_item, HrefModifier};
