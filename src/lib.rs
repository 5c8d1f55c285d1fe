//! palsar-stac: STAC metadata derivation for ALOS PALSAR products
//!
//! Derives STAC Items and Collections for the JAXA ALOS PALSAR annual mosaic
//! (MOS) and Forest/Non-Forest (FNF) products from filename conventions,
//! raster headers and static domain constants. Asset grouping, acquisition
//! parameters, nodata policy and platform selection all follow the published
//! product naming convention and revision history.

pub mod catalog;
pub mod constants;
pub mod core;
pub mod io;
pub mod types;

// Re-export the main entry points for easier access
pub use catalog::{Collection, Item};
pub use crate::core::{
    create_collection, create_item, create_item_from_href, group_assets, SceneCode,
};
pub use types::{PalsarError, PalsarResult, Product, RasterInfo};
