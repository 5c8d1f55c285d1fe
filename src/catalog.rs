//! Typed STAC record model
//!
//! Minimal data structures for the STAC entities this crate emits: Items for
//! single observations and the two static product Collections. Records are
//! plain serde structs rendered to JSON by the caller; extension fields that
//! vary per product live in `serde_json` maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const STAC_VERSION: &str = "1.0.0";

/// Media type of a cloud-optimized GeoTIFF asset
pub const MEDIA_TYPE_COG: &str = "image/tiff; application=geotiff; profile=cloud-optimized";
/// Media type of an XML metadata asset
pub const MEDIA_TYPE_XML: &str = "application/xml";

// Extension schema URIs declared on emitted records
pub const ITEM_ASSETS_EXTENSION: &str =
    "https://stac-extensions.github.io/item-assets/v1.0.0/schema.json";
pub const SAR_EXTENSION: &str = "https://stac-extensions.github.io/sar/v1.0.0/schema.json";
pub const SAT_EXTENSION: &str = "https://stac-extensions.github.io/sat/v1.0.0/schema.json";
pub const PROJECTION_EXTENSION: &str =
    "https://stac-extensions.github.io/projection/v1.0.0/schema.json";
pub const RASTER_EXTENSION: &str =
    "https://stac-extensions.github.io/raster/v1.1.0/schema.json";
pub const VERSION_EXTENSION: &str =
    "https://stac-extensions.github.io/version/v1.0.0/schema.json";
pub const CLASSIFICATION_EXTENSION: &str =
    "https://stac-extensions.github.io/classification/v1.0.0/schema.json";

/// STAC Item for one observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub type_: String,
    pub stac_version: String,
    pub stac_extensions: Vec<String>,
    pub id: String,
    pub geometry: Value,
    pub bbox: Vec<f64>,
    pub properties: Map<String, Value>,
    pub links: Vec<Link>,
    pub assets: BTreeMap<String, Asset>,
    pub collection: String,
}

/// One logical band (or the metadata companion) of an Item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub href: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub title: String,
    pub roles: Vec<String>,
    #[serde(rename = "raster:bands", skip_serializing_if = "Option::is_none")]
    pub raster_bands: Option<Vec<RasterBand>>,
    #[serde(
        rename = "classification:classes",
        skip_serializing_if = "Option::is_none"
    )]
    pub classification_classes: Option<Vec<ClassificationClass>>,
}

/// Raster extension band descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterBand {
    pub nodata: f64,
    pub data_type: String,
}

/// Classification extension class entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationClass {
    pub value: u32,
    pub name: String,
    pub description: String,
}

impl ClassificationClass {
    pub fn new(value: u32, name: &str, description: &str) -> Self {
        Self {
            value,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// STAC Collection for one product family
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "type")]
    pub type_: String,
    pub stac_version: String,
    pub stac_extensions: Vec<String>,
    pub id: String,
    pub title: String,
    pub description: String,
    pub license: String,
    pub keywords: Vec<String>,
    pub providers: Vec<Provider>,
    pub extent: Extent,
    pub summaries: Map<String, Value>,
    pub item_assets: BTreeMap<String, AssetDefinition>,
    /// Version extension tag (dataset revision letter)
    pub version: String,
    pub links: Vec<Link>,
}

/// Declared shape of an asset that items of a collection carry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDefinition {
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub description: String,
    pub roles: Vec<String>,
}

impl AssetDefinition {
    pub fn cog(title: &str, description: &str, role: &str) -> Self {
        Self {
            title: title.to_string(),
            media_type: MEDIA_TYPE_COG.to_string(),
            description: description.to_string(),
            roles: vec![role.to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub roles: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialExtent {
    pub bbox: Vec<[f64; 4]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalExtent {
    pub interval: Vec<[Option<String>; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Link {
    pub fn new(rel: &str, href: &str) -> Self {
        Self {
            rel: rel.to_string(),
            href: href.to_string(),
            media_type: None,
            title: None,
            description: None,
        }
    }
}

/// GeoJSON polygon covering a [west, south, east, north] bounding box
pub fn bbox_to_geometry(bbox: &[f64; 4]) -> Value {
    let (west, south, east, north) = (bbox[0], bbox[1], bbox[2], bbox[3]);
    serde_json::json!({
        "type": "Polygon",
        "coordinates": [[
            [west, south],
            [east, south],
            [east, north],
            [west, north],
            [west, south]
        ]]
    })
}
