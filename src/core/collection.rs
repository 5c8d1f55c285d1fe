//! Collection factory
//!
//! The two product collections are pure functions of the static domain
//! tables. There is no per-item state here, so results can be cached
//! process-wide.

use crate::catalog::{
    Collection, Extent, SpatialExtent, TemporalExtent, CLASSIFICATION_EXTENSION,
    ITEM_ASSETS_EXTENSION, PROJECTION_EXTENSION, RASTER_EXTENSION, SAR_EXTENSION, SAT_EXTENSION,
    STAC_VERSION, VERSION_EXTENSION,
};
use crate::constants::{
    alos_fnf_item_assets, alos_mos_item_assets, alos_palsar_links, alos_palsar_providers,
    ALOS_FNF_DESCRIPTION, ALOS_FNF_REVISION, ALOS_FNF_TEMPORAL_EXTENT, ALOS_MOS_DESCRIPTION,
    ALOS_MOS_REVISION, ALOS_MOS_TEMPORAL_EXTENT, ALOS_PALSAR_INSTRUMENTS, ALOS_PALSAR_PLATFORMS,
    ALOS_SPATIAL_EXTENT,
};
use crate::types::{LookDirection, OrbitDirection, PolarizationCount, Product};
use serde_json::{json, Map};

/// Create the STAC Collection for a product family from the static domain
/// tables.
pub fn create_collection(product: Product) -> Collection {
    let mut summaries = Map::new();
    summaries.insert("platform".to_string(), json!(ALOS_PALSAR_PLATFORMS));
    summaries.insert("instruments".to_string(), json!(ALOS_PALSAR_INSTRUMENTS));

    let (id, title, description, keywords, temporal, item_assets, version) = match product {
        Product::ForestNonForest => (
            product.collection_id(),
            "ALOS Forest/Non-Forest Annual Mosaic",
            ALOS_FNF_DESCRIPTION,
            vec!["ALOS", "JAXA", "Forest", "Land Cover", "Global"],
            ALOS_FNF_TEMPORAL_EXTENT,
            alos_fnf_item_assets(),
            ALOS_FNF_REVISION,
        ),
        Product::Mosaic => (
            product.collection_id(),
            "ALOS PALSAR Annual Mosaic",
            ALOS_MOS_DESCRIPTION,
            vec!["ALOS", "JAXA", "Remote Sensing", "Global"],
            ALOS_MOS_TEMPORAL_EXTENT,
            alos_mos_item_assets(),
            ALOS_MOS_REVISION,
        ),
    };

    if product == Product::Mosaic {
        summaries.insert(
            "sar:observation_direction".to_string(),
            json!([LookDirection::Left.as_str(), LookDirection::Right.as_str()]),
        );
        summaries.insert("sar:instrument_mode".to_string(), json!(["F", "U"]));
        summaries.insert(
            "sar:polarizations".to_string(),
            json!([
                PolarizationCount::Dual.polarizations(),
                PolarizationCount::Quad.polarizations(),
            ]),
        );
        summaries.insert(
            "sat:orbit_state".to_string(),
            json!([
                OrbitDirection::Ascending.as_str(),
                OrbitDirection::Descending.as_str(),
            ]),
        );
        summaries.insert(
            "palsar:number_of_polarizations".to_string(),
            json!([
                PolarizationCount::Dual.code().to_string(),
                PolarizationCount::Quad.code().to_string(),
            ]),
        );
    }

    Collection {
        type_: "Collection".to_string(),
        stac_version: STAC_VERSION.to_string(),
        stac_extensions: vec![
            ITEM_ASSETS_EXTENSION.to_string(),
            SAR_EXTENSION.to_string(),
            SAT_EXTENSION.to_string(),
            PROJECTION_EXTENSION.to_string(),
            RASTER_EXTENSION.to_string(),
            VERSION_EXTENSION.to_string(),
            CLASSIFICATION_EXTENSION.to_string(),
        ],
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        license: "proprietary".to_string(),
        keywords: keywords.into_iter().map(String::from).collect(),
        providers: alos_palsar_providers(),
        extent: Extent {
            spatial: SpatialExtent {
                bbox: vec![ALOS_SPATIAL_EXTENT],
            },
            temporal: TemporalExtent {
                interval: vec![[
                    Some(temporal.0.to_string()),
                    Some(temporal.1.to_string()),
                ]],
            },
        },
        summaries,
        item_assets,
        version: version.to_string(),
        links: alos_palsar_links(),
    }
}
