//! Static domain constants for the ALOS PALSAR mosaic and FNF products
//!
//! These values apply to data from 2015 and newer; review before extending
//! the catalog to older acquisitions.

use crate::catalog::{AssetDefinition, ClassificationClass, Link, Provider, MEDIA_TYPE_XML};
use std::collections::BTreeMap;

/// Platform names, generation 1 then generation 2
pub const ALOS_PALSAR_PLATFORMS: [&str; 2] = ["ALOS", "ALOS-2"];
/// Instrument names, generation 1 then generation 2
pub const ALOS_PALSAR_INSTRUMENTS: [&str; 2] = ["PALSAR", "PALSAR-2"];

/// Ground sample distance in meters
pub const ALOS_PALSAR_GSD: u32 = 25;
/// Required CRS of all source rasters
pub const ALOS_PALSAR_EPSG: i32 = 4326;
/// Calibration factor to convert DN to dB
pub const ALOS_PALSAR_CF: &str = "83.0 dB";

pub const ALOS_FREQUENCY_BAND: &str = "L";
/// Geometric Terrain Corrected
pub const ALOS_PRODUCT_TYPE: &str = "GTC";

/// Two-digit year from which acquisitions come from the second-generation
/// platform (ALOS-2/PALSAR-2)
pub const GENERATION_2_YEAR: u32 = 15;
/// Two-digit year from which the revised per-band nodata convention applies
pub const REVISED_NODATA_YEAR: u32 = 17;

pub const ALOS_SPATIAL_EXTENT: [f64; 4] = [-180.0, -56.0, 180.0, 85.0];
pub const ALOS_MOS_TEMPORAL_EXTENT: (&str, &str) =
    ("2015-01-01T00:00:00Z", "2020-12-31T23:59:59Z");
pub const ALOS_FNF_TEMPORAL_EXTENT: (&str, &str) =
    ("2015-01-01T00:00:00Z", "2016-12-31T23:59:59Z");

pub const ALOS_DESCRIPTION: &str = "Global 25 m Resolution PALSAR-2/PALSAR Mosaic \
     and Forest/Non-Forest Map (FNF) Dataset Description";
pub const ALOS_MOS_DESCRIPTION: &str =
    "Global 25 m Resolution PALSAR-2/PALSAR Mosaic (MOS)";
pub const ALOS_FNF_DESCRIPTION: &str =
    "Global 25 m Resolution PALSAR-2/PALSAR Forest/Non-Forest Map (FNF)";

// If you update the revision, also update the handbook link
pub const ALOS_MOS_REVISION: &str = "M";
pub const ALOS_FNF_REVISION: &str = "M";

pub fn alos_palsar_providers() -> Vec<Provider> {
    vec![
        Provider {
            name: "Japan Aerospace Exploration Agency".to_string(),
            roles: vec![
                "producer".to_string(),
                "processor".to_string(),
                "licensor".to_string(),
            ],
            url: "https://www.eorc.jaxa.jp/ALOS/en/dataset/fnf_e.htm".to_string(),
        },
        Provider {
            name: "Microsoft Planetary Computer".to_string(),
            roles: vec!["host".to_string(), "processor".to_string()],
            url: "https://planetarycomputer.microsoft.com/".to_string(),
        },
    ]
}

pub fn alos_palsar_links() -> Vec<Link> {
    vec![
        Link {
            rel: "handbook".to_string(),
            href: "https://www.eorc.jaxa.jp/ALOS/en/dataset/pdf/DatasetDescription\
                   _PALSAR2_Mosaic_FNF_revM.pdf"
                .to_string(),
            media_type: Some("application/pdf".to_string()),
            title: Some(ALOS_DESCRIPTION.to_string()),
            description: Some("Also includes data usage information".to_string()),
        },
        Link {
            rel: "license".to_string(),
            href: "https://earth.jaxa.jp/policy/en.html".to_string(),
            media_type: None,
            title: Some("JAXA Terms of Use of Research Data".to_string()),
            description: None,
        },
    ]
}

/// Declared item assets of the mosaic collection
pub fn alos_mos_item_assets() -> BTreeMap<String, AssetDefinition> {
    let mut assets = BTreeMap::new();
    assets.insert(
        "HH".to_string(),
        AssetDefinition::cog(
            "HH",
            "HH polarization backscattering coefficient, 16-bit DN.",
            "data",
        ),
    );
    assets.insert(
        "HV".to_string(),
        AssetDefinition::cog(
            "HV",
            "HV polarization backscattering coefficient, 16-bit DN.",
            "data",
        ),
    );
    assets.insert(
        "linci".to_string(),
        AssetDefinition::cog(
            "linci",
            "Local incidence angle (degrees).",
            "local-incidence-angle",
        ),
    );
    assets.insert(
        "date".to_string(),
        AssetDefinition::cog("date", "Observation date (days since Jan 1, 1970).", "date"),
    );
    assets.insert(
        "mask".to_string(),
        AssetDefinition::cog("mask", "Quality Mask", "data-mask"),
    );
    assets.insert(
        "metadata".to_string(),
        AssetDefinition {
            title: "metadata".to_string(),
            media_type: MEDIA_TYPE_XML.to_string(),
            description: "Observation metadata companion file.".to_string(),
            roles: vec!["metadata".to_string()],
        },
    );
    assets
}

/// Declared item assets of the FNF collection
pub fn alos_fnf_item_assets() -> BTreeMap<String, AssetDefinition> {
    let mut assets = BTreeMap::new();
    assets.insert(
        "C".to_string(),
        AssetDefinition::cog("C", "Forest vs Non-Forest classification", "data"),
    );
    assets
}

/// Raster data type for a band key, when the band carries raster semantics
pub fn band_data_type(band: &str) -> Option<&'static str> {
    match band {
        "HH" | "HV" | "VH" | "VV" => Some("uint16"),
        "date" => Some("uint16"),
        "linci" | "mask" | "C" => Some("uint8"),
        _ => None,
    }
}

/// Class table of the FNF classification band
pub fn alos_fnf_classification_classes() -> Vec<ClassificationClass> {
    vec![
        ClassificationClass::new(0, "nodata", "No data"),
        ClassificationClass::new(1, "forest_90", "Forest (canopy cover over 90%)"),
        ClassificationClass::new(2, "forest_10", "Forest (canopy cover 10% to 90%)"),
        ClassificationClass::new(3, "non_forest", "Non-forest"),
        ClassificationClass::new(4, "water", "Water"),
    ]
}

/// Class table of the mosaic quality mask band
pub fn alos_mask_classification_classes() -> Vec<ClassificationClass> {
    vec![
        ClassificationClass::new(0, "no_data", "No data"),
        ClassificationClass::new(50, "ocean_water", "Ocean and water"),
        ClassificationClass::new(100, "lay_over", "Layover"),
        ClassificationClass::new(150, "shadowing", "Shadowing"),
        ClassificationClass::new(255, "land", "Normal land"),
    ]
}
