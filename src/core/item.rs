//! Item derivation
//!
//! Builds one fully populated STAC Item per observation from the band-key to
//! href mapping, one opened raster header, and the static domain tables. All
//! acquisition parameters come from the filename convention; the raster
//! contributes geometry only.

use crate::catalog::{
    bbox_to_geometry, Asset, Item, Link, RasterBand, CLASSIFICATION_EXTENSION, MEDIA_TYPE_COG,
    MEDIA_TYPE_XML, PROJECTION_EXTENSION, RASTER_EXTENSION, SAR_EXTENSION, SAT_EXTENSION,
    STAC_VERSION,
};
use crate::constants::{
    alos_fnf_classification_classes, alos_mask_classification_classes, band_data_type,
    ALOS_FREQUENCY_BAND, ALOS_PALSAR_CF, ALOS_PALSAR_EPSG, ALOS_PALSAR_GSD,
    ALOS_PALSAR_INSTRUMENTS, ALOS_PALSAR_PLATFORMS, ALOS_PRODUCT_TYPE, GENERATION_2_YEAR,
    REVISED_NODATA_YEAR,
};
use crate::core::filename::SceneCode;
use crate::core::group::group_assets;
use crate::io::raster::open_raster;
use crate::types::{PalsarError, PalsarResult, Product, RasterInfo};
use serde_json::{json, Map};
use std::collections::{BTreeMap, HashMap};

/// Optional rewrite applied to an href before it is opened, e.g. signing a
/// blob URL for authenticated access
pub type HrefModifier<'a> = &'a dyn Fn(&str) -> String;

/// Platform and instrument for a two-digit acquisition year. Data before
/// 2015 comes from ALOS/PALSAR, 2015 and later from ALOS-2/PALSAR-2.
pub fn platform_for_year(year: u32) -> (&'static str, &'static str) {
    if year >= GENERATION_2_YEAR {
        (ALOS_PALSAR_PLATFORMS[1], ALOS_PALSAR_INSTRUMENTS[1])
    } else {
        (ALOS_PALSAR_PLATFORMS[0], ALOS_PALSAR_INSTRUMENTS[0])
    }
}

/// Nodata value for a band at a two-digit acquisition year. The nodata
/// convention changed with revision M: from 2017 onward the SAR backscatter,
/// incidence-angle and date bands reserve 1, while the classified bands keep 0.
pub fn nodata_for_band(year: u32, band: &str) -> f64 {
    if year >= REVISED_NODATA_YEAR {
        match band {
            "HH" | "HV" | "linci" | "date" => 1.0,
            _ => 0.0,
        }
    } else {
        0.0
    }
}

/// Create a STAC Item from a single asset's href.
///
/// `asset_href` should be either the `_C.tif` asset for the FNF product or
/// the XML metadata companion of a mosaic observation; siblings are grouped
/// by naming convention.
pub fn create_item_from_href(
    asset_href: &str,
    read_href_modifier: Option<HrefModifier>,
) -> PalsarResult<Item> {
    let assets = group_assets(asset_href)?;
    create_item(&assets, "", read_href_modifier)
}

/// Create a STAC Item from an already-grouped asset mapping.
///
/// One representative raster asset is opened to read the spatial reference;
/// all siblings of an observation share it. When `root_href` is non-empty,
/// asset hrefs are rewritten against it by basename.
pub fn create_item(
    assets_hrefs: &HashMap<String, String>,
    root_href: &str,
    read_href_modifier: Option<HrefModifier>,
) -> PalsarResult<Item> {
    let representative = representative_href(assets_hrefs)?;
    let open_href = match read_href_modifier {
        Some(modify) => modify(representative),
        None => representative.to_string(),
    };

    let raster = open_raster(&open_href)?;
    let item = derive_item(assets_hrefs, &raster, root_href)?;
    log::info!("derived item {} with {} assets", item.id, item.assets.len());
    Ok(item)
}

/// Pure derivation core: everything past the raster open. Split out so the
/// year- and band-dependent rules are testable without touching GDAL.
pub fn derive_item(
    assets_hrefs: &HashMap<String, String>,
    raster: &RasterInfo,
    root_href: &str,
) -> PalsarResult<Item> {
    if raster.epsg != ALOS_PALSAR_EPSG {
        return Err(PalsarError::InvalidGeometry(format!(
            "raster is EPSG:{}, ALOS data requires EPSG:{}",
            raster.epsg, ALOS_PALSAR_EPSG
        )));
    }

    let representative = representative_href(assets_hrefs)?;
    let stem = filename_stem(representative);
    let tokens: Vec<&str> = stem.split('_').collect();
    if tokens.len() < 3 {
        return Err(PalsarError::UnsupportedFormat(format!(
            "filename {} does not follow the tile naming convention",
            stem
        )));
    }

    // Two-digit acquisition year, second underscore-delimited token
    let year_token = tokens[1];
    let year: u32 = year_token.parse().map_err(|_| {
        PalsarError::UnsupportedFormat(format!("{} is not a two-digit year in {}", year_token, stem))
    })?;

    let product = if tokens[2] == "C" {
        Product::ForestNonForest
    } else {
        Product::Mosaic
    };

    // Canonical observation identifier: tile and year, plus the scene code
    // for mosaics; the band-specific segment in between is dropped
    let item_root = match product {
        Product::ForestNonForest => format!("{}_{}", tokens[0], tokens[1]),
        Product::Mosaic => format!("{}_{}_{}", tokens[0], tokens[1], tokens[tokens.len() - 1]),
    };
    let item_id = format!("{}_{}", item_root, product.id_suffix());
    let collection = product.collection_id();

    // Two-digit years are expanded into the 2000s
    let start_datetime = format!("20{}-01-01T00:00:00Z", year_token);
    let end_datetime = format!("20{}-12-31T23:59:59Z", year_token);
    chrono::DateTime::parse_from_rfc3339(&start_datetime).map_err(|_| {
        PalsarError::UnsupportedFormat(format!(
            "year token {} does not yield a valid acquisition date",
            year_token
        ))
    })?;

    let bbox = raster.bbox.to_vec();
    let geometry = bbox_to_geometry(&raster.bbox);

    let mut properties = Map::new();
    properties.insert("title".to_string(), json!(item_id));
    properties.insert(
        "description".to_string(),
        match product {
            Product::Mosaic => json!("Annual PALSAR Mosaic"),
            Product::ForestNonForest => json!("Forest/Non-Forest Classification"),
        },
    );
    properties.insert("datetime".to_string(), json!(start_datetime));
    properties.insert("start_datetime".to_string(), json!(start_datetime));
    properties.insert("end_datetime".to_string(), json!(end_datetime));

    let (platform, instrument) = platform_for_year(year);
    properties.insert("platform".to_string(), json!(platform));
    properties.insert("instruments".to_string(), json!([instrument]));
    properties.insert("gsd".to_string(), json!(ALOS_PALSAR_GSD));

    // Projection fields are attached unconditionally for downstream geometry
    // tooling
    properties.insert("proj:epsg".to_string(), json!(ALOS_PALSAR_EPSG));
    properties.insert("proj:bbox".to_string(), json!(bbox));
    properties.insert(
        "proj:shape".to_string(),
        json!([raster.shape.0, raster.shape.1]),
    );
    properties.insert(
        "proj:transform".to_string(),
        json!(raster.transform.to_vec()),
    );

    let mut stac_extensions = vec![
        PROJECTION_EXTENSION.to_string(),
        RASTER_EXTENSION.to_string(),
    ];

    if product == Product::Mosaic {
        stac_extensions.push(SAR_EXTENSION.to_string());
        stac_extensions.push(SAT_EXTENSION.to_string());

        let scene = SceneCode::parse(tokens[tokens.len() - 1])?;
        properties.insert("sar:instrument_mode".to_string(), json!(scene.mode.to_string()));
        properties.insert(
            "sar:observation_direction".to_string(),
            json!(scene.observation.as_str()),
        );
        properties.insert("sar:frequency_band".to_string(), json!(ALOS_FREQUENCY_BAND));
        properties.insert(
            "sar:polarizations".to_string(),
            json!(scene.polarization_count.polarizations()),
        );
        properties.insert("sar:product_type".to_string(), json!(ALOS_PRODUCT_TYPE));
        // Correction factor to convert DN to dB
        properties.insert("cf".to_string(), json!(ALOS_PALSAR_CF));
        properties.insert("sat:orbit_state".to_string(), json!(scene.orbit.as_str()));
        properties.insert("palsar:beam_number".to_string(), json!(scene.beam_number));
        properties.insert(
            "palsar:number_of_polarizations".to_string(),
            json!(scene.polarization_count.code().to_string()),
        );
    }

    if assets_hrefs.contains_key("C") || assets_hrefs.contains_key("mask") {
        stac_extensions.push(CLASSIFICATION_EXTENSION.to_string());
    }

    let mut assets = BTreeMap::new();
    for (key, value) in assets_hrefs {
        let href = if root_href.is_empty() {
            value.clone()
        } else {
            format!(
                "{}/{}",
                root_href.trim_end_matches('/'),
                value.rsplit('/').next().unwrap_or(value)
            )
        };

        let (media_type, role) = if href.ends_with(".xml") {
            (MEDIA_TYPE_XML, "metadata")
        } else {
            (MEDIA_TYPE_COG, "data")
        };
        let title = match product {
            Product::ForestNonForest => "FNF".to_string(),
            Product::Mosaic => key.clone(),
        };

        let raster_bands = if media_type == MEDIA_TYPE_COG {
            band_data_type(key).map(|data_type| {
                vec![RasterBand {
                    nodata: nodata_for_band(year, key),
                    data_type: data_type.to_string(),
                }]
            })
        } else {
            None
        };

        let classification_classes = match key.as_str() {
            "C" => Some(alos_fnf_classification_classes()),
            "mask" => Some(alos_mask_classification_classes()),
            _ => None,
        };

        assets.insert(
            key.clone(),
            Asset {
                href,
                media_type: media_type.to_string(),
                title,
                roles: vec![role.to_string()],
                raster_bands,
                classification_classes,
            },
        );
    }

    let collection_href = if root_href.is_empty() {
        format!("{}.json", collection)
    } else {
        format!("{}/{}.json", root_href.trim_end_matches('/'), collection)
    };

    Ok(Item {
        type_: "Feature".to_string(),
        stac_version: STAC_VERSION.to_string(),
        stac_extensions,
        id: item_id,
        geometry,
        bbox,
        properties,
        links: vec![Link::new("collection", &collection_href)],
        assets,
        collection: collection.to_string(),
    })
}

/// Pick the asset whose header is read for spatial metadata. Any raster
/// sibling works; the XML companion is skipped since it is not a raster.
fn representative_href(assets_hrefs: &HashMap<String, String>) -> PalsarResult<&String> {
    assets_hrefs
        .iter()
        .find(|(key, _)| key.as_str() != "metadata")
        .or_else(|| assets_hrefs.iter().next())
        .map(|(_, href)| href)
        .ok_or_else(|| {
            PalsarError::UnsupportedFormat("empty asset mapping for observation".to_string())
        })
}

fn filename_stem(href: &str) -> &str {
    let filename = href.rsplit('/').next().unwrap_or(href);
    match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_boundary_is_2015() {
        assert_eq!(platform_for_year(14), ("ALOS", "PALSAR"));
        assert_eq!(platform_for_year(15), ("ALOS-2", "PALSAR-2"));
        assert_eq!(platform_for_year(21), ("ALOS-2", "PALSAR-2"));
    }

    #[test]
    fn nodata_boundary_is_2017() {
        assert_eq!(nodata_for_band(16, "HH"), 0.0);
        assert_eq!(nodata_for_band(17, "HH"), 1.0);
        assert_eq!(nodata_for_band(17, "HV"), 1.0);
        assert_eq!(nodata_for_band(17, "linci"), 1.0);
        assert_eq!(nodata_for_band(17, "date"), 1.0);
        assert_eq!(nodata_for_band(17, "mask"), 0.0);
        assert_eq!(nodata_for_band(17, "C"), 0.0);
        // Quad cross-polarizations keep the default
        assert_eq!(nodata_for_band(17, "VH"), 0.0);
        assert_eq!(nodata_for_band(17, "VV"), 0.0);
    }

    #[test]
    fn filename_stem_strips_location_and_extension() {
        assert_eq!(
            filename_stem("https://example.com/a/b/N00E072_21_F02DAR.xml"),
            "N00E072_21_F02DAR"
        );
        assert_eq!(filename_stem("/data/N00E006_20_C.tif"), "N00E006_20_C");
    }
}
