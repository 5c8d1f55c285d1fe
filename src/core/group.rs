//! Sibling asset discovery
//!
//! One observation is distributed as several co-located files that share a
//! naming convention. Given any recognized entry point (the FNF raster or
//! the mosaic XML metadata companion), reconstruct the full band-key to href
//! mapping for that observation.

use crate::types::{PalsarError, PalsarResult};
use std::collections::HashMap;

/// Band kinds present in every mosaic observation; quad-polarization scenes
/// add `sl_VH` and `sl_VV`
const MOSAIC_BAND_KINDS: [&str; 5] = ["date", "linci", "mask", "sl_HH", "sl_HV"];

/// Group all sibling assets of the observation `href` belongs to.
///
/// `href` must be either the `*_C.tif` FNF raster (which has no siblings) or
/// the mosaic `*.xml` metadata companion. Sibling hrefs are reconstructed
/// against the same parent location, e.g. the metadata file
/// `.../N00E072_21_F02DAR.xml` yields the bands
/// `.../N00E072_21_<kind>_F02DAR.tif` plus itself under `metadata`.
pub fn group_assets(href: &str) -> PalsarResult<HashMap<String, String>> {
    let filename = href.rsplit('/').next().unwrap_or(href);

    if filename.ends_with("_C.tif") {
        log::debug!("{} is an FNF raster, no siblings", filename);
        return Ok(HashMap::from([("C".to_string(), href.to_string())]));
    }

    if let Some(stem) = filename.strip_suffix(".xml") {
        let parent = &href[..href.len() - filename.len()];
        let (tile_prefix, mode_code) = stem.rsplit_once('_').ok_or_else(|| {
            PalsarError::UnsupportedFormat(format!(
                "metadata filename {} has no scene code segment",
                filename
            ))
        })?;

        let mut kinds: Vec<&str> = MOSAIC_BAND_KINDS.to_vec();
        if mode_code.chars().nth(3) == Some('Q') {
            kinds.extend(["sl_VH", "sl_VV"]);
        }
        log::debug!("{} groups into {} band assets", filename, kinds.len());

        let mut assets = HashMap::new();
        for kind in kinds {
            let key = kind.rsplit('_').next().unwrap_or(kind);
            assets.insert(
                key.to_string(),
                format!("{}{}_{}_{}.tif", parent, tile_prefix, kind, mode_code),
            );
        }
        assets.insert("metadata".to_string(), href.to_string());
        return Ok(assets);
    }

    Err(PalsarError::UnsupportedFormat(format!(
        "{} is neither an FNF raster nor a metadata companion",
        filename
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnf_raster_groups_alone() {
        let assets = group_assets("https://example.com/2020/N00E005/N00E006_20_C.tif").unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(
            assets["C"],
            "https://example.com/2020/N00E005/N00E006_20_C.tif"
        );
    }

    #[test]
    fn dual_metadata_groups_six_assets() {
        let assets = group_assets("https://example.com/2021/N00E070/N00E072_21_F02DAR.xml").unwrap();
        let mut keys: Vec<&str> = assets.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["HH", "HV", "date", "linci", "mask", "metadata"]);
        assert_eq!(
            assets["HH"],
            "https://example.com/2021/N00E070/N00E072_21_sl_HH_F02DAR.tif"
        );
        assert_eq!(
            assets["date"],
            "https://example.com/2021/N00E070/N00E072_21_date_F02DAR.tif"
        );
    }

    #[test]
    fn quad_metadata_adds_cross_polarizations() {
        let assets = group_assets("https://example.com/2017/N20E140/N20E144_17_FP6QAR.xml").unwrap();
        assert_eq!(assets.len(), 8);
        assert_eq!(
            assets["VH"],
            "https://example.com/2017/N20E140/N20E144_17_sl_VH_FP6QAR.tif"
        );
        assert!(assets.contains_key("VV"));
    }

    #[test]
    fn local_paths_group_against_same_directory() {
        let assets = group_assets("/data/N05E100_15_F02DAR.xml").unwrap();
        assert_eq!(assets["mask"], "/data/N05E100_15_mask_F02DAR.tif");
        assert_eq!(assets["metadata"], "/data/N05E100_15_F02DAR.xml");
    }

    #[test]
    fn unknown_filename_shape_is_rejected() {
        let err = group_assets("/data/N05E100_15_sl_HH_F02DAR.tif").unwrap_err();
        assert!(matches!(err, PalsarError::UnsupportedFormat(_)));
    }
}
