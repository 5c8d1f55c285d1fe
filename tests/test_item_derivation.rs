use palsar_stac::core::{derive_item, group_assets};
use palsar_stac::types::{PalsarError, RasterInfo};
use std::collections::HashMap;

/// Header of a 1x1 degree ALOS tile at 25 m, as read from a real COG
fn tile_raster() -> RasterInfo {
    let pixel = 1.0 / 4500.0;
    RasterInfo {
        epsg: 4326,
        bbox: [100.0, 4.0, 101.0, 5.0],
        transform: [pixel, 0.0, 100.0, 0.0, -pixel, 5.0],
        shape: (4500, 4500),
    }
}

#[test]
fn dual_mosaic_item_from_metadata_companion() {
    let assets = group_assets("/data/N05E100_15_F02DAR.xml").expect("grouping failed");
    assert_eq!(assets.len(), 6);

    let item = derive_item(&assets, &tile_raster(), "").expect("derivation failed");

    assert_eq!(item.id, "N05E100_15_F02DAR_MOS");
    assert_eq!(item.collection, "alos-palsar-mosaic");
    assert_eq!(item.properties["platform"], "ALOS-2");
    assert_eq!(item.properties["instruments"][0], "PALSAR-2");
    assert_eq!(item.properties["start_datetime"], "2015-01-01T00:00:00Z");
    assert_eq!(item.properties["end_datetime"], "2015-12-31T23:59:59Z");
    assert_eq!(item.properties["sar:instrument_mode"], "F");
    assert_eq!(item.properties["sat:orbit_state"], "ascending");
    assert_eq!(item.properties["sar:observation_direction"], "right");
    assert_eq!(item.properties["palsar:number_of_polarizations"], "D");
    assert_eq!(item.properties["cf"], "83.0 dB");

    let pols: Vec<&str> = item.properties["sar:polarizations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(pols, ["HH", "HV"]);

    let keys: Vec<&str> = item.assets.keys().map(String::as_str).collect();
    assert_eq!(keys, ["HH", "HV", "date", "linci", "mask", "metadata"]);
    assert_eq!(item.assets["metadata"].roles, ["metadata"]);
    assert_eq!(item.assets["HH"].roles, ["data"]);
    assert_eq!(item.assets["HH"].title, "HH");
}

#[test]
fn quad_mosaic_item_carries_all_four_polarizations() {
    let assets =
        group_assets("https://example.com/2017/N20E140/N20E144_17_FP6QAR.xml").unwrap();
    let item = derive_item(&assets, &tile_raster(), "").unwrap();

    assert_eq!(item.id, "N20E144_17_FP6QAR_MOS");
    assert_eq!(item.properties["palsar:beam_number"], "P6");
    assert_eq!(item.properties["palsar:number_of_polarizations"], "Q");

    let keys: Vec<&str> = item.assets.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["HH", "HV", "VH", "VV", "date", "linci", "mask", "metadata"]
    );
    assert_eq!(
        item.assets["VH"].href,
        "https://example.com/2017/N20E140/N20E144_17_sl_VH_FP6QAR.tif"
    );
}

#[test]
fn fnf_item_has_single_classified_asset() {
    let assets = group_assets("https://example.com/2020/N00E005/N00E006_20_C.tif").unwrap();
    let item = derive_item(&assets, &tile_raster(), "").unwrap();

    assert_eq!(item.id, "N00E006_20_FNF");
    assert_eq!(item.collection, "alos-fnf-mosaic");
    assert_eq!(item.assets.len(), 1);
    assert_eq!(item.assets["C"].title, "FNF");

    let classes = item.assets["C"].classification_classes.as_ref().unwrap();
    assert!(classes.iter().any(|c| c.name == "non_forest"));

    let bands = item.assets["C"].raster_bands.as_ref().unwrap();
    assert_eq!(bands[0].data_type, "uint8");
    assert_eq!(bands[0].nodata, 0.0);

    // FNF items carry no radar acquisition fields
    assert!(!item.properties.contains_key("sar:instrument_mode"));
    assert!(!item.properties.contains_key("cf"));
}

#[test]
fn nodata_follows_the_2017_revision_boundary() {
    let before = group_assets("/data/N05E100_16_F02DAR.xml").unwrap();
    let item = derive_item(&before, &tile_raster(), "").unwrap();
    assert_eq!(item.assets["HH"].raster_bands.as_ref().unwrap()[0].nodata, 0.0);

    let after = group_assets("/data/N05E100_17_F02DAR.xml").unwrap();
    let item = derive_item(&after, &tile_raster(), "").unwrap();
    assert_eq!(item.assets["HH"].raster_bands.as_ref().unwrap()[0].nodata, 1.0);
    assert_eq!(item.assets["date"].raster_bands.as_ref().unwrap()[0].nodata, 1.0);
    assert_eq!(item.assets["mask"].raster_bands.as_ref().unwrap()[0].nodata, 0.0);
}

#[test]
fn mask_asset_carries_classification_classes() {
    let assets = group_assets("/data/N05E100_21_F02DAR.xml").unwrap();
    let item = derive_item(&assets, &tile_raster(), "").unwrap();

    let classes = item.assets["mask"].classification_classes.as_ref().unwrap();
    assert!(classes.iter().any(|c| c.value == 255 && c.name == "land"));
    // The metadata companion has no raster semantics
    assert!(item.assets["metadata"].raster_bands.is_none());
    assert!(item.assets["metadata"].classification_classes.is_none());
}

#[test]
fn pre_2015_years_select_first_generation_platform() {
    let assets = group_assets("/data/N05E100_10_F02DAR.xml").unwrap();
    let item = derive_item(&assets, &tile_raster(), "").unwrap();
    assert_eq!(item.properties["platform"], "ALOS");
    assert_eq!(item.properties["instruments"][0], "PALSAR");
}

#[test]
fn non_geographic_crs_aborts_before_any_item_is_built() {
    let assets = group_assets("/data/N05E100_15_F02DAR.xml").unwrap();
    let mut raster = tile_raster();
    raster.epsg = 3857;

    let err = derive_item(&assets, &raster, "").unwrap_err();
    assert!(matches!(err, PalsarError::InvalidGeometry(_)));
}

#[test]
fn root_href_rewrites_asset_locations_by_basename() {
    let assets = group_assets("https://in.example.com/2021/N00E070/N00E072_21_F02DAR.xml").unwrap();
    let item = derive_item(&assets, &tile_raster(), "https://out.example.com/v200/").unwrap();

    assert_eq!(
        item.assets["HH"].href,
        "https://out.example.com/v200/N00E072_21_sl_HH_F02DAR.tif"
    );
    assert_eq!(
        item.links[0].href,
        "https://out.example.com/v200/alos-palsar-mosaic.json"
    );
    assert_eq!(item.links[0].rel, "collection");
}

#[test]
fn malformed_scene_code_is_a_hard_error() {
    // Grouping succeeds on any xml, but derivation must reject the bad code
    let mut assets = HashMap::new();
    assets.insert(
        "HH".to_string(),
        "/data/N05E100_15_sl_HH_X02DAR.tif".to_string(),
    );

    let err = derive_item(&assets, &tile_raster(), "").unwrap_err();
    assert!(matches!(err, PalsarError::MalformedCode(_)));
}

#[test]
fn derived_item_serializes_with_extension_fields() {
    let assets = group_assets("/data/N05E100_17_F02DAR.xml").unwrap();
    let item = derive_item(&assets, &tile_raster(), "").unwrap();

    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["type"], "Feature");
    assert_eq!(value["properties"]["proj:epsg"], 4326);
    assert_eq!(value["assets"]["HH"]["raster:bands"][0]["nodata"], 1.0);
    assert_eq!(
        value["assets"]["mask"]["classification:classes"][0]["name"],
        "no_data"
    );
    assert_eq!(value["geometry"]["type"], "Polygon");
    assert_eq!(value["bbox"][0], 100.0);
    let shape = value["properties"]["proj:shape"].as_array().unwrap();
    assert_eq!(shape.len(), 2);
}
