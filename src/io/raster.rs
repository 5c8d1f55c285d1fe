//! Raster header access
//!
//! Reads the spatial reference of one source raster through GDAL: CRS,
//! bounds, affine transform and pixel shape. The dataset handle lives only
//! for the duration of the read.

use crate::types::{PalsarError, PalsarResult, RasterInfo};
use gdal::Dataset;

/// Open `href` and read its header. Pixel data is never touched.
pub fn open_raster(href: &str) -> PalsarResult<RasterInfo> {
    log::debug!("reading raster header from {}", href);
    let dataset = Dataset::open(href)?;

    let gt = dataset.geo_transform()?;
    let (width, height) = dataset.raster_size();

    let spatial_ref = dataset.spatial_ref()?;
    let epsg: i32 = spatial_ref
        .auth_code()
        .map_err(|_| PalsarError::InvalidGeometry(format!("{} has no EPSG authority code", href)))?;

    // Bounds from the geotransform; gt[5] is negative for north-up rasters
    let west = gt[0];
    let north = gt[3];
    let east = west + width as f64 * gt[1];
    let south = north + height as f64 * gt[5];

    Ok(RasterInfo {
        epsg,
        bbox: [
            west.min(east),
            south.min(north),
            west.max(east),
            south.max(north),
        ],
        // Row-major affine order used by the projection extension
        transform: [gt[1], gt[2], gt[0], gt[4], gt[5], gt[3]],
        shape: (height, width),
    })
}
