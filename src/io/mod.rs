//! I/O helpers for reading source raster headers

pub mod raster;

pub use raster::open_raster;
