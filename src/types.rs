use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Product family of one ALOS observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    /// Annual PALSAR backscatter mosaic (MOS)
    Mosaic,
    /// Forest/Non-Forest classification (FNF)
    ForestNonForest,
}

impl Product {
    /// Collection id the product's items belong to
    pub fn collection_id(&self) -> &'static str {
        match self {
            Product::Mosaic => "alos-palsar-mosaic",
            Product::ForestNonForest => "alos-fnf-mosaic",
        }
    }

    /// Suffix appended to the item root to form the item id
    pub fn id_suffix(&self) -> &'static str {
        match self {
            Product::Mosaic => "MOS",
            Product::ForestNonForest => "FNF",
        }
    }
}

impl FromStr for Product {
    type Err = PalsarError;

    fn from_str(s: &str) -> PalsarResult<Self> {
        match s {
            "MOS" => Ok(Product::Mosaic),
            "FNF" => Ok(Product::ForestNonForest),
            other => Err(PalsarError::UnsupportedFormat(format!(
                "unknown product selector: {} (expected MOS or FNF)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Product::Mosaic => write!(f, "MOS"),
            Product::ForestNonForest => write!(f, "FNF"),
        }
    }
}

/// Number of polarization channels encoded in the scene code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarizationCount {
    Dual,
    Quad,
}

impl PolarizationCount {
    pub fn code(&self) -> char {
        match self {
            PolarizationCount::Dual => 'D',
            PolarizationCount::Quad => 'Q',
        }
    }

    /// SAR polarization channels present for this mode
    pub fn polarizations(&self) -> &'static [&'static str] {
        match self {
            PolarizationCount::Dual => &["HH", "HV"],
            PolarizationCount::Quad => &["HH", "HV", "VH", "VV"],
        }
    }
}

/// Satellite orbit direction at acquisition time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitDirection {
    Ascending,
    Descending,
}

impl OrbitDirection {
    pub fn code(&self) -> char {
        match self {
            OrbitDirection::Ascending => 'A',
            OrbitDirection::Descending => 'D',
        }
    }

    /// Value used by the sat extension
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbitDirection::Ascending => "ascending",
            OrbitDirection::Descending => "descending",
        }
    }
}

/// Antenna look direction relative to the flight path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookDirection {
    Right,
    Left,
}

impl LookDirection {
    pub fn code(&self) -> char {
        match self {
            LookDirection::Right => 'R',
            LookDirection::Left => 'L',
        }
    }

    /// Value used by the sar extension
    pub fn as_str(&self) -> &'static str {
        match self {
            LookDirection::Right => "right",
            LookDirection::Left => "left",
        }
    }
}

/// Header metadata of one reference raster, read once per observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterInfo {
    /// EPSG code of the raster CRS
    pub epsg: i32,
    /// Bounds as [west, south, east, north]
    pub bbox: [f64; 4],
    /// Affine transform in row-major (a, b, c, d, e, f) order
    pub transform: [f64; 6],
    /// Pixel shape as (rows, cols)
    pub shape: (usize, usize),
}

/// Error types for catalog derivation
#[derive(Debug, thiserror::Error)]
pub enum PalsarError {
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("malformed scene code: {0}")]
    MalformedCode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog derivation operations
pub type PalsarResult<T> = Result<T, PalsarError>;
