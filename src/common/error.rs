use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum QRError {
    // QR builder
    #[error("Empty data")]
    EmptyData,

    #[error("Data too long for version {version}")]
    DataTooLong { version: u8 },

    #[error("Invalid version {0:?}, expected 1..=40")]
    InvalidVersion(String),

    #[error("Invalid error correction level {0:?}, expected L, M, Q or H")]
    InvalidECLevel(String),

    #[error("Invalid box size {0}px, the image must be 1..=65535px wide")]
    InvalidBoxSize(u32),

    #[error("Invalid border of {0} modules, the image must be at most 65535px wide")]
    InvalidBorder(u32),

    #[error("Invalid color {0:?}, expected #rrggbb or r,g,b")]
    InvalidColor(String),

    #[error("Invalid style {0:?}")]
    InvalidStyle(String),

    #[error(transparent)]
    Encode(#[from] qrcode::types::QrError),

    // Batch input
    #[error("Enter the base URL host")]
    MissingHost,

    #[error("Enter the market number")]
    MissingMarket,

    #[error("Market {0:?} may only contain letters, digits, '-' and '_'")]
    InvalidMarket(String),

    #[error("Enter the table count or table numbers separated by ';'")]
    MissingTables,

    #[error("Choose an output directory")]
    MissingOutputDir,

    #[error("Table numbers must be numbers, got {0:?}")]
    InvalidTableNumber(String),

    #[error("Table count must be a positive number, got {0:?}")]
    InvalidTableCount(String),

    #[error("No table numbers between the ';' separators")]
    NoTables,

    // Output
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type QRResult<T> = Result<T, QRError>;
