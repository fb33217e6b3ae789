/// The main error type for the themedither crate
#[derive(Debug, thiserror::Error)]
pub enum DitherError {
    /// Theme name is not one of the known themes
    #[error("theme '{0}' not supported")]
    UnsupportedTheme(String),

    /// Compression level is not one of the known levels
    #[error("compression '{0}' not supported")]
    UnsupportedCompression(String),

    /// Nearest color selection needs at least one color
    #[error("cannot dither against an empty palette")]
    EmptyPalette,

    /// Texture has no pixels to dither
    #[error("cannot dither an empty texture ({width}x{height})")]
    EmptyTexture { width: u32, height: u32 },

    /// Pixel buffer length does not match the texture dimensions
    #[error("buffer of {len} pixels does not fit a {width}x{height} texture")]
    ShapeMismatch { width: u32, height: u32, len: usize },

    /// Bayer matrix side must be a power of 2, at least 2
    #[error("bayer matrix size {0} is not a power of 2 greater than 1")]
    InvalidMatrixSize(usize),

    /// Strength is negative, infinite or NaN
    #[error("dither strength {0} must be finite and non-negative")]
    InvalidStrength(f32),

    /// Malformed configuration value
    #[error("config error: {0}")]
    Config(String),

    /// Config file is not valid JSON
    #[error("config parse error: {0}")]
    Json(#[from] json::Error),

    /// Error occurred while reading or decoding an image
    #[error("image decode error: {0}")]
    ImageDecode(image::ImageError),

    /// Error occurred while writing or encoding an image
    #[error("image encode error: {0}")]
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for DitherError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => DitherError::ImageEncode(err),
            _ => DitherError::ImageDecode(err),
        }
    }
}

// Convenience type alias for Results using DitherError
pub type Result<T = ()> = std::result::Result<T, DitherError>;
