//! Reduced-palette ordered dithering.
//!
//! A [Palette](color_palette::Palette) is built from a named 6 color theme and
//! a compression level, then [dither](dithering::dither) maps every pixel of a
//! texture to one of its colors, perturbing pixels with a tiled Bayer matrix so
//! gradients survive as dot patterns.
//!
//! ```
//! use themedither::prelude::*;
//!
//! let palette = build_palette("grayscale", "100%")?;
//! let source = Texture::filled(16, 16, Rgba::opaque(128, 128, 128));
//! let dithered = dither(&source, &palette, &DitherConfig::default())?;
//! assert_eq!(dithered.shape(), source.shape());
//! # Ok::<(), themedither::error::DitherError>(())
//! ```

pub mod color_palette;
pub mod config;
pub mod dithering;
pub mod error;
pub mod sweep;
pub mod texture;
pub mod transform;
pub mod utils;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::color_palette::{Compression, Palette, Theme, build_palette};
    pub use crate::dithering::{DitherConfig, ThresholdSpread, dither};
    pub use crate::error::{DitherError, Result};
    pub use crate::texture::prelude::*;
    pub use crate::transform::prelude::*;
    pub use crate::utils::prelude::*;
}
