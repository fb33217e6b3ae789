use std::{fmt::Display, str::FromStr};

use crate::{
    dithering::threshold::{BayerConfig, BayerMatrix, BayerStrategy},
    error::{DitherError, Result},
    texture::{Texture, TextureRef},
    transform::TextureTransform,
    utils::pixel::Rgba,
};

pub mod threshold;

/// Full range of one color channel.
const CHANNEL_RANGE: f32 = 255.0;

/// How far a threshold of 1.0 moves each color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdSpread {
    /// The whole channel range, `255`.
    Full,
    /// The mean step between palette colors on each channel,
    /// `(max - min) / (colors - 1)`.
    #[default]
    PaletteSpacing,
}

impl ThresholdSpread {
    /// Per channel RGB amplitude for `palette`.
    ///
    /// A single color palette has no spacing and falls back to the full range.
    pub fn amplitude(&self, palette: &[Rgba]) -> [f32; 3] {
        match self {
            ThresholdSpread::PaletteSpacing if palette.len() > 1 => {
                let steps = (palette.len() - 1) as f32;
                let mut amplitude = [0.0; 3];
                for (channel, value) in amplitude.iter_mut().enumerate() {
                    let (min, max) = palette
                        .iter()
                        .map(|color| color.rgb_f32()[channel])
                        .fold((CHANNEL_RANGE, 0.0_f32), |(min, max), v| {
                            (min.min(v), max.max(v))
                        });
                    *value = (max - min) / steps;
                }
                amplitude
            }
            _ => [CHANNEL_RANGE; 3],
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ThresholdSpread::Full => "full",
            ThresholdSpread::PaletteSpacing => "palette-spacing",
        }
    }
}

impl FromStr for ThresholdSpread {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(ThresholdSpread::Full),
            "palette-spacing" => Ok(ThresholdSpread::PaletteSpacing),
            other => Err(DitherError::Config(format!(
                "unknown threshold spread '{other}'"
            ))),
        }
    }
}

impl Display for ThresholdSpread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered dithering settings for one [dither] call.
///
/// Defaults match an 8x8 Bayer matrix at full strength, spread over the
/// palette spacing, with serpentine traversal:
///
/// ```
/// use themedither::dithering::DitherConfig;
///
/// let config = DitherConfig::default().with_strength(0.8).with_serpentine(false);
/// assert_eq!(config.matrix_size, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherConfig {
    /// Side of the square Bayer matrix, a power of 2 of at least 2.
    pub matrix_size: usize,
    /// Multiplier applied to every threshold, finite and non-negative.
    pub strength: f32,
    /// Alternate column direction every row.
    pub serpentine: bool,
    pub spread: ThresholdSpread,
    /// Force an implementation, `None` picks one from the image shape.
    pub strategy: Option<BayerStrategy>,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            matrix_size: 8,
            strength: 1.0,
            serpentine: true,
            spread: ThresholdSpread::PaletteSpacing,
            strategy: None,
        }
    }
}

impl DitherConfig {
    pub fn with_matrix_size(self, matrix_size: usize) -> Self {
        Self {
            matrix_size,
            ..self
        }
    }

    pub fn with_strength(self, strength: f32) -> Self {
        Self { strength, ..self }
    }

    pub fn with_serpentine(self, serpentine: bool) -> Self {
        Self { serpentine, ..self }
    }

    pub fn with_spread(self, spread: ThresholdSpread) -> Self {
        Self { spread, ..self }
    }

    pub fn with_strategy(self, strategy: BayerStrategy) -> Self {
        Self {
            strategy: Some(strategy),
            ..self
        }
    }

    /// Check the settings and build the threshold matrix they describe.
    pub fn matrix(&self) -> Result<BayerMatrix> {
        if !self.strength.is_finite() || self.strength < 0.0 {
            return Err(DitherError::InvalidStrength(self.strength));
        }
        BayerMatrix::new(self.matrix_size)
    }

    /// Transform configuration for a given palette.
    pub fn bayer_config(&self, palette: &[Rgba]) -> Result<BayerConfig> {
        let matrix = self.matrix()?;
        let amplitude = self
            .spread
            .amplitude(palette)
            .map(|channel| self.strength * channel);
        BayerConfig::new(matrix, palette.to_vec(), amplitude, self.serpentine)
    }
}

/// Ordered dither `source` against `palette`.
///
/// Every pixel is shifted by its tiled Bayer threshold and replaced by the
/// nearest palette color (euclidean RGB, first color wins ties), keeping the
/// source alpha. Pixels do not depend on each other, the source is never
/// modified and the returned texture has the source dimensions.
pub fn dither(
    source: &Texture<Rgba>,
    palette: &[Rgba],
    config: &DitherConfig,
) -> Result<Texture<Rgba>> {
    if palette.is_empty() {
        return Err(DitherError::EmptyPalette);
    }
    if source.is_empty() {
        return Err(DitherError::EmptyTexture {
            width: source.width(),
            height: source.height(),
        });
    }

    let bayer_config = config.bayer_config(palette)?;
    let strategy = config
        .strategy
        .unwrap_or_else(|| BayerStrategy::auto(source.shape()));
    tracing::debug!(
        %strategy,
        width = source.width(),
        height = source.height(),
        colors = palette.len(),
        matrix_size = config.matrix_size,
        strength = config.strength,
        serpentine = config.serpentine,
        "ordered dithering"
    );

    let mut output = Texture::new(source.width(), source.height());
    strategy
        .build(bayer_config)
        .once(source.as_texture_slice(), output.as_texture_mut_slice());
    Ok(output)
}
