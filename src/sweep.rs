use itertools::iproduct;

use crate::{
    color_palette::{Compression, Palette, Theme},
    config::SweepConfig,
    dithering,
    error::Result,
    texture::PixelGrid,
};

/// One dithered rendition of the sweep source.
#[derive(Debug, Clone)]
pub struct SweepOutput {
    pub theme: Theme,
    pub compression: Compression,
    pub palette: Palette,
    pub image: PixelGrid,
}

impl SweepOutput {
    /// File name for this output, e.g. `photo_dithered_grayscale_50%.png`.
    pub fn filename(&self, basename: &str) -> String {
        output_filename(basename, self.theme, self.compression)
    }
}

pub fn output_filename(basename: &str, theme: Theme, compression: Compression) -> String {
    format!("{basename}_dithered_{theme}_{compression}.png")
}

/// Dither `source` once per theme × compression pair of `config`, themes outermost.
///
/// Outputs are produced lazily, one at a time. A failing pair yields an
/// error for that pair only.
pub fn run<'a>(
    config: &'a SweepConfig,
    source: &'a PixelGrid,
) -> impl Iterator<Item = Result<SweepOutput>> + 'a {
    iproduct!(
        config.themes.iter().copied(),
        config.compressions.iter().copied()
    )
    .map(move |(theme, compression)| {
        let palette = Palette::new(theme, compression);
        let _span = tracing::info_span!("sweep", %theme, %compression).entered();
        let image = dithering::dither(source, &palette, &config.dither)?;
        tracing::info!(%palette, "dithered");
        Ok(SweepOutput {
            theme,
            compression,
            palette,
            image,
        })
    })
}
