use std::path::Path;

use image::{ImageBuffer, ImageFormat, ImageReader, RgbaImage};

use crate::{
    error::{DitherError, Result},
    texture::{PixelGrid, Texture, TextureRef},
    utils::pixel::Rgba,
};

/// Decode an image file (format guessed from content) into a row-major RGBA texture.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    rgba_image_to_texture(&image.to_rgba8())
}

/// Encode a texture as PNG.
pub fn write_image<P: AsRef<Path>>(texture: &PixelGrid, path: P) -> Result {
    let image = texture_to_rgba_image(texture)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(DitherError::ImageEncode)
}

pub fn rgba_image_to_texture(image: &RgbaImage) -> Result<PixelGrid> {
    let pixels: Vec<Rgba> = image.pixels().map(|pixel| Rgba::from(*pixel)).collect();
    let len = pixels.len();
    Texture::from_vec(image.width(), image.height(), pixels).ok_or(DitherError::ShapeMismatch {
        width: image.width(),
        height: image.height(),
        len,
    })
}

pub fn texture_to_rgba_image(texture: &PixelGrid) -> Result<RgbaImage> {
    let raw_data = texture
        .as_ref()
        .iter()
        .flat_map(|pixel| pixel.to_u8_array())
        .collect::<Vec<u8>>();

    ImageBuffer::from_raw(texture.width(), texture.height(), raw_data).ok_or(
        DitherError::ShapeMismatch {
            width: texture.width(),
            height: texture.height(),
            len: texture.as_ref().len(),
        },
    )
}
