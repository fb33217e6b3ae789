use std::fmt::{Debug, Display};

/// 8 bit per channel color. Alpha is straight, not premultiplied.
#[derive(PartialEq, Eq, Hash, Debug, Default, Clone, Copy)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r, g, b, a: u8::MAX }
    }

    #[inline]
    pub const fn from_u8_array(rgba: &[u8; 4]) -> Rgba {
        Rgba {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }

    #[inline]
    pub const fn to_u8_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Color channels as floats in [0.0, 255.0], alpha dropped.
    #[inline]
    pub fn rgb_f32(&self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Same color with another opacity.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba { a, ..self }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Squared euclidean distance between two points of the RGB cube.
#[inline(always)]
pub fn distance_sq(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

impl Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<image::Rgba<u8>> for Rgba {
    fn from(value: image::Rgba<u8>) -> Self {
        Rgba::from_u8_array(&value.0)
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(value: Rgba) -> Self {
        image::Rgba(value.to_u8_array())
    }
}
