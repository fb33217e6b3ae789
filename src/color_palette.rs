use std::{fmt::Display, ops::Deref, str::FromStr};

use crate::{
    error::{DitherError, Result},
    utils::pixel::Rgba,
};

/// Amount of colors every theme ramp holds.
pub const THEME_COLORS: usize = 6;

/// Named 6 color ramp, ordered from darkest to lightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    LowTech,
    Obsolete,
    HighTech,
    Grayscale,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::LowTech,
        Theme::Obsolete,
        Theme::HighTech,
        Theme::Grayscale,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Theme::LowTech => "low-tech",
            Theme::Obsolete => "obsolete",
            Theme::HighTech => "high-tech",
            Theme::Grayscale => "grayscale",
        }
    }

    /// The full ramp of this theme, dark to light.
    #[inline]
    pub fn colors(&self) -> &'static [Rgba; THEME_COLORS] {
        &THEMES[*self as usize]
    }
}

impl FromStr for Theme {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| DitherError::UnsupportedTheme(s.to_string()))
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Theme ramps indexed by `Theme as usize`.
static THEMES: [[Rgba; THEME_COLORS]; 4] = [
    // low-tech
    [
        Rgba::opaque(30, 32, 40),
        Rgba::opaque(11, 21, 71),
        Rgba::opaque(57, 77, 174),
        Rgba::opaque(158, 168, 218),
        Rgba::opaque(187, 196, 230),
        Rgba::opaque(243, 244, 250),
    ],
    // obsolete
    [
        Rgba::opaque(9, 74, 58),
        Rgba::opaque(58, 136, 118),
        Rgba::opaque(101, 163, 148),
        Rgba::opaque(144, 189, 179),
        Rgba::opaque(169, 204, 195),
        Rgba::opaque(242, 247, 246),
    ],
    // high-tech
    [
        Rgba::opaque(86, 9, 6),
        Rgba::opaque(197, 49, 45),
        Rgba::opaque(228, 130, 124),
        Rgba::opaque(233, 155, 151),
        Rgba::opaque(242, 193, 190),
        Rgba::opaque(252, 241, 240),
    ],
    // grayscale
    [
        Rgba::opaque(25, 25, 25),
        Rgba::opaque(75, 75, 75),
        Rgba::opaque(125, 125, 125),
        Rgba::opaque(175, 175, 175),
        Rgba::opaque(225, 225, 225),
        Rgba::opaque(250, 250, 250),
    ],
];

/// How many of a theme's colors survive into the palette.
///
/// Lower number of colors means higher compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// 0%, all 6 colors
    None,
    /// 25%, 5 colors
    Quarter,
    /// 50%, 4 colors
    Half,
    /// 75%, 3 colors
    ThreeQuarters,
    /// 100%, 2 colors
    Full,
}

impl Compression {
    pub const ALL: [Compression; 5] = [
        Compression::None,
        Compression::Quarter,
        Compression::Half,
        Compression::ThreeQuarters,
        Compression::Full,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Compression::None => "0%",
            Compression::Quarter => "25%",
            Compression::Half => "50%",
            Compression::ThreeQuarters => "75%",
            Compression::Full => "100%",
        }
    }

    /// Theme indices kept at this level, in output order.
    ///
    /// These index sets are fixed: they are not a resampling of the ramp.
    pub const fn indices(&self) -> &'static [usize] {
        match self {
            Compression::None => &[0, 1, 2, 3, 4, 5],
            Compression::Quarter => &[1, 2, 3, 4, 5],
            Compression::Half => &[0, 2, 3, 5],
            Compression::ThreeQuarters => &[0, 3, 5],
            Compression::Full => &[0, 5],
        }
    }

    #[inline]
    pub const fn colors_len(&self) -> usize {
        self.indices().len()
    }
}

impl FromStr for Compression {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self> {
        Compression::ALL
            .into_iter()
            .find(|compression| compression.name() == s)
            .ok_or_else(|| DitherError::UnsupportedCompression(s.to_string()))
    }
}

impl Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered set of colors to quantize against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Subset a theme ramp by index, keeping the dark to light order.
    pub fn new(theme: Theme, compression: Compression) -> Self {
        let ramp = theme.colors();
        let colors = compression.indices().iter().map(|&idx| ramp[idx]).collect();
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

impl Deref for Palette {
    type Target = [Rgba];

    fn deref(&self) -> &Self::Target {
        &self.colors
    }
}

impl AsRef<[Rgba]> for Palette {
    fn as_ref(&self) -> &[Rgba] {
        &self.colors
    }
}

impl Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (idx, color) in self.colors.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color)?;
        }
        write!(f, "]")
    }
}

/// Resolve a theme name and a compression level (`"0%"`, `"25%"`, `"50%"`,
/// `"75%"` or `"100%"`) into a palette.
///
/// The theme is validated first, so an invalid theme is reported even when
/// the compression is invalid too.
pub fn build_palette(theme: &str, compression: &str) -> Result<Palette> {
    let theme: Theme = theme.parse()?;
    let compression: Compression = compression.parse()?;
    let palette = Palette::new(theme, compression);
    tracing::debug!(%theme, %compression, %palette, "built palette");
    Ok(palette)
}
