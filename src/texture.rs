use crate::utils::pixel::Rgba;

/// (width, height)
pub type Shape = (usize, usize);

/// Texture of RGBA colors, the unit the ditherer consumes and produces.
pub type PixelGrid = Texture<Rgba>;

/// Trait defining ops available on Textures with
/// lendable inner buffer
pub trait TextureRef: AsRef<[Self::Inner]> {
    type Inner;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    #[inline]
    fn shape(&self) -> Shape {
        (self.width() as usize, self.height() as usize)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Trait defining ops available on mutable
/// Textures
pub trait TextureMut: TextureRef + AsMut<[Self::Inner]> {}

/// Texture with owned, row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture<T> {
    width: u32,
    height: u32,
    buffer: Vec<T>,
}

impl<T> AsRef<[T]> for Texture<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Texture<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> TextureRef for Texture<T> {
    type Inner = T;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }
}

impl<T> TextureMut for Texture<T> {}

impl<T> Texture<T> {
    /// Wrap an owned buffer. Returns `None` when the buffer
    /// length does not match `width * height`.
    pub fn from_vec(width: u32, height: u32, buffer: Vec<T>) -> Option<Self> {
        if buffer.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            buffer,
        })
    }

    /// Value at pixel coordinate.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> &T {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        &self.buffer[y as usize * self.width as usize + x as usize]
    }

    pub fn as_texture_slice<'s>(&'s self) -> TextureSlice<'s, T> {
        TextureSlice {
            width: self.width,
            height: self.height,
            buffer: &self.buffer,
        }
    }

    pub fn as_texture_mut_slice<'s>(&'s mut self) -> TextureMutSlice<'s, T> {
        TextureMutSlice {
            width: self.width,
            height: self.height,
            buffer: &mut self.buffer,
        }
    }
}

impl<T: Clone> Texture<T> {
    /// # Panics
    /// Panics if the slice length does not match `width * height`.
    pub fn from_slice(width: u32, height: u32, slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            width as usize * height as usize,
            "buffers don't match sizes"
        );
        Texture {
            width,
            height,
            buffer: slice.to_owned(),
        }
    }

    /// Texture where every pixel holds `value`.
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            buffer: vec![value; width as usize * height as usize],
        }
    }
}

impl<T: Default + Clone> Texture<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, T::default())
    }
}

/// Texture with borrowed internal buffer
#[derive(Debug, Copy, Clone)]
pub struct TextureSlice<'a, T> {
    width: u32,
    height: u32,
    buffer: &'a [T],
}

impl<T> AsRef<[T]> for TextureSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl<'a, T> TextureSlice<'a, T> {
    /// # Panics
    /// Panics if the buffer length does not match `width * height`.
    pub fn new(width: u32, height: u32, buffer: &'a [T]) -> Self {
        assert_eq!(
            buffer.len(),
            width as usize * height as usize,
            "buffers don't match sizes"
        );
        Self {
            width,
            height,
            buffer,
        }
    }
}

#[derive(Debug)]
pub struct TextureMutSlice<'a, T> {
    width: u32,
    height: u32,
    buffer: &'a mut [T],
}

impl<T> AsRef<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> AsMut<[T]> for TextureMutSlice<'_, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureMutSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl<T> TextureMut for TextureMutSlice<'_, T> {}

impl<'a, T> TextureMutSlice<'a, T> {
    /// # Panics
    /// Panics if the buffer length does not match `width * height`.
    pub fn new(width: u32, height: u32, buffer: &'a mut [T]) -> Self {
        assert_eq!(
            buffer.len(),
            width as usize * height as usize,
            "buffers don't match sizes"
        );
        Self {
            width,
            height,
            buffer,
        }
    }
}

pub mod prelude {
    pub use super::{PixelGrid, Texture, TextureMut, TextureMutSlice, TextureRef, TextureSlice};
}
