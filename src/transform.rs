use crate::texture::{Shape, TextureMutSlice, TextureRef, TextureSlice};

/// Core trait for applying a transform from one texture into another.
///
/// Uses associated types for Input/Output so the texel types are fixed per transform.
/// Lifetimes are method-local, allowing flexible borrowing.
pub trait TextureTransform: Sized {
    type Input;
    type Output;

    /// Preparation step that can inspect data shape before transformation.
    ///
    /// Must be called again whenever the input shape changes.
    fn prepare(&mut self, in_shape: Shape, out_shape: Shape);

    /// Apply the transform from input texture to output texture.
    ///
    /// Every output texel is written.
    fn apply(
        &mut self,
        input: TextureSlice<'_, Self::Input>,
        output: TextureMutSlice<'_, Self::Output>,
    );

    /// Apply once. Alias for [TextureTransform::prepare] followed by [TextureTransform::apply].
    fn once(
        mut self,
        input: TextureSlice<'_, Self::Input>,
        output: TextureMutSlice<'_, Self::Output>,
    ) {
        self.prepare(input.shape(), output.shape());
        self.apply(input, output)
    }
}

pub mod prelude {
    pub use super::TextureTransform;
}
