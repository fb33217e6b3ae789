use std::{fmt::Display, str::FromStr};

use multiversion::multiversion;
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

use crate::{
    dithering::threshold::matrices::BayerMatrix,
    error::{DitherError, Result},
    texture::{Shape, TextureMutSlice, TextureRef, TextureSlice},
    transform::TextureTransform,
    utils::{
        self,
        iterator::{GridIterator, row_columns},
        pixel::Rgba,
    },
};

/// Configuration for Bayer transforms, shared for all
/// transform passes.
#[derive(Debug, Clone)]
pub struct BayerConfig {
    matrix: BayerMatrix,
    /// colors to quantize against, first match wins ties
    palette: Vec<Rgba>,
    /// palette colors as points of the RGB cube, same order as `palette`
    points: Vec<[f32; 3]>,
    /// RGB offset of each matrix cell, i.e. threshold * amplitude
    offsets: Vec<[f32; 3]>,
    /// bits of side_size set to 1.
    ///
    /// > x % 2^k === x & (2^k - 1)
    side_mask: usize,
    serpentine: bool,
}

impl BayerConfig {
    /// `amplitude` is the RGB offset applied at a threshold of 1.0.
    pub fn new(
        matrix: BayerMatrix,
        palette: Vec<Rgba>,
        amplitude: [f32; 3],
        serpentine: bool,
    ) -> Result<Self> {
        if palette.is_empty() {
            return Err(DitherError::EmptyPalette);
        }

        let points = palette.iter().map(Rgba::rgb_f32).collect();
        let offsets = matrix
            .thresholds()
            .iter()
            .map(|t| amplitude.map(|channel| t * channel))
            .collect();
        let side_mask = utils::num::pow2_mask::<usize>(matrix.order());
        Ok(Self {
            matrix,
            palette,
            points,
            offsets,
            side_mask,
            serpentine,
        })
    }

    /// Get the idx in the bayer matrix corresponding to a pixel coordinate
    #[inline(always)]
    pub fn bayer_idx(&self, x: usize, y: usize) -> usize {
        ((y & self.side_mask) << self.matrix.order()) + (x & self.side_mask)
    }

    /// RGB offset applied to the pixel at a coordinate.
    #[inline(always)]
    pub fn offset(&self, x: usize, y: usize) -> [f32; 3] {
        self.offsets[self.bayer_idx(x, y)]
    }

    pub fn colors_len(&self) -> usize {
        self.palette.len()
    }

    pub fn palette(&self) -> &[Rgba] {
        &self.palette
    }

    pub fn matrix(&self) -> &BayerMatrix {
        &self.matrix
    }

    pub fn serpentine(&self) -> bool {
        self.serpentine
    }

    /// Quantize one pixel shifted by `offset`, one value per color channel.
    ///
    /// Alpha of the source pixel is kept.
    #[inline(always)]
    pub fn quantize(&self, pixel: Rgba, offset: [f32; 3]) -> Rgba {
        let perturbed = [
            (pixel.r as f32 + offset[0]).clamp(0.0, 255.0),
            (pixel.g as f32 + offset[1]).clamp(0.0, 255.0),
            (pixel.b as f32 + offset[2]).clamp(0.0, 255.0),
        ];

        let mut best = 0_usize;
        let mut best_distance = f32::INFINITY;
        for (idx, point) in self.points.iter().enumerate() {
            let distance = utils::pixel::distance_sq(perturbed, *point);
            if distance < best_distance {
                best = idx;
                best_distance = distance;
            }
        }
        self.palette[best].with_alpha(pixel.a)
    }

    /// Offsets of the matrix repeated to a full row width,
    /// one row per matrix row.
    fn tiled_offsets(&self, width: usize) -> Vec<[f32; 3]> {
        utils::transform::precompute_tiled_rows(self.matrix.side(), width, |x, y, _| {
            self.offset(x, y)
        })
    }
}

/// Strategy enum for selecting Bayer transform implementation
///
/// Every strategy produces the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BayerStrategy {
    /// Simple scalar implementation, walks the grid in traversal order.
    Scalar,
    /// Parallel scalar implementation, one row per task.
    ScalarPar,
}

impl Display for BayerStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BayerStrategy {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scalar" => Ok(BayerStrategy::Scalar),
            "scalar-par" => Ok(BayerStrategy::ScalarPar),
            other => Err(DitherError::Config(format!("unknown strategy '{other}'"))),
        }
    }
}

impl BayerStrategy {
    /// Detect best-fit strategy
    pub fn auto(shape_hint: Shape) -> Self {
        let (width, height) = shape_hint;
        // estimated usable threads
        let par_hint = rayon::current_num_threads();

        if par_hint == 1 || width < 450 || width * height < 202500 {
            return Self::Scalar;
        }
        Self::ScalarPar
    }

    /// Create a transform instance for this strategy
    ///
    /// Returns `impl TextureTransform` which is monomorphized at compile time
    /// while hiding implementation details
    pub fn build(self, config: BayerConfig) -> impl TextureTransform<Input = Rgba, Output = Rgba> {
        match self {
            Self::Scalar => BayerTransformImpl::Scalar(Scalar::new(config)),
            Self::ScalarPar => BayerTransformImpl::ScalarPar(ScalarPar::new(config)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BayerStrategy::Scalar => "scalar",
            BayerStrategy::ScalarPar => "scalar-par",
        }
    }
}

/// Internal enum that wraps all possible transform implementations
///
/// This is returned as `impl TextureTransform`, so the concrete type is hidden
enum BayerTransformImpl {
    Scalar(Scalar),
    ScalarPar(ScalarPar),
}

impl TextureTransform for BayerTransformImpl {
    type Input = Rgba;
    type Output = Rgba;

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) {
        match self {
            Self::Scalar(t) => t.prepare(in_shape, out_shape),
            Self::ScalarPar(t) => t.prepare(in_shape, out_shape),
        }
    }

    fn apply(&mut self, input: TextureSlice<'_, Rgba>, output: TextureMutSlice<'_, Rgba>) {
        match self {
            Self::Scalar(t) => t.apply(input, output),
            Self::ScalarPar(t) => t.apply(input, output),
        }
    }
}

/// Row cache of matrix offsets, rebuilt whenever the input width changes.
struct TiledOffsets {
    width: usize,
    rows: Vec<[f32; 3]>,
}

impl TiledOffsets {
    fn empty() -> Self {
        Self {
            width: 0,
            rows: Vec::new(),
        }
    }

    fn ensure(&mut self, config: &BayerConfig, width: usize) {
        if self.width != width || self.rows.is_empty() {
            self.rows = config.tiled_offsets(width);
            self.width = width;
        }
    }
}

// Concrete Transform Implementations

/// Simple bayer dithering transform
struct Scalar {
    config: BayerConfig,
    tiled: TiledOffsets,
}

impl Scalar {
    fn new(config: BayerConfig) -> Self {
        Self {
            config,
            tiled: TiledOffsets::empty(),
        }
    }
}

impl TextureTransform for Scalar {
    type Input = Rgba;
    type Output = Rgba;

    fn prepare(&mut self, in_shape: Shape, _: Shape) {
        self.tiled.ensure(&self.config, in_shape.0);
    }

    fn apply(&mut self, input: TextureSlice<'_, Rgba>, mut output: TextureMutSlice<'_, Rgba>) {
        debug_assert_eq!(input.shape(), output.shape(), "texture shapes don't match");
        self.tiled.ensure(&self.config, input.width() as usize);
        scalar_impl(
            input.as_ref(),
            output.as_mut(),
            input.shape(),
            &self.tiled.rows,
            &self.config,
        );
    }
}

/// Parallel bayer dithering transform, parallelized by image rows.
struct ScalarPar {
    config: BayerConfig,
    tiled: TiledOffsets,
}

impl ScalarPar {
    fn new(config: BayerConfig) -> Self {
        Self {
            config,
            tiled: TiledOffsets::empty(),
        }
    }
}

impl TextureTransform for ScalarPar {
    type Input = Rgba;
    type Output = Rgba;

    fn prepare(&mut self, in_shape: Shape, _: Shape) {
        self.tiled.ensure(&self.config, in_shape.0);
    }

    fn apply(&mut self, input: TextureSlice<'_, Rgba>, mut output: TextureMutSlice<'_, Rgba>) {
        debug_assert_eq!(input.shape(), output.shape(), "texture shapes don't match");
        self.tiled.ensure(&self.config, input.width() as usize);
        scalar_par_impl(
            input.as_ref(),
            output.as_mut(),
            input.shape(),
            &self.tiled.rows,
            &self.config,
        );
    }
}

#[multiversion(targets("x86_64+avx2+fma", "x86_64+sse4.2", "aarch64+neon"))]
fn scalar_impl(
    in_buf: &[Rgba],
    out_buf: &mut [Rgba],
    in_shape: Shape,
    tiled: &[[f32; 3]],
    config: &BayerConfig,
) {
    let (width, height) = in_shape;
    for (x, y, pixel_idx) in GridIterator::with_serpentine(width, height, config.serpentine) {
        let offset = tiled[(y & config.side_mask) * width + x];
        out_buf[pixel_idx] = config.quantize(in_buf[pixel_idx], offset);
    }
}

#[multiversion(targets("x86_64+avx2+fma", "x86_64+sse4.2", "aarch64+neon"))]
fn scalar_par_impl(
    in_buf: &[Rgba],
    out_buf: &mut [Rgba],
    in_shape: Shape,
    tiled: &[[f32; 3]],
    config: &BayerConfig,
) {
    let (width, _) = in_shape;
    if width == 0 {
        return;
    }
    out_buf
        .par_chunks_mut(width)
        .zip(in_buf.par_chunks(width))
        .enumerate()
        .for_each(|(y, (out_row, in_row))| {
            let tiled_start = (y & config.side_mask) * width;
            let tiled_row = &tiled[tiled_start..tiled_start + width];

            for x in row_columns(width, y, config.serpentine) {
                out_row[x] = config.quantize(in_row[x], tiled_row[x]);
            }
        });
}
