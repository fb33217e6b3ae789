use crate::{
    error::{DitherError, Result},
    utils::num,
};

/// Ranks of the Bayer index matrix with side `2^order`, row-major.
///
/// Built by the recursion
///
/// > M(1) = [0]
/// >
/// > M(2n) = | 4M     4M + 2 |
/// >         | 4M + 3 4M + 1 |
///
/// so every rank in `0..side²` appears exactly once and consecutive
/// ranks are spread as far apart as the tile allows.
pub fn bayer_ranks(order: u32) -> Vec<u32> {
    let mut ranks = vec![0_u32];
    let mut side = 1_usize;
    for _ in 0..order {
        let next_side = side << 1;
        let mut next = vec![0_u32; next_side * next_side];
        for y in 0..side {
            for x in 0..side {
                let rank = ranks[y * side + x] << 2;
                next[y * next_side + x] = rank;
                next[y * next_side + x + side] = rank + 2;
                next[(y + side) * next_side + x] = rank + 3;
                next[(y + side) * next_side + x + side] = rank + 1;
            }
        }
        ranks = next;
        side = next_side;
    }
    ranks
}

/// Square Bayer threshold matrix, tiled over the image by coordinate modulo.
///
/// Thresholds are normalized as `(rank + 0.5) / side² - 0.5`: they lie in
/// (-0.5, 0.5) and sum to zero over one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct BayerMatrix {
    /// bayer matrix order.
    ///
    /// > bayer matrix M2 (2x2) is order 1.
    order: u32,
    thresholds: Vec<f32>,
}

impl BayerMatrix {
    /// Matrix with `side` cells per row and column.
    ///
    /// `side` must be a power of 2 and at least 2.
    pub fn new(side: usize) -> Result<Self> {
        match num::pow2_order(side) {
            Some(order) if order >= 1 => Ok(Self::with_order(order)),
            _ => Err(DitherError::InvalidMatrixSize(side)),
        }
    }

    pub fn with_order(order: u32) -> Self {
        let ranks = bayer_ranks(order);
        let cells = ranks.len() as f32;
        let thresholds = ranks
            .into_iter()
            .map(|rank| (rank as f32 + 0.5) / cells - 0.5)
            .collect();
        Self { order, thresholds }
    }

    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[inline]
    pub fn side(&self) -> usize {
        1 << self.order
    }

    /// Row-major normalized thresholds of one tile.
    #[inline]
    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    /// Threshold for a pixel coordinate, tiling the matrix periodically.
    #[inline(always)]
    pub fn threshold(&self, x: usize, y: usize) -> f32 {
        let mask = num::pow2_mask::<usize>(self.order);
        self.thresholds[((y & mask) << self.order) + (x & mask)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAYER_8X8: [u32; 64] = [
        0, 32, 8, 40, 2, 34, 10, 42, //
        48, 16, 56, 24, 50, 18, 58, 26, //
        12, 44, 4, 36, 14, 46, 6, 38, //
        60, 28, 52, 20, 62, 30, 54, 22, //
        3, 35, 11, 43, 1, 33, 9, 41, //
        51, 19, 59, 27, 49, 17, 57, 25, //
        15, 47, 7, 39, 13, 45, 5, 37, //
        63, 31, 55, 23, 61, 29, 53, 21, //
    ];

    #[test]
    fn test_bayer_ranks_small_orders() {
        assert_eq!(bayer_ranks(0), vec![0]);
        assert_eq!(bayer_ranks(1), vec![0, 2, 3, 1]);
        assert_eq!(
            bayer_ranks(2),
            vec![0, 8, 2, 10, 12, 4, 14, 6, 3, 11, 1, 9, 15, 7, 13, 5]
        );
    }

    #[test]
    fn test_bayer_ranks_match_classic_8x8() {
        assert_eq!(bayer_ranks(3), BAYER_8X8.to_vec());
    }

    #[test]
    fn test_bayer_ranks_are_a_permutation() {
        for order in 0..6 {
            let mut ranks = bayer_ranks(order);
            ranks.sort_unstable();
            let expected: Vec<u32> = (0..(1_u32 << (2 * order))).collect();
            assert_eq!(ranks, expected, "order {order}");
        }
    }

    #[test]
    fn test_thresholds_have_zero_bias() {
        for side in [2, 4, 8, 16] {
            let matrix = BayerMatrix::new(side).unwrap();
            let sum: f32 = matrix.thresholds().iter().sum();
            assert!(sum.abs() < 1e-4, "side {side} sum {sum}");
            assert!(
                matrix
                    .thresholds()
                    .iter()
                    .all(|t| *t > -0.5 && *t < 0.5)
            );
        }
    }

    #[test]
    fn test_threshold_tiles() {
        let matrix = BayerMatrix::new(8).unwrap();
        assert_eq!(matrix.side(), 8);
        assert_eq!(matrix.order(), 3);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(matrix.threshold(x, y), matrix.threshold(x + 8, y + 16));
                assert_eq!(matrix.threshold(x, y), matrix.thresholds()[y * 8 + x]);
            }
        }
        assert_eq!(matrix.threshold(0, 0), 0.5 / 64.0 - 0.5);
        assert_eq!(matrix.threshold(0, 7), 63.5 / 64.0 - 0.5);
    }

    #[test]
    fn test_invalid_sides() {
        for side in [0, 1, 3, 6, 12] {
            assert!(matches!(
                BayerMatrix::new(side),
                Err(DitherError::InvalidMatrixSize(s)) if s == side
            ));
        }
    }
}
