use itertools::Either;

/// Returns `true` when row `y` is walked right to left.
#[inline(always)]
pub const fn is_reversed_row(y: usize, serpentine: bool) -> bool {
    serpentine && y & 1 == 1
}

/// Column indices of row `y` in traversal order.
///
/// Even rows go left to right. With `serpentine`, odd rows go right to left.
#[inline]
pub fn row_columns(
    width: usize,
    y: usize,
    serpentine: bool,
) -> impl ExactSizeIterator<Item = usize> + DoubleEndedIterator {
    if is_reversed_row(y, serpentine) {
        Either::Right((0..width).rev())
    } else {
        Either::Left(0..width)
    }
}

/// A grid iterator that yields (x, y, pixel_idx) tuples.
///
/// Rows are visited top to bottom. Within a row the direction is given by
/// [row_columns], so with `serpentine` the scan is boustrophedon.
#[derive(Debug, Clone, Copy)]
pub struct GridIterator {
    width: usize,
    height: usize,
    serpentine: bool,
    /// position within the current row, in traversal order
    col: usize,
    y: usize,
    visited: usize,
}

impl GridIterator {
    /// Plain raster order.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self::with_serpentine(width, height, false)
    }

    #[inline]
    pub const fn with_serpentine(width: usize, height: usize, serpentine: bool) -> Self {
        Self {
            width,
            height,
            serpentine,
            col: 0,
            y: 0,
            visited: 0,
        }
    }
}

impl Iterator for GridIterator {
    type Item = (usize, usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.height || self.width == 0 {
            return None;
        }

        let x = if is_reversed_row(self.y, self.serpentine) {
            self.width - 1 - self.col
        } else {
            self.col
        };
        let result = (x, self.y, self.y * self.width + x);

        self.visited += 1;
        self.col += 1;

        if self.col >= self.width {
            self.col = 0;
            self.y += 1;
        }

        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIterator {
    #[inline]
    fn len(&self) -> usize {
        self.width * self.height - self.visited
    }
}
