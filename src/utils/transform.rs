/// Precompute the result of a tilable computation
/// for faster memory access by row.
///
/// Produces `tile_rows` rows of `row_size` values each, so a consumer can
/// slice row `y & mask` and index it directly by `x`.
///
/// > A(x, y) * B(n, m) -> C(x, m)
#[inline(always)]
pub fn precompute_tiled_rows<T, MapFn>(tile_rows: usize, row_size: usize, map: MapFn) -> Vec<T>
where
    MapFn: Fn(usize, usize, usize) -> T,
{
    let mut cache = Vec::with_capacity(tile_rows * row_size);
    let mut idx = 0;
    for y in 0..tile_rows {
        for x in 0..row_size {
            cache.push(map(x, y, idx));
            idx += 1;
        }
    }
    cache
}
