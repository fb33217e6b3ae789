/// Returns `k` such that `n == 2^k`, or `None` when `n`
/// is not a power of 2.
///
/// > `pow2_order(1) == Some(0)`, zero has no order.
pub fn pow2_order<Integral>(n: Integral) -> Option<u32>
where
    Integral: num_traits::int::PrimInt + num_traits::Unsigned,
{
    if n.count_ones() != 1 {
        return None;
    }
    Some(n.trailing_zeros())
}

/// Bit mask usable instead of `% side` for power of 2 sides.
///
/// > x % 2^k === x & (2^k - 1)
#[inline(always)]
pub fn pow2_mask<Integral>(order: u32) -> Integral
where
    Integral: num_traits::int::PrimInt + num_traits::Unsigned,
{
    (Integral::one() << order as usize) - Integral::one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow2_order_zero() {
        assert_eq!(pow2_order(0u32), None);
        assert_eq!(pow2_order(0usize), None);
    }

    #[test]
    fn test_pow2_order_exact_powers() {
        assert_eq!(pow2_order(1u32), Some(0));
        assert_eq!(pow2_order(2u32), Some(1));
        assert_eq!(pow2_order(4u32), Some(2));
        assert_eq!(pow2_order(8usize), Some(3));
        assert_eq!(pow2_order(16u64), Some(4));
        assert_eq!(pow2_order(1u32 << 31), Some(31));
    }

    #[test]
    fn test_pow2_order_rejects_others() {
        assert_eq!(pow2_order(3u32), None);
        assert_eq!(pow2_order(6u8), None);
        assert_eq!(pow2_order(12usize), None);
        assert_eq!(pow2_order(u32::MAX), None);
    }

    #[test]
    fn test_pow2_mask() {
        assert_eq!(pow2_mask::<usize>(0), 0);
        assert_eq!(pow2_mask::<usize>(1), 1);
        assert_eq!(pow2_mask::<usize>(3), 7);
        assert_eq!(pow2_mask::<u32>(4), 15);
        for x in 0..100usize {
            assert_eq!(x & pow2_mask::<usize>(3), x % 8);
        }
    }
}
