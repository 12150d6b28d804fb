//! Bit-packed region sets and colored regions.
//!
//! A region set is a `u64` where bit `i` is set if base region `i` belongs to
//! the set. Puzzles therefore support at most [`MASK_BITS`] base regions.

/// Bitmask over base regions (bit `i` set = base region `i` included).
pub type RegionMask = u64;

/// A color index in `0..number_of_colors`.
pub type Color = u8;

/// Maximum number of base regions a puzzle can have.
pub const MASK_BITS: usize = RegionMask::BITS as usize;

/// Returns the mask containing only base region `index`.
#[inline(always)]
pub const fn singleton(index: usize) -> RegionMask {
    1 << index
}

/// Returns true if `mask` includes base region `index`.
#[inline(always)]
pub const fn contains(mask: RegionMask, index: usize) -> bool {
    (mask >> index) & 1 == 1
}

/// Returns true if the two masks share at least one base region.
#[inline(always)]
pub const fn intersects(a: RegionMask, b: RegionMask) -> bool {
    a & b != 0
}

/// Returns the mask with the lowest `count` bits set.
#[inline]
pub const fn full_mask(count: usize) -> RegionMask {
    if count >= MASK_BITS {
        RegionMask::MAX
    } else {
        (1 << count) - 1
    }
}

/// Iterates the indices of the base regions in `mask`, lowest first.
pub fn base_regions(mut mask: RegionMask) -> impl Iterator<Item = usize> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as usize;
        // clear the lowest set bit
        mask &= mask - 1;
        Some(index)
    })
}

/// A set of base regions painted a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredRegion {
    pub mask: RegionMask,
    pub color: Color,
}

impl ColoredRegion {
    pub const fn new(mask: RegionMask, color: Color) -> Self {
        Self { mask, color }
    }

    /// Number of base regions in this region.
    #[inline]
    pub const fn size(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Index of the lowest base region, used to name the region in output.
    #[inline]
    pub const fn anchor(&self) -> usize {
        self.mask.trailing_zeros() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_and_contains() {
        for index in 0..MASK_BITS {
            let mask = singleton(index);
            assert!(contains(mask, index));
            assert_eq!(mask.count_ones(), 1);
        }
        assert!(!contains(0b101, 1));
    }

    #[test]
    fn test_full_mask_edges() {
        assert_eq!(full_mask(0), 0);
        assert_eq!(full_mask(3), 0b111);
        assert_eq!(full_mask(MASK_BITS), RegionMask::MAX);
    }

    #[test]
    fn test_base_regions_lists_set_bits() {
        let indices: Vec<usize> = base_regions(0b1010_0101).collect();
        assert_eq!(indices, vec![0, 2, 5, 7]);
        assert_eq!(base_regions(0).count(), 0);
        assert_eq!(base_regions(RegionMask::MAX).count(), MASK_BITS);
    }

    #[test]
    fn test_colored_region_equality_needs_mask_and_color() {
        let a = ColoredRegion::new(0b11, 1);
        assert_eq!(a, ColoredRegion::new(0b11, 1));
        assert_ne!(a, ColoredRegion::new(0b11, 0));
        assert_ne!(a, ColoredRegion::new(0b01, 1));
        assert_eq!(a.size(), 2);
        assert_eq!(ColoredRegion::new(0b1100, 0).anchor(), 2);
    }
}
