//! Region-merge puzzle states and their keys.
//!
//! A state's identity is its per-base-region color assignment. The key stores
//! that assignment alongside a positional hash of it:
//!
//! ```text
//! hash = color[0] * n^(N-1) + color[1] * n^(N-2) + ... + color[N-1]
//! ```
//!
//! where `n` is the number of colors and `N` the number of base regions. The
//! hash is only a map key; equality compares the color assignment itself, so
//! puzzles whose `n^N` overflows a `u64` stay correct.

use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::region::{base_regions, Color, ColoredRegion};

/// Inline capacity for the regions of a state.
pub const INLINE_REGIONS: usize = 16;

/// The colored regions of one state.
pub type Regions = SmallVec<[ColoredRegion; INLINE_REGIONS]>;

/// Identity of a state: per-base-region colors plus their positional hash.
#[derive(Debug, Clone, Eq)]
pub struct StateKey {
    hash: u64,
    colors: Box<[Color]>,
}

impl StateKey {
    /// Builds the key for a partition of `region_count` base regions.
    pub fn from_regions(regions: &[ColoredRegion], region_count: usize, number_of_colors: u8) -> Self {
        // step 1: color of every base region
        let mut colors = vec![0 as Color; region_count].into_boxed_slice();
        for region in regions {
            for index in base_regions(region.mask).filter(|&index| index < region_count) {
                colors[index] = region.color;
            }
        }

        Self {
            hash: positional_hash(&colors, number_of_colors),
            colors,
        }
    }

    #[inline]
    pub fn hash_value(&self) -> u64 {
        self.hash
    }

    /// Color of every base region, indexed by base region.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Folds a color assignment into one integer, treating it as a base-`n` number.
///
/// Injective while `n^len` fits in a `u64` and every color is below `n`;
/// wraps silently beyond that.
pub fn positional_hash(colors: &[Color], number_of_colors: u8) -> u64 {
    colors.iter().fold(0u64, |hash, &color| {
        hash.wrapping_mul(u64::from(number_of_colors))
            .wrapping_add(u64::from(color))
    })
}

impl PartialEq for StateKey {
    fn eq(&self, other: &Self) -> bool {
        // the hash is a cheap first-pass filter
        self.hash == other.hash && self.colors == other.colors
    }
}

impl Hash for StateKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// One configuration of a region-merge puzzle.
///
/// The regions partition all base regions. States are never mutated; a move
/// builds a new state.
#[derive(Debug, Clone)]
pub struct RegionState {
    regions: Regions,
    key: StateKey,
}

impl RegionState {
    pub fn new(regions: Regions, region_count: usize, number_of_colors: u8) -> Self {
        let key = StateKey::from_regions(&regions, region_count, number_of_colors);
        Self { regions, key }
    }

    #[inline]
    pub fn regions(&self) -> &[ColoredRegion] {
        &self.regions
    }

    #[inline]
    pub fn key(&self) -> &StateKey {
        &self.key
    }

    #[inline]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Returns the region owning base region `index`, if any.
    pub fn region_containing(&self, index: usize) -> Option<&ColoredRegion> {
        self.regions
            .iter()
            .find(|region| crate::region::contains(region.mask, index))
    }
}

impl PartialEq for RegionState {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for RegionState {}

impl Hash for RegionState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Character used to print a color: `0-9`, then `A-Z`, then `?`.
pub fn color_char(color: Color) -> char {
    match color {
        0..=9 => char::from(b'0' + color),
        10..=35 => char::from(b'A' + color - 10),
        _ => '?',
    }
}

impl fmt::Display for RegionState {
    /// Prints the color of every base region, lowest index first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &color in self.key.colors() {
            write!(f, "{}", color_char(color))?;
        }
        Ok(())
    }
}
