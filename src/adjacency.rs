//! Memoized adjacency masks for merged regions.
//!
//! Keys are inclusion masks (a set of base regions that has appeared as one
//! colored region), values are the union of the adjacency masks of the base
//! regions inside it. Entries are only ever added. Since a merged region's
//! adjacency is the union over its base regions, writing the same key twice
//! always writes the same value.

use rustc_hash::FxHashMap;

use crate::region::{base_regions, singleton, RegionMask};

#[derive(Debug, Clone, Default)]
pub struct AdjacencyMemo {
    masks: FxHashMap<RegionMask, RegionMask>,
}

impl AdjacencyMemo {
    /// Seeds the memo with one entry per base region (`singleton(i)` -> adjacency).
    pub fn seeded(base_adjacency: &[RegionMask]) -> Self {
        let mut masks = FxHashMap::with_capacity_and_hasher(base_adjacency.len(), Default::default());
        for (index, &adjacency) in base_adjacency.iter().enumerate() {
            masks.insert(singleton(index), adjacency);
        }
        Self { masks }
    }

    #[inline]
    pub fn get(&self, mask: RegionMask) -> Option<RegionMask> {
        self.masks.get(&mask).copied()
    }

    /// Returns the adjacency of `mask`, rebuilding it from base entries if absent.
    pub fn adjacency_of(&mut self, mask: RegionMask) -> RegionMask {
        if let Some(adjacency) = self.get(mask) {
            return adjacency;
        }
        let adjacency = base_regions(mask)
            .filter_map(|index| self.get(singleton(index)))
            .fold(0, |acc, adjacency| acc | adjacency);
        self.record(mask, adjacency);
        adjacency
    }

    /// Records the adjacency of a merged region. Idempotent.
    pub fn record(&mut self, mask: RegionMask, adjacency: RegionMask) {
        let existing = *self.masks.entry(mask).or_insert(adjacency);
        debug_assert_eq!(
            existing, adjacency,
            "inconsistent adjacency for region mask {mask:#b}"
        );
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three regions in a line: 0 - 1 - 2.
    fn line_memo() -> AdjacencyMemo {
        AdjacencyMemo::seeded(&[0b010, 0b101, 0b010])
    }

    #[test]
    fn test_seeding_creates_one_entry_per_base_region() {
        let memo = line_memo();
        assert_eq!(memo.len(), 3);
        assert_eq!(memo.get(0b001), Some(0b010));
        assert_eq!(memo.get(0b010), Some(0b101));
        assert_eq!(memo.get(0b100), Some(0b010));
        assert_eq!(memo.get(0b011), None);
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut memo = line_memo();
        memo.record(0b011, 0b111);
        let first = memo.get(0b011);
        memo.record(0b011, 0b111);
        assert_eq!(memo.get(0b011), first);
        assert_eq!(memo.get(0b011), Some(0b111));
        assert_eq!(memo.len(), 4);
    }

    #[test]
    fn test_adjacency_of_rebuilds_missing_entry() {
        let mut memo = line_memo();
        assert_eq!(memo.adjacency_of(0b101), 0b010);
        assert_eq!(memo.get(0b101), Some(0b010));
        assert_eq!(memo.adjacency_of(0b001), 0b010);
    }

    #[test]
    fn test_empty_memo() {
        let memo = AdjacencyMemo::seeded(&[]);
        assert!(memo.is_empty());
    }
}
