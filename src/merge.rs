//! The region-merge ("paint bucket") puzzle.
//!
//! A move paints one region a new color. The painted region absorbs every
//! region adjacent to it that already has that color, so regions only ever
//! grow and the region count never increases. The puzzle is solved once every
//! region has the same color.

use std::fmt;

use log::debug;

use crate::adjacency::AdjacencyMemo;
use crate::config::{ConfigError, RegionMergeConfig};
use crate::puzzle::Puzzle;
use crate::region::{intersects, singleton, Color, ColoredRegion};
use crate::state::{RegionState, Regions};

/// A single move: paint the region containing base region `region` with `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub region: usize,
    pub color: Color,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "paint region {} with color {}", self.region, self.color)
    }
}

pub struct RegionMergePuzzle {
    number_of_colors: u8,
    base_region_count: usize,
    /// Grows as merges discover new region shapes; never shared.
    adjacency: AdjacencyMemo,
    initial_state: RegionState,
}

impl RegionMergePuzzle {
    /// Validates the level and builds the puzzle.
    ///
    /// Each base region becomes its own colored region in the initial state,
    /// and seeds the adjacency memo with its authored adjacency.
    pub fn new(config: &RegionMergeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let base_region_count = config.regions.len();
        let base_adjacency: Vec<_> = config.regions.iter().map(|base| base.adjacency_mask).collect();
        let adjacency = AdjacencyMemo::seeded(&base_adjacency);

        let regions: Regions = config
            .regions
            .iter()
            .enumerate()
            .map(|(index, base)| ColoredRegion::new(singleton(index), base.color))
            .collect();
        let initial_state = RegionState::new(regions, base_region_count, config.number_of_colors);

        debug!(
            "puzzle constructed: {} colors, {} adjacency masks, {} initial regions",
            config.number_of_colors,
            adjacency.len(),
            initial_state.region_count()
        );

        Ok(Self {
            number_of_colors: config.number_of_colors,
            base_region_count,
            adjacency,
            initial_state,
        })
    }

    pub fn number_of_colors(&self) -> u8 {
        self.number_of_colors
    }

    pub fn base_region_count(&self) -> usize {
        self.base_region_count
    }

    pub fn adjacency(&self) -> &AdjacencyMemo {
        &self.adjacency
    }

    /// Paints `state.regions()[region_index]` with `color` and merges it with
    /// every adjacent region of that color.
    ///
    /// The untouched regions keep their order; the merged region is appended.
    /// Returns `None` if `region_index` is out of range.
    pub fn paint(&mut self, state: &RegionState, region_index: usize, color: Color) -> Option<RegionState> {
        let painted = *state.regions().get(region_index)?;
        Some(self.merge(state, painted, color))
    }

    fn merge(&mut self, state: &RegionState, painted: ColoredRegion, color: Color) -> RegionState {
        let painted_adjacency = self.adjacency.adjacency_of(painted.mask);

        let mut merged_mask = 0;
        let mut merged_adjacency = 0;
        let mut remaining = Regions::with_capacity(state.region_count());

        for &region in state.regions() {
            let joins = region.mask == painted.mask
                || (region.color == color && intersects(painted_adjacency, region.mask));
            if joins {
                merged_mask |= region.mask;
                merged_adjacency |= self.adjacency.adjacency_of(region.mask);
            } else {
                remaining.push(region);
            }
        }

        self.adjacency.record(merged_mask, merged_adjacency);
        remaining.push(ColoredRegion::new(merged_mask, color));

        RegionState::new(remaining, self.base_region_count, self.number_of_colors)
    }

    /// Finds a move leading from `from` to `to`, if one exists.
    pub fn find_move(&mut self, from: &RegionState, to: &RegionState) -> Option<Move> {
        for &region in from.regions() {
            for color in (0..self.number_of_colors).filter(|&color| color != region.color) {
                if self.merge(from, region, color) == *to {
                    return Some(Move {
                        region: region.anchor(),
                        color,
                    });
                }
            }
        }
        None
    }
}

impl Puzzle for RegionMergePuzzle {
    type State = RegionState;

    fn initial_state(&self) -> RegionState {
        self.initial_state.clone()
    }

    /// One successor per (region, other color) pair.
    fn reachable_states(&mut self, state: &RegionState) -> Vec<RegionState> {
        let other_colors = usize::from(self.number_of_colors.saturating_sub(1));
        let mut states = Vec::with_capacity(state.region_count() * other_colors);

        for &region in state.regions() {
            for color in (0..self.number_of_colors).filter(|&color| color != region.color) {
                states.push(self.merge(state, region, color));
            }
        }

        states
    }

    /// Solved when at most one region remains or all regions share a color.
    fn is_solution(&self, state: &RegionState) -> bool {
        match state.regions() {
            [] | [_] => true,
            [first, rest @ ..] => rest.iter().all(|region| region.color == first.color),
        }
    }
}
