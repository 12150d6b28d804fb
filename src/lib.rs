//! State-graph exploration for region-merge ("paint bucket") puzzles.
//!
//! [`explorer`] builds the full state graph of any [`Puzzle`] by breadth-first
//! search, recording the fewest moves needed to reach every state.
//! [`merge::RegionMergePuzzle`] is the concrete puzzle: states partition a
//! set of base regions into colored regions, and painting a region merges it
//! with its same-colored neighbours.

pub mod adjacency;
pub mod config;
pub mod error;
pub mod explorer;
pub mod graph;
pub mod levels;
pub mod merge;
pub mod puzzle;
pub mod region;
pub mod report;
pub mod state;

pub use config::{BaseRegion, ConfigError, GridLevel, LevelFile, RegionMergeConfig};
pub use error::{Error, Result};
pub use explorer::{build_state_graph, ExploreConfig, Explorer, Visit};
pub use graph::{GraphSummary, NodeId, NodeKind, StateGraph, StateNode};
pub use merge::{Move, RegionMergePuzzle};
pub use puzzle::Puzzle;
pub use region::{Color, ColoredRegion, RegionMask, MASK_BITS};
pub use state::{RegionState, StateKey};
