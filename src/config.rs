//! Level input: base regions with their adjacency, as authored.
//!
//! Levels are read from JSON in one of two shapes:
//!
//! ```json
//! { "numberOfColors": 2, "regions": [{ "adjacencyMask": 2, "color": 0 }, { "adjacencyMask": 1, "color": 1 }] }
//! { "numberOfColors": 3, "rows": ["0012", "0112"] }
//! ```
//!
//! In the grid shape each orthogonally connected blob of same-colored cells
//! is one base region, adjacent to every blob it touches.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::region::{full_mask, singleton, Color, RegionMask, MASK_BITS};

/// Problems found while validating a level, before any puzzle is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{count} base regions exceed the {max}-bit region mask")]
    TooManyRegions { count: usize, max: usize },
    #[error("a level needs at least one color")]
    NoColors,
    #[error("region {region} has color {color}, but the level only has {number_of_colors} colors")]
    ColorOutOfRange {
        region: usize,
        color: Color,
        number_of_colors: u8,
    },
    #[error("region {region} lists adjacency {mask:#b} outside the level's base regions")]
    AdjacencyOutOfRange { region: usize, mask: RegionMask },
    #[error("grid row {row} has {len} cells, expected {expected}")]
    RaggedGrid { row: usize, len: usize, expected: usize },
    #[error("invalid grid cell '{cell}' at row {row}, column {column}")]
    InvalidGridCell { row: usize, column: usize, cell: char },
}

/// One base region: its color and the base regions it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRegion {
    pub adjacency_mask: RegionMask,
    pub color: Color,
}

impl BaseRegion {
    pub const fn new(adjacency_mask: RegionMask, color: Color) -> Self {
        Self {
            adjacency_mask,
            color,
        }
    }
}

/// Everything needed to build a region-merge puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMergeConfig {
    pub number_of_colors: u8,
    pub regions: Vec<BaseRegion>,
}

impl RegionMergeConfig {
    /// Checks the level can be represented and hashed correctly.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let count = self.regions.len();
        if count > MASK_BITS {
            return Err(ConfigError::TooManyRegions {
                count,
                max: MASK_BITS,
            });
        }
        if self.number_of_colors == 0 {
            return Err(ConfigError::NoColors);
        }

        let valid_bits = full_mask(count);
        for (region, base) in self.regions.iter().enumerate() {
            if base.color >= self.number_of_colors {
                return Err(ConfigError::ColorOutOfRange {
                    region,
                    color: base.color,
                    number_of_colors: self.number_of_colors,
                });
            }
            if base.adjacency_mask & !valid_bits != 0 {
                return Err(ConfigError::AdjacencyOutOfRange {
                    region,
                    mask: base.adjacency_mask,
                });
            }
        }
        Ok(())
    }
}

/// A rectangular grid of colored cells.
///
/// Orthogonally connected cells of the same color form one base region, so
/// painting any cell of a blob paints the whole blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLevel {
    pub number_of_colors: u8,
    pub rows: Vec<String>,
}

impl GridLevel {
    /// Converts the grid to base regions, one per same-colored blob.
    ///
    /// Blobs are numbered in row-major order of their first cell. A blob's
    /// adjacency is the union of its cells' 4-neighbours in other blobs.
    /// Cells are `0-9` then `A-Z` (case-insensitive).
    pub fn to_config(&self) -> std::result::Result<RegionMergeConfig, ConfigError> {
        let width = self.rows.first().map_or(0, |row| row.chars().count());
        let height = self.rows.len();
        let mut colors: Vec<Color> = Vec::with_capacity(width * height);

        for (row, line) in self.rows.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(ConfigError::RaggedGrid {
                    row,
                    len,
                    expected: width,
                });
            }
            for (column, cell) in line.chars().enumerate() {
                let color = cell
                    .to_digit(36)
                    .ok_or(ConfigError::InvalidGridCell { row, column, cell })?;
                colors.push(color as Color);
            }
        }

        let neighbours = |index: usize| {
            let (row, column) = (index / width, index % width);
            [
                (row > 0).then(|| index - width),
                (row + 1 < height).then(|| index + width),
                (column > 0).then(|| index - 1),
                (column + 1 < width).then(|| index + 1),
            ]
            .into_iter()
            .flatten()
        };

        // flood-fill same-colored cells into blobs
        let mut blob_of: Vec<Option<usize>> = vec![None; colors.len()];
        let mut blob_colors: Vec<Color> = Vec::new();
        let mut queue = VecDeque::new();
        for start in 0..colors.len() {
            if blob_of[start].is_some() {
                continue;
            }
            let blob = blob_colors.len();
            blob_colors.push(colors[start]);
            blob_of[start] = Some(blob);
            queue.push_back(start);

            while let Some(cell) = queue.pop_front() {
                for next in neighbours(cell) {
                    if blob_of[next].is_none() && colors[next] == colors[start] {
                        blob_of[next] = Some(blob);
                        queue.push_back(next);
                    }
                }
            }
        }

        let count = blob_colors.len();
        if count > MASK_BITS {
            return Err(ConfigError::TooManyRegions {
                count,
                max: MASK_BITS,
            });
        }

        let blob_of: Vec<usize> = blob_of.into_iter().flatten().collect();
        let mut adjacency: Vec<RegionMask> = vec![0; count];
        for (cell, &blob) in blob_of.iter().enumerate() {
            for next in neighbours(cell) {
                if blob_of[next] != blob {
                    adjacency[blob] |= singleton(blob_of[next]);
                }
            }
        }

        let regions = blob_colors
            .into_iter()
            .zip(adjacency)
            .map(|(color, adjacency_mask)| BaseRegion::new(adjacency_mask, color))
            .collect();

        Ok(RegionMergeConfig {
            number_of_colors: self.number_of_colors,
            regions,
        })
    }
}

/// A level file in either supported shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelFile {
    Regions(RegionMergeConfig),
    Grid(GridLevel),
}

impl LevelFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn into_config(self) -> std::result::Result<RegionMergeConfig, ConfigError> {
        match self {
            LevelFile::Regions(config) => Ok(config),
            LevelFile::Grid(grid) => grid.to_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::build_state_graph;
    use crate::merge::RegionMergePuzzle;

    fn two_region_config() -> RegionMergeConfig {
        RegionMergeConfig {
            number_of_colors: 2,
            regions: vec![BaseRegion::new(0b10, 0), BaseRegion::new(0b01, 1)],
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(two_region_config().validate(), Ok(()));
    }

    #[test]
    fn test_too_many_regions_is_rejected() {
        let config = RegionMergeConfig {
            number_of_colors: 2,
            regions: vec![BaseRegion::new(0, 0); MASK_BITS + 1],
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyRegions {
                count: MASK_BITS + 1,
                max: MASK_BITS
            })
        );
    }

    #[test]
    fn test_full_width_is_accepted() {
        let config = RegionMergeConfig {
            number_of_colors: 1,
            regions: vec![BaseRegion::new(RegionMask::MAX, 0); MASK_BITS],
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_color_and_adjacency_ranges() {
        let mut config = two_region_config();
        config.regions[1].color = 2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ColorOutOfRange { region: 1, color: 2, .. })
        ));

        let mut config = two_region_config();
        config.regions[0].adjacency_mask = 0b110;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AdjacencyOutOfRange { region: 0, .. })
        ));

        let mut config = two_region_config();
        config.number_of_colors = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoColors));
    }

    #[test]
    fn test_empty_level_is_valid() {
        let config = RegionMergeConfig {
            number_of_colors: 3,
            regions: Vec::new(),
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_grid_blobs_become_base_regions() {
        // 0 1 2      blobs: A B C
        // 2 1 0             D B E
        let grid = GridLevel {
            number_of_colors: 3,
            rows: vec!["012".to_string(), "210".to_string()],
        };
        let config = grid.to_config().unwrap();
        assert_eq!(
            config.regions,
            vec![
                BaseRegion::new(0b01010, 0),
                BaseRegion::new(0b11101, 1),
                BaseRegion::new(0b10010, 2),
                BaseRegion::new(0b00011, 2),
                BaseRegion::new(0b00110, 0),
            ]
        );
    }

    #[test]
    fn test_grid_blob_explores_like_single_region() {
        let grid = GridLevel {
            number_of_colors: 2,
            rows: vec!["0011".to_string()],
        };
        let config = grid.to_config().unwrap();
        assert_eq!(config, two_region_config());

        let summary = |config: &RegionMergeConfig| {
            let mut puzzle = RegionMergePuzzle::new(config).unwrap();
            build_state_graph(&mut puzzle).summary()
        };
        let grid_summary = summary(&config);
        assert_eq!(grid_summary, summary(&two_region_config()));
        assert_eq!(grid_summary.node_count, 3);
        assert_eq!(grid_summary.min_solution_depth, Some(1));
    }

    #[test]
    fn test_grid_region_limit_counts_blobs() {
        let uniform = GridLevel {
            number_of_colors: 1,
            rows: vec!["0".repeat(MASK_BITS + 6)],
        };
        assert_eq!(uniform.to_config().unwrap().regions, vec![BaseRegion::new(0, 0)]);

        let striped = GridLevel {
            number_of_colors: 2,
            rows: vec!["01".repeat(MASK_BITS / 2 + 1)],
        };
        assert_eq!(
            striped.to_config(),
            Err(ConfigError::TooManyRegions {
                count: MASK_BITS + 2,
                max: MASK_BITS
            })
        );
    }

    #[test]
    fn test_grid_errors() {
        let ragged = GridLevel {
            number_of_colors: 2,
            rows: vec!["01".to_string(), "0".to_string()],
        };
        assert_eq!(
            ragged.to_config(),
            Err(ConfigError::RaggedGrid { row: 1, len: 1, expected: 2 })
        );

        let bad_cell = GridLevel {
            number_of_colors: 2,
            rows: vec!["0#".to_string()],
        };
        assert_eq!(
            bad_cell.to_config(),
            Err(ConfigError::InvalidGridCell { row: 0, column: 1, cell: '#' })
        );
    }

    #[test]
    fn test_level_file_shapes() {
        let regions = LevelFile::from_json(
            r#"{"numberOfColors": 2, "regions": [{"adjacencyMask": 2, "color": 0}, {"adjacencyMask": 1, "color": 1}]}"#,
        )
        .unwrap();
        assert_eq!(regions.into_config().unwrap(), two_region_config());

        let grid = LevelFile::from_json(r#"{"numberOfColors": 2, "rows": ["01"]}"#).unwrap();
        assert_eq!(grid.into_config().unwrap(), two_region_config());

        assert!(LevelFile::from_json(r#"{"rows": 3}"#).is_err());
    }

    #[test]
    fn test_load_level_files() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/levels");

        let two = LevelFile::load(format!("{dir}/two_regions.json")).unwrap();
        assert_eq!(two.into_config().unwrap(), two_region_config());

        let bands = LevelFile::load(format!("{dir}/bands.json")).unwrap();
        let config = bands.into_config().unwrap();
        assert_eq!(config.regions.len(), 12);
        assert_eq!(config.validate(), Ok(()));

        assert!(matches!(
            LevelFile::load(format!("{dir}/missing.json")),
            Err(crate::error::Error::Io(_))
        ));
    }
}
