//! Built-in levels.
//!
//! Each level is a table of base regions, where a region's mask lists the
//! base regions it touches.

use crate::config::{BaseRegion, RegionMergeConfig};

/// Two touching regions, colors 0 and 1.
const TWO_REGIONS: &[BaseRegion] = &[BaseRegion::new(0b10, 0), BaseRegion::new(0b01, 1)];

/// A row of five regions colored `0 1 2 0 1`.
const STRIPES: &[BaseRegion] = &[
    BaseRegion::new(0b00010, 0),
    BaseRegion::new(0b00101, 1),
    BaseRegion::new(0b01010, 2),
    BaseRegion::new(0b10100, 0),
    BaseRegion::new(0b01000, 1),
];

/// Six regions in a cycle colored `0 1 0 2 1 2`.
const RING: &[BaseRegion] = &[
    BaseRegion::new(0b100010, 0),
    BaseRegion::new(0b000101, 1),
    BaseRegion::new(0b001010, 0),
    BaseRegion::new(0b010100, 2),
    BaseRegion::new(0b101000, 1),
    BaseRegion::new(0b010001, 2),
];

/// A center region (0) touching five petals colored `1 2 1 2 3`.
const FLOWER: &[BaseRegion] = &[
    BaseRegion::new(0b111110, 0),
    BaseRegion::new(0b000001, 1),
    BaseRegion::new(0b000001, 2),
    BaseRegion::new(0b000001, 1),
    BaseRegion::new(0b000001, 2),
    BaseRegion::new(0b000001, 3),
];

/// A 3x3 grid of cells in a two-color checker pattern, row-major.
const CHECKERBOARD: &[BaseRegion] = &[
    BaseRegion::new(0x00A, 0),
    BaseRegion::new(0x015, 1),
    BaseRegion::new(0x022, 0),
    BaseRegion::new(0x051, 1),
    BaseRegion::new(0x0AA, 0),
    BaseRegion::new(0x114, 1),
    BaseRegion::new(0x088, 0),
    BaseRegion::new(0x150, 1),
    BaseRegion::new(0x0A0, 0),
];

fn level(number_of_colors: u8, regions: &[BaseRegion]) -> RegionMergeConfig {
    RegionMergeConfig {
        number_of_colors,
        regions: regions.to_vec(),
    }
}

pub fn two_regions() -> RegionMergeConfig {
    level(2, TWO_REGIONS)
}

pub fn stripes() -> RegionMergeConfig {
    level(3, STRIPES)
}

pub fn ring() -> RegionMergeConfig {
    level(3, RING)
}

pub fn flower() -> RegionMergeConfig {
    level(4, FLOWER)
}

pub fn checkerboard() -> RegionMergeConfig {
    level(2, CHECKERBOARD)
}

/// All built-in levels by name.
pub const LEVELS: &[(&str, fn() -> RegionMergeConfig)] = &[
    ("two-regions", two_regions),
    ("stripes", stripes),
    ("ring", ring),
    ("flower", flower),
    ("checkerboard", checkerboard),
];

pub fn builtin(name: &str) -> Option<RegionMergeConfig> {
    LEVELS
        .iter()
        .find(|(level_name, _)| *level_name == name)
        .map(|(_, build)| build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridLevel;
    use crate::explorer::build_state_graph;
    use crate::merge::RegionMergePuzzle;
    use crate::region::{contains, singleton};

    fn min_solution_depth(config: &RegionMergeConfig) -> Option<usize> {
        let mut puzzle = RegionMergePuzzle::new(config).unwrap();
        build_state_graph(&mut puzzle).summary().min_solution_depth
    }

    #[test]
    fn test_all_levels_are_valid_and_symmetric() {
        for (name, build) in LEVELS {
            let config = build();
            assert_eq!(config.validate(), Ok(()), "level {name} is invalid");

            for (a, region) in config.regions.iter().enumerate() {
                assert!(!contains(region.adjacency_mask, a), "level {name}: region {a} touches itself");
                for (b, other) in config.regions.iter().enumerate() {
                    assert_eq!(
                        contains(region.adjacency_mask, b),
                        contains(other.adjacency_mask, a),
                        "level {name}: adjacency {a}-{b} is one-sided"
                    );
                }
            }
        }
    }

    #[test]
    fn test_checkerboard_matches_grid() {
        let grid = GridLevel {
            number_of_colors: 2,
            rows: vec!["010".to_string(), "101".to_string(), "010".to_string()],
        };
        assert_eq!(grid.to_config().unwrap(), checkerboard());
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(builtin("stripes"), Some(stripes()));
        assert_eq!(builtin("missing"), None);
        assert_eq!(two_regions().regions[0].adjacency_mask, singleton(1));
    }

    #[test]
    fn test_known_solution_depths() {
        assert_eq!(min_solution_depth(&two_regions()), Some(1));
        // paint the center, then the cross it became
        assert_eq!(min_solution_depth(&checkerboard()), Some(2));
        // four colors present and each move removes at most one
        assert_eq!(min_solution_depth(&flower()), Some(3));
    }
}
