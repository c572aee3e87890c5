//! # Joist Layout Engine
//!
//! Computes the number of joist (lambourde) lines per deck section.
//! Lines run across the width, spaced [`JOIST_SPACING_M`] along the
//! height axis; planks run perpendicular to them. This orientation is
//! fixed, not configurable.
//!
//! The line count describes the structural layout. The joist *material
//! quantity* for purchasing is a separate estimate (`area * 3.0`)
//! computed in [`crate::materials`]; the two figures serve different
//! purposes and are both exposed.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::config::DeckConfig;
//! use deck_core::joists::compute_joist_layout;
//!
//! let layout = compute_joist_layout(&DeckConfig::default()); // 4 m x 3 m
//! assert_eq!(layout.total_lines(), 6); // ceil(3.0 / 0.5)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{DeckConfig, DeckShape};

/// Center-to-center joist line spacing (m)
pub const JOIST_SPACING_M: f64 = 0.5;

/// Joist line count for one rectangular section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoistSection {
    /// Section name for display ("principale", "extension", ...)
    pub label: String,

    /// Number of joist lines in this section
    pub lines: u32,
}

/// Per-section joist line counts for the whole deck.
///
/// Rectangular decks have one section; L decks a main section plus one
/// wing; U decks a main section plus two wings (both wings share the
/// same extension height, so their counts are equal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoistLayout {
    pub sections: Vec<JoistSection>,
}

impl JoistLayout {
    /// Total joist line count across all sections
    pub fn total_lines(&self) -> u32 {
        self.sections.iter().map(|s| s.lines).sum()
    }
}

/// Joist line count for one section: `ceil(height / 0.5)`,
/// independent of the section width.
pub fn lines_for_height(height_m: f64) -> u32 {
    (height_m / JOIST_SPACING_M).ceil() as u32
}

/// Compute the per-section joist line layout for a config.
///
/// Pure and total: identical configs yield identical layouts, and the
/// count is monotonically non-decreasing in every height field.
pub fn compute_joist_layout(config: &DeckConfig) -> JoistLayout {
    let dims = &config.dimensions;
    let main = JoistSection {
        label: "principale".to_string(),
        lines: lines_for_height(dims.height),
    };

    let sections = match config.shape {
        DeckShape::Rectangular => vec![main],
        DeckShape::LShaped => vec![
            main,
            JoistSection {
                label: "extension".to_string(),
                lines: lines_for_height(dims.ext_height()),
            },
        ],
        DeckShape::UShaped => vec![
            main,
            JoistSection {
                label: "aile gauche".to_string(),
                lines: lines_for_height(dims.ext_height()),
            },
            JoistSection {
                label: "aile droite".to_string(),
                lines: lines_for_height(dims.ext_height()),
            },
        ],
    };

    JoistLayout { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeckConfig, DeckShape, Dimensions};

    fn config_for(shape: DeckShape, dims: Dimensions) -> DeckConfig {
        DeckConfig {
            shape,
            dimensions: dims,
            ..DeckConfig::default()
        }
    }

    #[test]
    fn test_rectangular_line_count() {
        let config = config_for(DeckShape::Rectangular, Dimensions::new(4.0, 3.0));
        let layout = compute_joist_layout(&config);
        assert_eq!(layout.sections.len(), 1);
        assert_eq!(layout.total_lines(), 6);
    }

    #[test]
    fn test_fractional_height_rounds_up() {
        assert_eq!(lines_for_height(3.1), 7);
        assert_eq!(lines_for_height(0.2), 1);
        assert_eq!(lines_for_height(2.5), 5);
    }

    #[test]
    fn test_l_shaped_sections() {
        let config = config_for(
            DeckShape::LShaped,
            Dimensions::with_extension(4.0, 3.0, 2.0, 1.2),
        );
        let layout = compute_joist_layout(&config);
        assert_eq!(layout.sections.len(), 2);
        // ceil(3/0.5) + ceil(1.2/0.5) = 6 + 3
        assert_eq!(layout.total_lines(), 9);
    }

    #[test]
    fn test_u_shaped_counts_both_wings() {
        let config = config_for(
            DeckShape::UShaped,
            Dimensions::with_extension(4.0, 3.0, 2.0, 1.2),
        );
        let layout = compute_joist_layout(&config);
        assert_eq!(layout.sections.len(), 3);
        // 6 + 3 + 3
        assert_eq!(layout.total_lines(), 12);
        assert_eq!(layout.sections[1].lines, layout.sections[2].lines);
    }

    #[test]
    fn test_monotonic_in_height() {
        let mut previous = 0;
        for tenths in 1..=100 {
            let height = tenths as f64 / 10.0;
            let lines = lines_for_height(height);
            assert!(lines >= previous, "count decreased at height {height}");
            previous = lines;
        }
    }

    #[test]
    fn test_serialization() {
        let config = config_for(
            DeckShape::LShaped,
            Dimensions::with_extension(4.0, 3.0, 2.0, 2.0),
        );
        let layout = compute_joist_layout(&config);
        let json = serde_json::to_string(&layout).unwrap();
        let roundtrip: JoistLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, roundtrip);
    }
}
