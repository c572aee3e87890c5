//! # Geometry Engine
//!
//! Pure area and perimeter computation for the three footprint
//! archetypes. Both functions are total: every `DeckConfig` produces a
//! finite, non-negative value, and identical configs produce
//! bit-identical results.
//!
//! ## Perimeter approximation
//!
//! The L/U perimeter does not trace the concave polygon outline. It uses
//! the estimate
//!
//! ```text
//! P = 2(w + h) + k(ew + eh) - k * min(ew, w)     k = 2 (L), 4 (U)
//! ```
//!
//! and, under a partial edge selection, scales that full perimeter by
//! `selected_sides / 4`. Both are intentional simplifications for a
//! materials estimate; quoted prices depend on these exact formulas.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::config::DeckConfig;
//! use deck_core::geometry::{compute_area, compute_perimeter};
//!
//! let config = DeckConfig::default(); // 4 m x 3 m rectangular
//! assert_eq!(compute_area(&config), 12.0);
//! assert_eq!(compute_perimeter(&config), 14.0);
//! ```

use crate::config::{DeckConfig, DeckShape};

/// Total deck surface in m².
///
/// Rectangular: `w*h`. L: `w*h + ew*eh`. U: `w*h + 2*ew*eh`.
pub fn compute_area(config: &DeckConfig) -> f64 {
    let dims = &config.dimensions;
    let main_area = dims.width * dims.height;

    match config.shape {
        DeckShape::Rectangular => main_area,
        DeckShape::LShaped => main_area + dims.ext_width() * dims.ext_height(),
        DeckShape::UShaped => main_area + 2.0 * dims.ext_width() * dims.ext_height(),
    }
}

/// Edge-trim length in meters over the selected sides.
///
/// Returns 0 when `include_edges` is false, for every shape and every
/// selection. A missing selection counts as all four sides.
///
/// Rectangular decks sum the selected sides independently (top and
/// bottom contribute `width` each, left and right `height` each), so a
/// two-sided selection is not half of `2(w+h)` unless the sides happen
/// to match. L/U decks apply the proportional scaling documented in the
/// module header.
pub fn compute_perimeter(config: &DeckConfig) -> f64 {
    if !config.include_edges {
        return 0.0;
    }

    let dims = &config.dimensions;
    let selection = config.effective_edge_selection();

    match config.shape {
        DeckShape::Rectangular => {
            let mut length = 0.0;
            if selection.top {
                length += dims.width;
            }
            if selection.bottom {
                length += dims.width;
            }
            if selection.left {
                length += dims.height;
            }
            if selection.right {
                length += dims.height;
            }
            length
        }
        DeckShape::LShaped => {
            scaled_composite_perimeter(config, 2.0, selection.selected_count())
        }
        DeckShape::UShaped => {
            scaled_composite_perimeter(config, 4.0, selection.selected_count())
        }
    }
}

/// Full-perimeter estimate for L/U shapes scaled by the selected-side
/// fraction. `k` is 2.0 for one wing, 4.0 for two.
fn scaled_composite_perimeter(config: &DeckConfig, k: f64, selected_sides: u32) -> f64 {
    let dims = &config.dimensions;
    let ext_w = dims.ext_width();
    let ext_h = dims.ext_height();

    let full = 2.0 * (dims.width + dims.height) + k * (ext_w + ext_h)
        - k * ext_w.min(dims.width);

    full * (selected_sides as f64 / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeckConfig, DeckShape, Dimensions, EdgeSelection};

    const EPS: f64 = 1e-9;

    fn config_for(shape: DeckShape, dims: Dimensions) -> DeckConfig {
        DeckConfig {
            shape,
            dimensions: dims,
            ..DeckConfig::default()
        }
    }

    #[test]
    fn test_rectangular_area() {
        let config = config_for(DeckShape::Rectangular, Dimensions::new(4.0, 3.0));
        assert!((compute_area(&config) - 12.0).abs() < EPS);
    }

    #[test]
    fn test_l_shaped_area() {
        let config = config_for(
            DeckShape::LShaped,
            Dimensions::with_extension(4.0, 3.0, 2.0, 1.5),
        );
        // 4*3 + 2*1.5 = 15
        assert!((compute_area(&config) - 15.0).abs() < EPS);
    }

    #[test]
    fn test_u_shaped_area_counts_both_wings() {
        let config = config_for(
            DeckShape::UShaped,
            Dimensions::with_extension(4.0, 3.0, 2.0, 1.5),
        );
        // 4*3 + 2 * (2*1.5) = 18
        assert!((compute_area(&config) - 18.0).abs() < EPS);
    }

    #[test]
    fn test_perimeter_zero_when_edges_disabled() {
        for shape in [DeckShape::Rectangular, DeckShape::LShaped, DeckShape::UShaped] {
            let config = DeckConfig {
                shape,
                dimensions: Dimensions::with_extension(4.0, 3.0, 2.0, 2.0),
                include_edges: false,
                edge_selection: Some(EdgeSelection::all()),
                ..DeckConfig::default()
            };
            assert_eq!(compute_perimeter(&config), 0.0);
        }
    }

    #[test]
    fn test_rectangular_full_perimeter() {
        let config = config_for(DeckShape::Rectangular, Dimensions::new(4.0, 3.0));
        assert!((compute_perimeter(&config) - 14.0).abs() < EPS);
    }

    #[test]
    fn test_rectangular_single_side() {
        let config = DeckConfig {
            edge_selection: Some(EdgeSelection {
                top: true,
                bottom: false,
                left: false,
                right: false,
            }),
            ..config_for(DeckShape::Rectangular, Dimensions::new(4.0, 3.0))
        };
        assert!((compute_perimeter(&config) - 4.0).abs() < EPS);
    }

    #[test]
    fn test_rectangular_left_and_right() {
        let config = DeckConfig {
            edge_selection: Some(EdgeSelection {
                top: false,
                bottom: false,
                left: true,
                right: true,
            }),
            ..config_for(DeckShape::Rectangular, Dimensions::new(4.0, 3.0))
        };
        assert!((compute_perimeter(&config) - 6.0).abs() < EPS);
    }

    #[test]
    fn test_missing_selection_is_full_perimeter() {
        let config = DeckConfig {
            edge_selection: None,
            ..config_for(DeckShape::Rectangular, Dimensions::new(4.0, 3.0))
        };
        assert!((compute_perimeter(&config) - 14.0).abs() < EPS);
    }

    #[test]
    fn test_l_shaped_full_perimeter_formula() {
        let config = config_for(
            DeckShape::LShaped,
            Dimensions::with_extension(4.0, 3.0, 2.0, 1.5),
        );
        // 2*(4+3) + 2*(2+1.5) - 2*min(2,4) = 14 + 7 - 4 = 17
        assert!((compute_perimeter(&config) - 17.0).abs() < EPS);
    }

    #[test]
    fn test_u_shaped_full_perimeter_formula() {
        let config = config_for(
            DeckShape::UShaped,
            Dimensions::with_extension(4.0, 3.0, 2.0, 1.5),
        );
        // 2*(4+3) + 4*(2+1.5) - 4*min(2,4) = 14 + 14 - 8 = 20
        assert!((compute_perimeter(&config) - 20.0).abs() < EPS);
    }

    #[test]
    fn test_l_shaped_partial_selection_scales_proportionally() {
        let full = config_for(
            DeckShape::LShaped,
            Dimensions::with_extension(4.0, 3.0, 2.0, 1.5),
        );
        let half = DeckConfig {
            edge_selection: Some(EdgeSelection {
                top: true,
                bottom: true,
                left: false,
                right: false,
            }),
            ..full.clone()
        };
        assert!((compute_perimeter(&half) - compute_perimeter(&full) / 2.0).abs() < EPS);
    }

    #[test]
    fn test_wing_wider_than_main_clamps_overlap() {
        // min(ew, w) uses the main width when the wing is wider
        let config = config_for(
            DeckShape::LShaped,
            Dimensions::with_extension(2.0, 3.0, 5.0, 1.0),
        );
        // 2*(2+3) + 2*(5+1) - 2*min(5,2) = 10 + 12 - 4 = 18
        assert!((compute_perimeter(&config) - 18.0).abs() < EPS);
    }

    #[test]
    fn test_idempotence() {
        let config = config_for(
            DeckShape::UShaped,
            Dimensions::with_extension(5.3, 4.1, 2.7, 1.9),
        );
        assert_eq!(compute_area(&config), compute_area(&config));
        assert_eq!(compute_perimeter(&config), compute_perimeter(&config));
    }
}
