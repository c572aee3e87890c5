//! # Geometric Layout
//!
//! Meter-space layout description of a deck: the rectangular panel
//! decomposition of the footprint, the joist line offsets inside each
//! panel, and the edge-trim segments along the selected sides. A
//! renderer scales these to pixels; no pixel math lives here.
//!
//! Panel arrangement follows the configurator's drawing convention:
//! the main rectangle sits at the origin and extension wings attach
//! to its sides, top-aligned (L: wing to the right of the main; U: one
//! wing off each side edge, so the left wing carries a negative `x`).

use serde::{Deserialize, Serialize};

use crate::config::{DeckConfig, DeckShape};
use crate::joists::{lines_for_height, JOIST_SPACING_M};

/// One rectangular sub-panel of the footprint, in meters.
///
/// `x` grows rightward, `y` grows downward from the main rectangle's
/// top-left corner. Wings left of the main have a negative `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Panel name for display ("principale", "aile gauche", ...)
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Panel {
    /// Joist line offsets from the panel top, one per line at
    /// [`JOIST_SPACING_M`] steps.
    pub fn joist_offsets(&self) -> Vec<f64> {
        (0..lines_for_height(self.height))
            .map(|i| i as f64 * JOIST_SPACING_M)
            .collect()
    }
}

/// Side of the main rectangle's bounding footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Edge-trim segment along one selected side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub side: Side,
    /// Nominal side length (m): width for top/bottom, height for left/right
    pub length: f64,
}

/// Full layout description for one config snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckLayout {
    pub panels: Vec<Panel>,
    pub edge_segments: Vec<EdgeSegment>,
}

/// Decompose the footprint into panels and trim segments.
///
/// Pure and total, like the rest of the engine. Edge segments are empty
/// when `include_edges` is false.
pub fn compute_layout(config: &DeckConfig) -> DeckLayout {
    let dims = &config.dimensions;
    let (w, h) = (dims.width, dims.height);
    let (ew, eh) = (dims.ext_width(), dims.ext_height());

    let main = Panel {
        label: "principale".to_string(),
        x: 0.0,
        y: 0.0,
        width: w,
        height: h,
    };

    let panels = match config.shape {
        DeckShape::Rectangular => vec![main],
        DeckShape::LShaped => vec![
            main,
            Panel {
                label: "extension".to_string(),
                x: w,
                y: 0.0,
                width: ew,
                height: eh,
            },
        ],
        DeckShape::UShaped => vec![
            main,
            Panel {
                label: "aile gauche".to_string(),
                x: -ew,
                y: 0.0,
                width: ew,
                height: eh,
            },
            Panel {
                label: "aile droite".to_string(),
                x: w,
                y: 0.0,
                width: ew,
                height: eh,
            },
        ],
    };

    let mut edge_segments = Vec::new();
    if config.include_edges {
        let selection = config.effective_edge_selection();
        if selection.top {
            edge_segments.push(EdgeSegment { side: Side::Top, length: w });
        }
        if selection.bottom {
            edge_segments.push(EdgeSegment { side: Side::Bottom, length: w });
        }
        if selection.left {
            edge_segments.push(EdgeSegment { side: Side::Left, length: h });
        }
        if selection.right {
            edge_segments.push(EdgeSegment { side: Side::Right, length: h });
        }
    }

    DeckLayout { panels, edge_segments }
}
