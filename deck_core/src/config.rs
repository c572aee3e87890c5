//! # Deck Configuration Model
//!
//! The `DeckConfig` struct is the single input to every engine function.
//! It is an immutable snapshot: frontends replace the whole value on each
//! edit, and every derived result is recomputed fresh from the current
//! snapshot (no caching, no partial mutation visible to the engine).
//!
//! All dimension values are in meters and are assumed positive; the
//! frontend floors invalid numeric input before a config is ever built
//! (see [`Dimensions::sanitized`]).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "shape": "LShaped",
//!   "dimensions": {
//!     "width": 4.0,
//!     "height": 3.0,
//!     "extension_width": 2.0,
//!     "extension_height": 2.0
//!   },
//!   "color": "Chene",
//!   "finish": "Brossee",
//!   "edge_type": "Cornieres",
//!   "include_edges": true,
//!   "edge_selection": { "top": true, "bottom": true, "left": false, "right": true }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Fallback extension dimension (m) when an L/U config omits the field
pub const DEFAULT_EXTENSION_M: f64 = 2.0;

/// Minimum accepted main dimension (m) at the input boundary
pub const MIN_MAIN_DIMENSION_M: f64 = 1.0;

/// Minimum accepted extension dimension (m) at the input boundary
pub const MIN_EXTENSION_M: f64 = 2.0;

/// Deck footprint archetype.
///
/// Determines how many rectangular sub-panels compose the deck:
/// one (rectangular), two (L: main + one wing), or three (U: main +
/// two symmetric wings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckShape {
    Rectangular,
    LShaped,
    UShaped,
}

impl DeckShape {
    /// Number of rectangular sub-panels for this shape
    pub fn panel_count(&self) -> usize {
        match self {
            DeckShape::Rectangular => 1,
            DeckShape::LShaped => 2,
            DeckShape::UShaped => 3,
        }
    }

    /// Whether the shape carries extension wings
    pub fn has_extension(&self) -> bool {
        !matches!(self, DeckShape::Rectangular)
    }

    /// Display name used in quote documents
    pub fn display_name(&self) -> &'static str {
        match self {
            DeckShape::Rectangular => "rectangulaire",
            DeckShape::LShaped => "forme L",
            DeckShape::UShaped => "forme U",
        }
    }
}

impl Default for DeckShape {
    fn default() -> Self {
        DeckShape::Rectangular
    }
}

/// Composite-wood plank color (catalog set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WoodColor {
    Gris,
    Acajou,
    Chene,
    Marron,
}

impl WoodColor {
    pub fn display_name(&self) -> &'static str {
        match self {
            WoodColor::Gris => "gris",
            WoodColor::Acajou => "acajou",
            WoodColor::Chene => "chêne",
            WoodColor::Marron => "marron",
        }
    }
}

impl Default for WoodColor {
    fn default() -> Self {
        WoodColor::Chene
    }
}

/// Plank surface finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WoodFinish {
    Brossee,
    Structuree,
    Poncee,
}

impl WoodFinish {
    pub fn display_name(&self) -> &'static str {
        match self {
            WoodFinish::Brossee => "brossée",
            WoodFinish::Structuree => "structurée",
            WoodFinish::Poncee => "poncée",
        }
    }
}

impl Default for WoodFinish {
    fn default() -> Self {
        WoodFinish::Brossee
    }
}

/// Edge-trim style, applied along the selected perimeter sides.
///
/// The two styles are mutually exclusive and priced at different
/// per-meter rates (see [`crate::pricing`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeType {
    Cornieres,
    Plinthes,
}

impl EdgeType {
    pub fn display_name(&self) -> &'static str {
        match self {
            EdgeType::Cornieres => "cornières",
            EdgeType::Plinthes => "plinthes",
        }
    }
}

impl Default for EdgeType {
    fn default() -> Self {
        EdgeType::Cornieres
    }
}

/// Deck dimensions in meters.
///
/// `width`/`height` describe the main rectangle. The extension fields
/// describe the wing(s) of L/U shapes; when absent they default to
/// [`DEFAULT_EXTENSION_M`] so an L/U config with missing extensions
/// still computes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Main rectangle width (m)
    pub width: f64,

    /// Main rectangle height (m)
    pub height: f64,

    /// Wing width (m), L/U shapes only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_width: Option<f64>,

    /// Wing height (m), L/U shapes only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_height: Option<f64>,
}

impl Dimensions {
    /// Main-rectangle-only dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Dimensions {
            width,
            height,
            extension_width: None,
            extension_height: None,
        }
    }

    /// Dimensions with an extension wing (L/U shapes)
    pub fn with_extension(width: f64, height: f64, ext_width: f64, ext_height: f64) -> Self {
        Dimensions {
            width,
            height,
            extension_width: Some(ext_width),
            extension_height: Some(ext_height),
        }
    }

    /// Wing width, defaulted when absent
    pub fn ext_width(&self) -> f64 {
        self.extension_width.unwrap_or(DEFAULT_EXTENSION_M)
    }

    /// Wing height, defaulted when absent
    pub fn ext_height(&self) -> f64 {
        self.extension_height.unwrap_or(DEFAULT_EXTENSION_M)
    }

    /// Boundary clamping for raw frontend input.
    ///
    /// Non-finite or undersized values are floored at the minimum valid
    /// dimension (1.0 m for the main rectangle, 2.0 m for extensions),
    /// so the engine never observes an out-of-domain value.
    pub fn sanitized(&self) -> Self {
        Dimensions {
            width: clamp_dimension(self.width, MIN_MAIN_DIMENSION_M),
            height: clamp_dimension(self.height, MIN_MAIN_DIMENSION_M),
            extension_width: self
                .extension_width
                .map(|v| clamp_dimension(v, MIN_EXTENSION_M)),
            extension_height: self
                .extension_height
                .map(|v| clamp_dimension(v, MIN_EXTENSION_M)),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::new(4.0, 3.0)
    }
}

fn clamp_dimension(value: f64, min: f64) -> f64 {
    if value.is_finite() && value >= min {
        value
    } else {
        min
    }
}

/// Per-side edge-trim selection over the main rectangle's bounding
/// footprint. Only consulted when `include_edges` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSelection {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeSelection {
    /// All four sides selected
    pub fn all() -> Self {
        EdgeSelection {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    /// No side selected
    pub fn none() -> Self {
        EdgeSelection {
            top: false,
            bottom: false,
            left: false,
            right: false,
        }
    }

    /// Number of selected sides (0..=4)
    pub fn selected_count(&self) -> u32 {
        [self.top, self.bottom, self.left, self.right]
            .iter()
            .filter(|&&s| s)
            .count() as u32
    }

    /// Display names of the selected sides, in top/bottom/left/right order
    pub fn selected_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.top {
            names.push("haut");
        }
        if self.bottom {
            names.push("bas");
        }
        if self.left {
            names.push("gauche");
        }
        if self.right {
            names.push("droite");
        }
        names
    }
}

impl Default for EdgeSelection {
    fn default() -> Self {
        EdgeSelection::all()
    }
}

/// Aggregate configuration snapshot consumed by every engine function.
///
/// Created with defaults, replaced wholesale on each frontend edit, and
/// discarded when the session ends. Nothing derived from it is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Footprint archetype
    pub shape: DeckShape,

    /// All dimensions in meters
    pub dimensions: Dimensions,

    /// Plank color
    pub color: WoodColor,

    /// Plank finish
    pub finish: WoodFinish,

    /// Edge-trim style (only priced when `include_edges` is true)
    pub edge_type: EdgeType,

    /// Whether edge trim is part of the order
    pub include_edges: bool,

    /// Per-side trim selection; `None` means all four sides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_selection: Option<EdgeSelection>,
}

impl DeckConfig {
    /// Effective edge selection: full perimeter when none was supplied
    pub fn effective_edge_selection(&self) -> EdgeSelection {
        self.edge_selection.unwrap_or_else(EdgeSelection::all)
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            shape: DeckShape::default(),
            dimensions: Dimensions::default(),
            color: WoodColor::default(),
            finish: WoodFinish::default(),
            edge_type: EdgeType::default(),
            include_edges: true,
            edge_selection: Some(EdgeSelection::all()),
        }
    }
}
