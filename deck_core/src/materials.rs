//! # Materials Engine
//!
//! Converts a deck config into material quantities using fixed per-m²
//! consumption constants. All quantities scale linearly with area; the
//! edge-trim length comes from the perimeter engine and is 0 when trim
//! is disabled.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::config::DeckConfig;
//! use deck_core::materials::compute_materials;
//!
//! let materials = compute_materials(&DeckConfig::default()); // 4 m x 3 m
//! assert_eq!(materials.area, 12.0);
//! assert_eq!(materials.lambourdes, 36.0);
//! assert_eq!(materials.clip_count(), 216);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::DeckConfig;
use crate::geometry::{compute_area, compute_perimeter};

/// Linear meters of plank per m² of deck surface
pub const LAMES_PER_M2: f64 = 6.89;

/// Linear meters of joist material per m² of deck surface.
///
/// This purchasing estimate is independent of the joist *line count*
/// computed in [`crate::joists`].
pub const LAMBOURDES_PER_M2: f64 = 3.0;

/// Fastening clips per m² of deck surface
pub const CLIPS_PER_M2: f64 = 18.0;

/// Material quantities derived from one config snapshot.
///
/// All fields are meters except `area` (m²) and `clips` (unit count,
/// fractional until rounded up for display or ordering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCalculation {
    /// Total deck surface (m²)
    pub area: f64,

    /// Plank length (m)
    pub lames: f64,

    /// Joist material length (m), `area * 3.0`
    pub lambourdes: f64,

    /// Fastening clip count (fractional)
    pub clips: f64,

    /// Edge-trim length (m), 0 when trim is disabled
    pub edges: f64,

    /// Selected perimeter length (m), same figure as `edges`
    pub perimeter: f64,
}

impl MaterialCalculation {
    /// Clip count rounded up to whole orderable units
    pub fn clip_count(&self) -> u64 {
        self.clips.ceil() as u64
    }
}

/// Compute all material quantities for a config.
///
/// Pure and total: never errors, never panics, and disabled trim simply
/// yields 0-length edges.
pub fn compute_materials(config: &DeckConfig) -> MaterialCalculation {
    let area = compute_area(config);
    let perimeter = compute_perimeter(config);

    MaterialCalculation {
        area,
        lames: area * LAMES_PER_M2,
        lambourdes: area * LAMBOURDES_PER_M2,
        clips: area * CLIPS_PER_M2,
        edges: perimeter,
        perimeter,
    }
}
