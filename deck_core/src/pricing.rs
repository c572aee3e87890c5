//! # Pricing Engine
//!
//! Converts material quantities into monetary amounts using a fixed
//! single-currency price table. Planks are priced per m² of *surface*
//! (not plank length); joists per linear meter of the purchasing
//! quantity; clips per unit (the fractional quantity, rounding applies
//! only to displayed counts); edge trim per meter at the rate of the
//! selected trim style.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::config::DeckConfig;
//! use deck_core::materials::compute_materials;
//! use deck_core::pricing::compute_prices;
//!
//! let config = DeckConfig::default(); // 4 m x 3 m, cornières
//! let materials = compute_materials(&config);
//! let prices = compute_prices(&materials, &config);
//! assert_eq!(prices.total, 131_560.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{DeckConfig, EdgeType};
use crate::materials::MaterialCalculation;

/// Plank price per m² of deck surface (DA)
pub const PRICE_LAMES_PER_M2: f64 = 7800.0;

/// Joist price per linear meter of material (DA)
pub const PRICE_LAMBOURDES_PER_M: f64 = 500.0;

/// Clip price per unit (DA)
pub const PRICE_CLIPS_PER_UNIT: f64 = 60.0;

/// Cornière trim price per linear meter (DA)
pub const PRICE_CORNIERES_PER_M: f64 = 500.0;

/// Plinthe trim price per linear meter (DA)
pub const PRICE_PLINTHES_PER_M: f64 = 300.0;

/// Itemized quote amounts in DA.
///
/// `total` is the exact sum of the four line items; no rounding is
/// applied anywhere in the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCalculation {
    pub lames: f64,
    pub lambourdes: f64,
    pub clips: f64,
    pub edges: f64,
    pub total: f64,
}

/// Price a materials bill.
///
/// Pure and total. The edge line is 0 whenever trim is disabled,
/// independent of the configured trim style.
pub fn compute_prices(materials: &MaterialCalculation, config: &DeckConfig) -> PriceCalculation {
    let lames = materials.area * PRICE_LAMES_PER_M2;
    let lambourdes = materials.lambourdes * PRICE_LAMBOURDES_PER_M;
    let clips = materials.clips * PRICE_CLIPS_PER_UNIT;

    let edges = if config.include_edges {
        let rate = match config.edge_type {
            EdgeType::Cornieres => PRICE_CORNIERES_PER_M,
            EdgeType::Plinthes => PRICE_PLINTHES_PER_M,
        };
        materials.edges * rate
    } else {
        0.0
    };

    PriceCalculation {
        lames,
        lambourdes,
        clips,
        edges,
        total: lames + lambourdes + clips + edges,
    }
}

/// Format an amount in the fixed quote currency: thousands grouped by
/// spaces, two comma decimals, `DA` suffix (e.g. `131 560,00 DA`).
pub fn format_price(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped},{frac:02} DA")
}
