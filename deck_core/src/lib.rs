//! # deck_core - Composite Deck Quote Engine
//!
//! `deck_core` is the computational heart of the Ecodeck configurator:
//! a pure, deterministic pipeline that maps a declarative deck
//! configuration into a geometric layout, a bill of materials, and a
//! priced quote.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every function is a pure transform of one
//!   `DeckConfig` snapshot; nothing is cached between calls
//! - **Total**: the engine never errors or panics within its documented
//!   domain — disabled options produce 0-valued results
//! - **JSON-First**: all inputs and outputs implement
//!   Serialize/Deserialize so any frontend can drive the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use deck_core::config::DeckConfig;
//! use deck_core::materials::compute_materials;
//! use deck_core::pricing::compute_prices;
//!
//! let config = DeckConfig::default(); // 4 m x 3 m rectangular, trim on
//! let materials = compute_materials(&config);
//! let prices = compute_prices(&materials, &config);
//! assert_eq!(prices.total, 131_560.0);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration value object and its validated domain
//! - [`geometry`] - Area and perimeter per shape archetype
//! - [`joists`] - Joist line counts per deck section
//! - [`layout`] - Panel decomposition and joist/trim layout description
//! - [`materials`] - Unit quantities from consumption constants
//! - [`pricing`] - Monetary amounts and the quote currency formatter
//! - [`report`] - Plain-text quote document
//! - [`pdf`] - Printable PDF quote via Typst
//! - [`errors`] - Structured error types for the export boundary

pub mod config;
pub mod errors;
pub mod geometry;
pub mod joists;
pub mod layout;
pub mod materials;
pub mod pdf;
pub mod pricing;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use config::{DeckConfig, DeckShape, Dimensions, EdgeSelection, EdgeType, WoodColor, WoodFinish};
pub use errors::{DeckError, DeckResult};
pub use materials::MaterialCalculation;
pub use pricing::PriceCalculation;
