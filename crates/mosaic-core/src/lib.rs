//! # mosaic-core: Pure Pricing Logic for Mosaic Quote
//!
//! This crate is the **heart** of Mosaic Quote. It estimates what a flooring
//! company charges for laying a mosaic, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Mosaic Quote Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/quote (mosaic-quote)                       │   │
//! │  │    job.json ──► Company + TilePattern ──► QuoteReport          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mosaic-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐   ┌──────────────┐   ┌──────────────────────┐   │   │
//! │  │   │   Tile   │──►│ TilePattern  │──►│ Company              │   │   │
//! │  │   │  area    │   │  pieces      │   │  pieces_per_hour     │   │   │
//! │  │   │  cost    │   │  area, cost  │   │  cost_estimate       │   │   │
//! │  │   └──────────┘   └──────────────┘   └──────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Closed enums (tile style, pattern style, work speed) and `Worker`
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`tile`] - A single tile and its production cost
//! - [`pattern`] - A pattern of tiles
//! - [`company`] - Company pricing and the cost estimate
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, nothing is ever mutated
//! 2. **No I/O**: file system and network access are FORBIDDEN here
//! 3. **Decimal Money**: every monetary value is a `rust_decimal::Decimal`
//! 4. **Round Once**: only the final estimate is rounded, and always up
//!
//! ## Example Usage
//!
//! ```rust
//! use mosaic_core::{Company, Money, PatternStyle, Tile, TilePattern, TileStyle};
//! use mosaic_core::{WorkSpeed, Worker};
//! use rust_decimal_macros::dec;
//!
//! let pattern = TilePattern::new(
//!     PatternStyle::Complex,
//!     vec![
//!         Tile::new(TileStyle::Raw, 200, 200),
//!         Tile::new(TileStyle::Ornate, 20, 20),
//!         Tile::new(TileStyle::FancyColor, 21, 25),
//!         Tile::new(TileStyle::Polished, 5, 5),
//!     ],
//! );
//! let company = Company::new(
//!     "Fliesen Felser",
//!     Money::new(dec!(12.34)),
//!     Money::new(dec!(87.65)),
//!     5,
//!     vec![
//!         Worker::new("Franz", WorkSpeed::Regular),
//!         Worker::new("Marlene", WorkSpeed::Fast),
//!         Worker::new("Ludwig", WorkSpeed::Slow),
//!     ],
//! );
//!
//! // Complex patterns halve the crew's throughput
//! assert_eq!(company.cost_estimate(&pattern).unwrap(), Money::from_units(39));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod company;
pub mod error;
pub mod money;
pub mod pattern;
pub mod tile;
pub mod types;

#[cfg(test)]
mod fixtures;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mosaic_core::Money` instead of
// `use mosaic_core::money::Money`

pub use company::{Company, CostBreakdown};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use pattern::TilePattern;
pub use tile::Tile;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Production cost of one cm² of tile before size and style factors.
pub const TILE_COST_PER_CM2: Decimal = dec!(0.00016);

/// Divisor from summed tile area to the m² figure used for material pricing.
pub const AREA_UNITS_PER_M2: u64 = 1_000_000;

/// Tiles a regular-speed worker places per hour on a simple pattern.
pub const BASE_PIECES_PER_HOUR: f64 = 25.0;
