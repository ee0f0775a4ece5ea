//! # Tile Pattern Module
//!
//! A mosaic made of several tiles, aggregated for pricing.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::tile::Tile;
use crate::types::PatternStyle;
use crate::AREA_UNITS_PER_M2;

/// A mosaic consisting of several tiles.
///
/// The tile order is kept but never matters for pricing; only the count,
/// the summed area and the summed production cost do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TilePattern {
    style: PatternStyle,
    tiles: Vec<Tile>,
}

impl TilePattern {
    pub fn new(style: PatternStyle, tiles: Vec<Tile>) -> Self {
        TilePattern { style, tiles }
    }

    #[inline]
    pub fn style(&self) -> PatternStyle {
        self.style
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles to place.
    #[inline]
    pub fn pieces(&self) -> usize {
        self.tiles.len()
    }

    /// Summed tile area in cm².
    ///
    /// A single tile fits `u64`; the sum is widened so any number of tiles
    /// fits.
    pub fn area_cm2(&self) -> u128 {
        self.tiles.iter().map(|tile| u128::from(tile.area())).sum()
    }

    /// Summed tile area in m², as a plain ratio for display.
    ///
    /// ## Example
    /// ```rust
    /// use mosaic_core::{PatternStyle, Tile, TilePattern, TileStyle};
    ///
    /// let pattern = TilePattern::new(
    ///     PatternStyle::Simple,
    ///     vec![Tile::new(TileStyle::Raw, 200, 200), Tile::new(TileStyle::Raw, 30, 30)],
    /// );
    /// assert_eq!(pattern.area(), 0.0409);
    /// ```
    pub fn area(&self) -> f64 {
        self.area_cm2() as f64 / AREA_UNITS_PER_M2 as f64
    }

    /// Exact m² area, for multiplying with money.
    ///
    /// `None` when the summed area is beyond the 96-bit decimal mantissa.
    pub fn area_m2(&self) -> Option<Decimal> {
        Decimal::from_u128(self.area_cm2())?.checked_div(Decimal::from(AREA_UNITS_PER_M2))
    }

    /// Sum of the production cost of every tile.
    ///
    /// Independent of [`PatternStyle`]: complexity slows installation down
    /// but does not change what the tiles cost.
    pub fn production_cost(&self) -> Money {
        self.tiles.iter().map(Tile::production_cost).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
