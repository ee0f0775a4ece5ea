//! # Tile Module
//!
//! A single mosaic tile and its production cost.
//!
//! ## Cost Formula
//! ```text
//! cost = area (cm²) × 0.00016 × size_factor(area) × style.factor()
//!
//!   area    < 100 ──► 1.5   tiny tiles are fiddly to cut
//!   area    < 400 ──► 1.2
//!   area  <= 2500 ──► 1.0   regular sizes
//!   area 2501-8100 ─► 1.6
//!   area   > 8100 ──► 1.8   large slabs
//! ```
//!
//! The result is exact and NOT rounded. Rounding only happens once, on the
//! company-level estimate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::TileStyle;
use crate::TILE_COST_PER_CM2;

/// Size multiplier for a tile of `area` cm².
///
/// Bands are evaluated smallest first; `2500` still belongs to the regular
/// band and `8100` to the 1.6 band.
///
/// ## Example
/// ```rust
/// use mosaic_core::tile::size_factor;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(size_factor(64), dec!(1.5));
/// assert_eq!(size_factor(2500), dec!(1.0));
/// assert_eq!(size_factor(2501), dec!(1.6));
/// assert_eq!(size_factor(8550), dec!(1.8));
/// ```
pub fn size_factor(area: u64) -> Decimal {
    match area {
        0..=99 => dec!(1.5),
        100..=399 => dec!(1.2),
        400..=2500 => Decimal::ONE,
        2501..=8100 => dec!(1.6),
        8101.. => dec!(1.8),
    }
}

// =============================================================================
// Tile
// =============================================================================

/// One tile of a mosaic floor. Dimensions in centimeters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tile {
    style: TileStyle,
    width: u32,
    height: u32,
}

impl Tile {
    #[inline]
    pub const fn new(style: TileStyle, width: u32, height: u32) -> Self {
        Tile {
            style,
            width,
            height,
        }
    }

    #[inline]
    pub const fn style(&self) -> TileStyle {
        self.style
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Surface in cm².
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Cost of producing this tile, before any company markup.
    ///
    /// ## Example
    /// ```rust
    /// use mosaic_core::{Tile, TileStyle};
    /// use rust_decimal_macros::dec;
    ///
    /// let tile = Tile::new(TileStyle::Polished, 20, 20);
    /// assert_eq!(tile.production_cost().amount(), dec!(0.064));
    ///
    /// // 8×8 is below 100 cm², so the 1.5 size factor kicks in
    /// let tiny = Tile::new(TileStyle::Polished, 8, 8);
    /// assert_eq!(tiny.production_cost().amount(), dec!(0.01536));
    /// ```
    pub fn production_cost(&self) -> Money {
        let area = self.area();
        Money::new(Decimal::from(area) * TILE_COST_PER_CM2)
            * size_factor(area)
            * self.style.factor()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
