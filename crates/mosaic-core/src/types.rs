//! # Domain Types
//!
//! Closed enumerations and the worker record used throughout Mosaic Quote.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TileStyle     │   │  PatternStyle   │   │   WorkSpeed     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Raw      0.8   │   │  Simple   ×1    │   │  Slow     0.8   │       │
//! │  │  Polished 1.0   │   │  Complex  ×½    │   │  Regular  1.0   │       │
//! │  │  ...            │   │  (throughput)   │   │  Fast     1.2   │       │
//! │  │  Ornate   2.3   │   └─────────────────┘   └────────┬────────┘       │
//! │  └─────────────────┘                                  │                │
//! │   (production cost)                          ┌────────▼────────┐       │
//! │                                              │     Worker      │       │
//! │                                              │  name, speed    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every factor table is an exhaustive `match`, so adding a variant without a
//! factor is a compile error rather than a silent default.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::BASE_PIECES_PER_HOUR;

// =============================================================================
// Tile Style
// =============================================================================

/// Finish of a single tile. Drives its production cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TileStyle {
    /// Unfinished stone.
    Raw,
    /// Polished, no color.
    Polished,
    /// Single solid color.
    PlainColor,
    /// Multi-colored glaze.
    FancyColor,
    /// Printed with a simple pattern.
    SimplePattern,
    /// Hand colored with an ornate pattern.
    Ornate,
}

impl TileStyle {
    /// All styles, in declaration order.
    pub const ALL: [TileStyle; 6] = [
        TileStyle::Raw,
        TileStyle::Polished,
        TileStyle::PlainColor,
        TileStyle::FancyColor,
        TileStyle::SimplePattern,
        TileStyle::Ornate,
    ];

    /// Cost multiplier for this finish.
    ///
    /// | style | factor |
    /// |---|---|
    /// | Raw | 0.8 |
    /// | Polished, PlainColor | 1.0 |
    /// | FancyColor | 1.1 |
    /// | SimplePattern | 1.25 |
    /// | Ornate | 2.3 |
    pub fn factor(&self) -> Decimal {
        match self {
            TileStyle::Raw => dec!(0.8),
            TileStyle::Polished | TileStyle::PlainColor => Decimal::ONE,
            TileStyle::FancyColor => dec!(1.1),
            TileStyle::SimplePattern => dec!(1.25),
            TileStyle::Ornate => dec!(2.3),
        }
    }
}

// =============================================================================
// Pattern Style
// =============================================================================

/// Placement complexity of a whole pattern.
///
/// Only affects installation throughput. Material and production cost are
/// the same for both styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PatternStyle {
    Simple,
    /// Every piece takes twice as long to place.
    Complex,
}

impl PatternStyle {
    /// Multiplier applied to the combined throughput of a crew.
    #[inline]
    pub fn throughput_factor(&self) -> f64 {
        match self {
            PatternStyle::Simple => 1.0,
            PatternStyle::Complex => 0.5,
        }
    }
}

impl Default for PatternStyle {
    fn default() -> Self {
        PatternStyle::Simple
    }
}

// =============================================================================
// Work Speed
// =============================================================================

/// Skill tier of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WorkSpeed {
    Slow,
    Regular,
    Fast,
}

impl WorkSpeed {
    /// Multiplier on the base placement rate.
    #[inline]
    pub fn factor(&self) -> f64 {
        match self {
            WorkSpeed::Slow => 0.8,
            WorkSpeed::Regular => 1.0,
            WorkSpeed::Fast => 1.2,
        }
    }
}

impl Default for WorkSpeed {
    fn default() -> Self {
        WorkSpeed::Regular
    }
}

// =============================================================================
// Worker
// =============================================================================

/// An employee of a flooring company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Worker {
    /// Display name. Never used in any calculation.
    name: String,

    /// Skill tier.
    work_speed: WorkSpeed,
}

impl Worker {
    pub fn new(name: impl Into<String>, work_speed: WorkSpeed) -> Self {
        Worker {
            name: name.into(),
            work_speed,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn work_speed(&self) -> WorkSpeed {
        self.work_speed
    }

    /// Tiles this worker places per hour on a simple pattern.
    ///
    /// ## Example
    /// ```rust
    /// use mosaic_core::{WorkSpeed, Worker};
    ///
    /// assert_eq!(Worker::new("Marlene", WorkSpeed::Fast).pieces_per_hour(), 30.0);
    /// assert_eq!(Worker::new("Franz", WorkSpeed::Regular).pieces_per_hour(), 25.0);
    /// assert_eq!(Worker::new("Ludwig", WorkSpeed::Slow).pieces_per_hour(), 20.0);
    /// ```
    #[inline]
    pub fn pieces_per_hour(&self) -> f64 {
        BASE_PIECES_PER_HOUR * self.work_speed.factor()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
