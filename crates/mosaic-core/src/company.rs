//! # Company Module
//!
//! Pricing configuration of a flooring company and the cost estimate it
//! would quote for a pattern.
//!
//! ## Estimate Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Company::cost_breakdown                            │
//! │                                                                         │
//! │  pattern.area_m2 × m2_price ─────────────────────────► material        │
//! │                                                                         │
//! │  pattern.production_cost × (1 + margin%) ────────────► production      │
//! │                                                                         │
//! │  workers ──► Σ pieces_per_hour ──► × style factor ──┐                   │
//! │                                                     ▼                   │
//! │  pattern.pieces / pieces_per_hour × wage × workers ─► labor            │
//! │                                                                         │
//! │  (material + production + labor).ceil_to_unit() ─────► total           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pattern::TilePattern;
use crate::types::{PatternStyle, Worker};

// =============================================================================
// Cost Breakdown
// =============================================================================

/// Where a quote comes from.
///
/// The three parts are exact; only `total` is rounded, so
/// `total >= material + production + labor` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostBreakdown {
    /// Floor area × price per m².
    pub material: Money,
    /// Tile production cost including the profit margin.
    pub production: Money,
    /// Wages of the whole crew for the installation time.
    pub labor: Money,
    /// Combined crew throughput for this pattern's style.
    pub pieces_per_hour: f64,
    /// Sum of the parts, rounded up to a whole currency unit.
    pub total: Money,
}

impl CostBreakdown {
    /// Exact sum of the parts, before rounding.
    pub fn subtotal(&self) -> Money {
        self.material + self.production + self.labor
    }
}

// =============================================================================
// Company
// =============================================================================

/// A flooring company: prices plus the crew that installs the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Company {
    name: String,

    /// Base price per m² of floor, independent of the pattern.
    m2_price: Money,

    /// Paid per worker per hour (by the customer).
    hourly_wage: Money,

    /// Markup on the tile production cost, in whole percent (6 = 6%).
    profit_margin_percent: u32,

    workers: Vec<Worker>,
}

impl Company {
    pub fn new(
        name: impl Into<String>,
        m2_price: Money,
        hourly_wage: Money,
        profit_margin_percent: u32,
        workers: Vec<Worker>,
    ) -> Self {
        Company {
            name: name.into(),
            m2_price,
            hourly_wage,
            profit_margin_percent,
            workers,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn m2_price(&self) -> Money {
        self.m2_price
    }

    #[inline]
    pub fn hourly_wage(&self) -> Money {
        self.hourly_wage
    }

    #[inline]
    pub fn profit_margin_percent(&self) -> u32 {
        self.profit_margin_percent
    }

    #[inline]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// How many tiles the whole crew places per hour on a pattern of
    /// `style`.
    ///
    /// Complexity halves the combined rate uniformly; it is not applied per
    /// worker.
    ///
    /// ## Example
    /// ```rust
    /// use mosaic_core::{Company, Money, PatternStyle, WorkSpeed, Worker};
    ///
    /// let crew = vec![
    ///     Worker::new("Franz", WorkSpeed::Regular),
    ///     Worker::new("Marlene", WorkSpeed::Fast),
    ///     Worker::new("Ludwig", WorkSpeed::Slow),
    /// ];
    /// let company = Company::new("Fliesen", Money::ZERO, Money::ZERO, 0, crew);
    ///
    /// assert_eq!(company.pieces_per_hour(PatternStyle::Simple), 75.0);
    /// assert_eq!(company.pieces_per_hour(PatternStyle::Complex), 37.5);
    /// ```
    pub fn pieces_per_hour(&self, style: PatternStyle) -> f64 {
        let crew_rate: f64 = self.workers.iter().map(Worker::pieces_per_hour).sum();
        crew_rate * style.throughput_factor()
    }

    /// Itemized estimate for executing `pattern`.
    ///
    /// ## Errors
    /// - [`CoreError::NoWorkers`] when the roster is empty (zero throughput)
    /// - [`CoreError::InvalidThroughput`] if the rate is not a finite number
    /// - [`CoreError::Overflow`] if an amount leaves the decimal range
    pub fn cost_breakdown(&self, pattern: &TilePattern) -> CoreResult<CostBreakdown> {
        let pieces_per_hour = self.pieces_per_hour(pattern.style());
        if self.workers.is_empty() || pieces_per_hour <= 0.0 {
            warn!(company = %self.name, "Refusing estimate: no workers");
            return Err(CoreError::NoWorkers {
                company: self.name.clone(),
            });
        }
        let rate = Decimal::from_f64(pieces_per_hour)
            .ok_or(CoreError::InvalidThroughput { pieces_per_hour })?;

        let overflow = |stage: &'static str| {
            warn!(company = %self.name, stage, "Estimate overflows decimal range");
            CoreError::Overflow {
                company: self.name.clone(),
                stage,
            }
        };

        let material = pattern
            .area_m2()
            .and_then(|area| self.m2_price.checked_mul(area))
            .ok_or_else(|| overflow("material"))?;
        let production = pattern
            .production_cost()
            .checked_markup(self.profit_margin_percent)
            .ok_or_else(|| overflow("production"))?;

        let crew = Decimal::from(self.workers.len());
        let labor = Decimal::from(pattern.pieces())
            .checked_mul(crew)
            .and_then(|crew_pieces| crew_pieces.checked_div(rate))
            .and_then(|hours| self.hourly_wage.checked_mul(hours))
            .ok_or_else(|| overflow("labor"))?;

        let subtotal = material
            .checked_add(production)
            .and_then(|sum| sum.checked_add(labor))
            .ok_or_else(|| overflow("total"))?;
        let total = subtotal.ceil_to_unit();

        debug!(
            company = %self.name,
            pieces = pattern.pieces() as u64,
            pieces_per_hour,
            material = %material,
            production = %production,
            labor = %labor,
            total = %total,
            "Computed cost estimate"
        );

        Ok(CostBreakdown {
            material,
            production,
            labor,
            pieces_per_hour,
            total,
        })
    }

    /// How much this company charges for executing `pattern`: production
    /// cost plus work cost, rounded up to a whole currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use mosaic_core::{Company, Money, PatternStyle, Tile, TilePattern, TileStyle};
    /// use mosaic_core::{WorkSpeed, Worker};
    /// use rust_decimal_macros::dec;
    ///
    /// let company = Company::new(
    ///     "Fliesen",
    ///     Money::new(dec!(12.34)),
    ///     Money::new(dec!(56.78)),
    ///     5,
    ///     vec![
    ///         Worker::new("Franz", WorkSpeed::Regular),
    ///         Worker::new("Marlene", WorkSpeed::Fast),
    ///         Worker::new("Ludwig", WorkSpeed::Slow),
    ///     ],
    /// );
    /// let pattern = TilePattern::new(
    ///     PatternStyle::Simple,
    ///     vec![
    ///         Tile::new(TileStyle::Raw, 200, 200),
    ///         Tile::new(TileStyle::Ornate, 20, 20),
    ///         Tile::new(TileStyle::FancyColor, 21, 25),
    ///         Tile::new(TileStyle::Polished, 5, 5),
    ///     ],
    /// );
    ///
    /// assert_eq!(company.cost_estimate(&pattern).unwrap(), Money::from_units(20));
    /// ```
    pub fn cost_estimate(&self, pattern: &TilePattern) -> CoreResult<Money> {
        self.cost_breakdown(pattern).map(|breakdown| breakdown.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{large_tile_set, sample_tiles, sample_workers};
    use crate::{Tile, TileStyle};
    use rust_decimal_macros::dec;

    fn sample_company(
        m2_price: Decimal,
        hourly_wage: Decimal,
        margin: u32,
        worker_set: u8,
    ) -> Company {
        Company::new(
            "C",
            Money::new(m2_price),
            Money::new(hourly_wage),
            margin,
            sample_workers(worker_set),
        )
    }

    #[test]
    fn test_construction() {
        let workers = sample_workers(1);
        let company = Company::new(
            "A",
            Money::new(dec!(12.34)),
            Money::new(dec!(56.67)),
            6,
            workers.clone(),
        );

        assert_eq!(company.name(), "A");
        assert_eq!(company.m2_price().amount(), dec!(12.34));
        assert_eq!(company.hourly_wage().amount(), dec!(56.67));
        assert_eq!(company.profit_margin_percent(), 6);
        assert_eq!(company.workers(), workers.as_slice());
    }

    #[test]
    fn test_pieces_per_hour() {
        let cases = [
            (PatternStyle::Simple, 1, 75.0),
            (PatternStyle::Simple, 2, 55.0),
            (PatternStyle::Simple, 3, 45.0),
            (PatternStyle::Simple, 4, 20.0),
            (PatternStyle::Complex, 1, 37.5),
            (PatternStyle::Complex, 2, 27.5),
            (PatternStyle::Complex, 3, 22.5),
            (PatternStyle::Complex, 4, 10.0),
        ];
        for (style, set, expected) in cases {
            let company = sample_company(Decimal::ZERO, Decimal::ZERO, 0, set);
            assert_eq!(
                company.pieces_per_hour(style),
                expected,
                "{style:?}, worker set {set}"
            );
        }
    }

    #[test]
    fn test_simple_is_double_complex() {
        for set in 1..=4 {
            let company = sample_company(Decimal::ZERO, Decimal::ZERO, 0, set);
            assert_eq!(
                company.pieces_per_hour(PatternStyle::Simple),
                2.0 * company.pieces_per_hour(PatternStyle::Complex)
            );
        }
    }

    #[test]
    fn test_cost_estimate_small_pattern() {
        let cases = [
            (dec!(56.78), PatternStyle::Simple, 20, "simple case 1"),
            (dec!(87.65), PatternStyle::Simple, 25, "simple case 2"),
            (dec!(87.65), PatternStyle::Complex, 39, "simple case 3"),
        ];
        for (wage, style, expected, case) in cases {
            let company = sample_company(dec!(12.34), wage, 5, 1);
            let pattern = TilePattern::new(style, sample_tiles());
            assert_eq!(
                company.cost_estimate(&pattern).unwrap(),
                Money::from_units(expected),
                "{case}"
            );
        }
    }

    #[test]
    fn test_cost_estimate_large_pattern() {
        let cases = [
            (dec!(12.34), dec!(87.65), 5, 1, PatternStyle::Simple, 2351, "workers 1"),
            (dec!(12.34), dec!(87.65), 9, 1, PatternStyle::Simple, 2368, "higher profit margin"),
            (dec!(12.34), dec!(87.65), 5, 2, PatternStyle::Simple, 2182, "workers 2"),
            (dec!(60), dec!(87.65), 5, 2, PatternStyle::Simple, 2280, "higher m2 price"),
            (dec!(12.34), dec!(87.65), 5, 3, PatternStyle::Simple, 2557, "workers 3"),
            (dec!(12.34), dec!(35.45), 5, 3, PatternStyle::Simple, 1328, "lower hourly wage"),
            (dec!(12.34), dec!(87.65), 5, 4, PatternStyle::Simple, 2815, "workers 4"),
            (dec!(12.34), dec!(87.65), 5, 4, PatternStyle::Complex, 5138, "complex pattern"),
        ];
        for (m2_price, wage, margin, set, style, expected, case) in cases {
            let company = sample_company(m2_price, wage, margin, set);
            let pattern = TilePattern::new(style, large_tile_set());
            assert_eq!(
                company.cost_estimate(&pattern).unwrap(),
                Money::from_units(expected),
                "{case}"
            );
        }
    }

    #[test]
    fn test_breakdown_parts_are_exact() {
        let company = sample_company(dec!(12.34), dec!(56.78), 5, 1);
        let pattern = TilePattern::new(PatternStyle::Simple, sample_tiles());

        let breakdown = company.cost_breakdown(&pattern).unwrap();

        assert_eq!(breakdown.material.amount(), dec!(0.505323));
        assert_eq!(breakdown.production.amount(), dec!(9.93468));
        assert_eq!(breakdown.labor.amount(), dec!(9.0848));
        assert_eq!(breakdown.pieces_per_hour, 75.0);
        assert_eq!(breakdown.subtotal().amount(), dec!(19.524803));
        assert_eq!(breakdown.total, Money::from_units(20));
    }

    #[test]
    fn test_total_never_below_subtotal() {
        for set in 1..=4 {
            for style in [PatternStyle::Simple, PatternStyle::Complex] {
                let company = sample_company(dec!(12.34), dec!(87.65), 5, set);
                let pattern = TilePattern::new(style, large_tile_set());
                let breakdown = company.cost_breakdown(&pattern).unwrap();

                assert!(breakdown.total >= breakdown.subtotal());
                assert!(breakdown.total.amount() - breakdown.subtotal().amount() < Decimal::ONE);
                assert_eq!(breakdown.total.amount().fract(), Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_whole_subtotal_is_not_bumped() {
        // 10 pieces at 20/hour for one worker at 10.00/hour = 5.00 exactly
        let company = Company::new(
            "Exact",
            Money::ZERO,
            Money::new(dec!(10)),
            0,
            sample_workers(4),
        );
        let pattern = TilePattern::new(PatternStyle::Simple, Vec::new());
        assert_eq!(company.cost_estimate(&pattern).unwrap(), Money::ZERO);

        let tiles = vec![Tile::new(TileStyle::Raw, 0, 0); 10];
        let pattern = TilePattern::new(PatternStyle::Simple, tiles);
        assert_eq!(company.cost_estimate(&pattern).unwrap(), Money::from_units(5));
    }

    #[test]
    fn test_no_workers_is_an_error() {
        let company = sample_company(dec!(12.34), dec!(56.78), 5, 0);
        assert!(company.workers().is_empty());

        for style in [PatternStyle::Simple, PatternStyle::Complex] {
            for tiles in [sample_tiles(), large_tile_set(), Vec::new()] {
                let pattern = TilePattern::new(style, tiles);
                let err = company.cost_estimate(&pattern).unwrap_err();
                assert_eq!(
                    err,
                    CoreError::NoWorkers {
                        company: "C".to_string()
                    }
                );
            }
        }
    }

    #[test]
    fn test_huge_prices_overflow_instead_of_panicking() {
        let pattern = TilePattern::new(PatternStyle::Simple, large_tile_set());

        let company = sample_company(Decimal::MAX, dec!(87.65), 5, 1);
        assert_eq!(
            company.cost_estimate(&pattern).unwrap_err(),
            CoreError::Overflow {
                company: "C".to_string(),
                stage: "material"
            }
        );

        let company = sample_company(dec!(12.34), Decimal::MAX, 5, 1);
        assert_eq!(
            company.cost_estimate(&pattern).unwrap_err(),
            CoreError::Overflow {
                company: "C".to_string(),
                stage: "labor"
            }
        );

        // material and labor fit on their own, their sum does not
        let half = Decimal::MAX / dec!(2);
        let company = sample_company(half, half, 5, 4);
        let mut tiles = vec![Tile::new(TileStyle::Raw, 1000, 1000)];
        tiles.extend(vec![Tile::new(TileStyle::Raw, 0, 0); 19]);
        let pattern = TilePattern::new(PatternStyle::Simple, tiles);
        assert_eq!(
            company.cost_estimate(&pattern).unwrap_err(),
            CoreError::Overflow {
                company: "C".to_string(),
                stage: "total"
            }
        );
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let company = sample_company(dec!(12.34), dec!(87.65), 5, 2);
        let pattern = TilePattern::new(PatternStyle::Complex, large_tile_set());

        let first = company.cost_breakdown(&pattern).unwrap();
        let second = company.cost_breakdown(&pattern).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_company_deserializes_from_json() {
        let json = r#"{
            "name": "Fliesen Felser",
            "m2_price": "12.34",
            "hourly_wage": "56.78",
            "profit_margin_percent": 5,
            "workers": [
                { "name": "Franz Felser", "work_speed": "regular" },
                { "name": "Marlene Marmor", "work_speed": "fast" }
            ]
        }"#;

        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.name(), "Fliesen Felser");
        assert_eq!(company.m2_price().amount(), dec!(12.34));
        assert_eq!(company.workers().len(), 2);
        assert_eq!(company.pieces_per_hour(PatternStyle::Simple), 55.0);
    }
}
