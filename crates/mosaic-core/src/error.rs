//! # Error Types
//!
//! Domain-specific error types for mosaic-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mosaic-core errors (this file)                                        │
//! │  └── CoreError        - Estimate cannot be computed                    │
//! │                                                                         │
//! │  quote app errors (separate crate)                                     │
//! │  ├── ConfigError      - Bad environment / arguments                    │
//! │  └── AppError         - What the CLI reports                           │
//! │                                                                         │
//! │  Flow: CoreError → AppError → stderr                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (company name, throughput, stage)
//! 3. Errors are enum variants, never String
//! 4. Never fall back to a zero or sentinel cost

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing errors.
///
/// Only the company-level estimate can fail. Tile and pattern queries are
/// total over their (closed, already validated) inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The company has nobody to install the pattern.
    ///
    /// ## When This Occurs
    /// - `Company::cost_estimate` on a company with an empty roster
    ///
    /// ## User Workflow
    /// ```text
    /// Company "Tiles & Co" (workers: [])
    ///      │
    ///      ▼
    /// pieces_per_hour = 0  →  pieces / 0
    ///      │
    ///      ▼
    /// NoWorkers { company: "Tiles & Co" }
    /// ```
    #[error("Company {company} has no workers, cannot estimate installation")]
    NoWorkers { company: String },

    /// Combined throughput has no decimal representation (NaN or infinite).
    #[error("Throughput of {pieces_per_hour} pieces/hour is not a valid rate")]
    InvalidThroughput { pieces_per_hour: f64 },

    /// An intermediate amount left the representable decimal range.
    ///
    /// ## When This Occurs
    /// - Absurd prices or wages (near `Decimal::MAX`)
    /// - A pattern whose summed area does not fit a decimal
    #[error("Estimate for {company} overflows while computing {stage}")]
    Overflow {
        company: String,
        stage: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
