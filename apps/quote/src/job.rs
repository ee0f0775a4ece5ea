//! # Quote Jobs
//!
//! A job file pairs one company with one pattern:
//!
//! ```json
//! {
//!   "company": {
//!     "name": "Fliesen Felser",
//!     "m2_price": "12.34",
//!     "hourly_wage": "56.78",
//!     "profit_margin_percent": 5,
//!     "workers": [{ "name": "Franz Felser", "work_speed": "regular" }]
//!   },
//!   "pattern": {
//!     "style": "simple",
//!     "tiles": [{ "style": "raw", "width": 200, "height": 200 }]
//!   }
//! }
//! ```
//!
//! Money is written as strings so it never passes through a float.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use mosaic_core::{Company, CostBreakdown, PatternStyle, TilePattern};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// One company asked to price one pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteJob {
    pub company: Company,
    pub pattern: TilePattern,
}

impl QuoteJob {
    /// Reads and parses a job file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::ReadJob {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len() as u64, "Read job file");
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(AppError::InvalidJob)
    }
}

/// The printed outcome of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteReport {
    pub id: Uuid,
    pub quoted_at: DateTime<Utc>,
    pub company: String,
    pub pattern_style: PatternStyle,
    pub pieces: usize,
    pub breakdown: CostBreakdown,
}

impl QuoteReport {
    /// Prices the job. Fails when the company cannot install anything.
    pub fn for_job(job: &QuoteJob) -> AppResult<Self> {
        let breakdown = job.company.cost_breakdown(&job.pattern)?;

        Ok(QuoteReport {
            id: Uuid::new_v4(),
            quoted_at: Utc::now(),
            company: job.company.name().to_string(),
            pattern_style: job.pattern.style(),
            pieces: job.pattern.pieces(),
            breakdown,
        })
    }

    /// Multi-line, human readable rendering.
    pub fn render_text(&self) -> String {
        let b = &self.breakdown;
        format!(
            "Quote {id} ({quoted_at})\n\
             Company:     {company}\n\
             Pattern:     {pieces} pieces, {style:?}, {rate} pieces/hour\n\
             Material:    {material}\n\
             Production:  {production}\n\
             Labor:       {labor}\n\
             Total:       {total}",
            id = self.id,
            quoted_at = self.quoted_at.to_rfc3339(),
            company = self.company,
            pieces = self.pieces,
            style = self.pattern_style,
            rate = b.pieces_per_hour,
            material = b.material,
            production = b.production,
            labor = b.labor,
            total = b.total,
        )
    }
}
