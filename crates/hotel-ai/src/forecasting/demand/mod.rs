mod calendar;
mod config;
mod rules;

pub use calendar::EventCalendar;
pub use config::ScoringConfig;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the calendar rule set to a date and room type.
pub struct DemandScorer {
    config: ScoringConfig,
    events: EventCalendar,
}

impl DemandScorer {
    pub fn new(config: ScoringConfig, events: EventCalendar) -> Self {
        Self { config, events }
    }

    /// Score booking demand for a calendar date and room-type label.
    ///
    /// The date must be ISO `YYYY-MM-DD`; anything else is rejected with the
    /// underlying parse failure so the caller can surface it verbatim.
    pub fn score(&self, date: &str, room_type: &str) -> Result<DemandForecast, DemandError> {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| {
            DemandError::InvalidDate {
                raw: date.to_string(),
                source,
            }
        })?;

        let (factors, raw_score) =
            rules::score_calendar(parsed, date, room_type, &self.config, &self.events);

        let demand_score = round2(raw_score.clamp(self.config.floor, self.config.ceiling));
        let level = DemandLevel::from_score(demand_score);

        Ok(DemandForecast {
            date: date.to_string(),
            demand_score,
            level,
            factors,
        })
    }
}

/// Coarse demand banding derived from the rounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl DemandLevel {
    /// Thresholds are strict: a rounded 0.70 is still Medium.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::High
        } else if score > 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Human-readable label naming one rule that contributed to a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandFactor(pub String);

impl DemandFactor {
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DemandFactor {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Scoring output for a single date/room-type pair. Built per request,
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandForecast {
    pub date: String,
    pub demand_score: f64,
    pub level: DemandLevel,
    pub factors: Vec<DemandFactor>,
}

#[derive(Debug, thiserror::Error)]
pub enum DemandError {
    #[error("failed to parse '{raw}' as YYYY-MM-DD ({source})")]
    InvalidDate {
        raw: String,
        source: chrono::ParseError,
    },
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
