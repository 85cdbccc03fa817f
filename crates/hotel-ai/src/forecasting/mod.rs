//! Deterministic demand, pricing, sentiment, and insight engines.
//!
//! Everything in this module is a pure transformation over its explicit
//! inputs: the scorer and pricing engine hold only immutable configuration
//! tables injected at construction time, so they are safe to share across
//! request handlers without coordination.

pub mod demand;
pub mod insights;
pub mod pricing;
pub mod sentiment;

#[cfg(test)]
mod tests;

pub use demand::{
    DemandError, DemandFactor, DemandForecast, DemandLevel, DemandScorer, EventCalendar,
    ScoringConfig,
};
pub use insights::{InsightCatalog, TacticalInsight};
pub use pricing::{PricingEngine, PricingRecommendation, RateCard};
pub use sentiment::{Sentiment, SentimentClassifier, SentimentLexicon, SentimentReading};
