mod pricing;

use super::demand::{DemandScorer, EventCalendar, ScoringConfig};
use super::pricing::{PricingEngine, RateCard};
use std::sync::Arc;

pub(super) fn scorer() -> DemandScorer {
    DemandScorer::new(ScoringConfig::default(), EventCalendar::builtin())
}

pub(super) fn pricing_engine() -> PricingEngine {
    PricingEngine::new(Arc::new(scorer()), RateCard::standard())
}
