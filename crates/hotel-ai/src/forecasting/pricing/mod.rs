mod rate_card;

pub use rate_card::{RateCard, RateTier};

use super::demand::{round2, DemandError, DemandForecast, DemandScorer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Demand multiplier bounds: 0.8x at zero demand, 1.5x at saturated demand.
const MULTIPLIER_FLOOR: f64 = 0.8;
const MULTIPLIER_SPAN: f64 = 0.7;

/// Placeholder until recommendation confidence is calibrated against
/// realized bookings.
const CONFIDENCE: f64 = 0.85;

/// Derives a nightly rate from the demand forecast and the rate card.
pub struct PricingEngine {
    scorer: Arc<DemandScorer>,
    rate_card: RateCard,
}

impl PricingEngine {
    pub fn new(scorer: Arc<DemandScorer>, rate_card: RateCard) -> Self {
        Self { scorer, rate_card }
    }

    /// Recommend a nightly price for a date and room type.
    ///
    /// Runs the demand scorer first; a scorer failure propagates unchanged.
    pub fn recommend(
        &self,
        date: &str,
        room_type: &str,
    ) -> Result<PricingRecommendation, DemandError> {
        let forecast = self.scorer.score(date, room_type)?;
        Ok(self.price_forecast(&forecast, room_type))
    }

    /// Price an already-computed forecast against the rate card.
    pub fn price_forecast(
        &self,
        forecast: &DemandForecast,
        room_type: &str,
    ) -> PricingRecommendation {
        let base = self.rate_card.base_for(room_type);
        let multiplier = MULTIPLIER_FLOOR + forecast.demand_score * MULTIPLIER_SPAN;
        let recommended_price = round2(base * multiplier);

        PricingRecommendation {
            recommended_price,
            reason: build_rationale(forecast),
            confidence: CONFIDENCE,
        }
    }
}

/// Pricing output surfaced to the dashboard. The `reason` wording is a
/// UI contract; change it only together with the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRecommendation {
    pub recommended_price: f64,
    pub reason: String,
    pub confidence: f64,
}

fn build_rationale(forecast: &DemandForecast) -> String {
    let factor_list = if forecast.factors.is_empty() {
        "Standard Demand".to_string()
    } else {
        forecast
            .factors
            .iter()
            .map(|factor| factor.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Based on {} forecasted demand ({}%). Factors: {}",
        forecast.level.label(),
        (forecast.demand_score * 100.0).round() as i64,
        factor_list
    )
}
