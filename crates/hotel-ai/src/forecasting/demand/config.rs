use serde::{Deserialize, Serialize};

/// Rule weights for the demand scorer.
///
/// Injected at construction so tests can tune individual rules without
/// touching process-wide state; `default()` reproduces production weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: f64,
    pub peak_season_bonus: f64,
    pub off_peak_penalty: f64,
    pub weekend_bonus: f64,
    pub event_bonus: f64,
    pub premium_room_bonus: f64,
    /// Room-type labels granted the premium bonus, matched exactly.
    pub premium_room_types: Vec<String>,
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 0.4,
            peak_season_bonus: 0.3,
            off_peak_penalty: 0.1,
            weekend_bonus: 0.25,
            event_bonus: 0.4,
            premium_room_bonus: 0.15,
            premium_room_types: vec![
                "Presidential Suite".to_string(),
                "Royal Penthouse".to_string(),
            ],
            floor: 0.1,
            ceiling: 1.0,
        }
    }
}
