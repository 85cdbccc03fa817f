/// One nightly-rate tier, matched by substring containment in the
/// room-type label.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTier {
    pub pattern: String,
    pub nightly_base: f64,
}

/// Ordered base-price table for room-type tiers.
///
/// Tier order is load-bearing: "Presidential Suite" must resolve through
/// the "Presidential" tier before the broader "Suite" tier can shadow it.
#[derive(Debug, Clone, PartialEq)]
pub struct RateCard {
    tiers: Vec<RateTier>,
    default_base: f64,
}

impl RateCard {
    pub fn new(tiers: Vec<RateTier>, default_base: f64) -> Self {
        Self {
            tiers,
            default_base,
        }
    }

    /// Production rate card.
    pub fn standard() -> Self {
        let tiers = [
            ("Presidential", 1200.0),
            ("Royal", 1500.0),
            ("Suite", 450.0),
            ("View", 350.0),
        ]
        .into_iter()
        .map(|(pattern, nightly_base)| RateTier {
            pattern: pattern.to_string(),
            nightly_base,
        })
        .collect();

        Self::new(tiers, 100.0)
    }

    /// First tier whose pattern appears in the label wins; unmatched
    /// labels fall back to the default base.
    pub fn base_for(&self, room_type: &str) -> f64 {
        self.tiers
            .iter()
            .find(|tier| room_type.contains(tier.pattern.as_str()))
            .map(|tier| tier.nightly_base)
            .unwrap_or(self.default_base)
    }
}
