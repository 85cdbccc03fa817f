use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Rotating dashboard card. Cosmetic content only; no business rule
/// depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TacticalInsight {
    pub id: u32,
    pub level: String,
    pub text: String,
}

/// Fixed catalog backing the insights endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightCatalog {
    entries: Vec<TacticalInsight>,
}

impl InsightCatalog {
    pub fn new(entries: Vec<TacticalInsight>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        let entries = vec![
            TacticalInsight {
                id: 1,
                level: "High".to_string(),
                text: "Unusually high demand for Suites detected on Dec 20. Consider a 10% price bump.".to_string(),
            },
            TacticalInsight {
                id: 2,
                level: "Medium".to_string(),
                text: "Low occupancy for Budget rooms next week. AI suggests a 'Weekday Special' promo.".to_string(),
            },
            TacticalInsight {
                id: 3,
                level: "Critical".to_string(),
                text: "Overbooking risk for Presidential Suite on Christmas Eve. Review pending reservations.".to_string(),
            },
            TacticalInsight {
                id: 4,
                level: "Info".to_string(),
                text: "Room service demand peaks at 9AM. Suggested: Add extra staff to morning shifts.".to_string(),
            },
        ];

        Self::new(entries)
    }

    /// Uniform sample of distinct entries, capped at the catalog size.
    pub fn sample(&self, count: usize) -> Vec<TacticalInsight> {
        let mut rng = rand::thread_rng();
        self.entries
            .choose_multiple(&mut rng, count.min(self.entries.len()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_returns_distinct_entries() {
        let catalog = InsightCatalog::builtin();
        for _ in 0..20 {
            let picks = catalog.sample(2);
            assert_eq!(picks.len(), 2);
            assert_ne!(picks[0].id, picks[1].id);
        }
    }

    #[test]
    fn sample_is_capped_at_catalog_size() {
        let catalog = InsightCatalog::builtin();
        assert_eq!(catalog.sample(10).len(), 4);
    }
}
