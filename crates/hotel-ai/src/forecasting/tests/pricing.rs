use super::pricing_engine;
use crate::forecasting::demand::DemandError;

#[test]
fn standard_room_prices_base_times_multiplier() {
    // 2026-06-03 scores 0.70, so the multiplier is 0.8 + 0.70 * 0.7 = 1.29.
    let recommendation = pricing_engine()
        .recommend("2026-06-03", "Standard")
        .expect("valid date prices");

    assert_eq!(recommendation.recommended_price, 129.0);
    assert_eq!(recommendation.confidence, 0.85);
    assert_eq!(
        recommendation.reason,
        "Based on Medium forecasted demand (70%). Factors: Peak Season"
    );
}

#[test]
fn presidential_suite_uses_presidential_base() {
    // Tier priority: "Presidential" must win before "Suite" can match.
    // Scores 0.85 on a peak weekday (premium bonus), multiplier 1.395.
    let recommendation = pricing_engine()
        .recommend("2026-06-03", "Presidential Suite")
        .expect("valid date prices");

    assert_eq!(recommendation.recommended_price, 1674.0);
}

#[test]
fn saturated_demand_hits_the_multiplier_ceiling() {
    // Christmas 2026 clamps to 1.0, multiplier 1.5.
    let recommendation = pricing_engine()
        .recommend("2026-12-25", "Royal Penthouse")
        .expect("valid date prices");

    assert_eq!(recommendation.recommended_price, 2250.0);
    assert_eq!(
        recommendation.reason,
        "Based on High forecasted demand (100%). Factors: Peak Season, Weekend Surge, Event: Christmas Day"
    );
}

#[test]
fn rationale_falls_back_to_standard_demand() {
    // 2026-04-08 is a Wednesday outside every season and event table entry.
    let recommendation = pricing_engine()
        .recommend("2026-04-08", "Standard")
        .expect("valid date prices");

    assert_eq!(
        recommendation.reason,
        "Based on Low forecasted demand (40%). Factors: Standard Demand"
    );
    assert_eq!(recommendation.recommended_price, 108.0);
}

#[test]
fn price_is_monotone_in_demand_score() {
    let engine = pricing_engine();
    // Same room, rising demand contexts: off-peak weekday, shoulder
    // weekday, peak weekday, peak weekend, peak weekend with event.
    let dates = [
        "2026-01-12",
        "2026-04-08",
        "2026-06-03",
        "2026-06-05",
        "2026-12-25",
    ];

    let prices: Vec<f64> = dates
        .iter()
        .map(|date| {
            engine
                .recommend(date, "Garden View")
                .expect("valid date prices")
                .recommended_price
        })
        .collect();

    for pair in prices.windows(2) {
        assert!(pair[0] <= pair[1], "prices must not fall as demand rises");
    }
}

#[test]
fn scorer_failures_propagate_unchanged() {
    let err = pricing_engine()
        .recommend("June 3rd", "Standard")
        .expect_err("malformed date must fail");

    assert!(matches!(err, DemandError::InvalidDate { .. }));
}
