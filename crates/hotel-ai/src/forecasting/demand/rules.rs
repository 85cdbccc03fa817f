use super::calendar::EventCalendar;
use super::config::ScoringConfig;
use super::DemandFactor;
use chrono::{Datelike, NaiveDate, Weekday};

const PEAK_MONTHS: [u32; 4] = [6, 7, 8, 12];
const OFF_PEAK_MONTHS: [u32; 2] = [1, 2];

/// Apply the additive calendar rules in their fixed order.
///
/// The order only governs the factor list; the numeric result is a plain
/// sum. The premium room bonus deliberately records no factor, matching
/// the published dashboard behavior.
pub(crate) fn score_calendar(
    date: NaiveDate,
    iso_date: &str,
    room_type: &str,
    config: &ScoringConfig,
    events: &EventCalendar,
) -> (Vec<DemandFactor>, f64) {
    let mut factors = Vec::new();
    let mut score = config.base_score;

    let month = date.month();
    if PEAK_MONTHS.contains(&month) {
        score += config.peak_season_bonus;
        factors.push(DemandFactor::from("Peak Season"));
    } else if OFF_PEAK_MONTHS.contains(&month) {
        score -= config.off_peak_penalty;
        factors.push(DemandFactor::from("Off-Peak Season"));
    }

    if matches!(date.weekday(), Weekday::Fri | Weekday::Sat) {
        score += config.weekend_bonus;
        factors.push(DemandFactor::from("Weekend Surge"));
    }

    if let Some(event) = events.event_on(iso_date) {
        score += config.event_bonus;
        factors.push(DemandFactor(format!("Event: {event}")));
    }

    if config
        .premium_room_types
        .iter()
        .any(|premium| premium == room_type)
    {
        score += config.premium_room_bonus;
    }

    (factors, score)
}
