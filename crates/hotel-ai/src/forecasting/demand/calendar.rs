use std::collections::HashMap;

/// Immutable ISO-date to event-name table consulted by the event rule.
///
/// In a full deployment this would hydrate from a city events feed; the
/// builtin table mirrors the dates the dashboard currently advertises.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCalendar {
    entries: HashMap<String, String>,
}

impl EventCalendar {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Production event table.
    pub fn builtin() -> Self {
        let entries = [
            ("2026-05-15", "Tech Conference 2026"),
            ("2026-07-04", "Independence Day"),
            ("2026-12-25", "Christmas Day"),
            ("2026-12-31", "New Year's Eve"),
        ]
        .into_iter()
        .map(|(date, name)| (date.to_string(), name.to_string()))
        .collect();

        Self { entries }
    }

    pub fn event_on(&self, iso_date: &str) -> Option<&str> {
        self.entries.get(iso_date).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_resolves_known_dates() {
        let calendar = EventCalendar::builtin();
        assert_eq!(calendar.event_on("2026-12-25"), Some("Christmas Day"));
        assert_eq!(calendar.event_on("2026-05-15"), Some("Tech Conference 2026"));
        assert_eq!(calendar.event_on("2026-03-01"), None);
    }
}
