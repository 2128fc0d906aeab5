use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input for creating or updating a trip plan record.
///
/// Built transiently from form state by the calling workflow, validated, and
/// then either discarded or forwarded to the storage layer. The persisted
/// entity itself is owned by the storage layer, not by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlanCommand {
    /// First day of the trip (date-only, no time component)
    pub date_from: NaiveDate,
    /// Last day of the trip, inclusive
    pub date_to: NaiveDate,
    /// Destination, at most 100 characters
    pub location: String,
    /// Travelers count, 1 to 100 inclusive
    pub number_of_people: i32,
    /// Semicolon-delimited preference names, each from the preference catalog
    #[serde(default)]
    pub preferences_list: Option<String>,
    /// Free-text plan description, user-authored or AI-generated
    #[serde(default)]
    pub trip_plan_description: Option<String>,
    /// True only when the current description came from an accepted AI draft
    #[serde(default)]
    pub ai_plan_accepted: bool,
}

impl TripPlanCommand {
    /// Individual preference names from `preferences_list`, empty when unset.
    pub fn preference_names(&self) -> Vec<&str> {
        self.preferences_list
            .as_deref()
            .map(|list| list.split(';').filter(|name| !name.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Trip length in days, counting both endpoints. Negative ordering yields
    /// a value below 1 and is rejected by validation before this matters.
    pub fn duration_days(&self) -> i64 {
        (self.date_to - self.date_from).num_days() + 1
    }
}

/// One entry of the read-only preference catalog supplied by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preference {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(from: &str, to: &str) -> TripPlanCommand {
        TripPlanCommand {
            date_from: from.parse().unwrap(),
            date_to: to.parse().unwrap(),
            location: "Paris".to_string(),
            number_of_people: 2,
            preferences_list: Some("culture;food".to_string()),
            trip_plan_description: Some("My Trip to Paris".to_string()),
            ai_plan_accepted: false,
        }
    }

    #[test]
    fn same_day_trip_lasts_one_day() {
        assert_eq!(command("2026-09-01", "2026-09-01").duration_days(), 1);
    }

    #[test]
    fn duration_counts_both_endpoints() {
        assert_eq!(command("2026-09-01", "2026-09-05").duration_days(), 5);
    }

    #[test]
    fn preference_names_split_on_semicolon() {
        let cmd = command("2026-09-01", "2026-09-02");
        assert_eq!(cmd.preference_names(), vec!["culture", "food"]);
    }

    #[test]
    fn missing_preferences_list_yields_no_names() {
        let mut cmd = command("2026-09-01", "2026-09-02");
        cmd.preferences_list = None;
        assert!(cmd.preference_names().is_empty());
    }
}
