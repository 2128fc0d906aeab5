//! Preference-catalog membership check.
//!
//! The catalog is external read-only data; the caller fetches it and passes
//! it in, so this stays a pure set check. Unknown names are collected and
//! reported together rather than one at a time.

use crate::{
    error::{PlannerError, Result},
    types::{Preference, TripPlanCommand},
    validation::trip_plan::validate_trip_plan_command,
};

/// Check every name in `preferences_list` against the catalog, aggregating
/// all unknown names into a single failure.
pub fn validate_preference_names(command: &TripPlanCommand, catalog: &[Preference]) -> Result<()> {
    let names = command.preference_names();
    if names.is_empty() {
        return Ok(());
    }

    let invalid: Vec<&str> = names
        .into_iter()
        .filter(|name| !catalog.iter().any(|pref| pref.name == *name))
        .collect();

    if !invalid.is_empty() {
        return Err(PlannerError::InvalidArgument(format!(
            "Invalid preferences: {}",
            invalid.join(", ")
        )));
    }

    Ok(())
}

/// Run the arithmetic rules and the catalog membership check together.
///
/// Persistence callers go through this so neither half can be skipped.
pub fn validate_for_save(command: &TripPlanCommand, catalog: &[Preference]) -> Result<()> {
    validate_trip_plan_command(command)?;
    validate_preference_names(command, catalog)
}
