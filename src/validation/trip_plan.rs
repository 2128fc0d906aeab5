//! Pure trip-plan domain rules, checked before every list/fetch/create/update.
//!
//! Every check is fail-fast and side-effect free; violations surface as
//! [`PlannerError::InvalidArgument`] with a human-readable reason. Membership
//! of preference names in the catalog needs external data and lives in
//! [`crate::validation::preferences`].

use uuid::{Uuid, Variant};

use crate::{
    error::{PlannerError, Result},
    types::TripPlanCommand,
};

/// Longest allowed trip, counting both the first and the last day.
pub const MAX_TRIP_DURATION_DAYS: i64 = 30;

const MAX_LOCATION_LEN: usize = 100;
const MAX_PAGE_LIMIT: u32 = 100;
const MAX_PEOPLE: i32 = 100;

/// Check list-endpoint pagination parameters.
pub fn validate_pagination(page: u32, limit: u32) -> Result<()> {
    if page < 1 {
        return Err(PlannerError::InvalidArgument(
            "Page must be greater than or equal to 1".to_string(),
        ));
    }
    if limit < 1 || limit > MAX_PAGE_LIMIT {
        return Err(PlannerError::InvalidArgument(
            "Limit must be between 1 and 100".to_string(),
        ));
    }
    Ok(())
}

/// Check that `id` is a canonical hyphenated version-4 UUID.
///
/// Accepts the 8-4-4-4-12 textual form in either case; the version nibble
/// must be `4` and the variant nibble one of `8`, `9`, `a`, `b`.
pub fn validate_identifier(id: &str) -> Result<()> {
    // Uuid::try_parse also accepts simple/braced/urn forms; the length pins
    // the input to the hyphenated layout.
    let well_formed = id.len() == 36
        && Uuid::try_parse(id)
            .map(|uuid| uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122)
            .unwrap_or(false);

    if !well_formed {
        return Err(PlannerError::InvalidArgument(
            "Invalid trip plan ID format".to_string(),
        ));
    }
    Ok(())
}

/// Check the arithmetic and length rules of a trip-plan command, in order:
/// date order, duration, location length, traveler count.
pub fn validate_trip_plan_command(command: &TripPlanCommand) -> Result<()> {
    if command.date_to < command.date_from {
        return Err(PlannerError::InvalidArgument(
            "End date must be after start date".to_string(),
        ));
    }

    if command.duration_days() > MAX_TRIP_DURATION_DAYS {
        return Err(PlannerError::InvalidArgument(format!(
            "Trip duration cannot exceed {} days",
            MAX_TRIP_DURATION_DAYS
        )));
    }

    if command.location.chars().count() > MAX_LOCATION_LEN {
        return Err(PlannerError::InvalidArgument(
            "Location must not exceed 100 characters".to_string(),
        ));
    }

    if command.number_of_people < 1 || command.number_of_people > MAX_PEOPLE {
        return Err(PlannerError::InvalidArgument(
            "Number of people must be between 1 and 100".to_string(),
        ));
    }

    Ok(())
}
