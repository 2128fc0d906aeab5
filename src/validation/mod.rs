pub mod preferences;
pub mod trip_plan;

pub use preferences::{validate_for_save, validate_preference_names};
pub use trip_plan::{
    validate_identifier, validate_pagination, validate_trip_plan_command, MAX_TRIP_DURATION_DAYS,
};
