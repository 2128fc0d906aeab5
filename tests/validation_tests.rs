use chrono::{Days, NaiveDate, Utc};
use trip_planner_rs::{
    validate_for_save, validate_identifier, validate_pagination, validate_preference_names,
    validate_trip_plan_command, Preference, PlannerError, TripPlanCommand, MAX_TRIP_DURATION_DAYS,
};

fn valid_command() -> TripPlanCommand {
    TripPlanCommand {
        date_from: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        date_to: NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(),
        location: "Paris".to_string(),
        number_of_people: 2,
        preferences_list: Some("culture".to_string()),
        trip_plan_description: Some("My Trip to Paris".to_string()),
        ai_plan_accepted: false,
    }
}

fn catalog() -> Vec<Preference> {
    vec![
        Preference {
            id: "1".to_string(),
            name: "culture".to_string(),
        },
        Preference {
            id: "2".to_string(),
            name: "food".to_string(),
        },
        Preference {
            id: "3".to_string(),
            name: "nature".to_string(),
        },
    ]
}

fn message(result: trip_planner_rs::Result<()>) -> String {
    result.unwrap_err().to_string()
}

#[test]
fn pagination_accepts_valid_parameters() {
    assert!(validate_pagination(1, 10).is_ok());
    assert!(validate_pagination(5, 100).is_ok());
    assert!(validate_pagination(1, 1).is_ok());
}

#[test]
fn pagination_rejects_page_below_one() {
    assert_eq!(
        message(validate_pagination(0, 10)),
        "Page must be greater than or equal to 1"
    );
}

#[test]
fn pagination_rejects_limit_out_of_range() {
    assert_eq!(
        message(validate_pagination(1, 0)),
        "Limit must be between 1 and 100"
    );
    assert_eq!(
        message(validate_pagination(1, 101)),
        "Limit must be between 1 and 100"
    );
    assert_eq!(
        message(validate_pagination(1, 500)),
        "Limit must be between 1 and 100"
    );
}

#[test]
fn identifier_accepts_v4_uuids_any_case() {
    assert!(validate_identifier("123e4567-e89b-42d3-a456-556642440000").is_ok());
    assert!(validate_identifier("f81d4fae-7dec-4123-83d3-69b2d13bef28").is_ok());
    assert!(validate_identifier("F81D4FAE-7DEC-4123-83D3-69B2D13BEF28").is_ok());
}

#[test]
fn identifier_rejects_malformed_input() {
    for id in [
        "invalid-uuid",
        "",
        // wrong version nibble (v1)
        "123e4567-e89b-12d3-a456-556642440000",
        // missing hyphens
        "123e4567e89b42d3a456556642440000",
        // wrong variant nibble
        "123e4567-e89b-42d3-c456-556642440000",
    ] {
        assert_eq!(message(validate_identifier(id)), "Invalid trip plan ID format");
    }
}

#[test]
fn command_with_valid_fields_passes() {
    assert!(validate_trip_plan_command(&valid_command()).is_ok());
}

#[test]
fn same_day_trip_is_valid() {
    let mut command = valid_command();
    command.date_to = command.date_from;
    assert!(validate_trip_plan_command(&command).is_ok());
}

#[test]
fn end_date_before_start_date_fails() {
    let mut command = valid_command();
    command.date_to = command.date_from - Days::new(1);
    assert_eq!(
        message(validate_trip_plan_command(&command)),
        "End date must be after start date"
    );
}

#[test]
fn duration_at_maximum_is_valid() {
    let mut command = valid_command();
    command.date_to = command.date_from + Days::new(MAX_TRIP_DURATION_DAYS as u64 - 1);
    assert!(validate_trip_plan_command(&command).is_ok());
}

#[test]
fn duration_one_day_over_maximum_fails() {
    let mut command = valid_command();
    command.date_to = command.date_from + Days::new(MAX_TRIP_DURATION_DAYS as u64);
    assert_eq!(
        message(validate_trip_plan_command(&command)),
        format!("Trip duration cannot exceed {} days", MAX_TRIP_DURATION_DAYS)
    );
}

#[test]
fn date_order_is_checked_before_duration() {
    let mut command = valid_command();
    // reversed AND over-long: the order error must win
    command.date_from = command.date_to + Days::new(MAX_TRIP_DURATION_DAYS as u64 + 5);
    assert_eq!(
        message(validate_trip_plan_command(&command)),
        "End date must be after start date"
    );
}

#[test]
fn location_length_boundary() {
    let mut command = valid_command();
    command.location = "A".repeat(100);
    assert!(validate_trip_plan_command(&command).is_ok());

    command.location = "A".repeat(101);
    assert_eq!(
        message(validate_trip_plan_command(&command)),
        "Location must not exceed 100 characters"
    );
}

#[test]
fn number_of_people_boundaries() {
    for people in [1, 100] {
        let mut command = valid_command();
        command.number_of_people = people;
        assert!(validate_trip_plan_command(&command).is_ok());
    }

    for people in [0, -1, 101] {
        let mut command = valid_command();
        command.number_of_people = people;
        assert_eq!(
            message(validate_trip_plan_command(&command)),
            "Number of people must be between 1 and 100"
        );
    }
}

#[test]
fn unknown_preferences_are_reported_together() {
    let mut command = valid_command();
    command.preferences_list = Some("culture;skydiving;spelunking".to_string());
    assert_eq!(
        message(validate_preference_names(&command, &catalog())),
        "Invalid preferences: skydiving, spelunking"
    );
}

#[test]
fn catalog_valid_preferences_pass() {
    let mut command = valid_command();
    command.preferences_list = Some("culture;food".to_string());
    assert!(validate_preference_names(&command, &catalog()).is_ok());
}

#[test]
fn empty_preferences_list_is_allowed() {
    let mut command = valid_command();
    command.preferences_list = None;
    assert!(validate_preference_names(&command, &catalog()).is_ok());
}

#[test]
fn validate_for_save_runs_both_checks() {
    let mut command = valid_command();
    command.number_of_people = 0;
    // arithmetic rules fire first
    assert_eq!(
        message(validate_for_save(&command, &catalog())),
        "Number of people must be between 1 and 100"
    );

    let mut command = valid_command();
    command.preferences_list = Some("skydiving".to_string());
    assert_eq!(
        message(validate_for_save(&command, &catalog())),
        "Invalid preferences: skydiving"
    );
}

#[test]
fn upcoming_paris_trip_validates_end_to_end() {
    let tomorrow = Utc::now().date_naive() + Days::new(1);
    let command = TripPlanCommand {
        date_from: tomorrow,
        date_to: tomorrow + Days::new(1),
        location: "Paris".to_string(),
        number_of_people: 2,
        preferences_list: Some("culture".to_string()),
        trip_plan_description: Some("My Trip to Paris".to_string()),
        ai_plan_accepted: false,
    };

    assert!(validate_for_save(&command, &catalog()).is_ok());
}

#[test]
fn failures_are_invalid_argument_errors() {
    let err = validate_pagination(0, 10).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidArgument(_)));
    assert!(!err.is_retryable());
}
