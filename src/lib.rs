//! trip-planner-rs: trip-plan domain validation and AI itinerary generation
//!
//! This library provides the core of a trip-planning application: pure
//! domain-rule checks for trip-plan commands, and a client for the OpenRouter
//! chat-completion API that turns a trip draft into an itinerary and
//! classifies remote failures into a small, matchable taxonomy.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{validation, OpenRouterClient, TripPlanCommand};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let command = TripPlanCommand {
//!         date_from: "2026-09-01".parse()?,
//!         date_to: "2026-09-05".parse()?,
//!         location: "Paris".to_string(),
//!         number_of_people: 2,
//!         preferences_list: Some("culture;food".to_string()),
//!         trip_plan_description: None,
//!         ai_plan_accepted: false,
//!     };
//!     validation::validate_trip_plan_command(&command)?;
//!
//!     let client = OpenRouterClient::from_env()?;
//!     let proposal = client.generate_structured_itinerary(&command).await?;
//!     println!("{}", proposal.summary);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod schemas;
pub mod services;
pub mod types;
pub mod validation;

pub use error::{PlannerError, Result};
pub use schemas::{SchemaHandle, Validator};
pub use services::OpenRouterClient;
pub use types::{ChatMessage, Preference, Role, TripPlanCommand, TripPlanProposal};
pub use validation::{
    validate_for_save, validate_identifier, validate_pagination, validate_preference_names,
    validate_trip_plan_command, MAX_TRIP_DURATION_DAYS,
};

#[cfg(feature = "cli")]
pub mod cli;
