pub mod chat;
pub mod command;
pub mod itinerary;

pub use chat::{ChatMessage, Role};
pub use command::{Preference, TripPlanCommand};
pub use itinerary::TripPlanProposal;
