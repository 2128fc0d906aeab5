use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schemas::SchemaHandle;

/// Structured itinerary returned by the model for a trip-plan draft.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TripPlanProposal {
    /// Day-by-day itinerary entries in chronological order
    pub itinerary: Vec<String>,
    /// Short summary of the whole trip
    pub summary: String,
}

impl TripPlanProposal {
    /// JSON schema the model's structured response must conform to.
    pub fn schema() -> SchemaHandle {
        SchemaHandle::of::<TripPlanProposal>("TripPlanProposal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_both_fields() {
        let handle = TripPlanProposal::schema();
        let required = handle.schema_json()["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "itinerary"));
        assert!(required.iter().any(|v| v == "summary"));
    }
}
