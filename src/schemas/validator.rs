use jsonschema::{Draft, JSONSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{PlannerError, Result},
    schemas::SchemaHandle,
};

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validation strategies for structured model responses
#[derive(Debug, Clone, Copy, Default)]
pub enum Validator {
    /// Fast validation using serde only
    SerdeFirst,
    /// Schema check against the declared JSON Schema, then serde
    #[default]
    Strict,
}

impl Validator {
    /// Validate a decoded payload against `schema` and deserialize it into `T`.
    pub fn validate<T: DeserializeOwned>(&self, schema: &SchemaHandle, payload: Value) -> Result<T> {
        if let Validator::Strict = self {
            validate_structured_payload(schema, &payload)?;
        }
        serde_first_validate(schema, payload)
    }
}

/// Deserialize with path-aware error reporting
fn serde_first_validate<T: DeserializeOwned>(schema: &SchemaHandle, payload: Value) -> Result<T> {
    serde_path_to_error::deserialize(payload).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::Validation(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            location,
            err
        ))
    })
}

/// Validate a structured payload against a schema
pub fn validate_structured_payload(schema: &SchemaHandle, payload: &Value) -> Result<()> {
    let compiled = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            PlannerError::Validation(format!(
                "Failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })?;

    if let Err(errors) = compiled.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "structured payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::Validation(format!(
            "Structured payload does not match `{}` schema: {}",
            schema.schema_name(),
            detail_str
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TripPlanProposal;
    use serde_json::json;

    #[test]
    fn strict_accepts_conforming_payload() {
        let schema = TripPlanProposal::schema();
        let payload = json!({
            "itinerary": ["Day 1: Louvre", "Day 2: Montmartre"],
            "summary": "Two days of art and views"
        });

        let proposal: TripPlanProposal = Validator::Strict.validate(&schema, payload).unwrap();
        assert_eq!(proposal.itinerary.len(), 2);
    }

    #[test]
    fn strict_rejects_missing_summary() {
        let schema = TripPlanProposal::schema();
        let payload = json!({ "itinerary": ["Day 1: Louvre"] });

        let result: Result<TripPlanProposal> = Validator::Strict.validate(&schema, payload);
        let err = result.unwrap_err();
        assert!(matches!(err, PlannerError::Validation(_)));
        assert!(err.to_string().contains("TripPlanProposal"));
    }

    #[test]
    fn serde_first_reports_error_path() {
        let schema = TripPlanProposal::schema();
        let payload = json!({ "itinerary": "not-an-array", "summary": "x" });

        let result: Result<TripPlanProposal> = Validator::SerdeFirst.validate(&schema, payload);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("itinerary"));
    }
}
