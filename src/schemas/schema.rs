use schemars::{schema_for, JsonSchema};
use serde_json::Value;
use std::sync::Arc;

/// Named JSON schema handle for a structured response type.
///
/// Generated once from the target type's `schemars` derive and shared cheaply
/// between the request's `response_format` hint and response validation.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: String,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    /// Build a handle from any `JsonSchema` type.
    pub fn of<T: JsonSchema>(schema_name: impl Into<String>) -> Self {
        let root = schema_for!(T);
        let schema_json = serde_json::to_value(root)
            .unwrap_or_else(|err| panic!("failed to serialize schema: {}", err));

        Self {
            schema_name: schema_name.into(),
            schema_json: Arc::new(schema_json),
        }
    }

    /// Build a handle from an already-assembled schema document.
    pub fn from_value(schema_name: impl Into<String>, schema_json: Value) -> Self {
        Self {
            schema_name: schema_name.into(),
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }

    /// `response_format` fragment for a chat-completion request.
    pub fn response_format(&self) -> Value {
        serde_json::json!({
            "type": "json_schema",
            "json_schema": {
                "name": self.schema_name,
                "strict": true,
                "schema": self.schema_json.as_ref()
            }
        })
    }
}
