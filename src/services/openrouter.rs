use std::time::Duration;

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::{
    error::{PlannerError, Result},
    schemas::{SchemaHandle, Validator},
    types::{ChatMessage, TripPlanCommand, TripPlanProposal},
};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Client for the OpenRouter chat-completion API.
///
/// Holds the injected transport and configuration plus one piece of mutable
/// state, the default model used by calls that pass no explicit model. No
/// retries are built in: every failure is classified and surfaced once, and
/// the caller decides whether to try again.
#[derive(Clone, Debug)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    default_model: String,
    timeout: Duration,
    validator: Validator,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            validator: Validator::default(),
        }
    }

    /// Build a client from `OPENROUTER_API_KEY` and optional
    /// `OPENROUTER_BASE_URL` environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY").map_err(|_| {
            PlannerError::Config(
                "OPENROUTER_API_KEY environment variable must be set before creating a client"
                    .to_string(),
            )
        })?;

        let mut client = Self::new(api_key);
        if let Ok(base_url) = std::env::var("OPENROUTER_BASE_URL") {
            client.base_url = base_url;
        }
        Ok(client)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Inject a pre-configured transport (connection pools, proxies, TLS).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Replace the default model used by subsequent calls that pass no
    /// explicit model. Advisory configuration, observable only in later calls.
    pub fn set_default_model(&mut self, model: impl Into<String>) {
        self.default_model = model.into();
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Generate a free-text itinerary from a single user-role prompt.
    ///
    /// Returns the assistant message content verbatim.
    pub async fn generate_itinerary(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
        location: &str,
        number_of_people: i32,
        preferences: &str,
    ) -> Result<String> {
        let prompt = trip_prompt(date_from, date_to, location, number_of_people, preferences);
        let body = json!({
            "model": self.default_model,
            "messages": [ChatMessage::user(prompt)],
        });

        let response = self.post_chat(&body).await?;
        extract_content(&response).map(str::to_string)
    }

    /// Generate a structured `{ itinerary, summary }` draft for a command.
    ///
    /// Parse and schema failures both surface as [`PlannerError::ResponseFormat`]:
    /// the response is unusable until the prompt or schema is fixed.
    pub async fn generate_structured_itinerary(
        &self,
        command: &TripPlanCommand,
    ) -> Result<TripPlanProposal> {
        let schema = TripPlanProposal::schema();
        let system_msg = "You are an experienced travel planner. Respond with a JSON object \
                          holding a day-by-day `itinerary` array of strings and a short `summary` \
                          of the whole trip.";
        let user_msg = trip_prompt(
            command.date_from,
            command.date_to,
            &command.location,
            command.number_of_people,
            &command.preference_names().join(", "),
        );

        self.generate_chat_response(system_msg, &user_msg, &schema, None, None)
            .await
            .map_err(|err| match err {
                PlannerError::Validation(message) => PlannerError::ResponseFormat(message),
                other => other,
            })
    }

    /// General-purpose structured chat call.
    ///
    /// Sends a system+user message pair with a JSON-schema `response_format`
    /// hint, then validates the assistant content against `schema` and
    /// deserializes it into `T`. Shape mismatches surface as
    /// [`PlannerError::Validation`].
    pub async fn generate_chat_response<T: DeserializeOwned>(
        &self,
        system_msg: &str,
        user_msg: &str,
        schema: &SchemaHandle,
        model: Option<&str>,
        extra_params: Option<Map<String, Value>>,
    ) -> Result<T> {
        let mut body = json!({
            "model": model.unwrap_or(&self.default_model),
            "messages": [ChatMessage::system(system_msg), ChatMessage::user(user_msg)],
            "response_format": schema.response_format(),
        });

        if let Some(params) = extra_params {
            if let Some(object) = body.as_object_mut() {
                object.extend(params);
            }
        }

        let response = self.post_chat(&body).await?;
        let content = extract_content(&response)?;

        let payload: Value = serde_json::from_str(content).map_err(|err| {
            PlannerError::ResponseFormat(format!(
                "assistant content is not valid JSON: {}",
                err
            ))
        })?;

        self.validator.validate(schema, payload)
    }

    /// List model identifiers supported by the provider.
    ///
    /// A response without the `models` field yields an empty list; every
    /// other failure propagates.
    pub async fn list_supported_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/models", self.base_url.trim_end_matches('/'));
        debug!(target: "tripplanner::client", %url, "fetching model catalog");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;

        let body = self.decode_response(response).await?;

        let models = body
            .get("models")
            .and_then(|value| value.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("id"))
                    .filter_map(|id| id.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(models)
    }

    async fn post_chat(&self, body: &Value) -> Result<Value> {
        let url = build_chat_url(&self.base_url);
        debug!(
            target: "tripplanner::client",
            %url,
            model = body.get("model").and_then(serde_json::Value::as_str).unwrap_or(""),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.decode_response(response).await
    }

    async fn decode_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let headers = response.headers().clone();
        let response_text = response.text().await.map_err(transport_error)?;

        debug!(target: "tripplanner::client", status = %status, "received response");

        if !status.is_success() {
            return Err(classify_failure(status, &headers, &response_text));
        }

        serde_json::from_str(&response_text).map_err(|err| {
            PlannerError::remote_with_source("Failed to parse response body as JSON", err)
        })
    }
}

/// Classify a non-success HTTP response into the error taxonomy.
fn classify_failure(
    status: StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
) -> PlannerError {
    if status == StatusCode::UNAUTHORIZED {
        return PlannerError::Authentication("Invalid API key".to_string());
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = headers
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

        return PlannerError::RateLimit { retry_after };
    }

    if status.is_server_error() {
        return PlannerError::remote("OpenRouter service is temporarily unavailable");
    }

    let api_message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    PlannerError::remote(format!("HTTP {} error: {}", status, api_message))
}

fn transport_error(err: reqwest::Error) -> PlannerError {
    let message = format!("HTTP request failed: {}", err);
    PlannerError::remote_with_source(message, err)
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

fn extract_content(response: &Value) -> Result<&str> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| {
            PlannerError::ResponseFormat(
                "response is missing choices[0].message.content".to_string(),
            )
        })
}

fn trip_prompt(
    date_from: NaiveDate,
    date_to: NaiveDate,
    location: &str,
    number_of_people: i32,
    preferences: &str,
) -> String {
    format!(
        "Please create a travel plan for {} from {} to {} for {} people.\n\
         The plan should take into account the following tourist preferences: {}. \
         Give the plan itself without unnecessary text.",
        location, date_from, date_to, number_of_people, preferences
    )
}
