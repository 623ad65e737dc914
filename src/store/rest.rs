//! REST-backed implementation of [`ExpertStore`].
//!
//! Speaks the platform's PostgREST-style dialect: column selection via the
//! `select` query parameter and set membership via `{column}=in.(v1,v2)`.
//! Credentials ride along as an `apikey` header plus bearer token.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::StoreError;

use super::{ExpertStore, EXPERT_COLLECTION, IDENTIFIER_COLUMN};

/// REST client for the expert collection.
///
/// Holds a shared [`reqwest::Client`]; constructed once per process and
/// cloned per request. Relies on the client's default timeout and connection
/// handling, with no retries of its own.
#[derive(Clone)]
pub struct RestExpertStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestExpertStore {
    /// Create a new store client.
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `base_url` - Platform base URL (e.g. `https://xyz.example.co`)
    /// * `api_key` - Service key sent with every request
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// URL of the expert collection endpoint.
    fn collection_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, EXPERT_COLLECTION)
    }
}

/// Build a PostgREST `in.(...)` filter value from an identifier set.
///
/// Each value is double-quoted so identifiers containing commas or
/// parentheses cannot break the filter grammar; embedded quotes and
/// backslashes are escaped.
fn in_filter(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("in.({})", quoted.join(","))
}

#[async_trait]
impl ExpertStore for RestExpertStore {
    async fn fetch_experts(
        &self,
        fields: &[String],
        sub_ids: &[String],
    ) -> Result<Vec<Value>, StoreError> {
        let response = self
            .client
            .get(self.collection_url())
            .query(&[
                ("select", fields.join(",")),
                (IDENTIFIER_COLUMN, in_filter(sub_ids)),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // PostgREST error bodies are JSON with a "message" field; fall
            // back to the raw body when they are not.
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(body);
            return Err(StoreError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let rows: Value = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        match rows {
            Value::Array(rows) => Ok(rows),
            other => Err(StoreError::Decode(format!(
                "expected a JSON array of rows, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Tests
// =============================================================================
