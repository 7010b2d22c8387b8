//! Remote QA service client: one POST per question, no retry, no request
//! timeout (an outstanding call that never completes simply never reports).

use crate::error::{HarnessError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Parsed reply from the QA service for a single question.
#[derive(Debug, Clone)]
pub struct SystemResponse {
    /// SPARQL query the service chose for the question.
    pub sparql: String,
    /// First element of the service's answer array, kept as raw JSON.
    pub answer: Value,
}

/// HTTP client for the QA service endpoint.
pub struct QaClient {
    client: Client,
    endpoint: String,
    language: String,
}

impl QaClient {
    /// Build a client for the given endpoint. Only connection establishment
    /// is bounded; there is deliberately no overall request timeout.
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            language: language.into(),
        })
    }

    /// Issue exactly one POST carrying the question as URL query parameters
    /// (`?query=...&lang=...`), no request body, and extract the first
    /// question entry from the JSON reply.
    pub async fn ask(&self, question: &str) -> Result<SystemResponse> {
        log::debug!("POST {} query={:?}", self.endpoint, question);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("query", question), ("lang", self.language.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_response_body(&body)
    }
}

/// Extract `questions[0].query.sparql` and `questions[0].answers[0]` from a
/// response body. Any missing piece is a malformed response, surfaced as an
/// error rather than an empty answer.
pub fn parse_response_body(body: &str) -> Result<SystemResponse> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| HarnessError::MalformedResponse(format!("body is not JSON: {}", e)))?;

    let question = value
        .get("questions")
        .and_then(Value::as_array)
        .and_then(|q| q.first())
        .ok_or_else(|| missing("questions[0]"))?;

    let sparql = question
        .get("query")
        .and_then(|q| q.get("sparql"))
        .and_then(Value::as_str)
        .ok_or_else(|| missing("questions[0].query.sparql"))?
        .to_string();

    let answer = question
        .get("answers")
        .and_then(Value::as_array)
        .and_then(|a| a.first())
        .cloned()
        .ok_or_else(|| missing("questions[0].answers[0]"))?;

    Ok(SystemResponse { sparql, answer })
}

fn missing(path: &str) -> HarnessError {
    HarnessError::MalformedResponse(format!("missing {}", path))
}
