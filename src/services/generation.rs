//! Itinerary generation backed by the Gemini `generateContent` API

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{
    config::GenerationConfig,
    error::{AppError, AppResult},
    models::day::{Day, DayPayload},
    models::trip::Trip,
};

/// Model responses often wrap the JSON body in a markdown code fence
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").unwrap());

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationSettings,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationSettings {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Clone)]
pub struct GenerationService {
    client: Client,
    config: GenerationConfig,
}

impl GenerationService {
    pub fn new(config: GenerationConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("http client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Ask the model for a full replacement itinerary for the trip.
    pub async fn generate_trip(
        &self,
        trip: &Trip,
        day_count: usize,
        interests: &str,
        api_key: Option<&str>,
    ) -> AppResult<Vec<DayPayload>> {
        let prompt = whole_trip_prompt(trip, day_count, interests);
        let text = self.call_model(&prompt, api_key).await?;
        parse_day_payloads(&text)
    }

    /// Ask the model to rework a single day in place.
    pub async fn generate_day(
        &self,
        trip: &Trip,
        day: &Day,
        instructions: &str,
        api_key: Option<&str>,
    ) -> AppResult<Vec<DayPayload>> {
        let prompt = single_day_prompt(trip, day, instructions);
        let text = self.call_model(&prompt, api_key).await?;
        parse_day_payloads(&text)
    }

    async fn call_model(&self, prompt: &str, api_key: Option<&str>) -> AppResult<String> {
        let key = api_key
            .or(self.config.api_key.as_deref())
            .ok_or_else(|| AppError::Generation("no API key configured".to_string()))?;
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationSettings {
                response_mime_type: "application/json",
            },
        };

        tracing::debug!(model = %self.config.model, "calling generation API");
        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "generation API returned an error");
            return Err(AppError::Generation(format!(
                "upstream returned {status}: {detail}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("unreadable response: {e}")))?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AppError::Generation("response carried no candidates".to_string()))
    }
}

/// Strip an optional markdown fence and parse the day records. A single
/// JSON object is accepted and treated as a one-element list.
fn parse_day_payloads(text: &str) -> AppResult<Vec<DayPayload>> {
    let body = FENCE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text)
        .trim();

    if body.starts_with('{') {
        let payload: DayPayload = serde_json::from_str(body)
            .map_err(|e| AppError::Generation(format!("malformed day record: {e}")))?;
        return Ok(vec![payload]);
    }
    serde_json::from_str(body)
        .map_err(|e| AppError::Generation(format!("malformed day records: {e}")))
}

fn whole_trip_prompt(trip: &Trip, day_count: usize, interests: &str) -> String {
    format!(
        "You are a travel planner. Create a {day_count}-day itinerary for a trip named \
         {name:?} starting on {start} in {season}. Traveler interests: {interests}.\n\
         Respond with a JSON array of exactly {day_count} day objects. Each object has the \
         fields: label (\"Day N\"), title, description, location, tips, events. Each event \
         has: time (24h \"HH:MM\"), title, description, category (one of sightseeing, food, \
         transport, shopping, activity, flight, hotel), transport, mapQuery. \
         Respond with JSON only, no surrounding text.",
        name = trip.name,
        start = trip.start_date,
        season = trip.season,
    )
}

fn single_day_prompt(trip: &Trip, day: &Day, instructions: &str) -> String {
    let current = serde_json::to_string(day).unwrap_or_default();
    format!(
        "You are a travel planner reworking one day of a trip named {name:?} ({season} \
         season). Current day record: {current}\nInstructions: {instructions}.\n\
         Respond with a single JSON day object with the fields: title, description, \
         location, tips, events (each event: time \"HH:MM\", title, description, category, \
         transport, mapQuery). Respond with JSON only, no surrounding text.",
        name = trip.name,
        season = trip.season,
    )
}
