//! Itinerary generation endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::day::Day,
    services::itinerary::GenerationScope,
};

/// Generation request: whole trip by default, one day when `dayId` is set
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Traveler interests or rework instructions passed to the model
    #[validate(length(min = 1, max = 2000))]
    pub prompt: String,
    /// Restrict generation to this day, keeping its identity
    pub day_id: Option<Uuid>,
    /// Per-request API key overriding the configured one
    pub api_key: Option<String>,
}

/// Generate or rework itinerary content
#[utoipa::path(
    post,
    path = "/trips/{id}/generate",
    tag = "generation",
    params(("id" = Uuid, Path, description = "Trip ID")),
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Reconciled day sequence", body = Vec<Day>),
        (status = 404, description = "Trip or day not found"),
        (status = 502, description = "Generation collaborator failed")
    )
)]
pub async fn generate_itinerary(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<GenerateRequest>,
) -> AppResult<Json<Vec<Day>>> {
    data.validate()?;
    let trip = state.services.trips.get(id).await?;
    let api_key = data.api_key.as_deref();

    let (scope, payloads) = match data.day_id {
        Some(day_id) => {
            // The day must exist when the request is issued; a result
            // arriving after a deletion is discarded at apply time.
            let day = state.services.itinerary.get_day(id, day_id).await?;
            let payloads = state
                .services
                .generation
                .generate_day(&trip, &day, &data.prompt, api_key)
                .await?;
            (GenerationScope::SingleDay(day_id), payloads)
        }
        None => {
            let day_count = state.services.itinerary.list_days(id).await?.len();
            let payloads = state
                .services
                .generation
                .generate_trip(&trip, day_count, &data.prompt, api_key)
                .await?;
            (GenerationScope::WholeTrip, payloads)
        }
    };

    let days = state
        .services
        .itinerary
        .apply_generated(id, scope, payloads)
        .await?;
    Ok(Json(days))
}
