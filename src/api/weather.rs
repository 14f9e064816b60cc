//! Weather lookup endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, services::weather::WeatherReport};

#[derive(Debug, Deserialize, IntoParams)]
pub struct WeatherQuery {
    /// Free-text location, e.g. "Kyoto"
    pub location: String,
}

/// Current conditions and daily outlook for a location
#[utoipa::path(
    get,
    path = "/weather",
    tag = "lookups",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Weather report", body = WeatherReport),
        (status = 502, description = "Weather collaborator failed")
    )
)]
pub async fn lookup_weather(
    State(state): State<crate::AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherReport>> {
    let report = state.services.weather.lookup(&query.location).await?;
    Ok(Json(report))
}
