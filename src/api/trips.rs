//! Trip API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::day::Day,
    models::trip::{CreateTrip, DuplicateTrip, Trip, UpdateTrip},
};

/// List all trips, newest first
#[utoipa::path(
    get,
    path = "/trips",
    tag = "trips",
    responses(
        (status = 200, description = "Trips list", body = Vec<Trip>)
    )
)]
pub async fn list_trips(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Trip>>> {
    let trips = state.services.trips.list().await?;
    Ok(Json(trips))
}

/// Get a trip
#[utoipa::path(
    get,
    path = "/trips/{id}",
    tag = "trips",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Trip", body = Trip),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn get_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Trip>> {
    let trip = state.services.trips.get(id).await?;
    Ok(Json(trip))
}

/// Create a trip with its placeholder day sequence
#[utoipa::path(
    post,
    path = "/trips",
    tag = "trips",
    request_body = CreateTrip,
    responses(
        (status = 201, description = "Trip created", body = Trip)
    )
)]
pub async fn create_trip(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTrip>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    data.validate()?;
    let trip = state.services.trips.create(&data).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

/// Update trip settings
#[utoipa::path(
    put,
    path = "/trips/{id}",
    tag = "trips",
    params(("id" = Uuid, Path, description = "Trip ID")),
    request_body = UpdateTrip,
    responses(
        (status = 200, description = "Trip updated", body = Trip),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn update_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateTrip>,
) -> AppResult<Json<Trip>> {
    data.validate()?;
    let trip = state.services.trips.update(id, &data).await?;
    Ok(Json(trip))
}

/// Delete a trip and everything stored under it
#[utoipa::path(
    delete,
    path = "/trips/{id}",
    tag = "trips",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 204, description = "Trip deleted"),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn delete_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.trips.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Duplicate a trip as a template for a new one
#[utoipa::path(
    post,
    path = "/trips/{id}/duplicate",
    tag = "trips",
    params(("id" = Uuid, Path, description = "Template trip ID")),
    request_body = DuplicateTrip,
    responses(
        (status = 201, description = "Trip duplicated", body = Trip),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn duplicate_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<DuplicateTrip>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    data.validate()?;
    let trip = state.services.trips.duplicate(id, &data).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

/// Reset the day sequence to placeholders, keeping its length
#[utoipa::path(
    post,
    path = "/trips/{id}/reset",
    tag = "trips",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Day sequence reset", body = Vec<Day>),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn reset_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Day>>> {
    let days = state.services.trips.reset(id).await?;
    Ok(Json(days))
}
