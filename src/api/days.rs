//! Day sequence API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    itinerary::MergeKey,
    models::day::{
        ApplyPass, Day, RemovePassQuery, ReorderDays, UpdateDays, UpdateDaysQuery,
        WeatherSnapshot,
    },
};

/// Bulk update response: the reconciled sequence plus merge counters
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDaysResponse {
    pub days: Vec<Day>,
    /// Updates applied to an existing day
    pub matched: usize,
    /// Updates whose key matched nothing
    pub ignored: usize,
}

/// List the trip's day sequence
#[utoipa::path(
    get,
    path = "/trips/{id}/days",
    tag = "days",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Day sequence", body = Vec<Day>),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn list_days(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Day>>> {
    let days = state.services.itinerary.list_days(id).await?;
    Ok(Json(days))
}

/// Get one day
#[utoipa::path(
    get,
    path = "/trips/{id}/days/{day_id}",
    tag = "days",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("day_id" = Uuid, Path, description = "Day ID")
    ),
    responses(
        (status = 200, description = "Day", body = Day),
        (status = 404, description = "Trip or day not found")
    )
)]
pub async fn get_day(
    State(state): State<crate::AppState>,
    Path((id, day_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Day>> {
    let day = state.services.itinerary.get_day(id, day_id).await?;
    Ok(Json(day))
}

/// Append a placeholder day at the end of the sequence
#[utoipa::path(
    post,
    path = "/trips/{id}/days",
    tag = "days",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 201, description = "Day appended", body = Day),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn append_day(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<Day>)> {
    let day = state.services.itinerary.append_day(id).await?;
    Ok((StatusCode::CREATED, Json(day)))
}

/// Bulk-merge edited day records
#[utoipa::path(
    put,
    path = "/trips/{id}/days",
    tag = "days",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        UpdateDaysQuery
    ),
    request_body = UpdateDays,
    responses(
        (status = 200, description = "Days merged", body = UpdateDaysResponse),
        (status = 404, description = "Trip not found"),
        (status = 422, description = "Label merge left unmatched records")
    )
)]
pub async fn update_days(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<UpdateDaysQuery>,
    Json(data): Json<UpdateDays>,
) -> AppResult<Json<UpdateDaysResponse>> {
    let key = match query.key.as_deref() {
        None | Some("identity") => MergeKey::Identity,
        Some("label") => MergeKey::Label,
        Some(other) => {
            return Err(AppError::Validation(format!(
                "merge key must be \"identity\" or \"label\", got {other:?}"
            )))
        }
    };
    let (days, outcome) = state.services.itinerary.update_days(id, data.days, key).await?;
    Ok(Json(UpdateDaysResponse {
        days,
        matched: outcome.matched,
        ignored: outcome.ignored,
    }))
}

/// Relocate a day to another day's position
#[utoipa::path(
    post,
    path = "/trips/{id}/days/reorder",
    tag = "days",
    params(("id" = Uuid, Path, description = "Trip ID")),
    request_body = ReorderDays,
    responses(
        (status = 200, description = "Reordered day sequence", body = Vec<Day>),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn reorder_days(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<ReorderDays>,
) -> AppResult<Json<Vec<Day>>> {
    let days = state
        .services
        .itinerary
        .reorder_days(id, data.moved_id, data.target_id)
        .await?;
    Ok(Json(days))
}

/// Delete a day (the last remaining day is protected)
#[utoipa::path(
    delete,
    path = "/trips/{id}/days/{day_id}",
    tag = "days",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("day_id" = Uuid, Path, description = "Day ID")
    ),
    responses(
        (status = 200, description = "Remaining day sequence", body = Vec<Day>),
        (status = 404, description = "Trip or day not found"),
        (status = 422, description = "Last remaining day cannot be deleted")
    )
)]
pub async fn delete_day(
    State(state): State<crate::AppState>,
    Path((id, day_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Vec<Day>>> {
    let days = state.services.itinerary.delete_day(id, day_id).await?;
    Ok(Json(days))
}

/// Apply a transit pass across consecutive days
#[utoipa::path(
    put,
    path = "/trips/{id}/days/{day_id}/pass",
    tag = "days",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("day_id" = Uuid, Path, description = "First covered day ID")
    ),
    request_body = ApplyPass,
    responses(
        (status = 200, description = "Updated day sequence", body = Vec<Day>),
        (status = 404, description = "Trip or day not found")
    )
)]
pub async fn apply_pass(
    State(state): State<crate::AppState>,
    Path((id, day_id)): Path<(Uuid, Uuid)>,
    Json(data): Json<ApplyPass>,
) -> AppResult<Json<Vec<Day>>> {
    data.validate()?;
    let days = state.services.itinerary.apply_pass(id, day_id, &data).await?;
    Ok(Json(days))
}

/// Remove a transit pass from consecutive days
#[utoipa::path(
    delete,
    path = "/trips/{id}/days/{day_id}/pass",
    tag = "days",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("day_id" = Uuid, Path, description = "First covered day ID"),
        RemovePassQuery
    ),
    responses(
        (status = 200, description = "Updated day sequence", body = Vec<Day>),
        (status = 404, description = "Trip or day not found")
    )
)]
pub async fn remove_pass(
    State(state): State<crate::AppState>,
    Path((id, day_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<RemovePassQuery>,
) -> AppResult<Json<Vec<Day>>> {
    let days = state
        .services
        .itinerary
        .remove_pass(id, day_id, query.duration_days.unwrap_or(1))
        .await?;
    Ok(Json(days))
}

/// Pin a weather snapshot on a day
#[utoipa::path(
    put,
    path = "/trips/{id}/days/{day_id}/weather",
    tag = "days",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("day_id" = Uuid, Path, description = "Day ID")
    ),
    request_body = WeatherSnapshot,
    responses(
        (status = 200, description = "Updated day", body = Day),
        (status = 404, description = "Trip or day not found")
    )
)]
pub async fn set_weather(
    State(state): State<crate::AppState>,
    Path((id, day_id)): Path<(Uuid, Uuid)>,
    Json(snapshot): Json<WeatherSnapshot>,
) -> AppResult<Json<Day>> {
    let day = state.services.itinerary.set_weather(id, day_id, snapshot).await?;
    Ok(Json(day))
}
