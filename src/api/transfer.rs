//! Trip export / import endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::transfer::{ShareCode, TripExport},
};

/// Export a trip as an interchange document
#[utoipa::path(
    get,
    path = "/trips/{id}/export",
    tag = "transfer",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Trip export document", body = TripExport),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn export_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TripExport>> {
    let document = state.services.transfer.export(id).await?;
    Ok(Json(document))
}

/// Export a trip as a compressed share code
#[utoipa::path(
    get,
    path = "/trips/{id}/export/code",
    tag = "transfer",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Share code", body = ShareCode),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn export_code(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ShareCode>> {
    let code = state.services.transfer.export_code(id).await?;
    Ok(Json(ShareCode { code }))
}

/// Import an interchange document into a trip, replacing its content
#[utoipa::path(
    post,
    path = "/trips/{id}/import",
    tag = "transfer",
    params(("id" = Uuid, Path, description = "Trip ID")),
    request_body = TripExport,
    responses(
        (status = 204, description = "Trip imported"),
        (status = 400, description = "Malformed document"),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn import_trip(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(document): Json<serde_json::Value>,
) -> AppResult<axum::http::StatusCode> {
    state.services.transfer.import(id, document).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// Import a trip from a share code
#[utoipa::path(
    post,
    path = "/trips/{id}/import/code",
    tag = "transfer",
    params(("id" = Uuid, Path, description = "Trip ID")),
    request_body = ShareCode,
    responses(
        (status = 204, description = "Trip imported"),
        (status = 400, description = "Malformed share code"),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn import_code(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<ShareCode>,
) -> AppResult<axum::http::StatusCode> {
    state.services.transfer.import_code(id, &data.code).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
