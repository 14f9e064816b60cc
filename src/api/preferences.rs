//! Global preferences endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::preferences::{Preferences, UpdatePreferences},
};

/// Get global preferences
#[utoipa::path(
    get,
    path = "/preferences",
    tag = "preferences",
    responses(
        (status = 200, description = "Preferences", body = Preferences)
    )
)]
pub async fn get_preferences(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Preferences>> {
    let preferences = state.services.preferences.get().await?;
    Ok(Json(preferences))
}

/// Update global preferences
#[utoipa::path(
    put,
    path = "/preferences",
    tag = "preferences",
    request_body = UpdatePreferences,
    responses(
        (status = 200, description = "Preferences updated", body = Preferences)
    )
)]
pub async fn update_preferences(
    State(state): State<crate::AppState>,
    Json(data): Json<UpdatePreferences>,
) -> AppResult<Json<Preferences>> {
    let preferences = state.services.preferences.update(&data).await?;
    Ok(Json(preferences))
}
