//! Packing checklist API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::checklist::{
        ChecklistCategory, ChecklistItem, CreateChecklistCategory, CreateChecklistItem,
        UpdateChecklistCategory,
    },
};

/// Get the trip's checklist (seeded with the default template on first
/// access)
#[utoipa::path(
    get,
    path = "/trips/{id}/checklist",
    tag = "checklist",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Checklist categories", body = Vec<ChecklistCategory>),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn get_checklist(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ChecklistCategory>>> {
    let checklist = state.services.checklist.get(id).await?;
    Ok(Json(checklist))
}

/// Create a checklist category
#[utoipa::path(
    post,
    path = "/trips/{id}/checklist/categories",
    tag = "checklist",
    params(("id" = Uuid, Path, description = "Trip ID")),
    request_body = CreateChecklistCategory,
    responses(
        (status = 201, description = "Category created", body = ChecklistCategory)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<CreateChecklistCategory>,
) -> AppResult<(StatusCode, Json<ChecklistCategory>)> {
    data.validate()?;
    let category = state.services.checklist.create_category(id, &data).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Rename or collapse a checklist category
#[utoipa::path(
    put,
    path = "/trips/{id}/checklist/categories/{category_id}",
    tag = "checklist",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateChecklistCategory,
    responses(
        (status = 200, description = "Category updated", body = ChecklistCategory),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path((id, category_id)): Path<(Uuid, Uuid)>,
    Json(data): Json<UpdateChecklistCategory>,
) -> AppResult<Json<ChecklistCategory>> {
    data.validate()?;
    let category = state
        .services
        .checklist
        .update_category(id, category_id, &data)
        .await?;
    Ok(Json(category))
}

/// Delete a checklist category and its items
#[utoipa::path(
    delete,
    path = "/trips/{id}/checklist/categories/{category_id}",
    tag = "checklist",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path((id, category_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state.services.checklist.delete_category(id, category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add an item to a category
#[utoipa::path(
    post,
    path = "/trips/{id}/checklist/categories/{category_id}/items",
    tag = "checklist",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    request_body = CreateChecklistItem,
    responses(
        (status = 201, description = "Item created", body = ChecklistItem),
        (status = 404, description = "Category not found")
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    Path((id, category_id)): Path<(Uuid, Uuid)>,
    Json(data): Json<CreateChecklistItem>,
) -> AppResult<(StatusCode, Json<ChecklistItem>)> {
    data.validate()?;
    let item = state
        .services
        .checklist
        .create_item(id, category_id, &data)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Toggle an item's checked state
#[utoipa::path(
    post,
    path = "/trips/{id}/checklist/items/{item_id}/toggle",
    tag = "checklist",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item toggled", body = ChecklistItem),
        (status = 404, description = "Item not found")
    )
)]
pub async fn toggle_item(
    State(state): State<crate::AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ChecklistItem>> {
    let item = state.services.checklist.toggle_item(id, item_id).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/trips/{id}/checklist/items/{item_id}",
    tag = "checklist",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<crate::AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state.services.checklist.delete_item(id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
