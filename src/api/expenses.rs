//! Expense API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::expense::{CreateExpense, ExpenseItem, ExpenseSummary},
};

/// List a trip's expenses, newest first
#[utoipa::path(
    get,
    path = "/trips/{id}/expenses",
    tag = "expenses",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Expenses list", body = Vec<ExpenseItem>),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn list_expenses(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<ExpenseItem>>> {
    let expenses = state.services.expenses.list(id).await?;
    Ok(Json(expenses))
}

/// Record an expense
#[utoipa::path(
    post,
    path = "/trips/{id}/expenses",
    tag = "expenses",
    params(("id" = Uuid, Path, description = "Trip ID")),
    request_body = CreateExpense,
    responses(
        (status = 201, description = "Expense recorded", body = ExpenseItem),
        (status = 404, description = "Trip not found")
    )
)]
pub async fn create_expense(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<ExpenseItem>)> {
    data.validate()?;
    let expense = state.services.expenses.create(id, &data).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// Total and per-category subtotals
#[utoipa::path(
    get,
    path = "/trips/{id}/expenses/summary",
    tag = "expenses",
    params(("id" = Uuid, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Expense summary", body = ExpenseSummary)
    )
)]
pub async fn expense_summary(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ExpenseSummary>> {
    let summary = state.services.expenses.summary(id).await?;
    Ok(Json(summary))
}

/// Delete an expense
#[utoipa::path(
    delete,
    path = "/trips/{id}/expenses/{expense_id}",
    tag = "expenses",
    params(
        ("id" = Uuid, Path, description = "Trip ID"),
        ("expense_id" = Uuid, Path, description = "Expense ID")
    ),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 404, description = "Expense not found")
    )
)]
pub async fn delete_expense(
    State(state): State<crate::AppState>,
    Path((id, expense_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state.services.expenses.delete(id, expense_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
