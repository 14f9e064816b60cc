//! Expense tracking models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::ExpenseCategory;

/// One expense entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    pub id: Uuid,
    pub title: String,
    /// Amount in yen
    pub amount: Decimal,
    pub category: ExpenseCategory,
    /// Day the expense was made
    pub date: NaiveDate,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create expense request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExpense {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    /// Defaults to today when omitted
    pub date: Option<NaiveDate>,
}

/// Per-category subtotal
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Decimal,
    pub count: usize,
}

/// Expense summary response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total: Decimal,
    pub by_category: Vec<CategoryTotal>,
}
