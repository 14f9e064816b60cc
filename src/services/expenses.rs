//! Expenses service

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::expense::{CategoryTotal, CreateExpense, ExpenseItem, ExpenseSummary},
    models::enums::ExpenseCategory,
    repository::Repository,
};

#[derive(Clone)]
pub struct ExpensesService {
    repository: Repository,
}

impl ExpensesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List expenses, newest first
    pub async fn list(&self, trip_id: Uuid) -> AppResult<Vec<ExpenseItem>> {
        self.repository.trips.get(trip_id).await?;
        let mut expenses = self.repository.expenses.load(trip_id).await?;
        expenses.sort_by(|a, b| b.crea_date.cmp(&a.crea_date));
        Ok(expenses)
    }

    pub async fn create(&self, trip_id: Uuid, data: &CreateExpense) -> AppResult<ExpenseItem> {
        self.repository.trips.get(trip_id).await?;
        if data.amount < Decimal::ZERO {
            return Err(AppError::Validation("amount cannot be negative".to_string()));
        }
        let item = ExpenseItem {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            amount: data.amount,
            category: data.category,
            date: data.date.unwrap_or_else(|| Utc::now().date_naive()),
            crea_date: Some(Utc::now()),
        };
        let mut expenses = self.repository.expenses.load(trip_id).await?;
        expenses.push(item.clone());
        self.repository.expenses.save(trip_id, &expenses).await?;
        Ok(item)
    }

    pub async fn delete(&self, trip_id: Uuid, expense_id: Uuid) -> AppResult<()> {
        let mut expenses = self.repository.expenses.load(trip_id).await?;
        let before = expenses.len();
        expenses.retain(|e| e.id != expense_id);
        if expenses.len() == before {
            return Err(AppError::NotFound(format!("expense {}", expense_id)));
        }
        self.repository.expenses.save(trip_id, &expenses).await
    }

    /// Total plus per-category subtotals (categories with no entries
    /// are omitted).
    pub async fn summary(&self, trip_id: Uuid) -> AppResult<ExpenseSummary> {
        let expenses = self.repository.expenses.load(trip_id).await?;
        let total = expenses.iter().map(|e| e.amount).sum();
        let by_category = ExpenseCategory::ALL
            .iter()
            .filter_map(|&category| {
                let entries: Vec<&ExpenseItem> =
                    expenses.iter().filter(|e| e.category == category).collect();
                if entries.is_empty() {
                    return None;
                }
                Some(CategoryTotal {
                    category,
                    total: entries.iter().map(|e| e.amount).sum(),
                    count: entries.len(),
                })
            })
            .collect();
        Ok(ExpenseSummary { total, by_category })
    }
}
