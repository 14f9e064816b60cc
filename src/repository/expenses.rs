//! Per-trip expense persistence

use uuid::Uuid;

use crate::error::AppResult;
use crate::models::expense::ExpenseItem;

use super::snapshot::SnapshotStore;

fn collection(trip_id: Uuid) -> String {
    format!("expenses_{}", trip_id.simple())
}

#[derive(Clone)]
pub struct ExpensesRepository {
    store: SnapshotStore,
}

impl ExpensesRepository {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Load a trip's expenses; never written yet means none recorded.
    pub async fn load(&self, trip_id: Uuid) -> AppResult<Vec<ExpenseItem>> {
        Ok(self.store.load(&collection(trip_id)).await?.unwrap_or_default())
    }

    pub async fn save(&self, trip_id: Uuid, expenses: &[ExpenseItem]) -> AppResult<()> {
        self.store.save(&collection(trip_id), &expenses).await
    }

    pub async fn remove(&self, trip_id: Uuid) -> AppResult<()> {
        self.store.remove(&collection(trip_id)).await
    }
}
