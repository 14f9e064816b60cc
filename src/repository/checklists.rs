//! Per-trip checklist persistence

use uuid::Uuid;

use crate::error::AppResult;
use crate::models::checklist::ChecklistCategory;

use super::snapshot::SnapshotStore;

fn collection(trip_id: Uuid) -> String {
    format!("checklist_{}", trip_id.simple())
}

#[derive(Clone)]
pub struct ChecklistsRepository {
    store: SnapshotStore,
}

impl ChecklistsRepository {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Load a trip's checklist; `None` means it was never seeded.
    pub async fn load(&self, trip_id: Uuid) -> AppResult<Option<Vec<ChecklistCategory>>> {
        self.store.load(&collection(trip_id)).await
    }

    pub async fn save(&self, trip_id: Uuid, checklist: &[ChecklistCategory]) -> AppResult<()> {
        self.store.save(&collection(trip_id), &checklist).await
    }

    pub async fn remove(&self, trip_id: Uuid) -> AppResult<()> {
        self.store.remove(&collection(trip_id)).await
    }
}
