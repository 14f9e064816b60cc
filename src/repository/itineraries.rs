//! Per-trip day sequence persistence

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::day::Day;

use super::snapshot::SnapshotStore;

/// Single place that derives the storage key from the trip identity
fn collection(trip_id: Uuid) -> String {
    format!("itinerary_{}", trip_id.simple())
}

#[derive(Clone)]
pub struct ItinerariesRepository {
    store: SnapshotStore,
}

impl ItinerariesRepository {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Load a trip's day sequence; a missing snapshot means the trip
    /// itself is gone (every trip is created with its sequence).
    pub async fn load(&self, trip_id: Uuid) -> AppResult<Vec<Day>> {
        self.store
            .load(&collection(trip_id))
            .await?
            .ok_or_else(|| AppError::TripNotFound(trip_id.to_string()))
    }

    pub async fn save(&self, trip_id: Uuid, days: &[Day]) -> AppResult<()> {
        self.store.save(&collection(trip_id), &days).await
    }

    pub async fn remove(&self, trip_id: Uuid) -> AppResult<()> {
        self.store.remove(&collection(trip_id)).await
    }
}
