//! Trip list persistence

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::trip::Trip;

use super::snapshot::SnapshotStore;

const COLLECTION: &str = "trips";

#[derive(Clone)]
pub struct TripsRepository {
    store: SnapshotStore,
}

impl TripsRepository {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// List all trips, newest first
    pub async fn list(&self) -> AppResult<Vec<Trip>> {
        let mut trips: Vec<Trip> = self.store.load(COLLECTION).await?.unwrap_or_default();
        trips.sort_by(|a, b| b.crea_date.cmp(&a.crea_date));
        Ok(trips)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Trip> {
        self.list()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::TripNotFound(id.to_string()))
    }

    pub async fn insert(&self, trip: &Trip) -> AppResult<()> {
        let mut trips = self.list().await?;
        if trips.iter().any(|t| t.id == trip.id) {
            return Err(AppError::Conflict(format!("trip {} already exists", trip.id)));
        }
        trips.push(trip.clone());
        self.store.save(COLLECTION, &trips).await
    }

    /// Replace a trip's settings, bumping `modif_date`
    pub async fn update(&self, trip: &Trip) -> AppResult<Trip> {
        let mut trips = self.list().await?;
        let slot = trips
            .iter_mut()
            .find(|t| t.id == trip.id)
            .ok_or_else(|| AppError::TripNotFound(trip.id.to_string()))?;
        let mut updated = trip.clone();
        updated.modif_date = Some(Utc::now());
        *slot = updated.clone();
        self.store.save(COLLECTION, &trips).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut trips = self.list().await?;
        let before = trips.len();
        trips.retain(|t| t.id != id);
        if trips.len() == before {
            return Err(AppError::TripNotFound(id.to_string()));
        }
        self.store.save(COLLECTION, &trips).await
    }
}
