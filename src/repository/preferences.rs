//! Global preferences persistence

use crate::error::AppResult;
use crate::models::preferences::Preferences;

use super::snapshot::SnapshotStore;

const COLLECTION: &str = "preferences";

#[derive(Clone)]
pub struct PreferencesRepository {
    store: SnapshotStore,
}

impl PreferencesRepository {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> AppResult<Preferences> {
        Ok(self.store.load(COLLECTION).await?.unwrap_or_default())
    }

    pub async fn save(&self, preferences: &Preferences) -> AppResult<()> {
        self.store.save(COLLECTION, preferences).await
    }
}
