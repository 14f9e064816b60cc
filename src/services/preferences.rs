//! Global client preferences

use crate::{
    error::AppResult,
    models::preferences::{Preferences, UpdatePreferences},
    repository::Repository,
};

#[derive(Clone)]
pub struct PreferencesService {
    repository: Repository,
}

impl PreferencesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get(&self) -> AppResult<Preferences> {
        self.repository.preferences.load().await
    }

    pub async fn update(&self, data: &UpdatePreferences) -> AppResult<Preferences> {
        let mut preferences = self.repository.preferences.load().await?;
        if let Some(dark_mode) = data.dark_mode {
            preferences.dark_mode = dark_mode;
        }
        self.repository.preferences.save(&preferences).await?;
        Ok(preferences)
    }
}
