//! Trips service (setup wizard, duplication, reset, deletion)

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    itinerary::reconciler,
    models::trip::{CreateTrip, DuplicateTrip, Trip, UpdateTrip},
    repository::Repository,
};

use super::checklist::default_checklist;

#[derive(Clone)]
pub struct TripsService {
    repository: Repository,
}

impl TripsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Trip>> {
        self.repository.trips.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Trip> {
        self.repository.trips.get(id).await
    }

    /// Create a trip with a placeholder day sequence and a seeded
    /// packing checklist.
    pub async fn create(&self, data: &CreateTrip) -> AppResult<Trip> {
        let trip = Trip {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            start_date: data.start_date,
            season: data.season,
            crea_date: Some(Utc::now()),
            modif_date: None,
        };
        let days = reconciler::placeholder_sequence(data.start_date, data.duration_days, data.season);

        self.repository.trips.insert(&trip).await?;
        self.repository.itineraries.save(trip.id, &days).await?;
        self.repository
            .checklists
            .save(trip.id, &default_checklist())
            .await?;
        self.repository.expenses.save(trip.id, &[]).await?;

        tracing::info!(trip_id = %trip.id, days = days.len(), "trip created");
        Ok(trip)
    }

    /// Create a new trip from an existing one used as template.
    ///
    /// Days are copied with fresh identities and reconciled against the
    /// new start date; the checklist is copied unchecked; expenses are
    /// not carried over.
    pub async fn duplicate(&self, template_id: Uuid, data: &DuplicateTrip) -> AppResult<Trip> {
        let template = self.repository.trips.get(template_id).await?;
        let mut days = self.repository.itineraries.load(template_id).await?;
        for day in days.iter_mut() {
            day.id = Uuid::new_v4();
        }
        reconciler::recompute(&mut days, data.start_date);

        let mut checklist = self
            .repository
            .checklists
            .load(template_id)
            .await?
            .unwrap_or_else(default_checklist);
        for category in checklist.iter_mut() {
            category.id = Uuid::new_v4();
            for item in category.items.iter_mut() {
                item.id = Uuid::new_v4();
                item.checked = false;
            }
        }

        let trip = Trip {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            start_date: data.start_date,
            season: data.season.unwrap_or(template.season),
            crea_date: Some(Utc::now()),
            modif_date: None,
        };

        self.repository.trips.insert(&trip).await?;
        self.repository.itineraries.save(trip.id, &days).await?;
        self.repository.checklists.save(trip.id, &checklist).await?;
        self.repository.expenses.save(trip.id, &[]).await?;

        tracing::info!(trip_id = %trip.id, template_id = %template_id, "trip duplicated");
        Ok(trip)
    }

    /// Update trip settings; a start-date change recomputes every day's
    /// derived fields.
    pub async fn update(&self, id: Uuid, data: &UpdateTrip) -> AppResult<Trip> {
        let mut trip = self.repository.trips.get(id).await?;
        let start_changed = data
            .start_date
            .map(|d| d != trip.start_date)
            .unwrap_or(false);

        if let Some(name) = &data.name {
            trip.name = name.clone();
        }
        if let Some(start_date) = data.start_date {
            trip.start_date = start_date;
        }
        if let Some(season) = data.season {
            trip.season = season;
        }
        let trip = self.repository.trips.update(&trip).await?;

        if start_changed {
            let mut days = self.repository.itineraries.load(id).await?;
            reconciler::recompute(&mut days, trip.start_date);
            self.repository.itineraries.save(id, &days).await?;
        }
        Ok(trip)
    }

    /// Replace the day sequence with placeholders, keeping its length.
    pub async fn reset(&self, id: Uuid) -> AppResult<Vec<crate::models::Day>> {
        let trip = self.repository.trips.get(id).await?;
        let current = self.repository.itineraries.load(id).await?;
        let days =
            reconciler::placeholder_sequence(trip.start_date, current.len() as u32, trip.season);
        self.repository.itineraries.save(id, &days).await?;
        Ok(days)
    }

    /// Delete a trip and every collection namespaced under it.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.trips.delete(id).await?;
        self.repository.itineraries.remove(id).await?;
        self.repository.expenses.remove(id).await?;
        self.repository.checklists.remove(id).await?;
        tracing::info!(trip_id = %id, "trip deleted");
        Ok(())
    }
}
