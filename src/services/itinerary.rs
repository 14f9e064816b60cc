//! Itinerary service: structural day mutations and merges

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    itinerary::{bulk_merge, merge::MergeError, reconciler, replace_all, MergeKey, MergeOutcome},
    models::day::{ApplyPass, Day, DayPayload, WeatherSnapshot},
    repository::Repository,
};

// Zero-padded 24h times only, so lexicographic order is time-of-day order.
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

/// Scope of a generation request
#[derive(Debug, Clone, Copy)]
pub enum GenerationScope {
    WholeTrip,
    SingleDay(Uuid),
}

#[derive(Clone)]
pub struct ItineraryService {
    repository: Repository,
}

impl ItineraryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_days(&self, trip_id: Uuid) -> AppResult<Vec<Day>> {
        self.repository.itineraries.load(trip_id).await
    }

    pub async fn get_day(&self, trip_id: Uuid, day_id: Uuid) -> AppResult<Day> {
        self.repository
            .itineraries
            .load(trip_id)
            .await?
            .into_iter()
            .find(|d| d.id == day_id)
            .ok_or_else(|| AppError::DayNotFound(day_id.to_string()))
    }

    /// Append a placeholder day at the end of the sequence.
    pub async fn append_day(&self, trip_id: Uuid) -> AppResult<Day> {
        let trip = self.repository.trips.get(trip_id).await?;
        let mut days = self.repository.itineraries.load(trip_id).await?;
        let id = reconciler::append(&mut days, trip.start_date, trip.season);
        self.repository.itineraries.save(trip_id, &days).await?;
        days.into_iter()
            .rfind(|d| d.id == id)
            .ok_or_else(|| AppError::Internal("appended day vanished".to_string()))
    }

    /// Delete a day by identity; the last remaining day is protected.
    pub async fn delete_day(&self, trip_id: Uuid, day_id: Uuid) -> AppResult<Vec<Day>> {
        let trip = self.repository.trips.get(trip_id).await?;
        let mut days = self.repository.itineraries.load(trip_id).await?;
        reconciler::remove(&mut days, trip.start_date, day_id).map_err(|e| match e {
            reconciler::ReconcileError::LastDay => {
                AppError::BusinessRule("a trip must keep at least one day".to_string())
            }
            reconciler::ReconcileError::UnknownDay(id) => AppError::DayNotFound(id.to_string()),
        })?;
        self.repository.itineraries.save(trip_id, &days).await?;
        Ok(days)
    }

    /// Relocate a day to the position another currently occupies.
    pub async fn reorder_days(
        &self,
        trip_id: Uuid,
        moved_id: Uuid,
        target_id: Uuid,
    ) -> AppResult<Vec<Day>> {
        let trip = self.repository.trips.get(trip_id).await?;
        let mut days = self.repository.itineraries.load(trip_id).await?;
        reconciler::reorder(&mut days, trip.start_date, moved_id, target_id);
        self.repository.itineraries.save(trip_id, &days).await?;
        Ok(days)
    }

    /// Bulk-merge edited day records by the requested key.
    ///
    /// Saving an edit sorts each updated day's events by time of day and
    /// validates the HH:MM shape of event times.
    pub async fn update_days(
        &self,
        trip_id: Uuid,
        mut updates: Vec<DayPayload>,
        key: MergeKey,
    ) -> AppResult<(Vec<Day>, MergeOutcome)> {
        for payload in updates.iter_mut() {
            for event in &payload.events {
                if !TIME_RE.is_match(&event.time) {
                    return Err(AppError::Validation(format!(
                        "event time must be zero-padded 24h HH:MM, got {:?}",
                        event.time
                    )));
                }
            }
            payload.events.sort_by(|a, b| a.time.cmp(&b.time));
        }

        let trip = self.repository.trips.get(trip_id).await?;
        let mut days = self.repository.itineraries.load(trip_id).await?;
        let outcome = bulk_merge(&mut days, updates, key).map_err(map_merge_error)?;
        reconciler::recompute(&mut days, trip.start_date);
        self.repository.itineraries.save(trip_id, &days).await?;
        Ok((days, outcome))
    }

    /// Apply candidate day records returned by the generation
    /// collaborator.
    ///
    /// A whole-trip request replaces the sequence outright with freshly
    /// identified records; a single-day request merges by the identity
    /// that was active when the request was issued, so a result for a
    /// day deleted in the meantime is discarded with an error rather
    /// than applied to the wrong day.
    pub async fn apply_generated(
        &self,
        trip_id: Uuid,
        scope: GenerationScope,
        mut payloads: Vec<DayPayload>,
    ) -> AppResult<Vec<Day>> {
        let trip = self.repository.trips.get(trip_id).await?;
        let mut days = self.repository.itineraries.load(trip_id).await?;

        match scope {
            GenerationScope::WholeTrip => {
                if payloads.is_empty() {
                    return Err(AppError::Generation(
                        "generator returned no day records".to_string(),
                    ));
                }
                // Fresh identities: ignore anything the generator made up.
                for payload in payloads.iter_mut() {
                    payload.id = None;
                }
                days = replace_all(payloads);
            }
            GenerationScope::SingleDay(day_id) => {
                if payloads.len() != 1 {
                    return Err(AppError::Generation(format!(
                        "expected exactly one day record, got {}",
                        payloads.len()
                    )));
                }
                let mut payload = payloads.remove(0);
                payload.id = Some(day_id);
                let outcome =
                    bulk_merge(&mut days, vec![payload], MergeKey::Identity).map_err(map_merge_error)?;
                if outcome.matched == 0 {
                    return Err(AppError::DayNotFound(day_id.to_string()));
                }
            }
        }

        reconciler::recompute(&mut days, trip.start_date);
        self.repository.itineraries.save(trip_id, &days).await?;
        tracing::info!(trip_id = %trip_id, days = days.len(), "generated itinerary applied");
        Ok(days)
    }

    /// Apply a transit pass across consecutive days starting at the
    /// given day; the span is clamped at the end of the sequence.
    pub async fn apply_pass(
        &self,
        trip_id: Uuid,
        day_id: Uuid,
        data: &ApplyPass,
    ) -> AppResult<Vec<Day>> {
        self.set_pass(trip_id, day_id, data.duration_days, Some(data.name.clone()))
            .await
    }

    /// Clear the transit pass from consecutive days.
    pub async fn remove_pass(
        &self,
        trip_id: Uuid,
        day_id: Uuid,
        duration_days: u32,
    ) -> AppResult<Vec<Day>> {
        self.set_pass(trip_id, day_id, duration_days, None).await
    }

    async fn set_pass(
        &self,
        trip_id: Uuid,
        day_id: Uuid,
        duration_days: u32,
        pass_name: Option<String>,
    ) -> AppResult<Vec<Day>> {
        let mut days = self.repository.itineraries.load(trip_id).await?;
        let index = days
            .iter()
            .position(|d| d.id == day_id)
            .ok_or_else(|| AppError::DayNotFound(day_id.to_string()))?;
        let end = (index + duration_days.max(1) as usize).min(days.len());
        for day in &mut days[index..end] {
            day.pass_name = pass_name.clone();
        }
        self.repository.itineraries.save(trip_id, &days).await?;
        Ok(days)
    }

    /// Store a weather snapshot on a day. Results arriving for a day
    /// that no longer exists are discarded with a not-found error.
    pub async fn set_weather(
        &self,
        trip_id: Uuid,
        day_id: Uuid,
        snapshot: WeatherSnapshot,
    ) -> AppResult<Day> {
        let mut days = self.repository.itineraries.load(trip_id).await?;
        let day = days
            .iter_mut()
            .find(|d| d.id == day_id)
            .ok_or_else(|| AppError::DayNotFound(day_id.to_string()))?;
        day.weather = Some(snapshot);
        let updated = day.clone();
        self.repository.itineraries.save(trip_id, &days).await?;
        Ok(updated)
    }
}

fn map_merge_error(e: MergeError) -> AppError {
    match e {
        MergeError::MissingKey(_) | MergeError::DuplicateKey(_) => {
            AppError::BadRequest(e.to_string())
        }
        MergeError::UnmatchedLabels(_) => AppError::MergeMismatch(e.to_string()),
    }
}
