//! Day and event models for the itinerary sequence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{EventCategory, WeatherIcon};

/// One scheduled activity within a day's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryEvent {
    /// Time of day (HH:MM)
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: EventCategory,
    /// Transport note (line, platform, duration...)
    pub transport: Option<String>,
    /// Query for a map search
    pub map_query: Option<String>,
    #[serde(default)]
    pub highlight: bool,
}

/// Overnight accommodation for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub name: String,
    /// Check-in time or note
    pub check_in: Option<String>,
}

/// Coarse weather shown on the day card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherSnapshot {
    pub icon: WeatherIcon,
    /// Display temperature, e.g. "5°C / 10°C"
    pub temperature: String,
}

/// One calendar day's itinerary record within a trip.
///
/// `id` is the stable identity: assigned once at creation and never
/// reassigned. `label`, `date` and `weekday` are derived from the trip
/// start date and the day's position in the sequence; they are recomputed
/// after every structural mutation and never edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub id: Uuid,
    /// Ordinal label, "Day N" (derived)
    pub label: String,
    /// Calendar date (derived)
    pub date: NaiveDate,
    /// Abbreviated weekday, "Mon".."Sun" (derived)
    pub weekday: String,
    pub title: String,
    pub description: String,
    /// Location name used for weather lookups
    pub location: String,
    /// Background image URL for the day card
    pub background_url: Option<String>,
    pub weather: Option<WeatherSnapshot>,
    pub tips: Option<String>,
    pub accommodation: Option<Accommodation>,
    /// Transit pass applied to this day, if any
    pub pass_name: Option<String>,
    #[serde(default)]
    pub events: Vec<ItineraryEvent>,
}

/// Day-shaped update record, as produced by a manual edit or by the
/// external generation collaborator.
///
/// The generator does not know stable identities, so `id` is optional;
/// merges by identity require it, merges by label use `label` instead.
/// Derived fields carried here (`label`, `date`, `weekday`) are only used
/// for matching and are recomputed after the merge.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayPayload {
    pub id: Option<Uuid>,
    pub label: Option<String>,
    pub date: Option<NaiveDate>,
    pub weekday: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub background_url: Option<String>,
    pub weather: Option<WeatherSnapshot>,
    pub tips: Option<String>,
    pub accommodation: Option<Accommodation>,
    pub pass_name: Option<String>,
    #[serde(default)]
    pub events: Vec<ItineraryEvent>,
}

/// Reorder request: relocate `moved_id` to the position currently
/// occupied by `target_id`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReorderDays {
    pub moved_id: Uuid,
    pub target_id: Uuid,
}

/// Bulk update request for existing days
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDays {
    pub days: Vec<DayPayload>,
}

/// Query selecting the merge key for a bulk update
#[derive(Debug, Default, Deserialize, utoipa::IntoParams, ToSchema)]
pub struct UpdateDaysQuery {
    /// "identity" (default) or "label"
    pub key: Option<String>,
}

/// Apply a transit pass from a given day across consecutive days
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPass {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    /// Number of consecutive days covered, clamped at the end of the trip
    #[validate(range(min = 1, max = 30))]
    pub duration_days: u32,
}

/// Remove a transit pass from consecutive days
#[derive(Debug, Deserialize, utoipa::IntoParams, ToSchema)]
pub struct RemovePassQuery {
    /// Number of consecutive days to clear (defaults to 1)
    pub duration_days: Option<u32>,
}
