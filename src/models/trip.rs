//! Trip model and request types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::Season;

/// Trip record: settings for one multi-day itinerary plan.
///
/// A trip owns one ordered day sequence plus its expenses and checklist,
/// all namespaced by the trip id in storage.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,
    /// Trip name / theme
    pub name: String,
    /// First day of the trip
    pub start_date: NaiveDate,
    pub season: Season,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create trip request (setup wizard)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrip {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Trip start date (YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Number of placeholder days to generate
    #[validate(range(min = 1, max = 60))]
    pub duration_days: u32,
    pub season: Season,
}

/// Update trip request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrip {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    /// Changing the start date recomputes every day's derived fields
    pub start_date: Option<NaiveDate>,
    pub season: Option<Season>,
}

/// Duplicate trip request (new trip from an existing one used as template)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateTrip {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub start_date: NaiveDate,
    pub season: Option<Season>,
}
