//! Export / import document for trip sharing and backup

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::checklist::ChecklistCategory;
use super::day::Day;
use super::expense::ExpenseItem;
use super::trip::Trip;

/// Current export document version
pub const EXPORT_VERSION: u32 = 2;

/// A complete trip snapshot for export/import.
///
/// The field names are part of the interchange format and are kept
/// camelCase for compatibility with previously shared documents.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripExport {
    pub trip_settings: Trip,
    pub itinerary_data: Vec<Day>,
    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,
    #[serde(default)]
    pub checklist: Vec<ChecklistCategory>,
    #[serde(default)]
    pub version: u32,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Compressed text-code wrapper for manual copy/paste sharing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShareCode {
    pub code: String,
}
