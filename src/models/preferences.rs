//! Global client preferences

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Preferences shared by all trips
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

/// Update preferences request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferences {
    pub dark_mode: Option<bool>,
}
