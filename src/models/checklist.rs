//! Packing checklist models (categorized)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One checklist entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

/// A named group of checklist entries
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChecklistCategory {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

/// Create checklist category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChecklistCategory {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
}

/// Update checklist category request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateChecklistCategory {
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    pub collapsed: Option<bool>,
}

/// Create checklist item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChecklistItem {
    #[validate(length(min = 1, max = 200))]
    pub text: String,
}
