//! Packing checklist service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::checklist::{
        ChecklistCategory, ChecklistItem, CreateChecklistCategory, CreateChecklistItem,
        UpdateChecklistCategory,
    },
    repository::Repository,
};

/// Default packing template seeded into every new trip's checklist
const DEFAULT_TEMPLATE: &[(&str, &[&str])] = &[
    (
        "Documents",
        &[
            "Passport (6+ months validity)",
            "Rail pass exchange voucher",
            "Travel insurance papers",
            "Arrival card filled in online",
        ],
    ),
    (
        "Money",
        &["Cash in local currency", "Credit card with travel rewards"],
    ),
    (
        "Electronics",
        &[
            "SIM card / roaming enabled",
            "Power bank",
            "Charging cables / plug adapter",
        ],
    ),
    (
        "Clothing & health",
        &[
            "Personal medication",
            "Warm layers / thermal wear",
            "Comfortable walking shoes",
        ],
    ),
];

/// Build the default categorized checklist with fresh identities
pub fn default_checklist() -> Vec<ChecklistCategory> {
    DEFAULT_TEMPLATE
        .iter()
        .map(|(title, items)| ChecklistCategory {
            id: Uuid::new_v4(),
            title: title.to_string(),
            collapsed: false,
            items: items
                .iter()
                .map(|text| ChecklistItem {
                    id: Uuid::new_v4(),
                    text: text.to_string(),
                    checked: false,
                })
                .collect(),
        })
        .collect()
}

#[derive(Clone)]
pub struct ChecklistService {
    repository: Repository,
}

impl ChecklistService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a trip's checklist, seeding the default template on first
    /// access.
    pub async fn get(&self, trip_id: Uuid) -> AppResult<Vec<ChecklistCategory>> {
        self.repository.trips.get(trip_id).await?;
        match self.repository.checklists.load(trip_id).await? {
            Some(checklist) => Ok(checklist),
            None => {
                let seeded = default_checklist();
                self.repository.checklists.save(trip_id, &seeded).await?;
                Ok(seeded)
            }
        }
    }

    pub async fn create_category(
        &self,
        trip_id: Uuid,
        data: &CreateChecklistCategory,
    ) -> AppResult<ChecklistCategory> {
        let mut checklist = self.get(trip_id).await?;
        let category = ChecklistCategory {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            collapsed: false,
            items: Vec::new(),
        };
        checklist.push(category.clone());
        self.repository.checklists.save(trip_id, &checklist).await?;
        Ok(category)
    }

    pub async fn update_category(
        &self,
        trip_id: Uuid,
        category_id: Uuid,
        data: &UpdateChecklistCategory,
    ) -> AppResult<ChecklistCategory> {
        let mut checklist = self.get(trip_id).await?;
        let category = checklist
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| AppError::NotFound(format!("checklist category {}", category_id)))?;
        if let Some(title) = &data.title {
            category.title = title.clone();
        }
        if let Some(collapsed) = data.collapsed {
            category.collapsed = collapsed;
        }
        let updated = category.clone();
        self.repository.checklists.save(trip_id, &checklist).await?;
        Ok(updated)
    }

    pub async fn delete_category(&self, trip_id: Uuid, category_id: Uuid) -> AppResult<()> {
        let mut checklist = self.get(trip_id).await?;
        let before = checklist.len();
        checklist.retain(|c| c.id != category_id);
        if checklist.len() == before {
            return Err(AppError::NotFound(format!("checklist category {}", category_id)));
        }
        self.repository.checklists.save(trip_id, &checklist).await
    }

    pub async fn create_item(
        &self,
        trip_id: Uuid,
        category_id: Uuid,
        data: &CreateChecklistItem,
    ) -> AppResult<ChecklistItem> {
        let mut checklist = self.get(trip_id).await?;
        let category = checklist
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| AppError::NotFound(format!("checklist category {}", category_id)))?;
        let item = ChecklistItem {
            id: Uuid::new_v4(),
            text: data.text.clone(),
            checked: false,
        };
        category.items.push(item.clone());
        self.repository.checklists.save(trip_id, &checklist).await?;
        Ok(item)
    }

    pub async fn toggle_item(&self, trip_id: Uuid, item_id: Uuid) -> AppResult<ChecklistItem> {
        let mut checklist = self.get(trip_id).await?;
        let item = checklist
            .iter_mut()
            .flat_map(|c| c.items.iter_mut())
            .find(|i| i.id == item_id)
            .ok_or_else(|| AppError::NotFound(format!("checklist item {}", item_id)))?;
        item.checked = !item.checked;
        let updated = item.clone();
        self.repository.checklists.save(trip_id, &checklist).await?;
        Ok(updated)
    }

    pub async fn delete_item(&self, trip_id: Uuid, item_id: Uuid) -> AppResult<()> {
        let mut checklist = self.get(trip_id).await?;
        let mut found = false;
        for category in checklist.iter_mut() {
            let before = category.items.len();
            category.items.retain(|i| i.id != item_id);
            if category.items.len() != before {
                found = true;
            }
        }
        if !found {
            return Err(AppError::NotFound(format!("checklist item {}", item_id)));
        }
        self.repository.checklists.save(trip_id, &checklist).await
    }
}
