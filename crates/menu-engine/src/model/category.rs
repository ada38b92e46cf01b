//! Saved categories.
//!
//! Categories are stored separately from menu items so an empty category can exist before any
//! item uses it. Grouping never reads this collection; it exists for the manager's category
//! picker and is unique by normalized name.
use crate::model::{require, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier for categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub subtitle: Option<String>,
    pub category_number: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

/// Payload for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub category_number: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CategoryCreate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subtitle: None,
            category_number: None,
            display_order: 0,
            is_active: true,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

/// Field update for a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub category_number: Option<String>,
    pub display_order: Option<i64>,
    pub is_active: Option<bool>,
}
