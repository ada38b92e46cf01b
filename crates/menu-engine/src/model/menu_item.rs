//! Menu items.
use crate::model::{require, ValidationError};
use crate::ordering::{normalize_category_key, CategoryKey, CategoryNumber};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier for menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

/// One sellable dish.
///
/// # Document Store
/// This struct implements the [`Document`](doc_store::Document) trait, so it lives in a
/// [`CollectionActor`](doc_store::CollectionActor). See [`crate::menu_actor`] for the
/// implementation and [`MenuItemPatch`] for the merge semantics of field updates.
///
/// Only `category`, `category_number`, `display_order` and `is_active` affect ordering and
/// visibility. The remaining fields are display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub category: String,
    pub category_number: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
    pub name: String,
    pub description: String,
    pub badge: Option<String>,
    pub ornament: Option<String>,
    pub luxury_type: Option<String>,
}

impl MenuItem {
    pub fn from_params(id: MenuItemId, params: MenuItemCreate) -> Self {
        Self {
            id,
            category: params.category,
            category_number: params.category_number,
            display_order: params.display_order,
            is_active: params.is_active,
            name: params.name,
            description: params.description,
            badge: params.badge,
            ornament: params.ornament,
            luxury_type: params.luxury_type,
        }
    }

    /// Grouping key for this item's category.
    pub fn category_key(&self) -> CategoryKey {
        normalize_category_key(&self.category)
    }

    pub fn category_number(&self) -> CategoryNumber {
        CategoryNumber::parse(self.category_number.as_deref())
    }
}

/// Payload for creating a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub category: String,
    #[serde(default)]
    pub category_number: Option<String>,
    #[serde(default)]
    pub display_order: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub ornament: Option<String>,
    #[serde(default)]
    pub luxury_type: Option<String>,
}

fn default_active() -> bool {
    true
}

impl MenuItemCreate {
    /// A visible item with only the required fields set.
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            category_number: None,
            display_order: 0,
            is_active: true,
            name: name.into(),
            description: description.into(),
            badge: None,
            ornament: None,
            luxury_type: None,
        }
    }

    pub fn with_category_number(mut self, number: impl Into<String>) -> Self {
        self.category_number = Some(number.into());
        self
    }

    pub fn with_display_order(mut self, display_order: i64) -> Self {
        self.display_order = display_order;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Category, name and description must all be present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("category", &self.category)?;
        require("name", &self.name)?;
        require("description", &self.description)
    }
}

/// Field update for a menu item. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    pub category: Option<String>,
    pub category_number: Option<String>,
    pub display_order: Option<i64>,
    pub is_active: Option<bool>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub badge: Option<String>,
    pub ornament: Option<String>,
    pub luxury_type: Option<String>,
}

impl MenuItemPatch {
    pub fn display_order(display_order: i64) -> Self {
        Self {
            display_order: Some(display_order),
            ..Self::default()
        }
    }

    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }

    pub fn category_number(number: impl Into<String>) -> Self {
        Self {
            category_number: Some(number.into()),
            ..Self::default()
        }
    }

    /// Present text fields that are required on the item must not be blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("category", &self.category),
            ("name", &self.name),
            ("description", &self.description),
        ];
        for (field, value) in required {
            if let Some(value) = value {
                require(field, value)?;
            }
        }
        Ok(())
    }

    /// Overwrite the present fields of `item`.
    pub fn merge_into(self, item: &mut MenuItem) {
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(number) = self.category_number {
            item.category_number = Some(number);
        }
        if let Some(display_order) = self.display_order {
            item.display_order = display_order;
        }
        if let Some(is_active) = self.is_active {
            item.is_active = is_active;
        }
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(badge) = self.badge {
            item.badge = Some(badge);
        }
        if let Some(ornament) = self.ornament {
            item.ornament = Some(ornament);
        }
        if let Some(luxury_type) = self.luxury_type {
            item.luxury_type = Some(luxury_type);
        }
    }
}
