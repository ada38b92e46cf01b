//! The default menu inserted into an empty store.

use crate::model::{CategoryCreate, MenuItemCreate};
use serde::Deserialize;

const DEFAULT_MENU: &str = include_str!("../../data/seed_menu.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SeedMenu {
    #[serde(default)]
    pub categories: Vec<CategoryCreate>,
    #[serde(default)]
    pub items: Vec<MenuItemCreate>,
}

impl SeedMenu {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The bundled house menu.
    pub fn default_menu() -> Result<Self, toml::de::Error> {
        Self::from_toml_str(DEFAULT_MENU)
    }
}
