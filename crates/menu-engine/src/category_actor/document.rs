use crate::model::{require, Category, CategoryCreate, CategoryId, CategoryPatch, ValidationError};
use crate::ordering::normalize_category_key;
use doc_store::Document;

impl Document for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Patch = CategoryPatch;
    type Error = ValidationError;

    fn from_create(id: CategoryId, params: CategoryCreate) -> Result<Self, ValidationError> {
        params.validate()?;
        Ok(Category {
            id,
            name: params.name.trim().to_string(),
            subtitle: params.subtitle,
            category_number: params.category_number,
            display_order: params.display_order,
            is_active: params.is_active,
        })
    }

    fn apply_patch(&mut self, patch: CategoryPatch) -> Result<(), ValidationError> {
        if let Some(name) = patch.name {
            require("name", &name)?;
            self.name = name.trim().to_string();
        }
        if let Some(subtitle) = patch.subtitle {
            self.subtitle = Some(subtitle);
        }
        if let Some(number) = patch.category_number {
            self.category_number = Some(number);
        }
        if let Some(display_order) = patch.display_order {
            self.display_order = display_order;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    fn unique_key(&self) -> Option<String> {
        Some(normalize_category_key(&self.name).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_key_ignores_case_and_padding() {
        let a = Category::from_create(CategoryId(1), CategoryCreate::named(" Burgers")).unwrap();
        let b = Category::from_create(CategoryId(2), CategoryCreate::named("BURGERS ")).unwrap();
        assert_eq!(a.unique_key(), b.unique_key());
        assert_eq!(a.name, "Burgers");
    }

    #[test]
    fn test_blank_rename_is_rejected() {
        let mut category =
            Category::from_create(CategoryId(1), CategoryCreate::named("Wraps")).unwrap();
        let patch = CategoryPatch {
            name: Some("  ".into()),
            ..CategoryPatch::default()
        };
        assert!(category.apply_patch(patch).is_err());
        assert_eq!(category.name, "Wraps");
    }
}
