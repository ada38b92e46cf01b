//! [`Document`] implementation for [`MenuItem`].

use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemPatch, ValidationError};
use doc_store::Document;

impl Document for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Patch = MenuItemPatch;
    type Error = ValidationError;

    /// Rejects payloads with a blank category, name or description.
    fn from_create(id: MenuItemId, params: MenuItemCreate) -> Result<Self, ValidationError> {
        params.validate()?;
        Ok(MenuItem::from_params(id, params))
    }

    /// Merges present fields. A patch that would blank a required field is rejected whole.
    fn apply_patch(&mut self, patch: MenuItemPatch) -> Result<(), ValidationError> {
        patch.validate()?;
        patch.merge_into(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_text_fields() {
        let blank_name = MenuItemCreate::new("Wraps", " ", "Flatbread");
        assert_eq!(
            MenuItem::from_create(MenuItemId(1), blank_name).unwrap_err(),
            ValidationError::MissingField("name")
        );

        let ok = MenuItem::from_create(MenuItemId(2), MenuItemCreate::new("Wraps", "Haus", "x"))
            .unwrap();
        assert_eq!(ok.id, MenuItemId(2));
        assert!(ok.is_active);
    }

    #[test]
    fn test_rejected_patch_leaves_item_unchanged() {
        let mut item =
            MenuItem::from_create(MenuItemId(1), MenuItemCreate::new("Sides", "Fries", "Salted"))
                .unwrap();
        let before = item.clone();
        let patch = MenuItemPatch {
            description: Some(String::new()),
            display_order: Some(4),
            ..MenuItemPatch::default()
        };
        assert!(item.apply_patch(patch).is_err());
        assert_eq!(item, before);

        item.apply_patch(MenuItemPatch::display_order(4)).unwrap();
        assert_eq!(item.display_order, 4);
        assert_eq!(item.name, "Fries");
    }
}
