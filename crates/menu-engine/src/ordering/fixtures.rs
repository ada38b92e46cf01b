use crate::model::{MenuItem, MenuItemId};

pub(crate) fn item(id: u32, category: &str, number: Option<&str>, display_order: i64) -> MenuItem {
    MenuItem {
        id: MenuItemId(id),
        category: category.to_string(),
        category_number: number.map(str::to_string),
        display_order,
        is_active: true,
        name: format!("Dish {id}"),
        description: format!("Description {id}"),
        badge: None,
        ornament: None,
        luxury_type: None,
    }
}
