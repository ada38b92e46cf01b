use menu_engine::board::Audience;
use menu_engine::clients::StoreClient;
use menu_engine::config::StoreConfig;
use menu_engine::error::MenuError;
use menu_engine::lifecycle::{MenuSystem, SeedMenu, SeedReport};
use menu_engine::model::{CategoryCreate, MenuItemCreate, MenuItemPatch};
use menu_engine::ordering::{category_names, CategoryFilter};

/// Full end-to-end run with both real collection actors.
#[tokio::test]
async fn test_seeded_menu_renders_in_category_order() {
    let system = MenuSystem::new(&StoreConfig::default());
    let seed = SeedMenu::default_menu().expect("bundled menu parses");

    let report = system.seed_if_empty(&seed).await.expect("seed failed");
    assert_eq!(
        report,
        SeedReport {
            categories: 6,
            items: 16
        }
    );

    // Seeding twice is a no-op.
    let again = system.seed_if_empty(&seed).await.expect("reseed failed");
    assert_eq!(again, SeedReport::default());

    let board = system.board(Audience::Customer).await.expect("attach failed");
    let view = board.current();
    let order: Vec<String> = view
        .sections()
        .iter()
        .map(|s| s.key.as_str().to_string())
        .collect();
    // Sides has no category number yet, so it sorts last.
    assert_eq!(
        order,
        vec!["burgers", "wraps", "rice dishes", "loaded fries", "desserts", "sides"]
    );
    assert_eq!(view.number_of(&view.items()[0].id), Some(1));
    assert_eq!(view.items()[0].name, "Lamb Royale");

    drop(board);
    system.shutdown().await.expect("shutdown failed");
}

#[tokio::test]
async fn test_category_number_fix_moves_sides_before_desserts() {
    let system = MenuSystem::new(&StoreConfig::default());
    system
        .seed_if_empty(&SeedMenu::default_menu().unwrap())
        .await
        .unwrap();
    let mut board = system.board(Audience::Customer).await.unwrap();
    let version = board.current().version();

    let updated = system
        .menu
        .set_category_number("SIDES", "04.5")
        .await
        .unwrap();
    assert_eq!(updated, 2);

    let view = board
        .wait_for(version + updated as u64)
        .await
        .expect("board closed");
    let keys: Vec<String> = view
        .sections()
        .iter()
        .map(|s| s.key.as_str().to_string())
        .collect();
    assert_eq!(keys[4], "sides");
    assert_eq!(keys[5], "desserts");

    drop(board);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reorder_is_reflected_in_every_board() {
    let system = MenuSystem::new(&StoreConfig::default());
    for (category, name) in [("burgers", "a"), ("burgers", "b"), ("wraps", "c")] {
        system
            .menu
            .add_item(MenuItemCreate::new(category, name, "desc"))
            .await
            .unwrap();
    }

    let mut customer = system.board(Audience::Customer).await.unwrap();
    let manager = system.board(Audience::Manager).await.unwrap();
    let before = manager.current();
    let orders: Vec<i64> = before.items().iter().map(|i| i.display_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);

    let items = before.items();
    let plan = system
        .menu
        .reorder_view(items, &items[0].id, &items[2].id)
        .await
        .unwrap();
    assert_eq!(plan.len(), 3);

    let after = customer
        .wait_for(before.version() + 3)
        .await
        .expect("board closed");
    let names: Vec<&str> = after.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["b", "c", "a"]);
    assert_eq!(after.number_of(&items[0].id), Some(3));

    drop(customer);
    drop(manager);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_hidden_items_leave_customer_view_only() {
    let system = MenuSystem::new(&StoreConfig::default());
    let keep = system
        .menu
        .add_item(MenuItemCreate::new("Desserts", "Baklava", "Honey"))
        .await
        .unwrap();
    let hide = system
        .menu
        .add_item(MenuItemCreate::new("Desserts", "Rice Pudding", "Cardamom"))
        .await
        .unwrap();

    assert!(!system.menu.toggle_active(hide.clone()).await.unwrap());

    let customer = system.board(Audience::Customer).await.unwrap().current();
    let manager = system.board(Audience::Manager).await.unwrap().current();
    assert_eq!(customer.items().len(), 1);
    assert_eq!(customer.items()[0].id, keep);
    assert_eq!(manager.items().len(), 2);
    assert_eq!(manager.number_of(&hide), Some(2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_item_after_delete_never_reuses_order() {
    let system = MenuSystem::new(&StoreConfig::default());
    let first = system
        .menu
        .add_item(MenuItemCreate::new("Sides", "Fries", "Salted"))
        .await
        .unwrap();
    let second = system
        .menu
        .add_item(MenuItemCreate::new("Sides", "Spiced Fries", "House spice"))
        .await
        .unwrap();
    system.menu.delete_item(first).await.unwrap();

    let third = system
        .menu
        .add_item(MenuItemCreate::new("Sides", "Onion Rings", "Battered"))
        .await
        .unwrap();
    let items = system.menu.items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, second);
    assert_eq!(items[1].id, third);
    assert_eq!(items[1].display_order, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_categories_are_unique_case_insensitively() {
    let system = MenuSystem::new(&StoreConfig::default());
    system
        .categories
        .add_category(CategoryCreate::named("Wraps"), &[])
        .await
        .unwrap();

    let err = system
        .categories
        .add_category(CategoryCreate::named(" WRAPS "), &[])
        .await
        .unwrap_err();
    assert_eq!(err, MenuError::DuplicateCategory("Wraps".into()));

    system
        .menu
        .add_item(MenuItemCreate::new("burgers", "Lamb Royale", "Lamb"))
        .await
        .unwrap();
    let saved = system.categories.list().await.unwrap();
    let items = system.menu.items().await.unwrap();
    assert_eq!(category_names(&saved, &items), vec!["burgers", "Wraps"]);

    assert_eq!(system.categories.delete_category("wraps").await.unwrap(), 1);
    assert!(system.categories.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_any_write() {
    let system = MenuSystem::new(&StoreConfig::default());
    let id = system
        .menu
        .add_item(MenuItemCreate::new("Wraps", "Haus Wrap", "Chicken"))
        .await
        .unwrap();

    let err = system
        .menu
        .update_item(
            id.clone(),
            MenuItemPatch {
                name: Some("   ".into()),
                ..MenuItemPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, MenuError::Validation(_)));

    let stored = system.menu.get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Haus Wrap");

    let view = system.board(Audience::Manager).await.unwrap().current();
    assert_eq!(
        view.filtered(&CategoryFilter::parse("wraps")).len(),
        1
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_drag_within_category_leaves_other_categories_alone() {
    let system = MenuSystem::new(&StoreConfig::default());
    let mut ids = Vec::new();
    for (category, name) in [
        ("burgers", "b1"),
        ("burgers", "b2"),
        ("wraps", "w1"),
        ("wraps", "w2"),
        ("burgers", "b3"),
    ] {
        ids.push(
            system
                .menu
                .add_item(MenuItemCreate::new(category, name, "desc"))
                .await
                .unwrap(),
        );
    }

    let mut board = system.board(Audience::Manager).await.unwrap();
    let before = board.current();
    let wraps = before.filtered(&CategoryFilter::parse("Wraps"));
    assert_eq!(wraps.len(), 2);

    let plan = system
        .menu
        .reorder_view(&wraps, &ids[3], &ids[2])
        .await
        .unwrap();
    assert_eq!(plan.pairs(), vec![(ids[3].clone(), 2), (ids[2].clone(), 3)]);

    let after = board
        .wait_for(before.version() + plan.len() as u64)
        .await
        .expect("board closed");
    let names: Vec<&str> = after.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["b1", "b2", "w2", "w1", "b3"]);

    // Burgers keep their display orders and their numbers.
    for id in [&ids[0], &ids[1], &ids[4]] {
        assert_eq!(after.number_of(id), before.number_of(id));
        let old = before.items().iter().find(|i| &i.id == id).unwrap();
        let new = after.items().iter().find(|i| &i.id == id).unwrap();
        assert_eq!(old.display_order, new.display_order);
    }
    assert_eq!(after.number_of(&ids[3]), Some(3));
    assert_eq!(after.number_of(&ids[2]), Some(4));

    drop(board);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_inactive_item_feeds_both_audiences() {
    let system = MenuSystem::new(&StoreConfig::default());
    let customer = system.board(Audience::Customer).await.unwrap();
    let manager = system.board(Audience::Manager).await.unwrap();
    assert_eq!(customer.current().audience(), Audience::Customer);
    assert_eq!(manager.current().audience(), Audience::Manager);

    let mut customer_feed = customer.watch();
    let mut manager_feed = manager.watch();

    let hidden = system
        .menu
        .add_item(MenuItemCreate::new("Desserts", "Kheer", "Seasonal").inactive())
        .await
        .unwrap();

    manager_feed.changed().await.unwrap();
    customer_feed.changed().await.unwrap();
    let manager_view = manager_feed.borrow_and_update().clone();
    let customer_view = customer_feed.borrow_and_update().clone();

    assert_eq!(manager_view.number_of(&hidden), Some(1));
    assert!(!manager_view.items()[0].is_active);
    assert!(customer_view.is_empty());
    assert_eq!(customer_view.version(), manager_view.version());

    drop(customer);
    drop(manager);
    system.shutdown().await.unwrap();
}
