//! Reorder commits against a real collection with selected writes failing.

use async_trait::async_trait;
use doc_store::{CollectionClient, DocumentStore, StoreError, Subscription};
use menu_engine::board::{Audience, MenuBoard};
use menu_engine::clients::MenuClient;
use menu_engine::error::MenuError;
use menu_engine::menu_actor;
use menu_engine::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemPatch};

/// Delegates to a real collection but fails `update_fields` for the listed ids.
struct FailingUpdates {
    inner: CollectionClient<MenuItem>,
    fail: Vec<MenuItemId>,
}

#[async_trait]
impl DocumentStore<MenuItem> for FailingUpdates {
    async fn fetch_all(&self) -> Result<Vec<MenuItem>, StoreError> {
        self.inner.fetch_all().await
    }

    async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError> {
        self.inner.get(id).await
    }

    async fn insert(&self, params: MenuItemCreate) -> Result<MenuItemId, StoreError> {
        self.inner.insert(params).await
    }

    async fn update_fields(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<MenuItem, StoreError> {
        if self.fail.contains(&id) {
            return Err(StoreError::Closed);
        }
        self.inner.update_fields(id, patch).await
    }

    async fn delete(&self, id: MenuItemId) -> Result<(), StoreError> {
        self.inner.delete(id).await
    }

    async fn subscribe(&self) -> Result<Subscription<MenuItem>, StoreError> {
        self.inner.subscribe().await
    }
}

async fn seeded(names: &[&str]) -> (CollectionClient<MenuItem>, Vec<MenuItemId>) {
    let (actor, store) = menu_actor::new(16);
    tokio::spawn(actor.run());
    let menu = MenuClient::new(store.clone());
    let mut ids = Vec::new();
    for name in names {
        ids.push(
            menu.add_item(MenuItemCreate::new("burgers", *name, "desc"))
                .await
                .unwrap(),
        );
    }
    (store, ids)
}

#[tokio::test]
async fn test_partial_failure_keeps_successful_writes() {
    let (store, ids) = seeded(&["a", "b", "c"]).await;
    let menu = MenuClient::new(FailingUpdates {
        inner: store.clone(),
        fail: vec![ids[2].clone()],
    });

    let view = menu.items().await.unwrap();
    let err = menu
        .reorder_view(&view, &ids[0], &ids[2])
        .await
        .unwrap_err();

    let MenuError::PersistenceFailure { detail, .. } = err else {
        panic!("expected PersistenceFailure");
    };
    assert!(detail.contains(&ids[2].to_string()));

    // No rollback: a and b took their new orders, c kept its old one. a and c tie and keep
    // document order.
    let stored = MenuClient::new(store).items().await.unwrap();
    let orders: Vec<(String, i64)> = stored
        .iter()
        .map(|i| (i.name.clone(), i.display_order))
        .collect();
    assert_eq!(
        orders,
        vec![
            ("b".to_string(), 0),
            ("a".to_string(), 2),
            ("c".to_string(), 2),
        ]
    );
}

#[tokio::test]
async fn test_board_sees_partial_state_after_failure() {
    let (store, ids) = seeded(&["a", "b"]).await;
    let mut board = MenuBoard::attach(&store, Audience::Manager).await.unwrap();
    let version = board.current().version();

    let menu = MenuClient::new(FailingUpdates {
        inner: store.clone(),
        fail: vec![ids[0].clone()],
    });
    let view = board.current().items().to_vec();
    assert!(menu.reorder_view(&view, &ids[0], &ids[1]).await.is_err());

    // Only b's write landed; a and b now tie at 0 and keep document order.
    let after = board.wait_for(version + 1).await.expect("board closed");
    let names: Vec<&str> = after.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(after.items()[1].display_order, 0);
}
