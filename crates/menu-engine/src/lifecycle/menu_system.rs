use crate::board::{Audience, MenuBoard};
use crate::category_actor;
use crate::clients::{CategoryClient, MenuClient, StoreClient};
use crate::config::StoreConfig;
use crate::error::MenuError;
use crate::lifecycle::SeedMenu;
use crate::menu_actor;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// What [`MenuSystem::seed_if_empty`] wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub items: usize,
}

/// The running menu system: both collection actors and their clients.
///
/// # Example
///
/// ```rust
/// use menu_engine::board::Audience;
/// use menu_engine::config::StoreConfig;
/// use menu_engine::lifecycle::{MenuSystem, SeedMenu};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = MenuSystem::new(&StoreConfig::default());
///     system.seed_if_empty(&SeedMenu::default_menu()?).await?;
///
///     let board = system.board(Audience::Customer).await?;
///     assert_eq!(board.current().items().len(), 16);
///
///     drop(board);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct MenuSystem {
    pub menu: MenuClient,
    pub categories: CategoryClient,
    handles: Vec<JoinHandle<()>>,
}

impl MenuSystem {
    /// Spawn both collection actors. Must be called inside a Tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        let (menu_actor, menu_store) = menu_actor::new(config.buffer_size);
        let (category_actor, category_store) = category_actor::new(config.buffer_size);

        let menu_handle = tokio::spawn(menu_actor.run());
        let category_handle = tokio::spawn(category_actor.run());

        Self {
            menu: MenuClient::new(menu_store),
            categories: CategoryClient::new(category_store),
            handles: vec![menu_handle, category_handle],
        }
    }

    /// A live view of the menu for `audience`.
    pub async fn board(&self, audience: Audience) -> Result<MenuBoard, MenuError> {
        MenuBoard::attach(self.menu.store(), audience).await
    }

    /// Insert `seed` if the menu has no items yet.
    ///
    /// Inserts run one at a time, categories first. A category that already exists is skipped.
    /// The first item failure stops seeding and leaves earlier inserts in place.
    pub async fn seed_if_empty(&self, seed: &SeedMenu) -> Result<SeedReport, MenuError> {
        if !self.menu.fetch_all().await?.is_empty() {
            info!("Menu already populated, skipping seed");
            return Ok(SeedReport::default());
        }

        let mut report = SeedReport::default();
        for category in &seed.categories {
            match self.categories.add_category(category.clone(), &[]).await {
                Ok(_) => report.categories += 1,
                Err(MenuError::DuplicateCategory(name)) => {
                    warn!(%name, "Category already saved, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        for item in &seed.items {
            self.menu.import_item(item.clone()).await?;
            report.items += 1;
        }

        info!(
            categories = report.categories,
            items = report.items,
            "Seeded default menu"
        );
        Ok(report)
    }

    /// Drop the clients and wait for both actors to exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down menu system...");

        drop(self.menu);
        drop(self.categories);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Collection task failed: {:?}", e);
                return Err(format!("Collection task failed: {:?}", e));
            }
        }

        info!("Menu system shutdown complete.");
        Ok(())
    }
}
