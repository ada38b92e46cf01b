//! Demo: seed the house menu, print it the way customers see it, then drag one item.

use menu_engine::board::{Audience, MenuView};
use menu_engine::config::MenuConfig;
use menu_engine::lifecycle::{setup_tracing, MenuSystem, SeedMenu};
use tracing::{error, info, Instrument};

fn print_menu(view: &MenuView) {
    for section in view.sections() {
        println!("[{}] {}", section.category_number, section.key.as_str().to_uppercase());
        for entry in &section.entries {
            let badge = entry.item.badge.as_deref().unwrap_or("");
            println!("  {:>2}. {:<24} {}", entry.number, entry.item.name, badge);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = MenuConfig::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting menu engine");

    let system = MenuSystem::new(&config.store);

    if config.menu.seed_on_empty {
        let seed = SeedMenu::default_menu().map_err(|e| e.to_string())?;
        system
            .seed_if_empty(&seed)
            .instrument(tracing::info_span!("seeding"))
            .await
            .map_err(|e| e.to_string())?;
    }

    // The seed leaves sides without a category number; give it its slot between fries and desserts.
    system
        .menu
        .set_category_number("sides", "04.5")
        .await
        .map_err(|e| e.to_string())?;

    let mut board = system
        .board(Audience::Customer)
        .await
        .map_err(|e| e.to_string())?;
    let view = board.current();
    println!("== Menu (v{}) ==", view.version());
    print_menu(&view);

    // Drag the first item onto the third, as a manager would in the full list.
    let manager_view = system
        .board(Audience::Manager)
        .await
        .map_err(|e| e.to_string())?
        .current();
    let items = manager_view.items();
    if let (Some(moved), Some(target)) = (items.first(), items.get(2)) {
        let span = tracing::info_span!("reorder", moved = %moved.name, target = %target.name);
        let result = system
            .menu
            .reorder_view(items, &moved.id, &target.id)
            .instrument(span)
            .await;

        match result {
            Ok(plan) => {
                info!(writes = plan.len(), "Reorder committed");
                let expected = view.version() + plan.len() as u64;
                if let Some(updated) = board.wait_for(expected).await {
                    println!("\n== After moving {} ==", moved.name);
                    print_menu(&updated);
                }
            }
            Err(e) => error!(error = %e, "Reorder failed"),
        }
    }

    drop(board);
    system.shutdown().await?;
    info!("Done");
    Ok(())
}
