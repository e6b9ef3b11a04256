mod actor_framework;
mod app_system;
mod assistant;
mod cart_actor;
mod clients;
mod config;
mod data;
mod domain;
mod images;
mod menu_actor;
mod session;
mod user_actor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use std::sync::Arc;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, CafeSystem};
use crate::assistant::GeminiClient;
use crate::clients::{MenuItemDraft, UserDraft};
use crate::config::Config;
use crate::domain::{MenuCategory, Role};
use crate::session::{authenticate, Session};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting SmartCafé ordering system");

    let config = Config::load();
    let provider = GeminiClient::from_env().map_err(|e| e.to_string())?;
    let system = CafeSystem::new(&config, Arc::new(provider));

    let mut session = Session::new();
    session.start_order();

    // --- Buyer session ---
    let span = tracing::info_span!("buyer_session");
    async {
        let users = system
            .user_client
            .list_users()
            .await
            .map_err(|e| e.to_string())?;
        let buyer = authenticate(&users, "user", "user123", Role::Buyer)
            .map_err(|e| e.to_string())?
            .clone();
        session.login(buyer);
        info!(page = ?session.page(), "Navigated");

        // Entering the menu fires the first (debounced) recommendation.
        system
            .assistant_client
            .notify_cart_changed(vec![])
            .await
            .map_err(|e| e.to_string())?;

        let menu = system
            .menu_client
            .list_items()
            .await
            .map_err(|e| e.to_string())?;
        for category in MenuCategory::ALL {
            let count = menu.iter().filter(|i| i.category == category).count();
            info!(category = %category, count, "Menu tab loaded");
        }

        let latte = menu
            .iter()
            .find(|i| i.name == "Caffe Latte")
            .cloned()
            .ok_or("Caffe Latte missing from menu")?;
        system
            .cart_client
            .add(latte.clone())
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .add(latte)
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .set_quantity(5, 1)
            .await
            .map_err(|e| e.to_string())?;

        let total = system.cart_client.total().await.map_err(|e| e.to_string())?;
        info!(total, "Cart ready");

        // Let the quiet period elapse so the cart-based suggestion lands.
        tokio::time::sleep(config.quiet_period() + std::time::Duration::from_millis(500)).await;
        if let Some(suggestion) = system
            .assistant_client
            .current()
            .await
            .map_err(|e| e.to_string())?
        {
            info!(
                text = %suggestion.recommendation_text,
                item_id = ?suggestion.recommended_item_id,
                "Assistant suggested"
            );
        }

        let recommendation = system
            .assistant_client
            .ask("Minuman yang segar?")
            .await
            .map_err(|e| e.to_string())?;
        info!(
            text = %recommendation.recommendation_text,
            item_id = ?recommendation.recommended_item_id,
            "Assistant answered"
        );

        match system.cart_client.checkout().await {
            Ok(receipt) => {
                info!(total = receipt.total, lines = receipt.lines.len(), "Order confirmed");
                system
                    .cart_client
                    .acknowledge_checkout()
                    .await
                    .map_err(|e| e.to_string())?;
            }
            Err(e) => error!(error = %e, "Checkout failed"),
        }

        session.logout();
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // --- Admin session ---
    let span = tracing::info_span!("admin_session");
    async {
        session.start_order();
        let users = system
            .user_client
            .list_users()
            .await
            .map_err(|e| e.to_string())?;
        let admin = authenticate(&users, "admin", "admin123", Role::Admin)
            .map_err(|e| e.to_string())?
            .clone();
        session.login(admin);
        if !session.is_admin() {
            return Err("admin session without admin role".to_string());
        }
        let admin_id = session
            .current_user()
            .map(|u| u.id)
            .ok_or("no user in session")?;

        let created = system
            .admin_client
            .save_menu_item(MenuItemDraft {
                id: None,
                name: "Es Kopi Gula Aren".to_string(),
                price: 28_000,
                category: MenuCategory::Drinks,
                image_file: None,
                image_url: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(item_id = created.id, "New menu item on sale");

        let updated = system
            .admin_client
            .save_menu_item(MenuItemDraft {
                id: Some(created.id),
                name: created.name.clone(),
                price: 30_000,
                category: created.category,
                image_file: None,
                image_url: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(item_id = updated.id, price = updated.price, "Price adjusted");

        let barista = system
            .admin_client
            .save_user(UserDraft {
                id: None,
                username: "barista".to_string(),
                password: Some("espresso".to_string()),
                role: Role::Buyer,
            })
            .await
            .map_err(|e| e.to_string())?;

        // Editing your own account updates the session snapshot too.
        let me = system
            .admin_client
            .save_user(UserDraft {
                id: Some(admin_id),
                username: "admin".to_string(),
                password: Some("rahasia-baru".to_string()),
                role: Role::Admin,
            })
            .await
            .map_err(|e| e.to_string())?;
        session.refresh_user(me);

        // Deleting yourself is rejected; the warning is the whole story.
        if let Err(e) = system.admin_client.delete_user(admin_id, admin_id).await {
            info!(rejected = %e, "Self-deletion guard held");
        }

        system
            .admin_client
            .delete_user(barista.id, admin_id)
            .await
            .map_err(|e| e.to_string())?;
        system
            .admin_client
            .delete_menu_item(created.id)
            .await
            .map_err(|e| e.to_string())?;

        session.logout();
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
