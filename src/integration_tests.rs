#[cfg(test)]
mod tests {
    use crate::app_system::CafeSystem;
    use crate::cart_actor::CartRequest;
    use crate::clients::{AdminClient, CartClient, MenuClient, MenuItemDraft, UserClient, UserDraft};
    use crate::config::Config;
    use crate::domain::{MenuCategory, Role, User};
    use crate::mock_framework::{create_mock_client, expect_delete, ScriptedProvider};
    use crate::user_actor::UserError;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn start_system(debounce_ms: u64) -> (CafeSystem, Arc<ScriptedProvider>) {
        let provider = Arc::new(ScriptedProvider::new());
        let config = Config { debounce_ms };
        let system = CafeSystem::new(&config, provider.clone());
        (system, provider)
    }

    #[tokio::test]
    async fn deleting_a_menu_item_cleans_the_cart() {
        let (system, _provider) = start_system(10_000);

        let menu = system.menu_client.list_items().await.unwrap();
        assert_eq!(menu.len(), 10);

        let latte = menu.iter().find(|i| i.id == 5).unwrap().clone();
        system.cart_client.add(latte).await.unwrap();
        assert_eq!(system.cart_client.lines().await.unwrap().len(), 1);

        system.admin_client.delete_menu_item(5).await.unwrap();

        assert!(system.cart_client.lines().await.unwrap().is_empty());
        assert_eq!(system.menu_client.list_items().await.unwrap().len(), 9);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn deleting_the_logged_in_user_is_rejected() {
        let (system, _provider) = start_system(10_000);

        let result = system.admin_client.delete_user(1, 1).await;
        assert_eq!(result, Err(UserError::CannotDeleteSelf));

        // The user list is unchanged.
        let users = system.user_client.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.id == 1));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn editing_a_user_without_a_password_keeps_the_old_one() {
        let (system, _provider) = start_system(10_000);

        let saved = system
            .admin_client
            .save_user(UserDraft {
                id: Some(2),
                username: "pelanggan".to_string(),
                password: None,
                role: Role::Buyer,
            })
            .await
            .unwrap();

        assert_eq!(saved.username, "pelanggan");
        assert_eq!(saved.password, "user123");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn menu_upsert_creates_then_updates_in_place() {
        let (system, _provider) = start_system(10_000);

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
            .unwrap();
        assert_eq!(created.id, 11);
        assert!(created.image_url.contains("picsum.photos"));

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
            .unwrap();
        assert_eq!(updated.id, 11);
        assert_eq!(updated.price, 30_000);
        // No new image supplied: the stored one stays.
        assert_eq!(updated.image_url, created.image_url);

        assert_eq!(system.menu_client.list_items().await.unwrap().len(), 11);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn rapid_cart_changes_coalesce_into_one_fetch() {
        let (system, provider) = start_system(100);

        let menu = system.menu_client.list_items().await.unwrap();
        for id in [1, 2, 5] {
            let item = menu.iter().find(|i| i.id == id).unwrap().clone();
            system.cart_client.add(item).await.unwrap();
        }

        // Three mutations inside one quiet period: exactly one model call.
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(provider.call_count(), 1);

        let current = system.assistant_client.current().await.unwrap();
        assert!(current.is_some());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn stale_responses_never_overwrite_newer_ones() {
        let (system, provider) = start_system(10_000);

        provider.respond_ok("pertanyaan lama", Duration::from_millis(200), "jawaban lama", None);
        provider.respond_ok("pertanyaan cepat", Duration::from_millis(10), "jawaban cepat", None);

        let assistant = system.assistant_client.clone();
        let slow = tokio::spawn(async move { assistant.ask("pertanyaan lama").await });
        tokio::time::sleep(Duration::from_millis(20)).await;
        let fast = system.assistant_client.ask("pertanyaan cepat").await.unwrap();
        assert_eq!(fast.recommendation_text, "jawaban cepat");

        // Each caller still gets its own answer...
        let slow = slow.await.unwrap().unwrap();
        assert_eq!(slow.recommendation_text, "jawaban lama");

        // ...but the display state tracks the most recently issued request,
        // even though its response arrived first.
        let current = system.assistant_client.current().await.unwrap().unwrap();
        assert_eq!(current.recommendation_text, "jawaban cepat");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_the_fallback() {
        let (system, provider) = start_system(10_000);

        provider.respond_err("mesinnya rusak", Duration::from_millis(1), "boom");

        let answer = system.assistant_client.ask("mesinnya rusak?").await.unwrap();
        assert_eq!(answer, crate::assistant::Recommendation::fallback());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn admin_delete_flows_through_catalog_then_cart() {
        // Mock-level variant of the cleanup rule: verify the exact actor
        // conversation instead of the end state.
        let (menu_inner, mut menu_rx) = create_mock_client(10);
        let (user_inner, _user_rx) = create_mock_client::<User>(10);
        let (cart_tx, mut cart_rx) = mpsc::channel(10);

        let admin = AdminClient::new(
            MenuClient::new(menu_inner),
            UserClient::new(user_inner),
            CartClient::new(cart_tx),
        );

        let delete_task = tokio::spawn(async move { admin.delete_menu_item(7).await });

        let (id, responder) = expect_delete(&mut menu_rx).await.expect("Expected Delete");
        assert_eq!(id, 7);
        responder.send(Ok(())).unwrap();

        match cart_rx.recv().await {
            Some(CartRequest::Remove { item_id, respond_to }) => {
                assert_eq!(item_id, 7);
                let _ = respond_to.send(Ok(()));
            }
            other => panic!("Unexpected cart message: {:?}", other),
        }

        assert!(delete_task.await.unwrap().is_ok());
    }
}
