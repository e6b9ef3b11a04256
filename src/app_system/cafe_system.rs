use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::assistant::{AssistantService, RecommendationProvider, Recommender};
use crate::cart_actor::CartService;
use crate::clients::{AdminClient, AssistantClient, CartClient, MenuClient, UserClient};
use crate::config::Config;
use crate::data::{seed_menu, seed_users};
use crate::domain::{MenuItem, User};

/// The main application system that wires all actors together.
///
/// Responsible for seeding the static data, starting the actors, and
/// shutting everything down in order.
pub struct CafeSystem {
    pub menu_client: MenuClient,
    pub user_client: UserClient,
    pub cart_client: CartClient,
    pub assistant_client: AssistantClient,
    pub admin_client: AdminClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    pub fn new(config: &Config, provider: Arc<dyn RecommendationProvider>) -> Self {
        // 1. Menu catalog, seeded with the static menu. Fresh IDs continue
        //    past the seeded ones.
        let menu_seed = seed_menu();
        let next_menu_id = counter_after(menu_seed.iter().map(|i| i.id).max().unwrap_or(0));
        let (menu_actor, menu_resource_client) =
            ResourceActor::<MenuItem>::with_seed(32, next_menu_id, menu_seed);
        let menu_client = MenuClient::new(menu_resource_client);
        let menu_handle = tokio::spawn(menu_actor.run());

        // 2. User accounts, seeded with the two built-in logins.
        let user_seed = seed_users();
        let next_user_id = counter_after(user_seed.iter().map(|u| u.id).max().unwrap_or(0));
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::with_seed(32, next_user_id, user_seed);
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        // 3. Assistant, reading the live catalog through its own client.
        let (assistant_service, assistant_client) = AssistantService::new(
            32,
            Recommender::new(provider),
            menu_client.clone(),
            config.quiet_period(),
        );
        let assistant_handle = tokio::spawn(assistant_service.run());

        // 4. Cart, publishing snapshots to the assistant.
        let (cart_service, cart_client) = CartService::new(32, assistant_client.clone());
        let cart_handle = tokio::spawn(cart_service.run());

        let admin_client = AdminClient::new(
            menu_client.clone(),
            user_client.clone(),
            cart_client.clone(),
        );

        Self {
            menu_client,
            user_client,
            cart_client,
            assistant_client,
            admin_client,
            handles: vec![menu_handle, user_handle, assistant_handle, cart_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // The assistant keeps a sender to itself for fetch results, so it
        // needs an explicit stop; the others exit when their channels close.
        if let Err(e) = self.assistant_client.shutdown().await {
            error!(error = %e, "Assistant shutdown failed");
        }

        drop(self.admin_client);
        drop(self.assistant_client);
        drop(self.cart_client);
        drop(self.menu_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn counter_after(last_used: u32) -> impl Fn() -> u32 + Send + Sync {
    let counter = Arc::new(AtomicU32::new(last_used + 1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}
