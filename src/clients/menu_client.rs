use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{MenuItem, MenuItemCreate, MenuItemPatch};
use crate::impl_basic_client;
use crate::menu_actor::MenuError;

/// Client for the menu catalog actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl_basic_client!(MenuClient, MenuItem, MenuError, item);

impl MenuClient {
    #[instrument(skip(self, params), fields(item_name = %params.name))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<u32, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(MenuError::from)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_item(&self, id: u32, patch: MenuItemPatch) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(MenuError::from)
    }
}
