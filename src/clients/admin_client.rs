use std::path::PathBuf;
use tracing::{error, info, instrument, warn};

use super::{CartClient, MenuClient, UserClient};
use crate::domain::{MenuCategory, MenuItem, MenuItemCreate, MenuItemPatch, Role, User, UserCreate, UserPatch};
use crate::images;
use crate::menu_actor::MenuError;
use crate::user_actor::UserError;

/// Image reference for items created without a picture.
const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/400/300";

/// What the menu form submits. An `id` means edit-in-place; no `id` means
/// create. A local image file wins over a URL; neither leaves the existing
/// image alone (edit) or falls back to the placeholder (create).
#[derive(Debug, Clone)]
pub struct MenuItemDraft {
    pub id: Option<u32>,
    pub name: String,
    pub price: u64,
    pub category: MenuCategory,
    pub image_file: Option<PathBuf>,
    pub image_url: Option<String>,
}

/// What the user form submits. The password is optional on edit: absent
/// means keep the stored one.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub id: Option<u32>,
    pub username: String,
    pub password: Option<String>,
    pub role: Role,
}

/// Admin surface over the catalog, user, and cart actors.
///
/// This client handles the cross-actor flows: upsert-by-optional-id,
/// image conversion, referential cleanup of the cart on item deletion, and
/// the guard against deleting the session's own user.
#[derive(Clone)]
pub struct AdminClient {
    menu: MenuClient,
    users: UserClient,
    cart: CartClient,
}

impl AdminClient {
    pub fn new(menu: MenuClient, users: UserClient, cart: CartClient) -> Self {
        Self { menu, users, cart }
    }

    #[instrument(skip(self, draft), fields(item_id = ?draft.id, item_name = %draft.name))]
    pub async fn save_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItem, MenuError> {
        if draft.name.trim().is_empty() || draft.price == 0 {
            warn!("Menu form submitted without name or price");
            return Err(MenuError::ValidationError(
                "name and price are required".to_string(),
            ));
        }

        let image_url = match &draft.image_file {
            Some(path) => Some(images::file_to_data_uri(path).map_err(|e| {
                error!(error = %e, "Image conversion failed");
                MenuError::ValidationError(format!("could not read image: {e}"))
            })?),
            None => draft.image_url.clone(),
        };

        match draft.id {
            Some(id) => {
                let item = self
                    .menu
                    .update_item(
                        id,
                        MenuItemPatch {
                            name: Some(draft.name),
                            price: Some(draft.price),
                            category: Some(draft.category),
                            image_url,
                        },
                    )
                    .await?;
                info!(item_id = id, "Menu item updated");
                Ok(item)
            }
            None => {
                let id = self
                    .menu
                    .create_item(MenuItemCreate {
                        name: draft.name,
                        price: draft.price,
                        category: draft.category,
                        image_url: image_url.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
                    })
                    .await?;
                info!(item_id = id, "Menu item created");
                self.menu
                    .get_item(id)
                    .await?
                    .ok_or_else(|| MenuError::NotFound(id.to_string()))
            }
        }
    }

    /// Deleting a catalog item also removes any matching cart line, so the
    /// cart never references a nonexistent item.
    #[instrument(skip(self))]
    pub async fn delete_menu_item(&self, id: u32) -> Result<(), MenuError> {
        self.menu.delete_item(id).await?;
        info!(item_id = id, "Menu item deleted");

        self.cart
            .remove(id)
            .await
            .map_err(|e| MenuError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }

    #[instrument(skip(self, draft), fields(user_id = ?draft.id, username = %draft.username))]
    pub async fn save_user(&self, draft: UserDraft) -> Result<User, UserError> {
        if draft.username.trim().is_empty() {
            warn!("User form submitted without username");
            return Err(UserError::ValidationError(
                "username and password are required".to_string(),
            ));
        }

        match draft.id {
            Some(id) => {
                let user = self
                    .users
                    .update_user(
                        id,
                        UserPatch {
                            username: Some(draft.username),
                            password: draft.password.filter(|p| !p.is_empty()),
                            role: Some(draft.role),
                        },
                    )
                    .await?;
                info!(user_id = id, "User updated");
                Ok(user)
            }
            None => {
                let password = match draft.password.filter(|p| !p.is_empty()) {
                    Some(password) => password,
                    None => {
                        warn!("New user submitted without password");
                        return Err(UserError::ValidationError(
                            "username and password are required".to_string(),
                        ));
                    }
                };
                let id = self
                    .users
                    .create_user(UserCreate {
                        username: draft.username,
                        password,
                        role: draft.role,
                    })
                    .await?;
                info!(user_id = id, "User created");
                self.users
                    .get_user(id)
                    .await?
                    .ok_or_else(|| UserError::NotFound(id.to_string()))
            }
        }
    }

    /// The session's own account cannot be deleted; the store is left
    /// untouched and the caller shows the warning.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: u32, current_user_id: u32) -> Result<(), UserError> {
        if id == current_user_id {
            warn!(user_id = id, "Rejected attempt to delete the logged in user");
            return Err(UserError::CannotDeleteSelf);
        }
        self.users.delete_user(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
