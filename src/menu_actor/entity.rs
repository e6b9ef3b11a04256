use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{MenuItem, MenuItemCreate, MenuItemPatch};

impl Entity for MenuItem {
    type Id = u32;
    type CreateParams = MenuItemCreate;
    type Patch = MenuItemPatch;

    fn id(&self) -> &u32 {
        &self.id
    }

    /// Presence validation mirrors the admin form: a name and a non-zero
    /// price are required, nothing more.
    fn from_create_params(id: u32, params: MenuItemCreate) -> Result<Self, FrameworkError> {
        if params.name.trim().is_empty() || params.price == 0 {
            return Err(FrameworkError::Validation(
                "name and price are required".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            category: params.category,
            image_url: params.image_url,
        })
    }

    fn on_update(&mut self, patch: MenuItemPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(FrameworkError::Validation(
                    "name and price are required".to_string(),
                ));
            }
            self.name = name;
        }
        if let Some(price) = patch.price {
            if price == 0 {
                return Err(FrameworkError::Validation(
                    "name and price are required".to_string(),
                ));
            }
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        Ok(())
    }
}
