use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{User, UserCreate, UserPatch};

impl Entity for User {
    type Id = u32;
    type CreateParams = UserCreate;
    type Patch = UserPatch;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: UserCreate) -> Result<Self, FrameworkError> {
        if params.username.trim().is_empty() || params.password.is_empty() {
            return Err(FrameworkError::Validation(
                "username and password are required".to_string(),
            ));
        }
        Ok(Self {
            id,
            username: params.username,
            password: params.password,
            role: params.role,
        })
    }

    /// The password is only replaced when the patch carries one; an admin
    /// editing a user without typing a new password keeps the old one.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), FrameworkError> {
        if let Some(username) = patch.username {
            if username.trim().is_empty() {
                return Err(FrameworkError::Validation(
                    "username and password are required".to_string(),
                ));
            }
            self.username = username;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        Ok(())
    }
}
