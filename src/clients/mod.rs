//! Typed client handles over the actor channels. Clients are cheap to
//! clone and are the only way the rest of the crate talks to the actors.

pub mod macros;

pub mod admin_client;
pub mod assistant_client;
pub mod cart_client;
pub mod menu_client;
pub mod user_client;

pub use admin_client::{AdminClient, MenuItemDraft, UserDraft};
pub use assistant_client::AssistantClient;
pub use cart_client::CartClient;
pub use menu_client::MenuClient;
pub use user_client::UserClient;
