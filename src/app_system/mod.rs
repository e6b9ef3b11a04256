//! System orchestration, startup, and shutdown logic.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::*;
pub use tracing::*;
