use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during menu catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),
    #[error("Menu item validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::Validation(msg) => MenuError::ValidationError(msg),
            FrameworkError::ChannelClosed => {
                MenuError::ActorCommunicationError("Actor channel closed".to_string())
            }
        }
    }
}
