use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("You cannot delete the currently logged in user")]
    CannotDeleteSelf,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Validation(msg) => UserError::ValidationError(msg),
            FrameworkError::ChannelClosed => {
                UserError::ActorCommunicationError("Actor channel closed".to_string())
            }
        }
    }
}
