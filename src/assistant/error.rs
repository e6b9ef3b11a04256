use thiserror::Error;

/// Errors that can occur when talking to the assistant actor. The
/// recommendation itself never fails; only the channel can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssistantError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
