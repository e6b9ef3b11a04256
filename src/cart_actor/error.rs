use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
