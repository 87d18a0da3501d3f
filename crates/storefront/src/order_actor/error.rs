//! Error types for the Order actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Unknown order ids are not errors; lookups and mutations answer `None`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order actor has stopped or dropped the request.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The actor refused the request.
    #[error("Order request rejected: {0}")]
    Rejected(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                OrderError::ActorCommunicationError(e.to_string())
            }
            FrameworkError::AlreadyExists(_) | FrameworkError::Entity(_) => {
                OrderError::Rejected(e.to_string())
            }
        }
    }
}
