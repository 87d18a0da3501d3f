//! Error types for the Wishlist actor.

use resource_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WishlistError {
    /// The wishlist actor has stopped or dropped the request.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The actor refused the request.
    #[error("Wishlist request rejected: {0}")]
    Rejected(String),
}

impl From<FrameworkError> for WishlistError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                WishlistError::ActorCommunicationError(e.to_string())
            }
            FrameworkError::AlreadyExists(_) | FrameworkError::Entity(_) => {
                WishlistError::Rejected(e.to_string())
            }
        }
    }
}
