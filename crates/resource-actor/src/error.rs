//! # Runtime Errors
//!
//! Errors raised by the actor runtime itself and by the persistence layer.
//! Domain crates wrap these into their own error enums via
//! [`ActorClient::map_error`](crate::ActorClient::map_error).

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by a [`KeyValueStore`](crate::persist::KeyValueStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// No value is stored under the requested key.
    #[error("Not found")]
    NotFound,
    /// The slot payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The backend failed (I/O, permissions, ...).
    #[error("Backend error: {0}")]
    Backend(String),
}
