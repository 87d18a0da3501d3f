//! # Generic Messages
//!
//! Request and notification types exchanged between `ResourceClient` and
//! `ResourceActor`.

use crate::entity::ResourceEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the lifecycle of a persisted resource: `Create`, the
/// reads (`Get`, `List`), entity-specific mutation (`Action`) and removal
/// (`Delete`, `Clear`). Operations addressed to an unknown id answer `None`
/// rather than an error.
#[derive(Debug)]
pub enum ResourceRequest<T: ResourceEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: Option<T::Query>,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<Option<(T::ActionResult, T)>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Clear {
        respond_to: Response<usize>,
    },
}

/// Notification broadcast to observers after a mutation has been applied
/// and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<Id> {
    Created(Id),
    Updated(Id),
    Deleted(Id),
    Cleared,
}
