//! # Mock Clients for Testing
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of by an actor. Use it to
//! test domain clients (the code *around* a `ResourceClient`) quickly and
//! deterministically, and to inject failures that a real actor would rarely
//! produce.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, answers are scripted | real ordered store + slot |
//! | **Error injection** | `return_err(...)` | needs a failing backend |
//! | **Use case** | client wrappers | the store itself, full system |
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{FrameworkError, ResourceEntity};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Tag { name: String }
//! #[derive(Debug, Clone)] enum TagAction {}
//! #[derive(Debug)] enum TagQuery {}
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! impl ResourceEntity for Tag {
//!     type Id = String; type Create = String; type Action = TagAction;
//!     type ActionResult = (); type Query = TagQuery; type Error = TagError;
//!     const SLOT_KEY: &'static str = "tags";
//!     fn id(&self) -> &String { &self.name }
//!     fn from_create_params(name: String) -> Result<Self, TagError> { Ok(Self { name }) }
//!     fn handle_action(&mut self, action: TagAction) -> Result<(), TagError> { match action {} }
//!     fn matches(&self, query: &TagQuery) -> bool { match *query {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get("sale".to_string())
//!         .return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let result = client.get("sale".to_string()).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For assertions on the exact request payload, use [`create_mock_client`]
//! together with [`expect_create`], [`expect_get`] or [`expect_action`].

use crate::client::ResourceClient;
use crate::entity::ResourceEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{broadcast, mpsc, oneshot};

/// An expected request and the scripted answer.
enum Expectation<T: ResourceEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<Option<(T::ActionResult, T)>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Clear {
        response: Result<usize, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ResourceEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong kind or wrong id) panics the responder task, which the
/// caller observes as [`FrameworkError::ActorDropped`] or a closed channel.
pub struct MockClient<T: ResourceEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ResourceEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ResourceEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let (changes, _) = broadcast::channel(16);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "Get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Action for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Delete for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Clear { respond_to }, Some(Expectation::Clear { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender, changes),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<(T::ActionResult, T)>> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_clear(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(|response| Expectation::Clear { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Completes an expectation with its scripted answer.
pub struct ExpectationBuilder<T: ResourceEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ResourceEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.make)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.make)(Err(error)));
    }
}

/// Creates a client and the receiver its requests land on.
///
/// Pair with [`expect_create`], [`expect_get`] and [`expect_action`] to
/// assert on request payloads and answer by hand.
pub fn create_mock_client<T: ResourceEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    let (changes, _) = broadcast::channel(16);
    (ResourceClient::new(sender, changes), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action.
#[allow(clippy::type_complexity)]
pub async fn expect_action<T: ResourceEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<Option<(T::ActionResult, T)>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
