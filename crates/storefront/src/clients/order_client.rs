//! # Order Client
//!
//! High-level API over the Order actor. Every method is a single request, so
//! each operation completes before the next one starts.
use crate::model::{Order, OrderCreate, OrderId, OrderStats, OrderStatus};
use crate::order_actor::{OrderAction, OrderError, OrderQuery};
use async_trait::async_trait;
use resource_actor::{ActorClient, Change, FrameworkError, ResourceClient};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Receives a [`Change`] after every persisted mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<Change<OrderId>> {
        self.inner.subscribe()
    }

    /// Places a new order at the front of the collection.
    #[instrument(skip(self, params), fields(order_number = %params.order_number))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending create_order to actor");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// Moves an order to `status`. `None` if the order does not exist.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        note: Option<String>,
    ) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        let outcome = self
            .inner
            .perform_action(id, OrderAction::SetStatus { status, note })
            .await
            .map_err(Self::map_error)?;
        Ok(outcome.map(|(_, order)| order))
    }

    /// Appends a note to an order. `None` if the order does not exist.
    #[instrument(skip(self))]
    pub async fn add_note(&self, id: OrderId, text: String) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        let outcome = self
            .inner
            .perform_action(id, OrderAction::AddNote(text))
            .await
            .map_err(Self::map_error)?;
        Ok(outcome.map(|(_, order)| order))
    }

    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    /// The whole collection, most recent first.
    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .list(Some(OrderQuery::Status(status)))
            .await
            .map_err(Self::map_error)
    }

    /// Orders whose number, customer name, phone or email contain `query`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .list(Some(OrderQuery::search(query)))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<OrderStats, OrderError> {
        let orders = self.list_all().await?;
        Ok(OrderStats::from_orders(&orders))
    }

    /// Removes an order regardless of status, returning it if it existed.
    pub async fn delete_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerInfo, NoteKind};
    use chrono::Utc;
    use resource_actor::mock::{create_mock_client, expect_action, MockClient};

    fn sample_order(number: &str) -> Order {
        Order::new(
            OrderCreate {
                order_number: number.to_string(),
                order_form: CustomerInfo::new("Мария", "89990001122"),
                cart_items: serde_json::json!([]),
                price_calculation: None,
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_set_status_sends_action_and_returns_order() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move {
            order_client
                .set_status("A-1".into(), OrderStatus::Shipped, Some("Курьер".into()))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId::from("A-1"));
        match action {
            OrderAction::SetStatus { status, note } => {
                assert_eq!(status, OrderStatus::Shipped);
                assert_eq!(note.as_deref(), Some("Курьер"));
            }
            other => panic!("Expected SetStatus, got {other:?}"),
        }

        let mut order = sample_order("A-1");
        let note = order.set_status(OrderStatus::Shipped, Some("Курьер".into()), Utc::now());
        responder.send(Ok(Some((note, order)))).unwrap();

        let updated = task.await.unwrap().unwrap().expect("order exists");
        assert_eq!(updated.status, OrderStatus::Shipped);
        assert_eq!(updated.notes[0].kind, NoteKind::StatusChange);
    }

    #[tokio::test]
    async fn test_unknown_order_is_none() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action("missing".into()).return_ok(None);
        mock.expect_get("missing".into()).return_ok(None);
        mock.expect_delete("missing".into()).return_ok(None);

        let client = OrderClient::new(mock.client());
        let noted = client.add_note("missing".into(), "hello".into()).await.unwrap();
        assert!(noted.is_none());
        assert!(client.get_by_id("missing".into()).await.unwrap().is_none());
        assert!(client.delete_order("missing".into()).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_stats_are_computed_from_listing() {
        let mut delivered = sample_order("A-2");
        delivered.status = OrderStatus::Delivered;
        delivered.pricing = Some(crate::model::Pricing::with_total(1200.0));

        let mut mock = MockClient::<Order>::new();
        mock.expect_list()
            .return_ok(vec![delivered, sample_order("A-1")]);

        let client = OrderClient::new(mock.client());
        let stats = client.stats().await.unwrap();

        assert_eq!(stats.total, 2);
        assert_eq!(stats.count(OrderStatus::Delivered), 1);
        assert_eq!(stats.count(OrderStatus::New), 1);
        assert_eq!(stats.total_revenue, 1200.0);
        mock.verify();
    }

    #[tokio::test]
    async fn test_actor_failure_maps_to_order_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_err(FrameworkError::ActorClosed);

        let client = OrderClient::new(mock.client());
        let result = client.create_order(OrderCreate {
            order_number: "A-1".to_string(),
            order_form: CustomerInfo::new("Мария", "89990001122"),
            cart_items: serde_json::json!([]),
            price_calculation: None,
        })
        .await;

        assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
        mock.verify();
    }
}
