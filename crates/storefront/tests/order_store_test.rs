use resource_actor::persist::{KeyValueStore, MemoryStore, Slot};
use resource_actor::ActorClient;
use std::sync::Arc;
use storefront::clients::OrderClient;
use storefront::model::{
    labels, CustomerInfo, NoteKind, Order, OrderCreate, OrderStatus, Pricing,
};
use storefront::order_actor;

fn checkout(number: &str, name: &str, phone: &str, total: Option<f64>) -> OrderCreate {
    OrderCreate {
        order_number: number.to_string(),
        order_form: CustomerInfo::new(name, phone),
        cart_items: serde_json::json!([{ "id": 1, "quantity": 1 }]),
        price_calculation: total.map(Pricing::with_total),
    }
}

fn start(backend: Arc<dyn KeyValueStore>) -> OrderClient {
    let (actor, client) = order_actor::new(Slot::new(backend, "orders"), 16);
    tokio::spawn(actor.run());
    OrderClient::new(client)
}

fn start_in_memory() -> OrderClient {
    start(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn test_create_starts_new_with_no_notes() {
    let client = start_in_memory();

    let order = client
        .create_order(checkout("A-1001", "Анна", "+79001234567", Some(5000.0)))
        .await
        .unwrap();

    assert_eq!(order.id.0, "A-1001");
    assert_eq!(order.status, OrderStatus::New);
    assert!(order.notes.is_empty());
    assert_eq!(order.created_at, order.updated_at);
}

#[tokio::test]
async fn test_status_change_appends_one_note() {
    let client = start_in_memory();
    let order = client
        .create_order(checkout("A-1001", "Анна", "+79001234567", None))
        .await
        .unwrap();

    let updated = client
        .set_status(order.id.clone(), OrderStatus::Confirmed, None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Confirmed);
    assert_eq!(updated.notes.len(), 1);
    assert_eq!(updated.notes[0].kind, NoteKind::StatusChange);
    assert_eq!(
        updated.notes[0].text,
        labels::status_change_text(OrderStatus::New, OrderStatus::Confirmed)
    );
    assert!(updated.updated_at >= order.updated_at);

    let same = client
        .set_status(order.id.clone(), OrderStatus::Confirmed, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(same.notes.len(), 1);
    assert!(same.updated_at >= updated.updated_at);

    let with_note = client
        .set_status(order.id.clone(), OrderStatus::Confirmed, Some("Перезвонить".into()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(with_note.notes.len(), 2);
    assert_eq!(with_note.notes[1].text, "Перезвонить");
}

#[tokio::test]
async fn test_delivered_revenue_scenario() {
    let client = start_in_memory();
    let order = client
        .create_order(checkout("A-1001", "Анна", "+79001234567", Some(5000.0)))
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::New);

    client
        .set_status(order.id, OrderStatus::Delivered, None)
        .await
        .unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total_revenue, 5000.0);
    for status in OrderStatus::ALL {
        let expected = usize::from(status == OrderStatus::Delivered);
        assert_eq!(stats.count(status), expected, "count for {status}");
    }
    assert_eq!(stats.by_status.len(), 6);
    assert_eq!(stats.by_status.values().sum::<usize>(), stats.total);
}

#[tokio::test]
async fn test_revenue_ignores_undelivered_and_missing_totals() {
    let client = start_in_memory();
    for (number, total) in [("A-1", Some(100.0)), ("A-2", None), ("A-3", Some(250.0))] {
        client
            .create_order(checkout(number, "Покупатель", "000", total))
            .await
            .unwrap();
    }
    client
        .set_status("A-1".into(), OrderStatus::Delivered, None)
        .await
        .unwrap();
    client
        .set_status("A-2".into(), OrderStatus::Delivered, None)
        .await
        .unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.total_revenue, 100.0);
    assert_eq!(stats.recent_orders.len(), 3);
    assert_eq!(stats.recent_orders[0].order_number, "A-3");
}

#[tokio::test]
async fn test_search_keeps_most_recent_first() {
    let client = start_in_memory();
    client
        .create_order(checkout("A-1001", "Анна Петрова", "+7 900 111-22-33", None))
        .await
        .unwrap();
    client
        .create_order(checkout("A-1002", "Иван Сидоров", "+7 900 444-55-66", None))
        .await
        .unwrap();
    client
        .create_order(checkout("B-2001", "Ольга", "+7 900 777-88-99", None))
        .await
        .unwrap();

    let numbers = |orders: Vec<Order>| -> Vec<String> {
        orders.into_iter().map(|o| o.order_number).collect()
    };

    assert_eq!(numbers(client.search("A-100").await.unwrap()), vec!["A-1002", "A-1001"]);
    assert_eq!(numbers(client.search("a-100").await.unwrap()), vec!["A-1002", "A-1001"]);
    assert_eq!(numbers(client.search("ИВАН").await.unwrap()), vec!["A-1002"]);
    assert_eq!(numbers(client.search("777-88").await.unwrap()), vec!["B-2001"]);
    assert!(client.search("нет такого").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_by_status_filters_in_store_order() {
    let client = start_in_memory();
    for number in ["A-1", "A-2", "A-3"] {
        client
            .create_order(checkout(number, "Покупатель", "000", None))
            .await
            .unwrap();
    }
    client
        .set_status("A-1".into(), OrderStatus::Shipped, None)
        .await
        .unwrap();
    client
        .set_status("A-3".into(), OrderStatus::Shipped, None)
        .await
        .unwrap();

    let shipped = client.get_by_status(OrderStatus::Shipped).await.unwrap();
    let numbers: Vec<&str> = shipped.iter().map(|o| o.order_number.as_str()).collect();
    assert_eq!(numbers, vec!["A-3", "A-1"]);
    assert_eq!(client.get_by_status(OrderStatus::New).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_id_leaves_collection_unchanged() {
    let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let client = start(backend.clone());
    client
        .create_order(checkout("A-1", "Покупатель", "000", None))
        .await
        .unwrap();
    let before = client.orders().await.unwrap();
    let slot_before = backend.get_bytes("orders").await.unwrap();

    assert!(client.add_note("ghost".into(), "x".into()).await.unwrap().is_none());
    assert!(client
        .set_status("ghost".into(), OrderStatus::Cancelled, None)
        .await
        .unwrap()
        .is_none());

    assert_eq!(client.orders().await.unwrap(), before);
    assert_eq!(backend.get_bytes("orders").await.unwrap(), slot_before);
}

#[tokio::test]
async fn test_delete_then_lookup_is_not_found() {
    let client = start_in_memory();
    let order = client
        .create_order(checkout("A-1", "Покупатель", "000", None))
        .await
        .unwrap();

    // Deleting is allowed whatever the status.
    client
        .set_status(order.id.clone(), OrderStatus::Processing, None)
        .await
        .unwrap();
    let removed = client.delete_order(order.id.clone()).await.unwrap();
    assert_eq!(removed.map(|o| o.id), Some(order.id.clone()));

    assert!(client.get_by_id(order.id.clone()).await.unwrap().is_none());
    assert!(client.delete_order(order.id).await.unwrap().is_none());
    assert!(client.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_note_records_manual_note() {
    let client = start_in_memory();
    let order = client
        .create_order(checkout("A-1", "Покупатель", "000", None))
        .await
        .unwrap();

    let noted = client
        .add_note(order.id.clone(), "Позвонить перед доставкой".into())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(noted.status, OrderStatus::New);
    assert_eq!(noted.notes.len(), 1);
    assert_eq!(noted.notes[0].kind, NoteKind::Note);
    assert_eq!(noted.notes[0].text, "Позвонить перед доставкой");
    assert!(noted.updated_at >= order.updated_at);
}

#[tokio::test]
async fn test_slot_holds_camel_case_array() {
    let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let client = start(backend.clone());
    client
        .create_order(checkout("A-1", "Покупатель", "000", Some(10.0)))
        .await
        .unwrap();
    client
        .create_order(checkout("A-2", "Покупатель", "000", None))
        .await
        .unwrap();

    let bytes = backend.get_bytes("orders").await.unwrap();
    let slot: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let array = slot.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["orderNumber"], "A-2");
    assert_eq!(array[1]["pricing"]["total"], 10.0);
    assert_eq!(array[1]["status"], "new");
    assert!(array[1]["createdAt"].is_string());
}

#[tokio::test]
async fn test_repeated_order_number_is_updated_and_deleted_everywhere() {
    let client = start_in_memory();
    client
        .create_order(checkout("A-1", "first", "000", None))
        .await
        .unwrap();
    client
        .create_order(checkout("A-1", "second", "111", None))
        .await
        .unwrap();

    let updated = client
        .set_status("A-1".into(), OrderStatus::Shipped, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.customer_info.name, "second");

    let statuses: Vec<OrderStatus> = client
        .orders()
        .await
        .unwrap()
        .iter()
        .map(|o| o.status)
        .collect();
    assert_eq!(statuses, vec![OrderStatus::Shipped, OrderStatus::Shipped]);

    client
        .add_note("A-1".into(), "Проверить адрес".into())
        .await
        .unwrap();
    let orders = client.orders().await.unwrap();
    assert!(orders.iter().all(|o| o.notes.len() == 2));

    client.delete_order("A-1".into()).await.unwrap();
    assert!(client.get_by_id("A-1".into()).await.unwrap().is_none());
    assert!(client.orders().await.unwrap().is_empty());
}
