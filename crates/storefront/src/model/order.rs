//! Order records and the status lifecycle.
//!
//! Orders are persisted in the `orders` slot with camelCase field names, so a
//! collection written by the storefront front end loads unchanged.
//!
//! ```text
//! new -> confirmed -> processing -> shipped -> delivered
//!   \________\____________\____________\-----> cancelled
//! ```
//!
//! `delivered` and `cancelled` are terminal in practice, but any status may be
//! set to any other status; nothing here enforces the arrows.

use super::labels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Display};
use uuid::Uuid;

/// Order identifier, assigned by checkout (equal to the order number).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fulfilment stage of an order. Declaration order is lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::New,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// `delivered` or `cancelled`. Informational only.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer details captured by the checkout form.
///
/// Only `name`, `phone` and `email` are read (by search); any other form field
/// is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomerInfo {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
            extra: Map::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Price calculation produced by checkout. Only `total` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pricing {
    pub fn with_total(total: f64) -> Self {
        Self {
            total: Some(total),
            extra: Map::new(),
        }
    }
}

/// Note identifier. New notes get a UUID; numeric ids written by the
/// storefront front end are still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Uuid(Uuid),
    Legacy(u64),
}

impl NoteId {
    pub fn generate() -> Self {
        NoteId::Uuid(Uuid::new_v4())
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Uuid(id) => write!(f, "{id}"),
            NoteId::Legacy(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Written by a status transition.
    StatusChange,
    /// Added by hand.
    Note,
}

/// Timestamped annotation on an order. Notes are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderNote {
    pub id: NoteId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: NoteKind,
}

impl OrderNote {
    fn new(text: String, kind: NoteKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::generate(),
            text,
            timestamp,
            kind,
        }
    }
}

/// Payload handed over by checkout when an order is placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub order_number: String,
    pub order_form: CustomerInfo,
    #[serde(default)]
    pub cart_items: Value,
    #[serde(default)]
    pub price_calculation: Option<Pricing>,
}

/// A customer order tracked from placement through fulfilment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub status: OrderStatus,
    pub customer_info: CustomerInfo,
    #[serde(default)]
    pub items: Value,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Vec<OrderNote>,
}

impl Order {
    /// Builds a fresh order: status `new`, no notes, `created_at == updated_at == now`.
    pub fn new(params: OrderCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: OrderId(params.order_number.clone()),
            order_number: params.order_number,
            status: OrderStatus::New,
            customer_info: params.order_form,
            items: params.cart_items,
            pricing: params.price_calculation,
            created_at: now,
            updated_at: now,
            notes: Vec::new(),
        }
    }

    /// Moves the order to `status`.
    ///
    /// A `status_change` note is appended when `note` is non-empty or the
    /// status actually changes; its text is `note`, or a generated
    /// "from -> to" message. Setting the current status again with no note
    /// only bumps `updated_at`.
    pub fn set_status(
        &mut self,
        status: OrderStatus,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> Option<OrderNote> {
        let previous = self.status;
        self.status = status;
        self.touch(now);

        let note = note.filter(|text| !text.is_empty());
        if note.is_none() && previous == status {
            return None;
        }

        let text = note.unwrap_or_else(|| labels::status_change_text(previous, status));
        Some(self.push_note(text, NoteKind::StatusChange))
    }

    /// Appends a hand-written note.
    pub fn add_note(&mut self, text: String, now: DateTime<Utc>) -> OrderNote {
        self.touch(now);
        self.push_note(text, NoteKind::Note)
    }

    /// `pricing.total`, or 0 when absent.
    pub fn revenue(&self) -> f64 {
        self.pricing
            .as_ref()
            .and_then(|pricing| pricing.total)
            .unwrap_or(0.0)
    }

    /// Substring match used by search. `lowered` must already be lowercase.
    ///
    /// Order number, name and email compare case-insensitively; the phone is
    /// compared as stored.
    pub fn matches_text(&self, lowered: &str) -> bool {
        let customer = &self.customer_info;
        self.order_number.to_lowercase().contains(lowered)
            || customer.name.to_lowercase().contains(lowered)
            || customer.phone.contains(lowered)
            || customer
                .email
                .as_deref()
                .is_some_and(|email| email.to_lowercase().contains(lowered))
    }

    // updated_at never moves backwards, even if the wall clock does.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }

    fn push_note(&mut self, text: String, kind: NoteKind) -> OrderNote {
        let note = OrderNote::new(text, kind, self.updated_at);
        self.notes.push(note.clone());
        note
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn order(number: &str) -> Order {
        let params = OrderCreate {
            order_number: number.to_string(),
            order_form: CustomerInfo::new("Анна Петрова", "+7 900 123-45-67")
                .with_email("Anna@Example.com"),
            cart_items: serde_json::json!([{ "id": 1, "quantity": 2 }]),
            price_calculation: Some(Pricing::with_total(5000.0)),
        };
        Order::new(params, Utc::now())
    }

    #[test]
    fn test_new_order_starts_clean() {
        let order = order("A-1001");
        assert_eq!(order.id, OrderId::from("A-1001"));
        assert_eq!(order.status, OrderStatus::New);
        assert!(order.notes.is_empty());
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_status_change_writes_generated_note() {
        let mut order = order("A-1001");
        let later = order.updated_at + Duration::seconds(5);

        let note = order
            .set_status(OrderStatus::Confirmed, None, later)
            .expect("status changed");

        assert_eq!(note.kind, NoteKind::StatusChange);
        assert_eq!(note.text, "Статус изменен с \"Новый\" на \"Подтвержден\"");
        assert_eq!(order.updated_at, later);
        assert_eq!(note.timestamp, later);
        assert_eq!(order.notes.len(), 1);
    }

    #[test]
    fn test_same_status_without_note_only_touches() {
        let mut order = order("A-1001");
        let later = order.updated_at + Duration::seconds(1);

        assert!(order.set_status(OrderStatus::New, None, later).is_none());
        assert!(order.set_status(OrderStatus::New, Some(String::new()), later).is_none());
        assert!(order.notes.is_empty());
        assert_eq!(order.updated_at, later);
    }

    #[test]
    fn test_explicit_note_wins_even_without_change() {
        let mut order = order("A-1001");
        let note = order
            .set_status(OrderStatus::New, Some("Клиент перезвонит".into()), Utc::now())
            .expect("note supplied");
        assert_eq!(note.text, "Клиент перезвонит");
        assert_eq!(note.kind, NoteKind::StatusChange);
    }

    #[test]
    fn test_updated_at_never_goes_backwards() {
        let mut order = order("A-1001");
        let before = order.updated_at;
        order.add_note("late clock".into(), before - Duration::hours(1));
        assert_eq!(order.updated_at, before);
        assert_eq!(order.notes[0].timestamp, before);
    }

    #[test]
    fn test_terminal_orders_can_be_reopened() {
        let mut order = order("A-1001");
        order.set_status(OrderStatus::Cancelled, None, Utc::now());
        assert!(order.status.is_terminal());
        order.set_status(OrderStatus::Processing, None, Utc::now());
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.notes.len(), 2);
    }

    #[test]
    fn test_text_matching() {
        let order = order("A-1001");
        assert!(order.matches_text("a-10"));
        assert!(order.matches_text("анна"));
        assert!(order.matches_text("123-45"));
        assert!(order.matches_text("anna@example"));
        assert!(!order.matches_text("b-2"));
    }

    #[test]
    fn test_revenue_defaults_to_zero() {
        let mut order = order("A-1001");
        assert_eq!(order.revenue(), 5000.0);
        order.pricing = Some(Pricing::default());
        assert_eq!(order.revenue(), 0.0);
        order.pricing = None;
        assert_eq!(order.revenue(), 0.0);
    }

    #[test]
    fn test_reads_front_end_layout() {
        let json = r#"{
            "id": "A-1001",
            "orderNumber": "A-1001",
            "status": "shipped",
            "customerInfo": { "name": "Иван", "phone": "89001112233", "address": "Москва" },
            "items": [{ "id": 7, "quantity": 1 }],
            "pricing": { "subtotal": 4500, "delivery": 500, "total": 5000 },
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-02T08:30:00.000Z",
            "notes": [{ "id": 1714640000000, "text": "Передан курьеру", "timestamp": "2024-05-02T08:30:00.000Z", "type": "status_change" }]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.customer_info.extra["address"], "Москва");
        assert_eq!(order.revenue(), 5000.0);
        assert_eq!(order.notes[0].id, NoteId::Legacy(1714640000000));
        assert_eq!(order.notes[0].kind, NoteKind::StatusChange);

        let written = serde_json::to_value(&order).unwrap();
        assert_eq!(written["orderNumber"], "A-1001");
        assert_eq!(written["customerInfo"]["address"], "Москва");
        assert_eq!(written["pricing"]["subtotal"], 4500);
        assert_eq!(written["notes"][0]["type"], "status_change");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_str::<OrderStatus>("\"returned\"");
        assert!(result.is_err());
    }
}
