//! Display labels and badge colors for order statuses.
//!
//! Kept as static tables rather than on [`OrderStatus`] so presentation can be
//! swapped without touching the lifecycle type.

use super::OrderStatus;

/// Russian display label per status, in lifecycle order.
pub const STATUS_LABELS: [(OrderStatus, &str); 6] = [
    (OrderStatus::New, "Новый"),
    (OrderStatus::Confirmed, "Подтвержден"),
    (OrderStatus::Processing, "В обработке"),
    (OrderStatus::Shipped, "Отправлен"),
    (OrderStatus::Delivered, "Доставлен"),
    (OrderStatus::Cancelled, "Отменен"),
];

/// Hex badge color per status, in lifecycle order.
pub const STATUS_COLORS: [(OrderStatus, &str); 6] = [
    (OrderStatus::New, "#3b82f6"),
    (OrderStatus::Confirmed, "#f59e0b"),
    (OrderStatus::Processing, "#8b5cf6"),
    (OrderStatus::Shipped, "#06b6d4"),
    (OrderStatus::Delivered, "#10b981"),
    (OrderStatus::Cancelled, "#ef4444"),
];

pub fn label(status: OrderStatus) -> &'static str {
    STATUS_LABELS[status as usize].1
}

pub fn color(status: OrderStatus) -> &'static str {
    STATUS_COLORS[status as usize].1
}

/// Text of the note written when a status changes without a caller note.
pub fn status_change_text(from: OrderStatus, to: OrderStatus) -> String {
    format!("Статус изменен с \"{}\" на \"{}\"", label(from), label(to))
}
