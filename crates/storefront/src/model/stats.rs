use super::{Order, OrderStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many orders `recent_orders` holds.
pub const RECENT_ORDERS: usize = 5;

/// Dashboard summary of the order collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: usize,
    /// Count per status. Every status is present, zero counts included.
    pub by_status: BTreeMap<OrderStatus, usize>,
    /// Sum of `pricing.total` over delivered orders.
    pub total_revenue: f64,
    /// First orders in store order, i.e. the most recently created.
    pub recent_orders: Vec<Order>,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut by_status: BTreeMap<OrderStatus, usize> =
            OrderStatus::ALL.into_iter().map(|status| (status, 0)).collect();
        let mut total_revenue = 0.0;

        for order in orders {
            *by_status.entry(order.status).or_default() += 1;
            if order.status == OrderStatus::Delivered {
                total_revenue += order.revenue();
            }
        }

        Self {
            total: orders.len(),
            by_status,
            total_revenue,
            recent_orders: orders.iter().take(RECENT_ORDERS).cloned().collect(),
        }
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
