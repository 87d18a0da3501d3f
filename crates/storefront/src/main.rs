//! # Storefront demo
//!
//! Walks one order through its lifecycle and exercises the wishlist.
//!
//! Storage comes from the TOML file named by `STOREFRONT_CONFIG`; without it
//! everything stays in memory.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! STOREFRONT_CONFIG=storefront.toml RUST_LOG=debug cargo run
//! ```

use resource_actor::tracing::setup_tracing;
use storefront::config::StoreConfig;
use storefront::lifecycle::StorefrontSystem;
use storefront::model::{labels, CustomerInfo, OrderCreate, OrderStatus, Pricing};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var("STOREFRONT_CONFIG") {
        Ok(path) => StoreConfig::from_file(&path)
            .await
            .map_err(|e| format!("Failed to load {path}: {e}"))?,
        Err(_) => StoreConfig::default(),
    };

    info!("Starting storefront");
    let system = StorefrontSystem::from_config(&config);
    let orders = &system.order_client;

    let params = OrderCreate {
        order_number: "A-1001".to_string(),
        order_form: CustomerInfo::new("Анна Петрова", "+7 900 123-45-67")
            .with_email("anna@example.com"),
        cart_items: serde_json::json!([{ "id": 7, "name": "Чайник", "quantity": 1 }]),
        price_calculation: Some(Pricing::with_total(5000.0)),
    };

    let span = tracing::info_span!("order_lifecycle", order_number = %params.order_number);
    let order = async {
        let order = orders.create_order(params).await.map_err(|e| e.to_string())?;

        for status in [
            OrderStatus::Confirmed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            orders
                .set_status(order.id.clone(), status, None)
                .await
                .map_err(|e| e.to_string())?;
            info!(status = labels::label(status), "Status updated");
        }

        orders
            .add_note(order.id.clone(), "Клиент доволен".to_string())
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    match order {
        Some(order) => info!(order_id = %order.id, notes = order.notes.len(), "Order completed"),
        None => warn!("Order disappeared"),
    }

    let stats = orders.stats().await.map_err(|e| e.to_string())?;
    info!(
        total = stats.total,
        delivered = stats.count(OrderStatus::Delivered),
        revenue = stats.total_revenue,
        "Order stats"
    );

    let wishlist = &system.wishlist_client;
    for sku in ["sku-1", "sku-2", "sku-1"] {
        let added = wishlist.add(sku.into()).await.map_err(|e| e.to_string())?;
        info!(sku, added, "Wishlist add");
    }
    let count = wishlist.count().await.map_err(|e| e.to_string())?;
    info!(count, "Wishlist size");

    system.shutdown().await?;

    info!("Storefront demo finished");
    Ok(())
}
