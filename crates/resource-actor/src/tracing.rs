//! # Observability & Tracing
//!
//! The runtime logs through `tracing` with structured fields:
//!
//! - **Actor lifecycle**: `Actor started` (with the slot key and loaded size), `Shutdown`
//! - **Operations**: `Create`, `Get`, `List`, `Action`, `Delete`, `Cleared`
//! - **Persistence**: `Load failed, starting empty` and `Persist failed` at `error` level
//!
//! Every line carries `entity_type` (e.g. `Order`, `WishlistEntry`) so the stores can be
//! told apart without module paths.
//!
//! ```bash
//! RUST_LOG=info cargo run      # state changes only
//! RUST_LOG=debug cargo run     # full payloads and reads
//! ```
//!
//! With `RUST_LOG=info` an order walking through its lifecycle looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order" slot="orders" size=0
//! INFO create_order: Created entity_type="Order" id=A-1001 size=1
//! INFO set_status: Action ok entity_type="Order" id=A-1001
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the start of a binary. Tests should not call it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the store
        .compact()
        .init();
}
