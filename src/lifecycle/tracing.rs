//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter for the binary.
//! The library itself only emits events; it never installs a subscriber.
//!
//! Log levels are read from `RUST_LOG`:
//!
//! ```bash
//! # Populated configurations only
//! RUST_LOG=info cargo run
//!
//! # Every update payload and the resulting value
//! RUST_LOG=debug cargo run
//!
//! # Only the update layer
//! RUST_LOG=opsmgr_config::config=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` an update shows up as:
//!
//! ```text
//! DEBUG apply_update: Update kind="alert" update=AlertUpdate { .. }
//! DEBUG apply_update: Update ok kind="alert" entity=AlertConfiguration { .. }
//! ```
//!
//! A rejected language pack id is logged once at `warn` with the offending field.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
