//! # Regi Terminal Library
//!
//! Core library for the Regi POS operator terminal.
//!
//! ## Module Organization
//! ```text
//! regi_terminal/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── config.rs       ◄─── Terminal configuration (file + env + CLI)
//! ├── commands.rs     ◄─── Action handlers driving the checkout session
//! ├── repl.rs         ◄─── Operator command parsing & input loop
//! ├── render.rs       ◄─── Screen formatting (list, product slot, popup)
//! └── error.rs        ◄─── Terminal error type
//! ```
//!
//! ## Session Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Terminal Session Wiring                             │
//! │                                                                         │
//! │  stdin line ──► repl::parse ──► commands::* ──┬─► CheckoutSession       │
//! │                                               │   (pure transitions)    │
//! │                                               │                         │
//! │                                               └─► dyn CheckoutApi       │
//! │                                                   (HTTP, awaited        │
//! │                                                    between begin/apply) │
//! │                                                                         │
//! │  After every action the current session state is rendered: the         │
//! │  product slot, the purchase list with live totals, or the settled      │
//! │  total popup.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod repl;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use regi_backend::{CheckoutApi, HttpBackend};
use regi_core::CheckoutSession;

use crate::config::TerminalConfig;
use crate::error::TerminalError;

/// Runs the operator terminal until `quit` or end of input.
pub async fn run(config: TerminalConfig) -> Result<(), TerminalError> {
    info!(
        base_url = %config.backend.base_url,
        store = %config.identity.store_code,
        pos = %config.identity.pos_id,
        "starting Regi POS terminal"
    );

    let backend: Arc<dyn CheckoutApi> = Arc::new(HttpBackend::new(&config.backend)?);
    let session = CheckoutSession::with_identity(config.identity.clone());

    repl::run_loop(session, backend).await
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=regi=trace` - Show trace for regi crates only
/// - Default: WARN, so log lines do not interleave with the register screen
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,regi=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
