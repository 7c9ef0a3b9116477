//! Transfer Ledger service binary
//!
//! Serves the account ledger over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --bind 127.0.0.1:8080 --lock-timeout-ms 1000
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=transfer_ledger=debug`).

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use transfer_ledger::api::{self, AppState};
use transfer_ledger::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState::new(args.to_transfer_config()));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        lock_timeout_ms = args.lock_timeout_ms,
        "transfer ledger listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
