//! Command-line arguments for the service binary

use crate::config::{TransferConfig, DEFAULT_LOCK_TIMEOUT_MS};
use clap::Parser;
use std::net::SocketAddr;

/// Serve an in-memory account ledger with atomic concurrent transfers
#[derive(Parser, Debug)]
#[command(name = "transfer-ledger")]
#[command(about = "In-memory account ledger with atomic concurrent transfers", long_about = None)]
pub struct CliArgs {
    /// Address the HTTP server listens on
    #[arg(
        long = "bind",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080",
        help = "Socket address to bind, e.g. 0.0.0.0:8080"
    )]
    pub bind: SocketAddr,

    /// Bound on each lock acquisition attempt, in milliseconds
    #[arg(
        long = "lock-timeout-ms",
        value_name = "MILLIS",
        default_value_t = DEFAULT_LOCK_TIMEOUT_MS,
        help = "Maximum wait for an account lock before a transfer fails"
    )]
    pub lock_timeout_ms: u64,
}

impl CliArgs {
    /// Engine configuration derived from the arguments
    pub fn to_transfer_config(&self) -> TransferConfig {
        TransferConfig::with_timeout_ms(self.lock_timeout_ms)
    }
}

/// Parse command-line arguments
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
