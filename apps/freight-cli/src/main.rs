//! # Freight Widget Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main.rs ────► parses arguments, starts the runtime                     │
//! │  lib.rs ─────► logging, config, client, prompt loop                     │
//! │  commands/ ──► postal_input, change_delivery, calculate_freight, ...    │
//! │  state/ ─────► WidgetState                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    freight_cli_lib::run(freight_cli_lib::Cli::parse()).await
}
