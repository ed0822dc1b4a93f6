//! # Freight Widget Library
//!
//! Controller for the storefront freight-quote widget, plus a terminal
//! front-end that drives it line by line.
//!
//! ## Module Organization
//! ```text
//! freight_cli_lib/
//! ├── lib.rs          ◄─── You are here (startup & prompt loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── widget.rs   ◄─── FreightWidget + WidgetState (Arc<Mutex>)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── input.rs    ◄─── CEP, quantities, delivery, radios, summary
//! │   └── quote.rs    ◄─── calculate_freight
//! ├── view.rs         ◄─── FreightView port (DOM, terminal, tests)
//! ├── repl.rs         ◄─── Prompt line parser
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prompt loop ──► quote ──► tokio::spawn(calculate_freight)              │
//! │       │                          │                                      │
//! │       │  (keeps reading input)   │  response lands later; if a newer    │
//! │       ▼                          ▼  quote or a mode change happened     │
//! │  delivery Atibaia           dropped without touching the widget         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod repl;
pub mod state;
pub mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use freight_client::{HttpQuoteClient, QuoteConfig, QuoteService};

use crate::repl::{Command, HELP};
use crate::state::WidgetState;
use crate::view::TerminalView;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "freight-cli", version, about = "Freight quote widget in the terminal")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Quote endpoint, overriding config and environment
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Initial delivery selector value
    #[arg(long, default_value = "Frete")]
    pub delivery: String,
}

/// Runs the terminal widget until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─── tracing-subscriber, RUST_LOG overrides       │
/// │  2. Load Config ────────── quote.toml → FREIGHT_API_* → --endpoint      │
/// │  3. Build Client ───────── HttpQuoteClient (validated endpoint)         │
/// │  4. Initialize State ───── WidgetState rendering to the terminal        │
/// │  5. Apply --delivery ───── same path as a selector change               │
/// │  6. Prompt Loop ────────── one command per line                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    info!("Starting freight quote widget");

    let mut config = QuoteConfig::load(cli.config.clone()).context("loading quote config")?;
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }
    let client: Arc<dyn QuoteService> =
        Arc::new(HttpQuoteClient::new(&config).context("building quote client")?);
    info!(endpoint = %config.endpoint(), "Quote client ready");

    let state = WidgetState::new(Arc::new(TerminalView));
    commands::change_delivery(&state, &cli.delivery);

    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading input")? {
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(&state, &client, command)?,
            Err(message) if message.is_empty() => {}
            Err(message) => println!("{message}\n{HELP}"),
        }
    }

    info!("Freight quote widget stopped");
    Ok(())
}

/// Executes one prompt command.
fn dispatch(state: &WidgetState, client: &Arc<dyn QuoteService>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::PostalCode(raw) => {
            commands::postal_input(state, &raw);
        }
        Command::Quantity { field, value } => {
            if let Err(err) = commands::quantity_input(state, &field, &value) {
                println!("{err}");
            }
        }
        Command::Delivery(value) => {
            commands::change_delivery(state, &value);
        }
        Command::Quote => {
            let (state, client) = (state.clone(), client.clone());
            tokio::spawn(async move {
                // Failures are already on the status line
                if let Err(err) = commands::calculate_freight(&state, client.as_ref()).await {
                    if !err.is_shown() {
                        warn!(code = ?err.code, "Quote not applied");
                    }
                }
            });
        }
        Command::Choose(value) => match commands::choose_option(state, &value) {
            Ok(level) => println!("  (x) {level}"),
            Err(err) => println!("{err}"),
        },
        Command::Summary => match commands::delivery_summary(state) {
            Some(summary) => println!("{summary}"),
            None => println!("(entrega incompleta: calcule o frete e escolha PAC ou SEDEX)"),
        },
        Command::State => {
            let widget = commands::get_widget(state);
            println!("{}", serde_json::to_string_pretty(&widget)?);
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=freight=trace` - Show trace for freight crates only
/// - Default: INFO, DEBUG for freight crates
///
/// Logs go to stderr so they never interleave with the widget's output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,freight=debug"));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
