//! # freight-client: Quote API Client
//!
//! Sends the cart and postal code to the shipping-quote endpoint and returns
//! a typed [`FreightQuote`](freight_core::FreightQuote).
//!
//! ## Modules
//! - [`config`] - Endpoint, timeout and user agent (TOML + env)
//! - [`client`] - [`QuoteService`] trait and the reqwest implementation
//! - [`error`] - [`ClientError`] and its categorization
//!
//! ## Usage
//! ```rust,no_run
//! use freight_client::{HttpQuoteClient, QuoteConfig, QuoteService};
//! use freight_core::{quote::build_quote_request, CartQuantities};
//!
//! # async fn run() -> freight_client::ClientResult<()> {
//! let client = HttpQuoteClient::new(&QuoteConfig::load_or_default(None))?;
//! let cart = CartQuantities::new().with("qtd30", "2");
//! let request = build_quote_request("01310-100", &cart)?;
//!
//! let quote = client.quote(&request).await?;
//! println!("PAC {} / SEDEX {}", quote.standard.price, quote.express.price);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{HttpQuoteClient, QuoteService};
pub use config::{ApiSettings, QuoteConfig};
pub use error::{ClientError, ClientResult};
