//! # Quote Client
//!
//! The [`QuoteService`] seam and its HTTP implementation.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  QuoteRequest ──► POST endpoint (JSON) ──► status 2xx? ── no ──► Status │
//! │                        │                       │ yes                    │
//! │                   timeout/refused              ▼                        │
//! │                        │                 body is JSON? ── no ──► Decode │
//! │                        ▼                       │ yes                    │
//! │               Timeout / Network                ▼                        │
//! │                                   parse_quote_response (freight-core)   │
//! │                                          │             │                │
//! │                                          ▼             ▼                │
//! │                                   FreightQuote   Quote(CoreError)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Exactly one HTTP request per call; retries are the shopper's decision.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use freight_core::quote::parse_quote_response;
use freight_core::{FreightQuote, QuoteRequest};

use crate::config::QuoteConfig;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// Quote Service Trait
// =============================================================================

/// Anything that can price a [`QuoteRequest`].
///
/// The widget controller only sees this trait, so tests and alternative
/// carriers plug in without touching the UI code.
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Prices the request, returning both services or a typed failure.
    async fn quote(&self, request: &QuoteRequest) -> ClientResult<FreightQuote>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// reqwest-backed client for the quoting endpoint.
#[derive(Debug, Clone)]
pub struct HttpQuoteClient {
    client: reqwest::Client,
    endpoint: Url,
    timeout_secs: u64,
}

impl HttpQuoteClient {
    /// Builds a client from validated configuration.
    pub fn new(config: &QuoteConfig) -> ClientResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.api.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(HttpQuoteClient {
            client,
            endpoint: Url::parse(config.endpoint())?,
            timeout_secs: config.api.timeout_secs,
        })
    }

    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout_secs)
        } else {
            ClientError::from(err)
        }
    }
}

#[async_trait]
impl QuoteService for HttpQuoteClient {
    async fn quote(&self, request: &QuoteRequest) -> ClientResult<FreightQuote> {
        debug!(
            endpoint = %self.endpoint,
            postal_code = %request.to_postal_code,
            items = request.products.len(),
            "Sending quote request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Quote API returned an error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await.map_err(|e| self.transport_error(e))?;

        let quote = parse_quote_response(&body).map_err(|e| {
            warn!(error = %e, body = %body, "Quote response rejected");
            ClientError::from(e)
        })?;

        debug!(
            standard = %quote.standard.price,
            express = %quote.express.price,
            "Quote received"
        );
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = QuoteConfig::with_endpoint("mailto:frete@example.com");
        assert!(matches!(
            HttpQuoteClient::new(&config),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let config = QuoteConfig::with_endpoint("http://localhost:3000/api/frete");
        let client = HttpQuoteClient::new(&config).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:3000/api/frete");
    }
}
