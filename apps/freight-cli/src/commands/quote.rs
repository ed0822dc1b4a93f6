//! # Quote Command
//!
//! The "calcular frete" button.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. begin                                                               │
//! │     CEP has 8 digits? ── no ──► status "Informe um CEP válido"  (stop)  │
//! │     cart has items?   ── no ──► status "Adicione itens..."      (stop)  │
//! │     status "Calculando frete...", radios hidden, generation + 1         │
//! │                                                                         │
//! │  2. await QuoteService                                                  │
//! │                                                                         │
//! │  3. finish                                                              │
//! │     still current? ── no ──► dropped, view untouched                    │
//! │     Ok(quote)  ──► state filled, radios unchecked, labels set,          │
//! │                    radios shown, status "Selecione PAC ou SEDEX"        │
//! │     Err(e)     ──► status for e, state untouched, radios stay hidden    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The widget lock is held only while state changes; the view is rendered
//! after it is released.

use tracing::{debug, error, info};

use freight_client::QuoteService;
use freight_core::summary::option_label;
use freight_core::{messages, FreightQuote, ServiceLevel};

use crate::error::ApiError;
use crate::state::WidgetState;

/// Requests a quote for the current CEP and cart and renders the outcome.
///
/// ## Returns
/// - `Ok(quote)` once the quote is stored and shown
/// - `Err` with the shopper-facing status for any failure; a request
///   replaced by a newer one or by a mode change yields
///   [`ErrorCode::Superseded`](crate::error::ErrorCode::Superseded) and
///   touches nothing
pub async fn calculate_freight<Q>(state: &WidgetState, service: &Q) -> Result<FreightQuote, ApiError>
where
    Q: QuoteService + ?Sized,
{
    let view = state.view();

    let pending = match state.with_widget_mut(|w| w.begin_quote()) {
        Ok(pending) => pending,
        Err(err) => {
            debug!(error = %err, "Quote precondition failed");
            let api = ApiError::from(err);
            view.set_status(&api.message);
            view.set_results_visible(false);
            return Err(api);
        }
    };
    view.set_status(messages::CALCULATING);
    view.set_results_visible(false);

    info!(
        generation = pending.generation,
        postal_code = %pending.masked_postal_code,
        items = pending.request.products.len(),
        "Calculating freight"
    );

    let result = service.quote(&pending.request).await;

    let applied = state.with_widget_mut(|w| {
        if !w.is_current(&pending) {
            return None;
        }
        if let Ok(quote) = &result {
            w.finish_quote(&pending, *quote);
        }
        Some(result)
    });

    match applied {
        None => {
            debug!(generation = pending.generation, "Discarding superseded quote response");
            Err(ApiError::superseded())
        }
        Some(Ok(quote)) => {
            view.clear_option_choice();
            for level in ServiceLevel::ALL {
                view.set_option_label(level, &option_label(level, &quote.option(level)));
            }
            view.set_results_visible(true);
            view.set_status(messages::CHOOSE_OPTION);
            Ok(quote)
        }
        Some(Err(err)) => {
            error!(error = %err, retryable = err.is_retryable(), "Freight quote failed");
            let api = ApiError::from(err);
            view.set_status(&api.message);
            Err(api)
        }
    }
}
