//! # Widget State
//!
//! The controller's memory: what the shopper typed, what the cart holds,
//! which delivery mode is selected, and the freight quote itself.
//!
//! ## Thread Safety
//! The widget is wrapped in `Arc<Mutex<T>>` because:
//! 1. Input events and quote responses both modify it
//! 2. Quote requests run as tasks and finish in any order
//! 3. A mode change must clear the quote in one step
//!
//! ## Request Generations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  begin_quote ──► generation = 1 ──► request A in flight                 │
//! │  begin_quote ──► generation = 2 ──► request B in flight                 │
//! │                                                                         │
//! │  B resolves ──► is_current(B)? yes ──► apply                            │
//! │  A resolves ──► is_current(A)? no  ──► dropped                          │
//! │                                                                         │
//! │  set_mode(pickup) also bumps the generation, so a response that lands   │
//! │  after the shopper left ship-by-mail never repopulates the state.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::debug;

use freight_core::postal_code::mask_postal_code;
use freight_core::quote::build_quote_request;
use freight_core::summary::delivery_summary;
use freight_core::validation::validate_delivery_mode;
use freight_core::{
    CartQuantities, CoreResult, DeliveryMode, FreightQuote, FreightState, QuoteRequest, ServiceLevel,
};

use crate::view::FreightView;

/// A quote request that has passed the preconditions and is waiting for
/// the API.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuote {
    /// Generation this request was issued under
    pub generation: u64,

    /// Postal code as displayed when the request was issued
    pub masked_postal_code: String,

    /// Body sent to the API
    pub request: QuoteRequest,
}

/// The freight widget's data.
///
/// ## Invariants
/// - `postal_input` is always in mask form (`""`, `"12345"`, `"12345-678"`)
/// - `freight` is empty whenever `mode` is not ship-by-mail, unless a
///   quote was calculated while the panel was hidden
/// - `generation` only grows
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightWidget {
    mode: Option<DeliveryMode>,
    postal_input: String,
    quantities: CartQuantities,
    freight: FreightState,
    #[serde(skip)]
    generation: u64,
}

impl FreightWidget {
    /// Creates a widget with nothing typed and no mode chosen.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Masks and stores the CEP input, returning the displayed value.
    pub fn set_postal_input(&mut self, raw: &str) -> String {
        self.postal_input = mask_postal_code(raw);
        self.postal_input.clone()
    }

    /// Stores the raw text of a cart quantity field.
    pub fn set_quantity(&mut self, field_id: &str, raw: &str) {
        self.quantities.set(field_id, raw);
    }

    /// Applies a delivery selector value and returns whether the freight
    /// panel is shown.
    ///
    /// Anything but ship-by-mail clears the quote and the choice together
    /// and invalidates requests still in flight.
    pub fn set_mode(&mut self, selector_value: &str) -> bool {
        self.mode = match validate_delivery_mode(selector_value) {
            Ok(mode) => Some(mode),
            Err(err) => {
                debug!(error = %err, "Unrecognized delivery selector value");
                None
            }
        };
        let is_mail = self.mode.is_some_and(|mode| mode.is_mail());
        if !is_mail {
            self.freight.reset();
            self.generation += 1;
        }
        is_mail
    }

    /// Records the shopper's PAC/SEDEX choice.
    pub fn select(&mut self, level: ServiceLevel) {
        self.freight.select(level);
    }

    // =========================================================================
    // Quote Lifecycle
    // =========================================================================

    /// Checks the preconditions and, if they hold, issues a new generation.
    ///
    /// A failed precondition leaves everything unchanged, including the
    /// generation, so a request already in flight still counts.
    pub fn begin_quote(&mut self) -> CoreResult<PendingQuote> {
        let request = build_quote_request(&self.postal_input, &self.quantities)?;
        self.generation += 1;
        Ok(PendingQuote {
            generation: self.generation,
            masked_postal_code: self.postal_input.trim().to_string(),
            request,
        })
    }

    /// True if no newer request or mode change happened since `pending`.
    pub fn is_current(&self, pending: &PendingQuote) -> bool {
        pending.generation == self.generation
    }

    /// Stores a quote received for `pending`. Returns false, changing
    /// nothing, if the request is stale.
    pub fn finish_quote(&mut self, pending: &PendingQuote, quote: FreightQuote) -> bool {
        if !self.is_current(pending) {
            return false;
        }
        self.freight.apply_quote(pending.masked_postal_code.clone(), quote);
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn mode(&self) -> Option<DeliveryMode> {
        self.mode
    }

    pub fn postal_input(&self) -> &str {
        &self.postal_input
    }

    pub fn quantities(&self) -> &CartQuantities {
        &self.quantities
    }

    pub fn freight(&self) -> &FreightState {
        &self.freight
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Delivery block for the order message, `None` until it is complete.
    pub fn summary(&self) -> Option<String> {
        delivery_summary(self.mode, &self.freight)
    }
}

// =============================================================================
// Shared State
// =============================================================================

/// Widget data plus the view it renders to, shareable across tasks.
#[derive(Clone)]
pub struct WidgetState {
    widget: Arc<Mutex<FreightWidget>>,
    view: Arc<dyn FreightView>,
}

impl WidgetState {
    /// Creates an empty widget rendering to `view`.
    pub fn new(view: Arc<dyn FreightView>) -> Self {
        WidgetState {
            widget: Arc::new(Mutex::new(FreightWidget::new())),
            view,
        }
    }

    /// The view this widget renders to.
    pub fn view(&self) -> &dyn FreightView {
        self.view.as_ref()
    }

    /// Executes a function with read access to the widget.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = state.with_widget(|w| w.summary());
    /// ```
    pub fn with_widget<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FreightWidget) -> R,
    {
        // Every mutation leaves the widget consistent, so a panic elsewhere
        // cannot leave it half-written
        let widget = self.widget.lock().unwrap_or_else(PoisonError::into_inner);
        f(&widget)
    }

    /// Executes a function with write access to the widget.
    pub fn with_widget_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut FreightWidget) -> R,
    {
        let mut widget = self.widget.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut widget)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
