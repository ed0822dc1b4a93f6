//! # Input Commands
//!
//! Handlers for the events the shopper causes by typing and clicking,
//! everything except the quote request itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Event                         Command              Effect              │
//! │  ─────                         ───────              ──────              │
//! │  CEP input changes ──────────► postal_input ──────► mask + write back   │
//! │  Quantity field changes ─────► quantity_input ────► cart quantities     │
//! │  Delivery selector changes ──► change_delivery ───► panel / reset       │
//! │  PAC/SEDEX radio changes ────► choose_option ─────► selection           │
//! │  Order message assembled ────► delivery_summary ──► block or None       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use freight_core::cart::variant_for_field;
use freight_core::validation::validate_service_choice;
use freight_core::ServiceLevel;

use crate::error::ApiError;
use crate::state::{FreightWidget, WidgetState};

/// Masks the CEP input and writes the masked value back to the view.
pub fn postal_input(state: &WidgetState, raw: &str) -> String {
    let masked = state.with_widget_mut(|w| w.set_postal_input(raw));
    state.view().set_postal_code(&masked);
    masked
}

/// Stores a quantity field's raw text. Unknown fields are rejected.
pub fn quantity_input(state: &WidgetState, field_id: &str, raw: &str) -> Result<u32, ApiError> {
    if variant_for_field(field_id).is_none() {
        return Err(ApiError::validation(format!("Unknown quantity field: {field_id}")));
    }
    Ok(state.with_widget_mut(|w| {
        w.set_quantity(field_id, raw);
        w.quantities().quantity(field_id)
    }))
}

/// Applies a delivery selector change.
///
/// ## Behavior
/// - Ship-by-mail: the freight panel is shown, nothing else changes
/// - Anything else: the panel is hidden, the quote and the choice are
///   cleared, the status line is emptied, the radios are hidden and
///   unchecked, and responses still in flight will be dropped
///
/// Returns whether the panel is visible.
pub fn change_delivery(state: &WidgetState, selector_value: &str) -> bool {
    let is_mail = state.with_widget_mut(|w| w.set_mode(selector_value));
    debug!(selector = %selector_value, is_mail, "Delivery mode changed");

    let view = state.view();
    view.set_freight_panel_visible(is_mail);
    if !is_mail {
        view.set_status("");
        view.set_results_visible(false);
        view.clear_option_choice();
    }
    is_mail
}

/// Records the PAC/SEDEX radio the shopper checked.
pub fn choose_option(state: &WidgetState, value: &str) -> Result<ServiceLevel, ApiError> {
    let level = validate_service_choice(value)?;
    state.with_widget_mut(|w| w.select(level));
    debug!(service = %level, "Freight option chosen");
    Ok(level)
}

/// Returns the delivery block for the order message, `None` while it is
/// not ready to be sent.
pub fn delivery_summary(state: &WidgetState) -> Option<String> {
    state.with_widget(|w| w.summary())
}

/// Returns a copy of the widget data.
pub fn get_widget(state: &WidgetState) -> FreightWidget {
    state.with_widget(|w| w.clone())
}
