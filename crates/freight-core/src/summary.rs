//! # Summary Module
//!
//! Text rendered from the freight state: the two option labels and the
//! delivery block appended to the order message.
//!
//! ## Order Message Block
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pickup                          │  Ship by mail (after a choice)       │
//! │  ──────                          │  ────────────                        │
//! │  Local: Retirada em Atibaia      │  Local: Frete (Correios)             │
//! │                                  │  CEP: 01310-100                      │
//! │                                  │  Serviço: PAC                        │
//! │                                  │  Valor do frete: R$ 20,50            │
//! │                                  │  Prazo: 5 dia(s)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! `None` means "not ready": the order must not be sent yet.

use crate::quote::{ServiceLevel, ShippingOption};
use crate::state::{DeliveryMode, FreightState, PickupLocation};

/// First line of the ship-by-mail block.
pub const MAIL_LABEL: &str = "Local: Frete (Correios)";

/// Label next to an option radio, e.g. `PAC — R$ 20,50 • 5 dia(s)`.
pub fn option_label(level: ServiceLevel, option: &ShippingOption) -> String {
    format!(
        "{} — {} • {} dia(s)",
        level.name(),
        option.price.to_brl(),
        option.delivery_days
    )
}

/// One-line description of a pickup point.
pub fn pickup_line(location: PickupLocation) -> String {
    format!("Local: Retirada em {}", location.city())
}

/// Builds the delivery block for the order message.
///
/// ## Returns `None` When
/// - mode is ship-by-mail (or unknown) and no postal code has been quoted
/// - no option is selected
/// - the selected option's data is missing
pub fn delivery_summary(mode: Option<DeliveryMode>, state: &FreightState) -> Option<String> {
    if let Some(DeliveryMode::Pickup(location)) = mode {
        return Some(pickup_line(location));
    }

    if state.masked_postal_code().is_empty() {
        return None;
    }
    let (level, option) = state.selected_option()?;

    Some(
        [
            MAIL_LABEL.to_string(),
            format!("CEP: {}", state.masked_postal_code()),
            format!("Serviço: {}", level.name()),
            format!("Valor do frete: {}", option.price.to_brl()),
            format!("Prazo: {} dia(s)", option.delivery_days),
        ]
        .join("\n"),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::quote::FreightQuote;

    fn quoted_state() -> FreightState {
        let mut state = FreightState::new();
        state.apply_quote(
            "01310-100",
            FreightQuote {
                standard: ShippingOption::new(Money::from_cents(2050), 5),
                express: ShippingOption::new(Money::from_cents(3500), 2),
            },
        );
        state
    }

    #[test]
    fn test_option_labels() {
        let state = quoted_state();
        let pac = option_label(ServiceLevel::Standard, &state.option(ServiceLevel::Standard).unwrap());
        let sedex = option_label(ServiceLevel::Express, &state.option(ServiceLevel::Express).unwrap());

        assert_eq!(pac, "PAC — R$ 20,50 • 5 dia(s)");
        assert_eq!(sedex, "SEDEX — R$ 35,00 • 2 dia(s)");
    }

    #[test]
    fn test_pickup_summary_ignores_freight_state() {
        let summary = delivery_summary(
            Some(DeliveryMode::Pickup(PickupLocation::BeloHorizonte)),
            &FreightState::new(),
        );
        assert_eq!(summary.as_deref(), Some("Local: Retirada em Belo Horizonte"));
    }

    #[test]
    fn test_mail_summary_not_ready_without_quote() {
        assert_eq!(delivery_summary(Some(DeliveryMode::Mail), &FreightState::new()), None);
        assert_eq!(delivery_summary(None, &FreightState::new()), None);
    }

    #[test]
    fn test_mail_summary_not_ready_without_selection() {
        assert_eq!(delivery_summary(Some(DeliveryMode::Mail), &quoted_state()), None);
    }

    #[test]
    fn test_mail_summary_after_selection() {
        let mut state = quoted_state();
        state.select(ServiceLevel::Standard);

        let summary = delivery_summary(Some(DeliveryMode::Mail), &state).unwrap();
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(
            lines,
            [
                "Local: Frete (Correios)",
                "CEP: 01310-100",
                "Serviço: PAC",
                "Valor do frete: R$ 20,50",
                "Prazo: 5 dia(s)",
            ]
        );
        assert!(summary.ends_with("5 dia(s)"));
    }

    #[test]
    fn test_mail_summary_express() {
        let mut state = quoted_state();
        state.select(ServiceLevel::Express);

        let summary = delivery_summary(Some(DeliveryMode::Mail), &state).unwrap();
        assert!(summary.contains("Serviço: SEDEX"));
        assert!(summary.contains("R$ 35,00"));
    }
}
