//! # Freight State
//!
//! The widget's in-memory record of the current quote and the shopper's
//! choice, plus the delivery mode that decides whether it applies.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌─────────┐   apply_quote    ┌──────────┐   select(level)  ┌────────┐ │
//! │   │  Empty  │ ───────────────► │  Quoted  │ ───────────────► │ Chosen │ │
//! │   └─────────┘                  └──────────┘                  └────────┘ │
//! │        ▲                         │      ▲                       │       │
//! │        │                         │      └──── apply_quote ──────┘       │
//! │        │                         │       (selection cleared)            │
//! │        └──────── reset ──────────┴──────────────────────────────┘       │
//! │            (delivery mode left ship-by-mail: all four fields at once)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::quote::{FreightQuote, ServiceLevel, ShippingOption};

// =============================================================================
// Delivery Mode
// =============================================================================

/// Fixed pickup points where the shopper can collect the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PickupLocation {
    Atibaia,
    BeloHorizonte,
}

impl PickupLocation {
    /// City name, also the delivery selector value.
    pub const fn city(&self) -> &'static str {
        match self {
            PickupLocation::Atibaia => "Atibaia",
            PickupLocation::BeloHorizonte => "Belo Horizonte",
        }
    }
}

/// How the order reaches the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DeliveryMode {
    /// Collected at a pickup point; no freight involved.
    Pickup(PickupLocation),

    /// Shipped by Correios; needs a CEP and a PAC/SEDEX choice.
    Mail,
}

impl DeliveryMode {
    /// Selector value for ship-by-mail.
    pub const MAIL_SELECTOR_VALUE: &'static str = "Frete";

    /// Every mode, in selector order.
    pub const ALL: [DeliveryMode; 3] = [
        DeliveryMode::Pickup(PickupLocation::Atibaia),
        DeliveryMode::Pickup(PickupLocation::BeloHorizonte),
        DeliveryMode::Mail,
    ];

    /// Value of this mode in the delivery-location selector.
    pub const fn selector_value(&self) -> &'static str {
        match self {
            DeliveryMode::Pickup(location) => location.city(),
            DeliveryMode::Mail => Self::MAIL_SELECTOR_VALUE,
        }
    }

    /// Maps a selector value to a mode. Unknown values yield `None`, which
    /// the widget treats like any non-mail mode.
    pub fn from_selector(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.selector_value() == value)
    }

    /// True for ship-by-mail.
    pub const fn is_mail(&self) -> bool {
        matches!(self, DeliveryMode::Mail)
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector_value())
    }
}

impl FromStr for DeliveryMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s.trim()).ok_or_else(|| ValidationError::NotAllowed {
            field: "delivery".to_string(),
            allowed: Self::ALL.iter().map(|m| m.selector_value().to_string()).collect(),
        })
    }
}

// =============================================================================
// Freight State
// =============================================================================

/// Current quote and choice for ship-by-mail.
///
/// ## Invariants
/// - `standard` and `express` are both set or both unset
/// - `masked_postal_code` is non-empty exactly when a quote is stored
/// - `selected` is only meaningful while a quote is stored; a new quote
///   always clears it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FreightState {
    masked_postal_code: String,
    standard: Option<ShippingOption>,
    express: Option<ShippingOption>,
    selected: Option<ServiceLevel>,
}

impl FreightState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all four fields together.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Stores a complete quote for the postal code it was requested with and
    /// clears any previous selection.
    pub fn apply_quote(&mut self, masked_postal_code: impl Into<String>, quote: FreightQuote) {
        self.masked_postal_code = masked_postal_code.into();
        self.standard = Some(quote.standard);
        self.express = Some(quote.express);
        self.selected = None;
    }

    /// Records the shopper's choice.
    pub fn select(&mut self, level: ServiceLevel) {
        self.selected = Some(level);
    }

    /// Postal code of the stored quote, `""` if none.
    pub fn masked_postal_code(&self) -> &str {
        &self.masked_postal_code
    }

    /// Returns the option stored for a service level.
    pub fn option(&self, level: ServiceLevel) -> Option<ShippingOption> {
        match level {
            ServiceLevel::Standard => self.standard,
            ServiceLevel::Express => self.express,
        }
    }

    /// The stored quote, if both options are present.
    pub fn quote(&self) -> Option<FreightQuote> {
        Some(FreightQuote {
            standard: self.standard?,
            express: self.express?,
        })
    }

    /// The chosen service level.
    pub fn selected(&self) -> Option<ServiceLevel> {
        self.selected
    }

    /// The chosen service together with its stored data.
    pub fn selected_option(&self) -> Option<(ServiceLevel, ShippingOption)> {
        let level = self.selected?;
        Some((level, self.option(level)?))
    }

    /// True when nothing is quoted or selected.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
