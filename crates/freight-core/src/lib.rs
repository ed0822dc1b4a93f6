//! # freight-core: Pure Logic for the Freight Quote Widget
//!
//! This crate is the **heart** of the freight widget. It contains every rule
//! of the widget as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Freight Quote Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front-end (browser / terminal)                  │   │
//! │  │   CEP input ──► Delivery selector ──► Calculate ──► PAC/SEDEX   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ UI events                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    freight-cli commands                         │   │
//! │  │   postal_input, change_delivery, calculate_freight, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ freight-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────────┐ ┌──────────┐ ┌──────────┐ ┌─────────────────┐  │   │
//! │  │  │ postal_code │ │   cart   │ │  quote   │ │ state / summary │  │   │
//! │  │  │  mask       │ │ LineItem │ │ Request  │ │ FreightState    │  │   │
//! │  │  │  digits     │ │ catalog  │ │ PAC/SEDEX│ │ order text      │  │   │
//! │  │  └─────────────┘ └──────────┘ └──────────┘ └─────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               freight-client (HTTP quote API)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`postal_code`] - CEP digit extraction and the `NNNNN-NNN` mask
//! - [`cart`] - Product catalog and cart → line item extraction
//! - [`money`] - Money in centavos with BRL formatting
//! - [`quote`] - Request body, response coercion, PAC/SEDEX matching
//! - [`state`] - The widget's in-memory freight state
//! - [`summary`] - Delivery text for the order message
//! - [`messages`] - Shopper-facing status strings
//! - [`validation`] - Radio and selector values
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use freight_core::postal_code::mask_postal_code;
//! use freight_core::money::Money;
//!
//! assert_eq!(mask_postal_code("01310100"), "01310-100");
//! assert_eq!(Money::from_cents(2050).to_brl(), "R$ 20,50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod messages;
pub mod money;
pub mod postal_code;
pub mod quote;
pub mod state;
pub mod summary;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartQuantities, LineItem, ProductVariant, CATALOG};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use quote::{FreightQuote, QuoteOption, QuoteRequest, QuoteResponse, ServiceLevel, ShippingOption};
pub use state::{DeliveryMode, FreightState, PickupLocation};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of digits in a complete Brazilian postal code (CEP).
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Digits before the hyphen in the `NNNNN-NNN` display mask.
pub const POSTAL_CODE_PREFIX_DIGITS: usize = 5;
