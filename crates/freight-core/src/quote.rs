//! # Quote Module
//!
//! Request and response shapes of the quoting API, and the rules that turn a
//! list of carrier options into the widget's two services.
//!
//! ## Round Trip
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  build_quote_request(cep input, cart)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST { "toPostalCode": "01310100", "products": [ ...LineItem ] }       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  { "options": [ { "name": "PAC", "price": 20.5, "delivery_time": 5 },   │
//! │                 { "name": ".Com", ... },                                │
//! │                 { "name": "SEDEX", "price": 35, "delivery_time": 2 } ] }│
//! │       │                                                                 │
//! │       ▼  QuoteResponse::from_value   (lenient coercion per entry)       │
//! │       ▼  select_services             (first /pac/i, first /sedex/i)     │
//! │                                                                         │
//! │  FreightQuote { standard: {R$ 20,50, 5d}, express: {R$ 35,00, 2d} }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coercion Rules
//! The API is loosely typed, so every option field is coerced:
//! - `name`: strings as-is, numbers/booleans stringified, anything else `""`
//! - `price` / `delivery_time`: missing or `null` → 0, numeric strings parsed,
//!   booleans → 1/0, anything unparseable is kept as "not a number"
//!
//! An option is only rejected if it is *selected* and one of its numbers is
//! not usable; unrelated junk options never fail the quote.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::cart::{extract_line_items, CartQuantities, LineItem};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::postal_code::normalize_postal_code;

// =============================================================================
// Service Level
// =============================================================================

/// The two shipping-speed tiers the widget offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServiceLevel {
    /// Correios PAC (economy).
    #[serde(rename = "PAC")]
    Standard,

    /// Correios SEDEX (express).
    #[serde(rename = "SEDEX")]
    Express,
}

impl ServiceLevel {
    /// Both levels, in display order.
    pub const ALL: [ServiceLevel; 2] = [ServiceLevel::Standard, ServiceLevel::Express];

    /// Display name, also the value of the option radio.
    pub const fn name(&self) -> &'static str {
        match self {
            ServiceLevel::Standard => "PAC",
            ServiceLevel::Express => "SEDEX",
        }
    }

    /// Lowercase fragment matched against carrier option names.
    pub const fn pattern(&self) -> &'static str {
        match self {
            ServiceLevel::Standard => "pac",
            ServiceLevel::Express => "sedex",
        }
    }

    /// Case-insensitive substring match on a carrier option name.
    pub fn matches(&self, option_name: &str) -> bool {
        option_name.to_lowercase().contains(self.pattern())
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceLevel {
    type Err = ValidationError;

    /// Parses an option radio value (`"PAC"` / `"SEDEX"`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PAC" => Ok(ServiceLevel::Standard),
            "SEDEX" => Ok(ServiceLevel::Express),
            _ => Err(ValidationError::NotAllowed {
                field: "service".to_string(),
                allowed: ServiceLevel::ALL.iter().map(|l| l.name().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Shipping Option / Freight Quote
// =============================================================================

/// Price and delivery time of one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingOption {
    pub price: Money,
    pub delivery_days: u32,
}

impl ShippingOption {
    pub fn new(price: Money, delivery_days: u32) -> Self {
        ShippingOption {
            price,
            delivery_days,
        }
    }
}

/// A complete quote: both services are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FreightQuote {
    pub standard: ShippingOption,
    pub express: ShippingOption,
}

impl FreightQuote {
    /// Returns the option for a service level.
    pub fn option(&self, level: ServiceLevel) -> ShippingOption {
        match level {
            ServiceLevel::Standard => self.standard,
            ServiceLevel::Express => self.express,
        }
    }
}

// =============================================================================
// Request
// =============================================================================

/// Body of the quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteRequest {
    /// Eight digits, no hyphen.
    pub to_postal_code: String,

    /// Line items with positive quantity; never empty.
    pub products: Vec<LineItem>,
}

/// Builds the quote request from the postal-code input and cart fields.
///
/// ## Precondition Order
/// ```text
/// postal code has 8 digits? ── no ──► Err(InvalidPostalCode)
///          │ yes
///          ▼
/// cart has line items?     ── no ──► Err(EmptyCart)
///          │ yes
///          ▼
/// Ok(QuoteRequest)
/// ```
/// Callers must not touch the network on `Err`.
pub fn build_quote_request(
    postal_code_input: &str,
    quantities: &CartQuantities,
) -> CoreResult<QuoteRequest> {
    let to_postal_code = normalize_postal_code(postal_code_input)?;

    let products = extract_line_items(quantities);
    if products.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    Ok(QuoteRequest {
        to_postal_code,
        products,
    })
}

// =============================================================================
// Response
// =============================================================================

/// A carrier option after coercion.
///
/// `None` in a numeric field means the API sent something that is not a
/// number (e.g. `"abc"`); a missing field is `Some(0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteOption {
    pub name: String,
    pub price: Option<f64>,
    pub delivery_time: Option<f64>,
}

impl QuoteOption {
    /// Coerces one entry of the `options` array.
    pub fn from_value(entry: &Value) -> CoreResult<Self> {
        let fields = entry.as_object().ok_or_else(|| {
            CoreError::InvalidResponse(format!("option entry is not an object: {}", entry))
        })?;

        Ok(QuoteOption {
            name: coerce_name(fields.get("name")),
            price: coerce_number(fields.get("price")),
            delivery_time: coerce_number(fields.get("delivery_time")),
        })
    }

    /// Converts to a typed option, rejecting unusable numbers.
    ///
    /// Price and delivery time must both be finite and not negative.
    pub fn to_shipping_option(&self) -> CoreResult<ShippingOption> {
        let price = self
            .price
            .filter(|price| *price >= 0.0)
            .and_then(Money::from_decimal)
            .ok_or_else(|| CoreError::InvalidResponse(format!("option '{}' has no usable price", self.name)))?;

        let delivery_days = self
            .delivery_time
            .filter(|days| days.is_finite() && *days >= 0.0)
            .map(|days| days.round() as u32)
            .ok_or_else(|| {
                CoreError::InvalidResponse(format!("option '{}' has no usable delivery time", self.name))
            })?;

        Ok(ShippingOption::new(price, delivery_days))
    }
}

fn coerce_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => Some(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
        Some(_) => None,
    }
}

/// The decoded response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteResponse {
    pub options: Vec<QuoteOption>,
}

impl QuoteResponse {
    /// Decodes a response body.
    ///
    /// ## Accepted Shapes
    /// - `{ "options": [ ... ] }`
    /// - `{}` or `{ "options": null }` → no options
    ///
    /// Anything else (non-object body, non-array `options`, non-object
    /// entries) is [`CoreError::InvalidResponse`].
    pub fn from_value(body: &Value) -> CoreResult<Self> {
        let fields = body
            .as_object()
            .ok_or_else(|| CoreError::InvalidResponse("response body is not an object".to_string()))?;

        let options = match fields.get("options") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .map(QuoteOption::from_value)
                .collect::<CoreResult<Vec<_>>>()?,
            Some(other) => {
                return Err(CoreError::InvalidResponse(format!(
                    "options is not an array: {}",
                    other
                )))
            }
        };

        Ok(QuoteResponse { options })
    }

    /// Returns the first option whose name matches the service level.
    pub fn find(&self, level: ServiceLevel) -> Option<&QuoteOption> {
        self.options.iter().find(|o| level.matches(&o.name))
    }
}

/// Picks PAC and SEDEX out of a decoded response.
///
/// ## Errors
/// - [`CoreError::MissingService`] if either name is absent (standard is
///   reported first)
/// - [`CoreError::InvalidResponse`] if a selected option has an unusable
///   price or delivery time
pub fn select_services(response: &QuoteResponse) -> CoreResult<FreightQuote> {
    let standard = response
        .find(ServiceLevel::Standard)
        .ok_or(CoreError::MissingService(ServiceLevel::Standard))?;
    let express = response
        .find(ServiceLevel::Express)
        .ok_or(CoreError::MissingService(ServiceLevel::Express))?;

    Ok(FreightQuote {
        standard: standard.to_shipping_option()?,
        express: express.to_shipping_option()?,
    })
}

/// Decodes a response body and selects both services.
pub fn parse_quote_response(body: &Value) -> CoreResult<FreightQuote> {
    select_services(&QuoteResponse::from_value(body)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_level_parsing() {
        assert_eq!("PAC".parse::<ServiceLevel>().unwrap(), ServiceLevel::Standard);
        assert_eq!("sedex".parse::<ServiceLevel>().unwrap(), ServiceLevel::Express);
        assert!("MINI".parse::<ServiceLevel>().is_err());
    }

    #[test]
    fn test_service_level_matching() {
        assert!(ServiceLevel::Standard.matches("PAC Contrato"));
        assert!(ServiceLevel::Standard.matches("Correios Pac"));
        assert!(ServiceLevel::Express.matches("SEDEX 10"));
        assert!(!ServiceLevel::Express.matches("PAC"));
    }

    #[test]
    fn test_build_request() {
        let cart = CartQuantities::new().with("qtd30", "2");
        let request = build_quote_request("01310-100", &cart).unwrap();

        assert_eq!(request.to_postal_code, "01310100");
        assert_eq!(request.products.len(), 1);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["toPostalCode"], "01310100");
        assert_eq!(json["products"][0]["id"], "vela_30g");
    }

    #[test]
    fn test_build_request_checks_postal_code_first() {
        let empty_cart = CartQuantities::new();
        assert!(matches!(
            build_quote_request("0131", &empty_cart),
            Err(CoreError::InvalidPostalCode { digits: 4 })
        ));
        assert!(matches!(
            build_quote_request("01310-100", &empty_cart),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_parse_pac_and_sedex() {
        let body = json!({
            "options": [
                { "name": "PAC", "price": 20.5, "delivery_time": 5 },
                { "name": "SEDEX", "price": 35, "delivery_time": 2 }
            ]
        });
        let quote = parse_quote_response(&body).unwrap();

        assert_eq!(quote.standard, ShippingOption::new(Money::from_cents(2050), 5));
        assert_eq!(quote.express, ShippingOption::new(Money::from_cents(3500), 2));
    }

    #[test]
    fn test_first_match_wins() {
        let body = json!({
            "options": [
                { "name": "Jadlog .Package", "price": 10, "delivery_time": 9 },
                { "name": "SEDEX", "price": 40, "delivery_time": 1 },
                { "name": "PAC", "price": 22, "delivery_time": 6 },
                { "name": "PAC Mini", "price": 15, "delivery_time": 8 },
                { "name": "SEDEX 12", "price": 80, "delivery_time": 1 }
            ]
        });
        let quote = parse_quote_response(&body).unwrap();

        assert_eq!(quote.standard.price, Money::from_reais(22));
        assert_eq!(quote.express.price, Money::from_reais(40));
    }

    #[test]
    fn test_missing_sedex() {
        let body = json!({ "options": [{ "name": "PAC", "price": 20.5, "delivery_time": 5 }] });
        assert!(matches!(
            parse_quote_response(&body),
            Err(CoreError::MissingService(ServiceLevel::Express))
        ));
    }

    #[test]
    fn test_missing_options_is_missing_service() {
        assert!(matches!(
            parse_quote_response(&json!({})),
            Err(CoreError::MissingService(ServiceLevel::Standard))
        ));
        assert!(matches!(
            parse_quote_response(&json!({ "options": null })),
            Err(CoreError::MissingService(ServiceLevel::Standard))
        ));
    }

    #[test]
    fn test_lenient_coercion() {
        let body = json!({
            "options": [
                { "name": "PAC", "price": "19.90" },
                { "name": "SEDEX", "price": null, "delivery_time": "3" }
            ]
        });
        let quote = parse_quote_response(&body).unwrap();

        assert_eq!(quote.standard, ShippingOption::new(Money::from_cents(1990), 0));
        assert_eq!(quote.express, ShippingOption::new(Money::zero(), 3));
    }

    #[test]
    fn test_unusable_number_on_selected_option() {
        let body = json!({
            "options": [
                { "name": "PAC", "price": "grátis", "delivery_time": 5 },
                { "name": "SEDEX", "price": 35, "delivery_time": 2 }
            ]
        });
        assert!(matches!(
            parse_quote_response(&body),
            Err(CoreError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_negative_numbers_are_rejected() {
        for (price, days) in [(-20.5, 5), (20.5, -1)] {
            let body = json!({
                "options": [
                    { "name": "PAC", "price": price, "delivery_time": days },
                    { "name": "SEDEX", "price": 35, "delivery_time": 2 }
                ]
            });
            assert!(
                matches!(parse_quote_response(&body), Err(CoreError::InvalidResponse(_))),
                "price {} / days {} should be rejected",
                price,
                days
            );
        }
    }

    #[test]
    fn test_unusable_number_on_ignored_option() {
        let body = json!({
            "options": [
                { "name": "Loggi", "price": {"amount": 1} },
                { "name": "PAC", "price": 20, "delivery_time": 5 },
                { "name": "SEDEX", "price": 35, "delivery_time": 2 }
            ]
        });
        assert!(parse_quote_response(&body).is_ok());
    }

    #[test]
    fn test_malformed_bodies() {
        for body in [json!(null), json!([1, 2]), json!({ "options": "PAC" }), json!({ "options": [null] })] {
            assert!(
                matches!(parse_quote_response(&body), Err(CoreError::InvalidResponse(_))),
                "body {} should be rejected",
                body
            );
        }
    }

    #[test]
    fn test_name_coercion() {
        let response = QuoteResponse::from_value(&json!({
            "options": [{ "name": null }, { "name": 42 }, { "price": 1 }]
        }))
        .unwrap();

        let names: Vec<&str> = response.options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["", "42", ""]);
    }
}
