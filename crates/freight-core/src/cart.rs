//! # Cart Module
//!
//! Turns the shop's quantity fields into the line items the quoting API
//! prices.
//!
//! ## Extraction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Quantity fields            CATALOG                  Line items         │
//! │  ───────────────            ───────                  ──────────         │
//! │                                                                         │
//! │  qtd30  = "2"   ──────────► vela_30g  (8×5×8, 0.06kg) ──► {.., qty: 2}  │
//! │  qtd110 = ""    ──────────► vela_110g (skipped, qty 0)                  │
//! │                                                                         │
//! │  Output order follows CATALOG order, never field-edit order.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is a fixed two-candle table standing in for a real cart
//! integration. Swap [`extract_line_items`] out when the shop gets one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::money::{self, Money};

// =============================================================================
// Product Catalog
// =============================================================================

/// A sellable variant with the physical attributes the carrier needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductVariant {
    /// Identifier sent to the quoting API.
    pub id: &'static str,

    /// Input field holding the ordered quantity.
    pub field_id: &'static str,

    /// Package width in centimeters.
    pub width_cm: u32,

    /// Package height in centimeters.
    pub height_cm: u32,

    /// Package length in centimeters.
    pub length_cm: u32,

    /// Unit weight in kilograms.
    pub weight_kg: f64,

    /// Declared value per unit.
    pub insurance_value: Money,
}

/// The two candle sizes sold by the shop, in display order.
pub const CATALOG: [ProductVariant; 2] = [
    ProductVariant {
        id: "vela_30g",
        field_id: "qtd30",
        width_cm: 8,
        height_cm: 5,
        length_cm: 8,
        weight_kg: 0.06,
        insurance_value: Money::from_reais(30),
    },
    ProductVariant {
        id: "vela_110g",
        field_id: "qtd110",
        width_cm: 10,
        height_cm: 6,
        length_cm: 10,
        weight_kg: 0.15,
        insurance_value: Money::from_reais(60),
    },
];

/// Looks up a catalog variant by its quantity field ID.
pub fn variant_for_field(field_id: &str) -> Option<&'static ProductVariant> {
    CATALOG.iter().find(|v| v.field_id == field_id)
}

// =============================================================================
// Line Item
// =============================================================================

/// One entry of the `products` array in the quote request.
///
/// ## Wire Format
/// ```json
/// { "id": "vela_30g", "width": 8, "height": 5, "length": 8,
///   "weight": 0.06, "insurance_value": 30.0, "quantity": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub length: u32,
    pub weight: f64,
    #[serde(with = "money::as_decimal")]
    #[ts(type = "number")]
    pub insurance_value: Money,
    pub quantity: u32,
}

impl LineItem {
    /// Builds a line item for `quantity` units of a catalog variant.
    pub fn from_variant(variant: &ProductVariant, quantity: u32) -> Self {
        LineItem {
            id: variant.id.to_string(),
            width: variant.width_cm,
            height: variant.height_cm,
            length: variant.length_cm,
            weight: variant.weight_kg,
            insurance_value: variant.insurance_value,
            quantity,
        }
    }
}

// =============================================================================
// Cart Quantities
// =============================================================================

/// Raw quantity field values, keyed by field ID.
///
/// Values are stored exactly as typed; parsing happens at extraction time so
/// the UI can echo back what the shopper entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartQuantities {
    fields: BTreeMap<String, String>,
}

impl CartQuantities {
    /// Creates an empty set of fields (every quantity reads as 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current value of a quantity field.
    pub fn set(&mut self, field_id: impl Into<String>, raw: impl Into<String>) {
        self.fields.insert(field_id.into(), raw.into());
    }

    /// Builder-style [`CartQuantities::set`].
    pub fn with(mut self, field_id: impl Into<String>, raw: impl Into<String>) -> Self {
        self.set(field_id, raw);
        self
    }

    /// Returns the raw value of a field, or `""` if never set.
    pub fn raw(&self, field_id: &str) -> &str {
        self.fields.get(field_id).map(String::as_str).unwrap_or("")
    }

    /// Returns the parsed quantity of a field.
    pub fn quantity(&self, field_id: &str) -> u32 {
        parse_quantity(self.raw(field_id))
    }
}

/// Parses a quantity field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty, negative, fractional or non-numeric input counts as 0
/// - `"3.0"` is accepted as 3
pub fn parse_quantity(raw: &str) -> u32 {
    let raw = raw.trim();
    if let Ok(qty) = raw.parse::<u32>() {
        return qty;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 => {
            value as u32
        }
        _ => 0,
    }
}

/// Extracts the line items to quote, in catalog order.
///
/// Variants whose quantity is 0 are left out, so an empty result means the
/// cart has nothing to ship.
pub fn extract_line_items(quantities: &CartQuantities) -> Vec<LineItem> {
    CATALOG
        .iter()
        .filter_map(|variant| {
            let qty = quantities.quantity(variant.field_id);
            (qty > 0).then(|| LineItem::from_variant(variant, qty))
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2"), 2);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("3.0"), 3);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("-1"), 0);
        assert_eq!(parse_quantity("1.5"), 0);
    }

    #[test]
    fn test_empty_cart_extracts_nothing() {
        assert!(extract_line_items(&CartQuantities::new()).is_empty());

        let zeros = CartQuantities::new().with("qtd30", "0").with("qtd110", "0");
        assert!(extract_line_items(&zeros).is_empty());
    }

    #[test]
    fn test_zero_quantity_is_excluded() {
        let quantities = CartQuantities::new().with("qtd30", "0").with("qtd110", "3");
        let items = extract_line_items(&quantities);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "vela_110g");
        assert_eq!(items[0].quantity, 3);
        assert_eq!(items[0].insurance_value, Money::from_reais(60));
    }

    #[test]
    fn test_both_variants_in_catalog_order() {
        // Fields set in reverse order still come out in catalog order
        let quantities = CartQuantities::new().with("qtd110", "1").with("qtd30", "2");
        let items = extract_line_items(&quantities);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["vela_30g", "vela_110g"]);
        assert_eq!(items[0].quantity, 2);
        assert_eq!((items[0].width, items[0].height, items[0].length), (8, 5, 8));
        assert_eq!(items[0].weight, 0.06);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let quantities = CartQuantities::new().with("qtd500", "4");
        assert!(extract_line_items(&quantities).is_empty());
        assert_eq!(quantities.raw("qtd500"), "4");
    }

    #[test]
    fn test_variant_for_field() {
        assert_eq!(variant_for_field("qtd30").map(|v| v.id), Some("vela_30g"));
        assert!(variant_for_field("nope").is_none());
    }

    #[test]
    fn test_line_item_wire_format() {
        let item = LineItem::from_variant(&CATALOG[0], 2);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], "vela_30g");
        assert_eq!(json["insurance_value"], 30.0);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["weight"], 0.06);
    }
}
