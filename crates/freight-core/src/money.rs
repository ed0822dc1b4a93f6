//! # Money Module
//!
//! Provides the `Money` type for freight prices and declared values.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The quoting API answers with JSON numbers:                             │
//! │    { "price": 20.5 }   (f64 on the wire)                                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer centavos                                         │
//! │    Money::from_decimal(20.5) → 2050 centavos                            │
//! │    Formatting and comparisons never touch floats again                  │
//! │                                                                         │
//! │  Floats exist only at the wire boundary (`from_decimal`, `as_decimal`). │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use freight_core::money::Money;
//!
//! let price = Money::from_cents(2050);
//! assert_eq!(price.to_brl(), "R$ 20,50");
//!
//! let big = Money::from_cents(123_456_78);
//! assert_eq!(big.to_string(), "R$ 123.456,78");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (1/100 of a Brazilian real).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  ProductVariant.insurance_value ──► LineItem ──► request JSON (decimal) │
/// │                                                                         │
/// │  response JSON price (decimal) ──► ShippingOption.price                 │
/// │                                         │                               │
/// │                                         ├──► option label "R$ 20,50"    │
/// │                                         └──► order summary line         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole reais.
    ///
    /// ```rust
    /// use freight_core::money::Money;
    ///
    /// assert_eq!(Money::from_reais(30).cents(), 3000);
    /// ```
    #[inline]
    pub const fn from_reais(reais: i64) -> Self {
        Money(reais * 100)
    }

    /// Converts a decimal amount in reais (as sent by the quoting API) into
    /// centavos, rounding to the nearest centavo.
    ///
    /// Returns `None` for NaN or infinite values.
    ///
    /// ```rust
    /// use freight_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(20.5), Some(Money::from_cents(2050)));
    /// assert_eq!(Money::from_decimal(19.999), Some(Money::from_cents(2000)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        Some(Money((amount * 100.0).round() as i64))
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion (truncated toward zero).
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in reais as a float, for the JSON wire format only.
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats the value the way pt-BR currency formatting does.
    ///
    /// ## Format
    /// ```text
    /// 2050      → "R$ 20,50"
    /// 12345678  → "R$ 123.456,78"
    /// -550      → "-R$ 5,50"
    /// ```
    /// Thousands are grouped with `.`, centavos separated with `,`.
    pub fn to_brl(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let reais = group_thousands(self.reais().unsigned_abs());
        format!("{}R$ {},{:02}", sign, reais, self.cents_part())
    }
}

/// Inserts `.` every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Serde Helper: Money as Decimal Reais
// =============================================================================

/// Serializes `Money` as a decimal number of reais (`30.0`) instead of
/// integer centavos.
///
/// ## Usage
/// ```rust,ignore
/// #[serde(with = "crate::money::as_decimal")]
/// pub insurance_value: Money,
/// ```
pub mod as_decimal {
    use super::Money;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.as_decimal())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount).ok_or_else(|| D::Error::custom("amount is not finite"))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the BRL format shown to shoppers.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_brl())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2050);
        assert_eq!(money.cents(), 2050);
        assert_eq!(money.reais(), 20);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_decimal_rounds_to_centavo() {
        assert_eq!(Money::from_decimal(35.0), Some(Money::from_cents(3500)));
        assert_eq!(Money::from_decimal(20.5), Some(Money::from_cents(2050)));
        assert_eq!(Money::from_decimal(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
    }

    #[test]
    fn test_brl_format() {
        assert_eq!(Money::from_cents(2050).to_brl(), "R$ 20,50");
        assert_eq!(Money::from_cents(3500).to_brl(), "R$ 35,00");
        assert_eq!(Money::from_cents(0).to_brl(), "R$ 0,00");
        assert_eq!(Money::from_cents(5).to_brl(), "R$ 0,05");
        assert_eq!(Money::from_cents(100_000).to_brl(), "R$ 1.000,00");
        assert_eq!(Money::from_cents(123_456_78).to_brl(), "R$ 123.456,78");
        assert_eq!(Money::from_cents(-550).to_brl(), "-R$ 5,50");
    }

    #[test]
    fn test_display_matches_brl() {
        assert_eq!(format!("{}", Money::from_reais(60)), "R$ 60,00");
    }

    #[test]
    fn test_as_decimal_serde() {
        #[derive(Serialize, Deserialize)]
        struct Wire {
            #[serde(with = "as_decimal")]
            value: Money,
        }

        let json = serde_json::to_string(&Wire {
            value: Money::from_cents(3050),
        })
        .unwrap();
        assert_eq!(json, r#"{"value":30.5}"#);

        let back: Wire = serde_json::from_str(r#"{"value":60}"#).unwrap();
        assert_eq!(back.value, Money::from_reais(60));
    }
}
