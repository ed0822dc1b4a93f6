//! # Postal Code Module
//!
//! Normalization and display masking for Brazilian postal codes (CEP).
//!
//! ## Mask Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Keystroke-by-keystroke                                                 │
//! │                                                                         │
//! │  typed        digits       masked                                       │
//! │  ─────        ──────       ──────                                       │
//! │  "0"          "0"          "0"                                          │
//! │  "01310"      "01310"      "01310"                                      │
//! │  "013101"     "013101"     "01310-1"        ← hyphen after 5th digit    │
//! │  "01310-1009" "013101009"  "01310-100"      ← truncated to 8 digits     │
//! │  "ab01.310x"  "01310"      "01310"          ← non-digits dropped        │
//! │                                                                         │
//! │  mask(mask(x)) == mask(x)                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::{POSTAL_CODE_DIGITS, POSTAL_CODE_PREFIX_DIGITS};

/// Keeps only ASCII digits, in order.
///
/// ```rust
/// use freight_core::postal_code::only_digits;
///
/// assert_eq!(only_digits("01310-100"), "01310100");
/// assert_eq!(only_digits(" abc "), "");
/// ```
pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Applies the `NNNNN-NNN` display mask to raw input.
///
/// Strips non-digits, truncates to eight digits and inserts a hyphen after
/// the fifth digit once a sixth is present.
pub fn mask_postal_code(input: &str) -> String {
    let digits: String = only_digits(input)
        .chars()
        .take(POSTAL_CODE_DIGITS)
        .collect();

    if digits.len() > POSTAL_CODE_PREFIX_DIGITS {
        let (prefix, suffix) = digits.split_at(POSTAL_CODE_PREFIX_DIGITS);
        format!("{}-{}", prefix, suffix)
    } else {
        digits
    }
}

/// Normalizes input to the eight digits sent to the quoting API.
///
/// ## Errors
/// [`CoreError::InvalidPostalCode`] when the digit count is not exactly 8.
/// Unlike [`mask_postal_code`], extra digits are an error, not truncated.
pub fn normalize_postal_code(input: &str) -> CoreResult<String> {
    let digits = only_digits(input);
    if digits.len() != POSTAL_CODE_DIGITS {
        return Err(CoreError::InvalidPostalCode {
            digits: digits.len(),
        });
    }
    Ok(digits)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mask_progression() {
        assert_eq!(mask_postal_code(""), "");
        assert_eq!(mask_postal_code("0"), "0");
        assert_eq!(mask_postal_code("01310"), "01310");
        assert_eq!(mask_postal_code("013101"), "01310-1");
        assert_eq!(mask_postal_code("01310100"), "01310-100");
    }

    #[test]
    fn test_mask_truncates_and_strips() {
        assert_eq!(mask_postal_code("01310-1009999"), "01310-100");
        assert_eq!(mask_postal_code("ab01.310x100"), "01310-100");
        assert_eq!(mask_postal_code("CEP: "), "");
    }

    #[test]
    fn test_mask_is_idempotent_on_samples() {
        for input in ["", "1", "12345", "123456", "12345-678", "99999999"] {
            let once = mask_postal_code(input);
            assert_eq!(mask_postal_code(&once), once);
        }
    }

    #[test]
    fn test_normalize_postal_code() {
        assert_eq!(normalize_postal_code("01310-100").unwrap(), "01310100");
        assert_eq!(normalize_postal_code(" 01310100 ").unwrap(), "01310100");

        assert!(matches!(
            normalize_postal_code("01310-10"),
            Err(CoreError::InvalidPostalCode { digits: 7 })
        ));
        assert!(matches!(
            normalize_postal_code("013101000"),
            Err(CoreError::InvalidPostalCode { digits: 9 })
        ));
        assert!(normalize_postal_code("").is_err());
    }

    proptest! {
        #[test]
        fn test_mask_shape_preserves_digits(digits in "[0-9]{1,8}") {
            let masked = mask_postal_code(&digits);

            let (prefix, suffix) = match masked.split_once('-') {
                Some((p, s)) => (p, Some(s)),
                None => (masked.as_str(), None),
            };
            prop_assert!((1..=5).contains(&prefix.len()));
            prop_assert!(prefix.chars().all(|c| c.is_ascii_digit()));
            if let Some(s) = suffix {
                prop_assert_eq!(prefix.len(), 5);
                prop_assert!((1..=3).contains(&s.len()));
                prop_assert!(s.chars().all(|c| c.is_ascii_digit()));
            }

            prop_assert_eq!(only_digits(&masked), digits);
        }

        #[test]
        fn test_mask_idempotent(input in ".{0,20}") {
            let once = mask_postal_code(&input);
            prop_assert_eq!(mask_postal_code(&once), once);
        }
    }
}
