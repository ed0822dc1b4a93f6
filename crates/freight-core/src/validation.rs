//! # Validation Module
//!
//! Input checks for values arriving from the UI.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input mask (postal_code::mask_postal_code)                    │
//! │  └── Immediate feedback while typing, never rejects                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Radio and selector values                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Quoting API                                                  │
//! │  └── Carrier coverage for the destination                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::quote::ServiceLevel;
use crate::state::DeliveryMode;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an option radio value.
///
/// ```rust
/// use freight_core::validation::validate_service_choice;
/// use freight_core::ServiceLevel;
///
/// assert_eq!(validate_service_choice("SEDEX").unwrap(), ServiceLevel::Express);
/// assert!(validate_service_choice("").is_err());
/// ```
pub fn validate_service_choice(value: &str) -> ValidationResult<ServiceLevel> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "service".to_string(),
        });
    }
    value.parse()
}

/// Validates a delivery-location selector value.
pub fn validate_delivery_mode(value: &str) -> ValidationResult<DeliveryMode> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "delivery".to_string(),
        });
    }
    value.parse()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_service_choice() {
        assert_eq!(validate_service_choice("PAC").unwrap(), ServiceLevel::Standard);
        assert!(matches!(
            validate_service_choice("  "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_service_choice("MINI"),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_validate_delivery_mode() {
        assert_eq!(validate_delivery_mode("Frete").unwrap(), DeliveryMode::Mail);
        assert!(validate_delivery_mode("").is_err());
        assert!(validate_delivery_mode("Lisboa").is_err());
    }
}
