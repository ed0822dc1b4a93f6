//! # Error Types
//!
//! Domain-specific error types for freight-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  freight-core errors (this file)                                       │
//! │  ├── CoreError        - Quote preconditions and quote content          │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  freight-client errors (separate crate)                                │
//! │  └── ClientError      - HTTP, timeout, decoding, config                │
//! │                                                                         │
//! │  freight-cli errors (in app)                                           │
//! │  └── ApiError         - What the shopper sees (status text)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → ApiError → View     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (digit count, service name)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to exactly one shopper-facing status message

use thiserror::Error;

use crate::quote::ServiceLevel;

// =============================================================================
// Core Error
// =============================================================================

/// Core widget errors.
///
/// These represent either a precondition that blocks the quote request or a
/// quote response that cannot be turned into a complete [`FreightQuote`].
///
/// [`FreightQuote`]: crate::quote::FreightQuote
#[derive(Debug, Error)]
pub enum CoreError {
    /// Postal code does not normalize to exactly eight digits.
    ///
    /// ## User Workflow
    /// ```text
    /// CEP input: "0131-01"
    ///      │
    ///      ▼
    /// digits: "013101" (6 digits)
    ///      │
    ///      ▼
    /// InvalidPostalCode { digits: 6 }
    ///      │
    ///      ▼
    /// Status: "Informe um CEP válido (00000-000)."  (no network call)
    /// ```
    #[error("Postal code must have 8 digits, got {digits}")]
    InvalidPostalCode { digits: usize },

    /// No cart line has a positive quantity.
    #[error("Cart has no items to ship")]
    EmptyCart,

    /// The quote response lacks one of the two required services.
    ///
    /// ## When This Occurs
    /// - The carrier does not serve the destination with that service
    /// - The quoting API renamed its options
    #[error("Quote response has no {0} option")]
    MissingService(ServiceLevel),

    /// The quote response body is not the expected shape.
    #[error("Invalid quote response: {0}")]
    InvalidResponse(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Field-level failures on values the shopper typed or the UI sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidPostalCode { digits: 6 };
        assert_eq!(err.to_string(), "Postal code must have 8 digits, got 6");

        let err = CoreError::MissingService(ServiceLevel::Express);
        assert_eq!(err.to_string(), "Quote response has no SEDEX option");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NotAllowed {
            field: "service".to_string(),
            allowed: vec!["PAC".to_string(), "SEDEX".to_string()],
        };
        assert_eq!(err.to_string(), "service must be one of: [\"PAC\", \"SEDEX\"]");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "delivery".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
