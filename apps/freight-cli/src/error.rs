//! # API Error Type
//!
//! Unified error type for widget commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Freight Widget                     │
//! │                                                                         │
//! │  Front-end                   Rust Controller                            │
//! │  ─────────                   ───────────────                            │
//! │                                                                         │
//! │  "calcular" clicked                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Precondition? ─── CoreError::InvalidPostalCode ───┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Transport / API? ─── ClientError::Status ──────► ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.message is the pt-BR status line shown to the shopper               │
//! │  e.code    is for programmatic handling                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use freight_client::ClientError;
use freight_core::{messages, CoreError, ValidationError};

/// Error returned from widget commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INCOMPLETE_QUOTE",
///   "message": "Não foi possível obter PAC e SEDEX para este CEP."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Shopper-facing message
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Postal code does not have eight digits
    InvalidPostalCode,

    /// No cart line with a positive quantity
    EmptyCart,

    /// Input validation failed (radio, selector, quantity field)
    ValidationError,

    /// The quoting API answered with an error status
    ServerError,

    /// The API answered without both PAC and SEDEX
    IncompleteQuote,

    /// Network failure, timeout or unreadable response
    Connectivity,

    /// A newer request or a delivery-mode change replaced this one
    Superseded,

    /// Internal error (configuration, poisoned state)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates the error for a response that arrived after being replaced.
    pub fn superseded() -> Self {
        ApiError::new(ErrorCode::Superseded, "Quote request superseded")
    }

    /// True when the status line should show this error.
    pub fn is_shown(&self) -> bool {
        !matches!(self.code, ErrorCode::Superseded | ErrorCode::ValidationError)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidPostalCode { .. } => ErrorCode::InvalidPostalCode,
            CoreError::EmptyCart => ErrorCode::EmptyCart,
            CoreError::MissingService(_) => ErrorCode::IncompleteQuote,
            CoreError::InvalidResponse(_) => ErrorCode::Connectivity,
            CoreError::Validation(inner) => {
                return ApiError::validation(inner.to_string());
            }
        };
        ApiError::new(code, messages::status_for(&err))
    }
}

/// Converts client errors to API errors.
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Quote(core) => ApiError::from(core),
            ClientError::Status { .. } => {
                ApiError::new(ErrorCode::ServerError, messages::SERVER_FAILURE)
            }
            other if other.is_config_error() => ApiError::internal(other.to_string()),
            _ => ApiError::new(ErrorCode::Connectivity, messages::CONNECTIVITY_FAILURE),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_core::ServiceLevel;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::InvalidPostalCode { digits: 4 });
        assert_eq!(err.code, ErrorCode::InvalidPostalCode);
        assert_eq!(err.message, messages::INVALID_POSTAL_CODE);

        let err = ApiError::from(CoreError::EmptyCart);
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(err.message, messages::EMPTY_CART);

        let err = ApiError::from(CoreError::MissingService(ServiceLevel::Standard));
        assert_eq!(err.code, ErrorCode::IncompleteQuote);
        assert_eq!(err.message, messages::MISSING_SERVICE);
    }

    #[test]
    fn test_client_error_mapping() {
        let err = ApiError::from(ClientError::Status {
            status: 500,
            body: "boom".into(),
        });
        assert_eq!(err.code, ErrorCode::ServerError);
        assert_eq!(err.message, messages::SERVER_FAILURE);

        for transport in [
            ClientError::Network("refused".into()),
            ClientError::Timeout(30),
            ClientError::Decode("not json".into()),
        ] {
            let err = ApiError::from(transport);
            assert_eq!(err.code, ErrorCode::Connectivity);
            assert_eq!(err.message, messages::CONNECTIVITY_FAILURE);
        }

        let err = ApiError::from(ClientError::Quote(CoreError::MissingService(
            ServiceLevel::Express,
        )));
        assert_eq!(err.message, messages::MISSING_SERVICE);

        let err = ApiError::from(ClientError::InvalidConfig("bad".into()));
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::from(CoreError::EmptyCart);
        assert_eq!(err.to_string(), messages::EMPTY_CART);

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EMPTY_CART");
        assert_eq!(json["message"], messages::EMPTY_CART);
    }

    #[test]
    fn test_is_shown() {
        assert!(ApiError::from(CoreError::EmptyCart).is_shown());
        assert!(!ApiError::superseded().is_shown());
        assert!(!ApiError::validation("bad radio").is_shown());
    }
}
