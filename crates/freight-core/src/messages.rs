//! # Shopper Messages
//!
//! Every status text the widget shows. The shop sells in Brazil, so the
//! strings are pt-BR; diagnostics for developers stay in English and go to
//! the log, never here.

use crate::error::CoreError;

/// Postal code does not have eight digits.
pub const INVALID_POSTAL_CODE: &str = "Informe um CEP válido (00000-000).";

/// No cart line has a positive quantity.
pub const EMPTY_CART: &str = "Adicione itens no carrinho antes de calcular o frete.";

/// Request in flight.
pub const CALCULATING: &str = "Calculando frete...";

/// Quote succeeded; a choice is now mandatory.
pub const CHOOSE_OPTION: &str = "Frete calculado. Selecione PAC ou SEDEX (obrigatório).";

/// The API answered with a non-success status.
pub const SERVER_FAILURE: &str = "Não foi possível calcular o frete agora. Tente novamente.";

/// The API answered but PAC or SEDEX is missing.
pub const MISSING_SERVICE: &str = "Não foi possível obter PAC e SEDEX para este CEP.";

/// Network failure or unreadable response.
pub const CONNECTIVITY_FAILURE: &str = "Erro ao calcular. Verifique sua conexão e tente novamente.";

/// Maps a core error to the status text shown for it.
pub fn status_for(err: &CoreError) -> &'static str {
    match err {
        CoreError::InvalidPostalCode { .. } => INVALID_POSTAL_CODE,
        CoreError::EmptyCart => EMPTY_CART,
        CoreError::MissingService(_) => MISSING_SERVICE,
        CoreError::InvalidResponse(_) | CoreError::Validation(_) => CONNECTIVITY_FAILURE,
    }
}
