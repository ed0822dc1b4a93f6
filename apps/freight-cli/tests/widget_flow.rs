//! End-to-end widget flow: commands, HTTP client and a mock quoting API.

use std::sync::Arc;

use freight_cli_lib::commands::{
    calculate_freight, change_delivery, choose_option, delivery_summary, postal_input,
    quantity_input,
};
use freight_cli_lib::error::ErrorCode;
use freight_cli_lib::state::WidgetState;
use freight_cli_lib::view::NoOpView;
use freight_client::{HttpQuoteClient, QuoteConfig};
use freight_core::ServiceLevel;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_api(status: u16, body: serde_json::Value) -> (MockServer, HttpQuoteClient) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/frete"))
        .and(body_partial_json(json!({ "toPostalCode": "30130010" })))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    let client =
        HttpQuoteClient::new(&QuoteConfig::with_endpoint(format!("{}/api/frete", server.uri())))
            .unwrap();
    (server, client)
}

fn shopper_ready() -> WidgetState {
    let state = WidgetState::new(Arc::new(NoOpView));
    change_delivery(&state, "Frete");
    postal_input(&state, "30130-010");
    quantity_input(&state, "qtd110", "3").unwrap();
    state
}

#[tokio::test]
async fn test_quote_choose_and_summarize() {
    let (_server, client) = mock_api(
        200,
        json!({
            "options": [
                { "name": "SEDEX", "price": "42.9", "delivery_time": 1 },
                { "name": "PAC Contrato", "price": 18.75, "delivery_time": 6 }
            ]
        }),
    )
    .await;

    let state = shopper_ready();
    let quote = calculate_freight(&state, &client).await.unwrap();
    assert_eq!(quote.option(ServiceLevel::Standard).price.cents(), 1875);
    assert_eq!(quote.option(ServiceLevel::Express).price.cents(), 4290);

    choose_option(&state, "SEDEX").unwrap();
    assert_eq!(
        delivery_summary(&state).unwrap(),
        "Local: Frete (Correios)\nCEP: 30130-010\nServiço: SEDEX\nValor do frete: R$ 42,90\nPrazo: 1 dia(s)"
    );
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let (_server, client) = mock_api(502, json!({ "error": "bad gateway" })).await;
    let state = shopper_ready();

    let err = calculate_freight(&state, &client).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ServerError);
    assert!(state.with_widget(|w| w.freight().is_empty()));
    assert_eq!(delivery_summary(&state), None);
}

#[tokio::test]
async fn test_pickup_needs_no_quote() {
    let state = WidgetState::new(Arc::new(NoOpView));
    change_delivery(&state, "Atibaia");
    assert_eq!(delivery_summary(&state).as_deref(), Some("Local: Retirada em Atibaia"));
}
