//! End-to-end tests of [`NiordClient`] against a mock server.
//!
//! # Invariants
//! - The bearer token and `NiordDomain` header are sent on every request
//! - Download URLs embed a freshly requested admin ticket

use niord_client::NiordClient;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NiordClient {
    NiordClient::builder()
        .base_url(server.uri())
        .access_token(SecretString::new("test-token".to_string().into()))
        .domain("niord-client-nw".to_string())
        .max_retries(0)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_requests_carry_token_and_domain() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/charts/all"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("NiordDomain", "niord-client-nw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let charts = client_for(&mock_server).list_charts().await.unwrap();
    assert!(charts.is_empty());
}

#[tokio::test]
async fn test_batch_download_url_uses_ticket() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/tickets/ticket"))
        .and(query_param("role", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("tkt-1"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = client.batch_download_url(42, "messages.json").await.unwrap();

    assert_eq!(
        url,
        format!(
            "{}/rest/batch/instance/42/download/messages.json?ticket=tkt-1",
            mock_server.uri()
        )
    );
}

#[tokio::test]
async fn test_templates_export_url_uses_ticket() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/tickets/ticket"))
        .respond_with(ResponseTemplate::new(200).set_body_string("tkt-2"))
        .mount(&mock_server)
        .await;

    let url = client_for(&mock_server).templates_export_url().await.unwrap();

    assert_eq!(
        url,
        format!("{}/rest/templates/all?ticket=tkt-2", mock_server.uri())
    );
}
