//! Chart endpoint tests.
//!
//! # Invariants
//! - Charts are addressed by their percent-encoded chart number
//! - A 404 on a single chart maps to `ClientError::NotFound`

mod common;

use common::*;
use niord_client::{Chart, ClientError};
use wiremock::matchers::{body_partial_json, method, path};

#[tokio::test]
async fn test_list_charts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/charts/all"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("charts/list_charts.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let charts = endpoints::list_charts(&client, &mock_server.uri(), &no_auth(), 0)
        .await
        .unwrap();

    assert_eq!(charts.len(), 2);
    assert_eq!(charts[0].chart_number.as_deref(), Some("101"));
    assert_eq!(charts[0].name.as_deref(), Some("North Sea"));
    assert!(charts[0].geometry.is_some());
    assert!(!charts[1].active);
    assert_eq!(charts[1].horizontal_datum.as_deref(), Some("ED50"));
}

#[tokio::test]
async fn test_create_chart_posts_without_chart_number_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/charts/chart/"))
        .and(body_partial_json(serde_json::json!({
            "name": "Skagerrak",
            "horizontalDatum": "WGS84"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "chartNumber": "300",
            "name": "Skagerrak",
            "horizontalDatum": "WGS84"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let chart = Chart {
        name: Some("Skagerrak".to_string()),
        ..Default::default()
    };
    let client = Client::new();
    let created = endpoints::create_chart(&client, &mock_server.uri(), &no_auth(), &chart, 0)
        .await
        .unwrap();

    assert_eq!(created.chart_number.as_deref(), Some("300"));
}

#[tokio::test]
async fn test_update_chart_uses_encoded_chart_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/rest/charts/chart/DK%2F101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "chartNumber": "DK/101"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let chart = Chart {
        chart_number: Some("DK/101".to_string()),
        ..Default::default()
    };
    let client = Client::new();
    let updated =
        endpoints::update_chart(&client, &mock_server.uri(), &no_auth(), "DK/101", &chart, 0)
            .await
            .unwrap();

    assert_eq!(updated.chart_number.as_deref(), Some("DK/101"));
}

#[tokio::test]
async fn test_get_chart_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/charts/chart/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::get_chart(&client, &mock_server.uri(), &no_auth(), "999", 0).await;

    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_chart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/charts/chart/101"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::delete_chart(&client, &mock_server.uri(), &no_auth(), "101", 0).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_invalid_json_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/charts/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::list_charts(&client, &mock_server.uri(), &no_auth(), 0).await;

    assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
}
