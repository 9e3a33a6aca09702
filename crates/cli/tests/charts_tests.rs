//! Integration tests for `niord-cli charts`.

mod common;

use common::niord_cmd_with_base_url;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn charts_body() -> serde_json::Value {
    json!([
        {"chartNumber": "101", "internationalNumber": 1301, "active": true,
         "name": "North Sea", "scale": 300000, "horizontalDatum": "WGS84"},
        {"chartNumber": "205", "active": false, "name": "Baltic"}
    ])
}

async fn mount_charts(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/charts/all"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(charts_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_charts_list_table() {
    let server = MockServer::start().await;
    mount_charts(&server).await;

    niord_cmd_with_base_url(&server.uri())
        .args(["charts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number\tIntl\tName"))
        .stdout(predicate::str::contains("101\t1301\tNorth Sea\t1:300000\tWGS84\tyes"))
        .stdout(predicate::str::contains("205\t-\tBaltic\t-\t-\tno"));
}

#[tokio::test]
async fn test_charts_list_filtered_json() {
    let server = MockServer::start().await;
    mount_charts(&server).await;

    let output = niord_cmd_with_base_url(&server.uri())
        .args(["-o", "json", "charts", "list", "--filter", "BALT"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let charts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(charts.as_array().unwrap().len(), 1);
    assert_eq!(charts[0]["chartNumber"], "205");
}

#[tokio::test]
async fn test_charts_list_paged() {
    let server = MockServer::start().await;
    mount_charts(&server).await;

    niord_cmd_with_base_url(&server.uri())
        .args(["charts", "list", "--page-size", "1", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Baltic"))
        .stdout(predicate::str::contains("North Sea").not())
        .stdout(predicate::str::contains("Page 2 of 2 (2 total)"));
}

#[tokio::test]
async fn test_charts_delete_forced() {
    let server = MockServer::start().await;
    mount_charts(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/rest/charts/chart/101"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    niord_cmd_with_base_url(&server.uri())
        .args(["charts", "delete", "101", "--force"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Chart '101' deleted successfully"));
}

#[tokio::test]
async fn test_charts_delete_failure_reports_toast() {
    let server = MockServer::start().await;
    mount_charts(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/rest/charts/chart/101"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    niord_cmd_with_base_url(&server.uri())
        .args(["charts", "delete", "101", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error saving chart"));
}

#[tokio::test]
async fn test_charts_copy_posts_new_chart() {
    let server = MockServer::start().await;
    mount_charts(&server).await;
    Mock::given(method("POST"))
        .and(path("/rest/charts/chart/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chartNumber": "102", "active": true, "name": "North Sea East"
        })))
        .expect(1)
        .mount(&server)
        .await;

    niord_cmd_with_base_url(&server.uri())
        .args([
            "charts", "copy", "101", "--new-number", "102", "--name", "North Sea East",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Chart '102' created from '101'"));

    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&post.body).unwrap();
    assert_eq!(body["chartNumber"], "102");
    assert_eq!(body["internationalNumber"], 1301);
}
