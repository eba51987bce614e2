//! End-to-end tests for the `internet_search` tool against a mock SearXNG.

use std::sync::Arc;

use internet_search::{InternetSearchTool, PluginConfig, Tool};
use searxng_search::{CancellationToken, RoutingResolver};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tool_for(server: &MockServer) -> InternetSearchTool {
    InternetSearchTool::new(PluginConfig {
        searxng_url: Some(server.uri()),
        searxng_token: None,
    })
    .with_resolver(Arc::new(RoutingResolver::new()))
}

fn results_body(n: usize) -> Value {
    let results: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "title": format!("Result {i}"),
                "url": format!("https://example{i}.test"),
                "content": format!("<b>snippet</b>   {i}")
            })
        })
        .collect();
    json!({ "results": results })
}

async fn mount_search(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_config(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "engines": [{"name": "duckduckgo", "enabled": true, "categories": ["general"]}]
        })))
        .mount(server)
        .await;
}

fn payload(result: &internet_search::ToolResult) -> Value {
    let text = result.first_text().expect("text block");
    serde_json::from_str(text).expect("payload is JSON")
}

#[tokio::test]
async fn missing_url_fails_without_network() {
    let server = MockServer::start().await;
    let tool = InternetSearchTool::new(PluginConfig::default());

    let err = tool
        .execute(json!({"query": "rust"}), CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "CONFIG_INVALID");
    assert!(err.to_string().contains("searxngUrl is required"));

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn returns_pretty_results_payload() {
    let server = MockServer::start().await;
    mount_config(&server).await;
    mount_search(&server, ResponseTemplate::new(200).set_body_json(results_body(2))).await;

    let result = tool_for(&server)
        .execute(json!({"query": "rust"}), CancellationToken::new())
        .await
        .expect("search succeeds");

    let text = result.first_text().expect("text block");
    assert!(text.starts_with("{\n  \"results\": ["));

    let value = payload(&result);
    let results = value["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "Result 0");
    assert_eq!(results[0]["url"], "https://example0.test");
    assert_eq!(results[0]["snippet"], "snippet 0");
}

#[tokio::test]
async fn count_argument_is_clamped() {
    let server = MockServer::start().await;
    mount_config(&server).await;
    mount_search(&server, ResponseTemplate::new(200).set_body_json(results_body(15))).await;

    let result = tool_for(&server)
        .execute(json!({"query": "rust", "count": 20}), CancellationToken::new())
        .await
        .expect("search succeeds");
    assert_eq!(payload(&result)["results"].as_array().map(Vec::len), Some(10));
}

#[tokio::test]
async fn fractional_count_truncates() {
    let server = MockServer::start().await;
    mount_config(&server).await;
    mount_search(&server, ResponseTemplate::new(200).set_body_json(results_body(8))).await;

    let result = tool_for(&server)
        .execute(json!({"query": "rust", "count": 3.9}), CancellationToken::new())
        .await
        .expect("search succeeds");
    assert_eq!(payload(&result)["results"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn non_success_status_is_backend_http_error() {
    let server = MockServer::start().await;
    mount_search(&server, ResponseTemplate::new(503)).await;

    let err = tool_for(&server)
        .execute(
            json!({"query": "rust", "category": "news"}),
            CancellationToken::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "BACKEND_HTTP");
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("SearXNG HTTP 503"));
}

#[tokio::test]
async fn news_category_skips_probe() {
    let server = MockServer::start().await;
    mount_search(&server, ResponseTemplate::new(200).set_body_json(results_body(1))).await;

    tool_for(&server)
        .execute(
            json!({"query": "headlines", "category": "news"}),
            CancellationToken::new(),
        )
        .await
        .expect("search succeeds");

    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), "/search");
    let categories = received[0]
        .url
        .query_pairs()
        .find(|(k, _)| k == "categories")
        .map(|(_, v)| v.into_owned());
    assert_eq!(categories.as_deref(), Some("news"));
}

#[tokio::test]
async fn invalid_arguments_never_reach_backend() {
    let server = MockServer::start().await;
    let tool = tool_for(&server);

    for args in [
        json!({}),
        json!({"query": ""}),
        json!({"query": "q", "category": "videos"}),
        json!({"query": "q", "count": "many"}),
    ] {
        let err = tool
            .execute(args, CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENTS");
    }

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn cancelled_token_fails_invocation() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(results_body(1))
            .set_delay(std::time::Duration::from_secs(30)),
    )
    .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = tool_for(&server)
        .execute(json!({"query": "q", "category": "social"}), cancel)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "CANCELLED");
}
