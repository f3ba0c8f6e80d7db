//! Integration tests for the HTTP transport.
//!
//! These tests run the reqwest-backed transport against a mock server and
//! verify verb mapping, options, patch content types, status decoding and
//! cancellation.

use std::time::Duration;

use kube_rest::clients::{Context, HttpClient, HttpError, Options, PatchType, StatusReason, Transport};
use kube_rest::{Credentials, HostUrl, RestConfig, SecretToken};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_bytes, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a transport pointed at the mock server.
fn create_client(server: &MockServer) -> HttpClient {
    let config = RestConfig::for_server(&server.uri()).unwrap();
    HttpClient::new(&config).unwrap()
}

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

// ============================================================================
// Verb Mapping
// ============================================================================

#[tokio::test]
async fn test_get_issues_get_to_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/a"))
        .respond_with(json(r#"{"name":"a"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let body = client.get(&Context::background(), "/test/a").await.unwrap();

    assert_eq!(body, br#"{"name":"a"}"#);
}

#[tokio::test]
async fn test_create_posts_body_with_configured_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/test"))
        .and(header("content-type", "application/json"))
        .and(body_bytes(br#"{"name":"a","id":"b"}"#.to_vec()))
        .respond_with(json(r#"{"name":"a","id":"b"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let body = client
        .create(
            &Context::background(),
            "/test",
            br#"{"name":"a","id":"b"}"#.to_vec(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(body, br#"{"name":"a","id":"b"}"#);
}

#[tokio::test]
async fn test_update_issues_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/test/a"))
        .respond_with(json("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    client
        .update(&Context::background(), "/test/a", b"{}".to_vec(), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_issues_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/test/a"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let body = client
        .delete(&Context::background(), "/test/a", None)
        .await
        .unwrap();

    assert!(body.is_empty());
}

#[tokio::test]
async fn test_patch_sends_patch_type_as_content_type() {
    let server = MockServer::start().await;
    for (patch_type, content_type) in [
        (PatchType::Json, "application/json-patch+json"),
        (PatchType::Merge, "application/merge-patch+json"),
        (PatchType::StrategicMerge, "application/strategic-merge-patch+json"),
        (PatchType::Apply, "application/apply-patch+yaml"),
    ] {
        Mock::given(method("PATCH"))
            .and(path("/test"))
            .and(header("content-type", content_type))
            .respond_with(json("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server);
        client
            .patch(&Context::background(), "/test", patch_type, b"{}".to_vec())
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_reserved_characters_are_addressed_literally() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server);
    client
        .delete(&Context::background(), "/test/a#b", None)
        .await
        .unwrap();
    client
        .delete(&Context::background(), "/test/c?x=1", None)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let seen: Vec<(String, Option<String>)> = received
        .iter()
        .map(|r| (r.url.path().to_string(), r.url.query().map(String::from)))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("/test/a%23b".to_string(), None),
            ("/test/c%3Fx=1".to_string(), None),
        ]
    );
}

#[tokio::test]
async fn test_reserved_characters_do_not_reach_other_objects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/a"))
        .respond_with(json("{}"))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/test/a%23b"))
        .respond_with(json(r#"{"name":"a#b"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let body = client.get(&Context::background(), "/test/a#b").await.unwrap();

    assert_eq!(body, br#"{"name":"a#b"}"#);
}

// ============================================================================
// Options and Headers
// ============================================================================

#[tokio::test]
async fn test_list_applies_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test"))
        .and(query_param("filter", "a"))
        .and(header("x-trace", "t1"))
        .respond_with(json(r#"{"items":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let options = Options::new().param("filter", "a").header("X-Trace", "t1");
    client
        .list(&Context::background(), "/test", Some(&options))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_options_content_type_overrides_default() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/test/a"))
        .and(header("content-type", "application/yaml"))
        .respond_with(json("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let options = Options::new().header("Content-Type", "application/yaml");
    client
        .update(
            &Context::background(),
            "/test/a",
            b"name: a".to_vec(),
            Some(&options),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/a"))
        .and(header("authorization", "Bearer secret-token"))
        .and(header("accept", "application/json"))
        .and(header_exists("user-agent"))
        .respond_with(json("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let config = RestConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .accept_content_type("application/json")
        .credentials(Credentials::Bearer(SecretToken::new("secret-token").unwrap()))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    client.get(&Context::background(), "/test/a").await.unwrap();
}

// ============================================================================
// Status Decoding
// ============================================================================

#[tokio::test]
async fn test_status_document_is_decoded() {
    let server = MockServer::start().await;
    let status = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"test \"a\" already exists","reason":"AlreadyExists","code":409}"#;
    Mock::given(method("POST"))
        .and(path("/test"))
        .respond_with(
            ResponseTemplate::new(409).set_body_raw(status.as_bytes().to_vec(), "application/json"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client
        .create(&Context::background(), "/test", b"{}".to_vec(), None)
        .await;

    match result {
        Err(HttpError::Status(error)) => {
            assert_eq!(error.code(), 409);
            assert_eq!(error.reason(), StatusReason::AlreadyExists);
            assert_eq!(error.to_string(), r#"test "a" already exists"#);
            assert_eq!(error.body(), status.as_bytes());
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_error_body_derives_reason_from_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("404 page not found"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.get(&Context::background(), "/test/missing").await;

    match result {
        Err(HttpError::Status(error)) => {
            assert_eq!(error.reason(), StatusReason::NotFound);
            assert_eq!(
                error.to_string(),
                "the server could not find the requested resource (get /test/missing)"
            );
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn test_deadline_interrupts_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(json("{}").set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let ctx = Context::background().with_timeout(Duration::from_millis(100));

    let started = std::time::Instant::now();
    let result = client.get(&ctx, "/slow").await;

    assert!(matches!(result, Err(HttpError::DeadlineExceeded)));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_cancellation_interrupts_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(json("{}").set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let token = CancellationToken::new();
    let ctx = Context::with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let started = std::time::Instant::now();
    let result = client.get(&ctx, "/slow").await;
    canceller.await.unwrap();

    assert!(matches!(result, Err(HttpError::Canceled)));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_canceled_context_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(json("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let token = CancellationToken::new();
    token.cancel();

    let result = client
        .get(&Context::with_cancellation(token), "/test/a")
        .await;

    assert!(matches!(result, Err(HttpError::Canceled)));
}
