use futures::future::join_all;
use proptest::prelude::*;
use rememberizer::{ApiClient, ApiError, ClientConfig, HttpMethod, TimeoutConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: String) -> ApiClient {
    let config = ClientConfig::new(base_url, "integration-token").unwrap();
    ApiClient::new(&config).unwrap()
}

/// Base URL of a port nothing listens on
fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

#[tokio::test]
async fn test_refused_get_is_connection_failure() {
    let client = client_for(refused_base_url());

    let err = client.get("account/", &[]).await.unwrap_err();
    match &err {
        ApiError::ConnectionFailure { method, path, .. } => {
            assert_eq!(*method, HttpMethod::Get);
            assert_eq!(path, "account/");
        }
        other => panic!("expected ConnectionFailure, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Failed to fetch account/. Connection error.");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_refused_post_is_connection_failure() {
    let client = client_for(refused_base_url());

    let err = client
        .post("documents/memorize/", &json!({"name": "n", "content": "c"}), &[])
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to post to documents/memorize/. Connection error."
    );
}

#[tokio::test]
async fn test_unauthorized_message_is_fixed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token revoked"))
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .post("documents/agentic_search/", &json!({"query": "q"}), &[])
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(
        err.to_string(),
        "Error: Unauthorized. Please check your REMEMBERIZER API token"
    );
}

#[tokio::test]
async fn test_slow_server_hits_send_budget() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let timeouts = TimeoutConfig {
        connect: Duration::from_millis(100),
        read: Duration::from_millis(100),
        write: Duration::from_millis(100),
        pool: Duration::from_millis(100),
    };
    let config = ClientConfig::new(server.uri(), "integration-token")
        .unwrap()
        .with_timeouts(timeouts);
    let client = ApiClient::new(&config).unwrap();

    let err = client.get("documents/", &[]).await.unwrap_err();
    assert!(matches!(err, ApiError::ConnectionFailure { .. }));
}

#[tokio::test]
async fn test_concurrent_requests_are_not_cross_wired() {
    let server = MockServer::start().await;
    for i in 0..16 {
        Mock::given(method("GET"))
            .and(path(format!("/documents/{i}/contents/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": i})))
            .mount(&server)
            .await;
    }

    let client = Arc::new(client_for(server.uri()));
    let calls = (0..16).map(|i| {
        let client = client.clone();
        async move {
            let value = client
                .get(&format!("documents/{i}/contents/"), &[])
                .await
                .unwrap();
            (i, value)
        }
    });

    for (i, value) in join_all(calls).await {
        assert_eq!(value, json!({"content": i}));
    }
}

/// Arbitrary JSON, with floats limited to values whose text form parses back exactly
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1_000_000i32..1_000_000).prop_map(|n| Value::from(f64::from(n) / 8.0)),
        any::<String>().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map(any::<String>(), inner, 0..8)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_success_body_is_returned_unchanged(body in json_value()) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(path("/echo/"))
                .respond_with(ResponseTemplate::new(200).set_body_json(&body))
                .mount(&server)
                .await;
            let client = client_for(server.uri());

            let fetched = client.get("echo/", &[]).await.unwrap();
            assert_eq!(fetched, body);

            let posted = client.post("echo/", &body, &[]).await.unwrap();
            assert_eq!(posted, body);
        });
    }

    #[test]
    fn test_401_is_always_unauthorized(segment in "[a-z][a-z0-9_]{0,12}") {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(401))
                .mount(&server)
                .await;

            let err = client_for(server.uri())
                .get(&format!("{segment}/"), &[])
                .await
                .unwrap_err();
            assert!(matches!(err, ApiError::Unauthorized));
        });
    }

    #[test]
    fn test_other_error_statuses_keep_code(
        status in (400u16..600).prop_filter("401 has its own variant", |s| *s != 401),
        segment in "[a-z][a-z0-9_]{0,12}",
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&server)
                .await;

            let request_path = format!("{segment}/");
            let err = client_for(server.uri())
                .get(&request_path, &[])
                .await
                .unwrap_err();
            match err {
                ApiError::StatusFailure { method, path, status: got } => {
                    assert_eq!(method, HttpMethod::Get);
                    assert_eq!(path, request_path);
                    assert_eq!(got, status);
                }
                other => panic!("expected StatusFailure, got {other:?}"),
            }
        });
    }
}
