use proptest::prelude::*;
use rememberizer::mcp::RememberizerTool;
use rememberizer::uri::{PrimaryKey, ResourceHost};
use rememberizer::{document_uri, ClientConfig, DocumentRecord, McpServer, ResourceUri};
use rmcp::model::{ErrorCode, RawContent, ResourceContents};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(mock: &MockServer) -> McpServer {
    let config = ClientConfig::new(mock.uri(), "integration-token").unwrap();
    McpServer::from_config(&config).unwrap()
}

fn arguments(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("arguments must be an object"),
    }
}

#[tokio::test]
async fn test_search_then_read_listed_resource() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/search/"))
        .and(query_param("q", "deploy process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"document": {"pk": 5, "integration_type": "slack"}, "matched_content": "deploy on Tuesdays"}]
        })))
        .expect(1)
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"pk": 5, "name": "#ops", "integration_type": "slack"}]
        })))
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path("/discussions/5/contents/"))
        .and(query_param("integration_type", "slack"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"content": "deploy on Tuesdays"})),
        )
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);

    let result = server
        .call_tool_by_name(
            RememberizerTool::Search.as_str(),
            arguments(json!({"match_this": "deploy process"})),
        )
        .await
        .unwrap();
    let text = match &result.content[0].raw {
        RawContent::Text(t) => t.text.clone(),
        _ => panic!("expected text content"),
    };
    assert!(text.contains("deploy on Tuesdays"));

    let resources = server.list_document_resources().await.unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].raw.uri, "rememberizer://slack/5");

    let contents = server
        .read_document_resource(&resources[0].raw.uri)
        .await
        .unwrap();
    match contents {
        ResourceContents::TextResourceContents { text, uri, .. } => {
            assert_eq!(text, "deploy on Tuesdays");
            assert_eq!(uri, "rememberizer://slack/5");
        }
        _ => panic!("expected text contents"),
    }
}

#[tokio::test]
async fn test_unauthorized_tool_call_names_the_token() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock)
        .await;

    let err = server_for(&mock)
        .call_tool_by_name(
            RememberizerTool::ListDocuments.as_str(),
            serde_json::Map::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_REQUEST);
    assert!(err.message.contains("REMEMBERIZER API token"));
}

#[tokio::test]
async fn test_every_listed_tool_has_object_schema() {
    let mock = MockServer::start().await;
    let server = server_for(&mock);

    let tools = server.tool_registry().list_tools();
    assert_eq!(tools.len(), RememberizerTool::ALL.len());
    for tool in tools {
        assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
        assert!(tool.name.parse::<RememberizerTool>().is_ok());
    }
}

proptest! {
    #[test]
    fn test_document_uri_parses_back(pk in any::<i64>(), slack: bool) {
        let record = DocumentRecord {
            integration_type: if slack { "slack" } else { "google_drive" }.to_string(),
            pk: PrimaryKey::Number(pk.into()),
            name: None,
        };

        let uri = document_uri(&record);
        let parsed = ResourceUri::parse(&uri).unwrap();

        let expected_host = if slack { ResourceHost::Slack } else { ResourceHost::Document };
        prop_assert_eq!(parsed.host, expected_host);
        prop_assert_eq!(parsed.id.clone(), pk.to_string());
        prop_assert_eq!(parsed.to_string(), uri);
    }

    #[test]
    fn test_document_uri_has_canonical_form(
        pk in "[A-Za-z0-9_-]{1,24}",
        other in "[A-Za-z0-9_-]{1,24}",
        integration in "[a-z_]{1,16}",
    ) {
        let record = |pk: &str| DocumentRecord {
            integration_type: integration.clone(),
            pk: PrimaryKey::Text(pk.to_string()),
            name: None,
        };

        let host = if integration == "slack" { "slack" } else { "document" };
        prop_assert_eq!(document_uri(&record(&pk)), format!("rememberizer://{host}/{pk}"));

        if pk != other {
            prop_assert_ne!(document_uri(&record(&pk)), document_uri(&record(&other)));
        }
    }

    #[test]
    fn test_large_numeric_keys_parse_back(pk in any::<u64>()) {
        let record = DocumentRecord {
            integration_type: "gmail".to_string(),
            pk: PrimaryKey::Number(pk.into()),
            name: None,
        };

        let uri = document_uri(&record);
        prop_assert_eq!(&uri, &format!("rememberizer://document/{pk}"));
        prop_assert_eq!(ResourceUri::parse(&uri).unwrap().id, pk.to_string());
    }
}
