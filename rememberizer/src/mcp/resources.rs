//! Documents and Slack discussions exposed as MCP resources

use crate::client::ApiClient;
use crate::endpoints::{document_contents, slack_discussion_contents, LIST_DOCUMENTS_PATH};
use crate::uri::{DocumentRecord, ResourceHost, ResourceUri};
use crate::Result;
use rmcp::model::{Annotated, RawResource, Resource, ResourceContents};
use serde_json::Value;
use std::sync::Arc;

/// MIME type reported for every resource
pub const RESOURCE_MIME_TYPE: &str = "text/plain";

/// Lists and reads documents through their `rememberizer://` URIs
#[derive(Debug, Clone)]
pub struct DocumentResources {
    client: Arc<ApiClient>,
}

impl DocumentResources {
    /// Create a resource handler backed by the given client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List every document the token can see as a resource.
    ///
    /// Records without a `pk` or `integration_type` are skipped.
    pub async fn list(&self) -> Result<Vec<Resource>> {
        let data = self.client.get(LIST_DOCUMENTS_PATH, &[]).await?;

        let resources: Vec<Resource> = document_records(&data)
            .iter()
            .filter_map(|value| match DocumentRecord::from_value(value) {
                Ok(record) => Some(to_resource(&record)),
                Err(e) => {
                    tracing::warn!("Skipping document without a canonical URI: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Listed {} document resources", resources.len());
        Ok(resources)
    }

    /// Read the text of the resource behind `uri`
    pub async fn read(&self, uri: &str) -> Result<ResourceContents> {
        let parsed = ResourceUri::parse(uri)?;
        let path = match parsed.host {
            ResourceHost::Document => document_contents(&parsed.id),
            ResourceHost::Slack => slack_discussion_contents(&parsed.id),
        };

        let data = self.client.get(&path, &[]).await?;
        let text = match data.get("content") {
            Some(Value::String(content)) => content.clone(),
            _ => serde_json::to_string_pretty(&data)?,
        };

        Ok(ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some(RESOURCE_MIME_TYPE.to_string()),
            text,
        })
    }
}

/// The record array of a document listing, bare or inside a `results` page
fn document_records(data: &Value) -> &[Value] {
    match data {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    }
}

fn to_resource(record: &DocumentRecord) -> Resource {
    let uri = record.uri();
    let name = record.name.clone().unwrap_or_else(|| uri.clone());

    let mut raw = RawResource::new(uri, name);
    raw.description = Some(format!("{} document", record.integration_type));
    raw.mime_type = Some(RESOURCE_MIME_TYPE.to_string());
    Annotated::new(raw, None)
}
