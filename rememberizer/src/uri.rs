//! Canonical `rememberizer://` identifiers for documents and discussions

use crate::error::{RememberizerError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// URI scheme of every canonical identifier
pub const URI_SCHEME: &str = "rememberizer";

/// Integration type whose records live under the `slack` host
pub const SLACK_INTEGRATION: &str = "slack";

/// Host part of a canonical URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceHost {
    /// Slack discussion
    Slack,
    /// Any other document
    Document,
}

impl ResourceHost {
    /// Host for a record with the given integration type
    pub fn for_integration(integration_type: &str) -> Self {
        if integration_type == SLACK_INTEGRATION {
            ResourceHost::Slack
        } else {
            ResourceHost::Document
        }
    }

    /// The host as it appears in the URI
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceHost::Slack => "slack",
            ResourceHost::Document => "document",
        }
    }
}

impl fmt::Display for ResourceHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary key of a record; the service sends either a string or a number.
///
/// Numbers keep their JSON form, so keys beyond `i64` and non-integral
/// numbers render exactly as the service sent them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryKey {
    /// Numeric key
    Number(Number),
    /// String key
    Text(String),
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryKey::Number(n) => write!(f, "{n}"),
            PrimaryKey::Text(s) => f.write_str(s),
        }
    }
}

/// The part of a document record the URI builder needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Source system of the record, e.g. `slack` or `google_drive`
    pub integration_type: String,
    /// Primary key of the record
    pub pk: PrimaryKey,
    /// Display name, when the service provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DocumentRecord {
    /// Parse a record out of a JSON object returned by the service.
    ///
    /// # Errors
    ///
    /// Fails when `integration_type` or `pk` is missing or has the wrong type.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Canonical URI of this record
    pub fn uri(&self) -> String {
        document_uri(self)
    }
}

/// Build `rememberizer://{slack|document}/{pk}` for a record.
///
/// ```
/// use rememberizer::uri::{document_uri, DocumentRecord, PrimaryKey};
///
/// let record = DocumentRecord {
///     integration_type: "github".to_string(),
///     pk: PrimaryKey::Number(7u64.into()),
///     name: None,
/// };
/// assert_eq!(document_uri(&record), "rememberizer://document/7");
/// ```
pub fn document_uri(record: &DocumentRecord) -> String {
    let host = ResourceHost::for_integration(&record.integration_type);
    format!("{URI_SCHEME}://{host}/{}", record.pk)
}

/// A parsed canonical URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUri {
    /// Host part
    pub host: ResourceHost,
    /// Identifier part, the record's primary key
    pub id: String,
}

impl ResourceUri {
    /// Parse a canonical URI.
    ///
    /// # Errors
    ///
    /// Returns [`RememberizerError::InvalidUri`] for a foreign scheme, an
    /// unknown host, or an identifier that is not a single plain path segment.
    pub fn parse(uri: &str) -> Result<Self> {
        let invalid = |reason: &str| RememberizerError::InvalidUri {
            uri: uri.to_string(),
            reason: reason.to_string(),
        };

        let rest = uri
            .strip_prefix(URI_SCHEME)
            .and_then(|r| r.strip_prefix("://"))
            .ok_or_else(|| invalid("expected the rememberizer:// scheme"))?;

        let (host, id) = rest
            .split_once('/')
            .ok_or_else(|| invalid("missing identifier"))?;

        let host = match host {
            "slack" => ResourceHost::Slack,
            "document" => ResourceHost::Document,
            _ => return Err(invalid("unknown host, expected 'slack' or 'document'")),
        };

        if !is_plain_segment(id) {
            return Err(invalid("identifier must be a single plain path segment"));
        }

        Ok(Self {
            host,
            id: id.to_string(),
        })
    }
}

/// Whether `id` can be placed in a request path as one segment without escaping
fn is_plain_segment(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.chars().any(|c| {
            matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control()
        })
}

impl FromStr for ResourceUri {
    type Err = RememberizerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{URI_SCHEME}://{}/{}", self.host, self.id)
    }
}
