//! Value types exchanged with the storage and search collaborators.

use serde_json::Value;

/// An object fetched from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// The object's full content.
    pub bytes: Vec<u8>,
    /// The content type reported by storage, if any.
    pub content_type: Option<String>,
}

impl StoredObject {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Acknowledgement returned by the search engine for a single index request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexAcknowledgement {
    /// Identifier the engine assigned to the new document.
    pub id: Option<String>,
    /// Outcome reported by the engine (`created`, `updated`, ...).
    pub result: Option<String>,
}

impl IndexAcknowledgement {
    /// Read the acknowledgement out of an index response body.
    ///
    /// Missing fields are left as `None`; the engine has already accepted the
    /// write by the time this is called.
    pub fn from_response_body(body: &Value) -> Self {
        Self {
            id: body.get("_id").and_then(Value::as_str).map(str::to_string),
            result: body
                .get("result")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}
