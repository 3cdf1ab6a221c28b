//! File record model
//!
//! A file record is a schemaless JSON document with three required
//! caller fields (`id`, `name`, `content`) and two server timestamps.
//! Anything else the caller sends is carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::ValidationError;

/// Stored file record, serialized with camelCase keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Caller-supplied identifier, unique across the collection
    pub id: String,
    pub name: String,
    /// Usually text, but any non-empty JSON payload is accepted
    pub content: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Extra caller fields, passed through opaquely
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Validated upsert body, not yet stamped with server timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct NewFile {
    pub id: String,
    pub name: String,
    pub content: JsonValue,
    pub extra: Map<String, JsonValue>,
}

impl NewFile {
    /// Parse and validate a raw request body.
    ///
    /// An empty body counts as missing fields, not as malformed JSON.
    pub fn from_body(body: &[u8]) -> Result<Self, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::MissingFields);
        }

        let value: JsonValue =
            serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)?;
        Self::from_json(value)
    }

    /// Validate an already-parsed JSON body.
    ///
    /// `id` and `name` must be non-empty strings. `content` must be present
    /// and not null, `false`, `0` or `""`. Caller-sent timestamps are
    /// discarded.
    pub fn from_json(value: JsonValue) -> Result<Self, ValidationError> {
        let JsonValue::Object(mut fields) = value else {
            return Err(ValidationError::MissingFields);
        };

        let id = take_text(&mut fields, "id");
        let name = take_text(&mut fields, "name");
        let content = fields.remove("content").filter(is_present);

        let (Some(id), Some(name), Some(content)) = (id, name, content) else {
            return Err(ValidationError::MissingFields);
        };

        fields.remove("createdAt");
        fields.remove("updatedAt");

        Ok(Self {
            id,
            name,
            content,
            extra: fields,
        })
    }

    /// Stamp both timestamps with the same instant.
    pub fn stamp(self, now: DateTime<Utc>) -> FileRecord {
        FileRecord {
            id: self.id,
            name: self.name,
            content: self.content,
            created_at: now,
            updated_at: now,
            extra: self.extra,
        }
    }
}

fn take_text(fields: &mut Map<String, JsonValue>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(JsonValue::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

/// Falsy values (null, false, 0, "") count as absent
fn is_present(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(flag) => *flag,
        JsonValue::Number(n) => n.as_f64() != Some(0.0),
        JsonValue::String(text) => !text.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}
