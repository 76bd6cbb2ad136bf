//! S3 notification model and locator extraction.
//!
//! Only the first record of a notification is read. Later records are
//! ignored and counted in the logs.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::ProcessError;

/// Envelope of an S3 notification. Records stay raw so that only the first
/// one has to be well formed.
#[derive(Debug, Deserialize)]
struct S3Event {
    #[serde(rename = "Records")]
    records: Vec<Value>,
}

/// The part of a record the locator is built from. Everything else in the
/// record is read leniently, see [`ObjectNotification::from_event`].
#[derive(Debug, Deserialize)]
struct S3EventRecord {
    s3: S3Entity,
}

#[derive(Debug, Deserialize)]
struct S3Entity {
    bucket: S3Bucket,
    object: S3Object,
}

#[derive(Debug, Deserialize)]
struct S3Bucket {
    name: String,
}

#[derive(Debug, Deserialize)]
struct S3Object {
    /// URL-encoded the way S3 delivers it.
    key: String,
}

/// Bucket and key of the object an invocation works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocator {
    pub bucket: String,
    /// Decoded object key, as the storage API expects it.
    pub key: String,
}

impl ObjectLocator {
    /// Create a locator from already decoded parts.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    fn from_record(record: &S3EventRecord) -> Result<Self, ProcessError> {
        let bucket = record.s3.bucket.name.trim();
        if bucket.is_empty() {
            return Err(ProcessError::malformed("Record has an empty bucket name"));
        }

        let key = decode_key(&record.s3.object.key)?;
        if key.is_empty() {
            return Err(ProcessError::malformed("Record has an empty object key"));
        }

        Ok(Self::new(bucket, key))
    }
}

/// What an invocation reads from the first notification record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectNotification {
    pub locator: ObjectLocator,
    /// `eventName` of the record, e.g. `ObjectCreated:Put`.
    pub event_name: Option<String>,
    /// `s3.object.size` in bytes.
    pub size: Option<u64>,
}

impl ObjectNotification {
    /// Extract the locator and the logged details from the first record.
    ///
    /// `eventName` and `s3.object.size` are informational: a missing or
    /// wrongly typed value reads as `None` and never fails the record.
    ///
    /// # Errors
    ///
    /// `ProcessError::MalformedEvent` if there are no records, the first record
    /// lacks `s3.bucket.name` or `s3.object.key`, either is empty, or the key is
    /// not valid URL encoding.
    pub fn from_event(event: &Value) -> Result<Self, ProcessError> {
        let envelope = S3Event::deserialize(event)
            .map_err(|e| ProcessError::malformed(format!("Invalid notification: {}", e)))?;

        let (first, rest) = envelope
            .records
            .split_first()
            .ok_or_else(|| ProcessError::malformed("Notification has no records"))?;

        if !rest.is_empty() {
            warn!(
                ignored_records = rest.len(),
                "Notification has more than one record; only the first is processed"
            );
        }

        let record = S3EventRecord::deserialize(first)
            .map_err(|e| ProcessError::malformed(format!("Invalid record: {}", e)))?;

        Ok(Self {
            locator: ObjectLocator::from_record(&record)?,
            event_name: first
                .get("eventName")
                .and_then(Value::as_str)
                .map(str::to_string),
            size: first.pointer("/s3/object/size").and_then(Value::as_u64),
        })
    }
}

/// S3 encodes keys in notifications like a form value: `+` for a space and
/// `%XX` for everything else outside the unreserved set.
fn decode_key(raw: &str) -> Result<String, ProcessError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|key| key.into_owned())
        .map_err(|e| ProcessError::malformed(format!("Invalid object key {}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::notification;
    use serde_json::json;

    #[test]
    fn test_locator_from_well_formed_event() {
        let event = notification("uploads", "orders/42.json");

        let locator = ObjectNotification::from_event(&event).unwrap().locator;

        assert_eq!(locator, ObjectLocator::new("uploads", "orders/42.json"));
    }

    #[test]
    fn test_locator_decodes_key() {
        let event = notification("uploads", "monthly+reports/caf%C3%A9%2B1.json");

        let locator = ObjectNotification::from_event(&event).unwrap().locator;

        assert_eq!(locator.key, "monthly reports/café+1.json");
    }

    #[test]
    fn test_only_first_record_is_used() {
        let event = json!({
            "Records": [
                { "s3": { "bucket": { "name": "first" }, "object": { "key": "a.json" } } },
                { "s3": { "bucket": { "name": "second" }, "object": { "key": "b.json" } } },
                { "unexpected": true }
            ]
        });

        let locator = ObjectNotification::from_event(&event).unwrap().locator;

        assert_eq!(locator, ObjectLocator::new("first", "a.json"));
    }

    #[test]
    fn test_optional_record_fields_are_read() {
        let event = json!({
            "Records": [{
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "bucket": { "name": "uploads", "arn": "arn:aws:s3:::uploads" },
                    "object": { "key": "a.json", "size": 28, "eTag": "abc" }
                }
            }]
        });

        let notification = ObjectNotification::from_event(&event).unwrap();

        assert_eq!(notification.event_name.as_deref(), Some("ObjectCreated:Put"));
        assert_eq!(notification.size, Some(28));
    }

    #[test]
    fn test_wrongly_typed_optional_fields_do_not_fail_the_record() {
        let event = json!({
            "Records": [{
                "eventName": 7,
                "s3": {
                    "bucket": { "name": "uploads" },
                    "object": { "key": "a.json", "size": "28" }
                }
            }]
        });

        let notification = ObjectNotification::from_event(&event).unwrap();

        assert_eq!(notification.locator, ObjectLocator::new("uploads", "a.json"));
        assert_eq!(notification.event_name, None);
        assert_eq!(notification.size, None);
    }

    #[test]
    fn test_absent_optional_fields_read_as_none() {
        let event = json!({ "Records": [{ "s3": { "bucket": { "name": "uploads" }, "object": { "key": "a.json" } } }] });

        let notification = ObjectNotification::from_event(&event).unwrap();

        assert_eq!(notification.event_name, None);
        assert_eq!(notification.size, None);
    }

    #[test]
    fn test_missing_records_is_malformed() {
        let result = ObjectNotification::from_event(&json!({ "detail": {} }));
        assert!(matches!(result, Err(ProcessError::MalformedEvent(_))));
    }

    #[test]
    fn test_empty_records_is_malformed() {
        let result = ObjectNotification::from_event(&json!({ "Records": [] }));
        assert!(matches!(result, Err(ProcessError::MalformedEvent(_))));
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let event = json!({ "Records": [{ "s3": { "bucket": { "name": "uploads" }, "object": {} } }] });
        let result = ObjectNotification::from_event(&event);
        assert!(matches!(result, Err(ProcessError::MalformedEvent(_))));
    }

    #[test]
    fn test_missing_bucket_is_malformed() {
        let event = json!({ "Records": [{ "s3": { "object": { "key": "a.json" } } }] });
        let result = ObjectNotification::from_event(&event);
        assert!(matches!(result, Err(ProcessError::MalformedEvent(_))));
    }

    #[test]
    fn test_wrongly_typed_key_is_malformed() {
        let event = json!({ "Records": [{ "s3": { "bucket": { "name": "uploads" }, "object": { "key": 42 } } }] });
        let result = ObjectNotification::from_event(&event);
        assert!(matches!(result, Err(ProcessError::MalformedEvent(_))));
    }

    #[test]
    fn test_empty_fields_are_malformed() {
        let result = ObjectNotification::from_event(&notification("", "a.json"));
        assert!(matches!(result, Err(ProcessError::MalformedEvent(_))));

        let result = ObjectNotification::from_event(&notification("uploads", ""));
        assert!(matches!(result, Err(ProcessError::MalformedEvent(_))));
    }

    #[test]
    fn test_invalid_key_encoding_is_malformed() {
        let result = ObjectNotification::from_event(&notification("uploads", "bad%FF.json"));
        assert!(matches!(result, Err(ProcessError::MalformedEvent(_))));
    }
}
