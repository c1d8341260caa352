//! Schedule payload validation: the JSON well-formedness gate.
//!
//! Write and read sides are deliberately asymmetric, captured by
//! [`PayloadPolicy`]: writes are strict so malformed payloads never reach
//! the database, reads are lenient so a corrupt legacy row is surfaced as
//! a raw string instead of failing the whole read.

use serde_json::Value;

use crate::error::CoreError;

/// The payload handling policy this service runs with.
///
/// Named rather than implied: unifying the two sides would either lose
/// corrupt rows (strict reads) or let bad payloads in (lenient writes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadPolicy {
    pub strict_on_write: bool,
    pub strict_on_read: bool,
}

/// The active policy.
pub const POLICY: PayloadPolicy = PayloadPolicy {
    strict_on_write: true,
    strict_on_read: false,
};

/// Validate a schedule payload for storage, returning the string to persist.
///
/// - `Null` (absent) payloads are rejected;
/// - a pre-serialized string must parse as JSON and is returned exactly
///   as supplied, preserving the caller's formatting;
/// - any other JSON value is serialized.
pub fn validate_for_storage(data: &Value) -> Result<String, CoreError> {
    match data {
        Value::Null => Err(CoreError::Validation("schedule data is required".into())),
        Value::String(raw) => {
            if raw.trim().is_empty() {
                return Err(CoreError::Validation("schedule data is required".into()));
            }
            if serde_json::from_str::<Value>(raw).is_err() {
                return Err(CoreError::Validation(
                    "schedule data is not valid JSON".into(),
                ));
            }
            Ok(raw.clone())
        }
        other => serde_json::to_string(other).map_err(|error| {
            CoreError::Validation(format!("schedule data cannot be serialized: {error}"))
        }),
    }
}

/// Parse a stored payload back into a JSON value.
///
/// Lenient by policy: a row that no longer parses is logged and returned
/// as a raw string value so the read still succeeds.
pub fn parse_stored(raw: &str) -> Value {
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, "stored schedule payload is not valid JSON, returning raw string");
            Value::String(raw.to_string())
        }
    }
}
