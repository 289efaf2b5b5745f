//! Per-field encode/decode strategies.
//!
//! A [`FieldCodecs`] table maps field names to a [`FieldCodec`]. Fields
//! without an entry pass through unchanged in both directions.

use crate::framework::{ResourceError, Result};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Convert = Arc<dyn Fn(Value) -> std::result::Result<Value, String> + Send + Sync>;

/// Encode (model -> wire) and decode (wire -> model) for one field.
#[derive(Clone)]
pub struct FieldCodec {
    encode: Convert,
    decode: Convert,
}

impl FieldCodec {
    pub fn new<E, D>(encode: E, decode: D) -> Self
    where
        E: Fn(Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
        D: Fn(Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    pub fn identity() -> Self {
        Self::new(Ok, Ok)
    }

    /// Dates held as ISO-8601 (`%Y-%m-%d`) in the model and as `format` on
    /// the wire. `null` passes through untouched.
    pub fn date(format: &'static str) -> Self {
        Self::new(
            move |value| reformat_date(value, "%Y-%m-%d", format),
            move |value| reformat_date(value, format, "%Y-%m-%d"),
        )
    }

    pub fn encode(&self, value: Value) -> std::result::Result<Value, String> {
        (self.encode)(value)
    }

    pub fn decode(&self, value: Value) -> std::result::Result<Value, String> {
        (self.decode)(value)
    }
}

impl fmt::Debug for FieldCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldCodec")
    }
}

fn reformat_date(value: Value, from: &str, to: &str) -> std::result::Result<Value, String> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::String(s) => NaiveDate::parse_from_str(&s, from)
            .map(|d| Value::String(d.format(to).to_string()))
            .map_err(|e| format!("`{s}` is not a date in format `{from}`: {e}")),
        other => Err(format!("expected a date string, got {other}")),
    }
}

/// Strategy table: field name -> codec.
#[derive(Clone, Debug, Default)]
pub struct FieldCodecs {
    codecs: HashMap<String, FieldCodec>,
}

impl FieldCodecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `codec` for `field`, replacing any previous entry.
    pub fn with(mut self, field: impl Into<String>, codec: FieldCodec) -> Self {
        self.codecs.insert(field.into(), codec);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldCodec> {
        self.codecs.get(field)
    }

    pub fn encode(&self, field: &str, value: Value) -> Result<Value> {
        match self.codecs.get(field) {
            Some(codec) => codec.encode(value).map_err(|e| ResourceError::field(field, e)),
            None => Ok(value),
        }
    }

    pub fn decode(&self, field: &str, value: Value) -> Result<Value> {
        match self.codecs.get(field) {
            Some(codec) => codec.decode(value).map_err(|e| ResourceError::field(field, e)),
            None => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_pass_through() {
        let codecs = FieldCodecs::new();
        assert_eq!(codecs.encode("name", json!("Joe")).unwrap(), json!("Joe"));
        assert_eq!(codecs.decode("name", json!(3)).unwrap(), json!(3));
    }

    #[test]
    fn date_codec_reformats_both_ways() {
        let codecs = FieldCodecs::new().with("birthday", FieldCodec::date("%m/%d/%Y"));

        assert_eq!(codecs.encode("birthday", json!("1980-05-01")).unwrap(), json!("05/01/1980"));
        assert_eq!(codecs.decode("birthday", json!("05/01/1980")).unwrap(), json!("1980-05-01"));
        assert_eq!(codecs.decode("birthday", Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn date_codec_rejects_garbage() {
        let codecs = FieldCodecs::new().with("birthday", FieldCodec::date("%m/%d/%Y"));
        let err = codecs.decode("birthday", json!("yesterday")).unwrap_err();
        assert!(matches!(err, ResourceError::Field { ref field, .. } if field == "birthday"));

        assert!(codecs.encode("birthday", json!(12)).is_err());
    }

    #[test]
    fn custom_codec() {
        let upper = FieldCodec::new(
            |v| Ok(Value::String(v.as_str().unwrap_or_default().to_uppercase())),
            Ok,
        );
        let codecs = FieldCodecs::new().with("code", upper);
        assert_eq!(codecs.encode("code", json!("abc")).unwrap(), json!("ABC"));
        assert_eq!(codecs.decode("code", json!("abc")).unwrap(), json!("abc"));
    }
}
