//! Lenient JSON decoding for secret payloads.
//!
//! Secrets are hand-edited or written by other tooling, so decoding follows
//! the loose rules those tools assume: `null` means "not set", a repeated key
//! keeps its last value, and a bare `null` document is an empty record. Type
//! mismatches still fail.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Field deserializer treating `null` as the field's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode `raw` into a record whose fields all default.
pub fn decode_json<T>(raw: &str) -> serde_json::Result<T>
where
    T: DeserializeOwned + Default,
{
    // Going through `Value` collapses repeated keys to the last occurrence.
    match serde_json::from_str::<Value>(raw)? {
        Value::Null => Ok(T::default()),
        value => serde_json::from_value(value),
    }
}
