//! Postgres DSN formatting for database secrets.
//!
//! RDS-style database secrets are stored as JSON. Postgres clients want a
//! libpq key/value string instead, e.g. `host=db1 dbname=app user=u `.
//! Secrets that already hold such a string are returned untouched.

use crate::error::{Error, Operation, Result};
use crate::json::{decode_json, null_as_default};
use serde::Deserialize;
use tracing::debug;

/// JSON shape of a database secret.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DsnSource {
    // Accepted but never emitted.
    #[allow(dead_code)]
    #[serde(deserialize_with = "null_as_default")]
    engine: String,
    #[serde(deserialize_with = "null_as_default")]
    host: String,
    #[serde(deserialize_with = "null_as_default")]
    dbname: String,
    #[serde(deserialize_with = "null_as_default")]
    username: String,
    #[serde(deserialize_with = "null_as_default")]
    password: String,
    #[allow(dead_code)]
    #[serde(deserialize_with = "null_as_default")]
    port: i64,
    #[serde(deserialize_with = "null_as_default")]
    search_path: String,
    #[allow(dead_code)]
    #[serde(rename = "dbInstanceIdentifier", deserialize_with = "null_as_default")]
    db_instance_identifier: String,
}

/// True when `raw` already reads as a DSN.
///
/// Only checks that both `host=` and `dbname=` appear somewhere in the text.
/// A JSON document whose values contain both substrings also matches.
pub fn looks_like_dsn(raw: &str) -> bool {
    raw.contains("host=") && raw.contains("dbname=")
}

/// Append `name=value ` when `value` is non-empty.
pub(crate) fn push_token(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push_str(name);
    out.push('=');
    out.push_str(value);
    out.push(' ');
}

/// Convert a raw database secret into a Postgres DSN.
///
/// Text that already looks like a DSN passes through unchanged. Otherwise the
/// text is parsed as JSON and the non-empty fields are emitted in the order
/// host, dbname, user, password, search_path. Each token carries a trailing
/// space. On a JSON failure the error keeps the raw text.
pub fn format_postgres_dsn(raw: &str) -> Result<String> {
    if looks_like_dsn(raw) {
        debug!("Secret already in DSN form, passing through");
        return Ok(raw.to_string());
    }

    debug!("Converting JSON secret to DSN");
    let source: DsnSource =
        decode_json(raw).map_err(|e| Error::decode(Operation::PostgresDsn, raw, e))?;

    let mut dsn = String::new();
    push_token(&mut dsn, "host", &source.host);
    push_token(&mut dsn, "dbname", &source.dbname);
    push_token(&mut dsn, "user", &source.username);
    push_token(&mut dsn, "password", &source.password);
    push_token(&mut dsn, "search_path", &source.search_path);
    Ok(dsn)
}
