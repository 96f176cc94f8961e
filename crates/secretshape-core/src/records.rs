//! Credential records decoded from JSON secrets.

use crate::dsn::push_token;
use crate::json::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;

const MASK: &str = "***";

fn mask(value: &str) -> &str {
    if value.is_empty() { "" } else { MASK }
}

/// A generic credential, typically a database login.
///
/// Every field is optional in the source JSON; missing or `null` fields keep
/// their zero value.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credential {
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dbname: String,
}

impl Credential {
    /// Render as a libpq key/value connection string.
    ///
    /// Uses the same token rules as [`crate::format_postgres_dsn`]: each
    /// non-empty field becomes `name=value ` in a fixed order.
    pub fn to_postgres_dsn(&self) -> String {
        let mut dsn = String::new();
        push_token(&mut dsn, "host", &self.host);
        push_token(&mut dsn, "dbname", &self.dbname);
        push_token(&mut dsn, "user", &self.username);
        push_token(&mut dsn, "password", &self.password);
        dsn
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("key", &mask(&self.key))
            .field("username", &self.username)
            .field("password", &mask(&self.password))
            .field("dbname", &self.dbname)
            .finish()
    }
}

/// Credentials for an HTTP API: base URL plus key and secret.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiCredential {
    #[serde(rename = "baseURL", deserialize_with = "null_as_default")]
    pub base_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secret: String,
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("base_url", &self.base_url)
            .field("key", &mask(&self.key))
            .field("secret", &mask(&self.secret))
            .finish()
    }
}
