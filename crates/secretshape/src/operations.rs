//! Fetch a secret and reshape it.

use crate::aws::AwsSecretsBackend;
use crate::backend::{SecretPayload, SecretRequest, SecretsBackend};
use secretshape_core::{
    ApiCredential, Credential, Error, Operation, Result, decode_json, format_postgres_dsn,
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

async fn fetch(client: &dyn SecretsBackend, name: &str) -> Result<String> {
    let request = SecretRequest::current(name);
    match client.get_secret_value(&request).await? {
        SecretPayload::Text(value) => {
            debug!(backend = client.name(), "Secret retrieved");
            Ok(value)
        }
        SecretPayload::Binary(_) => Err(Error::NonStringSecret {
            name: name.to_string(),
        }),
    }
}

/// Retrieve the current value of `name` as a string.
///
/// With no client, one is built from the ambient AWS configuration for this
/// call only. Binary secrets are rejected with [`Error::NonStringSecret`].
#[instrument(skip(client))]
pub async fn get_string_secret(client: Option<&dyn SecretsBackend>, name: &str) -> Result<String> {
    match client {
        Some(client) => fetch(client, name).await,
        None => {
            let client = AwsSecretsBackend::from_env().await?;
            fetch(&client, name).await
        }
    }
}

async fn get_json_secret<T: DeserializeOwned + Default>(
    client: Option<&dyn SecretsBackend>,
    name: &str,
    operation: Operation,
) -> Result<T> {
    let raw = get_string_secret(client, name)
        .await
        .map_err(|e| Error::retrieval(operation, e))?;

    decode_json(&raw).map_err(|e| Error::decode(operation, raw, e))
}

/// Retrieve `name` and decode it as a JSON [`Credential`].
#[instrument(skip(client))]
pub async fn get_credential_secret(
    client: Option<&dyn SecretsBackend>,
    name: &str,
) -> Result<Credential> {
    get_json_secret(client, name, Operation::Credential).await
}

/// Retrieve `name` and decode it as a JSON [`ApiCredential`].
#[instrument(skip(client))]
pub async fn get_api_credential_secret(
    client: Option<&dyn SecretsBackend>,
    name: &str,
) -> Result<ApiCredential> {
    get_json_secret(client, name, Operation::ApiCredential).await
}

/// Retrieve `name` and render it as a Postgres key/value DSN.
///
/// See [`format_postgres_dsn`] for the conversion rules.
#[instrument(skip(client))]
pub async fn get_postgres_dsn_secret(
    client: Option<&dyn SecretsBackend>,
    name: &str,
) -> Result<String> {
    let raw = get_string_secret(client, name)
        .await
        .map_err(|e| Error::retrieval(Operation::PostgresDsn, e))?;

    format_postgres_dsn(&raw)
}
