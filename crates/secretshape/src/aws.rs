//! AWS Secrets Manager backend.

use crate::backend::{SecretPayload, SecretRequest, SecretsBackend};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata};
use secretshape_core::{BackendError, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Overrides applied on top of the ambient AWS configuration when a client
/// is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Region, e.g. `us-east-1`.
    pub region: Option<String>,
    /// Named profile from the shared config/credentials files.
    pub profile: Option<String>,
    /// Endpoint override, e.g. a LocalStack URL.
    pub endpoint_url: Option<String>,
}

/// Secrets backend backed by `aws-sdk-secretsmanager`.
#[derive(Debug, Clone)]
pub struct AwsSecretsBackend {
    client: Client,
}

impl AwsSecretsBackend {
    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the default credential and region chain.
    pub async fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::default()).await
    }

    /// Build a client from the default chain with `config` applied on top.
    ///
    /// Fails when no region can be resolved; the client would be unable to
    /// address any endpoint.
    pub async fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        let region = sdk_config.region().ok_or_else(|| {
            Error::ClientConstruction(
                "no AWS region configured; set AWS_REGION or a profile region".to_string(),
            )
        })?;
        debug!(region = %region, "Secrets Manager client constructed");

        Ok(Self::from_client(Client::new(&sdk_config)))
    }

    /// Region the client sends requests to.
    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Classify an SDK failure by whether it carries a service error code.
fn backend_error<E>(err: &E) -> BackendError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(err).to_string());
    BackendError::from_parts(err.code(), message)
}

#[async_trait]
impl SecretsBackend for AwsSecretsBackend {
    async fn get_secret_value(
        &self,
        request: &SecretRequest,
    ) -> std::result::Result<SecretPayload, BackendError> {
        debug!(
            secret = %request.secret_id,
            version_stage = %request.version_stage,
            "Requesting secret value"
        );

        let output = self
            .client
            .get_secret_value()
            .secret_id(&request.secret_id)
            .version_stage(&request.version_stage)
            .send()
            .await
            .map_err(|e| backend_error(&e))?;

        if let Some(text) = output.secret_string() {
            return Ok(SecretPayload::Text(text.to_string()));
        }

        let bytes = output
            .secret_binary()
            .map(|blob| blob.as_ref().to_vec())
            .unwrap_or_default();
        Ok(SecretPayload::Binary(bytes))
    }

    fn name(&self) -> &str {
        "aws-secrets-manager"
    }
}
