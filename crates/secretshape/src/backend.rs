//! Secrets backend trait.

use async_trait::async_trait;
use secretshape_core::BackendError;

/// Version stage naming the current value of a secret.
pub const VERSION_STAGE_CURRENT: &str = "AWSCURRENT";

/// A single "get secret value" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRequest {
    pub secret_id: String,
    pub version_stage: String,
}

impl SecretRequest {
    /// Request the current version of `secret_id`.
    pub fn current(secret_id: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            version_stage: VERSION_STAGE_CURRENT.to_string(),
        }
    }
}

/// What the backend stored for a secret version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretPayload {
    Text(String),
    Binary(Vec<u8>),
}

/// Trait for secrets backends.
///
/// Implementations perform exactly one request per call and must be safe to
/// share between tasks.
#[async_trait]
pub trait SecretsBackend: Send + Sync {
    /// Fetch the value selected by `request`.
    async fn get_secret_value(&self, request: &SecretRequest)
    -> Result<SecretPayload, BackendError>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}
