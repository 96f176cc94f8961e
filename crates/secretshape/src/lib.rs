//! Shaped access to AWS Secrets Manager secrets.
//!
//! Each operation fetches one secret and hands it back as a raw string, a
//! [`Credential`], an [`ApiCredential`], or a Postgres DSN. Pass `None` as
//! the client to build one from the ambient AWS configuration.

pub mod aws;
pub mod backend;
pub mod operations;

pub use aws::{AwsSecretsBackend, ClientConfig};
pub use backend::{SecretPayload, SecretRequest, SecretsBackend, VERSION_STAGE_CURRENT};
pub use operations::{
    get_api_credential_secret, get_credential_secret, get_postgres_dsn_secret, get_string_secret,
};
pub use secretshape_core::{ApiCredential, BackendError, Credential, Error, Operation, Result};
