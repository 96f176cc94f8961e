//! Error types for secretshape.

use std::fmt;
use thiserror::Error;

/// The shaped output an operation was building when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Credential,
    ApiCredential,
    PostgresDsn,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Credential => "credential",
            Operation::ApiCredential => "API credential",
            Operation::PostgresDsn => "DSN",
        };
        f.write_str(name)
    }
}

/// A failed call to the secrets backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The backend answered with a service error code.
    #[error("failed to get secret from AWS Secrets Manager: {code}: {message}")]
    Service { code: String, message: String },

    /// Transport, credential, or otherwise unclassified failure.
    #[error("failed to get secret from AWS Secrets Manager: unknown error: {message}")]
    Unknown { message: String },
}

impl BackendError {
    /// Build from an optional service code; `None` means the failure carried
    /// no code and is reported as unknown.
    pub fn from_parts(code: Option<&str>, message: impl Into<String>) -> Self {
        match code {
            Some(code) => BackendError::Service {
                code: code.to_string(),
                message: message.into(),
            },
            None => BackendError::Unknown {
                message: message.into(),
            },
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            BackendError::Service { code, .. } => Some(code),
            BackendError::Unknown { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to construct secrets manager client: {0}")]
    ClientConstruction(String),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("secret {name} is not a string")]
    NonStringSecret { name: String },

    #[error("couldn't build {operation}: failed to retrieve secret")]
    Retrieval {
        operation: Operation,
        #[source]
        source: Box<Error>,
    },

    #[error("couldn't build {operation}: failed to decode JSON")]
    Decode {
        operation: Operation,
        /// The fetched text exactly as the backend returned it.
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a fetch failure with the operation that needed the secret.
    pub fn retrieval(operation: Operation, source: Error) -> Self {
        Error::Retrieval {
            operation,
            source: Box::new(source),
        }
    }

    pub fn decode(operation: Operation, raw: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            operation,
            raw: raw.into(),
            source,
        }
    }

    pub fn is_retrieval(&self) -> bool {
        matches!(self, Error::Retrieval { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Raw secret text kept by a decode failure.
    pub fn raw_payload(&self) -> Option<&str> {
        match self {
            Error::Decode { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// The innermost backend failure, looking through retrieval wrappers.
    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Error::Backend(err) => Some(err),
            Error::Retrieval { source, .. } => source.backend_error(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_service_error_includes_code() {
        let err = BackendError::from_parts(Some("ResourceNotFoundException"), "no such secret");
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(
            err.to_string(),
            "failed to get secret from AWS Secrets Manager: ResourceNotFoundException: no such secret"
        );
    }

    #[test]
    fn test_codeless_error_is_unknown() {
        let err = BackendError::from_parts(None, "dispatch failure");
        assert_eq!(err.code(), None);
        assert!(err.to_string().contains("unknown error"));
    }

    #[test]
    fn test_retrieval_wrapper_keeps_source_chain() {
        let inner = Error::from(BackendError::from_parts(Some("AccessDeniedException"), "denied"));
        let err = Error::retrieval(Operation::Credential, inner);

        assert!(err.is_retrieval());
        assert_eq!(
            err.to_string(),
            "couldn't build credential: failed to retrieve secret"
        );
        assert_eq!(
            err.backend_error().and_then(BackendError::code),
            Some("AccessDeniedException")
        );
        let source = err.source().expect("source");
        assert!(source.to_string().contains("AccessDeniedException"));
    }

    #[test]
    fn test_decode_error_preserves_raw() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = Error::decode(Operation::PostgresDsn, "{oops", json_err);

        assert!(err.is_decode());
        assert_eq!(err.raw_payload(), Some("{oops"));
        assert_eq!(err.to_string(), "couldn't build DSN: failed to decode JSON");
        assert!(err.backend_error().is_none());
    }
}
