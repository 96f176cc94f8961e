//! Secretshape Core
//!
//! Record types, the Postgres DSN formatter, and error handling shared by the
//! secretshape crates. Nothing in here talks to a secrets backend; the
//! retrieval side lives in the `secretshape` crate.

pub mod dsn;
pub mod error;
pub mod json;
pub mod records;

pub use dsn::format_postgres_dsn;
pub use error::{BackendError, Error, Operation, Result};
pub use json::decode_json;
pub use records::{ApiCredential, Credential};
