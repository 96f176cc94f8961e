//! CLI command definitions.

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a secret's raw string value
    #[command(name = "string")]
    Raw {
        /// Secret name or ARN
        name: String,
    },

    /// Decode a secret as a host/port/username/password/dbname credential
    Credential {
        /// Secret name or ARN
        name: String,
    },

    /// Decode a secret as a baseURL/key/secret API credential
    ApiCredential {
        /// Secret name or ARN
        name: String,
    },

    /// Render a database secret as a Postgres DSN
    PostgresDsn {
        /// Secret name or ARN
        name: String,
    },
}

