//! CLI configuration.

use clap::{Args, ValueEnum};
use secretshape::ClientConfig;

/// Global options shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct CliConfig {
    /// AWS region to query
    #[arg(long, global = true, env = "SECRETSHAPE_REGION")]
    pub region: Option<String>,

    /// Named AWS profile
    #[arg(long, global = true, env = "SECRETSHAPE_PROFILE")]
    pub profile: Option<String>,

    /// Override the Secrets Manager endpoint (e.g. LocalStack)
    #[arg(long, global = true, env = "SECRETSHAPE_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl CliConfig {
    /// Client construction overrides derived from the flags.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
