//! Secretshape CLI entrypoint.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod handlers;

use commands::Commands;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "secretshape")]
#[command(author, version, about = "Fetch and reshape AWS Secrets Manager secrets", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Commands,
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config;

    match cli.command {
        Commands::Raw { name } => handlers::string(&config, &name).await?,
        Commands::Credential { name } => handlers::credential(&config, &name).await?,
        Commands::ApiCredential { name } => handlers::api_credential(&config, &name).await?,
        Commands::PostgresDsn { name } => handlers::postgres_dsn(&config, &name).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", style("error:").red().bold(), err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
