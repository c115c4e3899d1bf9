//! Toolchain configuration inspector.
//!
//! Loads the configuration exactly as the toolchain would receive it and
//! prints, validates or derives accounts from it. Secrets are always
//! redacted in output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use toolchain_config::accounts::derive_addresses;
use toolchain_config::config::{load_config, validate_config};
use toolchain_config::observability::{init_logging, LogFormat};

#[derive(Parser)]
#[command(name = "toolchain-config")]
#[command(about = "Inspect the resolved smart-contract toolchain configuration", long_about = None)]
struct Cli {
    /// JSON record providing `privateKey`
    #[arg(long, env = "TOOLCHAIN_SECRETS_FILE", default_value = "secrets.json")]
    secrets_file: PathBuf,

    /// Optional dotenv file layered under the process environment
    #[arg(long, env = "TOOLCHAIN_ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the configuration as JSON with secrets redacted
    Show,
    /// Run semantic checks on the configuration
    Validate,
    /// Derive signer addresses for a network profile
    Accounts {
        /// Profile name; defaults to the default network
        network: Option<String>,

        /// Maximum number of seed-derived accounts
        #[arg(short, long)]
        count: Option<u32>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_logging(&cli.log_level, format)?;

    let config = match load_config(&cli.env_file, &cli.secrets_file) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::Show => {
            println!("{}", serde_json::to_string_pretty(&config.redacted())?);
        }
        Commands::Validate => match validate_config(&config) {
            Ok(()) => {
                tracing::info!("Configuration is valid");
            }
            Err(errors) => {
                for err in &errors {
                    tracing::error!(error = %err, "Validation failed");
                }
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Accounts { network, count } => {
            let name = network.unwrap_or_else(|| config.networks.default_network.clone());
            let Some(profile) = config.networks.get(&name) else {
                eprintln!("Error: unknown network '{}'", name);
                return Ok(ExitCode::FAILURE);
            };
            for address in derive_addresses(profile, count)? {
                println!("{}", address);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
