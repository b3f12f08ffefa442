//! Infra as Design CLI - tools for operating the Slack webhook server.
//!
//! # Usage
//!
//! ```bash
//! # Report a successful provisioning run
//! iad-cli report --url https://iad.example.com --git-repo-created --jenkins-pipeline-created
//!
//! # Report a failure
//! iad-cli report --url https://iad.example.com --error AccessDenied --message "bad credentials"
//!
//! # Print signature headers for a request body
//! iad-cli sign --body 'text=&trigger_id=T1'
//!
//! # Validate server configuration from the environment
//! iad-cli check-config
//! ```
//!
//! # Commands
//!
//! - `report` - Sign and deliver a provisioning result to `/interactive`
//! - `sign` - Compute Slack signature headers for a body
//! - `check-config` - Load and validate the server configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use iad_core::ProvisioningResult;

mod commands;

#[derive(Parser)]
#[command(name = "iad-cli")]
#[command(author, version, about = "Infra as Design CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign and deliver a provisioning result to the server
    Report {
        /// Server base URL
        #[arg(short, long, default_value = "http://127.0.0.1:5000")]
        url: String,

        /// The Git repository was created
        #[arg(long)]
        git_repo_created: bool,

        /// The Jenkins pipeline was created
        #[arg(long)]
        jenkins_pipeline_created: bool,

        /// Error name reported on failure
        #[arg(short, long, default_value = "")]
        error: String,

        /// Error detail reported on failure
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Print Slack signature headers for a request body
    Sign {
        /// Raw request body
        #[arg(short, long)]
        body: String,

        /// Unix timestamp to sign at (default: now)
        #[arg(short, long)]
        timestamp: Option<i64>,
    },
    /// Load and validate the server configuration
    CheckConfig,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Report {
            url,
            git_repo_created,
            jenkins_pipeline_created,
            error,
            message,
        } => {
            let result = ProvisioningResult {
                git_repo_created,
                jenkins_pipeline_created,
                error,
                message,
            };
            commands::report::report(&url, &result).await?;
        }
        Commands::Sign { body, timestamp } => commands::sign::sign(&body, timestamp)?,
        Commands::CheckConfig => commands::config::check()?,
    }
    Ok(())
}
