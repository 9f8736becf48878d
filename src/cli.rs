//! Definitions of CLI arguments and commands for the deploy scripts

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    commands::{deploy, last_completed},
    errors::ScriptError,
};

/// Scripts for deploying and initializing the Zap contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "DEPLOYER_PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long)]
    pub rpc_url: String,

    /// Path to the file at which deployed contract addresses are recorded
    #[arg(short, long, default_value = "deployments.json")]
    pub deployments_path: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The subcommands of the deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Run the migration: deploy the Migrations bookkeeping contract,
    /// then the Zap contract
    Deploy(DeployArgs),
    /// Query the number of the last completed migration from the
    /// deployed Migrations contract
    LastCompleted,
}

impl Command {
    /// Run the command with the given RPC client
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        deployments_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, client, deployments_path).await,
            Command::LastCompleted => last_completed(client, deployments_path).await,
        }
    }
}

/// Run the ordered migration steps against the configured network.
///
/// Steps whose contracts are already recorded in the deployments file are
/// skipped, so re-running the command against a partially deployed network
/// only deploys what is missing.
#[derive(Args)]
pub struct DeployArgs {
    /// Path to the JSON file holding the Zap constructor parameters
    #[arg(short, long)]
    pub config_path: String,
}
