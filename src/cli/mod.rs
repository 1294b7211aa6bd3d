use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Gnosis Safe Multisig History Analyser
#[derive(Parser)]
#[command(name = "safe-history-analyser")]
#[command(about = "Gnosis Safe Multisig History Analyser")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate and print signer/executor statistics for a Safe
    Report(commands::report::ReportCommand),
    /// Fetch the full transaction history and export it to CSV
    Export(commands::export::ExportCommand),
    /// Test Ethereum RPC connectivity (used for --fetch-chain enrichment)
    TestRpc(commands::test_rpc::TestRpcCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "info" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report(command) => command.run().await,
        Commands::Export(command) => command.run().await,
        Commands::TestRpc(command) => command.run().await,
    }
}
