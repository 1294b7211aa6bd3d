use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::rpc::EthRpcClient;
use clap::Args;
use tracing::{error, info};

/// Test Ethereum RPC connectivity
#[derive(Args)]
pub struct TestRpcCommand {
    /// Ethereum RPC URL
    #[arg(long)]
    pub rpc_url: Option<String>,
}

impl TestRpcCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::get_defaults().map_err(|e| AppError::Config(e.to_string()))?;
        let mut rpc_config = app_config.eth_rpc;

        if let Some(url) = &self.rpc_url {
            rpc_config.url = url.clone();
        }

        info!("Testing connection to: {}", rpc_config.url);

        let client = EthRpcClient::new(rpc_config)?;
        match client.test_connection().await {
            Ok(()) => {
                println!("Ethereum RPC connection test PASSED");
            }
            Err(e) => {
                error!("RPC connection test failed: {}", e);
                println!("Ethereum RPC connection test FAILED");
                println!("Error: {}", e);
                return Err(AppError::Rpc(e));
            }
        }

        Ok(())
    }
}
