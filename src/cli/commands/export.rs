use super::StrategyArg;
use crate::analysis::normalize_all;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::render::write_rows_to_path;
use crate::rpc::EthRpcClient;
use crate::service::{TransactionCollector, TransactionServiceClient};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Fetch the full transaction history and export it to CSV
///
/// Unlike the statistics report, the export keeps pending and failed
/// transactions so the CSV is a faithful dump of the service's log; only
/// the block floor is applied (rows not yet mined are always kept).
#[derive(Args)]
pub struct ExportCommand {
    /// Safe (multisig) address
    safe: String,

    /// Transaction service base URL (overrides config.toml)
    #[arg(long)]
    service_url: Option<String>,

    /// Only export transactions from this block onwards
    #[arg(long)]
    from_block: Option<u64>,

    /// Enrich rows with gasPrice/gasUsed via Ethereum RPC (slower)
    #[arg(long)]
    fetch_chain: bool,

    /// Ethereum RPC URL, required with --fetch-chain (overrides config.toml)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Output CSV path (defaults to safe-<address>-tx.csv)
    #[arg(long)]
    outfile: Option<PathBuf>,

    /// Pagination strategy for walking the transaction log
    #[arg(long, value_enum, default_value = "next-link")]
    strategy: StrategyArg,
}

impl ExportCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::get_defaults().map_err(|e| AppError::Config(e.to_string()))?;

        let mut service_config = app_config.service;
        if let Some(url) = self.service_url.clone() {
            service_config.base_url = url;
        }
        let mut rpc_config = app_config.eth_rpc;
        if let Some(url) = self.rpc_url.clone() {
            rpc_config.url = url;
        }
        let from_block = self
            .from_block
            .unwrap_or(app_config.report.from_block);

        info!("Fetching history for Safe {}", self.safe);
        let page_limit = service_config.page_limit;
        let client = TransactionServiceClient::new(service_config)?;
        let collector = TransactionCollector::new(client, self.strategy.into(), page_limit);
        let transactions = collector.collect(&self.safe).await?;
        info!("{} multisig transactions from service", transactions.len());

        let exported: Vec<_> = transactions
            .iter()
            .filter(|tx| tx.block_number.map_or(true, |block| block >= from_block))
            .collect();
        let mut rows = normalize_all(&exported)?;

        if self.fetch_chain {
            let rpc = EthRpcClient::new(rpc_config)?;
            rpc.test_connection().await?;
            let (enriched, missed) = rpc.enrich_rows(&mut rows).await;
            info!("Chain enrichment: {} rows enriched, {} misses", enriched, missed);
        }

        let outfile = self
            .outfile
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("safe-{}-tx.csv", self.safe.to_lowercase())));
        write_rows_to_path(&outfile, &rows)?;

        println!("Wrote {} rows to {}", rows.len(), outfile.display());
        Ok(())
    }
}
