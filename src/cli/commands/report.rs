use super::StrategyArg;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::render::print_report;
use crate::service::{TransactionCollector, TransactionServiceClient, TransactionSource};
use clap::Args;
use tracing::info;

/// Aggregate and print signer/executor statistics for a Safe
#[derive(Args)]
pub struct ReportCommand {
    /// Safe (multisig) address
    safe: String,

    /// Transaction service base URL (overrides config.toml)
    #[arg(long)]
    service_url: Option<String>,

    /// Only aggregate transactions from this block onwards
    #[arg(long)]
    from_block: Option<u64>,

    /// Give non-owner executors their own signer record
    #[arg(long)]
    credit_non_owner_executors: bool,

    /// Pagination strategy for walking the transaction log
    #[arg(long, value_enum, default_value = "nonce-bound")]
    strategy: StrategyArg,
}

impl ReportCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::get_defaults().map_err(|e| AppError::Config(e.to_string()))?;

        let mut service_config = app_config.service;
        if let Some(url) = self.service_url.clone() {
            service_config.base_url = url;
        }
        let mut report_config = app_config.report;
        if let Some(from_block) = self.from_block {
            report_config.from_block = from_block;
        }
        if self.credit_non_owner_executors {
            report_config.credit_non_owner_executors = true;
        }

        info!("Fetching history for Safe {}", self.safe);
        info!("Transaction service: {}", service_config.base_url);

        let page_limit = service_config.page_limit;
        let client = TransactionServiceClient::new(service_config)?;
        let info = client.get_safe_info(&self.safe).await?;

        let collector = TransactionCollector::new(client, self.strategy.into(), page_limit);
        let transactions = collector.collect(&self.safe).await?;
        info!("{} multisig transactions from service", transactions.len());

        let report = crate::analysis::assemble_report(info, &transactions, &report_config)?;
        print_report(&report);

        Ok(())
    }
}
