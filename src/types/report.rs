//! Normalised rows and assembled report types

use crate::analysis::summary::SummaryStats;
use crate::types::account::SafeInfo;
use crate::types::transaction::Operation;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// A `RawTransaction` mapped into its canonical, export-ready shape
///
/// Missing optional upstream fields are defaulted (empty string / None) and
/// the execution timestamp is resolved from either of the two source fields.
/// Rows missing timestamps stay in the set - they are only excluded from the
/// statistics that need the missing field.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRow {
    pub block: Option<u64>,
    pub nonce: u64,
    pub submission: Option<DateTime<Utc>>,
    pub execution: Option<DateTime<Utc>>,
    pub executor: String,
    pub to: String,
    /// Transferred amount, exact decimal ether
    pub value_eth: Decimal,
    pub operation: Operation,
    pub safe_tx_gas: u64,
    pub data: String,
    pub decoded: String,
    pub tx_hash: String,
    /// Execution fee in wei as reported by the service
    pub fee_wei: Option<u128>,
    // Optional RPC enrichment - absent when --fetch-chain is off or the
    // per-transaction lookup failed
    pub gas_price_gwei: Option<f64>,
    pub gas_used: Option<u64>,
    pub fee_eth: Option<Decimal>,
    pub input_data: Option<String>,
}

impl NormalizedRow {
    /// Attach on-chain enrichment data to this row
    pub fn apply_enrichment(&mut self, enrichment: &TxEnrichment) {
        self.gas_price_gwei = Some(enrichment.gas_price_gwei());
        self.gas_used = Some(enrichment.gas_used);
        self.fee_eth = Some(enrichment.fee_eth());
        self.input_data = Some(enrichment.input_data.clone());
    }
}

/// On-chain execution details fetched per transaction hash
#[derive(Debug, Clone)]
pub struct TxEnrichment {
    pub tx_hash: String,
    /// Effective gas price in wei
    pub gas_price: u128,
    pub gas_used: u64,
    pub input_data: String,
}

impl TxEnrichment {
    /// Gas price converted to gwei (display precision only)
    pub fn gas_price_gwei(&self) -> f64 {
        self.gas_price as f64 / 1e9
    }

    /// Exact execution fee in ether: gas_used * gas_price
    pub fn fee_eth(&self) -> Decimal {
        crate::utils::currency::wei_to_eth_saturating(
            self.gas_price.saturating_mul(self.gas_used as u128),
        )
    }
}

/// Per-signer line of the final report
#[derive(Debug, Clone, Serialize)]
pub struct SignerReportEntry {
    pub address: String,
    pub created: usize,
    pub signed: usize,
    pub executed: usize,
    /// Fractions of the executed-row total, in [0, 1]; None when the
    /// filtered set is empty (undefined, not a division error)
    pub created_pct: Option<f64>,
    pub signed_pct: Option<f64>,
    pub executed_pct: Option<f64>,
    pub gas_spent_eth: Decimal,
    /// Number of non-proposer confirmations backing `signing_latency`
    pub latency_samples: usize,
    pub signing_latency: SummaryStats,
}

/// Final output record set consumed by rendering collaborators
#[derive(Debug, Clone, Serialize)]
pub struct SafeReport {
    pub info: SafeInfo,
    pub from_block: u64,
    pub executed_tx_count: usize,
    pub non_owner_executions: usize,
    pub signers: Vec<SignerReportEntry>,
    /// Minutes from submission to on-chain execution, over all executed rows
    pub execution_latency: SummaryStats,
    /// Minutes from submission to each non-proposer confirmation, pooled
    /// across all signers
    pub signing_latency: SummaryStats,
}
