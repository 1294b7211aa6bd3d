//! Report assembly: joins Safe metadata, ledger contents and latency stats

use crate::analysis::filter::filter_executed;
use crate::analysis::ledger::SignerLedger;
use crate::analysis::summary::SummaryStats;
use crate::config::ReportConfig;
use crate::errors::AppResult;
use crate::types::{RawTransaction, SafeInfo, SafeReport, SignerReportEntry};
use crate::utils::time::minutes_between;
use tracing::info;

/// Fraction of `total`, undefined (None) when the total is zero
///
/// Percentages over an empty filtered set are reported as undefined rather
/// than raising a division error.
fn fraction(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64)
    }
}

/// Build the final report from the complete collected transaction set
///
/// Filters to executed/successful rows above the configured block floor,
/// folds them through the signer ledger, and computes the two latency
/// distributions. The ledger is fed only after the full set is assembled -
/// single-writer semantics per address hold even if the caller fetched
/// pages or enrichment concurrently.
pub fn assemble_report(
    info: SafeInfo,
    transactions: &[RawTransaction],
    options: &ReportConfig,
) -> AppResult<SafeReport> {
    let filtered = filter_executed(transactions, options.from_block);
    let executed_tx_count = filtered.len();
    info!(
        "{} of {} transactions executed and successful above block {}",
        executed_tx_count,
        transactions.len(),
        options.from_block
    );

    let mut ledger = SignerLedger::new(options.credit_non_owner_executors);
    let mut execution_latencies = Vec::with_capacity(executed_tx_count);
    for tx in &filtered {
        ledger.record(tx, &info)?;
        if let (Some(submitted), Some(executed)) = (tx.submission_date, tx.executed_time()) {
            execution_latencies.push(minutes_between(submitted, executed));
        }
    }

    let mut pooled_signing_latencies = Vec::new();
    let signers = ledger
        .records()
        .iter()
        .map(|(address, record)| {
            pooled_signing_latencies.extend_from_slice(&record.signing_latencies_minutes);
            SignerReportEntry {
                address: address.clone(),
                created: record.created,
                signed: record.signed,
                executed: record.executed,
                created_pct: fraction(record.created, executed_tx_count),
                signed_pct: fraction(record.signed, executed_tx_count),
                executed_pct: fraction(record.executed, executed_tx_count),
                gas_spent_eth: record.gas_spent_eth,
                latency_samples: record.signing_latencies_minutes.len(),
                signing_latency: SummaryStats::from_sample(&record.signing_latencies_minutes),
            }
        })
        .collect();

    Ok(SafeReport {
        info,
        from_block: options.from_block,
        executed_tx_count,
        non_owner_executions: ledger.non_owner_executions(),
        signers,
        execution_latency: SummaryStats::from_sample(&execution_latencies),
        signing_latency: SummaryStats::from_sample(&pooled_signing_latencies),
    })
}
