//! Transaction filtering and normalisation

use crate::errors::AppResult;
use crate::types::{NormalizedRow, RawTransaction};
use crate::utils::currency::{parse_wei, wei_to_eth};

/// Select the executed, successful transactions at or above `min_block`
///
/// Rows without a block number are excluded under a positive `min_block`
/// and included under `min_block == 0`. Output preserves input order -
/// upstream page order is not guaranteed stable, so callers needing
/// chronological order must sort explicitly.
pub fn filter_executed(txs: &[RawTransaction], min_block: u64) -> Vec<&RawTransaction> {
    txs.iter()
        .filter(|tx| tx.is_executed && tx.is_successful == Some(true))
        .filter(|tx| match tx.block_number {
            Some(block) => block >= min_block,
            None => min_block == 0,
        })
        .collect()
}

/// Map one transaction into its canonical export row
///
/// Missing optional fields default to empty strings / None; monetary
/// amounts are parsed exactly, and a malformed wei string is a fatal data
/// integrity error rather than a silent skip.
pub fn normalize(tx: &RawTransaction) -> AppResult<NormalizedRow> {
    let fee_wei = tx.fee.as_deref().map(parse_wei).transpose()?;
    Ok(NormalizedRow {
        block: tx.block_number,
        nonce: tx.nonce,
        submission: tx.submission_date,
        execution: tx.executed_time(),
        executor: tx.executor.clone().unwrap_or_default(),
        to: tx.to.clone(),
        value_eth: wei_to_eth(parse_wei(&tx.value)?)?,
        operation: tx.operation,
        safe_tx_gas: tx.safe_tx_gas,
        data: tx.data.clone().unwrap_or_default(),
        decoded: tx.decoded_method().to_string(),
        tx_hash: tx.tx_hash().to_string(),
        fee_wei,
        gas_price_gwei: None,
        gas_used: None,
        fee_eth: None,
        input_data: None,
    })
}

/// Normalise a filtered sequence, preserving its order
pub fn normalize_all(txs: &[&RawTransaction]) -> AppResult<Vec<NormalizedRow>> {
    txs.iter().map(|tx| normalize(tx)).collect()
}
