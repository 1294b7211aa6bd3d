//! Per-signer accumulation over the filtered transaction stream

use crate::errors::AppResult;
use crate::types::{RawTransaction, SafeInfo};
use crate::utils::currency::{parse_wei, wei_to_eth};
use crate::utils::time::minutes_between;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Mutable per-address accumulator
///
/// Owned exclusively by the `SignerLedger`; records are created lazily on
/// first observation and never shared across writers.
#[derive(Debug, Clone, Default)]
pub struct SignerRecord {
    /// Transactions this address proposed (confirmation index 0)
    pub created: usize,
    /// Transactions this address confirmed (any index)
    pub signed: usize,
    /// Transactions this address submitted on-chain
    pub executed: usize,
    /// Cumulative execution fees paid, exact decimal ether
    pub gas_spent_eth: Decimal,
    /// Minutes from transaction submission to this address's confirmation,
    /// excluding proposer confirmations (latency 0 by definition)
    pub signing_latencies_minutes: Vec<f64>,
}

/// Accumulates per-signer statistics from the filtered transaction stream
///
/// The ledger is the single writer of its records: it is fed only after the
/// complete filtered set is assembled, so no mutation crosses transaction
/// boundaries concurrently.
#[derive(Debug)]
pub struct SignerLedger {
    records: BTreeMap<String, SignerRecord>,
    non_owner_executions: usize,
    credit_non_owner_executors: bool,
}

impl SignerLedger {
    /// `credit_non_owner_executors` decides whether relayed executions by
    /// addresses outside the owner set also earn their own record; the
    /// non-owner execution counter is maintained either way.
    pub fn new(credit_non_owner_executors: bool) -> Self {
        Self {
            records: BTreeMap::new(),
            non_owner_executions: 0,
            credit_non_owner_executors,
        }
    }

    /// Fold one executed transaction into the ledger
    pub fn record(&mut self, tx: &RawTransaction, safe: &SafeInfo) -> AppResult<()> {
        if let Some(executor) = tx.executor.as_deref().filter(|e| !e.is_empty()) {
            let is_owner = safe.is_owner(executor);
            if !is_owner {
                self.non_owner_executions += 1;
            }
            if is_owner || self.credit_non_owner_executors {
                let record = self.records.entry(executor.to_string()).or_default();
                record.executed += 1;
                if let Some(fee) = tx.fee.as_deref() {
                    record.gas_spent_eth += wei_to_eth(parse_wei(fee)?)?;
                }
            }
        }

        for (index, confirmation) in tx.confirmations.iter().enumerate() {
            let record = self.records.entry(confirmation.owner.clone()).or_default();
            record.signed += 1;
            if index == 0 {
                record.created += 1;
            } else if let (Some(submitted), Some(confirmed)) =
                (tx.submission_date, confirmation.submission_date)
            {
                record
                    .signing_latencies_minutes
                    .push(minutes_between(submitted, confirmed));
            }
        }

        Ok(())
    }

    /// Per-address records, ordered by address for deterministic output
    pub fn records(&self) -> &BTreeMap<String, SignerRecord> {
        &self.records
    }

    /// Executions submitted by addresses outside the owner set
    pub fn non_owner_executions(&self) -> usize {
        self.non_owner_executions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn safe() -> SafeInfo {
        SafeInfo {
            address: "0xSafe".to_string(),
            version: "1.3.0".to_string(),
            threshold: 2,
            owners: ["0xP", "0xS", "0xE"].iter().map(|s| s.to_string()).collect(),
        }
    }

    fn tx_with(executor: &str, fee: &str, confirmations: serde_json::Value) -> RawTransaction {
        serde_json::from_value(json!({
            "safe": "0xSafe",
            "to": "0xDead",
            "value": "0",
            "nonce": 1,
            "blockNumber": 100,
            "submissionDate": "2023-01-01T10:00:00Z",
            "executionDate": "2023-01-01T12:00:00Z",
            "executor": executor,
            "operation": 0,
            "safeTxGas": 0,
            "data": null,
            "transactionHash": null,
            "safeTxHash": "0xh1",
            "isExecuted": true,
            "isSuccessful": true,
            "fee": fee,
            "confirmations": confirmations
        }))
        .unwrap()
    }

    fn confirmation(owner: &str, minute: u64) -> serde_json::Value {
        json!({
            "owner": owner,
            "submissionDate": format!("2023-01-01T10:{:02}:00Z", minute)
        })
    }

    #[test]
    fn test_proposer_and_signer_counts() {
        // Three transactions with confirmations [P, P, S], [P, S], [P]
        let mut ledger = SignerLedger::new(false);
        let safe = safe();

        let txs = [
            tx_with(
                "0xE",
                "1000",
                json!([
                    confirmation("0xP", 0),
                    confirmation("0xP", 10),
                    confirmation("0xS", 20)
                ]),
            ),
            tx_with(
                "0xE",
                "1000",
                json!([confirmation("0xP", 0), confirmation("0xS", 30)]),
            ),
            tx_with("0xE", "1000", json!([confirmation("0xP", 0)])),
        ];
        for tx in &txs {
            ledger.record(tx, &safe).unwrap();
        }

        let p = &ledger.records()["0xP"];
        assert_eq!(p.created, 3);
        assert_eq!(p.signed, 4); // one double-confirmation in the first tx

        let s = &ledger.records()["0xS"];
        assert_eq!(s.created, 0);
        assert_eq!(s.signed, 2);
        assert_eq!(s.signing_latencies_minutes, vec![20.0, 30.0]);

        // Proposer's repeat confirmation at index 1 contributes a latency
        assert_eq!(p.signing_latencies_minutes, vec![10.0]);

        // Exactly one creator per row
        let total_created: usize = ledger.records().values().map(|r| r.created).sum();
        assert_eq!(total_created, txs.len());
    }

    #[test]
    fn test_owner_executor_accumulates_fee() {
        let mut ledger = SignerLedger::new(false);
        let tx = tx_with("0xE", "1000000000000000000", json!([confirmation("0xP", 0)]));
        ledger.record(&tx, &safe()).unwrap();
        ledger.record(&tx, &safe()).unwrap();

        let e = &ledger.records()["0xE"];
        assert_eq!(e.executed, 2);
        assert_eq!(e.gas_spent_eth.to_string(), "2.000000000000000000");
        assert_eq!(ledger.non_owner_executions(), 0);
    }

    #[test]
    fn test_non_owner_executor_only_bumps_counter() {
        let mut ledger = SignerLedger::new(false);
        let tx = tx_with("0xRelayer", "1000", json!([confirmation("0xP", 0)]));
        ledger.record(&tx, &safe()).unwrap();

        assert_eq!(ledger.non_owner_executions(), 1);
        assert!(!ledger.records().contains_key("0xRelayer"));
        // No owner's executed count moved
        assert!(ledger.records().values().all(|r| r.executed == 0));
    }

    #[test]
    fn test_non_owner_executor_credited_when_enabled() {
        let mut ledger = SignerLedger::new(true);
        let tx = tx_with("0xRelayer", "5000", json!([confirmation("0xP", 0)]));
        ledger.record(&tx, &safe()).unwrap();

        // Counter still moves, and the relayer gets its own record
        assert_eq!(ledger.non_owner_executions(), 1);
        let relayer = &ledger.records()["0xRelayer"];
        assert_eq!(relayer.executed, 1);
        assert_eq!(relayer.signed, 0);
    }

    #[test]
    fn test_missing_fee_and_timestamps_are_tolerated() {
        let mut ledger = SignerLedger::new(false);
        let mut tx = tx_with("0xE", "1000", json!([
            confirmation("0xP", 0),
            {"owner": "0xS", "submissionDate": null}
        ]));
        tx.fee = None;
        ledger.record(&tx, &safe()).unwrap();

        let e = &ledger.records()["0xE"];
        assert_eq!(e.executed, 1);
        assert_eq!(e.gas_spent_eth, Decimal::ZERO);

        // Confirmation without a timestamp still counts as signed but
        // contributes no latency sample
        let s = &ledger.records()["0xS"];
        assert_eq!(s.signed, 1);
        assert!(s.signing_latencies_minutes.is_empty());
    }

    #[test]
    fn test_malformed_fee_is_fatal() {
        let mut ledger = SignerLedger::new(false);
        let tx = tx_with("0xE", "not-wei", json!([confirmation("0xP", 0)]));
        assert!(ledger.record(&tx, &safe()).is_err());
    }
}
