//! Shared helpers for integration tests

use serde_json::{json, Value};

/// Safe info body as served by `/api/v1/safes/{address}/`
pub fn safe_info_json(owners: &[&str]) -> Value {
    json!({
        "address": "0xSafe",
        "version": "1.3.0",
        "threshold": 2,
        "owners": owners,
    })
}

/// One executed multisig transaction as served by the transaction service
pub fn executed_tx_json(nonce: u64, executor: &str, confirmations: Value) -> Value {
    json!({
        "safe": "0xSafe",
        "to": "0xDead",
        "value": "1000000000000000000",
        "nonce": nonce,
        "blockNumber": 100 + nonce,
        "submissionDate": "2023-01-01T10:00:00Z",
        "executionDate": "2023-01-01T11:00:00Z",
        "executor": executor,
        "operation": 0,
        "safeTxGas": 0,
        "data": null,
        "transactionHash": format!("0xchain{}", nonce),
        "safeTxHash": format!("0xhash{}", nonce),
        "isExecuted": true,
        "isSuccessful": true,
        "fee": "21000000000000",
        "confirmations": confirmations,
    })
}

/// Confirmation entry at minute offset `minute` past 10:00
pub fn confirmation_json(owner: &str, minute: u64) -> Value {
    json!({
        "owner": owner,
        "submissionDate": format!("2023-01-01T10:{:02}:00Z", minute),
    })
}
