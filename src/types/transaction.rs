//! Wire types for the Safe transaction service
//!
//! One `RawTransaction` is one entry of the append-only multisig transaction
//! log. Required fields are validated at the deserialisation boundary; a
//! record missing `nonce` or `safeTxHash` fails the whole page rather than
//! being silently skipped, because downstream totals and percentages assume
//! a complete, well-formed set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Safe transaction operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Operation {
    Call,
    DelegateCall,
    Create,
}

impl TryFrom<u8> for Operation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Operation::Call),
            1 => Ok(Operation::DelegateCall),
            2 => Ok(Operation::Create),
            other => Err(format!("unknown operation: {}", other)),
        }
    }
}

impl From<Operation> for u8 {
    fn from(op: Operation) -> u8 {
        match op {
            Operation::Call => 0,
            Operation::DelegateCall => 1,
            Operation::Create => 2,
        }
    }
}

/// One owner's signed approval of a pending transaction
///
/// Invariant (upstream contract): a transaction's confirmations are ordered
/// ascending by submission time and index 0 is the proposer's confirmation,
/// i.e. the creation event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub owner: String,
    pub submission_date: Option<DateTime<Utc>>,
}

/// Decoded calldata summary as reported by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDecoded {
    #[serde(default)]
    pub method: String,
}

/// One multisig transaction as reported by the Safe transaction service
///
/// `nonce` is unique per Safe but not globally. Monetary amounts (`value`,
/// `fee`) arrive as decimal wei strings and are parsed exactly during
/// normalisation - they are never run through binary floating point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub safe: String,
    pub to: String,
    /// Transferred amount in wei (decimal string)
    pub value: String,
    pub nonce: u64,
    /// Absent until the transaction is mined
    pub block_number: Option<u64>,
    pub submission_date: Option<DateTime<Utc>>,
    pub execution_date: Option<DateTime<Utc>>,
    /// Secondary executed-at source used when `execution_date` is absent
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
    pub executor: Option<String>,
    pub operation: Operation,
    #[serde(default)]
    pub safe_tx_gas: u64,
    pub data: Option<String>,
    #[serde(default)]
    pub data_decoded: Option<DataDecoded>,
    /// On-chain hash, present once executed
    pub transaction_hash: Option<String>,
    pub safe_tx_hash: String,
    pub is_executed: bool,
    /// Null until executed
    pub is_successful: Option<bool>,
    /// Execution fee in wei (decimal string), reported by the service
    pub fee: Option<String>,
    #[serde(default)]
    pub confirmations: Vec<Confirmation>,
}

impl RawTransaction {
    /// Execution timestamp resolved from either of the two source fields
    pub fn executed_time(&self) -> Option<DateTime<Utc>> {
        self.execution_date.or(self.executed_at)
    }

    /// On-chain transaction hash, falling back to the Safe-internal hash
    pub fn tx_hash(&self) -> &str {
        self.transaction_hash.as_deref().unwrap_or(&self.safe_tx_hash)
    }

    /// Decoded calldata method name, empty when the service decoded nothing
    pub fn decoded_method(&self) -> &str {
        self.data_decoded.as_ref().map(|d| d.method.as_str()).unwrap_or("")
    }
}
