use crate::config::EthRpcConfig;
use crate::errors::{RpcError, RpcResult};
use crate::types::{NormalizedRow, TxEnrichment};
use futures::StreamExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Ethereum JSON-RPC client for per-transaction enrichment
///
/// Enrichment is best-effort: a failed lookup is logged and the affected row
/// is emitted without the enriched fields, never aborting the batch. Fan-out
/// across transactions is bounded by `concurrent_requests`.
pub struct EthRpcClient {
    http: reqwest::Client,
    config: EthRpcConfig,
}

impl EthRpcClient {
    pub fn new(config: EthRpcConfig) -> RpcResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config })
    }

    /// Issue one JSON-RPC call and unwrap the `result` field
    async fn call(&self, method: &str, params: Value) -> RpcResult<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response: Value = self
            .http
            .post(&self.config.url)
            .json(&body)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| RpcError::InvalidResponse(format!("non-JSON body: {}", e)))?;

        if let Some(error) = response.get("error") {
            return Err(RpcError::CallFailed {
                method: method.to_string(),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }
        response
            .get("result")
            .cloned()
            .ok_or_else(|| RpcError::InvalidResponse(format!("{}: no result field", method)))
    }

    /// Check node reachability
    pub async fn test_connection(&self) -> RpcResult<()> {
        let block = self.call("eth_blockNumber", json!([])).await?;
        debug!("RPC node reachable, head block: {}", block);
        Ok(())
    }

    /// Fetch on-chain execution details for one transaction hash
    pub async fn get_transaction_detail(&self, tx_hash: &str) -> RpcResult<TxEnrichment> {
        let tx = self
            .call("eth_getTransactionByHash", json!([tx_hash]))
            .await?;
        if tx.is_null() {
            return Err(RpcError::TransactionNotFound {
                tx_hash: tx_hash.to_string(),
            });
        }
        let receipt = self
            .call("eth_getTransactionReceipt", json!([tx_hash]))
            .await?;
        if receipt.is_null() {
            return Err(RpcError::TransactionNotFound {
                tx_hash: tx_hash.to_string(),
            });
        }

        // Legacy transactions carry gasPrice; for EIP-1559 the receipt's
        // effectiveGasPrice is what was actually paid.
        let gas_price = quantity_field(&receipt, "effectiveGasPrice")
            .or_else(|_| quantity_field(&tx, "gasPrice"))?;
        let gas_used = quantity_field(&receipt, "gasUsed")? as u64;
        let input_data = tx
            .get("input")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        Ok(TxEnrichment {
            tx_hash: tx_hash.to_string(),
            gas_price,
            gas_used,
            input_data,
        })
    }

    /// Enrich a batch of normalised rows in place
    ///
    /// Rows without a resolvable on-chain hash are skipped. Returns the
    /// number of rows enriched and the number of per-row failures.
    pub async fn enrich_rows(&self, rows: &mut [NormalizedRow]) -> (usize, usize) {
        let enriched = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);

        futures::stream::iter(rows.iter_mut().filter(|r| !r.tx_hash.is_empty()))
            .for_each_concurrent(Some(self.config.concurrent_requests), |row| {
                let enriched = &enriched;
                let failed = &failed;
                async move {
                    match self.get_transaction_detail(&row.tx_hash).await {
                        Ok(detail) => {
                            row.apply_enrichment(&detail);
                            enriched.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(e) => {
                            warn!("Enrichment miss for {}: {}", row.tx_hash, e);
                            failed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
            .await;

        let (ok, miss) = (
            enriched.load(Ordering::Relaxed),
            failed.load(Ordering::Relaxed),
        );
        info!("Enriched {} rows ({} misses)", ok, miss);
        (ok, miss)
    }
}

/// Parse a hex quantity ("0x...") field out of a JSON-RPC object
fn quantity_field(object: &Value, field: &str) -> RpcResult<u128> {
    let raw = object
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| RpcError::InvalidResponse(format!("missing quantity field: {}", field)))?;
    parse_quantity(raw)
        .ok_or_else(|| RpcError::InvalidResponse(format!("bad quantity {}={}", field, raw)))
}

/// Parse an Ethereum hex quantity into an integer
fn parse_quantity(raw: &str) -> Option<u128> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    if digits.is_empty() {
        return None;
    }
    u128::from_str_radix(digits, 16).ok()
}
