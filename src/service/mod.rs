//! Safe transaction service access
//!
//! `TransactionSource` is the seam between the aggregation engine and the
//! HTTP transport: the collector only ever sees cursors and pages, so tests
//! and alternative backends can stand in for the real service.

pub mod client;
pub mod collector;

pub use client::TransactionServiceClient;
pub use collector::{PaginationStrategy, TransactionCollector};

use crate::errors::ServiceResult;
use crate::types::{RawTransaction, SafeInfo};
use async_trait::async_trait;
use serde::Deserialize;

/// Position of the next page to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// First page of the log
    Start,
    /// Explicit next-page locator returned by the service
    NextLink(String),
    /// Fetch transactions with nonce strictly below this bound
    NonceBelow(u64),
}

/// One page of the multisig transaction log
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionPage {
    pub results: Vec<RawTransaction>,
    /// Next-page locator; None on the last page
    pub next: Option<String>,
}

/// Abstract page-oriented view of the transaction service
///
/// Implementations must be idempotent on retry: re-requesting the same
/// cursor returns the same or a superset of the data, never less.
#[async_trait]
pub trait TransactionSource {
    /// Fetch one page of transactions for `safe` at `cursor`
    async fn fetch_page(&self, safe: &str, cursor: &PageCursor) -> ServiceResult<TransactionPage>;

    /// Fetch the Safe's on-chain configuration snapshot
    async fn get_safe_info(&self, safe: &str) -> ServiceResult<SafeInfo>;
}
