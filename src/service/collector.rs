use crate::errors::ServiceResult;
use crate::service::{PageCursor, TransactionSource};
use crate::types::RawTransaction;
use std::collections::HashSet;
use tracing::{debug, info};

/// How the collector walks the paginated transaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStrategy {
    /// Follow the `next` locator returned by the service until absent
    NextLink,
    /// Request pages bounded strictly below the minimum nonce seen so far;
    /// terminate on the first short page
    NonceBound,
}

/// Drives a `TransactionSource` to exhaustion for one Safe
///
/// Produces the complete, unpaginated transaction set. A failed page fetch
/// (after the transport's retry budget) fails the whole collection - partial
/// histories are never returned because downstream percentages and totals
/// assume the full set.
pub struct TransactionCollector<S: TransactionSource> {
    source: S,
    strategy: PaginationStrategy,
    page_limit: usize,
}

impl<S: TransactionSource> TransactionCollector<S> {
    pub fn new(source: S, strategy: PaginationStrategy, page_limit: usize) -> Self {
        Self {
            source,
            strategy,
            page_limit,
        }
    }

    /// Access the underlying source (e.g. for Safe info lookups)
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every transaction known to the service for `safe`
    ///
    /// Pages can overlap when a cursor is retried or when the nonce bound
    /// re-includes boundary rows, so results are deduplicated by safeTxHash
    /// while preserving first-seen order.
    pub async fn collect(&self, safe: &str) -> ServiceResult<Vec<RawTransaction>> {
        let mut transactions: Vec<RawTransaction> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut cursor = PageCursor::Start;
        let mut pages = 0usize;

        loop {
            let page = self.source.fetch_page(safe, &cursor).await?;
            pages += 1;
            let page_len = page.results.len();
            debug!("Page {} returned {} transactions", pages, page_len);

            for tx in page.results {
                if seen.insert(tx.safe_tx_hash.clone()) {
                    transactions.push(tx);
                }
            }

            cursor = match self.strategy {
                PaginationStrategy::NextLink => match page.next {
                    Some(url) => PageCursor::NextLink(url),
                    None => break,
                },
                PaginationStrategy::NonceBound => {
                    if page_len < self.page_limit {
                        break;
                    }
                    // A full page may share its lowest nonce with rows on the
                    // next page, and the lowest nonce is always included in
                    // the page it belongs to, so the bound stays exclusive.
                    match transactions.iter().map(|t| t.nonce).min() {
                        Some(min_nonce) => PageCursor::NonceBelow(min_nonce),
                        None => break,
                    }
                }
            };
        }

        info!(
            "Collected {} transactions for {} across {} pages",
            transactions.len(),
            safe,
            pages
        );
        Ok(transactions)
    }
}
