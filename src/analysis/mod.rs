//! Aggregation engine for Safe transaction history
//!
//! The pipeline runs in four steps over the collected transaction set:
//!
//! - **Filter & Normalise** - select executed/successful rows above the
//!   block floor and map them into canonical export rows
//! - **Signer Ledger** - per-address created/signed/executed counts, fee
//!   spend and signing-latency samples
//! - **Summary Statistics** - min/max/mean/median/stdev over latency samples
//! - **Report Assembly** - join Safe metadata, ledger contents and the two
//!   latency distributions into the final report
//!
//! ```rust,no_run
//! use safe_history_analyser::analysis::assemble_report;
//! use safe_history_analyser::config::ReportConfig;
//! # fn example(info: safe_history_analyser::types::SafeInfo,
//! #            txs: Vec<safe_history_analyser::types::RawTransaction>)
//! #            -> safe_history_analyser::errors::AppResult<()> {
//! let report = assemble_report(info, &txs, &ReportConfig::default())?;
//! println!("{} executed transactions", report.executed_tx_count);
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod ledger;
pub mod report;
pub mod summary;

pub use filter::{filter_executed, normalize, normalize_all};
pub use ledger::{SignerLedger, SignerRecord};
pub use report::assemble_report;
pub use summary::SummaryStats;
