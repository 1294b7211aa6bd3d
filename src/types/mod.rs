//! Core data types for the Safe history analyser

pub mod account;
pub mod report;
pub mod transaction;

pub use account::SafeInfo;
pub use report::{NormalizedRow, SafeReport, SignerReportEntry, TxEnrichment};
pub use transaction::{Confirmation, DataDecoded, Operation, RawTransaction};
