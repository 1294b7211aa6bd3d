//! Optional per-transaction chain enrichment via Ethereum JSON-RPC

pub mod client;

pub use client::EthRpcClient;
