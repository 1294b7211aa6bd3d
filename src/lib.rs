//! Gnosis Safe Multisig History Analyser
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod render;
pub mod rpc;
pub mod service;
pub mod types;
pub mod utils;
