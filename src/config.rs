use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub eth_rpc: EthRpcConfig,
    pub report: ReportConfig,
}

/// Safe transaction service configuration
///
/// The base URL is an explicit configuration value rather than a process-wide
/// constant so that other networks (Gnosis Chain, Sepolia, self-hosted
/// instances) can be targeted without rebuilding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub page_limit: usize,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://safe-transaction-mainnet.safe.global".to_string(),
            page_limit: 100,
            timeout_seconds: 30,
            max_retries: 5,
            initial_backoff_ms: 500,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 30,
        }
    }
}

/// Ethereum RPC configuration for optional transaction enrichment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EthRpcConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub concurrent_requests: usize,
}

impl Default for EthRpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            timeout_seconds: 30,
            concurrent_requests: 10,
        }
    }
}

/// Report computation policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Only aggregate transactions at or above this block height
    pub from_block: u64,
    /// Whether executions relayed by non-owner addresses earn their own
    /// signer record (counts and fee spend) in addition to being tallied
    /// in the non-owner execution counter
    pub credit_non_owner_executors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            from_block: 0,
            credit_non_owner_executors: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let service = ServiceConfig::default();
        let eth_rpc = EthRpcConfig::default();
        let report = ReportConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("service.base_url", service.base_url)?
            .set_default("service.page_limit", service.page_limit as i64)?
            .set_default("service.timeout_seconds", service.timeout_seconds)?
            .set_default("service.max_retries", service.max_retries as i64)?
            .set_default("service.initial_backoff_ms", service.initial_backoff_ms)?
            .set_default("service.backoff_multiplier", service.backoff_multiplier)?
            .set_default("service.max_backoff_seconds", service.max_backoff_seconds)?
            .set_default("eth_rpc.url", eth_rpc.url)?
            .set_default("eth_rpc.timeout_seconds", eth_rpc.timeout_seconds)?
            .set_default(
                "eth_rpc.concurrent_requests",
                eth_rpc.concurrent_requests as i64,
            )?
            .set_default("report.from_block", report.from_block)?
            .set_default(
                "report.credit_non_owner_executors",
                report.credit_non_owner_executors,
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // SAFE_SERVICE_* / SAFE_ETH_RPC_* env variables override settings
            .add_source(
                config::Environment::with_prefix("SAFE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Convenience env variables with custom names
        if let Ok(base_url) = std::env::var("SAFE_SERVICE_URL") {
            app_config.service.base_url = base_url;
        }
        if let Ok(rpc_url) = std::env::var("ETH_RPC_URL") {
            app_config.eth_rpc.url = rpc_url;
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self {
                service: ServiceConfig::default(),
                eth_rpc: EthRpcConfig::default(),
                report: ReportConfig::default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_config_with_env_vars() {
        env::set_var("SAFE_SERVICE_URL", "https://safe-transaction-sepolia.test");
        env::set_var("ETH_RPC_URL", "http://rpc.test:8545");

        if let Ok(config) = AppConfig::load() {
            assert_eq!(
                config.service.base_url,
                "https://safe-transaction-sepolia.test"
            );
            assert_eq!(config.eth_rpc.url, "http://rpc.test:8545");
        }

        env::remove_var("SAFE_SERVICE_URL");
        env::remove_var("ETH_RPC_URL");
    }

    #[test]
    #[serial]
    fn test_get_defaults() {
        let defaults = AppConfig::get_defaults();
        assert!(defaults.is_ok());

        let config = defaults.unwrap();
        assert!(config.service.page_limit > 0);
        assert!(config.service.max_retries > 0);
        assert!(config.eth_rpc.concurrent_requests > 0);
        assert!(!config.report.credit_non_owner_executors);
    }
}
