use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Safe transaction service operations
    #[error("Transaction service error: {0}")]
    Service(#[from] ServiceError),

    /// Ethereum RPC operations
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source records violating aggregation invariants (missing nonce,
    /// unparseable wei amounts, ...) - fatal for the run, never skipped
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
}

/// Safe transaction service error types
#[derive(Error, Debug)]
pub enum ServiceError {
    /// HTTP request could not be sent or the response body could not be read
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service answered with a non-success status code
    #[error("Service returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Retry budget exhausted for a page fetch - the whole aggregation run
    /// aborts because partial histories produce misleading statistics
    #[error("Max retries exceeded: {operation}")]
    MaxRetriesExceeded { operation: String },

    /// Response body did not match the expected page shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Ethereum RPC error types (per-transaction enrichment)
#[derive(Error, Debug)]
pub enum RpcError {
    /// Request transport failure
    #[error("RPC request failed: {0}")]
    RequestFailed(String),

    /// JSON-RPC level error returned by the node
    #[error("RPC call failed: {method} - {message}")]
    CallFailed { method: String, message: String },

    /// Transaction or receipt not found on chain
    #[error("Transaction not found: {tx_hash}")]
    TransactionNotFound { tx_hash: String },

    /// Malformed quantity or missing field in the RPC response
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for transaction service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DataIntegrity(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::RequestFailed(err.to_string())
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        RpcError::RequestFailed(err.to_string())
    }
}
