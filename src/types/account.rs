//! Safe account metadata

use serde::{Deserialize, Serialize};

/// Read-only snapshot of a Safe's on-chain configuration
///
/// Served by the transaction service's `/api/v1/safes/{address}/` endpoint.
/// Owner addresses are kept in their checksummed form as reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeInfo {
    pub address: String,
    pub version: String,
    pub threshold: u32,
    pub owners: Vec<String>,
}

impl SafeInfo {
    /// Whether `address` is one of the Safe's owners
    pub fn is_owner(&self, address: &str) -> bool {
        self.owners.iter().any(|o| o == address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialise_safe_info() {
        let json = r#"{
            "address": "0xSafe",
            "version": "1.3.0",
            "threshold": 2,
            "owners": ["0xAaa", "0xBbb", "0xCcc"]
        }"#;
        let info: SafeInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.threshold, 2);
        assert_eq!(info.owners.len(), 3);
        assert!(info.is_owner("0xBbb"));
        assert!(!info.is_owner("0xRelayer"));
    }
}
