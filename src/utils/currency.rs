//! Currency conversion utilities for wei and ether amounts
//!
//! Monetary amounts are handled as exact decimals end to end: wei arrives as
//! integer strings from the service, and wei -> ether is a decimal shift by
//! 18 places. Binary floating point is never used for money totals, only for
//! time-duration statistics where sub-cent precision is irrelevant.

use crate::errors::{AppError, AppResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Wei per ether (10^18)
pub const WEI_PER_ETH: u64 = 1_000_000_000_000_000_000;

/// Parse a decimal wei string as reported by the transaction service
///
/// # Examples
/// ```
/// use safe_history_analyser::utils::currency::parse_wei;
///
/// assert_eq!(parse_wei("21000000000000").unwrap(), 21_000_000_000_000);
/// assert!(parse_wei("not-a-number").is_err());
/// ```
pub fn parse_wei(value: &str) -> AppResult<u128> {
    value
        .trim()
        .parse::<u128>()
        .map_err(|e| AppError::DataIntegrity(format!("invalid wei amount '{}': {}", value, e)))
}

/// Convert an integer wei amount to an exact decimal ether amount
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use safe_history_analyser::utils::currency::wei_to_eth;
///
/// assert_eq!(
///     wei_to_eth(1_000_000_000_000_000_000).unwrap(),
///     Decimal::new(1, 0)
/// );
/// ```
pub fn wei_to_eth(wei: u128) -> AppResult<Decimal> {
    let as_i128 = i128::try_from(wei)
        .map_err(|_| AppError::DataIntegrity(format!("wei amount out of range: {}", wei)))?;
    Decimal::try_from_i128_with_scale(as_i128, 18)
        .map_err(|e| AppError::DataIntegrity(format!("wei amount out of range: {}", e)))
}

/// Convert wei to ether, clamping unrepresentably large amounts
///
/// Used for derived display values (enrichment fees) where an out-of-range
/// amount should not abort the run.
pub fn wei_to_eth_saturating(wei: u128) -> Decimal {
    match i128::try_from(wei) {
        Ok(v) => Decimal::try_from_i128_with_scale(v, 18).unwrap_or(Decimal::MAX),
        Err(_) => Decimal::MAX,
    }
}

/// Convert an exact decimal ether amount back to integer wei
///
/// Returns None when the amount has sub-wei precision or does not fit u128.
pub fn eth_to_wei(eth: Decimal) -> Option<u128> {
    let wei = eth.checked_mul(Decimal::from(WEI_PER_ETH))?;
    if wei.normalize().scale() > 0 {
        return None;
    }
    wei.to_u128()
}
