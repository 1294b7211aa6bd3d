pub mod export;
pub mod report;
pub mod test_rpc;

use crate::service::PaginationStrategy;
use clap::ValueEnum;

/// CLI-facing pagination strategy selector
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Follow the service's next-page links
    NextLink,
    /// Page by descending nonce bounds
    NonceBound,
}

impl From<StrategyArg> for PaginationStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::NextLink => PaginationStrategy::NextLink,
            StrategyArg::NonceBound => PaginationStrategy::NonceBound,
        }
    }
}
