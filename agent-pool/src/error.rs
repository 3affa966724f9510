//! Error types for pool construction.
//!
//! Pool operations themselves signal failure with `bool` or `Option` returns;
//! the only fallible path with a typed error is configuration validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    /// Pool sizing bounds are inconsistent
    #[error("invalid pool config: min_size ({min_size}) exceeds max_size ({max_size})")]
    InvalidConfig { min_size: usize, max_size: usize },
}

pub type Result<T> = std::result::Result<T, PoolError>;
