//! Configuration for the agent pool.

use serde::{Deserialize, Serialize};

/// Sizing bounds for an [`AgentPool`](crate::AgentPool).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Minimum number of registered agents the pool will retain.
    ///
    /// `remove` refuses to shrink the pool below this floor. A floor of 0
    /// (the default) disables the check.
    pub min_size: usize,
    /// Maximum number of registered agents; `add` fails once reached.
    pub max_size: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_size: 0,
            max_size: 100,
        }
    }
}
