//! Pooled agent record.

use crate::types::Metadata;
use serde::Serialize;

/// One resource slot in the pool.
///
/// The pool owns these records and mutates `in_use`/`current_load` through
/// acquire and release; callers only get read access, which keeps the
/// invariant that `current_load` is 0 whenever the agent is idle.
#[derive(Debug, Clone, Serialize)]
pub struct PooledAgent {
    pub(crate) agent_id: String,
    pub(crate) capacity: u32,
    pub(crate) in_use: bool,
    pub(crate) current_load: u32,
    pub(crate) metadata: Metadata,
}

impl PooledAgent {
    pub(crate) fn new(agent_id: String, capacity: u32, metadata: Metadata) -> Self {
        Self {
            agent_id,
            capacity,
            in_use: false,
            current_load: 0,
            metadata,
        }
    }

    /// Caller-supplied unique identifier.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Maximum concurrent load this agent can serve; fixed at registration.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// True while the agent is checked out.
    pub fn in_use(&self) -> bool {
        self.in_use
    }

    /// Capacity consumed by the current checkout, 0 when idle.
    pub fn current_load(&self) -> u32 {
        self.current_load
    }

    /// Opaque caller-supplied metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
