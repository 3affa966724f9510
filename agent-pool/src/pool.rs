//! Agent pool: registration, first-fit acquire, release, statistics.

use crate::agent::PooledAgent;
use crate::config::PoolConfig;
use crate::error::{PoolError, Result};
use crate::types::Metadata;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Capacity assigned to an agent when the caller has no better number.
///
/// Mirrors the historical default of `add`; Rust callers pass capacity
/// explicitly, so this is a named constant instead of a default argument.
pub const DEFAULT_CAPACITY: u32 = 10;

/// Registry of pooled agents plus the acquire/release protocol over them.
///
/// Single-threaded by design: every operation completes synchronously and
/// failures are reported as `bool`/`Option` returns rather than errors.
/// Insertion order of the registry is significant — [`acquire`](Self::acquire)
/// scans it first-fit.
#[derive(Debug)]
pub struct AgentPool {
    config: PoolConfig,
    agents: IndexMap<String, PooledAgent>,
}

impl AgentPool {
    /// Create a pool with the default configuration (no floor, 100 agents max).
    pub fn new() -> Self {
        Self {
            config: PoolConfig::default(),
            agents: IndexMap::new(),
        }
    }

    /// Create a pool with explicit sizing bounds.
    ///
    /// Fails if `min_size` exceeds `max_size`, since such a pool could never
    /// satisfy both bounds at once.
    pub fn with_config(config: PoolConfig) -> Result<Self> {
        if config.min_size > config.max_size {
            return Err(PoolError::InvalidConfig {
                min_size: config.min_size,
                max_size: config.max_size,
            });
        }

        Ok(Self {
            config,
            agents: IndexMap::new(),
        })
    }

    /// Register an agent with empty metadata.
    ///
    /// See [`add_with_metadata`](Self::add_with_metadata) for the full
    /// semantics, including the duplicate-id behavior.
    pub fn add(&mut self, agent_id: &str, capacity: u32) -> bool {
        self.add_with_metadata(agent_id, capacity, Metadata::new())
    }

    /// Register an agent, returning false if the pool is already full.
    ///
    /// A duplicate `agent_id` silently overwrites the existing record
    /// (last-write-wins), discarding any in-use state it held while keeping
    /// its scan position. Callers that do not want overwrite must pre-check
    /// with [`contains`](Self::contains). The full-pool check applies to
    /// duplicates too.
    pub fn add_with_metadata(&mut self, agent_id: &str, capacity: u32, metadata: Metadata) -> bool {
        if self.agents.len() >= self.config.max_size {
            debug!("Pool full ({} agents), rejecting add of {}", self.agents.len(), agent_id);
            return false;
        }

        debug!("Registering agent {} with capacity {}", agent_id, capacity);
        let agent = PooledAgent::new(agent_id.to_string(), capacity, metadata);
        self.agents.insert(agent_id.to_string(), agent);
        true
    }

    /// Deregister an idle agent.
    ///
    /// Returns false if the agent is absent, currently in use, or removal
    /// would shrink the pool below its `min_size` floor.
    pub fn remove(&mut self, agent_id: &str) -> bool {
        let Some(agent) = self.agents.get(agent_id) else {
            debug!("Cannot remove {}: not registered", agent_id);
            return false;
        };

        if agent.in_use {
            debug!("Cannot remove {}: in use", agent_id);
            return false;
        }

        if self.agents.len() <= self.config.min_size {
            debug!(
                "Cannot remove {}: pool at min_size ({})",
                agent_id, self.config.min_size
            );
            return false;
        }

        debug!("Removing agent {}", agent_id);
        // shift_remove keeps the scan order of the remaining agents
        self.agents.shift_remove(agent_id);
        true
    }

    /// Check out the first idle agent with at least `capacity_needed` spare.
    ///
    /// First-fit over insertion order, not best-fit: an earlier large agent
    /// wins over a later snug one. On a match the agent is marked in use with
    /// `current_load = capacity_needed`. Returns `None` when no registered
    /// agent qualifies.
    pub fn acquire(&mut self, capacity_needed: u32) -> Option<String> {
        for (agent_id, agent) in self.agents.iter_mut() {
            if !agent.in_use && agent.capacity >= capacity_needed {
                agent.in_use = true;
                agent.current_load = capacity_needed;
                debug!("Acquired agent {} (load {})", agent_id, capacity_needed);
                return Some(agent_id.clone());
            }
        }

        debug!("No idle agent with capacity >= {}", capacity_needed);
        None
    }

    /// Return an agent to the pool.
    ///
    /// Returns false only when `agent_id` is not registered. Releasing an
    /// agent that is already idle is a no-op success, so callers can release
    /// unconditionally on their cleanup paths.
    pub fn release(&mut self, agent_id: &str) -> bool {
        let Some(agent) = self.agents.get_mut(agent_id) else {
            debug!("Cannot release {}: not registered", agent_id);
            return false;
        };

        agent.in_use = false;
        agent.current_load = 0;
        debug!("Released agent {}", agent_id);
        true
    }

    /// Snapshot of the ids of all idle agents, in insertion order.
    pub fn list_available(&self) -> Vec<String> {
        self.agents
            .values()
            .filter(|agent| !agent.in_use)
            .map(|agent| agent.agent_id.clone())
            .collect()
    }

    /// Point-in-time statistics over the current registry.
    pub fn stats(&self) -> PoolStats {
        let total_agents = self.agents.len();
        let in_use = self.agents.values().filter(|a| a.in_use).count();
        let total_capacity: u64 = self.agents.values().map(|a| u64::from(a.capacity)).sum();
        let used_capacity: u64 = self.agents.values().map(|a| u64::from(a.current_load)).sum();

        PoolStats {
            total_agents,
            in_use,
            available: total_agents - in_use,
            total_capacity,
            used_capacity,
            // max(1) guards the empty / all-zero-capacity pool
            utilization: used_capacity as f64 / total_capacity.max(1) as f64,
        }
    }

    /// Whether an agent with this id is registered.
    pub fn contains(&self, agent_id: &str) -> bool {
        self.agents.contains_key(agent_id)
    }

    /// Read access to a registered agent's record.
    pub fn get(&self, agent_id: &str) -> Option<&PooledAgent> {
        self.agents.get(agent_id)
    }

    /// Number of registered agents, in use or not.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The sizing bounds this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}

impl Default for AgentPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time pool statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolStats {
    pub total_agents: usize,
    pub in_use: usize,
    pub available: usize,
    pub total_capacity: u64,
    pub used_capacity: u64,
    pub utilization: f64,
}
