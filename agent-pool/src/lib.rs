//! Agent Pool - resource pooling and management for agents.
//!
//! This crate provides a small in-memory registry of named agent resources,
//! each with a fixed capacity. Callers acquire an available agent with enough
//! spare capacity (first-fit, insertion order) and release it when done.
//!
//! The pool is a plain value with caller-owned lifetime: single-threaded,
//! synchronous, no global state. Callers that need concurrent access should
//! wrap the whole pool in a mutex so that acquire's scan-and-mark stays atomic
//! relative to other operations.
//!
//! # Example
//!
//! ```rust
//! use agent_pool::AgentPool;
//!
//! let mut pool = AgentPool::new();
//! pool.add("a1", 10);
//! pool.add("a2", 5);
//!
//! let id = pool.acquire(1).expect("an agent is available");
//! assert_eq!(id, "a1"); // first-fit: a1 was added first and qualifies
//!
//! assert!(pool.release(&id));
//! ```
//!
//! # Modules
//!
//! - [`pool`] - The pool itself plus its statistics snapshot
//! - [`agent`] - The pooled agent record
//! - [`config`] - Pool sizing configuration
//! - [`types`] - Metadata alias and the agent/protocol tag enums
//! - [`error`] - Configuration errors

pub mod agent;
pub mod config;
pub mod error;
pub mod pool;
pub mod types;

// Re-export the public surface at the crate root for convenience
pub use agent::PooledAgent;
pub use config::PoolConfig;
pub use error::{PoolError, Result};
pub use pool::{AgentPool, PoolStats, DEFAULT_CAPACITY};
pub use types::{AgentType, Metadata, Protocol};
