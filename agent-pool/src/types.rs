//! Shared type definitions: metadata values and the agent/protocol tags.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Open-ended metadata attached to a pooled agent, opaque to the pool logic.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Hardware class of an agent.
///
/// A plain tag: the pool never dispatches on it. Callers may attach it to an
/// agent's metadata and interpret it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentType {
    #[serde(rename = "nvidia")]
    NvidiaGpu,
    #[serde(rename = "trainium")]
    AwsTrainium,
    #[serde(rename = "tpu")]
    GoogleTpu,
    #[serde(rename = "cpu")]
    Cpu,
}

/// Protocol an agent speaks.
///
/// Like [`AgentType`], carried as opaque caller data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Mcp,
    A2a,
    Custom,
    Http,
}
