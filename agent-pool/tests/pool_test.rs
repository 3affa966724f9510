//! Integration tests exercising the pool through its public API.

use agent_pool::{AgentPool, Metadata, PoolConfig, PoolError};

#[test]
fn test_full_checkout_lifecycle() {
    let mut pool = AgentPool::new();
    assert!(pool.add("a1", 10));
    assert!(pool.add("a2", 5));

    let id = pool.acquire(1).expect("pool has idle agents");
    assert_eq!(id, "a1");

    let agent = pool.get(&id).unwrap();
    assert!(agent.in_use());
    assert_eq!(agent.current_load(), 1);

    let stats = pool.stats();
    assert_eq!(stats.total_agents, 2);
    assert_eq!(stats.in_use, 1);
    assert_eq!(stats.available, 1);
    assert_eq!(stats.total_capacity, 15);
    assert_eq!(stats.used_capacity, 1);
    assert!((stats.utilization - 1.0 / 15.0).abs() < f64::EPSILON);

    assert!(pool.release(&id));
    let agent = pool.get(&id).unwrap();
    assert!(!agent.in_use());
    assert_eq!(agent.current_load(), 0);
    assert_eq!(pool.stats().used_capacity, 0);
}

#[test]
fn test_bounded_pool_add_remove_cycle() {
    let mut pool = AgentPool::with_config(PoolConfig {
        min_size: 0,
        max_size: 1,
    })
    .unwrap();

    assert!(pool.add("x", 1));
    assert!(!pool.add("y", 1));
    assert!(pool.remove("x"));
    assert!(pool.add("y", 1));
    assert_eq!(pool.len(), 1);
}

#[test]
fn test_acquire_never_oversubscribes_capacity() {
    let mut pool = AgentPool::new();
    pool.add("only", 10);

    assert_eq!(pool.acquire(100), None);
    assert!(pool.list_available().contains(&"only".to_string()));

    let id = pool.acquire(10).unwrap();
    assert!(pool.get(&id).unwrap().capacity() >= 10);
}

#[test]
fn test_every_agent_acquired_exactly_once() {
    let mut pool = AgentPool::new();
    for i in 0..4 {
        pool.add(&format!("a{i}"), 10);
    }

    let mut seen = Vec::new();
    while let Some(id) = pool.acquire(1) {
        assert!(!seen.contains(&id), "agent {id} handed out twice");
        seen.push(id);
    }

    assert_eq!(seen.len(), 4);
    assert!(pool.list_available().is_empty());
}

#[test]
fn test_min_size_floor_blocks_final_removal() {
    let mut pool = AgentPool::with_config(PoolConfig {
        min_size: 1,
        max_size: 4,
    })
    .unwrap();
    pool.add("a1", 10);
    pool.add("a2", 10);

    assert!(pool.remove("a1"));
    assert!(!pool.remove("a2"));
    assert!(pool.contains("a2"));
}

#[test]
fn test_config_validation() {
    let err = AgentPool::with_config(PoolConfig {
        min_size: 10,
        max_size: 1,
    })
    .unwrap_err();

    match err {
        PoolError::InvalidConfig { min_size, max_size } => {
            assert_eq!(min_size, 10);
            assert_eq!(max_size, 1);
        }
    }
}

#[test]
fn test_metadata_round_trips_through_the_pool() {
    let mut pool = AgentPool::new();
    let mut metadata = Metadata::new();
    metadata.insert(
        "agent_type".to_string(),
        serde_json::to_value(agent_pool::AgentType::GoogleTpu).unwrap(),
    );
    metadata.insert(
        "protocol".to_string(),
        serde_json::to_value(agent_pool::Protocol::Mcp).unwrap(),
    );

    assert!(pool.add_with_metadata("tpu-1", 8, metadata));

    let agent = pool.get("tpu-1").unwrap();
    assert_eq!(agent.metadata()["agent_type"], serde_json::json!("tpu"));
    assert_eq!(agent.metadata()["protocol"], serde_json::json!("mcp"));
}

#[test]
fn test_stats_snapshot_serializes() {
    let mut pool = AgentPool::new();
    pool.add("a1", 10);
    pool.acquire(3).unwrap();

    let json = serde_json::to_value(pool.stats()).unwrap();
    assert_eq!(json["total_agents"], 1);
    assert_eq!(json["in_use"], 1);
    assert_eq!(json["available"], 0);
    assert_eq!(json["used_capacity"], 3);
}
