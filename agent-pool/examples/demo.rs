//! Agent pool demo: register two agents, acquire one, release it.
//!
//! Run with `cargo run --example demo`; set `RUST_LOG=agent_pool=debug` to see
//! the pool's own events.

use agent_pool::AgentPool;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agent_pool=debug,demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Agent Pool Demo");

    let mut pool = AgentPool::new();
    pool.add("a1", 10);
    pool.add("a2", 5);

    match pool.acquire(1) {
        Some(id) => {
            info!("Acquired: {}", id);
            info!("Stats: {:?}", pool.stats());
            pool.release(&id);
        }
        None => info!("No agent available"),
    }

    info!("Final stats: {:?}", pool.stats());
    info!("Done!");
}
