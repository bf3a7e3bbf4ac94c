//! 目标可达性检查
//!
//! A blocking `GET` via ureq, run on the blocking pool.

use std::sync::OnceLock;
use std::time::Duration;

use tracing::{debug, warn};
use ureq::Agent;

const PROBE_TIMEOUT_SECS: u64 = 5;

static PROBE_AGENT: OnceLock<Agent> = OnceLock::new();

fn get_agent() -> &'static Agent {
    PROBE_AGENT.get_or_init(|| {
        Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(PROBE_TIMEOUT_SECS)))
            .http_status_as_error(false)
            .build()
            .into()
    })
}

fn probe_sync(url: &str) -> bool {
    match get_agent().get(url).call() {
        Ok(resp) => {
            let status = resp.status().as_u16();
            debug!("Reachability probe {} -> {}", url, status);
            status == 200
        }
        Err(e) => {
            warn!("Reachability probe to \"{}\" failed: {}", url, e);
            false
        }
    }
}

/// 目标返回 200 时为 true
pub async fn is_reachable(url: &str) -> bool {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || probe_sync(&url))
        .await
        .unwrap_or_else(|e| {
            warn!("Reachability probe task failed: {}", e);
            false
        })
}
