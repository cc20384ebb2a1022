/*!
 * Scheduler Module
 * Scheduling policies, timelines and metrics
 */

pub mod fcfs;
pub mod metrics;
pub mod round_robin;
pub mod sjf;
mod state;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use fcfs::FcfsScheduler;
pub use metrics::{Metrics, ProcessMetrics};
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;
pub use timeline::{Slice, Timeline};
pub use traits::Scheduler;
pub use types::{Policy, PolicyConfig, TimeQuantum};

use crate::process::Process;
use tracing::info;

/// Construct the policy chosen by the driver over its own copy of the records
pub fn build(config: PolicyConfig, processes: Vec<Process>) -> Box<dyn Scheduler> {
    info!(
        policy = config.policy.as_str(),
        quantum = config.quantum.ticks(),
        processes = processes.len(),
        "Scheduler selected"
    );

    match config.policy {
        Policy::Fcfs => Box::new(FcfsScheduler::new(processes)),
        Policy::Sjf => Box::new(SjfScheduler::new(processes)),
        Policy::RoundRobin => Box::new(RoundRobinScheduler::new(processes, config.quantum)),
    }
}
