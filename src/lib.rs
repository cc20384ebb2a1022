/*!
 * CPU Scheduling Simulator Library
 * Process lifecycle, scheduling policies and performance metrics
 */

pub mod config;
pub mod core;
pub mod loader;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod session;

// Re-exports
pub use config::SimConfig;
pub use crate::core::{Pid, Priority, SimError, SimResult, Ticks};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessDescriptor, ProcessManager, ProcessState};
pub use scheduler::{
    FcfsScheduler, Metrics, Policy, PolicyConfig, ProcessMetrics, RoundRobinScheduler, Scheduler,
    SjfScheduler, Slice, TimeQuantum, Timeline,
};
pub use session::{compare, PolicyComparison, RunReport, Session};
