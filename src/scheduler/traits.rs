/*!
 * Scheduler Traits
 * Capability interface shared by every scheduling policy
 */

use super::metrics::{self, Metrics, ProcessMetrics};
use super::timeline::Timeline;
use super::types::Policy;
use crate::core::{SimError, SimResult};
use crate::process::Process;

/// A scheduling policy over a fixed set of process records
///
/// A policy owns its records and its timeline. `run` simulates from a
/// clean slate every time it is called; callers should still treat an
/// instance as single-use.
pub trait Scheduler {
    /// Which algorithm this is
    fn policy(&self) -> Policy;

    /// Simulate every record to completion
    ///
    /// Fails with `EmptyProcessSet` on zero records. On error, records and
    /// timeline are left exactly as they were.
    fn run(&mut self) -> SimResult<()>;

    /// CPU allocations of the last successful run
    fn timeline(&self) -> &Timeline;

    /// Records owned by this policy, in arrival order after a run
    fn processes(&self) -> &[Process];

    /// Whether a run has completed
    fn is_complete(&self) -> bool;

    /// Average waiting, average turnaround and throughput
    fn compute_metrics(&self) -> SimResult<Metrics> {
        if self.processes().is_empty() {
            return Err(SimError::EmptyProcessSet);
        }
        if !self.is_complete() {
            return Err(SimError::MetricsNotReady(format!(
                "{} has not been run",
                self.policy()
            )));
        }
        metrics::compute(self.processes())
    }

    /// Per-process detail of the last run
    fn process_metrics(&self) -> SimResult<Vec<ProcessMetrics>> {
        // Same preconditions as the aggregate figures
        self.compute_metrics()?;
        metrics::per_process(self.processes())
    }
}
