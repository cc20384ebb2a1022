/*!
 * Simulation State
 * Records and timeline owned by one policy instance
 */

use super::timeline::Timeline;
use super::types::Policy;
use crate::core::types::{Pid, Ticks};
use crate::core::{SimError, SimResult};
use crate::process::Process;
use ahash::RandomState;
use std::collections::HashSet;
use tracing::info;

/// `clock + by`, or `ClockOverflow` for `pid`
#[inline]
pub(crate) fn advance(pid: Pid, clock: Ticks, by: Ticks) -> SimResult<Ticks> {
    clock
        .checked_add(by)
        .ok_or(SimError::ClockOverflow { pid, at: clock })
}

/// Records plus the output of the last successful run
#[derive(Debug, Clone, Default)]
pub(crate) struct SimState {
    pub processes: Vec<Process>,
    pub timeline: Timeline,
    pub complete: bool,
}

impl SimState {
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            timeline: Timeline::new(),
            complete: false,
        }
    }

    /// Run `simulate` over fresh copies of the records
    ///
    /// Records are reset and sorted by `(arrival_time, pid)` before the loop
    /// sees them. The result replaces the stored state only on success.
    pub fn run<F>(&mut self, policy: Policy, simulate: F) -> SimResult<()>
    where
        F: FnOnce(&mut [Process], &mut Timeline) -> SimResult<()>,
    {
        if self.processes.is_empty() {
            return Err(SimError::EmptyProcessSet);
        }

        let mut seen: HashSet<Pid, RandomState> = HashSet::default();
        for process in &self.processes {
            process.descriptor().validate()?;
            if !seen.insert(process.pid()) {
                return Err(SimError::DuplicatePid(process.pid()));
            }
        }

        let mut processes = self.processes.clone();
        for process in &mut processes {
            process.reset();
        }
        processes.sort_by_key(|p| (p.arrival_time(), p.pid()));

        let mut timeline = Timeline::new();
        simulate(processes.as_mut_slice(), &mut timeline)?;

        info!(
            policy = policy.as_str(),
            processes = processes.len(),
            slices = timeline.len(),
            makespan = timeline.makespan(),
            "Simulation complete"
        );

        self.processes = processes;
        self.timeline = timeline;
        self.complete = true;
        Ok(())
    }
}
