/*!
 * First-Come-First-Served
 * Non-preemptive, strictly in arrival order
 */

use super::state::{advance, SimState};
use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::Policy;
use crate::core::types::Ticks;
use crate::core::SimResult;
use crate::process::Process;
use tracing::debug;

/// FCFS scheduler
///
/// Ties on arrival time go to the lower pid.
#[derive(Debug, Clone)]
pub struct FcfsScheduler {
    state: SimState,
}

impl FcfsScheduler {
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            state: SimState::new(processes),
        }
    }
}

fn simulate(processes: &mut [Process], timeline: &mut Timeline) -> SimResult<()> {
    let mut clock: Ticks = 0;

    for process in processes.iter_mut() {
        clock = clock.max(process.arrival_time());
        let end = advance(process.pid(), clock, process.burst_time())?;

        process.dispatch(clock)?;
        process.terminate(end)?;
        timeline.push(process.pid(), clock, end);
        debug!(pid = process.pid(), start = clock, end, "FCFS dispatch");

        clock = end;
    }

    Ok(())
}

impl Scheduler for FcfsScheduler {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn run(&mut self) -> SimResult<()> {
        self.state.run(Policy::Fcfs, simulate)
    }

    fn timeline(&self) -> &Timeline {
        &self.state.timeline
    }

    fn processes(&self) -> &[Process] {
        &self.state.processes
    }

    fn is_complete(&self) -> bool {
        self.state.complete
    }
}
