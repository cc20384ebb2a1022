/*!
 * Shortest Job First
 * Non-preemptive; picks the shortest burst among arrived processes
 */

use super::state::{advance, SimState};
use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::Policy;
use crate::core::types::Ticks;
use crate::core::SimResult;
use crate::process::Process;
use tracing::debug;

/// SJF scheduler
///
/// Among eligible processes the minimum `burst_time` wins; equal bursts go
/// to the lower pid.
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    state: SimState,
}

impl SjfScheduler {
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            state: SimState::new(processes),
        }
    }
}

/// Position in `remaining` of the next process to run at `clock`
fn pick_shortest(processes: &[Process], remaining: &[usize], clock: Ticks) -> Option<usize> {
    remaining
        .iter()
        .enumerate()
        .filter(|&(_, &idx)| processes[idx].arrival_time() <= clock)
        .min_by_key(|&(_, &idx)| (processes[idx].burst_time(), processes[idx].pid()))
        .map(|(pos, _)| pos)
}

fn simulate(processes: &mut [Process], timeline: &mut Timeline) -> SimResult<()> {
    // Indices in arrival order; `processes` is already sorted
    let mut remaining: Vec<usize> = (0..processes.len()).collect();
    let mut clock: Ticks = 0;

    while !remaining.is_empty() {
        let pos = match pick_shortest(processes, &remaining, clock) {
            Some(pos) => pos,
            None => {
                // CPU idle until the next arrival
                let Some(next_arrival) = remaining
                    .iter()
                    .map(|&idx| processes[idx].arrival_time())
                    .min()
                else {
                    break;
                };
                clock = next_arrival;
                continue;
            }
        };

        let idx = remaining.remove(pos);
        let process = &mut processes[idx];
        let start = clock.max(process.arrival_time());
        let end = advance(process.pid(), start, process.burst_time())?;

        process.dispatch(start)?;
        process.terminate(end)?;
        timeline.push(process.pid(), start, end);
        debug!(pid = process.pid(), start, end, "SJF dispatch");

        clock = end;
    }

    Ok(())
}

impl Scheduler for SjfScheduler {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn run(&mut self) -> SimResult<()> {
        self.state.run(Policy::Sjf, simulate)
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
