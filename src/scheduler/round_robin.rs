/*!
 * Round-Robin
 * Preemptive time slicing with a fixed quantum
 */

use super::state::{advance, SimState};
use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::{Policy, TimeQuantum};
use crate::core::types::Ticks;
use crate::core::SimResult;
use crate::process::Process;
use std::collections::VecDeque;
use tracing::debug;

/// Round-Robin scheduler
///
/// The ready queue is seeded in arrival order. Processes that arrive while a
/// slice runs are queued before the preempted process rejoins the tail.
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    state: SimState,
    quantum: TimeQuantum,
}

impl RoundRobinScheduler {
    pub fn new(processes: Vec<Process>, quantum: TimeQuantum) -> Self {
        Self {
            state: SimState::new(processes),
            quantum,
        }
    }

    /// Build with a raw quantum, rejecting zero and negative values
    pub fn with_quantum(processes: Vec<Process>, quantum: i64) -> SimResult<Self> {
        Ok(Self::new(processes, TimeQuantum::new(quantum)?))
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

/// Ready queue plus the admission cursor into the arrival-sorted records
struct ReadyQueue {
    queue: VecDeque<usize>,
    next_arrival: usize,
}

impl ReadyQueue {
    fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            next_arrival: 0,
        }
    }

    /// Queue every not-yet-admitted process with `arrival_time <= clock`
    fn admit(&mut self, processes: &[Process], clock: Ticks) {
        while let Some(process) = processes.get(self.next_arrival) {
            if process.arrival_time() > clock {
                break;
            }
            self.queue.push_back(self.next_arrival);
            self.next_arrival += 1;
        }
    }
}

fn simulate(
    processes: &mut [Process],
    timeline: &mut Timeline,
    quantum: Ticks,
) -> SimResult<()> {
    let mut remaining: Vec<Ticks> = processes.iter().map(Process::burst_time).collect();
    let mut ready = ReadyQueue::new();
    let mut completed = 0;
    let mut clock: Ticks = 0;

    while completed < processes.len() {
        ready.admit(processes, clock);

        let Some(idx) = ready.queue.pop_front() else {
            // CPU idle until the next arrival
            match processes.get(ready.next_arrival) {
                Some(next) => {
                    clock = next.arrival_time();
                    continue;
                }
                None => break,
            }
        };

        let process = &mut processes[idx];
        process.dispatch(clock)?;

        let run = quantum.min(remaining[idx]);
        let start = clock;
        clock = advance(process.pid(), clock, run)?;
        remaining[idx] -= run;
        timeline.push(process.pid(), start, clock);
        debug!(
            pid = process.pid(),
            start,
            end = clock,
            remaining = remaining[idx],
            "Round-robin slice"
        );

        if remaining[idx] == 0 {
            process.terminate(clock)?;
            completed += 1;
            ready.admit(processes, clock);
        } else {
            process.preempt()?;
            ready.admit(processes, clock);
            ready.queue.push_back(idx);
        }
    }

    Ok(())
}

impl Scheduler for RoundRobinScheduler {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn run(&mut self) -> SimResult<()> {
        let quantum = self.quantum.ticks();
        self.state.run(Policy::RoundRobin, |processes, timeline| {
            simulate(processes, timeline, quantum)
        })
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
