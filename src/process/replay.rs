/*!
 * Process Manager Replay
 * Drives the manager's queues through a finished scheduling run
 */

use super::manager::ProcessManager;
use super::record::Process;
use super::types::ProcessState;
use crate::core::types::{Pid, Ticks};
use crate::core::{SimError, SimResult};
use crate::scheduler::Timeline;
use std::collections::HashMap;
use tracing::{debug, info};

impl ProcessManager {
    /// Replay `timeline` against the manager's own records
    ///
    /// Each slice puts its process on the CPU (a context switch when the pid
    /// changes). At the end of its final slice a process is terminated at the
    /// completion time recorded in `completed`; otherwise it stays current
    /// until the next slice preempts it back to the ready tail.
    ///
    /// Every pid in the timeline is checked before anything moves, so a
    /// rejected replay leaves the manager untouched.
    pub fn replay(&mut self, timeline: &Timeline, completed: &[Process]) -> SimResult<()> {
        let completion: HashMap<Pid, Ticks> = completed
            .iter()
            .filter_map(|p| p.completion_time().map(|end| (p.pid(), end)))
            .collect();

        for slice in timeline {
            if !completion.contains_key(&slice.pid) {
                return Err(SimError::UnknownSlice {
                    pid: slice.pid,
                    at: slice.start,
                });
            }
            match self.get(slice.pid).map(Process::state) {
                None => return Err(SimError::ProcessNotFound(slice.pid)),
                Some(state @ (ProcessState::Blocked | ProcessState::Terminated)) => {
                    return Err(SimError::transition(
                        slice.pid,
                        state,
                        ProcessState::Running,
                        "process is not schedulable",
                    ));
                }
                Some(_) => {}
            }
        }

        for slice in timeline {
            self.switch_to(slice.pid, slice.start)?;
            if completion.get(&slice.pid) == Some(&slice.end) {
                self.terminate_current_process(slice.end)?;
            }
        }

        info!(
            slices = timeline.len(),
            terminated = self.terminated.len(),
            switches = self.context_switches,
            "Timeline replayed"
        );
        Ok(())
    }

    /// Put `pid` on the CPU at `at`, preempting whoever holds it
    fn switch_to(&mut self, pid: Pid, at: Ticks) -> SimResult<()> {
        if self.current.as_ref().map(Process::pid) == Some(pid) {
            return Ok(());
        }

        let pos = self
            .ready_queue
            .iter()
            .position(|p| p.pid() == pid)
            .ok_or(SimError::ProcessNotFound(pid))?;

        self.ready_queue[pos].dispatch(at)?;
        let Some(next) = self.ready_queue.remove(pos) else {
            return Err(SimError::ProcessNotFound(pid));
        };

        if let Some(mut previous) = self.current.take() {
            previous.preempt()?;
            self.ready_queue.push_back(previous);
        }

        self.context_switches += 1;
        debug!(pid, at, switches = self.context_switches, "Replay dispatch");
        self.current = Some(next);
        Ok(())
    }
}
