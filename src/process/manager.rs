/*!
 * Process Management
 * Owns the ready, blocked and terminated queues and the running slot
 */

use super::record::Process;
use super::types::{ProcessDescriptor, ProcessState};
use crate::core::types::{Label, Pid, Priority, Ticks};
use crate::core::{SimError, SimResult};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info};

/// Process manager
///
/// A record lives in exactly one of `ready_queue`, `blocked_queue`,
/// `terminated` or `current` at any instant. The manager holds no scheduling
/// intelligence: `context_switch` is a plain FIFO handoff.
#[derive(Debug, Default)]
pub struct ProcessManager {
    pub(super) ready_queue: VecDeque<Process>,
    pub(super) blocked_queue: VecDeque<Process>,
    pub(super) terminated: Vec<Process>,
    pub(super) current: Option<Process>,
    known_pids: HashSet<Pid, RandomState>,
    pub(super) context_switches: u64,
}

impl ProcessManager {
    pub fn new() -> Self {
        info!("Process manager initialized");
        Self::default()
    }

    /// Create a process and append it to the ready queue tail
    pub fn create_process(
        &mut self,
        pid: Pid,
        burst_time: Ticks,
        arrival_time: Ticks,
        priority: Priority,
        user: impl Into<Label>,
    ) -> SimResult<&Process> {
        let desc = ProcessDescriptor::new(pid, burst_time, arrival_time)
            .with_priority(priority)
            .with_user(user);
        self.create_from_descriptor(&desc)
    }

    /// Create a process from a loader descriptor
    pub fn create_from_descriptor(&mut self, desc: &ProcessDescriptor) -> SimResult<&Process> {
        if self.known_pids.contains(&desc.pid) {
            return Err(SimError::DuplicatePid(desc.pid));
        }
        desc.validate()?;

        self.known_pids.insert(desc.pid);
        self.ready_queue.push_back(Process::from(desc));
        debug!(
            pid = desc.pid,
            burst = desc.burst_time,
            arrival = desc.arrival_time,
            "Process created"
        );

        // Just pushed; the queue cannot be empty
        Ok(&self.ready_queue[self.ready_queue.len() - 1])
    }

    /// Create every descriptor in order, stopping at the first failure
    pub fn load<'a, I>(&mut self, descriptors: I) -> SimResult<usize>
    where
        I: IntoIterator<Item = &'a ProcessDescriptor>,
    {
        let mut created = 0;
        for desc in descriptors {
            self.create_from_descriptor(desc)?;
            created += 1;
        }
        info!(created, total = self.len(), "Processes loaded");
        Ok(created)
    }

    /// FIFO handoff of the CPU
    ///
    /// A running, non-terminated current process goes back to the ready
    /// tail; the ready head becomes current. Returns the new current pid.
    /// Both moves are checked first, so a rejected switch changes nothing.
    pub fn context_switch(&mut self) -> SimResult<Option<Pid>> {
        if let Some(previous) = self.current.as_ref() {
            if previous.state() != ProcessState::Terminated {
                previous.check_transition(ProcessState::Ready)?;
            }
        }
        if let Some(next) = self.ready_queue.front() {
            next.check_transition(ProcessState::Running)?;
        }

        self.context_switches += 1;

        if let Some(mut previous) = self.current.take() {
            if previous.state() != ProcessState::Terminated {
                previous.preempt()?;
                self.ready_queue.push_back(previous);
            }
        }

        match self.ready_queue.pop_front() {
            Some(mut next) => {
                next.change_state(ProcessState::Running, None)?;
                let pid = next.pid();
                self.current = Some(next);
                debug!(pid, switches = self.context_switches, "Context switch");
                Ok(Some(pid))
            }
            None => {
                debug!(switches = self.context_switches, "Context switch to idle");
                Ok(None)
            }
        }
    }

    /// Terminate the running process at `current_time`
    ///
    /// Returns the terminated pid, or `None` when the CPU is idle.
    pub fn terminate_current_process(&mut self, current_time: Ticks) -> SimResult<Option<Pid>> {
        match self.current.as_mut() {
            Some(process) => process.terminate(current_time)?,
            None => return Ok(None),
        }

        Ok(self.current.take().map(|process| {
            let pid = process.pid();
            debug!(pid, at = current_time, "Process terminated");
            self.terminated.push(process);
            pid
        }))
    }

    /// Move the running process to the blocked queue tail
    pub fn block_current_process(&mut self) -> SimResult<Option<Pid>> {
        match self.current.as_mut() {
            Some(process) => process.block()?,
            None => return Ok(None),
        }

        Ok(self.current.take().map(|process| {
            let pid = process.pid();
            debug!(pid, "Process blocked");
            self.blocked_queue.push_back(process);
            pid
        }))
    }

    /// Move a blocked process back to the ready queue tail
    ///
    /// Unknown or non-blocked pids are a silent no-op reported as `false`.
    pub fn unblock_process(&mut self, pid: Pid) -> SimResult<bool> {
        let Some(pos) = self.blocked_queue.iter().position(|p| p.pid() == pid) else {
            return Ok(false);
        };

        self.blocked_queue[pos].unblock()?;
        if let Some(process) = self.blocked_queue.remove(pos) {
            debug!(pid, "Process unblocked");
            self.ready_queue.push_back(process);
        }
        Ok(true)
    }

    /// Number of `context_switch` handoffs so far
    #[inline]
    pub fn context_switch_count(&self) -> u64 {
        self.context_switches
    }

    pub fn current(&self) -> Option<&Process> {
        self.current.as_ref()
    }

    pub fn ready_queue(&self) -> impl Iterator<Item = &Process> {
        self.ready_queue.iter()
    }

    pub fn blocked_queue(&self) -> impl Iterator<Item = &Process> {
        self.blocked_queue.iter()
    }

    pub fn terminated(&self) -> &[Process] {
        &self.terminated
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.known_pids.contains(&pid)
    }

    /// Look a process up wherever it currently lives
    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.all().find(|p| p.pid() == pid)
    }

    pub fn len(&self) -> usize {
        self.known_pids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_pids.is_empty()
    }

    /// Owned copies of the ready queue, in queue order
    ///
    /// This is what a scheduling policy is handed, so a run never aliases
    /// the manager's own records.
    pub fn pending(&self) -> Vec<Process> {
        self.ready_queue.iter().cloned().collect()
    }

    /// Owned copies of every known record, ordered by pid
    pub fn snapshot(&self) -> Vec<Process> {
        let mut all: Vec<Process> = self.all().cloned().collect();
        all.sort_by_key(Process::pid);
        all
    }

    fn all(&self) -> impl Iterator<Item = &Process> {
        self.current
            .iter()
            .chain(self.ready_queue.iter())
            .chain(self.blocked_queue.iter())
            .chain(self.terminated.iter())
    }
}
