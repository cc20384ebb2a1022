/*!
 * Process Record
 * Identity plus lifecycle timestamps for one simulated process
 */

use super::types::{ProcessDescriptor, ProcessState};
use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::serde::is_none;
use crate::core::types::{Label, Pid, Priority, Ticks, DEFAULT_USER};
use crate::core::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// A simulated process
///
/// Identity fields are fixed at construction. `state`, `start_time` and
/// `completion_time` move only through the transition methods below, which
/// both the process manager and every scheduling policy go through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pid: Pid,
    burst_time: Ticks,
    arrival_time: Ticks,
    priority: Priority,
    user: Label,
    state: ProcessState,
    #[serde(skip_serializing_if = "is_none")]
    start_time: Option<Ticks>,
    #[serde(skip_serializing_if = "is_none")]
    completion_time: Option<Ticks>,
}

impl Process {
    /// Create a ready process owned by the default user
    #[must_use]
    pub fn new(pid: Pid, burst_time: Ticks, arrival_time: Ticks) -> Self {
        Self {
            pid,
            burst_time,
            arrival_time,
            priority: DEFAULT_PRIORITY,
            user: Label::from(DEFAULT_USER),
            state: ProcessState::Ready,
            start_time: None,
            completion_time: None,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_user(mut self, user: impl Into<Label>) -> Self {
        self.user = user.into();
        self
    }

    #[inline(always)]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    #[inline(always)]
    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    #[inline(always)]
    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    #[inline(always)]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn user(&self) -> &str {
        self.user.as_str()
    }

    #[inline(always)]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Time of first CPU allocation
    #[inline(always)]
    pub fn start_time(&self) -> Option<Ticks> {
        self.start_time
    }

    /// End of the final CPU allocation
    #[inline(always)]
    pub fn completion_time(&self) -> Option<Ticks> {
        self.completion_time
    }

    /// Time spent eligible before the first dispatch
    pub fn waiting_time(&self) -> Option<Ticks> {
        self.start_time.map(|start| start - self.arrival_time)
    }

    /// Time from arrival to completion
    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.completion_time.map(|end| end - self.arrival_time)
    }

    /// Both timestamps are set
    pub fn is_finished(&self) -> bool {
        self.start_time.is_some() && self.completion_time.is_some()
    }

    /// Descriptor this record was built from
    pub fn descriptor(&self) -> ProcessDescriptor {
        ProcessDescriptor {
            pid: self.pid,
            burst_time: self.burst_time,
            arrival_time: self.arrival_time,
            priority: self.priority,
            user: self.user.clone(),
        }
    }

    /// Check `state -> new_state` against the lifecycle table without moving
    pub fn check_transition(&self, new_state: ProcessState) -> SimResult<()> {
        if self.state.is_terminal() {
            return Err(SimError::transition(
                self.pid,
                self.state,
                new_state,
                "terminated is absorbing",
            ));
        }

        if !self.state.can_transition_to(new_state) {
            return Err(SimError::transition(
                self.pid,
                self.state,
                new_state,
                "illegal lifecycle move",
            ));
        }
        Ok(())
    }

    /// Move to `new_state`
    ///
    /// Entering `Terminated` requires `at` and records it as the completion
    /// time. No other move writes a timestamp. On error the record is left
    /// unchanged.
    pub fn change_state(&mut self, new_state: ProcessState, at: Option<Ticks>) -> SimResult<()> {
        self.check_transition(new_state)?;

        if new_state == ProcessState::Terminated {
            let at = at.ok_or_else(|| {
                SimError::transition(
                    self.pid,
                    self.state,
                    new_state,
                    "terminating requires a completion time",
                )
            })?;

            if let Some(start) = self.start_time {
                if at < start {
                    return Err(SimError::transition(
                        self.pid,
                        self.state,
                        new_state,
                        format!("completion time {} precedes start time {}", at, start),
                    ));
                }
            }

            self.completion_time = Some(at);
        }

        self.state = new_state;
        Ok(())
    }

    /// Put the process on the CPU at `at`, recording the first dispatch only
    pub fn dispatch(&mut self, at: Ticks) -> SimResult<()> {
        self.change_state(ProcessState::Running, None)?;
        if self.start_time.is_none() {
            self.start_time = Some(at);
        }
        Ok(())
    }

    /// Take the process off the CPU, keeping it eligible
    pub fn preempt(&mut self) -> SimResult<()> {
        self.change_state(ProcessState::Ready, None)
    }

    pub fn block(&mut self) -> SimResult<()> {
        self.change_state(ProcessState::Blocked, None)
    }

    pub fn unblock(&mut self) -> SimResult<()> {
        self.change_state(ProcessState::Ready, None)
    }

    /// Finish the process at `at`
    pub fn terminate(&mut self, at: Ticks) -> SimResult<()> {
        self.change_state(ProcessState::Terminated, Some(at))
    }

    /// Return to the freshly-created state so a policy can re-simulate
    pub(crate) fn reset(&mut self) {
        self.state = ProcessState::Ready;
        self.start_time = None;
        self.completion_time = None;
    }
}

impl From<&ProcessDescriptor> for Process {
    fn from(desc: &ProcessDescriptor) -> Self {
        Process::new(desc.pid, desc.burst_time, desc.arrival_time)
            .with_priority(desc.priority)
            .with_user(desc.user.clone())
    }
}
