/*!
 * Process Types
 * Lifecycle states and process descriptors
 */

use crate::core::limits::{DEFAULT_PRIORITY, MAX_ARRIVAL_TIME, MAX_BURST_TIME};
use crate::core::serde::is_zero_i32;
use crate::core::types::{Label, Pid, Priority, Ticks, DEFAULT_USER};
use crate::core::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Process state
///
/// Legal moves:
///
/// ```text
/// Ready -> Running -> Ready | Blocked | Terminated
/// Blocked -> Ready
/// ```
///
/// `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Process is eligible for the CPU
    Ready,
    /// Process holds the CPU
    Running,
    /// Process is waiting on an event
    Blocked,
    /// Process has finished
    Terminated,
}

impl ProcessState {
    /// Check whether `self -> next` is a legal lifecycle move
    #[inline]
    #[must_use]
    pub const fn can_transition_to(self, next: ProcessState) -> bool {
        matches!(
            (self, next),
            (ProcessState::Ready, ProcessState::Running)
                | (ProcessState::Running, ProcessState::Ready)
                | (ProcessState::Running, ProcessState::Blocked)
                | (ProcessState::Running, ProcessState::Terminated)
                | (ProcessState::Blocked, ProcessState::Ready)
        )
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, ProcessState::Terminated)
    }

    #[inline(always)]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProcessState::Ready => "ready",
            ProcessState::Running => "running",
            ProcessState::Blocked => "blocked",
            ProcessState::Terminated => "terminated",
        }
    }
}

fn default_user() -> Label {
    Label::from(DEFAULT_USER)
}

fn default_priority() -> Priority {
    DEFAULT_PRIORITY
}

/// Static description of a process, as handed over by a loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub burst_time: Ticks,
    #[serde(default)]
    pub arrival_time: Ticks,
    #[serde(default = "default_priority", skip_serializing_if = "is_zero_i32")]
    pub priority: Priority,
    #[serde(default = "default_user")]
    pub user: Label,
}

impl ProcessDescriptor {
    #[must_use]
    pub fn new(pid: Pid, burst_time: Ticks, arrival_time: Ticks) -> Self {
        Self {
            pid,
            burst_time,
            arrival_time,
            priority: DEFAULT_PRIORITY,
            user: default_user(),
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

    /// Reject descriptors that can never be scheduled
    pub fn validate(&self) -> SimResult<()> {
        if self.burst_time == 0 {
            return Err(SimError::InvalidDescriptor {
                pid: self.pid,
                reason: "burst_time must be greater than zero".into(),
            });
        }
        if self.burst_time > MAX_BURST_TIME {
            return Err(SimError::InvalidDescriptor {
                pid: self.pid,
                reason: format!("burst_time {} exceeds {}", self.burst_time, MAX_BURST_TIME),
            });
        }
        if self.arrival_time > MAX_ARRIVAL_TIME {
            return Err(SimError::InvalidDescriptor {
                pid: self.pid,
                reason: format!(
                    "arrival_time {} exceeds {}",
                    self.arrival_time, MAX_ARRIVAL_TIME
                ),
            });
        }
        Ok(())
    }
}
