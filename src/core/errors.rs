/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Ticks};
use crate::process::ProcessState;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator result type
pub type SimResult<T> = Result<T, SimError>;

/// Simulator errors with serialization support
///
/// Every variant is a deterministic precondition violation; nothing here is
/// transient and nothing is retried.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Process {0} already exists")]
    #[diagnostic(
        code(process::duplicate_pid),
        help("Every process descriptor must carry a unique pid.")
    )]
    DuplicatePid(Pid),

    #[error("Process {0} not found")]
    #[diagnostic(
        code(process::not_found),
        help("The pid is not known to the process manager.")
    )]
    ProcessNotFound(Pid),

    #[error("Invalid state transition for process {pid}: {from:?} -> {to:?} ({reason})")]
    #[diagnostic(
        code(process::invalid_transition),
        help("Terminated is absorbing, and terminating requires a completion time.")
    )]
    InvalidTransition {
        pid: Pid,
        from: ProcessState,
        to: ProcessState,
        reason: String,
    },

    #[error("Invalid process descriptor for pid {pid}: {reason}")]
    #[diagnostic(
        code(process::invalid_descriptor),
        help("burst_time must be greater than zero.")
    )]
    InvalidDescriptor { pid: Pid, reason: String },

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round-Robin needs a positive integer quantum.")
    )]
    InvalidQuantum(i64),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use fcfs, sjf or rr.")
    )]
    InvalidPolicy(String),

    #[error("No processes to schedule")]
    #[diagnostic(
        code(scheduler::empty_process_set),
        help("Load at least one process before running or computing metrics.")
    )]
    EmptyProcessSet,

    #[error("Metrics not ready: {0}")]
    #[diagnostic(
        code(scheduler::metrics_not_ready),
        help("Call run() to completion before compute_metrics().")
    )]
    MetricsNotReady(String),

    #[error("Timeline references process {pid} at tick {at}, which is not part of the run")]
    #[diagnostic(
        code(scheduler::unknown_slice),
        help("Replay a timeline only against the records of the run that produced it.")
    )]
    UnknownSlice { pid: Pid, at: Ticks },

    #[error("Simulated clock overflowed scheduling process {pid} at tick {at}")]
    #[diagnostic(
        code(scheduler::clock_overflow),
        help("Reduce arrival and burst times so the schedule fits in the tick range.")
    )]
    ClockOverflow { pid: Pid, at: Ticks },

    #[error("Parse error at line {line}: {reason}")]
    #[diagnostic(
        code(loader::parse_error),
        help("Expected pid,burst_time,arrival_time[,priority[,user]] per line.")
    )]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(loader::io_error),
        help("Check that the descriptor file exists and is readable.")
    )]
    Io(String),
}

impl SimError {
    /// Build an `InvalidTransition` error
    pub(crate) fn transition(
        pid: Pid,
        from: ProcessState,
        to: ProcessState,
        reason: impl Into<String>,
    ) -> Self {
        SimError::InvalidTransition {
            pid,
            from,
            to,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string())
    }
}
