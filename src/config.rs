/*!
 * Command Line Configuration
 * Arguments for the `schedsim` binary, with environment fallbacks
 */

use crate::core::limits::{DEFAULT_POLICY, DEFAULT_QUANTUM, TRACE_JSON_ENV};
use crate::core::SimResult;
use crate::scheduler::{Policy, PolicyConfig, TimeQuantum};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "schedsim",
    about = "Simulate FCFS, SJF and Round-Robin CPU scheduling over a process list"
)]
pub struct SimConfig {
    #[arg(
        long,
        short,
        env = "SCHED_INPUT",
        value_hint = clap::ValueHint::FilePath,
        help = "Process descriptor file (pid,burst_time,arrival_time[,priority[,user]] lines or a JSON array)"
    )]
    pub input: PathBuf,

    #[arg(
        long,
        short,
        env = "SCHED_POLICY",
        default_value = DEFAULT_POLICY,
        help = "Scheduling policy: fcfs, sjf or rr"
    )]
    pub policy: Policy,

    #[arg(
        long,
        short,
        env = "SCHED_QUANTUM",
        default_value_t = DEFAULT_QUANTUM as i64,
        allow_negative_numbers = true,
        help = "Round-Robin time quantum in ticks"
    )]
    pub quantum: i64,

    #[arg(long, help = "Print the run report as JSON instead of text")]
    pub json: bool,

    #[arg(long, help = "Run every policy on the input and print a metrics table")]
    pub compare: bool,

    #[arg(long, env = TRACE_JSON_ENV, help = "Emit tracing output as JSON")]
    pub trace_json: bool,
}

impl SimConfig {
    /// Validated quantum
    pub fn time_quantum(&self) -> SimResult<TimeQuantum> {
        TimeQuantum::new(self.quantum)
    }

    /// Policy plus quantum; the quantum is validated even for non-preemptive policies
    pub fn policy_config(&self) -> SimResult<PolicyConfig> {
        Ok(PolicyConfig {
            policy: self.policy,
            quantum: self.time_quantum()?,
        })
    }
}
