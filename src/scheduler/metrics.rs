/*!
 * Scheduler Metrics
 * Aggregate performance figures derived from a finished run
 */

use super::state::advance;
use crate::core::types::{Pid, Ticks};
use crate::core::{SimError, SimResult};
use crate::process::Process;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate metrics for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub throughput: f64,
}

impl Metrics {
    /// Metrics keyed by name, for drivers that want a plain mapping
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("avg_waiting", self.avg_waiting),
            ("avg_turnaround", self.avg_turnaround),
            ("throughput", self.throughput),
        ])
    }
}

/// Per-process detail line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub waiting: Ticks,
    pub turnaround: Ticks,
    pub completion: Ticks,
}

/// Timestamps of a finished record, or `MetricsNotReady`
fn finished(process: &Process) -> SimResult<(Ticks, Ticks)> {
    match (process.start_time(), process.completion_time()) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(SimError::MetricsNotReady(format!(
            "process {} has not finished",
            process.pid()
        ))),
    }
}

/// Reduce finished records to averages and throughput
///
/// - `avg_waiting = mean(start_time - arrival_time)`
/// - `avg_turnaround = mean(completion_time - arrival_time)`
/// - `throughput = count / max(completion_time)`
pub fn compute(processes: &[Process]) -> SimResult<Metrics> {
    if processes.is_empty() {
        return Err(SimError::EmptyProcessSet);
    }

    let mut waiting: Ticks = 0;
    let mut turnaround: Ticks = 0;
    let mut makespan: Ticks = 0;

    for process in processes {
        let (start, end) = finished(process)?;
        waiting = advance(process.pid(), waiting, start - process.arrival_time())?;
        turnaround = advance(process.pid(), turnaround, end - process.arrival_time())?;
        makespan = makespan.max(end);
    }

    if makespan == 0 {
        return Err(SimError::MetricsNotReady(
            "no simulated time has elapsed".into(),
        ));
    }

    let n = processes.len() as f64;
    Ok(Metrics {
        avg_waiting: waiting as f64 / n,
        avg_turnaround: turnaround as f64 / n,
        throughput: n / makespan as f64,
    })
}

/// Per-process waiting, turnaround and completion, ordered by pid
pub fn per_process(processes: &[Process]) -> SimResult<Vec<ProcessMetrics>> {
    let mut rows = processes
        .iter()
        .map(|process| {
            let (start, end) = finished(process)?;
            Ok(ProcessMetrics {
                pid: process.pid(),
                waiting: start - process.arrival_time(),
                turnaround: end - process.arrival_time(),
                completion: end,
            })
        })
        .collect::<SimResult<Vec<_>>>()?;
    rows.sort_by_key(|row| row.pid);
    Ok(rows)
}
