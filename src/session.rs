/*!
 * Simulation Session
 * Wires the process manager, a scheduling policy and the metrics together
 */

use crate::core::types::Ticks;
use crate::core::{SimError, SimResult};
use crate::loader;
use crate::monitoring::span_simulation;
use crate::process::{ProcessDescriptor, ProcessManager};
use crate::scheduler::{self, Metrics, Policy, PolicyConfig, ProcessMetrics, Scheduler, Timeline};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Everything a front end needs to present one run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub policy: Policy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    pub timeline: Timeline,
    pub metrics: Metrics,
    pub processes: Vec<ProcessMetrics>,
    pub context_switches: u64,
}

/// Aggregate metrics of one policy in a comparison
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PolicyComparison {
    pub policy: Policy,
    pub metrics: Metrics,
}

/// One load-then-run cycle
///
/// The policy works on copies of the manager's ready queue; the manager is
/// then replayed through the resulting timeline so its queues, terminated
/// list and context-switch counter reflect the run.
pub struct Session {
    manager: ProcessManager,
    config: PolicyConfig,
    scheduler: Option<Box<dyn Scheduler>>,
}

impl Session {
    pub fn new(config: PolicyConfig) -> Self {
        Self::with_manager(ProcessManager::new(), config)
    }

    pub fn with_manager(manager: ProcessManager, config: PolicyConfig) -> Self {
        Self {
            manager,
            config,
            scheduler: None,
        }
    }

    pub fn config(&self) -> PolicyConfig {
        self.config
    }

    pub fn manager(&self) -> &ProcessManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut ProcessManager {
        &mut self.manager
    }

    /// The policy instance of the last run
    pub fn scheduler(&self) -> Option<&dyn Scheduler> {
        self.scheduler.as_deref()
    }

    /// Create processes from descriptors
    pub fn load(&mut self, descriptors: &[ProcessDescriptor]) -> SimResult<usize> {
        self.manager.load(descriptors)
    }

    /// Create processes from a descriptor file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> SimResult<usize> {
        let descriptors = loader::load_descriptors(path)?;
        self.load(&descriptors)
    }

    /// Run the configured policy over every ready process
    pub fn run(&mut self) -> SimResult<RunReport> {
        let pending = self.manager.pending();
        if pending.is_empty() {
            return Err(SimError::EmptyProcessSet);
        }

        let span = span_simulation(self.config.policy.as_str(), pending.len());
        let _entered = span.enter();

        let mut sched = scheduler::build(self.config, pending);
        sched.run()?;
        let metrics = sched.compute_metrics()?;
        let processes = sched.process_metrics()?;

        self.manager.replay(sched.timeline(), sched.processes())?;

        span.record("slices", sched.timeline().len() as u64);
        span.record("makespan", sched.timeline().makespan());
        info!(
            avg_waiting = metrics.avg_waiting,
            avg_turnaround = metrics.avg_turnaround,
            throughput = metrics.throughput,
            context_switches = self.manager.context_switch_count(),
            "Run finished"
        );

        let report = RunReport {
            policy: self.config.policy,
            quantum: self
                .config
                .policy
                .is_preemptive()
                .then(|| self.config.quantum.ticks()),
            timeline: sched.timeline().clone(),
            metrics,
            processes,
            context_switches: self.manager.context_switch_count(),
        };
        self.scheduler = Some(sched);
        Ok(report)
    }
}

/// Run every policy on its own copy of the same descriptors
pub fn compare(
    descriptors: &[ProcessDescriptor],
    quantum: scheduler::TimeQuantum,
) -> SimResult<Vec<PolicyComparison>> {
    Policy::ALL
        .iter()
        .map(|&policy| {
            let mut session = Session::new(PolicyConfig { policy, quantum });
            session.load(descriptors)?;
            let report = session.run()?;
            Ok(PolicyComparison {
                policy,
                metrics: report.metrics,
            })
        })
        .collect()
}
