/*!
 * Scheduling Property Tests
 * Invariants every policy must hold over random process sets
 */

use cpu_sched_sim::scheduler::build;
use cpu_sched_sim::{
    Policy, PolicyConfig, Process, ProcessDescriptor, ProcessManager, Scheduler, Session,
    TimeQuantum, Ticks,
};
use proptest::prelude::*;

/// (burst, arrival) pairs; pids are assigned by position
fn workload() -> impl Strategy<Value = Vec<(Ticks, Ticks)>> {
    prop::collection::vec((1u64..=8, 0u64..=20), 1..=12)
}

fn records(jobs: &[(Ticks, Ticks)]) -> Vec<Process> {
    jobs.iter()
        .enumerate()
        .map(|(idx, &(burst, arrival))| Process::new(idx as u32 + 1, burst, arrival))
        .collect()
}

fn run(policy: Policy, quantum: Ticks, jobs: &[(Ticks, Ticks)]) -> Box<dyn Scheduler> {
    let config = PolicyConfig {
        policy,
        quantum: TimeQuantum::new(quantum as i64).unwrap(),
    };
    let mut sched = build(config, records(jobs));
    sched.run().unwrap();
    sched
}

fn check_common(sched: &dyn Scheduler) -> Result<(), TestCaseError> {
    let timeline = sched.timeline();

    for pair in timeline.as_slice().windows(2) {
        prop_assert!(pair[1].start >= pair[0].end, "overlapping slices {:?}", pair);
    }

    for p in sched.processes() {
        prop_assert!(p.is_finished());
        prop_assert_eq!(timeline.busy_time_for(p.pid()), p.burst_time());

        let start = p.start_time().unwrap();
        let end = p.completion_time().unwrap();
        prop_assert!(start >= p.arrival_time());
        prop_assert!(end >= start);

        let mut own = timeline.slices_for(p.pid());
        prop_assert_eq!(own.next().map(|s| s.start), Some(start));
        prop_assert_eq!(timeline.slices_for(p.pid()).last().map(|s| s.end), Some(end));
    }

    let metrics = sched.compute_metrics().unwrap();
    let expected = sched.processes().len() as f64 / timeline.makespan() as f64;
    prop_assert!((metrics.throughput - expected).abs() < 1e-9);
    Ok(())
}

proptest! {
    #[test]
    fn prop_every_policy_runs_each_burst_exactly(jobs in workload(), q in 1u64..=5) {
        for policy in Policy::ALL {
            let sched = run(policy, q, &jobs);
            check_common(sched.as_ref())?;
        }
    }

    #[test]
    fn prop_round_robin_slices_fit_quantum(jobs in workload(), q in 1u64..=5) {
        let sched = run(Policy::RoundRobin, q, &jobs);
        for slice in sched.timeline() {
            prop_assert!(slice.len() >= 1 && slice.len() <= q, "{:?} with q={}", slice, q);
        }
    }

    #[test]
    fn prop_fcfs_order_ignores_burst(jobs in workload()) {
        let sched = run(Policy::Fcfs, 1, &jobs);

        let mut expected: Vec<(Ticks, u32)> = records(&jobs)
            .iter()
            .map(|p| (p.arrival_time(), p.pid()))
            .collect();
        expected.sort();
        let expected: Vec<u32> = expected.into_iter().map(|(_, pid)| pid).collect();

        let order: Vec<u32> = sched.timeline().iter().map(|s| s.pid).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn prop_sjf_picks_shortest_eligible(jobs in workload()) {
        let sched = run(Policy::Sjf, 1, &jobs);
        let all = records(&jobs);

        prop_assert_eq!(sched.timeline().len(), all.len());
        for slice in sched.timeline() {
            let chosen = (jobs[slice.pid as usize - 1].0, slice.pid);
            let best = all
                .iter()
                .filter(|p| p.arrival_time() <= slice.start)
                .filter(|p| {
                    sched.timeline().slices_for(p.pid()).all(|s| s.start >= slice.start)
                })
                .map(|p| (p.burst_time(), p.pid()))
                .min();
            prop_assert_eq!(Some(chosen), best);
        }
    }

    #[test]
    fn prop_replay_counts_every_handoff(jobs in workload(), q in 1u64..=5) {
        for policy in Policy::ALL {
            let descriptors: Vec<ProcessDescriptor> =
                records(&jobs).iter().map(Process::descriptor).collect();

            let mut session = Session::with_manager(
                ProcessManager::new(),
                PolicyConfig { policy, quantum: TimeQuantum::new(q as i64).unwrap() },
            );
            session.load(&descriptors).unwrap();
            let report = session.run().unwrap();

            prop_assert_eq!(
                report.context_switches,
                report.timeline.context_switches() as u64 + 1
            );
            prop_assert_eq!(session.manager().terminated().len(), jobs.len());
        }
    }
}
