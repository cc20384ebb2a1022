/*!
 * Scheduling Policy Benchmarks
 *
 * Compare simulation cost of FCFS, SJF and Round-Robin as the process count grows
 */

use cpu_sched_sim::scheduler::build;
use cpu_sched_sim::{Policy, PolicyConfig, Process, ProcessDescriptor, Session, TimeQuantum};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic mixed workload: bursts 1..=16, arrivals spread over time
fn workload(n: u32) -> Vec<Process> {
    (1..=n)
        .map(|pid| Process::new(pid, u64::from(pid * 7 % 16 + 1), u64::from(pid / 2)))
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_run");

    for size in [16u32, 256, 2048] {
        let processes = workload(size);
        for policy in Policy::ALL {
            let config = PolicyConfig {
                policy,
                quantum: TimeQuantum::new(4).unwrap(),
            };
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), size),
                &processes,
                |b, processes| {
                    b.iter(|| {
                        let mut sched = build(config, processes.clone());
                        sched.run().unwrap();
                        black_box(sched.compute_metrics().unwrap())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_round_robin_quantum(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin_quantum");
    let processes = workload(512);

    for quantum in [1i64, 2, 8, 32] {
        let config = PolicyConfig::round_robin(TimeQuantum::new(quantum).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(quantum), &config, |b, &config| {
            b.iter(|| {
                let mut sched = build(config, processes.clone());
                sched.run().unwrap();
                black_box(sched.timeline().len())
            });
        });
    }

    group.finish();
}

fn bench_session_replay(c: &mut Criterion) {
    let descriptors: Vec<ProcessDescriptor> =
        workload(512).iter().map(Process::descriptor).collect();

    c.bench_function("session_run_with_replay", |b| {
        b.iter(|| {
            let mut session =
                Session::new(PolicyConfig::round_robin(TimeQuantum::new(4).unwrap()));
            session.load(&descriptors).unwrap();
            black_box(session.run().unwrap().context_switches)
        });
    });
}

criterion_group!(
    benches,
    bench_policies,
    bench_round_robin_quantum,
    bench_session_replay
);
criterion_main!(benches);
