/*!
 * schedsim - Main Entry Point
 *
 * Loads a process list and simulates it under one scheduling policy,
 * or under all of them with `--compare`.
 */

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::info;

use cpu_sched_sim::loader::load_descriptors;
use cpu_sched_sim::{compare, init_tracing, PolicyComparison, RunReport, Session, SimConfig};

fn print_report(report: &RunReport) {
    match report.quantum {
        Some(q) => println!("{} (quantum = {})", report.policy.display_name(), q),
        None => println!("{}", report.policy.display_name()),
    }
    println!();
    print!("{}", report.timeline);
    println!();

    println!("Average waiting time:    {:.3}", report.metrics.avg_waiting);
    println!("Average turnaround time: {:.3}", report.metrics.avg_turnaround);
    println!("Throughput:              {:.3}", report.metrics.throughput);
    println!("Context switches:        {}", report.context_switches);
    println!();

    println!("{:>5} {:>8} {:>11} {:>11}", "PID", "Waiting", "Turnaround", "Completion");
    for p in &report.processes {
        println!(
            "{:>5} {:>8} {:>11} {:>11}",
            p.pid, p.waiting, p.turnaround, p.completion
        );
    }
}

fn print_comparison(rows: &[PolicyComparison]) {
    println!(
        "{:<14} {:>12} {:>15} {:>11}",
        "Policy", "Avg waiting", "Avg turnaround", "Throughput"
    );
    for row in rows {
        println!(
            "{:<14} {:>12.3} {:>15.3} {:>11.3}",
            row.policy.display_name(),
            row.metrics.avg_waiting,
            row.metrics.avg_turnaround,
            row.metrics.throughput
        );
    }
}

fn main() -> Result<()> {
    let config = SimConfig::parse();
    init_tracing(config.trace_json);

    info!(
        input = %config.input.display(),
        policy = %config.policy,
        quantum = config.quantum,
        "schedsim starting"
    );

    let policy_config = config.policy_config()?;

    if config.compare {
        let descriptors = load_descriptors(&config.input)?;
        let rows = compare(&descriptors, policy_config.quantum)?;
        if config.json {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
        } else {
            print_comparison(&rows);
        }
        return Ok(());
    }

    let mut session = Session::new(policy_config);
    session.load_file(&config.input)?;
    let report = session.run()?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else {
        print_report(&report);
    }
    Ok(())
}
