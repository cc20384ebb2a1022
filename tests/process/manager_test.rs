/*!
 * Process Manager Tests
 * Queue moves, context switching and session replay
 */

use cpu_sched_sim::{
    Pid, Policy, PolicyConfig, ProcessDescriptor, ProcessManager, ProcessState, Session, SimError,
    TimeQuantum,
};
use pretty_assertions::assert_eq;

fn ready_pids(pm: &ProcessManager) -> Vec<Pid> {
    pm.ready_queue().map(|p| p.pid()).collect()
}

fn manager_with(pids: &[Pid]) -> ProcessManager {
    let mut pm = ProcessManager::new();
    for &pid in pids {
        pm.create_process(pid, 3, 0, 0, "system").unwrap();
    }
    pm
}

#[test]
fn test_create_keeps_insertion_order() {
    let pm = manager_with(&[3, 1, 2]);
    assert_eq!(ready_pids(&pm), vec![3, 1, 2]);
    assert_eq!(pm.len(), 3);
    assert!(pm.current().is_none());
    assert!(pm.ready_queue().all(|p| p.state() == ProcessState::Ready));
}

#[test]
fn test_duplicate_pid_is_rejected_everywhere() {
    let mut pm = manager_with(&[1]);
    pm.context_switch().unwrap();
    pm.terminate_current_process(3).unwrap();

    // Still known after termination
    assert_eq!(
        pm.create_process(1, 2, 0, 0, "system").unwrap_err(),
        SimError::DuplicatePid(1)
    );
    assert_eq!(pm.len(), 1);
}

#[test]
fn test_round_trip_through_the_cpu() {
    let mut pm = manager_with(&[1, 2, 3]);

    assert_eq!(pm.context_switch().unwrap(), Some(1));
    assert_eq!(pm.context_switch().unwrap(), Some(2));
    assert_eq!(ready_pids(&pm), vec![3, 1]);

    assert_eq!(pm.block_current_process().unwrap(), Some(2));
    assert_eq!(pm.context_switch().unwrap(), Some(3));
    assert_eq!(pm.terminate_current_process(9).unwrap(), Some(3));

    assert!(pm.unblock_process(2).unwrap());
    assert_eq!(ready_pids(&pm), vec![1, 2]);
    assert_eq!(pm.context_switch_count(), 3);

    let terminated = &pm.terminated()[0];
    assert_eq!(terminated.pid(), 3);
    assert_eq!(terminated.completion_time(), Some(9));
    assert_eq!(pm.get(3).map(|p| p.state()), Some(ProcessState::Terminated));
}

#[test]
fn test_idle_cpu_operations() {
    let mut pm = ProcessManager::new();
    assert_eq!(pm.context_switch().unwrap(), None);
    assert_eq!(pm.context_switch_count(), 1);
    assert_eq!(pm.terminate_current_process(0).unwrap(), None);
    assert_eq!(pm.block_current_process().unwrap(), None);
    assert!(!pm.unblock_process(42).unwrap());
}

#[test]
fn test_unblock_ignores_ready_process() {
    let mut pm = manager_with(&[1, 2]);
    assert!(!pm.unblock_process(1).unwrap());
    assert_eq!(ready_pids(&pm), vec![1, 2]);
}

#[test]
fn test_load_stops_at_first_duplicate() {
    let mut pm = ProcessManager::new();
    let descs = vec![
        ProcessDescriptor::new(1, 2, 0),
        ProcessDescriptor::new(2, 2, 0),
        ProcessDescriptor::new(1, 4, 0),
    ];
    assert_eq!(pm.load(&descs).unwrap_err(), SimError::DuplicatePid(1));
    assert_eq!(ready_pids(&pm), vec![1, 2]);
}

#[test]
fn test_session_replays_round_robin_run() {
    let mut session = Session::new(PolicyConfig::round_robin(TimeQuantum::new(2).unwrap()));
    session
        .load(&[ProcessDescriptor::new(1, 5, 0), ProcessDescriptor::new(2, 3, 1)])
        .unwrap();

    let report = session.run().unwrap();
    assert_eq!(report.context_switches, 5);
    assert_eq!(report.quantum, Some(2));

    let pm = session.manager();
    let finished: Vec<(Pid, Option<u64>)> = pm
        .terminated()
        .iter()
        .map(|p| (p.pid(), p.completion_time()))
        .collect();
    assert_eq!(finished, vec![(2, Some(7)), (1, Some(8))]);
    assert_eq!(pm.ready_queue().count(), 0);
}

#[test]
fn test_session_skips_blocked_processes() {
    let mut session = Session::new(PolicyConfig::new(Policy::Fcfs));
    session
        .load(&[ProcessDescriptor::new(1, 2, 0), ProcessDescriptor::new(2, 2, 0)])
        .unwrap();

    let pm = session.manager_mut();
    pm.context_switch().unwrap();
    pm.block_current_process().unwrap();

    let report = session.run().unwrap();
    assert_eq!(report.timeline.to_tuples(), vec![(2, 0, 2)]);

    let blocked: Vec<Pid> = session.manager().blocked_queue().map(|p| p.pid()).collect();
    assert_eq!(blocked, vec![1]);
}
