/*!
 * Process Lifecycle Tests
 * The shared state machine as seen from outside the crate
 */

use cpu_sched_sim::{Process, ProcessState, SimError};
use pretty_assertions::assert_eq;

const ALL_STATES: [ProcessState; 4] = [
    ProcessState::Ready,
    ProcessState::Running,
    ProcessState::Blocked,
    ProcessState::Terminated,
];

#[test]
fn test_transition_table() {
    let legal: Vec<(ProcessState, ProcessState)> = ALL_STATES
        .iter()
        .flat_map(|&from| ALL_STATES.iter().map(move |&to| (from, to)))
        .filter(|&(from, to)| from.can_transition_to(to))
        .collect();

    assert_eq!(
        legal,
        vec![
            (ProcessState::Ready, ProcessState::Running),
            (ProcessState::Running, ProcessState::Ready),
            (ProcessState::Running, ProcessState::Blocked),
            (ProcessState::Running, ProcessState::Terminated),
            (ProcessState::Blocked, ProcessState::Ready),
        ]
    );
}

#[test]
fn test_ready_cannot_terminate() {
    let mut p = Process::new(1, 4, 0);
    let err = p.terminate(4).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidTransition {
            pid: 1,
            from: ProcessState::Ready,
            to: ProcessState::Terminated,
            ..
        }
    ));
    assert_eq!(p.state(), ProcessState::Ready);
    assert_eq!(p.completion_time(), None);
}

#[test]
fn test_terminated_is_absorbing() {
    let mut p = Process::new(1, 4, 2);
    p.dispatch(3).unwrap();
    p.terminate(7).unwrap();

    for next in ALL_STATES {
        assert!(p.change_state(next, Some(8)).is_err());
    }
    assert_eq!(p.completion_time(), Some(7));
    assert_eq!(p.waiting_time(), Some(1));
    assert_eq!(p.turnaround_time(), Some(5));
}

#[test]
fn test_record_serialization_omits_unset_times() {
    let mut p = Process::new(4, 2, 1).with_user("alice");
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["state"], "ready");
    assert!(json.get("start_time").is_none());

    p.dispatch(1).unwrap();
    p.terminate(3).unwrap();
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["state"], "terminated");
    assert_eq!(json["start_time"], 1);
    assert_eq!(json["completion_time"], 3);
    assert_eq!(json["user"], "alice");
}
