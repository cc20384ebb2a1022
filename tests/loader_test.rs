/*!
 * Loader Tests
 * Descriptor files on disk feeding a session
 */

use cpu_sched_sim::loader::load_descriptors;
use cpu_sched_sim::{compare, Policy, PolicyConfig, Session, SimError, TimeQuantum};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn write_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_text_file_drives_session() {
    let file = write_file(
        ".txt",
        "# pid,burst,arrival\n1,5,0\n2,3,1\n3,1,2,7,batch\n",
    );

    let mut session = Session::new(PolicyConfig::new(Policy::Fcfs));
    assert_eq!(session.load_file(file.path()).unwrap(), 3);

    let report = session.run().unwrap();
    assert_eq!(report.timeline.to_tuples(), vec![(1, 0, 5), (2, 5, 8), (3, 8, 9)]);
    assert_eq!(session.manager().get(3).map(|p| p.user().to_string()), Some("batch".into()));
}

#[test]
fn test_json_file() {
    let file = write_file(
        ".json",
        r#"[{"pid": 1, "burst_time": 5}, {"pid": 2, "burst_time": 3, "arrival_time": 1}]"#,
    );

    let descriptors = load_descriptors(file.path()).unwrap();
    let rows = compare(&descriptors, TimeQuantum::new(2).unwrap()).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].policy, Policy::RoundRobin);
}

#[test]
fn test_json_sniffed_without_extension() {
    let file = write_file("", r#"[{"pid": 9, "burst_time": 1}]"#);
    let descriptors = load_descriptors(file.path()).unwrap();
    assert_eq!(descriptors[0].pid, 9);
}

#[test]
fn test_bad_line_is_reported() {
    let file = write_file(".txt", "1,5,0\n2,five,1\n");
    let err = load_descriptors(file.path()).unwrap_err();
    assert!(matches!(err, SimError::Parse { line: 2, .. }), "{err:?}");
}

#[test]
fn test_oversized_burst_rejected_before_any_run() {
    let file = write_file(".txt", "1,18446744073709551615,0\n2,1,0\n");
    let mut session = Session::new(PolicyConfig::new(Policy::Fcfs));
    let err = session.load_file(file.path()).unwrap_err();
    assert!(matches!(err, SimError::InvalidDescriptor { pid: 1, .. }), "{err:?}");
    assert!(session.manager().is_empty());
    assert_eq!(session.run().unwrap_err(), SimError::EmptyProcessSet);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_descriptors(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)), "{err:?}");
}
