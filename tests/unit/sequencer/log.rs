use super::*;

fn step(ordinal: u32, title: &str) -> LogKind {
    LogKind::Step {
        ordinal,
        title: title.to_string(),
    }
}

#[test]
fn timestamps_never_go_backwards() {
    let mut log = SimulationLog::default();
    log.push(Millis(5_000), step(1, "SYN"));
    log.push(Millis(4_000), step(2, "SYN-ACK"));
    log.push(Millis(9_000), step(3, "ACK"));
    let at: Vec<_> = log.entries().iter().map(|e| e.at).collect();
    assert_eq!(at, [Millis(5_000), Millis(5_000), Millis(9_000)]);
}

#[test]
fn lines_use_clock_time() {
    let e = LogEntry {
        at: Millis(((13 * 60 + 5) * 60 + 9) * 1_000),
        kind: step(2, "SYN-ACK"),
    };
    assert_eq!(e.line_in(&Utc), "[13:05:09] Step 2: SYN-ACK");

    let done = LogEntry {
        at: Millis(0),
        kind: LogKind::Completed {
            protocol: "UDP".to_string(),
        },
    };
    assert_eq!(done.line_in(&Utc), "[00:00:00] Simulation completed - UDP");
}

#[test]
fn export_joins_lines() {
    let mut log = SimulationLog::default();
    log.push(Millis(0), step(1, "SYN"));
    log.push(Millis(2_000), step(2, "SYN-ACK"));
    let art = log.export_in("tcp-handshake", &Utc).unwrap();
    assert_eq!(art.file_name, "tcp-handshake-simulation-log.txt");
    assert_eq!(art.mime, "text/plain");
    assert_eq!(art.body, "[00:00:00] Step 1: SYN\n[00:00:02] Step 2: SYN-ACK");
}

#[test]
fn empty_export_is_an_error() {
    let err = SimulationLog::default().export("udp").unwrap_err();
    assert!(matches!(err, ProtovizError::Export(_)));
}

#[test]
fn tail_keeps_most_recent() {
    let mut log = SimulationLog::default();
    for i in 1..=7 {
        log.push(Millis(u64::from(i)), step(i, "x"));
    }
    let tail = log.tail(5);
    assert_eq!(tail.len(), 5);
    assert!(tail[0].ends_with("Step 3: x"));
    assert!(tail[4].ends_with("Step 7: x"));
}

#[test]
fn write_to_creates_file() {
    let dir = std::env::temp_dir().join(format!("protoviz-log-{}", std::process::id()));
    let art = ExportArtifact {
        file_name: "udp-simulation-log.txt".to_string(),
        mime: "text/plain",
        body: "hello".to_string(),
    };
    let path = art.write_to(&dir).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn write_failure_surfaces_as_export_error() {
    let blocker = std::env::temp_dir().join(format!("protoviz-blocker-{}", std::process::id()));
    std::fs::write(&blocker, "not a dir").unwrap();
    let art = ExportArtifact {
        file_name: "x.txt".to_string(),
        mime: "text/plain",
        body: String::new(),
    };
    let err = art.write_to(&blocker.join("sub")).unwrap_err();
    assert!(matches!(err, ProtovizError::Export(_)));
    let _ = std::fs::remove_file(&blocker);
}
