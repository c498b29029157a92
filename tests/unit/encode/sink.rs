use chrono::TimeZone;

use super::*;

fn artifact(name: &str) -> ExportedArtifact {
    ExportedArtifact {
        file_name: name.to_owned(),
        width: 2,
        height: 2,
        png: vec![1, 2, 3],
    }
}

#[test]
fn file_name_uses_unix_millis() {
    let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
    assert_eq!(artifact_file_name(at), "app_screen_1700000000123.png");
}

#[test]
fn in_memory_sink_keeps_emit_order() {
    let mut sink = InMemorySink::new();
    sink.emit(&artifact("a.png")).unwrap();
    sink.emit(&artifact("b.png")).unwrap();
    let names: Vec<_> = sink.artifacts().iter().map(|a| a.file_name.as_str()).collect();
    assert_eq!(names, ["a.png", "b.png"]);
}

#[test]
fn directory_sink_creates_dir_and_writes_file() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("out");
    let mut sink = DirectorySink::new(&dir);
    sink.emit(&artifact("app_screen_1.png")).unwrap();
    let path = dir.join("app_screen_1.png");
    assert_eq!(sink.written(), [path.clone()]);
    assert_eq!(std::fs::read(path).unwrap(), vec![1, 2, 3]);
}

#[test]
fn directory_sink_reports_unwritable_target() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();
    let mut sink = DirectorySink::new(blocker.join("sub"));
    let err = sink.emit(&artifact("x.png")).unwrap_err();
    assert!(matches!(err, ShotframeError::Encode(_)));
}
