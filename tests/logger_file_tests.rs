use scopelog::{Options, get_logger};

#[test]
fn test_file_sink_keeps_call_order() {
    let tmp = tempfile::NamedTempFile::new().expect("temp file");

    let logger = get_logger(
        "worker",
        Some(Options::new().with_path(tmp.path()).with_scope_name("test")),
    )
    .expect("build logger");

    logger.error("first");
    logger.warn("second");
    logger.success("third");

    let content = std::fs::read_to_string(tmp.path()).expect("read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("ERROR first"));
    assert!(lines[1].contains("WARN second"));
    assert!(lines[2].contains("SUCCESS third"));
}

#[test]
fn test_plain_logger_emits_no_ansi() {
    let tmp = tempfile::NamedTempFile::new().expect("temp file");

    let logger = get_logger(
        "worker",
        Some(Options::new().with_path(tmp.path()).with_scope_name("test")),
    )
    .expect("build logger");

    logger.error("no-ansi-check");

    let content = std::fs::read_to_string(tmp.path()).expect("read log file");
    assert!(content.contains("ERROR no-ansi-check"));
    assert!(!content.contains('\x1b'), "ANSI escape found in log file");
}

#[test]
fn test_colorful_logger_wraps_severity_tag() {
    let tmp = tempfile::NamedTempFile::new().expect("temp file");

    let logger = get_logger(
        "worker",
        Some(
            Options::new()
                .with_path(tmp.path())
                .with_scope_name("test")
                .with_colorful(true),
        ),
    )
    .expect("build logger");

    logger.error("ansi-check");

    let content = std::fs::read_to_string(tmp.path()).expect("read log file");
    assert!(content.contains("\x1b[31mERROR \x1b[0mansi-check"));
}

#[test]
fn test_same_path_loggers_share_one_handle() {
    let tmp = tempfile::NamedTempFile::new().expect("temp file");

    let first = get_logger(
        "alpha",
        Some(Options::new().with_path(tmp.path()).with_scope_name("test")),
    )
    .expect("build first logger");
    let second = get_logger(
        "beta",
        Some(Options::new().with_path(tmp.path()).with_scope_name("test")),
    )
    .expect("build second logger");

    first.println("from alpha");
    second.println("from beta");
    first.println("alpha again");

    let content = std::fs::read_to_string(tmp.path()).expect("read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("alpha") && lines[0].ends_with("from alpha"));
    assert!(lines[1].contains("beta") && lines[1].ends_with("from beta"));
    assert!(lines[2].ends_with("alpha again"));
}

#[test]
fn test_tail_round_trip_most_recent_first() {
    let tmp = tempfile::NamedTempFile::new().expect("temp file");

    let logger = get_logger(
        "tailer",
        Some(Options::new().with_path(tmp.path()).with_scope_name("test")),
    )
    .expect("build logger");

    logger.println("oldest");
    logger.println("middle");
    logger.println("newest");

    let lines = scopelog::last_at(tmp.path(), 4096).expect("tail read");
    // Trailing newline first, then lines newest to oldest.
    assert_eq!(lines[0], "");
    assert!(lines[1].ends_with("newest"));
    assert!(lines[2].ends_with("middle"));
    assert!(lines[3].ends_with("oldest"));
}

#[test]
fn test_logger_into_missing_directory_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("logs/app.log");

    let logger = get_logger(
        "nested",
        Some(Options::new().with_path(&nested).with_scope_name("test")),
    )
    .expect("parent directory should be created");

    logger.success("created on demand");

    let content = std::fs::read_to_string(&nested).expect("read log file");
    assert!(content.contains("SUCCESS created on demand"));
}
