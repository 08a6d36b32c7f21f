//! Tail reads over a log file.
//!
//! Reads only the last N bytes of the file rather than the whole thing, so
//! pulling recent lines out of a large log stays cheap.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::Result;
use crate::logger;
use crate::options::defaults;

/// Read up to `max_bytes` from the end of the log file configured in the
/// process defaults and return its lines most-recent-first.
///
/// Returns `None` when no log file is configured or the read fails; failures
/// are reported through the error log path. See [`last_at`] for the line
/// semantics.
pub fn last(max_bytes: u64) -> Option<Vec<String>> {
    match &defaults().path {
        Some(path) => last_at(path, max_bytes),
        None => {
            let _ = logger::error("logging", "tail read requested but no log file is configured");
            None
        }
    }
}

/// Read up to `max_bytes` from the end of the file at `path` and return its
/// lines most-recent-first.
///
/// A file shorter than `max_bytes` is read from the start. The buffer is split
/// on `'\n'`, so a trailing newline contributes a final empty segment, and the
/// reversed result's last entry may be a partial line when the read began
/// mid-line. A read that starts inside a multi-byte character is decoded
/// lossily. Failures are reported through the error log path and yield `None`.
pub fn last_at(path: impl AsRef<Path>, max_bytes: u64) -> Option<Vec<String>> {
    let path = path.as_ref();
    match read_tail(path, max_bytes) {
        Ok(lines) => Some(lines),
        Err(err) => {
            let _ = logger::error(
                "logging",
                format_args!("tail read of {} failed: {err}", path.display()),
            );
            None
        }
    }
}

fn read_tail(path: &Path, max_bytes: u64) -> Result<Vec<String>> {
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();

    // A request larger than the file clamps to offset 0. The file may grow
    // between the stat and the read; `take` bounds what we pick up.
    let start = size.saturating_sub(max_bytes);
    file.seek(SeekFrom::Start(start))?;

    let mut buf = Vec::new();
    file.take(max_bytes).read_to_end(&mut buf)?;

    let mut lines: Vec<String> = String::from_utf8_lossy(&buf)
        .split('\n')
        .map(str::to_owned)
        .collect();
    lines.reverse();
    Ok(lines)
}
