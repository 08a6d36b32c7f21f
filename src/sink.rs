use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::options::Options;

/// An open log file shared between every logger configured with its path.
pub(crate) type SharedFile = Arc<Mutex<File>>;

/// Open file handles keyed by path. Loggers writing the same file go through
/// one handle, so their lines serialize instead of interleaving mid-line.
/// Handles stay open for the life of the process.
static FILE_HANDLES: Lazy<Mutex<HashMap<PathBuf, SharedFile>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn open_shared(path: &Path) -> Result<SharedFile> {
    let mut handles = FILE_HANDLES.lock().unwrap();
    if let Some(existing) = handles.get(path) {
        return Ok(Arc::clone(existing));
    }

    // Ensure parent directory exists (create if necessary) so paths like
    // `logs/app.log` work without prior setup.
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(source) = std::fs::create_dir_all(parent)
    {
        return Err(Error::Sink {
            path: path.to_path_buf(),
            source,
        });
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .read(true)
        .open(path)
        .map_err(|source| Error::Sink {
            path: path.to_path_buf(),
            source,
        })?;

    let shared = Arc::new(Mutex::new(file));
    handles.insert(path.to_path_buf(), Arc::clone(&shared));
    Ok(shared)
}

/// Where a logger sends its lines.
#[derive(Debug)]
pub(crate) enum Sink {
    /// Terminal only.
    Stdout,
    /// File only.
    File(SharedFile),
    /// Terminal and file, every line in both, in write order.
    Tee(SharedFile),
    /// Swallow everything.
    Discard,
}

impl Sink {
    /// Resolve the sink for a set of fully resolved options.
    pub(crate) fn for_options(opts: &Options) -> Result<Self> {
        match (&opts.path, opts.output_to_terminal) {
            (Some(path), true) => Ok(Self::Tee(open_shared(path)?)),
            (Some(path), false) => Ok(Self::File(open_shared(path)?)),
            (None, true) => Ok(Self::Stdout),
            (None, false) => Ok(Self::Discard),
        }
    }

    /// Write one already-terminated line, synchronously.
    pub(crate) fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout => write_stdout(line),
            Self::File(file) => write_file(file, line),
            Self::Tee(file) => {
                write_stdout(line)?;
                write_file(file, line)
            }
            Self::Discard => Ok(()),
        }
    }
}

fn write_stdout(line: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(line.as_bytes())?;
    out.flush()
}

fn write_file(file: &SharedFile, line: &str) -> io::Result<()> {
    let mut guard = file.lock().unwrap();
    guard.write_all(line.as_bytes())
}
