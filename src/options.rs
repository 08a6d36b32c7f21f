use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::color::BRED;

/// Configuration for a single logger.
///
/// An empty `color` or `scope_name` is treated as unset and filled from the
/// process-wide [`defaults`] when the logger is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// ANSI tag highlighting the logger name in the prefix.
    #[serde(default)]
    pub color: String,
    /// Scope label printed after the name column.
    #[serde(default)]
    pub scope_name: String,
    /// Log file path; `None` means no file sink.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Colorize the prefix and severity tags.
    #[serde(default)]
    pub colorful: bool,
    /// Mirror output to the terminal.
    #[serde(default)]
    pub output_to_terminal: bool,
}

impl Options {
    /// Create an all-unset Options value
    pub fn new() -> Self {
        Self {
            color: String::new(),
            scope_name: String::new(),
            path: None,
            colorful: false,
            output_to_terminal: false,
        }
    }

    /// Set the prefix color tag
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the scope label
    pub fn with_scope_name(mut self, scope_name: impl Into<String>) -> Self {
        self.scope_name = scope_name.into();
        self
    }

    /// Set the log file path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Enable or disable colorized output
    pub fn with_colorful(mut self, colorful: bool) -> Self {
        self.colorful = colorful;
        self
    }

    /// Enable or disable terminal output
    pub fn with_terminal(mut self, output_to_terminal: bool) -> Self {
        self.output_to_terminal = output_to_terminal;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULTS: OnceCell<Options> = OnceCell::new();

fn reference_defaults() -> Options {
    Options {
        color: BRED.to_string(),
        scope_name: "app".to_string(),
        path: None,
        colorful: true,
        output_to_terminal: true,
    }
}

/// Process-wide fallback options.
///
/// Initialized exactly once, on first access, unless [`set_defaults`] seeded
/// them earlier. Unset fields of the options passed to
/// [`get_logger`](crate::get_logger) are filled from this value.
pub fn defaults() -> &'static Options {
    DEFAULTS.get_or_init(reference_defaults)
}

/// Seed the process-wide defaults before any logger is built.
///
/// Returns the rejected options if the defaults were already initialized;
/// they are never replaced once set.
pub fn set_defaults(opts: Options) -> std::result::Result<(), Options> {
    DEFAULTS.set(opts)
}
