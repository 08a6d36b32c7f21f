//! Named logger construction and severity-tagged output.
//!
//! [`get_logger`] resolves a caller's [`Options`] against the process
//! defaults, opens the requested sink, and returns a ready-to-use [`Logger`].
//! The free functions [`info`] and [`error`] build a one-off logger with a
//! fixed prefix color and print a single line through it.

use std::fmt::{self, Display};

use time::OffsetDateTime;
use time::macros::format_description;

use crate::color::{BMAGENTA, BRED, BRESET, FG_GREEN, FG_RED, FG_YELLOW};
use crate::error::Result;
use crate::options::{Options, defaults};
use crate::sink::Sink;

/// A named, severity-tagged log stream.
///
/// Holds its resolved options and the sink chosen for them; owns no other
/// state. Dropping a logger leaves any shared file handle open for other
/// loggers configured with the same path.
#[derive(Debug)]
pub struct Logger {
    sink: Sink,
    prefix: String,
    options: Options,
}

/// Build a logger for `name`, filling unset options from the process defaults.
///
/// Passing `None` is equivalent to passing `Options::new()`. The defaults are
/// initialized exactly once, before any field fallback. Opening the configured
/// log file is the only fallible step; the error is returned rather than
/// aborting so the caller decides the policy.
pub fn get_logger(name: &str, opts: Option<Options>) -> Result<Logger> {
    let mut opts = opts.unwrap_or_default();
    let shared = defaults();

    if opts.color.is_empty() {
        opts.color = shared.color.clone();
    }
    if opts.scope_name.is_empty() {
        opts.scope_name = shared.scope_name.clone();
    }

    let sink = Sink::for_options(&opts)?;
    let prefix = if opts.colorful {
        format!(
            "[ {} {:>10} {} ] {} ",
            opts.color, name, BRESET, opts.scope_name
        )
    } else {
        format!("[ {:>10} ] {} ", name, opts.scope_name)
    };

    Ok(Logger {
        sink,
        prefix,
        options: opts,
    })
}

impl Logger {
    /// Log an error line.
    pub fn error(&self, msg: impl Display) {
        self.tagged("ERROR ", FG_RED, msg);
    }

    /// Log a success line.
    pub fn success(&self, msg: impl Display) {
        self.tagged("SUCCESS ", FG_GREEN, msg);
    }

    /// Log a warning line.
    pub fn warn(&self, msg: impl Display) {
        self.tagged("WARN ", FG_YELLOW, msg);
    }

    /// Log a line without a severity tag.
    pub fn println(&self, msg: impl Display) {
        self.write(&msg.to_string());
    }

    /// The fully resolved options this logger was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn tagged(&self, tag: &str, color: &str, msg: impl Display) {
        if self.options.colorful {
            self.write(&format!("{color}{tag}{BRESET}{msg}"));
        } else {
            self.write(&format!("{tag}{msg}"));
        }
    }

    fn write(&self, body: &str) {
        let line = format!("{}{} {}\n", self.prefix, timestamp(), body);
        let _ = self.sink.write_line(&line);
    }
}

/// Build a one-off logger for `name` with a magenta prefix and print `msg`.
///
/// The defaults are re-resolved and any file sink reacquired on every call.
pub fn info(name: &str, msg: impl Display) -> Result<Logger> {
    let logger = get_logger(name, Some(one_off(BMAGENTA)))?;
    logger.println(msg);
    Ok(logger)
}

/// Build a one-off logger for `name` with a red prefix and print `msg` as an
/// error line.
pub fn error(name: &str, msg: impl Display) -> Result<Logger> {
    let logger = get_logger(name, Some(one_off(BRED)))?;
    logger.println(format_args!("[ERROR] {msg}"));
    Ok(logger)
}

/// Formatting passthrough for callers assembling a line up front.
pub fn sprintf(args: fmt::Arguments<'_>) -> String {
    args.to_string()
}

/// One-off loggers inherit everything but the color from the defaults, so
/// their single line lands wherever the process is configured to log.
fn one_off(color: &str) -> Options {
    let shared = defaults();
    Options {
        color: color.to_string(),
        scope_name: String::new(),
        path: shared.path.clone(),
        colorful: shared.colorful,
        output_to_terminal: shared.output_to_terminal,
    }
}

fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!(
        "[year]/[month]/[day] [hour]:[minute]:[second]"
    ))
    .unwrap_or_default()
}
