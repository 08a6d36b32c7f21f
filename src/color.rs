//! ANSI color tags and value-colorizing helpers.
//!
//! The `B*` constants are raw bright white-on-color escape sequences for
//! callers that want to splice a tag into a string themselves, typically as
//! the `color` field of [`Options`](crate::Options). The helper functions
//! wrap a value's string form in a foreground color, gated on the process
//! defaults' `colorful` flag.

use std::fmt::Display;

use colored::Colorize;

use crate::options::defaults;

/// Bright white-on-green tag.
pub const BGREEN: &str = "\x1b[97;42m";
/// Bright white-on-yellow tag.
pub const BYELLOW: &str = "\x1b[97;43m";
/// Bright white-on-red tag.
pub const BRED: &str = "\x1b[97;41m";
/// Bright white-on-blue tag.
pub const BBLUE: &str = "\x1b[97;44m";
/// Bright white-on-magenta tag.
pub const BMAGENTA: &str = "\x1b[97;45m";
/// Bright white-on-cyan tag.
pub const BCYAN: &str = "\x1b[97;46m";
/// Resets any active color.
pub const BRESET: &str = "\x1b[0m";

// Foreground tags for severity labels. These bypass terminal detection so a
// colorful logger writes the same bytes to every sink.
pub(crate) const FG_RED: &str = "\x1b[31m";
pub(crate) const FG_GREEN: &str = "\x1b[32m";
pub(crate) const FG_YELLOW: &str = "\x1b[33m";

/// Render `value` in yellow when the process defaults enable color.
pub fn yellow(value: impl Display) -> String {
    if !defaults().colorful {
        return value.to_string();
    }
    value.to_string().yellow().to_string()
}

/// Render `value` in red when the process defaults enable color.
pub fn red(value: impl Display) -> String {
    if !defaults().colorful {
        return value.to_string();
    }
    value.to_string().red().to_string()
}

/// Render `value` in green when the process defaults enable color.
pub fn green(value: impl Display) -> String {
    if !defaults().colorful {
        return value.to_string();
    }
    value.to_string().green().to_string()
}

/// Render `value` in blue when the process defaults enable color.
pub fn blue(value: impl Display) -> String {
    if !defaults().colorful {
        return value.to_string();
    }
    value.to_string().blue().to_string()
}
