//! # Scopelog
//!
//! Named, colorized log streams with optional file persistence and tail reads.
//!
//! ## Features
//!
//! - Per-logger colorized prefixes with a fixed-width name column
//! - Stdout, file, combined, or discarded output sinks
//! - Process-wide default options filled into unset fields
//! - Reverse-ordered tail reads over the active log file
//!
//! ## Example
//!
//! ```rust
//! use scopelog::{Options, get_logger};
//!
//! let logger = get_logger("worker", Some(Options::new().with_terminal(true)))?;
//! logger.success(format_args!("ready in {}ms", 12));
//! logger.warn("queue is filling up");
//! # Ok::<(), scopelog::Error>(())
//! ```

pub mod color;
pub mod error;
pub mod logger;
pub mod options;
pub mod tail;

mod sink;

pub use color::{BBLUE, BCYAN, BGREEN, BMAGENTA, BRED, BRESET, BYELLOW, blue, green, red, yellow};
pub use error::{Error, Result};
pub use logger::{Logger, error, get_logger, info, sprintf};
pub use options::{Options, defaults, set_defaults};
pub use tail::{last, last_at};
