//! Basic console logging example.
//!
//! This example demonstrates building a named logger that writes colorized
//! lines to the terminal.

use scopelog::{Options, get_logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logger = get_logger(
        "worker",
        Some(Options::new().with_terminal(true).with_colorful(true)),
    )?;

    logger.success("this is a success message");
    logger.warn("this is a warning message");
    logger.error("this is an error message");
    logger.println(format_args!("plain line with a value: {}", 42));

    // One-off convenience constructors.
    scopelog::info("startup", "ready to serve")?;

    Ok(())
}
