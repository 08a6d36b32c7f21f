//! Logging to a file and the terminal at once.
//!
//! Every line appears in both sinks, in write order. Run with:
//! ```bash
//! cargo run --example file_sink
//! ```

use scopelog::{Options, get_logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options::new()
        .with_scope_name("demo")
        .with_path("demo.log")
        .with_terminal(true)
        .with_colorful(true);

    let logger = get_logger("file-sink", Some(opts))?;

    logger.success("this line is on your terminal and in demo.log");

    let size = std::fs::metadata("demo.log")?.len();
    logger.warn(format_args!("file grows on every run, currently {size} bytes"));

    Ok(())
}
