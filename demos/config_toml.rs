//! Example of loading logger options from a TOML file.
//!
//! Run with:
//! ```bash
//! cargo run --example config_toml
//! ```

use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
struct Config {
    log: scopelog::Options,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = "demos/config.toml";
    let config_content = fs::read_to_string(config_path)
        .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));

    let root: Config = toml::from_str(&config_content)?;

    let logger = scopelog::get_logger("config", Some(root.log))?;
    logger.success("options loaded from TOML");
    logger.warn("unset fields fell back to the process defaults");

    Ok(())
}
