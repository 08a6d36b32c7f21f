//! Writing a log file and reading its tail back, newest line first.

use scopelog::{Options, get_logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("scopelog-tail-demo");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("demo.log");

    let logger = get_logger("tail-demo", Some(Options::new().with_path(&path)))?;
    for i in 1..=5 {
        logger.println(format_args!("event number {i}"));
    }

    let lines = scopelog::last_at(&path, 4096).ok_or("no tail data available")?;
    println!("most recent first:");
    for line in lines.iter().filter(|line| !line.is_empty()) {
        println!("  {line}");
    }

    Ok(())
}
