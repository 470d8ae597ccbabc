//! Demonstrates deferred persistence: mutations batch in memory and a
//! background timer flushes them to disk.
//!
//! Run with: cargo run -p jsonpool --example deferred_demo

use jsonpool::logging::LogConfig;
use jsonpool::{Database, Options};
use serde_json::json;
use std::path::Path;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = LogConfig::debug().init();

    let base_dir = "./demo_database";
    if Path::new(base_dir).exists() {
        std::fs::remove_dir_all(base_dir)?;
    }

    let db = Database::open(
        Options::new("deferred")
            .with_base_dir(base_dir)
            .with_defer(Duration::from_millis(500)),
    )?;

    // A storm of mutations: nothing hits the disk yet
    for i in 0..1000 {
        db.set(&format!("key{}", i), json!({ "value": i }))?;
    }
    println!(
        "after 1000 sets, on-disk size: {} bytes",
        std::fs::metadata(db.file())?.len()
    );

    // Give the flusher a tick
    std::thread::sleep(Duration::from_secs(1));
    println!(
        "after one tick, on-disk size: {} bytes",
        std::fs::metadata(db.file())?.len()
    );

    // close() stops the timer and flushes anything still pending
    db.set("late", json!(true))?;
    db.close()?;

    std::fs::remove_dir_all(base_dir)?;
    Ok(())
}
