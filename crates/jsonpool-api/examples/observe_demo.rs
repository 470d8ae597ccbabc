//! Demonstrates observable handles: field assignments made through a
//! handle emit change events to subscribers.
//!
//! Run with: cargo run -p jsonpool --example observe_demo

use jsonpool::{Database, Options};
use serde_json::json;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_dir = "./demo_database";
    if Path::new(base_dir).exists() {
        std::fs::remove_dir_all(base_dir)?;
    }

    let db = Database::open(Options::new("observed").with_base_dir(base_dir))?;

    let settings = db.observe_at("config", "settings")?;
    let events = settings.subscribe();

    settings.set("theme", json!("dark"))?;
    settings.set("volume", json!(7))?;
    settings.set("theme", json!("dark"))?; // unchanged: no event

    while let Ok(event) = events.try_recv() {
        println!("changed: {} -> {}", event.field, event.value);
    }

    println!("document: {}", json!(db.export()?));

    std::fs::remove_dir_all(base_dir)?;
    Ok(())
}
