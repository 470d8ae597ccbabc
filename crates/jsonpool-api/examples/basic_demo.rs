//! Demonstrates basic jsonpool operations: set/get with dotted paths,
//! ensure, delete and iteration.
//!
//! Run with: cargo run -p jsonpool --example basic_demo

use jsonpool::{Database, Options};
use serde_json::json;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_dir = "./demo_database";

    println!("=== jsonpool Basic Demo ===\n");

    // Clean up any previous demo data
    if Path::new(base_dir).exists() {
        std::fs::remove_dir_all(base_dir)?;
    }

    let db = Database::open(
        Options::new("demo")
            .with_base_dir(base_dir)
            .with_indent(4),
    )?;
    println!("📁 Database file: {}\n", db.file().display());

    // Get/set without paths
    db.set("a", json!(3))?;
    println!("a = {:?}", db.get("a")?); // Some(3)

    // Get/set with dotted paths
    db.set("a", json!({ "b": 4 }))?;
    println!("a.b = {:?}", db.get_at("a", "b")?); // Some(4)
    db.set_at("a", json!(5), "b")?;
    println!("a.b = {:?}", db.get_at("a", "b")?); // Some(5)

    // Intermediate mappings are created as needed
    db.set_at("profile", json!("dark"), "settings.ui.theme")?;
    println!("profile = {}", json!(db.get("profile")?));

    // ensure only writes when nothing is there yet
    db.ensure_at("profile", json!("en"), "settings.language")?;
    db.ensure_at("profile", json!("fr"), "settings.language")?; // no-op
    println!(
        "profile.settings.language = {:?}",
        db.get_at("profile", "settings.language")?
    );

    // Iteration follows insertion order
    println!("\nkeys: {:?}", db.keys()?);

    db.delete("a")?;
    println!("after delete, has a: {}", db.has("a")?);

    std::fs::remove_dir_all(base_dir)?;
    println!("\n=== Demo Complete! ===");
    Ok(())
}
