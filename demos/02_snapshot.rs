//! Example: Subset snapshots
//!
//! Persist subset membership as JSON and restore it into a live
//! universe, including the failure paths.

use universe_set::{Subset, SubsetSnapshot, Universe};

fn main() {
    println!("=== Snapshot Example ===");

    let servers = Universe::new(["web-1", "web-2", "db-1", "db-2", "cache-1"]);
    let healthy = servers
        .subset_from([0, 1, 2, 4])
        .expect("positions are in range");
    println!("Healthy servers: {healthy:?}");

    // Capture and serialize
    match healthy.snapshot().to_json() {
        Ok(json) => {
            println!("✅ Serialized snapshot:");
            println!("{json}");

            // Restore into the same universe
            match SubsetSnapshot::from_json(&json) {
                Ok(snapshot) => match Subset::from_snapshot(&servers, &snapshot) {
                    Ok(restored) => {
                        println!("✅ Restored: {restored:?}");
                        println!("Matches original: {}", restored == healthy);
                    }
                    Err(e) => println!("❌ Failed to restore: {e}"),
                },
                Err(e) => println!("❌ Failed to parse: {e}"),
            }
        }
        Err(e) => println!("❌ Failed to serialize: {e}"),
    }

    // A snapshot only fits a universe of the recorded size
    println!("\n=== Size Checking ===");
    let smaller = Universe::new(["web-1", "web-2"]);
    let snapshot = healthy.snapshot();
    match Subset::from_snapshot(&smaller, &snapshot) {
        Ok(_) => println!("Restored (unexpected)"),
        Err(e) => println!("Rejected: {e}"),
    }

    println!("\n=== Example Complete ===");
}
