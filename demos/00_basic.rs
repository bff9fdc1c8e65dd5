//! Example: Basic universe and subset usage
//!
//! This example shows universe creation, position-based membership,
//! and cursor iteration over a subset.

use universe_set::Universe;

fn main() {
    println!("=== Basic Universe Example ===");

    // Create a fixed universe of weekdays
    let days = Universe::new(["mon", "tue", "wed", "thu", "fri"]);
    println!("Universe holds {} elements", days.len());

    // Build a subset by position
    println!("Inserting positions 1 and 3...");
    let mut meeting_days = days.empty_subset();
    let (cursor, inserted) = meeting_days.insert(1);
    println!("Inserted at {:?}: {inserted}", cursor.position());
    drop(cursor);
    meeting_days.insert(3);

    // Membership queries are tolerant of any position
    println!("Contains position 1: {}", meeting_days.contains(1));
    println!("Contains position 99: {}", meeting_days.contains(99));

    // Iterate members in position order
    println!("Meeting days:");
    for day in &meeting_days {
        println!("  - {day}");
    }

    // Remove a member
    println!("Removing position 1...");
    meeting_days.remove(1);
    println!("Remaining: {} member(s)", meeting_days.len());

    println!("=== Example Complete ===");
}
