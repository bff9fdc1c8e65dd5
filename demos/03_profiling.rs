//! Example: Profiling instrumentation
//!
//! This example shows how to collect the tracing spans emitted by core
//! operations when the `profiling` feature is enabled.
//!
//! Run with:
//! cargo run --example 03_profiling --features profiling

use universe_set::Universe;

fn main() {
    println!("=== Profiling Example ===\n");

    setup_profiling_subscriber();

    // Universe construction and snapshot restore are instrumented
    println!("Building an instrumented universe...");
    let universe: Universe<usize> = (0..4096).collect();

    let subset = universe
        .subset_from((0..4096).step_by(3))
        .expect("positions are in range");
    println!("Subset holds {} members", subset.len());

    println!("Capturing and restoring a snapshot...");
    let snapshot = subset.snapshot();
    let restored = universe_set::Subset::from_snapshot(&universe, &snapshot)
        .expect("snapshot fits its own universe");
    println!("Restored {} members", restored.len());

    println!("\nSpans were emitted for each instrumented operation.");
    println!("=== Example Complete ===");
}

fn setup_profiling_subscriber() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::Registry;

    let subscriber = Registry::default().with(fmt::layer().with_target(false));

    tracing::subscriber::set_global_default(subscriber).unwrap();
}
