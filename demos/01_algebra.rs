//! Example: Subset algebra
//!
//! Union, intersection, difference, and symmetric difference between
//! subsets of the same universe, plus the fail-fast behavior when
//! subsets of different universe instances are mixed.

use universe_set::Universe;

fn main() {
    println!("=== Subset Algebra Example ===");

    let tools = Universe::new(["hammer", "saw", "drill", "wrench", "plane"]);
    let mine = tools.subset_from([1, 3]).expect("positions are in range");
    let yours = tools.subset_from([2, 3]).expect("positions are in range");

    println!("Mine:  {mine:?}");
    println!("Yours: {yours:?}");

    // Checked methods return Result
    let shared = mine.intersection(&yours).expect("same universe");
    println!("\nShared tools:");
    for tool in &shared {
        println!("  - {tool}");
    }

    // Operator sugar for the common same-universe case
    let pooled = &mine | &yours;
    let only_mine = &mine - &yours;
    let exclusive = &mine ^ &yours;
    println!("Pooled:        {pooled:?}");
    println!("Only mine:     {only_mine:?}");
    println!("Exactly one:   {exclusive:?}");
    println!("Missing tools: {:?}", !&pooled);

    // Subsets of different universe instances never combine, even when
    // the element lists look identical
    println!("\n=== Mixing Universes ===");
    let other_shop = Universe::new(["hammer", "saw", "drill", "wrench", "plane"]);
    let theirs = other_shop.subset_from([0]).expect("position is in range");

    match mine.union(&theirs) {
        Ok(_) => println!("Combined (unexpected)"),
        Err(e) => println!("Rejected: {e}"),
    }

    println!("\n=== Example Complete ===");
}
