//! Builds two small sets of integers and prints the results of the set operations between them.
//!
//! Diagnostics are filtered through `RUST_LOG`, e.g. `RUST_LOG=linked_set=debug`.

use linked_set::linked::set::{handle, Behaviours, Insertion, LinkedSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FIRST: [i32; 5] = [1, 2, 3, 10, 2];
const SECOND: [i32; 5] = [10, 9, 8, 1, 8];

fn build(label: &str, values: &[i32]) -> Option<LinkedSet<i32>> {
    let mut set = Some(LinkedSet::new(Behaviours::standard()));

    for value in values {
        if let Insertion::Duplicate(value) = handle::insert(set.as_mut(), *value) {
            tracing::info!(set = label, value, "rejected duplicate");
        }
    }

    print!("{label}: ");
    handle::print(set.as_ref(), None);
    set
}

fn show(label: &str, set: &mut Option<LinkedSet<i32>>) {
    print!("{label}: ");
    handle::print(set.as_ref(), None);
    handle::destroy(set);
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut set_a = build("setA", &FIRST);
    let mut set_b = build("setB", &SECOND);

    // Idempotency
    show("setA ∪ setA", &mut handle::union(set_a.as_ref(), set_a.as_ref()));

    show("setA ∪ setB", &mut handle::union(set_a.as_ref(), set_b.as_ref()));
    show("setA ∩ setB", &mut handle::intersect(set_a.as_ref(), set_b.as_ref()));
    show("setA \\ setB", &mut handle::difference(set_a.as_ref(), set_b.as_ref()));

    println!("|setA| = {}", handle::get_size(set_a.as_ref()));
    println!("setA ⊆ setB: {}", handle::is_subset(set_a.as_ref(), set_b.as_ref()));
    println!("setA = setA: {}", handle::is_equal(set_a.as_ref(), set_a.as_ref()));

    handle::destroy(&mut set_a);
    handle::destroy(&mut set_b);

    // Both handles are now empty, so these only log warnings.
    handle::destroy(&mut set_a);
    println!("|setA| = {}", handle::get_size(set_a.as_ref()));
}
