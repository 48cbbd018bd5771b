//! Console walkthrough of the storage rules: saturation on overfill and
//! capacity coercion on invalid construction.

use depot_inventory::BoundedAccumulator;

fn main() {
    let mut juice = BoundedAccumulator::with_capacity(100.0);
    let mut beer = BoundedAccumulator::new(100.0, 20.2);

    println!("After construction:");
    println!("Juice store: {juice}");
    println!("Beer store: {beer}");
    println!(
        "Beer: balance={}, capacity={}",
        beer.balance(),
        beer.capacity()
    );

    juice.increase(50.7);
    println!("Adding 50.7");
    println!("Juice store: {juice}");

    println!("Error cases:");
    let broken = BoundedAccumulator::with_capacity(-100.0);
    println!("{broken}");

    beer.increase(1000.0);
    println!("Beer overfilled");
    println!("Beer store: {beer}");
}
