//! Walks a chain of integers through pushes, pops, an ownership transfer and
//! an empty `peek`, printing the chain after each step.
//!
//! Run with `CHAIN_LOG=trace` to see every node release.

use owning_chain::OwningChain;

fn main() {
    env_logger::Builder::from_env("CHAIN_LOG").init();

    let mut list = OwningChain::new();

    print!("Allocating nodes... ");
    for i in 0..10 {
        list.push(i);
    }
    println!("done!");

    println!("The list now contains:");
    println!("{list}");

    list.pop();
    list.pop();
    list.pop();
    println!("After 3 pops:");
    println!("{list}");

    println!("Creating list2 by transferring the nodes of list...");
    let mut list2 = OwningChain::transfer(&mut list);

    println!("After the transfer, list is:");
    println!("{list}");
    println!("and list2 is:");
    println!("{list2}");

    list2.pop();
    list2.pop();
    list2.pop();
    println!("After 3 pops list2 is:");
    println!("{list2}");

    let copy = OwningChain::from_copy(&list2);
    println!("A copy of list2 is:");
    println!("{copy}");

    match (list2.peek(), list2.peek()) {
        (Ok(first), Ok(second)) => {
            println!("peek() on list2 returns: {first}");
            println!("... another peek() on list2 returns: {second}");
        }
        (Err(err), _) | (_, Err(err)) => println!("peek() on list2 failed: {err}"),
    }

    list.clear();
    match list.peek() {
        Ok(head) => println!("peek() on list returns: {head}"),
        Err(err) => println!("\nERROR: {err}"),
    }

    println!("Now after clearing list2...");
    list2.clear();
    println!("{list2}");
}
