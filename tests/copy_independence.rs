#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use owning_chain::{ChainError, OwningChain};

#[test]
fn copy_independence() {
    env_logger::Builder::from_env("CHAIN_LOG").init();

    let mut a = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(String::from)
        .collect::<OwningChain<_>>();
    let mut b = OwningChain::from_copy(&a);
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(b.to_string(), "gamma -> beta -> alpha -> NULL");

    a.push(String::from("delta"));
    assert_eq!(b.peek().as_deref(), Ok("gamma"));
    assert_eq!(b.len(), 3);

    b.pop();
    b.pop();
    b.pop();
    assert_eq!(b.peek(), Err(ChainError::EmptyContainer));
    assert_eq!(a.to_string(), "delta -> gamma -> beta -> alpha -> NULL");

    let c = OwningChain::transfer(&mut a);
    let d = OwningChain::try_from_copy(&c).unwrap();
    assert!(a.is_empty());
    assert_eq!(c.iter().collect::<Vec<_>>(), d.iter().collect::<Vec<_>>());
}
