#![no_std]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::option_if_let_else)]
#![allow(unknown_lints)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(unused_qualifications)]
#![warn(variant_size_differences)]

//! A singly linked, stack-disciplined container where every node is owned
//! by exactly one link.
//!
//! The type [`OwningChain<T>`] holds an exclusive link to its head node and
//! each node holds an exclusive link to its successor. Pushing allocates a
//! new head, popping detaches the head and releases it, and dropping the
//! chain releases every node with a loop rather than a cascade of recursive
//! destructors, so chains of any length can be torn down without exhausting
//! the call stack.
//!
//! [`OwningChain<T>`]: crate::OwningChain
//!
//! # Copying and moving
//!
//! A chain can only be copied or moved while constructing a new chain:
//!
//! - [`OwningChain::from_copy`] builds a deep, fully independent copy.
//!   [`OwningChain::try_from_copy`] does the same but reports allocation
//!   failure instead of aborting, releasing the partially built copy first.
//! - [`OwningChain::transfer`] takes over another chain's nodes in O(1) and
//!   leaves the source empty.
//!
//! `OwningChain` implements neither [`Clone`] nor [`Copy`], so there is no
//! `clone_from` style reassignment.
//!
//! ```compile_fail
//! use owning_chain::OwningChain;
//!
//! let mut chain = OwningChain::new();
//! chain.push(1);
//! let mut other = OwningChain::new();
//! other.clone_from(&chain);
//! ```
//!
//! ```compile_fail
//! use owning_chain::OwningChain;
//!
//! let chain: OwningChain<i32> = OwningChain::new();
//! let copy = chain.clone();
//! ```
//!
//! # Printing
//!
//! Chains print head to tail with an arrow between elements and a `NULL`
//! terminator:
//!
//! ```
//! use owning_chain::OwningChain;
//!
//! let mut chain = OwningChain::new();
//! for i in 0..4 {
//!     chain.push(i);
//! }
//! assert_eq!(chain.to_string(), "3 -> 2 -> 1 -> 0 -> NULL");
//! ```
//!
//! # Errors
//!
//! [`OwningChain::peek`] on an empty chain returns
//! [`ChainError::EmptyContainer`]. Popping or clearing an empty chain is a
//! no-op.
//!
//! # Logging
//!
//! Node releases and allocation failures are reported through the [`log`]
//! facade. The crate never installs a logger.
//!
//! [`log`]: https://docs.rs/log

#![doc(html_root_url = "https://docs.rs/owning-chain/0.1.0")]

// Ensure code blocks in README.md compile
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;
#[macro_use]
extern crate log;

mod chain;
mod copy;
mod drop;
mod error;
mod iter;
mod node;
mod print;

pub use chain::OwningChain;
pub use error::ChainError;
pub use iter::Iter;
