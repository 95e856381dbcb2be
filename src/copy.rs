use alloc::boxed::Box;
use core::convert::Infallible;

use crate::error::ChainError;
use crate::node::Node;
use crate::OwningChain;

impl<T> OwningChain<T> {
    /// Constructs a deep copy of `source`.
    ///
    /// `source` is walked from head to tail and every element is cloned into
    /// a freshly allocated node appended to the tail of the new chain, so the
    /// copy holds the same elements in the same order. The two chains share
    /// no nodes: mutating one never affects the other.
    ///
    /// # Aborts
    ///
    /// Aborts the process if a node cannot be allocated. Use
    /// [`try_from_copy`](Self::try_from_copy) to observe allocation failure
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use owning_chain::OwningChain;
    ///
    /// let mut original = (0..3).collect::<OwningChain<_>>();
    /// let copy = OwningChain::from_copy(&original);
    /// original.pop();
    ///
    /// assert_eq!(original.to_string(), "1 -> 0 -> NULL");
    /// assert_eq!(copy.to_string(), "2 -> 1 -> 0 -> NULL");
    /// ```
    #[must_use]
    pub fn from_copy(source: &Self) -> Self
    where
        T: Clone,
    {
        match Self::copy_with(source, |element| {
            Ok::<_, Infallible>(Node::boxed(element, None))
        }) {
            Ok(chain) => chain,
            Err(never) => match never {},
        }
    }

    /// Constructs a deep copy of `source`, reporting allocation failure to
    /// the caller.
    ///
    /// # Errors
    ///
    /// If a node cannot be allocated, every node of the partially built copy
    /// is released and [`ChainError::AllocationFailure`] is returned.
    /// `source` is never modified.
    pub fn try_from_copy(source: &Self) -> Result<Self, ChainError>
    where
        T: Clone,
    {
        Self::copy_with(source, |element| Node::try_boxed(element, None))
    }

    fn copy_with<F, E>(source: &Self, mut allocate: F) -> Result<Self, E>
    where
        T: Clone,
        F: FnMut(T) -> Result<Box<Node<T>>, E>,
    {
        // `chain` owns everything built so far, so an early return through
        // `?` releases the partial copy.
        let mut chain = Self::new();
        let mut tail = &mut chain.head;
        for element in source {
            let node = allocate(element.clone())?;
            tail = &mut tail.insert(node).next;
        }
        Ok(chain)
    }

    /// Constructs a chain that takes ownership of every node in `source`,
    /// leaving `source` empty.
    ///
    /// This runs in O(1): the head link is moved and no element is copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use owning_chain::{ChainError, OwningChain};
    ///
    /// let mut source = (0..3).collect::<OwningChain<_>>();
    /// let chain = OwningChain::transfer(&mut source);
    ///
    /// assert_eq!(chain.peek(), Ok(2));
    /// assert_eq!(source.peek(), Err(ChainError::EmptyContainer));
    /// ```
    #[must_use]
    pub fn transfer(source: &mut Self) -> Self {
        debug!("owning-chain transferring ownership of nodes");
        Self {
            head: source.head.take(),
        }
    }
}
