use crate::error::ChainError;
use crate::node::{Link, Node};


/// A singly linked stack whose nodes are each owned by exactly one link.
///
/// The chain owns its head node, the head owns the second node, and so on
/// until a `None` link marks the tail. Elements are pushed and popped at the
/// head, so the most recently pushed element is the first one observed.
///
/// Every node is released before [`clear`] or `drop` returns. Release is a
/// loop over the chain, so teardown uses constant stack space no matter how
/// long the chain is.
///
/// [`clear`]: OwningChain::clear
///
/// # Examples
///
/// ```
/// use owning_chain::{ChainError, OwningChain};
///
/// let mut chain = OwningChain::new();
/// chain.push(1);
/// chain.push(2);
/// assert_eq!(chain.peek(), Ok(2));
///
/// chain.pop();
/// chain.pop();
/// assert_eq!(chain.peek(), Err(ChainError::EmptyContainer));
///
/// // popping an empty chain does nothing
/// chain.pop();
/// assert!(chain.is_empty());
/// ```
pub struct OwningChain<T> {
    pub(crate) head: Link<T>,
}

impl<T> OwningChain<T> {
    /// Constructs a new, empty `OwningChain<T>`.
    ///
    /// No memory is allocated until the first [`push`](Self::push).
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the chain has no head node.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the chain.
    ///
    /// The chain does not cache its length; this walks every node and runs
    /// in O(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Pushes `element` as the new head of the chain.
    ///
    /// The previous head becomes the successor of the new node.
    ///
    /// # Aborts
    ///
    /// Like [`Box::new`](alloc::boxed::Box::new), this aborts the process if
    /// the node cannot be allocated. Use [`try_push`](Self::try_push) to
    /// observe allocation failure instead.
    #[inline]
    pub fn push(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(element, next));
    }

    /// Pushes `element` as the new head of the chain, reporting allocation
    /// failure to the caller.
    ///
    /// # Errors
    ///
    /// If the allocator cannot provide memory for the node, a
    /// [`ChainError::AllocationFailure`] is returned, `element` is dropped,
    /// and the chain is left exactly as it was.
    pub fn try_push(&mut self, element: T) -> Result<(), ChainError> {
        // Link the old head only once the allocation succeeded so a failure
        // leaves the chain untouched.
        let mut node = Node::try_boxed(element, None)?;
        node.next = self.head.take();
        self.head = Some(node);
        Ok(())
    }

    /// Detaches the head node and releases it.
    ///
    /// The successor of the detached node becomes the new head. Popping an
    /// empty chain is a no-op.
    pub fn pop(&mut self) {
        if let Some(mut detached) = self.head.take() {
            self.head = detached.next.take();
            trace!("owning-chain releasing popped node {:p}", detached);
        }
    }

    /// Returns a copy of the head element without modifying the chain.
    ///
    /// Repeated calls without an intervening mutation return equal values.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::EmptyContainer`] if the chain is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use owning_chain::{ChainError, OwningChain};
    ///
    /// let mut chain = OwningChain::new();
    /// assert_eq!(chain.peek(), Err(ChainError::EmptyContainer));
    /// chain.push(String::from("head"));
    /// assert_eq!(chain.peek().as_deref(), Ok("head"));
    /// ```
    pub fn peek(&self) -> Result<T, ChainError>
    where
        T: Clone,
    {
        self.peek_ref()
            .cloned()
            .ok_or(ChainError::EmptyContainer)
    }

    /// Borrows the head element, or returns `None` if the chain is empty.
    #[inline]
    #[must_use]
    pub fn peek_ref(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }
}

impl<T> Default for OwningChain<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for OwningChain<T> {
    /// Pushes every element of `iter` in order, so the last element yielded
    /// becomes the head.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> FromIterator<T> for OwningChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}
