use core::fmt;
use core::iter::FusedIterator;

use crate::node::Node;
use crate::OwningChain;

/// A head-to-tail iterator over shared references to the elements of an
/// [`OwningChain`].
///
/// This struct is created by [`OwningChain::iter`]. The iterator borrows the
/// chain and never takes ownership of a node.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> OwningChain<T> {
    /// Returns an iterator over the elements of the chain, head first.
    ///
    /// # Examples
    ///
    /// ```
    /// use owning_chain::OwningChain;
    ///
    /// let chain = [1, 2, 3].into_iter().collect::<OwningChain<_>>();
    /// let elements = chain.iter().copied().collect::<Vec<_>>();
    /// assert_eq!(elements, [3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OwningChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
