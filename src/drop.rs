use crate::OwningChain;

impl<T> OwningChain<T> {
    /// Releases every node in the chain, leaving it empty.
    ///
    /// Nodes are detached from the head one at a time and dropped inside a
    /// loop. Each detached node has its `next` link taken before it is
    /// dropped, so dropping a node never cascades into its successor and
    /// teardown does not recurse.
    ///
    /// Clearing an empty chain is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use owning_chain::OwningChain;
    ///
    /// let mut chain = (0..100_000).collect::<OwningChain<_>>();
    /// chain.clear();
    /// assert!(chain.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let mut released = 0_usize;
        let mut cursor = self.head.take();
        while let Some(mut detached) = cursor {
            cursor = detached.next.take();
            trace!("owning-chain releasing node {:p}", detached);
            released += 1;
        }
        if released > 0 {
            debug!("owning-chain clear released {} nodes", released);
        }
    }
}

impl<T> Drop for OwningChain<T> {
    /// Drops the [`OwningChain`] by [clearing](OwningChain::clear) it.
    ///
    /// Every node, and every element it holds, is released before `drop`
    /// returns.
    fn drop(&mut self) {
        self.clear();
    }
}
