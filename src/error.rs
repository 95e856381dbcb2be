use core::alloc::Layout;
use core::fmt;

/// Errors returned by fallible [`OwningChain`] operations.
///
/// [`OwningChain`]: crate::OwningChain
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// The chain has no head element.
    ///
    /// Returned by [`OwningChain::peek`](crate::OwningChain::peek). Popping
    /// or clearing an empty chain is a no-op and never produces this error.
    EmptyContainer,
    /// The global allocator could not provide memory for a node with the
    /// given layout.
    ///
    /// Any nodes allocated by the failing operation have already been
    /// released when this error is returned.
    AllocationFailure(Layout),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => f.write_str("empty chain: no head node to peek at"),
            Self::AllocationFailure(layout) => write!(
                f,
                "memory allocation of {} bytes for a chain node failed",
                layout.size()
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChainError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::alloc::Layout;

    use super::ChainError;

    #[test]
    fn display_empty_container() {
        assert_eq!(
            ChainError::EmptyContainer.to_string(),
            "empty chain: no head node to peek at"
        );
    }

    #[test]
    fn display_allocation_failure_reports_size() {
        let err = ChainError::AllocationFailure(Layout::new::<[u64; 2]>());
        assert_eq!(
            err.to_string(),
            "memory allocation of 16 bytes for a chain node failed"
        );
    }
}
