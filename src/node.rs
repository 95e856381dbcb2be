use alloc::alloc::{alloc, Layout};
use alloc::boxed::Box;
use core::ptr::NonNull;

use crate::error::ChainError;

/// An exclusive ownership link. `None` marks the end of a chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocate a node, aborting the process if the allocator is exhausted.
    #[inline]
    pub(crate) fn boxed(element: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { element, next })
    }

    /// Allocate a node, handing allocator exhaustion back to the caller.
    ///
    /// On failure `element` and `next` are dropped before returning.
    pub(crate) fn try_boxed(element: T, next: Link<T>) -> Result<Box<Self>, ChainError> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node` always holds a pointer-sized link, so `layout` has a
        // non-zero size.
        let ptr = unsafe { alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(ptr) else {
            trace!(
                "owning-chain node allocation of {} bytes failed",
                layout.size()
            );
            return Err(ChainError::AllocationFailure(layout));
        };
        // SAFETY: `ptr` is a fresh, properly aligned allocation from the
        // global allocator made with `Layout::new::<Self>()`, which is the
        // layout `Box<Self>` deallocates with.
        unsafe {
            ptr.as_ptr().write(Self { element, next });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }
}
