use core::fmt;

use crate::OwningChain;

/// Written after the tail element.
const TERMINATOR: &str = "NULL";

/// Written after every element.
const SEPARATOR: &str = " -> ";

impl<T> OwningChain<T> {
    /// Writes the chain to `sink`, head to tail.
    ///
    /// Each element is followed by ` -> ` and the output ends with `NULL`
    /// once the tail is reached. An empty chain prints as `NULL`. The chain
    /// is only borrowed; no node is modified.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `sink`.
    ///
    /// # Examples
    ///
    /// ```
    /// use owning_chain::OwningChain;
    ///
    /// let chain = (0..10).collect::<OwningChain<_>>();
    /// let mut out = String::new();
    /// chain.print(&mut out).unwrap();
    /// assert_eq!(out, "9 -> 8 -> 7 -> 6 -> 5 -> 4 -> 3 -> 2 -> 1 -> 0 -> NULL");
    /// ```
    pub fn print<W>(&self, sink: &mut W) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write + ?Sized,
    {
        for element in self {
            write!(sink, "{element}{SEPARATOR}")?;
        }
        sink.write_str(TERMINATOR)
    }
}

impl<T: fmt::Display> fmt::Display for OwningChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for OwningChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
