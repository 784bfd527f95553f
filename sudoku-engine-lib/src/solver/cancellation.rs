//! Contains [`Cancellation`], the advisory token long-running solves poll.

/// A cancellation check for solver operations.
///
/// The engine polls the token between propagation rounds and between
/// constraint invocations within a round; it never interrupts a write in
/// progress, so board state after a cancellation is unspecified.
pub struct Cancellation {
    check: Box<dyn Fn() -> bool>,
}

impl Cancellation {
    /// Creates a cancellation from a checking function.
    ///
    /// ```
    /// # use sudoku_engine_lib::solver::cancellation::Cancellation;
    /// # use std::sync::Arc;
    /// # use std::sync::atomic::{AtomicBool, Ordering};
    /// let flag = Arc::new(AtomicBool::new(false));
    /// let cancellation = Cancellation::new({
    ///     let flag = Arc::clone(&flag);
    ///     move || flag.load(Ordering::SeqCst)
    /// });
    ///
    /// assert!(!cancellation.check());
    /// flag.store(true, Ordering::SeqCst);
    /// assert!(cancellation.check());
    /// ```
    pub fn new<F>(check: F) -> Self
    where
        F: (Fn() -> bool) + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }

    /// True if the operation should stop.
    pub fn check(&self) -> bool {
        (self.check)()
    }
}

impl Default for Cancellation {
    /// A token that never cancels.
    fn default() -> Self {
        Cancellation::new(|| false)
    }
}

impl<F> From<F> for Cancellation
where
    F: (Fn() -> bool) + 'static,
{
    fn from(check: F) -> Self {
        Cancellation::new(check)
    }
}
