//! Contains [`SolutionCountResult`] for brute-force solution counting.

/// The outcome of counting solutions up to a cap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolutionCountResult {
    /// The exact number of solutions.
    ExactCount(usize),
    /// The cap was reached; at least this many solutions exist.
    AtLeastCount(usize),
    /// The search was cancelled; at least this many solutions were found.
    Cancelled(usize),
}

impl SolutionCountResult {
    pub fn is_exact_count(self) -> bool {
        matches!(self, SolutionCountResult::ExactCount(_))
    }

    pub fn is_cancelled(self) -> bool {
        matches!(self, SolutionCountResult::Cancelled(_))
    }

    /// The number of solutions found, exact or not.
    pub fn count(self) -> usize {
        match self {
            SolutionCountResult::ExactCount(count)
            | SolutionCountResult::AtLeastCount(count)
            | SolutionCountResult::Cancelled(count) => count,
        }
    }
}
