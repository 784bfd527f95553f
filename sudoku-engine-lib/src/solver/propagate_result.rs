//! Contains [`PropagateResult`], the outcome of running propagation to
//! quiescence.

/// How a propagation run ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagateResult {
    /// A full round produced no change and the board is not solved.
    FixedPoint,
    /// Every cell is committed.
    Solved,
    /// A contradiction was reached; the branch is dead.
    Invalid,
    /// The cancellation token fired; board state is unspecified.
    Cancelled,
}

impl PropagateResult {
    pub fn is_fixed_point(self) -> bool {
        self == PropagateResult::FixedPoint
    }

    pub fn is_solved(self) -> bool {
        self == PropagateResult::Solved
    }

    pub fn is_invalid(self) -> bool {
        self == PropagateResult::Invalid
    }

    pub fn is_cancelled(self) -> bool {
        self == PropagateResult::Cancelled
    }
}
