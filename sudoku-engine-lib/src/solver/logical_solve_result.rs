//! Contains [`LogicalSolveResult`], the outcome of a described solve.

use crate::logical_step_desc::LogicalStepDescList;

/// The outcome of a full logical solve, together with the step-by-step
/// descriptions produced along the way.
#[derive(Clone, Debug)]
pub enum LogicalSolveResult {
    /// No logical step applied.
    None,
    /// Progress was made but the board is not solved.
    Changed(LogicalStepDescList),
    /// The board was proven invalid.
    Invalid(LogicalStepDescList),
    /// The board was solved.
    Solved(LogicalStepDescList),
}

impl LogicalSolveResult {
    pub fn is_none(&self) -> bool {
        matches!(self, LogicalSolveResult::None)
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, LogicalSolveResult::Changed(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, LogicalSolveResult::Invalid(_))
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, LogicalSolveResult::Solved(_))
    }

    pub fn description(&self) -> Option<&LogicalStepDescList> {
        match self {
            LogicalSolveResult::None => None,
            LogicalSolveResult::Changed(steps)
            | LogicalSolveResult::Invalid(steps)
            | LogicalSolveResult::Solved(steps) => Some(steps),
        }
    }
}

impl std::fmt::Display for LogicalSolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.description() {
            Some(steps) => write!(f, "{}", steps),
            None => write!(f, "No logical steps applied"),
        }
    }
}
