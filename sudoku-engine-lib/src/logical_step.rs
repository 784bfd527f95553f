//! Contains the [`LogicalStep`] trait and the engine's built-in steps.
//!
//! A logical step is one pass of a particular kind of deduction over the
//! whole board. The propagation loop runs the registered steps in order and
//! restarts from the top whenever one of them changes the board.

pub mod hidden_single;
pub mod logical_step_result;
pub mod simple_cell_forcing;
pub mod step_constraints;

use crate::board::Board;
use crate::logical_step::logical_step_result::LogicalStepResult;

/// One kind of deduction pass.
///
/// Implementations scan the board, apply at most one description-worthy
/// change when descriptions are requested, and report the outcome.
pub trait LogicalStep {
    /// The display name of the step.
    fn name(&self) -> &'static str;

    /// Whether this step runs during user-facing logical solves.
    fn is_active_during_logical_solves(&self) -> bool {
        true
    }

    /// Whether this step runs during brute-force propagation. Steps that
    /// are slower than guessing leave this false.
    fn is_active_during_brute_force_solves(&self) -> bool {
        false
    }

    /// Whether the step formats its own description prefix.
    fn has_own_prefix(&self) -> bool {
        false
    }

    /// Runs one pass. `generate_description` is false during brute-force
    /// propagation, where descriptions would never be seen.
    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult;
}
