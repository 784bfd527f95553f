//! Contains the [`Constraint`] trait, the uniform interface every variant
//! rule implements.

use crate::board::Board;
use crate::candidate_index::CandidateIndex;
use crate::cell_index::CellIndex;
use crate::group::Group;
use crate::logic_result::LogicResult;
use crate::logical_step_desc::LogicalStepDescList;
use crate::value_mask::ValueMask;
use std::any::Any;
use std::sync::Arc;

/// A variant rule layered on top of the standard Sudoku rules.
///
/// Every method except [`Constraint::name`] and [`Constraint::as_any`] has a
/// no-op default, so a constraint only implements the capabilities it
/// actually has. The engine drives the methods in a fixed order:
///
/// 1. [`Constraint::split_to_primitives`] may replace the constraint with
///    smaller equivalents before anything else happens.
/// 2. [`Constraint::get_groups`] contributes all-distinct cell groups.
/// 3. [`Constraint::get_weak_links`] seeds the weak-link graph, exactly once
///    at board finalization.
/// 4. [`Constraint::init_candidates`] restricts candidates from the initial
///    board; it is called in a loop across all constraints until none
///    reports a change, so it must be idempotent at a fixed point.
/// 5. During solving, [`Constraint::enforce`] reacts to committed values and
///    [`Constraint::step_logic`] performs the bounded deduction step.
pub trait Constraint {
    /// A name for this constraint instance, such as `X-Sum at r1c0`.
    fn name(&self) -> String;

    /// Restricts candidates based purely on the initial board.
    ///
    /// May be called multiple times during setup. Must report `Changed`
    /// only when it actually changed the board, or the setup loop will not
    /// terminate.
    fn init_candidates(&mut self, _board: &mut Board) -> LogicResult {
        LogicResult::None
    }

    /// The weak links this constraint contributes, gathered once while the
    /// board is being finalized.
    ///
    /// A pair `(a, b)` means the two candidates cannot both hold; only one
    /// direction needs to be returned. A self-pair `(a, a)` marks the
    /// candidate as impossible and eliminates it immediately.
    ///
    /// The board is passed for geometry and for sibling discovery via
    /// [`Board::constraints_of`]; its masks are not necessarily in their
    /// final initialized state yet.
    fn get_weak_links(&self, _board: &Board) -> Vec<(CandidateIndex, CandidateIndex)> {
        Vec::new()
    }

    /// Called directly after `value` was committed in `cell`.
    ///
    /// Returns `Invalid` if the commit violates the constraint. May perform
    /// further writes through the board's write API; those cascade and
    /// re-enter `enforce` for every constraint, so keep this cheap and save
    /// real deduction work for [`Constraint::step_logic`].
    fn enforce(&self, _board: &mut Board, _cell: CellIndex, _value: usize) -> LogicResult {
        LogicResult::None
    }

    /// Performs one bounded deduction step for this constraint.
    ///
    /// When `steps` is provided the constraint should describe its first
    /// change there and return immediately after it, keeping explanations
    /// granular. When `steps` is `None` it may batch as many eliminations
    /// as it likes. `is_brute_forcing` signals that no human will see the
    /// work, so logic that is slower than guessing should be skipped.
    fn step_logic(
        &self,
        _board: &mut Board,
        _steps: Option<&mut LogicalStepDescList>,
        _is_brute_forcing: bool,
    ) -> LogicResult {
        LogicResult::None
    }

    /// The cells that cannot repeat this cell's value, whatever it turns
    /// out to be. Drives the generic elimination on commit without storing
    /// weak links per pair.
    fn seen_cells(&self, _cell: CellIndex) -> Vec<CellIndex> {
        Vec::new()
    }

    /// Like [`Constraint::seen_cells`], but restricted to the case where
    /// the cell's value lies in `mask`. Used by value-dependent relations
    /// such as taxicab exclusion.
    fn seen_cells_by_value_mask(&self, _cell: CellIndex, _mask: ValueMask) -> Vec<CellIndex> {
        Vec::new()
    }

    /// All-distinct groups created by this constraint, such as an extra
    /// region or a diagonal.
    fn get_groups(&self, _board: &Board) -> Vec<Group> {
        Vec::new()
    }

    /// An equivalent list of smaller constraints to use instead of this
    /// one, or `None` to keep it as-is. The engine substitutes primitives
    /// before registration.
    fn split_to_primitives(&self, _size: usize) -> Option<Vec<Arc<dyn Constraint>>> {
        None
    }

    /// Whether [`Constraint::enforce`] needs to be dispatched at all. A
    /// constraint fully reduced to weak links and groups returns false and
    /// is skipped during commits.
    fn needs_enforce(&self) -> bool {
        true
    }

    /// Upcast for [`Board::constraints_of`] queries.
    fn as_any(&self) -> &dyn Any;
}
