//! Contains [`Solver`], the propagation driver and brute-force search.

pub mod cancellation;
pub mod logical_solve_result;
pub mod propagate_result;
pub mod single_solution_result;
pub mod solution_count_result;
pub mod solver_builder;

use rand::seq::SliceRandom;

use crate::prelude::*;
use std::sync::Arc;

/// Drives a [`Board`] to a fixed point and, when asked, searches for
/// solutions by backtracking.
///
/// Propagation is a queue-free cascade: the write API commits forced values
/// as they appear, and the solver repeatedly runs its logical steps (hidden
/// singles, constraint logic, weak-link closure) until a full round changes
/// nothing. Search branches clone the board; constraint and metadata state
/// is shared and immutable.
#[derive(Clone)]
pub struct Solver {
    board: Board,
    logical_solve_steps: Vec<Arc<dyn LogicalStep>>,
    brute_force_steps: Vec<Arc<dyn LogicalStep>>,
}

impl Solver {
    pub(crate) fn from_parts(
        board: Board,
        logical_solve_steps: Vec<Arc<dyn LogicalStep>>,
        brute_force_steps: Vec<Arc<dyn LogicalStep>>,
    ) -> Solver {
        Solver {
            board,
            logical_solve_steps,
            brute_force_steps,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A snapshot of the current board for later [`Solver::restore`].
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Restores a previously taken snapshot.
    pub fn restore(&mut self, snapshot: Board) {
        self.board = snapshot;
    }

    pub fn cell_utility(&self) -> CellUtility {
        self.board.cell_utility()
    }

    pub fn logical_solve_steps(&self) -> &[Arc<dyn LogicalStep>] {
        &self.logical_solve_steps
    }

    pub fn brute_force_steps(&self) -> &[Arc<dyn LogicalStep>] {
        &self.brute_force_steps
    }

    /// Runs propagation on the solver's own board until a fixed point,
    /// solution, contradiction, or cancellation.
    pub fn propagate(&mut self, cancellation: Option<&Cancellation>) -> PropagateResult {
        let steps = self.brute_force_steps.clone();
        Self::run_propagation(&steps, &mut self.board, cancellation)
    }

    fn propagate_board(
        &self,
        board: &mut Board,
        cancellation: Option<&Cancellation>,
    ) -> PropagateResult {
        Self::run_propagation(&self.brute_force_steps, board, cancellation)
    }

    fn run_propagation(
        steps: &[Arc<dyn LogicalStep>],
        board: &mut Board,
        cancellation: Option<&Cancellation>,
    ) -> PropagateResult {
        let cancelled = || cancellation.map_or(false, |c| c.check());

        loop {
            if cancelled() {
                return PropagateResult::Cancelled;
            }
            if board.is_solved() {
                return PropagateResult::Solved;
            }

            let mut changed = false;
            for step in steps.iter() {
                if cancelled() {
                    return PropagateResult::Cancelled;
                }

                let result = step.run(board, false);
                if result.is_invalid() {
                    return PropagateResult::Invalid;
                }
                if result.is_changed() {
                    changed = true;
                    break;
                }
            }

            if !changed {
                return if board.is_solved() {
                    PropagateResult::Solved
                } else {
                    PropagateResult::FixedPoint
                };
            }
        }
    }

    fn run_single_logical_step(&mut self) -> LogicalStepResult {
        let steps = self.logical_solve_steps.clone();
        for step in steps.iter() {
            let result = step.run(&mut self.board, true);
            if !result.is_none() {
                return if step.has_own_prefix() {
                    result
                } else {
                    result.with_prefix(&format!("{}: ", step.name()))
                };
            }
        }
        LogicalStepResult::None
    }

    /// Runs a described solve on the solver's own board until no logical
    /// step applies.
    pub fn run_logical_solve(&mut self) -> LogicalSolveResult {
        let mut steps = LogicalStepDescList::new();
        let mut changed = false;

        loop {
            if self.board.is_solved() {
                steps.add_step("Solved!");
                return LogicalSolveResult::Solved(steps);
            }

            let step_result = self.run_single_logical_step();
            if step_result.is_none() {
                break;
            }

            changed = true;
            if let Some(desc) = step_result.description() {
                steps.push(desc.clone());
            }

            if step_result.is_invalid() {
                return LogicalSolveResult::Invalid(steps);
            }
        }

        if changed {
            LogicalSolveResult::Changed(steps)
        } else {
            LogicalSolveResult::None
        }
    }

    /// Finds the lexicographically first solution by backtracking.
    pub fn find_first_solution(
        &self,
        cancellation: Option<&Cancellation>,
    ) -> SingleSolutionResult {
        self.search_first(cancellation, None)
    }

    /// Finds some solution, branching on random values.
    pub fn find_random_solution(
        &self,
        cancellation: Option<&Cancellation>,
    ) -> SingleSolutionResult {
        self.search_first(cancellation, Some(&mut rand::thread_rng()))
    }

    fn search_first(
        &self,
        cancellation: Option<&Cancellation>,
        mut rng: Option<&mut rand::rngs::ThreadRng>,
    ) -> SingleSolutionResult {
        let mut stack = vec![self.board.clone()];

        while let Some(mut board) = stack.pop() {
            match self.propagate_board(&mut board, cancellation) {
                PropagateResult::Invalid => continue,
                PropagateResult::Solved => return SingleSolutionResult::Solved(board),
                PropagateResult::Cancelled => return SingleSolutionResult::Cancelled,
                PropagateResult::FixedPoint => {}
            }

            let Some(cell) = Self::first_undecided_cell(&board) else {
                continue;
            };
            let mask = board.cell(cell);
            let value = if let Some(rng) = rng.as_mut() {
                let values = mask.to_vec();
                values.choose(&mut **rng).copied().unwrap_or_else(|| mask.min())
            } else {
                mask.min()
            };

            // The branch without the guess goes underneath so the guess is
            // explored first.
            let mut without = board.clone();
            if !without.clear_value(cell, value).is_invalid() {
                stack.push(without);
            }
            if board.set_value(cell, value) {
                stack.push(board);
            }
        }

        SingleSolutionResult::None
    }

    /// Counts solutions by backtracking, stopping at `maximum` when it is
    /// nonzero.
    pub fn find_solution_count(
        &self,
        maximum: usize,
        cancellation: Option<&Cancellation>,
    ) -> SolutionCountResult {
        let mut count = 0usize;
        let mut stack = vec![self.board.clone()];

        while let Some(mut board) = stack.pop() {
            match self.propagate_board(&mut board, cancellation) {
                PropagateResult::Invalid => continue,
                PropagateResult::Cancelled => return SolutionCountResult::Cancelled(count),
                PropagateResult::Solved => {
                    count += 1;
                    if maximum > 0 && count >= maximum {
                        return SolutionCountResult::AtLeastCount(count);
                    }
                    continue;
                }
                PropagateResult::FixedPoint => {}
            }

            let Some(cell) = Self::first_undecided_cell(&board) else {
                continue;
            };
            let value = board.cell(cell).min();

            let mut without = board.clone();
            if !without.clear_value(cell, value).is_invalid() {
                stack.push(without);
            }
            if board.set_value(cell, value) {
                stack.push(board);
            }
        }

        SolutionCountResult::ExactCount(count)
    }

    fn first_undecided_cell(board: &Board) -> Option<CellIndex> {
        board.all_cells().find(|&cell| !board.cell(cell).is_solved())
    }
}

impl Default for Solver {
    fn default() -> Self {
        SolverBuilder::default()
            .build()
            .expect("an empty standard board always builds")
    }
}
