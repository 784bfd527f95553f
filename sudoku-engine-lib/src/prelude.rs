//! Re-exports the types needed by almost every consumer of this library.

pub use crate::board::{Board, BoardData};
pub use crate::candidate_index::CandidateIndex;
pub use crate::candidate_links::CandidateLinks;
pub use crate::cell_index::CellIndex;
pub use crate::cell_utility::CellUtility;
pub use crate::constraint::Constraint;
pub use crate::elimination_list::EliminationList;
pub use crate::group::{Group, GroupKind};
pub use crate::logic_result::LogicResult;
pub use crate::logical_step::hidden_single::HiddenSingle;
pub use crate::logical_step::logical_step_result::LogicalStepResult;
pub use crate::logical_step::simple_cell_forcing::SimpleCellForcing;
pub use crate::logical_step::step_constraints::StepConstraints;
pub use crate::logical_step::LogicalStep;
pub use crate::logical_step_desc::{LogicalStepDesc, LogicalStepDescList};
pub use crate::math::{default_regions, region_dimensions};
pub use crate::memo::MemoStore;
pub use crate::solver::cancellation::Cancellation;
pub use crate::solver::logical_solve_result::LogicalSolveResult;
pub use crate::solver::propagate_result::PropagateResult;
pub use crate::solver::single_solution_result::SingleSolutionResult;
pub use crate::solver::solution_count_result::SolutionCountResult;
pub use crate::solver::solver_builder::SolverBuilder;
pub use crate::solver::Solver;
pub use crate::value_mask::ValueMask;
