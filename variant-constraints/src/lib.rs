//! Variant constraints for the Sudoku propagation engine.
//!
//! Each module implements one constraint family on top of
//! [`sudoku_engine_lib::constraint::Constraint`], using whichever engine
//! capabilities fit it best: groups for diagonals and disjoint groups,
//! weak links for palindromes, markers and class lines, seen cells for
//! chess moves and taxicab exclusion, and logic steps for the clue-driven
//! families. [`crate::registry::ConstraintRegistry`] maps the console
//! names external drivers use onto constructors, and
//! [`crate::puzzle_file::PuzzleFile`] is the JSON description the CLI
//! reads.

pub mod chess_constraint;
pub mod class_line_constraint;
pub mod clue_parser;
pub mod diagonal_constraint;
pub mod disjoint_group_constraint;
pub mod equal_sums_constraint;
pub mod greater_sum_constraint;
pub mod indexer_constraint;
pub mod orthogonal_pairs_constraint;
pub mod palindrome_constraint;
pub mod prelude;
pub mod puzzle_file;
pub mod registry;
pub mod self_taxicab_constraint;
pub mod skyscraper_constraint;
pub mod sum_group;
pub mod xsum_constraint;
