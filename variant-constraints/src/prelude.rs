//! Re-exports the constraint types and helpers of this crate.

pub use crate::chess_constraint::ChessConstraint;
pub use crate::class_line_constraint::{ClassLineConstraint, ValueClassifier};
pub use crate::clue_parser::{ClueParser, OutsideClue};
pub use crate::diagonal_constraint::DiagonalConstraint;
pub use crate::disjoint_group_constraint::{DisjointGroupConstraint, DisjointGroupsConstraint};
pub use crate::equal_sums_constraint::EqualSumsConstraint;
pub use crate::greater_sum_constraint::GreaterSumConstraint;
pub use crate::indexer_constraint::{IndexerConstraint, IndexerKind};
pub use crate::orthogonal_pairs_constraint::{
    OrthogonalMarker, OrthogonalPairsConstraint, PairRelation,
};
pub use crate::palindrome_constraint::PalindromeConstraint;
pub use crate::puzzle_file::{PuzzleConstraint, PuzzleFile};
pub use crate::registry::{ConstraintRegistration, ConstraintRegistry};
pub use crate::self_taxicab_constraint::SelfTaxicabConstraint;
pub use crate::skyscraper_constraint::SkyscraperConstraint;
pub use crate::sum_group::SumGroup;
pub use crate::xsum_constraint::XSumConstraint;
