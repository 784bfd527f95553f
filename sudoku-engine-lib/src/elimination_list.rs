//! Contains [`EliminationList`] for collecting candidates to remove.

use crate::prelude::*;
use itertools::Itertools;
use std::{collections::BTreeSet, fmt::Display};

/// An ordered set of candidates scheduled for elimination.
///
/// Constraints batch their removals here both to apply them in one call and
/// to render them compactly for explanations (`-5r1c23` style).
#[derive(Clone, Debug, Default)]
pub struct EliminationList {
    candidates: BTreeSet<CandidateIndex>,
}

impl EliminationList {
    /// Creates an empty list.
    pub fn new() -> EliminationList {
        EliminationList {
            candidates: BTreeSet::new(),
        }
    }

    /// The number of candidates in the list.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True if the list contains the candidate.
    pub fn contains(&self, candidate: CandidateIndex) -> bool {
        self.candidates.contains(&candidate)
    }

    /// Iterates the candidates in index order.
    pub fn iter(&self) -> impl Iterator<Item = CandidateIndex> + '_ {
        self.candidates.iter().copied()
    }

    /// Adds a candidate.
    pub fn add(&mut self, candidate: CandidateIndex) {
        self.candidates.insert(candidate);
    }

    /// Adds a candidate by cell and value.
    pub fn add_cell_value(&mut self, cell: CellIndex, value: usize) {
        self.add(cell.candidate(value));
    }

    /// Adds every value of `mask` in the given cell.
    pub fn add_mask(&mut self, cell: CellIndex, mask: ValueMask) {
        for value in mask {
            self.add(cell.candidate(value));
        }
    }

    /// Executes the eliminations against a board.
    ///
    /// Candidates already absent are skipped. Returns `Changed` if anything
    /// was removed and `Invalid` if a removal emptied a cell or a cascading
    /// commit failed.
    pub fn execute(&self, board: &mut Board) -> LogicResult {
        let mut result = LogicResult::None;
        for &candidate in self.candidates.iter() {
            if !board.has_candidate(candidate) {
                continue;
            }

            match board.clear_candidate(candidate) {
                LogicResult::Invalid => return LogicResult::Invalid,
                step => result = result.combine(step),
            }
        }

        result
    }
}

impl FromIterator<CandidateIndex> for EliminationList {
    fn from_iter<I: IntoIterator<Item = CandidateIndex>>(iter: I) -> EliminationList {
        EliminationList {
            candidates: iter.into_iter().collect(),
        }
    }
}

impl Display for EliminationList {
    /// Renders the list grouped by value, such as `-1r1c1;-2r12c1`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.candidates.is_empty() {
            return write!(f, "No eliminations");
        }

        let size = self.candidates.iter().next().unwrap().size();
        let cu = CellUtility::new(size);
        let mut cells_by_value: Vec<Vec<CellIndex>> = vec![Vec::new(); size];
        for &candidate in self.candidates.iter() {
            let (cell, value) = candidate.cell_and_value();
            cells_by_value[value - 1].push(cell);
        }

        let desc = (1..=size)
            .filter(|&value| !cells_by_value[value - 1].is_empty())
            .map(|value| format!("-{}{}", value, cu.compact_name(&cells_by_value[value - 1])))
            .join(";");
        write!(f, "{}", desc)
    }
}
