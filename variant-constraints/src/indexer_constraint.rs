//! Contains [`IndexerConstraint`]: cells whose value points at where
//! another value sits in their row, column, or box.

use std::any::Any;

use sudoku_engine_lib::prelude::*;

/// Which axis an indexer cell indexes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexerKind {
    /// The value at `(r, c)` is the 1-indexed column of `c + 1` in row
    /// `r`.
    Row,
    /// The value at `(r, c)` is the 1-indexed row of `r + 1` in column
    /// `c`.
    Column,
    /// The value at a box position `p` is the 1-indexed box position of
    /// `p + 1` within the same box.
    Box,
}

impl IndexerKind {
    fn label(self) -> &'static str {
        match self {
            IndexerKind::Row => "Row Indexer",
            IndexerKind::Column => "Column Indexer",
            IndexerKind::Box => "Box Indexer",
        }
    }
}

/// Indexer cells form a bijection on candidate triples: candidate
/// `(cell, v)` holds exactly when its target candidate holds. Committing
/// either side commits the other; the logic step removes candidates whose
/// target has become impossible, and the converse direction through the
/// target's own mask.
#[derive(Debug)]
pub struct IndexerConstraint {
    specific_name: String,
    kind: IndexerKind,
    cells: Vec<CellIndex>,
}

impl IndexerConstraint {
    pub fn new(kind: IndexerKind, cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("{} at {}", kind.label(), cells[0]),
            kind,
            cells,
        }
    }

    // The candidate this indexer candidate is equivalent to. `None` when
    // the value points outside the cell's region, which makes the
    // candidate impossible.
    fn target(&self, board: &Board, cell: CellIndex, value: usize) -> Option<(CellIndex, usize)> {
        let cu = board.cell_utility();
        match self.kind {
            IndexerKind::Row => Some((cu.cell(cell.row(), value - 1), cell.column() + 1)),
            IndexerKind::Column => Some((cu.cell(value - 1, cell.column()), cell.row() + 1)),
            IndexerKind::Box => {
                let data = board.data();
                let region = data.regions()[cell.index()];
                let region_cells = data.region_cells(region);
                let position = region_cells.iter().position(|&c| c == cell)?;
                let target_cell = *region_cells.get(value - 1)?;
                if position + 1 > board.size() {
                    return None;
                }
                Some((target_cell, position + 1))
            }
        }
    }
}

impl Constraint for IndexerConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn enforce(&self, board: &mut Board, cell: CellIndex, value: usize) -> LogicResult {
        if !self.cells.contains(&cell) {
            return LogicResult::None;
        }

        match self.target(board, cell, value) {
            None => LogicResult::Invalid,
            Some((target_cell, target_value)) => {
                if target_cell == cell {
                    // Self-referential placements are consistent by
                    // construction.
                    LogicResult::None
                } else if board.set_value(target_cell, target_value) {
                    LogicResult::None
                } else {
                    LogicResult::Invalid
                }
            }
        }
    }

    fn step_logic(
        &self,
        board: &mut Board,
        mut steps: Option<&mut LogicalStepDescList>,
        _is_brute_forcing: bool,
    ) -> LogicResult {
        let size = board.size();
        let mut result = LogicResult::None;

        for &cell in &self.cells {
            let mask = board.cell(cell);
            if mask.is_solved() {
                continue;
            }

            let mut elims = EliminationList::new();
            for value in mask {
                match self.target(board, cell, value) {
                    // A candidate whose target candidate is gone is gone
                    // itself.
                    Some((target_cell, target_value)) => {
                        if !board.cell(target_cell).has(target_value) {
                            elims.add_cell_value(cell, value);
                        }
                    }
                    None => elims.add_cell_value(cell, value),
                }
            }

            // The converse direction: a target candidate whose indexer
            // value is gone cannot hold either.
            for value in 1..=size {
                if mask.has(value) {
                    continue;
                }
                if let Some((target_cell, target_value)) = self.target(board, cell, value) {
                    if target_cell != cell && board.cell(target_cell).has(target_value) {
                        elims.add_cell_value(target_cell, target_value);
                    }
                }
            }

            if elims.is_empty() {
                continue;
            }

            let desc_requested = steps.is_some();
            if let Some(steps) = steps.as_mut() {
                steps.push(LogicalStepDesc::from_elims(&self.specific_name, &elims));
            }
            match elims.execute(board) {
                LogicResult::Invalid => return LogicResult::Invalid,
                step => result = result.combine(step),
            }
            if desc_requested && result.is_changed() {
                return result;
            }
        }

        result
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_row_indexer_commit_sets_target() {
        let cu = CellUtility::new(9);
        let constraint = IndexerConstraint::new(IndexerKind::Row, vec![cu.cell(0, 2)]);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(constraint))
            .build()
            .unwrap();

        // r1c3 = 5 says: row 1 has its 3 in column 5.
        assert!(solver.board_mut().set_value(cu.cell(0, 2), 5));
        let target = solver.board().cell(cu.cell(0, 4));
        assert!(target.is_solved());
        assert_eq!(target.value(), 3);
    }

    #[test]
    fn test_column_indexer_commit_sets_target() {
        let cu = CellUtility::new(9);
        let constraint = IndexerConstraint::new(IndexerKind::Column, vec![cu.cell(1, 0)]);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(constraint))
            .build()
            .unwrap();

        // r2c1 = 4 says: column 1 has its 2 in row 4.
        assert!(solver.board_mut().set_value(cu.cell(1, 0), 4));
        let target = solver.board().cell(cu.cell(3, 0));
        assert!(target.is_solved());
        assert_eq!(target.value(), 2);
    }

    #[test]
    fn test_box_indexer_commit_sets_target() {
        let cu = CellUtility::new(9);
        // r1c2 is position 2 of box 1.
        let constraint = IndexerConstraint::new(IndexerKind::Box, vec![cu.cell(0, 1)]);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(constraint))
            .build()
            .unwrap();

        // Value 7 points at position 7 of the box, which is r3c1, and
        // says it holds 2.
        assert!(solver.board_mut().set_value(cu.cell(0, 1), 7));
        let target = solver.board().cell(cu.cell(2, 0));
        assert!(target.is_solved());
        assert_eq!(target.value(), 2);
    }

    #[test]
    fn test_impossible_target_eliminates_candidate() {
        let cu = CellUtility::new(9);
        let constraint = IndexerConstraint::new(IndexerKind::Row, vec![cu.cell(0, 2)]);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(constraint))
            .build()
            .unwrap();

        // Remove 3 from r1c5; then r1c3 = 5 has no consistent target.
        assert!(solver
            .board_mut()
            .clear_value(cu.cell(0, 4), 3)
            .is_changed());
        assert!(!solver.propagate(None).is_invalid());
        assert!(!solver.board().cell(cu.cell(0, 2)).has(5));
    }
}
