//! Contains [`ChessConstraint`] for chess-move exclusions.

use std::any::Any;

use sudoku_engine_lib::prelude::*;

/// Cells a chess move apart cannot hold the same value.
///
/// The whole rule is carried by [`Constraint::seen_cells`]: the engine's
/// seen-cell machinery clears a committed value from every cell at the
/// move offsets and nothing else is needed.
#[derive(Debug)]
pub struct ChessConstraint {
    specific_name: String,
    offsets: Vec<(isize, isize)>,
}

impl ChessConstraint {
    /// Creates a constraint with arbitrary offsets.
    pub fn new(specific_name: &str, offsets: Vec<(isize, isize)>) -> Self {
        Self {
            specific_name: specific_name.to_owned(),
            offsets,
        }
    }

    /// Creates a constraint from one offset expanded to all eight
    /// symmetric directions.
    pub fn from_symmetric_offset(specific_name: &str, offset: (isize, isize)) -> Self {
        let (dr, dc) = offset;
        let mut offsets = vec![(dr, dc), (dc, dr)];
        if dr != 0 {
            offsets.push((-dr, dc));
            offsets.push((dc, -dr));
        }
        if dc != 0 {
            offsets.push((dr, -dc));
            offsets.push((-dc, dr));
        }
        if dr != 0 && dc != 0 {
            offsets.push((-dr, -dc));
            offsets.push((-dc, -dr));
        }
        offsets.sort();
        offsets.dedup();
        Self::new(specific_name, offsets)
    }

    /// The standard anti-king rule.
    pub fn anti_king() -> Self {
        Self::from_symmetric_offset("Anti-King", (1, 1))
    }

    /// The standard anti-knight rule.
    pub fn anti_knight() -> Self {
        Self::from_symmetric_offset("Anti-Knight", (1, 2))
    }
}

impl Constraint for ChessConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn seen_cells(&self, cell: CellIndex) -> Vec<CellIndex> {
        self.offsets
            .iter()
            .filter_map(|&(dr, dc)| cell.offset(dr, dc))
            .collect()
    }

    fn needs_enforce(&self) -> bool {
        false
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
    fn test_anti_king_eliminations() {
        let cu = CellUtility::new(9);
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(ChessConstraint::anti_king()))
            .with_given(cu.cell(0, 0), 1)
            .build()
            .unwrap();
        let board = solver.board();

        // Standard row, column, and box eliminations still apply.
        assert!(!board.cell(cu.cell(0, 5)).has(1));
        assert!(!board.cell(cu.cell(5, 0)).has(1));
        // The king move adds the touching diagonal.
        assert!(!board.cell(cu.cell(1, 1)).has(1));
        // Two steps away is out of king range.
        assert!(board.cell(cu.cell(2, 3)).has(1));
    }

    #[test]
    fn test_anti_knight_eliminations() {
        let cu = CellUtility::new(9);
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(ChessConstraint::anti_knight()))
            .with_given(cu.cell(4, 4), 7)
            .build()
            .unwrap();
        let board = solver.board();

        for (dr, dc) in [(1, 2), (2, 1), (-1, 2), (-2, 1), (1, -2), (2, -1), (-1, -2), (-2, -1)] {
            let cell = cu.cell(4, 4).offset(dr, dc).unwrap();
            assert!(!board.cell(cell).has(7), "knight cell {} keeps 7", cell);
        }
        assert!(board.cell(cu.cell(3, 3)).has(7));
    }

    #[test]
    fn test_seen_cells_clipped_at_edges() {
        let constraint = ChessConstraint::anti_knight();
        let cu = CellUtility::new(9);
        assert_eq!(constraint.seen_cells(cu.cell(0, 0)).len(), 2);
        assert_eq!(constraint.seen_cells(cu.cell(4, 4)).len(), 8);
    }
}
