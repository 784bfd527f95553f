//! Contains [`PalindromeConstraint`] for mirrored line values.

use std::any::Any;

use sudoku_engine_lib::prelude::*;

/// The values along a line read the same from both ends: cell `k` and
/// cell `n-1-k` are mirror pairs and must hold the same value.
///
/// Initialization intersects the masks of each mirror pair; the weak links
/// between different values of a pair carry the rest, so committing one
/// half of a pair collapses the other half immediately.
#[derive(Debug)]
pub struct PalindromeConstraint {
    specific_name: String,
    cells: Vec<CellIndex>,
}

impl PalindromeConstraint {
    /// Creates a palindrome over the cells in line order.
    pub fn new(cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("Palindrome at {}", cells[0]),
            cells,
        }
    }

    fn mirror_pairs(&self) -> impl Iterator<Item = (CellIndex, CellIndex)> + '_ {
        let len = self.cells.len();
        (0..len / 2).map(move |k| (self.cells[k], self.cells[len - 1 - k]))
    }
}

impl Constraint for PalindromeConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn init_candidates(&mut self, board: &mut Board) -> LogicResult {
        let mut result = LogicResult::None;
        for (cell0, cell1) in self.mirror_pairs().collect::<Vec<_>>() {
            let shared = board.cell(cell0).unsolved() & board.cell(cell1).unsolved();
            match board.keep_mask(cell0, shared) {
                LogicResult::Invalid => return LogicResult::Invalid,
                step => result = result.combine(step),
            }
            match board.keep_mask(cell1, shared) {
                LogicResult::Invalid => return LogicResult::Invalid,
                step => result = result.combine(step),
            }
        }
        result
    }

    fn get_weak_links(&self, board: &Board) -> Vec<(CandidateIndex, CandidateIndex)> {
        let size = board.size();
        let mut links = Vec::new();
        for (cell0, cell1) in self.mirror_pairs() {
            for value0 in 1..=size {
                for value1 in 1..=size {
                    if value0 != value1 {
                        links.push((cell0.candidate(value0), cell1.candidate(value1)));
                    }
                }
            }
        }
        links
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

    // Mirror pairs (r1c1, r9c9) and (r2c3, r8c7) share no row, column, or
    // box, so the mirrored value can actually be placed.
    fn snake_cells() -> Vec<CellIndex> {
        let cu = CellUtility::new(9);
        vec![
            cu.cell(0, 0),
            cu.cell(1, 2),
            cu.cell(4, 4),
            cu.cell(7, 6),
            cu.cell(8, 8),
        ]
    }

    #[test]
    fn test_masks_equalized_after_init() {
        let cu = CellUtility::new(9);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(PalindromeConstraint::new(snake_cells())))
            .build()
            .unwrap();

        // Restrict one half of a mirror pair, re-run initialization, and
        // the other half follows.
        assert!(solver
            .board_mut()
            .keep_mask(cu.cell(0, 0), ValueMask::from_values(&[2, 5, 7]))
            .is_changed());
        solver.board_mut().init_constraints().unwrap();
        assert_eq!(
            solver.board().cell(cu.cell(8, 8)).unsolved(),
            solver.board().cell(cu.cell(0, 0)).unsolved()
        );
    }

    #[test]
    fn test_committed_value_mirrors() {
        let cu = CellUtility::new(9);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(PalindromeConstraint::new(snake_cells())))
            .build()
            .unwrap();

        assert!(solver.board_mut().set_value(cu.cell(0, 0), 5));
        let mirror = solver.board().cell(cu.cell(8, 8));
        assert!(mirror.is_solved());
        assert_eq!(mirror.value(), 5);

        // The middle cell of an odd palindrome is its own mirror and is
        // untouched.
        assert!(!solver.board().cell(cu.cell(4, 4)).is_solved());
    }

    #[test]
    fn test_mirror_in_same_column_is_invalid() {
        let cu = CellUtility::new(9);
        // r1c1 mirrors r3c1: equal values in one column cannot exist, so
        // committing either end must fail.
        let cells = vec![cu.cell(0, 0), cu.cell(4, 4), cu.cell(2, 0)];
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(PalindromeConstraint::new(cells)))
            .build()
            .unwrap();

        assert!(!solver.board_mut().set_value(cu.cell(0, 0), 5));
    }
}
