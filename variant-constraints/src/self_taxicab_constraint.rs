//! Contains [`SelfTaxicabConstraint`]: a value cannot repeat at a taxicab
//! distance equal to itself.

use std::any::Any;

use sudoku_engine_lib::prelude::*;

/// If a cell holds `v`, no cell exactly `v` taxicab steps away holds `v`.
///
/// The exclusion radius depends on the value, so the rule contributes
/// through [`Constraint::seen_cells_by_value_mask`] and nothing else: the
/// engine queries it with the committed value at commit time.
#[derive(Debug)]
pub struct SelfTaxicabConstraint;

impl SelfTaxicabConstraint {
    fn ring(cell: CellIndex, distance: usize) -> Vec<CellIndex> {
        let distance = distance as isize;
        let mut cells = Vec::new();
        for row_offset in -distance..=distance {
            let column_span = distance - row_offset.abs();
            for column_offset in [-column_span, column_span] {
                if let Some(other) = cell.offset(row_offset, column_offset) {
                    cells.push(other);
                }
                if column_span == 0 {
                    break;
                }
            }
        }
        cells
    }
}

impl Constraint for SelfTaxicabConstraint {
    fn name(&self) -> String {
        "Self-Taxicab".to_owned()
    }

    fn seen_cells_by_value_mask(&self, cell: CellIndex, mask: ValueMask) -> Vec<CellIndex> {
        let mut cells = Vec::new();
        for value in mask {
            cells.extend(Self::ring(cell, value));
        }
        cells.sort();
        cells.dedup();
        cells
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
    fn test_ring_size() {
        let cu = CellUtility::new(9);
        // A full ring of taxicab radius 2 has 8 cells.
        assert_eq!(SelfTaxicabConstraint::ring(cu.cell(4, 4), 2).len(), 8);
        // Clipped at the corner.
        assert_eq!(SelfTaxicabConstraint::ring(cu.cell(0, 0), 2).len(), 3);
    }

    #[test]
    fn test_commit_clears_ring() {
        let cu = CellUtility::new(9);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(SelfTaxicabConstraint))
            .build()
            .unwrap();

        assert!(solver.board_mut().set_value(cu.cell(4, 4), 3));
        let board = solver.board();

        // r6c7 is 3 away and shares no row, column, or box.
        assert!(!board.cell(cu.cell(5, 6)).has(3));
        assert!(!board.cell(cu.cell(7, 4)).has(3));
        // Distance 4 is unaffected by the taxicab rule.
        assert!(board.cell(cu.cell(6, 6)).has(3));
        // Other values at distance 3 survive.
        assert!(board.cell(cu.cell(5, 6)).has(4));
    }

    #[test]
    fn test_seen_cells_by_value_mask_is_value_dependent() {
        let cu = CellUtility::new(9);
        let constraint = SelfTaxicabConstraint;
        let center = cu.cell(4, 4);
        let for_two = constraint.seen_cells_by_value_mask(center, ValueMask::single(2));
        let for_three = constraint.seen_cells_by_value_mask(center, ValueMask::single(3));
        assert_eq!(for_two.len(), 8);
        assert_eq!(for_three.len(), 12);
        assert!(for_two.iter().all(|&cell| center.taxicab_distance(cell) == 2));
        assert!(for_three.iter().all(|&cell| center.taxicab_distance(cell) == 3));
    }
}
