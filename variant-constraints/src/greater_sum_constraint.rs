//! Contains [`GreaterSumConstraint`]: one cell group must out-sum another.

use std::any::Any;

use sudoku_engine_lib::prelude::*;

/// Requires `sum(greater) > sum(smaller)`.
///
/// Tightening uses the loose per-cell bounds: with `diff` the gap between
/// the greater side's maximum total and the smaller side's minimum total,
/// a smaller-side cell keeps only values below its minimum plus `diff`,
/// and a greater-side cell keeps only values above its maximum minus
/// `diff`. The gap only bites when it is below the board size, since no
/// candidate spread exceeds that.
#[derive(Debug)]
pub struct GreaterSumConstraint {
    specific_name: String,
    greater: Vec<CellIndex>,
    smaller: Vec<CellIndex>,
}

impl GreaterSumConstraint {
    pub fn new(greater: Vec<CellIndex>, smaller: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("Greater Sum at {}", greater[0]),
            greater,
            smaller,
        }
    }

    fn loose_min(board: &Board, cells: &[CellIndex]) -> usize {
        cells.iter().map(|&cell| board.cell(cell).min()).sum()
    }

    fn loose_max(board: &Board, cells: &[CellIndex]) -> usize {
        cells.iter().map(|&cell| board.cell(cell).max()).sum()
    }
}

impl Constraint for GreaterSumConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn step_logic(
        &self,
        board: &mut Board,
        mut steps: Option<&mut LogicalStepDescList>,
        _is_brute_forcing: bool,
    ) -> LogicResult {
        let size = board.size();
        let max_greater = Self::loose_max(board, &self.greater);
        let min_smaller = Self::loose_min(board, &self.smaller);
        if max_greater <= min_smaller {
            if let Some(steps) = steps.as_mut() {
                steps.add_step(&format!(
                    "{}: {} cannot exceed {}",
                    self.specific_name, max_greater, min_smaller
                ));
            }
            return LogicResult::Invalid;
        }

        let diff = max_greater - min_smaller;
        if diff > size - 1 {
            return LogicResult::None;
        }

        let mut result = LogicResult::None;
        for &cell in &self.smaller {
            let before = board.cell(cell);
            if before.is_solved() {
                continue;
            }

            // sum(smaller) stays below max(greater), so this cell stays
            // below its own minimum plus the gap.
            let cap = before.min() + diff - 1;
            if cap >= size {
                continue;
            }
            match board.keep_mask(cell, ValueMask::val_and_lower(cap)) {
                LogicResult::Invalid => return LogicResult::Invalid,
                LogicResult::Changed => {
                    result = LogicResult::Changed;
                    if let Some(steps) = steps.as_mut() {
                        let mut elims = EliminationList::new();
                        elims.add_mask(cell, before.unsolved() & ValueMask::higher(cap, size));
                        steps.push(LogicalStepDesc::from_elims(&self.specific_name, &elims));
                        return result;
                    }
                }
                LogicResult::None => {}
            }
        }

        for &cell in &self.greater {
            let before = board.cell(cell);
            if before.is_solved() {
                continue;
            }

            let floor = before.max().saturating_sub(diff) + 1;
            if floor <= 1 {
                continue;
            }
            match board.keep_mask(cell, ValueMask::val_and_higher(floor, size)) {
                LogicResult::Invalid => return LogicResult::Invalid,
                LogicResult::Changed => {
                    result = LogicResult::Changed;
                    if let Some(steps) = steps.as_mut() {
                        let mut elims = EliminationList::new();
                        elims.add_mask(cell, before.unsolved() & ValueMask::lower(floor));
                        steps.push(LogicalStepDesc::from_elims(&self.specific_name, &elims));
                        return result;
                    }
                }
                LogicResult::None => {}
            }
        }

        result
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
    fn test_tightens_both_sides() {
        let cu = CellUtility::new(9);
        let constraint = GreaterSumConstraint::new(vec![cu.cell(0, 0)], vec![cu.cell(8, 8)]);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(constraint))
            .build()
            .unwrap();

        // max(greater) = 9, min(smaller) = 1, diff = 8: the smaller cell
        // loses 9 (it must stay under some greater value), the greater
        // cell loses 1.
        assert!(!solver.propagate(None).is_invalid());
        assert!(!solver.board().cell(cu.cell(8, 8)).has(9));
        assert!(!solver.board().cell(cu.cell(0, 0)).has(1));
        assert!(solver.board().cell(cu.cell(8, 8)).has(8));
        assert!(solver.board().cell(cu.cell(0, 0)).has(2));
    }

    #[test]
    fn test_committed_violation_found() {
        let cu = CellUtility::new(9);
        let constraint = GreaterSumConstraint::new(vec![cu.cell(0, 0)], vec![cu.cell(8, 8)]);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(constraint))
            .build()
            .unwrap();

        assert!(solver.board_mut().set_value(cu.cell(0, 0), 3));
        assert!(solver.board_mut().set_value(cu.cell(8, 8), 7));
        assert!(solver.propagate(None).is_invalid());
    }

    #[test]
    fn test_committed_greater_side_caps_smaller_cells() {
        let cu = CellUtility::new(9);
        let constraint = GreaterSumConstraint::new(
            vec![cu.cell(0, 0), cu.cell(0, 1)],
            vec![cu.cell(8, 7), cu.cell(8, 8)],
        );
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(constraint))
            .build()
            .unwrap();

        assert!(solver.board_mut().set_value(cu.cell(0, 0), 3));
        assert!(solver.board_mut().set_value(cu.cell(0, 1), 4));
        // The greater side totals 7; with the other smaller cell at least
        // 1, no smaller cell can reach 6.
        assert!(!solver.propagate(None).is_invalid());
        assert!(solver.board().cell(cu.cell(8, 7)).max() <= 5);
        assert!(solver.board().cell(cu.cell(8, 8)).max() <= 5);
        assert!(solver.board().cell(cu.cell(8, 8)).has(5));
    }

    #[test]
    fn test_forced_minimum_collision_is_invalid() {
        let cu = CellUtility::new(9);
        // Both smaller cells share row 9, so forcing each of them to 1
        // (the only way to stay under a total of 3) collides.
        let constraint = GreaterSumConstraint::new(
            vec![cu.cell(0, 0), cu.cell(0, 1)],
            vec![cu.cell(8, 7), cu.cell(8, 8)],
        );
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(constraint))
            .build()
            .unwrap();

        assert!(solver.board_mut().set_value(cu.cell(0, 0), 1));
        assert!(solver.board_mut().set_value(cu.cell(0, 1), 2));
        assert!(solver.propagate(None).is_invalid());
    }
}
