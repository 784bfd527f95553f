//! Contains [`XSumConstraint`]: the first cell of a line tells how many
//! leading cells sum to the clue.

use std::any::Any;

use itertools::Itertools;
use sudoku_engine_lib::prelude::*;

use crate::sum_group::SumGroup;

/// An X-Sum clue: when the cell nearest the clue holds `x`, the first `x`
/// cells of the line (including that cell) sum to the clue value.
#[derive(Debug)]
pub struct XSumConstraint {
    specific_name: String,
    sum: usize,
    cells: Vec<CellIndex>,
}

impl XSumConstraint {
    /// Creates an X-Sum over the full line, ordered from the clue side
    /// inward.
    pub fn new(sum: usize, cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("X-Sum {} toward {}", sum, cells[0]),
            sum,
            cells,
        }
    }

    // The loose feasibility test for a first-cell value: the remaining
    // x - 1 cells are distinct line values, so their total is bounded by
    // the smallest and largest choices of x - 1 values from the line with
    // x excluded.
    fn first_value_feasible(&self, value: usize, size: usize) -> bool {
        if value > self.sum {
            return false;
        }
        let tail = self.sum - value;
        let others = (1..=size).filter(|&v| v != value).collect::<Vec<_>>();
        let needed = value - 1;
        if needed > others.len() {
            return false;
        }
        let min_tail: usize = others.iter().take(needed).sum();
        let max_tail: usize = others.iter().rev().take(needed).sum();
        (min_tail..=max_tail).contains(&tail)
    }

    fn memo_key(&self, board: &Board) -> String {
        let masks = self
            .cells
            .iter()
            .map(|&cell| board.cell(cell).value_bits())
            .join(",");
        format!(
            "XSum|{}|{}|{}",
            self.sum,
            board.cell_utility().compact_name(&self.cells),
            masks
        )
    }

    // Per-cell union masks across every still-possible first-cell value.
    // Cells outside the prefix of a given first value keep their current
    // candidates under that value.
    fn calc_new_masks(&self, board: &Board) -> Vec<ValueMask> {
        let mut new_masks = vec![ValueMask::new(); self.cells.len()];
        for value in board.cell(self.cells[0]).unsolved() {
            let tail_cells = self.cells[1..value].to_vec();
            let tail_group = SumGroup::new(tail_cells);
            let tail_masks = match (value, self.sum.checked_sub(value)) {
                (_, None) => continue,
                (1, Some(0)) => Vec::new(),
                (1, Some(_)) => continue,
                (_, Some(target)) => {
                    match tail_group.masks_for_sums(board, &[target], ValueMask::single(value)) {
                        Some(masks) => masks,
                        None => continue,
                    }
                }
            };

            new_masks[0] = new_masks[0].with(value);
            for (&cell, &mask) in tail_group.cells().iter().zip(tail_masks.iter()) {
                if let Some(slot) = self.cells.iter().position(|&c| c == cell) {
                    new_masks[slot] = new_masks[slot] | mask;
                }
            }
            for slot in value..self.cells.len() {
                new_masks[slot] = new_masks[slot] | board.cell(self.cells[slot]).unsolved();
            }
        }
        new_masks
    }
}

impl Constraint for XSumConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn init_candidates(&mut self, board: &mut Board) -> LogicResult {
        let size = board.size();
        if self.cells.len() != size {
            return LogicResult::Invalid;
        }

        let feasible: ValueMask = (1..=size)
            .filter(|&value| self.first_value_feasible(value, size))
            .collect();
        board.keep_mask(self.cells[0], feasible)
    }

    fn enforce(&self, board: &mut Board, _cell: CellIndex, _value: usize) -> LogicResult {
        let first = board.cell(self.cells[0]);
        if !first.is_solved() {
            return LogicResult::None;
        }

        // Loose prefix bounds; exact once the whole prefix is committed.
        let x = first.value();
        let prefix = &self.cells[..x];
        let min_total: usize = prefix.iter().map(|&cell| board.cell(cell).min()).sum();
        let max_total: usize = prefix.iter().map(|&cell| board.cell(cell).max()).sum();
        if !(min_total..=max_total).contains(&self.sum) {
            return LogicResult::Invalid;
        }
        LogicResult::None
    }

    fn step_logic(
        &self,
        board: &mut Board,
        mut steps: Option<&mut LogicalStepDescList>,
        _is_brute_forcing: bool,
    ) -> LogicResult {
        let memo = board.memo();
        let key = self.memo_key(board);
        let new_masks = match memo.get::<Vec<ValueMask>>(&key) {
            Some(cached) => cached,
            None => {
                let computed = self.calc_new_masks(board);
                memo.store(&key, computed)
            }
        };

        if new_masks[0].is_empty() {
            if let Some(steps) = steps.as_mut() {
                steps.add_step(&format!("{}: no total is reachable", self.specific_name));
            }
            return LogicResult::Invalid;
        }

        let mut result = LogicResult::None;
        for (slot, &cell) in self.cells.iter().enumerate() {
            let before = board.cell(cell);
            if before.is_solved() {
                continue;
            }

            match board.keep_mask(cell, new_masks[slot]) {
                LogicResult::Invalid => return LogicResult::Invalid,
                LogicResult::Changed => {
                    result = LogicResult::Changed;
                    if let Some(steps) = steps.as_mut() {
                        let mut elims = EliminationList::new();
                        elims.add_mask(cell, before.unsolved() & !new_masks[slot]);
                        steps.push(LogicalStepDesc::from_elims(&self.specific_name, &elims));
                        return result;
                    }
                }
                LogicResult::None => {}
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

    fn row_cells(row: usize) -> Vec<CellIndex> {
        let cu = CellUtility::new(9);
        (0..9).map(|column| cu.cell(row, column)).collect()
    }

    #[test]
    fn test_feasible_first_values_for_ten() {
        let cu = CellUtility::new(9);
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(XSumConstraint::new(10, row_cells(0))))
            .build()
            .unwrap();

        // 2 (2+8), 3 (3+a+b=10), and 4 (4+1+2+3) can lead the line; 1
        // cannot reach 10 alone and 5 or more already exceeds it with the
        // smallest possible tail.
        assert_eq!(
            solver.board().cell(cu.cell(0, 0)),
            ValueMask::from_values(&[2, 3, 4])
        );
    }

    #[test]
    fn test_decided_first_cell_pins_tail() {
        let cu = CellUtility::new(9);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(XSumConstraint::new(10, row_cells(0))))
            .with_given(cu.cell(0, 0), 2)
            .build()
            .unwrap();

        assert!(!solver.propagate(None).is_invalid());
        // 2 + r1c2 = 10 forces an 8.
        assert_eq!(solver.board().cell(cu.cell(0, 1)).value(), 8);
    }

    #[test]
    fn test_minimal_sum_forces_one() {
        let cu = CellUtility::new(9);
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(XSumConstraint::new(1, row_cells(4))))
            .build()
            .unwrap();
        assert_eq!(solver.board().cell(cu.cell(4, 0)).value(), 1);
    }

    #[test]
    fn test_init_candidates_is_idempotent() {
        let mut board = Board::standard(9);
        let mut constraint = XSumConstraint::new(10, row_cells(0));

        assert!(constraint.init_candidates(&mut board).is_changed());
        let after_first: Vec<ValueMask> =
            board.all_cell_masks().map(|(_, mask)| mask).collect();

        assert!(constraint.init_candidates(&mut board).is_none());
        let after_second: Vec<ValueMask> =
            board.all_cell_masks().map(|(_, mask)| mask).collect();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_impossible_sum_errors_at_build() {
        let result = SolverBuilder::default()
            .with_constraint(Arc::new(XSumConstraint::new(46, row_cells(0))))
            .build();
        assert!(result.is_err());
    }
}
