//! Contains [`SumGroup`], the shared sum bookkeeping used by the sum-based
//! constraints.

use std::collections::BTreeSet;

use sudoku_engine_lib::prelude::*;

/// A set of cells whose sum is constrained.
///
/// All enumeration respects the board's seen relation pairwise: two cells
/// that see each other never take the same value in an assignment. Bounds
/// pruning uses the loose per-cell min/max sums, which are valid bounds
/// with or without distinctness.
#[derive(Clone, Debug)]
pub struct SumGroup {
    cells: Vec<CellIndex>,
}

impl SumGroup {
    /// Creates a sum group. The cells are kept sorted by index.
    pub fn new(mut cells: Vec<CellIndex>) -> Self {
        cells.sort();
        cells.dedup();
        Self { cells }
    }

    /// The member cells, sorted by index.
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The sum of the per-cell minimums: a lower bound on any achievable
    /// sum. `None` if some cell has no candidates.
    pub fn loose_min_sum(&self, board: &Board) -> Option<usize> {
        self.current_masks(board, ValueMask::new())
            .map(|masks| masks.iter().map(|mask| mask.min()).sum())
    }

    /// The sum of the per-cell maximums: an upper bound on any achievable
    /// sum. `None` if some cell has no candidates.
    pub fn loose_max_sum(&self, board: &Board) -> Option<usize> {
        self.current_masks(board, ValueMask::new())
            .map(|masks| masks.iter().map(|mask| mask.max()).sum())
    }

    /// Every sum achievable by an assignment of current candidates.
    pub fn possible_sums(&self, board: &Board) -> Vec<usize> {
        if self.cells.is_empty() {
            return vec![0];
        }
        let masks = match self.current_masks(board, ValueMask::new()) {
            Some(masks) => masks,
            None => return Vec::new(),
        };

        let mut sums = BTreeSet::new();
        let mut chosen = Vec::with_capacity(masks.len());
        self.collect_sums(board, &masks, 0, 0, &mut chosen, &mut sums);
        sums.into_iter().collect()
    }

    /// Per-cell union masks over every assignment whose total is one of
    /// `sums`, parallel to [`SumGroup::cells`]. Values in `excluded` are
    /// unavailable to every cell. `None` if no assignment reaches any of
    /// the sums.
    pub fn masks_for_sums(
        &self,
        board: &Board,
        sums: &[usize],
        excluded: ValueMask,
    ) -> Option<Vec<ValueMask>> {
        if self.cells.is_empty() {
            return if sums.contains(&0) { Some(Vec::new()) } else { None };
        }
        let masks = self.current_masks(board, excluded)?;
        let min_target = *sums.iter().min()?;
        let max_target = *sums.iter().max()?;
        let (suffix_min, suffix_max) = Self::suffix_bounds(&masks);

        let mut result = vec![ValueMask::new(); masks.len()];
        let mut chosen = Vec::with_capacity(masks.len());
        let mut found = false;
        self.union_assignments(
            board,
            &masks,
            sums,
            min_target,
            max_target,
            &suffix_min,
            &suffix_max,
            0,
            0,
            &mut chosen,
            &mut result,
            &mut found,
        );

        found.then_some(result)
    }

    /// Restricts every cell to the values compatible with one of the given
    /// sums.
    pub fn restrict_to_sums(&self, board: &mut Board, sums: &[usize]) -> LogicResult {
        let new_masks = match self.masks_for_sums(board, sums, ValueMask::new()) {
            Some(masks) => masks,
            None => return LogicResult::Invalid,
        };

        let mut result = LogicResult::None;
        for (&cell, &mask) in self.cells.iter().zip(new_masks.iter()) {
            match board.keep_mask(cell, mask) {
                LogicResult::Invalid => return LogicResult::Invalid,
                step => result = result.combine(step),
            }
        }
        result
    }

    fn current_masks(&self, board: &Board, excluded: ValueMask) -> Option<Vec<ValueMask>> {
        let mut masks = Vec::with_capacity(self.cells.len());
        for &cell in &self.cells {
            let mask = board.cell(cell).unsolved() & !excluded;
            if mask.is_empty() {
                return None;
            }
            masks.push(mask);
        }
        Some(masks)
    }

    fn suffix_bounds(masks: &[ValueMask]) -> (Vec<usize>, Vec<usize>) {
        let len = masks.len();
        let mut suffix_min = vec![0; len + 1];
        let mut suffix_max = vec![0; len + 1];
        for index in (0..len).rev() {
            suffix_min[index] = suffix_min[index + 1] + masks[index].min();
            suffix_max[index] = suffix_max[index + 1] + masks[index].max();
        }
        (suffix_min, suffix_max)
    }

    fn conflicts(&self, board: &Board, index: usize, value: usize, chosen: &[usize]) -> bool {
        chosen.iter().enumerate().any(|(other, &chosen_value)| {
            chosen_value == value && board.is_seen(self.cells[index], self.cells[other])
        })
    }

    fn collect_sums(
        &self,
        board: &Board,
        masks: &[ValueMask],
        index: usize,
        current: usize,
        chosen: &mut Vec<usize>,
        sums: &mut BTreeSet<usize>,
    ) {
        if index == masks.len() {
            sums.insert(current);
            return;
        }

        for value in masks[index] {
            if self.conflicts(board, index, value, chosen) {
                continue;
            }
            chosen.push(value);
            self.collect_sums(board, masks, index + 1, current + value, chosen, sums);
            chosen.pop();
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn union_assignments(
        &self,
        board: &Board,
        masks: &[ValueMask],
        sums: &[usize],
        min_target: usize,
        max_target: usize,
        suffix_min: &[usize],
        suffix_max: &[usize],
        index: usize,
        current: usize,
        chosen: &mut Vec<usize>,
        result: &mut [ValueMask],
        found: &mut bool,
    ) {
        if index == masks.len() {
            if sums.contains(&current) {
                *found = true;
                for (cell, &value) in chosen.iter().enumerate() {
                    result[cell] = result[cell].with(value);
                }
            }
            return;
        }

        if current + suffix_min[index] > max_target || current + suffix_max[index] < min_target {
            return;
        }

        for value in masks[index] {
            if self.conflicts(board, index, value, chosen) {
                continue;
            }
            chosen.push(value);
            self.union_assignments(
                board,
                masks,
                sums,
                min_target,
                max_target,
                suffix_min,
                suffix_max,
                index + 1,
                current + value,
                chosen,
                result,
                found,
            );
            chosen.pop();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pair_target_sum() {
        let mut board = Board::standard(9);
        let cu = board.cell_utility();
        let group = SumGroup::new(vec![cu.cell(0, 0), cu.cell(0, 1)]);

        // Two cells in one row summing to 4 can only be 1+3 or 3+1.
        assert!(group.restrict_to_sums(&mut board, &[4]).is_changed());
        assert_eq!(board.cell(cu.cell(0, 0)), ValueMask::from_values(&[1, 3]));
        assert_eq!(board.cell(cu.cell(0, 1)), ValueMask::from_values(&[1, 3]));
    }

    #[test]
    fn test_distinctness_is_group_aware() {
        let board = Board::standard(9);
        let cu = board.cell_utility();

        // Same row: 2+2 is not an assignment, so 4 needs {1,3}.
        let row_pair = SumGroup::new(vec![cu.cell(0, 0), cu.cell(0, 1)]);
        let masks = row_pair.masks_for_sums(&board, &[4], ValueMask::new()).unwrap();
        assert_eq!(masks[0], ValueMask::from_values(&[1, 3]));

        // Unrelated cells may repeat: 2+2 works.
        let far_pair = SumGroup::new(vec![cu.cell(0, 0), cu.cell(8, 8)]);
        let masks = far_pair.masks_for_sums(&board, &[4], ValueMask::new()).unwrap();
        assert_eq!(masks[0], ValueMask::from_values(&[1, 2, 3]));
    }

    #[test]
    fn test_excluded_values() {
        let board = Board::standard(9);
        let cu = board.cell_utility();
        let group = SumGroup::new(vec![cu.cell(0, 1)]);

        // A single cell summing to 3 with 3 excluded is impossible.
        assert!(group
            .masks_for_sums(&board, &[3], ValueMask::single(3))
            .is_none());
    }

    #[test]
    fn test_possible_sums() {
        let mut board = Board::standard(9);
        let cu = board.cell_utility();
        assert!(board
            .keep_mask(cu.cell(0, 0), ValueMask::from_values(&[1, 2]))
            .is_changed());
        assert!(board
            .keep_mask(cu.cell(0, 1), ValueMask::from_values(&[1, 2]))
            .is_changed());

        let group = SumGroup::new(vec![cu.cell(0, 0), cu.cell(0, 1)]);
        // Distinctness leaves only 1+2.
        assert_eq!(group.possible_sums(&board), vec![3]);
    }

    #[test]
    fn test_empty_group() {
        let board = Board::standard(9);
        let group = SumGroup::new(Vec::new());
        assert_eq!(group.possible_sums(&board), vec![0]);
        assert!(group.masks_for_sums(&board, &[0], ValueMask::new()).is_some());
        assert!(group.masks_for_sums(&board, &[1], ValueMask::new()).is_none());
    }
}
