//! Contains [`SkyscraperConstraint`] for visibility clues.

use std::any::Any;

use itertools::Itertools;
use sudoku_engine_lib::prelude::*;

/// A skyscraper clue: scanning the line from the clue side, exactly
/// `clue` cells are strictly increasing maxima ("visible buildings").
///
/// Initialization applies the classic bounds (a clue of 1 pins the
/// nearest cell to the maximum value, a clue of `size` forces the full
/// staircase, anything else caps the leading cells). The logic step
/// enumerates permutations of the missing values over the undecided
/// cells, filters them by visibility count and by
/// [`Board::can_place_digits`], and keeps only the surviving candidates.
/// The enumeration is memoized by clue and mask signature.
#[derive(Debug)]
pub struct SkyscraperConstraint {
    specific_name: String,
    clue: usize,
    cells: Vec<CellIndex>,
}

impl SkyscraperConstraint {
    /// Creates a skyscraper clue over the line cells ordered from the
    /// clue side inward.
    pub fn new(clue: usize, cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("Skyscraper {} toward {}", clue, cells[0]),
            clue,
            cells,
        }
    }

    fn seen_count(values: &[usize]) -> usize {
        let mut tallest = 0;
        let mut count = 0;
        for &value in values {
            if value > tallest {
                tallest = value;
                count += 1;
            }
        }
        count
    }

    fn memo_key(&self, board: &Board) -> String {
        let masks = self
            .cells
            .iter()
            .map(|&cell| board.cell(cell).value_bits())
            .join(",");
        format!(
            "Skyscraper|{}|{}|{}",
            self.clue,
            board.cell_utility().compact_name(&self.cells),
            masks
        )
    }

    // Per-cell survivor masks over all permutations of the missing values
    // on the undecided cells. An all-empty result means no permutation
    // works.
    fn survivor_masks(&self, board: &Board) -> Vec<ValueMask> {
        let mut solved_values = ValueMask::new();
        let mut open_slots = Vec::new();
        for (slot, &cell) in self.cells.iter().enumerate() {
            let mask = board.cell(cell);
            if mask.is_solved() {
                solved_values = solved_values | mask.unsolved();
            } else {
                open_slots.push(slot);
            }
        }

        let missing = (board.all_values_mask() & !solved_values).to_vec();
        let mut values: Vec<usize> = self
            .cells
            .iter()
            .map(|&cell| {
                let mask = board.cell(cell);
                if mask.is_solved() {
                    mask.value()
                } else {
                    0
                }
            })
            .collect();

        let mut survivors = vec![ValueMask::new(); self.cells.len()];
        let mut placements = Vec::with_capacity(open_slots.len());
        for permutation in missing.iter().permutations(open_slots.len()) {
            for (&slot, &&value) in open_slots.iter().zip(permutation.iter()) {
                values[slot] = value;
            }
            if Self::seen_count(&values) != self.clue {
                continue;
            }

            placements.clear();
            placements.extend(
                open_slots
                    .iter()
                    .map(|&slot| (self.cells[slot], values[slot])),
            );
            if !board.can_place_digits(&placements) {
                continue;
            }

            for &slot in &open_slots {
                survivors[slot] = survivors[slot].with(values[slot]);
            }
        }

        for (slot, &cell) in self.cells.iter().enumerate() {
            let mask = board.cell(cell);
            if mask.is_solved() {
                survivors[slot] = mask.unsolved();
            }
        }
        survivors
    }
}

impl Constraint for SkyscraperConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn init_candidates(&mut self, board: &mut Board) -> LogicResult {
        let size = board.size();
        if self.clue == 0 || self.clue > size || self.cells.len() != size {
            return LogicResult::Invalid;
        }

        let mut result = LogicResult::None;
        if self.clue == 1 {
            result = board.keep_mask(self.cells[0], ValueMask::single(size));
        } else if self.clue == size {
            for (slot, &cell) in self.cells.iter().enumerate() {
                match board.keep_mask(cell, ValueMask::single(slot + 1)) {
                    LogicResult::Invalid => return LogicResult::Invalid,
                    step => result = result.combine(step),
                }
            }
        } else {
            for (slot, &cell) in self.cells.iter().enumerate() {
                let cap = size - self.clue + 1 + slot;
                if cap >= size {
                    break;
                }
                match board.keep_mask(cell, ValueMask::val_and_lower(cap)) {
                    LogicResult::Invalid => return LogicResult::Invalid,
                    step => result = result.combine(step),
                }
            }
        }
        result
    }

    fn enforce(&self, board: &mut Board, _cell: CellIndex, _value: usize) -> LogicResult {
        let values: Option<Vec<usize>> = self
            .cells
            .iter()
            .map(|&cell| {
                let mask = board.cell(cell);
                mask.is_solved().then(|| mask.value())
            })
            .collect();

        match values {
            Some(values) if Self::seen_count(&values) != self.clue => LogicResult::Invalid,
            _ => LogicResult::None,
        }
    }

    fn step_logic(
        &self,
        board: &mut Board,
        mut steps: Option<&mut LogicalStepDescList>,
        _is_brute_forcing: bool,
    ) -> LogicResult {
        let memo = board.memo();
        let key = self.memo_key(board);
        let survivors = match memo.get::<Vec<ValueMask>>(&key) {
            Some(cached) => cached,
            None => {
                let computed = self.survivor_masks(board);
                memo.store(&key, computed)
            }
        };

        if survivors.iter().all(|mask| mask.is_empty()) {
            if let Some(steps) = steps.as_mut() {
                steps.add_step(&format!("{}: no arrangement is visible", self.specific_name));
            }
            return LogicResult::Invalid;
        }

        let mut result = LogicResult::None;
        for (slot, &cell) in self.cells.iter().enumerate() {
            let before = board.cell(cell);
            if before.is_solved() {
                continue;
            }

            match board.keep_mask(cell, survivors[slot]) {
                LogicResult::Invalid => return LogicResult::Invalid,
                LogicResult::Changed => {
                    result = LogicResult::Changed;
                    if let Some(steps) = steps.as_mut() {
                        let mut elims = EliminationList::new();
                        elims.add_mask(cell, before.unsolved() & !survivors[slot]);
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
