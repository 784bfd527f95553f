use crate::prelude::*;

/// A "Hidden Single" is a value that can go in only one cell of a group.
///
/// Only groups that span the full board size participate: smaller groups do
/// not have to contain every value.
#[derive(Debug)]
pub struct HiddenSingle;

impl LogicalStep for HiddenSingle {
    fn name(&self) -> &'static str {
        "Hidden Single"
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let data = board.data();
        let all_values = data.all_values_mask();
        let size = data.size();

        for group in data.groups() {
            if group.len() != size {
                continue;
            }

            let mut at_least_once = ValueMask::new();
            let mut more_than_once = ValueMask::new();
            let mut committed = ValueMask::new();
            for &cell in group.cells() {
                let mask = board.cell(cell);
                if mask.is_solved() {
                    committed = committed | mask.unsolved();
                } else {
                    more_than_once = more_than_once | (at_least_once & mask);
                    at_least_once = at_least_once | mask;
                }
            }

            let placeable = at_least_once | committed;
            if placeable != all_values {
                let missing = all_values & !placeable;
                let desc = generate_description
                    .then(|| format!("{} has nowhere to place {}", group, missing).into());
                return LogicalStepResult::Invalid(desc);
            }

            let exactly_once = at_least_once & !more_than_once;
            if exactly_once.is_empty() {
                continue;
            }

            let value = exactly_once.min();
            for &cell in group.cells() {
                if !board.cell(cell).has(value) || board.cell(cell).is_solved() {
                    continue;
                }

                return if board.set_value(cell, value) {
                    let desc = generate_description
                        .then(|| format!("In {}: {}={}", group, cell, value).into());
                    LogicalStepResult::Changed(desc)
                } else {
                    let desc = generate_description
                        .then(|| format!("In {}: {} cannot be {}", group, cell, value).into());
                    LogicalStepResult::Invalid(desc)
                };
            }
        }

        LogicalStepResult::None
    }
}
