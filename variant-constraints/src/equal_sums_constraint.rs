//! Contains [`EqualSumsConstraint`] and the line variants built on it
//! (Double Arrow, Zipper).

use std::any::Any;

use itertools::Itertools;
use sudoku_engine_lib::prelude::*;

use crate::sum_group::SumGroup;

/// Several cell groups whose sums must all be equal.
///
/// The logic step intersects the achievable sums of every group and
/// restricts each group to the shared sums. An empty intersection is a
/// contradiction, which also covers fully committed violations during
/// brute force.
#[derive(Debug)]
pub struct EqualSumsConstraint {
    specific_name: String,
    groups: Vec<SumGroup>,
}

impl EqualSumsConstraint {
    pub fn new(specific_name: &str, groups: Vec<Vec<CellIndex>>) -> Self {
        Self {
            specific_name: specific_name.to_owned(),
            groups: groups.into_iter().map(SumGroup::new).collect(),
        }
    }

    /// A double arrow: the two end circles sum to the same total as the
    /// cells between them. `cells` is the full line in order.
    pub fn double_arrow(cells: Vec<CellIndex>) -> Self {
        let name = format!("Double Arrow at {}", cells[0]);
        let ends = vec![cells[0], cells[cells.len() - 1]];
        let interior = cells[1..cells.len() - 1].to_vec();
        Self::new(&name, vec![ends, interior])
    }

    /// A zipper line: cells equidistant from the center sum to the same
    /// total, which for odd lines is the center cell's value. `cells` is
    /// the full line in order.
    pub fn zipper(cells: Vec<CellIndex>) -> Self {
        let name = format!("Zipper at {}", cells[0]);
        let len = cells.len();
        let mut groups: Vec<Vec<CellIndex>> = (0..len / 2)
            .map(|k| vec![cells[k], cells[len - 1 - k]])
            .collect();
        if len % 2 == 1 {
            groups.push(vec![cells[len / 2]]);
        }
        Self::new(&name, groups)
    }
}

impl Constraint for EqualSumsConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn step_logic(
        &self,
        board: &mut Board,
        mut steps: Option<&mut LogicalStepDescList>,
        _is_brute_forcing: bool,
    ) -> LogicResult {
        let mut shared: Option<Vec<usize>> = None;
        for group in &self.groups {
            let sums = group.possible_sums(board);
            shared = Some(match shared {
                None => sums,
                Some(existing) => existing
                    .into_iter()
                    .filter(|sum| sums.contains(sum))
                    .collect(),
            });
        }

        let shared = shared.unwrap_or_default();
        if shared.is_empty() {
            if let Some(steps) = steps.as_mut() {
                steps.add_step(&format!("{}: no common total", self.specific_name));
            }
            return LogicResult::Invalid;
        }

        let mut result = LogicResult::None;
        for group in &self.groups {
            let new_masks = match group.masks_for_sums(board, &shared, ValueMask::new()) {
                Some(masks) => masks,
                None => return LogicResult::Invalid,
            };

            for (&cell, &mask) in group.cells().iter().zip(new_masks.iter()) {
                let before = board.cell(cell);
                if before.is_solved() {
                    continue;
                }

                match board.keep_mask(cell, mask) {
                    LogicResult::Invalid => return LogicResult::Invalid,
                    LogicResult::Changed => {
                        result = LogicResult::Changed;
                        if let Some(steps) = steps.as_mut() {
                            let mut elims = EliminationList::new();
                            elims.add_mask(cell, before.unsolved() & !mask);
                            steps.push(LogicalStepDesc::from_elims(&self.specific_name, &elims));
                            return result;
                        }
                    }
                    LogicResult::None => {}
                }
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

impl std::fmt::Display for EqualSumsConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self
            .groups
            .iter()
            .flat_map(|group| group.cells().iter())
            .next()
            .map_or(9, |cell| cell.size());
        let cu = CellUtility::new(size);
        write!(
            f,
            "{} [{}]",
            self.specific_name,
            self.groups.iter().map(|g| cu.compact_name(g.cells())).join(" = ")
        )
    }
}
