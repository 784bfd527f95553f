use crate::prelude::*;

/// "Simple Cell Forcing": when every remaining candidate of a cell is
/// weak-linked to the same foreign candidate, that candidate can never
/// hold and is eliminated. This is the cheap closure over the weak-link
/// graph.
#[derive(Debug)]
pub struct SimpleCellForcing;

impl LogicalStep for SimpleCellForcing {
    fn name(&self) -> &'static str {
        "Simple Cell Forcing"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let size = board.size();
        let cu = board.cell_utility();
        let data = board.data();

        for cell in board.all_cells() {
            let mask = board.cell(cell);
            if mask.is_solved() {
                continue;
            }

            let mut common_links = CandidateLinks::new(size);
            let mut first = true;
            for value in mask {
                let candidate = cu.candidate(cell, value);
                if first {
                    common_links.union(data.weak_links_for(candidate));
                    first = false;
                } else {
                    common_links.intersect(data.weak_links_for(candidate));
                }
            }

            let elims: EliminationList = common_links
                .iter()
                .filter(|&candidate| board.has_candidate(candidate))
                .collect();
            if elims.is_empty() {
                continue;
            }

            let desc = generate_description
                .then(|| LogicalStepDesc::from_elims(&cell.to_string(), &elims));
            return match elims.execute(board) {
                LogicResult::Invalid => LogicalStepResult::Invalid(desc),
                _ => LogicalStepResult::Changed(desc),
            };
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::any::Any;
    use std::sync::Arc;

    #[derive(Debug)]
    struct PinnedLinksConstraint;

    impl Constraint for PinnedLinksConstraint {
        fn name(&self) -> String {
            "Test Pinned Links".to_owned()
        }

        fn get_weak_links(&self, board: &Board) -> Vec<(CandidateIndex, CandidateIndex)> {
            let cu = board.cell_utility();
            let target = cu.cell(0, 1).candidate(1);
            (2..=8)
                .map(|value| (cu.cell(0, 0).candidate(value), target))
                .collect()
        }

        fn needs_enforce(&self) -> bool {
            false
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_cell_forcing() {
        let mut board = Board::new(9, &[], vec![Arc::new(PinnedLinksConstraint)]);
        board.finalize_constraints().unwrap();
        let cu = board.cell_utility();
        let simple_cell_forcing = SimpleCellForcing;

        // 9r1c1 is not linked to 1r1c2, so nothing fires yet.
        assert!(simple_cell_forcing.run(&mut board, true).is_none());

        // Once 9 is gone from r1c1, every candidate left in r1c1 is linked
        // to 1r1c2.
        assert!(board.clear_value(cu.cell(0, 0), 9).is_changed());
        let result = simple_cell_forcing.run(&mut board, true);
        assert!(result.is_changed());
        assert!(!board.cell(cu.cell(0, 1)).has(1));
        assert_eq!(result.to_string(), "r1c1 => -1r1c2");
    }
}
