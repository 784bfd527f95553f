use crate::prelude::*;

/// Dispatches one round of constraint-specific deduction: each registered
/// constraint gets a [`Constraint::step_logic`] call in registration order,
/// and the first one to change the board ends the pass.
#[derive(Debug)]
pub struct StepConstraints;

impl LogicalStep for StepConstraints {
    fn name(&self) -> &'static str {
        "Step Constraints"
    }

    fn has_own_prefix(&self) -> bool {
        true
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let data = board.data();
        for constraint in data.constraints() {
            let mut steps = LogicalStepDescList::new();
            let result = if generate_description {
                constraint.step_logic(board, Some(&mut steps), false)
            } else {
                constraint.step_logic(board, None, true)
            };

            if result.is_none() {
                continue;
            }

            let desc = (!steps.is_empty()).then(|| {
                LogicalStepDesc::from_desc(&steps.to_string())
                    .with_prefix(&format!("{}: ", constraint.name()))
            });
            return match result {
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
    struct RemoveCandidateConstraint {
        candidate: CandidateIndex,
    }

    impl Constraint for RemoveCandidateConstraint {
        fn name(&self) -> String {
            format!("Remove {}", self.candidate)
        }

        fn step_logic(
            &self,
            board: &mut Board,
            steps: Option<&mut LogicalStepDescList>,
            _is_brute_forcing: bool,
        ) -> LogicResult {
            if !board.has_candidate(self.candidate) {
                return LogicResult::None;
            }

            let result = board.clear_candidate(self.candidate);
            if let Some(steps) = steps {
                steps.add_step(&format!("{} removed", self.candidate));
            }
            result
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_step_constraints_order() {
        let cu = CellUtility::new(9);
        let first = cu.cell(0, 0).candidate(1);
        let second = cu.cell(0, 1).candidate(1);
        let mut board = Board::new(
            9,
            &[],
            vec![
                Arc::new(RemoveCandidateConstraint { candidate: first }),
                Arc::new(RemoveCandidateConstraint { candidate: second }),
            ],
        );
        board.finalize_constraints().unwrap();
        let step_constraints = StepConstraints;

        let result = step_constraints.run(&mut board, true);
        assert!(result.is_changed());
        assert_eq!(result.to_string(), "Remove 1r1c1: 1r1c1 removed");
        assert!(!board.has_candidate(first));
        assert!(board.has_candidate(second));

        let result = step_constraints.run(&mut board, true);
        assert!(result.is_changed());
        assert!(!board.has_candidate(second));

        assert!(step_constraints.run(&mut board, true).is_none());
    }
}
