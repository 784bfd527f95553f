//! Contains [`SolverBuilder`] for assembling a [`Solver`].

use itertools::Itertools;

use crate::prelude::*;
use std::sync::Arc;

/// Builds a [`Solver`] from a size, regions, constraints, and givens.
///
/// The build runs the whole setup sequence: constraints are split into
/// primitives, the board is finalized (groups and weak links), the givens
/// are committed with full cascading, and the constraint initialization
/// loop runs until quiescent.
pub struct SolverBuilder {
    size: usize,
    regions: Vec<usize>,
    constraints: Vec<Arc<dyn Constraint>>,
    logical_steps: Vec<Arc<dyn LogicalStep>>,
    givens: Vec<(CellIndex, usize)>,
    errors: Vec<String>,
}

impl SolverBuilder {
    /// Creates a builder for the given board size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            regions: Vec::new(),
            constraints: Vec::new(),
            logical_steps: Vec::new(),
            givens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Sets the region index of every cell. The vector must have one entry
    /// per cell; regions that do not span exactly `size` cells contribute
    /// no group.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<usize>) -> Self {
        if regions.is_empty() {
            return self.with_no_regions();
        }
        if regions.len() != self.size * self.size {
            self.errors.push(format!(
                "region vector has length {}, expected {}",
                regions.len(),
                self.size * self.size
            ));
            return self;
        }
        self.regions = regions;
        self
    }

    /// Uses only rows and columns, without box regions.
    #[must_use]
    pub fn with_no_regions(mut self) -> Self {
        // A single all-board region spans more than `size` cells and is
        // therefore dropped when groups are derived.
        self.regions = vec![0; self.size * self.size];
        self
    }

    /// Adds one constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: Arc<dyn Constraint>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Adds several constraints.
    #[must_use]
    pub fn with_constraints(
        mut self,
        constraints: impl IntoIterator<Item = Arc<dyn Constraint>>,
    ) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Appends an extra logical step to the standard set.
    #[must_use]
    pub fn with_logical_step(mut self, step: Arc<dyn LogicalStep>) -> Self {
        self.logical_steps.push(step);
        self
    }

    /// Adds one given.
    #[must_use]
    pub fn with_given(mut self, cell: CellIndex, value: usize) -> Self {
        self.givens.push((cell, value));
        self
    }

    /// Adds several givens.
    #[must_use]
    pub fn with_givens(mut self, givens: &[(CellIndex, usize)]) -> Self {
        self.givens.extend(givens);
        self
    }

    /// Adds givens from a row-major string. `0` or any non-digit marks an
    /// empty cell. For sizes above 9, every value takes the same number of
    /// characters (`01` for 1).
    #[must_use]
    pub fn with_givens_string(mut self, givens: &str) -> Self {
        let cu = CellUtility::new(self.size);
        let num_digits = self.size.to_string().len();
        if givens.len() != cu.cell_count() * num_digits {
            self.errors.push(format!(
                "givens string has length {}, expected {}",
                givens.len(),
                cu.cell_count() * num_digits
            ));
            return self;
        }

        let chunks = givens.chars().chunks(num_digits);
        self.givens.extend(
            chunks
                .into_iter()
                .enumerate()
                .filter_map(|(index, chunk)| {
                    let value = chunk.collect::<String>().parse::<usize>().ok()?;
                    if value == 0 {
                        None
                    } else {
                        Some((cu.cell_index(index), value))
                    }
                }),
        );
        self
    }

    /// The standard step set, in the order the propagation loop runs them.
    fn standard_logic() -> Vec<Arc<dyn LogicalStep>> {
        vec![
            Arc::new(HiddenSingle),
            Arc::new(StepConstraints),
            Arc::new(SimpleCellForcing),
        ]
    }

    /// Builds the solver, running the full setup sequence.
    pub fn build(self) -> Result<Solver, String> {
        if !self.errors.is_empty() {
            return Err(self.errors.join(", "));
        }

        // Replace constraints that prefer to act as smaller primitives.
        let mut constraints: Vec<Arc<dyn Constraint>> = Vec::new();
        for constraint in self.constraints {
            match constraint.split_to_primitives(self.size) {
                Some(primitives) => constraints.extend(primitives),
                None => constraints.push(constraint),
            }
        }

        let mut board = Board::new(self.size, &self.regions, constraints);
        board.finalize_constraints()?;

        for (cell, value) in self.givens {
            if !board.cell(cell).is_solved() && !board.set_value(cell, value) {
                return Err(format!("failed to set given {}{}", value, cell));
            }
        }

        board.init_constraints()?;

        let mut logical_steps = Self::standard_logic();
        logical_steps.extend(self.logical_steps);

        let logical_solve_steps = logical_steps
            .iter()
            .cloned()
            .filter(|step| step.is_active_during_logical_solves())
            .collect();
        let brute_force_steps = logical_steps
            .iter()
            .cloned()
            .filter(|step| step.is_active_during_brute_force_solves())
            .collect();

        Ok(Solver::from_parts(
            board,
            logical_solve_steps,
            brute_force_steps,
        ))
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new(9)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_build() {
        let solver = SolverBuilder::default().build().unwrap();
        let board = solver.board();
        assert_eq!(board.size(), 9);
        assert_eq!(board.groups().len(), 27);
        assert_eq!(board.solved_count(), 0);
    }

    #[test]
    fn test_no_regions() {
        let solver = SolverBuilder::default().with_no_regions().build().unwrap();
        assert_eq!(solver.board().groups().len(), 18);
    }

    #[test]
    fn test_givens_string() {
        let solver = SolverBuilder::default()
            .with_givens_string(
                "123000000000000000000000000000000000000000000000000000000000000000000000000000000",
            )
            .build()
            .unwrap();
        let cu = solver.cell_utility();
        assert_eq!(solver.board().cell(cu.cell(0, 0)).value(), 1);
        assert_eq!(solver.board().cell(cu.cell(0, 1)).value(), 2);
        assert_eq!(solver.board().cell(cu.cell(0, 2)).value(), 3);
        assert!(!solver.board().cell(cu.cell(0, 3)).is_solved());
        // Givens cascade through the row.
        assert_eq!(solver.board().cell(cu.cell(0, 3)).min(), 4);
    }

    #[test]
    fn test_bad_givens_string() {
        assert!(SolverBuilder::default()
            .with_givens_string("123")
            .build()
            .is_err());
    }

    #[test]
    fn test_conflicting_givens() {
        let cu = CellUtility::new(9);
        let result = SolverBuilder::default()
            .with_given(cu.cell(0, 0), 1)
            .with_given(cu.cell(0, 1), 1)
            .build();
        assert!(result.is_err());
    }
}
