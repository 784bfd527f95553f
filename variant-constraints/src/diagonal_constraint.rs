//! Contains [`DiagonalConstraint`] for the two main diagonals.

use std::any::Any;

use sudoku_engine_lib::prelude::*;

/// Values on a main diagonal cannot repeat.
///
/// The constraint only registers a [`Group`]; the distinctness weak links
/// and hidden-single logic come with group registration.
#[derive(Debug)]
pub struct DiagonalConstraint {
    specific_name: String,
    cells: Vec<CellIndex>,
}

impl DiagonalConstraint {
    /// The diagonal running from the bottom-left to the top-right corner.
    pub fn positive(size: usize) -> Self {
        let cu = CellUtility::new(size);
        Self {
            specific_name: "Diagonal+".to_owned(),
            cells: (0..size).map(|i| cu.cell(size - i - 1, i)).collect(),
        }
    }

    /// The diagonal running from the top-left to the bottom-right corner.
    pub fn negative(size: usize) -> Self {
        let cu = CellUtility::new(size);
        Self {
            specific_name: "Diagonal-".to_owned(),
            cells: (0..size).map(|i| cu.cell(i, i)).collect(),
        }
    }
}

impl Constraint for DiagonalConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_groups(&self, _board: &Board) -> Vec<Group> {
        vec![Group::new(
            &self.specific_name,
            GroupKind::Diagonal,
            &self.cells,
        )]
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
    fn test_diagonal_group_registered() {
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(DiagonalConstraint::negative(9)))
            .build()
            .unwrap();
        assert_eq!(solver.board().groups().len(), 28);
    }

    #[test]
    fn test_diagonal_eliminations() {
        let cu = CellUtility::new(9);
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(DiagonalConstraint::negative(9)))
            .with_given(cu.cell(0, 0), 4)
            .build()
            .unwrap();
        assert!(!solver.board().cell(cu.cell(8, 8)).has(4));

        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(DiagonalConstraint::positive(9)))
            .with_given(cu.cell(8, 0), 4)
            .build()
            .unwrap();
        assert!(!solver.board().cell(cu.cell(0, 8)).has(4));
    }
}
