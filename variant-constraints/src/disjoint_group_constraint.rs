//! Contains the disjoint-group constraints: cells at the same position
//! within their region cannot repeat.

use std::any::Any;
use std::sync::Arc;

use itertools::Itertools;
use sudoku_engine_lib::prelude::*;

/// One disjoint group: the cell at a fixed within-region offset of every
/// region forms an all-distinct group.
#[derive(Debug)]
pub struct DisjointGroupConstraint {
    specific_name: String,
    offset: usize,
}

impl DisjointGroupConstraint {
    /// Creates the group for one 0-indexed within-region offset.
    pub fn new(offset: usize) -> Self {
        Self {
            specific_name: format!("Disjoint Group {}", offset + 1),
            offset,
        }
    }
}

impl Constraint for DisjointGroupConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_groups(&self, board: &Board) -> Vec<Group> {
        let data = board.data();
        let cells: Vec<CellIndex> = data
            .regions()
            .iter()
            .copied()
            .unique()
            .sorted()
            .filter_map(|region| data.region_cells(region).get(self.offset).copied())
            .collect();

        if cells.len() < 2 {
            return Vec::new();
        }
        vec![Group::new(&self.specific_name, GroupKind::Extra, &cells)]
    }

    fn needs_enforce(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The full disjoint-groups rule: one [`DisjointGroupConstraint`] per
/// within-region offset, board-size many in total.
#[derive(Debug)]
pub struct DisjointGroupsConstraint;

impl Constraint for DisjointGroupsConstraint {
    fn name(&self) -> String {
        "Disjoint Groups".to_owned()
    }

    fn split_to_primitives(&self, size: usize) -> Option<Vec<Arc<dyn Constraint>>> {
        Some(
            (0..size)
                .map(|offset| Arc::new(DisjointGroupConstraint::new(offset)) as Arc<dyn Constraint>)
                .collect(),
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_disjoint_group_cells() {
        let cu = CellUtility::new(9);
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(DisjointGroupConstraint::new(0)))
            .build()
            .unwrap();
        // Offset 0 collects the top-left cell of every box.
        let group = solver
            .board()
            .groups()
            .iter()
            .find(|group| group.kind() == GroupKind::Extra)
            .unwrap();
        assert_eq!(group.len(), 9);
        assert!(group.contains(cu.cell(0, 0)));
        assert!(group.contains(cu.cell(0, 3)));
        assert!(group.contains(cu.cell(3, 0)));
        assert!(group.contains(cu.cell(6, 6)));
    }

    #[test]
    fn test_disjoint_groups_split() {
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(DisjointGroupsConstraint))
            .build()
            .unwrap();
        // 27 standard groups plus one per within-box offset.
        assert_eq!(solver.board().groups().len(), 36);
        assert_eq!(solver.board().constraints().len(), 9);
    }

    #[test]
    fn test_disjoint_group_elimination() {
        let cu = CellUtility::new(9);
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(DisjointGroupsConstraint))
            .with_given(cu.cell(1, 1), 5)
            .build()
            .unwrap();
        // r2c2 is the box-center of box 1; every other box center loses 5.
        assert!(!solver.board().cell(cu.cell(4, 4)).has(5));
        assert!(!solver.board().cell(cu.cell(7, 7)).has(5));
        assert!(solver.board().cell(cu.cell(4, 5)).has(5));
    }
}
