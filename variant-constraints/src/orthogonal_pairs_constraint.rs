//! Contains [`OrthogonalPairsConstraint`] for value relations between
//! edge-adjacent cells (sum, difference, and ratio markers), including
//! their negative forms.

use std::any::Any;
use std::collections::HashSet;

use sudoku_engine_lib::prelude::*;

/// A relation a marked pair of adjacent cells must satisfy.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PairRelation {
    /// The two values add up to the marker value.
    Sum(usize),
    /// The two values differ by exactly the marker value.
    Difference(usize),
    /// One value is the marker multiple of the other.
    Ratio(usize),
}

impl PairRelation {
    pub fn is_pair_allowed(self, value0: usize, value1: usize) -> bool {
        match self {
            PairRelation::Sum(n) => value0 + value1 == n,
            PairRelation::Difference(n) => value0.abs_diff(value1) == n,
            PairRelation::Ratio(n) => value0 == n * value1 || value1 == n * value0,
        }
    }

    /// For each value, the mask of partner values satisfying the
    /// relation.
    pub fn partner_masks(self, size: usize) -> Vec<ValueMask> {
        (1..=size)
            .map(|value0| {
                (1..=size)
                    .filter(|&value1| self.is_pair_allowed(value0, value1))
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for PairRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairRelation::Sum(n) => write!(f, "Sum {}", n),
            PairRelation::Difference(n) => write!(f, "Difference {}", n),
            PairRelation::Ratio(n) => write!(f, "Ratio {}", n),
        }
    }
}

/// One marked pair of adjacent cells.
#[derive(Clone, Copy, Debug)]
pub struct OrthogonalMarker {
    relation: PairRelation,
    cell0: CellIndex,
    cell1: CellIndex,
}

impl OrthogonalMarker {
    pub fn new(relation: PairRelation, cell0: CellIndex, cell1: CellIndex) -> Self {
        Self {
            relation,
            cell0,
            cell1,
        }
    }

    fn cell_pair(&self) -> (usize, usize) {
        let (a, b) = (self.cell0.index(), self.cell1.index());
        (a.min(b), a.max(b))
    }
}

/// Markers between adjacent cells, with optional negative relations.
///
/// Marked pairs must satisfy their relation. When negative relations are
/// present, every *unmarked* adjacent pair must violate all of them;
/// markers placed by sibling constraints of this type count as marked, so
/// for example a negative difference constraint never fires across another
/// constraint's ratio dot. Everything reduces to weak links, including the
/// implicit no-repeat of adjacent cells (they always share a row or a
/// column).
#[derive(Debug)]
pub struct OrthogonalPairsConstraint {
    specific_name: String,
    markers: Vec<OrthogonalMarker>,
    negative_relations: Vec<PairRelation>,
}

impl OrthogonalPairsConstraint {
    /// Markers only, no negative rule.
    pub fn from_markers(specific_name: &str, markers: Vec<OrthogonalMarker>) -> Self {
        Self::with_negative(specific_name, markers, Vec::new())
    }

    /// Markers plus negative relations applying to unmarked pairs.
    pub fn with_negative(
        specific_name: &str,
        markers: Vec<OrthogonalMarker>,
        negative_relations: Vec<PairRelation>,
    ) -> Self {
        Self {
            specific_name: specific_name.to_owned(),
            markers,
            negative_relations,
        }
    }

    pub fn markers(&self) -> &[OrthogonalMarker] {
        &self.markers
    }

    fn marked_links(&self, size: usize, links: &mut Vec<(CandidateIndex, CandidateIndex)>) {
        for marker in &self.markers {
            let partners = marker.relation.partner_masks(size);
            for value in 1..=size {
                let allowed = partners[value - 1].without(value);
                if allowed.is_empty() {
                    // The value fits the relation with no partner at all.
                    links.push((marker.cell0.candidate(value), marker.cell0.candidate(value)));
                    links.push((marker.cell1.candidate(value), marker.cell1.candidate(value)));
                    continue;
                }

                let forbidden = !allowed & ValueMask::all(size);
                for other in forbidden {
                    links.push((marker.cell0.candidate(value), marker.cell1.candidate(other)));
                    links.push((marker.cell1.candidate(value), marker.cell0.candidate(other)));
                }
            }
        }
    }

    fn negative_links(&self, board: &Board, links: &mut Vec<(CandidateIndex, CandidateIndex)>) {
        if self.negative_relations.is_empty() {
            return;
        }

        let size = board.size();
        let cu = board.cell_utility();

        // Pairs marked by any constraint of this family are exempt.
        let mut marked_pairs: HashSet<(usize, usize)> = HashSet::new();
        for sibling in board.constraints_of::<OrthogonalPairsConstraint>() {
            marked_pairs.extend(sibling.markers().iter().map(|m| m.cell_pair()));
        }

        let mut related = vec![ValueMask::new(); size];
        for relation in &self.negative_relations {
            for (value, mask) in relation.partner_masks(size).into_iter().enumerate() {
                related[value] = related[value] | mask;
            }
        }

        for cell0 in cu.all_cells() {
            for cell1 in cell0.orthogonal_neighbors() {
                if cell0 >= cell1 {
                    continue;
                }
                if marked_pairs.contains(&(cell0.index(), cell1.index())) {
                    continue;
                }

                for value in 1..=size {
                    let forbidden = related[value - 1].without(value);
                    let allowed = !forbidden & ValueMask::all(size).without(value);
                    if allowed.is_empty() {
                        // No legal neighbor value remains anywhere.
                        links.push((cell0.candidate(value), cell0.candidate(value)));
                        links.push((cell1.candidate(value), cell1.candidate(value)));
                        continue;
                    }
                    for other in forbidden {
                        links.push((cell0.candidate(value), cell1.candidate(other)));
                        links.push((cell1.candidate(value), cell0.candidate(other)));
                    }
                }
            }
        }
    }
}

impl Constraint for OrthogonalPairsConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_weak_links(&self, board: &Board) -> Vec<(CandidateIndex, CandidateIndex)> {
        let mut links = Vec::new();
        self.marked_links(board.size(), &mut links);
        self.negative_links(board, &mut links);
        links
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
    fn test_sum_marker() {
        let cu = CellUtility::new(9);
        let marker = OrthogonalMarker::new(PairRelation::Sum(10), cu.cell(0, 0), cu.cell(0, 1));
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(OrthogonalPairsConstraint::from_markers(
                "X Marker",
                vec![marker],
            )))
            .build()
            .unwrap();

        // 5+5 would repeat in the row, so 5 dies on both cells.
        assert!(!solver.board().cell(cu.cell(0, 0)).has(5));
        assert!(!solver.board().cell(cu.cell(0, 1)).has(5));

        let mut solver = solver;
        assert!(solver.board_mut().set_value(cu.cell(0, 0), 2));
        assert_eq!(solver.board().cell(cu.cell(0, 1)).value(), 8);
    }

    #[test]
    fn test_difference_marker() {
        let cu = CellUtility::new(9);
        let marker =
            OrthogonalMarker::new(PairRelation::Difference(1), cu.cell(4, 4), cu.cell(5, 4));
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(OrthogonalPairsConstraint::from_markers(
                "White Dot",
                vec![marker],
            )))
            .build()
            .unwrap();

        assert!(solver.board_mut().set_value(cu.cell(4, 4), 3));
        assert_eq!(
            solver.board().cell(cu.cell(5, 4)).unsolved(),
            ValueMask::from_values(&[2, 4])
        );
    }

    #[test]
    fn test_negative_ratio() {
        let cu = CellUtility::new(9);
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(OrthogonalPairsConstraint::with_negative(
                "Anti-Ratio",
                Vec::new(),
                vec![PairRelation::Ratio(2)],
            )))
            .build()
            .unwrap();

        // Without a dot, 3 cannot sit next to 6.
        assert!(solver.board_mut().set_value(cu.cell(0, 0), 3));
        assert!(!solver.board().cell(cu.cell(0, 1)).has(6));
        assert!(!solver.board().cell(cu.cell(1, 0)).has(6));
        assert!(solver.board().cell(cu.cell(0, 1)).has(7));
    }

    #[test]
    fn test_negative_skips_sibling_markers() {
        let cu = CellUtility::new(9);
        let marker = OrthogonalMarker::new(PairRelation::Ratio(2), cu.cell(0, 0), cu.cell(0, 1));
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(OrthogonalPairsConstraint::from_markers(
                "Black Dot",
                vec![marker],
            )))
            .with_constraint(Arc::new(OrthogonalPairsConstraint::with_negative(
                "Anti-Ratio",
                Vec::new(),
                vec![PairRelation::Ratio(2)],
            )))
            .build()
            .unwrap();

        // The marked pair still allows the ratio; an unmarked pair does
        // not.
        assert!(solver.board_mut().set_value(cu.cell(0, 0), 3));
        assert!(solver.board().cell(cu.cell(0, 1)).has(6));
        assert!(!solver.board().cell(cu.cell(1, 0)).has(6));
    }
}
