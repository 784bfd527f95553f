//! Contains [`ClassLineConstraint`], the entropic and modular line rules.

use std::any::Any;
use std::sync::Arc;

use sudoku_engine_lib::prelude::*;

/// How values are partitioned into the three classes of the line rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueClassifier {
    /// Low/middle/high bands: class `(v - 1) / ceil(size / 3)`.
    Entropic,
    /// Residue classes: `v mod 3`.
    Modular,
}

impl ValueClassifier {
    fn class(self, value: usize, size: usize) -> usize {
        match self {
            ValueClassifier::Entropic => {
                let band = (size + 2) / 3;
                (value - 1) / band
            }
            ValueClassifier::Modular => value % 3,
        }
    }
}

/// A line where any window of three consecutive cells covers three
/// different value classes.
///
/// Equivalently, cells whose distance along the line is 1 or 2 hold values
/// of different classes, and cells a multiple of 3 apart hold the same
/// class. Everything is carried by weak links, so the rule never needs
/// enforcement or logic steps; lines longer than three cells split into
/// overlapping triples, which imply the multiple-of-3 relation through the
/// shared cells.
#[derive(Debug)]
pub struct ClassLineConstraint {
    specific_name: String,
    classifier: ValueClassifier,
    cells: Vec<CellIndex>,
}

impl ClassLineConstraint {
    pub fn entropic(cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("Entropic Line at {}", cells[0]),
            classifier: ValueClassifier::Entropic,
            cells,
        }
    }

    pub fn modular(cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("Modular Line at {}", cells[0]),
            classifier: ValueClassifier::Modular,
            cells,
        }
    }

    fn with_cells(&self, cells: Vec<CellIndex>) -> Self {
        match self.classifier {
            ValueClassifier::Entropic => Self::entropic(cells),
            ValueClassifier::Modular => Self::modular(cells),
        }
    }
}

impl Constraint for ClassLineConstraint {
    fn name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_weak_links(&self, board: &Board) -> Vec<(CandidateIndex, CandidateIndex)> {
        let size = board.size();
        let mut links = Vec::new();
        for index0 in 0..self.cells.len() {
            for index1 in index0 + 1..self.cells.len() {
                let same_class_required = (index1 - index0) % 3 == 0;
                for value0 in 1..=size {
                    for value1 in 1..=size {
                        let same_class = self.classifier.class(value0, size)
                            == self.classifier.class(value1, size);
                        if same_class_required != same_class {
                            links.push((
                                self.cells[index0].candidate(value0),
                                self.cells[index1].candidate(value1),
                            ));
                        }
                    }
                }
            }
        }
        links
    }

    fn split_to_primitives(&self, _size: usize) -> Option<Vec<Arc<dyn Constraint>>> {
        if self.cells.len() <= 3 {
            return None;
        }
        Some(
            self.cells
                .windows(3)
                .map(|window| {
                    Arc::new(self.with_cells(window.to_vec())) as Arc<dyn Constraint>
                })
                .collect(),
        )
    }

    fn needs_enforce(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
