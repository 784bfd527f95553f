//! Contains [`Group`], a named list of cells that cannot repeat values.

use crate::cell_index::CellIndex;

/// The origin of a group, used when deriving or describing them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GroupKind {
    Row,
    Column,
    Region,
    Diagonal,
    Extra,
}

/// A group is a list of cells that must hold pairwise distinct values.
///
/// A group whose length equals the board size additionally contains every
/// value exactly once, which is what hidden-single style logic relies on.
/// Smaller groups only contribute mutual-exclusion weak links.
///
/// Rows, columns, and regions are derived from the board dimensions; other
/// groups (diagonals, disjoint groups, ...) are supplied by constraints.
#[derive(Clone, Debug)]
pub struct Group {
    name: String,
    kind: GroupKind,
    cells: Vec<CellIndex>,
}

impl Group {
    /// Creates a group. The cells are kept sorted by index.
    pub fn new(name: &str, kind: GroupKind, cells: &[CellIndex]) -> Group {
        let mut cells = cells.to_vec();
        cells.sort();

        Group {
            name: name.to_owned(),
            kind,
            cells,
        }
    }

    /// The display name of the group, such as `Row 4`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind tag of the group.
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// The member cells, sorted by index.
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    /// The number of member cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the group has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if the group contains the given cell.
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
