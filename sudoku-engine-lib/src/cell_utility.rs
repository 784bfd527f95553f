//! Contains [`CellUtility`], size-carrying helpers for cells and candidates.

use crate::prelude::*;
use itertools::Itertools;

/// Helpers for creating, iterating, parsing, and naming cells.
///
/// Most operations need the board size; carrying it in this struct avoids
/// threading it through every call site.
#[derive(Copy, Clone, Debug)]
pub struct CellUtility {
    size: usize,
}

impl CellUtility {
    /// Creates a new instance for the given board size.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// The board size.
    pub fn size(self) -> usize {
        self.size
    }

    /// The number of cells on the board.
    pub fn cell_count(self) -> usize {
        self.size * self.size
    }

    /// The number of candidates on the board.
    pub fn candidate_count(self) -> usize {
        self.cell_count() * self.size
    }

    /// Creates a [`CellIndex`] from 0-indexed row and column.
    pub fn cell(self, row: usize, column: usize) -> CellIndex {
        CellIndex::from_rc(row, column, self.size)
    }

    /// Creates a [`CellIndex`] from a flat index.
    pub fn cell_index(self, index: usize) -> CellIndex {
        CellIndex::new(index, self.size)
    }

    /// Creates a [`CandidateIndex`] from a cell and value.
    pub fn candidate(self, cell: CellIndex, value: usize) -> CandidateIndex {
        CandidateIndex::from_cv(cell, value)
    }

    /// Creates a [`CandidateIndex`] from a flat index.
    pub fn candidate_index(self, index: usize) -> CandidateIndex {
        CandidateIndex::new(index, self.size)
    }

    /// Iterates all cells in row-major order.
    pub fn all_cells(self) -> impl Iterator<Item = CellIndex> {
        (0..self.cell_count()).map(move |index| self.cell_index(index))
    }

    /// Iterates all candidates in index order.
    pub fn all_candidates(self) -> impl Iterator<Item = CandidateIndex> {
        (0..self.candidate_count()).map(move |index| self.candidate_index(index))
    }

    /// Parses a `;`-separated list of cell groups.
    ///
    /// Each group is a concatenation of `rXcY` segments with 1-indexed
    /// coordinates. Rows and columns accept comma lists and dash ranges, so
    /// `r1c1r2c2`, `r1-3c5`, and `r1,3c2` are all valid groups.
    ///
    /// # Example
    /// ```
    /// # use sudoku_engine_lib::prelude::*;
    /// let cu = CellUtility::new(9);
    /// let groups = cu.parse_cell_groups("r2c3;r3c4r4c5").unwrap();
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!(groups[0], vec![cu.cell(1, 2)]);
    /// assert_eq!(groups[1], vec![cu.cell(2, 3), cu.cell(3, 4)]);
    ///
    /// let groups = cu.parse_cell_groups("r1-3c1").unwrap();
    /// assert_eq!(groups[0], vec![cu.cell(0, 0), cu.cell(1, 0), cu.cell(2, 0)]);
    /// ```
    pub fn parse_cell_groups(self, text: &str) -> Result<Vec<Vec<CellIndex>>, String> {
        let mut result = Vec::new();

        for group_text in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            result.push(self.parse_cell_group(group_text)?);
        }

        Ok(result)
    }

    fn parse_cell_group(self, group_text: &str) -> Result<Vec<CellIndex>, String> {
        let err = || format!("Invalid cell group: {}", group_text);
        if !group_text.is_ascii() {
            return Err(err());
        }

        let bytes = group_text.to_ascii_lowercase().into_bytes();
        let mut cells = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            if bytes[pos] != b'r' {
                return Err(err());
            }
            pos += 1;
            let (rows, next) = self.parse_number_list(&bytes, pos).ok_or_else(err)?;
            pos = next;
            if pos >= bytes.len() || bytes[pos] != b'c' {
                return Err(err());
            }
            pos += 1;
            let (columns, next) = self.parse_number_list(&bytes, pos).ok_or_else(err)?;
            pos = next;

            for &row in &rows {
                for &column in &columns {
                    if row == 0 || column == 0 || row > self.size || column > self.size {
                        return Err(err());
                    }
                    cells.push(self.cell(row - 1, column - 1));
                }
            }
        }

        if cells.is_empty() {
            return Err(err());
        }
        Ok(cells)
    }

    // Parses "3", "1,3,5", or "2-4" (combinations allowed) starting at pos.
    fn parse_number_list(self, bytes: &[u8], mut pos: usize) -> Option<(Vec<usize>, usize)> {
        let mut values = Vec::new();
        loop {
            let (start, next) = Self::parse_number(bytes, pos)?;
            pos = next;
            if pos < bytes.len() && bytes[pos] == b'-' {
                let (end, next) = Self::parse_number(bytes, pos + 1)?;
                pos = next;
                if end < start {
                    return None;
                }
                values.extend(start..=end);
            } else {
                values.push(start);
            }

            if pos < bytes.len() && bytes[pos] == b',' {
                pos += 1;
            } else {
                break;
            }
        }
        Some((values, pos))
    }

    fn parse_number(bytes: &[u8], mut pos: usize) -> Option<(usize, usize)> {
        let start = pos;
        let mut value = 0usize;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            value = value * 10 + (bytes[pos] - b'0') as usize;
            pos += 1;
        }
        if pos == start {
            None
        } else {
            Some((value, pos))
        }
    }

    /// All candidate pairs for each value within a set of cells.
    ///
    /// Feeding these pairs to the weak-link graph makes the cells mutually
    /// exclusive, which is the link form of a non-repeat group.
    pub fn candidate_pairs(self, cells: &[CellIndex]) -> Vec<(CandidateIndex, CandidateIndex)> {
        let mut result = Vec::new();
        for value in 1..=self.size {
            for (&cell0, &cell1) in cells.iter().tuple_combinations() {
                result.push((self.candidate(cell0, value), self.candidate(cell1, value)));
            }
        }
        result
    }

    /// A compact description of a cell list, such as `r1c123` or
    /// `r12c1,r3c4`.
    ///
    /// # Example
    /// ```
    /// # use sudoku_engine_lib::prelude::*;
    /// let cu = CellUtility::new(9);
    /// let cells = vec![cu.cell(0, 0), cu.cell(0, 1), cu.cell(0, 2)];
    /// assert_eq!(cu.compact_name(&cells), "r1c123");
    /// ```
    pub fn compact_name(self, cells: &[CellIndex]) -> String {
        if cells.is_empty() {
            return String::new();
        }
        if cells.len() == 1 {
            return cells[0].to_string();
        }

        let separator = if self.size <= 9 { "" } else { "," };
        let cells: Vec<(usize, usize)> = cells.iter().sorted().map(|cell| cell.rc()).collect();

        // All in one column: r123c1
        if cells.iter().all(|&(_, column)| column == cells[0].1) {
            return format!(
                "r{}c{}",
                cells.iter().map(|&(row, _)| row + 1).join(separator),
                cells[0].1 + 1
            );
        }

        // Group rows that share the same column pattern: r13c57,r2c6
        let mut columns_per_row: Vec<Vec<usize>> = vec![Vec::new(); self.size];
        for &(row, column) in &cells {
            columns_per_row[row].push(column + 1);
        }

        let mut groups: Vec<String> = Vec::new();
        for row in 0..self.size {
            if columns_per_row[row].is_empty() {
                continue;
            }

            let columns = std::mem::take(&mut columns_per_row[row]);
            let mut rows_in_group = vec![row + 1];
            for other in row + 1..self.size {
                if columns_per_row[other] == columns {
                    rows_in_group.push(other + 1);
                    columns_per_row[other].clear();
                }
            }

            groups.push(format!(
                "r{}c{}",
                rows_in_group.iter().join(separator),
                columns.iter().join(separator)
            ));
        }

        groups.join(",")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_single_cells() {
        let cu = CellUtility::new(9);
        let groups = cu.parse_cell_groups("r1c1;r9c9").unwrap();
        assert_eq!(groups, vec![vec![cu.cell(0, 0)], vec![cu.cell(8, 8)]]);
    }

    #[test]
    fn test_parse_ranges_and_lists() {
        let cu = CellUtility::new(9);
        let groups = cu.parse_cell_groups("r1c1-3;r1,3c5").unwrap();
        assert_eq!(
            groups[0],
            vec![cu.cell(0, 0), cu.cell(0, 1), cu.cell(0, 2)]
        );
        assert_eq!(groups[1], vec![cu.cell(0, 4), cu.cell(2, 4)]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let cu = CellUtility::new(9);
        assert!(cu.parse_cell_groups("c1r1").is_err());
        assert!(cu.parse_cell_groups("r0c1").is_err());
        assert!(cu.parse_cell_groups("r1c10").is_err());
        assert!(cu.parse_cell_groups("r1").is_err());
        assert!(cu.parse_cell_groups("r1cx").is_err());
    }

    #[test]
    fn test_candidate_pairs() {
        let cu = CellUtility::new(9);
        let cells = vec![cu.cell(0, 0), cu.cell(0, 1), cu.cell(0, 2)];
        let pairs = cu.candidate_pairs(&cells);
        assert_eq!(pairs.len(), 27);
        assert!(pairs.contains(&(cu.cell(0, 0).candidate(4), cu.cell(0, 2).candidate(4))));
    }

    #[test]
    fn test_compact_name() {
        let cu = CellUtility::new(9);
        assert_eq!(cu.compact_name(&[cu.cell(3, 4)]), "r4c5");
        assert_eq!(
            cu.compact_name(&[cu.cell(0, 0), cu.cell(1, 0), cu.cell(2, 0)]),
            "r123c1"
        );
        assert_eq!(
            cu.compact_name(&[cu.cell(0, 4), cu.cell(0, 6), cu.cell(2, 4), cu.cell(2, 6)]),
            "r13c57"
        );
    }
}
