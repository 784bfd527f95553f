//! Parsing for outside-clue options of the form `<n>r<i>c<j>`.

use regex::Regex;
use sudoku_engine_lib::prelude::*;

/// A parsed outside clue: its value and the line of cells it reads,
/// ordered from the clue side inward.
#[derive(Clone, Debug)]
pub struct OutsideClue {
    pub value: usize,
    pub cells: Vec<CellIndex>,
}

/// Parses `<n>r<i>c<j>` outside-clue options.
///
/// The cell coordinate is 1-indexed and must lie just outside the grid on
/// exactly one axis: row 0 is above the grid, row `size + 1` below, column
/// 0 to the left, column `size + 1` to the right. `10r1c0` on a 9x9 board
/// is a clue of 10 reading row 1 from the left.
#[derive(Clone, Debug)]
pub struct ClueParser {
    size: usize,
    clue_regex: Regex,
}

impl ClueParser {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            clue_regex: Regex::new(r"^(\d+)[rR](\d+)[cC](\d+)$").expect("clue pattern is valid"),
        }
    }

    /// Parses one clue.
    pub fn parse(&self, text: &str) -> Result<OutsideClue, String> {
        let text = text.trim();
        let err = || format!("Invalid outside clue: {}", text);
        let captures = self.clue_regex.captures(text).ok_or_else(err)?;

        let value: usize = captures[1].parse().map_err(|_| err())?;
        let row: usize = captures[2].parse().map_err(|_| err())?;
        let column: usize = captures[3].parse().map_err(|_| err())?;

        let size = self.size;
        let cu = CellUtility::new(size);
        let inside = |coord: usize| (1..=size).contains(&coord);

        let cells: Vec<CellIndex> = if row == 0 && inside(column) {
            (0..size).map(|r| cu.cell(r, column - 1)).collect()
        } else if row == size + 1 && inside(column) {
            (0..size).rev().map(|r| cu.cell(r, column - 1)).collect()
        } else if column == 0 && inside(row) {
            (0..size).map(|c| cu.cell(row - 1, c)).collect()
        } else if column == size + 1 && inside(row) {
            (0..size).rev().map(|c| cu.cell(row - 1, c)).collect()
        } else {
            return Err(err());
        };

        Ok(OutsideClue { value, cells })
    }

    /// Parses a `;`-separated list of clues.
    pub fn parse_list(&self, text: &str) -> Result<Vec<OutsideClue>, String> {
        let clues: Result<Vec<_>, _> = text
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| self.parse(part))
            .collect();
        let clues = clues?;
        if clues.is_empty() {
            return Err("expected at least one outside clue".to_owned());
        }
        Ok(clues)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_left_clue() {
        let parser = ClueParser::new(9);
        let cu = CellUtility::new(9);
        let clue = parser.parse("10r1c0").unwrap();
        assert_eq!(clue.value, 10);
        assert_eq!(clue.cells.len(), 9);
        assert_eq!(clue.cells[0], cu.cell(0, 0));
        assert_eq!(clue.cells[8], cu.cell(0, 8));
    }

    #[test]
    fn test_bottom_clue_reads_upward() {
        let parser = ClueParser::new(9);
        let cu = CellUtility::new(9);
        let clue = parser.parse("3r10c4").unwrap();
        assert_eq!(clue.cells[0], cu.cell(8, 3));
        assert_eq!(clue.cells[8], cu.cell(0, 3));
    }

    #[test]
    fn test_rejects_inside_and_corner_cells() {
        let parser = ClueParser::new(9);
        assert!(parser.parse("3r1c1").is_err());
        assert!(parser.parse("3r0c0").is_err());
        assert!(parser.parse("3r10c10").is_err());
        assert!(parser.parse("r1c0").is_err());
    }
}
