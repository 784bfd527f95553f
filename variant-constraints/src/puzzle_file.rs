//! A JSON puzzle description and its conversion into a solver.
//!
//! The format is deliberately small: board size, optional region map,
//! a givens string, and a list of `(name, options)` constraint entries
//! resolved through the [`ConstraintRegistry`].
//!
//! ```json
//! {
//!   "size": 9,
//!   "givens": "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//!   "constraints": [
//!     { "name": "king" },
//!     { "name": "xsum", "options": "10r1c0" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use sudoku_engine_lib::prelude::*;

use crate::registry::ConstraintRegistry;

/// One constraint entry of a puzzle description.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PuzzleConstraint {
    pub name: String,
    #[serde(default)]
    pub options: String,
}

/// A complete puzzle description.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PuzzleFile {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default)]
    pub regions: Vec<usize>,
    #[serde(default)]
    pub givens: String,
    #[serde(default)]
    pub constraints: Vec<PuzzleConstraint>,
}

fn default_size() -> usize {
    9
}

impl PuzzleFile {
    /// Parses a puzzle description from JSON.
    pub fn from_json(json: &str) -> Result<PuzzleFile, String> {
        serde_json::from_str(json).map_err(|error| format!("Invalid puzzle JSON: {}", error))
    }

    /// Serializes the description back to JSON.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|error| error.to_string())
    }

    /// Builds a solver from the description using the given registry.
    pub fn to_solver(&self, registry: &ConstraintRegistry) -> Result<Solver, String> {
        if self.size < 2 || self.size > 16 {
            return Err(format!("Unsupported board size: {}", self.size));
        }

        let mut builder = SolverBuilder::new(self.size);
        if !self.regions.is_empty() {
            builder = builder.with_regions(self.regions.clone());
        }
        if !self.givens.is_empty() {
            builder = builder.with_givens_string(&self.givens);
        }
        for entry in &self.constraints {
            for constraint in registry.build(&entry.name, &entry.options, self.size)? {
                builder = builder.with_constraint(constraint);
            }
        }
        builder.build()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_and_build() {
        let json = r#"{
            "size": 9,
            "givens": "100000000000000000000000000000000000000000000000000000000000000000000000000000000",
            "constraints": [
                { "name": "king" },
                { "name": "dneg" }
            ]
        }"#;
        let puzzle = PuzzleFile::from_json(json).unwrap();
        let solver = puzzle.to_solver(&ConstraintRegistry::standard()).unwrap();

        let cu = solver.cell_utility();
        assert_eq!(solver.board().cell(cu.cell(0, 0)).value(), 1);
        // Anti-king and diagonal both remove 1 from r2c2.
        assert!(!solver.board().cell(cu.cell(1, 1)).has(1));
        assert_eq!(solver.board().constraints().len(), 2);
    }

    #[test]
    fn test_defaults() {
        let puzzle = PuzzleFile::from_json("{}").unwrap();
        assert_eq!(puzzle.size, 9);
        assert!(puzzle.givens.is_empty());
        assert!(puzzle.constraints.is_empty());
    }

    #[test]
    fn test_unknown_constraint_errors() {
        let json = r#"{ "constraints": [ { "name": "bogus" } ] }"#;
        let puzzle = PuzzleFile::from_json(json).unwrap();
        assert!(puzzle.to_solver(&ConstraintRegistry::standard()).is_err());
    }

    #[test]
    fn test_round_trip() {
        let puzzle = PuzzleFile {
            size: 9,
            regions: Vec::new(),
            givens: String::new(),
            constraints: vec![PuzzleConstraint {
                name: "xsum".to_owned(),
                options: "10r1c0".to_owned(),
            }],
        };
        let json = puzzle.to_json().unwrap();
        let reparsed = PuzzleFile::from_json(&json).unwrap();
        assert_eq!(reparsed.constraints[0].name, "xsum");
        assert_eq!(reparsed.constraints[0].options, "10r1c0");
    }
}
