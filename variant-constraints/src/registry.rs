//! Contains [`ConstraintRegistry`]: construction of constraints from
//! `(console name, options string)` pairs.

use std::sync::Arc;

use sudoku_engine_lib::prelude::*;

use crate::chess_constraint::ChessConstraint;
use crate::class_line_constraint::ClassLineConstraint;
use crate::clue_parser::ClueParser;
use crate::diagonal_constraint::DiagonalConstraint;
use crate::disjoint_group_constraint::{DisjointGroupConstraint, DisjointGroupsConstraint};
use crate::equal_sums_constraint::EqualSumsConstraint;
use crate::greater_sum_constraint::GreaterSumConstraint;
use crate::indexer_constraint::{IndexerConstraint, IndexerKind};
use crate::orthogonal_pairs_constraint::{
    OrthogonalMarker, OrthogonalPairsConstraint, PairRelation,
};
use crate::palindrome_constraint::PalindromeConstraint;
use crate::self_taxicab_constraint::SelfTaxicabConstraint;
use crate::skyscraper_constraint::SkyscraperConstraint;
use crate::xsum_constraint::XSumConstraint;

type BuildFn = fn(&str, usize) -> Result<Vec<Arc<dyn Constraint>>, String>;

/// One registered constraint type.
pub struct ConstraintRegistration {
    console_name: &'static str,
    display_name: &'static str,
    build: BuildFn,
}

impl ConstraintRegistration {
    /// The short name used on the command line and in puzzle files.
    pub fn console_name(&self) -> &'static str {
        self.console_name
    }

    /// The human-readable name.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Builds instances from an options string.
    pub fn build(
        &self,
        options: &str,
        size: usize,
    ) -> Result<Vec<Arc<dyn Constraint>>, String> {
        (self.build)(options, size)
    }
}

/// The lookup table external drivers use to turn textual puzzle
/// descriptions into constraint instances. Option parsing failures
/// surface here, at construction, never during propagation.
pub struct ConstraintRegistry {
    registrations: Vec<ConstraintRegistration>,
}

impl ConstraintRegistry {
    /// A registry containing every constraint in this crate.
    pub fn standard() -> Self {
        let registrations = vec![
            reg("king", "Anti-King", build_king),
            reg("knight", "Anti-Knight", build_knight),
            reg("dpos", "Diagonal+", build_diagonal_positive),
            reg("dneg", "Diagonal-", build_diagonal_negative),
            reg("djg", "Disjoint Groups", build_disjoint_groups),
            reg("palindrome", "Palindrome", build_palindrome),
            reg("entrol", "Entropic Line", build_entropic_line),
            reg("modl", "Modular Line", build_modular_line),
            reg("skyscraper", "Skyscraper", build_skyscraper),
            reg("xsum", "X-Sum", build_xsum),
            reg("sum", "Sum", build_sum_markers),
            reg("difference", "Difference", build_difference_markers),
            reg("ratio", "Ratio", build_ratio_markers),
            reg("gtsum", "Greater Sum", build_greater_sum),
            reg("doublearrow", "Double Arrow", build_double_arrow),
            reg("zipper", "Zipper", build_zipper),
            reg("selftaxi", "Self-Taxicab", build_self_taxicab),
            reg("rowindexer", "Row Indexer", build_row_indexer),
            reg("colindexer", "Column Indexer", build_column_indexer),
            reg("boxindexer", "Box Indexer", build_box_indexer),
        ];
        Self { registrations }
    }

    /// All registrations, in registration order.
    pub fn registrations(&self) -> &[ConstraintRegistration] {
        &self.registrations
    }

    /// Looks up a registration by console name, case-insensitively.
    pub fn find(&self, console_name: &str) -> Option<&ConstraintRegistration> {
        self.registrations
            .iter()
            .find(|registration| registration.console_name.eq_ignore_ascii_case(console_name))
    }

    /// Builds the constraints for one `(console name, options)` pair.
    pub fn build(
        &self,
        console_name: &str,
        options: &str,
        size: usize,
    ) -> Result<Vec<Arc<dyn Constraint>>, String> {
        let registration = self
            .find(console_name)
            .ok_or_else(|| format!("Unknown constraint: {}", console_name))?;
        registration.build(options, size)
    }
}

impl Default for ConstraintRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn reg(
    console_name: &'static str,
    display_name: &'static str,
    build: BuildFn,
) -> ConstraintRegistration {
    ConstraintRegistration {
        console_name,
        display_name,
        build,
    }
}

fn one(constraint: impl Constraint + 'static) -> Vec<Arc<dyn Constraint>> {
    vec![Arc::new(constraint)]
}

fn require_no_options(options: &str, name: &str) -> Result<(), String> {
    if options.trim().is_empty() {
        Ok(())
    } else {
        Err(format!("{} takes no options", name))
    }
}

fn parse_groups(options: &str, size: usize) -> Result<Vec<Vec<CellIndex>>, String> {
    let groups = CellUtility::new(size).parse_cell_groups(options)?;
    if groups.is_empty() {
        return Err("expected at least one cell group".to_owned());
    }
    Ok(groups)
}

fn build_king(options: &str, _size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    require_no_options(options, "king")?;
    Ok(one(ChessConstraint::anti_king()))
}

fn build_knight(options: &str, _size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    require_no_options(options, "knight")?;
    Ok(one(ChessConstraint::anti_knight()))
}

fn build_diagonal_positive(
    options: &str,
    size: usize,
) -> Result<Vec<Arc<dyn Constraint>>, String> {
    require_no_options(options, "dpos")?;
    Ok(one(DiagonalConstraint::positive(size)))
}

fn build_diagonal_negative(
    options: &str,
    size: usize,
) -> Result<Vec<Arc<dyn Constraint>>, String> {
    require_no_options(options, "dneg")?;
    Ok(one(DiagonalConstraint::negative(size)))
}

fn build_disjoint_groups(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let options = options.trim();
    if options.is_empty() {
        return Ok(one(DisjointGroupsConstraint));
    }

    let offset: usize = options
        .parse()
        .map_err(|_| format!("Invalid disjoint group index: {}", options))?;
    if offset == 0 || offset > size {
        return Err(format!("Disjoint group index out of range: {}", offset));
    }
    Ok(one(DisjointGroupConstraint::new(offset - 1)))
}

fn build_palindrome(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let groups = parse_groups(options, size)?;
    let mut constraints = Vec::new();
    for cells in groups {
        if cells.len() < 2 {
            return Err("a palindrome needs at least two cells".to_owned());
        }
        constraints.push(Arc::new(PalindromeConstraint::new(cells)) as Arc<dyn Constraint>);
    }
    Ok(constraints)
}

fn build_line_class(
    options: &str,
    size: usize,
    make: fn(Vec<CellIndex>) -> ClassLineConstraint,
) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let groups = parse_groups(options, size)?;
    let mut constraints = Vec::new();
    for cells in groups {
        if cells.len() < 2 {
            return Err("a line needs at least two cells".to_owned());
        }
        constraints.push(Arc::new(make(cells)) as Arc<dyn Constraint>);
    }
    Ok(constraints)
}

fn build_entropic_line(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    build_line_class(options, size, ClassLineConstraint::entropic)
}

fn build_modular_line(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    build_line_class(options, size, ClassLineConstraint::modular)
}

fn build_skyscraper(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let clues = ClueParser::new(size).parse_list(options)?;
    let mut constraints = Vec::new();
    for clue in clues {
        if clue.value == 0 || clue.value > size {
            return Err(format!("Skyscraper clue out of range: {}", clue.value));
        }
        constraints
            .push(Arc::new(SkyscraperConstraint::new(clue.value, clue.cells)) as Arc<dyn Constraint>);
    }
    Ok(constraints)
}

fn build_xsum(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let clues = ClueParser::new(size).parse_list(options)?;
    Ok(clues
        .into_iter()
        .map(|clue| Arc::new(XSumConstraint::new(clue.value, clue.cells)) as Arc<dyn Constraint>)
        .collect())
}

// Shared options grammar for the adjacent-pair markers: a marker value,
// then cell pairs, with an optional `neg` token enabling the negative
// rule, e.g. `5;r1c1r1c2;neg`.
fn build_markers(
    options: &str,
    size: usize,
    display: &str,
    make_relation: fn(usize) -> PairRelation,
) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let mut value: Option<usize> = None;
    let mut negative = false;
    let mut group_parts: Vec<&str> = Vec::new();

    for part in options.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        if part.eq_ignore_ascii_case("neg") {
            negative = true;
        } else if let Ok(parsed) = part.parse::<usize>() {
            if value.replace(parsed).is_some() {
                return Err(format!("{} has more than one marker value", display));
            }
        } else {
            group_parts.push(part);
        }
    }

    let value = value.ok_or_else(|| format!("{} needs a marker value", display))?;
    let relation = make_relation(value);

    let mut markers = Vec::new();
    let cu = CellUtility::new(size);
    for part in group_parts {
        let groups = cu.parse_cell_groups(part)?;
        for cells in groups {
            if cells.len() != 2 || !cells[0].is_orthogonally_adjacent(cells[1]) {
                return Err(format!(
                    "{} markers connect two orthogonally adjacent cells",
                    display
                ));
            }
            markers.push(OrthogonalMarker::new(relation, cells[0], cells[1]));
        }
    }

    if markers.is_empty() && !negative {
        return Err(format!("{} needs markers or the neg option", display));
    }

    let name = format!("{} {}", display, value);
    let constraint = if negative {
        OrthogonalPairsConstraint::with_negative(&name, markers, vec![relation])
    } else {
        OrthogonalPairsConstraint::from_markers(&name, markers)
    };
    Ok(one(constraint))
}

fn build_sum_markers(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    build_markers(options, size, "Sum", PairRelation::Sum)
}

fn build_difference_markers(
    options: &str,
    size: usize,
) -> Result<Vec<Arc<dyn Constraint>>, String> {
    build_markers(options, size, "Difference", PairRelation::Difference)
}

fn build_ratio_markers(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    build_markers(options, size, "Ratio", PairRelation::Ratio)
}

fn build_greater_sum(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let groups = parse_groups(options, size)?;
    if groups.len() != 2 {
        return Err("gtsum expects exactly two cell groups".to_owned());
    }
    let mut groups = groups.into_iter();
    let greater = groups.next().unwrap_or_default();
    let smaller = groups.next().unwrap_or_default();
    Ok(one(GreaterSumConstraint::new(greater, smaller)))
}

fn build_double_arrow(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let groups = parse_groups(options, size)?;
    let mut constraints = Vec::new();
    for cells in groups {
        if cells.len() < 3 {
            return Err("a double arrow needs at least three cells".to_owned());
        }
        constraints
            .push(Arc::new(EqualSumsConstraint::double_arrow(cells)) as Arc<dyn Constraint>);
    }
    Ok(constraints)
}

fn build_zipper(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let groups = parse_groups(options, size)?;
    let mut constraints = Vec::new();
    for cells in groups {
        if cells.len() < 2 {
            return Err("a zipper needs at least two cells".to_owned());
        }
        constraints.push(Arc::new(EqualSumsConstraint::zipper(cells)) as Arc<dyn Constraint>);
    }
    Ok(constraints)
}

fn build_self_taxicab(options: &str, _size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    require_no_options(options, "selftaxi")?;
    Ok(one(SelfTaxicabConstraint))
}

fn build_indexer(
    options: &str,
    size: usize,
    kind: IndexerKind,
) -> Result<Vec<Arc<dyn Constraint>>, String> {
    let cells: Vec<CellIndex> = parse_groups(options, size)?.into_iter().flatten().collect();
    Ok(one(IndexerConstraint::new(kind, cells)))
}

fn build_row_indexer(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    build_indexer(options, size, IndexerKind::Row)
}

fn build_column_indexer(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    build_indexer(options, size, IndexerKind::Column)
}

fn build_box_indexer(options: &str, size: usize) -> Result<Vec<Arc<dyn Constraint>>, String> {
    build_indexer(options, size, IndexerKind::Box)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_every_console_name_resolves() {
        let registry = ConstraintRegistry::standard();
        for name in [
            "xsum",
            "king",
            "knight",
            "palindrome",
            "entrol",
            "modl",
            "dpos",
            "dneg",
            "djg",
            "difference",
            "ratio",
            "sum",
            "skyscraper",
            "gtsum",
            "doublearrow",
            "zipper",
            "selftaxi",
            "rowindexer",
            "colindexer",
            "boxindexer",
        ] {
            assert!(registry.find(name).is_some(), "{} not registered", name);
        }
        assert!(registry.find("XSUM").is_some());
        assert!(registry.find("bogus").is_none());
    }

    #[test]
    fn test_build_simple_constraints() {
        let registry = ConstraintRegistry::standard();
        assert_eq!(registry.build("king", "", 9).unwrap().len(), 1);
        assert_eq!(registry.build("djg", "", 9).unwrap().len(), 1);
        assert_eq!(registry.build("djg", "3", 9).unwrap().len(), 1);
        assert_eq!(
            registry
                .build("palindrome", "r1c1r1c2r1c3;r5c5r5c6", 9)
                .unwrap()
                .len(),
            2
        );
        assert_eq!(registry.build("xsum", "10r1c0;12r0c3", 9).unwrap().len(), 2);
    }

    #[test]
    fn test_bad_options_fail_at_construction() {
        let registry = ConstraintRegistry::standard();
        assert!(registry.build("king", "r1c1", 9).is_err());
        assert!(registry.build("djg", "10", 9).is_err());
        assert!(registry.build("palindrome", "", 9).is_err());
        assert!(registry.build("skyscraper", "3r1c1", 9).is_err());
        assert!(registry.build("skyscraper", "10r1c0", 9).is_err());
        assert!(registry.build("gtsum", "r1c1r1c2", 9).is_err());
        assert!(registry.build("difference", "r1c1r1c2", 9).is_err());
        assert!(registry.build("difference", "1;r1c1r2c2", 9).is_err());
        assert!(registry.build("bogus", "", 9).is_err());
    }

    #[test]
    fn test_marker_options() {
        let registry = ConstraintRegistry::standard();
        assert!(registry.build("difference", "1;r1c1r1c2", 9).is_ok());
        assert!(registry.build("ratio", "2;neg", 9).is_ok());
        assert!(registry.build("sum", "10;r4c4r4c5;neg", 9).is_ok());
        assert!(registry.build("sum", "10;5;r1c1r1c2", 9).is_err());
    }
}
