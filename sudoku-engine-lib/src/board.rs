//! Contains [`Board`], the candidate masks plus everything the propagation
//! engine needs to react to writes.

use bitvec::prelude::*;
use itertools::Itertools;

use crate::prelude::*;
use std::any::Any;
use std::sync::Arc;

/// The mutable solve state: one [`ValueMask`] per cell.
///
/// All metadata (groups, weak links, seen cells, constraints, the memo
/// store) lives in [`BoardData`] behind an `Arc`, so cloning a board for a
/// search branch copies only the masks. [`Board::deep_clone`] exists for the
/// rare case where separate metadata is wanted.
///
/// Every mutation goes through the write API (`set_value`, `keep_mask`,
/// `clear_mask`, `clear_value`, `clear_candidate`, `clear_candidates`) so
/// that the downstream reactions always run: committing a value clears its
/// weak-link neighbors and its seen cells and dispatches
/// [`Constraint::enforce`]; any write that leaves a single candidate in a
/// cell commits that cell in turn. A candidate bit, once cleared, is never
/// set again within a branch.
#[derive(Clone)]
pub struct Board {
    cells: Vec<ValueMask>,
    solved_count: usize,
    data: Arc<BoardData>,
}

/// Immutable-after-finalization metadata shared by all clones of a board.
pub struct BoardData {
    size: usize,
    num_cells: usize,
    num_candidates: usize,
    all_values_mask: ValueMask,
    regions: Vec<usize>,
    groups: Vec<Arc<Group>>,
    groups_by_cell: Vec<Vec<Arc<Group>>>,
    weak_links: Vec<CandidateLinks>,
    total_weak_links: usize,
    seen_cells: Vec<BitVec>,
    constraints: Vec<Arc<dyn Constraint>>,
    memo: Arc<MemoStore>,
    finalized: bool,
}

impl Board {
    /// Creates a board with the given regions and constraints.
    ///
    /// Pass an empty `regions` slice for the default box tiling; a region
    /// vector where some region does not have exactly `size` cells simply
    /// contributes no group for that region.
    ///
    /// The board is not usable until [`Board::finalize_constraints`] has
    /// run; [`SolverBuilder`] drives the full setup sequence.
    pub fn new(size: usize, regions: &[usize], constraints: Vec<Arc<dyn Constraint>>) -> Board {
        let data = BoardData::new(size, regions, constraints);
        Board {
            cells: vec![data.all_values_mask; data.num_cells],
            solved_count: 0,
            data: Arc::new(data),
        }
    }

    /// A finalized board with standard groups and no constraints.
    pub fn standard(size: usize) -> Board {
        let mut board = Board::new(size, &[], Vec::new());
        board
            .finalize_constraints()
            .expect("a board without constraints always finalizes");
        board
    }

    /// Clones the board including its metadata.
    pub fn deep_clone(&self) -> Board {
        Board {
            cells: self.cells.clone(),
            solved_count: self.solved_count,
            data: Arc::new(BoardData::clone(&self.data)),
        }
    }

    /// Completes the one-time setup: registers constraint groups, seeds the
    /// weak-link graph and the seen-cell relation, and applies candidates
    /// that constraints marked as impossible.
    ///
    /// Must be called exactly once, before the board is cloned. Calling it
    /// again is a no-op.
    pub fn finalize_constraints(&mut self) -> Result<(), String> {
        if self.data.finalized {
            return Ok(());
        }

        // Gather constraint contributions while the data is shared-read.
        let shared = self.data.clone();
        let mut extra_groups = Vec::new();
        let mut constraint_links = Vec::new();
        for constraint in shared.constraints() {
            extra_groups.extend(constraint.get_groups(self));
            constraint_links.extend(constraint.get_weak_links(self));
        }
        drop(shared);

        let mut impossible = EliminationList::new();
        {
            let data = Arc::get_mut(&mut self.data)
                .ok_or_else(|| "cannot finalize a board whose data is shared".to_owned())?;
            for group in extra_groups {
                data.add_group(group);
            }
            data.rebuild_groups_by_cell();
            data.init_base_links();
            for (cand0, cand1) in constraint_links {
                if cand0 == cand1 {
                    impossible.add(cand0);
                } else {
                    data.add_weak_link(cand0, cand1);
                }
            }
            data.init_seen_cells();
            data.finalized = true;
        }

        if impossible.execute(self).is_invalid() {
            return Err("a constraint left a cell without candidates".to_owned());
        }

        Ok(())
    }

    /// Runs every constraint's [`Constraint::init_candidates`] in a loop
    /// until none reports a change. Errors on `Invalid`.
    pub fn init_constraints(&mut self) -> Result<(), String> {
        let constraint_count = self.data.constraints().len();

        loop {
            let mut changed = false;

            for index in 0..constraint_count {
                let constraint = Arc::get_mut(&mut self.data).map(|d| d.take_constraint(index));
                let mut constraint = match constraint {
                    Some(constraint) => constraint,
                    None => {
                        return Err("cannot initialize a board whose data is shared".to_owned())
                    }
                };

                let name = constraint.name();
                let result = match Arc::get_mut(&mut constraint) {
                    Some(constraint_mut) => constraint_mut.init_candidates(self),
                    None => return Err(format!("failed to get mutable access to {}", name)),
                };

                match Arc::get_mut(&mut self.data) {
                    Some(d) => d.insert_constraint(index, constraint),
                    None => {
                        return Err("cannot initialize a board whose data is shared".to_owned())
                    }
                }

                match result {
                    LogicResult::Invalid => {
                        return Err(format!("{} found the board invalid", name))
                    }
                    LogicResult::Changed => changed = true,
                    LogicResult::None => {}
                }
            }

            if !changed {
                return Ok(());
            }
        }
    }

    /// Adds a weak link between two candidates, in both directions.
    ///
    /// Only valid while the board metadata is not yet shared (before the
    /// first clone); returns false otherwise. Seeding links after
    /// propagation has begun is not supported.
    pub fn add_weak_link(&mut self, cand0: CandidateIndex, cand1: CandidateIndex) -> bool {
        if cand0 == cand1 {
            return false;
        }
        match Arc::get_mut(&mut self.data) {
            Some(data) => {
                data.add_weak_link(cand0, cand1);
                true
            }
            None => false,
        }
    }

    pub fn data(&self) -> Arc<BoardData> {
        self.data.clone()
    }

    pub fn size(&self) -> usize {
        self.data.size
    }

    pub fn num_cells(&self) -> usize {
        self.data.num_cells
    }

    pub fn num_candidates(&self) -> usize {
        self.data.num_candidates
    }

    pub fn all_values_mask(&self) -> ValueMask {
        self.data.all_values_mask
    }

    pub fn groups(&self) -> &[Arc<Group>] {
        &self.data.groups
    }

    pub fn groups_for_cell(&self, cell: CellIndex) -> &[Arc<Group>] {
        &self.data.groups_by_cell[cell.index()]
    }

    pub fn regions(&self) -> &[usize] {
        &self.data.regions
    }

    pub fn total_weak_links(&self) -> usize {
        self.data.total_weak_links
    }

    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.data.constraints
    }

    /// All registered constraints of a concrete type, for inter-constraint
    /// discovery.
    pub fn constraints_of<T: Any>(&self) -> Vec<&T> {
        self.data
            .constraints
            .iter()
            .filter_map(|constraint| constraint.as_any().downcast_ref::<T>())
            .collect()
    }

    pub fn memo(&self) -> Arc<MemoStore> {
        self.data.memo.clone()
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    pub fn is_solved(&self) -> bool {
        self.solved_count == self.data.num_cells
    }

    pub fn cell_utility(&self) -> CellUtility {
        CellUtility::new(self.data.size)
    }

    pub fn all_cells(&self) -> impl Iterator<Item = CellIndex> {
        self.cell_utility().all_cells()
    }

    pub fn all_cell_masks(&self) -> impl Iterator<Item = (CellIndex, ValueMask)> + '_ {
        self.all_cells().map(move |cell| (cell, self.cell(cell)))
    }

    /// The mask of a cell.
    pub fn cell(&self, cell: CellIndex) -> ValueMask {
        self.cells[cell.index()]
    }

    /// True if the candidate is still possible.
    pub fn has_candidate(&self, candidate: CandidateIndex) -> bool {
        let (cell, value) = candidate.cell_and_value();
        self.cell(cell).has(value)
    }

    /// Commits `value` in `cell` and runs the full cascade: weak-link
    /// closure, seen-cell elimination, and constraint enforcement, each of
    /// which may commit further cells recursively.
    ///
    /// Returns false if the value is not a candidate, the cell is already
    /// committed to a different value, or any cascading write fails.
    /// Committing the same value twice is a success no-op.
    pub fn set_value(&mut self, cell: CellIndex, value: usize) -> bool {
        let current = self.cell(cell);
        if current.is_solved() {
            return current.value() == value;
        }
        if !current.has(value) {
            return false;
        }

        self.cells[cell.index()] = current.with_only(value).solved();
        self.solved_count += 1;

        let data = self.data.clone();
        let cu = self.cell_utility();

        // Weak-link closure for the committed candidate.
        let candidate = cu.candidate(cell, value);
        for linked in data.weak_links_for(candidate).iter() {
            if self.clear_candidate(linked).is_invalid() {
                return false;
            }
        }

        // The committed value leaves every cell that sees this one.
        for other_index in data.seen_for(cell).iter_ones() {
            if self.clear_value(cu.cell_index(other_index), value).is_invalid() {
                return false;
            }
        }
        for constraint in data.constraints() {
            for other in constraint.seen_cells_by_value_mask(cell, ValueMask::single(value)) {
                if other != cell && self.clear_value(other, value).is_invalid() {
                    return false;
                }
            }
        }

        // Direct rule enforcement, which may cascade further writes.
        for constraint in data.constraints() {
            if constraint.needs_enforce() && constraint.enforce(self, cell, value).is_invalid() {
                return false;
            }
        }

        true
    }

    /// Intersects a cell's candidates with `mask`.
    ///
    /// An empty intersection is `Invalid`; a single survivor is committed
    /// via [`Board::set_value`].
    pub fn keep_mask(&mut self, cell: CellIndex, mask: ValueMask) -> LogicResult {
        let current = self.cell(cell);
        if current.is_solved() {
            return if mask.has(current.value()) {
                LogicResult::None
            } else {
                LogicResult::Invalid
            };
        }

        let new_mask = current & mask.unsolved();
        if new_mask == current {
            return LogicResult::None;
        }

        self.cells[cell.index()] = new_mask;
        if new_mask.is_empty() {
            return LogicResult::Invalid;
        }
        if new_mask.is_single() {
            if self.set_value(cell, new_mask.value()) {
                LogicResult::Changed
            } else {
                LogicResult::Invalid
            }
        } else {
            LogicResult::Changed
        }
    }

    /// Removes every value of `mask` from a cell.
    pub fn clear_mask(&mut self, cell: CellIndex, mask: ValueMask) -> LogicResult {
        self.keep_mask(cell, !mask & self.data.all_values_mask)
    }

    /// Removes a single value from a cell.
    pub fn clear_value(&mut self, cell: CellIndex, value: usize) -> LogicResult {
        let current = self.cell(cell);
        if !current.has(value) {
            return LogicResult::None;
        }
        if current.is_solved() {
            // The committed value cannot be removed.
            return LogicResult::Invalid;
        }

        let new_mask = current.without(value);
        self.cells[cell.index()] = new_mask;
        if new_mask.is_empty() {
            return LogicResult::Invalid;
        }
        if new_mask.is_single() {
            if self.set_value(cell, new_mask.value()) {
                LogicResult::Changed
            } else {
                LogicResult::Invalid
            }
        } else {
            LogicResult::Changed
        }
    }

    /// Removes a candidate.
    pub fn clear_candidate(&mut self, candidate: CandidateIndex) -> LogicResult {
        let (cell, value) = candidate.cell_and_value();
        self.clear_value(cell, value)
    }

    /// Removes a batch of candidates, stopping at the first failure.
    pub fn clear_candidates(
        &mut self,
        candidates: impl Iterator<Item = CandidateIndex>,
    ) -> LogicResult {
        let mut result = LogicResult::None;
        for candidate in candidates {
            match self.clear_candidate(candidate) {
                LogicResult::Invalid => return LogicResult::Invalid,
                step => result = result.combine(step),
            }
        }
        result
    }

    /// True if `cell0` and `cell1` may not hold the same value.
    pub fn is_seen(&self, cell0: CellIndex, cell1: CellIndex) -> bool {
        self.data.is_seen(cell0, cell1)
    }

    /// The cells that cannot repeat this cell's value: fellow members of
    /// every group the cell belongs to, plus per-constraint contributions.
    pub fn seen_cells(&self, cell: CellIndex) -> Vec<CellIndex> {
        let cu = self.cell_utility();
        self.data
            .seen_for(cell)
            .iter_ones()
            .map(|index| cu.cell_index(index))
            .collect()
    }

    /// Like [`Board::seen_cells`], extended with the contributions that
    /// apply when the cell's value lies in `mask`.
    pub fn seen_cells_by_value_mask(&self, cell: CellIndex, mask: ValueMask) -> Vec<CellIndex> {
        let mut cells = self.seen_cells(cell);
        for constraint in self.data.constraints() {
            for other in constraint.seen_cells_by_value_mask(cell, mask) {
                if other != cell && !cells.contains(&other) {
                    cells.push(other);
                }
            }
        }
        cells.sort();
        cells
    }

    /// True if the given placements could all hold simultaneously: every
    /// value is still a candidate, no two placements are weak-linked, and
    /// no value repeats within cells that see each other.
    pub fn can_place_digits(&self, placements: &[(CellIndex, usize)]) -> bool {
        for &(cell, value) in placements {
            if !self.cell(cell).has(value) {
                return false;
            }
        }

        for (i, &(cell0, value0)) in placements.iter().enumerate() {
            for &(cell1, value1) in placements.iter().skip(i + 1) {
                if self
                    .data
                    .has_weak_link(cell0.candidate(value0), cell1.candidate(value1))
                {
                    return false;
                }
                if value0 == value1 && self.data.is_seen(cell0, cell1) {
                    return false;
                }
            }
        }

        true
    }
}

impl BoardData {
    fn new(size: usize, regions: &[usize], constraints: Vec<Arc<dyn Constraint>>) -> BoardData {
        let num_cells = size * size;
        let num_candidates = num_cells * size;
        let regions = if regions.len() == num_cells {
            regions.to_vec()
        } else {
            default_regions(size)
        };
        let groups = Self::create_standard_groups(size, &regions);
        let mut data = BoardData {
            size,
            num_cells,
            num_candidates,
            all_values_mask: ValueMask::all(size),
            regions,
            groups,
            groups_by_cell: Vec::new(),
            weak_links: vec![CandidateLinks::new(size); num_candidates],
            total_weak_links: 0,
            seen_cells: vec![bitvec![0; num_cells]; num_cells],
            constraints,
            memo: Arc::new(MemoStore::new()),
            finalized: false,
        };
        data.rebuild_groups_by_cell();
        data
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_cells(&self) -> usize {
        self.num_cells
    }

    pub fn num_candidates(&self) -> usize {
        self.num_candidates
    }

    pub fn all_values_mask(&self) -> ValueMask {
        self.all_values_mask
    }

    pub fn groups(&self) -> &[Arc<Group>] {
        &self.groups
    }

    pub fn groups_for_cell(&self, cell: CellIndex) -> &[Arc<Group>] {
        &self.groups_by_cell[cell.index()]
    }

    pub fn regions(&self) -> &[usize] {
        &self.regions
    }

    /// The cells of one region, in row-major order.
    pub fn region_cells(&self, region: usize) -> Vec<CellIndex> {
        let cu = CellUtility::new(self.size);
        self.regions
            .iter()
            .enumerate()
            .filter(|&(_, &r)| r == region)
            .map(|(index, _)| cu.cell_index(index))
            .collect()
    }

    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }

    pub fn memo(&self) -> Arc<MemoStore> {
        self.memo.clone()
    }

    pub fn weak_links_for(&self, candidate: CandidateIndex) -> &CandidateLinks {
        &self.weak_links[candidate.index()]
    }

    pub fn has_weak_link(&self, cand0: CandidateIndex, cand1: CandidateIndex) -> bool {
        self.weak_links[cand0.index()].is_linked(cand1)
    }

    pub fn total_weak_links(&self) -> usize {
        self.total_weak_links
    }

    pub fn is_seen(&self, cell0: CellIndex, cell1: CellIndex) -> bool {
        self.seen_cells[cell0.index()][cell1.index()]
    }

    fn seen_for(&self, cell: CellIndex) -> &BitVec {
        &self.seen_cells[cell.index()]
    }

    fn take_constraint(&mut self, index: usize) -> Arc<dyn Constraint> {
        self.constraints.remove(index)
    }

    fn insert_constraint(&mut self, index: usize, constraint: Arc<dyn Constraint>) {
        self.constraints.insert(index, constraint);
    }

    fn create_standard_groups(size: usize, regions: &[usize]) -> Vec<Arc<Group>> {
        let cu = CellUtility::new(size);
        let mut groups: Vec<Arc<Group>> = Vec::new();

        for row in 0..size {
            let cells: Vec<CellIndex> = (0..size).map(|column| cu.cell(row, column)).collect();
            groups.push(Arc::new(Group::new(
                &format!("Row {}", row + 1),
                GroupKind::Row,
                &cells,
            )));
        }

        for column in 0..size {
            let cells: Vec<CellIndex> = (0..size).map(|row| cu.cell(row, column)).collect();
            groups.push(Arc::new(Group::new(
                &format!("Column {}", column + 1),
                GroupKind::Column,
                &cells,
            )));
        }

        for region in regions.iter().copied().unique().sorted() {
            let cells: Vec<CellIndex> = regions
                .iter()
                .enumerate()
                .filter(|&(_, &r)| r == region)
                .map(|(index, _)| cu.cell_index(index))
                .collect();
            if cells.len() != size {
                continue;
            }

            let group = Group::new(&format!("Region {}", region + 1), GroupKind::Region, &cells);
            if !groups.iter().any(|existing| existing.cells() == group.cells()) {
                groups.push(Arc::new(group));
            }
        }

        groups
    }

    fn add_group(&mut self, group: Group) {
        if group.len() < 2 || group.len() > self.size {
            return;
        }
        if self
            .groups
            .iter()
            .any(|existing| existing.cells() == group.cells())
        {
            return;
        }
        self.groups.push(Arc::new(group));
    }

    fn rebuild_groups_by_cell(&mut self) {
        let mut groups_by_cell: Vec<Vec<Arc<Group>>> = vec![Vec::new(); self.num_cells];
        for group in &self.groups {
            for cell in group.cells() {
                groups_by_cell[cell.index()].push(group.clone());
            }
        }
        self.groups_by_cell = groups_by_cell;
    }

    fn add_weak_link(&mut self, cand0: CandidateIndex, cand1: CandidateIndex) {
        if self.weak_links[cand0.index()].set(cand1, true) {
            self.total_weak_links += 1;
        }
        if self.weak_links[cand1.index()].set(cand0, true) {
            self.total_weak_links += 1;
        }
    }

    // Same-cell exclusivity plus the candidate pairs of every group.
    fn init_base_links(&mut self) {
        let cu = CellUtility::new(self.size);

        for cell in cu.all_cells() {
            for value0 in 1..self.size {
                for value1 in value0 + 1..=self.size {
                    self.add_weak_link(cu.candidate(cell, value0), cu.candidate(cell, value1));
                }
            }
        }

        let groups = self.groups.clone();
        for group in groups {
            for (cand0, cand1) in cu.candidate_pairs(group.cells()) {
                self.add_weak_link(cand0, cand1);
            }
        }
    }

    // The seen relation: group mates plus static constraint contributions.
    fn init_seen_cells(&mut self) {
        let cu = CellUtility::new(self.size);
        let mut seen = vec![bitvec![0; self.num_cells]; self.num_cells];

        for group in &self.groups {
            for (&cell0, &cell1) in group.cells().iter().tuple_combinations() {
                seen[cell0.index()].set(cell1.index(), true);
                seen[cell1.index()].set(cell0.index(), true);
            }
        }

        for constraint in &self.constraints {
            for cell in cu.all_cells() {
                for other in constraint.seen_cells(cell) {
                    if other != cell {
                        seen[cell.index()].set(other.index(), true);
                        seen[other.index()].set(cell.index(), true);
                    }
                }
            }
        }

        self.seen_cells = seen;
    }
}

impl Clone for BoardData {
    fn clone(&self) -> Self {
        BoardData {
            size: self.size,
            num_cells: self.num_cells,
            num_candidates: self.num_candidates,
            all_values_mask: self.all_values_mask,
            regions: self.regions.clone(),
            groups: self.groups.clone(),
            groups_by_cell: self.groups_by_cell.clone(),
            weak_links: self.weak_links.clone(),
            total_weak_links: self.total_weak_links,
            seen_cells: self.seen_cells.clone(),
            constraints: self.constraints.clone(),
            memo: self.memo.clone(),
            finalized: self.finalized,
        }
    }
}

impl Default for Board {
    /// An empty 9x9 board with standard boxes and no constraints.
    fn default() -> Self {
        Board::standard(9)
    }
}

impl std::hash::Hash for Board {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board").field("cells", &self.cells).finish()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in self.all_cells() {
            let mask = self.cell(cell);
            if mask.is_single() {
                write!(f, "{}", mask.value())?;
            } else {
                write!(f, ".")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_standard_board9() {
        let board = Board::standard(9);
        assert_eq!(board.size(), 9);
        assert_eq!(board.num_cells(), 81);
        assert_eq!(board.num_candidates(), 729);
        assert_eq!(board.groups().len(), 27);
        assert_eq!(
            board.total_weak_links(),
            ((board.size() - 1) * 4 - 4) * board.num_candidates()
        );
    }

    #[test]
    fn test_set_value_cascades() {
        let mut board = Board::standard(9);
        let cu = board.cell_utility();

        assert!(board.set_value(cu.cell(0, 0), 1));
        assert!(board.cell(cu.cell(0, 0)).is_solved());
        assert_eq!(board.cell(cu.cell(0, 0)).value(), 1);

        // Row, column, and box mates lose the value.
        assert!(!board.cell(cu.cell(0, 8)).has(1));
        assert!(!board.cell(cu.cell(8, 0)).has(1));
        assert!(!board.cell(cu.cell(2, 2)).has(1));
        // An unrelated cell keeps it.
        assert!(board.cell(cu.cell(4, 4)).has(1));
    }

    #[test]
    fn test_set_value_twice() {
        let mut board = Board::standard(9);
        let cu = board.cell_utility();
        let cell = cu.cell(3, 3);

        assert!(board.set_value(cell, 5));
        assert!(board.set_value(cell, 5));
        assert!(!board.set_value(cell, 6));
    }

    #[test]
    fn test_set_value_requires_candidate() {
        let mut board = Board::standard(9);
        let cu = board.cell_utility();
        let cell = cu.cell(0, 0);

        assert!(board.clear_value(cell, 7).is_changed());
        assert!(!board.set_value(cell, 7));
    }

    #[test]
    fn test_keep_mask_commits_single() {
        let mut board = Board::standard(9);
        let cu = board.cell_utility();
        let cell = cu.cell(0, 0);

        assert!(board.keep_mask(cell, ValueMask::from_values(&[4, 5])).is_changed());
        assert!(board.keep_mask(cell, ValueMask::single(4)).is_changed());
        assert!(board.cell(cell).is_solved());
        assert_eq!(board.cell(cell).value(), 4);
        // The commit cascaded into the row.
        assert!(!board.cell(cu.cell(0, 5)).has(4));
    }

    #[test]
    fn test_clear_to_empty_is_invalid() {
        let mut board = Board::standard(9);
        let cu = board.cell_utility();
        let cell = cu.cell(0, 0);

        assert!(board.keep_mask(cell, ValueMask::new()).is_invalid());
    }

    #[test]
    fn test_seen_cells_standard() {
        let board = Board::standard(9);
        let cu = board.cell_utility();
        let seen = board.seen_cells(cu.cell(0, 0));
        // 8 row mates + 8 column mates + 4 box mates not already counted.
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_mask_monotonicity() {
        let mut board = Board::standard(9);
        let cu = board.cell_utility();
        let before: Vec<u32> = board.all_cell_masks().map(|(_, m)| m.value_bits()).collect();

        assert!(board.set_value(cu.cell(4, 4), 5));
        let after: Vec<u32> = board.all_cell_masks().map(|(_, m)| m.value_bits()).collect();
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(a & !b, 0, "candidates must never reappear");
        }
    }
}
