//! Contains [`CandidateLinks`], the adjacency row of one candidate in the
//! weak-link graph.

use crate::prelude::*;
use bitvec::prelude::*;

/// The set of candidates linked to a single candidate.
///
/// One bit per candidate on the board. The graph stores one of these per
/// candidate; symmetry is maintained by the insertion path, not by this
/// type.
#[derive(Clone, Debug)]
pub struct CandidateLinks {
    links: BitVec,
    size: usize,
}

impl CandidateLinks {
    /// Creates an empty link set for a board of the given size.
    pub fn new(size: usize) -> Self {
        let num_candidates = size * size * size;
        Self {
            links: bitvec![0; num_candidates],
            size,
        }
    }

    /// True if the candidate is linked.
    pub fn is_linked(&self, candidate: CandidateIndex) -> bool {
        self.links[candidate.index()]
    }

    /// True if no candidates are linked.
    pub fn is_empty(&self) -> bool {
        self.links.not_any()
    }

    /// The number of linked candidates.
    pub fn count(&self) -> usize {
        self.links.count_ones()
    }

    /// Sets the link status of a candidate. Returns true if this changed
    /// the set.
    pub fn set(&mut self, candidate: CandidateIndex, linked: bool) -> bool {
        if self.links[candidate.index()] == linked {
            return false;
        }

        self.links.set(candidate.index(), linked);
        true
    }

    /// Unions another link set into this one.
    pub fn union(&mut self, other: &Self) {
        self.links |= &other.links;
    }

    /// Intersects another link set into this one.
    pub fn intersect(&mut self, other: &Self) {
        self.links &= &other.links;
    }

    /// Iterates the linked candidates in index order.
    pub fn iter(&self) -> impl Iterator<Item = CandidateIndex> + '_ {
        let cu = CellUtility::new(self.size);
        self.links.iter_ones().map(move |index| cu.candidate_index(index))
    }
}

impl std::fmt::Display for CandidateLinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CandidateLinks {{")?;
        for candidate in self.iter() {
            write!(f, " {}", candidate)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_and_iterate() {
        let cu = CellUtility::new(9);
        let mut links = CandidateLinks::new(9);
        assert!(links.is_empty());

        let candidate = cu.cell(0, 1).candidate(5);
        assert!(links.set(candidate, true));
        assert!(!links.set(candidate, true));
        assert!(links.is_linked(candidate));
        assert_eq!(links.count(), 1);
        assert_eq!(links.iter().collect::<Vec<_>>(), vec![candidate]);

        assert!(links.set(candidate, false));
        assert!(links.is_empty());
    }

    #[test]
    fn test_union_intersect() {
        let cu = CellUtility::new(9);
        let a = cu.cell(0, 0).candidate(1);
        let b = cu.cell(0, 0).candidate(2);

        let mut first = CandidateLinks::new(9);
        first.set(a, true);
        let mut second = CandidateLinks::new(9);
        second.set(a, true);
        second.set(b, true);

        let mut union = first.clone();
        union.union(&second);
        assert_eq!(union.count(), 2);

        let mut intersection = second;
        intersection.intersect(&first);
        assert_eq!(intersection.iter().collect::<Vec<_>>(), vec![a]);
    }
}
