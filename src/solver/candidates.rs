use itertools::structs::Permutations;
use itertools::Itertools;

use crate::config::constant::ANCHOR;

/// Every closed tour over `size` locations that starts at the anchor, in
/// lexicographic order of the interior stops.
///
/// The sequence is lazy and finite: it yields `(size - 1)!` candidates, each
/// built on demand. It is restartable, since iterating it again (or calling
/// [`CandidateTours::iter`]) starts over from the first permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateTours {
    size: usize,
}

impl CandidateTours {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn iter(&self) -> CandidateIter {
        let interior = self.size.saturating_sub(1);
        CandidateIter {
            inner: (1..self.size.max(1)).permutations(interior),
        }
    }
}

impl IntoIterator for CandidateTours {
    type Item = Vec<usize>;
    type IntoIter = CandidateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct CandidateIter {
    inner: Permutations<std::ops::Range<usize>>,
}

impl Iterator for CandidateIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|interior| {
            let mut stops = Vec::with_capacity(interior.len() + 2);
            stops.push(ANCHOR);
            stops.extend(interior);
            stops.push(ANCHOR);
            stops
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_order() {
        let tours: Vec<Vec<usize>> = CandidateTours::new(4).into_iter().collect();
        assert_eq!(
            tours,
            vec![
                vec![0, 1, 2, 3, 0],
                vec![0, 1, 3, 2, 0],
                vec![0, 2, 1, 3, 0],
                vec![0, 2, 3, 1, 0],
                vec![0, 3, 1, 2, 0],
                vec![0, 3, 2, 1, 0],
            ]
        );
    }

    #[test]
    fn yields_factorial_many_and_restarts() {
        let candidates = CandidateTours::new(6);
        assert_eq!(candidates.iter().count(), 120);
        assert_eq!(candidates.iter().next(), Some(vec![0, 1, 2, 3, 4, 5, 0]));
        assert_eq!(candidates.iter().count(), 120);
    }

    #[test]
    fn two_locations_have_one_candidate() {
        let tours: Vec<Vec<usize>> = CandidateTours::new(2).into_iter().collect();
        assert_eq!(tours, vec![vec![0, 1, 0]]);
    }
}
