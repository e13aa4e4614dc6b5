//! Tour construction: two heuristics and one exact search.
//!
//! Every algorithm is a pure function of the matrix: it starts and ends at
//! the anchor (index 0) and returns the closed tour with its total distance.

pub mod brute_force;
pub mod candidates;
pub mod traversal;

use std::fmt;
use std::str::FromStr;

pub use brute_force::brute_force;
pub use candidates::CandidateTours;
pub use traversal::{greedy_best_first, nearest_neighbour, SelectionPolicy};

use crate::distance::DistanceMatrix;
use crate::domain::Tour;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    NearestNeighbor,
    GreedyBestFirst,
    BruteForce,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::NearestNeighbor,
        Algorithm::GreedyBestFirst,
        Algorithm::BruteForce,
    ];

    /// Display name, also the only accepted selector string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "Nearest Neighbor",
            Self::GreedyBestFirst => "Greedy Best-First",
            Self::BruteForce => "Brute Force",
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::BruteForce)
    }

    pub fn solve(&self, dm: &DistanceMatrix) -> Result<Tour> {
        match self {
            Self::NearestNeighbor => nearest_neighbour(dm),
            Self::GreedyBestFirst => greedy_best_first(dm),
            Self::BruteForce => brute_force(dm),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| Error::invalid_selection(s))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_names_only() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!(matches!(
            "Random Walk".parse::<Algorithm>(),
            Err(Error::InvalidSelection(name)) if name == "Random Walk"
        ));
        assert!("brute force".parse::<Algorithm>().is_err());
    }

    #[test]
    fn only_brute_force_is_exact() {
        assert!(Algorithm::BruteForce.is_exact());
        assert!(!Algorithm::NearestNeighbor.is_exact());
        assert!(!Algorithm::GreedyBestFirst.is_exact());
    }
}
