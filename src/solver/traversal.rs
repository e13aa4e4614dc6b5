//! Construction heuristics that walk the matrix one nearest stop at a time.
//!
//! Nearest-neighbour and greedy best-first share this traversal and differ
//! only in which edges a [`SelectionPolicy`] admits. Nearest-neighbour treats
//! a zero or negative entry as "no edge", so a genuine zero-distance move can
//! never be taken and may leave the walk stuck with
//! [`Error::MatrixIncomplete`]; greedy best-first accepts any finite entry.
//! Keep the two apart: callers rely on which inputs each one rejects.

use tracing::trace;

use crate::config::constant::ANCHOR;
use crate::distance::DistanceMatrix;
use crate::domain::Tour;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Only strictly positive entries count as edges.
    StrictlyPositive,
    /// Any entry smaller than infinity counts, zero and negative included.
    GlobalMinimum,
}

impl SelectionPolicy {
    fn admits(self, distance: f64) -> bool {
        match self {
            Self::StrictlyPositive => distance > 0.0,
            Self::GlobalMinimum => true,
        }
    }
}

pub fn nearest_neighbour(dm: &DistanceMatrix) -> Result<Tour> {
    traverse(dm, SelectionPolicy::StrictlyPositive)
}

pub fn greedy_best_first(dm: &DistanceMatrix) -> Result<Tour> {
    traverse(dm, SelectionPolicy::GlobalMinimum)
}

/// Walks from the anchor, always moving to the cheapest admissible unvisited
/// location (lowest index on ties), then returns to the anchor. O(n²).
pub fn traverse(dm: &DistanceMatrix, policy: SelectionPolicy) -> Result<Tour> {
    let n = dm.size();
    if n == 0 {
        return Ok(Tour::empty());
    }

    let mut visited = vec![false; n];
    let mut stops = Vec::with_capacity(n + 1);
    let mut total_distance = 0.0;

    let mut current = ANCHOR;
    visited[current] = true;
    stops.push(current);

    for step in 1..n {
        let (next, distance) =
            select_next(dm.row(current), &visited, policy).ok_or(Error::MatrixIncomplete {
                from: current,
                remaining: n - step,
            })?;

        trace!("{:?}: {} -> {} ({})", policy, current, next, distance);
        visited[next] = true;
        stops.push(next);
        total_distance += distance;
        current = next;
    }

    // the diagonal is never consulted, so a lone anchor closes for free
    if current != ANCHOR {
        total_distance += dm.get(current, ANCHOR);
    }
    stops.push(ANCHOR);

    Ok(Tour::new(stops, total_distance))
}

fn select_next(row: &[f64], visited: &[bool], policy: SelectionPolicy) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut best_distance = f64::INFINITY;

    for (j, &distance) in row.iter().enumerate() {
        if visited[j] || !policy.admits(distance) {
            continue;
        }
        if distance < best_distance {
            best_distance = distance;
            best = Some((j, distance));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> DistanceMatrix {
        DistanceMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn four_city_walk() {
        let dm = matrix(&[
            &[0.0, 10.0, 15.0, 20.0],
            &[10.0, 0.0, 35.0, 25.0],
            &[15.0, 35.0, 0.0, 30.0],
            &[20.0, 25.0, 30.0, 0.0],
        ]);
        let tour = nearest_neighbour(&dm).unwrap();
        assert_eq!(tour.stops, vec![0, 1, 3, 2, 0]);
        assert_eq!(tour.total_distance, 80.0);
        assert_eq!(greedy_best_first(&dm).unwrap(), tour);
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        let dm = matrix(&[
            &[0.0, 5.0, 5.0],
            &[5.0, 0.0, 1.0],
            &[5.0, 1.0, 0.0],
        ]);
        assert_eq!(nearest_neighbour(&dm).unwrap().stops, vec![0, 1, 2, 0]);
    }

    #[test]
    fn zero_edge_blocks_nearest_neighbour_but_not_greedy() {
        let dm = matrix(&[
            &[0.0, 1.0, 5.0],
            &[1.0, 0.0, 0.0],
            &[5.0, 0.0, 0.0],
        ]);

        let err = nearest_neighbour(&dm).unwrap_err();
        assert!(matches!(
            err,
            Error::MatrixIncomplete {
                from: 1,
                remaining: 1
            }
        ));

        let tour = greedy_best_first(&dm).unwrap();
        assert_eq!(tour.stops, vec![0, 1, 2, 0]);
        assert_eq!(tour.total_distance, 6.0);
    }

    #[test]
    fn nearest_neighbour_skips_zero_when_alternatives_exist() {
        let dm = matrix(&[
            &[0.0, 0.0, 4.0, 9.0],
            &[3.0, 0.0, 2.0, 2.0],
            &[4.0, 2.0, 0.0, 1.0],
            &[9.0, 2.0, 1.0, 0.0],
        ]);
        assert_eq!(nearest_neighbour(&dm).unwrap().stops, vec![0, 2, 3, 1, 0]);
        assert_eq!(greedy_best_first(&dm).unwrap().stops, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn greedy_fails_when_remaining_edges_are_unusable() {
        let dm = matrix(&[
            &[0.0, 1.0, 2.0],
            &[1.0, 0.0, f64::INFINITY],
            &[2.0, f64::NAN, 0.0],
        ]);
        assert!(matches!(
            greedy_best_first(&dm),
            Err(Error::MatrixIncomplete { from: 1, .. })
        ));
    }

    #[test]
    fn single_location_is_trivial() {
        let dm = matrix(&[&[0.0]]);
        for policy in [SelectionPolicy::StrictlyPositive, SelectionPolicy::GlobalMinimum] {
            let tour = traverse(&dm, policy).unwrap();
            assert_eq!(tour.stops, vec![0, 0]);
            assert_eq!(tour.total_distance, 0.0);
        }
    }
}
