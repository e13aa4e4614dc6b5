use tracing::debug;

use super::candidates::CandidateTours;
use crate::config::constant::ANCHOR;
use crate::distance::DistanceMatrix;
use crate::domain::Tour;
use crate::error::Result;
use crate::evaluation::find_distance;

/// Exact search: scores every tour that starts at the anchor and keeps the
/// first one with the lowest cost. O((n-1)!) time, so only practical for
/// roughly a dozen locations; limiting `n` is up to the caller.
pub fn brute_force(dm: &DistanceMatrix) -> Result<Tour> {
    let n = dm.size();
    match n {
        0 => return Ok(Tour::empty()),
        1 => return Ok(Tour::new(vec![ANCHOR, ANCHOR], 0.0)),
        _ => {}
    }

    let mut best: Option<Vec<usize>> = None;
    let mut min_distance = f64::INFINITY;
    let mut evaluated: u64 = 0;

    for candidate in CandidateTours::new(n) {
        evaluated += 1;
        let cost = find_distance(&candidate, dm);
        // strict comparison keeps the earliest optimum; NaN never wins
        if cost < min_distance {
            min_distance = cost;
            best = Some(candidate);
        }
    }

    debug!("Brute force evaluated {} candidate tours", evaluated);
    Ok(match best {
        Some(stops) => Tour::new(stops, min_distance),
        // no finite tour exists: report the first candidate with its cost
        None => {
            let stops: Vec<usize> = (0..n).chain([ANCHOR]).collect();
            let cost = find_distance(&stops, dm);
            Tour::new(stops, cost)
        }
    })
}
