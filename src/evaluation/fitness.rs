use crate::distance::DistanceMatrix;

/// Recomputes the length of a tour from the matrix alone.
///
/// Sums every consecutive edge of `stops`; if the sequence does not already
/// end where it started, the closing edge back to the first stop is added.
/// Self-edges are free: the diagonal is never consulted.
pub fn find_distance(stops: &[usize], dm: &DistanceMatrix) -> f64 {
    if stops.is_empty() {
        return 0.0;
    }

    let mut total_dist: f64 = stops
        .windows(2)
        .filter(|w| w[0] != w[1])
        .map(|w| dist_between(w[0], w[1], dm))
        .sum();

    let (first, last) = (stops[0], stops[stops.len() - 1]);
    if first != last {
        total_dist += dist_between(last, first, dm);
    }
    total_dist
}

pub fn dist_between(from_loc: usize, to_loc: usize, dm: &DistanceMatrix) -> f64 {
    dm.get(from_loc, to_loc)
}
