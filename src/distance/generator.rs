//! Builds realistic input matrices from the parish coordinates.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::matrix::DistanceMatrix;
use crate::domain::Location;
use crate::error::Result;

/// Great-circle distances between every pair of `locations`, rounded to
/// whole kilometres.
///
/// With `jitter > 0`, each off-diagonal entry is scaled by a factor drawn
/// from `1.0..1.0 + jitter` to mimic road detours; the same `seed` always
/// produces the same matrix. Jittered matrices are not symmetric.
pub fn generate_matrix(locations: &[Location], jitter: f64, seed: u64) -> Result<DistanceMatrix> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = locations.len();

    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        return 0.0;
                    }
                    let base = locations[i].distance_km(&locations[j]);
                    let factor = if jitter > 0.0 {
                        rng.gen_range(1.0..1.0 + jitter)
                    } else {
                        1.0
                    };
                    (base * factor).round()
                })
                .collect()
        })
        .collect();

    info!(
        "Generated {}x{} matrix (jitter {:.2}, seed {})",
        n, n, jitter, seed
    );
    for row in &rows {
        debug!("{:?}", row);
    }

    DistanceMatrix::from_rows(rows)
}

/// Renders a matrix in the whitespace-separated format the loader reads.
pub fn format_matrix(matrix: &DistanceMatrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
