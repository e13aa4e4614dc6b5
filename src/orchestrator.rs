//! Picks an algorithm by name, times it, and packages the result for the
//! presentation side.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{info, span, warn, Level};

use crate::config::Settings;
use crate::distance::DistanceMatrix;
use crate::domain::{parishes, Location, Tour};
use crate::error::{Error, Result};
use crate::solver::Algorithm;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub tour: Tour,
    pub tour_names: Vec<&'static str>,
    pub runtime: Duration,
    pub solved_at: DateTime<Local>,
}

impl RunReport {
    pub fn runtime_secs(&self) -> f64 {
        self.runtime.as_secs_f64()
    }

    /// `(tour names, total distance, runtime in seconds)`.
    pub fn handoff(&self) -> (Vec<&'static str>, f64, f64) {
        (
            self.tour_names.clone(),
            self.tour.total_distance,
            self.runtime_secs(),
        )
    }
}

pub struct Orchestrator<'a> {
    locations: &'a [Location],
    brute_force_limit: usize,
}

impl Orchestrator<'static> {
    /// Bound to the parish table.
    pub fn for_parishes(settings: &Settings) -> Self {
        Self::new(parishes(), settings.brute_force_limit)
    }
}

impl<'a> Orchestrator<'a> {
    pub fn new(locations: &'a [Location], brute_force_limit: usize) -> Self {
        Self {
            locations,
            brute_force_limit,
        }
    }

    pub fn locations(&self) -> &'a [Location] {
        self.locations
    }

    /// Resolves `selection` to an algorithm before touching the matrix.
    pub fn run(&self, selection: &str, dm: &DistanceMatrix) -> Result<RunReport> {
        let algorithm: Algorithm = selection.parse()?;
        self.run_algorithm(algorithm, dm)
    }

    pub fn run_algorithm(&self, algorithm: Algorithm, dm: &DistanceMatrix) -> Result<RunReport> {
        dm.ensure_size(self.locations.len())?;
        if algorithm.is_exact() && dm.size() > self.brute_force_limit {
            return Err(Error::BruteForceLimit {
                size: dm.size(),
                limit: self.brute_force_limit,
            });
        }

        let run_span = span!(Level::INFO, "solve", algorithm = %algorithm, size = dm.size());
        let _guard = run_span.enter();

        let start = Instant::now();
        let tour = algorithm.solve(dm)?;
        let runtime = start.elapsed();

        let tour_names = tour
            .stops
            .iter()
            .map(|&i| self.locations[i].name)
            .collect();

        info!(
            "{} finished in {:.6}s with total distance {:.2}",
            algorithm,
            runtime.as_secs_f64(),
            tour.total_distance
        );

        Ok(RunReport {
            algorithm,
            tour,
            tour_names,
            runtime,
            solved_at: Local::now(),
        })
    }

    /// Runs every algorithm in turn. Failures are kept alongside successes.
    pub fn compare(&self, dm: &DistanceMatrix) -> Vec<(Algorithm, Result<RunReport>)> {
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let outcome = self.run_algorithm(algorithm, dm);
                if let Err(e) = &outcome {
                    warn!("{} did not produce a tour: {}", algorithm, e);
                }
                (algorithm, outcome)
            })
            .collect()
    }
}
