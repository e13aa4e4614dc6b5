use std::env;
use std::path::PathBuf;

use tracing::{info, warn};

pub mod constant {
    pub const LOCATION_COUNT: usize = 14;
    pub const ANCHOR: usize = 0;
    pub const BRUTE_FORCE_LIMIT: usize = 11;
    pub const SEED: u64 = 12345;
    pub const MAP_OUTPUT: &str = "jamaica_tsp_route.html";
    pub const SVG_OUTPUT: &str = "jamaica_tsp_route.svg";
}

/// Runtime settings, read from the environment (and `.env`) with the
/// constants above as fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub map_output: PathBuf,
    pub svg_output: PathBuf,
    pub brute_force_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_output: PathBuf::from(constant::MAP_OUTPUT),
            svg_output: PathBuf::from(constant::SVG_OUTPUT),
            brute_force_limit: constant::BRUTE_FORCE_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let map_output = env::var("TSP_MAP_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or(defaults.map_output);
        let svg_output = env::var("TSP_SVG_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or(defaults.svg_output);
        let brute_force_limit = match env::var("TSP_BRUTE_FORCE_LIMIT") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(
                    "TSP_BRUTE_FORCE_LIMIT={:?} is not a number, using {}",
                    raw,
                    constant::BRUTE_FORCE_LIMIT
                );
                constant::BRUTE_FORCE_LIMIT
            }),
            Err(_) => defaults.brute_force_limit,
        };

        info!(
            "Settings: map={}, svg={}, brute force limit={}",
            map_output.display(),
            svg_output.display(),
            brute_force_limit
        );

        Self {
            map_output,
            svg_output,
            brute_force_limit,
        }
    }
}
