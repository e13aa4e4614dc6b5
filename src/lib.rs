pub mod cli;
pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod interactive;
pub mod logging;
pub mod orchestrator;
pub mod render;
pub mod solver;

pub use distance::DistanceMatrix;
pub use domain::{Location, Tour};
pub use error::{Error, Result};
pub use orchestrator::{Orchestrator, RunReport};
pub use solver::Algorithm;
