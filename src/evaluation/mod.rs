pub mod fitness;

pub use fitness::{dist_between, find_distance};
