pub mod generator;
pub mod loader;
pub mod matrix;

pub use loader::{load_matrix_file, parse_matrix_text};
pub use matrix::DistanceMatrix;
