use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("dimension error: {0}")]
    Dimension(String),
    #[error(
        "matrix incomplete: no admissible move from location {from} with {remaining} location(s) unvisited"
    )]
    MatrixIncomplete { from: usize, remaining: usize },
    #[error("invalid algorithm selection: {0:?}")]
    InvalidSelection(String),
    #[error("expected {expected} rows but found {found} rows")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("row count {0:?} is not a whole number")]
    InvalidRowCount(String),
    #[error("invalid matrix entry {token:?} on line {line}")]
    Parse { line: usize, token: String },
    #[error("plotting failed: {0}")]
    Plot(String),
    #[error("brute force over {size} locations exceeds the configured limit of {limit}")]
    BruteForceLimit { size: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn dimension(message: impl Into<String>) -> Self {
        Self::Dimension(message.into())
    }

    pub fn invalid_selection(name: impl Into<String>) -> Self {
        Self::InvalidSelection(name.into())
    }
}
