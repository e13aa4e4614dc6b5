use crate::error::{Error, Result};

/// Square table of travel distances; `get(i, j)` is the cost of going from
/// `i` to `j`. Entries are not required to be symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, failing with [`Error::Dimension`] unless
    /// every row is as long as the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some((line, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::dimension(format!(
                "matrix has {} rows but row {} has {} entries",
                n,
                line + 1,
                row.len()
            )));
        }
        Ok(Self { rows })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    pub fn row(&self, from: usize) -> &[f64] {
        &self.rows[from]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Binds the matrix to a location table of `expected` entries.
    pub fn ensure_size(&self, expected: usize) -> Result<()> {
        if self.size() != expected {
            return Err(Error::dimension(format!(
                "matrix is {n}x{n} but {expected} locations are defined",
                n = self.size()
            )));
        }
        Ok(())
    }

    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.size();
        (0..n).all(|i| ((i + 1)..n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }
}
