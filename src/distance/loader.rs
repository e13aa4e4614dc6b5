//! Reading distance matrices from text.
//!
//! Two sources are supported: a file of whitespace-separated rows, and text
//! pasted together with the number of rows the user says it has.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::matrix::DistanceMatrix;
use crate::error::{Error, Result};

/// Loads a matrix file. Blank lines and lines starting with `#` are skipped.
pub fn load_matrix_file(path: impl AsRef<Path>) -> Result<DistanceMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let rows = parse_rows(
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#')),
    )?;

    info!("Loaded {} matrix rows from {}", rows.len(), path.display());
    let dm = DistanceMatrix::from_rows(rows)?;
    if !dm.is_symmetric(1e-9) {
        debug!("{} holds an asymmetric matrix", path.display());
    }
    Ok(dm)
}

/// Parses pasted text and checks it against the declared row count.
pub fn parse_matrix_text(text: &str, expected_rows: usize) -> Result<DistanceMatrix> {
    let trimmed = text.trim();
    let lines: Vec<&str> = if trimmed.is_empty() {
        vec![]
    } else {
        trimmed.split('\n').collect()
    };

    if lines.len() != expected_rows {
        return Err(Error::RowCountMismatch {
            expected: expected_rows,
            found: lines.len(),
        });
    }

    let rows = parse_rows(lines.into_iter().enumerate())?;
    debug!("Parsed {} pasted matrix rows", rows.len());
    DistanceMatrix::from_rows(rows)
}

fn parse_rows<'a>(lines: impl Iterator<Item = (usize, &'a str)>) -> Result<Vec<Vec<f64>>> {
    lines
        .map(|(idx, line)| {
            line.split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| Error::Parse {
                        line: idx + 1,
                        token: token.to_string(),
                    })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pasted_text_with_matching_row_count() {
        let dm = parse_matrix_text("0 10 15\n10 0 35\n15 35 0\n", 3).unwrap();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(1, 2), 35.0);
    }

    #[test]
    fn pasted_text_row_count_mismatch() {
        let err = parse_matrix_text("0 1\n1 0", 3).unwrap_err();
        assert!(matches!(
            err,
            Error::RowCountMismatch {
                expected: 3,
                found: 2
            }
        ));
        assert_eq!(err.to_string(), "expected 3 rows but found 2 rows");
    }

    #[test]
    fn bad_token_reports_line() {
        let err = parse_matrix_text("0 1\n1 x", 2).unwrap_err();
        match err {
            Error::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pasted_text_not_square() {
        let err = parse_matrix_text("0 1 2 3\n1 0 2 3\n1 2 0 3", 3).unwrap_err();
        assert!(matches!(err, Error::Dimension(_)));
    }

    #[test]
    fn asymmetric_file_still_loads() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("one_way.txt");
        fs::write(&path, "0 1 9\n9 0 1\n1 9 0\n").unwrap();
        let dm = load_matrix_file(&path).unwrap();
        assert!(!dm.is_symmetric(1e-9));
        assert_eq!(dm.get(0, 2), 9.0);
    }
}
