//! Prompt-driven loop: choose an algorithm, supply a matrix, see the
//! result, and optionally go again.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Settings;
use crate::distance::{load_matrix_file, parse_matrix_text, DistanceMatrix};
use crate::error::{Error, Result};
use crate::orchestrator::Orchestrator;
use crate::render::{export_maps, results_lines};
use crate::solver::Algorithm;

pub struct Session<'a, R, W> {
    orchestrator: &'a Orchestrator<'a>,
    settings: &'a Settings,
    input: R,
    output: W,
    export: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        orchestrator: &'a Orchestrator<'a>,
        settings: &'a Settings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            orchestrator,
            settings,
            input,
            output,
            export: true,
        }
    }

    /// Skip writing map files after each run.
    pub fn without_export(mut self) -> Self {
        self.export = false;
        self
    }

    /// Runs rounds until the user declines another or input ends. Returns
    /// the number of rounds that produced a tour.
    pub fn run(&mut self) -> Result<usize> {
        writeln!(self.output, "Traveling Salesman Problem (TSP)")?;
        let mut solved = 0;

        loop {
            let Some(selection) = self.ask_algorithm()? else {
                break;
            };
            let Some(dm) = self.ask_matrix()? else {
                break;
            };

            match self.orchestrator.run(&selection, &dm) {
                Ok(report) => {
                    solved += 1;
                    for line in results_lines(&report) {
                        writeln!(self.output, "{line}")?;
                    }
                    if self.export {
                        let saved =
                            export_maps(&report, &dm, self.orchestrator.locations(), self.settings)?;
                        writeln!(self.output, "Map saved at: {}", saved.display())?;
                    }
                }
                Err(e) => {
                    warn!("Run failed: {}", e);
                    writeln!(self.output, "Error: {e}")?;
                }
            }

            let again = self.prompt("Do you want to try another algorithm? [y/N]: ")?;
            if !matches!(again.as_deref().map(str::trim), Some("y" | "Y" | "yes")) {
                break;
            }
        }

        debug!("Session finished after {} successful run(s)", solved);
        Ok(solved)
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Accepts a name or a menu number; empty picks the first algorithm.
    fn ask_algorithm(&mut self) -> Result<Option<String>> {
        writeln!(self.output, "Please select one of the following algorithms:")?;
        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, algorithm)?;
        }

        let Some(answer) = self.prompt("Algorithm: ")? else {
            return Ok(None);
        };
        let answer = answer.trim();
        let selection = match answer.parse::<usize>() {
            Ok(n) if (1..=Algorithm::ALL.len()).contains(&n) => Algorithm::ALL[n - 1].to_string(),
            _ if answer.is_empty() => Algorithm::ALL[0].to_string(),
            _ => answer.to_string(),
        };
        Ok(Some(selection))
    }

    fn ask_matrix(&mut self) -> Result<Option<DistanceMatrix>> {
        loop {
            let Some(path) = self.prompt("Matrix file (leave empty to enter rows): ")? else {
                return Ok(None);
            };
            let path = path.trim();

            let loaded = if path.is_empty() {
                match self.read_pasted()? {
                    Some(result) => result,
                    None => return Ok(None),
                }
            } else {
                load_matrix_file(path)
            };

            match loaded {
                Ok(dm) => return Ok(Some(dm)),
                Err(e) => writeln!(self.output, "Error: {e}. Please enter valid numbers.")?,
            }
        }
    }

    /// Reads a declared row count, then rows up to the first blank line.
    fn read_pasted(&mut self) -> Result<Option<Result<DistanceMatrix>>> {
        let Some(count) = self.prompt("Number of rows in matrix: ")? else {
            return Ok(None);
        };
        let expected = match count.trim().parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                return Ok(Some(Err(Error::InvalidRowCount(
                    count.trim().to_string(),
                ))))
            }
        };

        writeln!(
            self.output,
            "Enter distance matrix (space-separated rows, blank line to finish):"
        )?;
        let mut text = String::new();
        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                break;
            }
            text.push_str(&line);
            text.push('\n');
        }

        Ok(Some(parse_matrix_text(&text, expected)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::domain::parishes;

    fn session_output(script: &str) -> (usize, String) {
        let orchestrator = Orchestrator::new(&parishes()[..3], 11);
        let settings = Settings::default();
        let mut out = Vec::new();
        let solved = Session::new(&orchestrator, &settings, Cursor::new(script), &mut out)
            .without_export()
            .run()
            .unwrap();
        (solved, String::from_utf8(out).unwrap())
    }

    #[test]
    fn pasted_matrix_then_rerun() {
        let script = "3\n\n3\n0 1 5\n1 0 2\n5 2 0\n\ny\n1\n\n3\n0 1 5\n1 0 2\n5 2 0\n\nn\n";
        let (solved, out) = session_output(script);
        assert_eq!(solved, 2);
        assert_eq!(out.matches("Total Distance: 8.00 km").count(), 2);
        assert!(out.contains("Tour: Hanover -> Westmoreland -> St. James -> Hanover"));
    }

    #[test]
    fn invalid_selection_is_reported() {
        let script = "Random Walk\n\n3\n0 1 5\n1 0 2\n5 2 0\n\nn\n";
        let (solved, out) = session_output(script);
        assert_eq!(solved, 0);
        assert!(out.contains("Error: invalid algorithm selection: \"Random Walk\""));
    }

    #[test]
    fn row_count_mismatch_asks_again() {
        let script = "2\n\n2\n0 1 5\n1 0 2\n5 2 0\n\n\n3\n0 1 5\n1 0 2\n5 2 0\n\n";
        let (solved, out) = session_output(script);
        assert_eq!(solved, 1);
        assert!(out.contains("expected 2 rows but found 3 rows"));
    }

    #[test]
    fn non_numeric_row_count_is_named() {
        let script = "2\n\nthree\n\n3\n0 1 5\n1 0 2\n5 2 0\n\n";
        let (solved, out) = session_output(script);
        assert_eq!(solved, 1);
        assert!(out.contains("Error: row count \"three\" is not a whole number."));
        assert!(!out.contains("line 0"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let (solved, _) = session_output("");
        assert_eq!(solved, 0);
    }
}
