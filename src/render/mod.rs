//! Presentation of a finished run: terminal summary, static SVG map,
//! interactive HTML map and a CSV table of legs.

pub mod console;
pub mod html;
pub mod legs;
pub mod svg;

use std::path::PathBuf;

pub use console::{print_comparison, print_results, results_lines};
pub use html::{render_html, save_html_map};
pub use legs::{save_legs_csv, write_legs};
pub use svg::{render_svg, save_svg_map};

use crate::config::Settings;
use crate::distance::DistanceMatrix;
use crate::domain::Location;
use crate::error::Result;
use crate::orchestrator::RunReport;

/// Writes the static and interactive maps to the configured paths and
/// returns the absolute path of the interactive one.
pub fn export_maps(
    report: &RunReport,
    dm: &DistanceMatrix,
    locations: &[Location],
    settings: &Settings,
) -> Result<PathBuf> {
    save_svg_map(&report.tour, dm, locations, &settings.svg_output)?;
    save_html_map(&report.tour, locations, report.solved_at, &settings.map_output)
}
