use colored::*;

use crate::error::Result;
use crate::orchestrator::RunReport;
use crate::solver::Algorithm;

/// Plain summary lines: tour, total distance and runtime.
pub fn results_lines(report: &RunReport) -> [String; 3] {
    [
        format!("Tour: {}", report.tour_names.join(" -> ")),
        format!("Total Distance: {:.2} km", report.tour.total_distance),
        format!("Runtime: {:.6} seconds", report.runtime_secs()),
    ]
}

pub fn print_results(report: &RunReport) {
    let [tour, distance, runtime] = results_lines(report);
    println!("{}", format!("TSP Results ({})", report.algorithm).bold());
    println!("{}", tour);
    println!("{}", distance.green());
    println!("{}", runtime.dimmed());
}

pub fn print_comparison(results: &[(Algorithm, Result<RunReport>)]) {
    println!("{}", "Algorithm comparison".bold());
    println!("{:<20} {:>14} {:>14}", "algorithm", "distance (km)", "runtime (s)");

    let best = results
        .iter()
        .filter_map(|(_, r)| r.as_ref().ok())
        .map(|r| r.tour.total_distance)
        .fold(f64::INFINITY, f64::min);

    for (algorithm, outcome) in results {
        match outcome {
            Ok(report) => {
                let line = format!(
                    "{:<20} {:>14.2} {:>14.6}",
                    algorithm.as_str(),
                    report.tour.total_distance,
                    report.runtime_secs()
                );
                if report.tour.total_distance <= best {
                    println!("{}", line.green());
                } else {
                    println!("{}", line);
                }
            }
            Err(e) => println!("{:<20} {}", algorithm.as_str(), e.to_string().red()),
        }
    }
}
