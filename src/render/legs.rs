use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::distance::DistanceMatrix;
use crate::domain::Location;
use crate::error::Result;
use crate::evaluation::dist_between;
use crate::orchestrator::RunReport;

/// One row per leg: `step, from, to, distance`.
pub fn write_legs<W: Write>(
    wtr: &mut Writer<W>,
    report: &RunReport,
    locations: &[Location],
    dm: &DistanceMatrix,
) -> Result<()> {
    wtr.write_record(["step", "from", "to", "distance"])?;

    for (step, (from, to)) in report.tour.legs().enumerate() {
        wtr.write_record([
            (step + 1).to_string(),
            locations[from].name.to_string(),
            locations[to].name.to_string(),
            dist_between(from, to, dm).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn save_legs_csv(
    report: &RunReport,
    locations: &[Location],
    dm: &DistanceMatrix,
    filename: impl AsRef<Path>,
) -> Result<()> {
    let mut wtr = Writer::from_path(filename.as_ref())?;
    write_legs(&mut wtr, report, locations, dm)?;
    info!("Leg table saved to {}", filename.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Local;

    use super::*;
    use crate::domain::{parishes, Tour};
    use crate::solver::Algorithm;

    #[test]
    fn one_row_per_leg() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 4.0, 6.0],
            vec![4.0, 0.0, 5.0],
            vec![6.0, 5.0, 0.0],
        ])
        .unwrap();
        let report = RunReport {
            algorithm: Algorithm::BruteForce,
            tour: Tour::new(vec![0, 2, 1, 0], 15.0),
            tour_names: vec![],
            runtime: Duration::ZERO,
            solved_at: Local::now(),
        };

        let mut buf = Vec::new();
        {
            let mut wtr = Writer::from_writer(&mut buf);
            write_legs(&mut wtr, &report, parishes(), &dm).unwrap();
        }
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "step,from,to,distance\n\
             1,Hanover,St. James,6\n\
             2,St. James,Westmoreland,5\n\
             3,Westmoreland,Hanover,4\n"
        );
    }
}
