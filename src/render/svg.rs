use std::fs;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::distance::DistanceMatrix;
use crate::domain::{Location, Tour};
use crate::error::{Error, Result};
use crate::evaluation::dist_between;

const LON_RANGE: (f64, f64) = (-78.5, -76.0);
const LAT_RANGE: (f64, f64) = (17.7, 18.5);
const SIZE: (u32, u32) = (1200, 520);

fn plot_error(e: impl std::fmt::Display) -> Error {
    Error::Plot(e.to_string())
}

/// Static map of the tour: red legs labelled with their distance, blue
/// markers for every location, and a yellow marker on the start/end.
pub fn render_svg(tour: &Tour, dm: &DistanceMatrix, locations: &[Location]) -> Result<String> {
    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, SIZE).into_drawing_area();
        root.fill(&RGBColor(211, 211, 211)).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("TSP Route for Parishes in Jamaica", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(LON_RANGE.0..LON_RANGE.1, LAT_RANGE.0..LAT_RANGE.1)
            .map_err(plot_error)?;
        chart
            .configure_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .draw()
            .map_err(plot_error)?;

        for (from, to) in tour.legs() {
            let a = (locations[from].lon, locations[from].lat);
            let b = (locations[to].lon, locations[to].lat);
            chart
                .draw_series(LineSeries::new([a, b], RED.stroke_width(2)))
                .map_err(plot_error)?;
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{} km", dist_between(from, to, dm)),
                    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0),
                    ("sans-serif", 12).into_font().color(&GREEN),
                )))
                .map_err(plot_error)?;
        }

        if let Some(&start) = tour.stops.first() {
            let anchor = &locations[start];
            chart
                .draw_series(std::iter::once(Circle::new(
                    (anchor.lon, anchor.lat),
                    9,
                    YELLOW.filled(),
                )))
                .map_err(plot_error)?
                .label(format!("Start/End ({})", anchor.name))
                .legend(|(x, y)| Circle::new((x, y), 5, YELLOW.filled()));
        }

        chart
            .draw_series(
                locations
                    .iter()
                    .map(|l| Circle::new((l.lon, l.lat), 5, BLUE.filled())),
            )
            .map_err(plot_error)?;
        chart
            .draw_series(locations.iter().map(|l| {
                Text::new(l.name.to_string(), (l.lon, l.lat), ("sans-serif", 12).into_font())
            }))
            .map_err(plot_error)?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
    }
    Ok(out)
}

pub fn save_svg_map(
    tour: &Tour,
    dm: &DistanceMatrix,
    locations: &[Location],
    path: impl AsRef<Path>,
) -> Result<()> {
    fs::write(path.as_ref(), render_svg(tour, dm, locations)?)?;
    info!("Static map saved to {}", path.as_ref().display());
    Ok(())
}
