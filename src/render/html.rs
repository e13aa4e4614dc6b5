//! Interactive Leaflet map written as a single HTML document.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::domain::{Location, Tour};
use crate::error::Result;

const MAP_CENTER: [f64; 2] = [18.1096, -77.2975];
const MAP_ZOOM: u8 = 8;

#[derive(Debug, Serialize)]
struct Marker<'a> {
    name: &'a str,
    position: [f64; 2],
}

#[derive(Debug, Serialize)]
struct Polyline {
    points: Vec<[f64; 2]>,
    color: &'static str,
    weight: f64,
    opacity: f64,
}

#[derive(Debug, Serialize)]
struct MapPayload<'a> {
    center: [f64; 2],
    zoom: u8,
    markers: Vec<Marker<'a>>,
    route: Polyline,
    start: Option<Marker<'a>>,
    total_distance: f64,
    generated_at: String,
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Jamaica TSP Route</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const payload = __PAYLOAD__;
const map = L.map("map").setView(payload.center, payload.zoom);
L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
  attribution: "&copy; OpenStreetMap contributors"
}).addTo(map);
for (const m of payload.markers) {
  L.marker(m.position).bindPopup(m.name).addTo(map);
}
L.polyline(payload.route.points, {
  color: payload.route.color,
  weight: payload.route.weight,
  opacity: payload.route.opacity
}).addTo(map);
if (payload.start) {
  L.circleMarker(payload.start.position, { radius: 10, color: "green", fillOpacity: 0.9 })
    .bindPopup("Start/End (" + payload.start.name + ")")
    .addTo(map);
}
</script>
</body>
</html>
"#;

pub fn render_html(
    tour: &Tour,
    locations: &[Location],
    generated_at: DateTime<Local>,
) -> Result<String> {
    let markers = locations
        .iter()
        .map(|l| Marker {
            name: l.name,
            position: [l.lat, l.lon],
        })
        .collect();
    let points = tour
        .stops
        .iter()
        .map(|&i| [locations[i].lat, locations[i].lon])
        .collect();
    let start = tour.stops.first().map(|&i| Marker {
        name: locations[i].name,
        position: [locations[i].lat, locations[i].lon],
    });

    let payload = MapPayload {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        markers,
        route: Polyline {
            points,
            color: "red",
            weight: 2.5,
            opacity: 0.8,
        },
        start,
        total_distance: tour.total_distance,
        generated_at: generated_at.to_rfc3339(),
    };

    let json = serde_json::to_string(&payload)?.replace("</", "<\\/");
    Ok(TEMPLATE.replace("__PAYLOAD__", &json))
}

/// Writes the map without opening a browser and returns where it landed.
pub fn save_html_map(
    tour: &Tour,
    locations: &[Location],
    generated_at: DateTime<Local>,
    path: impl AsRef<Path>,
) -> Result<PathBuf> {
    let path = path.as_ref();
    fs::write(path, render_html(tour, locations, generated_at)?)?;

    let saved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    info!(
        "Map saved at: {}. You can open this file in a browser to view the route.",
        saved.display()
    );
    Ok(saved)
}
