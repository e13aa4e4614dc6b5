const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A named stop with its (latitude, longitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub index: usize,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(index: usize, name: &'static str, lat: f64, lon: f64) -> Self {
        Self {
            index,
            name,
            lat,
            lon,
        }
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_km(&self, other: &Location) -> f64 {
        if self.lat == other.lat && self.lon == other.lon {
            return 0.0;
        }

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

        EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
    }
}

/// A closed tour: `stops` starts and ends at the anchor and visits every
/// other location exactly once in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub stops: Vec<usize>,
    pub total_distance: f64,
}

impl Tour {
    pub fn new(stops: Vec<usize>, total_distance: f64) -> Self {
        Self {
            stops,
            total_distance,
        }
    }

    /// Tour over zero locations.
    pub fn empty() -> Self {
        Self::new(vec![], 0.0)
    }

    /// Consecutive `(from, to)` pairs, closing edge included.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Checks the closed-tour shape for a matrix of `size` locations.
    pub fn is_valid_for(&self, size: usize) -> bool {
        if size == 0 {
            return self.stops.is_empty();
        }
        if self.stops.len() != size + 1 || self.stops[0] != 0 || self.stops[size] != 0 {
            return false;
        }

        let mut seen = vec![false; size];
        for &stop in &self.stops[..size] {
            if stop >= size || seen[stop] {
                return false;
            }
            seen[stop] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_one_degree_at_equator() {
        let a = Location::new(0, "a", 0.0, 0.0);
        let b = Location::new(1, "b", 0.0, 1.0);
        let d = a.distance_km(&b);
        assert!(d > 110.0 && d < 112.0, "got {d}");
        assert_eq!(a.distance_km(&a), 0.0);
    }

    #[test]
    fn legs_include_closing_edge() {
        let tour = Tour::new(vec![0, 2, 1, 0], 3.0);
        let legs: Vec<_> = tour.legs().collect();
        assert_eq!(legs, vec![(0, 2), (2, 1), (1, 0)]);
    }

    #[test]
    fn validity_rejects_repeats_and_open_tours() {
        assert!(Tour::new(vec![0, 1, 2, 0], 0.0).is_valid_for(3));
        assert!(!Tour::new(vec![0, 1, 1, 0], 0.0).is_valid_for(3));
        assert!(!Tour::new(vec![0, 1, 2], 0.0).is_valid_for(3));
        assert!(!Tour::new(vec![1, 0, 2, 1], 0.0).is_valid_for(3));
        assert!(Tour::new(vec![0, 0], 0.0).is_valid_for(1));
        assert!(Tour::empty().is_valid_for(0));
    }
}
