//! The fourteen Jamaican parishes used as named tour stops.
//!
//! Hanover (index 0) is the anchor every tour starts from and returns to.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::types::Location;

static PARISHES: [Location; 14] = [
    Location::new(0, "Hanover", 18.417, -78.133),
    Location::new(1, "Westmoreland", 18.242, -78.010),
    Location::new(2, "St. James", 18.471, -77.920),
    Location::new(3, "St. Elizabeth", 18.038, -77.737),
    Location::new(4, "Manchester", 18.042, -77.508),
    Location::new(5, "Trelawny", 18.282, -77.657),
    Location::new(6, "Clarendon", 17.964, -77.245),
    Location::new(7, "St Ann", 18.429, -77.200),
    Location::new(8, "St Catherine", 18.012, -76.949),
    Location::new(9, "St Mary", 18.267, -76.896),
    Location::new(10, "St Andrew", 18.002, -76.791),
    Location::new(11, "Kingston", 17.970, -76.788),
    Location::new(12, "Portland", 18.176, -76.398),
    Location::new(13, "St Thomas", 17.941, -76.339),
];

static BY_NAME: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

pub fn parishes() -> &'static [Location] {
    &PARISHES
}

pub fn parish_by_name(name: &str) -> Option<&'static Location> {
    let index = BY_NAME.get_or_init(|| PARISHES.iter().map(|p| (p.name, p.index)).collect());
    index.get(name).map(|&i| &PARISHES[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constant::{ANCHOR, LOCATION_COUNT};

    #[test]
    fn table_is_indexed_in_order() {
        assert_eq!(parishes().len(), LOCATION_COUNT);
        for (i, parish) in parishes().iter().enumerate() {
            assert_eq!(parish.index, i);
        }
        assert_eq!(parishes()[ANCHOR].name, "Hanover");
    }

    #[test]
    fn lookup_by_name() {
        let kingston = parish_by_name("Kingston").unwrap();
        assert_eq!(kingston.index, 11);
        assert!((kingston.lat - 17.970).abs() < 1e-9);
        assert!(parish_by_name("Atlantis").is_none());
    }
}
