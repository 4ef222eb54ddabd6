//! Biblical observer locations
//!
//! Pre-configured observer sites relevant to prophetic scripture.
//! Coordinates are modern measurements for the historical sites.

/// An observer location Stellarium can be moved to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Lookup key, lowercase with underscores
    pub key: &'static str,
    /// Display name sent to Stellarium
    pub name: &'static str,
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
    /// Altitude in meters above sea level
    pub altitude: i32,
}

/// All pre-configured biblical locations
pub const BIBLICAL_LOCATIONS: &[Location] = &[
    Location {
        key: "jerusalem",
        name: "Jerusalem",
        latitude: 31.7781,
        longitude: 35.2353,
        altitude: 754,
    },
    Location {
        key: "babylon",
        name: "Babylon",
        latitude: 32.5390,
        longitude: 44.4208,
        altitude: 35,
    },
    Location {
        key: "bethlehem",
        name: "Bethlehem",
        latitude: 31.7054,
        longitude: 35.2024,
        altitude: 765,
    },
    Location {
        key: "nazareth",
        name: "Nazareth",
        latitude: 32.6996,
        longitude: 35.3035,
        altitude: 347,
    },
    Location {
        key: "patmos",
        name: "Patmos",
        latitude: 37.3113,
        longitude: 26.5449,
        altitude: 50,
    },
    Location {
        key: "ur",
        name: "Ur of Chaldees",
        latitude: 30.9620,
        longitude: 46.1031,
        altitude: 5,
    },
    Location {
        key: "nineveh",
        name: "Nineveh",
        latitude: 36.3600,
        longitude: 43.1500,
        altitude: 223,
    },
    Location {
        key: "damascus",
        name: "Damascus",
        latitude: 33.5138,
        longitude: 36.2765,
        altitude: 680,
    },
    Location {
        key: "rome",
        name: "Rome",
        latitude: 41.9028,
        longitude: 12.4964,
        altitude: 21,
    },
    Location {
        key: "egypt",
        name: "Egypt (Cairo)",
        latitude: 30.0444,
        longitude: 31.2357,
        altitude: 75,
    },
    Location {
        key: "mount_sinai",
        name: "Mount Sinai",
        latitude: 28.5394,
        longitude: 33.9752,
        altitude: 2285,
    },
    Location {
        key: "galilee",
        name: "Sea of Galilee",
        latitude: 32.8331,
        longitude: 35.5081,
        altitude: -212,
    },
    Location {
        key: "gibeon",
        name: "Gibeon",
        latitude: 31.85,
        longitude: 35.18,
        altitude: 700,
    },
    Location {
        key: "aijalon",
        name: "Valley of Aijalon",
        latitude: 31.86,
        longitude: 34.98,
        altitude: 250,
    },
];

/// Look up a location by name.
///
/// Matching is case-insensitive and treats spaces as underscores, so
/// "Mount Sinai" finds `mount_sinai`.
pub fn find_location(name: &str) -> Option<&'static Location> {
    let key = name.to_lowercase().replace(' ', "_");
    BIBLICAL_LOCATIONS.iter().find(|loc| loc.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_coordinates_in_range() {
        for loc in BIBLICAL_LOCATIONS {
            assert!((-90.0..=90.0).contains(&loc.latitude), "{}", loc.key);
            assert!((-180.0..=180.0).contains(&loc.longitude), "{}", loc.key);
        }
    }

    #[test]
    fn test_keys_are_normalized() {
        for loc in BIBLICAL_LOCATIONS {
            assert_eq!(loc.key, loc.key.to_lowercase());
            assert!(!loc.key.contains(' '));
        }
    }

    #[test]
    fn test_find_location_normalizes() {
        assert_eq!(find_location("Jerusalem").map(|l| l.name), Some("Jerusalem"));
        assert_eq!(
            find_location("Mount Sinai").map(|l| l.altitude),
            Some(2285)
        );
        assert!(find_location("atlantis").is_none());
    }

    #[test]
    fn test_galilee_below_sea_level() {
        let galilee = find_location("galilee").unwrap();
        assert!(galilee.altitude < 0);
    }
}
