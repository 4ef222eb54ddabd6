//! Pre-dated prophetic astronomical events
//!
//! Each event pairs a scripture passage with a candidate astronomical
//! date, expressed as a Julian Day so Stellarium can jump straight to
//! it regardless of era.

use crate::locations::{find_location, Location};
use prophecy_domain::JulianDay;

/// A pre-configured prophetic event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropheticEvent {
    /// Lookup key, lowercase with underscores
    pub key: &'static str,
    /// Human-readable description with the scripture reference
    pub description: &'static str,
    /// Candidate date as a Julian Day number. This is the authoritative
    /// field; Stellarium is driven by it directly.
    pub julian_day: f64,
    /// Proleptic-Gregorian rendering of `julian_day` (astronomical year
    /// numbering). Julian-calendar readings of ancient dates live in
    /// `notes`.
    pub iso_date: &'static str,
    /// Key of the observer location in [`crate::locations::BIBLICAL_LOCATIONS`]
    pub location: &'static str,
    /// Object to center the view on
    pub focus_object: &'static str,
    /// Supporting scholarship, when any
    pub notes: Option<&'static str>,
}

impl PropheticEvent {
    /// Julian Day as a typed value.
    pub fn julian_day(&self) -> JulianDay {
        JulianDay::new(self.julian_day)
    }

    /// Resolve the observer location for this event.
    pub fn location(&self) -> Option<&'static Location> {
        find_location(self.location)
    }
}

/// All pre-configured prophetic events
pub const PROPHETIC_EVENTS: &[PropheticEvent] = &[
    PropheticEvent {
        key: "revelation_12_sign",
        description: "Woman clothed with the sun, moon under feet (Rev 12:1-2)",
        julian_day: 2458019.5,
        iso_date: "2017-09-23T12:00:00",
        location: "jerusalem",
        focus_object: "Virgo",
        notes: None,
    },
    PropheticEvent {
        key: "star_of_bethlehem_conjunction",
        description: "Jupiter-Venus conjunction (Star of Bethlehem candidate) - planets 0.056\u{b0} apart",
        julian_day: 1720860.33,
        iso_date: "-0001-06-15T20:00:00",
        location: "bethlehem",
        focus_object: "Jupiter",
        notes: Some(
            "Jupiter and Venus in Leo near Regulus, combined mag -4.55. \
             June 17, 2 BC in the Julian calendar",
        ),
    },
    PropheticEvent {
        key: "crucifixion_eclipse",
        description: "Darkness during crucifixion (Luke 23:44-45)",
        julian_day: 1733204.5,
        iso_date: "0033-04-03T12:00:00",
        location: "jerusalem",
        focus_object: "Sun",
        notes: None,
    },
    PropheticEvent {
        key: "blood_moon_prophecy",
        description: "Moon turned to blood (Joel 2:31, Acts 2:20)",
        julian_day: 2456749.5,
        iso_date: "2014-04-15T07:00:00",
        location: "jerusalem",
        focus_object: "Moon",
        notes: None,
    },
    PropheticEvent {
        key: "joshua_long_day",
        description: "Sun stood still over Gibeon, Moon in Valley of Aijalon (Joshua 10:12-13)",
        julian_day: 1280869.083,
        iso_date: "-1206-10-19T14:00:00",
        location: "gibeon",
        focus_object: "Sun",
        notes: Some(
            "Annular solar eclipse - Oct 30, 1207 BC in the Julian calendar. Humphreys theory: \
             Hebrew 'dmm' means 'cease/be silent' (eclipse darkening), not 'stand still'",
        ),
    },
];

/// Look up an event by name, case-insensitively and treating spaces as
/// underscores.
pub fn find_event(name: &str) -> Option<&'static PropheticEvent> {
    let key = name.to_lowercase().replace(' ', "_");
    PROPHETIC_EVENTS.iter().find(|event| event.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_event_location_resolves() {
        for event in PROPHETIC_EVENTS {
            assert!(
                event.location().is_some(),
                "{} references unknown location {}",
                event.key,
                event.location
            );
        }
    }

    #[test]
    fn test_revelation_sign_date_round_trips() {
        let event = find_event("revelation_12_sign").unwrap();
        let civil = event.julian_day().to_civil();
        assert_eq!((civil.year, civil.month, civil.day), (2017, 9, 23));
    }

    #[test]
    fn test_joshua_long_day_is_bc() {
        let event = find_event("joshua_long_day").unwrap();
        let civil = event.julian_day().to_civil();
        assert_eq!(civil.year, -1206);
        // Oct 19 proleptic Gregorian; the Julian-calendar Oct 30 reading
        // is recorded in the notes.
        assert_eq!((civil.month, civil.day), (10, 19));
        assert!((civil.hour - 14.0).abs() < 0.1);
    }

    #[test]
    fn test_ancient_event_iso_dates_match_julian_days() {
        // The iso_date strings render julian_day in the same proleptic
        // Gregorian calendar the converter produces.
        let cases = [
            ("joshua_long_day", -1206i32, 10u32, 19u32, 14.0),
            ("star_of_bethlehem_conjunction", -1, 6, 15, 20.0),
        ];
        for (key, year, month, day, hour) in cases {
            let event = find_event(key).unwrap();
            let civil = event.julian_day().to_civil();
            assert_eq!((civil.year, civil.month, civil.day), (year, month, day), "{key}");
            assert!((civil.hour - hour).abs() < 0.1, "{key} hour {}", civil.hour);

            let date_part = format!(
                "{}-{:02}-{:02}",
                if year < 0 { format!("-{:04}", -year) } else { format!("{:04}", year) },
                month,
                day
            );
            assert!(event.iso_date.starts_with(&date_part), "{key} iso {}", event.iso_date);
        }
    }

    #[test]
    fn test_find_event_normalizes() {
        assert!(find_event("Blood Moon Prophecy").is_some());
        assert!(find_event("planet_x").is_none());
    }
}
