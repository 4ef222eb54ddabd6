//! Verse categorization schema
//!
//! Classifies celestial passages along two axes that matter for
//! visualization: whether the passage describes something astronomically
//! real, and whether it can be pinned to a date. Both flags are tri-state
//! because the Uncertain category genuinely has no answer.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The category assigned to a celestial passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CelestialCategory {
    /// Future celestial event described as a sign of divine action
    PropheticSign,
    /// Past celestial occurrence marking a significant event
    HistoricalEvent,
    /// Celestial bodies used for timekeeping or festivals
    CalendarMarker,
    /// Celestial imagery used symbolically
    Metaphorical,
    /// Poetic references glorifying the Creator
    WorshipPraise,
    /// Warnings against astrology and star worship
    CondemnedPractice,
    /// Celestial bodies being created and given purpose
    CreationAccount,
    /// Scholars disagree on literal vs symbolic reading
    Uncertain,
}

/// Human-facing description of a category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryInfo {
    /// Display name
    pub name: &'static str,
    /// One-sentence description
    pub description: &'static str,
    /// Whether passages here describe real astronomical phenomena
    /// (`None` when genuinely undecidable)
    pub astronomically_relevant: Option<bool>,
    /// Whether passages here can be pinned to candidate dates
    pub can_be_dated: Option<bool>,
    /// Illustrative examples
    pub examples: &'static [&'static str],
}

impl CelestialCategory {
    /// All categories, in schema order.
    pub const ALL: [CelestialCategory; 8] = [
        CelestialCategory::PropheticSign,
        CelestialCategory::HistoricalEvent,
        CelestialCategory::CalendarMarker,
        CelestialCategory::Metaphorical,
        CelestialCategory::WorshipPraise,
        CelestialCategory::CondemnedPractice,
        CelestialCategory::CreationAccount,
        CelestialCategory::Uncertain,
    ];

    /// Description record for this category.
    pub fn info(&self) -> CategoryInfo {
        match self {
            CelestialCategory::PropheticSign => CategoryInfo {
                name: "Prophetic Sign",
                description:
                    "Future celestial event described as a sign of divine action or end times",
                astronomically_relevant: Some(true),
                can_be_dated: Some(true),
                examples: &["Blood moons", "Sun darkening", "Stars falling"],
            },
            CelestialCategory::HistoricalEvent => CategoryInfo {
                name: "Historical Astronomical Event",
                description: "Past celestial occurrence marking a significant biblical event",
                astronomically_relevant: Some(true),
                can_be_dated: Some(true),
                examples: &["Star of Bethlehem", "Joshua's long day", "Hezekiah's sundial"],
            },
            CelestialCategory::CalendarMarker => CategoryInfo {
                name: "Calendar/Seasonal Marker",
                description:
                    "Celestial bodies used for timekeeping, festivals, or agricultural seasons",
                astronomically_relevant: Some(true),
                can_be_dated: Some(false),
                examples: &["New moon festivals", "Sabbath years", "Jubilee calculations"],
            },
            CelestialCategory::Metaphorical => CategoryInfo {
                name: "Metaphorical/Symbolic",
                description:
                    "Celestial imagery used symbolically, not describing literal astronomical events",
                astronomically_relevant: Some(false),
                can_be_dated: Some(false),
                examples: &["Joseph's dream", "Jesus as morning star", "Saints shining like stars"],
            },
            CelestialCategory::WorshipPraise => CategoryInfo {
                name: "Worship/Praise",
                description:
                    "Poetic references to celestial bodies glorifying God as Creator",
                astronomically_relevant: Some(false),
                can_be_dated: Some(false),
                examples: &["Heavens declare glory", "Stars praise Him"],
            },
            CelestialCategory::CondemnedPractice => CategoryInfo {
                name: "Condemned Practice",
                description:
                    "Warnings against astrology, star worship, or divination by celestial signs",
                astronomically_relevant: Some(false),
                can_be_dated: Some(false),
                examples: &["Host of heaven worship", "Astrologers condemned"],
            },
            CelestialCategory::CreationAccount => CategoryInfo {
                name: "Creation Account",
                description:
                    "Description of celestial bodies being created and their intended purposes",
                astronomically_relevant: Some(true),
                can_be_dated: Some(false),
                examples: &["Sun and moon created", "Stars set in firmament"],
            },
            CelestialCategory::Uncertain => CategoryInfo {
                name: "Uncertain/Debated",
                description:
                    "Passages where scholars disagree on literal vs symbolic interpretation",
                astronomically_relevant: None,
                can_be_dated: None,
                examples: &["Revelation imagery", "Daniel's visions"],
            },
        }
    }
}

impl fmt::Display for CelestialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CelestialCategory::PropheticSign => "prophetic_sign",
            CelestialCategory::HistoricalEvent => "historical_event",
            CelestialCategory::CalendarMarker => "calendar_marker",
            CelestialCategory::Metaphorical => "metaphorical",
            CelestialCategory::WorshipPraise => "worship_praise",
            CelestialCategory::CondemnedPractice => "condemned_practice",
            CelestialCategory::CreationAccount => "creation_account",
            CelestialCategory::Uncertain => "uncertain",
        };
        f.write_str(s)
    }
}

impl FromStr for CelestialCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prophetic_sign" => Ok(CelestialCategory::PropheticSign),
            "historical_event" => Ok(CelestialCategory::HistoricalEvent),
            "calendar_marker" => Ok(CelestialCategory::CalendarMarker),
            "metaphorical" => Ok(CelestialCategory::Metaphorical),
            "worship_praise" => Ok(CelestialCategory::WorshipPraise),
            "condemned_practice" => Ok(CelestialCategory::CondemnedPractice),
            "creation_account" => Ok(CelestialCategory::CreationAccount),
            "uncertain" => Ok(CelestialCategory::Uncertain),
            other => Err(format!(
                "invalid category '{}', expected one of: {}",
                other,
                CelestialCategory::ALL.map(|c| c.to_string()).join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        for cat in CelestialCategory::ALL {
            assert_eq!(cat.to_string().parse::<CelestialCategory>(), Ok(cat));
        }
    }

    #[test]
    fn test_invalid_category_lists_alternatives() {
        let err = "nope".parse::<CelestialCategory>().unwrap_err();
        assert!(err.contains("prophetic_sign"));
    }

    #[test]
    fn test_uncertain_is_tri_state() {
        let info = CelestialCategory::Uncertain.info();
        assert!(info.astronomically_relevant.is_none());
        assert!(info.can_be_dated.is_none());
    }

    #[test]
    fn test_datable_categories_are_relevant() {
        for cat in CelestialCategory::ALL {
            let info = cat.info();
            if info.can_be_dated == Some(true) {
                assert_eq!(info.astronomically_relevant, Some(true), "{cat}");
            }
        }
    }
}
