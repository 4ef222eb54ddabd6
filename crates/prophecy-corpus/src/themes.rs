//! Celestial search themes
//!
//! Named keyword bundles for theme-driven search. A theme expands to its
//! keyword list joined into one query string; unknown theme names pass
//! through as free-text queries.

use std::fmt;
use std::str::FromStr;

/// A named bundle of celestial keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelestialTheme {
    /// Signs in sun, moon, and stars: darkening, blood, eclipses
    CosmicSigns,
    /// Named star groups and astronomical terms
    Astronomical,
    /// Visionary and apocalyptic imagery
    PropheticImagery,
}

impl CelestialTheme {
    /// All themes, in presentation order.
    pub const ALL: [CelestialTheme; 3] = [
        CelestialTheme::CosmicSigns,
        CelestialTheme::Astronomical,
        CelestialTheme::PropheticImagery,
    ];

    /// The keyword list for this theme.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            CelestialTheme::CosmicSigns => &[
                "sun", "moon", "star", "stars", "heaven", "heavens", "sky", "darkened", "blood",
                "eclipse", "light",
            ],
            CelestialTheme::Astronomical => &[
                "constellation",
                "pleiades",
                "orion",
                "arcturus",
                "morning star",
                "day star",
                "wandering stars",
            ],
            CelestialTheme::PropheticImagery => &[
                "sign", "wonder", "portent", "vision", "revelation", "beast", "dragon", "woman",
                "child", "angel",
            ],
        }
    }

    /// Expand a theme name into a query string. Unrecognized names are
    /// treated as custom free-text themes and returned unchanged.
    pub fn expand_query(theme: &str) -> String {
        match theme.parse::<CelestialTheme>() {
            Ok(t) => t.keywords().join(" "),
            Err(_) => theme.to_string(),
        }
    }
}

impl fmt::Display for CelestialTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CelestialTheme::CosmicSigns => "cosmic_signs",
            CelestialTheme::Astronomical => "astronomical",
            CelestialTheme::PropheticImagery => "prophetic_imagery",
        };
        f.write_str(name)
    }
}

impl FromStr for CelestialTheme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosmic_signs" => Ok(CelestialTheme::CosmicSigns),
            "astronomical" => Ok(CelestialTheme::Astronomical),
            "prophetic_imagery" => Ok(CelestialTheme::PropheticImagery),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosmic_signs_keywords() {
        let keywords = CelestialTheme::CosmicSigns.keywords();
        assert!(keywords.contains(&"sun"));
        assert!(keywords.contains(&"moon"));
        assert!(keywords.contains(&"blood"));
    }

    #[test]
    fn test_astronomical_keywords() {
        let keywords = CelestialTheme::Astronomical.keywords();
        assert!(keywords.contains(&"pleiades"));
        assert!(keywords.contains(&"orion"));
    }

    #[test]
    fn test_all_themes_have_keywords() {
        for theme in CelestialTheme::ALL {
            assert!(!theme.keywords().is_empty(), "{theme} has no keywords");
        }
    }

    #[test]
    fn test_expand_known_theme() {
        let query = CelestialTheme::expand_query("cosmic_signs");
        assert!(query.contains("sun"));
        assert!(query.contains("eclipse"));
    }

    #[test]
    fn test_expand_custom_theme_passes_through() {
        assert_eq!(CelestialTheme::expand_query("blood moon"), "blood moon");
    }

    #[test]
    fn test_display_round_trip() {
        for theme in CelestialTheme::ALL {
            assert_eq!(theme.to_string().parse::<CelestialTheme>(), Ok(theme));
        }
    }
}
