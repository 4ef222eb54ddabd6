//! Equatorial coordinate math
//!
//! Angular separation via the spherical law of cosines, used for
//! conjunction and eclipse checks.

/// A position on the celestial sphere in J2000 equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoord {
    /// Right ascension in degrees
    pub ra_deg: f64,
    /// Declination in degrees
    pub dec_deg: f64,
}

impl EquatorialCoord {
    /// Create a new coordinate pair.
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }
}

/// Qualitative closeness of two objects, for conjunction reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationClass {
    /// Under 0.5 degrees
    VeryCloseConjunction,
    /// Under 2 degrees
    CloseConjunction,
    /// Under 5 degrees
    NotableProximity,
    /// Everything else
    Wide,
}

impl SeparationClass {
    /// Classify a separation given in degrees.
    pub fn from_degrees(separation: f64) -> Self {
        if separation < 0.5 {
            SeparationClass::VeryCloseConjunction
        } else if separation < 2.0 {
            SeparationClass::CloseConjunction
        } else if separation < 5.0 {
            SeparationClass::NotableProximity
        } else {
            SeparationClass::Wide
        }
    }
}

/// Angular separation between two sky positions, in degrees.
///
/// Spherical law of cosines with the intermediate cosine clamped to
/// [-1, 1] so antipodal or identical positions never produce NaN from
/// floating-point drift.
pub fn angular_separation(a: EquatorialCoord, b: EquatorialCoord) -> f64 {
    let ra1 = a.ra_deg.to_radians();
    let dec1 = a.dec_deg.to_radians();
    let ra2 = b.ra_deg.to_radians();
    let dec2 = b.dec_deg.to_radians();

    let cos_sep = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();
    cos_sep.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_positions() {
        let p = EquatorialCoord::new(150.0, -20.0);
        assert!(angular_separation(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_pole_to_pole() {
        let north = EquatorialCoord::new(0.0, 90.0);
        let south = EquatorialCoord::new(0.0, -90.0);
        assert!((angular_separation(north, south) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_equatorial_ra_offset() {
        let a = EquatorialCoord::new(10.0, 0.0);
        let b = EquatorialCoord::new(15.0, 0.0);
        assert!((angular_separation(a, b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(
            SeparationClass::from_degrees(0.056),
            SeparationClass::VeryCloseConjunction
        );
        assert_eq!(
            SeparationClass::from_degrees(1.2),
            SeparationClass::CloseConjunction
        );
        assert_eq!(
            SeparationClass::from_degrees(3.0),
            SeparationClass::NotableProximity
        );
        assert_eq!(SeparationClass::from_degrees(40.0), SeparationClass::Wide);
    }
}
