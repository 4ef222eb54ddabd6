//! Proleptic-Gregorian / Julian Day conversion
//!
//! Both directions use the standard astronomical formulae with floor
//! semantics throughout. The forward conversion applies the Gregorian
//! century correction unconditionally, so the inverse deliberately carries
//! no Julian/Gregorian switchover branch: round-trip symmetry over the
//! whole proleptic range matters more here than historical calendar
//! fidelity.

/// A civil date/time in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: year 0 is 1 BC, year -1 is 2 BC, and
/// so on. This avoids the BC/AD off-by-one in date arithmetic; display
/// layers may convert to BC/AD labels.
///
/// `hour` is a fractional 24-hour clock value in `[0, 24)`.
///
/// # Examples
///
/// ```
/// use prophecy_domain::CivilDate;
///
/// // J2000 epoch: 2000-01-01 12:00 UTC
/// let d = CivilDate::new(2000, 1, 1, 12.0);
/// assert_eq!(d.to_julian_day().value(), 2451545.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDate {
    /// Astronomical year (0 = 1 BC, negative = earlier)
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Day of month
    pub day: u32,
    /// Hour of day in [0, 24)
    pub hour: f64,
}

/// A Julian Day Number with fractional time of day.
///
/// Continuous day count used in astronomy, independent of calendar systems.
/// By convention the integer part changes at noon UTC: an integer JD plus
/// 0.5 corresponds to the following midnight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl CivilDate {
    /// Create a new civil date.
    ///
    /// Day-of-month validity is the caller's concern: the conversion
    /// formulae are total over all integer inputs, and semantically
    /// invalid dates (e.g. February 30) simply normalize forward.
    pub fn new(year: i32, month: u32, day: u32, hour: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Convert to a Julian Day Number.
    ///
    /// Standard astronomical algorithm over the proleptic Gregorian
    /// calendar:
    ///
    /// 1. For January/February, work with (year - 1, month + 12) so the
    ///    computational year starts in March.
    /// 2. `B = 2 - A + floor(A / 4)` with `A = floor(year / 100)` is the
    ///    Gregorian century correction, applied unconditionally.
    /// 3. `JD = floor(365.25 (y + 4716)) + floor(30.6001 (m + 1))
    ///    + day + B - 1524.5 + hour / 24`.
    pub fn to_julian_day(&self) -> JulianDay {
        let mut y = f64::from(self.year);
        let mut m = f64::from(self.month);
        if self.month <= 2 {
            y -= 1.0;
            m += 12.0;
        }

        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        let jd = (365.25 * (y + 4716.0)).floor()
            + (30.6001 * (m + 1.0)).floor()
            + f64::from(self.day)
            + b
            - 1524.5
            + self.hour / 24.0;

        JulianDay(jd)
    }
}

impl JulianDay {
    /// Wrap a raw Julian Day value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw day count.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Convert back to a proleptic-Gregorian civil date.
    ///
    /// Inverse of [`CivilDate::to_julian_day`]. Total over the numeric
    /// domain: out-of-plausible-range inputs (including negative JD) still
    /// produce a mathematically defined answer. Years at or before 1 BC
    /// come back in astronomical numbering.
    pub fn to_civil(&self) -> CivilDate {
        let z = (self.0 + 0.5).floor();
        let f = self.0 + 0.5 - z;

        let alpha = ((z - 1867216.25) / 36524.25).floor();
        let a = z + 1.0 + alpha - (alpha / 4.0).floor();
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor();
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        CivilDate {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            hour: f * 24.0,
        }
    }
}

impl From<f64> for JulianDay {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One minute of hour tolerance.
    const MINUTE: f64 = 1.0 / 60.0;

    #[test]
    fn test_j2000_epoch() {
        let jd = CivilDate::new(2000, 1, 1, 12.0).to_julian_day();
        assert!((jd.value() - 2451545.0).abs() < 1.0);
    }

    #[test]
    fn test_revelation_12_date() {
        let jd = CivilDate::new(2017, 9, 23, 12.0).to_julian_day();
        assert!((jd.value() - 2458019.5).abs() < 1.5);
    }

    #[test]
    fn test_leap_day_continuity() {
        let feb29 = CivilDate::new(2020, 2, 29, 12.0).to_julian_day();
        let mar1 = CivilDate::new(2020, 3, 1, 12.0).to_julian_day();
        assert!((mar1.value() - feb29.value() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_year_boundary_continuity() {
        let dec31 = CivilDate::new(2019, 12, 31, 12.0).to_julian_day();
        let jan1 = CivilDate::new(2020, 1, 1, 12.0).to_julian_day();
        assert!((jan1.value() - dec31.value() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_bc_date_positive_and_early() {
        // 3 BC = astronomical year -2
        let jd = CivilDate::new(-2, 9, 14, 12.0).to_julian_day();
        assert!(jd.value() > 0.0);
        assert!(jd.value() < 2_000_000.0);
    }

    #[test]
    fn test_noon_midnight_offset() {
        let noon = CivilDate::new(2020, 1, 1, 12.0).to_julian_day();
        let midnight = CivilDate::new(2020, 1, 1, 0.0).to_julian_day();
        assert!((noon.value() - midnight.value() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_inverse_recovers_j2000() {
        let d = JulianDay::new(2451545.0).to_civil();
        assert_eq!((d.year, d.month, d.day), (2000, 1, 1));
        assert!((d.hour - 12.0).abs() < MINUTE);
    }

    #[test]
    fn test_inverse_bc_year_astronomical_numbering() {
        let jd = CivilDate::new(-1206, 10, 30, 14.0).to_julian_day();
        let d = jd.to_civil();
        assert_eq!((d.year, d.month, d.day), (-1206, 10, 30));
        assert!((d.hour - 14.0).abs() < MINUTE);
    }

    #[test]
    fn test_round_trip_modern_date() {
        let original = CivilDate::new(2014, 4, 15, 7.0);
        let back = original.to_julian_day().to_civil();
        assert_eq!((back.year, back.month, back.day), (2014, 4, 15));
        assert!((back.hour - 7.0).abs() < MINUTE);
    }

    #[test]
    fn test_negative_jd_is_defined() {
        // Nonsense astronomically, but the conversion stays total.
        let d = JulianDay::new(-10.0).to_civil();
        assert!(d.month >= 1 && d.month <= 12);
    }
}
