//! HTTP client for the Stellarium RemoteControl API
//!
//! Stellarium exposes a plugin HTTP server (default port 8090) whose
//! endpoints take form-encoded POSTs and answer with JSON or plain
//! text. This client wraps the endpoints used for prophetic event
//! visualization.

use crate::error::StellariumError;
use crate::events::PropheticEvent;
use crate::locations::{find_location, Location};
use prophecy_domain::{angular_separation, CivilDate, EquatorialCoord, JulianDay, SeparationClass};
use serde_json::Value;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Default RemoteControl API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8090/api";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How the view frames a focused object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    /// Center and zoom in on the object
    Zoom,
    /// Center without changing the field of view
    Center,
}

impl FocusMode {
    fn as_str(self) -> &'static str {
        match self {
            FocusMode::Zoom => "zoom",
            FocusMode::Center => "center",
        }
    }
}

/// Toggleable Stellarium display layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOption {
    /// Constellation stick figures
    ConstellationLines,
    /// Constellation names
    ConstellationLabels,
    /// Constellation artwork
    ConstellationArt,
    /// Atmospheric scattering (blue sky)
    Atmosphere,
    /// Ground and horizon landscape
    Ground,
    /// N/S/E/W markers
    CardinalPoints,
    /// RA/Dec grid
    EquatorialGrid,
    /// Alt/Az grid
    AzimuthalGrid,
    /// Ecliptic path
    EclipticLine,
    /// Planet names
    PlanetLabels,
    /// Star names
    StarLabels,
}

impl DisplayOption {
    /// All display options.
    pub const ALL: [DisplayOption; 11] = [
        DisplayOption::ConstellationLines,
        DisplayOption::ConstellationLabels,
        DisplayOption::ConstellationArt,
        DisplayOption::Atmosphere,
        DisplayOption::Ground,
        DisplayOption::CardinalPoints,
        DisplayOption::EquatorialGrid,
        DisplayOption::AzimuthalGrid,
        DisplayOption::EclipticLine,
        DisplayOption::PlanetLabels,
        DisplayOption::StarLabels,
    ];

    /// Stellarium action id for this option.
    pub fn action_id(self) -> &'static str {
        match self {
            DisplayOption::ConstellationLines => "actionShow_Constellation_Lines",
            DisplayOption::ConstellationLabels => "actionShow_Constellation_Labels",
            DisplayOption::ConstellationArt => "actionShow_Constellation_Art",
            DisplayOption::Atmosphere => "actionShow_Atmosphere",
            DisplayOption::Ground => "actionShow_Ground",
            DisplayOption::CardinalPoints => "actionShow_Cardinal_Points",
            DisplayOption::EquatorialGrid => "actionShow_Equatorial_Grid",
            DisplayOption::AzimuthalGrid => "actionShow_Azimuthal_Grid",
            DisplayOption::EclipticLine => "actionShow_Ecliptic_Line",
            DisplayOption::PlanetLabels => "actionShow_Planets_Labels",
            DisplayOption::StarLabels => "actionShow_Stars_Labels",
        }
    }

    /// Lowercase option name.
    pub fn name(self) -> &'static str {
        match self {
            DisplayOption::ConstellationLines => "constellation_lines",
            DisplayOption::ConstellationLabels => "constellation_labels",
            DisplayOption::ConstellationArt => "constellation_art",
            DisplayOption::Atmosphere => "atmosphere",
            DisplayOption::Ground => "ground",
            DisplayOption::CardinalPoints => "cardinal_points",
            DisplayOption::EquatorialGrid => "equatorial_grid",
            DisplayOption::AzimuthalGrid => "azimuthal_grid",
            DisplayOption::EclipticLine => "ecliptic_line",
            DisplayOption::PlanetLabels => "planet_labels",
            DisplayOption::StarLabels => "star_labels",
        }
    }
}

impl FromStr for DisplayOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayOption::ALL
            .into_iter()
            .find(|opt| opt.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = DisplayOption::ALL.iter().map(|o| o.name()).collect();
                format!("Unknown option: {}. Available: {}", s, names.join(", "))
            })
    }
}

/// Compass directions with a comfortable horizon altitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizonDirection {
    /// Azimuth 0
    North,
    /// Azimuth 45
    Northeast,
    /// Azimuth 90
    East,
    /// Azimuth 135
    Southeast,
    /// Azimuth 180
    South,
    /// Azimuth 225
    Southwest,
    /// Azimuth 270
    West,
    /// Azimuth 315
    Northwest,
    /// Straight up
    Zenith,
}

impl HorizonDirection {
    /// (azimuth, altitude) pair for this direction.
    pub fn az_alt(self) -> (f64, f64) {
        match self {
            HorizonDirection::North => (0.0, 15.0),
            HorizonDirection::Northeast => (45.0, 15.0),
            HorizonDirection::East => (90.0, 15.0),
            HorizonDirection::Southeast => (135.0, 15.0),
            HorizonDirection::South => (180.0, 15.0),
            HorizonDirection::Southwest => (225.0, 15.0),
            HorizonDirection::West => (270.0, 15.0),
            HorizonDirection::Northwest => (315.0, 15.0),
            HorizonDirection::Zenith => (0.0, 90.0),
        }
    }
}

impl FromStr for HorizonDirection {
    type Err = StellariumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "").as_str() {
            "north" => Ok(HorizonDirection::North),
            "northeast" => Ok(HorizonDirection::Northeast),
            "east" => Ok(HorizonDirection::East),
            "southeast" => Ok(HorizonDirection::Southeast),
            "south" => Ok(HorizonDirection::South),
            "southwest" => Ok(HorizonDirection::Southwest),
            "west" => Ok(HorizonDirection::West),
            "northwest" => Ok(HorizonDirection::Northwest),
            "zenith" => Ok(HorizonDirection::Zenith),
            other => Err(StellariumError::UnknownDirection(other.to_string())),
        }
    }
}

/// Simulation clock state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInfo {
    /// Simulation time as a Julian Day
    pub julian_day: JulianDay,
    /// Simulation time as a proleptic Gregorian date
    pub civil: CivilDate,
    /// Time flow multiplier (0 = paused, 1 = real-time)
    pub time_rate: f64,
}

/// Position and visibility of one body in the current sky
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStatus {
    /// Object name
    pub name: String,
    /// Altitude above horizon in degrees
    pub altitude: f64,
    /// Azimuth in degrees
    pub azimuth: f64,
    /// Short constellation label
    pub constellation: String,
    /// Visual magnitude
    pub magnitude: Option<f64>,
    /// Illuminated fraction for Moon and inner planets
    pub phase: Option<f64>,
    /// Whether the body is above the horizon
    pub visible: bool,
}

/// Angular separation between two objects with its classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparationReport {
    /// Separation in degrees
    pub degrees: f64,
    /// How close the pairing counts as
    pub class: SeparationClass,
}

/// One month where two planets were within the conjunction threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionHit {
    /// Astronomical year of the hit
    pub year: i32,
    /// Month of the hit
    pub month: u32,
    /// Separation in degrees at mid-month noon
    pub separation_deg: f64,
}

/// Client for a running Stellarium instance
pub struct StellariumClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for StellariumClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl StellariumClient {
    /// Create a client against a custom base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Value, StellariumError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StellariumError::Http {
                status: status.as_u16(),
                body,
            });
        }

        // Some endpoints answer plain text rather than JSON.
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    async fn post_form(
        &self,
        endpoint: &str,
        form: &[(&str, String)],
    ) -> Result<String, StellariumError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.post(&url).form(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StellariumError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Full status document from `main/status`.
    pub async fn status(&self) -> Result<Value, StellariumError> {
        self.get("main/status", &[]).await
    }

    /// Current simulation time as Julian Day, Gregorian date, and rate.
    pub async fn time_info(&self) -> Result<TimeInfo, StellariumError> {
        let status = self.status().await?;
        let time = status
            .get("time")
            .ok_or_else(|| StellariumError::InvalidResponse("Missing time block".to_string()))?;

        let jday = time
            .get("jday")
            .and_then(Value::as_f64)
            .ok_or_else(|| StellariumError::InvalidResponse("Missing jday".to_string()))?;
        let time_rate = time.get("timerate").and_then(Value::as_f64).unwrap_or(0.0);

        let julian_day = JulianDay::new(jday);
        Ok(TimeInfo {
            julian_day,
            civil: julian_day.to_civil(),
            time_rate,
        })
    }

    /// Move the observer to a pre-configured biblical location.
    pub async fn set_biblical_location(&self, name: &str) -> Result<&'static Location, StellariumError> {
        let location =
            find_location(name).ok_or_else(|| StellariumError::UnknownLocation(name.to_string()))?;
        self.set_location(location).await?;
        Ok(location)
    }

    /// Move the observer to the given location.
    pub async fn set_location(&self, location: &Location) -> Result<(), StellariumError> {
        info!(location = location.name, "Setting observer location");
        self.set_custom_location(
            location.latitude,
            location.longitude,
            location.altitude,
            location.name,
        )
        .await
    }

    /// Move the observer to arbitrary Earth coordinates.
    pub async fn set_custom_location(
        &self,
        latitude: f64,
        longitude: f64,
        altitude: i32,
        name: &str,
    ) -> Result<(), StellariumError> {
        self.post_form(
            "location/setlocationfields",
            &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("altitude", altitude.to_string()),
                ("name", name.to_string()),
                ("planet", "Earth".to_string()),
            ],
        )
        .await?;
        Ok(())
    }

    /// Jump the simulation clock to a Julian Day.
    ///
    /// When `pause` is set the time rate is zeroed in the same request.
    pub async fn set_time_julian(
        &self,
        julian_day: JulianDay,
        pause: bool,
    ) -> Result<(), StellariumError> {
        debug!(jd = julian_day.value(), pause, "Setting simulation time");
        let mut form = vec![("time", julian_day.value().to_string())];
        if pause {
            form.push(("timerate", "0".to_string()));
        }
        self.post_form("main/time", &form).await?;
        Ok(())
    }

    /// Jump the simulation clock to a proleptic Gregorian date.
    ///
    /// Returns the Julian Day the date converted to.
    pub async fn set_time_gregorian(
        &self,
        date: CivilDate,
        pause: bool,
    ) -> Result<JulianDay, StellariumError> {
        let jd = date.to_julian_day();
        self.set_time_julian(jd, pause).await?;
        Ok(jd)
    }

    /// Set the time flow multiplier (0 pauses, negative runs backwards).
    pub async fn set_time_rate(&self, rate: f64) -> Result<(), StellariumError> {
        self.post_form("main/time", &[("timerate", rate.to_string())])
            .await?;
        Ok(())
    }

    /// Center the view on an object.
    pub async fn focus(
        &self,
        target: &str,
        mode: FocusMode,
        select: bool,
    ) -> Result<(), StellariumError> {
        debug!(target, mode = mode.as_str(), "Focusing view");
        let mut form = vec![
            ("target", target.to_string()),
            ("mode", mode.as_str().to_string()),
        ];
        if select {
            form.push(("select", "true".to_string()));
        }
        self.post_form("main/focus", &form).await?;
        Ok(())
    }

    /// Search Stellarium's object catalog by name fragment.
    pub async fn find_objects(&self, term: &str) -> Result<Value, StellariumError> {
        self.get("objects/find", &[("str", term.to_string())]).await
    }

    /// Detailed info document for one object.
    pub async fn object_info(&self, name: &str) -> Result<Value, StellariumError> {
        self.get(
            "objects/info",
            &[("name", name.to_string()), ("format", "json".to_string())],
        )
        .await
    }

    /// J2000 equatorial position of an object.
    pub async fn object_position(&self, name: &str) -> Result<EquatorialCoord, StellariumError> {
        let info = self.object_info(name).await?;
        let ra_deg = info.get("raJ2000").and_then(Value::as_f64).unwrap_or(0.0);
        let dec_deg = info.get("decJ2000").and_then(Value::as_f64).unwrap_or(0.0);
        Ok(EquatorialCoord { ra_deg, dec_deg })
    }

    /// Angular separation between two objects at the current
    /// simulation time.
    pub async fn separation(
        &self,
        object1: &str,
        object2: &str,
    ) -> Result<SeparationReport, StellariumError> {
        let p1 = self.object_position(object1).await?;
        let p2 = self.object_position(object2).await?;
        let degrees = angular_separation(p1, p2);
        Ok(SeparationReport {
            degrees,
            class: SeparationClass::from_degrees(degrees),
        })
    }

    /// Set the field of view in degrees.
    pub async fn set_fov(&self, fov_degrees: f64) -> Result<(), StellariumError> {
        self.post_form("main/fov", &[("fov", fov_degrees.to_string())])
            .await?;
        Ok(())
    }

    /// Point the view at an azimuth and altitude.
    pub async fn set_view_direction(&self, azimuth: f64, altitude: f64) -> Result<(), StellariumError> {
        self.post_form(
            "main/view",
            &[("az", azimuth.to_string()), ("alt", altitude.to_string())],
        )
        .await?;
        Ok(())
    }

    /// Point the view at a compass direction just above the horizon.
    pub async fn look_toward(&self, direction: HorizonDirection) -> Result<(), StellariumError> {
        let (az, alt) = direction.az_alt();
        self.set_view_direction(az, alt).await
    }

    /// Toggle a display layer on or off.
    pub async fn toggle(&self, option: DisplayOption, enabled: bool) -> Result<(), StellariumError> {
        self.post_form(
            "stelaction/do",
            &[
                ("id", option.action_id().to_string()),
                ("value", enabled.to_string()),
            ],
        )
        .await?;
        Ok(())
    }

    /// Configure a clear night sky: constellation lines, planet
    /// labels, and the ecliptic shown. With `remove_daylight` the
    /// atmosphere is hidden so stars show even in daytime.
    pub async fn night_sky(&self, remove_daylight: bool) -> Result<(), StellariumError> {
        if remove_daylight {
            self.toggle(DisplayOption::Atmosphere, false).await?;
        }
        self.toggle(DisplayOption::ConstellationLines, true).await?;
        self.toggle(DisplayOption::PlanetLabels, true).await?;
        self.toggle(DisplayOption::EclipticLine, true).await?;
        Ok(())
    }

    /// Configure a realistic daytime view with atmosphere and ground.
    pub async fn daytime_realistic(&self) -> Result<(), StellariumError> {
        self.toggle(DisplayOption::Atmosphere, true).await?;
        self.toggle(DisplayOption::Ground, true).await?;
        self.toggle(DisplayOption::ConstellationLines, false).await?;
        self.toggle(DisplayOption::EclipticLine, false).await?;
        Ok(())
    }

    /// Save a screenshot to Stellarium's screenshot directory.
    pub async fn screenshot(&self) -> Result<(), StellariumError> {
        self.post_form(
            "stelaction/do",
            &[("id", "actionSave_Screenshot".to_string())],
        )
        .await?;
        Ok(())
    }

    /// Execute a raw Stellarium scripting command.
    pub async fn run_script(&self, code: &str) -> Result<(), StellariumError> {
        self.post_form("scripts/direct", &[("code", code.to_string())])
            .await?;
        Ok(())
    }

    /// Configure Stellarium to show a pre-dated prophetic event.
    ///
    /// Moves the observer, jumps the clock to the event's Julian Day
    /// with time paused, and focuses the view on the event's object.
    /// Returns a line-per-step report.
    pub async fn show_event(&self, event: &PropheticEvent) -> Result<String, StellariumError> {
        info!(event = event.key, "Showing prophetic event");
        let location = event
            .location()
            .ok_or_else(|| StellariumError::UnknownLocation(event.location.to_string()))?;

        let mut report = vec![format!("Showing: {}", event.description)];

        self.set_location(location).await?;
        report.push(format!(
            "Location set to {} ({}\u{b0}N, {}\u{b0}E, {}m)",
            location.name, location.latitude, location.longitude, location.altitude
        ));

        self.set_time_julian(event.julian_day(), true).await?;
        report.push(format!("Time set to Julian Date {}", event.julian_day));

        self.focus(event.focus_object, FocusMode::Zoom, true).await?;
        report.push(format!("Focused on {}", event.focus_object));

        Ok(report.join("\n"))
    }

    /// Positions of the Sun, Moon, and naked-eye planets at the
    /// current simulation time.
    pub async fn sky_snapshot(&self) -> Result<Vec<BodyStatus>, StellariumError> {
        const BODIES: [&str; 7] = ["Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn"];

        let mut statuses = Vec::with_capacity(BODIES.len());
        for name in BODIES {
            let info = self.object_info(name).await?;
            let altitude = info.get("altitude").and_then(Value::as_f64).unwrap_or(0.0);
            statuses.push(BodyStatus {
                name: name.to_string(),
                altitude,
                azimuth: info.get("azimuth").and_then(Value::as_f64).unwrap_or(0.0),
                constellation: info
                    .get("constellation-short")
                    .and_then(Value::as_str)
                    .unwrap_or("N/A")
                    .to_string(),
                magnitude: info.get("vmag").and_then(Value::as_f64),
                phase: info.get("phase").and_then(Value::as_f64),
                visible: altitude > 0.0,
            });
        }
        Ok(statuses)
    }

    /// Scan a year range for months where two planets sit within the
    /// given separation.
    ///
    /// Steps the simulation clock to noon on the 15th of each month
    /// and reads positions. A coarse survey; refine promising months
    /// with [`StellariumClient::separation`] at finer steps.
    pub async fn scan_conjunctions(
        &self,
        planet1: &str,
        planet2: &str,
        start_year: i32,
        end_year: i32,
        max_separation_degrees: f64,
    ) -> Result<Vec<ConjunctionHit>, StellariumError> {
        info!(planet1, planet2, start_year, end_year, "Scanning for conjunctions");
        let mut hits = Vec::new();

        for year in start_year..=end_year {
            for month in 1..=12 {
                let date = CivilDate::new(year, month, 15, 12.0);
                self.set_time_gregorian(date, true).await?;
                // Give Stellarium a beat to recompute positions.
                tokio::time::sleep(Duration::from_millis(100)).await;

                let report = self.separation(planet1, planet2).await?;
                if report.degrees <= max_separation_degrees {
                    debug!(year, month, separation = report.degrees, "Conjunction candidate");
                    hits.push(ConjunctionHit {
                        year,
                        month,
                        separation_deg: report.degrees,
                    });
                }
            }
        }
        Ok(hits)
    }

    /// Animate through one day at a fixed date, stepping the clock
    /// and pausing between frames. Returns the number of frames shown.
    #[allow(clippy::too_many_arguments)]
    pub async fn animate_day(
        &self,
        year: i32,
        month: u32,
        day: u32,
        start_hour: f64,
        end_hour: f64,
        step_minutes: u32,
        frame_delay: Duration,
    ) -> Result<usize, StellariumError> {
        if step_minutes == 0 {
            // A zero step would never advance past end_hour.
            return Err(StellariumError::InvalidArgument(
                "step_minutes must be greater than 0".to_string(),
            ));
        }

        let mut current_hour = start_hour;
        let mut frames = 0;

        while current_hour <= end_hour {
            let date = CivilDate::new(year, month, day, current_hour);
            self.set_time_gregorian(date, true).await?;
            tokio::time::sleep(frame_delay).await;

            current_hour += step_minutes as f64 / 60.0;
            frames += 1;
        }

        info!(frames, "Day animation complete");
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = StellariumClient::default();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_display_option_action_ids() {
        assert_eq!(
            DisplayOption::ConstellationLines.action_id(),
            "actionShow_Constellation_Lines"
        );
        assert_eq!(
            DisplayOption::PlanetLabels.action_id(),
            "actionShow_Planets_Labels"
        );
        assert_eq!(
            DisplayOption::StarLabels.action_id(),
            "actionShow_Stars_Labels"
        );
    }

    #[test]
    fn test_display_option_round_trip() {
        for opt in DisplayOption::ALL {
            assert_eq!(opt.name().parse::<DisplayOption>().ok(), Some(opt));
        }
    }

    #[test]
    fn test_display_option_unknown_lists_names() {
        let err = "nebula_art".parse::<DisplayOption>().unwrap_err();
        assert!(err.contains("constellation_lines"));
    }

    #[test]
    fn test_horizon_direction_parse() {
        assert_eq!("East".parse::<HorizonDirection>().ok(), Some(HorizonDirection::East));
        assert_eq!(HorizonDirection::East.az_alt(), (90.0, 15.0));
        assert_eq!(HorizonDirection::Zenith.az_alt(), (0.0, 90.0));
        assert!("down".parse::<HorizonDirection>().is_err());
    }

    #[test]
    fn test_focus_mode_strings() {
        assert_eq!(FocusMode::Zoom.as_str(), "zoom");
        assert_eq!(FocusMode::Center.as_str(), "center");
    }

    // Live tests (require a running Stellarium with RemoteControl enabled)

    #[tokio::test]
    #[ignore]
    async fn test_status_live() {
        let client = StellariumClient::default();
        let status = client.status().await.unwrap();
        assert!(status.get("time").is_some());
    }

    #[tokio::test]
    #[ignore]
    async fn test_show_event_live() {
        let client = StellariumClient::default();
        let event = crate::events::find_event("revelation_12_sign").unwrap();
        let report = client.show_event(event).await.unwrap();
        assert!(report.contains("Jerusalem"));
    }

    #[tokio::test]
    async fn test_animate_day_rejects_zero_step() {
        // Rejected before any request goes out, so no live instance needed.
        let client = StellariumClient::new("http://localhost:1/api");
        let result = client
            .animate_day(2017, 9, 23, 6.0, 18.0, 0, Duration::from_millis(0))
            .await;
        assert!(matches!(result, Err(StellariumError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let client = StellariumClient::new("http://localhost:1/api");
        let result = client.status().await;
        assert!(matches!(result, Err(StellariumError::Request(_))));
    }
}
