//! Attendance configuration loaded from TOML.
//!
//! Every section is optional; missing values fall back to the defaults the
//! front-end has always shipped with (institute at Madhapur, Hyderabad,
//! 500 m radius, attendance accepted 11:00 AM – 12:00 PM).
//!
//! ```toml
//! [institute]
//! latitude         = 17.435019
//! longitude        = 78.392648
//! allowed_radius_m = 500.0
//!
//! [attendance_window]
//! start = "11:00 AM"
//! end   = "12:00 PM"
//!
//! [timetable]
//! window = "fixed-hour"        # or "declared-end"
//! csv    = "timetable.csv"     # omit to use the built-in week
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geo::{GeoCoord, Geofence};
use crate::time::{ClockTime, Period, WindowPolicy};
use crate::{CoreError, CoreResult};

/// Institute location used when no configuration overrides it.
pub const INSTITUTE_COORDINATES: GeoCoord = GeoCoord::new(17.435019, 78.392648);

/// Allowed distance from the institute, metres.
pub const ALLOWED_RADIUS_M: f64 = 500.0;

// ── Sections ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstituteSettings {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_radius")]
    pub allowed_radius_m: f64,
}

fn default_latitude() -> f64 {
    INSTITUTE_COORDINATES.lat
}

fn default_longitude() -> f64 {
    INSTITUTE_COORDINATES.lon
}

fn default_radius() -> f64 {
    ALLOWED_RADIUS_M
}

impl Default for InstituteSettings {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            allowed_radius_m: default_radius(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_start")]
    pub start: ClockTime,
    #[serde(default = "default_window_end")]
    pub end: ClockTime,
}

fn default_window_start() -> ClockTime {
    ClockTime::new_unchecked(11, 0, Period::Am)
}

fn default_window_end() -> ClockTime {
    ClockTime::new_unchecked(12, 0, Period::Pm)
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            start: default_window_start(),
            end: default_window_end(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableSettings {
    #[serde(default)]
    pub window: WindowPolicy,
    /// CSV file with the weekly timetable.  `None` selects the built-in week.
    #[serde(default)]
    pub csv: Option<PathBuf>,
}

// ── AttendanceConfig ──────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the session and schedule layers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceConfig {
    #[serde(default)]
    pub institute: InstituteSettings,
    #[serde(default)]
    pub attendance_window: WindowSettings,
    #[serde(default)]
    pub timetable: TimetableSettings,
}

impl AttendanceConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: AttendanceConfig = toml::from_str(s)
            .map_err(|e| CoreError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded attendance config");
        Ok(config)
    }

    /// Reject coordinates outside their ranges, unusable radii, and an
    /// attendance window that ends before it starts.
    pub fn validate(&self) -> CoreResult<()> {
        self.geofence()
            .map_err(|e| CoreError::Config(format!("[institute] {e}")))?;

        let start = self.attendance_window.start.minutes_since_midnight();
        let end = self.attendance_window.end.minutes_since_midnight();
        if end < start {
            return Err(CoreError::Config(format!(
                "[attendance_window] end {} is before start {}",
                self.attendance_window.end, self.attendance_window.start
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn institute(&self) -> GeoCoord {
        GeoCoord::new(self.institute.latitude, self.institute.longitude)
    }

    /// The institute perimeter.  Fails for out-of-range values.
    pub fn geofence(&self) -> CoreResult<Geofence> {
        Geofence::new(self.institute(), self.institute.allowed_radius_m)
    }
}
