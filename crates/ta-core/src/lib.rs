//! `ta-core` — foundational types for the `rust_ta` attendance framework.
//!
//! This crate is a dependency of every other `ta-*` crate.  It has no `ta-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `EntryId`, `TeacherId`                                    |
//! | [`geo`]         | `GeoCoord`, haversine distance, `Geofence`, `GeofenceResult` |
//! | [`time`]        | `ClockTime`, `Period`, `Weekday`, `WindowPolicy`          |
//! | [`config`]      | `AttendanceConfig` (TOML)                                 |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ALLOWED_RADIUS_M, AttendanceConfig, INSTITUTE_COORDINATES};
pub use error::{CoreError, CoreResult};
pub use geo::{GeoCoord, Geofence, GeofenceResult, distance, is_within_radius};
pub use ids::{EntryId, TeacherId};
pub use time::{ClockTime, Period, Weekday, WindowPolicy, minutes_of};
