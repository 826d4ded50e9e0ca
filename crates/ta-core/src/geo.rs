//! Geographic coordinate type and geofence utilities.
//!
//! `GeoCoord` uses `f64` latitude/longitude.  A geofence radius is typically
//! a few hundred metres, so single precision (~1 m at the equator) would eat
//! a visible share of the tolerance.
//!
//! Everything here is a pure function of its inputs: no shared state, safe to
//! call from any number of threads.

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Mean Earth radius used by the haversine formula, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in signed decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoCoord {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lon: f64,
}

impl GeoCoord {
    /// Unchecked constructor.  Out-of-range values are accepted; use
    /// [`GeoCoord::validated`] at ingestion points.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a coordinate, rejecting non-finite components, latitudes
    /// outside [-90, 90] and longitudes outside [-180, 180].
    pub fn validated(lat: f64, lon: f64) -> CoreResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoreError::InvalidInput(format!(
                "coordinate ({lat}, {lon}) is not finite"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::InvalidInput(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::InvalidInput(format!(
                "longitude {lon} outside [-180, 180]"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Re-check an already constructed coordinate (e.g. one deserialized
    /// from configuration).
    pub fn validate(self) -> CoreResult<Self> {
        Self::validated(self.lat, self.lon)
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric and exactly zero for identical inputs.  NaN components
    /// propagate to a NaN result; nothing here panics.
    pub fn distance_m(self, other: GeoCoord) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl std::fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Great-circle distance between `a` and `b`, metres.
#[inline]
pub fn distance(a: GeoCoord, b: GeoCoord) -> f64 {
    a.distance_m(b)
}

/// `true` when `user` lies within `radius_m` of `reference`.  The boundary
/// is inclusive.
#[inline]
pub fn is_within_radius(user: GeoCoord, reference: GeoCoord, radius_m: f64) -> bool {
    distance(user, reference) <= radius_m
}

/// Distance and verdict computed together.
pub fn evaluate(user: GeoCoord, reference: GeoCoord, radius_m: f64) -> GeofenceResult {
    let distance_m = distance(user, reference);
    tracing::debug!(%user, %reference, distance_m, radius_m, "geofence distance");
    GeofenceResult {
        distance_m,
        within_radius: distance_m <= radius_m,
    }
}

/// Validate a radius before it reaches a comparison: NaN, infinite and
/// negative values are rejected.
pub fn check_radius(radius_m: f64) -> CoreResult<f64> {
    if radius_m.is_nan() || radius_m.is_infinite() || radius_m < 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "radius {radius_m} must be a finite number of metres >= 0"
        )));
    }
    Ok(radius_m)
}

// ── GeofenceResult ────────────────────────────────────────────────────────────

/// Outcome of one geofence evaluation.  Computed on demand, never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeofenceResult {
    pub distance_m: f64,
    pub within_radius: bool,
}

// ── Geofence ──────────────────────────────────────────────────────────────────

/// A circular perimeter around a fixed centre.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    pub center: GeoCoord,
    pub radius_m: f64,
}

impl Geofence {
    /// Build a geofence, validating both the centre and the radius.
    pub fn new(center: GeoCoord, radius_m: f64) -> CoreResult<Self> {
        Ok(Self {
            center: center.validate()?,
            radius_m: check_radius(radius_m)?,
        })
    }

    /// Evaluate `user` against this perimeter.
    #[inline]
    pub fn check(&self, user: GeoCoord) -> GeofenceResult {
        evaluate(user, self.center, self.radius_m)
    }

    #[inline]
    pub fn contains(&self, user: GeoCoord) -> bool {
        is_within_radius(user, self.center, self.radius_m)
    }
}
