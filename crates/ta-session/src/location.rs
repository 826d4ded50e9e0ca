//! `LocationProvider` — device geolocation, seen from the client.

use thiserror::Error;

use ta_core::GeoCoord;

/// Why the device could not report a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LocationFailure {
    #[error("permission denied")]
    PermissionDenied,

    #[error("timed out")]
    Timeout,

    #[error("geolocation is not supported")]
    Unsupported,
}

pub trait LocationProvider {
    fn current_location(&self) -> Result<GeoCoord, LocationFailure>;
}

/// A provider that always answers the same way.  Used for fixed kiosk
/// installs and in tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedLocation(Result<GeoCoord, LocationFailure>);

impl FixedLocation {
    pub fn at(coord: GeoCoord) -> Self {
        Self(Ok(coord))
    }

    pub fn failing(reason: LocationFailure) -> Self {
        Self(Err(reason))
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Result<GeoCoord, LocationFailure> {
        self.0
    }
}
