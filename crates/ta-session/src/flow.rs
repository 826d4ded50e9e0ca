//! Screen actions: validate input, call the service, update the session.
//!
//! Every action leaves the session untouched when validation, the remote
//! call, or the session store fails.  Failures are logged at `warn` and returned to the caller.

use ta_core::{Geofence, GeofenceResult};

use crate::form::{parse_attendance_time, parse_radius_input};
use crate::{
    AttendanceApi, LocationProvider, Registration, Session, SessionError, SessionResult,
    SessionStore,
};

fn logged<T>(action: &str, result: SessionResult<T>) -> SessionResult<T> {
    if let Err(error) = &result {
        tracing::warn!(action, %error, "action failed");
    }
    result
}

fn email(session: &Session) -> SessionResult<&str> {
    session
        .teacher()
        .map(|t| t.email.as_str())
        .ok_or(SessionError::Unauthenticated)
}

/// Create an account.  Does not log in.
pub fn register(api: &dyn AttendanceApi, registration: &Registration) -> SessionResult<bool> {
    logged("register", api.register(registration))
}

/// Log in and persist the profile.  `Ok(false)` for rejected credentials.
pub fn login(
    session: &mut Session,
    store: &dyn SessionStore,
    api: &dyn AttendanceApi,
    email: &str,
    password: &str,
) -> SessionResult<bool> {
    let Some(teacher) = logged("login", api.login(email, password))? else {
        return Ok(false);
    };
    tracing::info!(teacher = %teacher.id, "logged in");
    session.login_with(store, teacher)?;
    Ok(true)
}

/// Validate the typed radius and forward it.  On success the session counts
/// as location-verified; the value itself is not checked against the
/// geofence.
pub fn submit_radius(
    session: &mut Session,
    api: &dyn AttendanceApi,
    input: &str,
) -> SessionResult<f64> {
    let email = email(session)?;
    let meters = parse_radius_input(input)?;
    logged("submit_radius", api.submit_radius(email, meters))?;
    session.set_radius_verified(true);
    Ok(meters)
}

/// Read the device position and check it against `fence`.  The session is
/// marked verified only when the position is inside.
pub fn verify_location(
    session: &mut Session,
    provider: &dyn LocationProvider,
    fence: &Geofence,
) -> SessionResult<GeofenceResult> {
    email(session)?;
    let coord = logged("verify_location", provider.current_location().map_err(Into::into))?;
    let coord = coord.validate()?;
    let result = fence.check(coord);
    if result.within_radius {
        session.set_radius_verified(true);
    }
    Ok(result)
}

/// Validate the typed time, forward it, and persist the attendance flag.
pub fn submit_attendance(
    session: &mut Session,
    store: &dyn SessionStore,
    api: &dyn AttendanceApi,
    input: &str,
) -> SessionResult<()> {
    let email = email(session)?;
    let time = parse_attendance_time(input)?;
    logged("submit_attendance", api.submit_attendance(email, time))?;
    session.mark_attendance_with(store)
}

/// Log out and wipe the persisted session.
pub fn logout(session: &mut Session, store: &dyn SessionStore) -> SessionResult<()> {
    session.logout_with(store)
}
