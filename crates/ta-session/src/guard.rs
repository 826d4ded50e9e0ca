//! Route guard: which screens a session may open.

use std::fmt;

use crate::Session;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Register,
    Login,
    RadiusVerification,
    Attendance,
    Timetable,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Register           => "/register",
            Route::Login              => "/login",
            Route::RadiusVerification => "/radius-verification",
            Route::Attendance         => "/attendance",
            Route::Timetable          => "/timetable",
            Route::Dashboard          => "/dashboard",
        }
    }

    /// Map a path to its route.  `"/"` is the registration entry point;
    /// unknown paths yield `None` (not found).
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" | "/register"      => Some(Route::Register),
            "/login"               => Some(Route::Login),
            "/radius-verification" => Some(Route::RadiusVerification),
            "/attendance"          => Some(Route::Attendance),
            "/timetable"           => Some(Route::Timetable),
            "/dashboard"           => Some(Route::Dashboard),
            _ => None,
        }
    }

    /// Requires a logged-in teacher.
    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Register | Route::Login)
    }

    /// Requires location verification on top of login.
    pub fn requires_radius(self) -> bool {
        matches!(self, Route::Attendance | Route::Timetable)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Guard decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Allowed,
    RedirectTo(Route),
}

/// Decide whether `session` may open `route`.
pub fn guard(route: Route, session: &Session) -> Access {
    if route.is_protected() && !session.is_authenticated() {
        return Access::RedirectTo(Route::Login);
    }
    if route.requires_radius() && !session.radius_verified() {
        return Access::RedirectTo(Route::RadiusVerification);
    }
    Access::Allowed
}
