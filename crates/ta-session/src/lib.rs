//! `ta-session` — the client-side state and decisions around the core
//! computations.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`session`]   | `Teacher`, `Session`, `PersistedSession`                  |
//! | [`store`]     | `SessionStore` trait, `MemoryStore`, `JsonFileStore`      |
//! | [`guard`]     | `Route`, `Access`, `guard`                                |
//! | [`window`]    | `AttendanceWindow`, `Countdown`                           |
//! | [`form`]      | `parse_radius_input`, `parse_attendance_time`             |
//! | [`api`]       | `AttendanceApi` trait, `Registration`, `RecordingApi`     |
//! | [`location`]  | `LocationProvider` trait, `LocationFailure`, `FixedLocation` |
//! | [`flow`]      | `login`, `register`, `submit_radius`, `verify_location`, `submit_attendance`, `logout` |
//! | [`dashboard`] | `Dashboard`, `AttendanceStatus`, `LocationStatus`         |
//! | [`error`]     | `SessionError`, `SessionResult<T>`                        |
//!
//! Nothing here reads the system clock or touches the network directly:
//! time is passed in, and the service and device sit behind traits.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod flow;
pub mod form;
pub mod guard;
pub mod location;
pub mod session;
pub mod store;
pub mod window;


pub use api::{ApiCall, AttendanceApi, RecordingApi, Registration};
pub use dashboard::{AttendanceStatus, Dashboard, LocationStatus};
pub use error::{SessionError, SessionResult};
pub use guard::{Access, Route, guard};
pub use location::{FixedLocation, LocationFailure, LocationProvider};
pub use session::{PersistedSession, Session, Teacher};
pub use store::{JsonFileStore, MemoryStore, SessionStore};
pub use window::{AttendanceWindow, Countdown};
