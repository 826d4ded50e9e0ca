//! `AttendanceApi` — the remote attendance service, seen from the client.
//!
//! The service itself lives elsewhere; this crate only needs the four calls
//! the screens make.  Submissions are fire-and-forget: the client cares
//! whether the request went through, not what the server did with it.

use std::cell::RefCell;
use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use ta_core::TeacherId;

use crate::{SessionError, SessionResult, Teacher};

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub contact_number: String,
    pub password: String,
}

pub trait AttendanceApi {
    /// `Ok(true)` when the account was created, `Ok(false)` when the service
    /// declined (e.g. the e-mail is taken).
    fn register(&self, registration: &Registration) -> SessionResult<bool>;

    /// `Ok(Some(teacher))` on valid credentials, `Ok(None)` otherwise.
    fn login(&self, email: &str, password: &str) -> SessionResult<Option<Teacher>>;

    /// Forward a self-reported distance from the institute.
    fn submit_radius(&self, email: &str, meters: f64) -> SessionResult<()>;

    fn submit_attendance(&self, email: &str, time: NaiveTime) -> SessionResult<()>;
}

// ── RecordingApi ──────────────────────────────────────────────────────────────

/// One request as seen by [`RecordingApi`].
#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Register { email: String },
    Login { email: String },
    SubmitRadius { email: String, meters: f64 },
    SubmitAttendance { email: String, time: NaiveTime },
}

struct Account {
    password: String,
    teacher: Teacher,
}

/// In-memory stand-in for the remote service.  Keeps accounts, records every
/// call, and can be switched into an "unreachable" mode.
#[derive(Default)]
pub struct RecordingApi {
    accounts: RefCell<BTreeMap<String, Account>>,
    calls: RefCell<Vec<ApiCall>>,
    offline: RefCell<Option<String>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `SessionError::Api(reason)`.
    pub fn go_offline(&self, reason: impl Into<String>) {
        *self.offline.borrow_mut() = Some(reason.into());
    }

    pub fn go_online(&self) {
        self.offline.borrow_mut().take();
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) -> SessionResult<()> {
        if let Some(reason) = self.offline.borrow().as_ref() {
            return Err(SessionError::Api(reason.clone()));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl AttendanceApi for RecordingApi {
    fn register(&self, registration: &Registration) -> SessionResult<bool> {
        self.record(ApiCall::Register { email: registration.email.clone() })?;

        let mut accounts = self.accounts.borrow_mut();
        if accounts.contains_key(&registration.email) {
            return Ok(false);
        }
        let teacher = Teacher {
            id: TeacherId::new((accounts.len() + 1).to_string()),
            name: registration.name.clone(),
            email: registration.email.clone(),
            employee_id: registration.employee_id.clone(),
            contact_number: registration.contact_number.clone(),
        };
        accounts.insert(
            registration.email.clone(),
            Account { password: registration.password.clone(), teacher },
        );
        Ok(true)
    }

    fn login(&self, email: &str, password: &str) -> SessionResult<Option<Teacher>> {
        self.record(ApiCall::Login { email: email.to_owned() })?;
        Ok(self
            .accounts
            .borrow()
            .get(email)
            .filter(|a| a.password == password)
            .map(|a| a.teacher.clone()))
    }

    fn submit_radius(&self, email: &str, meters: f64) -> SessionResult<()> {
        self.record(ApiCall::SubmitRadius { email: email.to_owned(), meters })
    }

    fn submit_attendance(&self, email: &str, time: NaiveTime) -> SessionResult<()> {
        self.record(ApiCall::SubmitAttendance { email: email.to_owned(), time })
    }
}
