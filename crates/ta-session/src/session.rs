//! The explicit session object.
//!
//! One `Session` lives for the lifetime of the UI.  It is loaded from a
//! [`SessionStore`] at startup, passed by reference to whatever needs it, and
//! cleared at logout.  Only the teacher profile and the attendance flag are
//! persisted; location verification is per-run and always starts `false`.

use serde::{Deserialize, Serialize};

use ta_core::TeacherId;

use crate::{SessionResult, SessionStore};

// ── Teacher ───────────────────────────────────────────────────────────────────

/// Teacher profile as returned by the remote service on login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub contact_number: String,
}

// ── PersistedSession ──────────────────────────────────────────────────────────

/// The subset of session state that survives a restart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default)]
    pub teacher: Option<Teacher>,
    #[serde(default)]
    pub attendance_marked: bool,
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    teacher: Option<Teacher>,
    attendance_marked: bool,
    radius_verified: bool,
}

impl Session {
    /// A logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from `store`.  `radius_verified` always starts `false`.
    pub fn load_from(store: &dyn SessionStore) -> SessionResult<Self> {
        let persisted = store.load()?;
        tracing::debug!(
            authenticated = persisted.teacher.is_some(),
            attendance_marked = persisted.attendance_marked,
            "session restored"
        );
        Ok(Self {
            teacher: persisted.teacher,
            attendance_marked: persisted.attendance_marked,
            radius_verified: false,
        })
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        self.teacher.as_ref()
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.teacher.is_some()
    }

    #[inline]
    pub fn attendance_marked(&self) -> bool {
        self.attendance_marked
    }

    #[inline]
    pub fn radius_verified(&self) -> bool {
        self.radius_verified
    }

    pub fn login(&mut self, teacher: Teacher) {
        self.teacher = Some(teacher);
    }

    /// Clear all three pieces of state.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn mark_attendance(&mut self) {
        self.attendance_marked = true;
    }

    pub fn set_radius_verified(&mut self, verified: bool) {
        self.radius_verified = verified;
    }

    /// Snapshot of the persisted fields.
    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            teacher: self.teacher.clone(),
            attendance_marked: self.attendance_marked,
        }
    }

    // ── Store-backed transitions ──────────────────────────────────────────

    /// Log in and persist the profile.  Nothing changes if the save fails.
    pub fn login_with(&mut self, store: &dyn SessionStore, teacher: Teacher) -> SessionResult<()> {
        let mut next = self.clone();
        next.login(teacher);
        self.commit(store, next)
    }

    /// Mark attendance and persist the flag.  Nothing changes if the save
    /// fails.
    pub fn mark_attendance_with(&mut self, store: &dyn SessionStore) -> SessionResult<()> {
        let mut next = self.clone();
        next.mark_attendance();
        self.commit(store, next)
    }

    fn commit(&mut self, store: &dyn SessionStore, next: Session) -> SessionResult<()> {
        store.save(&next.persisted())?;
        *self = next;
        Ok(())
    }

    /// Log out and wipe the persisted copy.  In-memory state is cleared even
    /// if the store fails.
    pub fn logout_with(&mut self, store: &dyn SessionStore) -> SessionResult<()> {
        self.logout();
        store.clear()
    }
}
