//! Reducer for the user-management screen.
//!
//! Every change to the screen goes through [`CrudState::apply`], which
//! is synchronous and side-effect free apart from mutating the state it
//! is called on. The async [`Coordinator`](super::Coordinator) only decides
//! which event to apply once a request has resolved.

use serde::Serialize;

use crate::models::{FetchStatus, MSG_DELETE_USER, MSG_FETCH_USERS, User, ViewMode};

/// Identifies one opening of the create/edit form.
///
/// Opening a form or cancelling starts a new session, so a submission
/// that resolves after the user moved on can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormSession(u64);

/// Something that happened to the screen.
#[derive(Debug, Clone)]
pub enum CrudEvent {
    /// The initial list fetch was dispatched.
    LoadStarted,
    /// The initial list fetch succeeded.
    Loaded(Vec<User>),
    /// The initial list fetch failed.
    LoadFailed,
    BeginCreate,
    BeginEdit(User),
    Cancel,
    /// The directory confirmed a create issued from `session`.
    Created { session: FormSession, user: User },
    /// The directory confirmed an update issued from `session`.
    Updated { session: FormSession, user: User },
    /// The directory confirmed a delete.
    Deleted(u64),
    /// A delete request failed.
    DeleteFailed(u64),
}

/// Complete state of the user-management screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrudState {
    users: Vec<User>,
    mode: ViewMode,
    status: FetchStatus,
    #[serde(skip)]
    initialized: bool,
    #[serde(skip)]
    session: u64,
}

impl CrudState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users in directory order, followed by users created since.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// The user being edited, if the edit form is open.
    pub fn current_user(&self) -> Option<&User> {
        self.mode.current_user()
    }

    /// Whether the initial list fetch has been dispatched.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The form session that is currently open.
    pub fn session(&self) -> FormSession {
        FormSession(self.session)
    }

    pub fn find(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Apply an event. Returns `false` when the event was rejected and
    /// left the state untouched.
    pub fn apply(&mut self, event: CrudEvent) -> bool {
        match event {
            CrudEvent::LoadStarted => {
                if self.initialized {
                    return false;
                }
                self.initialized = true;
                self.status = FetchStatus::Loading;
                true
            }
            CrudEvent::Loaded(users) => {
                self.users = users;
                self.status = FetchStatus::Ready;
                true
            }
            CrudEvent::LoadFailed => {
                self.status = FetchStatus::Error(MSG_FETCH_USERS.to_string());
                true
            }
            CrudEvent::BeginCreate => {
                self.open(ViewMode::Create);
                true
            }
            CrudEvent::BeginEdit(user) => {
                if self.find(user.id).is_none() {
                    return false;
                }
                self.open(ViewMode::Edit(user));
                true
            }
            CrudEvent::Cancel => {
                self.open(ViewMode::List);
                true
            }
            CrudEvent::Created { session, user } => {
                if self.find(user.id).is_some() {
                    tracing::warn!(id = user.id, "created user reuses an existing id");
                }
                self.users.push(user);
                if session == self.session() && matches!(self.mode, ViewMode::Create) {
                    self.open(ViewMode::List);
                }
                true
            }
            CrudEvent::Updated { session, user } => {
                if let Some(existing) = self.users.iter_mut().find(|u| u.id == user.id) {
                    *existing = user;
                }
                if session == self.session() && matches!(self.mode, ViewMode::Edit(_)) {
                    self.open(ViewMode::List);
                }
                true
            }
            CrudEvent::Deleted(id) => {
                self.users.retain(|u| u.id != id);
                true
            }
            CrudEvent::DeleteFailed(_) => {
                self.status = FetchStatus::Error(MSG_DELETE_USER.to_string());
                true
            }
        }
    }

    fn open(&mut self, mode: ViewMode) {
        self.session += 1;
        self.mode = mode;
    }
}
