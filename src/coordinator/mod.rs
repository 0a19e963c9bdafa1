//! CRUD coordinator: drives the directory and reconciles responses.
//!
//! The coordinator owns the screen's [`CrudState`] behind a mutex and
//! never holds the lock across a request. Each operation reads what it
//! needs, awaits the directory, then applies one [`CrudEvent`] to
//! whatever the state is at that point. Overlapping operations are
//! allowed and resolve last-completed-wins.
//!
//! [`Coordinator::deactivate`] stands in for navigating away: requests
//! still in flight resolve as [`Outcome::Discarded`] and leave the state
//! alone.

pub mod state;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

use crate::directory::{DirectoryError, UserDirectory};
use crate::models::{FetchStatus, User, UserDraft, ViewMode};

pub use state::{CrudEvent, CrudState, FormSession};

/// How an operation ended.
#[derive(Debug)]
pub enum Outcome {
    /// The result was applied to the state.
    Applied,
    /// Preconditions did not hold; nothing was sent and nothing changed.
    Ignored,
    /// The directory call failed. Any state change the failure implies
    /// (an error status for list and delete) has already been applied.
    Failed(DirectoryError),
    /// The coordinator was deactivated before the call resolved.
    Discarded,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Owns the user list and view mode for one activation of the screen.
pub struct Coordinator {
    directory: Arc<dyn UserDirectory>,
    state: Mutex<CrudState>,
    token: CancellationToken,
}

impl Coordinator {
    /// Create a coordinator for a fresh activation of the screen.
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            state: Mutex::new(CrudState::new()),
            token: CancellationToken::new(),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> CrudState {
        self.state().clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state().users().to_vec()
    }

    pub fn mode(&self) -> ViewMode {
        self.state().mode().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.state().status().clone()
    }

    /// Whether the screen is still active.
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// End this activation. Pending and future requests are discarded.
    pub fn deactivate(&self) {
        tracing::debug!("coordinator deactivated");
        self.token.cancel();
    }

    /// Fetch the user list. Only the first call per activation does anything.
    pub async fn initialize(&self) -> Outcome {
        if !self.is_active() {
            return Outcome::Discarded;
        }
        if !self.state().apply(CrudEvent::LoadStarted) {
            return Outcome::Ignored;
        }

        match self.guarded(self.directory.list_users()).await {
            None => Outcome::Discarded,
            Some(Ok(users)) => {
                tracing::debug!(count = users.len(), "loaded users");
                self.state().apply(CrudEvent::Loaded(users));
                Outcome::Applied
            }
            Some(Err(err)) => {
                tracing::warn!(error = %err, "error fetching users");
                self.state().apply(CrudEvent::LoadFailed);
                Outcome::Failed(err)
            }
        }
    }

    /// Open the empty create form.
    pub fn begin_create(&self) -> Outcome {
        self.dispatch(CrudEvent::BeginCreate)
    }

    /// Open the edit form for `user`, which must be in the list.
    pub fn begin_edit(&self, user: &User) -> Outcome {
        self.dispatch(CrudEvent::BeginEdit(user.clone()))
    }

    /// Open the edit form for the listed user with `id`.
    pub fn begin_edit_by_id(&self, id: u64) -> Outcome {
        let user = self.state().find(id).cloned();
        match user {
            Some(user) => self.dispatch(CrudEvent::BeginEdit(user)),
            None => Outcome::Ignored,
        }
    }

    /// Close any open form.
    pub fn cancel(&self) -> Outcome {
        self.dispatch(CrudEvent::Cancel)
    }

    /// Submit the create form.
    ///
    /// Incomplete drafts are ignored without contacting the directory.
    /// A failed create is logged and leaves the form open.
    pub async fn submit_create(&self, draft: &UserDraft) -> Outcome {
        if !draft.is_complete() {
            return Outcome::Ignored;
        }
        let session = self.state().session();

        match self.guarded(self.directory.create_user(draft)).await {
            None => Outcome::Discarded,
            Some(Ok(user)) => {
                tracing::info!(id = user.id, "created user");
                self.state().apply(CrudEvent::Created { session, user });
                Outcome::Applied
            }
            Some(Err(err)) => {
                tracing::warn!(error = %err, "error creating user");
                Outcome::Failed(err)
            }
        }
    }

    /// Submit the edit form. The draft is laid over the user being edited.
    ///
    /// Ignored unless the edit form is open and the draft is complete.
    /// A failed update is logged and leaves the form open.
    pub async fn submit_update(&self, draft: &UserDraft) -> Outcome {
        if !draft.is_complete() {
            return Outcome::Ignored;
        }
        let (session, record) = {
            let state = self.state();
            match state.current_user() {
                Some(current) => (state.session(), draft.apply_to(current)),
                None => return Outcome::Ignored,
            }
        };

        match self.guarded(self.directory.update_user(&record)).await {
            None => Outcome::Discarded,
            Some(Ok(user)) => {
                tracing::info!(id = user.id, "updated user");
                self.state().apply(CrudEvent::Updated { session, user });
                Outcome::Applied
            }
            Some(Err(err)) => {
                tracing::warn!(id = record.id, error = %err, "error updating user");
                Outcome::Failed(err)
            }
        }
    }

    /// Delete a user. The row is removed only once the directory confirms.
    pub async fn delete_user(&self, id: u64) -> Outcome {
        match self.guarded(self.directory.delete_user(id)).await {
            None => Outcome::Discarded,
            Some(Ok(())) => {
                tracing::info!(id, "deleted user");
                self.state().apply(CrudEvent::Deleted(id));
                Outcome::Applied
            }
            Some(Err(err)) => {
                tracing::warn!(id, error = %err, "failed to delete user");
                self.state().apply(CrudEvent::DeleteFailed(id));
                Outcome::Failed(err)
            }
        }
    }

    fn dispatch(&self, event: CrudEvent) -> Outcome {
        if !self.is_active() {
            return Outcome::Discarded;
        }
        if self.state().apply(event) {
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }

    /// Run a directory call unless the activation ends first.
    async fn guarded<T>(
        &self,
        call: impl Future<Output = Result<T, DirectoryError>>,
    ) -> Option<Result<T, DirectoryError>> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            result = call => Some(result),
        }
    }

    fn state(&self) -> MutexGuard<'_, CrudState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("state", &*self.state())
            .field("active", &self.is_active())
            .finish()
    }
}
