//! Single-user detail screen.
//!
//! Independent of the list coordinator: it reads one user by id and
//! knows nothing about the list's state. Switching to another id aborts
//! the previous read, so a slow response for an old id never overwrites
//! the screen for the new one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::coordinator::Outcome;
use crate::directory::UserDirectory;
use crate::models::{FetchStatus, MSG_FETCH_DETAILS, User};

/// What the detail screen shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailView {
    pub id: Option<u64>,
    pub status: FetchStatus,
    pub user: Option<User>,
}

struct Inner {
    view: DetailView,
    token: CancellationToken,
}

/// Fetches and holds one user for the detail screen.
pub struct DetailFetch {
    directory: Arc<dyn UserDirectory>,
    inner: Mutex<Inner>,
}

impl DetailFetch {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            inner: Mutex::new(Inner {
                view: DetailView::default(),
                token: CancellationToken::new(),
            }),
        }
    }

    /// A copy of the current view.
    pub fn view(&self) -> DetailView {
        self.inner().view.clone()
    }

    /// Show the user with `id`.
    ///
    /// Asking again for the id already shown is ignored. A different id
    /// resets the screen to loading and supersedes any read in flight.
    pub async fn load(&self, id: u64) -> Outcome {
        let token = {
            let mut inner = self.inner();
            if inner.view.id == Some(id) {
                return Outcome::Ignored;
            }
            inner.token.cancel();
            inner.token = CancellationToken::new();
            inner.view = DetailView {
                id: Some(id),
                status: FetchStatus::Loading,
                user: None,
            };
            inner.token.clone()
        };

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return Outcome::Discarded,
            result = self.directory.get_user(id) => result,
        };

        let mut inner = self.inner();
        if token.is_cancelled() {
            return Outcome::Discarded;
        }
        match result {
            Ok(user) => {
                inner.view.status = FetchStatus::Ready;
                inner.view.user = Some(user);
                Outcome::Applied
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "error fetching user details");
                inner.view.status = FetchStatus::Error(MSG_FETCH_DETAILS.to_string());
                Outcome::Failed(err)
            }
        }
    }

    /// Leave the screen. A read in flight is discarded and the view cleared.
    pub fn close(&self) {
        let mut inner = self.inner();
        inner.token.cancel();
        inner.view = DetailView::default();
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for DetailFetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailFetch")
            .field("view", &self.inner().view)
            .finish()
    }
}
