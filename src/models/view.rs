//! Screen state shared by the coordinator and the detail fetch.

use serde::Serialize;
use strum::Display;

use super::user::User;

/// Which part of the user-management screen is showing.
///
/// The edit form always knows the user it edits, so there is no way to be
/// in edit mode without a current user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Display)]
#[serde(rename_all = "lowercase", tag = "kind", content = "user")]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Create,
    Edit(User),
}

impl ViewMode {
    /// The user being edited, if any.
    pub fn current_user(&self) -> Option<&User> {
        match self {
            ViewMode::Edit(user) => Some(user),
            ViewMode::List | ViewMode::Create => None,
        }
    }
}

/// Progress of a read from the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase", tag = "state", content = "message")]
#[strum(serialize_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl FetchStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, FetchStatus::Error(_))
    }
}
