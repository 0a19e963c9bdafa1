//! Screen paths.
//!
//! `/` is the user list, `/user/{id}` is the detail page for one user.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from resolving a screen path.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("no screen at '{0}'")]
    NotFound(String),

    #[error("invalid user id '{0}'")]
    InvalidId(String),
}

/// A screen the user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(u64),
}

impl Route {
    /// Resolve a path. A single trailing slash is tolerated.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        if trimmed == "/" {
            return Ok(Route::List);
        }

        match trimmed.strip_prefix("/user/") {
            Some(id) if !id.is_empty() && !id.contains('/') => id
                .parse::<u64>()
                .map(Route::Detail)
                .map_err(|_| RouteError::InvalidId(id.to_string())),
            _ => Err(RouteError::NotFound(path.to_string())),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "/"),
            Route::Detail(id) => write!(f, "/user/{id}"),
        }
    }
}
