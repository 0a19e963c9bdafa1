//! Shared types used across all modules.
//!
//! User records, form drafts and screen state live here. Other modules
//! import from here rather than reaching into each other's internals.

pub mod user;
pub mod view;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use user::{Address, Company, User, UserDraft};
pub use view::{FetchStatus, ViewMode};

/// Message shown when the initial user list cannot be loaded.
pub const MSG_FETCH_USERS: &str = "Error fetching users";

/// Message shown when a single user cannot be loaded.
pub const MSG_FETCH_DETAILS: &str = "Error fetching user details";

/// Message shown when a delete request fails.
pub const MSG_DELETE_USER: &str = "Failed to delete user";

/// Output format for rendered screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_display() {
        assert_eq!(OutputFormat::Terminal.to_string(), "terminal");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TERMINAL".parse::<OutputFormat>().unwrap(), OutputFormat::Terminal);
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("unsupported"));
    }

    #[test]
    fn output_format_serde_roundtrip() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let parsed: OutputFormat = serde_json::from_str("\"terminal\"").unwrap();
        assert_eq!(parsed, OutputFormat::Terminal);
    }
}
