//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and URLs so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userdesk";

/// Crate version, as set in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// `User-Agent` header sent with every directory request.
pub const USER_AGENT: &str = concat!("userdesk/", env!("CARGO_PKG_VERSION"));

/// Local config filename (e.g. `.userdesk.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userdesk.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userdesk";

/// Remote user directory used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERDESK_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "USERDESK_TIMEOUT_SECS";
pub const ENV_FORMAT: &str = "USERDESK_FORMAT";
