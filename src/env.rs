//! Source of `USERDESK_*` settings.
//!
//! Config loading reads variables through [`Env`] so tests can pass a fixed
//! set of values instead of mutating the process environment.

use std::collections::HashMap;

/// Variable lookup, either from the process or from a fixed map.
#[derive(Clone, Debug)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the process environment.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// Read only from `vars`.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let fixed = vars.into_iter().map(|(k, v)| (k.into(), v.into()));
        Self {
            fixed: Some(fixed.collect()),
        }
    }

    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.fixed {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up a variable, treating an empty value as unset.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|v| !v.is_empty())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
