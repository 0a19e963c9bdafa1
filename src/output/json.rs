//! JSON output renderer.
//!
//! The list screen renders as `{"users": [...], "mode": {...}, "status": {...}}`,
//! the detail screen as `{"id": .., "status": {...}, "user": {...}}`.

use crate::coordinator::CrudState;
use crate::detail::DetailView;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_users(&self, state: &CrudState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    fn render_detail(&self, view: &DetailView) -> String {
        serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
    }
}
