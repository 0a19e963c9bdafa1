//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::coordinator::CrudState;
use crate::detail::DetailView;
use crate::models::OutputFormat;

/// Trait for rendering screens to an output format.
pub trait OutputRenderer {
    /// Render the user-management screen.
    fn render_users(&self, state: &CrudState) -> String;

    /// Render the single-user detail screen.
    fn render_detail(&self, view: &DetailView) -> String;
}

/// Pick the renderer for `format`.
pub fn renderer_for(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalRenderer),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}
