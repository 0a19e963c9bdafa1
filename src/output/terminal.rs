//! Terminal renderer: colored table for the list, labelled lines for details.

use colored::Colorize;

use crate::coordinator::CrudState;
use crate::detail::DetailView;
use crate::models::{FetchStatus, User, ViewMode};
use crate::output::OutputRenderer;

/// Terminal output renderer.
pub struct TerminalRenderer;

const LOADING: &str = "Loading...";

impl OutputRenderer for TerminalRenderer {
    fn render_users(&self, state: &CrudState) -> String {
        if let Some(screen) = status_screen(state.status()) {
            return screen;
        }

        let mut output = format!("{}\n\n", "User Management".bold());
        match state.mode() {
            ViewMode::List => output.push_str(&render_table(state.users())),
            ViewMode::Create => {
                output.push_str(&format!(" {}\n", "Create User".cyan().bold()));
                output.push_str(&render_form("", "", ""));
            }
            ViewMode::Edit(user) => {
                output.push_str(&format!(
                    " {} {}\n",
                    "Edit User".cyan().bold(),
                    format!("#{}", user.id).dimmed()
                ));
                output.push_str(&render_form(&user.name, &user.email, &user.phone));
            }
        }
        output
    }

    fn render_detail(&self, view: &DetailView) -> String {
        if let Some(screen) = status_screen(&view.status) {
            return screen;
        }

        let mut output = format!("{}\n\n", "User Details".bold());
        let Some(user) = &view.user else {
            return output;
        };

        let company = user.company.as_ref().map(|c| c.name.as_str()).unwrap_or("");
        let address = user.address.as_ref().map(|a| a.one_line()).unwrap_or_default();
        let lines = [
            ("Name:", user.name.as_str()),
            ("Email:", user.email.as_str()),
            ("Phone:", user.phone.as_str()),
            ("Username:", user.username.as_deref().unwrap_or("")),
            ("Website:", user.website.as_deref().unwrap_or("")),
            ("Company:", company),
            ("Address:", address.as_str()),
        ];
        for (label, value) in lines {
            output.push_str(&format!(" {} {}\n", format!("{label:<9}").cyan(), value));
        }
        output
    }
}

/// Loading and error states replace the whole screen.
fn status_screen(status: &FetchStatus) -> Option<String> {
    match status {
        FetchStatus::Loading => Some(format!("{}\n", LOADING.dimmed())),
        FetchStatus::Error(msg) => Some(format!("{} {}\n", "✖".red().bold(), msg.red())),
        FetchStatus::Ready => None,
    }
}

fn render_table(users: &[User]) -> String {
    if users.is_empty() {
        return format!(" {}\n", "No users.".dimmed());
    }

    let headers = ["ID", "Name", "Email", "Phone"];
    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|u| [u.id.to_string(), u.name.clone(), u.email.clone(), u.phone.clone()])
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    output.push_str(&format!(" {}\n", header_line.join("  ").bold()));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        output.push_str(&format!(" {}\n", cells.join("  ")));
    }

    output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
    output.push_str(&format!(
        " {} {}\n",
        users.len().to_string().bold(),
        if users.len() == 1 { "user" } else { "users" }
    ));
    output
}

fn render_form(name: &str, email: &str, phone: &str) -> String {
    let mut output = String::new();
    for (label, value) in [("Name", name), ("Email", email), ("Phone", phone)] {
        output.push_str(&format!("   {} {}\n", format!("{label:<6}").cyan(), value));
    }
    output
}
