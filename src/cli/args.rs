//! Clap argument types.

use clap::Parser;

use userdesk::models::{OutputFormat, UserDraft};
use userdesk::routes::Route;

/// Manage users in a remote REST user directory.
#[derive(Parser, Debug)]
#[command(name = "userdesk", version = userdesk::constants::VERSION)]
pub struct Cli {
    /// Base URL of the user directory (overrides config and environment).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format: terminal or json.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log directory requests and state changes to stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// List all users.
    List,

    /// Show the detail page for one user.
    Show(ShowArgs),

    /// Open a screen by path: `/` or `/user/{id}`.
    Open(OpenArgs),

    /// Create a user.
    Create(CreateArgs),

    /// Edit a user. Fields not given keep their current value.
    Edit(EditArgs),

    /// Delete a user.
    Delete(DeleteArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Id of the user to show.
    pub id: u64,
}

/// Arguments for the `open` subcommand.
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Screen path.
    pub path: Route,
}

/// Arguments for the `create` subcommand.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,
}

impl CreateArgs {
    pub fn draft(&self) -> UserDraft {
        UserDraft::new(&self.name, &self.email, &self.phone)
    }
}

/// Arguments for the `edit` subcommand.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Id of the user to edit.
    pub id: u64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

impl EditArgs {
    /// Lay the given flags over `current`, the form's starting values.
    pub fn draft_over(&self, current: UserDraft) -> UserDraft {
        UserDraft {
            name: self.name.clone().unwrap_or(current.name),
            email: self.email.clone().unwrap_or(current.email),
            phone: self.phone.clone().unwrap_or(current.phone),
        }
    }
}

/// Arguments for the `delete` subcommand.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Id of the user to delete.
    pub id: u64,
}
