//! userdesk — terminal client for a remote user directory.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userdesk::config;
use userdesk::constants;
use userdesk::coordinator;
use userdesk::detail;
use userdesk::directory;
use userdesk::env;
use userdesk::models;
use userdesk::output;
use userdesk::routes;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{Cli, Command, CreateArgs, EditArgs};
use config::Config;
use coordinator::{Coordinator, Outcome};
use detail::DetailFetch;
use directory::{HttpDirectory, UserDirectory};
use env::Env;
use models::FetchStatus;
use output::OutputRenderer;
use routes::Route;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    if matches!(cli.command, Command::Version) {
        return run_version();
    }

    let work_dir = std::env::current_dir().ok();
    let mut config =
        Config::load(work_dir.as_deref(), &Env::real()).context("failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.directory.base_url = base_url;
    }
    if let Some(format) = cli.format {
        config.display.format = format;
    }

    let directory: Arc<dyn UserDirectory> = Arc::new(
        HttpDirectory::from_config(&config.directory)
            .context("failed to set up the directory client")?,
    );
    tracing::debug!(base_url = %config.directory.base_url, "using user directory");
    let renderer = output::renderer_for(config.display.format);

    match cli.command {
        Command::List => run_list(directory, renderer.as_ref()).await,
        Command::Show(args) => run_show(directory, args.id, renderer.as_ref()).await,
        Command::Open(args) => match args.path {
            Route::List => run_list(directory, renderer.as_ref()).await,
            Route::Detail(id) => run_show(directory, id, renderer.as_ref()).await,
        },
        Command::Create(args) => run_create(directory, &args, renderer.as_ref()).await,
        Command::Edit(args) => run_edit(directory, &args, renderer.as_ref()).await,
        Command::Delete(args) => run_delete(directory, args.id, renderer.as_ref()).await,
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Show the user list.
async fn run_list(directory: Arc<dyn UserDirectory>, renderer: &dyn OutputRenderer) -> Result<()> {
    let screen = Coordinator::new(directory);
    screen.initialize().await;
    print_users(&screen, renderer)
}

/// Show the detail page for one user.
async fn run_show(
    directory: Arc<dyn UserDirectory>,
    id: u64,
    renderer: &dyn OutputRenderer,
) -> Result<()> {
    let page = DetailFetch::new(directory);
    page.load(id).await;

    let view = page.view();
    println!("{}", renderer.render_detail(&view));
    exit_on_error(&view.status);
    Ok(())
}

/// Create a user through the create form.
async fn run_create(
    directory: Arc<dyn UserDirectory>,
    args: &CreateArgs,
    renderer: &dyn OutputRenderer,
) -> Result<()> {
    let screen = open_screen(directory, renderer).await;
    screen.begin_create();

    let outcome = screen.submit_create(&args.draft()).await;
    print_users(&screen, renderer)?;
    check_submission(outcome, "create")
}

/// Edit a user through the edit form.
async fn run_edit(
    directory: Arc<dyn UserDirectory>,
    args: &EditArgs,
    renderer: &dyn OutputRenderer,
) -> Result<()> {
    let screen = open_screen(directory, renderer).await;
    if !screen.begin_edit_by_id(args.id).is_applied() {
        bail!("no user with id {} in the directory listing", args.id);
    }

    let current = screen
        .mode()
        .current_user()
        .map(|u| u.to_draft())
        .context("edit form did not open")?;
    let outcome = screen.submit_update(&args.draft_over(current)).await;
    print_users(&screen, renderer)?;
    check_submission(outcome, "update")
}

/// Delete a user from the list screen.
async fn run_delete(
    directory: Arc<dyn UserDirectory>,
    id: u64,
    renderer: &dyn OutputRenderer,
) -> Result<()> {
    let screen = open_screen(directory, renderer).await;
    screen.delete_user(id).await;
    print_users(&screen, renderer)
}

/// Initialize the list screen, rendering and exiting if the list cannot load.
async fn open_screen(
    directory: Arc<dyn UserDirectory>,
    renderer: &dyn OutputRenderer,
) -> Coordinator {
    let screen = Coordinator::new(directory);
    if let Outcome::Failed(err) = screen.initialize().await {
        tracing::debug!(error = %err, "list fetch failed");
        println!("{}", renderer.render_users(&screen.snapshot()));
        process::exit(1);
    }
    screen
}

fn print_users(screen: &Coordinator, renderer: &dyn OutputRenderer) -> Result<()> {
    let state = screen.snapshot();
    println!("{}", renderer.render_users(&state));
    exit_on_error(state.status());
    Ok(())
}

/// Error screens exit non-zero after they have been shown.
fn exit_on_error(status: &FetchStatus) {
    if status.is_error() {
        process::exit(1);
    }
}

/// The form stays open on a failed or ignored submission; say why.
fn check_submission(outcome: Outcome, action: &str) -> Result<()> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Ignored => bail!("{action} ignored: name, email and phone are all required"),
        Outcome::Failed(err) => Err(err).with_context(|| format!("failed to {action} user")),
        Outcome::Discarded => bail!("{action} was discarded"),
    }
}
