//! # todo - interactive todo list
//!
//! A small menu-driven task list kept in a single JSON file.
//!
//! ```text
//! 1. Add todo
//! 2. List todos
//! 3. Delete todo
//! 4. Update todo
//! 5. Exit
//! Enter your choice:
//! ```
//!
//! Tasks are stored in `./todos.json` (or the file given with `--db`) as a plain array:
//! `[{"id":1,"task":"Buy milk"},{"id":2,"task":"Walk dog"}]`.
//!
//! Diagnostics go to stderr and are silent unless enabled, e.g. `RUST_LOG=debug todo`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod cli;
pub mod cmd;
pub mod console;
pub mod db;
pub mod error;
pub mod task;

use cli::Cli;
use cmd::run_menu;
use console::Console;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(db = %cli.db.display(), "starting");

    let mut console = Console::stdio();
    if let Err(e) = run_menu(&cli.db, &mut console) {
        // A closed or broken terminal ends the session; the exit status stays 0.
        tracing::error!("console error: {e}");
    }
}
