use std::path::PathBuf;

use clap::Parser;

use crate::db::DEFAULT_DB_FILE;

/// Simple, file-backed todo list with an interactive menu.
/// Storage defaults to ./todos.json or a path passed via --db.
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Interactive todo list manager")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,
}
