//! Menu loop and the actions behind each menu entry.
//!
//! The loop owns one `Database` for the whole session. It is loaded once up front and
//! every action that changes it writes the full list back to disk straight away.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::console::Console;
use crate::db::Database;

/// The fixed menu printed before every choice.
pub const MENU: &str = "\
1. Add todo
2. List todos
3. Delete todo
4. Update todo
5. Exit
";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Delete,
    Update,
    Exit,
}

impl MenuChoice {
    /// Map the number typed at the menu prompt. Anything outside 1..=5 is `None`.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::List),
            3 => Some(MenuChoice::Delete),
            4 => Some(MenuChoice::Update),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the interactive menu until Exit is chosen or input runs out.
pub fn run_menu<R: BufRead, W: Write>(db_path: &Path, console: &mut Console<R, W>) -> io::Result<()> {
    let mut db = Database::load(db_path);
    if db.is_empty() {
        tracing::debug!(db = %db_path.display(), "starting with an empty list");
    }
    loop {
        write!(console.out(), "{MENU}")?;
        console.prompt("Enter your choice: ")?;
        let Some(choice) = console.read_int()? else {
            tracing::debug!("input closed at menu");
            return Ok(());
        };
        let Some(choice) = choice.and_then(MenuChoice::from_number) else {
            continue;
        };
        tracing::debug!(?choice, "menu choice");

        let flow = match choice {
            MenuChoice::Add => cmd_add(&mut db, db_path, console)?,
            MenuChoice::List => {
                cmd_list(&db, console)?;
                Flow::Continue
            }
            MenuChoice::Delete => cmd_delete(&mut db, db_path, console)?,
            MenuChoice::Update => cmd_update(&mut db, db_path, console)?,
            MenuChoice::Exit => Flow::Quit,
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

/// Ask for a task text, echo it and append it with the next id.
pub fn cmd_add<R: BufRead, W: Write>(
    db: &mut Database,
    db_path: &Path,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.prompt("Enter task: ")?;
    let Some(text) = console.read_line()? else {
        return Ok(Flow::Quit);
    };
    writeln!(console.out(), "The task is {text}")?;
    db.add(text);
    save(db, db_path, console)?;
    Ok(Flow::Continue)
}

/// Print every task as `<id>. <text>`.
pub fn cmd_list<R: BufRead, W: Write>(db: &Database, console: &mut Console<R, W>) -> io::Result<()> {
    db.write_list(console.out())
}

/// Show the list, ask for an id and remove the first task carrying it.
pub fn cmd_delete<R: BufRead, W: Write>(
    db: &mut Database,
    db_path: &Path,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    cmd_list(db, console)?;
    console.prompt("Enter id to delete: ")?;
    let Some(id) = console.read_int()? else {
        return Ok(Flow::Quit);
    };
    if let Some(id) = id {
        if let Some(removed) = db.remove_first(id) {
            tracing::debug!(id, text = %removed.text, "deleted task");
        }
    }
    save(db, db_path, console)?;
    Ok(Flow::Continue)
}

/// Show the list, ask for an id and a new text, and replace the text of the first match.
pub fn cmd_update<R: BufRead, W: Write>(
    db: &mut Database,
    db_path: &Path,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    cmd_list(db, console)?;
    console.prompt("Enter id to update: ")?;
    let Some(id) = console.read_int()? else {
        return Ok(Flow::Quit);
    };
    console.prompt("Enter new task: ")?;
    let Some(text) = console.read_line()? else {
        return Ok(Flow::Quit);
    };
    if let Some(id) = id {
        if db.update_first(id, text) {
            if let Some(task) = db.get(id) {
                tracing::debug!(id, text = %task.text, "updated task");
            }
        }
    }
    save(db, db_path, console)?;
    Ok(Flow::Continue)
}

/// Persist the list. On failure the error is printed and the list is re-read from disk,
/// as if every action had reloaded the file: an unsaved change is not shown later.
fn save<R: BufRead, W: Write>(db: &mut Database, db_path: &Path, console: &mut Console<R, W>) -> io::Result<()> {
    if let Err(e) = db.save(db_path) {
        tracing::debug!(error = %e, "save failed");
        writeln!(console.out(), "{e}")?;
        *db = Database::load(db_path);
    }
    Ok(())
}
