//! Interactive board host.
//!
//! # Responsibility
//! - Wire one store and two filtered list views into a line-oriented
//!   command loop.
//! - Keep output deterministic for quick local sanity checks.

use projectboard_core::{
    default_log_level, init_logging, submit_draft, ProjectDraft, ProjectId, ProjectListView,
    ProjectStatus, ProjectStore,
};
use std::io::{self, BufRead};

const HELP: &str = "commands:
  add <title> | <description> | <people>   create a project (people 1..=5)
  move <id> <active|finished>              move a project between lists
  list                                     print both lists
  help                                     show this text
  quit                                     exit";

enum Outcome {
    Changed,
    Unchanged,
    Quit,
}

fn main() {
    // Logging is opt-in for the CLI host; the core works without it.
    if let Ok(log_dir) = std::env::var("PROJECTBOARD_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("projectboard {}", projectboard_core::core_version());
    println!("{HELP}");

    let mut store = ProjectStore::new();
    let active = ProjectListView::attach(&mut store, ProjectStatus::Active);
    let finished = ProjectListView::attach(&mut store, ProjectStatus::Finished);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        match run_command(line.trim(), &mut store) {
            Outcome::Quit => break,
            Outcome::Changed => print_board(&active, &finished),
            Outcome::Unchanged => {}
        }
    }
}

fn run_command(line: &str, store: &mut ProjectStore) -> Outcome {
    if line.is_empty() {
        return Outcome::Unchanged;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "quit" | "exit" => Outcome::Quit,
        "help" => {
            println!("{HELP}");
            Outcome::Unchanged
        }
        "list" => Outcome::Changed,
        "add" => run_add(rest, store),
        "move" => run_move(rest, store),
        other => {
            println!("unknown command `{other}`; try `help`");
            Outcome::Unchanged
        }
    }
}

fn run_add(rest: &str, store: &mut ProjectStore) -> Outcome {
    let mut fields = rest.splitn(3, '|').map(str::trim);
    let draft = ProjectDraft::new(
        fields.next().unwrap_or(""),
        fields.next().unwrap_or(""),
        fields.next().unwrap_or(""),
    );

    match submit_draft(store, &draft) {
        Ok(id) => {
            println!("added {id}");
            Outcome::Changed
        }
        Err(err) => {
            println!("rejected: {err}");
            Outcome::Unchanged
        }
    }
}

fn run_move(rest: &str, store: &mut ProjectStore) -> Outcome {
    let (id_text, status_text) = match rest.split_once(char::is_whitespace) {
        Some(parts) => parts,
        None => {
            println!("usage: move <id> <active|finished>");
            return Outcome::Unchanged;
        }
    };

    let id = match ProjectId::parse_str(id_text.trim()) {
        Ok(id) => id,
        Err(_) => {
            println!("`{}` is not a project id", id_text.trim());
            return Outcome::Unchanged;
        }
    };

    let status = match ProjectStatus::parse(status_text) {
        Some(status) => status,
        None => {
            println!("`{}` is not a status; use active or finished", status_text.trim());
            return Outcome::Unchanged;
        }
    };

    // Unknown ids and same-status moves are silent no-ops in the store;
    // reprint the board either way so the user sees current state.
    store.move_project(id, status);
    Outcome::Changed
}

fn print_board(active: &ProjectListView, finished: &ProjectListView) {
    print_list("ACTIVE", active);
    print_list("FINISHED", finished);
}

fn print_list(label: &str, view: &ProjectListView) {
    println!("{label} PROJECTS ({})", view.len());
    for project in view.projects() {
        let people_word = if project.people == 1 { "person" } else { "people" };
        println!(
            "  [{}] {} - {} ({} {people_word} assigned)",
            project.id, project.title, project.description, project.people
        );
    }
}
