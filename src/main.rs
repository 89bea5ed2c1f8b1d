//! # KB - Terminal Kanban Board
//!
//! A three-column kanban board (To Do, In Progress, Done) driven entirely from
//! the keyboard.
//!
//! ## Key Bindings
//!
//! - `←` / `→` - focus the previous / next column (wraps around)
//! - `↑` / `↓` - select a task in the focused column
//! - `enter` - move the selected task to the next column
//! - `n` - add a task to the focused column (`enter` moves from title to
//!   description, then submits)
//! - `/` - filter the focused column; `enter` applies, `backspace` clears
//! - `q`, `esc`, `ctrl+c` - quit from anywhere
//!
//! ## Quick Start
//!
//! ```bash
//! # Board with the built-in sample tasks
//! kb
//!
//! # Board seeded from a file, re-laid out on every resize
//! kb --seed board.json --resize every
//! ```
//!
//! Tasks exist only for the session. Debug logs go to `debug.log` unless
//! `--log-file` says otherwise; `RUST_LOG` sets the level.

use std::fs;
use std::path::Path;

use clap::Parser;
use log::info;

pub mod cli;
pub mod error;
pub mod fields;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod board;
    pub mod colors;
    pub mod column_list;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
}

use cli::Cli;
use error::{Error, Result};
use task::{load_seed, seed_tasks};
use tui::{app::App, run::run_tui};

/// Route `log` output to `path`, appending. Level comes from `RUST_LOG`, default `info`.
fn setup_logging(path: &Path) -> Result<()> {
    let target = Box::new(fs::OpenOptions::new().create(true).append(true).open(path)?);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    info!("Logging initialized, writing to: {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    setup_logging(&cli.log_file)?;

    let tasks = match cli.seed.as_deref() {
        Some(path) => {
            let tasks = load_seed(path)?;
            info!("loaded {} tasks from {}", tasks.len(), path.display());
            tasks
        }
        None => seed_tasks(),
    };

    let app = App::with_focus(tasks, cli.resize, cli.focus);
    run_tui(app)?;
    info!("board closed");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("kb: {e}");
        std::process::exit(1);
    }
}
