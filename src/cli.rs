use std::path::PathBuf;

use clap::Parser;

use crate::fields::{Column, ResizePolicy};

/// Three-column kanban board for the terminal.
/// Tasks live in memory for the session; nothing is saved.
#[derive(Parser, Debug)]
#[command(name = "kb", version, about = "Keyboard-driven kanban board")]
pub struct Cli {
    /// JSON file with the initial tasks, an array of {column, title, description}.
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// File receiving debug logs.
    #[arg(long, default_value = "debug.log")]
    pub log_file: PathBuf,

    /// Whether panes are sized once or on every terminal resize.
    #[arg(long, value_enum, default_value_t = ResizePolicy::Once)]
    pub resize: ResizePolicy,

    /// Column focused at startup.
    #[arg(long, value_enum, default_value_t = Column::Todo)]
    pub focus: Column,
}
