//! Enumerations shared by the board, the form and the command line.
//!
//! This module defines the fixed set of board columns and the layout policy
//! selectable from the CLI.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A board column. Columns are totally ordered `Todo < InProgress < Done`
/// and wrap around in both directions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    #[serde(alias = "Todo")]
    Todo,
    #[serde(alias = "InProgress")]
    InProgress,
    #[serde(alias = "Done")]
    Done,
}

impl Column {
    /// Every column in board order.
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    /// The column after this one, wrapping `Done` back to `Todo`.
    pub fn next(self) -> Column {
        match self {
            Column::Todo => Column::InProgress,
            Column::InProgress => Column::Done,
            Column::Done => Column::Todo,
        }
    }

    /// The column before this one, wrapping `Todo` back to `Done`.
    pub fn prev(self) -> Column {
        match self {
            Column::Todo => Column::Done,
            Column::InProgress => Column::Todo,
            Column::Done => Column::InProgress,
        }
    }

    /// Position of the column on the board, left to right.
    pub fn index(self) -> usize {
        match self {
            Column::Todo => 0,
            Column::InProgress => 1,
            Column::Done => 2,
        }
    }

    /// Pane title shown above the column.
    pub fn title(self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }
}

/// How the board reacts to terminal resize events after the first one.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Size the panes from the first resize event only.
    #[default]
    Once,
    /// Re-apply the pane size on every resize event.
    Every,
}
