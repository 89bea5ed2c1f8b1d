//! Messages and commands flowing through the TUI state machine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::fields::Column;
use crate::task::Task;

/// An input to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Key(KeyEvent),
    /// Terminal geometry in character cells.
    Resize { width: u16, height: u16 },
    /// A finished task to be appended to its column.
    TaskCreated(Task),
    /// Puts the app into its terminal error state.
    Error(String),
}

/// Follow-up work returned by a view and executed by the controller
/// right after the update that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Advance the selected task of the focused column.
    MoveSelected,
    /// Save the board and open the task form for the given column.
    OpenForm(Column),
    /// Return to the board and add the task to it.
    SubmitTask(Task),
}

/// Which of the two form fields is receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

/// `q`, `esc` or `ctrl+c`.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => !key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Esc => true,
        _ => false,
    }
}
