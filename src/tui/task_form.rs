//! Task form handling for the terminal user interface.
//!
//! The form captures a title and then a description. `enter` on the title moves
//! focus to the description; `enter` on the description finishes the task and
//! hands it back to the controller. Field contents are never validated.

use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    fields::Column,
    task::{Task, TaskId},
    tui::{
        colors::HELP,
        enums::{Command, FormField},
        input::InputField,
    },
};

/// Two-field form producing a new task for a fixed column.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    column: Column,
    id: TaskId,
}

impl TaskForm {
    /// Create an empty form with the title focused. The finished task gets
    /// `id` and lands in `column`.
    pub fn new(column: Column, id: TaskId) -> Self {
        let mut title = InputField::new();
        title.focus();
        Self {
            title,
            description: InputField::new(),
            column,
            id,
        }
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn focused(&self) -> FormField {
        if self.title.active {
            FormField::Title
        } else {
            FormField::Description
        }
    }

    /// Build the task from the current field values.
    pub fn new_task(&self) -> Task {
        Task::new(self.id, self.column, self.title.value.clone(), self.description.value.clone())
    }

    pub fn handle(&mut self, key: KeyEvent) -> Option<Command> {
        if key.code == KeyCode::Enter {
            return match self.focused() {
                FormField::Title => {
                    self.title.blur();
                    self.description.focus();
                    None
                }
                FormField::Description => {
                    let task = self.new_task();
                    debug!("form submitted task {} for {:?}", task.id, task.column);
                    Some(Command::SubmitTask(task))
                }
            };
        }

        match self.focused() {
            FormField::Title => self.title.handle_key(key),
            FormField::Description => self.description.handle_key(key),
        }
        None
    }

    fn help_line(&self) -> String {
        let action = match self.focused() {
            FormField::Title => "next",
            FormField::Description => "submit",
        };
        format!("enter: {action}")
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(3), // Title
                Constraint::Length(3), // Description
                Constraint::Length(1), // Help
                Constraint::Min(0),
            ])
            .split(area);

        let header = Line::from(vec![
            Span::styled("New task", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" in {}", self.column.title())),
        ]);
        f.render_widget(Paragraph::new(header), chunks[0]);

        self.title.render(f, chunks[1], "Title", "what needs doing?");
        self.description.render(f, chunks[2], "Description", "details");

        f.render_widget(
            Paragraph::new(self.help_line()).style(Style::default().fg(HELP)),
            chunks[3],
        );
    }
}
