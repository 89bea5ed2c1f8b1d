//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which holds the active view, routes
//! every input message to it, executes the commands views hand back, and
//! coordinates switching between the board and the task form.

use std::collections::VecDeque;
use std::io;
use std::mem;

use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info, warn};
use ratatui::{
    backend::Backend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame, Terminal,
};

use crate::{
    fields::{Column, ResizePolicy},
    task::Task,
    tui::{
        board::BoardView,
        colors::DARK_RED,
        enums::{is_quit_key, Command, Msg},
        task_form::TaskForm,
    },
};

/// The view currently receiving input. The form keeps the board it was
/// opened from so it can be restored unchanged.
pub enum View {
    Board(BoardView),
    Form { form: TaskForm, board: BoardView },
}

/// Main application state for the terminal user interface.
pub struct App {
    view: View,
    quitting: bool,
    error: Option<String>,
    policy: ResizePolicy,
}

impl App {
    /// Create an app showing a board seeded with `tasks`.
    pub fn new(tasks: Vec<Task>, policy: ResizePolicy) -> Self {
        App {
            view: View::Board(BoardView::new(tasks, policy)),
            quitting: false,
            error: None,
            policy,
        }
    }

    /// Create an app whose board starts with `column` focused.
    pub fn with_focus(tasks: Vec<Task>, policy: ResizePolicy, column: Column) -> Self {
        let mut app = Self::new(tasks, policy);
        app.board_mut().set_focus(column);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// The board, whether it is showing or saved behind the form.
    pub fn board(&self) -> &BoardView {
        match &self.view {
            View::Board(board) | View::Form { board, .. } => board,
        }
    }

    fn board_mut(&mut self) -> &mut BoardView {
        match &mut self.view {
            View::Board(board) | View::Form { board, .. } => board,
        }
    }

    pub fn form(&self) -> Option<&TaskForm> {
        match &self.view {
            View::Form { form, .. } => Some(form),
            View::Board(_) => None,
        }
    }

    fn take_view(&mut self) -> View {
        mem::replace(&mut self.view, View::Board(BoardView::new(Vec::new(), self.policy)))
    }

    /// Process one message and every follow-up command it causes.
    pub fn update(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            if self.quitting {
                break;
            }
            if let Msg::Key(key) = &msg {
                if is_quit_key(key) {
                    info!("quit requested");
                    self.quitting = true;
                    break;
                }
            }
            if let Msg::Error(text) = msg {
                error!("{text}");
                self.error = Some(text);
                continue;
            }
            if self.error.is_some() {
                continue;
            }

            let command = match &mut self.view {
                View::Board(board) => board.handle(msg),
                View::Form { form, board } => match msg {
                    Msg::Key(key) => form.handle(key),
                    // Layout and task messages belong to the saved board.
                    other => board.handle(other),
                },
            };
            if let Some(command) = command {
                queue.extend(self.execute(command));
            }
        }
    }

    /// Run a command and return the message it produces, if any.
    fn execute(&mut self, command: Command) -> Option<Msg> {
        match command {
            Command::MoveSelected => {
                debug_assert!(matches!(self.view, View::Board(_)), "move requested outside the board");
                if let View::Board(board) = &mut self.view {
                    if board.move_to_next().is_none() {
                        debug!("nothing selected in {}", board.focused().title());
                    }
                }
                None
            }
            Command::OpenForm(column) => match self.take_view() {
                View::Board(board) => {
                    let form = TaskForm::new(column, board.next_id());
                    info!("opening task form for {}", column.title());
                    self.view = View::Form { form, board };
                    None
                }
                form @ View::Form { .. } => {
                    warn!("form already open");
                    self.view = form;
                    None
                }
            },
            Command::SubmitTask(task) => match self.take_view() {
                View::Form { board, .. } => {
                    info!("task {} created, returning to board", task.id);
                    self.view = View::Board(board);
                    Some(Msg::TaskCreated(task))
                }
                board @ View::Board(_) => {
                    debug_assert!(false, "task submitted without an open form");
                    self.view = board;
                    None
                }
            },
        }
    }

    /// Draw the current state. Nothing is drawn once the app is quitting.
    pub fn render(&self, f: &mut Frame) {
        if self.quitting {
            return;
        }
        let area = f.area();
        if let Some(text) = &self.error {
            let lines = vec![
                Line::from(Span::styled(
                    "Error",
                    Style::default().fg(Color::White).bg(DARK_RED).add_modifier(Modifier::BOLD),
                )),
                Line::from(text.as_str()),
            ];
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
            return;
        }
        match &self.view {
            View::Board(board) => board.render(f, area),
            View::Form { form, .. } => form.render(f, area),
        }
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        self.update(Msg::Resize {
            width: size.width,
            height: size.height,
        });

        loop {
            terminal.draw(|f| self.render(f))?;
            if self.quitting {
                break;
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => self.update(Msg::Key(key)),
                Ok(Event::Resize(width, height)) => self.update(Msg::Resize { width, height }),
                Ok(_) => {}
                Err(e) if self.error.is_some() => return Err(e),
                Err(e) => self.update(Msg::Error(format!("failed to read terminal event: {e}"))),
            }
        }
        Ok(())
    }
}
