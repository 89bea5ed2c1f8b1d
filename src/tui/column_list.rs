//! A focusable, filterable list of board items.
//!
//! `ColumnList` keeps its items in insertion order and tracks the selection as a
//! position among the currently visible (filter-matching) items. Every public
//! index refers to the unfiltered item order, so callers can remove exactly the
//! item they read through `selected_item`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem as ListRow, ListState, Paragraph},
    Frame,
};

use crate::task::Task;
use crate::tui::colors::{FOCUS, HELP};

/// Anything a `ColumnList` can show.
pub trait ListItem {
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    /// Text the filter is matched against.
    fn filter_value(&self) -> String {
        self.title().to_string()
    }
}

impl ListItem for Task {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterState {
    Off,
    Editing,
    Applied,
}

#[derive(Clone, Debug)]
pub struct ColumnList<T> {
    title: String,
    items: Vec<T>,
    cursor: usize,
    filter: String,
    filter_state: FilterState,
}

impl<T: ListItem> Default for ColumnList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: ListItem> ColumnList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            title: String::new(),
            items,
            cursor: 0,
            filter: String::new(),
            filter_state: FilterState::Off,
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace all items and reset the selection to the first one.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
        self.clamp();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert `item` before `index`; an index past the end appends.
    pub fn insert_item(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.clamp();
    }

    /// Remove and return the item at `index` in unfiltered order.
    pub fn remove_item(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.clamp();
        Some(item)
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.index().map(|i| &self.items[i])
    }

    /// Index of the selected item in unfiltered order.
    pub fn index(&self) -> Option<usize> {
        self.visible().get(self.cursor).copied()
    }

    /// True while the user is typing a filter.
    pub fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Editing
    }

    pub fn filter(&self) -> Option<&str> {
        match self.filter_state {
            FilterState::Off => None,
            _ => Some(&self.filter),
        }
    }

    /// Drop the filter, keeping the same item selected.
    fn clear_filter(&mut self) {
        let selected = self.index();
        self.filter.clear();
        self.filter_state = FilterState::Off;
        if let Some(i) = selected {
            self.cursor = i;
        }
        self.clamp();
    }

    /// Indices of the items matching the current filter.
    fn visible(&self) -> Vec<usize> {
        if self.filter_state == FilterState::Off || self.filter.is_empty() {
            return (0..self.items.len()).collect();
        }
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.filter_value().to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    fn clamp(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Default key handling: cursor movement and filtering.
    pub fn handle(&mut self, key: KeyEvent) {
        if self.filter_state == FilterState::Editing {
            match key.code {
                KeyCode::Enter => {
                    self.filter_state = if self.filter.is_empty() {
                        FilterState::Off
                    } else {
                        FilterState::Applied
                    };
                }
                KeyCode::Backspace => {
                    self.filter.pop();
                    self.cursor = 0;
                }
                KeyCode::Char(c) => {
                    self.filter.push(c);
                    self.cursor = 0;
                }
                _ => {}
            }
            self.clamp();
            return;
        }

        let len = self.visible().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.cursor = len.saturating_sub(1),
            KeyCode::Char('/') => {
                self.filter.clear();
                self.filter_state = FilterState::Editing;
                self.cursor = 0;
            }
            KeyCode::Backspace if self.filter_state == FilterState::Applied => self.clear_filter(),
            _ => {}
        }
    }

    /// Draw the title, an optional filter line and the items into `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let show_filter = self.filter_state != FilterState::Off;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(if show_filter { 1 } else { 0 }),
                Constraint::Min(0),
            ])
            .split(area);

        let title_style = if focused {
            Style::default().fg(Color::White).bg(FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {} ", self.title), title_style))),
            chunks[0],
        );

        if show_filter {
            let cursor = if self.is_filtering() { "█" } else { "" };
            f.render_widget(
                Paragraph::new(format!("Filter: {}{}", self.filter, cursor)).style(Style::default().fg(HELP)),
                chunks[1],
            );
        }

        let visible = self.visible();
        if visible.is_empty() {
            let text = if self.items.is_empty() { "No items." } else { "Nothing matched." };
            f.render_widget(Paragraph::new(text).style(Style::default().fg(HELP)), chunks[2]);
            return;
        }

        let rows: Vec<ListRow> = visible
            .iter()
            .map(|&i| {
                let item = &self.items[i];
                ListRow::new(vec![
                    Line::from(item.title().to_string()),
                    Line::from(Span::styled(item.description().to_string(), Style::default().fg(HELP))),
                    Line::from(""),
                ])
            })
            .collect();

        let highlight = if focused {
            Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(rows).highlight_style(highlight).highlight_symbol("│ ");

        let mut state = ListState::default().with_selected(Some(self.cursor));
        f.render_stateful_widget(list, chunks[2], &mut state);
    }
}
