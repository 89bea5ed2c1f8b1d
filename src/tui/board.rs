//! Kanban board view.
//!
//! The board owns one `ColumnList` per column and tracks which column has
//! focus. Lists do not exist until the first resize event tells the board how
//! large the terminal is; until then it renders a loading placeholder.

use crossterm::event::KeyCode;
use log::{debug, info};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use crate::{
    fields::{Column, ResizePolicy},
    task::{Task, TaskId},
    tui::{
        colors::{FOCUS, HELP},
        column_list::ColumnList,
        enums::{Command, Msg},
    },
};

/// Pane width is `width / DIVISOR`; pane height is `height - 2 * DIVISOR`.
const DIVISOR: u16 = 4;

const HELP_TEXT: &str = "←/→: column • ↑/↓: select • enter: move • n: new • /: filter • q: quit";

/// Main board state
pub struct BoardView {
    focus: Column,
    lists: Option<[ColumnList<Task>; 3]>,
    /// Tasks waiting for the first layout.
    pending: Vec<Task>,
    width: u16,
    height: u16,
    policy: ResizePolicy,
}

impl BoardView {
    /// Create an unsized board that will show `seed` once laid out.
    pub fn new(seed: Vec<Task>, policy: ResizePolicy) -> Self {
        Self {
            focus: Column::Todo,
            lists: None,
            pending: seed,
            width: 0,
            height: 0,
            policy,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.lists.is_some()
    }

    pub fn focused(&self) -> Column {
        self.focus
    }

    pub fn set_focus(&mut self, column: Column) {
        self.focus = column;
    }

    /// Pane geometry currently in use, as `(width, height)` of the terminal.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn list(&self, column: Column) -> Option<&ColumnList<Task>> {
        self.lists.as_ref().map(|lists| &lists[column.index()])
    }

    /// Focus the next column, wrapping from `Done` to `Todo`.
    pub fn next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Focus the previous column, wrapping from `Todo` to `Done`.
    pub fn prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Id for the next task created on this board.
    pub fn next_id(&self) -> TaskId {
        let loaded = self.lists.iter().flatten().flat_map(|list| list.items());
        let max = loaded.chain(self.pending.iter()).map(|t| t.id.0).max().unwrap_or(0);
        TaskId(max + 1)
    }

    fn init_lists(&mut self) {
        let mut lists: [ColumnList<Task>; 3] = Default::default();
        let mut by_column: [Vec<Task>; 3] = Default::default();
        for task in self.pending.drain(..) {
            by_column[task.column.index()].push(task);
        }
        for (column, tasks) in Column::ALL.into_iter().zip(by_column) {
            let list = &mut lists[column.index()];
            list.set_items(tasks);
            list.set_title(column.title());
        }
        self.lists = Some(lists);
        debug_assert!(self.is_consistent());
    }

    /// Every task sits in the list of its own column.
    pub fn is_consistent(&self) -> bool {
        self.lists.as_ref().map_or(true, |lists| {
            Column::ALL
                .into_iter()
                .all(|c| lists[c.index()].items().iter().all(|t| t.column == c))
        })
    }

    fn add_task(&mut self, task: Task) {
        match self.lists.as_mut() {
            Some(lists) => {
                let list = &mut lists[task.column.index()];
                info!("task {} '{}' added to {}", task.id, task.title, task.column.title());
                list.insert_item(list.len(), task);
            }
            None => self.pending.push(task),
        }
    }

    /// Move the selected task of the focused column to the end of the next
    /// column. Returns the moved task's id, or `None` when nothing is selected.
    pub fn move_to_next(&mut self) -> Option<TaskId> {
        let lists = self.lists.as_mut()?;
        let source = &mut lists[self.focus.index()];
        let index = source.index()?;
        let mut task = source.remove_item(index)?;
        debug_assert_eq!(task.column, self.focus);

        task.next();
        let id = task.id;
        info!("task {} moved from {} to {}", id, self.focus.title(), task.column.title());
        let target = &mut lists[task.column.index()];
        target.insert_item(target.len(), task);

        debug_assert!(self.is_consistent());
        Some(id)
    }

    pub fn handle(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::Resize { width, height } => {
                if !self.is_loaded() {
                    self.width = width;
                    self.height = height;
                    self.init_lists();
                    info!("board laid out at {width}x{height}");
                } else if self.policy == ResizePolicy::Every {
                    self.width = width;
                    self.height = height;
                    debug!("board resized to {width}x{height}");
                }
                None
            }
            Msg::TaskCreated(task) => {
                self.add_task(task);
                None
            }
            // Errors are the controller's concern.
            Msg::Error(_) => None,
            Msg::Key(key) => {
                let lists = self.lists.as_mut()?;
                let list = &mut lists[self.focus.index()];
                if list.is_filtering() {
                    list.handle(key);
                    return None;
                }
                match key.code {
                    KeyCode::Right => self.next(),
                    KeyCode::Left => self.prev(),
                    KeyCode::Enter => return Some(Command::MoveSelected),
                    KeyCode::Char('n') => return Some(Command::OpenForm(self.focus)),
                    _ => list.handle(key),
                }
                None
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let Some(lists) = self.lists.as_ref() else {
            f.render_widget(Paragraph::new("Loading..."), area);
            return;
        };

        let pane_width = self.width / DIVISOR;
        let pane_height = self.height.saturating_sub(DIVISOR * 2);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(pane_height),
                Constraint::Length(1), // Help
                Constraint::Min(0),
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(pane_width),
                Constraint::Length(pane_width),
                Constraint::Length(pane_width),
                Constraint::Min(0),
            ])
            .split(rows[0]);

        for column in Column::ALL {
            let focused = column == self.focus;
            let block = if focused {
                Block::default()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(FOCUS).add_modifier(Modifier::BOLD))
            } else {
                Block::default().border_type(BorderType::Plain)
            };
            let block = block.borders(Borders::ALL).padding(Padding::horizontal(1));

            let pane = panes[column.index()];
            let inner = block.inner(pane);
            f.render_widget(block, pane);
            lists[column.index()].render(f, inner, focused);
        }

        f.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(HELP)),
            rows[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::seed_tasks;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn loaded_board() -> BoardView {
        let mut board = BoardView::new(seed_tasks(), ResizePolicy::Once);
        board.handle(Msg::Resize { width: 120, height: 40 });
        board
    }

    fn titles(board: &BoardView, column: Column) -> Vec<String> {
        board
            .list(column)
            .map(|l| l.items().iter().map(|t| t.title.clone()).collect())
            .unwrap_or_default()
    }

    fn all_ids(board: &BoardView) -> Vec<u64> {
        let mut ids: Vec<u64> = Column::ALL
            .into_iter()
            .flat_map(|c| board.list(c).map(|l| l.items().to_vec()).unwrap_or_default())
            .map(|t| t.id.0)
            .collect();
        ids.sort();
        ids
    }

    fn draw(board: &BoardView, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| board.render(f, f.area())).unwrap();
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        buf.content
            .chunks(buf.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lists_absent_until_first_resize() {
        let mut board = BoardView::new(seed_tasks(), ResizePolicy::Once);
        assert!(!board.is_loaded());
        assert_eq!(board.handle(key(KeyCode::Enter)), None);
        assert_eq!(board.handle(key(KeyCode::Char('n'))), None);
        board.handle(Msg::Resize { width: 80, height: 24 });
        assert!(board.is_loaded());
        assert_eq!(titles(&board, Column::Todo), vec!["buy milk", "eat sushi", "fold laundry"]);
        assert_eq!(titles(&board, Column::InProgress), vec!["write code"]);
        assert_eq!(titles(&board, Column::Done), vec!["stay cool"]);
        assert_eq!(board.list(Column::InProgress).map(|l| l.title()), Some("In Progress"));
    }

    #[test]
    fn test_resize_policy() {
        let mut once = loaded_board();
        once.handle(Msg::Resize { width: 60, height: 20 });
        assert_eq!(once.size(), (120, 40));

        let mut every = BoardView::new(seed_tasks(), ResizePolicy::Every);
        every.handle(Msg::Resize { width: 120, height: 40 });
        every.handle(key(KeyCode::Down));
        every.handle(Msg::Resize { width: 60, height: 20 });
        assert_eq!(every.size(), (60, 20));
        // Re-layout keeps the lists and the selection.
        assert_eq!(every.list(Column::Todo).and_then(|l| l.index()), Some(1));
    }

    #[test]
    fn test_focus_navigation_wraps() {
        let mut board = loaded_board();
        assert_eq!(board.focused(), Column::Todo);
        board.handle(key(KeyCode::Left));
        assert_eq!(board.focused(), Column::Done);
        board.handle(key(KeyCode::Right));
        board.handle(key(KeyCode::Right));
        assert_eq!(board.focused(), Column::InProgress);
    }

    #[test]
    fn test_enter_defers_move() {
        let mut board = loaded_board();
        assert_eq!(board.handle(key(KeyCode::Enter)), Some(Command::MoveSelected));
        assert_eq!(titles(&board, Column::Todo).len(), 3);
    }

    #[test]
    fn test_n_opens_form_for_focused_column() {
        let mut board = loaded_board();
        board.handle(key(KeyCode::Right));
        assert_eq!(
            board.handle(key(KeyCode::Char('n'))),
            Some(Command::OpenForm(Column::InProgress))
        );
    }

    #[test]
    fn test_move_seed_scenario() {
        let mut board = loaded_board();
        assert_eq!(board.list(Column::Todo).and_then(|l| l.selected_item()).map(|t| t.title.as_str()), Some("buy milk"));
        assert_eq!(board.move_to_next(), Some(TaskId(1)));
        assert_eq!(titles(&board, Column::Todo), vec!["eat sushi", "fold laundry"]);
        assert_eq!(titles(&board, Column::InProgress), vec!["write code", "buy milk"]);
        let moved = &board.list(Column::InProgress).unwrap().items()[1];
        assert_eq!(moved.column, Column::InProgress);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_move_from_done_wraps_to_todo() {
        let mut board = loaded_board();
        board.set_focus(Column::Done);
        board.move_to_next();
        assert_eq!(titles(&board, Column::Done), Vec::<String>::new());
        assert_eq!(titles(&board, Column::Todo).last().map(String::as_str), Some("stay cool"));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_move_on_empty_column_is_noop() {
        let mut board = BoardView::new(Vec::new(), ResizePolicy::Once);
        board.handle(Msg::Resize { width: 80, height: 24 });
        assert_eq!(board.move_to_next(), None);
        assert!(Column::ALL.into_iter().all(|c| titles(&board, c).is_empty()));

        let mut board = loaded_board();
        board.set_focus(Column::Done);
        board.move_to_next();
        let before: Vec<Vec<String>> = Column::ALL.into_iter().map(|c| titles(&board, c)).collect();
        assert_eq!(board.move_to_next(), None);
        let after: Vec<Vec<String>> = Column::ALL.into_iter().map(|c| titles(&board, c)).collect();
        assert_eq!(before, after);
        assert_eq!(board.focused(), Column::Done);
    }

    #[test]
    fn test_move_selected_after_cursor_down() {
        let mut board = loaded_board();
        board.handle(key(KeyCode::Down));
        board.move_to_next();
        assert_eq!(titles(&board, Column::Todo), vec!["buy milk", "fold laundry"]);
        assert_eq!(titles(&board, Column::InProgress), vec!["write code", "eat sushi"]);
    }

    #[test]
    fn test_invariant_over_operation_sequence() {
        let mut board = loaded_board();
        let script = [
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Left,
            KeyCode::Left,
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
        ];
        for code in script {
            if let Some(Command::MoveSelected) = board.handle(key(code)) {
                board.move_to_next();
            }
            assert!(board.is_consistent());
            assert_eq!(all_ids(&board), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_moves_advance_exactly_one_step() {
        let mut board = loaded_board();
        for _ in 0..3 {
            let focus = board.focused();
            let id = board.list(focus).and_then(|l| l.selected_item()).map(|t| t.id);
            let moved = board.move_to_next();
            assert_eq!(moved, id);
            let target = board.list(focus.next()).unwrap();
            assert_eq!(target.items().last().map(|t| t.id), id);
            board.next();
        }
    }

    #[test]
    fn test_task_created_appends_to_its_column() {
        let mut board = loaded_board();
        let id = board.next_id();
        assert_eq!(id, TaskId(6));
        board.handle(Msg::TaskCreated(Task::new(id, Column::Done, "pay rent", "due the 1st")));
        assert_eq!(titles(&board, Column::Done), vec!["stay cool", "pay rent"]);
        assert_eq!(board.next_id(), TaskId(7));
    }

    #[test]
    fn test_task_created_before_layout_is_kept() {
        let mut board = BoardView::new(Vec::new(), ResizePolicy::Once);
        assert_eq!(board.next_id(), TaskId(1));
        board.handle(Msg::TaskCreated(Task::new(TaskId(1), Column::Todo, "early", "")));
        assert_eq!(board.next_id(), TaskId(2));
        board.handle(Msg::Resize { width: 80, height: 24 });
        assert_eq!(titles(&board, Column::Todo), vec!["early"]);
    }

    #[test]
    fn test_filtering_captures_board_keys() {
        let mut board = loaded_board();
        board.handle(key(KeyCode::Char('/')));
        assert_eq!(board.handle(key(KeyCode::Char('n'))), None);
        assert_eq!(board.handle(key(KeyCode::Right)), None);
        assert_eq!(board.focused(), Column::Todo);
        assert_eq!(board.handle(key(KeyCode::Enter)), None);
        assert_eq!(board.list(Column::Todo).and_then(|l| l.filter()), Some("n"));
        // Filter applied: board keys work again and act on the filtered selection.
        assert_eq!(board.handle(key(KeyCode::Enter)), Some(Command::MoveSelected));
        board.move_to_next();
        assert_eq!(titles(&board, Column::Todo), vec!["buy milk", "eat sushi"]);
        assert_eq!(titles(&board, Column::InProgress), vec!["write code", "fold laundry"]);
    }

    #[test]
    fn test_render_loading_before_layout() {
        let board = BoardView::new(seed_tasks(), ResizePolicy::Once);
        let text = buffer_text(&draw(&board, 40, 5));
        assert!(text.starts_with("Loading..."));
    }

    #[test]
    fn test_render_three_panes() {
        let board = loaded_board();
        let text = buffer_text(&draw(&board, 120, 40));
        for needle in ["To Do", "In Progress", "Done", "buy milk", "write code", "stay cool", "n: new"] {
            assert!(text.contains(needle), "missing {needle}");
        }
        // Focused pane gets the rounded border.
        assert!(text.starts_with('╭'));
    }

    #[test]
    fn test_render_highlights_focused_pane() {
        let mut board = loaded_board();
        board.next();
        let text = buffer_text(&draw(&board, 120, 40));
        let first_row = text.lines().next().unwrap_or_default();
        assert!(first_row.starts_with('┌'));
        assert!(first_row.contains('╭'));
    }

    #[test]
    fn test_render_is_idempotent() {
        let board = loaded_board();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| board.render(f, f.area())).unwrap();
        let first = terminal.backend().buffer().clone();
        terminal.draw(|f| board.render(f, f.area())).unwrap();
        assert_eq!(&first, terminal.backend().buffer());
    }
}
