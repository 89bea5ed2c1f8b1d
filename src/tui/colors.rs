//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Border of the focused pane and the active form field
pub const FOCUS: Color = Color::Indexed(62);
/// Help footer text
pub const HELP: Color = Color::Indexed(241);
/// Error text
pub const DARK_RED: Color = Color::Rgb(114, 0, 0);
