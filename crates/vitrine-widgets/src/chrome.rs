//! Convenience helpers for common widget chrome patterns.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

/// Create a bordered block with a focus-dependent border color.
///
/// Cyan when focused, dark gray otherwise -- the default chrome for any
/// focusable region.
pub fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::new()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color))
}
