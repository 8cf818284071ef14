//! Command affordances.
//!
//! Each [`Command`] is bound to one key. The row renders as
//! `[s] start  [c] cancel`; pressing a key yields the matching command,
//! which the app forwards to the selected routine.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rdash_protocol::Command;

/// Returns the key bound to `command`.
#[must_use]
pub const fn command_key(command: Command) -> char {
    match command {
        Command::Start => 's',
        Command::Cancel => 'c',
    }
}

/// Returns the command bound to `key`, if any.
///
/// # Examples
///
/// ```
/// use rdash_protocol::Command;
/// use rdash_tui::widgets::command_for_key;
///
/// assert_eq!(command_for_key('s'), Some(Command::Start));
/// assert_eq!(command_for_key('x'), None);
/// ```
#[must_use]
pub fn command_for_key(key: char) -> Option<Command> {
    Command::ALL
        .into_iter()
        .find(|&command| command_key(command) == key)
}

/// Renders the command row.
///
/// Keys are highlighted only when `is_active` is set, that is when the
/// routine is selected and a key press would reach it.
pub fn render_commands(is_active: bool, area: Rect, buf: &mut Buffer) {
    let (key_style, text_style) = if is_active {
        (
            Style::default().fg(Color::Yellow),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let mut spans = Vec::with_capacity(Command::ALL.len() * 3);
    for (i, command) in Command::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{}]", command_key(command)), key_style));
        spans.push(Span::styled(format!(" {command}"), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
