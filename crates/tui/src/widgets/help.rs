//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use rdash_protocol::Command;

use super::commands::command_key;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 35;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 17;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the
/// area behind it first.
///
/// # Layout
///
/// ```text
/// ╭ Help ───────────────────────────╮
/// │                                 │
/// │  Navigation                     │
/// │  ↑          Select previous     │
/// │  ↓          Select next         │
/// │  Esc        Clear selection     │
/// │                                 │
/// │  Commands                       │
/// │  s          Start routine       │
/// │  c          Cancel routine      │
/// │                                 │
/// │  General                        │
/// │  ?          Toggle help         │
/// │  Ctrl+C     Quit                │
/// │                                 │
/// │  Press any key to close         │
/// ╰─────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use rdash_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let binding = |key: String, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(text, text_style),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", header_style)),
        binding("↑".to_string(), "Select previous"),
        binding("↓".to_string(), "Select next"),
        binding("Esc".to_string(), "Clear selection"),
        Line::from(""),
        Line::from(Span::styled("  Commands", header_style)),
    ];
    lines.extend(Command::ALL.into_iter().map(|command| {
        let text = match command {
            Command::Start => "Start routine",
            Command::Cancel => "Cancel routine",
        };
        binding(command_key(command).to_string(), text)
    }));
    lines.extend([
        Line::from(""),
        Line::from(Span::styled("  General", header_style)),
        binding("?".to_string(), "Toggle help"),
        binding("Ctrl+C".to_string(), "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]);
    lines
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to available area
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
