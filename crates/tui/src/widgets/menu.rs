//! Menu header widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Width of the help cue, "Press ? for help" plus padding.
const HELP_CUE_WIDTH: u16 = 17;

/// Renders the header bar: application title, the server being watched and
/// a help cue.
///
/// # Layout
///
/// ```text
/// ╭────────────────────────────────────────────────────────────────╮
/// │rdash - 3 routines on http://localhost:5050     Press ? for help│
/// ╰────────────────────────────────────────────────────────────────╯
/// ```
pub fn render_menu(server_address: &str, routine_count: usize, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    block.render(area, buf);

    let [title_area, help_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(HELP_CUE_WIDTH)]).areas(inner);

    let noun = if routine_count == 1 {
        "routine"
    } else {
        "routines"
    };
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "rdash",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(
            format!("{routine_count} {noun} on "),
            Style::default().fg(Color::White),
        ),
        Span::styled(server_address, Style::default().fg(Color::Gray)),
    ]));
    title.render(title_area, buf);

    let help_cue = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    help_cue.render(help_area, buf);
}
