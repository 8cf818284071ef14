//! Routine title.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use rdash_protocol::RoutineName;

/// Builds a routine's title line: the name, then the description if one is
/// given.
///
/// The line is meant to sit in a card's top border.
#[must_use]
pub fn title_line<'a>(
    name: &'a RoutineName,
    description: Option<&'a str>,
    is_selected: bool,
) -> Line<'a> {
    let name_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::raw(" "), Span::styled(name.as_str(), name_style)];
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            description,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    spans.push(Span::raw(" "));

    Line::from(spans)
}
