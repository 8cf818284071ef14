//! Centralized layout measurements for the TUI.

/// Height of the menu header in rows.
///
/// The header displays the application title, the service address, and
/// the help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of each routine card in rows.
///
/// Border (2 rows), status row with the task list and status label, and
/// the command row.
pub const ROUTINE_CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message.
pub const MIN_HEIGHT: u16 = ROUTINE_CARD_HEIGHT + 2;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim its rows for routine cards.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Wide enough for a routine card to show its command affordances and a
/// few task glyphs.
pub const MIN_WIDTH: u16 = 40;
