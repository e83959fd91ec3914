use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{BorderType, Padding},
};

/// Colours and spacing used when drawing the selection lists
///
/// Built once and handed to [`crate::view::draw`]; nothing in here is global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub heading: Style,
    pub item: Style,
    pub active_item: Style,
    pub marker: Style,
    pub footer: Style,
    pub status: Style,
    pub border: Style,
    pub border_type: BorderType,
    pub padding: Padding,
    /// Prefix drawn in front of the highlighted row
    pub highlight_symbol: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading: Style::new().add_modifier(Modifier::BOLD),
            item: Style::new().add_modifier(Modifier::DIM),
            active_item: Style::new()
                .fg(Color::Indexed(170))
                .add_modifier(Modifier::BOLD)
                .remove_modifier(Modifier::DIM),
            marker: Style::new().fg(Color::Rgb(0x7D, 0x56, 0xF4)),
            footer: Style::new().add_modifier(Modifier::DIM),
            status: Style::new().fg(Color::Yellow),
            border: Style::new().fg(Color::Indexed(63)),
            border_type: BorderType::Rounded,
            padding: Padding::new(2, 3, 1, 1),
            highlight_symbol: "> ",
        }
    }
}
