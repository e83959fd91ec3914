//! Render-ready description of the current screen and the ratatui code drawing it.
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use crate::{
    display::DisplaySet,
    selection::{Level, Selection},
    theme::Theme,
};

pub const EMPTY_DISPLAYS: &str = "No connected displays found";

const DISPLAY_FOOTER: &str = "↑/k up • ↓/j down • enter select • q quit";
const RESOLUTION_FOOTER: &str = "↑/k up • ↓/j down • enter apply • b back • q quit";

/// One row of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewItem {
    pub label: String,
    /// Trailing annotation, e.g. `(current)`
    pub marker: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub heading: &'static str,
    pub title: String,
    pub items: Vec<ViewItem>,
    /// Highlighted row, `None` when the list is empty
    pub selected: Option<usize>,
    pub empty_message: Option<&'static str>,
    pub status: Option<String>,
    pub footer: &'static str,
}

impl ViewModel {
    pub fn build(displays: &DisplaySet, selection: &Selection, status: Option<&str>) -> Self {
        let status = status.map(str::to_string);

        match selection.level() {
            Level::Display => {
                let items: Vec<_> = displays
                    .displays()
                    .enumerate()
                    .map(|(i, display)| ViewItem {
                        label: format!("{:<6}{}", i + 1, display.name),
                        marker: display.current.then_some("(current)"),
                    })
                    .collect();

                Self {
                    heading: "Which screen do you want to use?",
                    title: format!("Current: {}", selection.primary().unwrap_or("none")),
                    selected: (!items.is_empty()).then_some(selection.index()),
                    empty_message: items.is_empty().then_some(EMPTY_DISPLAYS),
                    items,
                    status,
                    footer: DISPLAY_FOOTER,
                }
            }
            Level::Resolution { display, index } => {
                let (name, items) = match displays.get(display) {
                    Some(record) => (
                        record.name.as_str(),
                        record
                            .resolutions
                            .iter()
                            .enumerate()
                            .map(|(i, mode)| ViewItem {
                                label: format!("{:<6}{}", i + 1, mode),
                                marker: None,
                            })
                            .collect::<Vec<_>>(),
                    ),
                    None => ("?", Vec::new()),
                };

                Self {
                    heading: "Which resolution do you want?",
                    title: format!("Resolution for {}", name),
                    selected: (!items.is_empty()).then_some(index),
                    empty_message: None,
                    items,
                    status,
                    footer: RESOLUTION_FOOTER,
                }
            }
        }
    }
}

/// Draws `view` over the whole frame
pub fn draw(frame: &mut Frame, view: &ViewModel, theme: &Theme) {
    let [heading, body, status, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::styled(format!("  {}", view.heading), theme.heading)),
        heading,
    );

    let block = Block::bordered()
        .border_type(theme.border_type)
        .border_style(theme.border)
        .padding(theme.padding)
        .title(Line::styled(view.title.as_str(), theme.heading));

    match view.empty_message {
        Some(message) if view.items.is_empty() => {
            frame.render_widget(
                Paragraph::new(Line::styled(message, theme.item)).block(block),
                body,
            );
        }
        _ => {
            let items: Vec<ListItem> = view
                .items
                .iter()
                .map(|item| {
                    let mut spans = vec![Span::raw(item.label.as_str())];
                    if let Some(marker) = item.marker {
                        spans.push(Span::raw(" "));
                        spans.push(Span::styled(marker, theme.marker));
                    }
                    ListItem::new(Line::from(spans)).style(theme.item)
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(theme.active_item)
                .highlight_symbol(theme.highlight_symbol);
            let mut state = ListState::default().with_selected(view.selected);
            frame.render_stateful_widget(list, body, &mut state);
        }
    }

    if let Some(message) = &view.status {
        frame.render_widget(
            Paragraph::new(Line::styled(format!("  {}", message), theme.status)),
            status,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::styled(format!("  {}", view.footer), theme.footer)),
        footer,
    );
}
