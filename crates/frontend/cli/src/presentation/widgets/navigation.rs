//! Location sidebar. Numbers match the `1`..`8` shortcuts.
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use strum::IntoEnumIterator;

use stonehaven_protocol::LocationId;

pub fn render(frame: &mut Frame, area: Rect, current: LocationId) {
    let items: Vec<ListItem> = LocationId::iter()
        .enumerate()
        .map(|(index, location)| {
            let style = if location == current {
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} {}", index + 1, location.title()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Travel "));
    frame.render_widget(list, area);
}
