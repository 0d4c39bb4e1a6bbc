//! One widget module per screen, plus the shared chrome.
pub mod chat;
pub mod forest;
pub mod header;
pub mod inventory;
pub mod market;
pub mod mine;
pub mod modal;
pub mod navigation;
pub mod notices;
pub mod quests;
pub mod shop;
pub mod smithy;
pub mod tavern;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::presentation::theme;

/// Render a titled list with the cursor row highlighted, scrolling to keep
/// the selection visible.
pub fn selectable_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    selected: usize,
) {
    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected.min(items.len() - 1)));
    }
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .title_style(theme::title_style()),
    );
    frame.render_stateful_widget(list, area, &mut state);
}

/// A two-line list row: styled name, dimmer description underneath.
pub fn action_row<'a>(
    name: impl Into<String>,
    detail: impl Into<String>,
    name_style: Style,
    selected: bool,
    enabled: bool,
) -> ListItem<'a> {
    let row = theme::row_style(selected, enabled);
    ListItem::new(vec![
        Line::from(Span::styled(name.into(), name_style.patch(row))),
        Line::from(Span::styled(format!("  {}", detail.into()), row)),
    ])
}

/// Flavor paragraph shown at the top of a screen.
pub fn flavor(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .title_style(theme::title_style()),
        );
    frame.render_widget(paragraph, area);
}
