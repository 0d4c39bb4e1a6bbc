//! Rolling notice log fed by the store's dialog history.
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use stonehaven_frontend_core::StoreState;

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, store: &StoreState, limit: usize) {
    let start = store.dialog_history.len().saturating_sub(limit);
    let lines: Vec<Line> = store.dialog_history[start..]
        .iter()
        .map(|message| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", message.speaker),
                    theme::speaker_style(&message.speaker),
                ),
                Span::raw(message.text.clone()),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Notices "));
    frame.render_widget(paragraph, area);
}
