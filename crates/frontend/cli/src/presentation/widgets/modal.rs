//! Message modal and the loading overlay.
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::{theme, ui::centered_rect};
use crate::state::Modal;

pub fn render(frame: &mut Frame, modal: &Modal) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(modal.body.clone())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", modal.title))
                .title_style(theme::title_style()),
        );
    frame.render_widget(paragraph, area);
}

/// Small centered box shown while a call is in flight. Always cleared by the
/// store's loading flag, never left up after a failure.
pub fn render_loading(frame: &mut Frame) {
    let area = centered_rect(24, 12, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new("Please wait...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::LightYellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
