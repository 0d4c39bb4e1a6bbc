//! Conversation overlay for NPC chat sessions.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::{theme, ui::centered_rect};
use crate::state::ChatOverlay;

pub fn render(frame: &mut Frame, chat: &ChatOverlay) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = chat
        .session
        .messages
        .iter()
        .flat_map(|message| {
            vec![
                Line::from(Span::styled(
                    format!("{}:", message.speaker),
                    theme::speaker_style(&message.speaker),
                )),
                Line::from(format!("  {}", message.text)),
            ]
        })
        .collect();
    if chat.session.waiting {
        lines.push(Line::from(Span::styled(
            "...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Scroll so the latest exchange stays visible.
    let visible = rows[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", chat.session.character_name))
                .title_style(theme::title_style()),
        );
    frame.render_widget(transcript, rows[0]);

    let input = Paragraph::new(format!("> {}", chat.input)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Say (Enter to send, Esc to leave) "),
    );
    frame.render_widget(input, rows[1]);
}
