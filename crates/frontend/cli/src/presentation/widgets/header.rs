//! Player stats bar shown on every screen.
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use stonehaven_frontend_core::StoreState;

use crate::presentation::theme;

pub fn render(frame: &mut Frame, area: Rect, store: &StoreState) {
    let player = &store.player;

    let line = Line::from(vec![
        Span::styled(player.name.clone(), theme::title_style()),
        Span::raw(format!("  Lv {}", player.level)),
        Span::raw("  |  HP "),
        Span::styled(
            format!("{}/{}", player.health, player.max_health),
            theme::health_style(player.health, player.max_health),
        ),
        Span::raw("  |  MP "),
        Span::styled(
            format!("{}/{}", player.mana, player.max_mana),
            theme::mana_style(player.mana, player.max_mana),
        ),
        Span::raw("  |  "),
        Span::styled(format!("{} gold", player.gold), theme::gold_style()),
        Span::raw(format!("  |  XP {}", player.experience)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Stonehaven: {} ", store.current_location.title())),
    );
    frame.render_widget(paragraph, area);
}
