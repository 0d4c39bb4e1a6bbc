//! Top-level frame composition.
//!
//! Chrome shared by every location: the player header, the navigation
//! sidebar, the notice log, and the overlay stack (chat, modal, loading
//! spinner) drawn over the active screen.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use stonehaven_frontend_core::StoreState;

use crate::presentation::{terminal::Tui, widgets};
use crate::state::{AppState, ScreenView};

pub struct RenderContext<'a> {
    pub store: &'a StoreState,
    pub app_state: &'a AppState,
    /// How many notice lines the bottom log shows.
    pub notice_limit: usize,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(ctx.notice_limit as u16 + 2),
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0], ctx.store);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(rows[1]);

    widgets::navigation::render(frame, columns[0], ctx.store.current_location);
    draw_screen(frame, columns[1], ctx);

    widgets::notices::render(frame, rows[2], ctx.store, ctx.notice_limit);

    if let Some(chat) = &ctx.app_state.chat {
        widgets::chat::render(frame, chat);
    }
    if let Some(modal) = &ctx.app_state.modal {
        widgets::modal::render(frame, modal);
    }
    if ctx.store.is_loading {
        widgets::modal::render_loading(frame);
    }
}

fn draw_screen(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    match &ctx.app_state.view {
        ScreenView::Market(view) => widgets::market::render(frame, area, view),
        ScreenView::Tavern(view) => widgets::tavern::render(frame, area, view, ctx.store),
        ScreenView::Shop(view) => widgets::shop::render(frame, area, view, ctx.store),
        ScreenView::Smithy(view) => widgets::smithy::render(frame, area, view, ctx.store),
        ScreenView::Forest(view) => widgets::forest::render(frame, area, view, ctx.store),
        ScreenView::Mine(view) => widgets::mine::render(frame, area, view, ctx.store),
        ScreenView::Quests(view) => widgets::quests::render(frame, area, view, ctx.store),
        ScreenView::Inventory(view) => widgets::inventory::render(frame, area, view, ctx.store),
    }
}

/// Centered sub-rectangle sized as a percentage of the frame, used by every
/// overlay.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
