//! Inventory screen: equipped gear, pack contents, item detail.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
};

use stonehaven_frontend_core::StoreState;
use stonehaven_protocol::InventoryItem;

use crate::presentation::theme;
use crate::presentation::widgets::{action_row, selectable_list};
use crate::state::InventoryView;

pub fn render(frame: &mut Frame, area: Rect, view: &InventoryView, store: &StoreState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(5),
        ])
        .split(area);

    render_equipped(frame, rows[0], store);

    let items: Vec<ListItem> = store
        .player
        .inventory
        .iter()
        .enumerate()
        .map(|(index, item)| {
            action_row(
                format!("{} x{}", item.name, item.quantity),
                item.description.clone().unwrap_or_else(|| item.kind.clone()),
                theme::rarity_style(item.rarity.as_deref()),
                index == view.selected,
                true,
            )
        })
        .collect();
    selectable_list(
        frame,
        rows[1],
        "Pack (Enter uses, x drops)",
        items,
        view.selected,
    );

    if let Some(item) = store.player.inventory.get(view.selected) {
        render_detail(frame, rows[2], item);
    }
}

fn render_equipped(frame: &mut Frame, area: Rect, store: &StoreState) {
    let lines: Vec<Line> = store
        .player
        .equipped_items
        .slots()
        .iter()
        .map(|(slot, item)| {
            let (name, style) = match item {
                Some(item) => (
                    item.name.clone(),
                    theme::rarity_style(item.rarity.as_deref()),
                ),
                None => ("empty".to_string(), Style::default().fg(Color::DarkGray)),
            };
            let key = match *slot {
                "weapon" => "w",
                "armor" => "a",
                _ => "c",
            };
            Line::from(vec![
                Span::raw(format!("{slot:>10}: ")),
                Span::styled(name, style),
                Span::styled(
                    format!("  ({key} unequips)"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Equipped "));
    frame.render_widget(paragraph, area);
}

fn render_detail(frame: &mut Frame, area: Rect, item: &InventoryItem) {
    let mut bits = Vec::new();
    if let Some(damage) = item.damage {
        bits.push(format!("damage {damage}"));
    }
    if let Some(armor) = item.armor {
        bits.push(format!("armor {armor}"));
    }
    if let Some(bonus) = item.mining_bonus {
        bits.push(format!("mining +{bonus}"));
    }
    if let Some(stats) = &item.stats {
        for (name, value) in [
            ("str", stats.strength),
            ("dex", stats.dexterity),
            ("int", stats.intelligence),
            ("vit", stats.vitality),
        ] {
            if value != 0 {
                bits.push(format!("{name} {value:+}"));
            }
        }
    }
    if let Some(price) = item.sell_price() {
        bits.push(format!("worth {price} gold"));
    }

    let paragraph = Paragraph::new(bits.join("  |  ")).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", item.name))
            .title_style(theme::rarity_style(item.rarity.as_deref())),
    );
    frame.render_widget(paragraph, area);
}
