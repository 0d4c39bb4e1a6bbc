//! Shop screen with its three browse modes.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::ListItem,
};

use stonehaven_frontend_core::StoreState;

use crate::presentation::theme;
use crate::presentation::widgets::{action_row, flavor, selectable_list};
use crate::state::{ShopMode, ShopView};

pub fn render(frame: &mut Frame, area: Rect, view: &ShopView, store: &StoreState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    flavor(
        frame,
        rows[0],
        "Erik's General Goods",
        "Shelves stacked with gear, curios, and the occasional genuine \
         bargain. Erik sizes you up as you enter.",
    );

    match view.mode {
        ShopMode::Menu => render_menu(frame, rows[1], view),
        ShopMode::Buy => render_buy(frame, rows[1], view, store),
        ShopMode::Sell => render_sell(frame, rows[1], view, store),
    }
}

fn render_menu(frame: &mut Frame, area: Rect, view: &ShopView) {
    let entries = [
        ("Browse Wares", "See what Erik has in stock"),
        ("Sell Items", "Sell your items to Erik for gold"),
        ("Talk to Merchant", "Chat with Erik about town and trade"),
    ];
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(index, (name, detail))| {
            action_row(*name, *detail, Style::default(), index == view.selected, true)
        })
        .collect();
    selectable_list(frame, area, "Shop", items, view.selected);
}

fn render_buy(frame: &mut Frame, area: Rect, view: &ShopView, store: &StoreState) {
    let items: Vec<ListItem> = view
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let price = item.buy_price();
            let affordable = price.is_some_and(|p| store.player.gold >= p);
            let tag = match price {
                Some(p) => format!("{p} gold"),
                None => "not for sale".to_string(),
            };
            action_row(
                format!("{} ({tag})", item.name),
                item.description.clone().unwrap_or_default(),
                theme::rarity_style(item.rarity.as_deref()),
                index == view.selected,
                affordable,
            )
        })
        .collect();
    selectable_list(frame, area, "Wares (Esc to go back)", items, view.selected);
}

fn render_sell(frame: &mut Frame, area: Rect, view: &ShopView, store: &StoreState) {
    let items: Vec<ListItem> = store
        .player
        .inventory
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let tag = match item.sell_price() {
                Some(p) => format!("sells for {p} gold"),
                None => "worthless".to_string(),
            };
            action_row(
                format!("{} x{} ({tag})", item.name, item.quantity),
                item.description.clone().unwrap_or_default(),
                theme::rarity_style(item.rarity.as_deref()),
                index == view.selected,
                true,
            )
        })
        .collect();
    selectable_list(frame, area, "Your Pack (Esc to go back)", items, view.selected);
}
