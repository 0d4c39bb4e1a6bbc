//! Mine screen: stamina-priced digs.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, ListItem, Paragraph},
};

use stonehaven_frontend_core::StoreState;
use stonehaven_frontend_core::actions::{
    MINE_ACTIONS, MINE_DANGER_THRESHOLD, MINE_FATIGUE_WARNING,
};

use crate::presentation::theme;
use crate::presentation::widgets::{action_row, flavor, selectable_list};
use crate::state::ActionListView;

pub fn render(frame: &mut Frame, area: Rect, view: &ActionListView, store: &StoreState) {
    let fatigued = store.player.mana < MINE_FATIGUE_WARNING;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(if fatigued { 3 } else { 0 }),
            Constraint::Min(5),
        ])
        .split(area);

    flavor(
        frame,
        rows[0],
        "Old Mine Entrance",
        "Lanterns flicker along timber-braced tunnels. Every swing of the \
         pick costs strength you may want back later.",
    );

    if fatigued {
        let banner =
            Paragraph::new("You are running low on stamina. Deeper digs will be off limits.")
                .style(theme::warning_style())
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, rows[1]);
    }

    let mut items: Vec<ListItem> = MINE_ACTIONS
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let blocked = !action.has_stamina(&store.player)
                || action.too_dangerous(&store.player, MINE_DANGER_THRESHOLD);
            action_row(
                format!(
                    "{} [{} risk, {} stamina]",
                    action.name,
                    action.danger.label(),
                    action.stamina_cost,
                ),
                action.description,
                theme::danger_style(action.danger),
                index == view.selected,
                !blocked,
            )
        })
        .collect();

    for (offset, hint) in view.quest_actions.iter().enumerate() {
        let index = MINE_ACTIONS.len() + offset;
        items.push(action_row(
            format!("Quest: {}", hint.quest_title),
            hint.description.clone(),
            theme::title_style(),
            index == view.selected,
            true,
        ));
    }

    selectable_list(frame, rows[2], "Mining Operations", items, view.selected);
}
