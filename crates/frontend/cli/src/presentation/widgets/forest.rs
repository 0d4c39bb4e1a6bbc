//! Forest screen: exploration actions gated by health.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, ListItem, Paragraph},
};

use stonehaven_frontend_core::StoreState;
use stonehaven_frontend_core::actions::{
    FOREST_ACTIONS, FOREST_DANGER_THRESHOLD, LOW_HEALTH_WARNING,
};

use crate::presentation::theme;
use crate::presentation::widgets::{action_row, flavor, selectable_list};
use crate::state::ActionListView;

pub fn render(frame: &mut Frame, area: Rect, view: &ActionListView, store: &StoreState) {
    let warn = store.player.health_fraction() < LOW_HEALTH_WARNING;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(if warn { 3 } else { 0 }),
            Constraint::Min(5),
        ])
        .split(area);

    flavor(
        frame,
        rows[0],
        "Whispering Forest",
        "Ancient trees close in over the trail. Adventure and danger await \
         those who venture deeper.",
    );

    if warn {
        let banner = Paragraph::new(
            "Your health is low. Consider resting before engaging in dangerous activities.",
        )
        .style(theme::warning_style())
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, rows[1]);
    }

    let mut items: Vec<ListItem> = FOREST_ACTIONS
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let blocked = action.too_dangerous(&store.player, FOREST_DANGER_THRESHOLD);
            action_row(
                format!("{} [{} risk]", action.name, action.danger.label()),
                action.description,
                theme::danger_style(action.danger),
                index == view.selected,
                !blocked,
            )
        })
        .collect();

    for (offset, hint) in view.quest_actions.iter().enumerate() {
        let index = FOREST_ACTIONS.len() + offset;
        items.push(action_row(
            format!("Quest: {}", hint.quest_title),
            hint.description.clone(),
            theme::title_style(),
            index == view.selected,
            true,
        ));
    }

    selectable_list(frame, rows[2], "Into the Woods", items, view.selected);
}
