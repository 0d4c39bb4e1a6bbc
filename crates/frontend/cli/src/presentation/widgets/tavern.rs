//! Tavern screen: rest and conversation.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::ListItem,
};

use stonehaven_frontend_core::StoreState;
use stonehaven_frontend_core::actions::TAVERN_ACTIONS;

use crate::presentation::theme;
use crate::presentation::widgets::{action_row, flavor, selectable_list};
use crate::state::ActionListView;

pub fn render(frame: &mut Frame, area: Rect, view: &ActionListView, store: &StoreState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    flavor(
        frame,
        rows[0],
        "The Rusty Dragon",
        "Adventurers and locals gather here to share tales and rest their \
         weary bones.",
    );

    let mut items: Vec<ListItem> = TAVERN_ACTIONS
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let enabled = action.affordable(&store.player);
            action_row(
                action.name,
                action.description,
                Style::default(),
                index == view.selected,
                enabled,
            )
        })
        .collect();

    for (offset, hint) in view.quest_actions.iter().enumerate() {
        let index = TAVERN_ACTIONS.len() + offset;
        items.push(action_row(
            format!("Quest: {}", hint.quest_title),
            hint.description.clone(),
            theme::title_style(),
            index == view.selected,
            true,
        ));
    }

    selectable_list(frame, rows[1], "What will you do?", items, view.selected);
}
