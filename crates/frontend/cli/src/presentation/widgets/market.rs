//! Market square: the hub screen with its quest hint board.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{ListItem, Paragraph},
};

use crate::presentation::theme;
use crate::presentation::widgets::{action_row, flavor, selectable_list};
use crate::state::MarketView;

pub fn render(frame: &mut Frame, area: Rect, view: &MarketView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    flavor(
        frame,
        rows[0],
        "Market Square",
        "The heart of Stonehaven. Criers call the day's news while traders \
         haggle over their stalls. Anyone looking for work checks the notice \
         board here first.",
    );

    if view.quest_actions.is_empty() {
        let empty = Paragraph::new("Nothing on the notice board right now. Travel somewhere, or check the quest log.")
            .style(Style::default());
        frame.render_widget(empty, rows[1].inner(ratatui::layout::Margin::new(2, 1)));
        return;
    }

    let items: Vec<ListItem> = view
        .quest_actions
        .iter()
        .enumerate()
        .map(|(index, hint)| {
            action_row(
                hint.quest_title.clone(),
                hint.description.clone(),
                theme::title_style(),
                index == view.selected,
                true,
            )
        })
        .collect();
    selectable_list(frame, rows[1], "Notice Board", items, view.selected);
}
