//! Smithy screen: services, equipment pickers, and the recipe book.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{ListItem, Paragraph},
};

use stonehaven_frontend_core::StoreState;

use crate::event::{REPAIR_COST, UPGRADE_COST, equipment};
use crate::presentation::theme;
use crate::presentation::widgets::{action_row, flavor, selectable_list};
use crate::state::{SmithyMode, SmithyView};

pub fn render(frame: &mut Frame, area: Rect, view: &SmithyView, store: &StoreState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    flavor(
        frame,
        rows[0],
        "The Smithy",
        "The rhythmic hammering echoes through the smithy as the master \
         blacksmith works his craft.",
    );

    match view.mode {
        SmithyMode::Menu => render_menu(frame, rows[1], view),
        SmithyMode::Repair | SmithyMode::Upgrade => render_picker(frame, rows[1], view, store),
        SmithyMode::Craft => render_recipes(frame, rows[1], view),
    }
}

fn render_menu(frame: &mut Frame, area: Rect, view: &SmithyView) {
    let entries = [
        ("Talk to Blacksmith".to_string(), "Trade words with the smith".to_string()),
        (
            format!("Repair Equipment ({REPAIR_COST} gold)"),
            "Restore a worn weapon or armor piece".to_string(),
        ),
        (
            format!("Upgrade Equipment ({UPGRADE_COST} gold)"),
            "Improve a weapon or armor piece".to_string(),
        ),
        ("Craft Item".to_string(), "Commission a piece from the recipe book".to_string()),
    ];
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(index, (name, detail))| {
            action_row(
                name.clone(),
                detail.clone(),
                Style::default(),
                index == view.selected,
                true,
            )
        })
        .collect();
    selectable_list(frame, area, "Services", items, view.selected);
}

fn render_picker(frame: &mut Frame, area: Rect, view: &SmithyView, store: &StoreState) {
    let title = if view.mode == SmithyMode::Repair {
        "Select Equipment to Repair (Esc to go back)"
    } else {
        "Select Equipment to Upgrade (Esc to go back)"
    };
    let items: Vec<ListItem> = equipment(store)
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let condition = item
                .condition
                .map(|c| format!("condition {:.0}%", c * 100.0))
                .unwrap_or_default();
            let upgrade = item
                .upgrade_level
                .map(|level| format!("+{level}"))
                .unwrap_or_default();
            action_row(
                format!("{} {upgrade}", item.name),
                condition,
                theme::rarity_style(item.rarity.as_deref()),
                index == view.selected,
                true,
            )
        })
        .collect();
    selectable_list(frame, area, title, items, view.selected);
}

fn render_recipes(frame: &mut Frame, area: Rect, view: &SmithyView) {
    let Some(recipes) = view.recipes.as_deref() else {
        let waiting = Paragraph::new("The blacksmith is fetching his recipe book...");
        frame.render_widget(waiting, area.inner(ratatui::layout::Margin::new(2, 1)));
        return;
    };

    let items: Vec<ListItem> = recipes
        .iter()
        .enumerate()
        .map(|(index, recipe)| {
            let materials: Vec<String> = recipe
                .materials
                .iter()
                .map(|m| format!("{} x{}", m.name, m.quantity))
                .collect();
            action_row(
                format!("{} ({} gold, {})", recipe.name, recipe.cost, recipe.crafting_time),
                if materials.is_empty() {
                    recipe.description.clone()
                } else {
                    format!("needs {}", materials.join(", "))
                },
                theme::rarity_style(recipe.result.rarity.as_deref()),
                index == view.selected,
                recipe.can_craft,
            )
        })
        .collect();
    selectable_list(frame, area, "Recipe Book (Esc to go back)", items, view.selected);
}
