//! Quest log screen: available, active, and completed panels.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
};

use stonehaven_frontend_core::StoreState;
use stonehaven_protocol::Quest;

use crate::presentation::theme;
use crate::presentation::widgets::{action_row, selectable_list};
use crate::state::{QuestTab, QuestsView};

pub fn render(frame: &mut Frame, area: Rect, view: &QuestsView, store: &StoreState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(8),
        ])
        .split(area);

    render_tabs(frame, rows[0], view.tab);

    let quests = quests_for_tab(view, store);
    let items: Vec<ListItem> = quests
        .iter()
        .enumerate()
        .map(|(index, quest)| {
            let difficulty = quest
                .difficulty
                .as_deref()
                .map(|d| format!(" [{d}]"))
                .unwrap_or_default();
            action_row(
                format!("{}{difficulty}", quest.title),
                quest.description.clone(),
                theme::title_style(),
                index == view.selected,
                true,
            )
        })
        .collect();

    let title = match view.tab {
        QuestTab::Available => "Available (Enter accepts, r refreshes, g asks for new work)",
        QuestTab::Active => "Active (d abandons)",
        QuestTab::Completed => "Completed",
    };
    selectable_list(frame, rows[1], title, items, view.selected);

    if let Some(quest) = quests.get(view.selected) {
        render_detail(frame, rows[2], quest);
    }
}

fn quests_for_tab<'a>(view: &'a QuestsView, store: &'a StoreState) -> &'a [Quest] {
    match view.tab {
        QuestTab::Available => &view.available,
        QuestTab::Active => &store.active_quests,
        QuestTab::Completed => &store.completed_quests,
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, current: QuestTab) {
    let tab = |label: &str, active: bool| {
        let style = if active {
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {label} "), style)
    };
    let line = Line::from(vec![
        tab("Available", current == QuestTab::Available),
        Span::raw("|"),
        tab("Active", current == QuestTab::Active),
        Span::raw("|"),
        tab("Completed", current == QuestTab::Completed),
        Span::styled("  (Left/Right to switch)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_detail(frame: &mut Frame, area: Rect, quest: &Quest) {
    let mut lines: Vec<Line> = quest
        .visible_objectives()
        .iter()
        .map(|objective| {
            let mark = if objective.completed { "[x]" } else { "[ ]" };
            let progress = match (objective.progress, objective.target) {
                (Some(done), Some(target)) => format!(" ({done}/{target})"),
                _ => String::new(),
            };
            Line::from(format!("{mark} {}{progress}", objective.description))
        })
        .collect();

    let mut reward_bits = Vec::new();
    if let Some(gold) = quest.reward_gold.or(quest.reward.as_ref().and_then(|r| r.gold)) {
        reward_bits.push(format!("{gold} gold"));
    }
    if let Some(exp) = quest.reward_exp.or(quest.reward.as_ref().and_then(|r| r.experience)) {
        reward_bits.push(format!("{exp} xp"));
    }
    if !reward_bits.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Reward: {}", reward_bits.join(", ")),
            theme::gold_style(),
        )));
    }
    if let Some(contact) = &quest.contact {
        lines.push(Line::from(format!("Contact: {contact}")));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", quest.title)),
    );
    frame.render_widget(paragraph, area);
}
