//! Styling rules shared by every screen.
//!
//! Centralizes the color decisions so widgets stay declarative: rarity tints
//! for items, gradient styling for health/mana bars, and danger markers for
//! location actions.
use ratatui::style::{Color, Modifier, Style};
use stonehaven_frontend_core::actions::Danger;

/// Item rarity tint. Unknown or absent rarities render plain white.
pub fn rarity_style(rarity: Option<&str>) -> Style {
    let color = match rarity {
        Some("common") => Color::White,
        Some("uncommon") => Color::Green,
        Some("rare") => Color::Blue,
        Some("epic") => Color::Magenta,
        Some("legendary") => Color::Yellow,
        _ => Color::White,
    };
    Style::default().fg(color)
}

pub fn health_style(current: i64, maximum: i64) -> Style {
    gauge_style(current, maximum, [Color::Green, Color::Yellow, Color::Red])
}

pub fn mana_style(current: i64, maximum: i64) -> Style {
    gauge_style(current, maximum, [Color::Cyan, Color::Blue, Color::DarkGray])
}

fn gauge_style(current: i64, maximum: i64, [high, mid, low]: [Color; 3]) -> Style {
    if maximum <= 0 {
        return Style::default().fg(Color::Gray);
    }
    let percent = (current.max(0) * 100) / maximum;
    let color = match percent {
        60.. => high,
        30..=59 => mid,
        _ => low,
    };
    Style::default().fg(color)
}

pub fn gold_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn danger_style(danger: Danger) -> Style {
    match danger {
        Danger::Low => Style::default().fg(Color::Green),
        Danger::Medium => Style::default().fg(Color::Yellow),
        Danger::High => Style::default().fg(Color::LightRed),
    }
}

/// Style for a selectable row; bold-inverted when it carries the cursor,
/// dimmed when its precondition currently fails.
pub fn row_style(selected: bool, enabled: bool) -> Style {
    let mut style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    if selected {
        style = style.add_modifier(Modifier::BOLD).bg(Color::Rgb(40, 40, 60));
    }
    style
}

/// Speaker color in transcripts: player utterances, the System speaker, and
/// NPC lines each get their own tint.
pub fn speaker_style(speaker: &str) -> Style {
    match speaker {
        "Player" | "You" => Style::default().fg(Color::LightGreen),
        "System" => Style::default().fg(Color::LightRed),
        _ => Style::default().fg(Color::LightCyan),
    }
}

pub fn warning_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rarity_renders_plain() {
        assert_eq!(rarity_style(None), rarity_style(Some("mythical")));
    }

    #[test]
    fn empty_gauge_is_gray() {
        assert_eq!(health_style(0, 0), Style::default().fg(Color::Gray));
    }
}
