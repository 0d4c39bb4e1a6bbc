//! Keyboard handling: maps a key press onto view-state mutation plus an
//! optional [`Command`] for the event loop to execute.
//!
//! Client-side preconditions live here: an action whose gold/stamina/health
//! requirement fails never becomes a command, so the server call is never
//! issued and the refusal is shown locally.
use crossterm::event::{KeyCode, KeyEvent};
use serde_json::json;
use strum::IntoEnumIterator;

use stonehaven_frontend_core::actions::{
    FOREST_ACTIONS, FOREST_DANGER_THRESHOLD, LocationAction, MINE_ACTIONS, MINE_DANGER_THRESHOLD,
    TAVERN_ACTIONS, TAVERN_REST_COST,
};
use stonehaven_frontend_core::StoreState;
use stonehaven_protocol::{DialogMessage, InventoryItem, LocationId};

use super::Command;
use crate::state::{AppState, QuestTab, ScreenView, ShopMode, SmithyMode, move_selection};

pub const REPAIR_COST: i64 = 20;
pub const UPGRADE_COST: i64 = 50;

/// Handle one key press against the current view and store snapshot.
pub fn handle_key(key: KeyEvent, app: &mut AppState, store: &StoreState) -> Option<Command> {
    if app.modal.is_some() {
        app.modal = None;
        return None;
    }
    if app.chat.is_some() {
        return chat_key(key, app);
    }

    match key.code {
        KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Tab => return Some(Command::Navigate(next_location(store.current_location))),
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            let location = LocationId::iter().nth(index)?;
            if location != store.current_location {
                return Some(Command::Navigate(location));
            }
            return None;
        }
        KeyCode::Up => {
            let len = rows_len(app, store);
            set_selection(app, |s| move_selection(s, len, -1));
            return None;
        }
        KeyCode::Down => {
            let len = rows_len(app, store);
            set_selection(app, |s| move_selection(s, len, 1));
            return None;
        }
        KeyCode::Esc => {
            screen_back(app);
            return None;
        }
        _ => {}
    }

    match &mut app.view {
        ScreenView::Market(_) => market_key(key, app, store),
        ScreenView::Tavern(_) => tavern_key(key, app, store),
        ScreenView::Shop(_) => shop_key(key, app, store),
        ScreenView::Smithy(_) => smithy_key(key, app, store),
        ScreenView::Forest(_) => forest_key(key, app, store),
        ScreenView::Mine(_) => mine_key(key, app, store),
        ScreenView::Quests(_) => quests_key(key, app, store),
        ScreenView::Inventory(_) => inventory_key(key, app, store),
    }
}

fn next_location(current: LocationId) -> LocationId {
    let all: Vec<LocationId> = LocationId::iter().collect();
    let position = all.iter().position(|l| *l == current).unwrap_or(0);
    all[(position + 1) % all.len()]
}

/// Number of selectable rows on the current screen.
fn rows_len(app: &AppState, store: &StoreState) -> usize {
    match &app.view {
        ScreenView::Market(view) => view.quest_actions.len(),
        ScreenView::Tavern(view) => TAVERN_ACTIONS.len() + view.quest_actions.len(),
        ScreenView::Shop(view) => match view.mode {
            ShopMode::Menu => 3,
            ShopMode::Buy => view.items.len(),
            ShopMode::Sell => store.player.inventory.len(),
        },
        ScreenView::Smithy(view) => match view.mode {
            SmithyMode::Menu => 4,
            SmithyMode::Repair | SmithyMode::Upgrade => equipment(store).len(),
            SmithyMode::Craft => view.recipes.as_deref().map_or(0, <[_]>::len),
        },
        ScreenView::Forest(view) => FOREST_ACTIONS.len() + view.quest_actions.len(),
        ScreenView::Mine(view) => MINE_ACTIONS.len() + view.quest_actions.len(),
        ScreenView::Quests(view) => match view.tab {
            QuestTab::Available => view.available.len(),
            QuestTab::Active => store.active_quests.len(),
            QuestTab::Completed => store.completed_quests.len(),
        },
        ScreenView::Inventory(_) => store.player.inventory.len(),
    }
}

fn set_selection(app: &mut AppState, update: impl Fn(usize) -> usize) {
    let selected = match &mut app.view {
        ScreenView::Market(view) => &mut view.selected,
        ScreenView::Tavern(view) | ScreenView::Forest(view) | ScreenView::Mine(view) => {
            &mut view.selected
        }
        ScreenView::Shop(view) => &mut view.selected,
        ScreenView::Smithy(view) => &mut view.selected,
        ScreenView::Quests(view) => &mut view.selected,
        ScreenView::Inventory(view) => &mut view.selected,
    };
    *selected = update(*selected);
}

/// Esc steps shop/smithy pickers back to their menu; elsewhere it is inert.
fn screen_back(app: &mut AppState) {
    match &mut app.view {
        ScreenView::Shop(view) if view.mode != ShopMode::Menu => {
            view.mode = ShopMode::Menu;
            view.selected = 0;
        }
        ScreenView::Smithy(view) if view.mode != SmithyMode::Menu => {
            view.mode = SmithyMode::Menu;
            view.selected = 0;
        }
        _ => {}
    }
}

/// Player-owned equipment the smithy can work on.
pub fn equipment(store: &StoreState) -> Vec<&InventoryItem> {
    store
        .player
        .inventory
        .iter()
        .filter(|item| item.is_equipment())
        .collect()
}

fn chat_key(key: KeyEvent, app: &mut AppState) -> Option<Command> {
    let chat = app.chat.as_mut()?;
    match key.code {
        KeyCode::Esc => {
            app.chat = None;
            None
        }
        KeyCode::Enter => {
            let text = chat.input.trim().to_string();
            if text.is_empty() || chat.session.waiting {
                return None;
            }
            chat.input.clear();
            chat.session.push(DialogMessage::new("Player", text.clone()));
            chat.session.waiting = true;
            Some(Command::SendChat(text))
        }
        KeyCode::Backspace => {
            chat.input.pop();
            None
        }
        KeyCode::Char(c) => {
            chat.input.push(c);
            None
        }
        _ => None,
    }
}

fn market_key(key: KeyEvent, app: &mut AppState, _store: &StoreState) -> Option<Command> {
    let ScreenView::Market(view) = &app.view else {
        return None;
    };
    match key.code {
        KeyCode::Enter => {
            let hint = view.quest_actions.get(view.selected)?;
            Some(Command::QuestHint(hint.clone()))
        }
        _ => None,
    }
}

fn tavern_key(key: KeyEvent, app: &mut AppState, store: &StoreState) -> Option<Command> {
    let ScreenView::Tavern(view) = &app.view else {
        return None;
    };
    if key.code != KeyCode::Enter {
        return None;
    }

    if let Some(action) = TAVERN_ACTIONS.get(view.selected) {
        return match action.id {
            "rest" => {
                if !action.affordable(&store.player) {
                    app.open_modal(
                        "Innkeeper",
                        format!(
                            "Sorry, you don't have enough gold for a room. \
                             A night's rest costs {TAVERN_REST_COST} gold.",
                        ),
                    );
                    return None;
                }
                Some(Command::LocationAction {
                    location: LocationId::Tavern,
                    action: "rest".to_string(),
                    speaker: "Innkeeper",
                    extra: Some(json!({ "cost": TAVERN_REST_COST })),
                    quest_follow: Some("rest".to_string()),
                })
            }
            "talk_innkeeper" => Some(Command::OpenChat {
                character: "tavern_keeper",
                name: "Innkeeper",
            }),
            "talk_regular" => Some(Command::OpenChat {
                character: "tavern_regular",
                name: "Tavern Regular",
            }),
            _ => None,
        };
    }

    let hint = view.quest_actions.get(view.selected - TAVERN_ACTIONS.len())?;
    Some(Command::QuestHint(hint.clone()))
}

fn forest_key(key: KeyEvent, app: &mut AppState, store: &StoreState) -> Option<Command> {
    let ScreenView::Forest(view) = &app.view else {
        return None;
    };
    if key.code != KeyCode::Enter {
        return None;
    }

    if let Some(action) = FOREST_ACTIONS.get(view.selected) {
        if action.too_dangerous(&store.player, FOREST_DANGER_THRESHOLD) {
            app.open_modal(
                "Forest",
                "You are in no shape for something that dangerous. Rest up first.",
            );
            return None;
        }
        return Some(catalog_action(action, LocationId::Forest, "Forest"));
    }

    let hint = view.quest_actions.get(view.selected - FOREST_ACTIONS.len())?;
    Some(Command::QuestHint(hint.clone()))
}

fn mine_key(key: KeyEvent, app: &mut AppState, store: &StoreState) -> Option<Command> {
    let ScreenView::Mine(view) = &app.view else {
        return None;
    };
    if key.code != KeyCode::Enter {
        return None;
    }

    if let Some(action) = MINE_ACTIONS.get(view.selected) {
        if !action.has_stamina(&store.player) {
            app.open_modal(
                "Mining Foreman",
                format!(
                    "You're too tired to attempt this mining operation. \
                     You need at least {} mana points.",
                    action.stamina_cost,
                ),
            );
            return None;
        }
        if action.too_dangerous(&store.player, MINE_DANGER_THRESHOLD) {
            app.open_modal(
                "Mining Foreman",
                "The deep shafts are no place for the wounded. Come back healthier.",
            );
            return None;
        }
        return Some(catalog_action(action, LocationId::Mine, "Mining Result"));
    }

    let hint = view.quest_actions.get(view.selected - MINE_ACTIONS.len())?;
    Some(Command::QuestHint(hint.clone()))
}

fn catalog_action(
    action: &LocationAction,
    location: LocationId,
    speaker: &'static str,
) -> Command {
    Command::LocationAction {
        location,
        action: action.id.to_string(),
        speaker,
        extra: None,
        quest_follow: Some(action.quest_gesture.to_string()),
    }
}

fn shop_key(key: KeyEvent, app: &mut AppState, store: &StoreState) -> Option<Command> {
    let ScreenView::Shop(view) = &mut app.view else {
        return None;
    };
    if key.code != KeyCode::Enter {
        return None;
    }

    match view.mode {
        ShopMode::Menu => {
            match view.selected {
                0 => {
                    view.mode = ShopMode::Buy;
                    view.selected = 0;
                }
                1 => {
                    view.mode = ShopMode::Sell;
                    view.selected = 0;
                }
                _ => {
                    return Some(Command::OpenChat {
                        character: "merchant",
                        name: "Erik",
                    });
                }
            }
            None
        }
        ShopMode::Buy => {
            let item = view.items.get(view.selected)?.clone();
            let Some(price) = item.buy_price() else {
                app.open_modal("Erik", format!("The {} is not for sale.", item.name));
                return None;
            };
            if store.player.gold < price {
                app.open_modal(
                    "Erik",
                    format!(
                        "You don't have enough gold for the {}. You need {price} gold coins.",
                        item.name,
                    ),
                );
                return None;
            }
            Some(Command::Buy {
                item_id: item.id,
                name: item.name,
            })
        }
        ShopMode::Sell => {
            let item = store.player.inventory.get(view.selected)?;
            Some(Command::Sell {
                item_id: item.id.clone(),
                name: item.name.clone(),
            })
        }
    }
}

fn smithy_key(key: KeyEvent, app: &mut AppState, store: &StoreState) -> Option<Command> {
    let ScreenView::Smithy(view) = &mut app.view else {
        return None;
    };
    if key.code != KeyCode::Enter {
        return None;
    }

    match view.mode {
        SmithyMode::Menu => {
            match view.selected {
                0 => {
                    return Some(Command::OpenChat {
                        character: "blacksmith",
                        name: "Blacksmith",
                    });
                }
                1 | 2 => {
                    if equipment(store).is_empty() {
                        app.open_modal(
                            "Blacksmith",
                            "You don't have any equipment that can be repaired or upgraded.",
                        );
                        return None;
                    }
                    view.mode = if view.selected == 1 {
                        SmithyMode::Repair
                    } else {
                        SmithyMode::Upgrade
                    };
                    view.selected = 0;
                }
                _ => {
                    view.mode = SmithyMode::Craft;
                    view.selected = 0;
                }
            }
            None
        }
        SmithyMode::Repair | SmithyMode::Upgrade => {
            let (service, cost) = if view.mode == SmithyMode::Repair {
                ("repair", REPAIR_COST)
            } else {
                ("upgrade", UPGRADE_COST)
            };
            let owned = equipment(store);
            let item = (*owned.get(view.selected)?).clone();
            if store.player.gold < cost {
                app.open_modal(
                    "Blacksmith",
                    format!("My {service} work costs {cost} gold. Come back with the coin."),
                );
                return None;
            }
            if let ScreenView::Smithy(view) = &mut app.view {
                view.mode = SmithyMode::Menu;
                view.selected = 0;
            }
            Some(Command::LocationAction {
                location: LocationId::Smithy,
                action: service.to_string(),
                speaker: "Blacksmith",
                extra: Some(json!({ "itemId": item.id, "itemName": item.name })),
                quest_follow: None,
            })
        }
        SmithyMode::Craft => {
            let recipe = view.recipes.as_deref()?.get(view.selected)?.clone();
            if !recipe.can_craft {
                let body = if recipe.craft_message.is_empty() {
                    "You don't meet the requirements for that recipe.".to_string()
                } else {
                    recipe.craft_message.clone()
                };
                app.open_modal("Blacksmith", body);
                return None;
            }
            if store.player.gold < recipe.cost {
                app.open_modal(
                    "Blacksmith",
                    format!("Crafting a {} costs {} gold.", recipe.name, recipe.cost),
                );
                return None;
            }
            if let ScreenView::Smithy(view) = &mut app.view {
                view.mode = SmithyMode::Menu;
                view.selected = 0;
            }
            Some(Command::LocationAction {
                location: LocationId::Smithy,
                action: "craft".to_string(),
                speaker: "Blacksmith",
                extra: Some(json!({
                    "itemId": recipe.id,
                    "itemName": recipe.name,
                    "itemType": recipe.kind,
                })),
                quest_follow: None,
            })
        }
    }
}

fn quests_key(key: KeyEvent, app: &mut AppState, store: &StoreState) -> Option<Command> {
    let ScreenView::Quests(view) = &mut app.view else {
        return None;
    };
    match key.code {
        KeyCode::Left | KeyCode::Right => {
            view.tab = view.tab.next();
            view.selected = 0;
            None
        }
        KeyCode::Char('r') => Some(Command::RefreshQuests),
        KeyCode::Char('g') => Some(Command::GenerateQuest),
        KeyCode::Char('d') if view.tab == QuestTab::Active => {
            let quest = store.active_quests.get(view.selected)?;
            Some(Command::AbandonQuest(quest.id.clone()))
        }
        KeyCode::Enter if view.tab == QuestTab::Available => {
            let quest = view.available.get(view.selected)?;
            if store.active_quests.iter().any(|q| q.id == quest.id) {
                let id = quest.id.clone();
                app.open_modal("Quest Log", "You have already accepted this quest.");
                tracing::debug!(quest_id = %id, "duplicate accept blocked");
                return None;
            }
            Some(Command::AcceptQuest(quest.id.clone()))
        }
        _ => None,
    }
}

fn inventory_key(key: KeyEvent, app: &mut AppState, store: &StoreState) -> Option<Command> {
    let ScreenView::Inventory(view) = &app.view else {
        return None;
    };
    match key.code {
        KeyCode::Enter => {
            store.player.inventory.get(view.selected)?;
            Some(Command::UseItem(view.selected))
        }
        KeyCode::Char('x') => {
            let item = store.player.inventory.get(view.selected)?;
            Some(Command::LocationAction {
                location: LocationId::Inventory,
                action: "drop".to_string(),
                speaker: "Inventory",
                extra: Some(json!({ "itemId": item.id, "itemName": item.name })),
                quest_follow: None,
            })
        }
        KeyCode::Char('w') => Some(Command::Unequip("weapon")),
        KeyCode::Char('a') => Some(Command::Unequip("armor")),
        KeyCode::Char('c') => Some(Command::Unequip("accessory")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use stonehaven_frontend_core::{DialogSession, StoreState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_at(location: LocationId) -> (AppState, StoreState) {
        let mut app = AppState::new();
        app.enter(location);
        let mut store = StoreState::default();
        store.current_location = location;
        (app, store)
    }

    #[test]
    fn broke_player_cannot_rest() {
        let (mut app, mut store) = state_at(LocationId::Tavern);
        store.player.gold = 5;

        // Cursor starts on "rest".
        let command = handle_key(press(KeyCode::Enter), &mut app, &store);

        assert!(command.is_none(), "rest must not reach the server");
        let modal = app.modal.expect("refusal shown");
        assert_eq!(modal.title, "Innkeeper");
        assert!(modal.body.contains("10 gold"));
        assert_eq!(store.player.gold, 5);
    }

    #[test]
    fn rest_with_enough_gold_becomes_a_location_action() {
        let (mut app, store) = state_at(LocationId::Tavern);

        match handle_key(press(KeyCode::Enter), &mut app, &store) {
            Some(Command::LocationAction {
                location,
                action,
                quest_follow,
                ..
            }) => {
                assert_eq!(location, LocationId::Tavern);
                assert_eq!(action, "rest");
                assert_eq!(quest_follow.as_deref(), Some("rest"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn buy_without_gold_is_refused_locally() {
        let (mut app, mut store) = state_at(LocationId::Shop);
        store.player.gold = 30;
        if let ScreenView::Shop(view) = &mut app.view {
            view.mode = ShopMode::Buy;
            view.items = vec![
                serde_json::from_value(serde_json::json!({
                    "id": "steel_sword",
                    "name": "Steel Sword",
                    "type": "weapon",
                    "value": 50,
                }))
                .unwrap(),
            ];
        }

        let command = handle_key(press(KeyCode::Enter), &mut app, &store);

        assert!(command.is_none(), "buy must not be issued");
        let modal = app.modal.expect("refusal shown");
        assert!(modal.body.contains("50 gold"));
        assert_eq!(store.player.gold, 30);
    }

    #[test]
    fn exhausted_miner_is_turned_away() {
        let (mut app, mut store) = state_at(LocationId::Mine);
        store.player.mana = 5;

        let command = handle_key(press(KeyCode::Enter), &mut app, &store);

        assert!(command.is_none());
        assert_eq!(app.modal.unwrap().title, "Mining Foreman");
    }

    #[test]
    fn forest_explore_follows_up_with_its_quest_gesture() {
        let (mut app, store) = state_at(LocationId::Forest);

        match handle_key(press(KeyCode::Enter), &mut app, &store) {
            Some(Command::LocationAction {
                action,
                quest_follow,
                ..
            }) => {
                assert_eq!(action, "explore");
                assert_eq!(quest_follow.as_deref(), Some("explore_forest"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn high_danger_forest_action_blocked_below_half_health() {
        let (mut app, mut store) = state_at(LocationId::Forest);
        store.player.health = 40; // 40% of 100
        if let ScreenView::Forest(view) = &mut app.view {
            // search_treasure is the high-danger entry.
            view.selected = FOREST_ACTIONS.len() - 1;
        }

        let command = handle_key(press(KeyCode::Enter), &mut app, &store);

        assert!(command.is_none());
        assert!(app.modal.is_some());
    }

    #[test]
    fn accepting_an_active_quest_is_blocked() {
        let (mut app, mut store) = state_at(LocationId::Quest);
        let quest: stonehaven_protocol::Quest = serde_json::from_value(serde_json::json!({
            "id": "rats",
            "title": "Rats in the Cellar",
        }))
        .unwrap();
        store.active_quests.push(quest.clone());
        if let ScreenView::Quests(view) = &mut app.view {
            view.available = vec![quest];
        }

        let command = handle_key(press(KeyCode::Enter), &mut app, &store);

        assert!(command.is_none());
        assert_eq!(app.modal.unwrap().title, "Quest Log");
    }

    #[test]
    fn modal_swallows_the_next_key() {
        let (mut app, store) = state_at(LocationId::Tavern);
        app.open_modal("Note", "hello");

        let command = handle_key(press(KeyCode::Enter), &mut app, &store);

        assert!(command.is_none());
        assert!(app.modal.is_none());
    }

    #[test]
    fn chat_enter_sends_trimmed_input() {
        let (mut app, store) = state_at(LocationId::Shop);
        app.open_chat(DialogSession::open("merchant", "Erik"));
        for c in " hello ".chars() {
            handle_key(press(KeyCode::Char(c)), &mut app, &store);
        }

        match handle_key(press(KeyCode::Enter), &mut app, &store) {
            Some(Command::SendChat(text)) => assert_eq!(text, "hello"),
            other => panic!("unexpected: {other:?}"),
        }
        let chat = app.chat.as_ref().unwrap();
        assert!(chat.session.waiting);
        assert_eq!(chat.session.messages.last().unwrap().speaker, "Player");
    }

    #[test]
    fn number_keys_navigate() {
        let (mut app, store) = state_at(LocationId::MainPage);
        match handle_key(press(KeyCode::Char('2')), &mut app, &store) {
            Some(Command::Navigate(location)) => assert_eq!(location, LocationId::Tavern),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
