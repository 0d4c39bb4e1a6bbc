//! Background tasks executing commands against the server.
//!
//! Every effect owns a [`Services`] clone and follows the same shape: raise
//! the loading flag, await the call(s) sequentially, merge results through
//! the dispatcher and the ui channel, and always clear the loading flag on
//! the way out. Failures surface as a System message, never as a panic or a
//! stuck spinner.
use serde_json::Value;

use stonehaven_api::GameApi;
use stonehaven_frontend_core::StoreEvent;
use stonehaven_protocol::{ActionData, DialogContext, DialogMessage, LocationId};

use super::{Services, UiMsg};

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// First fetch after startup: player snapshot plus the active quest list.
pub async fn initial_load<A: GameApi>(services: Services<A>) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.api.get_player().await {
        Ok(player) => services.dispatcher.dispatch(StoreEvent::SetPlayer(player)),
        Err(error) => {
            tracing::error!(%error, "initial player fetch failed");
            services.modal(
                "Connection",
                "Could not reach the game server. Check GAME_API_URL and try again.",
            );
        }
    }

    if let Err(error) = services.quests.load_active().await {
        tracing::warn!(%error, "initial active quest fetch failed");
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

/// On-entry fetches for a location: quest hints always, plus whatever list
/// the screen itself renders. All of it is lenient; an empty screen with a
/// log line beats a blocked navigation.
pub async fn enter_location<A: GameApi>(services: Services<A>, location: LocationId) {
    let actions = services.quests.actions_for(location).await;
    services.send(UiMsg::QuestActions { location, actions });

    match location {
        LocationId::Shop => match services.api.shop_items().await {
            Ok(items) => services.send(UiMsg::ShopItems(items)),
            Err(error) => tracing::warn!(%error, "shop inventory fetch failed"),
        },
        LocationId::Smithy => match services.api.smithy_recipes().await {
            Ok(response) => services.send(UiMsg::Recipes(response.recipes)),
            Err(error) => tracing::warn!(%error, "recipe fetch failed"),
        },
        LocationId::Quest => match services.api.available_quests().await {
            Ok(quests) => services.send(UiMsg::AvailableQuests(quests)),
            Err(error) => tracing::warn!(%error, "available quest fetch failed"),
        },
        _ => {}
    }
}

/// Plain location action, optionally followed by its quest gesture. The two
/// calls are strictly sequential; the follow-up is lenient and only ever
/// adds a notice.
pub async fn location_action<A: GameApi>(
    services: Services<A>,
    location: LocationId,
    action: String,
    speaker: &'static str,
    extra: Option<Value>,
    quest_follow: Option<String>,
) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.api.perform_action(location, &action, extra).await {
        Ok(response) => {
            if let Some(data) = &response.data {
                apply_action_data(&services, data);
            }
            let body = if response.message.is_empty() {
                format!("You finish the {action}.")
            } else {
                response.message.clone()
            };
            services.note(DialogMessage::new(speaker, body.clone()));
            services.modal(speaker, body);

            if let Some(gesture) = quest_follow {
                follow_quest_action(&services, &gesture, location).await;
            }
        }
        Err(error) => {
            tracing::error!(%error, %location, action, "location action failed");
            services.note(DialogMessage::system(GENERIC_FAILURE));
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

/// Quest follow-up for a location gesture. A miss here is normal (most
/// actions advance no quest), so failures only log, and the server's
/// explicit "No quest progress" reply is not worth a notice either.
async fn follow_quest_action<A: GameApi>(
    services: &Services<A>,
    gesture: &str,
    location: LocationId,
) {
    match services.quests.perform(gesture, location, None).await {
        Ok(response)
            if !response.message.is_empty()
                && !response.message.contains("No quest progress") =>
        {
            services.note(DialogMessage::new("Quest Progress", response.message));
        }
        Ok(_) => {}
        Err(error) => {
            tracing::debug!(%error, gesture, "no quest action triggered");
        }
    }
}

/// Direct activation of a quest hint at the current location.
pub async fn quest_hint<A: GameApi>(
    services: Services<A>,
    location: LocationId,
    hint: stonehaven_protocol::QuestAction,
) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services
        .quests
        .perform(&hint.action, location, Some(&hint.quest_id))
        .await
    {
        Ok(response) => {
            let detail = if response.message.is_empty() {
                hint.description.clone()
            } else {
                response.message.clone()
            };
            let body = format!("{}: {detail}", hint.quest_title);
            services.note(DialogMessage::new("Quest", body.clone()));
            services.modal("Quest", body);
        }
        Err(error) => {
            tracing::error!(%error, quest_id = %hint.quest_id, "quest action failed");
            services.note(DialogMessage::system(GENERIC_FAILURE));
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

pub async fn accept_quest<A: GameApi>(services: Services<A>, quest_id: String) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.quests.accept(&quest_id).await {
        Ok(quest) => {
            services.note(DialogMessage::new(
                "Quest Log",
                format!("Accepted: {}", quest.title),
            ));
            if let Ok(quests) = services.api.available_quests().await {
                services.send(UiMsg::AvailableQuests(quests));
            }
        }
        Err(error) => {
            tracing::error!(%error, %quest_id, "quest accept failed");
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

pub async fn abandon_quest<A: GameApi>(services: Services<A>, quest_id: String) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.quests.abandon(&quest_id).await {
        Ok(()) => services.note(DialogMessage::new("Quest Log", "Quest abandoned.")),
        Err(error) => {
            tracing::error!(%error, %quest_id, "quest abandon failed");
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

pub async fn refresh_quests<A: GameApi>(services: Services<A>) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.quests.refresh().await {
        Ok(quests) => services.send(UiMsg::AvailableQuests(quests)),
        Err(error) => {
            tracing::error!(%error, "quest refresh failed");
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

pub async fn generate_quest<A: GameApi>(services: Services<A>) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.quests.generate(None).await {
        Ok(quest) => {
            services.note(DialogMessage::new(
                "Quest Log",
                format!("A new job is posted: {}", quest.title),
            ));
            services.send(UiMsg::QuestGenerated(quest));
        }
        Err(error) => {
            tracing::error!(%error, "quest generation failed");
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

/// Buy one unit, then re-sync the player and the shop listing so prices and
/// stock reflect the trade.
pub async fn buy<A: GameApi>(services: Services<A>, item_id: String, name: String) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.api.buy_item(&item_id, 1).await {
        Ok(trade) => {
            if trade.success {
                resync_player(&services).await;
                if let Ok(items) = services.api.shop_items().await {
                    services.send(UiMsg::ShopItems(items));
                }
            }
            let body = if trade.message.is_empty() {
                format!("A fine choice, the {name} is yours.")
            } else {
                trade.message
            };
            services.note(DialogMessage::new("Erik", body.clone()));
            services.modal("Erik", body);
        }
        Err(error) => {
            tracing::error!(%error, %item_id, "buy failed");
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

pub async fn sell<A: GameApi>(services: Services<A>, item_id: String, name: String) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.api.sell_item(&item_id, 1).await {
        Ok(trade) => {
            if trade.success {
                resync_player(&services).await;
            }
            let body = if trade.message.is_empty() {
                format!("I'll take the {name} off your hands.")
            } else {
                trade.message
            };
            services.note(DialogMessage::new("Erik", body.clone()));
            services.modal("Erik", body);
        }
        Err(error) => {
            tracing::error!(%error, %item_id, "sell failed");
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

pub async fn use_item<A: GameApi>(services: Services<A>, item_index: usize) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.api.use_item(item_index).await {
        Ok(response) => {
            if let Some(data) = &response.data {
                apply_action_data(&services, data);
            }
            if !response.message.is_empty() {
                services.note(DialogMessage::new("Inventory", response.message.clone()));
                services.modal("Inventory", response.message);
            }
        }
        Err(error) => {
            tracing::error!(%error, item_index, "use item failed");
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

pub async fn unequip<A: GameApi>(services: Services<A>, slot: &'static str) {
    services.dispatcher.dispatch(StoreEvent::SetLoading(true));

    match services.api.unequip_item(slot).await {
        Ok(response) => {
            if let Some(data) = &response.data {
                apply_action_data(&services, data);
            }
            if !response.message.is_empty() {
                services.note(DialogMessage::new("Inventory", response.message));
            }
        }
        Err(error) => {
            tracing::error!(%error, slot, "unequip failed");
            services.modal("System", GENERIC_FAILURE);
        }
    }

    services.dispatcher.dispatch(StoreEvent::SetLoading(false));
}

/// Fetch history and quest hints for a freshly opened chat overlay.
pub async fn open_chat<A: GameApi>(
    services: Services<A>,
    session_id: String,
    location: LocationId,
) {
    let history = match services.api.dialog_history(&session_id).await {
        Ok(history) => history,
        Err(error) => {
            tracing::warn!(%error, %session_id, "dialog history fetch failed");
            Vec::new()
        }
    };
    let quest_actions = services.quests.actions_for(location).await;

    services.send(UiMsg::ChatOpened {
        session_id,
        history,
        quest_actions,
    });
}

/// Send an utterance with its context payload and deliver the reply (or a
/// System line on failure) back to the owning session.
pub async fn send_chat<A: GameApi>(
    services: Services<A>,
    session_id: String,
    text: String,
    context: DialogContext,
) {
    services.note(DialogMessage::new("Player", text.clone()));

    let message = match services
        .api
        .send_dialog(&session_id, &text, Some(context))
        .await
    {
        Ok(reply) => {
            services.note(reply.clone());
            reply
        }
        Err(error) => {
            tracing::error!(%error, %session_id, "dialog send failed");
            DialogMessage::system(GENERIC_FAILURE)
        }
    };

    services.send(UiMsg::ChatReply {
        session_id,
        message,
    });
}

/// Replace the store's player with a fresh authoritative fetch.
async fn resync_player<A: GameApi>(services: &Services<A>) {
    match services.api.get_player().await {
        Ok(player) => services.dispatcher.dispatch(StoreEvent::SetPlayer(player)),
        Err(error) => tracing::warn!(%error, "player re-sync failed"),
    }
}

/// Merge a response's loose data payload into the store. A full player
/// snapshot wins outright; otherwise each present field goes through its
/// clamping event.
fn apply_action_data<A: GameApi>(services: &Services<A>, data: &ActionData) {
    if let Some(player) = data.player.clone() {
        services.dispatcher.dispatch(StoreEvent::SetPlayer(player));
        return;
    }
    if let Some(gold) = data.gold {
        services.dispatcher.dispatch(StoreEvent::SetGold(gold));
    }
    if let Some(health) = data.health {
        services.dispatcher.dispatch(StoreEvent::SetHealth(health));
    }
    if let Some(mana) = data.mana {
        services.dispatcher.dispatch(StoreEvent::SetMana(mana));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use stonehaven_api::MockApi;
    use stonehaven_frontend_core::{Dispatcher, GameStore};
    use tokio::sync::mpsc;

    fn harness() -> (
        Services<MockApi>,
        MockApi,
        mpsc::UnboundedReceiver<StoreEvent>,
        mpsc::UnboundedReceiver<UiMsg>,
    ) {
        let api = MockApi::new();
        let (dispatcher, rx_store) = Dispatcher::channel();
        let (tx_ui, rx_ui) = mpsc::unbounded_channel();
        let services = Services::new(Arc::new(api.clone()), dispatcher, tx_ui);
        (services, api, rx_store, rx_ui)
    }

    fn drain(store: &mut GameStore, rx: &mut mpsc::UnboundedReceiver<StoreEvent>) {
        while let Ok(event) = rx.try_recv() {
            store.dispatch(event);
        }
    }

    #[tokio::test]
    async fn initial_load_replaces_placeholder_and_clears_loading() {
        let (services, api, mut rx_store, _rx_ui) = harness();
        let mut player = MockApi::sample_player();
        player.gold = 275;
        api.set_player(player);
        let mut store = GameStore::new();

        initial_load(services).await;
        drain(&mut store, &mut rx_store);

        assert_eq!(store.state().player.gold, 275);
        assert!(!store.state().is_loading);
    }

    #[tokio::test]
    async fn failed_location_action_leaves_system_notice_and_clears_loading() {
        let (services, api, mut rx_store, mut rx_ui) = harness();
        api.fail_quest_actions(true);
        api.fail_actions(true);
        let mut store = GameStore::new();

        location_action(
            services,
            LocationId::Forest,
            "explore".to_string(),
            "Forest",
            None,
            Some("explore_forest".to_string()),
        )
        .await;
        drain(&mut store, &mut rx_store);

        assert!(!store.state().is_loading);
        let last = store.state().dialog_history.last().unwrap();
        assert_eq!(last.speaker, "System");
        assert!(matches!(rx_ui.try_recv(), Ok(UiMsg::Modal { .. })));
    }

    #[tokio::test]
    async fn rest_applies_clamped_resource_data() {
        let (services, api, mut rx_store, _rx_ui) = harness();
        api.set_action_response(stonehaven_protocol::ActionResponse {
            success: true,
            message: "You sleep like a log.".to_string(),
            data: Some(ActionData {
                gold: Some(90),
                health: Some(250),
                mana: Some(50),
                player: None,
            }),
        });
        let mut store = GameStore::new();

        location_action(
            services,
            LocationId::Tavern,
            "rest".to_string(),
            "Innkeeper",
            Some(serde_json::json!({ "cost": 10 })),
            None,
        )
        .await;
        drain(&mut store, &mut rx_store);

        let player = &store.state().player;
        assert_eq!(player.gold, 90);
        // 250 exceeds max_health, clamp applies.
        assert_eq!(player.health, 100);
    }

    #[tokio::test]
    async fn chat_failure_resolves_to_system_reply() {
        let (services, api, _rx_store, mut rx_ui) = harness();
        api.fail_dialog(true);

        send_chat(
            services,
            "merchant_1".to_string(),
            "hello".to_string(),
            DialogContext {
                character: "merchant".to_string(),
                player_stats: stonehaven_protocol::PlayerSummary {
                    level: 1,
                    gold: 100,
                    health: 100,
                    location: "shop".to_string(),
                },
                available_quest_actions: Vec::new(),
            },
        )
        .await;

        match rx_ui.try_recv() {
            Ok(UiMsg::ChatReply {
                session_id,
                message,
            }) => {
                assert_eq!(session_id, "merchant_1");
                assert_eq!(message.speaker, "System");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
