//! Event loop plumbing: commands produced by input handling, messages
//! produced by background tasks, and the service bundle both sides share.
mod effects;
mod input;
mod r#loop;

pub use input::{REPAIR_COST, UPGRADE_COST, equipment, handle_key};
pub use r#loop::EventLoop;

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use stonehaven_api::GameApi;
use stonehaven_frontend_core::{Dispatcher, QuestService};
use stonehaven_protocol::{
    CraftingRecipe, DialogMessage, InventoryItem, LocationId, Quest, QuestAction,
};

/// What a key press asks the application to do. Produced synchronously by
/// [`handle_key`], executed by the event loop (which spawns a task for
/// anything that talks to the server).
#[derive(Clone, Debug)]
pub enum Command {
    Quit,
    Navigate(LocationId),
    OpenChat {
        character: &'static str,
        name: &'static str,
    },
    SendChat(String),
    /// Plain location action via `POST /api/action`. When `quest_follow`
    /// carries a gesture name, the matching quest action runs afterwards,
    /// sequentially and leniently.
    LocationAction {
        location: LocationId,
        action: String,
        speaker: &'static str,
        extra: Option<Value>,
        quest_follow: Option<String>,
    },
    /// Direct activation of a location-scoped quest hint.
    QuestHint(QuestAction),
    AcceptQuest(String),
    AbandonQuest(String),
    RefreshQuests,
    GenerateQuest,
    Buy { item_id: String, name: String },
    Sell { item_id: String, name: String },
    UseItem(usize),
    Unequip(&'static str),
}

/// Results flowing back from spawned tasks into the event loop. Store-shaped
/// data travels through the dispatcher instead; these carry only view-local
/// payloads.
#[derive(Clone, Debug)]
pub enum UiMsg {
    ShopItems(Vec<InventoryItem>),
    Recipes(Vec<CraftingRecipe>),
    AvailableQuests(Vec<Quest>),
    QuestGenerated(Quest),
    QuestActions {
        location: LocationId,
        actions: Vec<QuestAction>,
    },
    ChatOpened {
        session_id: String,
        history: Vec<DialogMessage>,
        quest_actions: Vec<QuestAction>,
    },
    ChatReply {
        session_id: String,
        message: DialogMessage,
    },
    Modal {
        title: String,
        body: String,
    },
}

/// Everything a spawned task needs: the API client, the quest service, the
/// store dispatcher, and the channel back to the event loop.
pub struct Services<A: GameApi> {
    pub api: Arc<A>,
    pub quests: QuestService<A>,
    pub dispatcher: Dispatcher,
    pub tx_ui: mpsc::UnboundedSender<UiMsg>,
}

impl<A: GameApi> Clone for Services<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            quests: self.quests.clone(),
            dispatcher: self.dispatcher.clone(),
            tx_ui: self.tx_ui.clone(),
        }
    }
}

impl<A: GameApi> Services<A> {
    pub fn new(api: Arc<A>, dispatcher: Dispatcher, tx_ui: mpsc::UnboundedSender<UiMsg>) -> Self {
        Self {
            quests: QuestService::new(Arc::clone(&api), dispatcher.clone()),
            api,
            dispatcher,
            tx_ui,
        }
    }

    pub fn send(&self, msg: UiMsg) {
        // Only fails during shutdown, after the loop dropped its receiver.
        if self.tx_ui.send(msg).is_err() {
            tracing::debug!("ui channel closed; message dropped");
        }
    }

    /// Append a line to the store's rolling notice log.
    pub fn note(&self, message: DialogMessage) {
        self.dispatcher
            .dispatch(stonehaven_frontend_core::StoreEvent::AddDialogMessage(
                message,
            ));
    }

    pub fn modal(&self, title: impl Into<String>, body: impl Into<String>) {
        self.send(UiMsg::Modal {
            title: title.into(),
            body: body.into(),
        });
    }
}
