//! The single-threaded loop that owns the store and the terminal.
//!
//! Three inflows are multiplexed: store events from the dispatcher channel,
//! view-local messages from spawned tasks, and keyboard input polled on a
//! frame tick. Store events are applied in dispatch order, which is the whole
//! of the concurrency story; spawned tasks never touch state directly.
use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use stonehaven_api::GameApi;
use stonehaven_frontend_core::{DialogSession, GameStore, StoreEvent, session::build_context};
use stonehaven_protocol::LocationId;

use super::{Command, Services, UiMsg, effects, handle_key};
use crate::config::CliConfig;
use crate::presentation::terminal::Tui;
use crate::presentation::ui::{self, RenderContext};
use crate::state::{AppState, ScreenView};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop<A: GameApi + 'static> {
    services: Services<A>,
    rx_store: mpsc::UnboundedReceiver<StoreEvent>,
    rx_ui: mpsc::UnboundedReceiver<UiMsg>,
    store: GameStore,
    app_state: AppState,
    config: CliConfig,
}

impl<A: GameApi + 'static> EventLoop<A> {
    pub fn new(
        services: Services<A>,
        rx_store: mpsc::UnboundedReceiver<StoreEvent>,
        rx_ui: mpsc::UnboundedReceiver<UiMsg>,
        config: CliConfig,
    ) -> Self {
        Self {
            services,
            rx_store,
            rx_ui,
            store: GameStore::new(),
            app_state: AppState::new(),
            config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        tokio::spawn(effects::initial_load(self.services.clone()));
        tokio::spawn(effects::enter_location(
            self.services.clone(),
            LocationId::MainPage,
        ));

        self.render(terminal)?;

        loop {
            tokio::select! {
                Some(event) = self.rx_store.recv() => {
                    self.store.dispatch(event);
                    self.render(terminal)?;
                }
                Some(msg) = self.rx_ui.recv() => {
                    self.apply_ui(msg);
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = handle_key(key, &mut self.app_state, self.store.state()) {
                    self.execute(command);
                }
                self.render(terminal)?;
                Ok(self.app_state.should_quit)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Execute a command: synchronous ones mutate local state, everything
    /// that talks to the server becomes a spawned task.
    fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.app_state.should_quit = true,
            Command::Navigate(location) => {
                self.store.dispatch(StoreEvent::SetLocation(location));
                self.app_state.enter(location);
                tokio::spawn(effects::enter_location(self.services.clone(), location));
            }
            Command::OpenChat { character, name } => {
                let session = DialogSession::open(character, name);
                let session_id = session.session_id.clone();
                self.app_state.open_chat(session);
                tokio::spawn(effects::open_chat(
                    self.services.clone(),
                    session_id,
                    self.store.state().current_location,
                ));
            }
            Command::SendChat(text) => {
                if let Some(chat) = &self.app_state.chat {
                    let context = build_context(
                        &chat.session.character,
                        self.store.state(),
                        &chat.quest_actions,
                    );
                    tokio::spawn(effects::send_chat(
                        self.services.clone(),
                        chat.session.session_id.clone(),
                        text,
                        context,
                    ));
                }
            }
            Command::LocationAction {
                location,
                action,
                speaker,
                extra,
                quest_follow,
            } => {
                tokio::spawn(effects::location_action(
                    self.services.clone(),
                    location,
                    action,
                    speaker,
                    extra,
                    quest_follow,
                ));
            }
            Command::QuestHint(hint) => {
                tokio::spawn(effects::quest_hint(
                    self.services.clone(),
                    self.store.state().current_location,
                    hint,
                ));
            }
            Command::AcceptQuest(quest_id) => {
                tokio::spawn(effects::accept_quest(self.services.clone(), quest_id));
            }
            Command::AbandonQuest(quest_id) => {
                tokio::spawn(effects::abandon_quest(self.services.clone(), quest_id));
            }
            Command::RefreshQuests => {
                tokio::spawn(effects::refresh_quests(self.services.clone()));
            }
            Command::GenerateQuest => {
                tokio::spawn(effects::generate_quest(self.services.clone()));
            }
            Command::Buy { item_id, name } => {
                tokio::spawn(effects::buy(self.services.clone(), item_id, name));
            }
            Command::Sell { item_id, name } => {
                tokio::spawn(effects::sell(self.services.clone(), item_id, name));
            }
            Command::UseItem(item_index) => {
                tokio::spawn(effects::use_item(self.services.clone(), item_index));
            }
            Command::Unequip(slot) => {
                tokio::spawn(effects::unequip(self.services.clone(), slot));
            }
        }
    }

    /// Install a task result into the view it belongs to. Results for a
    /// screen or session the user has already left are dropped.
    fn apply_ui(&mut self, msg: UiMsg) {
        match msg {
            UiMsg::ShopItems(items) => {
                if let ScreenView::Shop(view) = &mut self.app_state.view {
                    view.items = items;
                    view.selected = view.selected.min(view.items.len().saturating_sub(1));
                }
            }
            UiMsg::Recipes(recipes) => {
                if let ScreenView::Smithy(view) = &mut self.app_state.view {
                    view.recipes = Some(recipes);
                }
            }
            UiMsg::AvailableQuests(quests) => {
                if let ScreenView::Quests(view) = &mut self.app_state.view {
                    view.available = quests;
                    view.selected = view.selected.min(view.available.len().saturating_sub(1));
                }
            }
            UiMsg::QuestGenerated(quest) => {
                if let ScreenView::Quests(view) = &mut self.app_state.view {
                    view.available.push(quest);
                }
            }
            UiMsg::QuestActions { location, actions } => {
                if self.store.state().current_location == location {
                    self.app_state.view.set_quest_actions(actions);
                }
            }
            UiMsg::ChatOpened {
                session_id,
                history,
                quest_actions,
            } => {
                if let Some(chat) = &mut self.app_state.chat {
                    if chat.session.session_id == session_id {
                        chat.session.install_history(history);
                        chat.quest_actions = quest_actions;
                    }
                }
            }
            UiMsg::ChatReply {
                session_id,
                message,
            } => {
                if let Some(chat) = &mut self.app_state.chat {
                    if chat.session.session_id == session_id {
                        chat.session.push(message);
                        chat.session.waiting = false;
                    }
                }
            }
            UiMsg::Modal { title, body } => self.app_state.open_modal(title, body),
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            store: self.store.state(),
            app_state: &self.app_state,
            notice_limit: self.config.notice_log_limit,
        };
        ui::render(terminal, &ctx)
    }
}
