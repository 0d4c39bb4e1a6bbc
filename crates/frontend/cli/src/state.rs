//! View-local state for the terminal screens.
//!
//! Everything here is discarded on navigation: each location gets a fresh
//! view struct, so selections and fetched lists never leak between screens.
//! Durable state (player, quests, notices, loading flag) lives in the store.
use stonehaven_frontend_core::DialogSession;
use stonehaven_protocol::{CraftingRecipe, InventoryItem, LocationId, Quest, QuestAction};

/// One-shot message box shown on top of the current screen. Any key closes
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct Modal {
    pub title: String,
    pub body: String,
}

impl Modal {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Chat overlay wrapping an open dialog session plus the input line.
#[derive(Clone, Debug)]
pub struct ChatOverlay {
    pub session: DialogSession,
    pub input: String,
    /// Quest hints captured when the overlay opened; sent along as context
    /// with every utterance.
    pub quest_actions: Vec<QuestAction>,
}

impl ChatOverlay {
    pub fn new(session: DialogSession) -> Self {
        Self {
            session,
            input: String::new(),
            quest_actions: Vec::new(),
        }
    }
}

/// Browse mode inside the shop screen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ShopMode {
    #[default]
    Menu,
    Buy,
    Sell,
}

/// Service picker state inside the smithy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SmithyMode {
    #[default]
    Menu,
    /// Picking an equipment item to repair.
    Repair,
    /// Picking an equipment item to upgrade.
    Upgrade,
    /// Picking a recipe to craft.
    Craft,
}

/// Panel focus inside the quests screen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum QuestTab {
    #[default]
    Available,
    Active,
    Completed,
}

impl QuestTab {
    pub fn next(self) -> Self {
        match self {
            QuestTab::Available => QuestTab::Active,
            QuestTab::Active => QuestTab::Completed,
            QuestTab::Completed => QuestTab::Available,
        }
    }
}

/// Per-location view state, rebuilt from scratch on every navigation.
#[derive(Clone, Debug)]
pub enum ScreenView {
    Market(MarketView),
    Tavern(ActionListView),
    Shop(ShopView),
    Smithy(SmithyView),
    Forest(ActionListView),
    Mine(ActionListView),
    Quests(QuestsView),
    Inventory(InventoryView),
}

impl ScreenView {
    pub fn for_location(location: LocationId) -> Self {
        match location {
            LocationId::MainPage => ScreenView::Market(MarketView::default()),
            LocationId::Tavern => ScreenView::Tavern(ActionListView::default()),
            LocationId::Shop => ScreenView::Shop(ShopView::default()),
            LocationId::Smithy => ScreenView::Smithy(SmithyView::default()),
            LocationId::Forest => ScreenView::Forest(ActionListView::default()),
            LocationId::Mine => ScreenView::Mine(ActionListView::default()),
            LocationId::Quest => ScreenView::Quests(QuestsView::default()),
            LocationId::Inventory => ScreenView::Inventory(InventoryView::default()),
        }
    }

    /// Install location-scoped quest hints fetched after entry.
    pub fn set_quest_actions(&mut self, actions: Vec<QuestAction>) {
        match self {
            ScreenView::Market(view) => view.quest_actions = actions,
            ScreenView::Tavern(view) | ScreenView::Forest(view) | ScreenView::Mine(view) => {
                view.quest_actions = actions;
            }
            _ => {}
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MarketView {
    pub quest_actions: Vec<QuestAction>,
    pub selected: usize,
}

/// Shared view for screens whose body is a single list of location actions,
/// optionally extended with quest hints.
#[derive(Clone, Debug, Default)]
pub struct ActionListView {
    pub quest_actions: Vec<QuestAction>,
    pub selected: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ShopView {
    pub mode: ShopMode,
    pub items: Vec<InventoryItem>,
    pub selected: usize,
}

#[derive(Clone, Debug, Default)]
pub struct SmithyView {
    pub mode: SmithyMode,
    /// Cached after the first successful fetch; never re-requested while the
    /// screen stays open.
    pub recipes: Option<Vec<CraftingRecipe>>,
    pub selected: usize,
}

#[derive(Clone, Debug, Default)]
pub struct QuestsView {
    pub tab: QuestTab,
    pub available: Vec<Quest>,
    pub selected: usize,
}

#[derive(Clone, Debug, Default)]
pub struct InventoryView {
    pub selected: usize,
}

/// Mutable UI state owned by the event loop, next to (but distinct from) the
/// store snapshot.
#[derive(Clone, Debug)]
pub struct AppState {
    pub view: ScreenView,
    pub modal: Option<Modal>,
    pub chat: Option<ChatOverlay>,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: ScreenView::for_location(LocationId::MainPage),
            modal: None,
            chat: None,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the view for a new location, dropping selection and any open
    /// overlay.
    pub fn enter(&mut self, location: LocationId) {
        self.view = ScreenView::for_location(location);
        self.modal = None;
        self.chat = None;
    }

    pub fn open_modal(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.modal = Some(Modal::new(title, body));
    }

    pub fn open_chat(&mut self, session: DialogSession) {
        self.chat = Some(ChatOverlay::new(session));
    }
}

/// Clamp-free cursor movement over a list of `len` rows.
pub fn move_selection(selected: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    match delta {
        d if d < 0 => selected.saturating_sub(d.unsigned_abs()),
        d => (selected + d as usize).min(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_discards_view_local_state() {
        let mut app = AppState::new();
        if let ScreenView::Market(view) = &mut app.view {
            view.selected = 3;
        }
        app.open_modal("Note", "hello");

        app.enter(LocationId::Shop);

        assert!(app.modal.is_none());
        match &app.view {
            ScreenView::Shop(view) => {
                assert_eq!(view.mode, ShopMode::Menu);
                assert_eq!(view.selected, 0);
                assert!(view.items.is_empty());
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn selection_is_bounded() {
        assert_eq!(move_selection(0, 4, -1), 0);
        assert_eq!(move_selection(3, 4, 1), 3);
        assert_eq!(move_selection(1, 4, 1), 2);
        assert_eq!(move_selection(0, 0, 1), 0);
    }

    #[test]
    fn quest_tab_cycles() {
        let mut tab = QuestTab::Available;
        tab = tab.next();
        assert_eq!(tab, QuestTab::Active);
        assert_eq!(tab.next().next(), QuestTab::Available);
    }
}
