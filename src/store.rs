//! Mode-namespaced selection store.
//!
//! Holds the active mode, one selection per mode and the auxiliary-marker
//! flag, and notifies subscribers synchronously. Construct one per session
//! (or per test); nothing here is global.

use indexmap::IndexSet;

use crate::model::{Catalog, Mode, PerMode};
use crate::ops::filter::Selection;

/// Snapshot of the store's state handed to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    pub mode: Mode,
    pub selection: PerMode<Selection>,
    pub show_auxiliary_markers: bool,
}

impl Default for StoreState {
    fn default() -> Self {
        StoreState {
            mode: Mode::Bus,
            selection: PerMode::default(),
            show_auxiliary_markers: true,
        }
    }
}

/// What changed in a single transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Mode(Mode),
    Selection(Mode),
    AuxiliaryMarkers(bool),
}

/// Which transitions a subscriber wants to hear about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    All,
    /// Selection changes in one namespace only
    Namespace(Mode),
    /// Anything that alters what the map and KPI panels show: mode,
    /// auxiliary markers, and the active namespace's selection
    ActiveView,
}

impl Interest {
    fn wants(self, change: Change, active: Mode) -> bool {
        match (self, change) {
            (Interest::All, _) => true,
            (Interest::Namespace(m), Change::Selection(changed)) => m == changed,
            (Interest::Namespace(_), _) => false,
            (Interest::ActiveView, Change::Selection(changed)) => changed == active,
            (Interest::ActiveView, _) => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&StoreState, Change)>;

struct Subscriber {
    id: SubscriptionId,
    interest: Interest,
    callback: Callback,
}

pub struct SelectionStore {
    state: StoreState,
    catalogs: PerMode<Catalog>,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl SelectionStore {
    pub fn new(catalogs: PerMode<Catalog>) -> Self {
        SelectionStore {
            state: StoreState::default(),
            catalogs,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn selection(&self, mode: Mode) -> &Selection {
        self.state.selection.get(mode)
    }

    pub fn show_auxiliary_markers(&self) -> bool {
        self.state.show_auxiliary_markers
    }

    pub fn catalog(&self, mode: Mode) -> &Catalog {
        self.catalogs.get(mode)
    }

    /// Switch the active mode. Neither namespace's selection is touched.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.state.mode == mode {
            return;
        }
        self.state.mode = mode;
        tracing::debug!(%mode, "mode changed");
        self.notify(Change::Mode(mode));
    }

    /// Replace the selection of namespace `mode`.
    pub fn set_selection<I, S>(&mut self, mode: Mode, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: Selection = ids.into_iter().map(Into::into).collect();
        let current = self.state.selection.get_mut(mode);
        // order matters here: chip order is part of the state
        if current.iter().eq(next.iter()) {
            return;
        }
        *current = next;
        tracing::debug!(%mode, count = current.len(), "selection changed");
        self.notify(Change::Selection(mode));
    }

    pub fn set_show_auxiliary_markers(&mut self, show: bool) {
        if self.state.show_auxiliary_markers == show {
            return;
        }
        self.state.show_auxiliary_markers = show;
        tracing::debug!(show, "auxiliary markers toggled");
        self.notify(Change::AuxiliaryMarkers(show));
    }

    /// Ids the map and KPI panels should draw for `mode`: the selection, or
    /// the whole catalog when nothing is selected.
    pub fn visible_entity_ids(&self, mode: Mode) -> IndexSet<String> {
        let selection = self.state.selection.get(mode);
        if selection.is_empty() {
            self.catalogs
                .get(mode)
                .iter()
                .map(|e| e.id.clone())
                .collect()
        } else {
            selection.clone()
        }
    }

    pub fn subscribe(
        &mut self,
        interest: Interest,
        callback: impl FnMut(&StoreState, Change) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            interest,
            callback: Box::new(callback),
        });
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, change: Change) {
        let active = self.state.mode;
        for sub in &mut self.subscribers {
            if sub.interest.wants(change, active) {
                (sub.callback)(&self.state, change);
            }
        }
    }
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
