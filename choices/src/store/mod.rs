//! Unidirectional store: actions go in, immutable snapshots come out.

pub mod action;
pub mod reducer;
pub mod state;

use std::fmt;

pub use action::Action;
pub use reducer::reduce;
pub use state::State;

use crate::model::{Choice, ChoiceId, Group, GroupId, Item, ItemId};

/// Called after every dispatch with the previous and the new snapshot.
///
/// The listener only sees shared references, so it cannot dispatch back
/// into the store.
pub type Listener = Box<dyn FnMut(&State, &State)>;

/// Holds the current [`State`] and applies [`Action`]s to it.
pub struct Store {
    state: State,
    dirty: bool,
    listener: Option<Listener>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: State::default(),
            dirty: false,
            listener: None,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Run the reducer, replace the snapshot and notify the listener.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {}", action.name());
        let next = reduce(&self.state, &action);
        let prev = std::mem::replace(&mut self.state, next);
        self.dirty = true;
        if let Some(listener) = self.listener.as_mut() {
            listener(&prev, &self.state);
        }
    }

    /// Register the listener. A store has at most one; a second call
    /// replaces the first.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&State, &State) + 'static,
    {
        if self.listener.is_some() {
            log::warn!("store listener replaced");
        }
        self.listener = Some(Box::new(listener));
    }

    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }

    /// Whether anything was dispatched since the last call. Clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    pub fn choices(&self) -> &[Choice] {
        &self.state.choices
    }

    pub fn groups(&self) -> &[Group] {
        &self.state.groups
    }

    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.state.items.iter().filter(|item| item.active)
    }

    pub fn active_choices(&self) -> impl Iterator<Item = &Choice> {
        self.state.choices.iter().filter(|choice| choice.active)
    }

    pub fn active_groups(&self) -> impl Iterator<Item = &Group> {
        self.state.groups.iter().filter(|group| group.active)
    }

    pub fn selected_items(&self) -> impl Iterator<Item = &Item> {
        self.active_items().filter(|item| item.selected)
    }

    /// Choices that can still be committed; the search haystack.
    pub fn selectable_choices(&self) -> Vec<Choice> {
        self.state
            .choices
            .iter()
            .filter(|choice| choice.is_selectable())
            .cloned()
            .collect()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.state.items.iter().find(|item| item.id == id)
    }

    pub fn choice_by_id(&self, id: ChoiceId) -> Option<&Choice> {
        self.state.choices.iter().find(|choice| choice.id == id)
    }

    pub fn group_by_id(&self, id: GroupId) -> Option<&Group> {
        self.state.groups.iter().find(|group| group.id == id)
    }

    /// Values of the active items, in insertion order.
    pub fn item_values(&self) -> Vec<String> {
        self.active_items().map(|item| item.value.clone()).collect()
    }

    pub fn active_item_count(&self) -> usize {
        self.active_items().count()
    }

    // Ids are one past the log length, so they stay unique and increasing
    // even though removed entries remain in the log.

    pub fn next_item_id(&self) -> ItemId {
        ItemId(self.state.items.len() as u32 + 1)
    }

    pub fn next_choice_id(&self) -> ChoiceId {
        ChoiceId(self.state.choices.len() as u32 + 1)
    }

    pub fn next_group_id(&self) -> GroupId {
        GroupId(self.state.groups.len() as u32 + 1)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("dirty", &self.dirty)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
