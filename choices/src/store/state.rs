use std::sync::Arc;

use crate::model::{Choice, Group, Item};

/// Snapshot of the picker's data.
///
/// Each log is an append-only arena behind an `Arc`. Reducers only allocate
/// a new `Arc` for a log they change, so comparing pointers between two
/// snapshots tells the view which sections need rebuilding.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub items: Arc<Vec<Item>>,
    pub choices: Arc<Vec<Choice>>,
    pub groups: Arc<Vec<Group>>,
}

impl State {
    pub fn same_items(&self, other: &State) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    pub fn same_choices(&self, other: &State) -> bool {
        Arc::ptr_eq(&self.choices, &other.choices)
    }

    pub fn same_groups(&self, other: &State) -> bool {
        Arc::ptr_eq(&self.groups, &other.groups)
    }

    /// Every log is shared with `other`; nothing changed.
    pub fn same_as(&self, other: &State) -> bool {
        self.same_items(other) && self.same_choices(other) && self.same_groups(other)
    }
}
