use crate::model::{ChoiceId, GroupId, ItemId};
use crate::search::SearchResult;

/// A state change request. Actions are the only way the logs change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddItem {
        value: String,
        label: String,
        id: ItemId,
        choice_id: Option<ChoiceId>,
    },
    RemoveItem {
        id: ItemId,
        choice_id: Option<ChoiceId>,
    },
    SelectItem {
        id: ItemId,
        selected: bool,
    },
    AddChoice {
        value: String,
        label: String,
        id: ChoiceId,
        group_id: Option<GroupId>,
        disabled: bool,
    },
    AddGroup {
        value: String,
        id: GroupId,
        active: bool,
        disabled: bool,
    },
    /// Keep only the search results active, carrying their scores
    FilterChoices { results: Vec<SearchResult> },
    /// Reactivate every choice. With `clear_selection`, each choice's
    /// `selected` flag is re-derived from the active items.
    ActivateChoices { clear_selection: bool },
    ClearAll,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddItem { .. } => "ADD_ITEM",
            Action::RemoveItem { .. } => "REMOVE_ITEM",
            Action::SelectItem { .. } => "SELECT_ITEM",
            Action::AddChoice { .. } => "ADD_CHOICE",
            Action::AddGroup { .. } => "ADD_GROUP",
            Action::FilterChoices { .. } => "FILTER_CHOICES",
            Action::ActivateChoices { .. } => "ACTIVATE_CHOICES",
            Action::ClearAll => "CLEAR_ALL",
        }
    }
}
