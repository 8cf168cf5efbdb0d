//! What the picker hands its host on every render.
//!
//! Sections that did not change since the previous frame are `None`; a
//! host keeps the last value it saw (see [`RetainedView`]).

use crate::machine::DropdownState;
use crate::model::{ChoiceId, GroupId, ItemId, OptionSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Static wrapper markup; only present on the first frame after `init`
    pub chrome: Option<Chrome>,
    pub container: ContainerView,
    pub input: InputView,
    pub items: Option<Vec<ItemEntry>>,
    pub dropdown: Option<Vec<DropdownEntry>>,
    /// New value of the enhanced element
    pub passed_value: Option<PassedValue>,
    pub highlighted: Option<ChoiceId>,
    /// The dropdown content was rebuilt; scroll it back to the top
    pub scroll_reset: bool,
}

/// Wrapper markup produced by the chrome templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub container_outer: String,
    pub container_inner: String,
    pub item_list: String,
    pub choice_list: String,
    pub input: String,
    pub dropdown: String,
}

/// State classes of the outer container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerView {
    pub class: String,
    pub dropdown: DropdownState,
    pub focused: bool,
    pub disabled: bool,
    pub loading: bool,
}

impl ContainerView {
    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn is_flipped(&self) -> bool {
        self.dropdown == DropdownState::Flipped
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub cursor: usize,
    pub placeholder: Option<String>,
    /// Columns (or characters) the input needs to show its content
    pub width: usize,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub id: ItemId,
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEntry {
    Group {
        id: GroupId,
        label: String,
        markup: String,
    },
    Choice {
        id: ChoiceId,
        label: String,
        selectable: bool,
        selected: bool,
        markup: String,
    },
    Notice {
        text: String,
        markup: String,
    },
}

impl DropdownEntry {
    pub fn markup(&self) -> &str {
        match self {
            DropdownEntry::Group { markup, .. }
            | DropdownEntry::Choice { markup, .. }
            | DropdownEntry::Notice { markup, .. } => markup,
        }
    }

    pub fn choice_id(&self) -> Option<ChoiceId> {
        match self {
            DropdownEntry::Choice { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// Value mirrored back into the enhanced element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassedValue {
    /// Delimiter-joined item values of a text input
    Text(String),
    /// Replacement `<option>` list of a select, with its markup
    Options { options: Vec<OptionSpec>, markup: String },
}

/// Everything a host has been told so far, folded from frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetainedView {
    pub chrome: Option<Chrome>,
    pub container: ContainerView,
    pub input: InputView,
    pub items: Vec<ItemEntry>,
    pub dropdown: Vec<DropdownEntry>,
    pub passed_value: Option<PassedValue>,
    pub highlighted: Option<ChoiceId>,
}

impl RetainedView {
    pub fn apply(&mut self, frame: &Frame) {
        if let Some(chrome) = &frame.chrome {
            self.chrome = Some(chrome.clone());
        }
        self.container = frame.container.clone();
        self.input = frame.input.clone();
        if let Some(items) = &frame.items {
            self.items = items.clone();
        }
        if let Some(dropdown) = &frame.dropdown {
            self.dropdown = dropdown.clone();
        }
        if let Some(value) = &frame.passed_value {
            self.passed_value = Some(value.clone());
        }
        self.highlighted = frame.highlighted;
    }

    pub fn item_labels(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.label.as_str()).collect()
    }

    pub fn choice_labels(&self) -> Vec<&str> {
        self.dropdown
            .iter()
            .filter_map(|entry| match entry {
                DropdownEntry::Choice { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn notice(&self) -> Option<&str> {
        self.dropdown.iter().find_map(|entry| match entry {
            DropdownEntry::Notice { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
