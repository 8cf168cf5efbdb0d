//! Entities held by the store and the element a picker enhances.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Position-derived id of an item, unique across the whole item log.
    ItemId
);
entity_id!(
    /// Position-derived id of a choice, unique across the whole choice log.
    ChoiceId
);
entity_id!(
    /// Position-derived id of a group.
    GroupId
);

/// A confirmed value, shown as a chip or the selected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    /// Choice this item was committed from, if any
    pub choice_id: Option<ChoiceId>,
    pub value: String,
    pub label: String,
    /// False once removed. Removed items stay in the log.
    pub active: bool,
    /// Marked for a bulk operation such as backspace removal
    pub selected: bool,
}

/// A candidate value offered in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub group_id: Option<GroupId>,
    pub value: String,
    pub label: String,
    /// An active item was committed from this choice
    pub selected: bool,
    pub disabled: bool,
    /// False while filtered out by a search
    pub active: bool,
    /// Relevance from the last search, higher is better
    pub score: Option<u32>,
}

impl Choice {
    /// Can still be committed as an item.
    pub fn is_selectable(&self) -> bool {
        !self.disabled && !self.selected
    }
}

/// A labelled cluster of choices (an `<optgroup>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: GroupId,
    /// Heading text
    pub value: String,
    pub active: bool,
    pub disabled: bool,
}

/// Kind of element being enhanced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// Free text input; items are typed values
    #[default]
    Text,
    /// `<select>`; exactly one item
    SelectOne,
    /// `<select multiple>`
    SelectMultiple,
}

impl ElementKind {
    pub fn is_text(self) -> bool {
        self == ElementKind::Text
    }

    pub fn is_select(self) -> bool {
        !self.is_text()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::SelectOne => "select-one",
            ElementKind::SelectMultiple => "select-multiple",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `<option>` of the enhanced element, or a choice passed in options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSpec {
    pub value: String,
    pub label: Option<String>,
    pub selected: bool,
    pub disabled: bool,
}

impl OptionSpec {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// An `<optgroup>` and its options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSpec {
    pub label: String,
    pub disabled: bool,
    pub options: Vec<OptionSpec>,
}

impl GroupSpec {
    pub fn new(label: impl Into<String>, options: Vec<OptionSpec>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            options,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A preset item: a bare value or a value with its own label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    Value(String),
    Entry {
        value: String,
        #[serde(default)]
        label: Option<String>,
    },
}

impl ItemSpec {
    pub fn value(&self) -> &str {
        match self {
            ItemSpec::Value(value) | ItemSpec::Entry { value, .. } => value,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            ItemSpec::Value(_) => None,
            ItemSpec::Entry { label, .. } => label.as_deref(),
        }
    }
}

impl From<&str> for ItemSpec {
    fn from(value: &str) -> Self {
        ItemSpec::Value(value.to_string())
    }
}

impl From<String> for ItemSpec {
    fn from(value: String) -> Self {
        ItemSpec::Value(value)
    }
}

impl From<(&str, &str)> for ItemSpec {
    fn from((value, label): (&str, &str)) -> Self {
        ItemSpec::Entry {
            value: value.to_string(),
            label: Some(label.to_string()),
        }
    }
}

/// The element a picker enhances.
///
/// The picker mirrors its items back into this value: a delimiter-joined
/// `value` for text inputs, the `options` list for selects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassedElement {
    pub kind: ElementKind,
    /// Current value of a text input
    pub value: String,
    pub placeholder: Option<String>,
    pub options: Vec<OptionSpec>,
    pub groups: Vec<GroupSpec>,
    pub disabled: bool,
}

impl PassedElement {
    pub fn text() -> Self {
        Self::default()
    }

    pub fn select_one(options: Vec<OptionSpec>) -> Self {
        Self {
            kind: ElementKind::SelectOne,
            options,
            ..Default::default()
        }
    }

    pub fn select_multiple(options: Vec<OptionSpec>) -> Self {
        Self {
            kind: ElementKind::SelectMultiple,
            options,
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_groups(mut self, groups: Vec<GroupSpec>) -> Self {
        self.groups = groups;
        self
    }
}
