use serde::{Deserialize, Serialize};

/// CSS class names written into rendered markup. Every field can be
/// overridden to fit an existing stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    pub container_outer: String,
    pub container_inner: String,
    pub input: String,
    pub input_cloned: String,
    pub list: String,
    pub list_items: String,
    pub list_single: String,
    pub list_dropdown: String,
    pub item: String,
    pub item_selectable: String,
    pub item_disabled: String,
    pub item_choice: String,
    pub group: String,
    pub group_heading: String,
    pub button: String,
    pub active_state: String,
    pub focus_state: String,
    pub open_state: String,
    pub disabled_state: String,
    pub highlighted_state: String,
    pub hidden_state: String,
    pub flipped_state: String,
    pub loading_state: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container_outer: "choices".into(),
            container_inner: "choices__inner".into(),
            input: "choices__input".into(),
            input_cloned: "choices__input--cloned".into(),
            list: "choices__list".into(),
            list_items: "choices__list--multiple".into(),
            list_single: "choices__list--single".into(),
            list_dropdown: "choices__list--dropdown".into(),
            item: "choices__item".into(),
            item_selectable: "choices__item--selectable".into(),
            item_disabled: "choices__item--disabled".into(),
            item_choice: "choices__item--choice".into(),
            group: "choices__group".into(),
            group_heading: "choices__heading".into(),
            button: "choices__button".into(),
            active_state: "is-active".into(),
            focus_state: "is-focused".into(),
            open_state: "is-open".into(),
            disabled_state: "is-disabled".into(),
            highlighted_state: "is-highlighted".into(),
            hidden_state: "is-hidden".into(),
            flipped_state: "is-flipped".into(),
            loading_state: "is-loading".into(),
        }
    }
}
