//! Pure reducers: `(state, action) -> state`.
//!
//! Reducers never mutate the previous snapshot. A log that an action does
//! not touch is returned as the same `Arc`, which keeps the view's
//! pointer-equality short-circuit accurate.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{Choice, Group, Item};

use super::action::Action;
use super::state::State;

/// Root reducer.
pub fn reduce(state: &State, action: &Action) -> State {
    if let Action::ClearAll = action {
        return State::default();
    }

    State {
        items: items(&state.items, action),
        choices: choices(&state.choices, &state.items, action),
        groups: groups(&state.groups, action),
    }
}

/// Rebuild `log` with `update` applied to every entry, or hand back the
/// same `Arc` when `update` changes nothing.
fn update_each<T, F>(log: &Arc<Vec<T>>, mut update: F) -> Arc<Vec<T>>
where
    T: Clone + PartialEq,
    F: FnMut(&T) -> T,
{
    let next: Vec<T> = log.iter().map(&mut update).collect();
    if next.iter().eq(log.iter()) {
        Arc::clone(log)
    } else {
        Arc::new(next)
    }
}

fn append<T: Clone>(log: &Arc<Vec<T>>, entry: T) -> Arc<Vec<T>> {
    let mut next = Vec::with_capacity(log.len() + 1);
    next.extend(log.iter().cloned());
    next.push(entry);
    Arc::new(next)
}

pub fn items(items: &Arc<Vec<Item>>, action: &Action) -> Arc<Vec<Item>> {
    match action {
        Action::AddItem {
            value,
            label,
            id,
            choice_id,
        } => {
            let deselected = update_each(items, |item| Item {
                selected: false,
                ..item.clone()
            });
            append(
                &deselected,
                Item {
                    id: *id,
                    choice_id: *choice_id,
                    value: value.clone(),
                    label: label.clone(),
                    active: true,
                    selected: false,
                },
            )
        }
        Action::RemoveItem { id, .. } => update_each(items, |item| {
            if item.id == *id {
                Item {
                    active: false,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        }),
        Action::SelectItem { id, selected } => update_each(items, |item| {
            if item.id == *id && item.active {
                Item {
                    selected: *selected,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        }),
        _ => Arc::clone(items),
    }
}

/// `items` is the item log before the action; only `ActivateChoices` reads
/// it, and that action leaves items untouched.
pub fn choices(
    choices: &Arc<Vec<Choice>>,
    items: &Arc<Vec<Item>>,
    action: &Action,
) -> Arc<Vec<Choice>> {
    match action {
        Action::AddChoice {
            value,
            label,
            id,
            group_id,
            disabled,
        } => append(
            choices,
            Choice {
                id: *id,
                group_id: *group_id,
                value: value.clone(),
                label: label.clone(),
                selected: false,
                disabled: *disabled,
                active: true,
                score: None,
            },
        ),
        Action::AddItem {
            choice_id: Some(choice_id),
            ..
        } => set_selected(choices, |choice| choice.id == *choice_id, true),
        Action::RemoveItem {
            choice_id: Some(choice_id),
            ..
        } => set_selected(choices, |choice| choice.id == *choice_id, false),
        Action::FilterChoices { results } => {
            let scores: HashMap<_, _> = results.iter().map(|r| (r.choice_id, r.score)).collect();
            update_each(choices, |choice| {
                let score = scores.get(&choice.id).copied();
                Choice {
                    active: score.is_some(),
                    score,
                    ..choice.clone()
                }
            })
        }
        Action::ActivateChoices { clear_selection } => update_each(choices, |choice| {
            let selected = if *clear_selection {
                items
                    .iter()
                    .any(|item| item.active && item.choice_id == Some(choice.id))
            } else {
                choice.selected
            };
            Choice {
                active: true,
                score: None,
                selected,
                ..choice.clone()
            }
        }),
        _ => Arc::clone(choices),
    }
}

fn set_selected<F>(choices: &Arc<Vec<Choice>>, matches: F, selected: bool) -> Arc<Vec<Choice>>
where
    F: Fn(&Choice) -> bool,
{
    update_each(choices, |choice| {
        if matches(choice) {
            Choice {
                selected,
                ..choice.clone()
            }
        } else {
            choice.clone()
        }
    })
}

pub fn groups(groups: &Arc<Vec<Group>>, action: &Action) -> Arc<Vec<Group>> {
    match action {
        Action::AddGroup {
            value,
            id,
            active,
            disabled,
        } => append(
            groups,
            Group {
                id: *id,
                value: value.clone(),
                active: *active,
                disabled: *disabled,
            },
        ),
        _ => Arc::clone(groups),
    }
}
