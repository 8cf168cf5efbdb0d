//! Turning store snapshots into frames.
//!
//! [`ViewSync`] remembers the snapshot it last rendered. A section is only
//! rebuilt when its log is no longer the same `Arc`, so a dispatch that
//! only touched items never rebuilds the dropdown.

pub mod frame;
pub mod templates;

pub use frame::{
    Chrome, ContainerView, DropdownEntry, Frame, InputView, ItemEntry, PassedValue, RetainedView,
};
pub use templates::{DefaultTemplates, TemplateContext, Templates};

use crate::model::{Choice, ChoiceId, ElementKind, Group, OptionSpec};
use crate::options::Options;
use crate::store::State;

/// Inputs of a sync besides the snapshot.
pub struct RenderContext<'a> {
    pub options: &'a Options,
    pub templates: &'a dyn Templates,
    pub kind: ElementKind,
    pub searching: bool,
    pub notice: Option<&'a str>,
}

impl RenderContext<'_> {
    pub fn template_context(&self) -> TemplateContext<'_> {
        TemplateContext {
            class_names: &self.options.class_names,
            kind: self.kind,
            remove_item_button: self.options.remove_item_button,
            item_select_text: &self.options.item_select_text,
        }
    }
}

/// Sections rebuilt by one sync; `None` means unchanged.
#[derive(Debug, Default)]
pub struct Synced {
    pub items: Option<Vec<ItemEntry>>,
    pub dropdown: Option<Vec<DropdownEntry>>,
    pub passed_value: Option<PassedValue>,
    pub scroll_reset: bool,
}

#[derive(Debug, Default)]
pub struct ViewSync {
    rendered: Option<State>,
    rendered_notice: Option<String>,
    rendered_searching: bool,
    /// Selectable choices in rendered order; the keyboard highlight indexes
    /// into this
    selectable: Vec<ChoiceId>,
}

impl ViewSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selectable(&self) -> &[ChoiceId] {
        &self.selectable
    }

    /// Forget what was rendered so the next sync rebuilds everything.
    pub fn invalidate(&mut self) {
        self.rendered = None;
    }

    pub fn sync(&mut self, state: &State, cx: &RenderContext<'_>) -> Synced {
        let mut synced = Synced::default();
        let first = self.rendered.is_none();

        let dropdown_changed = match &self.rendered {
            None => true,
            Some(prev) => {
                !prev.same_choices(state)
                    || !prev.same_groups(state)
                    || self.rendered_notice.as_deref() != cx.notice
                    || self.rendered_searching != cx.searching
            }
        };
        let items_changed = self.rendered.as_ref().is_none_or(|prev| !prev.same_items(state));

        if dropdown_changed {
            log::trace!("rebuilding dropdown");
            let (entries, selectable) = build_dropdown(state, cx);
            self.selectable = selectable;
            synced.dropdown = Some(entries);
            synced.scroll_reset = !first;
        }

        if items_changed {
            log::trace!("rebuilding item list");
            let tcx = cx.template_context();
            let items = state
                .items
                .iter()
                .filter(|item| item.active)
                .map(|item| ItemEntry {
                    id: item.id,
                    value: item.value.clone(),
                    label: item.label.clone(),
                    selected: item.selected,
                    markup: cx.templates.item(&tcx, item),
                })
                .collect();
            synced.items = Some(items);
            synced.passed_value = Some(passed_value(state, cx));
        }

        self.rendered = Some(state.clone());
        self.rendered_notice = cx.notice.map(str::to_string);
        self.rendered_searching = cx.searching;
        synced
    }
}

fn notice_entry(cx: &RenderContext<'_>, text: &str) -> DropdownEntry {
    DropdownEntry::Notice {
        text: text.to_string(),
        markup: cx.templates.notice(&cx.template_context(), text),
    }
}

fn build_dropdown(state: &State, cx: &RenderContext<'_>) -> (Vec<DropdownEntry>, Vec<ChoiceId>) {
    if let Some(notice) = cx.notice {
        return (vec![notice_entry(cx, notice)], Vec::new());
    }
    if cx.kind.is_text() {
        return (Vec::new(), Vec::new());
    }

    let tcx = cx.template_context();
    let hide_selected = cx.kind == ElementKind::SelectMultiple;
    let visible = |choice: &&Choice| choice.active && !(hide_selected && choice.selected);

    let mut entries = Vec::new();
    let mut selectable = Vec::new();
    let mut push_choice = |entries: &mut Vec<DropdownEntry>, choice: &Choice| {
        if !choice.disabled {
            selectable.push(choice.id);
        }
        entries.push(DropdownEntry::Choice {
            id: choice.id,
            label: choice.label.clone(),
            selectable: !choice.disabled,
            selected: choice.selected,
            markup: cx.templates.choice(&tcx, choice),
        });
    };

    let mut groups: Vec<&Group> = state.groups.iter().filter(|group| group.active).collect();
    if !groups.is_empty() && !cx.searching {
        if cx.options.should_sort {
            groups.sort_by_key(|group| group.value.to_lowercase());
        }
        for group in groups {
            let mut members: Vec<&Choice> = state
                .choices
                .iter()
                .filter(visible)
                .filter(|choice| choice.group_id == Some(group.id))
                .collect();
            if members.is_empty() {
                continue;
            }
            sort_choices(&mut members, cx);
            entries.push(DropdownEntry::Group {
                id: group.id,
                label: group.value.clone(),
                markup: cx.templates.choice_group(&tcx, group),
            });
            for choice in members {
                push_choice(&mut entries, choice);
            }
        }

        // Choices added outside any group follow the groups
        let mut ungrouped: Vec<&Choice> = state
            .choices
            .iter()
            .filter(visible)
            .filter(|choice| choice.group_id.is_none())
            .collect();
        sort_choices(&mut ungrouped, cx);
        for choice in ungrouped {
            push_choice(&mut entries, choice);
        }
    } else {
        let mut choices: Vec<&Choice> = state.choices.iter().filter(visible).collect();
        sort_choices(&mut choices, cx);
        for choice in choices {
            push_choice(&mut entries, choice);
        }
    }

    if entries.is_empty() {
        let text = if cx.searching {
            &cx.options.no_results_text
        } else {
            &cx.options.no_choices_text
        };
        entries.push(notice_entry(cx, text));
    }
    (entries, selectable)
}

fn sort_choices(choices: &mut [&Choice], cx: &RenderContext<'_>) {
    if cx.searching {
        choices.sort_by(|a, b| b.score.cmp(&a.score));
    } else if cx.options.should_sort {
        choices.sort_by_key(|choice| choice.label.to_lowercase());
    }
}

fn passed_value(state: &State, cx: &RenderContext<'_>) -> PassedValue {
    let active = state.items.iter().filter(|item| item.active);
    if cx.kind.is_text() {
        let values: Vec<&str> = active.map(|item| item.value.as_str()).collect();
        return PassedValue::Text(values.join(&cx.options.delimiter));
    }

    let mut options = Vec::new();
    let mut markup = String::new();
    for item in active {
        options.push(OptionSpec::new(item.value.clone()).label(item.label.clone()).selected());
        markup.push_str(&cx.templates.option(item));
    }
    PassedValue::Options { options, markup }
}
