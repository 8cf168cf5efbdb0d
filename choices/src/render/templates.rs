//! Markup fragments.
//!
//! Every method has an HTML default mirroring the stock Choices markup.
//! Override any subset by implementing [`Templates`] on your own type and
//! passing it to [`ChoicesBuilder::templates`](crate::ChoicesBuilder::templates).

use pickdom::{ClassList, escape};

use crate::model::{Choice, ElementKind, Group, Item};
use crate::options::ClassNames;
use crate::render::frame::ContainerView;

/// Read-only inputs shared by every template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub class_names: &'a ClassNames,
    pub kind: ElementKind,
    pub remove_item_button: bool,
    pub item_select_text: &'a str,
}

pub trait Templates {
    fn container_outer(&self, cx: &TemplateContext<'_>, container: &ContainerView) -> String {
        let cn = cx.class_names;
        let class = ClassList::new()
            .with(&cn.container_outer)
            .with_if(container.is_open(), &cn.open_state)
            .with_if(container.is_flipped(), &cn.flipped_state)
            .with_if(container.focused, &cn.focus_state)
            .with_if(container.disabled, &cn.disabled_state)
            .with_if(container.loading, &cn.loading_state);
        let role = if cx.kind == ElementKind::SelectOne {
            r#" role="listbox""#
        } else {
            ""
        };
        format!(
            r#"<div class="{class}" data-type="{kind}"{role} tabindex="0" aria-haspopup="true" aria-expanded="{open}"></div>"#,
            kind = cx.kind,
            open = container.is_open(),
        )
    }

    fn container_inner(&self, cx: &TemplateContext<'_>) -> String {
        format!(r#"<div class="{}"></div>"#, cx.class_names.container_inner)
    }

    fn item_list(&self, cx: &TemplateContext<'_>) -> String {
        let cn = cx.class_names;
        let modifier = if cx.kind == ElementKind::SelectOne {
            &cn.list_single
        } else {
            &cn.list_items
        };
        format!(r#"<div class="{} {modifier}"></div>"#, cn.list)
    }

    fn choice_list(&self, cx: &TemplateContext<'_>) -> String {
        let role = if cx.kind == ElementKind::SelectOne {
            ""
        } else {
            r#" role="listbox""#
        };
        format!(r#"<div class="{}" dir="ltr"{role}></div>"#, cx.class_names.list)
    }

    fn input(&self, cx: &TemplateContext<'_>) -> String {
        let cn = cx.class_names;
        format!(
            r#"<input type="text" class="{} {}" autocomplete="off" autocapitalize="off" spellcheck="false" role="textbox" aria-autocomplete="list">"#,
            cn.input, cn.input_cloned
        )
    }

    fn dropdown(&self, cx: &TemplateContext<'_>) -> String {
        let cn = cx.class_names;
        format!(
            r#"<div class="{} {}" aria-expanded="false"></div>"#,
            cn.list, cn.list_dropdown
        )
    }

    fn notice(&self, cx: &TemplateContext<'_>, text: &str) -> String {
        let cn = cx.class_names;
        // Notices may carry markup of their own (the add-item prompt).
        format!(r#"<div class="{} {}">{text}</div>"#, cn.item, cn.item_choice)
    }

    fn item(&self, cx: &TemplateContext<'_>, item: &Item) -> String {
        let cn = cx.class_names;
        let class = ClassList::new()
            .with(&cn.item)
            .with(&cn.item_selectable)
            .with_if(item.selected, &cn.highlighted_state);
        let label = escape(&item.label);
        let value = escape(&item.value);
        if cx.remove_item_button {
            format!(
                r#"<div class="{class}" data-item data-id="{id}" data-value="{value}" data-deletable>{label}<button type="button" class="{button}" data-button aria-label="Remove item: '{value}'">Remove item</button></div>"#,
                id = item.id,
                button = cn.button,
            )
        } else {
            format!(
                r#"<div class="{class}" data-item data-id="{id}" data-value="{value}">{label}</div>"#,
                id = item.id,
            )
        }
    }

    fn choice_group(&self, cx: &TemplateContext<'_>, group: &Group) -> String {
        let cn = cx.class_names;
        let class = ClassList::new()
            .with(&cn.group)
            .with_if(group.disabled, &cn.item_disabled);
        let value = escape(&group.value);
        format!(
            r#"<div class="{class}" data-group data-id="{id}" data-value="{value}" role="group"><div class="{heading}">{value}</div></div>"#,
            id = group.id,
            heading = cn.group_heading,
        )
    }

    fn choice(&self, cx: &TemplateContext<'_>, choice: &Choice) -> String {
        let cn = cx.class_names;
        let class = ClassList::new()
            .with(&cn.item)
            .with(&cn.item_choice)
            .with(if choice.disabled {
                &cn.item_disabled
            } else {
                &cn.item_selectable
            });
        let state = if choice.disabled {
            r#"data-choice-disabled aria-disabled="true""#
        } else {
            "data-choice-selectable"
        };
        let group = choice
            .group_id
            .map(|id| format!(r#" data-group-id="{id}""#))
            .unwrap_or_default();
        format!(
            r#"<div class="{class}" data-select-text="{select}" data-choice {state} data-id="{id}" data-value="{value}"{group} role="option">{label}</div>"#,
            select = escape(cx.item_select_text),
            id = choice.id,
            value = escape(&choice.value),
            label = escape(&choice.label),
        )
    }

    /// An `<option>` mirroring an item into the enhanced select.
    fn option(&self, item: &Item) -> String {
        format!(
            r#"<option value="{}" selected>{}</option>"#,
            escape(&item.value),
            escape(&item.label)
        )
    }
}

/// The stock markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTemplates;

impl Templates for DefaultTemplates {}
