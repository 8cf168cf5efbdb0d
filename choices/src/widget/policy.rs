//! Whether a value may become an item, and what to tell the user if not.

use regex::Regex;

use crate::model::ElementKind;
use crate::options::Options;

/// Outcome of an add check. A rejection is not an error; it carries the
/// notice to show, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCheck {
    pub allowed: bool,
    pub notice: Option<String>,
}

impl AddCheck {
    fn allow(notice: Option<String>) -> Self {
        Self {
            allowed: true,
            notice,
        }
    }

    fn reject(notice: Option<String>) -> Self {
        Self {
            allowed: false,
            notice,
        }
    }
}

/// Check `value` against the item limit, and for text inputs against the
/// add, regex and duplicate rules, in that order.
///
/// `active_values` are the values of the active items.
pub fn can_add_item(
    options: &Options,
    filter: Option<&Regex>,
    kind: ElementKind,
    active_values: &[String],
    value: &str,
) -> AddCheck {
    let value = value.trim();

    let reached = options
        .item_limit()
        .filter(|&limit| kind != ElementKind::SelectOne && active_values.len() >= limit);
    if let Some(limit) = reached {
        return AddCheck::reject(Some(options.max_item_notice(limit)));
    }

    if !kind.is_text() {
        return AddCheck::allow(None);
    }

    if !options.add_items || value.is_empty() {
        return AddCheck::reject(None);
    }

    if filter.is_some_and(|filter| !filter.is_match(value)) {
        return AddCheck::reject(None);
    }

    if !options.duplicate_items {
        let decorated = options.decorate_value(value);
        if active_values.iter().any(|existing| *existing == decorated) {
            return AddCheck::reject(Some(options.unique_item_text.clone()));
        }
    }

    AddCheck::allow(Some(options.add_item_notice(value)))
}
