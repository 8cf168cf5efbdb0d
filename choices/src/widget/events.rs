//! Event handling for the picker.
//!
//! Each handler works from its own event and reports what it did; the
//! caller renders afterwards.

use pickdom::{Direction, FocusTarget, Hit, Key, Modifiers, TextEdit};

use crate::error::ChoicesError;
use crate::host::Host;
use crate::model::{ChoiceId, ElementKind, ItemId};
use crate::store::Action;

use super::policy::{AddCheck, can_add_item};
use super::{Choices, EventOutcome};

impl<H: Host> Choices<H> {
    fn check_add(&self, value: &str) -> AddCheck {
        let values = self.store.item_values();
        can_add_item(&self.options, self.filter.as_ref(), self.kind(), &values, value)
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    pub(super) fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventOutcome {
        let kind = self.kind();

        let closed = !self.machine.is_open();
        if kind.is_select() && closed && key.opens_dropdown() && !modifiers.command() {
            self.open_dropdown();
        }
        self.machine.can_search = self.options.search;

        match key {
            Key::Char('a') | Key::Char('A') if modifiers.command() => self.on_select_all_key(),
            Key::Enter => self.on_enter_key(),
            Key::Escape => {
                if self.close_dropdown() {
                    EventOutcome::consumed()
                } else {
                    EventOutcome::ignored()
                }
            }
            Key::Up | Key::Down | Key::PageUp | Key::PageDown => {
                self.on_direction_key(key, modifiers)
            }
            Key::Backspace | Key::Delete
                if self.input.is_empty() && kind != ElementKind::SelectOne =>
            {
                self.on_delete_key()
            }
            _ => self.on_text_key(key, modifiers),
        }
    }

    fn on_select_all_key(&mut self) -> EventOutcome {
        self.machine.can_search = false;
        let has_items = self.store.active_item_count() > 0;
        if self.options.remove_items && self.input.is_empty() && has_items {
            self.set_all_selected(true);
            return EventOutcome::prevented();
        }
        EventOutcome::consumed()
    }

    fn on_enter_key(&mut self) -> EventOutcome {
        let kind = self.kind();

        if kind.is_text() && !self.input.text().trim().is_empty() {
            let value = self.input.text().to_string();
            let check = self.check_add(&value);
            if check.allowed {
                self.close_dropdown();
                self.add_item(&value, None, None);
                self.reset_input();
            } else {
                self.notice = check.notice;
                if self.notice.is_some() {
                    self.open_dropdown();
                }
            }
            return EventOutcome::prevented();
        }

        if self.machine.is_open() {
            if let Some(id) = self.highlighted() {
                self.commit_choice(id);
            }
            return EventOutcome::prevented();
        }

        if kind == ElementKind::SelectOne {
            self.open_dropdown();
            return EventOutcome::prevented();
        }
        EventOutcome::ignored()
    }

    fn on_direction_key(&mut self, key: Key, modifiers: Modifiers) -> EventOutcome {
        if !self.machine.is_open() && self.kind() != ElementKind::SelectOne {
            return EventOutcome::ignored();
        }
        self.open_dropdown();
        self.machine.can_search = false;

        let direction = match key {
            Key::Down | Key::PageDown => Direction::Down,
            _ => Direction::Up,
        };
        let jump = matches!(key, Key::PageUp | Key::PageDown) || modifiers.meta;
        self.move_highlight(direction, jump);
        EventOutcome::prevented()
    }

    /// Backspace or delete on an empty input.
    fn on_delete_key(&mut self) -> EventOutcome {
        if !self.options.remove_items {
            return EventOutcome::ignored();
        }
        let Some(last) = self.store.active_items().last().cloned() else {
            return EventOutcome::ignored();
        };
        let has_selected = self.store.selected_items().next().is_some();

        if self.options.edit_items && !has_selected {
            self.input.set(last.value.clone());
            self.remove_item(last.id);
            self.after_input(true);
        } else {
            if !has_selected {
                self.store.dispatch(Action::SelectItem {
                    id: last.id,
                    selected: true,
                });
            }
            self.remove_selected();
        }
        EventOutcome::prevented()
    }

    fn on_text_key(&mut self, key: Key, modifiers: Modifiers) -> EventOutcome {
        match self.input.handle_key(key, modifiers) {
            TextEdit::Changed => {
                self.after_input(key.is_delete());
                EventOutcome::consumed()
            }
            TextEdit::Handled => EventOutcome::consumed(),
            TextEdit::Ignored => EventOutcome::ignored(),
        }
    }

    /// Recheck a shown notice after the item count changed, so a limit
    /// notice does not outlive the limit.
    pub(super) fn refresh_notice(&mut self) {
        if self.notice.is_none() {
            return;
        }
        let value = self.input.text().to_string();
        self.notice = if self.kind().is_text() && value.trim().is_empty() {
            None
        } else {
            self.check_add(&value).notice
        };
    }

    /// React to changed input text: notices for text inputs, search for
    /// selects.
    pub(super) fn after_input(&mut self, deleted: bool) {
        let value = self.input.text().to_string();

        if self.kind().is_text() {
            if value.trim().is_empty() {
                self.notice = None;
                self.close_dropdown();
            } else {
                self.notice = self.check_add(&value).notice;
                if self.notice.is_some() {
                    self.open_dropdown();
                } else {
                    self.close_dropdown();
                }
            }
        } else {
            let limit = self.check_add(&value);
            if !limit.allowed {
                self.notice = limit.notice;
                self.open_dropdown();
            } else if self.machine.can_search {
                self.notice = None;
                self.search(&value);
            } else if deleted && value.is_empty() {
                self.reset_input();
            }
        }
        self.machine.can_search = self.options.search;
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    pub(super) fn on_mouse_down(&mut self, hit: Hit, modifiers: Modifiers) -> EventOutcome {
        let kind = self.kind();
        match hit {
            Hit::Outside => {
                self.on_click_outside();
                return EventOutcome::ignored();
            }
            Hit::RemoveButton(id) => {
                if self.options.remove_items && self.options.remove_item_button {
                    self.remove_item(ItemId(id));
                }
            }
            Hit::Item(id) => self.on_item_click(ItemId(id), modifiers.shift),
            Hit::Choice(id) => self.commit_choice(ChoiceId(id)),
            Hit::Widget | Hit::Input | Hit::Dropdown => {
                if !self.machine.is_open() {
                    if kind.is_text() {
                        if !self.machine.is_focused() {
                            self.host.focus_input();
                        }
                    } else {
                        self.open_dropdown();
                        self.host.focus_input();
                    }
                } else if kind == ElementKind::SelectOne
                    && !matches!(hit, Hit::Input | Hit::Dropdown)
                {
                    self.close_dropdown();
                }
            }
        }

        if hit == Hit::Input {
            EventOutcome::consumed()
        } else {
            EventOutcome::prevented()
        }
    }

    fn on_item_click(&mut self, id: ItemId, shift: bool) {
        if !self.options.remove_items || self.kind() == ElementKind::SelectOne {
            return;
        }
        let Some(item) = self.store.item(id).filter(|item| item.active) else {
            ChoicesError::ItemNotFound {
                operation: "item click",
                id,
            }
            .report();
            return;
        };
        let selected = !item.selected;

        if !shift {
            let others: Vec<ItemId> = self
                .store
                .selected_items()
                .filter(|item| item.id != id)
                .map(|item| item.id)
                .collect();
            for other in others {
                self.store.dispatch(Action::SelectItem {
                    id: other,
                    selected: false,
                });
            }
        }
        self.store.dispatch(Action::SelectItem { id, selected });
        self.host.focus_input();
    }

    /// Commit a choice as an item, respecting the item limit.
    fn commit_choice(&mut self, id: ChoiceId) {
        let Some(choice) = self.store.choice_by_id(id) else {
            ChoicesError::ChoiceNotFound {
                operation: "commit choice",
                id,
            }
            .report();
            return;
        };
        let (value, committable) = (choice.value.clone(), choice.is_selectable());

        let mut notice = None;
        if committable {
            let check = self.check_add(&value);
            if check.allowed {
                self.add_item_from_choice(id);
            } else {
                notice = check.notice;
            }
        }

        self.reset_input();
        self.notice = notice;
        if self.kind() == ElementKind::SelectOne {
            self.close_dropdown();
        }
    }

    fn on_click_outside(&mut self) {
        if self.store.selected_items().next().is_some() {
            self.set_all_selected(false);
        }
        self.machine.blur();
        self.close_dropdown();
        self.host.blur_input();
        self.render();
    }

    pub(super) fn on_mouse_over(&mut self, hit: Hit) -> EventOutcome {
        let Hit::Choice(id) = hit else {
            return EventOutcome::ignored();
        };
        if self.machine.highlight_choice(ChoiceId(id), self.view.selectable()) {
            EventOutcome::consumed()
        } else {
            EventOutcome::ignored()
        }
    }

    // ========================================================================
    // Focus
    // ========================================================================

    pub(super) fn on_focus(&mut self, target: FocusTarget) -> EventOutcome {
        let on_input = target == FocusTarget::Input;
        match self.kind() {
            ElementKind::Text => {
                if on_input {
                    self.machine.focus();
                }
            }
            ElementKind::SelectOne => {
                self.machine.focus();
                if on_input {
                    self.open_dropdown();
                }
            }
            ElementKind::SelectMultiple => {
                if on_input {
                    self.machine.focus();
                    self.open_dropdown();
                }
            }
        }
        EventOutcome::consumed()
    }

    pub(super) fn on_blur(&mut self, target: FocusTarget) -> EventOutcome {
        let on_input = target == FocusTarget::Input;
        match self.kind() {
            ElementKind::Text | ElementKind::SelectMultiple => {
                if on_input {
                    self.machine.blur();
                    self.set_all_selected(false);
                    self.close_dropdown();
                }
            }
            ElementKind::SelectOne => {
                self.machine.blur();
                self.close_dropdown();
            }
        }
        EventOutcome::consumed()
    }

    // ========================================================================
    // Text
    // ========================================================================

    pub(super) fn on_paste(&mut self, text: &str) -> EventOutcome {
        if !self.options.paste {
            log::debug!("paste blocked");
            return EventOutcome::prevented();
        }
        self.input.insert_str(text);
        self.after_input(false);
        EventOutcome::consumed()
    }

    pub(super) fn on_input(&mut self, text: &str) -> EventOutcome {
        if text == self.input.text() {
            return EventOutcome::ignored();
        }
        let deleted = text.len() < self.input.text().len();
        self.input.set(text);
        self.after_input(deleted);
        EventOutcome::consumed()
    }
}
