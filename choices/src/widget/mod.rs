//! The picker itself.

mod ajax;
mod builder;
mod events;
mod policy;

pub use ajax::Responder;
pub use builder::ChoicesBuilder;
pub use policy::{AddCheck, can_add_item};

use std::rc::Rc;

use pickdom::{
    ClassList, Direction, Event, ScrollAnimation, TextField, is_scrolled_into_view, scroll_target,
};
use regex::Regex;

use crate::error::ChoicesError;
use crate::host::Host;
use crate::machine::{DropdownState, Machine};
use crate::model::{ChoiceId, ElementKind, GroupId, ItemId, ItemSpec, OptionSpec, PassedElement};
use crate::options::Options;
use crate::render::{Chrome, ContainerView, Frame, InputView, RenderContext, Templates, ViewSync};
use crate::search::{self, Matcher};
use crate::store::{Action, State, Store};

use ajax::{AjaxPoll, AjaxSlot};
use builder::Hooks;

/// Where a picker is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Initialised,
    /// Initialised but ignoring user input
    Disabled,
    Destroyed,
    /// The host cannot run a picker; every call is a no-op
    Unsupported,
}

impl Lifecycle {
    pub fn is_initialised(self) -> bool {
        matches!(self, Lifecycle::Initialised | Lifecycle::Disabled)
    }
}

/// What the picker did with an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The picker acted on the event
    pub consumed: bool,
    /// The host should suppress the event's native behaviour
    pub prevent_default: bool,
}

impl EventOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            prevent_default: false,
        }
    }

    pub fn prevented() -> Self {
        Self {
            consumed: true,
            prevent_default: true,
        }
    }
}

/// A searchable single or multi-select picker mounted on a [`Host`].
pub struct Choices<H: Host> {
    element: PassedElement,
    options: Options,
    filter: Option<Regex>,
    store: Store,
    machine: Machine,
    view: ViewSync,
    templates: Box<dyn Templates>,
    matcher: Box<dyn Matcher>,
    hooks: Hooks,
    host: H,
    input: TextField,
    notice: Option<String>,
    lifecycle: Lifecycle,
    scroll: Option<ScrollAnimation>,
    loading: bool,
    pending_ajax: Option<AjaxSlot>,
    needs_chrome: bool,
}

impl<H: Host> Choices<H> {
    /// Enhance `element` with default templates and callbacks, then
    /// initialise.
    pub fn new(element: PassedElement, options: Options, host: H) -> Result<Self, ChoicesError> {
        ChoicesBuilder::new(element).options(options).build(host)
    }

    pub(crate) fn assemble(
        element: PassedElement,
        options: Options,
        filter: Option<Regex>,
        templates: Box<dyn Templates>,
        matcher: Box<dyn Matcher>,
        hooks: Hooks,
        host: H,
    ) -> Self {
        let machine = Machine::new(options.search);
        Self {
            element,
            options,
            filter,
            store: Store::new(),
            machine,
            view: ViewSync::new(),
            templates,
            matcher,
            hooks,
            host,
            input: TextField::default(),
            notice: None,
            lifecycle: Lifecycle::Created,
            scroll: None,
            loading: false,
            pending_ajax: None,
            needs_chrome: false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn kind(&self) -> ElementKind {
        self.element.kind
    }

    pub fn element(&self) -> &PassedElement {
        &self.element
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn dropdown_state(&self) -> DropdownState {
        self.machine.dropdown
    }

    pub fn input_value(&self) -> &str {
        self.input.text()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The choice the keyboard highlight is on, while the dropdown is open.
    pub fn highlighted(&self) -> Option<ChoiceId> {
        if !self.machine.is_open() {
            return None;
        }
        self.machine.highlighted(self.view.selectable())
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_some()
    }

    /// Values of the active items, in the order they were added.
    pub fn value(&self) -> Vec<String> {
        self.store.item_values()
    }

    /// Observe every state change. Replaces any earlier listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&State, &State) + 'static) -> &mut Self {
        self.store.subscribe(listener);
        self
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Populate the store from the element and options and draw the first
    /// frame. Has no effect on a picker that is already initialised.
    pub fn init(&mut self) -> &mut Self {
        if !matches!(self.lifecycle, Lifecycle::Created | Lifecycle::Destroyed) {
            log::debug!("init skipped: picker is {:?}", self.lifecycle);
            return self;
        }
        if !self.host.supports() {
            ChoicesError::UnsupportedHost.report();
            self.lifecycle = Lifecycle::Unsupported;
            return self;
        }

        log::debug!("initialising {} picker", self.kind());
        self.populate();
        self.lifecycle = Lifecycle::Initialised;
        self.needs_chrome = true;
        self.view.invalidate();

        if self.element.disabled {
            self.lifecycle = Lifecycle::Disabled;
        }
        if let Some(hook) = self.hooks.on_init.as_mut() {
            hook();
        }
        self.render();
        self
    }

    fn populate(&mut self) {
        if self.kind().is_text() {
            let mut presets = self.options.items.clone();
            let delimiter = self.options.delimiter.clone();
            presets.extend(
                self.element
                    .value
                    .split(delimiter.as_str())
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(ItemSpec::from),
            );
            for preset in presets {
                let label = preset.label().map(str::to_string);
                self.add_item(preset.value(), label.as_deref(), None);
            }
            return;
        }

        let groups = self.element.groups.clone();
        for group in groups {
            let id = self.store.next_group_id();
            self.store.dispatch(Action::AddGroup {
                value: group.label.clone(),
                id,
                active: !group.options.is_empty(),
                disabled: group.disabled,
            });
            for option in &group.options {
                self.add_choice(option, Some(id), group.disabled);
            }
        }

        let options: Vec<OptionSpec> = self
            .element
            .options
            .iter()
            .chain(self.options.choices.iter())
            .cloned()
            .collect();
        for option in &options {
            self.add_choice(option, None, false);
        }

        if self.kind() == ElementKind::SelectOne && self.store.active_item_count() == 0 {
            let first = self
                .store
                .choices()
                .iter()
                .find(|choice| !choice.disabled)
                .map(|choice| choice.id);
            if let Some(id) = first {
                self.add_item_from_choice(id);
            }
        }
    }

    /// Hand the element back to the host and drop all state. The picker can
    /// be initialised again afterwards.
    pub fn destroy(&mut self) -> &mut Self {
        if !self.lifecycle.is_initialised() {
            return self;
        }
        log::debug!("destroying picker");
        self.cancel_scroll();
        self.pending_ajax = None;
        self.host.teardown(&self.element);
        self.store.dispatch(Action::ClearAll);
        self.store.unsubscribe();
        self.input.clear();
        self.notice = None;
        self.machine = Machine::new(self.options.search);
        self.view = ViewSync::new();
        self.lifecycle = Lifecycle::Destroyed;
        self
    }

    pub fn disable(&mut self) -> &mut Self {
        if self.lifecycle == Lifecycle::Initialised {
            self.lifecycle = Lifecycle::Disabled;
            self.element.disabled = true;
            self.close_dropdown();
            self.render();
        }
        self
    }

    pub fn enable(&mut self) -> &mut Self {
        if self.lifecycle == Lifecycle::Disabled {
            self.lifecycle = Lifecycle::Initialised;
            self.element.disabled = false;
            self.render();
        }
        self
    }

    fn ensure_initialised(&self, operation: &'static str) -> bool {
        if self.lifecycle.is_initialised() {
            true
        } else {
            ChoicesError::NotInitialised { operation }.report();
            false
        }
    }

    fn ensure_select(&self, operation: &'static str) -> bool {
        if self.kind().is_select() {
            true
        } else {
            ChoicesError::Unsupported {
                operation,
                kind: self.kind(),
            }
            .report();
            false
        }
    }

    // ========================================================================
    // Items
    // ========================================================================

    pub fn select_item(&mut self, id: ItemId) -> &mut Self {
        self.set_item_selected("select_item", id, true)
    }

    pub fn deselect_item(&mut self, id: ItemId) -> &mut Self {
        self.set_item_selected("deselect_item", id, false)
    }

    fn set_item_selected(
        &mut self,
        operation: &'static str,
        id: ItemId,
        selected: bool,
    ) -> &mut Self {
        if !self.ensure_initialised(operation) {
            return self;
        }
        match self.store.item(id) {
            Some(item) if item.active => {
                if item.selected != selected {
                    self.store.dispatch(Action::SelectItem { id, selected });
                    self.render();
                }
            }
            _ => ChoicesError::ItemNotFound { operation, id }.report(),
        }
        self
    }

    /// Select every active item.
    pub fn highlight_all(&mut self) -> &mut Self {
        if !self.ensure_initialised("highlight_all") {
            return self;
        }
        self.set_all_selected(true);
        self.render();
        self
    }

    pub fn deselect_all(&mut self) -> &mut Self {
        if !self.ensure_initialised("deselect_all") {
            return self;
        }
        self.set_all_selected(false);
        self.render();
        self
    }

    fn set_all_selected(&mut self, selected: bool) {
        let ids: Vec<ItemId> = self
            .store
            .active_items()
            .filter(|item| item.selected != selected)
            .map(|item| item.id)
            .collect();
        for id in ids {
            self.store.dispatch(Action::SelectItem { id, selected });
        }
    }

    pub fn remove_items_by_value(&mut self, value: &str) -> &mut Self {
        if !self.ensure_initialised("remove_items_by_value") {
            return self;
        }
        if value.is_empty() {
            ChoicesError::MissingValue {
                operation: "remove_items_by_value",
            }
            .report();
            return self;
        }
        let ids: Vec<ItemId> = self
            .store
            .active_items()
            .filter(|item| item.value == value)
            .map(|item| item.id)
            .collect();
        self.remove_items(&ids);
        self.render();
        self
    }

    /// Remove every active item except `exclude`.
    pub fn remove_active_items(&mut self, exclude: Option<ItemId>) -> &mut Self {
        if !self.ensure_initialised("remove_active_items") {
            return self;
        }
        self.remove_active_items_except(exclude);
        self.render();
        self
    }

    pub fn remove_selected_items(&mut self) -> &mut Self {
        if !self.ensure_initialised("remove_selected_items") {
            return self;
        }
        self.remove_selected();
        self.render();
        self
    }

    fn remove_active_items_except(&mut self, exclude: Option<ItemId>) {
        let ids: Vec<ItemId> = self
            .store
            .active_items()
            .filter(|item| Some(item.id) != exclude)
            .map(|item| item.id)
            .collect();
        self.remove_items(&ids);
    }

    fn remove_selected(&mut self) {
        let ids: Vec<ItemId> = self.store.selected_items().map(|item| item.id).collect();
        self.remove_items(&ids);
    }

    fn remove_items(&mut self, ids: &[ItemId]) {
        for &id in ids {
            self.remove_item(id);
        }
    }

    /// Add an item. Values are trimmed and decorated with the configured
    /// prefix and suffix; a select-one picker drops its previous item.
    pub(crate) fn add_item(
        &mut self,
        value: &str,
        label: Option<&str>,
        choice_id: Option<ChoiceId>,
    ) {
        let value = self.options.decorate_value(value.trim());
        let label = match label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => value.clone(),
        };
        let id = self.store.next_item_id();
        self.store.dispatch(Action::AddItem {
            value: value.clone(),
            label,
            id,
            choice_id,
        });
        if self.kind() == ElementKind::SelectOne {
            self.remove_active_items_except(Some(id));
        }

        if let Some(hook) = self.hooks.on_add_item.as_mut() {
            hook(id, &value, &self.element);
        }
        self.trigger_change(&value);
    }

    fn add_item_from_choice(&mut self, id: ChoiceId) {
        let Some(choice) = self.store.choice_by_id(id) else {
            ChoicesError::ChoiceNotFound {
                operation: "add_item",
                id,
            }
            .report();
            return;
        };
        let (value, label) = (choice.value.clone(), choice.label.clone());
        self.add_item(&value, Some(&label), Some(id));
    }

    pub(crate) fn remove_item(&mut self, id: ItemId) {
        let Some(item) = self.store.item(id).filter(|item| item.active) else {
            ChoicesError::ItemNotFound {
                operation: "remove_item",
                id,
            }
            .report();
            return;
        };
        let (value, choice_id) = (item.value.clone(), item.choice_id);
        self.store.dispatch(Action::RemoveItem { id, choice_id });
        self.refresh_notice();

        if let Some(hook) = self.hooks.on_remove_item.as_mut() {
            hook(id, &value, &self.element);
        }
        self.trigger_change(&value);
    }

    fn trigger_change(&mut self, value: &str) {
        if self.lifecycle != Lifecycle::Initialised {
            return;
        }
        if let Some(hook) = self.hooks.on_change.as_mut() {
            hook(value);
        }
    }

    // ========================================================================
    // Choices
    // ========================================================================

    fn add_choice(&mut self, option: &OptionSpec, group_id: Option<GroupId>, group_disabled: bool) {
        let id = self.store.next_choice_id();
        let label = option.label.clone().unwrap_or_else(|| option.value.clone());
        self.store.dispatch(Action::AddChoice {
            value: option.value.clone(),
            label,
            id,
            group_id,
            disabled: option.disabled || group_disabled,
        });
        if option.selected {
            self.add_item_from_choice(id);
        }
    }

    /// Add items: typed values for text inputs, new selected choices for
    /// selects.
    pub fn set_value<I, T>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ItemSpec>,
    {
        if !self.ensure_initialised("set_value") {
            return self;
        }
        for spec in values.into_iter().map(Into::<ItemSpec>::into) {
            if self.kind().is_text() {
                self.add_item(spec.value(), spec.label(), None);
            } else {
                let mut option = OptionSpec::new(spec.value()).selected();
                option.label = spec.label().map(str::to_string);
                self.add_choice(&option, None, false);
            }
        }
        self.render();
        self
    }

    /// Select existing choices by value.
    pub fn set_value_by_choice<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.ensure_initialised("set_value_by_choice")
            || !self.ensure_select("set_value_by_choice")
        {
            return self;
        }
        for value in values {
            let value = value.as_ref();
            let found = self
                .store
                .choices()
                .iter()
                .find(|choice| choice.value == value)
                .map(|choice| (choice.id, choice.selected));
            match found {
                Some((id, false)) => self.add_item_from_choice(id),
                Some((_, true)) => {}
                None => log::warn!("set_value_by_choice: no choice with value `{value}`"),
            }
        }
        self.render();
        self
    }

    /// Append choices to a select. Options marked selected become items.
    pub fn set_choices(&mut self, choices: Vec<OptionSpec>) -> &mut Self {
        if !self.ensure_initialised("set_choices") || !self.ensure_select("set_choices") {
            return self;
        }
        for option in &choices {
            self.add_choice(option, None, false);
        }
        self.render();
        self
    }

    /// Remove every item, choice and group, and clear the input.
    pub fn clear_value(&mut self) -> &mut Self {
        if !self.ensure_initialised("clear_value") {
            return self;
        }
        self.store.dispatch(Action::ClearAll);
        self.input.clear();
        self.notice = None;
        self.machine.end_search();
        self.render();
        self
    }

    /// Empty the input and leave any search.
    pub fn clear_input(&mut self) -> &mut Self {
        if !self.ensure_initialised("clear_input") {
            return self;
        }
        self.reset_input();
        self.render();
        self
    }

    fn reset_input(&mut self) {
        self.input.clear();
        self.notice = None;
        let filtered = self.store.choices().iter().any(|choice| !choice.active);
        let searching = self.machine.end_search();
        if searching || filtered {
            self.store.dispatch(Action::ActivateChoices {
                clear_selection: self.kind() == ElementKind::SelectOne,
            });
        }
    }

    /// Show the loading state and ask `fetch` for choices. Results apply
    /// as soon as the [`Responder`] is used, even after `fetch` returns.
    pub fn ajax<F>(&mut self, fetch: F) -> &mut Self
    where
        F: FnOnce(Responder),
    {
        if !self.ensure_initialised("ajax") || !self.ensure_select("ajax") {
            return self;
        }
        self.loading = true;
        self.render();

        let slot = AjaxSlot::default();
        self.pending_ajax = Some(Rc::clone(&slot));
        fetch(Responder::new(slot));
        self.poll_ajax();
        self
    }

    /// Apply a pending ajax response, if one arrived. Returns whether
    /// anything changed.
    pub fn poll_ajax(&mut self) -> bool {
        let Some(slot) = self.pending_ajax.as_ref() else {
            return false;
        };
        match ajax::poll(slot) {
            AjaxPoll::Pending => false,
            AjaxPoll::Abandoned => {
                log::warn!("ajax responder dropped without a response");
                self.pending_ajax = None;
                self.loading = false;
                self.render();
                true
            }
            AjaxPoll::Ready(options) => {
                log::debug!("ajax delivered {} choices", options.len());
                self.pending_ajax = None;
                self.loading = false;
                let first = self.store.next_choice_id();
                for option in &options {
                    self.add_choice(option, None, false);
                }
                if self.kind() == ElementKind::SelectOne && !options.is_empty() {
                    self.add_item_from_choice(first);
                }
                self.render();
                true
            }
        }
    }

    // ========================================================================
    // Dropdown
    // ========================================================================

    pub fn show_dropdown(&mut self) -> &mut Self {
        if !self.ensure_initialised("show_dropdown") {
            return self;
        }
        self.open_dropdown();
        self.render();
        self
    }

    pub fn hide_dropdown(&mut self) -> &mut Self {
        if !self.ensure_initialised("hide_dropdown") {
            return self;
        }
        self.close_dropdown();
        self.render();
        self
    }

    pub fn toggle_dropdown(&mut self) -> &mut Self {
        if self.machine.is_open() {
            self.hide_dropdown()
        } else {
            self.show_dropdown()
        }
    }

    fn open_dropdown(&mut self) -> bool {
        let flip = self.options.flip && self.host.viewport().should_flip();
        self.machine.open(flip)
    }

    fn close_dropdown(&mut self) -> bool {
        self.cancel_scroll();
        self.notice = None;
        self.machine.close()
    }

    // ========================================================================
    // Highlight and scrolling
    // ========================================================================

    /// Move the keyboard highlight one step, or to the end when `jump`.
    fn move_highlight(&mut self, direction: Direction, jump: bool) {
        let selectable = self.view.selectable();
        let Some(last) = selectable.len().checked_sub(1) else {
            return;
        };
        let current = self.machine.highlight.min(last);
        let next = match (direction, jump) {
            (Direction::Down, true) => last,
            (Direction::Up, true) => 0,
            (Direction::Down, false) => (current + 1).min(last),
            (Direction::Up, false) => current.saturating_sub(1),
        };
        let id = selectable[next];
        self.machine.highlight = next;

        let Some(bounds) = self.host.choice_bounds(id) else {
            return;
        };
        let metrics = self.host.dropdown_metrics();
        if !is_scrolled_into_view(bounds, metrics, direction) {
            self.start_scroll(scroll_target(bounds, metrics, direction));
        }
    }

    fn start_scroll(&mut self, target: i32) {
        self.cancel_scroll();
        log::trace!("scrolling dropdown to {target}");
        self.scroll = Some(ScrollAnimation::new(target));
    }

    fn cancel_scroll(&mut self) {
        if let Some(mut animation) = self.scroll.take() {
            animation.cancel();
        }
    }

    /// Advance per-frame work: pending ajax results and the scroll
    /// animation. Returns whether another tick is needed.
    pub fn tick(&mut self) -> bool {
        self.poll_ajax();
        let Some(animation) = self.scroll.as_mut() else {
            return false;
        };
        let current = self.host.dropdown_metrics().scroll_top;
        let step = animation.step(current);
        self.host.set_scroll_top(step.offset());
        if step.is_done() {
            self.scroll = None;
        }
        self.scroll.is_some()
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Route a host event through the interaction state machine.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        self.poll_ajax();
        if self.lifecycle != Lifecycle::Initialised {
            return EventOutcome::ignored();
        }
        log::trace!("event {event:?}");

        let outcome = match event {
            Event::Key { key, modifiers } => self.on_key(*key, *modifiers),
            Event::MouseDown { hit, modifiers } => self.on_mouse_down(*hit, *modifiers),
            Event::MouseOver { hit } => self.on_mouse_over(*hit),
            Event::Focus { target } => self.on_focus(*target),
            Event::Blur { target } => self.on_blur(*target),
            Event::Paste { text } => self.on_paste(text),
            Event::Input { text } => self.on_input(text),
        };
        if outcome.consumed || self.store.is_dirty() {
            self.render();
        }
        outcome
    }

    fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.chars().count() >= self.options.search_floor.max(1) {
            if !self.machine.begin_search(query) {
                return;
            }
            let haystack = self.store.selectable_choices();
            let results = search::rank(
                self.matcher.as_mut(),
                query,
                &haystack,
                &self.options.search_fields,
            );
            log::debug!("search `{query}`: {} results", results.len());
            self.store.dispatch(Action::FilterChoices { results });
        } else {
            let filtered = self.store.choices().iter().any(|choice| !choice.active);
            if self.machine.end_search() || filtered {
                self.store.dispatch(Action::ActivateChoices {
                    clear_selection: false,
                });
            }
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn container_view(&self) -> ContainerView {
        let cn = &self.options.class_names;
        let disabled = self.lifecycle == Lifecycle::Disabled;
        let class = ClassList::new()
            .with(&cn.container_outer)
            .with_if(self.machine.is_open(), &cn.open_state)
            .with_if(self.machine.dropdown == DropdownState::Flipped, &cn.flipped_state)
            .with_if(self.machine.is_focused(), &cn.focus_state)
            .with_if(disabled, &cn.disabled_state)
            .with_if(self.loading, &cn.loading_state);
        ContainerView {
            class: class.to_string(),
            dropdown: self.machine.dropdown,
            focused: self.machine.is_focused(),
            disabled,
            loading: self.loading,
        }
    }

    fn input_view(&self) -> InputView {
        let placeholder = if self.loading {
            Some(self.options.loading_text.clone())
        } else if self.options.placeholder {
            self.options
                .placeholder_value
                .clone()
                .or_else(|| self.element.placeholder.clone())
        } else {
            None
        };
        InputView {
            value: self.input.text().to_string(),
            cursor: self.input.cursor(),
            width: self.input.display_width(placeholder.as_deref()),
            placeholder,
            hidden: self.kind() == ElementKind::SelectOne && !self.machine.is_open(),
        }
    }

    fn chrome(&self, container: &ContainerView) -> Chrome {
        let cx = RenderContext {
            options: &self.options,
            templates: self.templates.as_ref(),
            kind: self.kind(),
            searching: false,
            notice: None,
        };
        let tcx = cx.template_context();
        let templates = self.templates.as_ref();
        Chrome {
            container_outer: templates.container_outer(&tcx, container),
            container_inner: templates.container_inner(&tcx),
            item_list: templates.item_list(&tcx),
            choice_list: templates.choice_list(&tcx),
            input: templates.input(&tcx),
            dropdown: templates.dropdown(&tcx),
        }
    }

    /// Sync the view with the store and send a frame to the host.
    fn render(&mut self) {
        if !self.lifecycle.is_initialised() {
            return;
        }
        self.store.take_dirty();

        let cx = RenderContext {
            options: &self.options,
            templates: self.templates.as_ref(),
            kind: self.element.kind,
            searching: self.machine.is_searching(),
            notice: self.notice.as_deref(),
        };
        let synced = self.view.sync(self.store.state(), &cx);
        if synced.dropdown.is_some() {
            self.machine.clamp_highlight(self.view.selectable().len());
        }
        if synced.scroll_reset {
            self.cancel_scroll();
            self.host.set_scroll_top(0);
        }

        let container = self.container_view();
        let chrome = if std::mem::take(&mut self.needs_chrome) {
            Some(self.chrome(&container))
        } else {
            None
        };
        let frame = Frame {
            chrome,
            input: self.input_view(),
            container,
            items: synced.items,
            dropdown: synced.dropdown,
            passed_value: synced.passed_value,
            highlighted: self.highlighted(),
            scroll_reset: synced.scroll_reset,
        };
        self.host.render(&frame);
    }
}
