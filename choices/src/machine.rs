//! Interaction state of a picker.
//!
//! Each concern is an explicit enum and changes only through a guarded
//! transition that reports whether anything happened, so callers can skip
//! redundant renders and hooks.

use crate::model::ChoiceId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
    /// Open above the input because there is no room below
    Flipped,
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        !matches!(self, DropdownState::Closed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Searching { query: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Blurred,
    Focused,
}

#[derive(Debug, Clone, Default)]
pub struct Machine {
    pub dropdown: DropdownState,
    pub search: SearchState,
    pub focus: FocusState,
    /// Index into the rendered selectable choices
    pub highlight: usize,
    /// Cleared for the keystroke that must not trigger a search (Ctrl+A)
    pub can_search: bool,
}

impl Machine {
    pub fn new(search_enabled: bool) -> Self {
        Self {
            can_search: search_enabled,
            ..Default::default()
        }
    }

    // ========================================================================
    // Dropdown
    // ========================================================================

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn open(&mut self, flip: bool) -> bool {
        if self.is_open() {
            return false;
        }
        self.dropdown = if flip {
            DropdownState::Flipped
        } else {
            DropdownState::Open
        };
        log::debug!("dropdown {:?}", self.dropdown);
        true
    }

    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.dropdown = DropdownState::Closed;
        log::debug!("dropdown closed");
        true
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn is_searching(&self) -> bool {
        matches!(self.search, SearchState::Searching { .. })
    }

    pub fn last_query(&self) -> Option<&str> {
        match &self.search {
            SearchState::Searching { query } => Some(query),
            SearchState::Idle => None,
        }
    }

    /// Enter (or stay in) searching with `query`. Returns false when the
    /// query is unchanged. A new query moves the highlight back to the top.
    pub fn begin_search(&mut self, query: &str) -> bool {
        if self.last_query() == Some(query) {
            return false;
        }
        self.search = SearchState::Searching {
            query: query.to_string(),
        };
        self.highlight = 0;
        true
    }

    pub fn end_search(&mut self) -> bool {
        if !self.is_searching() {
            return false;
        }
        self.search = SearchState::Idle;
        true
    }

    // ========================================================================
    // Focus
    // ========================================================================

    pub fn is_focused(&self) -> bool {
        self.focus == FocusState::Focused
    }

    pub fn focus(&mut self) -> bool {
        if self.is_focused() {
            return false;
        }
        self.focus = FocusState::Focused;
        true
    }

    pub fn blur(&mut self) -> bool {
        if !self.is_focused() {
            return false;
        }
        self.focus = FocusState::Blurred;
        true
    }

    // ========================================================================
    // Highlight
    // ========================================================================

    /// The highlighted choice among `selectable`, clamping a stale position
    /// to the last entry.
    pub fn highlighted(&self, selectable: &[ChoiceId]) -> Option<ChoiceId> {
        let last = selectable.len().checked_sub(1)?;
        selectable.get(self.highlight.min(last)).copied()
    }

    /// Highlight `id` if it is among `selectable`.
    pub fn highlight_choice(&mut self, id: ChoiceId, selectable: &[ChoiceId]) -> bool {
        match selectable.iter().position(|&candidate| candidate == id) {
            Some(index) if index != self.highlight => {
                self.highlight = index;
                true
            }
            _ => false,
        }
    }

    /// Clamp the highlight position after the selectable list changed.
    pub fn clamp_highlight(&mut self, len: usize) {
        self.highlight = self.highlight.min(len.saturating_sub(1));
    }
}
