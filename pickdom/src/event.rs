/// High-level events, already resolved by the host against the picker's elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press while the picker (or its input) has focus
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed
    MouseDown { hit: Hit, modifiers: Modifiers },
    /// Pointer moved over an element
    MouseOver { hit: Hit },
    /// Input or container gained focus
    Focus { target: FocusTarget },
    /// Input or container lost focus
    Blur { target: FocusTarget },
    /// Text pasted into the input
    Paste { text: String },
    /// The host replaced the input text wholesale (native text fields)
    Input { text: String },
}

impl Event {
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn char(c: char) -> Self {
        Event::key(Key::Char(c))
    }

    pub fn click(hit: Hit) -> Self {
        Event::MouseDown {
            hit,
            modifiers: Modifiers::new(),
        }
    }
}

/// What a pointer event landed on.
///
/// Ids are the raw numeric ids the picker writes into its markup
/// (`data-id` attributes), so hosts can resolve them without knowing
/// the widget's types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hit {
    /// Remove button inside an item chip
    RemoveButton(u32),
    /// An item chip
    Item(u32),
    /// A choice in the dropdown
    Choice(u32),
    /// Dropdown area that is not a choice (headings, notices, padding)
    Dropdown,
    /// The search/text input
    Input,
    /// Anywhere else inside the picker container
    Widget,
    /// Outside the picker
    Outside,
}

impl Hit {
    pub fn is_inside(self) -> bool {
        !matches!(self, Hit::Outside)
    }

    pub fn is_in_dropdown(self) -> bool {
        matches!(self, Hit::Choice(_) | Hit::Dropdown)
    }
}

/// Which focusable part of the picker an event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Input,
    Container,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

impl Key {
    /// Characters that open a closed select dropdown when typed.
    pub fn opens_dropdown(self) -> bool {
        match self {
            Key::Char(c) => c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '),
            _ => false,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Key::Up | Key::Down | Key::PageUp | Key::PageDown)
    }

    pub fn is_delete(self) -> bool {
        matches!(self, Key::Backspace | Key::Delete)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, Super/Windows elsewhere
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            meta: mods.contains(KeyModifiers::SUPER) || mods.contains(KeyModifiers::META),
        }
    }
}

impl From<crossterm::event::KeyEvent> for Event {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Event::Key {
            key: event.code.into(),
            modifiers: event.modifiers.into(),
        }
    }
}
