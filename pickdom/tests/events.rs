use pickdom::{escape, ClassList, Event, Hit, Key, Modifiers, TextEdit, TextField};

// ============================================================================
// Keys and hits
// ============================================================================

#[test]
fn test_dropdown_opening_keys() {
    assert!(Key::Char('a').opens_dropdown());
    assert!(Key::Char('Z').opens_dropdown());
    assert!(Key::Char('7').opens_dropdown());
    assert!(Key::Char('-').opens_dropdown());
    assert!(Key::Char('_').opens_dropdown());
    assert!(Key::Char(' ').opens_dropdown());
    assert!(!Key::Char('!').opens_dropdown());
    assert!(!Key::Enter.opens_dropdown());
}

#[test]
fn test_hit_regions() {
    assert!(Hit::Choice(1).is_inside());
    assert!(Hit::Choice(1).is_in_dropdown());
    assert!(Hit::Dropdown.is_in_dropdown());
    assert!(!Hit::Item(1).is_in_dropdown());
    assert!(!Hit::Outside.is_inside());
}

#[test]
fn test_crossterm_key_event_conversion() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let event: Event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL).into();
    assert_eq!(
        event,
        Event::Key {
            key: Key::Char('a'),
            modifiers: Modifiers::ctrl(),
        }
    );

    let event: Event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE).into();
    assert_eq!(event, Event::key(Key::Escape));
}

#[test]
fn test_command_modifier() {
    assert!(Modifiers::ctrl().command());
    assert!(Modifiers::meta().command());
    assert!(!Modifiers::shift().command());
    assert!(Modifiers::new().none());
}

// ============================================================================
// Text field
// ============================================================================

#[test]
fn test_text_field_typing_and_backspace() {
    let mut field = TextField::default();
    assert_eq!(field.handle_key(Key::Char('h'), Modifiers::new()), TextEdit::Changed);
    assert_eq!(field.handle_key(Key::Char('é'), Modifiers::new()), TextEdit::Changed);
    assert_eq!(field.text(), "hé");

    assert_eq!(field.handle_key(Key::Backspace, Modifiers::new()), TextEdit::Changed);
    assert_eq!(field.text(), "h");
    assert_eq!(field.handle_key(Key::Backspace, Modifiers::new()), TextEdit::Changed);
    assert_eq!(field.handle_key(Key::Backspace, Modifiers::new()), TextEdit::Handled);
    assert!(field.is_empty());
}

#[test]
fn test_text_field_ctrl_chars_are_not_inserted() {
    let mut field = TextField::new("abc");
    assert_eq!(field.handle_key(Key::Char('a'), Modifiers::ctrl()), TextEdit::Ignored);
    assert_eq!(field.text(), "abc");
}

#[test]
fn test_text_field_delete_forward_and_cursor() {
    let mut field = TextField::new("abc");
    field.handle_key(Key::Home, Modifiers::new());
    assert_eq!(field.cursor(), 0);
    assert_eq!(field.handle_key(Key::Delete, Modifiers::new()), TextEdit::Changed);
    assert_eq!(field.text(), "bc");
    field.handle_key(Key::End, Modifiers::new());
    assert_eq!(field.handle_key(Key::Delete, Modifiers::new()), TextEdit::Handled);
    field.handle_key(Key::Left, Modifiers::new());
    field.insert_str("X");
    assert_eq!(field.text(), "bXc");
}

#[test]
fn test_text_field_width_uses_placeholder_when_longer() {
    let field = TextField::new("ab");
    assert_eq!(field.display_width(None), 3);
    assert_eq!(field.display_width(Some("Pick one")), 9);
}

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_escape() {
    assert_eq!(escape("plain"), "plain");
    assert_eq!(
        escape(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
}

#[test]
fn test_class_list_skips_empty_and_duplicates() {
    let classes = ClassList::new()
        .with("choices__item")
        .with("")
        .with_if(false, "is-highlighted")
        .with_if(true, "choices__item--selectable")
        .with("choices__item");
    assert_eq!(classes.to_string(), "choices__item choices__item--selectable");
}
