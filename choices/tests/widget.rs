use std::cell::RefCell;
use std::rc::Rc;

use choices::prelude::*;
use choices::render::PassedValue;

fn text_picker(options: Options) -> Choices<HeadlessHost> {
    Choices::new(PassedElement::text(), options, HeadlessHost::default()).unwrap()
}

fn select_one(values: &[&str]) -> Choices<HeadlessHost> {
    let options = values.iter().map(|v| OptionSpec::new(*v)).collect();
    Choices::new(
        PassedElement::select_one(options),
        Options::default(),
        HeadlessHost::default(),
    )
    .unwrap()
}

fn select_multiple(values: &[&str]) -> Choices<HeadlessHost> {
    let options = values.iter().map(|v| OptionSpec::new(*v)).collect();
    Choices::new(
        PassedElement::select_multiple(options),
        Options::default(),
        HeadlessHost::default(),
    )
    .unwrap()
}

fn type_text(picker: &mut Choices<HeadlessHost>, text: &str) {
    for c in text.chars() {
        picker.handle_event(&Event::char(c));
    }
}

fn press(picker: &mut Choices<HeadlessHost>, key: Key) -> EventOutcome {
    picker.handle_event(&Event::key(key))
}

fn add(picker: &mut Choices<HeadlessHost>, text: &str) {
    type_text(picker, text);
    press(picker, Key::Enter);
}

// ============================================================================
// Text input policy
// ============================================================================

#[test]
fn test_max_item_count_blocks_third_item() {
    let mut picker = text_picker(Options::default().max_item_count(2));
    add(&mut picker, "a");
    add(&mut picker, "b");
    add(&mut picker, "c");

    assert_eq!(picker.value(), vec!["a", "b"]);
    assert_eq!(picker.input_value(), "c");
    assert_eq!(picker.notice(), Some("Only 2 values can be added."));
    assert_eq!(picker.host().view.notice(), Some("Only 2 values can be added."));
    assert!(picker.dropdown_state().is_open());
}

#[test]
fn test_regex_filter_rejects_silently() {
    let mut picker = text_picker(Options::default().regex_filter("^[0-9]+$"));
    add(&mut picker, "abc");
    assert!(picker.value().is_empty());
    assert_eq!(picker.notice(), None);
    assert!(!picker.dropdown_state().is_open());

    picker.clear_input();
    add(&mut picker, "123");
    assert_eq!(picker.value(), vec!["123"]);
    assert_eq!(picker.input_value(), "");
}

#[test]
fn test_duplicate_add_is_noop_when_disallowed() {
    let mut picker = text_picker(Options::default().duplicate_items(false));
    add(&mut picker, "a");
    add(&mut picker, "a");

    assert_eq!(picker.value(), vec!["a"]);
    assert_eq!(picker.store().items().len(), 1);
    assert_eq!(picker.notice(), Some("Only unique values can be added."));
}

#[test]
fn test_duplicates_allowed_by_default() {
    let mut picker = text_picker(Options::default());
    add(&mut picker, "a");
    add(&mut picker, "a");
    assert_eq!(picker.value(), vec!["a", "a"]);
}

#[test]
fn test_typing_shows_add_notice() {
    let mut picker = text_picker(Options::default());
    type_text(&mut picker, "hi");
    assert_eq!(picker.notice(), Some("Press Enter to add <b>\"hi\"</b>"));
    assert!(picker.dropdown_state().is_open());

    press(&mut picker, Key::Backspace);
    press(&mut picker, Key::Backspace);
    assert_eq!(picker.notice(), None);
    assert!(!picker.dropdown_state().is_open());
}

#[test]
fn test_values_are_trimmed_and_decorated() {
    let mut options = Options::default();
    options.prepend_value = Some("#".into());
    let mut picker = text_picker(options);
    add(&mut picker, "  tag ");
    assert_eq!(picker.value(), vec!["#tag"]);
}

#[test]
fn test_text_value_is_mirrored_with_delimiter() {
    let mut picker = text_picker(Options::default().items(["a", "b"]));
    assert_eq!(
        picker.host().view.passed_value,
        Some(PassedValue::Text("a,b".into()))
    );
    add(&mut picker, "c");
    assert_eq!(
        picker.host().view.passed_value,
        Some(PassedValue::Text("a,b,c".into()))
    );
}

#[test]
fn test_element_value_seeds_items_after_option_items() {
    let picker = Choices::new(
        PassedElement::text().with_value("x, y"),
        Options::default().items(["a"]),
        HeadlessHost::default(),
    )
    .unwrap();
    assert_eq!(picker.value(), vec!["a", "x", "y"]);
}

// ============================================================================
// Deleting
// ============================================================================

#[test]
fn test_backspace_edits_last_item() {
    let mut picker = text_picker(Options::default().edit_items(true).items(["foo"]));
    press(&mut picker, Key::Backspace);

    assert_eq!(picker.input_value(), "foo");
    assert_eq!(picker.store().active_item_count(), 0);
}

#[test]
fn test_backspace_removes_last_item() {
    let mut picker = text_picker(Options::default().items(["a", "b"]));
    let outcome = press(&mut picker, Key::Backspace);

    assert!(outcome.prevent_default);
    assert_eq!(picker.value(), vec!["a"]);
    assert_eq!(picker.input_value(), "");
}

#[test]
fn test_backspace_with_text_edits_input() {
    let mut picker = text_picker(Options::default().items(["a"]));
    type_text(&mut picker, "xy");
    press(&mut picker, Key::Backspace);

    assert_eq!(picker.input_value(), "x");
    assert_eq!(picker.value(), vec!["a"]);
}

#[test]
fn test_select_all_then_delete_removes_everything() {
    let mut picker = text_picker(Options::default().items(["a", "b", "c"]));
    picker.handle_event(&Event::Key {
        key: Key::Char('a'),
        modifiers: Modifiers::ctrl(),
    });
    assert_eq!(picker.store().selected_items().count(), 3);
    assert_eq!(picker.input_value(), "");

    press(&mut picker, Key::Delete);
    assert!(picker.value().is_empty());
}

#[test]
fn test_delete_respects_remove_items() {
    let mut options = Options::default().items(["a"]);
    options.remove_items = false;
    let mut picker = text_picker(options);
    press(&mut picker, Key::Backspace);
    assert_eq!(picker.value(), vec!["a"]);
}

// ============================================================================
// Select one
// ============================================================================

#[test]
fn test_select_one_defaults_to_first_option() {
    let picker = select_one(&["x", "y"]);
    assert_eq!(picker.value(), vec!["x"]);
}

#[test]
fn test_select_one_honours_selected_option() {
    let picker = Choices::new(
        PassedElement::select_one(vec![
            OptionSpec::new("x").disabled(),
            OptionSpec::new("y"),
            OptionSpec::new("z").selected(),
        ]),
        Options::default(),
        HeadlessHost::default(),
    )
    .unwrap();
    assert_eq!(picker.value(), vec!["z"]);
}

#[test]
fn test_select_one_click_replaces_item() {
    let mut picker = select_one(&["x", "y"]);
    picker.show_dropdown();
    picker.handle_event(&Event::click(Hit::Choice(2)));

    assert_eq!(picker.value(), vec!["y"]);
    assert_eq!(picker.store().active_item_count(), 1);
    assert_eq!(picker.dropdown_state(), DropdownState::Closed);
    assert!(!picker.store().choice_by_id(ChoiceId(1)).unwrap().selected);
}

#[test]
fn test_select_one_enter_opens_then_commits() {
    let mut picker = select_one(&["a", "b", "c"]);
    press(&mut picker, Key::Enter);
    assert!(picker.dropdown_state().is_open());

    press(&mut picker, Key::Down);
    press(&mut picker, Key::Enter);
    assert_eq!(picker.value(), vec!["b"]);
    assert_eq!(picker.dropdown_state(), DropdownState::Closed);
}

#[test]
fn test_select_one_keeps_selected_choice_visible() {
    let picker = select_one(&["a", "b"]);
    assert_eq!(picker.host().view.choice_labels(), vec!["a", "b"]);
}

#[test]
fn test_select_one_down_opens_dropdown() {
    let mut picker = select_one(&["a", "b"]);
    let outcome = press(&mut picker, Key::Down);
    assert!(outcome.prevent_default);
    assert!(picker.dropdown_state().is_open());
}

#[test]
fn test_typing_opens_select_dropdown() {
    let mut picker = select_one(&["apple", "banana"]);
    type_text(&mut picker, "b");
    assert!(picker.dropdown_state().is_open());
    assert_eq!(picker.host().view.choice_labels(), vec!["banana"]);
}

// ============================================================================
// Select multiple
// ============================================================================

#[test]
fn test_multiple_hides_selected_choices() {
    let mut picker = select_multiple(&["a", "b", "c"]);
    picker.handle_event(&Event::click(Hit::Choice(2)));

    assert_eq!(picker.value(), vec!["b"]);
    assert_eq!(picker.host().view.choice_labels(), vec!["a", "c"]);
}

#[test]
fn test_clicking_selected_choice_is_ignored() {
    let mut picker = select_multiple(&["a", "b"]);
    picker.handle_event(&Event::click(Hit::Choice(1)));
    picker.handle_event(&Event::click(Hit::Choice(1)));
    assert_eq!(picker.value(), vec!["a"]);
}

#[test]
fn test_disabled_choice_cannot_be_committed() {
    let mut picker = Choices::new(
        PassedElement::select_multiple(vec![OptionSpec::new("a").disabled(), OptionSpec::new("b")]),
        Options::default(),
        HeadlessHost::default(),
    )
    .unwrap();
    picker.handle_event(&Event::click(Hit::Choice(1)));
    assert!(picker.value().is_empty());
}

#[test]
fn test_multiple_respects_item_limit() {
    let mut picker = Choices::new(
        PassedElement::select_multiple(vec![
            OptionSpec::new("a"),
            OptionSpec::new("b"),
            OptionSpec::new("c"),
        ]),
        Options::default().max_item_count(2),
        HeadlessHost::default(),
    )
    .unwrap();
    for id in 1..=3 {
        picker.handle_event(&Event::click(Hit::Choice(id)));
    }
    assert_eq!(picker.value(), vec!["a", "b"]);
    assert_eq!(picker.notice(), Some("Only 2 values can be added."));
}

#[test]
fn test_removal_clears_stale_limit_notice() {
    let mut picker = Choices::new(
        PassedElement::select_multiple(vec![
            OptionSpec::new("a"),
            OptionSpec::new("b"),
            OptionSpec::new("c"),
        ]),
        Options::default().max_item_count(1).remove_item_button(true),
        HeadlessHost::default(),
    )
    .unwrap();
    picker.handle_event(&Event::click(Hit::Choice(1)));
    picker.handle_event(&Event::click(Hit::Choice(2)));
    assert_eq!(picker.notice(), Some("Only 1 values can be added."));
    assert!(picker.host().view.choice_labels().is_empty());

    picker.handle_event(&Event::click(Hit::RemoveButton(1)));
    assert!(picker.value().is_empty());
    assert_eq!(picker.notice(), None);
    assert_eq!(picker.host().view.choice_labels(), vec!["a", "b", "c"]);
}

#[test]
fn test_closing_dropdown_clears_limit_notice() {
    let mut picker = Choices::new(
        PassedElement::select_multiple(vec![OptionSpec::new("a"), OptionSpec::new("b")]),
        Options::default().max_item_count(1),
        HeadlessHost::default(),
    )
    .unwrap();
    picker.handle_event(&Event::click(Hit::Choice(1)));
    picker.handle_event(&Event::click(Hit::Choice(2)));
    assert!(picker.notice().is_some());

    picker.hide_dropdown();
    assert_eq!(picker.notice(), None);
    picker.show_dropdown();
    assert_eq!(picker.host().view.choice_labels(), vec!["b"]);
}

#[test]
fn test_click_outside_blurs_input() {
    let mut picker = select_multiple(&["a"]);
    picker.handle_event(&Event::click(Hit::Widget));
    assert!(picker.host().input_focused);

    picker.handle_event(&Event::click(Hit::Outside));
    assert!(!picker.host().input_focused);
    assert!(!picker.dropdown_state().is_open());
}

#[test]
fn test_focus_opens_multiple_dropdown() {
    let mut picker = select_multiple(&["a"]);
    picker.handle_event(&Event::Focus {
        target: FocusTarget::Input,
    });
    assert!(picker.dropdown_state().is_open());
    assert!(picker.host().view.container.focused);
}

#[test]
fn test_select_value_is_mirrored_as_options() {
    let mut picker = select_multiple(&["a", "b"]);
    picker.handle_event(&Event::click(Hit::Choice(2)));
    match &picker.host().view.passed_value {
        Some(PassedValue::Options { options, markup }) => {
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].value, "b");
            assert!(options[0].selected);
            assert_eq!(markup, r#"<option value="b" selected>b</option>"#);
        }
        other => panic!("unexpected passed value {other:?}"),
    }
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_item_click_toggles_selection() {
    let mut picker = text_picker(Options::default().items(["a", "b"]));
    picker.handle_event(&Event::click(Hit::Item(1)));
    picker.handle_event(&Event::click(Hit::Item(2)));

    let selected: Vec<ItemId> = picker.store().selected_items().map(|i| i.id).collect();
    assert_eq!(selected, vec![ItemId(2)]);

    picker.handle_event(&Event::MouseDown {
        hit: Hit::Item(1),
        modifiers: Modifiers::shift(),
    });
    assert_eq!(picker.store().selected_items().count(), 2);

    picker.handle_event(&Event::MouseDown {
        hit: Hit::Item(1),
        modifiers: Modifiers::shift(),
    });
    let selected: Vec<ItemId> = picker.store().selected_items().map(|i| i.id).collect();
    assert_eq!(selected, vec![ItemId(2)]);
}

#[test]
fn test_remove_button_needs_option() {
    let mut picker = text_picker(Options::default().items(["a"]));
    picker.handle_event(&Event::click(Hit::RemoveButton(1)));
    assert_eq!(picker.value(), vec!["a"]);

    let mut picker = text_picker(Options::default().items(["a"]).remove_item_button(true));
    picker.handle_event(&Event::click(Hit::RemoveButton(1)));
    assert!(picker.value().is_empty());
}

#[test]
fn test_click_outside_deselects_and_closes() {
    let mut picker = select_multiple(&["a", "b"]);
    picker.handle_event(&Event::click(Hit::Choice(1)));
    picker.handle_event(&Event::click(Hit::Item(1)));
    picker.show_dropdown();

    let outcome = picker.handle_event(&Event::click(Hit::Outside));
    assert!(!outcome.consumed);
    assert_eq!(picker.store().selected_items().count(), 0);
    assert!(!picker.dropdown_state().is_open());
}

#[test]
fn test_widget_click_opens_select_dropdown() {
    let mut picker = select_multiple(&["a"]);
    let outcome = picker.handle_event(&Event::click(Hit::Widget));
    assert!(outcome.prevent_default);
    assert!(picker.dropdown_state().is_open());
}

#[test]
fn test_input_click_is_not_prevented() {
    let mut picker = text_picker(Options::default());
    let outcome = picker.handle_event(&Event::click(Hit::Input));
    assert!(outcome.consumed);
    assert!(!outcome.prevent_default);
}

#[test]
fn test_mouse_over_moves_highlight() {
    let mut picker = select_multiple(&["a", "b", "c"]);
    picker.show_dropdown();
    picker.handle_event(&Event::MouseOver { hit: Hit::Choice(3) });
    assert_eq!(picker.highlighted(), Some(ChoiceId(3)));
}

// ============================================================================
// Keyboard navigation
// ============================================================================

#[test]
fn test_arrow_keys_stop_at_the_ends() {
    let mut picker = select_multiple(&["a", "b", "c"]);
    picker.show_dropdown();
    assert_eq!(picker.highlighted(), Some(ChoiceId(1)));

    press(&mut picker, Key::Up);
    assert_eq!(picker.highlighted(), Some(ChoiceId(1)));
    press(&mut picker, Key::Down);
    press(&mut picker, Key::Down);
    press(&mut picker, Key::Down);
    assert_eq!(picker.highlighted(), Some(ChoiceId(3)));
    press(&mut picker, Key::Up);
    assert_eq!(picker.highlighted(), Some(ChoiceId(2)));
}

#[test]
fn test_page_keys_jump_to_ends() {
    let mut picker = select_multiple(&["a", "b", "c", "d"]);
    picker.show_dropdown();

    press(&mut picker, Key::PageDown);
    assert_eq!(picker.highlighted(), Some(ChoiceId(4)));

    picker.handle_event(&Event::Key {
        key: Key::Up,
        modifiers: Modifiers::meta(),
    });
    assert_eq!(picker.highlighted(), Some(ChoiceId(1)));
}

#[test]
fn test_enter_commits_highlighted_choice() {
    let mut picker = select_multiple(&["a", "b", "c"]);
    picker.show_dropdown();
    press(&mut picker, Key::Down);
    press(&mut picker, Key::Enter);

    assert_eq!(picker.value(), vec!["b"]);
    assert!(picker.dropdown_state().is_open());
}

#[test]
fn test_escape_closes_dropdown() {
    let mut picker = select_multiple(&["a"]);
    picker.show_dropdown();
    assert!(press(&mut picker, Key::Escape).consumed);
    assert!(!picker.dropdown_state().is_open());
    assert!(!press(&mut picker, Key::Escape).consumed);
}

#[test]
fn test_multiple_arrows_ignored_while_closed() {
    let mut picker = select_multiple(&["a"]);
    assert!(!press(&mut picker, Key::Down).consumed);
    assert!(!picker.dropdown_state().is_open());
}

#[test]
fn test_dropdown_flips_without_room() {
    let mut host = HeadlessHost::default();
    host.viewport.dropdown_top = 90;
    host.viewport.dropdown_height = 20;
    host.viewport.window_height = 100;
    let mut picker = Choices::new(
        PassedElement::select_multiple(vec![OptionSpec::new("a")]),
        Options::default(),
        host,
    )
    .unwrap();

    picker.show_dropdown();
    assert_eq!(picker.dropdown_state(), DropdownState::Flipped);
    assert!(picker.host().view.container.is_flipped());
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_filters_and_restores() {
    let mut picker = select_multiple(&["Apple", "Banana", "Cherry"]);
    type_text(&mut picker, "ban");
    assert!(picker.machine().is_searching());
    assert_eq!(picker.host().view.choice_labels(), vec!["Banana"]);

    for _ in 0..3 {
        press(&mut picker, Key::Backspace);
    }
    assert!(!picker.machine().is_searching());
    assert_eq!(
        picker.host().view.choice_labels(),
        vec!["Apple", "Banana", "Cherry"]
    );
}

#[test]
fn test_search_without_matches_shows_notice() {
    let mut picker = select_multiple(&["Apple"]);
    type_text(&mut picker, "zzz");
    assert!(picker.host().view.choice_labels().is_empty());
    assert_eq!(picker.host().view.notice(), Some("No results found"));
}

#[test]
fn test_trailing_space_does_not_search_again() {
    let mut picker = select_multiple(&["Apple", "Banana"]);
    type_text(&mut picker, "ap");
    let searches = picker.machine().last_query().map(str::to_string);
    type_text(&mut picker, " ");
    assert_eq!(picker.machine().last_query().map(str::to_string), searches);
}

#[test]
fn test_search_floor_delays_search() {
    let mut options = Options::default();
    options.search_floor = 3;
    let mut picker = Choices::new(
        PassedElement::select_multiple(vec![OptionSpec::new("Apple"), OptionSpec::new("Banana")]),
        options,
        HeadlessHost::default(),
    )
    .unwrap();
    type_text(&mut picker, "ap");
    assert!(!picker.machine().is_searching());
    type_text(&mut picker, "p");
    assert!(picker.machine().is_searching());
}

#[test]
fn test_disabled_search_never_filters() {
    let mut options = Options::default();
    options.search = false;
    let mut picker = Choices::new(
        PassedElement::select_multiple(vec![OptionSpec::new("Apple"), OptionSpec::new("Banana")]),
        options,
        HeadlessHost::default(),
    )
    .unwrap();
    type_text(&mut picker, "ban");
    assert!(!picker.machine().is_searching());
    assert_eq!(picker.host().view.choice_labels().len(), 2);
}

#[test]
fn test_commit_clears_search() {
    let mut picker = select_multiple(&["Apple", "Banana", "Cherry"]);
    type_text(&mut picker, "ch");
    press(&mut picker, Key::Enter);

    assert_eq!(picker.value(), vec!["Cherry"]);
    assert_eq!(picker.input_value(), "");
    assert!(!picker.machine().is_searching());
    assert_eq!(picker.host().view.choice_labels(), vec!["Apple", "Banana"]);
}

// ============================================================================
// Paste and input
// ============================================================================

#[test]
fn test_paste_blocked_when_disabled() {
    let mut options = Options::default();
    options.paste = false;
    let mut picker = text_picker(options);
    let outcome = picker.handle_event(&Event::Paste { text: "abc".into() });
    assert!(outcome.prevent_default);
    assert_eq!(picker.input_value(), "");
}

#[test]
fn test_paste_inserts_text() {
    let mut picker = text_picker(Options::default());
    picker.handle_event(&Event::Paste { text: "abc".into() });
    assert_eq!(picker.input_value(), "abc");
}

#[test]
fn test_input_event_replaces_text() {
    let mut picker = text_picker(Options::default());
    picker.handle_event(&Event::Input { text: "hello".into() });
    assert_eq!(picker.input_value(), "hello");
    press(&mut picker, Key::Enter);
    assert_eq!(picker.value(), vec!["hello"]);
}

// ============================================================================
// Public API
// ============================================================================

#[test]
fn test_select_and_deselect_item() {
    let mut picker = text_picker(Options::default().items(["a", "b"]));
    picker.select_item(ItemId(1));
    assert!(picker.store().item(ItemId(1)).unwrap().selected);
    picker.deselect_item(ItemId(1));
    assert!(!picker.store().item(ItemId(1)).unwrap().selected);

    // Unknown ids are logged and ignored
    picker.select_item(ItemId(42));
    assert_eq!(picker.store().selected_items().count(), 0);
}

#[test]
fn test_highlight_all_and_remove_selected() {
    let mut picker = text_picker(Options::default().items(["a", "b"]));
    picker.highlight_all().remove_selected_items();
    assert!(picker.value().is_empty());
}

#[test]
fn test_remove_items_by_value() {
    let mut picker = text_picker(Options::default().items(["a", "b", "a"]));
    picker.remove_items_by_value("a");
    assert_eq!(picker.value(), vec!["b"]);
}

#[test]
fn test_remove_active_items_with_exclusion() {
    let mut picker = text_picker(Options::default().items(["a", "b", "c"]));
    picker.remove_active_items(Some(ItemId(2)));
    assert_eq!(picker.value(), vec!["b"]);
    picker.remove_active_items(None);
    assert!(picker.value().is_empty());
}

#[test]
fn test_set_value_on_text_and_select() {
    let mut picker = text_picker(Options::default());
    picker.set_value(["a", "b"]);
    assert_eq!(picker.value(), vec!["a", "b"]);

    let mut picker = select_multiple(&["x"]);
    picker.set_value([("y", "Why")]);
    assert_eq!(picker.value(), vec!["y"]);
    assert_eq!(picker.store().choices().len(), 2);
}

#[test]
fn test_set_value_by_choice() {
    let mut picker = select_multiple(&["a", "b", "c"]);
    picker.set_value_by_choice(["c", "missing", "a"]);
    assert_eq!(picker.value(), vec!["c", "a"]);
}

#[test]
fn test_set_value_by_choice_unsupported_on_text() {
    let mut picker = text_picker(Options::default());
    picker.set_value_by_choice(["a"]);
    assert!(picker.value().is_empty());
}

#[test]
fn test_set_choices_appends() {
    let mut picker = select_multiple(&["a"]);
    picker.set_choices(vec![OptionSpec::new("b"), OptionSpec::new("c").selected()]);
    assert_eq!(picker.store().choices().len(), 3);
    assert_eq!(picker.value(), vec!["c"]);
}

#[test]
fn test_clear_value_empties_store_and_input() {
    let mut picker = text_picker(Options::default().items(["a"]));
    type_text(&mut picker, "zz");
    picker.clear_value();
    assert!(picker.store().items().is_empty());
    assert_eq!(picker.input_value(), "");
}

#[test]
fn test_toggle_dropdown() {
    let mut picker = select_multiple(&["a"]);
    picker.toggle_dropdown();
    assert!(picker.dropdown_state().is_open());
    picker.toggle_dropdown();
    assert!(!picker.dropdown_state().is_open());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_init_is_idempotent() {
    let mut picker = text_picker(Options::default().items(["a"]));
    picker.init();
    assert_eq!(picker.value(), vec!["a"]);
    assert_eq!(picker.lifecycle(), Lifecycle::Initialised);
}

#[test]
fn test_disable_ignores_events() {
    let mut picker = text_picker(Options::default());
    picker.disable();
    assert_eq!(picker.lifecycle(), Lifecycle::Disabled);
    assert!(picker.host().view.container.disabled);
    assert!(!picker.handle_event(&Event::char('a')).consumed);
    assert_eq!(picker.input_value(), "");

    picker.enable();
    picker.handle_event(&Event::char('a'));
    assert_eq!(picker.input_value(), "a");
}

#[test]
fn test_disabled_element_starts_disabled() {
    let mut element = PassedElement::text();
    element.disabled = true;
    let picker = Choices::new(element, Options::default(), HeadlessHost::default()).unwrap();
    assert_eq!(picker.lifecycle(), Lifecycle::Disabled);
}

#[test]
fn test_init_after_destroy_repopulates() {
    let mut picker = text_picker(Options::default().items(["a"]));
    picker.destroy();
    picker.init();

    assert_eq!(picker.lifecycle(), Lifecycle::Initialised);
    assert_eq!(picker.value(), vec!["a"]);
    assert_eq!(picker.host().view.item_labels(), vec!["a"]);
    picker.handle_event(&Event::char('x'));
    assert_eq!(picker.input_value(), "x");
}

#[test]
fn test_destroy_drops_state() {
    let mut picker = text_picker(Options::default().items(["a"]));
    picker.destroy();
    assert_eq!(picker.lifecycle(), Lifecycle::Destroyed);
    assert!(picker.value().is_empty());

    picker.set_value(["b"]);
    assert!(picker.value().is_empty());
    assert!(!picker.handle_event(&Event::char('x')).consumed);
}

struct NoHost;

impl Host for NoHost {
    fn supports(&self) -> bool {
        false
    }

    fn viewport(&self) -> pickdom::Viewport {
        pickdom::Viewport::default()
    }

    fn dropdown_metrics(&self) -> pickdom::ScrollMetrics {
        pickdom::ScrollMetrics::default()
    }

    fn choice_bounds(&self, _id: ChoiceId) -> Option<pickdom::Bounds> {
        None
    }

    fn set_scroll_top(&mut self, _scroll_top: i32) {}

    fn render(&mut self, _frame: &Frame) {
        panic!("unsupported host must never render");
    }
}

#[test]
fn test_unsupported_host_stays_inert() {
    let mut picker = Choices::new(PassedElement::text(), Options::default(), NoHost).unwrap();
    assert_eq!(picker.lifecycle(), Lifecycle::Unsupported);
    assert!(!picker.handle_event(&Event::char('a')).consumed);
    picker.set_value(["a"]);
    assert!(picker.value().is_empty());
}

// ============================================================================
// Callbacks
// ============================================================================

#[test]
fn test_callbacks_fire() {
    let added = Rc::new(RefCell::new(Vec::new()));
    let removed = Rc::new(RefCell::new(Vec::new()));
    let changes = Rc::new(RefCell::new(Vec::new()));
    let inits = Rc::new(RefCell::new(0));

    let (a, r, c, i) = (
        Rc::clone(&added),
        Rc::clone(&removed),
        Rc::clone(&changes),
        Rc::clone(&inits),
    );
    let mut picker = ChoicesBuilder::new(PassedElement::text())
        .options(Options::default().items(["preset"]))
        .on_init(move || *i.borrow_mut() += 1)
        .on_add_item(move |id, value, _element| a.borrow_mut().push((id, value.to_string())))
        .on_remove_item(move |_id, value, _element| r.borrow_mut().push(value.to_string()))
        .on_change(move |value| c.borrow_mut().push(value.to_string()))
        .build(HeadlessHost::default())
        .unwrap();

    add(&mut picker, "typed");
    press(&mut picker, Key::Backspace);

    assert_eq!(*inits.borrow(), 1);
    assert_eq!(
        *added.borrow(),
        vec![(ItemId(1), "preset".to_string()), (ItemId(2), "typed".to_string())]
    );
    assert_eq!(*removed.borrow(), vec!["typed"]);
    // Presets are not user changes
    assert_eq!(*changes.borrow(), vec!["typed", "typed"]);
}

#[test]
fn test_subscribe_sees_dispatches() {
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let mut picker = text_picker(Options::default());
    picker.subscribe(move |_, _| *counter.borrow_mut() += 1);
    add(&mut picker, "a");
    assert_eq!(*count.borrow(), 1);
}
