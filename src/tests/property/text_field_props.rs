//! Property-based tests for the single-line text field
//!
//! Tests invariants:
//! - Cursor stays on a char boundary for any edit sequence
//! - Typing a string then reading it back is lossless
//! - Whitespace-only content is never submitted

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;

use crate::tui::widgets::text_field::TextField;

fn arb_key() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        any::<char>()
            .prop_filter("printable", |c| !c.is_control())
            .prop_map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        Just(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        Just(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE)),
        Just(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
        Just(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
        Just(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)),
        Just(KeyEvent::new(KeyCode::End, KeyModifiers::NONE)),
        Just(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
    ]
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(keys in prop::collection::vec(arb_key(), 0..64)) {
        let mut field = TextField::new();
        for key in &keys {
            field.handle_key(key);
            prop_assert!(field.cursor() <= field.value().len());
            prop_assert!(field.value().is_char_boundary(field.cursor()));
        }
    }

    #[test]
    fn typed_text_round_trips(text in "\\PC{0,40}") {
        let mut field = TextField::new();
        for c in text.chars() {
            field.handle_key(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        prop_assert_eq!(field.value(), text.as_str());
    }

    #[test]
    fn blank_never_submitted(spaces in "[ \t]{0,10}") {
        let mut field = TextField::new();
        for c in spaces.chars() {
            field.insert(c);
        }
        prop_assert!(field.submitted().is_none());
    }
}
