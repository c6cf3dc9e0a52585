use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pass::CharacterClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle(CharacterClass),
    Step(isize),
    Generate,
    Copy,
    Redraw,
    Quit,
}

/// Map a key press to a widget action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('1') => Action::Toggle(CharacterClass::Uppercase),
        KeyCode::Char('2') => Action::Toggle(CharacterClass::Lowercase),
        KeyCode::Char('3') => Action::Toggle(CharacterClass::Digit),
        KeyCode::Char('4') => Action::Toggle(CharacterClass::Symbol),
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => Action::Step(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            Action::Step(1)
        }
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Wait up to `timeout` for the next action. `Ok(None)` on timeout or on
/// input that maps to nothing.
pub fn next_action(timeout: Duration) -> io::Result<Option<Action>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(action_for(key)),
        Event::Resize(_, _) => Ok(Some(Action::Redraw)),
        _ => Ok(None),
    }
}
