//! Stateless key -> Action translation.
//!
//! Two tables: the editing table and, while the save-as prompt is active, a
//! prompt table that swallows every key it understands. Keys with no mapping,
//! Alt chords included, translate to `None` and are ignored by the loop.

use crate::{Action, EditKind, MotionKind, PromptInput};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

fn printable(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}

pub fn translate_key(key: &KeyEvent, prompt_active: bool) -> Option<Action> {
    let action = if prompt_active {
        translate_prompt(key)
    } else {
        translate_edit(key)
    };
    tracing::trace!(target: "actions.translate", key = %key, prompt_active, ?action, "translate");
    action
}

fn translate_edit(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::ALT) {
        return None;
    }
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::Save),
            KeyCode::Char('h') => Some(Action::Edit(EditKind::Backspace)),
            KeyCode::Char('l') => Some(Action::Noop),
            KeyCode::Char(_) => None,
            _ => translate_plain(key.code),
        };
    }
    translate_plain(key.code)
}

fn translate_plain(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::PageUp => Action::Motion(MotionKind::PageUp),
        KeyCode::PageDown => Action::Motion(MotionKind::PageDown),
        KeyCode::Home => Action::Motion(MotionKind::Home),
        KeyCode::End => Action::Motion(MotionKind::End),
        KeyCode::Enter => Action::Edit(EditKind::InsertNewline),
        KeyCode::Backspace => Action::Edit(EditKind::Backspace),
        KeyCode::Delete => Action::Edit(EditKind::DeleteForward),
        KeyCode::Tab => Action::Edit(EditKind::InsertByte(b'\t')),
        KeyCode::Esc => Action::Noop,
        KeyCode::Char(c) if printable(c) => Action::Edit(EditKind::InsertByte(c as u8)),
        KeyCode::Char(_) => return None,
    };
    Some(action)
}

fn translate_prompt(key: &KeyEvent) -> Option<Action> {
    let input = match key.code {
        KeyCode::Enter => PromptInput::Submit,
        KeyCode::Esc => PromptInput::Cancel,
        KeyCode::Backspace | KeyCode::Delete => PromptInput::Backspace,
        KeyCode::Char('h') if key.mods.contains(KeyModifiers::CTRL) => PromptInput::Backspace,
        KeyCode::Char(c)
            if printable(c) && !key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) =>
        {
            PromptInput::Char(c)
        }
        _ => return None,
    };
    Some(Action::Prompt(input))
}
