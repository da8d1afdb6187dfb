//! Blocking input with timeout.
//!
//! crossterm decodes escape sequences; this crate maps its events onto the
//! `core-events` vocabulary. Keys the editor has no use for (function keys,
//! media keys, releases) map to `None` and are dropped by the caller.

use anyhow::Result;
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    self, Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};
use std::time::Duration;

/// Wait up to `timeout` for one event. `Ok(None)` on timeout or for an event
/// that has no mapping.
pub fn read_event(timeout: Duration) -> Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(map_event(event::read()?))
}

pub fn map_event(ev: CEvent) -> Option<InputEvent> {
    match ev {
        CEvent::Key(key) => map_key(&key).map(InputEvent::Key),
        CEvent::Resize(w, h) => {
            tracing::debug!(target: "input", width = w, height = h, "resize");
            Some(InputEvent::Resize(w, h))
        }
        _ => None,
    }
}

pub fn map_key(key: &CKeyEvent) -> Option<KeyEvent> {
    if matches!(key.kind, CKind::Release) {
        return None;
    }
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        other => {
            tracing::trace!(target: "input", code = ?other, "unmapped_key");
            return None;
        }
    };
    let mapped = KeyEvent::new(code, map_mods(key.modifiers));
    tracing::trace!(target: "input", key = %mapped, "key");
    Some(mapped)
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
