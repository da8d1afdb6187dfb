#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{Action, DispatchResult, dispatch, translate_key};
use core_events::{KeyCode, KeyEvent};
use core_model::{EditorModel, View};
use core_state::EditorState;
use core_text::Document;

pub fn model(lines: &[&str], width: usize, height: usize) -> EditorModel {
    EditorModel::new(
        EditorState::new(Document::from_lines(lines.iter().copied())),
        View::new(width, height),
    )
}

/// Translate and dispatch one key the way the event loop does.
pub fn press(model: &mut EditorModel, key: KeyEvent) -> Option<DispatchResult> {
    let action = translate_key(&key, model.state().prompt.is_active())?;
    Some(dispatch(action, model))
}

pub fn press_code(model: &mut EditorModel, code: KeyCode) -> Option<DispatchResult> {
    press(model, KeyEvent::plain(code))
}

pub fn type_str(model: &mut EditorModel, text: &str) {
    for c in text.chars() {
        press_code(model, KeyCode::Char(c));
    }
}

pub fn apply_all(model: &mut EditorModel, actions: &[Action]) {
    for a in actions {
        dispatch(*a, model);
    }
}

pub fn lines(model: &EditorModel) -> Vec<String> {
    model
        .state()
        .document
        .rows()
        .iter()
        .map(|r| String::from_utf8_lossy(r.raw()).into_owned())
        .collect()
}

pub fn cursor(model: &EditorModel) -> (usize, usize) {
    (model.view().current_x(), model.view().current_y())
}

pub fn status(model: &EditorModel) -> Option<String> {
    model.state().status.as_ref().map(|m| m.text.clone())
}
