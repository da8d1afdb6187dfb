//! Row mutation at the cursor.
//!
//! The view addresses rendered columns; rows are edited at raw columns. Every
//! handler translates with `Row::raw_column` first and places the cursor back
//! through `Row::rendered_column`, so tabs are stepped over as a unit.

use super::DispatchResult;
use crate::EditKind;
use core_model::View;
use core_state::EditorState;
use core_text::{DeleteOutcome, Document, Row};

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let (y, x) = (view.current_y(), view.current_x());
    let changed = match kind {
        EditKind::InsertByte(ch) => insert_byte(state, view, ch),
        EditKind::InsertNewline => insert_newline(state, view),
        EditKind::Backspace => delete_backward(state, view),
        EditKind::DeleteForward => delete_forward(state, view),
    };
    tracing::trace!(target: "actions.dispatch", ?kind, line = y, col = x, to_line = view.current_y(), to_col = view.current_x(), changed, "edit");
    if changed {
        state.mark_dirty();
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

/// The only row the cursor can address past the end is the virtual first row
/// of an empty document; materialize it before editing.
fn ensure_row(doc: &mut Document, y: usize) {
    if y >= doc.len() {
        doc.insert_row(doc.len(), Row::new());
    }
}

fn insert_byte(state: &mut EditorState, view: &mut View, ch: u8) -> bool {
    let y = view.current_y();
    ensure_row(&mut state.document, y);
    let Some(row) = state.document.row_mut(y) else {
        return false;
    };
    let cx = row.raw_column(view.current_x());
    row.insert_char(cx, ch);
    view.set_cursor_x(row.rendered_column(cx + 1));
    true
}

fn insert_newline(state: &mut EditorState, view: &mut View) -> bool {
    let y = view.current_y();
    ensure_row(&mut state.document, y);
    let Some(row) = state.document.row_mut(y) else {
        return false;
    };
    let cx = row.raw_column(view.current_x());
    let suffix = row.raw()[cx..].to_vec();
    row.shrink(suffix.len());
    state.document.insert_row(y + 1, Row::from_bytes(suffix));
    view.set_cursor_y(y + 1);
    view.home();
    true
}

fn delete_backward(state: &mut EditorState, view: &mut View) -> bool {
    let y = view.current_y();
    let doc = &mut state.document;
    let Some(row) = doc.row_mut(y) else {
        return false;
    };
    let cx = row.raw_column(view.current_x());
    match row.delete_char(cx as isize - 1) {
        DeleteOutcome::DeletedAt(at) => {
            let rx = doc.row(y).map_or(0, |r| r.rendered_column(at));
            view.set_cursor_x(rx);
            true
        }
        DeleteOutcome::JoinPrevious if y > 0 => {
            let Some(current) = doc.delete_row(y) else {
                return false;
            };
            let Some(prev) = doc.row_mut(y - 1) else {
                return false;
            };
            let join_at = prev.rendered_len();
            prev.append(current.raw());
            view.set_cursor_y(y - 1);
            view.set_cursor_x(join_at);
            true
        }
        _ => false,
    }
}

fn delete_forward(state: &mut EditorState, view: &View) -> bool {
    let y = view.current_y();
    let doc = &mut state.document;
    let Some(row) = doc.row_mut(y) else {
        return false;
    };
    let cx = row.raw_column(view.current_x());
    match row.delete_char(cx as isize) {
        DeleteOutcome::DeletedAt(_) => true,
        DeleteOutcome::JoinNext if y + 1 < doc.len() => {
            let Some(next) = doc.delete_row(y + 1) else {
                return false;
            };
            if let Some(row) = doc.row_mut(y) {
                row.append(next.raw());
            }
            true
        }
        _ => false,
    }
}
