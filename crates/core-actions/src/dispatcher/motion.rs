use super::DispatchResult;
use crate::MotionKind;
use core_model::{Direction, View};
use core_state::EditorState;

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let doc = &state.document;
    let before = (view.current_x(), view.current_y(), view.cursor_x, view.cursor_y);
    match kind {
        MotionKind::Up => view.move_cursor(Direction::Up, doc),
        MotionKind::Down => view.move_cursor(Direction::Down, doc),
        MotionKind::Left => view.move_cursor(Direction::Left, doc),
        MotionKind::Right => view.move_cursor(Direction::Right, doc),
        MotionKind::PageUp => view.page(Direction::Up, doc),
        MotionKind::PageDown => view.page(Direction::Down, doc),
        MotionKind::Home => view.home(),
        MotionKind::End => view.end(doc),
    }
    let after = (view.current_x(), view.current_y(), view.cursor_x, view.cursor_y);
    tracing::trace!(target: "actions.dispatch", ?kind, from_x = before.0, from_y = before.1, to_x = after.0, to_y = after.1, "motion");
    if before == after {
        DispatchResult::clean()
    } else {
        DispatchResult::dirty()
    }
}
