//! Editor model: the document-centric `EditorState` paired with the single
//! `View` that scrolls over it.
//!
//! Splitting the two keeps edit semantics (rows, dirty flag, messages) apart
//! from screen geometry (cursor, offsets, terminal size). Operations that
//! need both borrow them through [`EditorModel::split_state_and_view`].

use core_state::EditorState;

mod view;
pub use view::{Direction, RESERVED_ROWS, View};

pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, view: View) -> Self {
        Self { state, view }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Disjoint mutable borrows of state and view for operations that mutate
    /// the document and then reposition the cursor.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Document;

    #[test]
    fn split_borrows_are_independent() {
        let doc = Document::from_lines(["abc", "de"]);
        let mut model = EditorModel::new(EditorState::new(doc), View::new(20, 10));
        let (state, view) = model.split_state_and_view();
        view.move_down(&state.document);
        state.mark_dirty();
        assert_eq!(model.view().current_y(), 1);
        assert!(model.state().dirty);
    }
}
