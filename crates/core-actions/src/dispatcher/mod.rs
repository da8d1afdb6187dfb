//! Dispatcher applying `Action` to the editor model.
//!
//! Sub-modules:
//! * `motion` - cursor movement through the `View`
//! * `edit`   - row mutation followed by cursor repositioning
//! * `file`   - save, save-as prompt and the quit confirmation gate

use crate::Action;
use core_model::EditorModel;

mod edit;
mod file;
mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Something visible changed and the next frame should reflect it.
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action. Every action other than `Quit` re-arms the quit gate.
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_state_and_view();
    if !matches!(action, Action::Quit) {
        state.reset_quit_gate();
    }
    tracing::trace!(target: "actions.dispatch", ?action, "dispatch");
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Prompt(input) => file::handle_prompt(input, state),
        Action::Save => file::handle_save(state),
        Action::Quit => file::handle_quit(state),
        Action::Noop => DispatchResult::clean(),
    }
}
