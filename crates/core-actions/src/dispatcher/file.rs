//! Save, the save-as prompt and the quit confirmation gate.

use super::DispatchResult;
use crate::PromptInput;
use crate::io_ops::{self, IoError};
use core_state::EditorState;
use std::path::PathBuf;

pub(crate) fn handle_save(state: &mut EditorState) -> DispatchResult {
    if state.file_name.is_none() {
        tracing::debug!(target: "actions.dispatch", "save_prompt_begin");
        state.prompt.begin();
        return DispatchResult::dirty();
    }
    save_now(state);
    DispatchResult::dirty()
}

fn save_now(state: &mut EditorState) {
    match io_ops::write_file(state) {
        Ok(n) => state.set_status_message(format!("{n} bytes written to disk")),
        Err(IoError::NoFilename) => state.prompt.begin(),
        Err(e) => {
            tracing::error!(target: "io", error = %e, "save_failed");
            state.set_status_message(format!("Can't save! I/O error: {}", e.reason()));
        }
    }
}

pub(crate) fn handle_prompt(input: PromptInput, state: &mut EditorState) -> DispatchResult {
    if !state.prompt.is_active() {
        return DispatchResult::clean();
    }
    match input {
        PromptInput::Char(c) => state.prompt.push_char(c),
        PromptInput::Backspace => state.prompt.backspace(),
        PromptInput::Cancel => {
            state.prompt.finish();
            state.set_status_message("Save aborted");
        }
        PromptInput::Submit => {
            if state.prompt.buffer().is_empty() {
                return DispatchResult::clean();
            }
            let name = state.prompt.finish();
            tracing::debug!(target: "actions.dispatch", file = name.as_str(), "save_prompt_submit");
            state.file_name = Some(PathBuf::from(name));
            save_now(state);
        }
    }
    DispatchResult::dirty()
}

pub(crate) fn handle_quit(state: &mut EditorState) -> DispatchResult {
    if state.request_quit() {
        tracing::info!(target: "actions.dispatch", "quit");
        return DispatchResult::quit();
    }
    let presses = state.quit_times_remaining() + 1;
    state.set_status_message(format!(
        "WARNING!!! File has unsaved changes. Press Ctrl-Q {presses} more times to quit."
    ));
    DispatchResult::dirty()
}
