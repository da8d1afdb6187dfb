//! Action vocabulary, key translation and dispatch.
//!
//! Keys decoded by the input layer are translated into [`Action`]s, which the
//! dispatcher applies to an `EditorModel`. Edits mutate the document first and
//! then reposition the view; motions only touch the view; file commands go
//! through [`io_ops`].

pub mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_key;

/// Cursor movement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Structural document edits performed at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertByte(u8),
    InsertNewline,
    /// Delete left of the cursor, joining with the previous row at column 0.
    Backspace,
    /// Delete under the cursor, pulling up the next row at end of line.
    DeleteForward,
}

/// Keystrokes routed to the active save-as prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptInput {
    Char(char),
    Backspace,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Prompt(PromptInput),
    Save,
    Quit,
    /// Recognized key with no effect besides re-arming the quit gate (Esc, Ctrl-L).
    Noop,
}
