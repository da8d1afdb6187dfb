//! Editor state: the document, its file association, the dirty flag, the
//! status message, the save-as prompt and the quit confirmation gate.
//!
//! Cursor and scroll state live in `core-model::View`; this crate stays
//! document-centric so the renderer can read both without either owning
//! the other.

use core_text::Document;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long a status message stays visible unless configured otherwise.
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Extra quit presses required when the document has unsaved edits.
pub const DEFAULT_QUIT_CONFIRMATIONS: u32 = 1;

/// Timestamped status message.
///
/// Last write wins. Expiry only gates display: the text stays in memory
/// until replaced.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, set_at: Instant) -> Self {
        Self {
            text: text.into(),
            set_at,
        }
    }

    pub fn is_visible_at(&self, now: Instant, ttl: Duration) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < ttl
    }
}

/// Single-line input prompt shown in the message bar (used for "save as").
#[derive(Debug, Default, Clone)]
pub struct PromptState {
    active: bool,
    buf: String,
}

impl PromptState {
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn buffer(&self) -> &str {
        &self.buf
    }
    /// Begin a new prompt, discarding any previous input.
    pub fn begin(&mut self) {
        self.active = true;
        self.buf.clear();
    }
    pub fn push_char(&mut self, ch: char) {
        self.buf.push(ch);
    }
    pub fn backspace(&mut self) {
        self.buf.pop();
    }
    /// Leave the prompt and hand back what was typed.
    pub fn finish(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.buf)
    }
}

#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub file_name: Option<PathBuf>,
    pub dirty: bool,
    pub status: Option<StatusMessage>,
    pub message_ttl: Duration,
    pub prompt: PromptState,
    quit_confirmations: u32,
    quit_times: u32,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            file_name: None,
            dirty: false,
            status: None,
            message_ttl: DEFAULT_MESSAGE_TTL,
            prompt: PromptState::default(),
            quit_confirmations: DEFAULT_QUIT_CONFIRMATIONS,
            quit_times: DEFAULT_QUIT_CONFIRMATIONS,
        }
    }

    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    /// Overwrite the status message; the caller formats the text.
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.set_status_message_at(msg, Instant::now());
    }

    pub fn set_status_message_at(&mut self, msg: impl Into<String>, now: Instant) {
        let msg = StatusMessage::new(msg, now);
        tracing::debug!(target: "state", text = msg.text.as_str(), "status_message");
        self.status = Some(msg);
    }

    /// Message text if it has not yet expired at `now`.
    pub fn visible_status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| m.is_visible_at(now, self.message_ttl))
            .map(|m| m.text.as_str())
    }

    /// Short display name for the status bar.
    pub fn display_name(&self) -> Option<String> {
        self.file_name
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
    }

    pub fn mark_dirty(&mut self) {
        if !self.dirty {
            tracing::trace!(target: "state", "dirty");
            self.dirty = true;
        }
    }

    pub fn set_quit_confirmations(&mut self, n: u32) {
        self.quit_confirmations = n;
        self.quit_times = n;
    }

    /// Extra presses still needed before a dirty quit goes through.
    pub fn quit_times_remaining(&self) -> u32 {
        self.quit_times
    }

    /// Register a quit request. Returns `true` when the editor should exit now;
    /// otherwise one confirmation was consumed.
    pub fn request_quit(&mut self) -> bool {
        if !self.dirty || self.quit_times == 0 {
            return true;
        }
        self.quit_times -= 1;
        tracing::debug!(target: "state", remaining = self.quit_times, "quit_blocked_dirty");
        false
    }

    /// Any non-quit key re-arms the confirmation gate.
    pub fn reset_quit_gate(&mut self) {
        self.quit_times = self.quit_confirmations;
    }
}
