//! Status bar and message bar composition.
//!
//! The status bar is `"<name> - <n> lines"` (plus `" (modified)"` when the
//! document is dirty) on the left and `"<row>, <col>"` (0-based logical
//! position) on the right, padded with spaces to exactly fill the terminal
//! width. When both halves do not fit, the right half is dropped and the left
//! half is truncated to the width.

/// Longest file name shown on the status bar, in bytes.
pub const MAX_NAME_BYTES: usize = 20;
pub const NO_NAME: &str = "[No Name]";

/// Everything the status bar shows.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a str>,
    pub rows: usize,
    pub dirty: bool,
    pub line: usize,
    pub col: usize,
}

fn left_segment(ctx: &StatusContext<'_>) -> String {
    let name = ctx.file_name.map_or(NO_NAME, |n| clip(n, MAX_NAME_BYTES));
    let modified = if ctx.dirty { " (modified)" } else { "" };
    format!("{name} - {} lines{modified}", ctx.rows)
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char.
fn clip(s: &str, max: usize) -> &str {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn truncate_bytes(s: &str, width: usize) -> &[u8] {
    clip(s, width).as_bytes()
}

/// Status bar content (without the reverse-video wrapping), exactly `width` bytes.
pub fn compose_status(ctx: &StatusContext<'_>, width: usize) -> Vec<u8> {
    let left = left_segment(ctx);
    let right = format!("{}, {}", ctx.line, ctx.col);
    let left = truncate_bytes(&left, width);
    let mut out = Vec::with_capacity(width);
    out.extend_from_slice(left);
    if left.len() + right.len() < width {
        out.resize(width - right.len(), b' ');
        out.extend_from_slice(right.as_bytes());
    } else {
        out.resize(width, b' ');
    }
    out
}

/// Message bar content: the prompt while one is active, otherwise the visible
/// status message, truncated to `width`.
pub fn compose_message(message: Option<&str>, prompt: Option<&str>, width: usize) -> Vec<u8> {
    let text = match prompt {
        Some(buf) => format!("Save as: {buf} (ESC to cancel)"),
        None => message.unwrap_or_default().to_string(),
    };
    truncate_bytes(&text, width).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx(name: Option<&str>, rows: usize, dirty: bool) -> StatusContext<'_> {
        StatusContext {
            file_name: name,
            rows,
            dirty,
            line: 2,
            col: 7,
        }
    }

    #[test]
    fn unnamed_document_is_padded_to_width() {
        let line = compose_status(&ctx(None, 3, false), 30);
        assert_eq!(String::from_utf8(line).unwrap(), "[No Name] - 3 lines       2, 7");
    }

    #[test]
    fn dirty_marker_and_long_name_truncation() {
        let line = compose_status(&ctx(Some("a_really_long_file_name.txt"), 1, true), 50);
        assert_eq!(
            String::from_utf8(line).unwrap(),
            "a_really_long_file_n - 1 lines (modified)     2, 7"
        );
    }

    #[test]
    fn right_half_dropped_when_too_narrow() {
        let line = compose_status(&ctx(None, 3, false), 22);
        assert_eq!(String::from_utf8(line).unwrap(), "[No Name] - 3 lines   ");
        let line = compose_status(&ctx(None, 3, false), 5);
        assert_eq!(String::from_utf8(line).unwrap(), "[No N");
    }

    #[test]
    fn multibyte_name_is_capped_on_a_char_boundary() {
        let name = "\u{e9}".repeat(24) + ".txt";
        let line = compose_status(&ctx(Some(name.as_str()), 1, false), 80);
        let text = String::from_utf8(line).unwrap();
        assert_eq!(text.len(), 80);
        assert!(text.starts_with(&format!("{} - 1 lines", "\u{e9}".repeat(10))));

        let line = compose_status(&ctx(Some("a\u{e9}\u{e9}"), 1, false), 2);
        assert_eq!(String::from_utf8(line).unwrap(), "a ");
    }

    #[test]
    fn message_truncation_keeps_utf8_intact() {
        assert_eq!(compose_message(Some("x\u{e9}y"), None, 2), b"x".to_vec());
    }

    #[test]
    fn prompt_wins_over_message() {
        assert_eq!(
            compose_message(Some("hello"), Some("out.txt"), 80),
            b"Save as: out.txt (ESC to cancel)".to_vec()
        );
        assert_eq!(compose_message(Some("hello"), None, 3), b"hel".to_vec());
        assert!(compose_message(None, None, 80).is_empty());
    }
}
