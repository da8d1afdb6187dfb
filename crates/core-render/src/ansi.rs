//! Escape sequences emitted by the renderer. Output must match byte for byte.

pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Erase from the cursor to the end of the line.
pub const CLEAR_LINE_RIGHT: &[u8] = b"\x1b[K";
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const REVERSE_VIDEO: &[u8] = b"\x1b[7m";
pub const RESET_ATTRIBUTES: &[u8] = b"\x1b[m";
pub const CRLF: &[u8] = b"\r\n";

/// Absolute cursor position; `row` and `col` are 0-based, the sequence is 1-based.
pub fn cursor_to(row: usize, col: usize) -> Vec<u8> {
    format!("\x1b[{};{}H", row + 1, col + 1).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_to_is_one_based() {
        assert_eq!(cursor_to(0, 0), b"\x1b[1;1H");
        assert_eq!(cursor_to(4, 11), b"\x1b[5;12H");
    }
}
