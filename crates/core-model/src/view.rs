//! Cursor / viewport engine.
//!
//! A `View` keeps the screen-relative cursor (`cursor_x`, `cursor_y`) and the
//! scroll offsets (`offset_x`, `offset_y`) such that
//!
//! * `current_y = cursor_y + offset_y` is the logical row, and
//! * `current_x = cursor_x + offset_x` is a column in that row's *rendered* form.
//!
//! Movement is "local then scroll": the screen cursor absorbs a step while it
//! stays on screen, the offset absorbs the remainder. Vertical moves never
//! leave the document, and every vertical move re-clamps the column against
//! the new row (the end-of-line insertion point is always a legal column).
//!
//! Invariants after every public call (with `rows = document.len()`):
//! * `cursor_y < text_height` and `cursor_x < terminal_width`.
//! * `current_y < rows` whenever `rows > 0`.
//! * after a vertical move, `current_x <= rendered_len(current_y)`.

use core_text::Document;

/// Rows reserved below the text area (status bar + message bar).
pub const RESERVED_ROWS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub cursor_x: usize,
    pub cursor_y: usize,
    pub offset_x: usize,
    pub offset_y: usize,
    terminal_width: usize,
    terminal_height: usize,
    text_height: usize,
}

impl View {
    /// View at the document origin for a terminal of `width` x `height` cells.
    pub fn new(width: usize, height: usize) -> Self {
        let mut view = Self {
            cursor_x: 0,
            cursor_y: 0,
            offset_x: 0,
            offset_y: 0,
            terminal_width: 1,
            terminal_height: 1,
            text_height: 1,
        };
        view.set_dimensions(width, height);
        view
    }

    fn set_dimensions(&mut self, width: usize, height: usize) {
        self.terminal_width = width.max(1);
        self.terminal_height = height.max(1);
        self.text_height = height.saturating_sub(RESERVED_ROWS).max(1);
    }

    pub fn terminal_width(&self) -> usize {
        self.terminal_width
    }

    pub fn terminal_height(&self) -> usize {
        self.terminal_height
    }

    pub fn text_height(&self) -> usize {
        self.text_height
    }

    /// Logical row index.
    pub fn current_y(&self) -> usize {
        self.cursor_y + self.offset_y
    }

    /// Logical rendered column.
    pub fn current_x(&self) -> usize {
        self.cursor_x + self.offset_x
    }

    /// Adopt new terminal dimensions keeping the same logical position visible.
    pub fn resize(&mut self, width: usize, height: usize) {
        let (x, y) = (self.current_x(), self.current_y());
        self.set_dimensions(width, height);
        self.set_cursor_y(y);
        self.set_cursor_x(x);
        tracing::debug!(target: "model.view", width, height, cursor_x = self.cursor_x, cursor_y = self.cursor_y, "resize");
    }

    pub fn move_cursor(&mut self, dir: Direction, doc: &Document) {
        match dir {
            Direction::Up => self.move_up(doc),
            Direction::Down => self.move_down(doc),
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(doc),
        }
    }

    pub fn move_down(&mut self, doc: &Document) {
        if self.current_y() + 1 < doc.len() {
            if self.cursor_y + 1 < self.text_height {
                self.cursor_y += 1;
            } else {
                self.offset_y += 1;
            }
        }
        self.clamp_horizontal(doc);
    }

    pub fn move_up(&mut self, doc: &Document) {
        if self.cursor_y > 0 {
            self.cursor_y -= 1;
        } else if self.offset_y > 0 {
            self.offset_y -= 1;
        }
        self.clamp_horizontal(doc);
    }

    pub fn move_left(&mut self) {
        if self.cursor_x > 0 {
            self.cursor_x -= 1;
        } else if self.offset_x > 0 {
            self.offset_x -= 1;
        }
    }

    pub fn move_right(&mut self, doc: &Document) {
        if self.current_x() >= doc.rendered_len(self.current_y()) {
            return;
        }
        if self.cursor_x + 1 < self.terminal_width {
            self.cursor_x += 1;
        } else {
            self.offset_x += 1;
        }
    }

    /// Repeat a vertical step once per terminal row.
    pub fn page(&mut self, dir: Direction, doc: &Document) {
        for _ in 0..self.terminal_height {
            match dir {
                Direction::Up => self.move_up(doc),
                _ => self.move_down(doc),
            }
        }
    }

    /// Re-derive the column after a vertical move: a cursor past the end of the
    /// new row is pulled back to that row's end-of-line insertion point.
    pub fn clamp_horizontal(&mut self, doc: &Document) {
        let maxlen = doc.rendered_len(self.current_y());
        if self.current_x() >= maxlen {
            self.place_column(maxlen);
        }
    }

    /// Put the logical column on `target`: without horizontal scroll when it
    /// fits on screen, otherwise scrolled so it sits in the last screen column.
    fn place_column(&mut self, target: usize) {
        if target < self.terminal_width {
            self.offset_x = 0;
            self.cursor_x = target;
        } else {
            self.offset_x = target + 1 - self.terminal_width;
            self.cursor_x = self.terminal_width - 1;
        }
    }

    pub fn home(&mut self) {
        self.offset_x = 0;
        self.cursor_x = 0;
    }

    pub fn end(&mut self, doc: &Document) {
        let maxlen = doc.rendered_len(self.current_y());
        self.place_column(maxlen);
    }

    /// Jump to logical column `target`. Only the screen cursor moves when the
    /// target is already visible; otherwise the offset absorbs the excess and
    /// the target lands on the nearest screen edge.
    pub fn set_cursor_x(&mut self, target: usize) {
        if target < self.offset_x {
            self.offset_x = target;
            self.cursor_x = 0;
        } else if target - self.offset_x < self.terminal_width {
            self.cursor_x = target - self.offset_x;
        } else {
            self.offset_x = target + 1 - self.terminal_width;
            self.cursor_x = self.terminal_width - 1;
        }
    }

    /// Vertical counterpart of [`View::set_cursor_x`] over the text area.
    pub fn set_cursor_y(&mut self, target: usize) {
        if target < self.offset_y {
            self.offset_y = target;
            self.cursor_y = 0;
        } else if target - self.offset_y < self.text_height {
            self.cursor_y = target - self.offset_y;
        } else {
            self.offset_y = target + 1 - self.text_height;
            self.cursor_y = self.text_height - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn long_doc() -> Document {
        Document::from_lines((0..50).map(|i| format!("line {i}")))
    }

    #[test]
    fn text_height_reserves_two_rows() {
        let v = View::new(80, 24);
        assert_eq!(v.text_height(), 22);
        assert_eq!(View::new(80, 1).text_height(), 1);
    }

    #[test]
    fn down_moves_cursor_then_scrolls() {
        let doc = long_doc();
        let mut v = View::new(20, 7); // 5 text rows
        for _ in 0..4 {
            v.move_down(&doc);
        }
        assert_eq!((v.cursor_y, v.offset_y), (4, 0));
        v.move_down(&doc);
        assert_eq!((v.cursor_y, v.offset_y), (4, 1));
        assert_eq!(v.current_y(), 5);
    }

    #[test]
    fn down_stops_at_last_row() {
        let doc = Document::from_lines(["a", "b"]);
        let mut v = View::new(20, 10);
        v.move_down(&doc);
        v.move_down(&doc);
        v.move_down(&doc);
        assert_eq!(v.current_y(), 1);
    }

    #[test]
    fn down_on_empty_document_is_noop() {
        let doc = Document::new();
        let mut v = View::new(20, 10);
        v.move_down(&doc);
        assert_eq!((v.current_x(), v.current_y()), (0, 0));
    }

    #[test]
    fn up_scrolls_back_at_top_edge() {
        let doc = long_doc();
        let mut v = View::new(20, 7);
        v.set_cursor_y(10);
        assert_eq!((v.cursor_y, v.offset_y), (4, 6));
        for _ in 0..4 {
            v.move_up(&doc);
        }
        assert_eq!((v.cursor_y, v.offset_y), (0, 6));
        v.move_up(&doc);
        assert_eq!((v.cursor_y, v.offset_y), (0, 5));
    }

    #[test]
    fn right_scrolls_past_terminal_width() {
        let doc = Document::from_lines(["a".repeat(15)]);
        let mut v = View::new(10, 5);
        for _ in 0..14 {
            v.move_right(&doc);
        }
        assert_eq!(v.offset_x, 5);
        assert_eq!(v.cursor_x, 9);
        assert_eq!(v.current_x(), 14);
    }

    #[test]
    fn right_stops_at_end_of_line() {
        let doc = Document::from_lines(["ab"]);
        let mut v = View::new(10, 5);
        for _ in 0..5 {
            v.move_right(&doc);
        }
        assert_eq!(v.current_x(), 2);
    }

    #[test]
    fn left_unscrolls_when_at_screen_edge() {
        let mut v = View::new(10, 5);
        v.set_cursor_x(12);
        assert_eq!((v.cursor_x, v.offset_x), (9, 3));
        v.cursor_x = 0;
        v.move_left();
        assert_eq!((v.cursor_x, v.offset_x), (0, 2));
    }

    #[test]
    fn vertical_move_clamps_to_shorter_row() {
        let doc = Document::from_lines(["abcdefgh", "ab"]);
        let mut v = View::new(20, 5);
        v.end(&doc);
        assert_eq!(v.current_x(), 8);
        v.move_down(&doc);
        assert_eq!((v.cursor_x, v.offset_x), (2, 0));
    }

    #[test]
    fn vertical_clamp_scrolls_for_long_target_row() {
        let doc = Document::from_lines(["x".repeat(40), "y".repeat(25)]);
        let mut v = View::new(10, 5);
        v.end(&doc);
        assert_eq!((v.cursor_x, v.offset_x), (9, 31));
        v.move_down(&doc);
        assert_eq!(v.current_x(), 25);
        assert_eq!((v.cursor_x, v.offset_x), (9, 16));
    }

    #[test]
    fn tab_rows_clamp_on_rendered_length() {
        let doc = Document::from_lines(["\t\t\t", "\t"]);
        let mut v = View::new(40, 5);
        v.end(&doc);
        assert_eq!(v.current_x(), 12);
        v.move_down(&doc);
        assert_eq!(v.current_x(), 4);
    }

    #[test]
    fn end_and_home() {
        let doc = Document::from_lines(["short", "z".repeat(30).as_str()]);
        let mut v = View::new(10, 5);
        v.end(&doc);
        assert_eq!((v.cursor_x, v.offset_x), (5, 0));
        v.move_down(&doc);
        v.end(&doc);
        assert_eq!((v.cursor_x, v.offset_x), (9, 21));
        assert_eq!(v.current_x(), 30);
        v.home();
        assert_eq!((v.cursor_x, v.offset_x), (0, 0));
    }

    #[test]
    fn end_on_line_exactly_terminal_width() {
        let doc = Document::from_lines(["q".repeat(10)]);
        let mut v = View::new(10, 5);
        v.end(&doc);
        assert_eq!((v.cursor_x, v.offset_x), (9, 1));
        assert_eq!(v.current_x(), 10);
    }

    #[test]
    fn set_cursor_within_visible_range_moves_screen_cursor_only() {
        let mut v = View::new(10, 12);
        v.set_cursor_x(14);
        assert_eq!((v.cursor_x, v.offset_x), (9, 5));
        v.set_cursor_x(7);
        assert_eq!((v.cursor_x, v.offset_x), (2, 5));
        v.set_cursor_x(3);
        assert_eq!((v.cursor_x, v.offset_x), (0, 3));
    }

    #[test]
    fn page_down_moves_a_screenful() {
        let doc = long_doc();
        let mut v = View::new(20, 12);
        v.page(Direction::Down, &doc);
        assert_eq!(v.current_y(), 12);
        v.page(Direction::Up, &doc);
        assert_eq!(v.current_y(), 0);
    }

    #[test]
    fn resize_keeps_cursor_on_screen() {
        let mut v = View::new(40, 30);
        v.set_cursor_x(30);
        v.set_cursor_y(20);
        v.resize(10, 7);
        assert_eq!((v.current_x(), v.current_y()), (30, 20));
        assert!(v.cursor_x < v.terminal_width());
        assert!(v.cursor_y < v.text_height());
    }

    fn arb_line() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(prop_oneof![Just(b'\t'), 0x20u8..0x7f], 0..30)
    }

    fn arb_dir() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn movement_preserves_invariants(
            lines in proptest::collection::vec(arb_line(), 1..40),
            moves in proptest::collection::vec(arb_dir(), 0..200),
            width in 1usize..20,
            height in 3usize..12,
        ) {
            let doc = Document::from_lines(lines);
            let mut v = View::new(width, height);
            for dir in moves {
                v.move_cursor(dir, &doc);
                prop_assert_eq!(v.current_y(), v.cursor_y + v.offset_y);
                prop_assert_eq!(v.current_x(), v.cursor_x + v.offset_x);
                prop_assert!(v.cursor_x < v.terminal_width());
                prop_assert!(v.cursor_y < v.text_height());
                prop_assert!(v.current_y() < doc.len());
                if matches!(dir, Direction::Up | Direction::Down) {
                    prop_assert!(v.current_x() <= doc.rendered_len(v.current_y()));
                }
                prop_assert!(v.current_x() <= doc.rendered_len(v.current_y()) + 1);
            }
        }
    }
}
