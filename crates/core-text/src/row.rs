//! Single line of text plus its tab-expanded rendering.

/// Number of spaces a tab byte expands to in the rendered form.
pub const TAB_WIDTH: usize = 4;

/// Outcome of [`Row::delete_char`].
///
/// A row never joins itself with its neighbours; when the requested column
/// falls outside the row it reports which join the caller should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The byte at this raw column was removed.
    DeletedAt(usize),
    /// Column was before the start of the row: join with the previous row.
    JoinPrevious,
    /// Column was at or past the end of the row: join with the next row.
    JoinNext,
}

/// Expand tabs in `raw` into [`TAB_WIDTH`] spaces, copying other bytes verbatim.
pub fn render_bytes(raw: &[u8]) -> Vec<u8> {
    let tabs = raw.iter().filter(|b| **b == b'\t').count();
    let mut out = Vec::with_capacity(raw.len() + tabs * (TAB_WIDTH - 1));
    for &b in raw {
        if b == b'\t' {
            out.extend(std::iter::repeat_n(b' ', TAB_WIDTH));
        } else {
            out.push(b);
        }
    }
    out
}

#[inline]
fn rendered_width(b: u8) -> usize {
    if b == b'\t' { TAB_WIDTH } else { 1 }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    raw: Vec<u8>,
    rendered: Vec<u8>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from literal line content (must not contain the newline).
    pub fn from_bytes(raw: impl Into<Vec<u8>>) -> Self {
        let raw = raw.into();
        let rendered = render_bytes(&raw);
        Self { raw, rendered }
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn rendered(&self) -> &[u8] {
        &self.rendered
    }

    /// Raw length in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn rendered_len(&self) -> usize {
        self.rendered.len()
    }

    fn update(&mut self) {
        self.rendered = render_bytes(&self.raw);
    }

    /// Insert `ch` at raw column `at`; out-of-range columns clamp to the row end.
    pub fn insert_char(&mut self, at: usize, ch: u8) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, ch);
        self.update();
    }

    /// Remove the byte at raw column `at`.
    ///
    /// Negative columns and columns at or past the end are not errors: they
    /// report the join the caller has to carry out on the document.
    pub fn delete_char(&mut self, at: isize) -> DeleteOutcome {
        if at < 0 {
            return DeleteOutcome::JoinPrevious;
        }
        let at = at as usize;
        if at >= self.raw.len() {
            return DeleteOutcome::JoinNext;
        }
        self.raw.remove(at);
        self.update();
        DeleteOutcome::DeletedAt(at)
    }

    /// Append bytes to the end of the row (line join).
    pub fn append(&mut self, bytes: &[u8]) {
        self.raw.extend_from_slice(bytes);
        self.update();
    }

    /// Drop the last `by` bytes (line split). Shrinking past the start empties the row.
    pub fn shrink(&mut self, by: usize) {
        let keep = self.raw.len().saturating_sub(by);
        self.raw.truncate(keep);
        self.update();
    }

    /// Rendered column at which raw column `raw` starts. Columns past the end
    /// map to the rendered length.
    pub fn rendered_column(&self, raw: usize) -> usize {
        self.raw
            .iter()
            .take(raw)
            .map(|b| rendered_width(*b))
            .sum()
    }

    /// Raw column for rendered column `rx`: the number of bytes whose rendered
    /// span starts before `rx`. A column inside a tab expansion therefore maps
    /// to the position just after that tab.
    pub fn raw_column(&self, rx: usize) -> usize {
        let mut start = 0;
        for (cx, b) in self.raw.iter().enumerate() {
            if start >= rx {
                return cx;
            }
            start += rendered_width(*b);
        }
        self.raw.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tab_expands_to_four_spaces() {
        let row = Row::from_bytes("ab\tc");
        assert_eq!(row.rendered(), b"ab    c");
        assert_eq!(row.rendered_len(), 7);
        assert_eq!(row.len(), 4);
    }

    #[test]
    fn insert_clamps_past_end() {
        let mut row = Row::from_bytes("ab");
        row.insert_char(99, b'c');
        assert_eq!(row.raw(), b"abc");
        row.insert_char(0, b'\t');
        assert_eq!(row.raw(), b"\tabc");
        assert_eq!(row.rendered(), b"    abc");
    }

    #[test]
    fn delete_reports_boundaries() {
        let mut row = Row::from_bytes("xy");
        assert_eq!(row.delete_char(-1), DeleteOutcome::JoinPrevious);
        assert_eq!(row.delete_char(2), DeleteOutcome::JoinNext);
        assert_eq!(row.raw(), b"xy", "boundary deletes leave the row untouched");
        assert_eq!(row.delete_char(0), DeleteOutcome::DeletedAt(0));
        assert_eq!(row.raw(), b"y");
    }

    #[test]
    fn append_and_shrink() {
        let mut row = Row::from_bytes("ab");
        row.append(b"\tcd");
        assert_eq!(row.rendered(), b"ab    cd");
        row.shrink(3);
        assert_eq!(row.raw(), b"ab");
        assert_eq!(row.rendered(), b"ab");
        row.shrink(10);
        assert!(row.is_empty());
    }

    #[test]
    fn column_translation_across_tab() {
        let row = Row::from_bytes("a\tb");
        assert_eq!(row.rendered_column(0), 0);
        assert_eq!(row.rendered_column(1), 1);
        assert_eq!(row.rendered_column(2), 5);
        assert_eq!(row.rendered_column(3), 6);
        assert_eq!(row.rendered_column(10), 6);

        assert_eq!(row.raw_column(0), 0);
        assert_eq!(row.raw_column(1), 1);
        // inside the tab expansion
        assert_eq!(row.raw_column(2), 2);
        assert_eq!(row.raw_column(4), 2);
        assert_eq!(row.raw_column(5), 2);
        assert_eq!(row.raw_column(6), 3);
        assert_eq!(row.raw_column(40), 3);
    }

    proptest! {
        #[test]
        fn rendering_is_deterministic(raw in proptest::collection::vec(prop_oneof![Just(b'\t'), 0x20u8..0x7f], 0..64)) {
            let row = Row::from_bytes(raw.clone());
            let expected = render_bytes(&raw);
            prop_assert_eq!(row.rendered(), expected.as_slice());
            prop_assert_eq!(render_bytes(&raw), render_bytes(&raw));
        }

        #[test]
        fn insert_then_delete_restores(
            raw in proptest::collection::vec(prop_oneof![Just(b'\t'), 0x20u8..0x7f], 0..32),
            ch in prop_oneof![Just(b'\t'), 0x20u8..0x7f],
            at in 0usize..40,
        ) {
            let original = Row::from_bytes(raw.clone());
            let mut row = original.clone();
            let at = at.min(raw.len());
            row.insert_char(at, ch);
            prop_assert_eq!(row.delete_char(at as isize), DeleteOutcome::DeletedAt(at));
            prop_assert_eq!(row, original);
        }

        #[test]
        fn raw_column_inverts_rendered_column(raw in proptest::collection::vec(prop_oneof![Just(b'\t'), 0x20u8..0x7f], 0..32)) {
            let row = Row::from_bytes(raw.clone());
            for cx in 0..=raw.len() {
                prop_assert_eq!(row.raw_column(row.rendered_column(cx)), cx);
            }
        }
    }
}
