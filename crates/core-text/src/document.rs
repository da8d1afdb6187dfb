//! Ordered, growable collection of rows.

use crate::Row;

/// Rows in line order. Indices are always dense `0..len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse file content. Each line loses its trailing `\n` and any `\r`
    /// preceding it; a final line without newline still becomes a row and
    /// empty input yields an empty document.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut rows = Vec::new();
        let mut rest = bytes;
        while !rest.is_empty() {
            let (line, tail) = match rest.iter().position(|b| *b == b'\n') {
                Some(nl) => (&rest[..nl], &rest[nl + 1..]),
                None => (rest, &rest[rest.len()..]),
            };
            let mut end = line.len();
            while end > 0 && matches!(line[end - 1], b'\r' | b'\n') {
                end -= 1;
            }
            rows.push(Row::from_bytes(&line[..end]));
            rest = tail;
        }
        tracing::debug!(target: "text", rows = rows.len(), bytes = bytes.len(), "document_parsed");
        Self { rows }
    }

    /// Convenience constructor used heavily by tests.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        Self {
            rows: lines
                .into_iter()
                .map(|l| Row::from_bytes(l.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn row_mut(&mut self, idx: usize) -> Option<&mut Row> {
        self.rows.get_mut(idx)
    }

    /// Rendered length of row `idx`, or 0 when the row does not exist.
    pub fn rendered_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::rendered_len)
    }

    /// Open a slot at `at` (clamped to `len()`) and place `row` there.
    pub fn insert_row(&mut self, at: usize, row: Row) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, row);
        tracing::trace!(target: "text", at, rows = self.rows.len(), "insert_row");
    }

    /// Close the slot at `at`, returning the removed row.
    pub fn delete_row(&mut self, at: usize) -> Option<Row> {
        if at >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(at);
        tracing::trace!(target: "text", at, rows = self.rows.len(), "delete_row");
        Some(removed)
    }

    /// Serialize for persistence: every row followed by exactly one `\n`.
    pub fn to_text(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row.raw());
            out.push(b'\n');
        }
        out
    }
}
