//! Byte-oriented text model: rows with a derived rendered form and the
//! document that owns them.
//!
//! Every row keeps two parallel byte sequences:
//! * `raw` – the literal line content as stored on disk (no newline).
//! * `rendered` – `raw` with each tab expanded to [`TAB_WIDTH`] spaces.
//!
//! `rendered` is never edited directly; every mutation of `raw` regenerates
//! it. Callers that position a cursor on screen work in rendered columns and
//! translate to raw columns (and back) through [`Row::raw_column`] and
//! [`Row::rendered_column`] before mutating.
//!
//! The model is deliberately single-byte: there is no grapheme or width
//! handling beyond tab expansion.

mod document;
mod row;

pub use document::Document;
pub use row::{DeleteOutcome, Row, TAB_WIDTH, render_bytes};
