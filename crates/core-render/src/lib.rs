//! Full-frame terminal rendering.
//!
//! Every frame is a complete redraw: hide cursor, home, text rows, status
//! bar, message bar, cursor placement, show cursor. Bytes are pushed through
//! a [`FrameWriter`] whose bounded buffer caps how many writes reach the
//! underlying stream per frame.
//!
//! The crate never talks to a terminal directly; callers hand in any
//! `std::io::Write` (stdout in the binary, a `Vec<u8>` in tests).
//!
//! Components:
//! - `ansi`: the fixed escape sequence vocabulary.
//! - `writer`: coalescing byte buffer with write accounting.
//! - `status`: status bar and message bar composition.
//! - `render_engine`: frame assembly and per-frame metrics.

pub mod ansi;
pub mod render_engine;
pub mod status;
pub mod writer;

pub use render_engine::{RenderEngine, RenderMetrics, render_frame};
pub use writer::{DEFAULT_WRITE_BUFFER_CAPACITY, FrameWriter};
