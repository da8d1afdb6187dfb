//! Frame assembly.
//!
//! One pass over the visible window, top to bottom, with no diffing against
//! the previous frame. Text rows are separated by `\r\n` and the last text
//! row carries none; the status and message bars each open with their own
//! `\r\n`, so the frame never scrolls the terminal.

use crate::ansi;
use crate::status::{StatusContext, compose_message, compose_status};
use crate::writer::{DEFAULT_WRITE_BUFFER_CAPACITY, FrameWriter};
use anyhow::Result;
use core_model::EditorModel;
use std::io::Write;
use std::time::Instant;

/// Version shown in the welcome banner of an empty document.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn welcome_banner() -> String {
    format!("Rowed editor -- version {VERSION}")
}

/// Counters describing the most recent frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderMetrics {
    pub frames: u64,
    /// Writes the last frame issued to the output stream.
    pub last_frame_writes: u64,
    pub last_frame_bytes: u64,
    pub last_render_ns: u64,
}

/// Owns the write buffer sizing and frame metrics across frames.
pub struct RenderEngine {
    write_buffer_capacity: usize,
    metrics: RenderMetrics,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WRITE_BUFFER_CAPACITY)
    }
}

impl RenderEngine {
    pub fn new(write_buffer_capacity: usize) -> Self {
        Self {
            write_buffer_capacity: write_buffer_capacity.max(1),
            metrics: RenderMetrics::default(),
        }
    }

    pub fn metrics(&self) -> RenderMetrics {
        self.metrics
    }

    /// Draw one frame of `model` into `out`, judging message expiry at `now`.
    pub fn render<W: Write>(&mut self, model: &EditorModel, now: Instant, out: W) -> Result<()> {
        let started = Instant::now();
        let mut writer = FrameWriter::new(out, self.write_buffer_capacity);
        render_frame(model, now, &mut writer)?;
        self.metrics.frames += 1;
        self.metrics.last_frame_writes = writer.writes();
        self.metrics.last_frame_bytes = writer.bytes_written();
        self.metrics.last_render_ns = started.elapsed().as_nanos() as u64;
        tracing::trace!(
            target: "render",
            writes = self.metrics.last_frame_writes,
            bytes = self.metrics.last_frame_bytes,
            ns = self.metrics.last_render_ns,
            "frame"
        );
        Ok(())
    }
}

/// Write a complete frame and flush it.
pub fn render_frame<W: Write>(
    model: &EditorModel,
    now: Instant,
    out: &mut FrameWriter<W>,
) -> Result<()> {
    let view = model.view();
    out.append(ansi::CURSOR_HIDE)?;
    out.append(ansi::CURSOR_HOME)?;
    draw_rows(model, out)?;
    draw_status_bar(model, out)?;
    draw_message_bar(model, now, out)?;
    out.append(&ansi::cursor_to(view.cursor_y, view.cursor_x))?;
    out.append(ansi::CURSOR_SHOW)?;
    out.flush()?;
    Ok(())
}

fn draw_rows<W: Write>(model: &EditorModel, out: &mut FrameWriter<W>) -> Result<()> {
    let view = model.view();
    let doc = &model.state().document;
    let width = view.terminal_width();
    let text_height = view.text_height();
    for dy in 0..text_height {
        let i = dy + view.offset_y;
        if let Some(row) = doc.row(i) {
            let rendered = row.rendered();
            let start = view.offset_x.min(rendered.len());
            let len = width.min(rendered.len() - start);
            out.append(&rendered[start..start + len])?;
            if len < width {
                out.append(ansi::CLEAR_LINE_RIGHT)?;
            }
        } else {
            if doc.is_empty() && i == text_height / 3 {
                draw_welcome(width, out)?;
            } else {
                out.append(b"~")?;
            }
            out.append(ansi::CLEAR_LINE_RIGHT)?;
        }
        if dy + 1 != text_height {
            out.append(ansi::CRLF)?;
        }
    }
    Ok(())
}

fn draw_welcome<W: Write>(width: usize, out: &mut FrameWriter<W>) -> Result<()> {
    let banner = welcome_banner();
    let shown = &banner.as_bytes()[..banner.len().min(width)];
    let mut padding = (width - shown.len()) / 2;
    if padding >= 1 {
        out.append(b"~")?;
        padding -= 1;
    }
    out.append(&vec![b' '; padding])?;
    out.append(shown)?;
    Ok(())
}

fn draw_status_bar<W: Write>(model: &EditorModel, out: &mut FrameWriter<W>) -> Result<()> {
    let (state, view) = (model.state(), model.view());
    let name = state.display_name();
    let ctx = StatusContext {
        file_name: name.as_deref(),
        rows: state.document.len(),
        dirty: state.dirty,
        line: view.current_y(),
        col: view.current_x(),
    };
    out.append(ansi::CRLF)?;
    out.append(ansi::REVERSE_VIDEO)?;
    out.append(&compose_status(&ctx, view.terminal_width()))?;
    out.append(ansi::RESET_ATTRIBUTES)?;
    Ok(())
}

fn draw_message_bar<W: Write>(
    model: &EditorModel,
    now: Instant,
    out: &mut FrameWriter<W>,
) -> Result<()> {
    let state = model.state();
    let prompt = state.prompt.is_active().then(|| state.prompt.buffer());
    let line = compose_message(
        state.visible_status(now),
        prompt,
        model.view().terminal_width(),
    );
    out.append(ansi::CRLF)?;
    out.append(&line)?;
    out.append(ansi::CLEAR_LINE_RIGHT)?;
    Ok(())
}

/// Wipe the screen and home the cursor, used on exit.
pub fn clear_screen<W: Write>(mut out: W) -> Result<()> {
    out.write_all(ansi::CLEAR_SCREEN)?;
    out.write_all(ansi::CURSOR_HOME)?;
    out.flush()?;
    Ok(())
}
