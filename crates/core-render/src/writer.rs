//! Coalescing frame writer.
//!
//! Appends accumulate in a fixed-capacity buffer. An append that would
//! overflow flushes what is buffered first; a chunk larger than the whole
//! buffer bypasses it and goes straight to the stream. Bytes always reach the
//! stream in append order.

use std::io::{self, Write};

pub const DEFAULT_WRITE_BUFFER_CAPACITY: usize = 128;

pub struct FrameWriter<W: Write> {
    out: W,
    buf: Vec<u8>,
    capacity: usize,
    writes: u64,
    bytes: u64,
}

impl<W: Write> FrameWriter<W> {
    /// `capacity` of zero is treated as one.
    pub fn new(out: W, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            out,
            buf: Vec::with_capacity(capacity),
            capacity,
            writes: 0,
            bytes: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes appended but not yet handed to the stream.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    /// Number of writes issued to the underlying stream so far.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Total bytes handed to the underlying stream so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    pub fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        if self.buf.len() + bytes.len() > self.capacity {
            self.flush_buffer()?;
        }
        if bytes.len() > self.capacity {
            return self.emit(bytes);
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Push buffered bytes to the stream without flushing the stream itself.
    pub fn flush_buffer(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let pending = std::mem::take(&mut self.buf);
        let res = self.emit(&pending);
        self.buf = pending;
        self.buf.clear();
        res
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.writes += 1;
        self.bytes += bytes.len() as u64;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Flush anything buffered and hand back the stream.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush_buffer()?;
        Ok(self.out)
    }
}

impl<W: Write> Write for FrameWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buffer()?;
        self.out.flush()
    }
}
