//! Fixed-capacity byte buffer sink.

use core::fmt;

use crate::sink::Sink;

/// Writes into a borrowed byte slice and declines once it is full.
///
/// Never writes out of bounds and never fails: excess bytes are dropped.
#[derive(Debug)]
pub struct BufferSink<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl<'a> BufferSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, written: 0 }
    }

    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.written
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.written]
    }
}

impl Sink<u8> for BufferSink<'_> {
    #[inline]
    fn accept(&mut self, item: u8) -> bool {
        match self.buf.get_mut(self.written) {
            Some(slot) => {
                *slot = item;
                self.written += 1;
                true
            }
            None => false,
        }
    }
}

/// Truncating: text past the end of the buffer is dropped and the write
/// still reports success.
impl fmt::Write for BufferSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let len = s.len().min(self.remaining());
        self.buf[self.written..self.written + len].copy_from_slice(&s.as_bytes()[..len]);
        self.written += len;
        Ok(())
    }
}

/// Run `fill` against a [`BufferSink`] over all but the last byte of `buf`,
/// then terminate with `0` right after the last byte written.
///
/// Returns the number of bytes written before the terminator; an empty
/// `buf` is left alone.
pub fn fill_terminated(buf: &mut [u8], fill: impl FnOnce(&mut BufferSink<'_>)) -> usize {
    let Some(last) = buf.len().checked_sub(1) else {
        return 0;
    };
    let mut sink = BufferSink::new(&mut buf[..last]);
    fill(&mut sink);
    let written = sink.written();
    buf[written] = 0;
    written
}
