//! Streaming UTF-8 to code point adapter.
//!
//! Bytes arrive one at a time; complete sequences leave as `u32` code
//! points. A byte that cannot start a sequence, a continuation byte with no
//! sequence open, or a non-continuation byte inside a sequence each produce
//! one replacement code point. The offending byte is dropped, not
//! reinterpreted as the start of a new sequence.
//!
//! Overlong three and four byte forms and surrogate code points are passed
//! through as decoded.

use crate::sink::Sink;

/// Code point emitted for malformed input unless configured otherwise.
pub const DEFAULT_REPLACEMENT: char = '?';

/// Wraps a code point sink and accepts bytes.
#[derive(Debug)]
pub struct Utf8Decoder<S> {
    sink: S,
    /// Continuation bytes still expected.
    pending: u8,
    acc: u32,
    replacement: u32,
    accepted: usize,
}

impl<S: Sink<u32>> Utf8Decoder<S> {
    pub fn new(sink: S) -> Self {
        Self::with_replacement(sink, DEFAULT_REPLACEMENT)
    }

    pub fn with_replacement(sink: S, replacement: char) -> Self {
        Self {
            sink,
            pending: 0,
            acc: 0,
            replacement: u32::from(replacement),
            accepted: 0,
        }
    }

    /// Code points the wrapped sink accepted.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// End of input. A sequence still open is reported as one replacement.
    pub fn finish(&mut self) {
        if self.pending != 0 {
            self.pending = 0;
            self.emit(self.replacement);
        }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    fn emit(&mut self, code_point: u32) -> bool {
        let kept = self.sink.accept(code_point);
        if kept {
            self.accepted += 1;
        }
        kept
    }

    fn open(&mut self, payload: u8, continuations: u8) -> bool {
        self.acc = u32::from(payload);
        self.pending = continuations;
        true
    }
}

impl<S: Sink<u32>> Sink<u8> for Utf8Decoder<S> {
    /// Bytes that only extend an open sequence report `true`; bytes that
    /// complete a code point or produce a replacement report what the
    /// wrapped sink said.
    fn accept(&mut self, byte: u8) -> bool {
        if self.pending != 0 {
            if byte & 0xc0 != 0x80 {
                self.pending = 0;
                return self.emit(self.replacement);
            }
            self.acc = (self.acc << 6) | u32::from(byte & 0x3f);
            self.pending -= 1;
            if self.pending == 0 {
                return self.emit(self.acc);
            }
            return true;
        }

        match byte {
            0x00..=0x7f => self.emit(u32::from(byte)),
            0xc2..=0xdf => self.open(byte & 0x1f, 1),
            0xe0..=0xef => self.open(byte & 0x0f, 2),
            0xf0..=0xf4 => self.open(byte & 0x07, 3),
            // Stray continuation, 0xc0/0xc1 (always overlong) or 0xf5.. (beyond U+10FFFF).
            _ => self.emit(self.replacement),
        }
    }
}
