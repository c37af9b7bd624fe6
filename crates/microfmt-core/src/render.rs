//! Template driver and public render entry points.
//!
//! One pass over the template: literal bytes go straight to the sink, `{{`
//! becomes `{`, and every other `{` starts a placeholder. A placeholder that
//! cannot be rendered becomes [`ERROR_MARKER`]; scanning always continues to
//! the end of the template.

use crate::arg::Arg;
use crate::buffer;
use crate::dispatch;
use crate::error::ERROR_MARKER;
use crate::sink::Sink;
use crate::spec;
use crate::utf8::Utf8Decoder;

/// Per-call render state.
///
/// Holds the sink, the arguments and the count of bytes the sink accepted.
/// Bytes the sink declines are not counted, but rendering carries on.
pub struct RenderContext<'a, S> {
    sink: S,
    args: &'a [Arg<'a>],
    accepted: usize,
}

impl<'a, S: Sink<u8>> RenderContext<'a, S> {
    pub fn new(sink: S, args: &'a [Arg<'a>]) -> Self {
        Self {
            sink,
            args,
            accepted: 0,
        }
    }

    /// Bytes accepted by the sink so far.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    #[must_use]
    pub fn args(&self) -> &'a [Arg<'a>] {
        self.args
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Render `template` against this context's arguments.
    ///
    /// May be called more than once; the accepted count keeps growing and
    /// every call starts its own automatic index at 0.
    pub fn render(&mut self, template: &[u8]) {
        let mut auto_index = 0;
        let mut pos = 0;

        while let Some(&byte) = template.get(pos) {
            pos += 1;
            if byte != b'{' {
                self.put(byte);
                continue;
            }
            if template.get(pos) == Some(&b'{') {
                self.put(b'{');
                pos += 1;
                continue;
            }

            let offset = pos - 1;
            let result = spec::parse_placeholder(&template[pos..]).and_then(|(spec, consumed)| {
                pos += consumed;
                dispatch::render_arg(self, spec, auto_index)
            });

            match result {
                Ok(()) => auto_index += 1,
                Err(err) => {
                    if err.consumes_argument() {
                        auto_index += 1;
                    }
                    log::debug!("microfmt: placeholder at byte {offset}: {err}");
                    self.put_bytes(ERROR_MARKER.as_bytes());
                }
            }
        }
    }

    pub(crate) fn put(&mut self, byte: u8) {
        if self.sink.accept(byte) {
            self.accepted += 1;
        }
    }

    pub(crate) fn put_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put(byte);
        }
    }

    pub(crate) fn put_repeat(&mut self, byte: u8, count: usize) {
        for _ in 0..count {
            self.put(byte);
        }
    }
}

/// Stream `template` with `args` into `sink`.
///
/// Returns the number of bytes the sink accepted.
///
/// ```
/// use microfmt_core::{FnSink, args, render};
///
/// let mut out = Vec::new();
/// let count = render(FnSink(|b: u8| { out.push(b); true }), "{1}-{0}", &args!["a", 2]);
/// assert_eq!(out, b"2-a");
/// assert_eq!(count, 3);
/// ```
pub fn render<S, T>(sink: S, template: &T, args: &[Arg<'_>]) -> usize
where
    S: Sink<u8>,
    T: AsRef<[u8]> + ?Sized,
{
    let mut ctx = RenderContext::new(sink, args);
    ctx.render(template.as_ref());
    ctx.accepted()
}

/// Render into `buf`, keeping one byte for a trailing `0`.
///
/// Returns the number of bytes written before the terminator, at most
/// `buf.len() - 1`. An empty buffer is left alone and 0 is returned.
pub fn render_to_buffer<T>(buf: &mut [u8], template: &T, args: &[Arg<'_>]) -> usize
where
    T: AsRef<[u8]> + ?Sized,
{
    buffer::fill_terminated(buf, |sink| {
        render(sink, template, args);
    })
}

/// Render and decode the output as UTF-8, handing code points to `sink`.
///
/// Returns the number of code points the sink accepted. Malformed sequences
/// reach the sink as `'?'`.
pub fn render_codepoints<S, T>(sink: S, template: &T, args: &[Arg<'_>]) -> usize
where
    S: Sink<u32>,
    T: AsRef<[u8]> + ?Sized,
{
    let mut decoder = Utf8Decoder::new(sink);
    render(&mut decoder, template, args);
    decoder.finish();
    decoder.accepted()
}
