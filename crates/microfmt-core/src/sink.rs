//! Character sinks.
//!
//! A sink receives rendered output one unit at a time, in template order,
//! and reports whether it kept the unit. Declining never stops a render:
//! the driver keeps producing output and simply does not count declined
//! units, so the count a render returns is exactly what the sink kept.

/// Destination for rendered units (`u8` bytes or `u32` code points).
pub trait Sink<T = u8> {
    /// Offer one unit. Returns `true` if it was stored.
    fn accept(&mut self, item: T) -> bool;
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    #[inline]
    fn accept(&mut self, item: T) -> bool {
        (**self).accept(item)
    }
}

/// Adapts a closure into a [`Sink`] without boxing it.
///
/// ```
/// use microfmt_core::{FnSink, args, render};
///
/// let mut upper = 0;
/// let mut sink = FnSink(|b: u8| {
///     upper += b.is_ascii_uppercase() as usize;
///     true
/// });
/// render(&mut sink, "{:X}", &args![0xabcu32]);
/// drop(sink);
/// assert_eq!(upper, 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<T, F: FnMut(T) -> bool> Sink<T> for FnSink<F> {
    #[inline]
    fn accept(&mut self, item: T) -> bool {
        (self.0)(item)
    }
}

/// Accepts and drops everything.
///
/// Rendering into `Discard` returns the full length the template would
/// produce, which is how a caller sizes a buffer before rendering for real.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Discard;

impl<T> Sink<T> for Discard {
    #[inline]
    fn accept(&mut self, _item: T) -> bool {
        true
    }
}

#[cfg(feature = "alloc")]
impl Sink<u8> for alloc::vec::Vec<u8> {
    fn accept(&mut self, item: u8) -> bool {
        self.push(item);
        true
    }
}

#[cfg(feature = "alloc")]
impl Sink<u32> for alloc::vec::Vec<u32> {
    fn accept(&mut self, item: u32) -> bool {
        self.push(item);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<S: Sink<u8>>(mut sink: S, bytes: &[u8]) -> usize {
        bytes.iter().filter(|&&b| sink.accept(b)).count()
    }

    #[test]
    fn fn_sink_reports_closure_decision() {
        let mut kept = Vec::new();
        let accepted = feed(
            FnSink(|b: u8| {
                if b == b'x' {
                    return false;
                }
                kept.push(b);
                true
            }),
            b"axbxc",
        );
        assert_eq!(accepted, 3);
        assert_eq!(kept, b"abc");
    }

    #[test]
    fn discard_accepts_everything() {
        assert_eq!(feed(Discard, b"hello"), 5);
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut total = 0usize;
        let mut inner = FnSink(|b: u8| {
            total += b as usize;
            true
        });
        assert_eq!(feed(&mut inner, &[1, 2, 3]), 3);
        drop(inner);
        assert_eq!(total, 6);
    }
}
