//! # microfmt-core
//!
//! Allocation-free rendering of `{}` placeholder templates.
//!
//! A template such as `"temp {:>6.1} C, state {:#04x}"` is scanned once,
//! left to right, and every rendered byte is handed to a caller-supplied
//! [`Sink`]. Nothing is allocated, no system float formatter is used, and
//! no failure aborts a render: a placeholder that cannot be rendered is
//! replaced by [`ERROR_MARKER`] and scanning continues.
//!
//! Entry points:
//! - [`render`]: stream bytes into any [`Sink<u8>`].
//! - [`render_to_buffer`]: fill a byte slice, truncating, NUL-terminated.
//! - [`render_codepoints`]: decode the byte stream as UTF-8 into a
//!   [`Sink<u32>`] of code points.
//! - [`numeric`]: integer and float rendering without a template.
//!
//! ```
//! use microfmt_core::{args, render_to_buffer};
//!
//! let mut buf = [0u8; 32];
//! let n = render_to_buffer(&mut buf, "{:#06x}|{:^7}|{:.2}", &args![0x1f, "ok", 2.5]);
//! assert_eq!(&buf[..n], b"0x001f|  ok   |2.50");
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arg;
pub mod buffer;
pub mod dispatch;
pub mod error;
pub mod float;
pub mod int;
pub mod numeric;
pub mod pad;
pub mod render;
pub mod sink;
pub mod spec;
pub mod utf8;

pub use arg::{Arg, ArgKind};
pub use buffer::BufferSink;
pub use error::{ERROR_MARKER, RenderError};
pub use numeric::{
    format_bin, format_bin_to_buffer, format_float, format_float_to_buffer, format_hex,
    format_hex_to_buffer, format_int, format_int_to_buffer, format_oct, format_oct_to_buffer,
    format_uint, format_uint_to_buffer,
};
pub use render::{RenderContext, render, render_codepoints, render_to_buffer};
pub use sink::{Discard, FnSink, Sink};
pub use spec::{Align, FormatSpec, Presentation, SignMode};
pub use utf8::Utf8Decoder;
