//! Argument descriptors.
//!
//! The set of renderable kinds is closed. Callers build a slice of [`Arg`]
//! once per render call, usually with the [`args!`](crate::args) macro,
//! and the engine only reads it.

use core::fmt;

/// One tagged value handed to a render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Bool(bool),
    Char(char),
    Str(&'a str),
    /// Address of an opaque pointer, always rendered as hex.
    Ptr(usize),
    Float(f64),
}

/// The kind tag of an [`Arg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Int,
    Uint,
    Bool,
    Char,
    Str,
    Ptr,
    Float,
}

impl Arg<'_> {
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Self::Int(_) => ArgKind::Int,
            Self::Uint(_) => ArgKind::Uint,
            Self::Bool(_) => ArgKind::Bool,
            Self::Char(_) => ArgKind::Char,
            Self::Str(_) => ArgKind::Str,
            Self::Ptr(_) => ArgKind::Ptr,
            Self::Float(_) => ArgKind::Float,
        }
    }
}

impl ArgKind {
    /// Kinds that right-align by default.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Ptr | Self::Float)
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "signed integer",
            Self::Uint => "unsigned integer",
            Self::Bool => "boolean",
            Self::Char => "character",
            Self::Str => "string",
            Self::Ptr => "pointer",
            Self::Float => "floating-point",
        })
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Arg<'_> {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(Uint as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<T: ?Sized> From<*const T> for Arg<'_> {
    fn from(value: *const T) -> Self {
        Self::Ptr(value.addr())
    }
}

impl<T: ?Sized> From<*mut T> for Arg<'_> {
    fn from(value: *mut T) -> Self {
        Self::Ptr(value.addr())
    }
}

/// Build a fixed array of [`Arg`]s from heterogeneous values.
///
/// ```
/// use microfmt_core::{Arg, args};
///
/// let list = args![-3i8, 7u16, true, 'x', "text", 0.5f32];
/// assert_eq!(list[0], Arg::Int(-3));
/// assert_eq!(list[5], Arg::Float(0.5));
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::Arg::from($value)),*]
    };
}
