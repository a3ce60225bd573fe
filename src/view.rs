//! StrView: a non-owning window onto bytes owned elsewhere.

use crate::fnv::fnv1a_32;
use bstr::ByteSlice;
use core::fmt;

/// Borrowed run of bytes used both as tokenizer output and as table key.
///
/// Copying a view never copies the referenced bytes. The lifetime ties every
/// view to its owner (a `ByteBuffer` or a `'static` literal), so a view can
/// never outlive the storage it points into. Equality compares contents, not
/// addresses.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrView<'a>(&'a [u8]);

impl<'a> StrView<'a> {
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        StrView(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 32-bit FNV-1a of the viewed bytes.
    #[inline]
    pub fn hash32(&self) -> u32 {
        fnv1a_32(self.0)
    }
}

impl StrView<'static> {
    /// View over a literal that lives for the whole program.
    #[inline]
    pub const fn from_literal(text: &'static str) -> Self {
        StrView(text.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for StrView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        StrView(bytes)
    }
}

impl<'a> From<&'a str> for StrView<'a> {
    fn from(text: &'a str) -> Self {
        StrView(text.as_bytes())
    }
}

impl fmt::Display for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0.as_bstr(), f)
    }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0.as_bstr(), f)
    }
}
