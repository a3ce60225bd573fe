//! Byte-wise whitespace tokenizer.

use crate::view::StrView;

/// Delimiters: space, tab and newline. Classification is per byte.
#[inline]
pub fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

/// Lazy iterator over the words of a byte slice.
///
/// Runs of delimiters yield nothing; a final word with no trailing delimiter
/// is still produced.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    rest: &'a [u8],
}

impl<'a> Words<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Words { rest: bytes }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = StrView<'a>;

    fn next(&mut self) -> Option<StrView<'a>> {
        let start = self.rest.iter().position(|&b| !is_delimiter(b))?;
        let tail = &self.rest[start..];
        let len = tail.iter().position(|&b| is_delimiter(b)).unwrap_or(tail.len());
        let (word, rest) = tail.split_at(len);
        self.rest = rest;
        Some(StrView::new(word))
    }
}

impl core::iter::FusedIterator for Words<'_> {}
