//! Character cursor with a single slot of pushback.

use std::str::Chars;

/// Pull-based reader over a DN string.
///
/// `next_char` returns `None` at end of input. A character handed back
/// with `push` is returned by the following `next_char` before the
/// underlying stream is consulted again.
pub struct Cursor<'a> {
    inner: Chars<'a>,
    pushback: Option<char>,
    consumed: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            inner: input.chars(),
            pushback: None,
            consumed: 0,
        }
    }

    pub fn next_char(&mut self) -> Option<char> {
        if let Some(c) = self.pushback.take() {
            return Some(c);
        }
        let c = self.inner.next()?;
        self.consumed += 1;
        Some(c)
    }

    /// Hand `c` back so the next `next_char` returns it.
    ///
    /// At most one character may be pending; callers must not push twice
    /// without reading in between, and must only push after a read.
    pub fn push(&mut self, c: char) {
        debug_assert!(self.pushback.is_none(), "double pushback");
        debug_assert!(self.consumed > 0, "pushback before any read");
        self.pushback = Some(c);
    }

    /// Offset, in characters, of the next character `next_char` returns.
    pub fn position(&self) -> usize {
        if self.pushback.is_some() {
            self.consumed - 1
        } else {
            self.consumed
        }
    }
}
