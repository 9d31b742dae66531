//! RFC 2253 DN reader.
//!
//! Single-pass recursive descent over a [`Cursor`]:
//!
//! ```text
//! dn   = rdn *( (',' | ';') rdn )
//! rdn  = ava *( '+' ava )
//! ava  = name '=' ( quoted | string )
//! ```
//!
//! Values are returned fully unescaped. Unquoted values lose their leading
//! and trailing spaces; quoted values keep everything between the quotes.

use std::str::FromStr;

use crate::cursor::Cursor;
use crate::data::{Dn, Rdn};
use crate::error::{DnError, Result};

/// Characters that may follow a backslash to stand for themselves.
const ESCAPABLE: &str = "\"+,;\\<>= #";

fn is_field_delimiter(c: char) -> bool {
    matches!(c, ',' | ';' | '+')
}

/// Parse `input` into a [`Dn`].
///
/// With `normalize_attributes` set, attribute names are uppercased. Values
/// are never case-folded.
pub fn parse(input: &str, normalize_attributes: bool) -> Result<Dn> {
    DnReader::new(input, normalize_attributes).read_dn()
}

impl FromStr for Dn {
    type Err = DnError;

    fn from_str(s: &str) -> Result<Dn> {
        parse(s, true)
    }
}

// ---------------------------------------------------------------------------
// DnReader
// ---------------------------------------------------------------------------

struct DnReader<'a> {
    cursor: Cursor<'a>,
    normalize_attributes: bool,
}

impl<'a> DnReader<'a> {
    fn new(input: &'a str, normalize_attributes: bool) -> Self {
        DnReader {
            cursor: Cursor::new(input),
            normalize_attributes,
        }
    }

    // -- value readers ------------------------------------------------------

    /// Read up to and consume `=`.
    fn read_attribute(&mut self) -> Result<String> {
        let mut attribute = String::new();
        loop {
            let position = self.cursor.position();
            match self.cursor.next_char() {
                Some('=') => return Ok(attribute),
                None => return Err(DnError::UnterminatedAttribute { position }),
                Some(c) if is_field_delimiter(c) => {
                    return Err(if attribute.is_empty() {
                        DnError::EmptyComponent { position }
                    } else {
                        DnError::DelimiterInAttribute { position, found: c }
                    });
                }
                Some(c) => attribute.push(c),
            }
        }
    }

    /// Decode the escape whose backslash sat at `position`. Handles both
    /// `\c` for a special character and `\XX` for a single byte.
    fn read_escape(&mut self, position: usize) -> Result<char> {
        let malformed = DnError::MalformedEscape { position };
        let c = self.cursor.next_char().ok_or(malformed.clone())?;
        if ESCAPABLE.contains(c) {
            return Ok(c);
        }
        let high = c.to_digit(16).ok_or(malformed.clone())?;
        let low = self
            .cursor
            .next_char()
            .and_then(|c| c.to_digit(16))
            .ok_or(malformed)?;
        Ok(char::from((high * 16 + low) as u8))
    }

    /// Read an unquoted value up to the next field delimiter or end of
    /// input. The delimiter is left on the cursor.
    fn read_string(&mut self) -> Result<String> {
        let mut out = String::new();
        // Spaces are held back until something follows them, which drops
        // both leading and trailing runs.
        let mut spaces = 0usize;
        loop {
            let position = self.cursor.position();
            let c = match self.cursor.next_char() {
                None => return Ok(out),
                Some(c) => c,
            };
            match c {
                '"' if out.is_empty() => return self.read_quoted_string(position),
                c if is_field_delimiter(c) => {
                    self.cursor.push(c);
                    return Ok(out);
                }
                ' ' => spaces += 1,
                _ => {
                    if !out.is_empty() {
                        out.push_str(&" ".repeat(spaces));
                    }
                    spaces = 0;
                    if c == '\\' {
                        out.push(self.read_escape(position)?);
                    } else {
                        out.push(c);
                    }
                }
            }
        }
    }

    /// Read the rest of a quoted value whose opening quote, already
    /// consumed, sat at `open`. Trailing spaces after the closing quote are
    /// skipped and the following delimiter is left on the cursor.
    fn read_quoted_string(&mut self, open: usize) -> Result<String> {
        let mut out = String::new();
        loop {
            let position = self.cursor.position();
            match self.cursor.next_char() {
                None => return Err(DnError::UnterminatedQuote { position: open }),
                Some('"') => break,
                Some('\\') => out.push(self.read_escape(position)?),
                Some(c) => out.push(c),
            }
        }

        loop {
            let position = self.cursor.position();
            match self.cursor.next_char() {
                None => return Ok(out),
                Some(' ') => {}
                Some(c) if is_field_delimiter(c) => {
                    self.cursor.push(c);
                    return Ok(out);
                }
                Some(found) => {
                    return Err(DnError::TrailingContentAfterQuote { position, found });
                }
            }
        }
    }

    // -- structural readers -------------------------------------------------

    fn read_ava(&mut self) -> Result<String> {
        let attribute = self.read_attribute()?;
        let value = self.read_string()?;
        let attribute = if self.normalize_attributes {
            attribute.to_uppercase()
        } else {
            attribute
        };
        Ok(format!("{}={}", attribute, value))
    }

    fn read_rdn(&mut self) -> Result<Rdn> {
        let mut avas = vec![self.read_ava()?];
        loop {
            match self.cursor.next_char() {
                Some('+') => avas.push(self.read_ava()?),
                Some(c) => {
                    self.cursor.push(c);
                    break;
                }
                None => break,
            }
        }
        Ok(Rdn::from_parsed(avas))
    }

    fn read_dn(&mut self) -> Result<Dn> {
        let mut rdns = vec![self.read_rdn()?];
        loop {
            match self.cursor.next_char() {
                Some(',' | ';') => rdns.push(self.read_rdn()?),
                Some(c) => {
                    self.cursor.push(c);
                    break;
                }
                None => break,
            }
        }
        Ok(Dn::from_parsed(rdns))
    }
}
