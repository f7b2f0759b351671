// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use super::error::{ParseTokenError, ReadError};
use std::io::BufRead;
use std::ops::Range;
use std::str::FromStr;

/// Reads whitespace-delimited tokens from a buffered reader and parses them.
///
/// Tokens are separated by any Unicode whitespace, line breaks included.
/// When a comment prefix is configured, everything from the prefix to the
/// end of the line is skipped, even directly after a token (`12#note`).
///
/// # Examples
///
/// ```rust
/// use stint_core::io::{ReadError, TokenReader};
/// use stint_core::prelude::*;
///
/// let mut reader = TokenReader::from_text("42 oops");
///
/// let mut value = u32!(0);
/// reader.read_into(&mut value).unwrap();
/// assert_eq!(value, u32!(42));
///
/// let err = reader.read_into(&mut value).unwrap_err();
/// assert!(matches!(err, ReadError::Parse(_)));
/// assert_eq!(value, u32!(0));
/// ```
#[derive(Debug)]
pub struct TokenReader<R> {
    rdr: R,
    buf: String,
    pos: usize,
    comment_prefix: Option<char>,
}

impl<'a> TokenReader<&'a [u8]> {
    /// Creates a reader over a string slice.
    #[inline]
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<R: BufRead> TokenReader<R> {
    /// Creates a new `TokenReader` wrapping the given reader.
    ///
    /// No comment prefix is configured.
    #[inline]
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
            comment_prefix: None,
        }
    }

    /// Sets the character that starts a line comment, or `None` to disable
    /// comment skipping.
    #[inline]
    pub fn comment_prefix(mut self, prefix: Option<char>) -> Self {
        self.comment_prefix = prefix;
        self
    }

    /// Consumes the reader and returns the wrapped reader.
    ///
    /// Any part of the current line that has not been consumed is lost.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rdr
    }

    /// Reads the next token and parses it into `T`.
    ///
    /// # Errors
    ///
    /// Returns `ReadError::UnexpectedEof` if the input ends before a token,
    /// `ReadError::Io` if the underlying reader fails, and
    /// `ReadError::Parse` if the token is not a valid `T`.
    pub fn next<T>(&mut self) -> Result<T, ReadError>
    where
        T: FromStr,
    {
        let range = self.next_token()?;
        let token = &self.buf[range];
        let type_name = std::any::type_name::<T>();
        tracing::trace!(token, type_name, "read token");

        token.parse::<T>().map_err(|_| {
            tracing::debug!(token, type_name, "token could not be parsed");
            ReadError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name,
            })
        })
    }

    /// Reads the next token into `dest`.
    ///
    /// On failure `dest` is reset to `T::default()` and the error is
    /// returned, so the destination is never left holding a stale value.
    ///
    /// # Errors
    ///
    /// The same as [`TokenReader::next`].
    pub fn read_into<T>(&mut self, dest: &mut T) -> Result<(), ReadError>
    where
        T: FromStr + Default,
    {
        match self.next::<T>() {
            Ok(value) => {
                *dest = value;
                Ok(())
            }
            Err(err) => {
                *dest = T::default();
                Err(err)
            }
        }
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data was read,
    /// `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, ReadError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf).map_err(ReadError::Io)?;
        Ok(n > 0)
    }

    /// Advances to the next token and returns its byte range in `buf`.
    fn next_token(&mut self) -> Result<Range<usize>, ReadError> {
        let comment = self.comment_prefix;
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                tracing::debug!("input exhausted while looking for a token");
                return Err(ReadError::UnexpectedEof);
            }

            let start = match self.buf[self.pos..]
                .char_indices()
                .find(|&(_, c)| !c.is_whitespace())
            {
                Some((_, c)) if Some(c) == comment => None,
                Some((offset, _)) => Some(self.pos + offset),
                None => None,
            };

            // Blank or comment-only remainder: move on to the next line.
            let Some(start) = start else {
                self.pos = self.buf.len();
                continue;
            };

            let rest = &self.buf[start..];
            let len = rest
                .char_indices()
                .find(|&(_, c)| c.is_whitespace() || Some(c) == comment)
                .map_or(rest.len(), |(offset, _)| offset);

            self.pos = start + len;
            return Ok(start..self.pos);
        }
    }
}
