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

use std::fmt::Display;
use std::io::{self, Write};

/// Writes `Display` values to a writer, separated by a configurable string.
///
/// The separator goes between values on the same line only. `newline`
/// starts a new line and the next value is written without a separator.
///
/// # Examples
///
/// ```rust
/// use stint_core::io::TokenWriter;
/// use stint_core::prelude::*;
///
/// let mut writer = TokenWriter::new(Vec::new());
/// writer.write_all([u8!(1), u8!(2), u8!(3)]).unwrap();
/// writer.newline().unwrap();
/// writer.write(&-i64!(4)).unwrap();
/// assert_eq!(writer.into_inner(), b"1 2 3\n-4");
/// ```
#[derive(Debug)]
pub struct TokenWriter<W: Write> {
    wtr: W,
    separator: String,
    at_line_start: bool,
}

impl<W: Write> TokenWriter<W> {
    /// Creates a new `TokenWriter` that separates values with a single space.
    #[inline]
    pub fn new(wtr: W) -> Self {
        Self {
            wtr,
            separator: String::from(" "),
            at_line_start: true,
        }
    }

    /// Sets the separator written between two values on the same line.
    #[inline]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Writes one value, preceded by the separator unless it starts a line.
    pub fn write<T>(&mut self, value: &T) -> io::Result<()>
    where
        T: Display + ?Sized,
    {
        if !self.at_line_start {
            self.wtr.write_all(self.separator.as_bytes())?;
        }
        write!(self.wtr, "{value}")?;
        self.at_line_start = false;
        Ok(())
    }

    /// Writes every value of `values` with [`TokenWriter::write`].
    pub fn write_all<I>(&mut self, values: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self.write(&value)?;
        }
        Ok(())
    }

    /// Ends the current line.
    #[inline]
    pub fn newline(&mut self) -> io::Result<()> {
        self.wtr.write_all(b"\n")?;
        self.at_line_start = true;
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        tracing::trace!("flushing token writer");
        self.wtr.flush()
    }

    /// Consumes the writer and returns the wrapped writer.
    ///
    /// Nothing is flushed; call [`TokenWriter::flush`] first if the writer
    /// buffers.
    #[inline]
    pub fn into_inner(self) -> W {
        self.wtr
    }
}
