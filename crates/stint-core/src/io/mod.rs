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

//! # Stream Adapters
//!
//! Token-oriented text I/O for any type with `FromStr`/`Display`, strong
//! integers included.
//!
//! - `TokenReader` pulls whitespace-delimited tokens from a `BufRead`,
//!   optionally skipping line comments, and parses them. `read_into` resets
//!   its destination to the default value when a read fails.
//! - `TokenWriter` writes `Display` values to a `Write`, separated by a
//!   configurable separator.
//!
//! ```rust
//! use stint_core::io::{TokenReader, TokenWriter};
//! use stint_core::prelude::*;
//!
//! let mut reader = TokenReader::from_text("7 300 # trailing comment\n-9")
//!     .comment_prefix(Some('#'));
//! let a: U16 = reader.next().unwrap();
//! let b: U8 = reader.next().unwrap();
//! let c: I8 = reader.next().unwrap();
//! assert_eq!((a, b, c), (u16!(7), u8!(255), -i8!(9)));
//!
//! let mut writer = TokenWriter::new(Vec::new()).separator(",");
//! writer.write(&a).unwrap();
//! writer.write(&b).unwrap();
//! writer.write(&c).unwrap();
//! assert_eq!(writer.into_inner(), b"7,255,-9");
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ParseTokenError, ReadError};
pub use reader::TokenReader;
pub use writer::TokenWriter;
