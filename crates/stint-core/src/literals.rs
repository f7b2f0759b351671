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

//! # Literal Constructors
//!
//! One `const fn` per strong integer type builds a value from a non-negative
//! `u128` constant, rejecting anything above the type's `MAX`. The exported
//! macros (`u8!`, `U8!`, ..., `iz!`, `IZ!`) evaluate the constructor inside a
//! `const` item, so an out-of-range literal is rejected by the compiler:
//!
//! ```compile_fail
//! use stint_core::prelude::*;
//!
//! let _ = u8!(256);
//! ```
//!
//! ```compile_fail
//! use stint_core::prelude::*;
//!
//! let _ = i8!(128);
//! ```
//!
//! Negative values are written with unary minus:
//!
//! ```rust
//! use stint_core::prelude::*;
//!
//! assert_eq!(-i8!(127) - i8!(1), I8::MIN);
//! assert_eq!(U8!(255), U8::MAX);
//! assert_eq!(uz!(0), Usize::ZERO);
//! ```

use std::error::Error;
use std::fmt;

/// A literal exceeded the range of the strong integer it was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralOverflowError {
    type_name: &'static str,
    value: u128,
}

impl LiteralOverflowError {
    /// Creates a new `LiteralOverflowError`.
    #[inline]
    pub const fn new(type_name: &'static str, value: u128) -> Self {
        Self { type_name, value }
    }

    /// The short name of the target type, e.g. `"u8"`.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The literal that did not fit.
    #[inline]
    pub const fn value(&self) -> u128 {
        self.value
    }
}

impl fmt::Display for LiteralOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} literal is too large and would overflow (got {})",
            self.type_name, self.value
        )
    }
}

impl Error for LiteralOverflowError {}

macro_rules! define_literal {
    ($lower:ident, $upper:ident, $name:ident, $repr:ident) => {
        #[doc = concat!("Builds a [`", stringify!($name), "`](crate::", stringify!($name), ") from a literal.")]
        ///
        /// # Panics
        ///
        /// Panics if `value` exceeds the maximum of the target type. In a
        /// `const` context this is a compile error.
        #[inline]
        #[track_caller]
        pub const fn $lower(value: u128) -> crate::int::$name {
            if value > <$repr>::MAX as u128 {
                panic!(concat!(
                    stringify!($repr),
                    " literal is too large and would overflow"
                ));
            }
            crate::int::$name::new(value as $repr)
        }

        #[doc = concat!("Uppercase alias of [`", stringify!($lower), "`].")]
        #[allow(non_snake_case)]
        #[inline]
        #[track_caller]
        pub const fn $upper(value: u128) -> crate::int::$name {
            $lower(value)
        }
    };
}

define_literal!(u8, U8, U8, u8);
define_literal!(u16, U16, U16, u16);
define_literal!(u32, U32, U32, u32);
define_literal!(u64, U64, U64, u64);
define_literal!(uz, UZ, Usize, usize);
define_literal!(i8, I8, I8, i8);
define_literal!(i16, I16, I16, i16);
define_literal!(i32, I32, I32, i32);
define_literal!(i64, I64, I64, i64);
define_literal!(iz, IZ, Isize, isize);

/// Builds a `U8` from a literal checked at compile time.
#[macro_export]
macro_rules! u8 {
    ($value:expr) => {{
        const VALUE: $crate::U8 = $crate::literals::u8($value);
        VALUE
    }};
}

/// Alias of [`u8!`].
#[macro_export]
macro_rules! U8 {
    ($value:expr) => {
        $crate::u8!($value)
    };
}

/// Builds a `U16` from a literal checked at compile time.
#[macro_export]
macro_rules! u16 {
    ($value:expr) => {{
        const VALUE: $crate::U16 = $crate::literals::u16($value);
        VALUE
    }};
}

/// Alias of [`u16!`].
#[macro_export]
macro_rules! U16 {
    ($value:expr) => {
        $crate::u16!($value)
    };
}

/// Builds a `U32` from a literal checked at compile time.
#[macro_export]
macro_rules! u32 {
    ($value:expr) => {{
        const VALUE: $crate::U32 = $crate::literals::u32($value);
        VALUE
    }};
}

/// Alias of [`u32!`].
#[macro_export]
macro_rules! U32 {
    ($value:expr) => {
        $crate::u32!($value)
    };
}

/// Builds a `U64` from a literal checked at compile time.
#[macro_export]
macro_rules! u64 {
    ($value:expr) => {{
        const VALUE: $crate::U64 = $crate::literals::u64($value);
        VALUE
    }};
}

/// Alias of [`u64!`].
#[macro_export]
macro_rules! U64 {
    ($value:expr) => {
        $crate::u64!($value)
    };
}

/// Builds a `Usize` from a literal checked at compile time.
#[macro_export]
macro_rules! uz {
    ($value:expr) => {{
        const VALUE: $crate::Usize = $crate::literals::uz($value);
        VALUE
    }};
}

/// Alias of [`uz!`].
#[macro_export]
macro_rules! UZ {
    ($value:expr) => {
        $crate::uz!($value)
    };
}

/// Builds an `I8` from a non-negative literal checked at compile time.
#[macro_export]
macro_rules! i8 {
    ($value:expr) => {{
        const VALUE: $crate::I8 = $crate::literals::i8($value);
        VALUE
    }};
}

/// Alias of [`i8!`].
#[macro_export]
macro_rules! I8 {
    ($value:expr) => {
        $crate::i8!($value)
    };
}

/// Builds an `I16` from a non-negative literal checked at compile time.
#[macro_export]
macro_rules! i16 {
    ($value:expr) => {{
        const VALUE: $crate::I16 = $crate::literals::i16($value);
        VALUE
    }};
}

/// Alias of [`i16!`].
#[macro_export]
macro_rules! I16 {
    ($value:expr) => {
        $crate::i16!($value)
    };
}

/// Builds an `I32` from a non-negative literal checked at compile time.
#[macro_export]
macro_rules! i32 {
    ($value:expr) => {{
        const VALUE: $crate::I32 = $crate::literals::i32($value);
        VALUE
    }};
}

/// Alias of [`i32!`].
#[macro_export]
macro_rules! I32 {
    ($value:expr) => {
        $crate::i32!($value)
    };
}

/// Builds an `I64` from a non-negative literal checked at compile time.
#[macro_export]
macro_rules! i64 {
    ($value:expr) => {{
        const VALUE: $crate::I64 = $crate::literals::i64($value);
        VALUE
    }};
}

/// Alias of [`i64!`].
#[macro_export]
macro_rules! I64 {
    ($value:expr) => {
        $crate::i64!($value)
    };
}

/// Builds an `Isize` from a non-negative literal checked at compile time.
#[macro_export]
macro_rules! iz {
    ($value:expr) => {{
        const VALUE: $crate::Isize = $crate::literals::iz($value);
        VALUE
    }};
}

/// Alias of [`iz!`].
#[macro_export]
macro_rules! IZ {
    ($value:expr) => {
        $crate::iz!($value)
    };
}
