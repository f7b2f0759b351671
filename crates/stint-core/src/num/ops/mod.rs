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

//! # Unary and Step Operations
//!
//! Rust has no unary `+` and no `++`/`--` operators. These traits give the
//! strong integers (and, where it makes sense, the native primitives) the
//! same operations as named methods.
//!
//! - `Pos`: identity, `x.pos() == x`.
//! - `Increment`/`Decrement`: pre and post forms by mutable reference.
//!   Strong integers wrap at their bounds.
//!
//! ```rust
//! use stint_core::prelude::*;
//!
//! let mut x = u8!(255);
//! assert_eq!(x.post_increment(), u8!(255));
//! assert_eq!(x, u8!(0));
//! assert_eq!(x.pre_decrement(), u8!(255));
//! assert_eq!(i16!(7).pos(), i16!(7));
//! ```

use crate::int::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};
use crate::num::constants::PlusOne;

/// Unary plus. Returns the operand unchanged.
pub trait Pos {
    /// The result type.
    type Output;

    /// Returns `self`.
    fn pos(self) -> Self::Output;
}

/// In-place increment.
pub trait Increment: Sized {
    /// Adds one to `self` and returns the new value.
    fn pre_increment(&mut self) -> Self;

    /// Adds one to `self` and returns the value it had before.
    fn post_increment(&mut self) -> Self;
}

/// In-place decrement.
pub trait Decrement: Sized {
    /// Subtracts one from `self` and returns the new value.
    fn pre_decrement(&mut self) -> Self;

    /// Subtracts one from `self` and returns the value it had before.
    fn post_decrement(&mut self) -> Self;
}

macro_rules! impl_pos {
    ($t:ty) => {
        impl Pos for $t {
            type Output = $t;

            #[inline(always)]
            fn pos(self) -> $t {
                self
            }
        }
    };
}

macro_rules! impl_step {
    ($t:ty) => {
        impl Increment for $t {
            #[inline(always)]
            fn pre_increment(&mut self) -> $t {
                *self = *self + <$t as PlusOne>::PLUS_ONE;
                *self
            }

            #[inline(always)]
            fn post_increment(&mut self) -> $t {
                let previous = *self;
                *self = previous + <$t as PlusOne>::PLUS_ONE;
                previous
            }
        }

        impl Decrement for $t {
            #[inline(always)]
            fn pre_decrement(&mut self) -> $t {
                *self = *self - <$t as PlusOne>::PLUS_ONE;
                *self
            }

            #[inline(always)]
            fn post_decrement(&mut self) -> $t {
                let previous = *self;
                *self = previous - <$t as PlusOne>::PLUS_ONE;
                previous
            }
        }
    };
}

macro_rules! impl_strong_unary {
    ($name:ident, $repr:ident) => {
        impl_pos!($name);
        impl_step!($name);
    };
}

for_each_strong_int!(impl_strong_unary);

macro_rules! impl_native_pos {
    ($t:ident) => {
        impl_pos!($t);
    };
}

for_each_native_int!(impl_native_pos);
impl_pos!(f32);
impl_pos!(f64);
