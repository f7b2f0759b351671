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

use super::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize, shift_out_of_range};
use crate::traits::Integral;
use std::fmt;
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

/// An integral type usable as the right-hand side of a shift.
///
/// Shifts are the one place where a strong integer accepts a different type
/// as its operand. Every native integer and every strong integer is a valid
/// shift amount, signed or unsigned.
///
/// # Examples
///
/// ```rust
/// use stint_core::prelude::*;
///
/// let x = u32!(0x0c);
/// assert_eq!(x << 1u8, u32!(0x18));
/// assert_eq!(x << iz!(1), u32!(0x18));
/// assert_eq!(x >> i8!(2), u32!(3));
/// ```
pub trait ShiftAmount: Integral + Copy + fmt::Display {
    /// Returns the amount as `u32`, or `None` if it is negative or does not fit.
    fn shift_amount(self) -> Option<u32>;
}

macro_rules! impl_native_shift_amount {
    ($t:ty) => {
        impl ShiftAmount for $t {
            #[inline(always)]
            fn shift_amount(self) -> Option<u32> {
                u32::try_from(self).ok()
            }
        }
    };
}

for_each_native_int!(impl_native_shift_amount);

macro_rules! impl_shifts {
    ($name:ident, $repr:ident) => {
        impl ShiftAmount for $name {
            #[inline(always)]
            fn shift_amount(self) -> Option<u32> {
                self.0.shift_amount()
            }
        }

        impl<S: ShiftAmount> Shl<S> for $name {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn shl(self, rhs: S) -> Self {
                match rhs.shift_amount().and_then(|n| self.0.checked_shl(n)) {
                    Some(value) => Self(value),
                    None => shift_out_of_range(Self::NAME, "left", Self::BITS, &rhs),
                }
            }
        }

        impl<S: ShiftAmount> Shr<S> for $name {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn shr(self, rhs: S) -> Self {
                match rhs.shift_amount().and_then(|n| self.0.checked_shr(n)) {
                    Some(value) => Self(value),
                    None => shift_out_of_range(Self::NAME, "right", Self::BITS, &rhs),
                }
            }
        }

        impl<S: ShiftAmount> ShlAssign<S> for $name {
            #[inline]
            #[track_caller]
            fn shl_assign(&mut self, rhs: S) {
                *self = *self << rhs;
            }
        }

        impl<S: ShiftAmount> ShrAssign<S> for $name {
            #[inline]
            #[track_caller]
            fn shr_assign(&mut self, rhs: S) {
                *self = *self >> rhs;
            }
        }
    };
}

for_each_strong_int!(impl_shifts);
