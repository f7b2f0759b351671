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

use super::{
    I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize, division_by_zero, remainder_by_zero,
};
use crate::num::constants::{PlusOne, Zero};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

macro_rules! impl_wrapping_op {
    ($name:ident, $trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $wrapping:ident) => {
        impl $trait_name for $name {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0.$wrapping(rhs.0))
            }
        }

        impl $assign_trait for $name {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait_name::$method(*self, rhs);
            }
        }
    };
}

macro_rules! impl_bit_op {
    ($name:ident, $trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait_name for $name {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0 $op rhs.0)
            }
        }

        impl $assign_trait for $name {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait_name::$method(*self, rhs);
            }
        }
    };
}

macro_rules! impl_ops {
    ($name:ident, $repr:ident) => {
        impl_wrapping_op!($name, Add, add, AddAssign, add_assign, wrapping_add);
        impl_wrapping_op!($name, Sub, sub, SubAssign, sub_assign, wrapping_sub);
        impl_wrapping_op!($name, Mul, mul, MulAssign, mul_assign, wrapping_mul);

        impl_bit_op!($name, BitAnd, bitand, BitAndAssign, bitand_assign, &);
        impl_bit_op!($name, BitOr, bitor, BitOrAssign, bitor_assign, |);
        impl_bit_op!($name, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

        impl Div for $name {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn div(self, rhs: Self) -> Self {
                if rhs.0 == 0 {
                    division_by_zero(Self::NAME);
                }
                Self(self.0.wrapping_div(rhs.0))
            }
        }

        impl DivAssign for $name {
            #[inline]
            #[track_caller]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl Rem for $name {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn rem(self, rhs: Self) -> Self {
                if rhs.0 == 0 {
                    remainder_by_zero(Self::NAME);
                }
                Self(self.0.wrapping_rem(rhs.0))
            }
        }

        impl RemAssign for $name {
            #[inline]
            #[track_caller]
            fn rem_assign(&mut self, rhs: Self) {
                *self = *self % rhs;
            }
        }

        // Unsigned types negate modulo 2^BITS, like the machine does.
        impl Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self(self.0.wrapping_neg())
            }
        }

        impl Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as Zero>::ZERO, Add::add)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl Product for $name {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as PlusOne>::PLUS_ONE, Mul::mul)
            }
        }

        impl<'a> Product<&'a $name> for $name {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().product()
            }
        }
    };
}

for_each_strong_int!(impl_ops);
