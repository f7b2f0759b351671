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

//! # `num-traits` Interoperability
//!
//! Enabled by the `num-traits-interop` feature. The strong integers implement
//! the `num_traits` integer traits, so code that is generic over
//! `T: PrimInt` (or `T: PrimInt + Signed`) accepts them like any native
//! integer:
//!
//! ```rust
//! use num_traits::PrimInt;
//! use stint_core::prelude::*;
//!
//! fn highest_bit<T: PrimInt>(x: T) -> u32 {
//!     (std::mem::size_of::<T>() as u32) * 8 - x.leading_zeros()
//! }
//!
//! assert_eq!(highest_bit(u16!(0x0100)), 9);
//! assert_eq!(highest_bit(0x0100u16), 9);
//! ```
//!
//! This is a compatibility layer. The checked and saturating methods exist
//! because `PrimInt` requires them; the strong integer operators themselves
//! always wrap. `pow` wraps as well.

use crate::int::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};
use crate::num::limits::NumericLimits;
use std::num::ParseIntError;

macro_rules! impl_num_traits {
    ($name:ident, $repr:ident) => {
        impl num_traits::Zero for $name {
            #[inline]
            fn zero() -> Self {
                $name::ZERO
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.get() == 0
            }
        }

        impl num_traits::One for $name {
            #[inline]
            fn one() -> Self {
                $name::ONE
            }
        }

        impl num_traits::Num for $name {
            type FromStrRadixErr = ParseIntError;

            #[inline]
            fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
                $name::from_str_radix(src, radix)
            }
        }

        impl num_traits::Bounded for $name {
            #[inline]
            fn min_value() -> Self {
                <$name as NumericLimits>::LOWEST
            }

            #[inline]
            fn max_value() -> Self {
                <$name as NumericLimits>::MAX
            }
        }

        impl num_traits::ToPrimitive for $name {
            #[inline]
            fn to_i64(&self) -> Option<i64> {
                <$repr as num_traits::ToPrimitive>::to_i64(&self.get())
            }

            #[inline]
            fn to_u64(&self) -> Option<u64> {
                <$repr as num_traits::ToPrimitive>::to_u64(&self.get())
            }

            #[inline]
            fn to_i128(&self) -> Option<i128> {
                <$repr as num_traits::ToPrimitive>::to_i128(&self.get())
            }

            #[inline]
            fn to_u128(&self) -> Option<u128> {
                <$repr as num_traits::ToPrimitive>::to_u128(&self.get())
            }

            #[inline]
            fn to_f64(&self) -> Option<f64> {
                <$repr as num_traits::ToPrimitive>::to_f64(&self.get())
            }
        }

        impl num_traits::FromPrimitive for $name {
            #[inline]
            fn from_i64(n: i64) -> Option<Self> {
                <$repr as num_traits::FromPrimitive>::from_i64(n).map($name::new)
            }

            #[inline]
            fn from_u64(n: u64) -> Option<Self> {
                <$repr as num_traits::FromPrimitive>::from_u64(n).map($name::new)
            }

            #[inline]
            fn from_i128(n: i128) -> Option<Self> {
                <$repr as num_traits::FromPrimitive>::from_i128(n).map($name::new)
            }

            #[inline]
            fn from_u128(n: u128) -> Option<Self> {
                <$repr as num_traits::FromPrimitive>::from_u128(n).map($name::new)
            }
        }

        impl num_traits::NumCast for $name {
            #[inline]
            fn from<T: num_traits::ToPrimitive>(n: T) -> Option<Self> {
                <$repr as num_traits::NumCast>::from(n).map($name::new)
            }
        }

        impl num_traits::CheckedAdd for $name {
            #[inline]
            fn checked_add(&self, v: &Self) -> Option<Self> {
                self.get().checked_add(v.get()).map($name::new)
            }
        }

        impl num_traits::CheckedSub for $name {
            #[inline]
            fn checked_sub(&self, v: &Self) -> Option<Self> {
                self.get().checked_sub(v.get()).map($name::new)
            }
        }

        impl num_traits::CheckedMul for $name {
            #[inline]
            fn checked_mul(&self, v: &Self) -> Option<Self> {
                self.get().checked_mul(v.get()).map($name::new)
            }
        }

        impl num_traits::CheckedDiv for $name {
            #[inline]
            fn checked_div(&self, v: &Self) -> Option<Self> {
                self.get().checked_div(v.get()).map($name::new)
            }
        }

        impl num_traits::Saturating for $name {
            #[inline]
            fn saturating_add(self, v: Self) -> Self {
                $name::new(self.get().saturating_add(v.get()))
            }

            #[inline]
            fn saturating_sub(self, v: Self) -> Self {
                $name::new(self.get().saturating_sub(v.get()))
            }
        }

        impl num_traits::WrappingAdd for $name {
            #[inline]
            fn wrapping_add(&self, v: &Self) -> Self {
                *self + *v
            }
        }

        impl num_traits::WrappingSub for $name {
            #[inline]
            fn wrapping_sub(&self, v: &Self) -> Self {
                *self - *v
            }
        }

        impl num_traits::WrappingMul for $name {
            #[inline]
            fn wrapping_mul(&self, v: &Self) -> Self {
                *self * *v
            }
        }

        impl num_traits::WrappingNeg for $name {
            #[inline]
            fn wrapping_neg(&self) -> Self {
                -*self
            }
        }

        impl num_traits::WrappingShl for $name {
            #[inline]
            fn wrapping_shl(&self, rhs: u32) -> Self {
                $name::new(self.get().wrapping_shl(rhs))
            }
        }

        impl num_traits::WrappingShr for $name {
            #[inline]
            fn wrapping_shr(&self, rhs: u32) -> Self {
                $name::new(self.get().wrapping_shr(rhs))
            }
        }

        impl num_traits::PrimInt for $name {
            #[inline]
            fn count_ones(self) -> u32 {
                self.get().count_ones()
            }

            #[inline]
            fn count_zeros(self) -> u32 {
                self.get().count_zeros()
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                self.get().leading_zeros()
            }

            #[inline]
            fn trailing_zeros(self) -> u32 {
                self.get().trailing_zeros()
            }

            #[inline]
            fn rotate_left(self, n: u32) -> Self {
                $name::new(self.get().rotate_left(n))
            }

            #[inline]
            fn rotate_right(self, n: u32) -> Self {
                $name::new(self.get().rotate_right(n))
            }

            #[inline]
            fn signed_shl(self, n: u32) -> Self {
                $name::new(<$repr as num_traits::PrimInt>::signed_shl(self.get(), n))
            }

            #[inline]
            fn signed_shr(self, n: u32) -> Self {
                $name::new(<$repr as num_traits::PrimInt>::signed_shr(self.get(), n))
            }

            #[inline]
            fn unsigned_shl(self, n: u32) -> Self {
                $name::new(<$repr as num_traits::PrimInt>::unsigned_shl(self.get(), n))
            }

            #[inline]
            fn unsigned_shr(self, n: u32) -> Self {
                $name::new(<$repr as num_traits::PrimInt>::unsigned_shr(self.get(), n))
            }

            #[inline]
            fn swap_bytes(self) -> Self {
                $name::new(self.get().swap_bytes())
            }

            #[inline]
            fn from_be(x: Self) -> Self {
                $name::new(<$repr>::from_be(x.get()))
            }

            #[inline]
            fn from_le(x: Self) -> Self {
                $name::new(<$repr>::from_le(x.get()))
            }

            #[inline]
            fn to_be(self) -> Self {
                $name::new(self.get().to_be())
            }

            #[inline]
            fn to_le(self) -> Self {
                $name::new(self.get().to_le())
            }

            #[inline]
            fn pow(self, exp: u32) -> Self {
                $name::new(self.get().wrapping_pow(exp))
            }
        }
    };
}

for_each_strong_int!(impl_num_traits);

macro_rules! impl_signed {
    ($name:ident, $repr:ident) => {
        impl num_traits::Signed for $name {
            #[inline]
            fn abs(&self) -> Self {
                $name::new(self.get().wrapping_abs())
            }

            #[inline]
            fn abs_sub(&self, other: &Self) -> Self {
                if *self <= *other {
                    $name::ZERO
                } else {
                    *self - *other
                }
            }

            #[inline]
            fn signum(&self) -> Self {
                $name::new(self.get().signum())
            }

            #[inline]
            fn is_positive(&self) -> bool {
                self.get() > 0
            }

            #[inline]
            fn is_negative(&self) -> bool {
                self.get() < 0
            }
        }
    };
}

macro_rules! impl_unsigned {
    ($name:ident, $repr:ident) => {
        impl num_traits::Unsigned for $name {}
    };
}

for_each_signed_strong_int!(impl_signed);
for_each_unsigned_strong_int!(impl_unsigned);

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{Bounded, CheckedAdd, NumCast, PrimInt, Saturating, Signed, ToPrimitive};

    #[test]
    fn test_num_from_str_radix_keeps_clamping() {
        assert_eq!(
            <U8 as num_traits::Num>::from_str_radix("300", 10),
            Ok(U8::MAX)
        );
        assert_eq!(
            <I32 as num_traits::Num>::from_str_radix("-7f", 16),
            Ok(I32::new(-127))
        );
    }

    #[test]
    fn test_bounded_and_cast() {
        assert_eq!(<I16 as Bounded>::min_value(), I16::MIN);
        assert_eq!(<U64 as Bounded>::max_value(), U64::MAX);
        assert_eq!(<U8 as NumCast>::from(300u32), None);
        assert_eq!(<U8 as NumCast>::from(200u32), Some(U8::new(200)));
        assert_eq!(<I8 as NumCast>::from(-1.9f64), Some(I8::new(-1)));
        assert_eq!(Usize::new(5).to_u64(), Some(5));
        assert_eq!(I64::new(-1).to_u64(), None);
    }

    #[test]
    fn test_checked_and_saturating() {
        assert_eq!(U8::MAX.checked_add(&U8::ONE), None);
        assert_eq!(U8::new(1).checked_add(&U8::ONE), Some(U8::new(2)));
        assert_eq!(U8::MAX.saturating_add(U8::ONE), U8::MAX);
        assert_eq!(I8::MIN.saturating_sub(I8::ONE), I8::MIN);
    }

    #[test]
    fn test_prim_int_methods() {
        assert_eq!(PrimInt::count_ones(U32::new(0b1011)), 3);
        assert_eq!(PrimInt::leading_zeros(U16::new(1)), 15);
        assert_eq!(PrimInt::trailing_zeros(I64::new(8)), 3);
        assert_eq!(PrimInt::rotate_left(U8::new(0x81), 1), U8::new(0x03));
        assert_eq!(PrimInt::swap_bytes(U16::new(0x1234)), U16::new(0x3412));
        assert_eq!(PrimInt::pow(U8::new(2), 9), U8::ZERO);
        assert_eq!(PrimInt::pow(I32::new(-3), 3), I32::new(-27));
        assert_eq!(PrimInt::signed_shr(U8::new(0x80), 7), U8::MAX);
    }

    #[test]
    fn test_signed() {
        assert_eq!(Signed::abs(&I32::new(-5)), I32::new(5));
        assert_eq!(Signed::abs(&I8::MIN), I8::MIN);
        assert_eq!(Signed::signum(&I16::new(-9)), I16::new(-1));
        assert_eq!(Signed::abs_sub(&I8::MAX, &I8::MIN), I8::new(-1));
        assert_eq!(Signed::abs_sub(&I8::new(1), &I8::new(3)), I8::ZERO);
        assert!(Signed::is_negative(&Isize::new(-1)));
        assert!(Signed::is_positive(&Isize::new(1)));
    }
}
