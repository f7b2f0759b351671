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

//! # Numeric Limits
//!
//! `NumericLimits` collects the bounds, digit counts and special values of a
//! numeric type in one record of associated constants, so generic code can
//! ask for them without knowing the concrete type.
//!
//! - Integers: `MIN`/`LOWEST` is the most negative value, `MAX` the largest.
//!   `DIGITS` counts the value bits (`BITS` minus the sign bit). Properties
//!   without meaning for integers (`EPSILON`, `INFINITY`, the NaNs, ...) are
//!   zero.
//! - Floats: `MIN` is the smallest positive normal value, `LOWEST` the most
//!   negative finite value and `DENORM_MIN` the smallest subnormal.
//! - Strong integers forward every property to their representation.
//!
//! ```rust
//! use stint_core::prelude::*;
//!
//! assert_eq!(<U8 as NumericLimits>::DIGITS, 8);
//! assert_eq!(<I8 as NumericLimits>::DIGITS, 7);
//! assert_eq!(<I16 as NumericLimits>::LOWEST, I16::MIN);
//! assert!(<f64 as NumericLimits>::MIN > 0.0);
//! ```

use crate::int::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};

/// Compile-time bounds and properties of a numeric type.
pub trait NumericLimits: Sized {
    /// The largest finite value.
    const MAX: Self;
    /// The smallest value for integers, the smallest positive normal value
    /// for floats.
    const MIN: Self;
    /// The most negative finite value.
    const LOWEST: Self;
    /// The difference between `1` and the next representable value.
    const EPSILON: Self;
    /// The maximum rounding error.
    const ROUND_ERROR: Self;
    /// Positive infinity, or zero where there is none.
    const INFINITY: Self;
    /// A quiet NaN, or zero where there is none.
    const QUIET_NAN: Self;
    /// A signaling NaN, or zero where there is none.
    const SIGNALING_NAN: Self;
    /// The smallest positive subnormal value, or zero for integers.
    const DENORM_MIN: Self;

    /// The number of `RADIX` digits representable without change.
    const DIGITS: u32;
    /// The number of decimal digits representable without change.
    const DIGITS10: u32;
    /// The base of the representation.
    const RADIX: u32;

    /// `true` if the type can represent negative values.
    ///
    /// Named apart from `TypeTraits::IS_SIGNED` so that `T::IS_SIGNED` stays
    /// unambiguous for `T: StrongInt`, which has both traits as supertraits.
    const IS_SIGNED_REPR: bool;
    /// `true` if the type is an integer.
    const IS_INTEGER: bool;
    /// `true` if the type represents its values exactly.
    const IS_EXACT: bool;
    /// `true` if the set of values is finite.
    const IS_BOUNDED: bool;
    /// `true` if the type has a representation of positive infinity.
    const HAS_INFINITY: bool;
    /// `true` if the type has a quiet NaN.
    const HAS_QUIET_NAN: bool;
    /// `true` if the type has a signaling NaN.
    const HAS_SIGNALING_NAN: bool;
}

macro_rules! impl_native_limits {
    ($t:ident) => {
        impl NumericLimits for $t {
            const MAX: Self = <$t>::MAX;
            const MIN: Self = <$t>::MIN;
            const LOWEST: Self = <$t>::MIN;
            const EPSILON: Self = 0;
            const ROUND_ERROR: Self = 0;
            const INFINITY: Self = 0;
            const QUIET_NAN: Self = 0;
            const SIGNALING_NAN: Self = 0;
            const DENORM_MIN: Self = 0;

            const DIGITS: u32 = <$t>::BITS - (<$t>::MIN != 0) as u32;
            // floor(DIGITS * log10(2))
            const DIGITS10: u32 = (Self::DIGITS as u64 * 30_103 / 100_000) as u32;
            const RADIX: u32 = 2;

            const IS_SIGNED_REPR: bool = <$t>::MIN != 0;
            const IS_INTEGER: bool = true;
            const IS_EXACT: bool = true;
            const IS_BOUNDED: bool = true;
            const HAS_INFINITY: bool = false;
            const HAS_QUIET_NAN: bool = false;
            const HAS_SIGNALING_NAN: bool = false;
        }
    };
}

for_each_native_int!(impl_native_limits);

macro_rules! impl_float_limits {
    ($t:ident, $signaling_bits:expr) => {
        impl NumericLimits for $t {
            const MAX: Self = <$t>::MAX;
            const MIN: Self = <$t>::MIN_POSITIVE;
            const LOWEST: Self = <$t>::MIN;
            const EPSILON: Self = <$t>::EPSILON;
            const ROUND_ERROR: Self = 0.5;
            const INFINITY: Self = <$t>::INFINITY;
            const QUIET_NAN: Self = <$t>::NAN;
            const SIGNALING_NAN: Self = <$t>::from_bits($signaling_bits);
            const DENORM_MIN: Self = <$t>::from_bits(1);

            const DIGITS: u32 = <$t>::MANTISSA_DIGITS;
            const DIGITS10: u32 = <$t>::DIGITS;
            const RADIX: u32 = <$t>::RADIX;

            const IS_SIGNED_REPR: bool = true;
            const IS_INTEGER: bool = false;
            const IS_EXACT: bool = false;
            const IS_BOUNDED: bool = true;
            const HAS_INFINITY: bool = true;
            const HAS_QUIET_NAN: bool = true;
            const HAS_SIGNALING_NAN: bool = true;
        }
    };
}

impl_float_limits!(f32, 0x7fa0_0000);
impl_float_limits!(f64, 0x7ff4_0000_0000_0000);

macro_rules! impl_strong_limits {
    ($name:ident, $repr:ident) => {
        impl NumericLimits for $name {
            const MAX: Self = $name::new(<$repr as NumericLimits>::MAX);
            const MIN: Self = $name::new(<$repr as NumericLimits>::MIN);
            const LOWEST: Self = $name::new(<$repr as NumericLimits>::LOWEST);
            const EPSILON: Self = $name::new(<$repr as NumericLimits>::EPSILON);
            const ROUND_ERROR: Self = $name::new(<$repr as NumericLimits>::ROUND_ERROR);
            const INFINITY: Self = $name::new(<$repr as NumericLimits>::INFINITY);
            const QUIET_NAN: Self = $name::new(<$repr as NumericLimits>::QUIET_NAN);
            const SIGNALING_NAN: Self = $name::new(<$repr as NumericLimits>::SIGNALING_NAN);
            const DENORM_MIN: Self = $name::new(<$repr as NumericLimits>::DENORM_MIN);

            const DIGITS: u32 = <$repr as NumericLimits>::DIGITS;
            const DIGITS10: u32 = <$repr as NumericLimits>::DIGITS10;
            const RADIX: u32 = <$repr as NumericLimits>::RADIX;

            const IS_SIGNED_REPR: bool = <$repr as NumericLimits>::IS_SIGNED_REPR;
            const IS_INTEGER: bool = <$repr as NumericLimits>::IS_INTEGER;
            const IS_EXACT: bool = <$repr as NumericLimits>::IS_EXACT;
            const IS_BOUNDED: bool = <$repr as NumericLimits>::IS_BOUNDED;
            const HAS_INFINITY: bool = <$repr as NumericLimits>::HAS_INFINITY;
            const HAS_QUIET_NAN: bool = <$repr as NumericLimits>::HAS_QUIET_NAN;
            const HAS_SIGNALING_NAN: bool = <$repr as NumericLimits>::HAS_SIGNALING_NAN;
        }
    };
}

for_each_strong_int!(impl_strong_limits);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(<u8 as NumericLimits>::DIGITS, 8);
        assert_eq!(<i8 as NumericLimits>::DIGITS, 7);
        assert_eq!(<u32 as NumericLimits>::DIGITS, 32);
        assert_eq!(<i64 as NumericLimits>::DIGITS, 63);
        assert_eq!(<u128 as NumericLimits>::DIGITS, 128);

        assert_eq!(<U8 as NumericLimits>::DIGITS, 8);
        assert_eq!(<I8 as NumericLimits>::DIGITS, 7);
        assert_eq!(<U16 as NumericLimits>::DIGITS, 16);
        assert_eq!(<I32 as NumericLimits>::DIGITS, 31);
        assert_eq!(<Usize as NumericLimits>::DIGITS, usize::BITS);
        assert_eq!(<Isize as NumericLimits>::DIGITS, isize::BITS - 1);
    }

    #[test]
    fn test_digits10() {
        assert_eq!(<u8 as NumericLimits>::DIGITS10, 2);
        assert_eq!(<i8 as NumericLimits>::DIGITS10, 2);
        assert_eq!(<u16 as NumericLimits>::DIGITS10, 4);
        assert_eq!(<i32 as NumericLimits>::DIGITS10, 9);
        assert_eq!(<u64 as NumericLimits>::DIGITS10, 19);
        assert_eq!(<i64 as NumericLimits>::DIGITS10, 18);
        assert_eq!(<f32 as NumericLimits>::DIGITS10, 6);
        assert_eq!(<f64 as NumericLimits>::DIGITS10, 15);
    }

    #[test]
    fn test_strong_limits_forward_to_repr() {
        assert_eq!(<U8 as NumericLimits>::MAX, U8::MAX);
        assert_eq!(<U8 as NumericLimits>::MIN, U8::MIN);
        assert_eq!(<I8 as NumericLimits>::LOWEST, I8::new(-128));
        assert_eq!(<I64 as NumericLimits>::MAX.get(), i64::MAX);
        assert_eq!(<U32 as NumericLimits>::EPSILON, U32::ZERO);
        assert_eq!(<I16 as NumericLimits>::QUIET_NAN, I16::ZERO);
        assert_eq!(<U64 as NumericLimits>::DENORM_MIN, U64::ZERO);

        assert!(<I32 as NumericLimits>::IS_SIGNED_REPR);
        assert!(!<U32 as NumericLimits>::IS_SIGNED_REPR);
        assert!(<Usize as NumericLimits>::IS_INTEGER);
        assert!(<Isize as NumericLimits>::IS_EXACT);
        assert!(<U16 as NumericLimits>::IS_BOUNDED);
        assert!(!<I8 as NumericLimits>::HAS_INFINITY);
        assert!(!<U8 as NumericLimits>::HAS_QUIET_NAN);
        assert_eq!(<U8 as NumericLimits>::RADIX, 2);
    }

    #[test]
    fn test_float_limits() {
        assert_eq!(<f32 as NumericLimits>::MIN, f32::MIN_POSITIVE);
        assert_eq!(<f32 as NumericLimits>::LOWEST, f32::MIN);
        assert_eq!(<f64 as NumericLimits>::DIGITS, 53);
        assert_eq!(<f32 as NumericLimits>::DIGITS, 24);
        assert_eq!(<f64 as NumericLimits>::ROUND_ERROR, 0.5);
        assert_eq!(<f64 as NumericLimits>::INFINITY, f64::INFINITY);

        let denorm = <f64 as NumericLimits>::DENORM_MIN;
        assert!(denorm > 0.0 && !denorm.is_normal());

        assert!(<f32 as NumericLimits>::QUIET_NAN.is_nan());
        assert!(<f64 as NumericLimits>::SIGNALING_NAN.is_nan());
        assert!(<f32 as NumericLimits>::SIGNALING_NAN.is_nan());
        assert!(!<f64 as NumericLimits>::IS_EXACT);
        assert!(<f32 as NumericLimits>::HAS_SIGNALING_NAN);
    }

    #[test]
    fn test_forwarding_every_type() {
        macro_rules! check {
            ($name:ident, $repr:ident) => {
                assert_eq!(
                    <$name as NumericLimits>::MAX.get(),
                    <$repr as NumericLimits>::MAX,
                    "{}",
                    $name::NAME
                );
                assert_eq!(
                    <$name as NumericLimits>::MIN.get(),
                    <$repr as NumericLimits>::MIN,
                    "{}",
                    $name::NAME
                );
                assert_eq!(
                    <$name as NumericLimits>::LOWEST.get(),
                    <$repr as NumericLimits>::LOWEST,
                    "{}",
                    $name::NAME
                );
                assert_eq!(<$name as NumericLimits>::MAX, $name::MAX, "{}", $name::NAME);
                assert_eq!(<$name as NumericLimits>::LOWEST, $name::MIN, "{}", $name::NAME);
                assert_eq!(
                    <$name as NumericLimits>::DIGITS,
                    <$repr as NumericLimits>::DIGITS,
                    "{}",
                    $name::NAME
                );
                assert_eq!(
                    <$name as NumericLimits>::DIGITS10,
                    <$repr as NumericLimits>::DIGITS10,
                    "{}",
                    $name::NAME
                );
                assert_eq!(
                    <$name as NumericLimits>::IS_SIGNED_REPR,
                    <$repr as NumericLimits>::IS_SIGNED_REPR,
                    "{}",
                    $name::NAME
                );
                assert_eq!(<$name as NumericLimits>::EPSILON, $name::ZERO, "{}", $name::NAME);
            };
        }
        for_each_strong_int!(check);
    }
}
