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

//! # Strong Integer Family (Zero-Cost)
//!
//! Ten distinct fixed-width integer types that wrap exactly one native
//! integer each: `U8`, `U16`, `U32`, `U64`, `Usize`, `I8`, `I16`, `I32`,
//! `I64` and `Isize`. Every type is `#[repr(transparent)]` over its native
//! representation, so it compiles down to the machine integer, while the
//! type system refuses to mix two different widths or signednesses.
//!
//! ## Semantics
//!
//! - Arithmetic (`+ - * / %`, negation and the step operations) always wraps
//!   modulo `2^BITS`, in debug and release builds alike. Unsigned types
//!   support negation (`-x == 0 - x`).
//! - Division and remainder truncate toward zero. `MIN / -1` wraps to `MIN`.
//! - Division or remainder by zero panics with a message naming the type.
//! - Shifts accept any integral amount (`ShiftAmount`). Right shifts are
//!   arithmetic for signed types and logical for unsigned ones. Amounts
//!   outside `0..BITS` panic and are never masked.
//! - Binary operators only accept `Self` as their right-hand side. Mixing
//!   types does not compile:
//!
//! ```compile_fail
//! use stint_core::prelude::*;
//!
//! let _ = u8!(1) + u16!(1);
//! ```
//!
//! ```compile_fail
//! use stint_core::prelude::*;
//!
//! let _ = u8!(1) + 1u8;
//! ```
//!
//! The compound assignment forms reject mixed types the same way:
//!
//! ```compile_fail
//! use stint_core::prelude::*;
//!
//! let mut x = u8!(1);
//! x += u16!(1);
//! ```
//!
//! Shift amounts must be integral:
//!
//! ```compile_fail
//! use stint_core::prelude::*;
//!
//! let _ = u8!(1) << 1.0f32;
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stint_core::prelude::*;
//!
//! let a = u8!(250);
//! assert_eq!(a + u8!(10), u8!(4));
//! assert_eq!((-i32!(7)) / i32!(2), -i32!(3));
//! assert_eq!(u16!(0x0c) << 1u8, u16!(0x18));
//! ```

mod convert;
mod ops;
mod shift;

pub use shift::ShiftAmount;

use crate::literals::LiteralOverflowError;
use crate::num::limits::NumericLimits;
use crate::traits::{Integral, MakeSigned, MakeUnsigned, NativeInt, TypeTraits, sealed};
use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, Shr, Sub, SubAssign,
};
use std::str::FromStr;

/// The capability shared by the ten strong integer types.
///
/// The trait is sealed: only `U8`, `U16`, `U32`, `U64`, `Usize`, `I8`, `I16`,
/// `I32`, `I64` and `Isize` implement it. Generic code can use it as the
/// "is this a strong integer" constraint and still reach the full operator
/// suite through the supertraits.
///
/// # Examples
///
/// ```rust
/// use stint_core::prelude::*;
///
/// fn double<T: StrongInt>(x: T) -> T {
///     x + x
/// }
///
/// assert_eq!(double(u8!(200)), u8!(144));
/// assert_eq!(double(i64!(21)), i64!(42));
/// ```
pub trait StrongInt:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseIntError>
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + TypeTraits
    + Integral
    + NumericLimits
    + MakeSigned
    + MakeUnsigned
{
    /// The native integer this type wraps.
    type Repr: NativeInt;

    /// The width of the type in bits.
    const BITS: u32;

    /// The short name of the type, as used by the literal macros and in panics.
    const NAME: &'static str;

    /// Wraps a native value without any conversion.
    fn from_repr(repr: Self::Repr) -> Self;

    /// Returns the wrapped native value.
    fn to_repr(self) -> Self::Repr;

    /// Builds a value from a non-negative literal known only at runtime.
    ///
    /// Returns an error naming the type if `value` exceeds `MAX`.
    fn try_from_literal(value: u128) -> Result<Self, LiteralOverflowError>;
}

macro_rules! define_strong_int {
    ($(#[$meta:meta])* $name:ident, $repr:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        impl $name {
            /// The smallest value of this type.
            pub const MIN: Self = Self(<$repr>::MIN);
            /// The largest value of this type.
            pub const MAX: Self = Self(<$repr>::MAX);
            /// The value `0`.
            pub const ZERO: Self = Self(0);
            /// The value `1`.
            pub const ONE: Self = Self(1);
            /// The width of this type in bits.
            pub const BITS: u32 = <$repr>::BITS;
            /// The short name of this type.
            pub const NAME: &'static str = stringify!($repr);

            /// Wraps a native value.
            #[inline(always)]
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }

            /// Returns the native value.
            #[inline(always)]
            pub const fn get(self) -> $repr {
                self.0
            }
        }

        impl sealed::Sealed for $name {}

        impl StrongInt for $name {
            type Repr = $repr;

            const BITS: u32 = <$repr>::BITS;
            const NAME: &'static str = stringify!($repr);

            #[inline(always)]
            fn from_repr(repr: $repr) -> Self {
                Self(repr)
            }

            #[inline(always)]
            fn to_repr(self) -> $repr {
                self.0
            }

            #[inline]
            fn try_from_literal(value: u128) -> Result<Self, LiteralOverflowError> {
                if value > <$repr>::MAX as u128 {
                    return Err(LiteralOverflowError::new(Self::NAME, value));
                }
                Ok(Self(value as $repr))
            }
        }
    };
}

define_strong_int!(
    /// An unsigned 8-bit strong integer wrapping `u8`.
    U8, u8
);
define_strong_int!(
    /// An unsigned 16-bit strong integer wrapping `u16`.
    U16, u16
);
define_strong_int!(
    /// An unsigned 32-bit strong integer wrapping `u32`.
    U32, u32
);
define_strong_int!(
    /// An unsigned 64-bit strong integer wrapping `u64`.
    U64, u64
);
define_strong_int!(
    /// An unsigned pointer-sized strong integer wrapping `usize`.
    ///
    /// Its signed counterpart is `Isize`.
    Usize, usize
);
define_strong_int!(
    /// A signed 8-bit strong integer wrapping `i8`.
    I8, i8
);
define_strong_int!(
    /// A signed 16-bit strong integer wrapping `i16`.
    I16, i16
);
define_strong_int!(
    /// A signed 32-bit strong integer wrapping `i32`.
    I32, i32
);
define_strong_int!(
    /// A signed 64-bit strong integer wrapping `i64`.
    I64, i64
);
define_strong_int!(
    /// A signed pointer-sized strong integer wrapping `isize`.
    ///
    /// Its unsigned counterpart is `Usize`.
    Isize, isize
);

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn division_by_zero(name: &'static str) -> ! {
    panic!("attempt to divide {name} by zero")
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn remainder_by_zero(name: &'static str) -> ! {
    panic!("attempt to calculate the remainder of {name} with a divisor of zero")
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn shift_out_of_range(
    name: &'static str,
    direction: &'static str,
    bits: u32,
    amount: &dyn fmt::Display,
) -> ! {
    panic!("attempt to shift {name} {direction} by {amount}, which is outside 0..{bits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        assert_eq!(U8::new(42).get(), 42);
        assert_eq!(I16::new(-7).get(), -7);
        assert_eq!(Usize::new(usize::MAX).get(), usize::MAX);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(U32::default(), U32::ZERO);
        assert_eq!(I64::default().get(), 0);
        assert_eq!(Isize::default(), Isize::new(0));
    }

    #[test]
    fn test_bits_and_names() {
        assert_eq!(U8::BITS, 8);
        assert_eq!(I16::BITS, 16);
        assert_eq!(U64::BITS, 64);
        assert_eq!(Usize::BITS, usize::BITS);
        assert_eq!(Isize::BITS, isize::BITS);
        assert_eq!(<I32 as StrongInt>::BITS, 32);

        assert_eq!(U8::NAME, "u8");
        assert_eq!(Usize::NAME, "usize");
        assert_eq!(<Isize as StrongInt>::NAME, "isize");
    }

    #[test]
    fn test_min_max() {
        assert_eq!(U8::MIN.get(), 0);
        assert_eq!(U8::MAX.get(), 255);
        assert_eq!(I8::MIN.get(), -128);
        assert_eq!(I8::MAX.get(), 127);
        assert_eq!(I64::MIN.get(), i64::MIN);
        assert_eq!(Usize::MAX.get(), usize::MAX);
    }

    #[test]
    fn test_ordering_follows_signedness() {
        // Same bit pattern, different interpretation.
        assert!(U8::new(0x80) > U8::new(0x7f));
        assert!(I8::new(i8::MIN) < I8::new(0x7f));
        assert!(I32::new(-1) < I32::ZERO);
        assert!(U32::new(u32::MAX) > U32::ZERO);

        let mut values = vec![I16::new(3), I16::new(-5), I16::new(0)];
        values.sort();
        assert_eq!(values, vec![I16::new(-5), I16::new(0), I16::new(3)]);
    }

    #[test]
    fn test_strong_int_round_trip() {
        fn round_trip<T: StrongInt>(repr: T::Repr) -> T::Repr {
            T::from_repr(repr).to_repr()
        }
        assert_eq!(round_trip::<U16>(0xbeef), 0xbeef);
        assert_eq!(round_trip::<I8>(-1), -1);
    }

    #[test]
    fn test_try_from_literal() {
        assert_eq!(U8::try_from_literal(255), Ok(U8::MAX));
        assert_eq!(I8::try_from_literal(127), Ok(I8::MAX));
        assert_eq!(I64::try_from_literal(0), Ok(I64::ZERO));

        let err = U8::try_from_literal(256).unwrap_err();
        assert_eq!(err.type_name(), "u8");
        assert_eq!(err.value(), 256);

        // Signed literals are checked against the positive half only.
        assert!(I8::try_from_literal(128).is_err());
        assert!(U64::try_from_literal(u64::MAX as u128 + 1).is_err());
    }

    #[test]
    fn test_generic_signedness_query() {
        fn signed<T: StrongInt>() -> bool {
            T::IS_SIGNED
        }
        fn unsigned<T: StrongInt>() -> bool {
            T::IS_UNSIGNED
        }
        assert!(signed::<I8>());
        assert!(signed::<Isize>());
        assert!(!signed::<U64>());
        assert!(unsigned::<Usize>());
        assert!(!unsigned::<I32>());
    }

    #[test]
    fn test_hash_matches_native() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher;

        fn hash_of<T: Hash>(value: T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(U32::new(42)), hash_of(42u32));
        assert_eq!(hash_of(I8::new(-3)), hash_of(-3i8));
    }
}
