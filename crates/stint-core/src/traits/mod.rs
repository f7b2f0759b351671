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

//! # Type Traits and Capabilities
//!
//! A compile-time trait system that classifies types the same way over the
//! strong integers and the native primitives. Every classification exists in
//! two forms:
//!
//! - **Boolean constants** on the `TypeTraits` record, with `const fn`
//!   accessors (`is_integral::<T>()`, `is_signed::<T>()`, ...) usable in
//!   `const` items and `assert!`s.
//! - **Marker traits** (`StrongInt`, `Integral`, `Arithmetic`,
//!   `SignedIntegral`, `UnsignedIntegral`) usable as generic bounds.
//!
//! Type-level functions map each integral type to its signed and unsigned
//! counterpart of the same width (`SignedOf<T>`, `UnsignedOf<T>`).
//!
//! | Type                | strong | integral | arithmetic | signed | unsigned |
//! |---------------------|--------|----------|------------|--------|----------|
//! | `U8` ... `Usize`    | yes    | yes      | yes        | no     | yes      |
//! | `I8` ... `Isize`    | yes    | yes      | yes        | yes    | no       |
//! | `u8` ... `usize`    | no     | yes      | yes        | no     | yes      |
//! | `i8` ... `isize`    | no     | yes      | yes        | yes    | no       |
//! | `f32`, `f64`        | no     | no       | yes        | yes    | no       |
//! | `bool`, `char`      | no     | no       | no         | no     | no       |
//!
//! ```rust
//! use stint_core::prelude::*;
//! use stint_core::traits::{UnsignedOf, is_integral, is_strong_int};
//!
//! const _: () = assert!(is_strong_int::<I32>() && !is_strong_int::<i32>());
//! const _: () = assert!(is_integral::<u64>());
//!
//! let x: UnsignedOf<I32> = u32!(7);
//! assert_eq!(x, u32!(7));
//! ```
//!
//! The mappings are not defined for non-integral types:
//!
//! ```compile_fail
//! use stint_core::traits::UnsignedOf;
//!
//! let _: UnsignedOf<f32> = 0;
//! ```
//!
//! ```compile_fail
//! use stint_core::traits::SignedOf;
//!
//! let _: SignedOf<f64> = 0;
//! ```

mod make;

pub use crate::int::StrongInt;
pub use make::{MakeSigned, MakeUnsigned, SignedOf, UnsignedOf};

use crate::int::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};
use num_traits::PrimInt;
use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// The compile-time trait record of a type.
///
/// Implemented for the strong integers, every native integer, `f32`, `f64`,
/// `bool` and `char`.
pub trait TypeTraits {
    /// `true` only for the ten strong integer types.
    const IS_STRONG_INT: bool;
    /// `true` for strong and native integers.
    const IS_INTEGRAL: bool;
    /// `true` for integral types and floating-point types.
    const IS_ARITHMETIC: bool;
    /// `true` for signed integers and floating-point types.
    const IS_SIGNED: bool;
    /// `true` for unsigned integers.
    const IS_UNSIGNED: bool;
}

/// Marker for types that are integers, strong or native.
pub trait Integral: TypeTraits {}

/// Marker for integral and floating-point types.
pub trait Arithmetic: TypeTraits {}

/// Marker for signed integers, strong or native.
///
/// ```rust
/// use stint_core::prelude::*;
/// use stint_core::traits::SignedIntegral;
///
/// fn flip<T: SignedIntegral + std::ops::Neg<Output = T>>(x: T) -> T {
///     -x
/// }
///
/// assert_eq!(flip(i16!(5)), -i16!(5));
/// assert_eq!(flip(-3i64), 3);
/// ```
///
/// ```compile_fail
/// use stint_core::prelude::*;
/// use stint_core::traits::SignedIntegral;
///
/// fn only_signed<T: SignedIntegral>(_: T) {}
///
/// only_signed(u16!(5));
/// ```
pub trait SignedIntegral: Integral {}

/// Marker for unsigned integers, strong or native.
pub trait UnsignedIntegral: Integral {}

impl<T: Integral> Arithmetic for T {}

/// The bound satisfied by every native integer a strong integer can wrap.
pub trait NativeInt:
    PrimInt
    + Integral
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseIntError>
    + Send
    + Sync
    + 'static
{
}

/// Returns `true` if `T` is one of the ten strong integer types.
#[inline(always)]
pub const fn is_strong_int<T: TypeTraits + ?Sized>() -> bool {
    T::IS_STRONG_INT
}

/// Returns `true` if `T` is a strong or native integer.
#[inline(always)]
pub const fn is_integral<T: TypeTraits + ?Sized>() -> bool {
    T::IS_INTEGRAL
}

/// Returns `true` if `T` is integral or a floating-point type.
#[inline(always)]
pub const fn is_arithmetic<T: TypeTraits + ?Sized>() -> bool {
    T::IS_ARITHMETIC
}

/// Returns `true` if `T` is signed. Floating-point types count as signed.
#[inline(always)]
pub const fn is_signed<T: TypeTraits + ?Sized>() -> bool {
    T::IS_SIGNED
}

/// Returns `true` if `T` is an unsigned integer.
#[inline(always)]
pub const fn is_unsigned<T: TypeTraits + ?Sized>() -> bool {
    T::IS_UNSIGNED
}

/// Returns `true` if `T` is integral and signed.
#[inline(always)]
pub const fn is_signed_integral<T: TypeTraits + ?Sized>() -> bool {
    T::IS_INTEGRAL && T::IS_SIGNED
}

/// Returns `true` if `T` is integral and unsigned.
#[inline(always)]
pub const fn is_unsigned_integral<T: TypeTraits + ?Sized>() -> bool {
    T::IS_INTEGRAL && T::IS_UNSIGNED
}

macro_rules! impl_native_int_traits {
    ($t:ident) => {
        impl TypeTraits for $t {
            const IS_STRONG_INT: bool = false;
            const IS_INTEGRAL: bool = true;
            const IS_ARITHMETIC: bool = true;
            const IS_SIGNED: bool = <$t>::MIN != 0;
            const IS_UNSIGNED: bool = <$t>::MIN == 0;
        }

        impl Integral for $t {}

        impl NativeInt for $t {}
    };
}

for_each_native_int!(impl_native_int_traits);

impl SignedIntegral for i8 {}
impl SignedIntegral for i16 {}
impl SignedIntegral for i32 {}
impl SignedIntegral for i64 {}
impl SignedIntegral for i128 {}
impl SignedIntegral for isize {}

impl UnsignedIntegral for u8 {}
impl UnsignedIntegral for u16 {}
impl UnsignedIntegral for u32 {}
impl UnsignedIntegral for u64 {}
impl UnsignedIntegral for u128 {}
impl UnsignedIntegral for usize {}

macro_rules! impl_strong_int_traits {
    ($name:ident, $repr:ident) => {
        // Signedness is whatever the representation says.
        impl TypeTraits for $name {
            const IS_STRONG_INT: bool = true;
            const IS_INTEGRAL: bool = true;
            const IS_ARITHMETIC: bool = true;
            const IS_SIGNED: bool = <$repr as TypeTraits>::IS_SIGNED;
            const IS_UNSIGNED: bool = <$repr as TypeTraits>::IS_UNSIGNED;
        }

        impl Integral for $name {}
    };
}

for_each_strong_int!(impl_strong_int_traits);

macro_rules! impl_signed_integral {
    ($name:ident, $repr:ident) => {
        impl SignedIntegral for $name {}
    };
}

macro_rules! impl_unsigned_integral {
    ($name:ident, $repr:ident) => {
        impl UnsignedIntegral for $name {}
    };
}

for_each_signed_strong_int!(impl_signed_integral);
for_each_unsigned_strong_int!(impl_unsigned_integral);

macro_rules! impl_float_traits {
    ($t:ty) => {
        impl TypeTraits for $t {
            const IS_STRONG_INT: bool = false;
            const IS_INTEGRAL: bool = false;
            const IS_ARITHMETIC: bool = true;
            const IS_SIGNED: bool = true;
            const IS_UNSIGNED: bool = false;
        }

        impl Arithmetic for $t {}
    };
}

impl_float_traits!(f32);
impl_float_traits!(f64);

macro_rules! impl_non_numeric_traits {
    ($t:ty) => {
        impl TypeTraits for $t {
            const IS_STRONG_INT: bool = false;
            const IS_INTEGRAL: bool = false;
            const IS_ARITHMETIC: bool = false;
            const IS_SIGNED: bool = false;
            const IS_UNSIGNED: bool = false;
        }
    };
}

impl_non_numeric_traits!(bool);
impl_non_numeric_traits!(char);

#[cfg(test)]
mod tests {
    use super::*;

    fn requires_strong<T: StrongInt>() -> bool {
        true
    }

    fn requires_integral<T: Integral>() -> bool {
        T::IS_INTEGRAL
    }

    fn requires_arithmetic<T: Arithmetic>() -> bool {
        T::IS_ARITHMETIC
    }

    fn requires_signed<T: SignedIntegral>() -> bool {
        T::IS_SIGNED
    }

    fn requires_unsigned<T: UnsignedIntegral>() -> bool {
        T::IS_UNSIGNED
    }

    macro_rules! assert_record {
        ($t:ty, $strong:expr, $integral:expr, $arith:expr, $signed:expr, $unsigned:expr) => {
            assert_eq!(is_strong_int::<$t>(), $strong, "is_strong_int<{}>", stringify!($t));
            assert_eq!(is_integral::<$t>(), $integral, "is_integral<{}>", stringify!($t));
            assert_eq!(is_arithmetic::<$t>(), $arith, "is_arithmetic<{}>", stringify!($t));
            assert_eq!(is_signed::<$t>(), $signed, "is_signed<{}>", stringify!($t));
            assert_eq!(is_unsigned::<$t>(), $unsigned, "is_unsigned<{}>", stringify!($t));
        };
    }

    // Evaluated by the compiler, not at test time.
    const _: () = assert!(is_strong_int::<U8>());
    const _: () = assert!(!is_strong_int::<u8>());
    const _: () = assert!(is_signed_integral::<Isize>());
    const _: () = assert!(is_unsigned_integral::<Usize>());
    const _: () = assert!(!is_signed_integral::<f64>());

    #[test]
    fn test_strong_int_records() {
        assert_record!(U8, true, true, true, false, true);
        assert_record!(U16, true, true, true, false, true);
        assert_record!(U32, true, true, true, false, true);
        assert_record!(U64, true, true, true, false, true);
        assert_record!(Usize, true, true, true, false, true);
        assert_record!(I8, true, true, true, true, false);
        assert_record!(I16, true, true, true, true, false);
        assert_record!(I32, true, true, true, true, false);
        assert_record!(I64, true, true, true, true, false);
        assert_record!(Isize, true, true, true, true, false);
    }

    #[test]
    fn test_native_records() {
        assert_record!(u8, false, true, true, false, true);
        assert_record!(u128, false, true, true, false, true);
        assert_record!(usize, false, true, true, false, true);
        assert_record!(i32, false, true, true, true, false);
        assert_record!(i128, false, true, true, true, false);
        assert_record!(isize, false, true, true, true, false);
        assert_record!(f32, false, false, true, true, false);
        assert_record!(f64, false, false, true, true, false);
        assert_record!(bool, false, false, false, false, false);
        assert_record!(char, false, false, false, false, false);
    }

    #[test]
    fn test_composite_predicates() {
        assert!(is_signed_integral::<I8>());
        assert!(is_signed_integral::<i64>());
        assert!(!is_signed_integral::<U8>());
        assert!(!is_signed_integral::<f32>());
        assert!(is_unsigned_integral::<U64>());
        assert!(is_unsigned_integral::<u16>());
        assert!(!is_unsigned_integral::<I16>());
        assert!(!is_unsigned_integral::<bool>());
    }

    #[test]
    fn test_markers_agree_with_record() {
        assert!(requires_strong::<U32>());
        assert!(requires_strong::<Isize>());

        assert!(requires_integral::<I16>());
        assert!(requires_integral::<u64>());

        assert!(requires_arithmetic::<U8>());
        assert!(requires_arithmetic::<i8>());
        assert!(requires_arithmetic::<f32>());

        assert!(requires_signed::<I64>());
        assert!(requires_signed::<isize>());

        assert!(requires_unsigned::<Usize>());
        assert!(requires_unsigned::<u128>());
    }
}
