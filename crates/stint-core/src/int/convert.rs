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

use super::{I8, I16, I32, I64, Isize, StrongInt, U8, U16, U32, U64, Usize};
use num_traits::AsPrimitive;

macro_rules! impl_conversions {
    ($name:ident, $repr:ident) => {
        impl From<$repr> for $name {
            #[inline(always)]
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $repr {
            #[inline(always)]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl $name {
            /// Converts any native primitive into this type with `as` semantics.
            ///
            /// Wider values are truncated and signed values are reinterpreted,
            /// exactly like `value as R` for the native representation `R`.
            #[inline(always)]
            pub fn from_native<N>(value: N) -> Self
            where
                N: AsPrimitive<$repr>,
            {
                Self(value.as_())
            }

            /// Converts this value into another strong integer with `as` semantics.
            #[inline(always)]
            pub fn cast<T>(self) -> T
            where
                T: StrongInt,
                $repr: AsPrimitive<T::Repr>,
            {
                T::from_repr(self.0.as_())
            }
        }
    };
}

for_each_strong_int!(impl_conversions);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_into_native() {
        let x: U16 = 42u16.into();
        assert_eq!(x, U16::new(42));

        let back: u16 = x.into();
        assert_eq!(back, 42);

        assert_eq!(i64::from(I64::from(-9i64)), -9);
    }

    #[test]
    fn test_from_native_narrows_like_as() {
        assert_eq!(U8::from_native(300u32), U8::new(44));
        assert_eq!(U8::from_native(-1i32), U8::MAX);
        assert_eq!(I8::from_native(200u8), I8::new(-56));
        assert_eq!(I64::from_native(7u8), I64::new(7));
        assert_eq!(Usize::from_native(5i16), Usize::new(5));
        assert_eq!(U32::from_native(u128::MAX), U32::MAX);
    }

    #[test]
    fn test_cast_between_strong_ints() {
        let wide = U32::new(0x1_02);
        assert_eq!(wide.cast::<U8>(), U8::new(0x02));
        assert_eq!(I8::new(-1).cast::<U16>(), U16::MAX);
        assert_eq!(U8::MAX.cast::<I8>(), I8::new(-1));
        assert_eq!(I16::new(-2).cast::<I64>(), I64::new(-2));
        assert_eq!(Usize::new(3).cast::<Isize>(), Isize::new(3));
    }
}
