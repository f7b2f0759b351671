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

//! # Text Formatting and Parsing
//!
//! Every formatting trait forwards to the native representation, so a
//! strong integer prints exactly like its native value and honours width,
//! fill, sign and alternate flags. `Display` prints `U8` and `I8` as
//! numbers, never as characters, by widening to `usize`/`isize` first.
//!
//! Parsing goes through `FromStr` and the inherent `from_str_radix`. The
//! 8-bit types read through the pointer-sized native and clamp to their own
//! range instead of failing on large magnitudes:
//!
//! - `U8`: values above 255 become 255.
//! - `I8`: values are clamped to `-128..=127`.
//!
//! All other widths use the native parser unchanged.
//!
//! ```rust
//! use stint_core::prelude::*;
//!
//! assert_eq!(format!("{}", u8!(42)), "42");
//! assert_eq!(format!("{:>4}", -i8!(7)), "  -7");
//! assert_eq!(format!("{:#x}", u16!(255)), "0xff");
//!
//! assert_eq!("1000".parse::<U8>(), Ok(u8!(255)));
//! assert_eq!("-1000".parse::<I8>(), Ok(I8::MIN));
//! assert!("1000".parse::<U16>().is_ok());
//! assert!("70000".parse::<U16>().is_err());
//! ```

use crate::int::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

macro_rules! impl_display {
    ($name:ident, $display_as:ty) => {
        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&(self.get() as $display_as), f)
            }
        }

        impl fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.get(), f)
            }
        }
    };
}

impl_display!(U8, usize);
impl_display!(U16, u16);
impl_display!(U32, u32);
impl_display!(U64, u64);
impl_display!(Usize, usize);
impl_display!(I8, isize);
impl_display!(I16, i16);
impl_display!(I32, i32);
impl_display!(I64, i64);
impl_display!(Isize, isize);

macro_rules! impl_forward_fmt {
    ($name:ident, $($fmt_trait:ident),+) => {
        $(
            impl fmt::$fmt_trait for $name {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$fmt_trait::fmt(&self.get(), f)
                }
            }
        )+
    };
}

macro_rules! impl_radix_fmt {
    ($name:ident, $repr:ident) => {
        impl_forward_fmt!($name, Binary, Octal, LowerHex, UpperHex, LowerExp, UpperExp);
    };
}

for_each_strong_int!(impl_radix_fmt);

impl U8 {
    /// Parses a `U8` in the given radix, clamping values above 255.
    ///
    /// The text is read as a `usize`. A value that overflows even `usize`
    /// is clamped as well.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
        let wide = match usize::from_str_radix(src, radix) {
            Ok(wide) => wide,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => usize::MAX,
            Err(err) => return Err(err),
        };
        if wide > u8::MAX as usize {
            tracing::trace!(
                type_name = Self::NAME,
                input = src,
                bound = u8::MAX,
                "clamped parsed value to the upper bound"
            );
            return Ok(Self::MAX);
        }
        Ok(Self::new(wide as u8))
    }
}

impl I8 {
    /// Parses an `I8` in the given radix, clamping to `-128..=127`.
    ///
    /// The text is read as an `isize`. A value that overflows even `isize`
    /// is clamped as well.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `2..=36`.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
        let wide = match isize::from_str_radix(src, radix) {
            Ok(wide) => wide,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => isize::MAX,
                IntErrorKind::NegOverflow => isize::MIN,
                _ => return Err(err),
            },
        };
        if wide > i8::MAX as isize {
            tracing::trace!(
                type_name = Self::NAME,
                input = src,
                bound = i8::MAX,
                "clamped parsed value to the upper bound"
            );
            return Ok(Self::MAX);
        }
        if wide < i8::MIN as isize {
            tracing::trace!(
                type_name = Self::NAME,
                input = src,
                bound = i8::MIN,
                "clamped parsed value to the lower bound"
            );
            return Ok(Self::MIN);
        }
        Ok(Self::new(wide as i8))
    }
}

macro_rules! impl_native_parse {
    ($name:ident, $repr:ident) => {
        impl $name {
            #[doc = concat!("Parses a `", stringify!($name), "` in the given radix with the `", stringify!($repr), "` parser.")]
            ///
            /// # Panics
            ///
            /// Panics if `radix` is not in `2..=36`.
            #[inline]
            pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
                <$repr>::from_str_radix(src, radix).map(Self::new)
            }
        }
    };
}

impl_native_parse!(U16, u16);
impl_native_parse!(U32, u32);
impl_native_parse!(U64, u64);
impl_native_parse!(Usize, usize);
impl_native_parse!(I16, i16);
impl_native_parse!(I32, i32);
impl_native_parse!(I64, i64);
impl_native_parse!(Isize, isize);

macro_rules! impl_from_str {
    ($name:ident, $repr:ident) => {
        impl FromStr for $name {
            type Err = ParseIntError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_str_radix(s, 10)
            }
        }
    };
}

for_each_strong_int!(impl_from_str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_native() {
        assert_eq!(U8::new(42).to_string(), "42");
        assert_eq!(I8::new(-42).to_string(), "-42");
        assert_eq!(U16::new(0).to_string(), "0");
        assert_eq!(I32::new(i32::MIN).to_string(), i32::MIN.to_string());
        assert_eq!(U64::MAX.to_string(), u64::MAX.to_string());
        assert_eq!(Isize::new(-1).to_string(), "-1");
    }

    #[test]
    fn test_eight_bit_types_print_as_numbers() {
        assert_eq!(format!("{}", U8::new(b'A')), "65");
        assert_eq!(format!("{:?}", U8::new(b'A')), "65");
        assert_eq!(format!("{:?}", I8::new(-1)), "-1");
    }

    #[test]
    fn test_debug_hex_flag_uses_native_width() {
        assert_eq!(format!("{:x?}", I8::new(-1)), "ff");
        assert_eq!(format!("{:X?}", U8::new(0xab)), "AB");
        assert_eq!(format!("{:x?}", I16::new(-1)), format!("{:x?}", -1i16));
        assert_eq!(format!("{:?}", I8::MIN), format!("{:?}", i8::MIN));
    }

    #[test]
    fn test_display_honours_flags() {
        assert_eq!(format!("{:5}", U8::new(7)), "    7");
        assert_eq!(format!("{:<5}|", I16::new(-7)), "-7   |");
        assert_eq!(format!("{:+}", I32::new(3)), "+3");
        assert_eq!(format!("{:03}", U32::new(7)), "007");
        assert_eq!(format!("{:*^5}", I8::new(1)), "**1**");
    }

    #[test]
    fn test_radix_formatting_uses_native_width() {
        assert_eq!(format!("{:b}", U8::new(5)), "101");
        assert_eq!(format!("{:x}", I8::new(-1)), "ff");
        assert_eq!(format!("{:X}", I16::new(-1)), "FFFF");
        assert_eq!(format!("{:#o}", U32::new(8)), "0o10");
        assert_eq!(format!("{:#010b}", U8::new(5)), "0b00000101");
        assert_eq!(format!("{:e}", U64::new(1500)), "1.5e3");
        assert_eq!(format!("{:E}", I64::new(-1500)), "-1.5E3");
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!("42".parse::<U8>(), Ok(U8::new(42)));
        assert_eq!("42".parse::<I8>(), Ok(I8::new(42)));
        assert_eq!("42".parse::<U16>(), Ok(U16::new(42)));
        assert_eq!("-42".parse::<I32>(), Ok(I32::new(-42)));
        assert_eq!("42".parse::<U64>(), Ok(U64::new(42)));
        assert_eq!("42".parse::<Usize>(), Ok(Usize::new(42)));
        assert_eq!("-42".parse::<Isize>(), Ok(Isize::new(-42)));

        let x = I64::new(-9_000_000_000);
        assert_eq!(x.to_string().parse::<I64>(), Ok(x));
    }

    #[test]
    fn test_u8_clamps_to_max() {
        assert_eq!("255".parse::<U8>(), Ok(U8::MAX));
        assert_eq!("256".parse::<U8>(), Ok(U8::MAX));
        assert_eq!("1000".parse::<U8>(), Ok(U8::MAX));
        assert_eq!(
            "999999999999999999999999999999".parse::<U8>(),
            Ok(U8::MAX)
        );
    }

    #[test]
    fn test_u8_rejects_negative_and_garbage() {
        assert!("-1".parse::<U8>().is_err());
        assert!("abc".parse::<U8>().is_err());
        assert!("".parse::<U8>().is_err());
    }

    #[test]
    fn test_i8_clamps_both_bounds() {
        assert_eq!("127".parse::<I8>(), Ok(I8::MAX));
        assert_eq!("128".parse::<I8>(), Ok(I8::MAX));
        assert_eq!("-128".parse::<I8>(), Ok(I8::MIN));
        assert_eq!("-129".parse::<I8>(), Ok(I8::MIN));
        assert_eq!(
            "999999999999999999999999999999".parse::<I8>(),
            Ok(I8::MAX)
        );
        assert_eq!(
            "-999999999999999999999999999999".parse::<I8>(),
            Ok(I8::MIN)
        );
        assert!("1.5".parse::<I8>().is_err());
    }

    #[test]
    fn test_wider_types_do_not_clamp() {
        assert_eq!(
            "65536".parse::<U16>().unwrap_err().kind(),
            &IntErrorKind::PosOverflow
        );
        assert_eq!(
            "-32769".parse::<I16>().unwrap_err().kind(),
            &IntErrorKind::NegOverflow
        );
        assert!("-1".parse::<U32>().is_err());
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(U8::from_str_radix("ff", 16), Ok(U8::MAX));
        assert_eq!(U8::from_str_radix("1ff", 16), Ok(U8::MAX));
        assert_eq!(I8::from_str_radix("-80", 16), Ok(I8::MIN));
        assert_eq!(U32::from_str_radix("101", 2), Ok(U32::new(5)));
        assert_eq!(I64::from_str_radix("-z", 36), Ok(I64::new(-35)));
    }

    #[test]
    fn test_text_round_trip_every_type() {
        macro_rules! check {
            ($name:ident, $repr:ident) => {
                assert_eq!($name::new(42).to_string(), "42", "{}", $name::NAME);
                assert_eq!(format!("{:?}", $name::new(42)), "42", "{}", $name::NAME);
                assert_eq!("42".parse::<$name>(), Ok($name::new(42)), "{}", $name::NAME);
                assert_eq!(
                    $name::MAX.to_string().parse::<$name>(),
                    Ok($name::MAX),
                    "{}",
                    $name::NAME
                );
                assert_eq!(
                    $name::MIN.to_string(),
                    <$repr>::MIN.to_string(),
                    "{}",
                    $name::NAME
                );
            };
        }
        for_each_strong_int!(check);
    }

    #[test]
    fn test_negative_round_trip_every_signed_type() {
        macro_rules! check {
            ($name:ident, $repr:ident) => {
                assert_eq!($name::new(-42).to_string(), "-42", "{}", $name::NAME);
                assert_eq!("-42".parse::<$name>(), Ok($name::new(-42)), "{}", $name::NAME);
            };
        }
        for_each_signed_strong_int!(check);
    }
}
