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

//! Type-level mapping between the signed and unsigned integer of one width.

use super::{Integral, SignedIntegral, UnsignedIntegral};
use crate::int::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};

/// Maps an integral type to the signed integral type of the same width.
///
/// Strong integers map to strong integers and native integers map to
/// native integers. Signed types map to themselves.
pub trait MakeSigned: Integral {
    /// The signed counterpart.
    type Output: SignedIntegral;
}

/// Maps an integral type to the unsigned integral type of the same width.
///
/// Strong integers map to strong integers and native integers map to
/// native integers. Unsigned types map to themselves.
pub trait MakeUnsigned: Integral {
    /// The unsigned counterpart.
    type Output: UnsignedIntegral;
}

/// The signed counterpart of `T`.
pub type SignedOf<T> = <T as MakeSigned>::Output;

/// The unsigned counterpart of `T`.
pub type UnsignedOf<T> = <T as MakeUnsigned>::Output;

macro_rules! impl_make {
    ($($unsigned:ty, $signed:ty);* $(;)?) => {
        $(
            impl MakeSigned for $unsigned {
                type Output = $signed;
            }

            impl MakeSigned for $signed {
                type Output = $signed;
            }

            impl MakeUnsigned for $unsigned {
                type Output = $unsigned;
            }

            impl MakeUnsigned for $signed {
                type Output = $unsigned;
            }
        )*
    };
}

impl_make! {
    U8, I8;
    U16, I16;
    U32, I32;
    U64, I64;
    Usize, Isize;
    u8, i8;
    u16, i16;
    u32, i32;
    u64, i64;
    u128, i128;
    usize, isize;
}
