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

//! Internal helper macros shared by every module that needs to stamp out
//! the same impl block once per strong integer type.

/// Invokes `$mac!(Wrapper, native)` once for each of the ten strong integer
/// types, unsigned types first.
macro_rules! for_each_strong_int {
    ($mac:ident) => {
        $mac!(U8, u8);
        $mac!(U16, u16);
        $mac!(U32, u32);
        $mac!(U64, u64);
        $mac!(Usize, usize);
        $mac!(I8, i8);
        $mac!(I16, i16);
        $mac!(I32, i32);
        $mac!(I64, i64);
        $mac!(Isize, isize);
    };
}

/// Invokes `$mac!(Wrapper, native)` for the five signed strong integers.
macro_rules! for_each_signed_strong_int {
    ($mac:ident) => {
        $mac!(I8, i8);
        $mac!(I16, i16);
        $mac!(I32, i32);
        $mac!(I64, i64);
        $mac!(Isize, isize);
    };
}

/// Invokes `$mac!(Wrapper, native)` for the five unsigned strong integers.
macro_rules! for_each_unsigned_strong_int {
    ($mac:ident) => {
        $mac!(U8, u8);
        $mac!(U16, u16);
        $mac!(U32, u32);
        $mac!(U64, u64);
        $mac!(Usize, usize);
    };
}

/// Invokes `$mac!(native)` for every native integer type, `u128`/`i128` included.
macro_rules! for_each_native_int {
    ($mac:ident) => {
        $mac!(u8);
        $mac!(u16);
        $mac!(u32);
        $mac!(u64);
        $mac!(u128);
        $mac!(usize);
        $mac!(i8);
        $mac!(i16);
        $mac!(i32);
        $mac!(i64);
        $mac!(i128);
        $mac!(isize);
    };
}
