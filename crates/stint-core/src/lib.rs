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

//! # Stint Core
//!
//! Strongly typed fixed-width integers. Ten distinct types (`U8`, `U16`,
//! `U32`, `U64`, `Usize`, `I8`, `I16`, `I32`, `I64`, `Isize`) each wrap one
//! native integer with zero runtime overhead, while refusing implicit
//! conversions and mixed-type arithmetic at compile time.
//!
//! ## Modules
//!
//! - `int`: The ten types, their operator suite (wrapping arithmetic,
//!   bitwise operations, shifts by any integral amount), conversions and
//!   the sealed `StrongInt` capability trait.
//! - `literals`: Compile-time checked literal constructors, also exported
//!   as macros (`u8!(42)`, `I64!(7)`, `uz!(3)`, ...).
//! - `traits`: The type trait record (`TypeTraits`), predicate functions,
//!   marker traits and the signed/unsigned type mappings.
//! - `num`: Associated-constant traits, unary/step operations (`Pos`,
//!   `Increment`, `Decrement`) and `NumericLimits`.
//! - `fmt`: Formatting-trait forwarding, `FromStr` and `from_str_radix`,
//!   with 8-bit clamping on input.
//! - `io`: Token-oriented text input and output (`TokenReader`,
//!   `TokenWriter`).
//! - `interop` (feature `num-traits-interop`): `num_traits` integer traits
//!   for the strong integers.
//!
//! ## Example
//!
//! ```rust
//! use stint_core::prelude::*;
//!
//! let width = u32!(640);
//! let height = u32!(480);
//! let pixels: U64 = (width * height).cast();
//!
//! assert_eq!(pixels, u64!(307_200));
//! assert_eq!(u8!(200) + u8!(100), u8!(44));
//! assert_eq!("-12".parse::<I16>(), Ok(-i16!(12)));
//! ```

#[macro_use]
mod macros;

pub mod fmt;
pub mod int;
#[cfg(feature = "num-traits-interop")]
pub mod interop;
pub mod io;
pub mod literals;
pub mod num;
pub mod traits;

pub use int::{I8, I16, I32, I64, Isize, ShiftAmount, StrongInt, U8, U16, U32, U64, Usize};
pub use literals::LiteralOverflowError;

/// The ten strong integer types.
pub mod types {
    pub use crate::int::{I8, I16, I32, I64, Isize, U8, U16, U32, U64, Usize};
}

/// Glob-importable set of the types, the operation traits and the literal
/// macros.
///
/// ```rust
/// use stint_core::prelude::*;
///
/// let mut counter = uz!(0);
/// counter.pre_increment();
/// assert_eq!(counter, UZ!(1));
/// ```
pub mod prelude {
    pub use crate::int::{ShiftAmount, StrongInt};
    pub use crate::num::limits::NumericLimits;
    pub use crate::num::ops::{Decrement, Increment, Pos};
    pub use crate::traits::{
        Arithmetic, Integral, MakeSigned, MakeUnsigned, SignedIntegral, TypeTraits,
        UnsignedIntegral,
    };

    // Each of these names a type and, where one exists, its literal macro.
    pub use crate::{I8, I16, I32, I64, U8, U16, U32, U64};
    pub use crate::{Isize, Usize};
    pub use crate::{IZ, UZ, i8, i16, i32, i64, iz, u8, u16, u32, u64, uz};
}
