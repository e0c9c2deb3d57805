//! `mathcore::scalars` submodule defines scalar capabilities that parametrize every vector,
//! point, matrix and color of `gm3d`.
//!
//! [`Scalar`] trait is the arithmetic capability (`+`, `-`, `*`, `/`, `==` and conversion
//! to/from primitives), [`FloatScalar`] refines it with floating point functions
//! (`sqrt`, `sin`, `tan`, ...).
//!
//! [`Promote`] trait encodes the result type of mixed-scalar arithmetic.
//! Two scalars are promoted only when one of them converts into the other without loss
//! (`f32` + `f64` -> `f64`, `u8` + `i32` -> `i32`), so precision is never lost silently.
//! Every other combination has to be converted explicitly with `narrow_checked` or
//! `narrow_unchecked` first.
//!

use num_traits::{Float, Num, NumCast};
use std::fmt::Debug;

/// [`Scalar`] trait represents numeric element type of `gm3d` types.
///
/// It is implemented for all primitive integers up to 64 bits and for both floating point
/// types.
///
/// # Example
/// ```rust
/// # use gm3d::mathcore::scalars::Scalar;
/// fn sum<S: Scalar>(values: &[S]) -> S {
///     values.iter().fold(S::zero(), |acc, &value| acc + value)
/// }
/// assert_eq!(sum(&[1_u8, 2, 3]), 6);
/// assert_eq!(sum(&[0.5_f32, 0.25]), 0.75);
/// ```
///
pub trait Scalar: Copy + Debug + PartialOrd + Num + NumCast + 'static {
    /// Returns `1 + 1` of this scalar type.
    ///
    fn two() -> Self {
        Self::one() + Self::one()
    }
}
/// [`impl_scalar`] macro implements [`Scalar`] trait for primitive types.
///
macro_rules! impl_scalar {
    ($($t:ty),+ $(,)?) => {$(
        impl Scalar for $t {}
    )+};
}
impl_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// [`FloatScalar`] trait represents floating point scalars (`f32` and `f64`).
///
/// Operations that need `sqrt` or trigonometry (magnitude, normalization, rotation,
/// projections) are available only for types that are parametrized by [`FloatScalar`].
///
pub trait FloatScalar: Scalar + Float {}
impl FloatScalar for f32 {}
impl FloatScalar for f64 {}

/// [`Promote`] trait defines result type of arithmetic between two (possibly different) scalars.
///
/// Same-typed arithmetic results in the same type, and a pair of different types results in the
/// wider type of the pair (if such exists).
///
/// # Example
/// ```rust
/// # use gm3d::mathcore::scalars::Promote;
/// let sum: f64 = <f32 as Promote<f64>>::promote(0.5) + <f32 as Promote<f64>>::promote_rhs(0.25);
/// assert_eq!(sum, 0.75);
/// ```
///
pub trait Promote<Rhs: Scalar>: Scalar {
    /// Scalar type that arithmetic of `Self` and `Rhs` results in.
    ///
    type Output: Scalar;

    /// Converts left operand into the result type.
    ///
    fn promote(self) -> <Self as Promote<Rhs>>::Output;
    /// Converts right operand into the result type.
    ///
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}
impl<S: Scalar> Promote<S> for S {
    type Output = S;

    fn promote(self) -> S {
        self
    }
    fn promote_rhs(rhs: S) -> S {
        rhs
    }
}

/// [`for_each_widening`] macro invokes given macro for every lossless scalar conversion.
///
/// Given macro is called as `callback!(args... narrow => wide, wide, ...)`, where
/// every `wide` type implements `From<narrow>`.
///
macro_rules! for_each_widening {
    ($callback:ident!($($args:tt)*)) => {
        $callback!($($args)* i8 => i16, i32, i64, f32, f64);
        $callback!($($args)* i16 => i32, i64, f32, f64);
        $callback!($($args)* i32 => i64, f64);
        $callback!($($args)* u8 => u16, u32, u64, i16, i32, i64, f32, f64);
        $callback!($($args)* u16 => u32, u64, i32, i64, f32, f64);
        $callback!($($args)* u32 => u64, i64, f64);
        $callback!($($args)* f32 => f64);
    };
}
pub(crate) use for_each_widening;

/// [`for_each_scalar`] macro invokes given macro with the list of all primitive scalars.
///
macro_rules! for_each_scalar {
    ($callback:ident!($($args:tt)*)) => {
        $callback!($($args)* i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
    };
}
pub(crate) use for_each_scalar;

/// [`impl_promote`] macro implements [`Promote`] trait in both directions for lossless pairs.
///
macro_rules! impl_promote {
    ($narrow:ty => $($wide:ty),+) => {$(
        impl Promote<$wide> for $narrow {
            type Output = $wide;

            fn promote(self) -> $wide {
                <$wide as From<$narrow>>::from(self)
            }
            fn promote_rhs(rhs: $wide) -> $wide {
                rhs
            }
        }
        impl Promote<$narrow> for $wide {
            type Output = $wide;

            fn promote(self) -> $wide {
                self
            }
            fn promote_rhs(rhs: $narrow) -> $wide {
                <$wide as From<$narrow>>::from(rhs)
            }
        }
    )+};
}
for_each_widening!(impl_promote!());

#[cfg(test)]
mod tests {
    use super::{Promote, Scalar};

    /// Returns value promoted from both sides so the result type is checked by compiler.
    ///
    fn promoted_sum<S: Promote<U>, U: Scalar>(lhs: S, rhs: U) -> <S as Promote<U>>::Output {
        <S as Promote<U>>::promote(lhs) + <S as Promote<U>>::promote_rhs(rhs)
    }

    #[test]
    fn promotion() {
        let same: f32 = promoted_sum(1.5_f32, 2.0_f32);
        assert_eq!(same, 3.5);

        let float: f64 = promoted_sum(0.5_f32, 0.25_f64);
        assert_eq!(float, 0.75);
        let float: f64 = promoted_sum(0.25_f64, 0.5_f32);
        assert_eq!(float, 0.75);

        let integer: i32 = promoted_sum(200_u8, -1_i32);
        assert_eq!(integer, 199);
        let mixed: f64 = promoted_sum(3_i32, 0.5_f64);
        assert_eq!(mixed, 3.5);
        let unsigned: u64 = promoted_sum(u32::MAX, 1_u64);
        assert_eq!(unsigned, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn two() {
        assert_eq!(u8::two(), 2);
        assert_eq!(i64::two(), 2);
        assert_eq!(f32::two(), 2.0);
    }
}
