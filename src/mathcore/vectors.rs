//! `mathcore::vectors` submodule implements two-, three- and four-dimensional vectors which can be
//! used to represent directions, normals, velocities and other things.
//!
//! Vectors are parametrized by their [`Scalar`] type.
//! Arithmetic between vectors of different scalar types is allowed whenever
//! one scalar converts into the other without loss, and the result is the wider type:
//! ```rust
//! # use gm3d::mathcore::vectors::Vector3;
//! let sum: Vector3<f64> = Vector3::<f32>::zero() + Vector3::<f64>::zero();
//! assert_eq!(sum, Vector3::<f64>::zero());
//! ```
//!
//! Conversions follow the same rule: lossless conversions are available through `From`
//! (and [`widen`](Vector3::widen)), while anything else needs an explicit
//! [`narrow_checked`](Vector3::narrow_checked) or [`narrow_unchecked`](Vector3::narrow_unchecked) call.
//!

use crate::mathcore::{
    points::{Point2, Point3},
    scalars::{for_each_scalar, for_each_widening, FloatScalar, Promote, Scalar},
};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

// Vectors and points share their storage layout, accessors and conversions, so all of that
// is handled by a single macro that is also used by `mathcore::points`.
/// [`impl_tuple`] macro implements construction, element access, conversions, negation,
/// indexing and approximate equality on fixed-size tuples (vectors and points).
///
/// Tuple struct is expected to have public fields that are listed in the macro invocation
/// in storage order.
///
macro_rules! impl_tuple {
    ($struct:ident, $size:literal, ($($field:ident, $setter:ident, $index:literal);+ $(;)?)) => {
        impl<S: $crate::mathcore::scalars::Scalar> $struct<S> {
            /// Initializes tuple from its components.
            ///
            pub const fn new($($field: S),+) -> Self {
                $struct { $($field),+ }
            }
            /// Initializes tuple by broadcasting one value to every component.
            ///
            pub fn splat(value: S) -> Self {
                $struct { $($field: value),+ }
            }
            /// Initializes tuple with zeroes.
            ///
            pub fn zero() -> Self {
                Self::splat(S::zero())
            }
            /// Initializes tuple with ones.
            ///
            pub fn one() -> Self {
                Self::splat(S::one())
            }

            /// Returns components as an array.
            ///
            pub fn elements(&self) -> [S; $size] {
                [$(self.$field),+]
            }
            /// Sets components from given array.
            ///
            pub fn set(&mut self, elements: [S; $size]) {
                $(self.$field = elements[$index];)+
            }
            $(
                /// Returns component that is named after this method.
                ///
                pub fn $field(&self) -> S {
                    self.$field
                }
                /// Sets component that is named after this method.
                ///
                pub fn $setter(&mut self, value: S) {
                    self.$field = value;
                }
            )+

            /// Applies function to every component and returns changed tuple.
            ///
            /// Resulting scalar type can differ from the initial one.
            ///
            pub fn map<T: $crate::mathcore::scalars::Scalar>(self, f: impl Fn(S) -> T) -> $struct<T> {
                $struct { $($field: f(self.$field)),+ }
            }
            /// Combines two tuples by applying function on their corresponding components.
            ///
            pub fn combine<U, T>(self, other: $struct<U>, f: impl Fn(S, U) -> T) -> $struct<T>
            where
                U: $crate::mathcore::scalars::Scalar,
                T: $crate::mathcore::scalars::Scalar,
            {
                $struct { $($field: f(self.$field, other.$field)),+ }
            }

            /// Converts tuple with narrower scalar type into this tuple without loss of precision.
            ///
            /// The same conversion is available through `From`.
            ///
            pub fn widen<U: $crate::mathcore::scalars::Scalar>(other: $struct<U>) -> Self
            where
                S: From<U>,
            {
                other.map(<S as From<U>>::from)
            }
            /// Converts tuple with any scalar type into this tuple.
            ///
            /// Returns `None` if any of the components is not representable in the target scalar type.
            ///
            pub fn narrow_checked<U: $crate::mathcore::scalars::Scalar>(other: $struct<U>) -> Option<Self> {
                Some($struct {
                    $($field: <S as ::num_traits::NumCast>::from(other.$field)?),+
                })
            }
            /// Converts tuple with any scalar type into this tuple with `as` semantics
            /// (truncation, saturation and rounding are silent).
            ///
            pub fn narrow_unchecked<U>(other: $struct<U>) -> Self
            where
                U: $crate::mathcore::scalars::Scalar + ::num_traits::AsPrimitive<S>,
            {
                other.map(<U as ::num_traits::AsPrimitive<S>>::as_)
            }
        }
        impl<S> ::std::ops::Neg for $struct<S>
        where
            S: $crate::mathcore::scalars::Scalar + ::std::ops::Neg<Output = S>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl<S: $crate::mathcore::scalars::Scalar> From<[S; $size]> for $struct<S> {
            fn from(arr: [S; $size]) -> Self {
                $struct { $($field: arr[$index]),+ }
            }
        }
        impl<S: $crate::mathcore::scalars::Scalar> From<$struct<S>> for [S; $size] {
            fn from(value: $struct<S>) -> Self {
                value.elements()
            }
        }
        impl<S> ::std::ops::Index<usize> for $struct<S> {
            type Output = S;

            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($index => &self.$field,)+
                    _ => panic!(
                        "index out of bounds: `{}` has {} components but the index is {}",
                        stringify!($struct), $size, index
                    ),
                }
            }
        }
        impl<S> ::std::ops::IndexMut<usize> for $struct<S> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($index => &mut self.$field,)+
                    _ => panic!(
                        "index out of bounds: `{}` has {} components but the index is {}",
                        stringify!($struct), $size, index
                    ),
                }
            }
        }
        impl<S> ::approx::AbsDiffEq for $struct<S>
        where
            S: $crate::mathcore::scalars::Scalar + ::approx::AbsDiffEq,
            S::Epsilon: Copy,
        {
            type Epsilon = S::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                S::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(S::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }
        impl<S> ::approx::RelativeEq for $struct<S>
        where
            S: $crate::mathcore::scalars::Scalar + ::approx::RelativeEq,
            S::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                S::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(S::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }
        impl<S> ::approx::UlpsEq for $struct<S>
        where
            S: $crate::mathcore::scalars::Scalar + ::approx::UlpsEq,
            S::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                S::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                $(S::ulps_eq(&self.$field, &other.$field, epsilon, max_ulps))&&+
            }
        }
    };
}
pub(crate) use impl_tuple;

/// [`impl_tuple_widening`] macro implements `From` for every lossless scalar conversion of tuple.
///
/// It is invoked through `for_each_widening` macro.
///
macro_rules! impl_tuple_widening {
    ($struct:ident; $narrow:ty => $($wide:ty),+) => {$(
        impl From<$struct<$narrow>> for $struct<$wide> {
            fn from(value: $struct<$narrow>) -> Self {
                Self::widen(value)
            }
        }
    )+};
}
pub(crate) use impl_tuple_widening;

/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// This macro depends on [`impl_tuple`] macro.
///
macro_rules! impl_vector {
    ($struct:ident, ($($field:ident),+)) => {
        impl<S: Scalar> $struct<S> {
            /// Performs dot product operation on two vectors.
            ///
            /// Accumulation starts at zero of the scalar type.
            ///
            pub fn dot(self, other: Self) -> S {
                S::zero() $(+ self.$field * other.$field)+
            }
            /// Returns squared magnitude of a vector.
            ///
            /// It is cheaper than [`magnitude`](Self::magnitude) when only comparison of lengths is needed.
            ///
            pub fn magnitude_squared(self) -> S {
                self.dot(self)
            }

            /// Reflects vector from the surface with given normal.
            ///
            /// `normal` is expected to be unit-length; that is not checked, and non-unit normal
            /// results in scaled (non-physical) reflection.
            ///
            pub fn reflect(self, normal: Self) -> Self {
                let factor: S = S::two() * self.dot(normal);
                self.combine(normal, |a, n| a - factor * n)
            }

            /// Multiplies every component by given value.
            ///
            pub fn scale(self, value: S) -> Self {
                self.map(|a| a * value)
            }
            /// Multiplies two vectors component-wise.
            ///
            pub fn component_mul(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }
            /// Divides two vectors component-wise.
            ///
            pub fn component_div(self, other: Self) -> Self {
                self.combine(other, |a, b| a / b)
            }

            /// Returns vector that is made from the largest components of two vectors.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, |a, b| if b > a { b } else { a })
            }
            /// Returns vector that is made from the smallest components of two vectors.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, |a, b| if b < a { b } else { a })
            }
        }
        impl<S: FloatScalar> $struct<S> {
            /// Returns magnitude (length) of vector.
            ///
            pub fn magnitude(self) -> S {
                self.magnitude_squared().sqrt()
            }
            /// Returns vector with the same direction and magnitude of one.
            ///
            /// Zero vector is not checked for: its components turn into NaN.
            ///
            pub fn to_unit(self) -> Self {
                let magnitude: S = self.magnitude();
                self.map(|a| a / magnitude)
            }
        }
        impl_vector!(@vector_vector $struct, (
            (Add, add, +),
            (Sub, sub, -),
            (Mul, mul, *),
            (Div, div, /),
        ));
        impl_vector!(@vector_assign $struct, (
            (AddAssign, add_assign, +),
            (SubAssign, sub_assign, -),
            (MulAssign, mul_assign, *),
            (DivAssign, div_assign, /),
        ));
    };

    (@vector_vector $struct:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl<S: Promote<U>, U: Scalar> $trait<$struct<U>> for $struct<S> {
            type Output = $struct<<S as Promote<U>>::Output>;

            fn $method(self, rhs: $struct<U>) -> Self::Output {
                self.combine(rhs, |a, b| {
                    <S as Promote<U>>::promote(a) $op <S as Promote<U>>::promote_rhs(b)
                })
            }
        }
    )+};

    (@vector_assign $struct:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl<S: Scalar + From<U>, U: Scalar> $trait<$struct<U>> for $struct<S> {
            fn $method(&mut self, rhs: $struct<U>) {
                *self = self.combine(rhs, |a, b| a $op <S as From<U>>::from(b));
            }
        }
    )+};
}

/// [`impl_vector_scalar_operations`] macro implements broadcasting operations between vectors and
/// scalars (`vector + scalar`, `scalar + vector` and `vector += scalar`).
///
/// It is invoked through `for_each_scalar` macro.
///
macro_rules! impl_vector_scalar_operations {
    (@operations $struct:ident, $t:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$t> for $struct<$t> {
            type Output = Self;

            fn $method(self, rhs: $t) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
        impl $trait<$struct<$t>> for $t {
            type Output = $struct<$t>;

            fn $method(self, rhs: $struct<$t>) -> Self::Output {
                rhs.map(|b| self $op b)
            }
        }
    )+};
    (@assign $struct:ident, $t:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$t> for $struct<$t> {
            fn $method(&mut self, rhs: $t) {
                *self = self.map(|a| a $op rhs);
            }
        }
    )+};
    ($struct:ident; $($t:ty),+) => {$(
        impl_vector_scalar_operations!(@operations $struct, $t, (
            (Add, add, +),
            (Sub, sub, -),
            (Mul, mul, *),
            (Div, div, /),
        ));
        impl_vector_scalar_operations!(@assign $struct, $t, (
            (AddAssign, add_assign, +),
            (SubAssign, sub_assign, -),
            (MulAssign, mul_assign, *),
            (DivAssign, div_assign, /),
        ));
    )+};
}

/// [`impl_vector_widening_scalar_operations`] macro implements broadcasting operations between
/// vectors and narrower scalars (`Vector3<f64> * 2.0_f32`, `2_u8 * Vector3<i32>`).
///
/// It is invoked through `for_each_widening` macro.
/// Only vectors of `i32`, `i64`, `f32` and `f64` accept narrower scalars: unsuffixed literals
/// fall back to `i32` and `f64`, so `vector * 2` keeps resolving to the element type of vector.
///
macro_rules! impl_vector_widening_scalar_operations {
    (@filter $struct:ident, $narrow:ident, i32) => {
        impl_vector_widening_scalar_operations!(@pair $struct, $narrow, i32);
    };
    (@filter $struct:ident, $narrow:ident, i64) => {
        impl_vector_widening_scalar_operations!(@pair $struct, $narrow, i64);
    };
    (@filter $struct:ident, $narrow:ident, f32) => {
        impl_vector_widening_scalar_operations!(@pair $struct, $narrow, f32);
    };
    (@filter $struct:ident, $narrow:ident, f64) => {
        impl_vector_widening_scalar_operations!(@pair $struct, $narrow, f64);
    };
    (@filter $struct:ident, $narrow:ident, $wide:ident) => {};
    (@pair $struct:ident, $narrow:ty, $wide:ty) => {
        impl_vector_widening_scalar_operations!(@operations $struct, $narrow, $wide, (
            (Add, add, +),
            (Sub, sub, -),
            (Mul, mul, *),
            (Div, div, /),
        ));
        impl_vector_widening_scalar_operations!(@assign $struct, $narrow, $wide, (
            (AddAssign, add_assign, +),
            (SubAssign, sub_assign, -),
            (MulAssign, mul_assign, *),
            (DivAssign, div_assign, /),
        ));
    };
    (@operations $struct:ident, $narrow:ty, $wide:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$narrow> for $struct<$wide> {
            type Output = Self;

            fn $method(self, rhs: $narrow) -> Self::Output {
                let rhs: $wide = <$wide as From<$narrow>>::from(rhs);
                self.map(|a| a $op rhs)
            }
        }
        impl $trait<$struct<$wide>> for $narrow {
            type Output = $struct<$wide>;

            fn $method(self, rhs: $struct<$wide>) -> Self::Output {
                let lhs: $wide = <$wide as From<$narrow>>::from(self);
                rhs.map(|b| lhs $op b)
            }
        }
    )+};
    (@assign $struct:ident, $narrow:ty, $wide:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$narrow> for $struct<$wide> {
            fn $method(&mut self, rhs: $narrow) {
                let rhs: $wide = <$wide as From<$narrow>>::from(rhs);
                *self = self.map(|a| a $op rhs);
            }
        }
    )+};
    ($struct:ident; $narrow:ident => $($wide:ident),+) => {$(
        impl_vector_widening_scalar_operations!(@filter $struct, $narrow, $wide);
    )+};
}

/// [`Vector2`] struct represents two-dimensional vector.
///
/// # Example
/// ```rust
/// # use gm3d::mathcore::vectors::Vector2;
/// let vector: Vector2<f32> = Vector2::new(10.0, -2.0);
/// assert_eq!(vector.reflect(Vector2::new(0.0, 1.0)), Vector2::new(10.0, 2.0));
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vector2<S> {
    /// X component of vector.
    ///
    pub x: S,

    /// Y component of vector.
    ///
    pub y: S,
}
impl<S: Scalar> Vector2<S> {
    /// Appends third component to this vector.
    ///
    pub fn extend(self, z: S) -> Vector3<S> {
        Vector3::new(self.x, self.y, z)
    }

    /// Reinterprets this vector as a point.
    ///
    pub fn to_point(self) -> Point2<S> {
        Point2::new(self.x, self.y)
    }
}
impl_tuple!(Vector2, 2, (x, set_x, 0; y, set_y, 1));
impl_vector!(Vector2, (x, y));
for_each_widening!(impl_tuple_widening!(Vector2;));
for_each_scalar!(impl_vector_scalar_operations!(Vector2;));
for_each_widening!(impl_vector_widening_scalar_operations!(Vector2;));

/// [`Vector3`] struct represents three-dimensional vector.
///
/// # Example
/// ```rust
/// # use gm3d::mathcore::vectors::Vector3;
/// let x: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
/// let y: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);
/// assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
/// assert_eq!(x.dot(y), 0.0);
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vector3<S> {
    /// X component of vector.
    ///
    pub x: S,

    /// Y component of vector.
    ///
    pub y: S,

    /// Z component of vector.
    ///
    pub z: S,
}
impl<S: Scalar> Vector3<S> {
    /// Performs cross product operation on two vectors.
    ///
    /// Cross product is defined only for three-dimensional vectors.
    ///
    pub fn cross(self, other: Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Appends fourth (homogeneous) component to this vector.
    ///
    pub fn extend(self, w: S) -> Vector4<S> {
        Vector4::new(self.x, self.y, self.z, w)
    }
    /// Drops the last component of this vector.
    ///
    pub fn truncate(self) -> Vector2<S> {
        Vector2::new(self.x, self.y)
    }

    /// Reinterprets this vector as a point.
    ///
    pub fn to_point(self) -> Point3<S> {
        Point3::new(self.x, self.y, self.z)
    }
}
impl_tuple!(Vector3, 3, (x, set_x, 0; y, set_y, 1; z, set_z, 2));
impl_vector!(Vector3, (x, y, z));
for_each_widening!(impl_tuple_widening!(Vector3;));
for_each_scalar!(impl_vector_scalar_operations!(Vector3;));
for_each_widening!(impl_vector_widening_scalar_operations!(Vector3;));

/// [`Vector4`] struct represents four-dimensional (usually homogeneous) vector.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vector4<S> {
    /// X component of vector.
    ///
    pub x: S,

    /// Y component of vector.
    ///
    pub y: S,

    /// Z component of vector.
    ///
    pub z: S,

    /// W (homogeneous) component of vector.
    ///
    pub w: S,
}
impl<S: Scalar> Vector4<S> {
    /// Drops the last component of this vector.
    ///
    pub fn truncate(self) -> Vector3<S> {
        Vector3::new(self.x, self.y, self.z)
    }
}
impl_tuple!(Vector4, 4, (x, set_x, 0; y, set_y, 1; z, set_z, 2; w, set_w, 3));
impl_vector!(Vector4, (x, y, z, w));
for_each_widening!(impl_tuple_widening!(Vector4;));
for_each_scalar!(impl_vector_scalar_operations!(Vector4;));
for_each_widening!(impl_vector_widening_scalar_operations!(Vector4;));

#[cfg(test)]
mod tests {
    use super::{Vector2, Vector3, Vector4};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn construction() {
        let vec1: Vector3<f32> = Vector3::splat(3.5);
        assert_eq!(vec1, Vector3::new(3.5, 3.5, 3.5));
        assert_eq!(Vector3::<f32>::zero(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector4::<i32>::one(), Vector4::new(1, 1, 1, 1));
        assert_ne!(Vector2::<f32>::splat(-0.5), Vector2::new(-0.5, -0.1));

        let vec2: Vector4<u8> = Vector4::from([1, 2, 3, 4]);
        assert_eq!(vec2.elements(), [1, 2, 3, 4]);
        assert_eq!(<[u8; 4]>::from(vec2), [1, 2, 3, 4]);
    }

    #[test]
    fn accessors() {
        let mut vec: Vector4<f64> = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((vec.x(), vec.y(), vec.z(), vec.w()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!((vec[0], vec[1], vec[2], vec[3]), (1.0, 2.0, 3.0, 4.0));

        vec.set_x(-1.0);
        vec.set_w(8.0);
        vec[2] = 5.0;
        assert_eq!(vec, Vector4::new(-1.0, 2.0, 5.0, 8.0));

        vec.set([0.0, 0.5, 1.0, 1.5]);
        assert_eq!(vec.elements(), [0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_bounds() {
        let vec: Vector2<i32> = Vector2::zero();
        let _ = vec[2];
    }

    #[test]
    fn conversions() {
        let widened: Vector3<f64> = Vector3::from(Vector3::<f32>::new(1.5, 2.25, 6.5));
        assert_eq!(widened, Vector3::new(1.5, 2.25, 6.5));
        let widened: Vector3<f32> = Vector3::<i16>::zero().into();
        assert_eq!(widened, Vector3::zero());
        assert_eq!(
            Vector2::<i64>::widen(Vector2::<u32>::new(7, u32::MAX)),
            Vector2::new(7, i64::from(u32::MAX))
        );

        assert_eq!(
            Vector3::<f32>::narrow_checked(Vector3::<i32>::new(1, -2, 3)),
            Some(Vector3::new(1.0, -2.0, 3.0))
        );
        assert_eq!(Vector2::<u8>::narrow_checked(Vector2::<i32>::new(1, 256)), None);
        assert_eq!(Vector2::<u8>::narrow_checked(Vector2::<i32>::new(-1, 0)), None);
        assert_eq!(
            Vector2::<i32>::narrow_unchecked(Vector2::<f64>::new(2.9, -2.9)),
            Vector2::new(2, -2)
        );
    }

    #[test]
    fn vector_operations() {
        let vec1: Vector3<f32> = Vector3::new(3.0, 4.0, 0.0);
        let vec2: Vector3<f32> = Vector3::new(12.0, 12.0, 2.0);

        assert_eq!(vec1 + vec2, Vector3::new(15.0, 16.0, 2.0));
        assert_eq!(vec1 - vec2, Vector3::new(-9.0, -8.0, -2.0));
        assert_eq!(vec1 * vec2, Vector3::new(36.0, 48.0, 0.0));
        assert_eq!(vec2 / Vector3::<f32>::splat(2.0), Vector3::new(6.0, 6.0, 1.0));
        assert_eq!(vec1.component_mul(vec2), vec1 * vec2);
        assert_eq!(vec2.component_div(vec1.max(Vector3::one())), Vector3::new(4.0, 3.0, 2.0));
        assert_eq!(vec1.min(vec2), vec1);
        assert_eq!(-vec1, Vector3::new(-3.0, -4.0, -0.0));
        assert_eq!(vec1 + (-vec1), Vector3::zero());

        let mut vec3: Vector3<f32> = vec1;
        vec3 += vec2;
        assert_eq!(vec3, Vector3::new(15.0, 16.0, 2.0));
        vec3 -= vec2;
        assert_eq!(vec3, vec1);
        vec3 *= Vector3::<f32>::splat(-1.0);
        assert_eq!(vec3, -vec1);
        vec3 /= Vector3::<f32>::new(-1.0, -2.0, 1.0);
        assert_eq!(vec3, Vector3::new(3.0, 2.0, -0.0));
    }

    #[test]
    fn mixed_scalar_operations() {
        let sum: Vector3<f64> = Vector3::<f32>::zero() + Vector3::<f64>::zero();
        assert_eq!(sum, Vector3::<f64>::zero());

        let difference: Vector2<f64> = Vector2::<f64>::new(1.0, 2.0) - Vector2::<f32>::splat(0.5);
        assert_eq!(difference, Vector2::new(0.5, 1.5));

        let product: Vector4<i32> = Vector4::<u8>::splat(3) * Vector4::<i32>::new(1, -1, 2, -2);
        assert_eq!(product, Vector4::new(3, -3, 6, -6));

        let quotient: Vector3<f64> = Vector3::<f32>::zero() / Vector3::<f64>::one();
        assert_eq!(quotient, Vector3::zero());

        let mut vec: Vector3<f64> = Vector3::one();
        vec += Vector3::<f32>::splat(0.5);
        vec *= Vector3::<i32>::new(2, 4, -2);
        assert_eq!(vec, Vector3::new(3.0, 6.0, -3.0));
    }

    #[test]
    fn mixed_scalar_broadcast() {
        let vec: Vector3<f64> = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(vec * 2.0_f32, Vector3::new(2.0, -4.0, 1.0));
        assert_eq!(2.0_f32 * vec, vec * 2.0);
        assert_eq!(vec + 1_i32, Vector3::new(2.0, -1.0, 1.5));
        assert_eq!(1_u8 - vec, Vector3::new(0.0, 3.0, 0.5));
        assert_eq!(vec / 0.5_f32, Vector3::new(2.0, -4.0, 1.0));
        assert_eq!(1_i16 / Vector3::<f64>::splat(4.0), Vector3::splat(0.25));

        let mut vec_f32: Vector2<f32> = Vector2::new(1.5, 3.0);
        vec_f32 *= 2_u8;
        vec_f32 -= 1_i16;
        assert_eq!(vec_f32, Vector2::new(2.0, 5.0));
        assert_eq!(vec_f32 * 2.0, Vector2::new(4.0, 10.0));

        let mut vec_i64: Vector4<i64> = Vector4::<i64>::new(1, 2, 3, 4) * 2;
        vec_i64 += u32::MAX;
        assert_eq!(vec_i64, Vector4::splat(i64::from(u32::MAX) + 2) + Vector4::<i64>::new(0, 2, 4, 6));
        assert_eq!(3_i32 * Vector2::<i32>::new(1, -1), Vector2::new(3, -3));
        assert_eq!(2_u16 * Vector2::<i32>::new(1, -1), Vector2::new(2, -2));
    }

    #[test]
    fn scalar_operations() {
        let vec: Vector2<f32> = Vector2::new(10.0, -2.0);

        assert_eq!(vec + 2.0, Vector2::new(12.0, 0.0));
        assert_eq!(vec - 2.0, Vector2::new(8.0, -4.0));
        assert_eq!(vec * 2.0, Vector2::new(20.0, -4.0));
        assert_eq!(vec / 2.0, Vector2::new(5.0, -1.0));
        assert_eq!(vec.scale(0.5), vec / 2.0);

        assert_eq!(2.0_f32 + vec, Vector2::new(12.0, 0.0));
        assert_eq!(2.0_f32 - vec, Vector2::new(-8.0, 4.0));
        assert_eq!(-1.0_f32 * vec, -vec);
        assert_eq!(20.0_f32 / vec, Vector2::new(2.0, -10.0));

        let mut vec_int: Vector3<u32> = Vector3::new(3, 6, 9);
        vec_int += 1;
        vec_int -= 2;
        vec_int *= 3;
        vec_int /= 2;
        assert_eq!(vec_int, Vector3::new(3, 7, 12));
    }

    #[test]
    fn dot_and_magnitude() {
        assert_eq!(Vector2::<i32>::new(3, 4).dot(Vector2::new(5, 3)), 27);
        assert_eq!(Vector2::<i32>::new(3, 4).magnitude_squared(), 25);
        assert_eq!(Vector2::<f32>::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vector4::<f64>::new(1.0, 1.0, 1.0, 1.0).magnitude(), 2.0);

        let unit: Vector3<f32> = (Vector3::<f32>::new(-10.0, 0.5, 2.0) / 2.0).to_unit();
        assert_relative_eq!(unit.magnitude(), 1.0, max_relative = 1e-6);
        assert_abs_diff_eq!(
            Vector2::<f64>::new(3.0, 4.0).to_unit(),
            Vector2::new(0.6, 0.8),
            epsilon = 1e-12
        );

        let degenerate: Vector3<f32> = Vector3::<f32>::zero().to_unit();
        assert!(degenerate.x.is_nan() && degenerate.y.is_nan() && degenerate.z.is_nan());
    }

    #[test]
    fn reflect() {
        assert_eq!(
            Vector2::<f32>::new(10.0, -2.0).reflect(Vector2::new(0.0, 1.0)),
            Vector2::new(10.0, 2.0)
        );
        assert_eq!(
            Vector3::<f32>::new(10.0, -2.0, 0.0).reflect(Vector3::new(0.0, 1.0, 0.0)),
            Vector3::new(10.0, 2.0, 0.0)
        );
        assert_eq!(
            Vector3::<i32>::new(1, -1, 0).reflect(Vector3::new(0, 1, 0)),
            Vector3::new(1, 1, 0)
        );
    }

    #[test]
    fn cross() {
        let a: Vector3<f64> = Vector3::new(1.5, -2.0, 0.25);
        let b: Vector3<f64> = Vector3::new(-3.0, 0.5, 4.0);

        assert_eq!(a.cross(b), -b.cross(a));
        assert_abs_diff_eq!(a.dot(a.cross(b)), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.dot(a.cross(b)), 0.0, epsilon = 1e-12);
        assert_eq!(
            Vector3::<i32>::new(0, 1, 0).cross(Vector3::new(0, 0, 1)),
            Vector3::new(1, 0, 0)
        );
    }

    #[test]
    fn dimensions() {
        let vec: Vector2<i32> = Vector2::new(1, 2);
        assert_eq!(vec.extend(3), Vector3::new(1, 2, 3));
        assert_eq!(vec.extend(3).extend(4), Vector4::new(1, 2, 3, 4));
        assert_eq!(Vector4::new(1, 2, 3, 4).truncate(), Vector3::new(1, 2, 3));
        assert_eq!(Vector3::new(1, 2, 3).truncate(), vec);
        assert_eq!(vec.to_point().to_vector(), vec);
    }
}
