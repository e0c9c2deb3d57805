//! `mathcore::matrices` submodule implements 3x3 and 4x4 matrices which are used to build and
//! apply transformations (scale, translation, rotation, view and projection).
//!
//! Matrices are stored in row-major order (`m[row * N + column]`) and are applied to row vectors,
//! so `vector * matrix` transforms a vector and `a * b` is a transformation that applies `a` first
//! and `b` second.
//! Transformation builders post-multiply the matrix by the elementary transformation in place
//! and return `&mut Self`, so calls can be chained:
//! ```rust
//! # use gm3d::mathcore::{matrices::Matrix4, vectors::{Vector3, Vector4}};
//! let mut matrix: Matrix4<f32> = Matrix4::identity();
//! matrix.scale(2.0, 2.0, 2.0).translate(1.0, 0.0, -1.0);
//! assert_eq!(
//!     Vector4::new(1.0, 1.0, 1.0, 1.0) * matrix,
//!     Vector4::new(3.0, 2.0, 1.0, 1.0)
//! );
//! ```
//!

use crate::mathcore::{
    scalars::{for_each_scalar, for_each_widening, FloatScalar, Promote, Scalar},
    vectors::{Vector3, Vector4},
};
use num_traits::{AsPrimitive, NumCast};
use paste::paste;
use seq_macro::seq;
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// [`impl_matrix`] macro implements functionality that is shared by all square matrices.
///
/// Matrix struct is expected to have `m: [S; LEN]` field where `LEN` is `SIZE * SIZE`
/// and to implement `map` function.
///
macro_rules! impl_matrix {
    ($struct:ident, $vector:ident, $size:literal, $len:literal) => {
        impl<S: Scalar> $struct<S> {
            /// Initializes matrix from array of rows.
            ///
            pub fn from_rows(rows: [[S; $size]; $size]) -> Self {
                let mut m: [S; $len] = [S::zero(); $len];
                for (r, row) in rows.iter().enumerate() {
                    for (c, &value) in row.iter().enumerate() {
                        m[r * $size + c] = value;
                    }
                }
                $struct { m }
            }
            /// Initializes matrix with given value on its main diagonal and zeroes everywhere else.
            ///
            pub fn from_scalar(value: S) -> Self {
                let mut m: [S; $len] = [S::zero(); $len];
                for i in (0..$len).step_by($size + 1) {
                    m[i] = value;
                }
                $struct { m }
            }
            /// Initializes matrix with zeroes.
            ///
            pub fn zero() -> Self {
                $struct { m: [S::zero(); $len] }
            }
            /// Initializes identity matrix.
            ///
            pub fn identity() -> Self {
                Self::from_scalar(S::one())
            }
            /// Resets matrix to identity in place.
            ///
            pub fn set_identity(&mut self) -> &mut Self {
                *self = Self::identity();
                self
            }

            /// Returns flat (row-major) array of matrix elements.
            ///
            pub fn elements(&self) -> [S; $len] {
                self.m
            }
            /// Returns matrix as an array of rows.
            ///
            pub fn as_array(&self) -> [[S; $size]; $size] {
                let mut arr: [[S; $size]; $size] = [[S::zero(); $size]; $size];
                for (r, row) in arr.iter_mut().enumerate() {
                    row.copy_from_slice(&self.m[r * $size..(r + 1) * $size]);
                }
                arr
            }

            /// Transposes matrix in place (flips it over its main diagonal).
            ///
            pub fn transpose(&mut self) -> &mut Self {
                *self = self.transposed();
                self
            }
            /// Returns transpose of matrix.
            ///
            pub fn transposed(&self) -> Self {
                let mut m: [S; $len] = self.m;
                for r in 0..$size {
                    for c in 0..$size {
                        m[c * $size + r] = self.m[r * $size + c];
                    }
                }
                $struct { m }
            }

            /// Transforms row vector by this matrix (`vector * matrix`).
            ///
            pub fn transform_vector(&self, vector: $vector<S>) -> $vector<S> {
                let v: [S; $size] = vector.elements();
                let mut out: [S; $size] = [S::zero(); $size];
                for (c, item) in out.iter_mut().enumerate() {
                    *item = v
                        .iter()
                        .enumerate()
                        .fold(S::zero(), |acc, (r, &a)| acc + a * self.m[r * $size + c]);
                }
                $vector::from(out)
            }

            /// Computes matrix product of two element arrays.
            ///
            /// Both operands are taken by value, so the result never aliases them.
            ///
            fn product(lhs: [S; $len], rhs: [S; $len]) -> [S; $len] {
                let mut m: [S; $len] = [S::zero(); $len];
                for r in 0..$size {
                    for c in 0..$size {
                        m[r * $size + c] = (0..$size).fold(S::zero(), |acc, k| {
                            acc + lhs[r * $size + k] * rhs[k * $size + c]
                        });
                    }
                }
                m
            }

            /// Converts matrix with narrower scalar type into this matrix without loss of precision.
            ///
            /// The same conversion is available through `From`.
            ///
            pub fn widen<U: Scalar>(other: $struct<U>) -> Self
            where
                S: From<U>,
            {
                other.map(<S as From<U>>::from)
            }
            /// Converts matrix with any scalar type into this matrix.
            ///
            /// Returns `None` if any of the elements is not representable in the target scalar type.
            ///
            pub fn narrow_checked<U: Scalar>(other: $struct<U>) -> Option<Self> {
                let mut m: [S; $len] = [S::zero(); $len];
                for (item, &value) in m.iter_mut().zip(other.m.iter()) {
                    *item = <S as NumCast>::from(value)?;
                }
                Some($struct { m })
            }
            /// Converts matrix with any scalar type into this matrix with `as` semantics.
            ///
            pub fn narrow_unchecked<U: Scalar + AsPrimitive<S>>(other: $struct<U>) -> Self {
                other.map(<U as AsPrimitive<S>>::as_)
            }
        }
        impl<S: Promote<U>, U: Scalar> Mul<$struct<U>> for $struct<S> {
            type Output = $struct<<S as Promote<U>>::Output>;

            fn mul(self, rhs: $struct<U>) -> Self::Output {
                let lhs: Self::Output = self.map(<S as Promote<U>>::promote);
                let rhs: Self::Output = rhs.map(<S as Promote<U>>::promote_rhs);
                $struct {
                    m: <$struct<<S as Promote<U>>::Output>>::product(lhs.m, rhs.m),
                }
            }
        }
        impl<S: Scalar + From<U>, U: Scalar> MulAssign<$struct<U>> for $struct<S> {
            fn mul_assign(&mut self, rhs: $struct<U>) {
                self.m = Self::product(self.m, Self::widen(rhs).m);
            }
        }
        impl<S: Scalar> Mul<$struct<S>> for $vector<S> {
            type Output = $vector<S>;

            fn mul(self, rhs: $struct<S>) -> Self::Output {
                rhs.transform_vector(self)
            }
        }
        impl<S: Scalar> From<[S; $len]> for $struct<S> {
            fn from(m: [S; $len]) -> Self {
                $struct { m }
            }
        }
        impl<S: Scalar> From<[[S; $size]; $size]> for $struct<S> {
            fn from(rows: [[S; $size]; $size]) -> Self {
                Self::from_rows(rows)
            }
        }
        impl<S> Index<(usize, usize)> for $struct<S> {
            type Output = S;

            fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
                assert!(
                    row < $size && column < $size,
                    "index out of bounds: `{}` is {}x{} but the index is ({}, {})",
                    stringify!($struct), $size, $size, row, column
                );
                &self.m[row * $size + column]
            }
        }
        impl<S> IndexMut<(usize, usize)> for $struct<S> {
            fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
                assert!(
                    row < $size && column < $size,
                    "index out of bounds: `{}` is {}x{} but the index is ({}, {})",
                    stringify!($struct), $size, $size, row, column
                );
                &mut self.m[row * $size + column]
            }
        }
        impl<S> ::approx::AbsDiffEq for $struct<S>
        where
            S: Scalar + ::approx::AbsDiffEq,
            S::Epsilon: Copy,
        {
            type Epsilon = S::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                S::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.m
                    .iter()
                    .zip(other.m.iter())
                    .all(|(a, b)| S::abs_diff_eq(a, b, epsilon))
            }
        }
        impl<S> ::approx::RelativeEq for $struct<S>
        where
            S: Scalar + ::approx::RelativeEq,
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
                self.m
                    .iter()
                    .zip(other.m.iter())
                    .all(|(a, b)| S::relative_eq(a, b, epsilon, max_relative))
            }
        }
        impl<S> ::approx::UlpsEq for $struct<S>
        where
            S: Scalar + ::approx::UlpsEq,
            S::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                S::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.m
                    .iter()
                    .zip(other.m.iter())
                    .all(|(a, b)| S::ulps_eq(a, b, epsilon, max_ulps))
            }
        }
    };
}

/// [`impl_matrix_accessors`] macro implements named getters and setters (`m01()`, `set_m01()`)
/// of matrix elements.
///
macro_rules! impl_matrix_accessors {
    ($struct:ident, ($($row:literal $column:literal => $index:literal),+ $(,)?)) => {
        paste! {
            impl<S: Scalar> $struct<S> {
                $(
                    #[doc = "Returns element at row " $row " and column " $column "."]
                    #[doc = ""]
                    pub fn [<m $row $column>](&self) -> S {
                        self.m[$index]
                    }
                    #[doc = "Sets element at row " $row " and column " $column "."]
                    #[doc = ""]
                    pub fn [<set_m $row $column>](&mut self, value: S) {
                        self.m[$index] = value;
                    }
                )+
            }
        }
    };
}

/// [`impl_matrix_scalar_operations`] macro implements scaling of matrices by a primitive scalar
/// (`matrix * scalar`, `scalar * matrix` and `matrix *= scalar`).
///
/// It is invoked through `for_each_scalar` macro.
///
macro_rules! impl_matrix_scalar_operations {
    ($struct:ident; $($t:ty),+) => {$(
        impl Mul<$t> for $struct<$t> {
            type Output = Self;

            fn mul(self, rhs: $t) -> Self::Output {
                self.map(|a| a * rhs)
            }
        }
        impl Mul<$struct<$t>> for $t {
            type Output = $struct<$t>;

            fn mul(self, rhs: $struct<$t>) -> Self::Output {
                rhs.map(|b| self * b)
            }
        }
        impl MulAssign<$t> for $struct<$t> {
            fn mul_assign(&mut self, rhs: $t) {
                *self = self.map(|a| a * rhs);
            }
        }
    )+};
}

/// [`impl_matrix_widening`] macro implements `From` for every lossless scalar conversion of matrices.
///
macro_rules! impl_matrix_widening {
    ($narrow:ty => $($wide:ty),+) => {$(
        impl From<Matrix4<$narrow>> for Matrix4<$wide> {
            fn from(value: Matrix4<$narrow>) -> Self {
                Self::widen(value)
            }
        }
        impl From<Matrix3<$narrow>> for Matrix3<$wide> {
            fn from(value: Matrix3<$narrow>) -> Self {
                Self::widen(value)
            }
        }
        impl From<Matrix4<$narrow>> for Matrix3<$wide> {
            fn from(value: Matrix4<$narrow>) -> Self {
                Self::from_matrix4(value)
            }
        }
    )+};
}

/// [`Matrix4`] struct represents 4x4 matrix that is used for affine and projective
/// transformations of homogeneous vectors.
///
/// Any 16 values form a valid matrix; operations that need invertibility
/// expect callers to check [`is_invertible`](Matrix4::is_invertible) first.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Matrix4<S> {
    /// Row-major array of elements (`m[row * 4 + column]`).
    ///
    pub m: [S; 16],
}
impl<S: Scalar> Matrix4<S> {
    /// Initializes matrix from its elements in row-major order.
    ///
    /// # Example
    /// ```rust
    /// # use gm3d::mathcore::matrices::Matrix4;
    /// let matrix: Matrix4<i32> = Matrix4::new(
    ///     1, 0, 0, 0,
    ///     0, 1, 0, 0,
    ///     0, 0, 1, 0,
    ///     0, 0, 0, 1,
    /// );
    /// assert_eq!(matrix, Matrix4::identity());
    /// ```
    ///
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: S, m01: S, m02: S, m03: S,
        m10: S, m11: S, m12: S, m13: S,
        m20: S, m21: S, m22: S, m23: S,
        m30: S, m31: S, m32: S, m33: S,
    ) -> Self {
        Matrix4 {
            m: [
                m00, m01, m02, m03,
                m10, m11, m12, m13,
                m20, m21, m22, m23,
                m30, m31, m32, m33,
            ],
        }
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    /// Resulting scalar type can differ from the initial one.
    ///
    pub fn map<T: Scalar>(self, f: impl Fn(S) -> T) -> Matrix4<T> {
        seq!(I in 0..16 {
            Matrix4 { m: [#(f(self.m[I]),)*] }
        })
    }
    /// Combines two matrices by applying function on their corresponding elements.
    ///
    pub fn combine<U: Scalar, T: Scalar>(
        self,
        other: Matrix4<U>,
        f: impl Fn(S, U) -> T,
    ) -> Matrix4<T> {
        seq!(I in 0..16 {
            Matrix4 { m: [#(f(self.m[I], other.m[I]),)*] }
        })
    }

    /// Returns upper-left 3x3 block of matrix (rotation and scale without translation).
    ///
    pub fn to_matrix3(self) -> Matrix3<S> {
        let m: [S; 16] = self.m;
        Matrix3::new(m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10])
    }

    /// Post-multiplies matrix by a scale.
    ///
    /// Only diagonal elements are scaled, which equals true post-multiplication
    /// as long as upper-left 3x3 block has no off-diagonal (rotation) content.
    ///
    /// # Example
    /// ```rust
    /// # use gm3d::mathcore::matrices::Matrix4;
    /// let mut matrix: Matrix4<f32> = Matrix4::identity();
    /// matrix.scale(2.0, 3.0, 4.0);
    /// assert_eq!((matrix.m00(), matrix.m11(), matrix.m22(), matrix.m33()), (2.0, 3.0, 4.0, 1.0));
    /// ```
    ///
    pub fn scale(&mut self, x: S, y: S, z: S) -> &mut Self {
        self.m[0] = self.m[0] * x;
        self.m[5] = self.m[5] * y;
        self.m[10] = self.m[10] * z;
        self
    }
    /// Post-multiplies matrix by a uniform scale.
    ///
    pub fn scale_uniform(&mut self, value: S) -> &mut Self {
        self.scale(value, value, value)
    }
    /// Post-multiplies matrix by a scale that is given by a vector.
    ///
    pub fn scale_vector(&mut self, vector: Vector3<S>) -> &mut Self {
        self.scale(vector.x, vector.y, vector.z)
    }

    /// Post-multiplies matrix by a translation.
    ///
    /// Translation is weighted by the last column of matrix,
    /// so the result stays correct for matrices with projective content.
    ///
    pub fn translate(&mut self, x: S, y: S, z: S) -> &mut Self {
        let (m03, m13, m23, m33) = (self.m[3], self.m[7], self.m[11], self.m[15]);

        self.m[0] = self.m[0] + m03 * x;
        self.m[4] = self.m[4] + m13 * x;
        self.m[8] = self.m[8] + m23 * x;
        self.m[12] = self.m[12] + m33 * x;

        self.m[1] = self.m[1] + m03 * y;
        self.m[5] = self.m[5] + m13 * y;
        self.m[9] = self.m[9] + m23 * y;
        self.m[13] = self.m[13] + m33 * y;

        self.m[2] = self.m[2] + m03 * z;
        self.m[6] = self.m[6] + m13 * z;
        self.m[10] = self.m[10] + m23 * z;
        self.m[14] = self.m[14] + m33 * z;
        self
    }
    /// Post-multiplies matrix by a translation that is given by a vector.
    ///
    pub fn translate_vector(&mut self, vector: Vector3<S>) -> &mut Self {
        self.translate(vector.x, vector.y, vector.z)
    }

    /// Returns determinant of matrix.
    ///
    /// # Example
    /// ```rust
    /// # use gm3d::mathcore::matrices::Matrix4;
    /// let mut matrix: Matrix4<i64> = Matrix4::identity();
    /// matrix.scale(2, 3, 4);
    /// assert_eq!(matrix.determinant(), 24);
    /// ```
    ///
    pub fn determinant(&self) -> S {
        let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] =
            self.m;

        m30 * m21 * m12 * m03 - m20 * m31 * m12 * m03 - m30 * m11 * m22 * m03
            + m10 * m31 * m22 * m03 + m20 * m11 * m32 * m03 - m10 * m21 * m32 * m03
            - m30 * m21 * m02 * m13 + m20 * m31 * m02 * m13 + m30 * m01 * m22 * m13
            - m00 * m31 * m22 * m13 - m20 * m01 * m32 * m13 + m00 * m21 * m32 * m13
            + m30 * m11 * m02 * m23 - m10 * m31 * m02 * m23 - m30 * m01 * m12 * m23
            + m00 * m31 * m12 * m23 + m10 * m01 * m32 * m23 - m00 * m11 * m32 * m23
            - m20 * m11 * m02 * m33 + m10 * m21 * m02 * m33 + m20 * m01 * m12 * m33
            - m00 * m21 * m12 * m33 - m10 * m01 * m22 * m33 + m00 * m11 * m22 * m33
    }
    /// Returns whether matrix has an inverse (its determinant is not zero).
    ///
    pub fn is_invertible(&self) -> bool {
        self.determinant() != S::zero()
    }

    /// Replaces matrix with its adjugate (transposed cofactor matrix).
    ///
    #[rustfmt::skip]
    pub fn adjoint(&mut self) -> &mut Self {
        let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] =
            self.m;

        self.m = [
            m12 * m23 * m31 - m13 * m22 * m31 + m13 * m21 * m32
                - m11 * m23 * m32 - m12 * m21 * m33 + m11 * m22 * m33,
            m03 * m22 * m31 - m02 * m23 * m31 - m03 * m21 * m32
                + m01 * m23 * m32 + m02 * m21 * m33 - m01 * m22 * m33,
            m02 * m13 * m31 - m03 * m12 * m31 + m03 * m11 * m32
                - m01 * m13 * m32 - m02 * m11 * m33 + m01 * m12 * m33,
            m03 * m12 * m21 - m02 * m13 * m21 - m03 * m11 * m22
                + m01 * m13 * m22 + m02 * m11 * m23 - m01 * m12 * m23,
            m13 * m22 * m30 - m12 * m23 * m30 - m13 * m20 * m32
                + m10 * m23 * m32 + m12 * m20 * m33 - m10 * m22 * m33,
            m02 * m23 * m30 - m03 * m22 * m30 + m03 * m20 * m32
                - m00 * m23 * m32 - m02 * m20 * m33 + m00 * m22 * m33,
            m03 * m12 * m30 - m02 * m13 * m30 - m03 * m10 * m32
                + m00 * m13 * m32 + m02 * m10 * m33 - m00 * m12 * m33,
            m02 * m13 * m20 - m03 * m12 * m20 + m03 * m10 * m22
                - m00 * m13 * m22 - m02 * m10 * m23 + m00 * m12 * m23,
            m11 * m23 * m30 - m13 * m21 * m30 + m13 * m20 * m31
                - m10 * m23 * m31 - m11 * m20 * m33 + m10 * m21 * m33,
            m03 * m21 * m30 - m01 * m23 * m30 - m03 * m20 * m31
                + m00 * m23 * m31 + m01 * m20 * m33 - m00 * m21 * m33,
            m01 * m13 * m30 - m03 * m11 * m30 + m03 * m10 * m31
                - m00 * m13 * m31 - m01 * m10 * m33 + m00 * m11 * m33,
            m03 * m11 * m20 - m01 * m13 * m20 - m03 * m10 * m21
                + m00 * m13 * m21 + m01 * m10 * m23 - m00 * m11 * m23,
            m12 * m21 * m30 - m11 * m22 * m30 - m12 * m20 * m31
                + m10 * m22 * m31 + m11 * m20 * m32 - m10 * m21 * m32,
            m01 * m22 * m30 - m02 * m21 * m30 + m02 * m20 * m31
                - m00 * m22 * m31 - m01 * m20 * m32 + m00 * m21 * m32,
            m02 * m11 * m30 - m01 * m12 * m30 - m02 * m10 * m31
                + m00 * m12 * m31 + m01 * m10 * m32 - m00 * m11 * m32,
            m01 * m12 * m20 - m02 * m11 * m20 + m02 * m10 * m21
                - m00 * m12 * m21 - m01 * m10 * m22 + m00 * m11 * m22,
        ];
        self
    }
}
impl<S: FloatScalar> Matrix4<S> {
    /// Post-multiplies matrix by a rotation of `angle` radians around `axis`.
    ///
    /// `axis` is normalized before use; zero angle leaves matrix untouched.
    ///
    /// # Example
    /// ```rust
    /// # use gm3d::mathcore::{matrices::Matrix4, vectors::{Vector3, Vector4}};
    /// # use approx::assert_abs_diff_eq;
    /// let mut matrix: Matrix4<f64> = Matrix4::identity();
    /// matrix.rotate(std::f64::consts::FRAC_PI_2, Vector3::new(0.0, 0.0, 2.0));
    /// assert_abs_diff_eq!(
    ///     Vector4::new(1.0, 0.0, 0.0, 1.0) * matrix,
    ///     Vector4::new(0.0, 1.0, 0.0, 1.0),
    ///     epsilon = 1e-12
    /// );
    /// ```
    ///
    pub fn rotate(&mut self, angle: S, axis: Vector3<S>) -> &mut Self {
        if angle == S::zero() {
            return self;
        }
        let [m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33] =
            self.m;

        let Vector3 { x, y, z } = axis.to_unit();
        let (s, c): (S, S) = (angle.sin(), angle.cos());
        let t: S = S::one() - c;
        let (xx, xy, yy, yz, zz, zx) = (x * x, x * y, y * y, y * z, z * z, z * x);

        let n00: S = c + t * xx;
        let n01: S = t * xy + s * z;
        let n02: S = t * zx - s * y;
        let n10: S = t * xy - s * z;
        let n11: S = c + t * yy;
        let n12: S = t * yz + s * x;
        let n20: S = t * zx + s * y;
        let n21: S = t * yz - s * x;
        let n22: S = c + t * zz;

        self.m = [
            m00 * n00 + m01 * n10 + m02 * n20,
            m00 * n01 + m01 * n11 + m02 * n21,
            m00 * n02 + m01 * n12 + m02 * n22,
            m03,
            m10 * n00 + m11 * n10 + m12 * n20,
            m10 * n01 + m11 * n11 + m12 * n21,
            m10 * n02 + m11 * n12 + m12 * n22,
            m13,
            m20 * n00 + m21 * n10 + m22 * n20,
            m20 * n01 + m21 * n11 + m22 * n21,
            m20 * n02 + m21 * n12 + m22 * n22,
            m23,
            m30 * n00 + m31 * n10 + m32 * n20,
            m30 * n01 + m31 * n11 + m32 * n21,
            m30 * n02 + m31 * n12 + m32 * n22,
            m33,
        ];
        self
    }

    /// Replaces matrix with perspective projection of given frustum
    /// (right-handed, clip space depth in `[-1; 1]`).
    ///
    /// Infinite `far` plane is supported and produces finite matrix.
    ///
    /// # Example
    /// ```rust
    /// # use gm3d::mathcore::matrices::Matrix4;
    /// let mut matrix: Matrix4<f32> = Matrix4::identity();
    /// matrix.frustum(-1.0, 1.0, -1.0, 1.0, 0.5, f32::INFINITY);
    /// assert_eq!((matrix.m22(), matrix.m32()), (-1.0, -1.0));
    /// ```
    ///
    #[rustfmt::skip]
    pub fn frustum(
        &mut self,
        left: S,
        right: S,
        bottom: S,
        top: S,
        near: S,
        far: S,
    ) -> &mut Self {
        let (zero, one, two): (S, S, S) = (S::zero(), S::one(), S::two());
        let (m22, m32): (S, S) = if far.is_finite() {
            (
                -(far + near) / (far - near),
                -(two * far * near) / (far - near),
            )
        } else {
            (-one, -two * near)
        };

        self.m = [
            two * near / (right - left), zero, zero, zero,
            zero, two * near / (top - bottom), zero, zero,
            (right + left) / (right - left), (top + bottom) / (top - bottom), m22, -one,
            zero, zero, m32, zero,
        ];
        self
    }
    /// Replaces matrix with orthographic projection of given box
    /// (right-handed, clip space depth in `[-1; 1]`).
    ///
    #[rustfmt::skip]
    pub fn orthogonal(
        &mut self,
        left: S,
        right: S,
        bottom: S,
        top: S,
        near: S,
        far: S,
    ) -> &mut Self {
        let (zero, one, two): (S, S, S) = (S::zero(), S::one(), S::two());

        self.m = [
            two / (right - left), zero, zero, zero,
            zero, two / (top - bottom), zero, zero,
            zero, zero, -two / (far - near), zero,
            -(left + right) / (right - left),
            -(top + bottom) / (top - bottom),
            -(far + near) / (far - near),
            one,
        ];
        self
    }
    /// Replaces matrix with perspective projection that is given by vertical field of view
    /// (in radians) and aspect ratio (width / height).
    ///
    pub fn perspective(&mut self, fov: S, aspect: S, near: S, far: S) -> &mut Self {
        let top: S = (fov / S::two()).tan() * near;
        let right: S = aspect * top;
        self.frustum(-right, right, -top, top, near, far)
    }

    /// Replaces matrix with right-handed view matrix of a camera at `eye` looking at `target`.
    ///
    /// `up` must not be parallel to view direction, otherwise matrix is filled with NaNs.
    ///
    /// # Example
    /// ```rust
    /// # use gm3d::mathcore::{matrices::Matrix4, vectors::{Vector3, Vector4}};
    /// let mut view: Matrix4<f32> = Matrix4::identity();
    /// view.look_at(
    ///     Vector3::new(0.0, 0.0, 5.0),
    ///     Vector3::zero(),
    ///     Vector3::new(0.0, 1.0, 0.0),
    /// );
    /// assert_eq!(
    ///     Vector4::new(0.0, 0.0, 0.0, 1.0) * view,
    ///     Vector4::new(0.0, 0.0, -5.0, 1.0)
    /// );
    /// ```
    ///
    pub fn look_at(&mut self, eye: Vector3<S>, target: Vector3<S>, up: Vector3<S>) -> &mut Self {
        self.look_at_components(
            eye.x, eye.y, eye.z, target.x, target.y, target.z, up.x, up.y, up.z,
        )
    }
    /// Replaces matrix with right-handed view matrix; see [`look_at`](Matrix4::look_at).
    ///
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub fn look_at_components(
        &mut self,
        eye_x: S,
        eye_y: S,
        eye_z: S,
        target_x: S,
        target_y: S,
        target_z: S,
        up_x: S,
        up_y: S,
        up_z: S,
    ) -> &mut Self {
        let eye: Vector3<S> = Vector3::new(eye_x, eye_y, eye_z);
        let forward: Vector3<S> = Vector3::new(eye_x - target_x, eye_y - target_y, eye_z - target_z)
            .to_unit();
        let up: Vector3<S> = Vector3::new(up_x, up_y, up_z).to_unit();
        let right: Vector3<S> = up.cross(forward).to_unit();
        let up: Vector3<S> = forward.cross(right);

        let (zero, one): (S, S) = (S::zero(), S::one());
        self.m = [
            right.x, up.x, forward.x, zero,
            right.y, up.y, forward.y, zero,
            right.z, up.z, forward.z, zero,
            -right.dot(eye), -up.dot(eye), -forward.dot(eye), one,
        ];
        self
    }

    /// Inverts matrix in place by scaling its adjugate by `1 / determinant`.
    ///
    /// Singularity is not checked for: inverting a matrix with zero determinant
    /// fills it with infinities and NaNs.
    /// Use [`is_invertible`](Matrix4::is_invertible) or [`try_inverse`](Matrix4::try_inverse)
    /// to guard against that.
    ///
    pub fn inverse(&mut self) -> &mut Self {
        let inverse_determinant: S = S::one() / self.determinant();
        let _ = self.adjoint();
        self.m = self.m.map(|a| a * inverse_determinant);
        self
    }
    /// Returns inverse of matrix or `None` if matrix is singular.
    ///
    /// # Example
    /// ```rust
    /// # use gm3d::mathcore::matrices::Matrix4;
    /// assert_eq!(Matrix4::<f32>::zero().try_inverse(), None);
    /// assert_eq!(Matrix4::<f32>::identity().try_inverse(), Some(Matrix4::identity()));
    /// ```
    ///
    pub fn try_inverse(&self) -> Option<Self> {
        if !self.is_invertible() {
            return None;
        }
        let mut inverse: Self = *self;
        let _ = inverse.inverse();
        Some(inverse)
    }
}
impl_matrix!(Matrix4, Vector4, 4, 16);
impl_matrix_accessors!(Matrix4, (
    0 0 => 0, 0 1 => 1, 0 2 => 2, 0 3 => 3,
    1 0 => 4, 1 1 => 5, 1 2 => 6, 1 3 => 7,
    2 0 => 8, 2 1 => 9, 2 2 => 10, 2 3 => 11,
    3 0 => 12, 3 1 => 13, 3 2 => 14, 3 3 => 15,
));
for_each_scalar!(impl_matrix_scalar_operations!(Matrix4;));

/// [`Matrix3`] struct represents 3x3 matrix (linear part of [`Matrix4`] transformation).
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Matrix3<S> {
    /// Row-major array of elements (`m[row * 3 + column]`).
    ///
    pub m: [S; 9],
}
impl<S: Scalar> Matrix3<S> {
    /// Initializes matrix from its elements in row-major order.
    ///
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: S, m01: S, m02: S,
        m10: S, m11: S, m12: S,
        m20: S, m21: S, m22: S,
    ) -> Self {
        Matrix3 {
            m: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }
    /// Initializes matrix from upper-left 3x3 block of [`Matrix4`]
    /// whose scalar type converts into this one without loss.
    ///
    /// # Example
    /// ```rust
    /// # use gm3d::mathcore::matrices::{Matrix3, Matrix4};
    /// let mut matrix: Matrix4<f32> = Matrix4::identity();
    /// matrix.translate(1.0, 2.0, 3.0);
    /// assert_eq!(Matrix3::<f64>::from_matrix4(matrix), Matrix3::identity());
    /// ```
    ///
    pub fn from_matrix4<U: Scalar>(matrix: Matrix4<U>) -> Self
    where
        S: From<U>,
    {
        Self::widen(matrix.to_matrix3())
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    pub fn map<T: Scalar>(self, f: impl Fn(S) -> T) -> Matrix3<T> {
        seq!(I in 0..9 {
            Matrix3 { m: [#(f(self.m[I]),)*] }
        })
    }
    /// Combines two matrices by applying function on their corresponding elements.
    ///
    pub fn combine<U: Scalar, T: Scalar>(
        self,
        other: Matrix3<U>,
        f: impl Fn(S, U) -> T,
    ) -> Matrix3<T> {
        seq!(I in 0..9 {
            Matrix3 { m: [#(f(self.m[I], other.m[I]),)*] }
        })
    }

    /// Returns determinant of matrix.
    ///
    pub fn determinant(&self) -> S {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = self.m;

        m00 * (m11 * m22 - m12 * m21) - m01 * (m10 * m22 - m12 * m20)
            + m02 * (m10 * m21 - m11 * m20)
    }
}
impl<S: Scalar> From<Matrix4<S>> for Matrix3<S> {
    fn from(matrix: Matrix4<S>) -> Self {
        matrix.to_matrix3()
    }
}
impl_matrix!(Matrix3, Vector3, 3, 9);
impl_matrix_accessors!(Matrix3, (
    0 0 => 0, 0 1 => 1, 0 2 => 2,
    1 0 => 3, 1 1 => 4, 1 2 => 5,
    2 0 => 6, 2 1 => 7, 2 2 => 8,
));
for_each_scalar!(impl_matrix_scalar_operations!(Matrix3;));
for_each_widening!(impl_matrix_widening!());
