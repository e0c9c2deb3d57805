//! `mathcore::interop` submodule defines element access traits that let generic linear algebra
//! code read and write `gm3d` types without knowing their concrete layout.
//!
//! Adapters for third-party math libraries are expected to be written on top of
//! [`VecElements`] and [`MatElements`]; `gm3d` itself does not depend on any of them.
//!
//! # Example
//! ```rust
//! # use gm3d::mathcore::{interop::{assign_vector, VecElements}, points::Point3, vectors::Vector3};
//! let mut vector: Vector3<f32> = Vector3::zero();
//! assign_vector(&mut vector, &Point3::new(1.0, 2.0, 3.0));
//! assert_eq!(vector.read_element(2), 3.0);
//! ```
//!

use crate::mathcore::{
    colors::{Channel, Color},
    matrices::{Matrix3, Matrix4},
    points::{Point2, Point3},
    scalars::Scalar,
    vectors::{Vector2, Vector3, Vector4},
};

/// [`VecElements`] trait provides indexed access to elements of vector-like types.
///
/// Indices out of `0..DIM` range cause panic.
///
pub trait VecElements {
    /// Element type.
    ///
    type Scalar: Scalar;
    /// Number of elements.
    ///
    const DIM: usize;

    /// Returns element at given index.
    ///
    fn read_element(&self, index: usize) -> Self::Scalar;
    /// Returns mutable reference to element at given index.
    ///
    fn write_element(&mut self, index: usize) -> &mut Self::Scalar;
}

/// [`MatElements`] trait provides indexed access to elements of matrix-like types.
///
/// Indices out of `0..ROWS` or `0..COLS` range cause panic.
///
pub trait MatElements {
    /// Element type.
    ///
    type Scalar: Scalar;
    /// Number of rows.
    ///
    const ROWS: usize;
    /// Number of columns.
    ///
    const COLS: usize;

    /// Returns element at given row and column.
    ///
    fn read_element(&self, row: usize, column: usize) -> Self::Scalar;
    /// Returns mutable reference to element at given row and column.
    ///
    fn write_element(&mut self, row: usize, column: usize) -> &mut Self::Scalar;

    /// Returns element at given row-major linear index.
    ///
    fn read_element_idx(&self, index: usize) -> Self::Scalar {
        self.read_element(index / Self::COLS, index % Self::COLS)
    }
    /// Returns mutable reference to element at given row-major linear index.
    ///
    fn write_element_idx(&mut self, index: usize) -> &mut Self::Scalar {
        self.write_element(index / Self::COLS, index % Self::COLS)
    }
}

/// [`impl_vec_elements`] macro implements [`VecElements`] for types that implement `Index<usize>`.
///
macro_rules! impl_vec_elements {
    ($($struct:ident => $dim:literal),+ $(,)?) => {$(
        impl<S: Scalar> VecElements for $struct<S> {
            type Scalar = S;
            const DIM: usize = $dim;

            fn read_element(&self, index: usize) -> Self::Scalar {
                self[index]
            }
            fn write_element(&mut self, index: usize) -> &mut Self::Scalar {
                &mut self[index]
            }
        }
    )+};
}
impl_vec_elements!(Vector2 => 2, Vector3 => 3, Vector4 => 4, Point2 => 2, Point3 => 3);

impl<S: Channel> VecElements for Color<S> {
    type Scalar = S;
    const DIM: usize = 4;

    fn read_element(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            3 => self.a,
            _ => panic!("index out of bounds: `Color` has 4 channels but the index is {index}"),
        }
    }
    fn write_element(&mut self, index: usize) -> &mut Self::Scalar {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("index out of bounds: `Color` has 4 channels but the index is {index}"),
        }
    }
}

/// [`impl_mat_elements`] macro implements [`MatElements`] for square matrices.
///
macro_rules! impl_mat_elements {
    ($($struct:ident => $size:literal),+ $(,)?) => {$(
        impl<S: Scalar> MatElements for $struct<S> {
            type Scalar = S;
            const ROWS: usize = $size;
            const COLS: usize = $size;

            fn read_element(&self, row: usize, column: usize) -> Self::Scalar {
                self[(row, column)]
            }
            fn write_element(&mut self, row: usize, column: usize) -> &mut Self::Scalar {
                &mut self[(row, column)]
            }
        }
    )+};
}
impl_mat_elements!(Matrix3 => 3, Matrix4 => 4);

/// Copies elements of one vector-like value into another.
///
/// Only the common prefix of both is copied (`min(A::DIM, B::DIM)` elements).
///
pub fn assign_vector<A, B>(target: &mut A, source: &B)
where
    A: VecElements,
    B: VecElements<Scalar = A::Scalar>,
{
    for i in 0..A::DIM.min(B::DIM) {
        *target.write_element(i) = source.read_element(i);
    }
}

/// Copies elements of one matrix-like value into another.
///
/// Only the common upper-left block of both is copied.
///
/// # Example
/// ```rust
/// # use gm3d::mathcore::{interop::assign_matrix, matrices::{Matrix3, Matrix4}};
/// let mut matrix: Matrix4<i32> = Matrix4::zero();
/// assign_matrix(&mut matrix, &Matrix3::from_scalar(2));
/// assert_eq!((matrix.m11(), matrix.m33()), (2, 0));
/// ```
///
pub fn assign_matrix<A, B>(target: &mut A, source: &B)
where
    A: MatElements,
    B: MatElements<Scalar = A::Scalar>,
{
    for row in 0..A::ROWS.min(B::ROWS) {
        for column in 0..A::COLS.min(B::COLS) {
            *target.write_element(row, column) = source.read_element(row, column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{assign_matrix, assign_vector, MatElements, VecElements};
    use crate::mathcore::{
        colors::Color,
        matrices::{Matrix3, Matrix4},
        points::Point2,
        vectors::{Vector2, Vector4},
    };

    #[test]
    fn vector_elements() {
        let mut vector: Vector4<f64> = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vector4::<f64>::DIM, 4);
        assert_eq!(vector.read_element(3), 4.0);
        *vector.write_element(0) = -1.0;
        assert_eq!(vector.x(), -1.0);

        let mut color: Color<u8> = Color::rgb(1, 2, 3);
        assert_eq!(color.read_element(3), 255);
        *color.write_element(1) = 20;
        assert_eq!(color.g(), 20);

        let mut point: Point2<f64> = Point2::zero();
        assign_vector(&mut point, &vector);
        assert_eq!(point, Point2::new(-1.0, 2.0));

        let mut vector: Vector4<u8> = Vector4::zero();
        assign_vector(&mut vector, &Vector2::new(5, 6));
        assert_eq!(vector, Vector4::new(5, 6, 0, 0));
        assign_vector(&mut vector, &color);
        assert_eq!(vector, Vector4::new(1, 20, 3, 255));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn color_index_out_of_bounds() {
        let color: Color<f32> = Color::splat(0.0);
        let _ = color.read_element(4);
    }

    #[test]
    fn matrix_elements() {
        let mut matrix: Matrix4<i32> = Matrix4::identity();
        assert_eq!((Matrix4::<i32>::ROWS, Matrix4::<i32>::COLS), (4, 4));
        assert_eq!(matrix.read_element(3, 3), 1);
        assert_eq!(matrix.read_element_idx(5), 1);
        assert_eq!(matrix.read_element_idx(6), 0);

        *matrix.write_element(2, 1) = 7;
        *matrix.write_element_idx(14) = 8;
        assert_eq!((matrix.m21(), matrix.m32()), (7, 8));

        let mut small: Matrix3<i32> = Matrix3::zero();
        assign_matrix(&mut small, &matrix);
        assert_eq!(small, Matrix3::new(1, 0, 0, 0, 1, 0, 0, 7, 1));
        assert_eq!(small.read_element_idx(7), 7);
    }
}
