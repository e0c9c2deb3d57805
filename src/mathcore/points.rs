//! `mathcore::points` submodule implements two- and three-dimensional points.
//!
//! Points describe positions and so, unlike vectors, they do not support arithmetic
//! (except for negation).
//! They share construction, accessors and conversion rules with vectors and
//! can be explicitly reinterpreted as vectors (and back) when arithmetic is needed.
//!

use crate::mathcore::{
    scalars::{for_each_widening, Scalar},
    vectors::{impl_tuple, impl_tuple_widening, Vector2, Vector3},
};

/// [`Point2`] struct represents point on a plane.
///
/// # Example
/// ```rust
/// # use gm3d::mathcore::points::Point2;
/// let point: Point2<i32> = Point2::new(2, -3);
/// assert_eq!(-point, Point2::new(-2, 3));
/// assert_eq!(Point2::<f64>::from(point), Point2::new(2.0, -3.0));
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Point2<S> {
    /// X coordinate of point.
    ///
    pub x: S,

    /// Y coordinate of point.
    ///
    pub y: S,
}
impl<S: Scalar> Point2<S> {
    /// Reinterprets this point as a vector from the origin.
    ///
    pub fn to_vector(self) -> Vector2<S> {
        Vector2::new(self.x, self.y)
    }
}
impl_tuple!(Point2, 2, (x, set_x, 0; y, set_y, 1));
for_each_widening!(impl_tuple_widening!(Point2;));

/// [`Point3`] struct represents point in space.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Point3<S> {
    /// X coordinate of point.
    ///
    pub x: S,

    /// Y coordinate of point.
    ///
    pub y: S,

    /// Z coordinate of point.
    ///
    pub z: S,
}
impl<S: Scalar> Point3<S> {
    /// Reinterprets this point as a vector from the origin.
    ///
    pub fn to_vector(self) -> Vector3<S> {
        Vector3::new(self.x, self.y, self.z)
    }
}
impl_tuple!(Point3, 3, (x, set_x, 0; y, set_y, 1; z, set_z, 2));
for_each_widening!(impl_tuple_widening!(Point3;));

#[cfg(test)]
mod tests {
    use super::{Point2, Point3};
    use crate::mathcore::vectors::Vector3;
    use approx::assert_relative_eq;

    #[test]
    fn construction() {
        assert_eq!(Point3::<u8>::splat(4), Point3::new(4, 4, 4));
        assert_eq!(Point2::<f32>::zero(), Point2::from([0.0, 0.0]));
        assert_eq!(Point3::<i64>::one().elements(), [1, 1, 1]);

        let mut point: Point3<f32> = Point3::default();
        point.set_y(2.0);
        point[2] = -1.0;
        assert_eq!((point.x(), point.y(), point.z()), (0.0, 2.0, -1.0));
    }

    #[test]
    fn conversions() {
        let point: Point3<f64> = Point3::<f32>::new(0.5, 1.5, -2.5).into();
        assert_eq!(point, Point3::new(0.5, 1.5, -2.5));
        assert_eq!(Point2::<u8>::narrow_checked(Point2::<f32>::new(1.0, -1.0)), None);
        assert_eq!(Point2::<u8>::narrow_unchecked(Point2::<f32>::new(1.0, -1.0)), Point2::new(1, 0));
    }

    #[test]
    fn negation_and_equality() {
        let point: Point2<f32> = Point2::new(1.0, -0.25);
        assert_eq!(-(-point), point);
        assert_ne!(-point, point);
        assert_relative_eq!(Point2::new(0.1_f32 + 0.2, 0.0), Point2::new(0.3, 0.0));
    }

    #[test]
    fn reinterpretation() {
        let point: Point3<i32> = Point3::new(1, 2, 3);
        assert_eq!(point.to_vector(), Vector3::new(1, 2, 3));
        assert_eq!((point.to_vector() * 2_i32).to_point(), Point3::new(2, 4, 6));
    }
}
