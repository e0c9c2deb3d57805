//! Algebraic properties of vectors, matrices and colors.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use gm3d::mathcore::prelude::*;
use std::ops::{Add, Neg};

fn additive_inverse<V>(vector: V, zero: V)
where
    V: Copy + Neg<Output = V> + Add<Output = V> + PartialEq + std::fmt::Debug,
{
    assert_eq!(vector + (-vector), zero);
}

fn sample_matrix() -> Matrix4<f64> {
    let mut matrix: Matrix4<f64> = Matrix4::identity();
    let _ = matrix
        .rotate(0.7, Vector3::new(1.0, -2.0, 0.5))
        .scale(1.5, 0.5, 2.0)
        .translate(3.0, -1.0, 4.0);
    matrix.set_m03(0.25);
    matrix
}

#[test]
fn vector_additive_inverse() {
    additive_inverse(Vector2::<i8>::new(-3, 7), Vector2::zero());
    additive_inverse(Vector3::<i32>::new(1, -2, 3), Vector3::zero());
    additive_inverse(Vector4::<i64>::splat(-9), Vector4::zero());
    additive_inverse(Vector2::<f32>::new(0.1, -1e10), Vector2::zero());
    additive_inverse(Vector3::<f64>::new(1e-300, 2.5, -7.0), Vector3::zero());
    additive_inverse(Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0), Vector4::zero());
}

#[test]
fn unit_vectors() {
    let vectors: [Vector3<f64>; 4] = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-3.0, 4.0, 12.0),
        Vector3::new(1e-5, -2e-5, 3e-5),
        Vector3::new(1e5, 1e5, -1e5),
    ];
    for vector in vectors {
        assert_relative_eq!(vector.to_unit().magnitude(), 1.0, max_relative = 1e-12);
    }
    assert_relative_eq!(
        Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0).to_unit().magnitude(),
        1.0,
        max_relative = 1e-6
    );
}

#[test]
fn cross_product() {
    let pairs: [(Vector3<f64>, Vector3<f64>); 3] = [
        (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
        (Vector3::new(2.0, -3.0, 0.5), Vector3::new(-1.0, 4.0, 7.0)),
        (Vector3::new(0.1, 0.2, 0.3), Vector3::new(0.3, 0.2, 0.1)),
    ];
    for (a, b) in pairs {
        assert_eq!(a.cross(b), -b.cross(a));
        assert_abs_diff_eq!(a.dot(a.cross(b)), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn reflection() {
    assert_eq!(
        Vector2::<f32>::new(10.0, -2.0).reflect(Vector2::new(0.0, 1.0)),
        Vector2::new(10.0, 2.0)
    );
}

#[test]
fn mixed_scalar_arithmetic() {
    let sum: Vector3<f64> = Vector3::<f32>::splat(0.0) + Vector3::<f64>::splat(0.0);
    assert_eq!(sum, Vector3::<f64>::zero());

    let scaled: Vector3<f64> = Vector3::<u8>::new(1, 2, 3) * Vector3::<f64>::splat(0.5);
    assert_eq!(scaled, Vector3::new(0.5, 1.0, 1.5));

    let narrowed: Option<Vector3<f32>> = Vector3::narrow_checked(Vector3::<i32>::new(1, 2, 3));
    assert_eq!(narrowed, Some(Vector3::new(1.0, 2.0, 3.0)));
}

#[test]
fn identity_is_neutral() {
    let matrix: Matrix4<f64> = sample_matrix();
    assert_eq!(Matrix4::<f64>::identity() * matrix, matrix);
    assert_eq!(matrix * Matrix4::<f64>::identity(), matrix);
}

#[test]
fn transpose_is_involution() {
    let matrix: Matrix4<f64> = sample_matrix();
    assert_eq!(matrix.transposed().transposed(), matrix);

    let mut copy: Matrix4<f64> = matrix;
    let _ = copy.transpose().transpose();
    assert_eq!(copy, matrix);
}

#[test]
fn inverse_of_invertible_matrix() {
    let matrix: Matrix4<f64> = sample_matrix();
    assert!(matrix.is_invertible());

    let mut inverse: Matrix4<f64> = matrix;
    let _ = inverse.inverse();
    assert_abs_diff_eq!(inverse * matrix, Matrix4::identity(), epsilon = 1e-9);

    let point: Vector4<f64> = Vector4::new(1.0, 2.0, 3.0, 1.0);
    assert_abs_diff_eq!(point * matrix * inverse, point, epsilon = 1e-9);
}

#[test]
fn infinite_frustum_is_finite() {
    let mut projection: Matrix4<f32> = Matrix4::identity();
    let _ = projection.perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, f32::INFINITY);
    assert!(projection.m.iter().all(|element| !element.is_nan()));
    assert_eq!(projection.m[10], -1.0);
    assert_eq!(projection.m[14], -2.0 * 0.1);
}

#[test]
fn color_premultiplication() {
    let opaque: Color<f32> = Color::from(Color::<u8>::new(45, 201, 99, 255));
    assert_abs_diff_eq!(
        opaque,
        Color::new(0.176471, 0.788235, 0.388235, 1.0),
        epsilon = 1e-5
    );

    let half: Color<f32> = Color::from(Color::<u8>::new(45, 201, 99, 128));
    assert_abs_diff_eq!(half.r, opaque.r / 2.0, epsilon = 2e-3);
    assert_abs_diff_eq!(half.g, opaque.g / 2.0, epsilon = 2e-3);
    assert_abs_diff_eq!(half.b, opaque.b / 2.0, epsilon = 2e-3);
    assert_abs_diff_eq!(half.a, 0.5, epsilon = 2e-3);
}

#[test]
fn matrix3_from_integer_matrix4() {
    let identity: Matrix4<i32> = Matrix4::identity();
    assert_eq!(
        Matrix3::<f32>::narrow_checked(identity.to_matrix3()),
        Some(Matrix3::<f32>::identity())
    );
    assert_eq!(Matrix3::<f64>::from(identity), Matrix3::<f64>::identity());
}

#[test]
fn element_access() {
    let mut matrix: Matrix4<f32> = Matrix4::identity();
    *matrix.write_element_idx(12) = 5.0;
    assert_eq!(matrix.m30(), 5.0);

    let mut vector: Vector3<f32> = Vector3::zero();
    assign_vector(&mut vector, &Point3::new(1.0, 2.0, 3.0));
    assert_eq!(vector, Point3::new(1.0, 2.0, 3.0).to_vector());
}
