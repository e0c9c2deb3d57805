//! # GM3D
//!
//! **GM3D** - fixed-dimension vector, matrix and color algebra written in pure Rust.
//!
//! `gm3d` provides the small set of value types that rendering and physics code passes around:
//! two-, three- and four-dimensional vectors and points, 3x3 and 4x4 transformation matrices and
//! RGBA colors.
//! Every type is parametrized by its scalar type, and arithmetic between different scalar types
//! is allowed only when no precision can be lost.
//!
//! ```rust
//! use gm3d::mathcore::prelude::*;
//!
//! let mut model: Matrix4<f32> = Matrix4::identity();
//! model.scale_uniform(2.0).translate(0.0, 1.0, 0.0);
//!
//! let position: Vector4<f32> = Point3::new(1.0, 0.0, 0.0).to_vector().extend(1.0) * model;
//! assert_eq!(position, Vector4::new(2.0, 1.0, 0.0, 1.0));
//! ```
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate approx;
extern crate num_traits;

extern crate paste;
extern crate seq_macro;

// cores
pub mod mathcore;
