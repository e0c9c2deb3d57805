//! `gm3d::mathcore` module is a core that implements all math types of `gm3d`.
//!
//! # Prelude
//! `gm3d::mathcore` prelude can be imported with `use gm3d::mathcore::prelude::*`.
//!
//! # Model
//! Every type is a small `Copy` value with inline storage and no invariants on its content.
//! Vectors represent directions, points represent positions, matrices represent
//! transformations of row vectors and colors represent RGBA values.
//!
//! Degenerate input (normalization of zero vector, inversion of singular matrix, view matrix
//! with `up` parallel to view direction) is not checked for and results in infinities and NaNs
//! according to IEEE 754.
//! Callers that need a guard use [`is_invertible`](matrices::Matrix4::is_invertible) or
//! the `Option`-returning variants (`try_inverse`, `narrow_checked`).
//!

// submodules
pub mod colors;
pub mod interop;
pub mod matrices;
pub mod points;
pub mod scalars;
pub mod vectors;

// prelude
pub mod prelude;
