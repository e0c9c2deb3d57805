//! Prelude module: `mathcore::prelude` re-exports all `gm3d::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use gm3d::mathcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::mathcore::colors::*;
pub use crate::mathcore::interop::*;
pub use crate::mathcore::matrices::*;
pub use crate::mathcore::points::*;
pub use crate::mathcore::scalars::*;
pub use crate::mathcore::vectors::*;
