//! Fixed-size vector and homogeneous matrix algebra with *dimension promotion*.
//!
//! # Motivation
//!
//! Small graphics and geometry code constantly mixes 2-, 3- and 4-dimensional
//! quantities: a screen-space point meets a world-space direction, a planar
//! offset is added to a homogeneous position. Most linear algebra libraries
//! make the caller pad vectors by hand at every such seam. This crate instead
//! defines one *promotion rule* — a lower-dimension vector is widened by
//! zero-filling its missing trailing components — and applies it uniformly, so
//! every elementwise operator, the dot product, the cross product and equality
//! are defined for *all* ordered pairs of dimensions in {2, 3, 4}. The result
//! always has the larger operand's dimension.
//!
//! ```
//! # use linalg4::*;
//! assert_eq!(vec2(1.0, 2.0) + vec3(3.0, 4.0, 5.0), vec3(4.0, 6.0, 5.0));
//! assert!(vec2(1.0, 2.0) == vec3(1.0, 2.0, 0.0));
//! ```
//!
//! On top of the vector layer sits [`Mat4`], a single fixed-size row-major
//! 4x4 homogeneous transform type with the usual graphics constructors
//! (identity, translation, axis rotations, perspective projection, look-at)
//! and a row-vector transform convention (`v * m`).
//!
//! # Goals & Non-Goals
//!
//! - Only dimensions 2 through 4 and 4x4 matrices. Relying on const generics
//!   for the vector storage keeps the API small without opening the door to
//!   dynamically-sized objects.
//! - Be generic over the element type via a handful of local traits rather
//!   than a third-party numeric tower, so the public API has no pre-1.0
//!   dependencies.
//! - Pure value math: every operation returns a new value, nothing is
//!   mutated in place, no operation allocates.
//! - No error type. Numeric edge cases (division by zero, normalizing a
//!   zero-length vector) propagate IEEE non-finite values instead of failing.

pub mod approx;
mod matrix;
mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;
