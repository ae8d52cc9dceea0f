// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Linear-algebra and affine-transform kernel for Kestrel.

This crate provides:
- Scalar helpers (`scalar`): trigonometry, named constants and a `const`
  square root that agrees bit-for-bit between compile-time and run-time use.
- Fixed-arity vectors (`Vector2`, `Vector3`, `Vector4`).
- A column-major 4×4 matrix (`Matrix4x4`).
- Composable affine transforms (`Transform`).

Design notes:
- `f32` throughout; equality is exact IEEE-754 equality, never tolerance based.
- Degenerate inputs (zero-length normalization, singular scales, negative
  square roots) surface as NaN/Inf, never as panics or errors.
- Positional indexing is bounds checked; the `try_*` accessors report
  out-of-range indices as [`MathError`].
"]

pub mod error;
pub mod matrix;
pub mod scalar;
pub mod transform;
pub mod vector;

pub use error::MathError;
pub use matrix::Matrix4x4;
pub use scalar::Real;
pub use transform::{HomogeneousPoint, Transform};
pub use vector::{cross, dot, Vector, Vector2, Vector3, Vector4};
