// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Composable affine transforms built from named constructors.
//!
//! Conventions:
//! - Matrices act on column vectors from the left (`M * v`).
//! - Rotations are right-handed: a positive angle about X carries +Y to +Z,
//!   about Y carries +Z to +X, about Z carries +X to +Y.
//! - Translation lives in the last column, so it moves points (`w = 1`) and
//!   leaves directions (`w = 0`) untouched.
//! - [`Transform::transform`] always divides by the resulting `w`. Every
//!   builder here is affine and keeps `w == 1`, so the divide is exact.

use core::ops::Shr;

use crate::{scalar, Matrix4x4, Vector2, Vector3, Vector4};

/// A point type that can be lifted to homogeneous coordinates and back.
pub trait HomogeneousPoint: Copy {
    /// Lifts the point to `w = 1`.
    fn to_homogeneous(self) -> Vector4;

    /// Projects a homogeneous vector back by dividing by `w`.
    fn from_homogeneous(vector: Vector4) -> Self;
}

impl HomogeneousPoint for Vector2 {
    /// `(x, y)` becomes `(x, y, 0, 1)`.
    fn to_homogeneous(self) -> Vector4 {
        Vector4::new(self.x(), self.y(), 0.0, 1.0)
    }

    fn from_homogeneous(vector: Vector4) -> Self {
        Vector2::new(vector.x(), vector.y()) / vector.w()
    }
}

impl HomogeneousPoint for Vector3 {
    fn to_homogeneous(self) -> Vector4 {
        self.extend(1.0)
    }

    fn from_homogeneous(vector: Vector4) -> Self {
        vector.truncate() / vector.w()
    }
}

/// Affine transform wrapping a single [`Matrix4x4`].
///
/// Transforms are immutable; composition returns a new value.
///
/// # Examples
/// ```
/// use kestrel_math::{Transform, Vector3};
/// let move_then_double = Transform::translation(Vector3::new(1.0, 0.0, 0.0))
///     >> Transform::uniform_scale(2.0);
/// assert_eq!(move_then_double.transform(Vector3::new(1.0, 1.0, 1.0)), Vector3::new(4.0, 2.0, 2.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    matrix: Matrix4x4,
}

impl Transform {
    /// Wraps an arbitrary matrix.
    pub const fn new(matrix: Matrix4x4) -> Self {
        Self { matrix }
    }

    /// The underlying matrix, for hand-off to a graphics pipeline.
    pub const fn matrix(&self) -> &Matrix4x4 {
        &self.matrix
    }

    /// The transform that leaves every point in place.
    pub const fn identity() -> Self {
        Self::new(Matrix4x4::identity())
    }

    /// Adds `offset` to points.
    #[rustfmt::skip]
    pub const fn translation(offset: Vector3) -> Self {
        Self::new(Matrix4x4::new(
            1.0, 0.0, 0.0, offset.x(),
            0.0, 1.0, 0.0, offset.y(),
            0.0, 0.0, 1.0, offset.z(),
            0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Scales every axis by `factor`.
    pub const fn uniform_scale(factor: f32) -> Self {
        Self::scale(Vector3::new(factor, factor, factor))
    }

    /// Scales each axis by the matching component of `factors`.
    #[rustfmt::skip]
    pub const fn scale(factors: Vector3) -> Self {
        Self::new(Matrix4x4::new(
            factors.x(), 0.0,         0.0,         0.0,
            0.0,         factors.y(), 0.0,         0.0,
            0.0,         0.0,         factors.z(), 0.0,
            0.0,         0.0,         0.0,         1.0,
        ))
    }

    /// Rotation about the X axis by `angle` radians (+Y towards +Z).
    #[rustfmt::skip]
    pub fn euler_rotation_x(angle: f32) -> Self {
        let (sin, cos) = (scalar::sin(angle), scalar::cos(angle));
        Self::new(Matrix4x4::new(
            1.0, 0.0,  0.0, 0.0,
            0.0, cos, -sin, 0.0,
            0.0, sin,  cos, 0.0,
            0.0, 0.0,  0.0, 1.0,
        ))
    }

    /// Rotation about the Y axis by `angle` radians (+Z towards +X).
    #[rustfmt::skip]
    pub fn euler_rotation_y(angle: f32) -> Self {
        let (sin, cos) = (scalar::sin(angle), scalar::cos(angle));
        Self::new(Matrix4x4::new(
             cos, 0.0, sin, 0.0,
             0.0, 1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
             0.0, 0.0, 0.0, 1.0,
        ))
    }

    /// Rotation about the Z axis by `angle` radians (+X towards +Y).
    #[rustfmt::skip]
    pub fn euler_rotation_z(angle: f32) -> Self {
        let (sin, cos) = (scalar::sin(angle), scalar::cos(angle));
        Self::new(Matrix4x4::new(
            cos, -sin, 0.0, 0.0,
            sin,  cos, 0.0, 0.0,
            0.0,  0.0, 1.0, 0.0,
            0.0,  0.0, 0.0, 1.0,
        ))
    }

    /// Maps the axis-aligned box `[min, max]` onto `[-1, 1]³`.
    ///
    /// A degenerate box (any extent of zero) produces infinite or NaN entries.
    #[rustfmt::skip]
    pub fn orthographic(min: Vector3, max: Vector3) -> Self {
        let extent = max - min;
        let scale = Vector3::new(2.0, 2.0, 2.0) / extent;
        let offset = -(max + min) / extent;
        Self::new(Matrix4x4::new(
            scale.x(), 0.0,       0.0,       offset.x(),
            0.0,       scale.y(), 0.0,       offset.y(),
            0.0,       0.0,       scale.z(), offset.z(),
            0.0,       0.0,       0.0,       1.0,
        ))
    }

    /// Applies the transform to a point and dehomogenizes the result.
    pub fn transform<P: HomogeneousPoint>(&self, point: P) -> P {
        P::from_homogeneous(self.matrix * point.to_homogeneous())
    }

    /// Applies the linear part to a direction (`w = 0`); translation is ignored.
    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        (self.matrix * direction.extend(0.0)).truncate()
    }

    /// Composes so that the result applies `self` first, then `other`.
    ///
    /// The composed matrix is `other.matrix() * self.matrix()`.
    pub fn then(&self, other: &Self) -> Self {
        Self::new(other.matrix.multiply(&self.matrix))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Shr for Transform {
    type Output = Self;

    /// `a >> b` is `a.then(&b)`: apply `a`, then `b`.
    fn shr(self, rhs: Self) -> Self {
        self.then(&rhs)
    }
}

impl From<Matrix4x4> for Transform {
    fn from(matrix: Matrix4x4) -> Self {
        Self::new(matrix)
    }
}
